//! Tests for CMP, CPX and CPY.

use lib65c02::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

fn compare(opcode: u8, register: u8, operand: u8) -> CPU<FlatMemory> {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, opcode);
    cpu.memory_mut().write(0x8001, operand);
    cpu.set_a(register);
    cpu.set_x(register);
    cpu.set_y(register);
    cpu.step().unwrap();
    cpu
}

#[test]
fn test_cmp_equal() {
    let cpu = compare(0xC9, 0x42, 0x42);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_cmp_greater() {
    let cpu = compare(0xC9, 0x50, 0x30);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_cmp_less() {
    let cpu = compare(0xC9, 0x30, 0x50);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    // 0x30 - 0x50 = 0xE0
    assert!(cpu.flag_n());
}

#[test]
fn test_cmp_negative_from_truncated_difference() {
    // Unsigned greater, but the 8-bit difference has bit 7 set
    let cpu = compare(0xC9, 0xFF, 0x01);
    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_cpx_immediate() {
    let cpu = compare(0xE0, 0x10, 0x10);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_cpy_immediate() {
    let cpu = compare(0xC0, 0x00, 0x01);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
}

#[test]
fn test_compare_leaves_registers_and_overflow() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xCD); // CMP $2000
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x20);
    cpu.memory_mut().write(0x2000, 0x80);
    cpu.set_a(0x7F);
    cpu.set_flag_v(true);

    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.a(), 0x7F);
    assert!(cpu.flag_v());
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_cpx_zero_page() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xE4); // CPX $10
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x0010, 0x05);
    cpu.set_x(0x06);

    assert_eq!(cpu.step(), Ok(3));
    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
}
