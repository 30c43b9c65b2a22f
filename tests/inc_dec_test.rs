//! Tests for INC, DEC, INX, INY, DEX and DEY.

use lib65c02::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_inx_wraps_to_zero() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xE8); // INX
    cpu.set_x(0xFF);

    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_inx_into_negative() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xE8); // INX
    cpu.set_x(0x7F);

    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0x80);
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
}

#[test]
fn test_iny() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xC8); // INY
    cpu.set_y(0x41);

    cpu.step().unwrap();
    assert_eq!(cpu.y(), 0x42);
}

#[test]
fn test_dex_wraps_to_ff() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xCA); // DEX
    cpu.set_x(0x00);

    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0xFF);
    assert!(cpu.flag_n());
}

#[test]
fn test_dey_to_zero() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x88); // DEY
    cpu.set_y(0x01);

    cpu.step().unwrap();
    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_inc_writes_back_to_memory() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xE6); // INC $10
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x0010, 0x7F);

    assert_eq!(cpu.step(), Ok(5));
    assert_eq!(cpu.memory().read(0x0010), 0x80);
    assert!(cpu.flag_n());
}

#[test]
fn test_dec_absolute_x_fixed_cost() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xDE); // DEC $20FF,X
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.memory_mut().write(0x8002, 0x20);
    cpu.memory_mut().write(0x2100, 0x01);
    cpu.set_x(0x01);

    assert_eq!(cpu.step(), Ok(7));
    assert_eq!(cpu.memory().read(0x2100), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_inc_and_dec_accumulator() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x1A); // INC A
    cpu.memory_mut().write(0x8001, 0x3A); // DEC A
    cpu.memory_mut().write(0x8002, 0x3A); // DEC A
    cpu.set_a(0xFF);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());

    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0xFE);
    assert!(cpu.flag_n());
}

#[test]
fn test_inc_preserves_carry() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xE8); // INX
    cpu.set_x(0xFF);
    cpu.set_flag_c(false);

    cpu.step().unwrap();
    assert!(!cpu.flag_c());
}
