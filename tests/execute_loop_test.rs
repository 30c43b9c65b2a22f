//! Tests for the fetch-decode-execute loop and cycle accounting.

use lib65c02::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

fn load(cpu: &mut CPU<FlatMemory>, addr: u16, bytes: &[u8]) {
    for (i, &byte) in bytes.iter().enumerate() {
        cpu.memory_mut().write(addr.wrapping_add(i as u16), byte);
    }
}

#[test]
fn test_step_advances_pc_by_instruction_size() {
    let mut cpu = setup_cpu();
    load(
        &mut cpu,
        0x8000,
        &[
            0xEA, // NOP
            0xA9, 0x01, // LDA #$01
            0xAD, 0x00, 0x20, // LDA $2000
        ],
    );

    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x8001);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x8003);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x8006);
}

#[test]
fn test_cycle_counter_accumulates() {
    let mut cpu = setup_cpu();
    load(&mut cpu, 0x8000, &[0xEA, 0xA5, 0x10, 0xAD, 0x00, 0x20]);

    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.step(), Ok(3));
    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.cycles(), 9);
}

#[test]
fn test_page_cross_penalty_on_indexed_read() {
    let mut cpu = setup_cpu();
    load(&mut cpu, 0x8000, &[0xBD, 0xFF, 0x20]); // LDA $20FF,X
    cpu.memory_mut().write(0x2100, 0x99);
    cpu.set_x(0x01);

    assert_eq!(cpu.step(), Ok(5));
    assert_eq!(cpu.a(), 0x99);
}

#[test]
fn test_no_page_cross_penalty_within_page() {
    let mut cpu = setup_cpu();
    load(&mut cpu, 0x8000, &[0xBD, 0x00, 0x20]); // LDA $2000,X
    cpu.set_x(0x10);

    assert_eq!(cpu.step(), Ok(4));
}

#[test]
fn test_indexed_store_has_fixed_cost() {
    let mut cpu = setup_cpu();
    load(&mut cpu, 0x8000, &[0x9D, 0xFF, 0x20]); // STA $20FF,X
    cpu.set_x(0x01);
    cpu.set_a(0x42);

    assert_eq!(cpu.step(), Ok(5));
    assert_eq!(cpu.memory().read(0x2100), 0x42);
}

#[test]
fn test_indirect_y_page_cross_penalty() {
    let mut cpu = setup_cpu();
    load(&mut cpu, 0x8000, &[0xB1, 0x40]); // LDA ($40),Y
    cpu.memory_mut().write(0x0040, 0xF0);
    cpu.memory_mut().write(0x0041, 0x30);
    cpu.memory_mut().write(0x3110, 0x5A);
    cpu.set_y(0x20);

    assert_eq!(cpu.step(), Ok(6));
    assert_eq!(cpu.a(), 0x5A);
}

#[test]
fn test_shift_absolute_x_page_cross_penalty() {
    let mut cpu = setup_cpu();
    load(&mut cpu, 0x8000, &[0x1E, 0xFF, 0x20]); // ASL $20FF,X
    cpu.memory_mut().write(0x2100, 0x01);
    cpu.set_x(0x01);

    assert_eq!(cpu.step(), Ok(7));
    assert_eq!(cpu.memory().read(0x2100), 0x02);
}

#[test]
fn test_pc_wraps_at_top_of_memory() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0xFFFF, 0xEA);
    cpu.set_pc(0xFFFF);

    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0000);
}

#[test]
fn test_run_for_cycles_may_overshoot() {
    let mut cpu = setup_cpu();
    load(&mut cpu, 0x8000, &[0xAD, 0x00, 0x20, 0xAD, 0x00, 0x20]);

    // Two 4-cycle loads against a 5-cycle budget
    assert_eq!(cpu.run_for_cycles(5), Ok(8));
    assert_eq!(cpu.pc(), 0x8006);
}

#[test]
fn test_counting_loop() {
    let mut cpu = setup_cpu();
    load(
        &mut cpu,
        0x8000,
        &[
            0xA2, 0x05, // LDX #$05
            0xCA, // loop: DEX
            0xD0, 0xFD, // BNE loop
            0xDB, // STP
        ],
    );

    while cpu.step().is_ok() {}

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
    // LDX 2 + 5 * DEX 2 + 4 taken BNE 3 + final BNE 2 + STP 3
    assert_eq!(cpu.cycles(), 2 + 10 + 12 + 2 + 3);
}
