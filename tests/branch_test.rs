//! Tests for the relative branch instructions.
//!
//! Tests cover:
//! - Every flag condition, taken and not taken
//! - Forward and backward (signed) displacements
//! - Cycle timing with and without page crossing
//! - BRA, BBR and BBS

use lib65c02::{Flag, FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

fn branch(opcode: u8, offset: u8, flag: Flag, value: bool) -> (CPU<FlatMemory>, u8) {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, opcode);
    cpu.memory_mut().write(0x8001, offset);
    cpu.set_flag(flag, value);
    let cycles = cpu.step().unwrap();
    (cpu, cycles)
}

#[test]
fn test_every_condition() {
    let cases = [
        (0x10, Flag::NEGATIVE, false), // BPL
        (0x30, Flag::NEGATIVE, true),  // BMI
        (0x50, Flag::OVERFLOW, false), // BVC
        (0x70, Flag::OVERFLOW, true),  // BVS
        (0x90, Flag::CARRY, false),    // BCC
        (0xB0, Flag::CARRY, true),     // BCS
        (0xD0, Flag::ZERO, false),     // BNE
        (0xF0, Flag::ZERO, true),      // BEQ
    ];

    for (opcode, flag, taken_when) in cases {
        let (cpu, cycles) = branch(opcode, 0x10, flag, taken_when);
        assert_eq!(cpu.pc(), 0x8012, "Opcode 0x{:02X} taken", opcode);
        assert_eq!(cycles, 3, "Opcode 0x{:02X} taken", opcode);

        let (cpu, cycles) = branch(opcode, 0x10, flag, !taken_when);
        assert_eq!(cpu.pc(), 0x8002, "Opcode 0x{:02X} not taken", opcode);
        assert_eq!(cycles, 2, "Opcode 0x{:02X} not taken", opcode);
    }
}

#[test]
fn test_beq_backward_displacement() {
    // 0xFE is -2: back to the branch itself
    let (cpu, _) = branch(0xF0, 0xFE, Flag::ZERO, true);
    assert_eq!(cpu.pc(), 0x8000);
}

#[test]
fn test_branch_to_previous_page() {
    let (cpu, cycles) = branch(0xF0, 0x80, Flag::ZERO, true);
    assert_eq!(cpu.pc(), 0x7F82);
    assert_eq!(cycles, 4);
}

#[test]
fn test_branch_to_next_page() {
    let mut cpu = setup_cpu();
    cpu.set_pc(0x80F0);
    cpu.memory_mut().write(0x80F0, 0x80); // BRA +$20
    cpu.memory_mut().write(0x80F1, 0x20);

    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.pc(), 0x8112);
}

#[test]
fn test_page_cross_measured_from_next_instruction() {
    // Branch at $80FE: next instruction at $8100, target $8101 is on the same page
    let mut cpu = setup_cpu();
    cpu.set_pc(0x80FE);
    cpu.memory_mut().write(0x80FE, 0x80);
    cpu.memory_mut().write(0x80FF, 0x01);

    assert_eq!(cpu.step(), Ok(3));
    assert_eq!(cpu.pc(), 0x8101);
}

#[test]
fn test_bra_always_taken() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x80);
    cpu.memory_mut().write(0x8001, 0x05);
    cpu.set_status(0xFF);

    assert_eq!(cpu.step(), Ok(3));
    assert_eq!(cpu.pc(), 0x8007);
}

#[test]
fn test_branch_affects_no_flags() {
    let (cpu, _) = branch(0xD0, 0x10, Flag::ZERO, false);
    assert_eq!(cpu.status(), 0x24);
}

#[test]
fn test_bbr_taken_when_bit_clear() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x3F); // BBR3 $10,+$04
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x8002, 0x04);
    cpu.memory_mut().write(0x0010, 0xF7);

    assert_eq!(cpu.step(), Ok(6));
    assert_eq!(cpu.pc(), 0x8007);
}

#[test]
fn test_bbr_not_taken_when_bit_set() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x3F); // BBR3 $10,+$04
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x8002, 0x04);
    cpu.memory_mut().write(0x0010, 0x08);

    assert_eq!(cpu.step(), Ok(5));
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_bbs_backward() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xFF); // BBS7 $20,-$03
    cpu.memory_mut().write(0x8001, 0x20);
    cpu.memory_mut().write(0x8002, 0xFD);
    cpu.memory_mut().write(0x0020, 0x80);

    assert_eq!(cpu.step(), Ok(6));
    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.memory().read(0x0020), 0x80);
}
