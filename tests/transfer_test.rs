//! Tests for register transfers and the flag set/clear instructions.

use lib65c02::{Flag, FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

fn run_one(cpu: &mut CPU<FlatMemory>, opcode: u8) {
    let pc = cpu.pc();
    cpu.memory_mut().write(pc, opcode);
    assert_eq!(cpu.step(), Ok(2));
}

// ========== Transfers ==========

#[test]
fn test_tax_sets_flags() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x80);
    run_one(&mut cpu, 0xAA);

    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_tay_zero() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x00);
    cpu.set_y(0x55);
    run_one(&mut cpu, 0xA8);

    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_txa_and_tya() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x12);
    cpu.set_y(0x34);

    run_one(&mut cpu, 0x8A);
    assert_eq!(cpu.a(), 0x12);

    run_one(&mut cpu, 0x98);
    assert_eq!(cpu.a(), 0x34);
}

#[test]
fn test_tsx_reads_stack_pointer() {
    let mut cpu = setup_cpu();
    run_one(&mut cpu, 0xBA);

    assert_eq!(cpu.x(), 0xFD);
    assert!(cpu.flag_n());
}

#[test]
fn test_txs_affects_no_flags() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x00);
    cpu.set_flag_z(false);
    cpu.set_flag_n(true);
    run_one(&mut cpu, 0x9A);

    assert_eq!(cpu.sp(), 0x00);
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
}

// ========== Flags ==========

#[test]
fn test_flag_instructions_touch_one_bit() {
    let cases = [
        (0x38, Flag::CARRY, true),              // SEC
        (0x18, Flag::CARRY, false),             // CLC
        (0x78, Flag::INTERRUPT_DISABLE, true),  // SEI
        (0x58, Flag::INTERRUPT_DISABLE, false), // CLI
        (0xF8, Flag::DECIMAL, true),            // SED
        (0xD8, Flag::DECIMAL, false),           // CLD
        (0xB8, Flag::OVERFLOW, false),          // CLV
    ];

    for (opcode, flag, expected) in cases {
        let mut cpu = setup_cpu();
        cpu.set_status(if expected { 0x00 } else { 0xFF });
        let before = cpu.status();

        run_one(&mut cpu, opcode);

        assert_eq!(cpu.flag(flag), expected, "Opcode 0x{:02X}", opcode);
        assert_eq!(
            cpu.status() & !flag.bits(),
            before & !flag.bits(),
            "Opcode 0x{:02X}",
            opcode
        );
    }
}
