//! # Load and Store Instructions
//!
//! Loads (LDA, LDX, LDY) set N and Z from the loaded value. Stores (STA,
//! STX, STY, STZ) affect no flags.

use crate::{MemoryBus, Operand, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Examples
///
/// ```
/// use lib65c02::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
/// memory.write(0x8000, 0xA9); // LDA #$80
/// memory.write(0x8001, 0x80);
///
/// let mut cpu = CPU::new(memory);
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.a(), 0x80);
/// assert!(cpu.flag_n());
/// assert!(!cpu.flag_z());
/// ```
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.a = cpu.read_operand(operand);
    cpu.p.update_zn(cpu.a);
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.x = cpu.read_operand(operand);
    cpu.p.update_zn(cpu.x);
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.y = cpu.read_operand(operand);
    cpu.p.update_zn(cpu.y);
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.a;
    cpu.write_operand(operand, value);
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.x;
    cpu.write_operand(operand, value);
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.y;
    cpu.write_operand(operand, value);
}

/// Executes the STZ (Store Zero) instruction (65C02).
pub(crate) fn execute_stz<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.write_operand(operand, 0);
}
