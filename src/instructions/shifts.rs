//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL and ROR operate on the accumulator or on memory
//! (read-modify-write). The bit shifted out lands in C; N and Z follow the
//! result.

use crate::{Flag, MemoryBus, Operand, CPU};

fn write_result<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand, result: u8, carry: bool) {
    cpu.write_operand(operand, result);
    cpu.p.set(Flag::CARRY, carry);
    cpu.p.update_zn(result);
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    write_result(cpu, operand, value << 1, value & 0x80 != 0);
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// N is always cleared since bit 7 becomes 0.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    write_result(cpu, operand, value >> 1, value & 0x01 != 0);
}

/// Executes the ROL (Rotate Left) instruction.
///
/// The old carry enters at bit 0.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let carry_in = cpu.p.get(Flag::CARRY) as u8;
    write_result(cpu, operand, (value << 1) | carry_in, value & 0x80 != 0);
}

/// Executes the ROR (Rotate Right) instruction.
///
/// The old carry enters at bit 7.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let carry_in = (cpu.p.get(Flag::CARRY) as u8) << 7;
    write_result(cpu, operand, (value >> 1) | carry_in, value & 0x01 != 0);
}
