//! # Bit Manipulation Instructions (65C02)
//!
//! - TRB: Test and Reset Bits
//! - TSB: Test and Set Bits
//! - RMB0-7: Reset Memory Bit
//! - SMB0-7: Set Memory Bit
//!
//! TRB and TSB set Z from `A & M` before modifying memory. RMB and SMB
//! affect no flags.

use crate::{Flag, MemoryBus, Operand, CPU};

/// Executes the TRB (Test and Reset Bits) instruction.
///
/// Clears in memory every bit that is set in A.
///
/// Flags affected: Z
pub(crate) fn execute_trb<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.p.set(Flag::ZERO, cpu.a & value == 0);
    let result = value & !cpu.a;
    cpu.write_operand(operand, result);
}

/// Executes the TSB (Test and Set Bits) instruction.
///
/// Sets in memory every bit that is set in A.
///
/// Flags affected: Z
pub(crate) fn execute_tsb<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.p.set(Flag::ZERO, cpu.a & value == 0);
    let result = value | cpu.a;
    cpu.write_operand(operand, result);
}

/// Executes RMBn: clears bit `bit` of a zero-page byte.
pub(crate) fn execute_rmb<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand, bit: u8) {
    let value = cpu.read_operand(operand);
    cpu.write_operand(operand, value & !(1 << bit));
}

/// Executes SMBn: sets bit `bit` of a zero-page byte.
pub(crate) fn execute_smb<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand, bit: u8) {
    let value = cpu.read_operand(operand);
    cpu.write_operand(operand, value | (1 << bit));
}
