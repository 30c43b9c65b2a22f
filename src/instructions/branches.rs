//! # Branch Instructions
//!
//! This module implements the relative branch operations:
//! - BCC/BCS, BEQ/BNE, BMI/BPL, BVC/BVS: branch on a single flag
//! - BRA: branch always (65C02)
//! - BBR0-7/BBS0-7: branch on a zero-page bit (65C02)
//!
//! The signed offset is relative to the address of the next instruction.
//! Cycle timing varies based on whether the branch is taken and whether a
//! page boundary is crossed:
//! - base cycles if not taken
//! - +1 if taken
//! - +1 more if the target is on a different page than the next instruction

use crate::{Flag, MemoryBus, Operand, CPU};

/// Moves PC by `offset` and charges the taken-branch cycles.
fn take_branch<M: MemoryBus>(cpu: &mut CPU<M>, offset: i8) {
    let next_pc = cpu.pc;
    let target_pc = next_pc.wrapping_add_signed(offset as i16);

    cpu.cycles += 1;
    if (next_pc & 0xFF00) != (target_pc & 0xFF00) {
        cpu.cycles += 1;
    }

    cpu.pc = target_pc;
}

/// Executes a conditional branch that is taken when `flag` equals `expected`.
///
/// No flags are affected.
///
/// # Examples
///
/// ```
/// use lib65c02::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
/// memory.write(0x8000, 0x90); // BCC +$10
/// memory.write(0x8001, 0x10);
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_flag_c(false);
///
/// assert_eq!(cpu.step(), Ok(3));
/// assert_eq!(cpu.pc(), 0x8012);
/// ```
pub(crate) fn execute_branch<M: MemoryBus>(
    cpu: &mut CPU<M>,
    operand: Operand,
    flag: Flag,
    expected: bool,
) {
    if let Operand::Relative(offset) = operand {
        if cpu.p.get(flag) == expected {
            take_branch(cpu, offset);
        }
    }
}

/// Executes the BRA (Branch Always) instruction.
pub(crate) fn execute_bra<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    if let Operand::Relative(offset) = operand {
        take_branch(cpu, offset);
    }
}

/// Executes BBRn (Branch on Bit Reset).
///
/// Tests bit `bit` of the zero-page byte and branches if it is clear.
pub(crate) fn execute_bbr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand, bit: u8) {
    branch_on_bit(cpu, operand, bit, false);
}

/// Executes BBSn (Branch on Bit Set).
///
/// Tests bit `bit` of the zero-page byte and branches if it is set.
pub(crate) fn execute_bbs<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand, bit: u8) {
    branch_on_bit(cpu, operand, bit, true);
}

fn branch_on_bit<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand, bit: u8, expected: bool) {
    if let Operand::ZeroPageRelative { offset, .. } = operand {
        let value = cpu.read_operand(operand);
        if (value & (1 << bit) != 0) == expected {
            take_branch(cpu, offset);
        }
    }
}
