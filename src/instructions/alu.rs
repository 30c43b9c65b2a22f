//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic into the accumulator
//! - CMP, CPX, CPY: Register/memory comparison
//! - BIT: Test bits against the accumulator
//!
//! With the Decimal flag set, ADC and SBC operate on packed BCD. As on the
//! 65C02, N and Z then describe the decimal result and the instruction takes
//! one extra cycle.

use crate::{Flag, MemoryBus, Operand, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand and the carry flag to the accumulator.
///
/// Flags affected: N, V, Z, C
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);

    if cpu.p.get(Flag::DECIMAL) {
        add_decimal(cpu, value);
        cpu.cycles += 1;
    } else {
        add_binary(cpu, value);
    }
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Subtracts the operand and the borrow (inverted carry) from the accumulator.
///
/// Flags affected: N, V, Z, C (C clear means a borrow occurred)
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);

    if cpu.p.get(Flag::DECIMAL) {
        subtract_decimal(cpu, value);
        cpu.cycles += 1;
    } else {
        // A - M - (1 - C) == A + !M + C
        add_binary(cpu, !value);
    }
}

fn add_binary<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let carry_in = cpu.p.get(Flag::CARRY) as u16;

    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    // Both inputs share a sign that the result does not
    let overflow = (a ^ result) & (value ^ result) & 0x80 != 0;

    cpu.p.set(Flag::CARRY, sum > 0xFF);
    cpu.p.set(Flag::OVERFLOW, overflow);
    cpu.p.update_zn(result);
    cpu.a = result;
}

fn add_decimal<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let carry_in = cpu.p.get(Flag::CARRY) as u16;

    let mut lo = (a & 0x0F) as u16 + (value & 0x0F) as u16 + carry_in;
    if lo > 0x09 {
        lo += 0x06;
    }
    let mut hi = (a >> 4) as u16 + (value >> 4) as u16 + (lo > 0x0F) as u16;

    // V comes from the sum before the high digit is adjusted
    let unadjusted = ((hi << 4) | (lo & 0x0F)) as u8;
    let overflow = (a ^ unadjusted) & (value ^ unadjusted) & 0x80 != 0;

    if hi > 0x09 {
        hi += 0x06;
    }
    let result = ((hi << 4) | (lo & 0x0F)) as u8;

    cpu.p.set(Flag::CARRY, hi > 0x0F);
    cpu.p.set(Flag::OVERFLOW, overflow);
    cpu.p.update_zn(result);
    cpu.a = result;
}

fn subtract_decimal<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let borrow = !cpu.p.get(Flag::CARRY) as i16;

    // C and V follow the binary subtraction
    let binary = a as i16 - value as i16 - borrow;
    let overflow = (a ^ value) & (a ^ binary as u8) & 0x80 != 0;

    let mut lo = (a & 0x0F) as i16 - (value & 0x0F) as i16 - borrow;
    let mut hi = (a >> 4) as i16 - (value >> 4) as i16;
    if lo < 0 {
        lo -= 0x06;
        hi -= 1;
    }
    if hi < 0 {
        hi -= 0x06;
    }
    let result = ((hi << 4) | (lo & 0x0F)) as u8;

    cpu.p.set(Flag::CARRY, binary >= 0);
    cpu.p.set(Flag::OVERFLOW, overflow);
    cpu.p.update_zn(result);
    cpu.a = result;
}

/// Executes the AND (Logical AND) instruction.
///
/// Flags affected: N, Z
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.a &= cpu.read_operand(operand);
    cpu.p.update_zn(cpu.a);
}

/// Executes the ORA (Logical Inclusive OR) instruction.
///
/// Flags affected: N, Z
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.a |= cpu.read_operand(operand);
    cpu.p.update_zn(cpu.a);
}

/// Executes the EOR (Exclusive OR) instruction.
///
/// Flags affected: N, Z
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.a ^= cpu.read_operand(operand);
    cpu.p.update_zn(cpu.a);
}

/// Compares `register` with `value` as if computing `register - value`.
///
/// - C: register >= value (no borrow)
/// - Z: register == value
/// - N: bit 7 of the 8-bit difference
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, value: u8) {
    let difference = register.wrapping_sub(value);
    cpu.p.set(Flag::CARRY, register >= value);
    cpu.p.update_zn(difference);
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let register = cpu.a;
    compare(cpu, register, value);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let register = cpu.x;
    compare(cpu, register, value);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let register = cpu.y;
    compare(cpu, register, value);
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z is set if `A & M` is zero. For memory operands N and V are copied from
/// bits 7 and 6 of M; the 65C02 immediate form only touches Z.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);

    cpu.p.set(Flag::ZERO, cpu.a & value == 0);

    if !matches!(operand, Operand::Immediate(_)) {
        cpu.p.set(Flag::NEGATIVE, value & 0x80 != 0);
        cpu.p.set(Flag::OVERFLOW, value & 0x40 != 0);
    }
}
