//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA/PLA: accumulator
//! - PHP/PLP: status register
//! - PHX/PLX, PHY/PLY: index registers (65C02)
//!
//! The stack lives at 0x0100-0x01FF and grows downward. Pushes write then
//! decrement SP; pulls increment SP then read. Pulls into A, X or Y set N
//! and Z.

use crate::{Flag, MemoryBus, CPU};

/// Executes the PHA (Push Accumulator) instruction.
///
/// # Examples
///
/// ```
/// use lib65c02::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
/// memory.write(0x8000, 0x48); // PHA
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_a(0x42);
///
/// assert_eq!(cpu.step(), Ok(3));
/// assert_eq!(cpu.memory().read(0x01FD), 0x42);
/// assert_eq!(cpu.sp(), 0xFC);
/// ```
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.a;
    cpu.push(value);
}

/// Executes the PHX (Push X Register) instruction.
pub(crate) fn execute_phx<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.x;
    cpu.push(value);
}

/// Executes the PHY (Push Y Register) instruction.
pub(crate) fn execute_phy<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.y;
    cpu.push(value);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// Pushes the status byte as it stands, with bit 5 set. When
/// `php_pushes_break` is configured the Break bit is forced on in the pushed
/// copy, matching the NMOS part.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) {
    let mut status = cpu.p.as_byte();
    if cpu.config.php_pushes_break {
        status |= Flag::BREAK.bits();
    }
    cpu.push(status);
}

/// Executes the PLA (Pull Accumulator) instruction.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.pop();
    cpu.p.update_zn(cpu.a);
}

/// Executes the PLX (Pull X Register) instruction.
pub(crate) fn execute_plx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.pop();
    cpu.p.update_zn(cpu.x);
}

/// Executes the PLY (Pull Y Register) instruction.
pub(crate) fn execute_ply<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.pop();
    cpu.p.update_zn(cpu.y);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Every bit is loaded from the stack, Break included; bit 5 always reads
/// back as 1.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.pop();
    cpu.p.load_byte(status);
}
