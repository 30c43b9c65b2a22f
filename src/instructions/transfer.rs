//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA and TSX copy one register into another and set N and
//! Z from the copied value. TXS loads the stack pointer and affects no flags.

use crate::{MemoryBus, CPU};

/// Executes the TAX (Transfer A to X) instruction.
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.a;
    cpu.p.update_zn(cpu.x);
}

/// Executes the TAY (Transfer A to Y) instruction.
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.a;
    cpu.p.update_zn(cpu.y);
}

/// Executes the TXA (Transfer X to A) instruction.
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.x;
    cpu.p.update_zn(cpu.a);
}

/// Executes the TYA (Transfer Y to A) instruction.
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.y;
    cpu.p.update_zn(cpu.a);
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.stack.pointer();
    cpu.p.update_zn(cpu.x);
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// No flags are affected.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.x;
    cpu.stack.set_pointer(value);
}
