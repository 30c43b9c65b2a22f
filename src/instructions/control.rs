//! # Control Flow Instructions
//!
//! This module implements instructions that redirect or suspend execution:
//! - JMP: Jump (absolute, indirect, absolute indexed indirect)
//! - JSR/RTS: Subroutine call and return
//! - RTI: Return from Interrupt
//! - BRK: Software interrupt
//! - WAI: Wait for Interrupt (65C02)
//! - STP: Stop the processor (65C02)

use log::info;

use crate::cpu::RunState;
use crate::{Flag, Interrupt, MemoryBus, Operand, CPU};

/// Executes the JMP (Jump) instruction.
///
/// The addressing mode has already produced the target address, including
/// the indirect forms.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    if let Some(target) = operand.address() {
        cpu.pc = target;
    }
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR instruction (return
/// address minus one), high byte first, then jumps to the target.
///
/// # Examples
///
/// ```
/// use lib65c02::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
/// memory.write(0x8000, 0x20); // JSR $9000
/// memory.write(0x8001, 0x00);
/// memory.write(0x8002, 0x90);
///
/// let mut cpu = CPU::new(memory);
/// assert_eq!(cpu.step(), Ok(6));
/// assert_eq!(cpu.pc(), 0x9000);
/// assert_eq!(cpu.memory().read(0x01FD), 0x80);
/// assert_eq!(cpu.memory().read(0x01FC), 0x02);
/// ```
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    if let Some(target) = operand.address() {
        let return_address = cpu.pc.wrapping_sub(1);
        cpu.push_word(return_address);
        cpu.pc = target;
    }
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pops the return address (low byte first) and resumes one past it.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.pc = cpu.pop_word().wrapping_add(1);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pops the status register (Break cleared, bit 5 set), then PC. Unlike
/// RTS, the popped PC is used as-is.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.pop();
    cpu.p.load_byte(status);
    cpu.p.set(Flag::BREAK, false);
    cpu.pc = cpu.pop_word();
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK is a two-byte instruction: the byte after the opcode is skipped, so
/// the pushed return address is the opcode address plus two. The pushed
/// status has Break set; the live register is left unchanged.
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    let return_address = cpu.pc.wrapping_add(1);
    cpu.enter_interrupt(Interrupt::Brk, return_address);
}

/// Executes the WAI (Wait for Interrupt) instruction.
///
/// The CPU idles until an IRQ or NMI is asserted. An IRQ wakes it even when
/// masked by I; execution then resumes after WAI without taking the interrupt.
pub(crate) fn execute_wai<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.state = RunState::Waiting;
}

/// Executes the STP (Stop) instruction.
///
/// Only a reset restarts a stopped CPU.
pub(crate) fn execute_stp<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.state = RunState::Stopped;
    cpu.stopped_at = cpu.pc.wrapping_sub(1);
    info!("STP at 0x{:04X}", cpu.stopped_at);
}
