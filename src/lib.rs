//! # 65C02 CPU Simulator Core
//!
//! An instruction-level simulator for the WDC 65C02 designed for modularity,
//! clarity, and deterministic execution.
//!
//! This crate reproduces the processor's register, flag, stack, and control-flow
//! behavior one instruction at a time against a 64KB memory image supplied by the
//! host through the `MemoryBus` trait.
//!
//! ## Quick Start
//!
//! ```rust
//! use lib65c02::{CPU, FlatMemory, MemoryBus};
//!
//! // Create 64KB flat memory
//! let mut memory = FlatMemory::new();
//!
//! // Set reset vector to point to program start at 0x8000
//! memory.write(0xFFFC, 0x00); // Low byte
//! memory.write(0xFFFD, 0x80); // High byte
//!
//! // LDX #$FF ; INX
//! memory.write(0x8000, 0xA2);
//! memory.write(0x8001, 0xFF);
//! memory.write(0x8002, 0xE8);
//!
//! // Initialize CPU - it will load PC from the reset vector
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0x8000);
//!
//! assert_eq!(cpu.step().unwrap(), 2);
//! assert_eq!(cpu.step().unwrap(), 2);
//! assert_eq!(cpu.x(), 0x00);
//! assert!(cpu.flag_z());
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory via the `MemoryBus` trait
//! - **Determinism**: No host side effects beyond the memory image and registers
//! - **Cycle Counting**: Each `step()` reports the cycles it consumed
//! - **Table-Driven Design**: All 256 opcode bytes map to an `OpcodeMetadata` entry
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the fetch-decode-execute loop
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `status` - Packed processor status register
//! - `stack` - Page-one hardware stack
//! - `addressing` - Addressing modes and operand resolution
//! - `opcodes` - Opcode metadata table
//! - `interrupts` - RESET/NMI/IRQ/BRK sequencing
//! - `config` - Behavioral switches for chip-revision quirks
//!
//! ## Logging
//!
//! The crate logs through the `log` facade: every executed instruction at
//! `trace`, resets and interrupt entries at `debug`, reserved opcodes at `warn`.
//! Install any `log` backend in the host to see them.

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod interrupts;
pub mod memory;
pub mod opcodes;
pub mod stack;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::{AddressingMode, Operand};
pub use config::{CpuConfig, IllegalOpcodePolicy};
pub use cpu::{Registers, RunState, CPU};
pub use interrupts::{Interrupt, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{OpcodeMetadata, Operation, OPCODE_TABLE};
pub use stack::{Stack, STACK_BASE};
pub use status::{Flag, StatusRegister};

use thiserror::Error;

/// Errors that can occur during CPU execution.
///
/// Every error is local to the `step()` call that produced it; the CPU state
/// stays consistent and the host may keep stepping (or reset) afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// A reserved opcode was fetched while `IllegalOpcodePolicy::Trap` is active.
    ///
    /// The reserved slot's operand bytes and cycles have already been consumed,
    /// so PC points at the next instruction.
    #[error("illegal opcode 0x{opcode:02X} at 0x{pc:04X}")]
    IllegalOpcode {
        /// The opcode byte that was fetched.
        opcode: u8,
        /// Address the opcode was fetched from.
        pc: u16,
    },

    /// `step()` was called on a powered-on CPU that has not been reset yet.
    #[error("CPU has not been reset")]
    NotReset,

    /// The CPU executed STP and is halted until the next reset.
    #[error("CPU stopped by STP at 0x{pc:04X}")]
    Stopped {
        /// Address of the STP instruction.
        pc: u16,
    },
}
