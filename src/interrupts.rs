//! # Interrupt Sequencing
//!
//! The 65C02 has four ways to redirect execution through a vector at the top
//! of memory:
//!
//! | Source | Vector        | Pushes PC/P | Break in pushed P | Maskable |
//! |--------|---------------|-------------|-------------------|----------|
//! | RESET  | 0xFFFC/0xFFFD | no          | -                 | no       |
//! | NMI    | 0xFFFA/0xFFFB | yes         | clear             | no       |
//! | IRQ    | 0xFFFE/0xFFFF | yes         | clear             | by I     |
//! | BRK    | 0xFFFE/0xFFFF | yes         | set               | no       |
//!
//! IRQ and BRK share a vector, so the Break bit in the pushed status is the only
//! way a handler can tell them apart.
//!
//! ## Interrupt Lines
//!
//! - **NMI** is edge-triggered: `request_nmi()` latches one request that is
//!   serviced once.
//! - **IRQ** is level-sensitive: it is active while the host holds it with
//!   `request_irq()` (until `clear_irq()`) or while `MemoryBus::irq_active()`
//!   reports a device interrupt. A masked IRQ stays pending, not lost.
//!
//! Both lines are sampled between instructions only. NMI wins when both are
//! pending.
//!
//! ## Service Sequence (NMI/IRQ, 7 cycles)
//!
//! 1. Push PC high byte, then low byte
//! 2. Push P with Break clear (bit 5 set)
//! 3. Set I; on the 65C02 also clear D
//! 4. Load PC from the vector

use log::debug;

use crate::cpu::{RunState, RESET_SP};
use crate::{Flag, MemoryBus, CPU};

/// NMI vector (low byte; high byte at +1).
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Reset vector (low byte; high byte at +1).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ/BRK vector (low byte; high byte at +1).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Cycles taken by the hardware interrupt entry sequence.
pub(crate) const INTERRUPT_CYCLES: u8 = 7;

/// The sources that can redirect execution through a vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    /// Hardware reset.
    Reset,
    /// Non-maskable interrupt.
    Nmi,
    /// Maskable interrupt request.
    Irq,
    /// Software interrupt (BRK instruction).
    Brk,
}

impl Interrupt {
    /// Address of the vector's low byte.
    pub const fn vector(self) -> u16 {
        match self {
            Interrupt::Reset => RESET_VECTOR,
            Interrupt::Nmi => NMI_VECTOR,
            Interrupt::Irq | Interrupt::Brk => IRQ_VECTOR,
        }
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Runs the reset sequence.
    ///
    /// - PC is loaded from the reset vector at 0xFFFC/0xFFFD
    /// - SP is set to 0xFD
    /// - I is set (and D cleared on the 65C02)
    /// - A, X, Y and the other flags keep their values
    /// - A latched NMI is discarded; the IRQ line is left as the host set it
    ///
    /// Reset also wakes a CPU parked by WAI or halted by STP.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib65c02::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.set_pc(0x1234);
    /// cpu.set_flag_i(false);
    ///
    /// cpu.reset();
    /// assert_eq!(cpu.pc(), 0x8000);
    /// assert!(cpu.flag_i());
    /// ```
    pub fn reset(&mut self) {
        self.pc = self.memory.read_word(Interrupt::Reset.vector());
        self.stack.set_pointer(RESET_SP);
        self.p.set(Flag::INTERRUPT_DISABLE, true);
        if self.config.clear_decimal_on_interrupt {
            self.p.set(Flag::DECIMAL, false);
        }
        self.nmi_pending = false;
        self.state = RunState::Running;

        debug!("Reset: PC=0x{:04X}", self.pc);
    }

    /// Asserts the IRQ line. It stays asserted until `clear_irq()`.
    pub fn request_irq(&mut self) {
        self.irq_line = true;
    }

    /// Deasserts the host-driven IRQ line.
    pub fn clear_irq(&mut self) {
        self.irq_line = false;
    }

    /// Latches a non-maskable interrupt, serviced at the next step boundary.
    pub fn request_nmi(&mut self) {
        self.nmi_pending = true;
    }

    /// Returns true if the IRQ line is active, from the host or the bus.
    pub fn irq_pending(&self) -> bool {
        self.irq_line || self.memory.irq_active()
    }

    /// Returns true if an NMI is latched and not yet serviced.
    pub fn nmi_pending(&self) -> bool {
        self.nmi_pending
    }

    /// Picks the interrupt to service at this step boundary, if any.
    pub(crate) fn poll_interrupts(&self) -> Option<Interrupt> {
        if self.nmi_pending {
            Some(Interrupt::Nmi)
        } else if self.irq_pending() && !self.p.get(Flag::INTERRUPT_DISABLE) {
            Some(Interrupt::Irq)
        } else {
            None
        }
    }

    /// Enters a hardware interrupt and returns the cycles it took.
    pub(crate) fn service_interrupt(&mut self, interrupt: Interrupt) -> u8 {
        if interrupt == Interrupt::Nmi {
            self.nmi_pending = false;
        }
        self.enter_interrupt(interrupt, self.pc);
        self.cycles += INTERRUPT_CYCLES as u64;
        INTERRUPT_CYCLES
    }

    /// Pushes the return address and status, masks IRQs, and jumps through
    /// the vector. Cycle accounting is left to the caller.
    pub(crate) fn enter_interrupt(&mut self, interrupt: Interrupt, return_address: u16) {
        self.push_word(return_address);

        let status = if interrupt == Interrupt::Brk {
            self.p.as_byte() | Flag::BREAK.bits()
        } else {
            self.p.as_byte() & !Flag::BREAK.bits()
        };
        self.push(status);

        self.p.set(Flag::INTERRUPT_DISABLE, true);
        if self.config.clear_decimal_on_interrupt {
            self.p.set(Flag::DECIMAL, false);
        }

        self.pc = self.memory.read_word(interrupt.vector());

        debug!(
            "{:?}: return 0x{:04X}, pushed P=0x{:02X}, handler 0x{:04X}",
            interrupt, return_address, status, self.pc
        );
    }
}
