//! # Hardware Stack
//!
//! The 65C02 stack lives in page one (0x0100-0x01FF) and grows downward. The
//! 8-bit stack pointer (S) is an offset into that page, so the stack can never
//! leave it: pushing with S = 0x00 writes 0x0100 and wraps S to 0xFF, popping
//! with S = 0xFF wraps S to 0x00 and reads 0x0100. A full stack silently
//! overwrites itself from the top; there is no overflow fault.

use crate::MemoryBus;

/// Base address of the stack page.
pub const STACK_BASE: u16 = 0x0100;

/// The stack pointer and the push/pop discipline around it.
///
/// # Examples
///
/// ```
/// use lib65c02::{FlatMemory, MemoryBus, Stack};
///
/// let mut mem = FlatMemory::new();
/// let mut stack = Stack::new(0xFD);
///
/// stack.push(&mut mem, 0x42);
/// assert_eq!(mem.read(0x01FD), 0x42);
/// assert_eq!(stack.pointer(), 0xFC);
///
/// assert_eq!(stack.pop(&mem), 0x42);
/// assert_eq!(stack.pointer(), 0xFD);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stack {
    sp: u8,
}

impl Stack {
    /// Creates a stack with the pointer at `sp`.
    pub const fn new(sp: u8) -> Self {
        Self { sp }
    }

    /// Returns the stack pointer (S).
    #[inline]
    pub fn pointer(&self) -> u8 {
        self.sp
    }

    /// Sets the stack pointer (S).
    #[inline]
    pub fn set_pointer(&mut self, sp: u8) {
        self.sp = sp;
    }

    /// Address the next push will write to.
    #[inline]
    pub fn top_address(&self) -> u16 {
        STACK_BASE | self.sp as u16
    }

    /// Stores `value` at 0x0100 + S, then decrements S (0x00 wraps to 0xFF).
    pub fn push<M: MemoryBus>(&mut self, bus: &mut M, value: u8) {
        bus.write(self.top_address(), value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments S (0xFF wraps to 0x00), then loads from 0x0100 + S.
    pub fn pop<M: MemoryBus>(&mut self, bus: &M) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        bus.read(self.top_address())
    }

    /// Pushes a 16-bit value high byte first.
    pub fn push_word<M: MemoryBus>(&mut self, bus: &mut M, value: u16) {
        self.push(bus, (value >> 8) as u8);
        self.push(bus, value as u8);
    }

    /// Pops a 16-bit value low byte first.
    pub fn pop_word<M: MemoryBus>(&mut self, bus: &M) -> u16 {
        let lo = self.pop(bus) as u16;
        let hi = self.pop(bus) as u16;
        (hi << 8) | lo
    }
}
