//! # Processor Status Register
//!
//! The 65C02 keeps its flags packed in a single byte (P):
//!
//! ```text
//! bit:  7 6 5 4 3 2 1 0
//!       N V - B D I Z C
//! ```
//!
//! Bit 5 has no flag behind it and always reads back as 1. The Break bit only
//! carries meaning in copies of P pushed to the stack, where it tells a handler
//! whether it was entered through BRK or a hardware interrupt.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Individual status flags, named by their bit in P.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Flag: u8 {
        /// Carry (unsigned overflow / no borrow)
        const CARRY = 0b0000_0001;
        /// Zero (result byte was zero)
        const ZERO = 0b0000_0010;
        /// Interrupt Disable (masks IRQ, not NMI)
        const INTERRUPT_DISABLE = 0b0000_0100;
        /// Decimal (BCD arithmetic for ADC/SBC)
        const DECIMAL = 0b0000_1000;
        /// Break (set in the byte BRK pushes)
        const BREAK = 0b0001_0000;
        /// Unused bit, reads back as 1
        const UNUSED = 0b0010_0000;
        /// Overflow (signed overflow)
        const OVERFLOW = 0b0100_0000;
        /// Negative (bit 7 of result)
        const NEGATIVE = 0b1000_0000;
    }
}

/// The packed status register.
///
/// # Examples
///
/// ```
/// use lib65c02::{Flag, StatusRegister};
///
/// let mut p = StatusRegister::new();
/// p.set(Flag::CARRY, true);
/// p.set(Flag::NEGATIVE, true);
///
/// assert!(p.get(Flag::CARRY));
/// assert_eq!(p.as_byte(), 0b1010_0001);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusRegister(Flag);

impl StatusRegister {
    /// Creates a status register with every flag clear.
    pub const fn new() -> Self {
        Self(Flag::empty())
    }

    /// Returns true if `flag` is set.
    #[inline]
    pub fn get(&self, flag: Flag) -> bool {
        self.0.contains(flag)
    }

    /// Sets or clears `flag`, leaving every other bit alone.
    #[inline]
    pub fn set(&mut self, flag: Flag, value: bool) {
        self.0.set(flag, value);
    }

    /// Returns P as a byte, with the unused bit reading as 1.
    #[inline]
    pub fn as_byte(&self) -> u8 {
        (self.0 | Flag::UNUSED).bits()
    }

    /// Replaces all eight bits with `byte`, Break included.
    #[inline]
    pub fn load_byte(&mut self, byte: u8) {
        self.0 = Flag::from_bits_retain(byte);
    }

    /// Sets Zero and Negative from a result byte.
    #[inline]
    pub fn update_zn(&mut self, value: u8) {
        self.0.set(Flag::ZERO, value == 0);
        self.0.set(Flag::NEGATIVE, value & 0x80 != 0);
    }
}

impl From<u8> for StatusRegister {
    fn from(byte: u8) -> Self {
        Self(Flag::from_bits_retain(byte))
    }
}

impl fmt::Debug for StatusRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StatusRegister({self})")
    }
}

impl fmt::Display for StatusRegister {
    /// Formats as `NV-BDIZC`, with `.` for clear flags.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const LETTERS: [(char, Flag); 8] = [
            ('N', Flag::NEGATIVE),
            ('V', Flag::OVERFLOW),
            ('-', Flag::UNUSED),
            ('B', Flag::BREAK),
            ('D', Flag::DECIMAL),
            ('I', Flag::INTERRUPT_DISABLE),
            ('Z', Flag::ZERO),
            ('C', Flag::CARRY),
        ];

        let byte = self.as_byte();
        for (letter, flag) in LETTERS {
            let c = if byte & flag.bits() != 0 { letter } else { '.' };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_flags_set() {
        let p = StatusRegister::default();

        assert_eq!(Flag::default(), Flag::empty());
        assert_eq!(p, StatusRegister::new());
        assert_eq!(p.as_byte(), 0x20);
    }

    #[test]
    fn test_flags_are_independent() {
        let all = [
            Flag::CARRY,
            Flag::ZERO,
            Flag::INTERRUPT_DISABLE,
            Flag::DECIMAL,
            Flag::BREAK,
            Flag::OVERFLOW,
            Flag::NEGATIVE,
        ];

        for flag in all {
            let mut p = StatusRegister::new();
            p.set(flag, true);
            for other in all {
                assert_eq!(p.get(other), other == flag, "{flag:?} leaked into {other:?}");
            }
            p.set(flag, false);
            assert_eq!(p.as_byte(), 0x20);
        }
    }

    #[test]
    fn test_unused_bit_reads_as_one() {
        let mut p = StatusRegister::new();
        p.load_byte(0x00);
        assert_eq!(p.as_byte(), 0x20);
    }

    #[test]
    fn test_load_byte_preserves_break() {
        let mut p = StatusRegister::new();
        p.load_byte(0xFF);
        assert!(p.get(Flag::BREAK));
        assert_eq!(p.as_byte(), 0xFF);

        p.load_byte(0b1101_0011);
        assert_eq!(p.as_byte(), 0b1111_0011);
    }

    #[test]
    fn test_update_zn() {
        let mut p = StatusRegister::new();

        p.update_zn(0x00);
        assert!(p.get(Flag::ZERO));
        assert!(!p.get(Flag::NEGATIVE));

        p.update_zn(0x80);
        assert!(!p.get(Flag::ZERO));
        assert!(p.get(Flag::NEGATIVE));

        p.update_zn(0x7F);
        assert!(!p.get(Flag::ZERO));
        assert!(!p.get(Flag::NEGATIVE));
    }

    #[test]
    fn test_display() {
        let p = StatusRegister::from(0b1000_0011);
        assert_eq!(p.to_string(), "N.-...ZC");
    }
}
