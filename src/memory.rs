//! # Memory Bus Abstraction
//!
//! The CPU sees the 64KB address space only through the `MemoryBus` trait. The
//! host owns what sits behind it: a flat RAM image, ROM overlays, or
//! memory-mapped devices.
//!
//! ## Design Principles
//!
//! - No bus errors: reads and writes always succeed, as on the real chip
//! - Addresses are 16-bit, so every access is in range by construction
//! - The host may also drive the IRQ line through the bus (`irq_active`)

/// Memory bus trait for CPU to read/write bytes.
///
/// # Examples
///
/// ```
/// use lib65c02::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
///
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use lib65c02::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM are silently ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// Must never panic. Unmapped addresses may return any value.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// Must never panic. Writes to read-only or unmapped addresses may be ignored.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian 16-bit word from `addr` and `addr + 1`.
    ///
    /// The high byte address wraps from 0xFFFF to 0x0000.
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Checks if a device behind the bus holds the IRQ line active.
    ///
    /// The IRQ line is level-sensitive: the CPU polls this between
    /// instructions and keeps re-entering the handler for as long as it reports
    /// `true` and the Interrupt Disable flag is clear. Plain memory has no
    /// interrupt sources, so the default is `false`.
    fn irq_active(&self) -> bool {
        false
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) map to one contiguous RAM array,
/// initialized to 0x00.
///
/// # Examples
///
/// ```
/// use lib65c02::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Reset vector low byte
/// memory.write(0xFFFD, 0x80); // Reset vector high byte (PC = 0x8000)
/// memory.write(0x8000, 0xEA); // NOP
///
/// let mut cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.step().unwrap(), 2);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Returns the whole memory image.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_memory_read_write() {
        let mut mem = FlatMemory::new();

        assert_eq!(mem.read(0x0000), 0x00);
        assert_eq!(mem.read(0xFFFF), 0x00);

        mem.write(0x1234, 0x42);
        assert_eq!(mem.read(0x1234), 0x42);

        // Neighbours untouched
        assert_eq!(mem.read(0x1233), 0x00);
        assert_eq!(mem.read(0x1235), 0x00);
    }

    #[test]
    fn test_read_word_little_endian() {
        let mut mem = FlatMemory::new();
        mem.write(0x2000, 0x34);
        mem.write(0x2001, 0x12);

        assert_eq!(mem.read_word(0x2000), 0x1234);
    }

    #[test]
    fn test_read_word_wraps_at_top_of_memory() {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFF, 0xCD);
        mem.write(0x0000, 0xAB);

        assert_eq!(mem.read_word(0xFFFF), 0xABCD);
    }

    #[test]
    fn test_flat_memory_has_no_irq_source() {
        let mem = FlatMemory::new();
        assert!(!mem.irq_active());
        assert_eq!(mem.as_slice().len(), 65536);
    }
}
