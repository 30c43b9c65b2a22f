//! # Addressing Modes
//!
//! This module defines the 16 addressing modes of the 65C02 and the resolver
//! that turns the bytes following an opcode into an `Operand`.
//!
//! Resolution starts with PC pointing at the first operand byte (the opcode has
//! already been fetched) and leaves PC pointing at the next instruction. Every
//! 16-bit address is assembled little-endian, `low | (high << 8)`, whether it
//! comes from the instruction stream, a zero-page pointer, or an indirect
//! pointer in memory.

use crate::{MemoryBus, CPU};

/// 65C02 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX,
///   IndirectY, ZeroPageIndirect
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect,
///   AbsoluteIndexedIndirect, ZeroPageRelative
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, INC A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions, relative to the address of
    /// the following instruction.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register (may cross a page).
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register (may cross a page).
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,

    /// Zero page indirect (65C02): dereference a zero-page pointer.
    ///
    /// Example: LDA ($40)
    ZeroPageIndirect,

    /// Absolute indexed indirect (65C02): (ABS + X) then dereference. JMP only.
    ///
    /// Example: JMP ($1234,X)
    AbsoluteIndexedIndirect,

    /// Zero page address followed by a branch offset. BBR/BBS only.
    ///
    /// Example: BBR3 $12,label
    ZeroPageRelative,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY
            | AddressingMode::ZeroPageIndirect => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect
            | AddressingMode::AbsoluteIndexedIndirect
            | AddressingMode::ZeroPageRelative => 2,
        }
    }
}

/// A resolved operand location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand.
    Implied,

    /// The accumulator.
    Accumulator,

    /// The operand byte sits in the instruction stream at this address.
    Immediate(u16),

    /// An effective address in memory.
    Memory {
        /// Effective address.
        address: u16,
        /// Indexing carried the address into the next page.
        page_crossed: bool,
    },

    /// Branch displacement.
    Relative(i8),

    /// Zero-page address to test plus branch displacement (BBR/BBS).
    ZeroPageRelative {
        /// Zero-page address holding the byte to test.
        address: u16,
        /// Branch displacement.
        offset: i8,
    },
}

impl Operand {
    /// Returns the memory address behind the operand, if it has one.
    pub fn address(&self) -> Option<u16> {
        match *self {
            Operand::Immediate(address)
            | Operand::Memory { address, .. }
            | Operand::ZeroPageRelative { address, .. } => Some(address),
            Operand::Implied | Operand::Accumulator | Operand::Relative(_) => None,
        }
    }

    /// True if indexing crossed a page boundary.
    pub fn page_crossed(&self) -> bool {
        matches!(
            self,
            Operand::Memory {
                page_crossed: true,
                ..
            }
        )
    }
}

fn memory(address: u16) -> Operand {
    Operand::Memory {
        address,
        page_crossed: false,
    }
}

fn indexed(base: u16, index: u8) -> Operand {
    let address = base.wrapping_add(index as u16);
    Operand::Memory {
        address,
        page_crossed: (base & 0xFF00) != (address & 0xFF00),
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Reads the byte at PC and advances PC.
    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads a little-endian word at PC and advances PC by two.
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte() as u16;
        let hi = self.fetch_byte() as u16;
        (hi << 8) | lo
    }

    /// Reads a pointer from zero page; the high byte of pointer $FF comes from $00.
    fn read_zero_page_word(&self, ptr: u8) -> u16 {
        let lo = self.memory.read(ptr as u16) as u16;
        let hi = self.memory.read(ptr.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    /// Consumes the operand bytes for `mode` and resolves them.
    ///
    /// Expects PC at the first operand byte and leaves it at the next
    /// instruction.
    pub(crate) fn resolve_operand(&mut self, mode: AddressingMode) -> Operand {
        match mode {
            AddressingMode::Implicit => Operand::Implied,
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => {
                let address = self.pc;
                self.pc = self.pc.wrapping_add(1);
                Operand::Immediate(address)
            }
            AddressingMode::ZeroPage => memory(self.fetch_byte() as u16),
            AddressingMode::ZeroPageX => memory(self.fetch_byte().wrapping_add(self.x) as u16),
            AddressingMode::ZeroPageY => memory(self.fetch_byte().wrapping_add(self.y) as u16),
            AddressingMode::Relative => Operand::Relative(self.fetch_byte() as i8),
            AddressingMode::Absolute => memory(self.fetch_word()),
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word();
                indexed(base, self.x)
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word();
                indexed(base, self.y)
            }
            AddressingMode::Indirect => {
                let ptr = self.fetch_word();
                let target = if self.config.indirect_jmp_page_wrap && (ptr & 0xFF) == 0xFF {
                    // NMOS: the high byte comes from the start of the same page
                    let lo = self.memory.read(ptr) as u16;
                    let hi = self.memory.read(ptr & 0xFF00) as u16;
                    (hi << 8) | lo
                } else {
                    self.memory.read_word(ptr)
                };
                memory(target)
            }
            AddressingMode::IndirectX => {
                let ptr = self.fetch_byte().wrapping_add(self.x);
                memory(self.read_zero_page_word(ptr))
            }
            AddressingMode::IndirectY => {
                let ptr = self.fetch_byte();
                let base = self.read_zero_page_word(ptr);
                indexed(base, self.y)
            }
            AddressingMode::ZeroPageIndirect => {
                let ptr = self.fetch_byte();
                memory(self.read_zero_page_word(ptr))
            }
            AddressingMode::AbsoluteIndexedIndirect => {
                let ptr = self.fetch_word().wrapping_add(self.x as u16);
                memory(self.memory.read_word(ptr))
            }
            AddressingMode::ZeroPageRelative => {
                let address = self.fetch_byte() as u16;
                let offset = self.fetch_byte() as i8;
                Operand::ZeroPageRelative { address, offset }
            }
        }
    }

    /// Reads the value an operand refers to.
    ///
    /// `Implied` and `Relative` operands carry no value and read as zero.
    pub(crate) fn read_operand(&self, operand: Operand) -> u8 {
        match operand {
            Operand::Accumulator => self.a,
            Operand::Implied | Operand::Relative(_) => 0,
            Operand::Immediate(address)
            | Operand::Memory { address, .. }
            | Operand::ZeroPageRelative { address, .. } => self.memory.read(address),
        }
    }

    /// Writes a value back to the operand's location.
    pub(crate) fn write_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Accumulator => self.a = value,
            Operand::Memory { address, .. } | Operand::ZeroPageRelative { address, .. } => {
                self.memory.write(address, value)
            }
            // Immediate operands live in the instruction stream and are never targets
            Operand::Implied | Operand::Relative(_) | Operand::Immediate(_) => {}
        }
    }
}
