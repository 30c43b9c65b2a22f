//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode table that drives the
//! fetch-decode-execute loop. Every byte value maps to an operation, an
//! addressing mode, and a base cycle cost; there are no gaps.
//!
//! The table covers:
//! - **The NMOS 6502 instruction set** with its original encodings
//! - **The WDC 65C02 additions**: BRA, PHX/PHY/PLX/PLY, STZ, TRB/TSB, INC A/DEC A,
//!   the `(zp)` and `(abs,X)` modes, RMB/SMB, BBR/BBS, WAI and STP
//! - **Reserved opcodes**: the remaining bytes, which the W65C02S executes as NOPs
//!   of a fixed width and cost
//!
//! Base cycle costs exclude the dynamic penalties added during execution
//! (page crossing on indexed reads, taken branches, decimal-mode arithmetic).

use crate::addressing::AddressingMode;
use std::fmt;

/// Operation performed by an opcode, independent of its addressing mode.
///
/// The bit-manipulation instructions carry the bit number they act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Add with carry
    Adc,
    /// Logical AND with A
    And,
    /// Arithmetic shift left
    Asl,
    /// Branch if bit N of a zero-page byte is clear.
    Bbr(u8),
    /// Branch if bit N of a zero-page byte is set.
    Bbs(u8),
    /// Branch if carry clear
    Bcc,
    /// Branch if carry set
    Bcs,
    /// Branch if equal (Z set)
    Beq,
    /// Test bits against A
    Bit,
    /// Branch if minus (N set)
    Bmi,
    /// Branch if not equal (Z clear)
    Bne,
    /// Branch if plus (N clear)
    Bpl,
    /// Branch always
    Bra,
    /// Software interrupt
    Brk,
    /// Branch if overflow clear
    Bvc,
    /// Branch if overflow set
    Bvs,
    /// Clear carry
    Clc,
    /// Clear decimal mode
    Cld,
    /// Clear interrupt disable
    Cli,
    /// Clear overflow
    Clv,
    /// Compare with A
    Cmp,
    /// Compare with X
    Cpx,
    /// Compare with Y
    Cpy,
    /// Decrement memory or A
    Dec,
    /// Decrement X
    Dex,
    /// Decrement Y
    Dey,
    /// Exclusive OR with A
    Eor,
    /// Increment memory or A
    Inc,
    /// Increment X
    Inx,
    /// Increment Y
    Iny,
    /// Jump
    Jmp,
    /// Jump to subroutine
    Jsr,
    /// Load A
    Lda,
    /// Load X
    Ldx,
    /// Load Y
    Ldy,
    /// Logical shift right
    Lsr,
    /// No operation
    Nop,
    /// Logical OR with A
    Ora,
    /// Push A
    Pha,
    /// Push status
    Php,
    /// Push X
    Phx,
    /// Push Y
    Phy,
    /// Pull A
    Pla,
    /// Pull status
    Plp,
    /// Pull X
    Plx,
    /// Pull Y
    Ply,
    /// Reset bit N of a zero-page byte.
    Rmb(u8),
    /// Rotate left through carry
    Rol,
    /// Rotate right through carry
    Ror,
    /// Return from interrupt
    Rti,
    /// Return from subroutine
    Rts,
    /// Subtract with borrow
    Sbc,
    /// Set carry
    Sec,
    /// Set decimal mode
    Sed,
    /// Set interrupt disable
    Sei,
    /// Set bit N of a zero-page byte.
    Smb(u8),
    /// Store A
    Sta,
    /// Stop until reset
    Stp,
    /// Store X
    Stx,
    /// Store Y
    Sty,
    /// Store zero
    Stz,
    /// Transfer A to X
    Tax,
    /// Transfer A to Y
    Tay,
    /// Test and reset bits
    Trb,
    /// Test and set bits
    Tsb,
    /// Transfer S to X
    Tsx,
    /// Transfer X to A
    Txa,
    /// Transfer X to S
    Txs,
    /// Transfer Y to A
    Tya,
    /// Wait for interrupt
    Wai,
    /// Undefined opcode byte; behaves as a NOP unless configured to trap.
    Reserved,
}

impl Operation {
    /// Assembler mnemonic, e.g. `"LDA"` or `"BBR3"`. Reserved opcodes are `"???"`.
    pub fn mnemonic(self) -> &'static str {
        const BBR: [&str; 8] = [
            "BBR0", "BBR1", "BBR2", "BBR3", "BBR4", "BBR5", "BBR6", "BBR7",
        ];
        const BBS: [&str; 8] = [
            "BBS0", "BBS1", "BBS2", "BBS3", "BBS4", "BBS5", "BBS6", "BBS7",
        ];
        const RMB: [&str; 8] = [
            "RMB0", "RMB1", "RMB2", "RMB3", "RMB4", "RMB5", "RMB6", "RMB7",
        ];
        const SMB: [&str; 8] = [
            "SMB0", "SMB1", "SMB2", "SMB3", "SMB4", "SMB5", "SMB6", "SMB7",
        ];

        match self {
            Operation::Adc => "ADC",
            Operation::And => "AND",
            Operation::Asl => "ASL",
            Operation::Bbr(bit) => BBR[(bit & 7) as usize],
            Operation::Bbs(bit) => BBS[(bit & 7) as usize],
            Operation::Bcc => "BCC",
            Operation::Bcs => "BCS",
            Operation::Beq => "BEQ",
            Operation::Bit => "BIT",
            Operation::Bmi => "BMI",
            Operation::Bne => "BNE",
            Operation::Bpl => "BPL",
            Operation::Bra => "BRA",
            Operation::Brk => "BRK",
            Operation::Bvc => "BVC",
            Operation::Bvs => "BVS",
            Operation::Clc => "CLC",
            Operation::Cld => "CLD",
            Operation::Cli => "CLI",
            Operation::Clv => "CLV",
            Operation::Cmp => "CMP",
            Operation::Cpx => "CPX",
            Operation::Cpy => "CPY",
            Operation::Dec => "DEC",
            Operation::Dex => "DEX",
            Operation::Dey => "DEY",
            Operation::Eor => "EOR",
            Operation::Inc => "INC",
            Operation::Inx => "INX",
            Operation::Iny => "INY",
            Operation::Jmp => "JMP",
            Operation::Jsr => "JSR",
            Operation::Lda => "LDA",
            Operation::Ldx => "LDX",
            Operation::Ldy => "LDY",
            Operation::Lsr => "LSR",
            Operation::Nop => "NOP",
            Operation::Ora => "ORA",
            Operation::Pha => "PHA",
            Operation::Php => "PHP",
            Operation::Phx => "PHX",
            Operation::Phy => "PHY",
            Operation::Pla => "PLA",
            Operation::Plp => "PLP",
            Operation::Plx => "PLX",
            Operation::Ply => "PLY",
            Operation::Rmb(bit) => RMB[(bit & 7) as usize],
            Operation::Rol => "ROL",
            Operation::Ror => "ROR",
            Operation::Rti => "RTI",
            Operation::Rts => "RTS",
            Operation::Sbc => "SBC",
            Operation::Sec => "SEC",
            Operation::Sed => "SED",
            Operation::Sei => "SEI",
            Operation::Smb(bit) => SMB[(bit & 7) as usize],
            Operation::Sta => "STA",
            Operation::Stp => "STP",
            Operation::Stx => "STX",
            Operation::Sty => "STY",
            Operation::Stz => "STZ",
            Operation::Tax => "TAX",
            Operation::Tay => "TAY",
            Operation::Trb => "TRB",
            Operation::Tsb => "TSB",
            Operation::Tsx => "TSX",
            Operation::Txa => "TXA",
            Operation::Txs => "TXS",
            Operation::Tya => "TYA",
            Operation::Wai => "WAI",
            Operation::Reserved => "???",
        }
    }

    /// True for operations that pay one extra cycle when indexing crosses a page.
    ///
    /// These are the read-only operations plus, on the 65C02, the shifts and
    /// rotates in absolute,X mode.
    pub fn has_page_cross_penalty(self) -> bool {
        matches!(
            self,
            Operation::Adc
                | Operation::And
                | Operation::Bit
                | Operation::Cmp
                | Operation::Eor
                | Operation::Lda
                | Operation::Ldx
                | Operation::Ldy
                | Operation::Ora
                | Operation::Sbc
                | Operation::Asl
                | Operation::Lsr
                | Operation::Rol
                | Operation::Ror
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Metadata for a single opcode.
///
/// # Examples
///
/// ```
/// use lib65c02::{AddressingMode, Operation, OPCODE_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.operation, Operation::Lda);
/// assert_eq!(lda_imm.mnemonic(), "LDA");
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Operation performed.
    pub operation: Operation,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before dynamic penalties).
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,
}

impl OpcodeMetadata {
    const fn new(operation: Operation, addressing_mode: AddressingMode, base_cycles: u8) -> Self {
        Self {
            operation,
            addressing_mode,
            base_cycles,
            size_bytes: 1 + addressing_mode.operand_bytes(),
        }
    }

    /// Instruction mnemonic.
    pub fn mnemonic(&self) -> &'static str {
        self.operation.mnemonic()
    }

    /// True for the undefined opcode bytes.
    pub fn is_reserved(&self) -> bool {
        self.operation == Operation::Reserved
    }
}

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use lib65c02::OPCODE_TABLE;
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic(), "BRK");
/// assert_eq!(brk.base_cycles, 7);
///
/// let reserved = &OPCODE_TABLE[0x03];
/// assert!(reserved.is_reserved());
/// assert_eq!(reserved.base_cycles, 1);
/// ```
pub static OPCODE_TABLE: [OpcodeMetadata; 256] = {
    use AddressingMode::*;
    use Operation::*;
    const fn op(operation: Operation, mode: AddressingMode, cycles: u8) -> OpcodeMetadata {
        OpcodeMetadata::new(operation, mode, cycles)
    }

    [
        op(Brk, Implicit, 7), // 0x00
        op(Ora, IndirectX, 6), // 0x01
        op(Reserved, Immediate, 2), // 0x02
        op(Reserved, Implicit, 1), // 0x03
        op(Tsb, ZeroPage, 5), // 0x04
        op(Ora, ZeroPage, 3), // 0x05
        op(Asl, ZeroPage, 5), // 0x06
        op(Rmb(0), ZeroPage, 5), // 0x07
        op(Php, Implicit, 3), // 0x08
        op(Ora, Immediate, 2), // 0x09
        op(Asl, Accumulator, 2), // 0x0A
        op(Reserved, Implicit, 1), // 0x0B
        op(Tsb, Absolute, 6), // 0x0C
        op(Ora, Absolute, 4), // 0x0D
        op(Asl, Absolute, 6), // 0x0E
        op(Bbr(0), ZeroPageRelative, 5), // 0x0F
        op(Bpl, Relative, 2), // 0x10
        op(Ora, IndirectY, 5), // 0x11
        op(Ora, ZeroPageIndirect, 5), // 0x12
        op(Reserved, Implicit, 1), // 0x13
        op(Trb, ZeroPage, 5), // 0x14
        op(Ora, ZeroPageX, 4), // 0x15
        op(Asl, ZeroPageX, 6), // 0x16
        op(Rmb(1), ZeroPage, 5), // 0x17
        op(Clc, Implicit, 2), // 0x18
        op(Ora, AbsoluteY, 4), // 0x19
        op(Inc, Accumulator, 2), // 0x1A
        op(Reserved, Implicit, 1), // 0x1B
        op(Trb, Absolute, 6), // 0x1C
        op(Ora, AbsoluteX, 4), // 0x1D
        op(Asl, AbsoluteX, 6), // 0x1E
        op(Bbr(1), ZeroPageRelative, 5), // 0x1F
        op(Jsr, Absolute, 6), // 0x20
        op(And, IndirectX, 6), // 0x21
        op(Reserved, Immediate, 2), // 0x22
        op(Reserved, Implicit, 1), // 0x23
        op(Bit, ZeroPage, 3), // 0x24
        op(And, ZeroPage, 3), // 0x25
        op(Rol, ZeroPage, 5), // 0x26
        op(Rmb(2), ZeroPage, 5), // 0x27
        op(Plp, Implicit, 4), // 0x28
        op(And, Immediate, 2), // 0x29
        op(Rol, Accumulator, 2), // 0x2A
        op(Reserved, Implicit, 1), // 0x2B
        op(Bit, Absolute, 4), // 0x2C
        op(And, Absolute, 4), // 0x2D
        op(Rol, Absolute, 6), // 0x2E
        op(Bbr(2), ZeroPageRelative, 5), // 0x2F
        op(Bmi, Relative, 2), // 0x30
        op(And, IndirectY, 5), // 0x31
        op(And, ZeroPageIndirect, 5), // 0x32
        op(Reserved, Implicit, 1), // 0x33
        op(Bit, ZeroPageX, 4), // 0x34
        op(And, ZeroPageX, 4), // 0x35
        op(Rol, ZeroPageX, 6), // 0x36
        op(Rmb(3), ZeroPage, 5), // 0x37
        op(Sec, Implicit, 2), // 0x38
        op(And, AbsoluteY, 4), // 0x39
        op(Dec, Accumulator, 2), // 0x3A
        op(Reserved, Implicit, 1), // 0x3B
        op(Bit, AbsoluteX, 4), // 0x3C
        op(And, AbsoluteX, 4), // 0x3D
        op(Rol, AbsoluteX, 6), // 0x3E
        op(Bbr(3), ZeroPageRelative, 5), // 0x3F
        op(Rti, Implicit, 6), // 0x40
        op(Eor, IndirectX, 6), // 0x41
        op(Reserved, Immediate, 2), // 0x42
        op(Reserved, Implicit, 1), // 0x43
        op(Reserved, ZeroPage, 3), // 0x44
        op(Eor, ZeroPage, 3), // 0x45
        op(Lsr, ZeroPage, 5), // 0x46
        op(Rmb(4), ZeroPage, 5), // 0x47
        op(Pha, Implicit, 3), // 0x48
        op(Eor, Immediate, 2), // 0x49
        op(Lsr, Accumulator, 2), // 0x4A
        op(Reserved, Implicit, 1), // 0x4B
        op(Jmp, Absolute, 3), // 0x4C
        op(Eor, Absolute, 4), // 0x4D
        op(Lsr, Absolute, 6), // 0x4E
        op(Bbr(4), ZeroPageRelative, 5), // 0x4F
        op(Bvc, Relative, 2), // 0x50
        op(Eor, IndirectY, 5), // 0x51
        op(Eor, ZeroPageIndirect, 5), // 0x52
        op(Reserved, Implicit, 1), // 0x53
        op(Reserved, ZeroPageX, 4), // 0x54
        op(Eor, ZeroPageX, 4), // 0x55
        op(Lsr, ZeroPageX, 6), // 0x56
        op(Rmb(5), ZeroPage, 5), // 0x57
        op(Cli, Implicit, 2), // 0x58
        op(Eor, AbsoluteY, 4), // 0x59
        op(Phy, Implicit, 3), // 0x5A
        op(Reserved, Implicit, 1), // 0x5B
        op(Reserved, Absolute, 8), // 0x5C
        op(Eor, AbsoluteX, 4), // 0x5D
        op(Lsr, AbsoluteX, 6), // 0x5E
        op(Bbr(5), ZeroPageRelative, 5), // 0x5F
        op(Rts, Implicit, 6), // 0x60
        op(Adc, IndirectX, 6), // 0x61
        op(Reserved, Immediate, 2), // 0x62
        op(Reserved, Implicit, 1), // 0x63
        op(Stz, ZeroPage, 3), // 0x64
        op(Adc, ZeroPage, 3), // 0x65
        op(Ror, ZeroPage, 5), // 0x66
        op(Rmb(6), ZeroPage, 5), // 0x67
        op(Pla, Implicit, 4), // 0x68
        op(Adc, Immediate, 2), // 0x69
        op(Ror, Accumulator, 2), // 0x6A
        op(Reserved, Implicit, 1), // 0x6B
        op(Jmp, Indirect, 6), // 0x6C
        op(Adc, Absolute, 4), // 0x6D
        op(Ror, Absolute, 6), // 0x6E
        op(Bbr(6), ZeroPageRelative, 5), // 0x6F
        op(Bvs, Relative, 2), // 0x70
        op(Adc, IndirectY, 5), // 0x71
        op(Adc, ZeroPageIndirect, 5), // 0x72
        op(Reserved, Implicit, 1), // 0x73
        op(Stz, ZeroPageX, 4), // 0x74
        op(Adc, ZeroPageX, 4), // 0x75
        op(Ror, ZeroPageX, 6), // 0x76
        op(Rmb(7), ZeroPage, 5), // 0x77
        op(Sei, Implicit, 2), // 0x78
        op(Adc, AbsoluteY, 4), // 0x79
        op(Ply, Implicit, 4), // 0x7A
        op(Reserved, Implicit, 1), // 0x7B
        op(Jmp, AbsoluteIndexedIndirect, 6), // 0x7C
        op(Adc, AbsoluteX, 4), // 0x7D
        op(Ror, AbsoluteX, 6), // 0x7E
        op(Bbr(7), ZeroPageRelative, 5), // 0x7F
        op(Bra, Relative, 2), // 0x80
        op(Sta, IndirectX, 6), // 0x81
        op(Reserved, Immediate, 2), // 0x82
        op(Reserved, Implicit, 1), // 0x83
        op(Sty, ZeroPage, 3), // 0x84
        op(Sta, ZeroPage, 3), // 0x85
        op(Stx, ZeroPage, 3), // 0x86
        op(Smb(0), ZeroPage, 5), // 0x87
        op(Dey, Implicit, 2), // 0x88
        op(Bit, Immediate, 2), // 0x89
        op(Txa, Implicit, 2), // 0x8A
        op(Reserved, Implicit, 1), // 0x8B
        op(Sty, Absolute, 4), // 0x8C
        op(Sta, Absolute, 4), // 0x8D
        op(Stx, Absolute, 4), // 0x8E
        op(Bbs(0), ZeroPageRelative, 5), // 0x8F
        op(Bcc, Relative, 2), // 0x90
        op(Sta, IndirectY, 6), // 0x91
        op(Sta, ZeroPageIndirect, 5), // 0x92
        op(Reserved, Implicit, 1), // 0x93
        op(Sty, ZeroPageX, 4), // 0x94
        op(Sta, ZeroPageX, 4), // 0x95
        op(Stx, ZeroPageY, 4), // 0x96
        op(Smb(1), ZeroPage, 5), // 0x97
        op(Tya, Implicit, 2), // 0x98
        op(Sta, AbsoluteY, 5), // 0x99
        op(Txs, Implicit, 2), // 0x9A
        op(Reserved, Implicit, 1), // 0x9B
        op(Stz, Absolute, 4), // 0x9C
        op(Sta, AbsoluteX, 5), // 0x9D
        op(Stz, AbsoluteX, 5), // 0x9E
        op(Bbs(1), ZeroPageRelative, 5), // 0x9F
        op(Ldy, Immediate, 2), // 0xA0
        op(Lda, IndirectX, 6), // 0xA1
        op(Ldx, Immediate, 2), // 0xA2
        op(Reserved, Implicit, 1), // 0xA3
        op(Ldy, ZeroPage, 3), // 0xA4
        op(Lda, ZeroPage, 3), // 0xA5
        op(Ldx, ZeroPage, 3), // 0xA6
        op(Smb(2), ZeroPage, 5), // 0xA7
        op(Tay, Implicit, 2), // 0xA8
        op(Lda, Immediate, 2), // 0xA9
        op(Tax, Implicit, 2), // 0xAA
        op(Reserved, Implicit, 1), // 0xAB
        op(Ldy, Absolute, 4), // 0xAC
        op(Lda, Absolute, 4), // 0xAD
        op(Ldx, Absolute, 4), // 0xAE
        op(Bbs(2), ZeroPageRelative, 5), // 0xAF
        op(Bcs, Relative, 2), // 0xB0
        op(Lda, IndirectY, 5), // 0xB1
        op(Lda, ZeroPageIndirect, 5), // 0xB2
        op(Reserved, Implicit, 1), // 0xB3
        op(Ldy, ZeroPageX, 4), // 0xB4
        op(Lda, ZeroPageX, 4), // 0xB5
        op(Ldx, ZeroPageY, 4), // 0xB6
        op(Smb(3), ZeroPage, 5), // 0xB7
        op(Clv, Implicit, 2), // 0xB8
        op(Lda, AbsoluteY, 4), // 0xB9
        op(Tsx, Implicit, 2), // 0xBA
        op(Reserved, Implicit, 1), // 0xBB
        op(Ldy, AbsoluteX, 4), // 0xBC
        op(Lda, AbsoluteX, 4), // 0xBD
        op(Ldx, AbsoluteY, 4), // 0xBE
        op(Bbs(3), ZeroPageRelative, 5), // 0xBF
        op(Cpy, Immediate, 2), // 0xC0
        op(Cmp, IndirectX, 6), // 0xC1
        op(Reserved, Immediate, 2), // 0xC2
        op(Reserved, Implicit, 1), // 0xC3
        op(Cpy, ZeroPage, 3), // 0xC4
        op(Cmp, ZeroPage, 3), // 0xC5
        op(Dec, ZeroPage, 5), // 0xC6
        op(Smb(4), ZeroPage, 5), // 0xC7
        op(Iny, Implicit, 2), // 0xC8
        op(Cmp, Immediate, 2), // 0xC9
        op(Dex, Implicit, 2), // 0xCA
        op(Wai, Implicit, 3), // 0xCB
        op(Cpy, Absolute, 4), // 0xCC
        op(Cmp, Absolute, 4), // 0xCD
        op(Dec, Absolute, 6), // 0xCE
        op(Bbs(4), ZeroPageRelative, 5), // 0xCF
        op(Bne, Relative, 2), // 0xD0
        op(Cmp, IndirectY, 5), // 0xD1
        op(Cmp, ZeroPageIndirect, 5), // 0xD2
        op(Reserved, Implicit, 1), // 0xD3
        op(Reserved, ZeroPageX, 4), // 0xD4
        op(Cmp, ZeroPageX, 4), // 0xD5
        op(Dec, ZeroPageX, 6), // 0xD6
        op(Smb(5), ZeroPage, 5), // 0xD7
        op(Cld, Implicit, 2), // 0xD8
        op(Cmp, AbsoluteY, 4), // 0xD9
        op(Phx, Implicit, 3), // 0xDA
        op(Stp, Implicit, 3), // 0xDB
        op(Reserved, Absolute, 4), // 0xDC
        op(Cmp, AbsoluteX, 4), // 0xDD
        op(Dec, AbsoluteX, 7), // 0xDE
        op(Bbs(5), ZeroPageRelative, 5), // 0xDF
        op(Cpx, Immediate, 2), // 0xE0
        op(Sbc, IndirectX, 6), // 0xE1
        op(Reserved, Immediate, 2), // 0xE2
        op(Reserved, Implicit, 1), // 0xE3
        op(Cpx, ZeroPage, 3), // 0xE4
        op(Sbc, ZeroPage, 3), // 0xE5
        op(Inc, ZeroPage, 5), // 0xE6
        op(Smb(6), ZeroPage, 5), // 0xE7
        op(Inx, Implicit, 2), // 0xE8
        op(Sbc, Immediate, 2), // 0xE9
        op(Nop, Implicit, 2), // 0xEA
        op(Reserved, Implicit, 1), // 0xEB
        op(Cpx, Absolute, 4), // 0xEC
        op(Sbc, Absolute, 4), // 0xED
        op(Inc, Absolute, 6), // 0xEE
        op(Bbs(6), ZeroPageRelative, 5), // 0xEF
        op(Beq, Relative, 2), // 0xF0
        op(Sbc, IndirectY, 5), // 0xF1
        op(Sbc, ZeroPageIndirect, 5), // 0xF2
        op(Reserved, Implicit, 1), // 0xF3
        op(Reserved, ZeroPageX, 4), // 0xF4
        op(Sbc, ZeroPageX, 4), // 0xF5
        op(Inc, ZeroPageX, 6), // 0xF6
        op(Smb(7), ZeroPage, 5), // 0xF7
        op(Sed, Implicit, 2), // 0xF8
        op(Sbc, AbsoluteY, 4), // 0xF9
        op(Plx, Implicit, 4), // 0xFA
        op(Reserved, Implicit, 1), // 0xFB
        op(Reserved, Absolute, 4), // 0xFC
        op(Sbc, AbsoluteX, 4), // 0xFD
        op(Inc, AbsoluteX, 7), // 0xFE
        op(Bbs(7), ZeroPageRelative, 5), // 0xFF
    ]
};
