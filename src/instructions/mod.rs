//! # 65C02 Instruction Implementations
//!
//! This module contains the implementations of all 65C02 instructions, organized by category.
//! Each handler receives the CPU and the operand the addressing-mode resolver produced. PC
//! already points at the next instruction and the base cycle cost has been charged, so
//! handlers only add the penalties specific to them.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **bits**: Bit set/reset operations (TRB, TSB, RMB, SMB)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS,
//!   BRA, BBR, BBS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY, STZ)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP, WAI, STP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP, PHX, PHY, PLX, PLY)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

mod alu;
mod bits;
mod branches;
mod control;
mod flags;
mod inc_dec;
mod load_store;
mod shifts;
mod stack;
mod transfer;

use crate::{Flag, MemoryBus, Operand, Operation, CPU};

/// Dispatches one decoded instruction to its handler.
pub(crate) fn execute<M: MemoryBus>(cpu: &mut CPU<M>, operation: Operation, operand: Operand) {
    match operation {
        // Arithmetic and logic
        Operation::Adc => alu::execute_adc(cpu, operand),
        Operation::Sbc => alu::execute_sbc(cpu, operand),
        Operation::And => alu::execute_and(cpu, operand),
        Operation::Ora => alu::execute_ora(cpu, operand),
        Operation::Eor => alu::execute_eor(cpu, operand),
        Operation::Cmp => alu::execute_cmp(cpu, operand),
        Operation::Cpx => alu::execute_cpx(cpu, operand),
        Operation::Cpy => alu::execute_cpy(cpu, operand),
        Operation::Bit => alu::execute_bit(cpu, operand),

        // Bit manipulation
        Operation::Trb => bits::execute_trb(cpu, operand),
        Operation::Tsb => bits::execute_tsb(cpu, operand),
        Operation::Rmb(bit) => bits::execute_rmb(cpu, operand, bit),
        Operation::Smb(bit) => bits::execute_smb(cpu, operand, bit),

        // Branches
        Operation::Bpl => branches::execute_branch(cpu, operand, Flag::NEGATIVE, false),
        Operation::Bmi => branches::execute_branch(cpu, operand, Flag::NEGATIVE, true),
        Operation::Bvc => branches::execute_branch(cpu, operand, Flag::OVERFLOW, false),
        Operation::Bvs => branches::execute_branch(cpu, operand, Flag::OVERFLOW, true),
        Operation::Bcc => branches::execute_branch(cpu, operand, Flag::CARRY, false),
        Operation::Bcs => branches::execute_branch(cpu, operand, Flag::CARRY, true),
        Operation::Bne => branches::execute_branch(cpu, operand, Flag::ZERO, false),
        Operation::Beq => branches::execute_branch(cpu, operand, Flag::ZERO, true),
        Operation::Bra => branches::execute_bra(cpu, operand),
        Operation::Bbr(bit) => branches::execute_bbr(cpu, operand, bit),
        Operation::Bbs(bit) => branches::execute_bbs(cpu, operand, bit),

        // Shifts and rotates
        Operation::Asl => shifts::execute_asl(cpu, operand),
        Operation::Lsr => shifts::execute_lsr(cpu, operand),
        Operation::Rol => shifts::execute_rol(cpu, operand),
        Operation::Ror => shifts::execute_ror(cpu, operand),

        // Loads and stores
        Operation::Lda => load_store::execute_lda(cpu, operand),
        Operation::Ldx => load_store::execute_ldx(cpu, operand),
        Operation::Ldy => load_store::execute_ldy(cpu, operand),
        Operation::Sta => load_store::execute_sta(cpu, operand),
        Operation::Stx => load_store::execute_stx(cpu, operand),
        Operation::Sty => load_store::execute_sty(cpu, operand),
        Operation::Stz => load_store::execute_stz(cpu, operand),

        // Increments and decrements
        Operation::Inc => inc_dec::execute_inc(cpu, operand),
        Operation::Dec => inc_dec::execute_dec(cpu, operand),
        Operation::Inx => inc_dec::execute_inx(cpu),
        Operation::Iny => inc_dec::execute_iny(cpu),
        Operation::Dex => inc_dec::execute_dex(cpu),
        Operation::Dey => inc_dec::execute_dey(cpu),

        // Control flow
        Operation::Jmp => control::execute_jmp(cpu, operand),
        Operation::Jsr => control::execute_jsr(cpu, operand),
        Operation::Rts => control::execute_rts(cpu),
        Operation::Rti => control::execute_rti(cpu),
        Operation::Brk => control::execute_brk(cpu),
        Operation::Wai => control::execute_wai(cpu),
        Operation::Stp => control::execute_stp(cpu),
        Operation::Nop | Operation::Reserved => {}

        // Stack
        Operation::Pha => stack::execute_pha(cpu),
        Operation::Php => stack::execute_php(cpu),
        Operation::Phx => stack::execute_phx(cpu),
        Operation::Phy => stack::execute_phy(cpu),
        Operation::Pla => stack::execute_pla(cpu),
        Operation::Plp => stack::execute_plp(cpu),
        Operation::Plx => stack::execute_plx(cpu),
        Operation::Ply => stack::execute_ply(cpu),

        // Flags
        Operation::Clc => flags::execute_flag(cpu, Flag::CARRY, false),
        Operation::Sec => flags::execute_flag(cpu, Flag::CARRY, true),
        Operation::Cli => flags::execute_flag(cpu, Flag::INTERRUPT_DISABLE, false),
        Operation::Sei => flags::execute_flag(cpu, Flag::INTERRUPT_DISABLE, true),
        Operation::Cld => flags::execute_flag(cpu, Flag::DECIMAL, false),
        Operation::Sed => flags::execute_flag(cpu, Flag::DECIMAL, true),
        Operation::Clv => flags::execute_flag(cpu, Flag::OVERFLOW, false),

        // Transfers
        Operation::Tax => transfer::execute_tax(cpu),
        Operation::Tay => transfer::execute_tay(cpu),
        Operation::Txa => transfer::execute_txa(cpu),
        Operation::Tya => transfer::execute_tya(cpu),
        Operation::Tsx => transfer::execute_tsx(cpu),
        Operation::Txs => transfer::execute_txs(cpu),
    }
}
