//! Kani bounded-model-checking proofs for stack, status and wraparound
//! invariants.
//!
//! To run these proofs, install Kani and run:
//! ```text
//! cargo kani --tests
//! ```
//!
//! They are compiled only under the `kani` cfg and are ignored by
//! `cargo test`.

// Allow the `kani` cfg which is set by the Kani verifier
#![allow(unexpected_cfgs)]

#[cfg(kani)]
mod kani_proofs {
    use lib65c02::{FlatMemory, MemoryBus, Stack, StatusRegister, CPU, OPCODE_TABLE};

    /// Helper function to create a CPU with reset vector at 0x8000
    fn setup_cpu() -> CPU<FlatMemory> {
        let mut memory = FlatMemory::new();
        memory.write(0xFFFC, 0x00);
        memory.write(0xFFFD, 0x80);
        CPU::new(memory)
    }

    // ========== Stack ==========

    #[kani::proof]
    fn proof_stack_address_always_in_stack_page() {
        let stack = Stack::new(kani::any());
        let addr = stack.top_address();

        kani::assert(
            (0x0100..=0x01FF).contains(&addr),
            "Stack address must be in range 0x0100-0x01FF",
        );
    }

    #[kani::proof]
    #[kani::unwind(2)]
    fn proof_push_pop_round_trip() {
        let sp: u8 = kani::any();
        let value: u8 = kani::any();
        let mut memory = FlatMemory::new();
        let mut stack = Stack::new(sp);

        stack.push(&mut memory, value);
        kani::assert(stack.pointer() == sp.wrapping_sub(1), "Push decrements S");

        let pulled = stack.pop(&memory);
        kani::assert(pulled == value, "Pop returns the pushed byte");
        kani::assert(stack.pointer() == sp, "Pop restores S");
    }

    // ========== Status register ==========

    #[kani::proof]
    fn proof_unused_bit_always_reads_one() {
        let byte: u8 = kani::any();
        let p = StatusRegister::from(byte);

        kani::assert(p.as_byte() & 0x20 != 0, "Bit 5 must read as 1");
        kani::assert(p.as_byte() | 0x20 == byte | 0x20, "Other bits survive");
    }

    #[kani::proof]
    fn proof_update_zn_matches_value() {
        let value: u8 = kani::any();
        let mut p = StatusRegister::new();
        p.update_zn(value);

        kani::assert((p.as_byte() & 0x02 != 0) == (value == 0), "Z iff zero");
        kani::assert((p.as_byte() & 0x80 != 0) == (value >= 0x80), "N iff bit 7");
    }

    // ========== Opcode table ==========

    #[kani::proof]
    fn proof_all_opcode_sizes_valid() {
        let opcode: u8 = kani::any();
        let metadata = &OPCODE_TABLE[opcode as usize];

        kani::assert(
            (1..=3).contains(&metadata.size_bytes),
            "All opcode sizes must be 1-3 bytes",
        );
        kani::assert(
            (1..=8).contains(&metadata.base_cycles),
            "Base cycles must be 1-8",
        );
    }

    // ========== Register wraparound ==========

    #[kani::proof]
    fn proof_inx_wraps() {
        let x: u8 = kani::any();
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0xE8); // INX
        cpu.set_x(x);

        kani::assert(cpu.step() == Ok(2), "INX takes 2 cycles");
        kani::assert(cpu.x() == x.wrapping_add(1), "INX wraps at 0xFF");
    }

    #[kani::proof]
    fn proof_zero_page_x_stays_in_zero_page() {
        let base: u8 = kani::any();
        let x: u8 = kani::any();
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0xB5); // LDA zp,X
        cpu.memory_mut().write(0x8001, base);
        cpu.memory_mut().write(base.wrapping_add(x) as u16, 0x5A);
        cpu.set_x(x);

        kani::assert(cpu.step() == Ok(4), "LDA zp,X takes 4 cycles");
        kani::assert(cpu.a() == 0x5A, "Effective address wraps within page zero");
    }
}
