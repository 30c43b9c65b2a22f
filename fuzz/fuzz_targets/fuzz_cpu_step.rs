//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register file, memory contents and configuration,
//! optionally raises interrupt lines, then runs a few steps. Any panic is a
//! bug; errors returned by `step()` are expected.

#![no_main]

use arbitrary::Arbitrary;
use lib65c02::{CpuConfig, FlatMemory, IllegalOpcodePolicy, MemoryBus, Registers, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Raw status byte, Break and bit 5 included
    p: u8,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (a few instructions)
    program: [u8; 16],
    /// Zero page contents (pointers for the indirect modes)
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Small region of memory for absolute addressing
    main_memory: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzConfig {
    indirect_jmp_page_wrap: bool,
    clear_decimal_on_interrupt: bool,
    php_pushes_break: bool,
    trap_illegal: bool,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    config: FuzzConfig,
    irq: bool,
    nmi: bool,
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    // Reset vector -> 0x8000, NMI -> 0xA000, IRQ/BRK -> 0x9000
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.write(0xFFFA, 0x00);
    memory.write(0xFFFB, 0xA0);
    memory.write(0xFFFE, 0x00);
    memory.write(0xFFFF, 0x90);

    for (i, &byte) in input.memory.program.iter().enumerate() {
        memory.write(0x8000 + i as u16, byte);
    }
    for (i, &byte) in input.memory.zero_page.iter().enumerate() {
        memory.write(i as u16, byte);
    }
    for (i, &byte) in input.memory.stack_page.iter().enumerate() {
        memory.write(0x0100 + i as u16, byte);
    }
    for (i, &byte) in input.memory.main_memory.iter().enumerate() {
        memory.write(0x4000 + i as u16, byte);
    }

    let config = CpuConfig {
        indirect_jmp_page_wrap: input.config.indirect_jmp_page_wrap,
        clear_decimal_on_interrupt: input.config.clear_decimal_on_interrupt,
        php_pushes_break: input.config.php_pushes_break,
        illegal_opcodes: if input.config.trap_illegal {
            IllegalOpcodePolicy::Trap
        } else {
            IllegalOpcodePolicy::Nop
        },
    };
    let mut cpu = CPU::with_config(memory, config);

    cpu.set_registers(Registers {
        a: input.cpu_state.a,
        x: input.cpu_state.x,
        y: input.cpu_state.y,
        pc: 0x8000,
        sp: input.cpu_state.sp,
        p: input.cpu_state.p,
    });

    if input.irq {
        cpu.request_irq();
    }
    if input.nmi {
        cpu.request_nmi();
    }

    for _ in 0..(input.steps % 8) + 1 {
        let before = cpu.cycles();
        match cpu.step() {
            Ok(cycles) => {
                // No instruction or interrupt sequence takes more than 8 cycles
                assert!((1..=8).contains(&cycles));
                assert_eq!(cpu.cycles(), before + cycles as u64);
            }
            Err(_) => break,
        }

        // Bit 5 always reads back as 1
        assert_eq!(cpu.status() & 0x20, 0x20);
    }
});
