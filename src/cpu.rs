//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 65C02 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (S): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status register** (P): packed N V - B D I Z C flags
//! - **Cycle counter**: u64 monotonically increasing cycle count
//! - **Interrupt lines**: latched NMI edge and IRQ level
//!
//! ## Execution Model
//!
//! The CPU executes via:
//! - `step()`: Service one pending interrupt or execute one instruction
//! - `run_for_cycles()`: Step until a cycle budget is exhausted
//!
//! Interrupt lines are sampled only at the start of `step()`, never in the
//! middle of an instruction.

use log::{trace, warn};

use crate::instructions;
use crate::{
    CpuConfig, ExecutionError, Flag, IllegalOpcodePolicy, MemoryBus, Operation, Stack,
    StatusRegister, OPCODE_TABLE,
};

/// Stack pointer value after reset.
pub(crate) const RESET_SP: u8 = 0xFD;

/// Execution state of the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Powered on but never reset; `step()` fails with `NotReset`.
    AwaitingReset,

    /// Fetching and executing instructions.
    Running,

    /// Parked by WAI until an IRQ or NMI is pending.
    Waiting,

    /// Halted by STP until the next reset.
    Stopped,
}

/// Snapshot of the programmer-visible register file.
///
/// # Examples
///
/// ```
/// use lib65c02::{CPU, FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0xFFFD, 0x80);
/// let mut cpu = CPU::new(mem);
///
/// let mut regs = cpu.registers();
/// regs.a = 0x42;
/// regs.pc = 0x9000;
/// cpu.set_registers(regs);
///
/// assert_eq!(cpu.a(), 0x42);
/// assert_eq!(cpu.pc(), 0x9000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Registers {
    /// Accumulator
    pub a: u8,
    /// X index register
    pub x: u8,
    /// Y index register
    pub y: u8,
    /// Program counter
    pub pc: u16,
    /// Stack pointer
    pub sp: u8,
    /// Status register as a byte
    pub p: u8,
}

/// 65C02 CPU state and execution context.
///
/// The CPU struct contains all processor state including registers, flags, program counter,
/// stack pointer, interrupt lines, and cycle counter. It is generic over the memory
/// implementation via the `MemoryBus` trait, and owns that memory exclusively; hosts reach it
/// through `memory()`/`memory_mut()` between steps.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use lib65c02::{CPU, FlatMemory, MemoryBus};
///
/// // Create memory and set reset vector
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Low byte
/// memory.write(0xFFFD, 0x80); // High byte (PC = 0x8000)
///
/// // Initialize CPU - loads PC from reset vector
/// let cpu = CPU::new(memory);
///
/// // Inspect initial state
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert_eq!(cpu.flag_i(), true); // Interrupt disable set on reset
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Hardware stack (0x0100 + S gives full stack address)
    pub(crate) stack: Stack,

    /// Processor status register
    pub(crate) p: StatusRegister,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    /// Current run state
    pub(crate) state: RunState,

    /// Address of the STP opcode that halted the CPU
    pub(crate) stopped_at: u16,

    /// IRQ line asserted by the host via `request_irq`
    pub(crate) irq_line: bool,

    /// NMI edge latched by `request_nmi`, cleared when serviced
    pub(crate) nmi_pending: bool,

    /// Chip-revision behavior
    pub(crate) config: CpuConfig,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus and runs the reset sequence.
    ///
    /// The CPU is initialized to the 65C02 power-on reset state:
    /// - Program counter (PC) is loaded from the reset vector at 0xFFFC/0xFFFD (little-endian)
    /// - Stack pointer (SP) is set to 0xFD
    /// - Status register has Interrupt Disable flag set (I = true)
    /// - All other registers (A, X, Y) are zeroed
    /// - Cycle counter is reset to 0
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
    /// let cpu = CPU::new(mem);
    /// assert_eq!(cpu.pc(), 0x8000);
    /// ```
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a CPU with an explicit configuration and runs the reset sequence.
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        let mut cpu = Self::power_on(memory, config);
        cpu.reset();
        cpu
    }

    /// Creates a CPU with all registers zeroed that has not been reset yet.
    ///
    /// Lets a host populate memory after construction; `step()` returns
    /// `ExecutionError::NotReset` until `reset()` is called.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib65c02::{CPU, CpuConfig, ExecutionError, FlatMemory, MemoryBus};
    ///
    /// let mut cpu = CPU::power_on(FlatMemory::new(), CpuConfig::default());
    /// assert_eq!(cpu.step(), Err(ExecutionError::NotReset));
    ///
    /// cpu.memory_mut().write(0xFFFD, 0x80);
    /// cpu.reset();
    /// assert_eq!(cpu.pc(), 0x8000);
    /// ```
    pub fn power_on(memory: M, config: CpuConfig) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            stack: Stack::new(0x00),
            p: StatusRegister::new(),
            cycles: 0,
            state: RunState::AwaitingReset,
            stopped_at: 0x0000,
            irq_line: false,
            nmi_pending: false,
            config,
            memory,
        }
    }

    /// Executes one step and returns the cycles it consumed.
    ///
    /// A step is one of:
    /// 1. Entering a pending NMI, or a pending IRQ when Interrupt Disable is clear (7 cycles)
    /// 2. One cycle of idling while parked by WAI
    /// 3. Fetch opcode at PC, resolve its operand, execute it
    ///
    /// # Errors
    ///
    /// - `ExecutionError::NotReset` if the CPU was powered on without a reset
    /// - `ExecutionError::Stopped` after STP
    /// - `ExecutionError::IllegalOpcode` for reserved opcodes under `IllegalOpcodePolicy::Trap`
    ///
    /// # Examples
    ///
    /// ```
    /// use lib65c02::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.write(0x8000, 0xEA); // NOP
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.step(), Ok(2));
    /// assert_eq!(cpu.pc(), 0x8001);
    /// ```
    pub fn step(&mut self) -> Result<u8, ExecutionError> {
        match self.state {
            RunState::AwaitingReset => return Err(ExecutionError::NotReset),
            RunState::Stopped => {
                return Err(ExecutionError::Stopped {
                    pc: self.stopped_at,
                })
            }
            RunState::Waiting => {
                if !self.nmi_pending && !self.irq_pending() {
                    self.cycles += 1;
                    return Ok(1);
                }
                // An IRQ wakes WAI even while masked; it is just not serviced
                self.state = RunState::Running;
            }
            RunState::Running => {}
        }

        if let Some(interrupt) = self.poll_interrupts() {
            return Ok(self.service_interrupt(interrupt));
        }

        self.execute_instruction()
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Steps until the cycle budget is exhausted or an error occurs. Returns
    /// the cycles actually consumed, which may overshoot the budget by part of
    /// an instruction.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib65c02::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// for addr in 0x8000..0x8010 {
    ///     mem.write(addr, 0xEA); // NOP, 2 cycles each
    /// }
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.run_for_cycles(10), Ok(10));
    /// assert_eq!(cpu.pc(), 0x8005);
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles.saturating_add(cycle_budget);

        while self.cycles < target_cycles {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    fn execute_instruction(&mut self) -> Result<u8, ExecutionError> {
        let start_cycles = self.cycles;
        let opcode_pc = self.pc;

        // Fetch
        let opcode = self.fetch_byte();

        // Decode
        let metadata = &OPCODE_TABLE[opcode as usize];
        let operand = self.resolve_operand(metadata.addressing_mode);

        trace!(
            "{:04X}  {:02X}  {:<4} {:?}  A:{:02X} X:{:02X} Y:{:02X} P:{} SP:{:02X}",
            opcode_pc,
            opcode,
            metadata.mnemonic(),
            operand,
            self.a,
            self.x,
            self.y,
            self.p,
            self.stack.pointer()
        );

        self.cycles += metadata.base_cycles as u64;
        if metadata.operation.has_page_cross_penalty() && operand.page_crossed() {
            self.cycles += 1;
        }

        if metadata.operation == Operation::Reserved {
            match self.config.illegal_opcodes {
                IllegalOpcodePolicy::Nop => {
                    warn!("Reserved opcode 0x{:02X} at 0x{:04X} executed as NOP", opcode, opcode_pc);
                }
                IllegalOpcodePolicy::Trap => {
                    warn!("Reserved opcode 0x{:02X} at 0x{:04X} trapped", opcode, opcode_pc);
                    return Err(ExecutionError::IllegalOpcode {
                        opcode,
                        pc: opcode_pc,
                    });
                }
            }
        }

        // Execute
        instructions::execute(self, metadata.operation, operand);

        Ok((self.cycles - start_cycles) as u8)
    }

    /// Pushes a byte onto the hardware stack.
    pub(crate) fn push(&mut self, value: u8) {
        self.stack.push(&mut self.memory, value);
    }

    /// Pops a byte from the hardware stack.
    pub(crate) fn pop(&mut self) -> u8 {
        self.stack.pop(&self.memory)
    }

    /// Pushes a 16-bit value high byte first.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.stack.push_word(&mut self.memory, value);
    }

    /// Pops a 16-bit value low byte first.
    pub(crate) fn pop_word(&mut self) -> u16 {
        self.stack.pop_word(&self.memory)
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.stack.pointer()
    }

    /// Returns the status register as a packed byte (NV-BDIZC, bit 5 always 1).
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
    /// let cpu = CPU::new(mem);
    ///
    /// // I flag set (bit 2), bit 5 always 1
    /// assert_eq!(cpu.status(), 0b0010_0100);
    /// ```
    pub fn status(&self) -> u8 {
        self.p.as_byte()
    }

    /// Returns the status register.
    pub fn status_register(&self) -> StatusRegister {
        self.p
    }

    /// Returns the total number of CPU cycles executed since power-on.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the current run state.
    pub fn run_state(&self) -> RunState {
        self.state
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Returns a snapshot of the register file.
    pub fn registers(&self) -> Registers {
        Registers {
            a: self.a,
            x: self.x,
            y: self.y,
            pc: self.pc,
            sp: self.stack.pointer(),
            p: self.p.as_byte(),
        }
    }

    // ========== Register Setters ==========

    /// Sets the accumulator register.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.stack.set_pointer(value);
    }

    /// Loads the status register from a byte, Break bit included.
    pub fn set_status(&mut self, value: u8) {
        self.p.load_byte(value);
    }

    /// Restores the whole register file from a snapshot.
    pub fn set_registers(&mut self, registers: Registers) {
        self.a = registers.a;
        self.x = registers.x;
        self.y = registers.y;
        self.pc = registers.pc;
        self.stack.set_pointer(registers.sp);
        self.p.load_byte(registers.p);
    }

    // ========== Status Flags ==========

    /// Returns true if `flag` is set.
    pub fn flag(&self, flag: Flag) -> bool {
        self.p.get(flag)
    }

    /// Sets or clears `flag`.
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.p.set(flag, value);
    }

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.p.get(Flag::NEGATIVE)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.p.get(Flag::OVERFLOW)
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.p.get(Flag::BREAK)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.p.get(Flag::DECIMAL)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.p.get(Flag::INTERRUPT_DISABLE)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.p.get(Flag::ZERO)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.p.get(Flag::CARRY)
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.p.set(Flag::NEGATIVE, value);
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.p.set(Flag::OVERFLOW, value);
    }

    /// Sets the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.p.set(Flag::BREAK, value);
    }

    /// Sets the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.p.set(Flag::DECIMAL, value);
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.p.set(Flag::INTERRUPT_DISABLE, value);
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.p.set(Flag::ZERO, value);
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.p.set(Flag::CARRY, value);
    }

    // ========== Memory Access ==========

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    ///
    /// Only call between steps; the CPU never holds memory across a step boundary.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns its memory bus.
    pub fn into_memory(self) -> M {
        self.memory
    }
}
