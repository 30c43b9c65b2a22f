//! # CPU Configuration
//!
//! Behavioral switches for the places where 65xx revisions disagree. The
//! defaults describe a WDC W65C02S; `CpuConfig::nmos_compatible()` restores the
//! NMOS quirks that software written for the original 6502 sometimes relies on.

/// What the CPU does when it fetches one of the reserved opcode bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IllegalOpcodePolicy {
    /// Execute the reserved opcode as a NOP of its documented width and cost.
    #[default]
    Nop,

    /// Consume the reserved opcode like a NOP, then report
    /// `ExecutionError::IllegalOpcode` to the host.
    Trap,
}

/// Chip-revision behavior switches.
///
/// # Examples
///
/// ```
/// use lib65c02::{CpuConfig, IllegalOpcodePolicy};
///
/// let config = CpuConfig {
///     illegal_opcodes: IllegalOpcodePolicy::Trap,
///     ..CpuConfig::default()
/// };
/// assert!(!config.indirect_jmp_page_wrap);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CpuConfig {
    /// Reproduce the NMOS `JMP ($xxFF)` bug: the pointer's high byte is read
    /// from `$xx00` instead of the next page.
    pub indirect_jmp_page_wrap: bool,

    /// Clear the Decimal flag when entering BRK/IRQ/NMI handlers and on reset.
    pub clear_decimal_on_interrupt: bool,

    /// Force the Break bit in the byte PHP pushes. When false PHP pushes the
    /// status register exactly as it is.
    pub php_pushes_break: bool,

    /// Handling of reserved opcode bytes.
    pub illegal_opcodes: IllegalOpcodePolicy,
}

impl CpuConfig {
    /// WDC W65C02S behavior.
    pub const fn wdc65c02() -> Self {
        Self {
            indirect_jmp_page_wrap: false,
            clear_decimal_on_interrupt: true,
            php_pushes_break: false,
            illegal_opcodes: IllegalOpcodePolicy::Nop,
        }
    }

    /// NMOS 6502 quirks on top of the 65C02 instruction set.
    pub const fn nmos_compatible() -> Self {
        Self {
            indirect_jmp_page_wrap: true,
            clear_decimal_on_interrupt: false,
            php_pushes_break: true,
            illegal_opcodes: IllegalOpcodePolicy::Nop,
        }
    }
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self::wdc65c02()
    }
}
