//! # Flag Instructions
//!
//! CLC, SEC, CLI, SEI, CLD, SED and CLV each set or clear a single status
//! flag and touch nothing else.

use crate::{Flag, MemoryBus, CPU};

/// Sets `flag` to `value`.
pub(crate) fn execute_flag<M: MemoryBus>(cpu: &mut CPU<M>, flag: Flag, value: bool) {
    cpu.p.set(flag, value);
}
