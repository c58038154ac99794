//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator
//! - PHP: Push Processor Status
//! - PLA: Pull Accumulator
//! - PLP: Pull Processor Status
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! A push writes to 0x0100 + SP then decrements SP; a pull increments SP then
//! reads. SP wraps modulo 256 in both directions.

use crate::{MemoryBus, Status, CPU};

/// Executes the PHA (Push Accumulator) instruction. Flags affected: none.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.push(cpu.a);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed copy always has B and the unused bit set; the live register is
/// left alone.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) {
    let pushed = cpu.status | Status::BREAK | Status::UNUSED;
    cpu.push(pushed.get_byte());
}

/// Executes the PLA (Pull Accumulator) instruction. Updates Z and N.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.pop();
    cpu.status.set_zn(cpu.a);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// All eight bits are restored exactly as they sit on the stack.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.pop();
    cpu.status.set_byte(status);
}
