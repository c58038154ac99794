//! # Status Flag Instructions
//!
//! CLC, SEC, CLI, SEI, CLD, SED, CLV. Each touches exactly one flag.

use crate::{MemoryBus, Status, CPU};

pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.remove(Status::CARRY);
}

pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.insert(Status::CARRY);
}

pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.remove(Status::INTERRUPT_DISABLE);
}

pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.insert(Status::INTERRUPT_DISABLE);
}

pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.remove(Status::DECIMAL);
}

/// Sets D. ADC/SBC keep using binary arithmetic.
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.insert(Status::DECIMAL);
}

pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.remove(Status::OVERFLOW);
}
