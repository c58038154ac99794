//! # Increment and Decrement Instructions
//!
//! INC/DEC operate on memory; INX, INY, DEX, DEY on the index registers.
//! All wrap modulo 256 and update Z and N from the result. Carry is untouched.

use crate::{MemoryBus, CPU};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>) {
    let result = cpu.fetch().wrapping_add(1);
    cpu.memory.write(cpu.address_absolute, result);
    cpu.status.set_zn(result);
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>) {
    let result = cpu.fetch().wrapping_sub(1);
    cpu.memory.write(cpu.address_absolute, result);
    cpu.status.set_zn(result);
}

pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.status.set_zn(cpu.x);
}

pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.status.set_zn(cpu.y);
}

pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.status.set_zn(cpu.x);
}

pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.status.set_zn(cpu.y);
}
