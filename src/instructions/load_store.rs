//! # Load and Store Instructions
//!
//! Loads (LDA, LDX, LDY) read the operand and update Z and N.
//! Stores (STA, STX, STY) write a register to the effective address, never read
//! it, and affect no flags.

use crate::{MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.fetch();
    cpu.status.set_zn(cpu.a);
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.fetch();
    cpu.status.set_zn(cpu.x);
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.fetch();
    cpu.status.set_zn(cpu.y);
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.memory.write(cpu.address_absolute, cpu.a);
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.memory.write(cpu.address_absolute, cpu.x);
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.memory.write(cpu.address_absolute, cpu.y);
}
