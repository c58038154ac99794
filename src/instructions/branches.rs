//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS.
//!
//! All branch instructions use relative addressing with a signed 8-bit offset,
//! already sign-extended into `address_relative` and with PC pointing past the
//! operand.
//!
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page

use crate::addressing::page_crossed;
use crate::{MemoryBus, Status, CPU};

/// Takes the branch when `condition` holds.
///
/// The page check compares the target against PC after the operand, which is
/// the address the CPU would otherwise continue from.
fn branch_if<M: MemoryBus>(cpu: &mut CPU<M>, condition: bool) {
    if !condition {
        return;
    }

    cpu.cycles += 1;
    cpu.address_absolute = cpu.pc.wrapping_add(cpu.address_relative);

    if page_crossed(cpu.address_absolute, cpu.pc) {
        cpu.cycles += 1;
    }

    cpu.pc = cpu.address_absolute;
}

/// Executes the BCC (Branch if Carry Clear) instruction.
pub(crate) fn execute_bcc<M: MemoryBus>(cpu: &mut CPU<M>) {
    let taken = !cpu.status.contains(Status::CARRY);
    branch_if(cpu, taken);
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs<M: MemoryBus>(cpu: &mut CPU<M>) {
    let taken = cpu.status.contains(Status::CARRY);
    branch_if(cpu, taken);
}

/// Executes the BEQ (Branch if Equal) instruction.
pub(crate) fn execute_beq<M: MemoryBus>(cpu: &mut CPU<M>) {
    let taken = cpu.status.contains(Status::ZERO);
    branch_if(cpu, taken);
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub(crate) fn execute_bne<M: MemoryBus>(cpu: &mut CPU<M>) {
    let taken = !cpu.status.contains(Status::ZERO);
    branch_if(cpu, taken);
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn execute_bmi<M: MemoryBus>(cpu: &mut CPU<M>) {
    let taken = cpu.status.contains(Status::NEGATIVE);
    branch_if(cpu, taken);
}

/// Executes the BPL (Branch if Positive) instruction.
pub(crate) fn execute_bpl<M: MemoryBus>(cpu: &mut CPU<M>) {
    let taken = !cpu.status.contains(Status::NEGATIVE);
    branch_if(cpu, taken);
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc<M: MemoryBus>(cpu: &mut CPU<M>) {
    let taken = !cpu.status.contains(Status::OVERFLOW);
    branch_if(cpu, taken);
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs<M: MemoryBus>(cpu: &mut CPU<M>) {
    let taken = cpu.status.contains(Status::OVERFLOW);
    branch_if(cpu, taken);
}
