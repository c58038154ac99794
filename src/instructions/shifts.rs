//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works on the accumulator (Accumulator mode) or on memory
//! (read-modify-write). The bit shifted out lands in C; Z and N follow the result.

use crate::{MemoryBus, Status, CPU};

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 7 goes to carry, bit 0 becomes 0.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch();
    let result = value << 1;

    cpu.status.set(Status::CARRY, value & 0x80 != 0);
    cpu.status.set_zn(result);
    cpu.write_back(result);
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 0 goes to carry, bit 7 becomes 0, so N always ends up clear.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch();
    let result = value >> 1;

    cpu.status.set(Status::CARRY, value & 0x01 != 0);
    cpu.status.set_zn(result);
    cpu.write_back(result);
}

/// Executes the ROL (Rotate Left) instruction.
///
/// Old carry enters bit 0, bit 7 goes to carry.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch();
    let carry_in = cpu.status.contains(Status::CARRY) as u8;
    let result = (value << 1) | carry_in;

    cpu.status.set(Status::CARRY, value & 0x80 != 0);
    cpu.status.set_zn(result);
    cpu.write_back(result);
}

/// Executes the ROR (Rotate Right) instruction.
///
/// Old carry enters bit 7, bit 0 goes to carry.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch();
    let carry_in = cpu.status.contains(Status::CARRY) as u8;
    let result = (value >> 1) | (carry_in << 7);

    cpu.status.set(Status::CARRY, value & 0x01 != 0);
    cpu.status.set_zn(result);
    cpu.write_back(result);
}
