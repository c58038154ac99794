//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC, SBC: binary add/subtract with carry (decimal mode is not emulated)
//! - AND, ORA, EOR: bitwise logic on the accumulator
//! - CMP, CPX, CPY: compare a register against memory without modifying it
//! - BIT: test accumulator bits against memory

use crate::{MemoryBus, Status, CPU};

/// Adds `value` and the carry flag to the accumulator, updating C, Z, V, N.
///
/// Shared by ADC and SBC (which passes the one's complement of its operand).
fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let carry_in = cpu.status.contains(Status::CARRY) as u16;

    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    cpu.status.set(Status::CARRY, sum > 0xFF);

    // Overflow: both operands share a sign that the result does not
    // V = (A^result) & (M^result) & 0x80
    cpu.status
        .set(Status::OVERFLOW, (a ^ result) & (value ^ result) & 0x80 != 0);

    cpu.status.set_zn(result);
    cpu.a = result;
}

/// Executes the ADC (Add with Carry) instruction.
///
/// A = A + M + C. Updates C, Z, V and N.
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch();
    add_with_carry(cpu, value);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// A = A - M - (1 - C), computed as A + !M + C. Carry set means no borrow.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch();
    add_with_carry(cpu, value ^ 0xFF);
}

/// Executes the AND (Logical AND) instruction. Updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch();
    cpu.a &= value;
    cpu.status.set_zn(cpu.a);
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch();
    cpu.a |= value;
    cpu.status.set_zn(cpu.a);
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch();
    cpu.a ^= value;
    cpu.status.set_zn(cpu.a);
}

/// Sets C, Z and N as if `value` were subtracted from `register`.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, value: u8) {
    cpu.status.set(Status::CARRY, register >= value);
    cpu.status.set_zn(register.wrapping_sub(value));
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch();
    let register = cpu.a;
    compare(cpu, register, value);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch();
    let register = cpu.x;
    compare(cpu, register, value);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch();
    let register = cpu.y;
    compare(cpu, register, value);
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z is set from A & M; N and V are copied from bits 7 and 6 of M.
/// The accumulator is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch();
    cpu.status.set(Status::ZERO, cpu.a & value == 0);
    cpu.status.set(Status::NEGATIVE, value & 0x80 != 0);
    cpu.status.set(Status::OVERFLOW, value & 0x40 != 0);
}
