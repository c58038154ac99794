//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - BRK: Force Interrupt
//! - JMP: Jump to address
//! - JSR / RTS: subroutine call and return
//! - RTI: return from interrupt
//! - NOP, and the no-op handler for illegal opcodes
//!
//! Return addresses go on the stack high byte first, then low byte.

use crate::cpu::IRQ_VECTOR;
use crate::{MemoryBus, Status, CPU};

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK forces a software interrupt by:
/// 1. Skipping the padding byte after the opcode (return address is BRK + 2)
/// 2. Pushing the return address, high byte first
/// 3. Pushing the status with B set; B is cleared again afterwards
/// 4. Setting the I (interrupt disable) flag
/// 5. Loading the PC from the IRQ vector at $FFFE/$FFFF
///
/// The CPU also raises its halt indicator so the host can stop clocking.
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.pc = cpu.pc.wrapping_add(1);
    cpu.push_word(cpu.pc);

    cpu.status.insert(Status::BREAK);
    cpu.push((cpu.status | Status::UNUSED).get_byte());
    cpu.status.remove(Status::BREAK);

    cpu.status.insert(Status::INTERRUPT_DISABLE);

    cpu.address_absolute = IRQ_VECTOR;
    cpu.pc = cpu.memory.read_word(cpu.address_absolute);
    cpu.halted = true;
    log::debug!("BRK: halted, vector 0x{:04X}", cpu.pc);
}

/// Executes the JMP (Jump) instruction.
///
/// Both forms (Absolute and Indirect) resolve the target during addressing, so
/// this only copies it into PC. No flags affected.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.pc = cpu.address_absolute;
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR instruction (PC - 1), which
/// RTS later increments.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>) {
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_word(return_address);
    cpu.pc = cpu.address_absolute;
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.pc = cpu.pop_word().wrapping_add(1);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Restores the status byte exactly as it was pushed, then the PC. Unlike RTS
/// the popped address is used as is.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.pop();
    cpu.status.set_byte(status);
    cpu.pc = cpu.pop_word();
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop<M: MemoryBus>(_cpu: &mut CPU<M>) {}

/// Handler for undocumented opcodes: burns the table's cycle count only.
pub(crate) fn execute_illegal<M: MemoryBus>(cpu: &mut CPU<M>) {
    log::trace!("illegal opcode 0x{:02X} treated as no-op", cpu.opcode);
}
