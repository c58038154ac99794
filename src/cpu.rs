//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the per-cycle state machine that drives it.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status register**: packed [`Status`] flags
//! - **Addressing scratch**: `address_absolute`, `address_relative`, `fetched`,
//!   valid only between address resolution and execution of one instruction
//! - **Cycle countdown**: cycles left before the next opcode fetch
//!
//! ## Execution Model
//!
//! The host calls [`CPU::clock`] once per emulated cycle. When the countdown is
//! zero the CPU fetches, resolves the operand address, executes the whole
//! instruction and loads its cycle cost. Every following clock only drains the
//! countdown. Instruction effects are therefore visible right after the first
//! clock of an instruction, and the countdown reflects how long the hardware
//! would still be busy.
//!
//! Convenience drivers:
//! - `step()`: clock until the in-flight instruction has drained
//! - `run_for_cycles()`: clock an exact number of cycles

use crate::memory::RESET_VECTOR;
use crate::{instructions, MemoryBus, Status, INSTRUCTION_TABLE};

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Location of the IRQ/BRK vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Location of the NMI vector.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Cycles consumed by the reset sequence before the first fetch.
pub const RESET_CYCLES: u8 = 8;

/// Stack pointer value after reset.
pub const RESET_SP: u8 = 0xFD;

const IRQ_CYCLES: u8 = 7;
const NMI_CYCLES: u8 = 8;

/// 6502 CPU state and execution context.
///
/// Each CPU value owns its registers, flags, scratch state and memory bus. Nothing
/// is shared between instances.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use cycle6502::{CPU, FlatMemory, Status};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x8000, &[0xA9, 0x42]).unwrap(); // LDA #$42
/// memory.set_reset_vector(0x8000);
///
/// let mut cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
///
/// cpu.step(); // drain the reset sequence
/// cpu.step(); // LDA #$42
///
/// assert_eq!(cpu.a(), 0x42);
/// assert!(!cpu.flag(Status::ZERO));
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next byte to fetch)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    pub(crate) status: Status,

    /// Operand byte most recently read for the current instruction
    pub(crate) fetched: u8,

    /// Resolved effective address of the current instruction
    pub(crate) address_absolute: u16,

    /// Sign-extended branch displacement
    pub(crate) address_relative: u16,

    /// Opcode of the current instruction
    pub(crate) opcode: u8,

    /// Cycles left before the next fetch
    pub(crate) cycles: u8,

    /// Total clock pulses since construction
    pub(crate) clock_count: u64,

    /// Set by BRK, cleared by reset or resume
    pub(crate) halted: bool,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus and performs a reset.
    ///
    /// After construction the PC holds the reset vector and the CPU owes
    /// [`RESET_CYCLES`] clocks before it fetches its first opcode.
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0x00,
            status: Status::empty(),
            fetched: 0x00,
            address_absolute: 0x0000,
            address_relative: 0x0000,
            opcode: 0x00,
            cycles: 0,
            clock_count: 0,
            halted: false,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Forces the CPU into its reset state.
    ///
    /// - A, X, Y cleared, SP = 0xFD
    /// - Status cleared except for the Unused bit
    /// - Addressing scratch cleared, halt indicator cleared
    /// - PC loaded from the little-endian vector at 0xFFFC/0xFFFD
    /// - 8 cycles owed before the first fetch
    pub fn reset(&mut self) {
        self.address_absolute = RESET_VECTOR;
        self.pc = self.memory.read_word(self.address_absolute);

        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.sp = RESET_SP;
        self.status = Status::UNUSED;

        self.address_absolute = 0x0000;
        self.address_relative = 0x0000;
        self.fetched = 0x00;
        self.halted = false;

        self.cycles = RESET_CYCLES;
        log::debug!("reset: pc=0x{:04X}", self.pc);
    }

    /// Requests a maskable interrupt.
    ///
    /// Ignored while the Interrupt Disable flag is set. Otherwise pushes PC and
    /// status (Break clear), sets Interrupt Disable and jumps through 0xFFFE.
    pub fn irq(&mut self) {
        if self.status.contains(Status::INTERRUPT_DISABLE) {
            log::trace!("irq masked");
            return;
        }
        self.interrupt(IRQ_VECTOR, IRQ_CYCLES);
    }

    /// Raises a non-maskable interrupt through 0xFFFA.
    pub fn nmi(&mut self) {
        self.interrupt(NMI_VECTOR, NMI_CYCLES);
    }

    fn interrupt(&mut self, vector: u16, cycles: u8) {
        self.push_word(self.pc);

        let mut pushed = self.status;
        pushed.remove(Status::BREAK);
        pushed.insert(Status::UNUSED);
        self.push(pushed.get_byte());
        self.status.insert(Status::INTERRUPT_DISABLE);

        self.address_absolute = vector;
        self.pc = self.memory.read_word(self.address_absolute);
        self.cycles = cycles;
        log::debug!("interrupt via 0x{:04X}: pc=0x{:04X}", vector, self.pc);
    }

    /// Advances the CPU by exactly one cycle.
    ///
    /// On the first cycle of an instruction this fetches, decodes, resolves the
    /// operand and executes; any extra cycles (page crossing, taken branch) are
    /// added before the countdown is decremented.
    pub fn clock(&mut self) {
        if self.cycles == 0 {
            self.opcode = self.memory.read(self.pc);
            let instruction = INSTRUCTION_TABLE[self.opcode as usize];

            log::trace!(
                "clock {:>8}  pc 0x{:04X}  op 0x{:02X} {} ({})  a {:02X} x {:02X} y {:02X} sp {:02X} p {:02X}",
                self.clock_count,
                self.pc,
                self.opcode,
                instruction.mnemonic,
                instruction.cycles,
                self.a,
                self.x,
                self.y,
                self.sp,
                self.status.get_byte(),
            );

            self.pc = self.pc.wrapping_add(1);
            self.cycles = instruction.cycles;

            let page_crossed = self.resolve_address(instruction.mode);
            instructions::execute(self, instruction.operation);

            if page_crossed && instruction.operation.takes_page_penalty() {
                self.cycles += 1;
            }
        }

        self.cycles -= 1;
        self.clock_count += 1;
    }

    /// Returns true when no instruction is in flight.
    pub fn complete(&self) -> bool {
        self.cycles == 0
    }

    /// Clocks until the in-flight work has drained.
    ///
    /// If nothing is in flight this executes exactly one instruction. Right after
    /// a reset or interrupt request it drains that sequence instead. Returns the
    /// number of clocks consumed.
    pub fn step(&mut self) -> u32 {
        let mut clocks = 0;
        loop {
            self.clock();
            clocks += 1;
            if self.complete() {
                return clocks;
            }
        }
    }

    /// Clocks the CPU exactly `cycles` times.
    ///
    /// Useful for frame-locked hosts that run a fixed cycle budget; the last
    /// instruction may still be draining when this returns.
    pub fn run_for_cycles(&mut self, cycles: u64) {
        for _ in 0..cycles {
            self.clock();
        }
    }

    // ========== Bus Helpers ==========

    /// Reads the byte at PC and advances PC.
    pub(crate) fn read_pc(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads a little-endian word at PC and advances PC by two.
    pub(crate) fn read_pc_word(&mut self) -> u16 {
        let lo = self.read_pc() as u16;
        let hi = self.read_pc() as u16;
        (hi << 8) | lo
    }

    /// Reads the operand of the current instruction into `fetched`.
    ///
    /// Accumulator-operand modes already loaded `fetched` during address
    /// resolution, so no bus access happens for them.
    pub(crate) fn fetch(&mut self) -> u8 {
        let mode = INSTRUCTION_TABLE[self.opcode as usize].mode;
        if !mode.uses_accumulator() {
            self.fetched = self.memory.read(self.address_absolute);
        }
        self.fetched
    }

    /// Stores a read-modify-write result back to the accumulator or memory,
    /// depending on the current addressing mode.
    pub(crate) fn write_back(&mut self, value: u8) {
        let mode = INSTRUCTION_TABLE[self.opcode as usize].mode;
        if mode.uses_accumulator() {
            self.a = value;
        } else {
            self.memory.write(self.address_absolute, value);
        }
    }

    // ========== Stack Helpers ==========

    /// Writes to 0x0100 + SP, then decrements SP (wrapping).
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE + self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP (wrapping), then reads 0x0100 + SP.
    pub(crate) fn pop(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE + self.sp as u16)
    }

    /// Pushes high byte first, then low byte.
    pub(crate) fn push_word(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push(hi);
        self.push(lo);
    }

    pub(crate) fn pop_word(&mut self) -> u16 {
        let lo = self.pop();
        let hi = self.pop();
        u16::from_le_bytes([lo, hi])
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns a copy of the status register.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns true if every flag in `flag` is set.
    ///
    /// ```
    /// use cycle6502::{CPU, FlatMemory, Status};
    ///
    /// let cpu = CPU::new(FlatMemory::new());
    /// assert!(cpu.flag(Status::UNUSED));
    /// assert!(!cpu.flag(Status::CARRY));
    /// ```
    pub fn flag(&self, flag: Status) -> bool {
        self.status.contains(flag)
    }

    /// Returns true after a BRK until the host calls `resume()` or `reset()`.
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Opcode of the instruction most recently fetched.
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    /// Operand byte most recently read by the current instruction.
    pub fn fetched(&self) -> u8 {
        self.fetched
    }

    /// Effective address resolved for the current instruction.
    pub fn address_absolute(&self) -> u16 {
        self.address_absolute
    }

    /// Sign-extended branch displacement of the last relative-mode instruction.
    pub fn address_relative(&self) -> u16 {
        self.address_relative
    }

    /// Cycles left before the next opcode fetch.
    pub fn cycles_remaining(&self) -> u8 {
        self.cycles
    }

    /// Total clock pulses since construction. Not cleared by reset.
    pub fn clock_count(&self) -> u64 {
        self.clock_count
    }

    pub fn memory(&self) -> &M {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Host Setters ==========

    /// Clears the halt indicator raised by BRK.
    pub fn resume(&mut self) {
        self.halted = false;
    }

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Sets or clears the given flag(s).
    pub fn set_flag(&mut self, flag: Status, value: bool) {
        self.status.set(flag, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn cpu_at(origin: u16, program: &[u8]) -> CPU<FlatMemory> {
        let mut mem = FlatMemory::new();
        mem.load(origin, program).unwrap();
        mem.set_reset_vector(origin);
        let mut cpu = CPU::new(mem);
        cpu.step();
        cpu
    }

    #[test]
    fn test_cpu_initialization() {
        let mut mem = FlatMemory::new();
        mem.set_reset_vector(0x8000);

        let cpu = CPU::new(mem);

        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.status(), Status::UNUSED);
        assert_eq!(cpu.cycles_remaining(), RESET_CYCLES);
        assert_eq!(cpu.clock_count(), 0);
        assert!(!cpu.halted());
    }

    #[test]
    fn test_reset_takes_eight_clocks() {
        let mut mem = FlatMemory::new();
        mem.set_reset_vector(0x8000);
        let mut cpu = CPU::new(mem);

        assert_eq!(cpu.step(), 8);
        assert!(cpu.complete());
        // No fetch happened yet
        assert_eq!(cpu.pc(), 0x8000);
    }

    #[test]
    fn test_stack_push_pop_wraps() {
        let mut cpu = cpu_at(0x8000, &[0xEA]);
        cpu.set_sp(0x00);

        cpu.push(0xAB);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.memory().read(0x0100), 0xAB);

        assert_eq!(cpu.pop(), 0xAB);
        assert_eq!(cpu.sp(), 0x00);
    }

    #[test]
    fn test_push_word_high_byte_first() {
        let mut cpu = cpu_at(0x8000, &[0xEA]);

        cpu.push_word(0x1234);
        assert_eq!(cpu.memory().read(0x01FD), 0x12);
        assert_eq!(cpu.memory().read(0x01FC), 0x34);
        assert_eq!(cpu.pop_word(), 0x1234);
        assert_eq!(cpu.sp(), 0xFD);
    }

    #[test]
    fn test_effects_visible_after_first_clock() {
        // LDA $10 (3 cycles)
        let mut cpu = cpu_at(0x8000, &[0xA5, 0x10]);
        cpu.memory_mut().write(0x0010, 0x77);

        cpu.clock();
        assert_eq!(cpu.a(), 0x77);
        assert_eq!(cpu.cycles_remaining(), 2);

        cpu.clock();
        cpu.clock();
        assert!(cpu.complete());
    }

    #[test]
    fn test_irq_ignored_when_interrupts_disabled() {
        let mut cpu = cpu_at(0x8000, &[0xEA]);
        cpu.memory_mut().write(0xFFFE, 0x00);
        cpu.memory_mut().write(0xFFFF, 0x90);

        cpu.set_flag(Status::INTERRUPT_DISABLE, true);
        cpu.irq();
        assert_eq!(cpu.pc(), 0x8000);
        assert!(cpu.complete());
    }
}
