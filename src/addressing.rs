//! # Addressing Modes
//!
//! This module defines the addressing modes supported by the 6502 processor.
//! Each mode determines how the CPU interprets operand bytes and calculates
//! effective addresses. The resolvers themselves live on [`crate::CPU`], since
//! they read the bus and advance the program counter.

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (load from address 0x0080 + X, wraps within zero page)
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y (load from address 0x0080 + Y, wraps within zero page)
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label (branch if zero flag set, offset is relative to PC)
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234 (jump to address 0x1234)
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer.
    ///
    /// Example: JMP ($FFFC) (jump to address stored at 0xFFFC/0xFFFD)
    /// Only used by JMP instruction. A pointer ending in 0xFF fetches its high
    /// byte from the start of the same page.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /// True for modes whose operand is the accumulator rather than memory.
    pub const fn uses_accumulator(self) -> bool {
        matches!(self, AddressingMode::Implied | AddressingMode::Accumulator)
    }
}

/// True if `a` and `b` lie on different 256-byte pages.
pub(crate) fn page_crossed(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

impl<M: MemoryBus> CPU<M> {
    /// Resolves the operand location for `mode`.
    ///
    /// Called with PC pointing just past the opcode. Consumes the operand bytes,
    /// sets `address_absolute` (or `address_relative` for branches, or `fetched`
    /// for accumulator operands) and returns true if indexing crossed a page.
    pub(crate) fn resolve_address(&mut self, mode: AddressingMode) -> bool {
        match mode {
            AddressingMode::Implied | AddressingMode::Accumulator => {
                self.fetched = self.a;
                false
            }
            AddressingMode::Immediate => {
                self.address_absolute = self.pc;
                self.pc = self.pc.wrapping_add(1);
                false
            }
            AddressingMode::ZeroPage => {
                self.address_absolute = self.read_pc() as u16;
                false
            }
            AddressingMode::ZeroPageX => {
                // Stays inside page zero
                self.address_absolute = self.read_pc().wrapping_add(self.x) as u16;
                false
            }
            AddressingMode::ZeroPageY => {
                self.address_absolute = self.read_pc().wrapping_add(self.y) as u16;
                false
            }
            AddressingMode::Relative => {
                // Sign-extend to 16 bits so a wrapping add moves PC backwards
                self.address_relative = self.read_pc() as i8 as i16 as u16;
                false
            }
            AddressingMode::Absolute => {
                self.address_absolute = self.read_pc_word();
                false
            }
            AddressingMode::AbsoluteX => {
                let base = self.read_pc_word();
                self.address_absolute = base.wrapping_add(self.x as u16);
                page_crossed(base, self.address_absolute)
            }
            AddressingMode::AbsoluteY => {
                let base = self.read_pc_word();
                self.address_absolute = base.wrapping_add(self.y as u16);
                page_crossed(base, self.address_absolute)
            }
            AddressingMode::Indirect => {
                let pointer = self.read_pc_word();

                // Hardware bug: the high byte never carries into the next page
                let hi_addr = if pointer & 0x00FF == 0x00FF {
                    pointer & 0xFF00
                } else {
                    pointer + 1
                };

                let lo = self.memory.read(pointer) as u16;
                let hi = self.memory.read(hi_addr) as u16;
                self.address_absolute = (hi << 8) | lo;
                false
            }
            AddressingMode::IndirectX => {
                let zp = self.read_pc().wrapping_add(self.x);
                let lo = self.memory.read(zp as u16) as u16;
                let hi = self.memory.read(zp.wrapping_add(1) as u16) as u16;
                self.address_absolute = (hi << 8) | lo;
                false
            }
            AddressingMode::IndirectY => {
                let zp = self.read_pc();
                let lo = self.memory.read(zp as u16) as u16;
                let hi = self.memory.read(zp.wrapping_add(1) as u16) as u16;
                let base = (hi << 8) | lo;
                self.address_absolute = base.wrapping_add(self.y as u16);
                page_crossed(base, self.address_absolute)
            }
        }
    }
}
