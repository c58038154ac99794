//! # Instruction Table
//!
//! This module contains the complete 256-entry instruction table that serves as the
//! single source of truth for decoding. Each entry pairs a mnemonic with the
//! operation the CPU executes, the addressing mode it resolves first, and its base
//! cycle cost.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **2 unofficial NOPs** (0xDA, 0xFA) - Single-byte, 2 cycles
//! - **103 illegal opcodes** - Marked with "???", no effect, fixed cycle cost
//!
//! The table is a `const` built at compile time and never mutated. Dispatch is a
//! plain index followed by a `match` on [`Operation`].

use crate::addressing::AddressingMode;

/// The execution routine selected by an opcode.
///
/// One variant per documented 6502 mnemonic, plus [`Operation::Illegal`] for
/// undocumented slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    /// Undocumented opcode: consumes its cycles, changes nothing.
    Illegal,
}

impl Operation {
    /// Whether a page crossing during address resolution costs this operation
    /// an extra cycle.
    ///
    /// Only the read instructions pay it. Stores and read-modify-write
    /// instructions have the worst case folded into their base cycle count.
    pub const fn takes_page_penalty(self) -> bool {
        matches!(
            self,
            Operation::Adc
                | Operation::And
                | Operation::Cmp
                | Operation::Eor
                | Operation::Lda
                | Operation::Ldx
                | Operation::Ldy
                | Operation::Ora
                | Operation::Sbc
        )
    }
}

/// Immutable descriptor for a single opcode.
///
/// # Examples
///
/// ```
/// use cycle6502::{AddressingMode, Operation, INSTRUCTION_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &INSTRUCTION_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.operation, Operation::Lda);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.cycles, 2);
/// assert_eq!(lda_imm.size(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// Instruction mnemonic (e.g., "LDA", "STA", "???" for illegal opcodes).
    pub mnemonic: &'static str,

    /// Execution routine.
    pub operation: Operation,

    /// Addressing mode resolved before the operation runs.
    pub mode: AddressingMode,

    /// Base cycle cost (before page crossing and branch penalties).
    pub cycles: u8,
}

impl Instruction {
    /// Total encoded size in bytes (opcode + operands).
    ///
    /// BRK reports 1 even though it skips a padding byte when executed.
    pub const fn size(&self) -> u8 {
        1 + self.mode.operand_bytes()
    }

    /// False for the "???" slots.
    pub const fn is_legal(&self) -> bool {
        !matches!(self.operation, Operation::Illegal)
    }
}

const fn ins(
    mnemonic: &'static str,
    operation: Operation,
    mode: AddressingMode,
    cycles: u8,
) -> Instruction {
    Instruction {
        mnemonic,
        operation,
        mode,
        cycles,
    }
}

const fn illegal(cycles: u8) -> Instruction {
    ins("???", Operation::Illegal, AddressingMode::Implied, cycles)
}

/// Complete 256-entry instruction table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use cycle6502::INSTRUCTION_TABLE;
///
/// let brk = &INSTRUCTION_TABLE[0x00];
/// assert_eq!(brk.mnemonic, "BRK");
/// assert_eq!(brk.cycles, 7);
///
/// // Illegal opcodes still carry a cycle cost
/// let illegal = &INSTRUCTION_TABLE[0x02];
/// assert_eq!(illegal.mnemonic, "???");
/// assert!(!illegal.is_legal());
/// assert_eq!(illegal.cycles, 2);
/// ```
pub const INSTRUCTION_TABLE: [Instruction; 256] = [
    ins("BRK", Operation::Brk, AddressingMode::Implied, 7), // 0x00
    ins("ORA", Operation::Ora, AddressingMode::IndirectX, 6), // 0x01
    illegal(2), // 0x02
    illegal(8), // 0x03
    illegal(3), // 0x04
    ins("ORA", Operation::Ora, AddressingMode::ZeroPage, 3), // 0x05
    ins("ASL", Operation::Asl, AddressingMode::ZeroPage, 5), // 0x06
    illegal(5), // 0x07
    ins("PHP", Operation::Php, AddressingMode::Implied, 3), // 0x08
    ins("ORA", Operation::Ora, AddressingMode::Immediate, 2), // 0x09
    ins("ASL", Operation::Asl, AddressingMode::Accumulator, 2), // 0x0A
    illegal(2), // 0x0B
    illegal(4), // 0x0C
    ins("ORA", Operation::Ora, AddressingMode::Absolute, 4), // 0x0D
    ins("ASL", Operation::Asl, AddressingMode::Absolute, 6), // 0x0E
    illegal(6), // 0x0F
    ins("BPL", Operation::Bpl, AddressingMode::Relative, 2), // 0x10
    ins("ORA", Operation::Ora, AddressingMode::IndirectY, 5), // 0x11
    illegal(2), // 0x12
    illegal(8), // 0x13
    illegal(4), // 0x14
    ins("ORA", Operation::Ora, AddressingMode::ZeroPageX, 4), // 0x15
    ins("ASL", Operation::Asl, AddressingMode::ZeroPageX, 6), // 0x16
    illegal(6), // 0x17
    ins("CLC", Operation::Clc, AddressingMode::Implied, 2), // 0x18
    ins("ORA", Operation::Ora, AddressingMode::AbsoluteY, 4), // 0x19
    illegal(2), // 0x1A
    illegal(7), // 0x1B
    illegal(4), // 0x1C
    ins("ORA", Operation::Ora, AddressingMode::AbsoluteX, 4), // 0x1D
    ins("ASL", Operation::Asl, AddressingMode::AbsoluteX, 7), // 0x1E
    illegal(7), // 0x1F
    ins("JSR", Operation::Jsr, AddressingMode::Absolute, 6), // 0x20
    ins("AND", Operation::And, AddressingMode::IndirectX, 6), // 0x21
    illegal(2), // 0x22
    illegal(8), // 0x23
    ins("BIT", Operation::Bit, AddressingMode::ZeroPage, 3), // 0x24
    ins("AND", Operation::And, AddressingMode::ZeroPage, 3), // 0x25
    ins("ROL", Operation::Rol, AddressingMode::ZeroPage, 5), // 0x26
    illegal(5), // 0x27
    ins("PLP", Operation::Plp, AddressingMode::Implied, 4), // 0x28
    ins("AND", Operation::And, AddressingMode::Immediate, 2), // 0x29
    ins("ROL", Operation::Rol, AddressingMode::Accumulator, 2), // 0x2A
    illegal(2), // 0x2B
    ins("BIT", Operation::Bit, AddressingMode::Absolute, 4), // 0x2C
    ins("AND", Operation::And, AddressingMode::Absolute, 4), // 0x2D
    ins("ROL", Operation::Rol, AddressingMode::Absolute, 6), // 0x2E
    illegal(6), // 0x2F
    ins("BMI", Operation::Bmi, AddressingMode::Relative, 2), // 0x30
    ins("AND", Operation::And, AddressingMode::IndirectY, 5), // 0x31
    illegal(2), // 0x32
    illegal(8), // 0x33
    illegal(4), // 0x34
    ins("AND", Operation::And, AddressingMode::ZeroPageX, 4), // 0x35
    ins("ROL", Operation::Rol, AddressingMode::ZeroPageX, 6), // 0x36
    illegal(6), // 0x37
    ins("SEC", Operation::Sec, AddressingMode::Implied, 2), // 0x38
    ins("AND", Operation::And, AddressingMode::AbsoluteY, 4), // 0x39
    illegal(2), // 0x3A
    illegal(7), // 0x3B
    illegal(4), // 0x3C
    ins("AND", Operation::And, AddressingMode::AbsoluteX, 4), // 0x3D
    ins("ROL", Operation::Rol, AddressingMode::AbsoluteX, 7), // 0x3E
    illegal(7), // 0x3F
    ins("RTI", Operation::Rti, AddressingMode::Implied, 6), // 0x40
    ins("EOR", Operation::Eor, AddressingMode::IndirectX, 6), // 0x41
    illegal(2), // 0x42
    illegal(8), // 0x43
    illegal(3), // 0x44
    ins("EOR", Operation::Eor, AddressingMode::ZeroPage, 3), // 0x45
    ins("LSR", Operation::Lsr, AddressingMode::ZeroPage, 5), // 0x46
    illegal(5), // 0x47
    ins("PHA", Operation::Pha, AddressingMode::Implied, 3), // 0x48
    ins("EOR", Operation::Eor, AddressingMode::Immediate, 2), // 0x49
    ins("LSR", Operation::Lsr, AddressingMode::Accumulator, 2), // 0x4A
    illegal(2), // 0x4B
    ins("JMP", Operation::Jmp, AddressingMode::Absolute, 3), // 0x4C
    ins("EOR", Operation::Eor, AddressingMode::Absolute, 4), // 0x4D
    ins("LSR", Operation::Lsr, AddressingMode::Absolute, 6), // 0x4E
    illegal(6), // 0x4F
    ins("BVC", Operation::Bvc, AddressingMode::Relative, 2), // 0x50
    ins("EOR", Operation::Eor, AddressingMode::IndirectY, 5), // 0x51
    illegal(2), // 0x52
    illegal(8), // 0x53
    illegal(4), // 0x54
    ins("EOR", Operation::Eor, AddressingMode::ZeroPageX, 4), // 0x55
    ins("LSR", Operation::Lsr, AddressingMode::ZeroPageX, 6), // 0x56
    illegal(6), // 0x57
    ins("CLI", Operation::Cli, AddressingMode::Implied, 2), // 0x58
    ins("EOR", Operation::Eor, AddressingMode::AbsoluteY, 4), // 0x59
    illegal(2), // 0x5A
    illegal(7), // 0x5B
    illegal(4), // 0x5C
    ins("EOR", Operation::Eor, AddressingMode::AbsoluteX, 4), // 0x5D
    ins("LSR", Operation::Lsr, AddressingMode::AbsoluteX, 7), // 0x5E
    illegal(7), // 0x5F
    ins("RTS", Operation::Rts, AddressingMode::Implied, 6), // 0x60
    ins("ADC", Operation::Adc, AddressingMode::IndirectX, 6), // 0x61
    illegal(2), // 0x62
    illegal(8), // 0x63
    illegal(3), // 0x64
    ins("ADC", Operation::Adc, AddressingMode::ZeroPage, 3), // 0x65
    ins("ROR", Operation::Ror, AddressingMode::ZeroPage, 5), // 0x66
    illegal(5), // 0x67
    ins("PLA", Operation::Pla, AddressingMode::Implied, 4), // 0x68
    ins("ADC", Operation::Adc, AddressingMode::Immediate, 2), // 0x69
    ins("ROR", Operation::Ror, AddressingMode::Accumulator, 2), // 0x6A
    illegal(2), // 0x6B
    ins("JMP", Operation::Jmp, AddressingMode::Indirect, 5), // 0x6C
    ins("ADC", Operation::Adc, AddressingMode::Absolute, 4), // 0x6D
    ins("ROR", Operation::Ror, AddressingMode::Absolute, 6), // 0x6E
    illegal(6), // 0x6F
    ins("BVS", Operation::Bvs, AddressingMode::Relative, 2), // 0x70
    ins("ADC", Operation::Adc, AddressingMode::IndirectY, 5), // 0x71
    illegal(2), // 0x72
    illegal(8), // 0x73
    illegal(4), // 0x74
    ins("ADC", Operation::Adc, AddressingMode::ZeroPageX, 4), // 0x75
    ins("ROR", Operation::Ror, AddressingMode::ZeroPageX, 6), // 0x76
    illegal(6), // 0x77
    ins("SEI", Operation::Sei, AddressingMode::Implied, 2), // 0x78
    ins("ADC", Operation::Adc, AddressingMode::AbsoluteY, 4), // 0x79
    illegal(2), // 0x7A
    illegal(7), // 0x7B
    illegal(4), // 0x7C
    ins("ADC", Operation::Adc, AddressingMode::AbsoluteX, 4), // 0x7D
    ins("ROR", Operation::Ror, AddressingMode::AbsoluteX, 7), // 0x7E
    illegal(7), // 0x7F
    illegal(2), // 0x80
    ins("STA", Operation::Sta, AddressingMode::IndirectX, 6), // 0x81
    illegal(2), // 0x82
    illegal(6), // 0x83
    ins("STY", Operation::Sty, AddressingMode::ZeroPage, 3), // 0x84
    ins("STA", Operation::Sta, AddressingMode::ZeroPage, 3), // 0x85
    ins("STX", Operation::Stx, AddressingMode::ZeroPage, 3), // 0x86
    illegal(3), // 0x87
    ins("DEY", Operation::Dey, AddressingMode::Implied, 2), // 0x88
    illegal(2), // 0x89
    ins("TXA", Operation::Txa, AddressingMode::Implied, 2), // 0x8A
    illegal(2), // 0x8B
    ins("STY", Operation::Sty, AddressingMode::Absolute, 4), // 0x8C
    ins("STA", Operation::Sta, AddressingMode::Absolute, 4), // 0x8D
    ins("STX", Operation::Stx, AddressingMode::Absolute, 4), // 0x8E
    illegal(4), // 0x8F
    ins("BCC", Operation::Bcc, AddressingMode::Relative, 2), // 0x90
    ins("STA", Operation::Sta, AddressingMode::IndirectY, 6), // 0x91
    illegal(2), // 0x92
    illegal(6), // 0x93
    ins("STY", Operation::Sty, AddressingMode::ZeroPageX, 4), // 0x94
    ins("STA", Operation::Sta, AddressingMode::ZeroPageX, 4), // 0x95
    ins("STX", Operation::Stx, AddressingMode::ZeroPageY, 4), // 0x96
    illegal(4), // 0x97
    ins("TYA", Operation::Tya, AddressingMode::Implied, 2), // 0x98
    ins("STA", Operation::Sta, AddressingMode::AbsoluteY, 5), // 0x99
    ins("TXS", Operation::Txs, AddressingMode::Implied, 2), // 0x9A
    illegal(5), // 0x9B
    illegal(5), // 0x9C
    ins("STA", Operation::Sta, AddressingMode::AbsoluteX, 5), // 0x9D
    illegal(5), // 0x9E
    illegal(5), // 0x9F
    ins("LDY", Operation::Ldy, AddressingMode::Immediate, 2), // 0xA0
    ins("LDA", Operation::Lda, AddressingMode::IndirectX, 6), // 0xA1
    ins("LDX", Operation::Ldx, AddressingMode::Immediate, 2), // 0xA2
    illegal(6), // 0xA3
    ins("LDY", Operation::Ldy, AddressingMode::ZeroPage, 3), // 0xA4
    ins("LDA", Operation::Lda, AddressingMode::ZeroPage, 3), // 0xA5
    ins("LDX", Operation::Ldx, AddressingMode::ZeroPage, 3), // 0xA6
    illegal(3), // 0xA7
    ins("TAY", Operation::Tay, AddressingMode::Implied, 2), // 0xA8
    ins("LDA", Operation::Lda, AddressingMode::Immediate, 2), // 0xA9
    ins("TAX", Operation::Tax, AddressingMode::Implied, 2), // 0xAA
    illegal(2), // 0xAB
    ins("LDY", Operation::Ldy, AddressingMode::Absolute, 4), // 0xAC
    ins("LDA", Operation::Lda, AddressingMode::Absolute, 4), // 0xAD
    ins("LDX", Operation::Ldx, AddressingMode::Absolute, 4), // 0xAE
    illegal(4), // 0xAF
    ins("BCS", Operation::Bcs, AddressingMode::Relative, 2), // 0xB0
    ins("LDA", Operation::Lda, AddressingMode::IndirectY, 5), // 0xB1
    illegal(2), // 0xB2
    illegal(5), // 0xB3
    ins("LDY", Operation::Ldy, AddressingMode::ZeroPageX, 4), // 0xB4
    ins("LDA", Operation::Lda, AddressingMode::ZeroPageX, 4), // 0xB5
    ins("LDX", Operation::Ldx, AddressingMode::ZeroPageY, 4), // 0xB6
    illegal(4), // 0xB7
    ins("CLV", Operation::Clv, AddressingMode::Implied, 2), // 0xB8
    ins("LDA", Operation::Lda, AddressingMode::AbsoluteY, 4), // 0xB9
    ins("TSX", Operation::Tsx, AddressingMode::Implied, 2), // 0xBA
    illegal(4), // 0xBB
    ins("LDY", Operation::Ldy, AddressingMode::AbsoluteX, 4), // 0xBC
    ins("LDA", Operation::Lda, AddressingMode::AbsoluteX, 4), // 0xBD
    ins("LDX", Operation::Ldx, AddressingMode::AbsoluteY, 4), // 0xBE
    illegal(4), // 0xBF
    ins("CPY", Operation::Cpy, AddressingMode::Immediate, 2), // 0xC0
    ins("CMP", Operation::Cmp, AddressingMode::IndirectX, 6), // 0xC1
    illegal(2), // 0xC2
    illegal(8), // 0xC3
    ins("CPY", Operation::Cpy, AddressingMode::ZeroPage, 3), // 0xC4
    ins("CMP", Operation::Cmp, AddressingMode::ZeroPage, 3), // 0xC5
    ins("DEC", Operation::Dec, AddressingMode::ZeroPage, 5), // 0xC6
    illegal(5), // 0xC7
    ins("INY", Operation::Iny, AddressingMode::Implied, 2), // 0xC8
    ins("CMP", Operation::Cmp, AddressingMode::Immediate, 2), // 0xC9
    ins("DEX", Operation::Dex, AddressingMode::Implied, 2), // 0xCA
    illegal(2), // 0xCB
    ins("CPY", Operation::Cpy, AddressingMode::Absolute, 4), // 0xCC
    ins("CMP", Operation::Cmp, AddressingMode::Absolute, 4), // 0xCD
    ins("DEC", Operation::Dec, AddressingMode::Absolute, 6), // 0xCE
    illegal(6), // 0xCF
    ins("BNE", Operation::Bne, AddressingMode::Relative, 2), // 0xD0
    ins("CMP", Operation::Cmp, AddressingMode::IndirectY, 5), // 0xD1
    illegal(2), // 0xD2
    illegal(8), // 0xD3
    illegal(4), // 0xD4
    ins("CMP", Operation::Cmp, AddressingMode::ZeroPageX, 4), // 0xD5
    ins("DEC", Operation::Dec, AddressingMode::ZeroPageX, 6), // 0xD6
    illegal(6), // 0xD7
    ins("CLD", Operation::Cld, AddressingMode::Implied, 2), // 0xD8
    ins("CMP", Operation::Cmp, AddressingMode::AbsoluteY, 4), // 0xD9
    ins("NOP", Operation::Nop, AddressingMode::Implied, 2), // 0xDA
    illegal(7), // 0xDB
    illegal(4), // 0xDC
    ins("CMP", Operation::Cmp, AddressingMode::AbsoluteX, 4), // 0xDD
    ins("DEC", Operation::Dec, AddressingMode::AbsoluteX, 7), // 0xDE
    illegal(7), // 0xDF
    ins("CPX", Operation::Cpx, AddressingMode::Immediate, 2), // 0xE0
    ins("SBC", Operation::Sbc, AddressingMode::IndirectX, 6), // 0xE1
    illegal(2), // 0xE2
    illegal(8), // 0xE3
    ins("CPX", Operation::Cpx, AddressingMode::ZeroPage, 3), // 0xE4
    ins("SBC", Operation::Sbc, AddressingMode::ZeroPage, 3), // 0xE5
    ins("INC", Operation::Inc, AddressingMode::ZeroPage, 5), // 0xE6
    illegal(5), // 0xE7
    ins("INX", Operation::Inx, AddressingMode::Implied, 2), // 0xE8
    ins("SBC", Operation::Sbc, AddressingMode::Immediate, 2), // 0xE9
    ins("NOP", Operation::Nop, AddressingMode::Implied, 2), // 0xEA
    illegal(2), // 0xEB
    ins("CPX", Operation::Cpx, AddressingMode::Absolute, 4), // 0xEC
    ins("SBC", Operation::Sbc, AddressingMode::Absolute, 4), // 0xED
    ins("INC", Operation::Inc, AddressingMode::Absolute, 6), // 0xEE
    illegal(6), // 0xEF
    ins("BEQ", Operation::Beq, AddressingMode::Relative, 2), // 0xF0
    ins("SBC", Operation::Sbc, AddressingMode::IndirectY, 5), // 0xF1
    illegal(2), // 0xF2
    illegal(8), // 0xF3
    illegal(4), // 0xF4
    ins("SBC", Operation::Sbc, AddressingMode::ZeroPageX, 4), // 0xF5
    ins("INC", Operation::Inc, AddressingMode::ZeroPageX, 6), // 0xF6
    illegal(6), // 0xF7
    ins("SED", Operation::Sed, AddressingMode::Implied, 2), // 0xF8
    ins("SBC", Operation::Sbc, AddressingMode::AbsoluteY, 4), // 0xF9
    ins("NOP", Operation::Nop, AddressingMode::Implied, 2), // 0xFA
    illegal(7), // 0xFB
    illegal(4), // 0xFC
    ins("SBC", Operation::Sbc, AddressingMode::AbsoluteX, 4), // 0xFD
    ins("INC", Operation::Inc, AddressingMode::AbsoluteX, 7), // 0xFE
    illegal(7), // 0xFF
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_index_matches_comment_order() {
        // Spot-check a few anchors across the table
        assert_eq!(INSTRUCTION_TABLE[0x00].operation, Operation::Brk);
        assert_eq!(INSTRUCTION_TABLE[0x4C].operation, Operation::Jmp);
        assert_eq!(INSTRUCTION_TABLE[0x6C].mode, AddressingMode::Indirect);
        assert_eq!(INSTRUCTION_TABLE[0x96].mode, AddressingMode::ZeroPageY);
        assert_eq!(INSTRUCTION_TABLE[0xBE].mode, AddressingMode::AbsoluteY);
        assert_eq!(INSTRUCTION_TABLE[0xEA].operation, Operation::Nop);
        assert_eq!(INSTRUCTION_TABLE[0xFE].operation, Operation::Inc);
    }

    #[test]
    fn test_accumulator_shifts() {
        for opcode in [0x0A, 0x2A, 0x4A, 0x6A] {
            assert_eq!(
                INSTRUCTION_TABLE[opcode].mode,
                AddressingMode::Accumulator,
                "opcode 0x{:02X}",
                opcode
            );
        }
    }

    #[test]
    fn test_sizes() {
        assert_eq!(INSTRUCTION_TABLE[0xEA].size(), 1);
        assert_eq!(INSTRUCTION_TABLE[0xA9].size(), 2);
        assert_eq!(INSTRUCTION_TABLE[0x20].size(), 3);
    }

    #[test]
    fn test_page_penalty_only_for_reads() {
        assert!(Operation::Lda.takes_page_penalty());
        assert!(Operation::Sbc.takes_page_penalty());
        assert!(!Operation::Sta.takes_page_penalty());
        assert!(!Operation::Inc.takes_page_penalty());
        assert!(!Operation::Asl.takes_page_penalty());
    }
}
