//! Instruction table validation tests
//!
//! Verifies that the 256-entry table is total and matches the canonical 6502
//! opcode map.

use cycle6502::{AddressingMode, Operation, INSTRUCTION_TABLE};

#[test]
fn test_every_opcode_has_a_descriptor() {
    assert_eq!(INSTRUCTION_TABLE.len(), 256);

    for (opcode, instruction) in INSTRUCTION_TABLE.iter().enumerate() {
        assert!(
            !instruction.mnemonic.is_empty(),
            "Opcode 0x{:02X} has empty mnemonic",
            opcode
        );
        assert!(
            instruction.cycles >= 2,
            "Opcode 0x{:02X} ({}) has {} cycles, expected at least 2",
            opcode,
            instruction.mnemonic,
            instruction.cycles
        );
        assert!(
            instruction.cycles <= 8,
            "Opcode 0x{:02X} has {} cycles",
            opcode,
            instruction.cycles
        );
    }
}

#[test]
fn test_illegal_opcodes_marked() {
    let illegal: Vec<usize> = INSTRUCTION_TABLE
        .iter()
        .enumerate()
        .filter(|(_, i)| !i.is_legal())
        .map(|(op, _)| op)
        .collect();

    assert_eq!(illegal.len(), 103);
    for opcode in illegal {
        let instruction = &INSTRUCTION_TABLE[opcode];
        assert_eq!(instruction.mnemonic, "???");
        assert_eq!(instruction.mode, AddressingMode::Implied);
        assert_eq!(instruction.operation, Operation::Illegal);
    }
}

#[test]
fn test_illegal_slot_cycle_costs() {
    assert_eq!(INSTRUCTION_TABLE[0x02].cycles, 2);
    assert_eq!(INSTRUCTION_TABLE[0x03].cycles, 8);
    assert_eq!(INSTRUCTION_TABLE[0x04].cycles, 3);
    assert_eq!(INSTRUCTION_TABLE[0x1B].cycles, 7);
    assert_eq!(INSTRUCTION_TABLE[0xFF].cycles, 7);
}

#[test]
fn test_mnemonic_matches_operation() {
    for (opcode, instruction) in INSTRUCTION_TABLE.iter().enumerate() {
        if instruction.is_legal() {
            let name = format!("{:?}", instruction.operation).to_uppercase();
            assert_eq!(
                name, instruction.mnemonic,
                "Opcode 0x{:02X} mnemonic/operation mismatch",
                opcode
            );
        }
    }
}

#[test]
fn test_documented_opcodes_per_mnemonic() {
    let count = |op: Operation| {
        INSTRUCTION_TABLE
            .iter()
            .filter(|i| i.operation == op)
            .count()
    };

    assert_eq!(count(Operation::Adc), 8);
    assert_eq!(count(Operation::Sbc), 8);
    assert_eq!(count(Operation::Lda), 8);
    assert_eq!(count(Operation::Sta), 7);
    assert_eq!(count(Operation::Ldx), 5);
    assert_eq!(count(Operation::Stx), 3);
    assert_eq!(count(Operation::Asl), 5);
    assert_eq!(count(Operation::Jmp), 2);
    assert_eq!(count(Operation::Bit), 2);
    assert_eq!(count(Operation::Cpx), 3);
    // 0xEA plus the unofficial single-byte NOPs at 0xDA and 0xFA
    assert_eq!(count(Operation::Nop), 3);
}

#[test]
fn test_canonical_entries() {
    let cases: [(u8, &str, AddressingMode, u8); 16] = [
        (0x00, "BRK", AddressingMode::Implied, 7),
        (0x01, "ORA", AddressingMode::IndirectX, 6),
        (0x0A, "ASL", AddressingMode::Accumulator, 2),
        (0x10, "BPL", AddressingMode::Relative, 2),
        (0x20, "JSR", AddressingMode::Absolute, 6),
        (0x40, "RTI", AddressingMode::Implied, 6),
        (0x4C, "JMP", AddressingMode::Absolute, 3),
        (0x60, "RTS", AddressingMode::Implied, 6),
        (0x6C, "JMP", AddressingMode::Indirect, 5),
        (0x91, "STA", AddressingMode::IndirectY, 6),
        (0x96, "STX", AddressingMode::ZeroPageY, 4),
        (0x9D, "STA", AddressingMode::AbsoluteX, 5),
        (0xB1, "LDA", AddressingMode::IndirectY, 5),
        (0xBE, "LDX", AddressingMode::AbsoluteY, 4),
        (0xDE, "DEC", AddressingMode::AbsoluteX, 7),
        (0xE9, "SBC", AddressingMode::Immediate, 2),
    ];

    for (opcode, mnemonic, mode, cycles) in cases {
        let instruction = &INSTRUCTION_TABLE[opcode as usize];
        assert_eq!(instruction.mnemonic, mnemonic, "0x{:02X}", opcode);
        assert_eq!(instruction.mode, mode, "0x{:02X}", opcode);
        assert_eq!(instruction.cycles, cycles, "0x{:02X}", opcode);
    }
}

#[test]
fn test_size_follows_mode() {
    for instruction in INSTRUCTION_TABLE.iter() {
        let expected = 1 + instruction.mode.operand_bytes();
        assert_eq!(instruction.size(), expected);
        assert!((1..=3).contains(&instruction.size()));
    }
}
