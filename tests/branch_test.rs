//! Tests for the conditional branch instructions.
//!
//! Cycle timing: 2 if not taken, 3 if taken within the page, 4 if the target
//! is on another page.

use cycle6502::{FlatMemory, Status, CPU};

fn setup_cpu_at(origin: u16, program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(origin, program).unwrap();
    memory.set_reset_vector(origin);
    let mut cpu = CPU::new(memory);
    cpu.step();
    cpu
}

#[test]
fn test_beq_not_taken() {
    let mut cpu = setup_cpu_at(0x8000, &[0xF0, 0x10]);
    cpu.set_flag(Status::ZERO, false);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_beq_taken_same_page() {
    let mut cpu = setup_cpu_at(0x8000, &[0xF0, 0x10]);
    cpu.set_flag(Status::ZERO, true);

    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.pc(), 0x8012);
}

#[test]
fn test_beq_taken_page_cross() {
    // BEQ at 0x80F0: next PC 0x80F2, +0x20 -> 0x8112
    let mut cpu = setup_cpu_at(0x80F0, &[0xF0, 0x20]);
    cpu.set_flag(Status::ZERO, true);

    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.pc(), 0x8112);
}

#[test]
fn test_bne_backward_across_page() {
    // BNE at 0x8100: next PC 0x8102, -4 -> 0x80FE
    let mut cpu = setup_cpu_at(0x8100, &[0xD0, 0xFC]);
    cpu.set_flag(Status::ZERO, false);

    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.pc(), 0x80FE);
    assert_eq!(cpu.address_relative(), 0xFFFC);
}

#[test]
fn test_branch_to_self() {
    // BCC $FE loops forever on the same instruction
    let mut cpu = setup_cpu_at(0x8000, &[0x90, 0xFE]);

    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.pc(), 0x8000);
}

#[test]
fn test_branch_wraps_address_space() {
    // BCS at 0xFFF0 branching +0x20 wraps to 0x0012
    let mut cpu = setup_cpu_at(0xFFF0, &[0xB0, 0x20]);
    cpu.set_flag(Status::CARRY, true);

    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.pc(), 0x0012);
}

#[test]
fn test_each_branch_tests_one_flag() {
    // (opcode, flag, branch when flag is set)
    let cases = [
        (0x90, Status::CARRY, false),   // BCC
        (0xB0, Status::CARRY, true),    // BCS
        (0xF0, Status::ZERO, true),     // BEQ
        (0xD0, Status::ZERO, false),    // BNE
        (0x30, Status::NEGATIVE, true), // BMI
        (0x10, Status::NEGATIVE, false), // BPL
        (0x50, Status::OVERFLOW, false), // BVC
        (0x70, Status::OVERFLOW, true), // BVS
    ];

    for (opcode, flag, when_set) in cases {
        for flag_value in [false, true] {
            let mut cpu = setup_cpu_at(0x8000, &[opcode, 0x04]);
            cpu.set_flag(flag, flag_value);

            let cycles = cpu.step();
            let taken = flag_value == when_set;

            let expected_pc = if taken { 0x8006 } else { 0x8002 };
            assert_eq!(
                cpu.pc(),
                expected_pc,
                "opcode 0x{:02X} with flag {}",
                opcode,
                flag_value
            );
            assert_eq!(cycles, if taken { 3 } else { 2 });
        }
    }
}

#[test]
fn test_branch_does_not_touch_flags() {
    let mut cpu = setup_cpu_at(0x8000, &[0x30, 0x02]);
    cpu.set_flag(Status::NEGATIVE, true);
    let before = cpu.status();

    cpu.step();

    assert_eq!(cpu.status(), before);
}
