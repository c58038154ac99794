//! Tests for register transfers and the flag set/clear instructions.

use cycle6502::{FlatMemory, Status, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(0x8000, program).unwrap();
    memory.set_reset_vector(0x8000);
    let mut cpu = CPU::new(memory);
    cpu.step();
    cpu
}

#[test]
fn test_tax_tay() {
    let mut cpu = setup_cpu(&[0xAA, 0xA8]);
    cpu.set_a(0x80);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag(Status::NEGATIVE));

    cpu.set_a(0x00);
    cpu.step();
    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag(Status::ZERO));
    assert!(!cpu.flag(Status::NEGATIVE));
}

#[test]
fn test_txa_tya() {
    let mut cpu = setup_cpu(&[0x8A, 0x98]);
    cpu.set_x(0x01);
    cpu.set_y(0xF0);

    cpu.step();
    assert_eq!(cpu.a(), 0x01);
    assert!(!cpu.flag(Status::ZERO));
    assert!(!cpu.flag(Status::NEGATIVE));

    cpu.step();
    assert_eq!(cpu.a(), 0xF0);
    assert!(cpu.flag(Status::NEGATIVE));
}

#[test]
fn test_tsx_updates_flags() {
    let mut cpu = setup_cpu(&[0xBA]);

    cpu.step();

    assert_eq!(cpu.x(), 0xFD);
    assert!(cpu.flag(Status::NEGATIVE));
}

#[test]
fn test_txs_leaves_flags_alone() {
    let mut cpu = setup_cpu(&[0x9A]);
    cpu.set_x(0x00);
    let status = cpu.status();

    cpu.step();

    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.status(), status);
    assert!(!cpu.flag(Status::ZERO));
}

#[test]
fn test_set_and_clear_each_flag() {
    // SEC SED SEI CLC CLD CLI
    let mut cpu = setup_cpu(&[0x38, 0xF8, 0x78, 0x18, 0xD8, 0x58]);

    for _ in 0..3 {
        assert_eq!(cpu.step(), 2);
    }
    assert!(cpu.flag(Status::CARRY));
    assert!(cpu.flag(Status::DECIMAL));
    assert!(cpu.flag(Status::INTERRUPT_DISABLE));

    for _ in 0..3 {
        cpu.step();
    }
    assert_eq!(cpu.status(), Status::UNUSED);
}

#[test]
fn test_clv() {
    let mut cpu = setup_cpu(&[0xB8]);
    cpu.set_flag(Status::OVERFLOW, true);
    cpu.set_flag(Status::NEGATIVE, true);

    cpu.step();

    assert!(!cpu.flag(Status::OVERFLOW));
    assert!(cpu.flag(Status::NEGATIVE));
}

#[test]
fn test_sed_keeps_binary_arithmetic() {
    // SED; LDA #$09; ADC #$01
    let mut cpu = setup_cpu(&[0xF8, 0xA9, 0x09, 0x69, 0x01]);

    cpu.step();
    cpu.step();
    cpu.step();

    assert_eq!(cpu.a(), 0x0A);
}
