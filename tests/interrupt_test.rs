//! Tests for IRQ and NMI entry.

use cycle6502::{FlatMemory, MemoryBus, Status, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(0x8000, program).unwrap();
    memory.set_reset_vector(0x8000);
    memory.write(0xFFFE, 0x00);
    memory.write(0xFFFF, 0x90);
    memory.write(0xFFFA, 0x00);
    memory.write(0xFFFB, 0xA0);
    let mut cpu = CPU::new(memory);
    cpu.step();
    cpu
}

#[test]
fn test_irq_pushes_pc_and_status() {
    let mut cpu = setup_cpu(&[0xEA, 0xEA]);
    cpu.step();
    cpu.set_flag(Status::CARRY, true);

    cpu.irq();

    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0xFA);
    assert_eq!(cpu.memory().read(0x01FD), 0x80);
    assert_eq!(cpu.memory().read(0x01FC), 0x01);
    // B clear, U set, I clear in the pushed copy
    assert_eq!(cpu.memory().read(0x01FB), 0b0010_0001);
    assert!(cpu.flag(Status::INTERRUPT_DISABLE));
    assert!(!cpu.halted());
}

#[test]
fn test_irq_takes_seven_cycles() {
    let mut cpu = setup_cpu(&[0xEA]);

    cpu.irq();

    assert_eq!(cpu.cycles_remaining(), 7);
    assert_eq!(cpu.step(), 7);
}

#[test]
fn test_irq_masked_by_interrupt_disable() {
    let mut cpu = setup_cpu(&[0x78, 0xEA]);
    cpu.step();

    cpu.irq();

    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.sp(), 0xFD);
    assert!(cpu.complete());
}

#[test]
fn test_nmi_ignores_interrupt_disable() {
    let mut cpu = setup_cpu(&[0x78]);
    cpu.step();

    cpu.nmi();

    assert_eq!(cpu.pc(), 0xA000);
    assert_eq!(cpu.sp(), 0xFA);
    assert_eq!(cpu.memory().read(0x01FB), 0b0010_0100);
    assert_eq!(cpu.step(), 8);
}

#[test]
fn test_irq_handler_returns_with_rti() {
    // 9000: INX; RTI
    let mut cpu = setup_cpu(&[0xEA, 0xA9, 0x05]);
    cpu.memory_mut().write(0x9000, 0xE8);
    cpu.memory_mut().write(0x9001, 0x40);
    cpu.step();

    cpu.irq();
    cpu.step();
    cpu.step();
    assert_eq!(cpu.x(), 0x01);

    cpu.step();
    assert_eq!(cpu.pc(), 0x8001);
    assert!(!cpu.flag(Status::INTERRUPT_DISABLE));

    cpu.step();
    assert_eq!(cpu.a(), 0x05);
}
