//! Fuzz target for the clock state machine.
//!
//! Seeds registers, the status byte and the interesting memory pages from
//! arbitrary input, then runs a short burst of instructions with interrupts
//! mixed in. No input may panic, and every step must drain its cycles.

#![no_main]

use arbitrary::Arbitrary;
use cycle6502::{FlatMemory, MemoryBus, Status, CPU};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Code at the reset target
    program: [u8; 32],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Data region at 0x4000 for absolute and indirect operands
    main_memory: [u8; 256],
}

#[derive(Debug, Arbitrary)]
enum Event {
    Step,
    Clock,
    Irq,
    Nmi,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    events: Vec<Event>,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    let _ = memory.load(0x8000, &input.memory.program);
    let _ = memory.load(0x0000, &input.memory.zero_page);
    let _ = memory.load(0x0100, &input.memory.stack_page);
    let _ = memory.load(0x4000, &input.memory.main_memory);
    memory.set_reset_vector(0x8000);
    memory.write(0xFFFE, 0x00);
    memory.write(0xFFFF, 0x80);
    memory.write(0xFFFA, 0x10);
    memory.write(0xFFFB, 0x80);

    let mut cpu = CPU::new(memory);
    cpu.step();

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    let mut status = Status::empty();
    status.set_byte(input.cpu_state.status);
    cpu.set_status(status);

    for event in input.events.iter().take(64) {
        match event {
            Event::Step => {
                let clocks = cpu.step();
                assert!((1..=8).contains(&clocks));
                assert!(cpu.complete());
            }
            Event::Clock => cpu.clock(),
            Event::Irq => cpu.irq(),
            Event::Nmi => cpu.nmi(),
        }
        assert!(cpu.cycles_remaining() <= 8);
    }
});
