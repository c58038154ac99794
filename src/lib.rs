//! # 6502 CPU Emulator Core
//!
//! A cycle-stepped NMOS 6502 CPU emulator: instruction decode, addressing-mode
//! resolution, ALU and control instructions, flag semantics and per-instruction
//! cycle timing against a byte-addressable memory bus.
//!
//! ## Quick Start
//!
//! ```rust
//! use cycle6502::{CPU, FlatMemory, MemoryBus, Status};
//!
//! // LDA #$01; ADC $01; JMP $0002
//! let mut memory = FlatMemory::new();
//! memory.load(0x0000, &[0xA9, 0x01, 0x65, 0x01, 0x4C, 0x02, 0x00]).unwrap();
//! memory.set_reset_vector(0x0000);
//!
//! let mut cpu = CPU::new(memory);
//! cpu.step(); // reset sequence (8 cycles)
//! cpu.step(); // LDA #$01
//! cpu.step(); // ADC $01
//!
//! assert_eq!(cpu.a(), 0x02);
//! assert!(!cpu.flag(Status::CARRY));
//! assert_eq!(cpu.pc(), 0x0004);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory via the `MemoryBus` trait
//! - **Cycle stepping**: the host drives [`CPU::clock`] once per emulated cycle
//! - **Table-Driven Design**: all opcode metadata lives in [`INSTRUCTION_TABLE`]
//! - **Per-instance state**: every `CPU` owns its registers, scratch and bus
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the clock state machine
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `opcodes` - 256-entry instruction table
//! - `addressing` - Addressing modes and their resolvers
//! - `status` - Packed status register
//!
//! Illegal opcodes and BRK are machine states, not errors: illegal opcodes run as
//! fixed-cost no-ops and BRK raises [`CPU::halted`]. The only fallible operation
//! is loading a program image ([`MemoryError`]).

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::{CPU, IRQ_VECTOR, NMI_VECTOR, RESET_CYCLES, RESET_SP, STACK_BASE};
pub use memory::{FlatMemory, MemoryBus, MemoryError, ADDRESS_SPACE, RESET_VECTOR};
pub use opcodes::{Instruction, Operation, INSTRUCTION_TABLE};
pub use status::Status;
