//! Host driver: loads a raw program image, points the reset vector at it and
//! clocks the CPU for a fixed number of cycles.
//!
//! ```text
//! run6502 [image-path] [origin-hex] [clocks]
//! ```
//!
//! Without an image the built-in demo (LDA #$01; ADC $01; JMP $0002) runs at
//! 0x0000. Set `RUST_LOG=trace` to see one line per executed instruction.

use std::env;
use std::fs;

use anyhow::{Context, Result};
use cycle6502::{FlatMemory, Status, CPU};

const DEMO_PROGRAM: [u8; 7] = [0xA9, 0x01, 0x65, 0x01, 0x4C, 0x02, 0x00];
const DEFAULT_CLOCKS: u64 = 1000;

struct RunConfig {
    image: Vec<u8>,
    origin: u16,
    clocks: u64,
}

impl RunConfig {
    fn from_args(args: &[String]) -> Result<Self> {
        let image = match args.get(1) {
            Some(path) => {
                fs::read(path).with_context(|| format!("failed to read image {}", path))?
            }
            None => DEMO_PROGRAM.to_vec(),
        };

        let origin = match args.get(2) {
            Some(hex) => {
                let digits = hex.trim_start_matches("0x").trim_start_matches('$');
                u16::from_str_radix(digits, 16)
                    .with_context(|| format!("invalid origin address {}", hex))?
            }
            None => 0x0000,
        };

        let clocks = match args.get(3) {
            Some(n) => n
                .parse()
                .with_context(|| format!("invalid clock count {}", n))?,
            None => DEFAULT_CLOCKS,
        };

        Ok(Self {
            image,
            origin,
            clocks,
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = RunConfig::from_args(&args)?;

    let mut memory = FlatMemory::new();
    memory.load(config.origin, &config.image)?;
    memory.set_reset_vector(config.origin);
    log::info!(
        "loaded {} bytes at 0x{:04X}, running {} clocks",
        config.image.len(),
        config.origin,
        config.clocks
    );

    let mut cpu = CPU::new(memory);
    for _ in 0..config.clocks {
        cpu.clock();
        if cpu.halted() && cpu.complete() {
            log::info!("BRK reached after {} clocks", cpu.clock_count());
            break;
        }
    }

    let flag = |f: Status, c: char| if cpu.flag(f) { c } else { '-' };
    println!(
        "A={:02X} X={:02X} Y={:02X} SP={:02X} PC={:04X} P={}{}{}{}{}{}{}{} clocks={}",
        cpu.a(),
        cpu.x(),
        cpu.y(),
        cpu.sp(),
        cpu.pc(),
        flag(Status::NEGATIVE, 'N'),
        flag(Status::OVERFLOW, 'V'),
        flag(Status::UNUSED, 'U'),
        flag(Status::BREAK, 'B'),
        flag(Status::DECIMAL, 'D'),
        flag(Status::INTERRUPT_DISABLE, 'I'),
        flag(Status::ZERO, 'Z'),
        flag(Status::CARRY, 'C'),
        cpu.clock_count(),
    );

    Ok(())
}
