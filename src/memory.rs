//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from specific
//! memory implementations. The CPU only ever performs single-byte synchronous reads
//! and writes; everything else (mirroring, ROM regions, I/O) belongs to the bus.
//!
//! ## Design Principles
//!
//! - Addresses are typed `u16`, so the full 64KB space [0x0000, 0xFFFF] is valid
//!   and nothing outside it can be expressed. There is no clamping.
//! - No bus errors: the 6502 has no mechanism to report them.
//! - The bus knows nothing about the CPU and can be swapped for a mapped or
//!   mirrored implementation without touching the CPU.

use thiserror::Error;

/// Size of the 6502 address space in bytes.
pub const ADDRESS_SPACE: usize = 0x1_0000;

/// Location of the little-endian reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Errors raised while placing a program image into memory.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MemoryError {
    /// The image would extend past 0xFFFF.
    #[error("image of {len} bytes at 0x{origin:04X} runs past the end of the address space")]
    ImageOverflow { origin: u16, len: usize },

    #[error("program image is empty")]
    EmptyImage,
}

/// Memory bus trait for CPU to read/write bytes.
///
/// # Design
///
/// - `read(&self)`: Immutable reference allows shared reads
/// - `write(&mut self)`: Mutable reference makes side effects explicit
/// - No error types: 6502 hardware has no bus error mechanism
///
/// # Examples
///
/// ```
/// use cycle6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use cycle6502::MemoryBus;
///
/// /// 2KB of RAM mirrored across the lower 8KB, open bus above.
/// struct MirroredRam {
///     ram: [u8; 0x0800],
/// }
///
/// impl MemoryBus for MirroredRam {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x2000 {
///             self.ram[(addr & 0x07FF) as usize]
///         } else {
///             0
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x2000 {
///             self.ram[(addr & 0x07FF) as usize] = value;
///         }
///     }
/// }
///
/// let mut bus = MirroredRam { ram: [0; 0x0800] };
/// bus.write(0x0001, 0x55);
/// assert_eq!(bus.read(0x0801), 0x55);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian 16-bit word from `addr` and `addr + 1`.
    ///
    /// The high byte address wraps from 0xFFFF to 0x0000.
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) are writable RAM initialized to 0x00.
///
/// # Examples
///
/// ```
/// use cycle6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x8000, &[0xA9, 0x42]).unwrap(); // LDA #$42
/// memory.set_reset_vector(0x8000);
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; ADDRESS_SPACE]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; ADDRESS_SPACE]),
        }
    }

    /// Copies a program image into memory starting at `origin`.
    ///
    /// Fails without writing anything if the image is empty or would run past
    /// 0xFFFF.
    ///
    /// ```
    /// use cycle6502::{FlatMemory, MemoryBus, MemoryError};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0x0200, &[0xEA, 0xEA]).unwrap();
    /// assert_eq!(mem.read(0x0201), 0xEA);
    ///
    /// assert_eq!(
    ///     mem.load(0xFFFF, &[0x00, 0x00]),
    ///     Err(MemoryError::ImageOverflow { origin: 0xFFFF, len: 2 })
    /// );
    /// ```
    pub fn load(&mut self, origin: u16, image: &[u8]) -> Result<(), MemoryError> {
        if image.is_empty() {
            return Err(MemoryError::EmptyImage);
        }

        let start = origin as usize;
        let end = start + image.len();
        if end > ADDRESS_SPACE {
            return Err(MemoryError::ImageOverflow {
                origin,
                len: image.len(),
            });
        }

        self.data[start..end].copy_from_slice(image);
        log::debug!("loaded {} bytes at 0x{:04X}", image.len(), origin);
        Ok(())
    }

    /// Points the reset vector (0xFFFC/0xFFFD) at `addr`.
    pub fn set_reset_vector(&mut self, addr: u16) {
        let [lo, hi] = addr.to_le_bytes();
        self.data[RESET_VECTOR as usize] = lo;
        self.data[RESET_VECTOR as usize + 1] = hi;
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_memory_read_write() {
        let mut mem = FlatMemory::new();

        assert_eq!(mem.read(0x0000), 0x00);
        assert_eq!(mem.read(0xFFFF), 0x00);

        mem.write(0x1234, 0x42);
        assert_eq!(mem.read(0x1234), 0x42);

        // Neighbours unchanged
        assert_eq!(mem.read(0x1233), 0x00);
        assert_eq!(mem.read(0x1235), 0x00);
    }

    #[test]
    fn test_load_fills_to_end_of_space() {
        let mut mem = FlatMemory::new();
        mem.load(0xFFFE, &[0x34, 0x12]).unwrap();
        assert_eq!(mem.read_word(0xFFFE), 0x1234);
    }

    #[test]
    fn test_load_rejects_overflow_without_writing() {
        let mut mem = FlatMemory::new();
        let err = mem.load(0xFFF0, &[0xAA; 0x20]).unwrap_err();

        assert_eq!(
            err,
            MemoryError::ImageOverflow {
                origin: 0xFFF0,
                len: 0x20
            }
        );
        assert_eq!(mem.read(0xFFF0), 0x00);
    }

    #[test]
    fn test_load_rejects_empty_image() {
        let mut mem = FlatMemory::new();
        assert_eq!(mem.load(0x0000, &[]), Err(MemoryError::EmptyImage));
    }

    #[test]
    fn test_set_reset_vector_little_endian() {
        let mut mem = FlatMemory::new();
        mem.set_reset_vector(0xC0DE);
        assert_eq!(mem.read(0xFFFC), 0xDE);
        assert_eq!(mem.read(0xFFFD), 0xC0);
    }

    #[test]
    fn test_read_word_wraps_at_top_of_memory() {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFF, 0x34);
        mem.write(0x0000, 0x12);
        assert_eq!(mem.read_word(0xFFFF), 0x1234);
    }
}
