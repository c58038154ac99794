//! # Processor Status Register
//!
//! The 6502 keeps its eight condition and mode bits in a single byte (the `P`
//! register). Instructions update individual flags; PHP/BRK/interrupts push the
//! packed byte to the stack and PLP/RTI restore it.
//!
//! Bit layout (NV-BDIZC):
//!
//! | Bit | Flag |
//! |-----|------|
//! | 7 | N (Negative) |
//! | 6 | V (Overflow) |
//! | 5 | U (Unused) |
//! | 4 | B (Break) |
//! | 3 | D (Decimal) |
//! | 2 | I (Interrupt Disable) |
//! | 1 | Z (Zero) |
//! | 0 | C (Carry) |

use bitflags::bitflags;

bitflags! {
    /// Packed 6502 status flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle6502::Status;
    ///
    /// let mut status = Status::empty();
    /// status.set_byte(0b1000_0001);
    /// assert!(status.contains(Status::NEGATIVE | Status::CARRY));
    /// assert_eq!(status.get_byte(), 0x81);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Status: u8 {
        /// Set on unsigned overflow, or no borrow for subtraction/compare.
        const CARRY = 0b0000_0001;
        /// Set when the 8-bit result is zero.
        const ZERO = 0b0000_0010;
        /// Masks IRQ delivery when set.
        const INTERRUPT_DISABLE = 0b0000_0100;
        /// BCD mode. Stored and restored, arithmetic stays binary.
        const DECIMAL = 0b0000_1000;
        /// Distinguishes BRK from hardware interrupts in a pushed status byte.
        const BREAK = 0b0001_0000;
        const UNUSED = 0b0010_0000;
        /// Set on signed overflow from ADC/SBC, or bit 6 of the BIT operand.
        const OVERFLOW = 0b0100_0000;
        /// Copy of bit 7 of the result.
        const NEGATIVE = 0b1000_0000;
    }
}

impl Status {
    /// Packs all eight flags into a byte.
    pub fn get_byte(&self) -> u8 {
        self.bits()
    }

    /// Replaces all eight flags with the bits of `byte`.
    ///
    /// Every bit pattern is kept as written, so `set_byte(b)` followed by
    /// `get_byte()` always yields `b`.
    pub fn set_byte(&mut self, byte: u8) {
        *self = Status::from_bits_retain(byte);
    }

    /// Updates Zero and Negative from an 8-bit result.
    pub fn set_zn(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
        self.set(Status::NEGATIVE, value & 0x80 != 0);
    }
}
