//! # Processor Status Flags
//!
//! The status register (P) as an 8-bit bitset. Load instructions only ever produce
//! Negative and Zero; the remaining bits are named here for the instruction families
//! that will set them.

/// Processor status register.
///
/// # Bit layout (NV-BDIZC)
///
/// - Bit 7: N (Negative)
/// - Bit 6: V (Overflow)
/// - Bit 5: unused
/// - Bit 4: B (Break)
/// - Bit 3: D (Decimal)
/// - Bit 2: I (Interrupt Disable)
/// - Bit 1: Z (Zero)
/// - Bit 0: C (Carry)
///
/// # Examples
///
/// ```
/// use nescpu::Status;
///
/// let status = Status::derive(0xF1);
/// assert!(status.contains(Status::NEGATIVE));
/// assert!(!status.contains(Status::ZERO));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Status(u8);

impl Status {
    /// Negative flag - set if bit 7 of the result is set.
    pub const NEGATIVE: u8 = 0x80;

    /// Overflow flag - set if signed arithmetic overflowed.
    pub const OVERFLOW: u8 = 0x40;

    /// Break flag - set when BRK pushes status.
    pub const BREAK: u8 = 0x10;

    /// Decimal mode - enables BCD arithmetic for ADC/SBC.
    pub const DECIMAL: u8 = 0x08;

    /// Interrupt disable - when set, IRQ interrupts are ignored.
    pub const INTERRUPT_DISABLE: u8 = 0x04;

    /// Zero flag - set if result is zero.
    pub const ZERO: u8 = 0x02;

    /// Carry flag - set if operation resulted in carry/borrow.
    pub const CARRY: u8 = 0x01;

    /// Status register with every bit clear.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Status register from a raw byte.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Flags produced by loading `value`: N from bit 7, Z when the value is zero.
    ///
    /// Every other bit is clear.
    #[must_use]
    pub const fn derive(value: u8) -> Self {
        let mut bits = 0;
        if value & 0x80 != 0 {
            bits |= Self::NEGATIVE;
        }
        if value == 0 {
            bits |= Self::ZERO;
        }
        Self(bits)
    }

    /// Raw register value.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check if every bit in `flag` is set.
    #[must_use]
    pub const fn contains(self, flag: u8) -> bool {
        self.0 & flag == flag
    }

    /// ORs `flags` into the register. Bits already set stay set.
    pub fn insert(&mut self, flags: Status) {
        self.0 |= flags.0;
    }

    /// Clears every bit.
    pub fn clear(&mut self) {
        self.0 = 0;
    }
}

impl From<Status> for u8 {
    fn from(status: Status) -> u8 {
        status.0
    }
}
