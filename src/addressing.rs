//! # Addressing Modes
//!
//! The addressing modes used by the load instructions, the two pieces of address
//! arithmetic they depend on, and the resolver that turns an opcode's operand bytes
//! into the byte to load.
//!
//! Two different kinds of index arithmetic are in play:
//!
//! - **Zero-page wraparound**: an 8-bit modular add. The result never leaves page
//!   zero, see [`zero_page_wrap`].
//! - **Page crossing**: a 16-bit add whose high byte changed, see [`pages_crossed`].
//!   Costs one extra cycle on the modes that can cross.

use log::trace;

use crate::registers::RegisterId;
use crate::{MemoryBus, CPU};

/// Addressing mode of a load instruction.
///
/// # Operand Sizes
///
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X, wraps within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y, wraps within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Full 16-bit address, byte order per [`OperandOrder`].
    ///
    /// Example: LDA $1234
    Absolute,

    /// 16-bit address indexed by X. +1 cycle on page crossing.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y. +1 cycle on page crossing.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indexed indirect.
    ///
    /// Example: LDA ($40,X)
    ///
    /// The byte stored at the operand's zero-page address and the byte stored at
    /// the zero-page address held in X are added with 8-bit wraparound. The sum is
    /// the zero-page address of the value.
    IndirectX,

    /// Indirect indexed.
    ///
    /// Example: LDA ($40),Y
    ///
    /// The byte stored at the operand's zero-page address is the base; Y is added
    /// to it as a 16-bit address. +1 cycle on page crossing.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute | AddressingMode::AbsoluteX | AddressingMode::AbsoluteY => 2,
        }
    }

    /// Cycle cost of a load in this mode, before any page-crossing penalty.
    pub const fn base_cycles(self) -> u8 {
        match self {
            AddressingMode::Immediate => 2,
            AddressingMode::ZeroPage => 3,
            AddressingMode::ZeroPageX | AddressingMode::ZeroPageY => 4,
            AddressingMode::Absolute | AddressingMode::AbsoluteX | AddressingMode::AbsoluteY => 4,
            AddressingMode::IndirectX => 6,
            AddressingMode::IndirectY => 5,
        }
    }

    /// Index register added by this mode, if any.
    ///
    /// IndirectX reads X as a zero-page pointer rather than adding it, but it is
    /// still the register the mode consults.
    pub const fn index_register(self) -> Option<RegisterId> {
        match self {
            AddressingMode::ZeroPageX | AddressingMode::AbsoluteX | AddressingMode::IndirectX => {
                Some(RegisterId::X)
            }
            AddressingMode::ZeroPageY | AddressingMode::AbsoluteY | AddressingMode::IndirectY => {
                Some(RegisterId::Y)
            }
            _ => None,
        }
    }

    /// Whether a page crossing can add a cycle in this mode.
    pub const fn can_cross_page(self) -> bool {
        matches!(
            self,
            AddressingMode::AbsoluteX | AddressingMode::AbsoluteY | AddressingMode::IndirectY
        )
    }
}

/// Byte order of two-byte absolute operands.
///
/// The default, [`OperandOrder::HighFirst`], combines the bytes in
/// instruction-stream order: the first byte is the high byte. Programs laid down
/// for real 6502 hardware store the low byte first and need
/// [`OperandOrder::LowFirst`].
///
/// # Examples
///
/// ```
/// use nescpu::OperandOrder;
///
/// assert_eq!(OperandOrder::HighFirst.combine(0x3F, 0xFF), 0x3FFF);
/// assert_eq!(OperandOrder::LowFirst.combine(0x3F, 0xFF), 0xFF3F);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OperandOrder {
    /// First operand byte is the high byte.
    #[default]
    HighFirst,
    /// First operand byte is the low byte (6502 little-endian).
    LowFirst,
}

impl OperandOrder {
    /// Combines two operand bytes, given in stream order, into an address.
    pub const fn combine(self, first: u8, second: u8) -> u16 {
        match self {
            OperandOrder::HighFirst => ((first as u16) << 8) | second as u16,
            OperandOrder::LowFirst => ((second as u16) << 8) | first as u16,
        }
    }
}

/// Returns true if adding `index` to `base` lands on a different 256-byte page.
///
/// The sum is taken modulo 0x10000.
///
/// # Examples
///
/// ```
/// use nescpu::addressing::pages_crossed;
///
/// assert!(pages_crossed(0x00FF, 0x01));
/// assert!(!pages_crossed(0x0210, 0x20));
/// ```
pub const fn pages_crossed(base: u16, index: u8) -> bool {
    base.wrapping_add(index as u16) & 0xFF00 != base & 0xFF00
}

/// Adds two bytes modulo 256. Used for every zero-page indexed address; the carry
/// never propagates into page one.
///
/// # Examples
///
/// ```
/// use nescpu::addressing::zero_page_wrap;
///
/// assert_eq!(zero_page_wrap(0xF8, 0x65), 0x5D);
/// ```
pub const fn zero_page_wrap(a: u8, b: u8) -> u8 {
    a.wrapping_add(b)
}

/// A resolved operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand {
    /// The byte to load.
    pub value: u8,
    /// Effective address the value was read from; `None` for immediate operands.
    pub address: Option<u16>,
    /// Whether indexing crossed a page boundary on a mode that charges for it.
    pub page_crossed: bool,
}

impl<M: MemoryBus> CPU<M> {
    /// Reads the byte at PC and advances PC.
    pub(crate) fn next_byte(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads a two-byte address operand at PC and advances PC past it.
    pub(crate) fn next_word(&mut self) -> u16 {
        let first = self.next_byte();
        let second = self.next_byte();
        self.operand_order.combine(first, second)
    }

    /// Consumes the operand bytes for `mode` and resolves the value to load.
    pub(crate) fn resolve_operand(&mut self, mode: AddressingMode) -> Operand {
        let x = self.registers.get(RegisterId::X).value();
        let y = self.registers.get(RegisterId::Y).value();

        let (address, page_crossed) = match mode {
            AddressingMode::Immediate => {
                let value = self.next_byte();
                trace!("{:?} operand 0x{:02X}", mode, value);
                return Operand {
                    value,
                    address: None,
                    page_crossed: false,
                };
            }
            AddressingMode::ZeroPage => (self.next_byte() as u16, false),
            AddressingMode::ZeroPageX => (zero_page_wrap(self.next_byte(), x) as u16, false),
            AddressingMode::ZeroPageY => (zero_page_wrap(self.next_byte(), y) as u16, false),
            AddressingMode::Absolute => (self.next_word(), false),
            AddressingMode::AbsoluteX => {
                let base = self.next_word();
                (base.wrapping_add(x as u16), pages_crossed(base, x))
            }
            AddressingMode::AbsoluteY => {
                let base = self.next_word();
                (base.wrapping_add(y as u16), pages_crossed(base, y))
            }
            AddressingMode::IndirectX => {
                let pointer = self.next_byte();
                let from_operand = self.memory.read(pointer as u16);
                let from_index = self.memory.read(x as u16);
                (zero_page_wrap(from_operand, from_index) as u16, false)
            }
            AddressingMode::IndirectY => {
                let pointer = self.next_byte();
                let base = self.memory.read(pointer as u16) as u16;
                (base.wrapping_add(y as u16), pages_crossed(base, y))
            }
        };

        let value = self.memory.read(address);
        trace!(
            "{:?} effective address 0x{:04X} -> 0x{:02X}{}",
            mode,
            address,
            value,
            if page_crossed { " (page crossed)" } else { "" }
        );

        Operand {
            value,
            address: Some(address),
            page_crossed,
        }
    }
}
