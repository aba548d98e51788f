//! # Opcode Table
//!
//! The 256-entry table mapping an opcode byte to the register it loads and the
//! addressing mode it uses. Only the load family (LDA, LDX, LDY) is decoded; every
//! other byte maps to `None`.
//!
//! Adding an instruction family means adding [`Opcode`] variants and their
//! metadata. The interpreter reads everything else from the table.

use crate::addressing::AddressingMode;
use crate::registers::RegisterId;

/// The decoded opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    LdaImmediate = 0xA9,
    LdaZeroPage = 0xA5,
    LdaZeroPageX = 0xB5,
    LdaAbsolute = 0xAD,
    LdaAbsoluteX = 0xBD,
    LdaAbsoluteY = 0xB9,
    LdaIndexedIndirect = 0xA1,
    LdaIndirectIndexed = 0xB1,

    LdxImmediate = 0xA2,
    LdxZeroPage = 0xA6,
    LdxZeroPageY = 0xB6,
    LdxAbsolute = 0xAE,
    LdxAbsoluteY = 0xBE,

    LdyImmediate = 0xA0,
    LdyZeroPage = 0xA4,
    LdyZeroPageX = 0xB4,
    LdyAbsolute = 0xAC,
    LdyAbsoluteX = 0xBC,
}

impl Opcode {
    /// Every decoded opcode.
    pub const ALL: [Opcode; 18] = [
        Opcode::LdaImmediate,
        Opcode::LdaZeroPage,
        Opcode::LdaZeroPageX,
        Opcode::LdaAbsolute,
        Opcode::LdaAbsoluteX,
        Opcode::LdaAbsoluteY,
        Opcode::LdaIndexedIndirect,
        Opcode::LdaIndirectIndexed,
        Opcode::LdxImmediate,
        Opcode::LdxZeroPage,
        Opcode::LdxZeroPageY,
        Opcode::LdxAbsolute,
        Opcode::LdxAbsoluteY,
        Opcode::LdyImmediate,
        Opcode::LdyZeroPage,
        Opcode::LdyZeroPageX,
        Opcode::LdyAbsolute,
        Opcode::LdyAbsoluteX,
    ];

    /// The opcode byte.
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Decodes an opcode byte, `None` if it is not a modeled instruction.
    pub fn from_byte(byte: u8) -> Option<Opcode> {
        Opcode::ALL.iter().copied().find(|op| op.byte() == byte)
    }

    /// Target register and addressing mode of this opcode.
    pub const fn metadata(self) -> OpcodeMetadata {
        use AddressingMode::*;
        use RegisterId::*;

        match self {
            Opcode::LdaImmediate => OpcodeMetadata::load("LDA", A, Immediate),
            Opcode::LdaZeroPage => OpcodeMetadata::load("LDA", A, ZeroPage),
            Opcode::LdaZeroPageX => OpcodeMetadata::load("LDA", A, ZeroPageX),
            Opcode::LdaAbsolute => OpcodeMetadata::load("LDA", A, Absolute),
            Opcode::LdaAbsoluteX => OpcodeMetadata::load("LDA", A, AbsoluteX),
            Opcode::LdaAbsoluteY => OpcodeMetadata::load("LDA", A, AbsoluteY),
            Opcode::LdaIndexedIndirect => OpcodeMetadata::load("LDA", A, IndirectX),
            Opcode::LdaIndirectIndexed => OpcodeMetadata::load("LDA", A, IndirectY),

            Opcode::LdxImmediate => OpcodeMetadata::load("LDX", X, Immediate),
            Opcode::LdxZeroPage => OpcodeMetadata::load("LDX", X, ZeroPage),
            Opcode::LdxZeroPageY => OpcodeMetadata::load("LDX", X, ZeroPageY),
            Opcode::LdxAbsolute => OpcodeMetadata::load("LDX", X, Absolute),
            Opcode::LdxAbsoluteY => OpcodeMetadata::load("LDX", X, AbsoluteY),

            Opcode::LdyImmediate => OpcodeMetadata::load("LDY", Y, Immediate),
            Opcode::LdyZeroPage => OpcodeMetadata::load("LDY", Y, ZeroPage),
            Opcode::LdyZeroPageX => OpcodeMetadata::load("LDY", Y, ZeroPageX),
            Opcode::LdyAbsolute => OpcodeMetadata::load("LDY", Y, Absolute),
            Opcode::LdyAbsoluteX => OpcodeMetadata::load("LDY", Y, AbsoluteX),
        }
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> u8 {
        op.byte()
    }
}

/// Metadata for a single decoded opcode.
///
/// # Examples
///
/// ```
/// use nescpu::{AddressingMode, RegisterId, OPCODE_TABLE};
///
/// let lda_imm = OPCODE_TABLE[0xA9].unwrap();
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.target, RegisterId::A);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA").
    pub mnemonic: &'static str,

    /// Register written by the instruction.
    pub target: RegisterId,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page crossing penalties).
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,
}

impl OpcodeMetadata {
    const fn load(mnemonic: &'static str, target: RegisterId, mode: AddressingMode) -> Self {
        Self {
            mnemonic,
            target,
            addressing_mode: mode,
            base_cycles: mode.base_cycles(),
            size_bytes: 1 + mode.operand_bytes(),
        }
    }
}

/// 256-entry opcode table indexed by opcode byte value.
///
/// `None` marks a byte the interpreter does not decode.
pub const OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = build_table();

const fn build_table() -> [Option<OpcodeMetadata>; 256] {
    let mut table = [None; 256];
    let mut i = 0;
    while i < Opcode::ALL.len() {
        let op = Opcode::ALL[i];
        table[op.byte() as usize] = Some(op.metadata());
        i += 1;
    }
    table
}

/// Looks up the metadata for an opcode byte.
pub fn lookup(opcode: u8) -> Option<&'static OpcodeMetadata> {
    OPCODE_TABLE[opcode as usize].as_ref()
}
