//! # NES 6502 Instruction Interpreter
//!
//! The instruction-execution core of the 6502 found in the NES: fetch/execute,
//! addressing-mode resolution, the register and status model, and per-instruction
//! cycle timing including page-crossing penalties and zero-page wraparound.
//!
//! The load family (LDA, LDX, LDY) is decoded. Other opcodes are reported as
//! unimplemented and otherwise ignored.
//!
//! ## Quick Start
//!
//! ```rust
//! use nescpu::{CPU, Memory, MemoryBus};
//!
//! let mut memory = Memory::new();
//!
//! // LDA $3FFF,X
//! memory.write(0x4000, 0x8A);
//! memory.load(&[0xBD, 0x3F, 0xFF]);
//!
//! let mut cpu = CPU::new(memory);
//! cpu.set_x(0x01);
//!
//! cpu.fetch();
//! cpu.execute().unwrap();
//!
//! assert_eq!(cpu.a(), 0x8A);
//! assert_eq!(cpu.cycles(), 5); // 4 + 1 for crossing into page 0x40
//! ```
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the fetch/execute cycle
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `addressing` - Addressing modes and effective address resolution
//! - `flags` - Status register bitset
//! - `registers` - A, X and Y
//! - `opcodes` - Opcode table
//! - `machine` - CPU and memory bundled together
//!
//! ## Logging
//!
//! The crate logs through the `log` facade: operand resolution at `trace`, each
//! executed instruction at `debug`, unimplemented opcodes at `warn`. Install any
//! logger to see it.

pub mod addressing;
pub mod cpu;
pub mod flags;
pub mod machine;
pub mod memory;
pub mod opcodes;
pub mod registers;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{AddressingMode, Operand, OperandOrder};
pub use cpu::CPU;
pub use flags::Status;
pub use machine::Machine;
pub use memory::{Memory, MemoryBus, LOAD_ADDRESS, MEMORY_SIZE};
pub use opcodes::{Opcode, OpcodeMetadata, OPCODE_TABLE};
pub use registers::{Register, RegisterId};

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// Instruction opcode has not been implemented.
    ///
    /// Contains the opcode byte value for debugging purposes.
    UnimplementedOpcode(u8),
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::UnimplementedOpcode(opcode) => {
                write!(f, "Opcode 0x{:02X} is not implemented", opcode)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
