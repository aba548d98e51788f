//! # CPU State and Execution
//!
//! This module contains the CPU struct and the fetch/execute cycle.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next byte to read, wraps at 0xFFFF
//! - **Opcode**: the byte most recently fetched
//! - **Status flags**: 8-bit bitset, rebuilt by every executed instruction
//! - **Cycle counter**: cost of the current instruction, reset by every fetch
//!
//! ## Execution Model
//!
//! The host alternates [`CPU::fetch`] and [`CPU::execute`], or calls [`CPU::step`]
//! which does both:
//!
//! - `fetch()` reads the opcode at PC, advances PC and zeroes the cycle counter.
//! - `execute()` decodes the pending opcode through the opcode table, clears the
//!   status register, consumes the operand bytes and performs the load.
//!
//! Calling `execute()` twice re-runs the last fetched opcode against whatever PC now
//! points at. Calling `fetch()` twice discards the first opcode.

use log::{debug, trace, warn};

use crate::addressing::{Operand, OperandOrder};
use crate::flags::Status;
use crate::memory::LOAD_ADDRESS;
use crate::opcodes;
use crate::registers::{Register, RegisterFile, RegisterId};
use crate::{ExecutionError, MemoryBus};

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the [`MemoryBus`] trait. The CPU owns
/// its memory exclusively.
///
/// # Examples
///
/// ```
/// use nescpu::{CPU, Memory};
///
/// let mut memory = Memory::new();
/// memory.load(&[0xA9, 0xF1]); // LDA #$F1
///
/// let mut cpu = CPU::new(memory);
/// cpu.fetch();
/// cpu.execute().unwrap();
///
/// assert_eq!(cpu.a(), 0xF1);
/// assert!(cpu.is_negative_set());
/// assert!(!cpu.is_zero_set());
/// assert_eq!(cpu.cycles(), 2);
/// ```
pub struct CPU<M: MemoryBus> {
    /// A, X and Y
    pub(crate) registers: RegisterFile,

    /// Program counter (address of next byte to read)
    pub(crate) pc: u16,

    /// Opcode waiting to be executed
    pub(crate) opcode: u8,

    /// Status register
    pub(crate) status: Status,

    /// Cycles spent on the current instruction
    pub(crate) cycles: u64,

    /// How two-byte address operands are combined
    pub(crate) operand_order: OperandOrder,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU with PC at [`LOAD_ADDRESS`] and every register, flag and
    /// counter zeroed.
    pub fn new(memory: M) -> Self {
        Self::with_entry_point(memory, LOAD_ADDRESS)
    }

    /// Creates a CPU that starts executing at `pc`.
    pub fn with_entry_point(memory: M, pc: u16) -> Self {
        Self {
            registers: RegisterFile::default(),
            pc,
            opcode: 0x00,
            status: Status::empty(),
            cycles: 0,
            operand_order: OperandOrder::default(),
            memory,
        }
    }

    /// Reads the opcode at PC, advances PC by one and resets the cycle counter.
    ///
    /// Returns the opcode, which becomes the pending instruction for
    /// [`CPU::execute`].
    pub fn fetch(&mut self) -> u8 {
        let pc = self.pc;
        self.opcode = self.next_byte();
        self.cycles = 0;
        trace!("fetch 0x{:02X} at 0x{:04X}", self.opcode, pc);
        self.opcode
    }

    /// Executes the pending opcode.
    ///
    /// Clears the status register, resolves the operand, loads the target register,
    /// derives N and Z from the loaded value and charges the mode's cycles.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::UnimplementedOpcode`] if the pending opcode is not
    /// decoded. Nothing is modified in that case, so the error can be ignored to
    /// treat unknown opcodes as no-ops.
    pub fn execute(&mut self) -> Result<(), ExecutionError> {
        let Some(metadata) = opcodes::lookup(self.opcode) else {
            warn!(
                "unimplemented opcode 0x{:02X} before 0x{:04X}",
                self.opcode, self.pc
            );
            return Err(ExecutionError::UnimplementedOpcode(self.opcode));
        };

        self.status.clear();

        let operand = self.resolve_operand(metadata.addressing_mode);
        self.load(metadata.target, operand);

        let mut cycles = metadata.base_cycles as u64;
        if operand.page_crossed {
            cycles += 1;
        }
        self.cycles += cycles;

        debug!(
            "{} {:?} -> {}=0x{:02X} P=0x{:02X} cycles={}",
            metadata.mnemonic,
            metadata.addressing_mode,
            metadata.target,
            operand.value,
            self.status.bits(),
            self.cycles
        );

        Ok(())
    }

    /// Fetches and executes one instruction.
    ///
    /// Returns the cycles it took.
    ///
    /// # Errors
    ///
    /// Same as [`CPU::execute`]. PC has already moved past the opcode byte.
    pub fn step(&mut self) -> Result<u64, ExecutionError> {
        self.fetch();
        self.execute()?;
        Ok(self.cycles)
    }

    fn load(&mut self, target: RegisterId, operand: Operand) {
        self.registers.get_mut(target).set(operand.value);
        self.status.insert(Status::derive(operand.value));
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.registers.get(RegisterId::A).value()
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.registers.get(RegisterId::X).value()
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.registers.get(RegisterId::Y).value()
    }

    pub fn register(&self, id: RegisterId) -> Register {
        self.registers.get(id)
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the most recently fetched opcode.
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    /// Returns the status register.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Cycles charged since the last fetch.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn is_negative_set(&self) -> bool {
        self.status.contains(Status::NEGATIVE)
    }

    /// Returns true if the Zero flag is set.
    pub fn is_zero_set(&self) -> bool {
        self.status.contains(Status::ZERO)
    }

    /// Returns true if the Overflow flag is set.
    pub fn is_overflow_set(&self) -> bool {
        self.status.contains(Status::OVERFLOW)
    }

    /// Returns true if the Carry flag is set.
    pub fn is_carry_set(&self) -> bool {
        self.status.contains(Status::CARRY)
    }

    // ========== Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.set_register(RegisterId::A, value);
    }

    pub fn set_x(&mut self, value: u8) {
        self.set_register(RegisterId::X, value);
    }

    pub fn set_y(&mut self, value: u8) {
        self.set_register(RegisterId::Y, value);
    }

    /// Writes a register directly. Flags are not touched.
    pub fn set_register(&mut self, id: RegisterId, value: u8) {
        self.registers.get_mut(id).set(value);
    }

    pub fn set_pc(&mut self, pc: u16) {
        self.pc = pc;
    }

    /// Selects how absolute operands are decoded from here on.
    pub fn set_operand_order(&mut self, order: OperandOrder) {
        self.operand_order = order;
    }

    pub fn operand_order(&self) -> OperandOrder {
        self.operand_order
    }

    // ========== Memory Access ==========

    pub fn memory(&self) -> &M {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and hands back its memory.
    pub fn into_memory(self) -> M {
        self.memory
    }
}

impl<M: MemoryBus> std::fmt::Debug for CPU<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CPU")
            .field("a", &self.a())
            .field("x", &self.x())
            .field("y", &self.y())
            .field("pc", &format_args!("0x{:04X}", self.pc))
            .field("opcode", &format_args!("0x{:02X}", self.opcode))
            .field("status", &format_args!("0b{:08b}", self.status.bits()))
            .field("cycles", &self.cycles)
            .finish()
    }
}
