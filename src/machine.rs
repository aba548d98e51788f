//! # Machine
//!
//! A CPU bundled with the flat memory it was built on. Each `Machine` is a fully
//! independent emulator instance; nothing is shared between two of them.

use crate::{ExecutionError, Memory, CPU};

/// One CPU and its 64KB of memory.
///
/// # Examples
///
/// ```
/// use nescpu::Machine;
///
/// let mut machine = Machine::new();
/// machine.load_program(&[0xA0, 0x00]); // LDY #$00
///
/// machine.step().unwrap();
/// assert_eq!(machine.cpu().y(), 0x00);
/// assert!(machine.cpu().is_zero_set());
/// ```
#[derive(Debug)]
pub struct Machine {
    cpu: CPU<Memory>,
}

impl Machine {
    /// Creates a machine with zeroed memory and the CPU at the load address.
    pub fn new() -> Self {
        Self {
            cpu: CPU::new(Memory::new()),
        }
    }

    /// Appends `program` at the memory write cursor.
    pub fn load_program(&mut self, program: &[u8]) {
        self.cpu.memory_mut().load(program);
    }

    /// Fetches and executes one instruction, returning its cycle count.
    pub fn step(&mut self) -> Result<u64, ExecutionError> {
        self.cpu.step()
    }

    pub fn cpu(&self) -> &CPU<Memory> {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut CPU<Memory> {
        &mut self.cpu
    }

    pub fn memory(&self) -> &Memory {
        self.cpu.memory()
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        self.cpu.memory_mut()
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
