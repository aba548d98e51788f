//! # General-Purpose Registers
//!
//! The accumulator and the two index registers. The CPU owns all three in a small
//! array and addresses them by [`RegisterId`]; a register never refers back to the
//! CPU, the load routines on the CPU take the target register as an argument.

/// Selects one of the three general-purpose registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterId {
    /// Accumulator
    A,
    /// X index register
    X,
    /// Y index register
    Y,
}

impl RegisterId {
    /// All registers in storage order.
    pub const ALL: [RegisterId; 3] = [RegisterId::A, RegisterId::X, RegisterId::Y];

    pub(crate) const fn index(self) -> usize {
        match self {
            RegisterId::A => 0,
            RegisterId::X => 1,
            RegisterId::Y => 2,
        }
    }

    /// Single-letter register name.
    pub const fn name(self) -> &'static str {
        match self {
            RegisterId::A => "A",
            RegisterId::X => "X",
            RegisterId::Y => "Y",
        }
    }
}

impl std::fmt::Display for RegisterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An 8-bit register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Register(u8);

impl Register {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn set(&mut self, value: u8) {
        self.0 = value;
    }
}

/// The A, X and Y registers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct RegisterFile([Register; 3]);

impl RegisterFile {
    pub(crate) fn get(&self, id: RegisterId) -> Register {
        self.0[id.index()]
    }

    pub(crate) fn get_mut(&mut self, id: RegisterId) -> &mut Register {
        &mut self.0[id.index()]
    }
}
