//! # Memory
//!
//! The CPU reaches memory only through the [`MemoryBus`] trait. [`Memory`] is the
//! stock implementation: a flat 64KB byte array with a write cursor used to lay a
//! program down contiguously before running it.
//!
//! The bus has no mirroring, no memory-mapped I/O and no cartridge mapping. Every
//! 16-bit address is backed, so there is no out-of-range access to report.

/// Size of the logical address space in bytes.
pub const MEMORY_SIZE: usize = 0x10000;

/// First address of the zero page.
pub const ZERO_PAGE_START: u16 = 0x0000;

/// Last address of the zero page.
pub const ZERO_PAGE_END: u16 = 0x00FF;

/// Address where programs are loaded and execution begins.
///
/// 0x0100-0x01FF is the hardware stack page, so programs start right after it.
pub const LOAD_ADDRESS: u16 = 0x0200;

/// Memory bus trait for CPU to read/write bytes.
///
/// # Design
///
/// - `read(&self)`: Immutable reference, reads have no side effects
/// - `write(&mut self)`: Mutable reference makes side effects explicit
/// - No error types: the address type already spans the whole address space
///
/// # Examples
///
/// ```
/// use nescpu::{Memory, MemoryBus};
///
/// let mut mem = Memory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// Must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// Must never panic.
    fn write(&mut self, addr: u16, value: u8);
}

/// Flat 64KB memory with a sequential write cursor.
///
/// All addresses (0x0000-0xFFFF) are writable RAM initialized to 0x00. The cursor
/// starts at [`LOAD_ADDRESS`] and is only touched by [`Memory::append`] and
/// [`Memory::load`]; addressed reads and writes ignore it.
///
/// # Examples
///
/// ```
/// use nescpu::{Memory, MemoryBus, LOAD_ADDRESS};
///
/// let mut mem = Memory::new();
/// mem.append(0xA9); // LDA #
/// mem.append(0x39);
///
/// assert_eq!(mem.read(LOAD_ADDRESS), 0xA9);
/// assert_eq!(mem.read(LOAD_ADDRESS + 1), 0x39);
/// assert_eq!(mem.cursor(), LOAD_ADDRESS + 2);
/// ```
#[derive(Clone)]
pub struct Memory {
    data: Box<[u8; MEMORY_SIZE]>,
    cursor: u16,
}

impl Memory {
    /// Creates zeroed memory with the write cursor at [`LOAD_ADDRESS`].
    pub fn new() -> Self {
        Self::with_load_address(LOAD_ADDRESS)
    }

    /// Creates zeroed memory with the write cursor at `addr`.
    pub fn with_load_address(addr: u16) -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
            cursor: addr,
        }
    }

    /// Stores `value` at the cursor and advances it by one.
    ///
    /// The cursor wraps from 0xFFFF back to 0x0000.
    pub fn append(&mut self, value: u8) {
        self.data[self.cursor as usize] = value;
        self.cursor = self.cursor.wrapping_add(1);
    }

    /// Appends every byte of `program` in order.
    pub fn load(&mut self, program: &[u8]) {
        for &byte in program {
            self.append(byte);
        }
    }

    /// Address the next [`Memory::append`] will write to.
    pub fn cursor(&self) -> u16 {
        self.cursor
    }

    /// Moves the write cursor.
    pub fn set_cursor(&mut self, addr: u16) {
        self.cursor = addr;
    }

    /// Borrows `len` bytes starting at `start`, clamped to the end of memory.
    pub fn slice(&self, start: u16, len: usize) -> &[u8] {
        let start = start as usize;
        let end = start.saturating_add(len).min(MEMORY_SIZE);
        &self.data[start..end]
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("size", &MEMORY_SIZE)
            .field("cursor", &format_args!("0x{:04X}", self.cursor))
            .finish()
    }
}

impl MemoryBus for Memory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
