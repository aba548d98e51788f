//! Fuzz target for a single fetch/execute.
//!
//! Builds arbitrary register and memory contents, then runs one instruction to
//! find panics and timing outside the documented range.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nescpu::{Memory, MemoryBus, OperandOrder, CPU, OPCODE_TABLE};

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    /// Where execution starts, so PC wraparound gets exercised
    pc: u16,
    low_byte_first: bool,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Page one, reachable by indirect indexed page crossings
    page_one: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = Memory::new();

    for (i, &byte) in input.memory.zero_page.iter().enumerate() {
        memory.write(i as u16, byte);
    }
    for (i, &byte) in input.memory.page_one.iter().enumerate() {
        memory.write(0x0100 + i as u16, byte);
    }

    // Instruction bytes last so they win over page contents
    memory.set_cursor(input.cpu_state.pc);
    memory.load(&input.memory.instruction_bytes);

    let mut cpu = CPU::with_entry_point(memory, input.cpu_state.pc);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    if input.cpu_state.low_byte_first {
        cpu.set_operand_order(OperandOrder::LowFirst);
    }

    let opcode = input.memory.instruction_bytes[0];
    let result = cpu.step();

    match OPCODE_TABLE[opcode as usize] {
        Some(metadata) => {
            assert!(result.is_ok());
            assert!(cpu.cycles() >= metadata.base_cycles as u64);
            assert!(cpu.cycles() <= 6);
            assert_eq!(
                cpu.pc(),
                input.cpu_state.pc.wrapping_add(metadata.size_bytes as u16)
            );
        }
        None => {
            assert!(result.is_err());
            assert_eq!(cpu.cycles(), 0);
            assert_eq!(cpu.a(), input.cpu_state.a);
        }
    }
});
