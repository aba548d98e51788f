//! Property-based tests for CPU invariants.
//!
//! These tests use proptest to verify that fetch/execute maintains its invariants
//! across every decoded opcode and all operand values.

use nescpu::{Memory, MemoryBus, RegisterId, Status, CPU, LOAD_ADDRESS, OPCODE_TABLE};
use proptest::prelude::*;

fn setup_cpu() -> CPU<Memory> {
    CPU::new(Memory::new())
}

fn decoded_opcodes() -> Vec<u8> {
    OPCODE_TABLE
        .iter()
        .enumerate()
        .filter(|(_, m)| m.is_some())
        .map(|(i, _)| i as u8)
        .collect()
}

fn undecoded_opcodes() -> Vec<u8> {
    OPCODE_TABLE
        .iter()
        .enumerate()
        .filter(|(_, m)| m.is_none())
        .map(|(i, _)| i as u8)
        .collect()
}

fn immediate_opcode(register: RegisterId) -> u8 {
    match register {
        RegisterId::A => 0xA9,
        RegisterId::X => 0xA2,
        RegisterId::Y => 0xA0,
    }
}

// ========== Flag N/Z Property Tests ==========

proptest! {
    /// Property: immediate loads set Z iff the value is zero and N iff bit 7 is set
    #[test]
    fn prop_immediate_load_flags(
        register in prop::sample::select(RegisterId::ALL.to_vec()),
        value in any::<u8>(),
    ) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(&[immediate_opcode(register), value]);

        cpu.fetch();
        cpu.execute().unwrap();

        prop_assert_eq!(cpu.register(register).value(), value);
        prop_assert_eq!(cpu.is_zero_set(), value == 0);
        prop_assert_eq!(cpu.is_negative_set(), value & 0x80 != 0);
        prop_assert_eq!(cpu.status(), Status::derive(value));
    }
}

// ========== Cycle and PC Property Tests ==========

proptest! {
    /// Property: PC advances by exactly size_bytes for every decoded opcode
    #[test]
    fn prop_pc_advances_by_instruction_size(
        opcode in prop::sample::select(decoded_opcodes()),
        operand1 in any::<u8>(),
        operand2 in any::<u8>(),
        x in any::<u8>(),
        y in any::<u8>(),
    ) {
        let mut cpu = setup_cpu();
        cpu.set_x(x);
        cpu.set_y(y);
        cpu.memory_mut().load(&[opcode, operand1, operand2]);

        cpu.step().unwrap();

        let metadata = OPCODE_TABLE[opcode as usize].unwrap();
        prop_assert_eq!(cpu.pc(), LOAD_ADDRESS + metadata.size_bytes as u16);
    }

    /// Property: cycles after execute are the base cost, plus at most one on modes that can cross
    #[test]
    fn prop_cycles_match_addressing_mode(
        opcode in prop::sample::select(decoded_opcodes()),
        operand1 in any::<u8>(),
        operand2 in any::<u8>(),
        x in any::<u8>(),
        y in any::<u8>(),
    ) {
        let mut cpu = setup_cpu();
        cpu.set_x(x);
        cpu.set_y(y);
        cpu.memory_mut().load(&[opcode, operand1, operand2]);

        cpu.fetch();
        prop_assert_eq!(cpu.cycles(), 0);
        cpu.execute().unwrap();

        let metadata = OPCODE_TABLE[opcode as usize].unwrap();
        let base = metadata.base_cycles as u64;
        if metadata.addressing_mode.can_cross_page() {
            prop_assert!(cpu.cycles() == base || cpu.cycles() == base + 1);
        } else {
            prop_assert_eq!(cpu.cycles(), base);
        }
    }

    /// Property: an undecoded opcode changes nothing but PC and the pending opcode
    #[test]
    fn prop_undecoded_opcode_is_no_op(
        opcode in prop::sample::select(undecoded_opcodes()),
        a in any::<u8>(),
        x in any::<u8>(),
        y in any::<u8>(),
    ) {
        let mut cpu = setup_cpu();
        cpu.set_a(a);
        cpu.set_x(x);
        cpu.set_y(y);
        cpu.memory_mut().load(&[opcode, 0x00, 0x00]);

        prop_assert!(cpu.step().is_err());

        prop_assert_eq!((cpu.a(), cpu.x(), cpu.y()), (a, x, y));
        prop_assert_eq!(cpu.status(), Status::empty());
        prop_assert_eq!(cpu.cycles(), 0);
        prop_assert_eq!(cpu.pc(), LOAD_ADDRESS + 1);
        prop_assert_eq!(cpu.opcode(), opcode);
    }

    /// Property: two independent CPUs given the same program end in the same state
    #[test]
    fn prop_execution_is_deterministic(
        opcode in prop::sample::select(decoded_opcodes()),
        operand1 in any::<u8>(),
        operand2 in any::<u8>(),
        fill in any::<u8>(),
    ) {
        let build = || {
            let mut memory = Memory::new();
            for addr in 0..=0xFFu16 {
                memory.write(addr, fill.wrapping_add(addr as u8));
            }
            memory.load(&[opcode, operand1, operand2]);
            CPU::new(memory)
        };

        let mut first = build();
        let mut second = build();
        first.step().unwrap();
        second.step().unwrap();

        prop_assert_eq!(first.a(), second.a());
        prop_assert_eq!(first.x(), second.x());
        prop_assert_eq!(first.y(), second.y());
        prop_assert_eq!(first.status(), second.status());
        prop_assert_eq!(first.cycles(), second.cycles());
    }
}
