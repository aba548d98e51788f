//! Tests for the LDA (Load Accumulator) instruction.
//!
//! Tests cover:
//! - All 8 addressing modes
//! - Flag updates (Z, N)
//! - Zero-page wraparound and page-crossing penalties

use nescpu::{Memory, MemoryBus, OperandOrder, CPU, LOAD_ADDRESS};

fn setup_cpu() -> CPU<Memory> {
    CPU::new(Memory::new())
}

fn run(cpu: &mut CPU<Memory>) {
    cpu.fetch();
    cpu.execute().unwrap();
}

// ========== Immediate ==========

#[test]
fn test_lda_immediate_positive() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(&[0xA9, 0x39]);

    run(&mut cpu);

    assert_eq!(cpu.a(), 0x39);
    assert!(!cpu.is_zero_set());
    assert!(!cpu.is_negative_set());
    assert_eq!(cpu.cycles(), 2);
    assert_eq!(cpu.pc(), LOAD_ADDRESS + 2);
}

#[test]
fn test_lda_immediate_zero() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(&[0xA9, 0x00]);

    run(&mut cpu);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.is_zero_set());
    assert!(!cpu.is_negative_set());
}

#[test]
fn test_lda_immediate_negative() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(&[0xA9, 0xF1]);

    run(&mut cpu);

    assert_eq!(cpu.a(), 0xF1);
    assert!(!cpu.is_zero_set());
    assert!(cpu.is_negative_set());
}

#[test]
fn test_lda_immediate_sequence_resets_flags() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(&[0xA9, 0x39, 0xA9, 0x00, 0xA9, 0xF1]);

    run(&mut cpu);
    assert_eq!(cpu.a(), 0x39);
    assert!(!cpu.is_zero_set());
    assert!(!cpu.is_negative_set());

    run(&mut cpu);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.is_zero_set());
    assert!(!cpu.is_negative_set());

    run(&mut cpu);
    assert_eq!(cpu.a(), 0xF1);
    assert!(!cpu.is_zero_set());
    assert!(cpu.is_negative_set());
}

// ========== Zero Page ==========

#[test]
fn test_lda_zero_page() {
    let mut cpu = setup_cpu();
    let mem = cpu.memory_mut();
    mem.write(0x00, 0x69);
    mem.write(0x08, 0xFF);
    mem.write(0xFF, 0xAB);
    mem.load(&[0xA5, 0x00, 0xA5, 0x08, 0xA5, 0xFF]);

    run(&mut cpu);
    assert_eq!(cpu.a(), 0x69);
    assert_eq!(cpu.cycles(), 3);

    run(&mut cpu);
    assert_eq!(cpu.a(), 0xFF);
    assert!(cpu.is_negative_set());

    run(&mut cpu);
    assert_eq!(cpu.a(), 0xAB);
    assert_eq!(cpu.cycles(), 3);
}

// ========== Zero Page,X ==========

#[test]
fn test_lda_zero_page_x_wraps() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x65);

    // 0xF8 + 0x65 = 0x15D, stays in zero page at 0x5D
    cpu.memory_mut().write(0x5D, 0xE3);
    cpu.memory_mut().write(0x015D, 0x11);
    cpu.memory_mut().load(&[0xB5, 0xF8]);

    run(&mut cpu);

    assert_eq!(cpu.a(), 0xE3);
    assert!(cpu.is_negative_set());
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_lda_zero_page_x_no_wrap() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x10);
    cpu.memory_mut().write(0x30, 0x42);
    cpu.memory_mut().load(&[0xB5, 0x20]);

    run(&mut cpu);

    assert_eq!(cpu.a(), 0x42);
    assert_eq!(cpu.cycles(), 4);
}

// ========== Absolute ==========

#[test]
fn test_lda_absolute() {
    let mut cpu = setup_cpu();
    let mem = cpu.memory_mut();
    mem.write(0xF332, 0xE3);
    mem.write(0x0000, 0xAB);
    mem.write(0xFFFF, 0x96);
    mem.load(&[0xAD, 0xF3, 0x32, 0xAD, 0x00, 0x00, 0xAD, 0xFF, 0xFF]);

    run(&mut cpu);
    assert_eq!(cpu.a(), 0xE3);
    assert_eq!(cpu.cycles(), 4);

    run(&mut cpu);
    assert_eq!(cpu.a(), 0xAB);

    run(&mut cpu);
    assert_eq!(cpu.a(), 0x96);
    assert_eq!(cpu.pc(), LOAD_ADDRESS + 9);
}

#[test]
fn test_lda_absolute_low_byte_first() {
    let mut cpu = setup_cpu();
    cpu.set_operand_order(OperandOrder::LowFirst);
    cpu.memory_mut().write(0xF332, 0xE3);
    cpu.memory_mut().load(&[0xAD, 0x32, 0xF3]);

    run(&mut cpu);

    assert_eq!(cpu.a(), 0xE3);
    assert_eq!(cpu.cycles(), 4);
}

// ========== Absolute,X / Absolute,Y ==========

#[test]
fn test_lda_absolute_x_page_cross() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x4000, 0x8A);
    cpu.memory_mut().load(&[0xBD, 0x3F, 0xFF]);
    cpu.set_x(0x01);

    run(&mut cpu);

    // 0x3FFF + 1 = 0x4000
    assert_eq!(cpu.a(), 0x8A);
    assert!(cpu.is_negative_set());
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_lda_absolute_x_same_page() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x3F40, 0x21);
    cpu.memory_mut().load(&[0xBD, 0x3F, 0x3F]);
    cpu.set_x(0x01);

    run(&mut cpu);

    assert_eq!(cpu.a(), 0x21);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_lda_absolute_y_no_page_cross() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x1337, 0xCD);
    cpu.memory_mut().load(&[0xB9, 0x13, 0x00]);
    cpu.set_y(0x37);

    run(&mut cpu);

    assert_eq!(cpu.a(), 0xCD);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_lda_absolute_x_then_y() {
    let mut cpu = setup_cpu();
    let mem = cpu.memory_mut();
    mem.write(0x4000, 0x8A);
    mem.write(0x1337, 0xCD);
    mem.load(&[0xBD, 0x3F, 0xFF, 0xB9, 0x13, 0x00]);
    cpu.set_x(0x01);
    cpu.set_y(0x37);

    run(&mut cpu);
    assert_eq!(cpu.a(), 0x8A);
    assert_eq!(cpu.cycles(), 5);

    run(&mut cpu);
    assert_eq!(cpu.a(), 0xCD);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_lda_absolute_y_wraps_address_space() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x0001, 0x55);
    cpu.memory_mut().load(&[0xB9, 0xFF, 0xFF]);
    cpu.set_y(0x02);

    run(&mut cpu);

    assert_eq!(cpu.a(), 0x55);
    assert_eq!(cpu.cycles(), 5);
}

// ========== (Indirect,X) ==========

#[test]
fn test_lda_indexed_indirect() {
    let mut cpu = setup_cpu();
    let mem = cpu.memory_mut();
    mem.write(0x85, 0xFA); // final destination
    mem.write(0x9A, 0x70); // byte the operand points to
    mem.write(0x37, 0x15); // byte X points to
    mem.load(&[0xA1, 0x9A]);
    cpu.set_x(0x37);

    run(&mut cpu);

    assert_eq!(cpu.a(), 0xFA);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_lda_indexed_indirect_wraps_in_zero_page() {
    let mut cpu = setup_cpu();
    let mem = cpu.memory_mut();
    mem.write(0xF7, 0xCD);
    mem.write(0x01F7, 0x11);
    mem.write(0x12, 0xFF);
    mem.write(0x34, 0xF8);
    mem.load(&[0xA1, 0x12]);
    cpu.set_x(0x34);

    run(&mut cpu);

    // 0xFF + 0xF8 = 0x1F7, wraps to 0xF7
    assert_eq!(cpu.a(), 0xCD);
    assert_eq!(cpu.cycles(), 6);
}

// ========== (Indirect),Y ==========

#[test]
fn test_lda_indirect_indexed() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x85, 0xFA);
    cpu.memory_mut().write(0x9A, 0x70);
    cpu.memory_mut().load(&[0xB1, 0x9A]);
    cpu.set_y(0x15);

    run(&mut cpu);

    assert_eq!(cpu.a(), 0xFA);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_lda_indirect_indexed_page_cross() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x12, 0xFF);
    cpu.memory_mut().write(0x01F7, 0xCD);
    cpu.memory_mut().load(&[0xB1, 0x12]);
    cpu.set_y(0xF8);

    run(&mut cpu);

    assert_eq!(cpu.a(), 0xCD);
    assert_eq!(cpu.cycles(), 6);
}
