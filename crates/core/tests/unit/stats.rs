//! # Run Statistics Tests
//!
//! Instruction-class counters updated as instructions retire.

use pretty_assertions::assert_eq;
use tinyvm_core::isa::opcodes as op;

use crate::common::builder::program::ProgramBuilder;
use crate::common::harness::TestContext;

#[test]
fn test_counters_by_class() {
    let program = ProgramBuilder::new()
        .movi(1, 0x4000)
        .movi(2, 3)
        .raw(op::MOVRM, 1, 2)
        .raw(op::MOVMR, 3, 1)
        .raw(op::MOVMM, 1, 1)
        .pushi(1)
        .popr(4)
        .printr(3)
        .jump_rel(op::JMPI, 0)
        .exit()
        .build();
    let mut tc = TestContext::new().load_program(&program);

    tc.run(100).unwrap();

    let stats = &tc.cpu.stats;
    assert_eq!(stats.instructions_retired, 10);
    assert_eq!(stats.inst_alu, 2);
    assert_eq!(stats.inst_store, 2);
    assert_eq!(stats.inst_load, 2);
    assert_eq!(stats.inst_stack, 2);
    assert_eq!(stats.inst_io, 1);
    assert_eq!(stats.inst_control, 1);
    assert_eq!(stats.jumps_taken, 1);
    assert_eq!(stats.inst_system, 1);
}

#[test]
fn test_faulting_instruction_is_not_counted() {
    let program = ProgramBuilder::new().movi(1, 1).raw(77, 0, 0).build();
    let mut tc = TestContext::new().load_program(&program);

    assert!(tc.run(10).is_err());
    assert_eq!(tc.cpu.stats.instructions_retired, 1);
}

#[test]
fn test_untaken_jump_is_not_counted_as_taken() {
    let program = ProgramBuilder::new()
        .movi(1, 1)
        .cmpi(1, 0)
        .jump_rel(op::JLTI, 0)
        .exit()
        .build();
    let mut tc = TestContext::new().load_program(&program);

    tc.run(10).unwrap();

    assert_eq!(tc.cpu.stats.inst_control, 1);
    assert_eq!(tc.cpu.stats.jumps_taken, 0);
}

#[test]
fn test_clock_starts_when_run_starts() {
    let program = ProgramBuilder::new().exit().build();
    let mut tc = TestContext::new().load_program(&program);
    std::thread::sleep(std::time::Duration::from_millis(5));
    let before = std::time::Instant::now();

    tc.run(10).unwrap();

    assert!(tc.cpu.stats.start_time() >= before);
}
