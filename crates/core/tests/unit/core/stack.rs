//! # Stack and Call Tests
//!
//! Push and pop discipline, subroutine calls, and stack faults.

use pretty_assertions::assert_eq;
use tinyvm_core::VmError;
use tinyvm_core::common::Reg;
use tinyvm_core::isa::opcodes as op;

use crate::common::builder::program::{ProgramBuilder, STEP};
use crate::common::harness::{BASE, STACK_TOP, TestContext};

#[test]
fn test_pushi_popr_round_trip() {
    let program = ProgramBuilder::new().pushi(42).popr(1).exit().build();
    let mut tc = TestContext::new().load_program(&program);

    tc.run(10).unwrap();

    assert_eq!(tc.reg(1), 42);
    assert_eq!(tc.cpu.sp, STACK_TOP);
}

#[test]
fn test_push_grows_downward() {
    let program = ProgramBuilder::new().pushi(1).pushi(2).exit().build();
    let mut tc = TestContext::new().load_program(&program);

    tc.run(10).unwrap();

    assert_eq!(tc.cpu.sp, STACK_TOP - 8);
    assert_eq!(tc.cpu.mem.read_u32(STACK_TOP - 4).unwrap(), 1);
    assert_eq!(tc.cpu.mem.read_u32(STACK_TOP - 8).unwrap(), 2);
    assert_eq!(tc.cpu.peek().unwrap(), 2);
}

#[test]
fn test_stack_is_last_in_first_out() {
    let program = ProgramBuilder::new()
        .movi(1, 10)
        .movi(2, 20)
        .pushr(1)
        .pushr(2)
        .popr(1)
        .popr(2)
        .exit()
        .build();
    let mut tc = TestContext::new().load_program(&program);

    tc.run(20).unwrap();

    assert_eq!(tc.reg(1), 20);
    assert_eq!(tc.reg(2), 10);
}

#[test]
fn test_pushr_keeps_low_word_and_popr_sign_extends() {
    let program = ProgramBuilder::new().pushr(1).popr(2).exit().build();
    let mut tc = TestContext::new().load_program(&program);
    tc.cpu.regs.write(Reg::new(1).unwrap(), -7);

    tc.run(10).unwrap();

    assert_eq!(tc.reg(2), -7);
}

#[test]
fn test_popm_stores_top_of_stack() {
    let program = ProgramBuilder::new()
        .pushi(0xBEEF)
        .movi(1, 0x4000)
        .raw(op::POPM, 1, 0)
        .exit()
        .build();
    let mut tc = TestContext::new().load_program(&program);

    tc.run(10).unwrap();

    assert_eq!(tc.cpu.mem.read_u32(0x4000).unwrap(), 0xBEEF);
    assert_eq!(tc.cpu.sp, STACK_TOP);
}

#[test]
fn test_call_and_ret_resume_after_call() {
    // 0: movi r1, 24
    // 1: call r1        -> index 4
    // 2: printr r2
    // 3: exit
    // 4: movi r2, 9
    // 5: ret
    let program = ProgramBuilder::new()
        .movi(1, 2 * STEP as u32)
        .raw(op::CALL, 1, 0)
        .printr(2)
        .exit()
        .movi(2, 9)
        .raw(op::RET, 0, 0)
        .build();
    let mut tc = TestContext::new().load_program(&program);

    tc.run(20).unwrap();

    assert_eq!(tc.output(), "9\n");
    assert_eq!(tc.cpu.sp, STACK_TOP);
    assert_eq!(tc.cpu.stats.calls, 1);
    assert_eq!(tc.cpu.stats.returns, 1);
}

#[test]
fn test_call_pushes_return_address() {
    let program = ProgramBuilder::new().raw(op::CALL, 1, 0).build();
    let mut tc = TestContext::new().load_program(&program);

    tc.step().unwrap();

    assert_eq!(tc.cpu.sp, STACK_TOP - 4);
    assert_eq!(tc.cpu.peek().unwrap(), BASE + 12);
    assert_eq!(tc.cpu.ip, BASE + 12);
}

#[test]
fn test_callm_reads_displacement_from_memory() {
    let program = ProgramBuilder::new()
        .movi(1, 0x4000)
        .raw(op::CALLM, 1, 0)
        .exit()
        .movi(3, 1)
        .raw(op::RET, 0, 0)
        .build();
    let mut tc = TestContext::new().load_program(&program);
    tc.cpu.mem.write_u32(0x4000, STEP as u32).unwrap();

    tc.run(20).unwrap();

    assert_eq!(tc.reg(3), 1);
    assert_eq!(tc.cpu.sp, STACK_TOP);
}

#[test]
fn test_push_overflow_leaves_sp_unchanged() {
    let program = ProgramBuilder::new().pushi(1).build();
    let mut tc = TestContext::new().load_program(&program);
    tc.cpu.set_sp(0);

    let result = tc.run(10);

    assert!(matches!(result, Err(VmError::AddressOutOfRange { .. })));
    assert_eq!(tc.cpu.sp, 0);
}

#[test]
fn test_pop_past_memory_end_leaves_register_and_sp() {
    let program = ProgramBuilder::new().movi(1, 3).popr(1).build();
    let mut tc = TestContext::new().load_program(&program);
    tc.cpu.set_sp(0x10000);

    let result = tc.run(10);

    assert!(matches!(result, Err(VmError::AddressOutOfRange { addr: 0x10000, .. })));
    assert_eq!(tc.reg(1), 3);
    assert_eq!(tc.cpu.sp, 0x10000);
}

#[test]
fn test_ret_on_empty_stack_faults() {
    let program = ProgramBuilder::new().raw(op::RET, 0, 0).build();
    let mut tc = TestContext::new().load_program(&program);
    tc.cpu.set_sp(0x10000);

    assert!(tc.run(10).is_err_and(|e| e.is_out_of_range()));
}

#[test]
fn test_callm_displacement_read_sees_pushed_return_address() {
    // r1 points at the slot the push fills, so the displacement is the return address.
    let program = ProgramBuilder::new()
        .movi(1, STACK_TOP - 4)
        .raw(op::CALLM, 1, 0)
        .build();
    let mut tc = TestContext::new().load_program(&program);

    tc.step().unwrap();
    tc.step().unwrap();

    let ret = BASE + 24;
    assert_eq!(tc.cpu.peek().unwrap(), ret);
    assert_eq!(tc.cpu.sp, STACK_TOP - 4);
    assert_eq!(tc.cpu.ip, ret.wrapping_add(ret));
}

#[test]
fn test_callm_bad_displacement_address_keeps_sp_and_ip() {
    let program = ProgramBuilder::new().movi(1, 0x20000).raw(op::CALLM, 1, 0).build();
    let mut tc = TestContext::new().load_program(&program);

    let result = tc.run(10);

    assert!(matches!(result, Err(VmError::AddressOutOfRange { addr: 0x20000, .. })));
    assert_eq!(tc.cpu.sp, STACK_TOP);
    assert_eq!(tc.cpu.ip, BASE + 24);
    assert_eq!(tc.cpu.mem.read_u32(STACK_TOP - 4).unwrap(), BASE + 24);
}
