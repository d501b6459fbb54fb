//! # Console Instruction Tests
//!
//! Print and input instructions against both the buffered console and a mock.

use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use tinyvm_core::VmError;
use tinyvm_core::config::Config;
use tinyvm_core::isa::opcodes as op;
use tinyvm_core::sim::loader;

use crate::common::builder::program::ProgramBuilder;
use crate::common::harness::TestContext;
use crate::common::mocks::console::MockTerminal;

#[test]
fn test_printr_prints_signed_decimal() {
    let program = ProgramBuilder::new()
        .pushi(0xFFFF_FFFB)
        .popr(1)
        .printr(1)
        .exit()
        .build();
    let mut tc = TestContext::new().load_program(&program);

    tc.run(10).unwrap();

    assert_eq!(tc.output(), "-5\n");
}

#[test]
fn test_printm_prints_memory_word() {
    let program = ProgramBuilder::new()
        .movi(1, 0x4000)
        .raw(op::PRINTM, 1, 0)
        .exit()
        .build();
    let mut tc = TestContext::new().load_program(&program);
    tc.cpu.mem.write_u32(0x4000, 1234).unwrap();

    tc.run(10).unwrap();

    assert_eq!(tc.output(), "1234\n");
}

#[test]
fn test_character_prints() {
    let program = ProgramBuilder::new()
        .movi(1, u32::from(b'A'))
        .raw(op::PRINTCR, 1, 0)
        .movi(2, 0x4000)
        .raw(op::PRINTCM, 2, 0)
        .exit()
        .build();
    let mut tc = TestContext::new().load_program(&program);
    tc.cpu.mem.write_u8(0x4000, b'z').unwrap();

    tc.run(10).unwrap();

    assert_eq!(tc.output(), "A\nz\n");
}

#[test]
fn test_input_then_inputc() {
    let program = ProgramBuilder::new()
        .raw(op::INPUT, 1, 0)
        .raw(op::INPUTC, 2, 0)
        .exit()
        .build();
    let mut tc = TestContext::new().with_input("  -37\nx").load_program(&program);

    tc.run(10).unwrap();

    assert_eq!(tc.reg(1), -37);
    assert_eq!(tc.reg(2), i64::from(b'x'));
}

#[test]
fn test_input_echo_program() {
    let program = ProgramBuilder::new()
        .raw(op::INPUT, 1, 0)
        .raw(op::INPUT, 2, 0)
        .addr(1, 2)
        .printr(1)
        .exit()
        .build();
    let mut tc = TestContext::new().with_input("19 23\n").load_program(&program);

    tc.run(10).unwrap();

    assert_eq!(tc.output(), "42\n");
}

#[test]
fn test_input_rejects_non_numeric() {
    let program = ProgramBuilder::new().movi(1, 6).raw(op::INPUT, 1, 0).build();
    let mut tc = TestContext::new().with_input("abc").load_program(&program);

    let result = tc.run(10);

    assert!(matches!(result, Err(VmError::InvalidInput(_))));
    assert_eq!(tc.reg(1), 6);
}

#[test]
fn test_input_at_end_of_stream() {
    let program = ProgramBuilder::new().raw(op::INPUTC, 1, 0).build();
    let mut tc = TestContext::new().load_program(&program);

    assert!(matches!(tc.run(10), Err(VmError::EndOfInput)));
}

#[test]
fn test_mock_console_sees_exact_calls() {
    let program = ProgramBuilder::new()
        .raw(op::INPUT, 1, 0)
        .incr(1)
        .printr(1)
        .raw(op::PRINTCR, 1, 0)
        .exit()
        .build();
    let image = loader::encode_program(&program);
    let mut cpu = loader::setup(&Config::default(), &image).unwrap();

    let mut console = MockTerminal::new();
    let _ = console.expect_read_int().times(1).returning(|| Ok(64));
    let _ = console
        .expect_print_int()
        .with(eq(65))
        .times(1)
        .returning(|_| Ok(()));
    let _ = console
        .expect_print_char()
        .with(eq(b'A'))
        .times(1)
        .returning(|_| Ok(()));

    cpu.run(10, &mut console).unwrap();

    assert_eq!(cpu.get_reg(1).unwrap(), 65);
}

#[test]
fn test_console_failure_aborts_run() {
    let program = ProgramBuilder::new().printr(1).movi(2, 1).exit().build();
    let image = loader::encode_program(&program);
    let mut cpu = loader::setup(&Config::default(), &image).unwrap();

    let mut console = MockTerminal::new();
    let _ = console.expect_print_int().returning(|_| {
        Err(VmError::Io(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "closed",
        )))
    });

    let result = cpu.run(10, &mut console);

    assert!(matches!(result, Err(VmError::Io(_))));
    assert_eq!(cpu.get_reg(2).unwrap(), 0);
}
