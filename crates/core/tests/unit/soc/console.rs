//! # Stream Console Tests
//!
//! Integer and character parsing over in-memory streams.

use std::io::Cursor;

use pretty_assertions::assert_eq;
use rstest::rstest;
use tinyvm_core::VmError;
use tinyvm_core::soc::{Console, StreamConsole};

fn console(input: &str) -> StreamConsole<Cursor<Vec<u8>>, Vec<u8>> {
    StreamConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[rstest]
#[case("42", 42)]
#[case("  7\n", 7)]
#[case("\n\t-15 rest", -15)]
#[case("+8", 8)]
#[case("9223372036854775807", i64::MAX)]
fn test_read_int(#[case] input: &str, #[case] expected: i64) {
    assert_eq!(console(input).read_int().unwrap(), expected);
}

#[rstest]
#[case("x1")]
#[case("--3")]
#[case("-")]
#[case("99999999999999999999")]
fn test_read_int_invalid(#[case] input: &str) {
    assert!(matches!(console(input).read_int(), Err(VmError::InvalidInput(_))));
}

#[rstest]
#[case("")]
#[case("   \n")]
fn test_read_int_end_of_input(#[case] input: &str) {
    assert!(matches!(console(input).read_int(), Err(VmError::EndOfInput)));
}

#[test]
fn test_consecutive_reads() {
    let mut con = console("3 -4\nq");
    assert_eq!(con.read_int().unwrap(), 3);
    assert_eq!(con.read_int().unwrap(), -4);
    assert_eq!(con.read_char().unwrap(), b'q');
}

#[test]
fn test_read_char_takes_spaces_literally() {
    let mut con = console(" a");
    assert_eq!(con.read_char().unwrap(), b' ');
    assert_eq!(con.read_char().unwrap(), b'a');
}

#[test]
fn test_read_char_skips_a_single_newline() {
    let mut con = console("\n\nb");
    assert_eq!(con.read_char().unwrap(), b'\n');
    assert_eq!(con.read_char().unwrap(), b'b');
}

#[test]
fn test_read_char_newline_then_end() {
    assert!(matches!(console("\n").read_char(), Err(VmError::EndOfInput)));
}

#[test]
fn test_prints_are_newline_terminated() {
    let mut con = console("");
    con.print_int(-12).unwrap();
    con.print_char(b'#').unwrap();
    con.print_int(0).unwrap();

    assert_eq!(con.into_output(), b"-12\n#\n0\n".to_vec());
}
