//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode table, the raw and decoded instruction forms, the decoder,
//! and the disassembler. Every instruction is a fixed 12-byte triple: opcode word,
//! operand A, operand B, each a little-endian `u32`.

/// Instruction decoding from raw triples.
pub mod decode;

/// Instruction disassembler for tracing and diagnostics.
pub mod disasm;

/// Raw triples and the decoded instruction enum.
pub mod instruction;

/// Numeric opcode values.
pub mod opcodes;

pub use decode::decode;
pub use instruction::{Condition, Instruction, RawInstruction, Target};
