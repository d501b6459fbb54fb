//! Global Machine Constants.
//!
//! This module defines machine-wide constants used across the interpreter. It includes:
//! 1. **Instruction Constants:** Word and instruction widths, operand offsets.
//! 2. **Register Constants:** The valid register index range.
//! 3. **Run Constants:** The default step budget.

/// Size of one memory word in bytes.
pub const WORD_SIZE: u32 = 4;

/// Size of one encoded instruction in bytes (opcode, operand A, operand B).
pub const INSTRUCTION_SIZE: u32 = 3 * WORD_SIZE;

/// Offset of operand A from the start of an instruction.
pub const OPERAND_A_OFFSET: u32 = WORD_SIZE;

/// Offset of operand B from the start of an instruction.
pub const OPERAND_B_OFFSET: u32 = 2 * WORD_SIZE;

/// Lowest valid register index. Index 0 is reserved and never addressable.
pub const REG_MIN: u32 = 1;

/// Highest valid register index.
pub const REG_MAX: u32 = 10;

/// Number of addressable registers.
pub const NUM_REGS: usize = (REG_MAX - REG_MIN + 1) as usize;

/// Default instruction budget for a single run.
///
/// Exhausting it is reported as a fatal error, so it is chosen far above what
/// any well-behaved program needs.
pub const DEFAULT_MAX_STEPS: u64 = 1_000_000;
