//! Machine error definitions.
//!
//! Every error the machine can raise is fatal: it aborts the current run and is
//! returned to the caller unchanged. This module provides:
//! 1. **Addressing faults:** Register operands outside the bank and memory accesses past the buffer.
//! 2. **Decode faults:** Opcode values with no defined semantics.
//! 3. **Run-loop faults:** Step budget exhaustion (the runaway-program guard).
//! 4. **Collaborator faults:** Console input, image-file, and configuration failures.

use std::io;

use thiserror::Error;

/// Fatal machine error.
///
/// No variant is recoverable at the instruction level; the run loop stops at the
/// first one and hands it to the caller for diagnostics and exit-code mapping.
#[derive(Debug, Error)]
pub enum VmError {
    /// A register operand outside `1..=10`.
    ///
    /// The associated value is the raw operand as it appeared in the instruction.
    #[error("register index {0} out of range (valid registers are r1..r10)")]
    RegisterOutOfRange(u32),

    /// A byte access at or beyond the end of the memory buffer.
    #[error("memory address {addr:#x} out of range (memory size {size:#x})")]
    AddressOutOfRange {
        /// The first out-of-range byte address touched.
        addr: u64,
        /// Size of the memory buffer in bytes.
        size: usize,
    },

    /// An opcode word with no defined instruction.
    #[error("unknown opcode {opcode} at ip {ip:#x}")]
    UnknownOpcode {
        /// The raw opcode word.
        opcode: u32,
        /// Address of the faulting instruction.
        ip: u32,
    },

    /// The run loop used its whole step budget without executing `exit`.
    #[error("step budget of {steps} exhausted while still running (possible infinite loop)")]
    StepBudgetExceeded {
        /// The budget that was exhausted.
        steps: u64,
    },

    /// `input` did not find a decimal integer on the console.
    #[error("invalid integer input: {0:?}")]
    InvalidInput(String),

    /// Console input ended while an input instruction was waiting.
    #[error("unexpected end of console input")]
    EndOfInput,

    /// A program image does not fit in memory at the requested base.
    #[error("image of {len} bytes at {base:#x} does not fit in {size:#x} bytes of memory")]
    ImageTooLarge {
        /// Requested load address.
        base: u32,
        /// Image length in bytes.
        len: usize,
        /// Size of the memory buffer in bytes.
        size: usize,
    },

    /// Console or image-file I/O failure.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// Malformed JSON configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl VmError {
    /// Returns `true` for both kinds of addressing fault (register or memory).
    pub const fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::RegisterOutOfRange(_) | Self::AddressOutOfRange { .. }
        )
    }
}

/// Result alias used throughout the machine.
pub type VmResult<T> = Result<T, VmError>;
