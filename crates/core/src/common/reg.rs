//! Register Bank.
//!
//! This module provides the `Reg` operand type and the `RegisterFile` that backs it.
//! It provides:
//! 1. **Validation:** `Reg` can only be built from an index in `1..=10`, so a held `Reg`
//!    is always a legal operand and register access itself cannot fail.
//! 2. **Storage:** Ten signed 64-bit registers, all zero at construction.
//! 3. **Observability:** A register dump for fatal-error diagnostics.

use std::fmt;

use super::constants::{NUM_REGS, REG_MAX, REG_MIN};
use super::error::{VmError, VmResult};

/// A validated register operand (`r1`..`r10`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Reg(u8);

impl Reg {
    /// Validates a raw operand as a register index.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::RegisterOutOfRange`] for any value outside `1..=10`.
    pub const fn new(raw: u32) -> VmResult<Self> {
        if raw < REG_MIN || raw > REG_MAX {
            return Err(VmError::RegisterOutOfRange(raw));
        }
        Ok(Self(raw as u8))
    }

    /// Returns the register number (1-10).
    #[inline(always)]
    pub const fn number(self) -> u32 {
        self.0 as u32
    }

    #[inline(always)]
    const fn slot(self) -> usize {
        (self.0 as u32 - REG_MIN) as usize
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// The processor's register bank.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [i64; NUM_REGS],
}

impl RegisterFile {
    /// Creates a register file with every register set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register.
    #[inline(always)]
    pub const fn read(&self, reg: Reg) -> i64 {
        self.regs[reg.slot()]
    }

    /// Writes a register.
    #[inline(always)]
    pub const fn write(&mut self, reg: Reg, val: i64) {
        self.regs[reg.slot()] = val;
    }

    /// Reads a register by raw index, validating it first.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::RegisterOutOfRange`] for any index outside `1..=10`.
    pub fn get(&self, index: u32) -> VmResult<i64> {
        Ok(self.read(Reg::new(index)?))
    }

    /// Dumps every register to stderr, two per line.
    pub fn dump(&self) {
        for i in (0..NUM_REGS).step_by(2) {
            let (a, b) = (self.regs[i], self.regs[i + 1]);
            eprintln!(
                "r{:<2}={:#018x} ({:>20})  r{:<2}={:#018x} ({:>20})",
                i as u32 + REG_MIN,
                a,
                a,
                i as u32 + REG_MIN + 1,
                b,
                b
            );
        }
    }
}
