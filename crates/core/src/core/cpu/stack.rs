//! Stack Discipline.
//!
//! The stack is a run of 32-bit words growing toward lower addresses; `sp` points
//! at the most recently pushed word. Both operations touch memory before moving
//! `sp`, so a push or pop that faults leaves `sp` where it was.

use super::Cpu;
use crate::common::constants::WORD_SIZE;
use crate::common::VmResult;

impl Cpu {
    /// Pushes one word: writes it at `sp - 4`, then lowers `sp`.
    ///
    /// # Errors
    ///
    /// [`VmError::AddressOutOfRange`](crate::common::VmError::AddressOutOfRange) if the
    /// new top of stack lies outside memory.
    pub fn push(&mut self, val: u32) -> VmResult<()> {
        let sp = self.sp.wrapping_sub(WORD_SIZE);
        self.mem.write_u32(sp, val)?;
        self.sp = sp;
        Ok(())
    }

    /// Returns the word at the top of the stack without popping it.
    ///
    /// # Errors
    ///
    /// [`VmError::AddressOutOfRange`](crate::common::VmError::AddressOutOfRange) if `sp`
    /// lies outside memory.
    pub fn peek(&self) -> VmResult<u32> {
        self.mem.read_u32(self.sp)
    }

    /// Pops one word: reads it at `sp`, then raises `sp`.
    ///
    /// # Errors
    ///
    /// [`VmError::AddressOutOfRange`](crate::common::VmError::AddressOutOfRange) if `sp`
    /// lies outside memory.
    pub fn pop(&mut self) -> VmResult<u32> {
        let val = self.peek()?;
        self.discard();
        Ok(val)
    }

    /// Raises `sp` past the top word without reading it.
    pub(crate) const fn discard(&mut self) {
        self.sp = self.sp.wrapping_add(WORD_SIZE);
    }
}
