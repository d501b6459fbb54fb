//! Instruction Execution Orchestration.
//!
//! This module implements the run loop of the CPU. It performs:
//! 1. **Fetch:** Reads the 12-byte triple at `ip` and advances `ip` past it before execution,
//!    so every relative jump is measured from the next instruction.
//! 2. **Decode:** Resolves the triple into an `Instruction`, validating register operands.
//! 3. **Dispatch:** Hands the instruction to `execute` and counts it once it retires.
//! 4. **Budget:** Stops a run that reaches its step limit without executing `exit`.

use tracing::{debug, trace, warn};

use super::Cpu;
use crate::common::constants::{INSTRUCTION_SIZE, OPERAND_A_OFFSET, OPERAND_B_OFFSET};
use crate::common::{VmError, VmResult};
use crate::isa::decode::decode;
use crate::isa::instruction::RawInstruction;
use crate::soc::Console;

impl Cpu {
    /// Runs until `exit`, a fault, or `max_steps` instructions.
    ///
    /// Marks the CPU as running and restarts the statistics clock, then steps
    /// repeatedly. A run that is still going after `max_steps` instructions is
    /// treated as runaway.
    ///
    /// # Errors
    ///
    /// * Any fault raised by an instruction, returned as soon as it happens.
    ///   State reflects every instruction before the faulting one.
    /// * [`VmError::StepBudgetExceeded`] if `max_steps` instructions executed
    ///   without `exit`. State reflects the last of them.
    pub fn run<C: Console + ?Sized>(&mut self, max_steps: u64, console: &mut C) -> VmResult<()> {
        self.running = true;
        self.stats.start_timer();
        debug!(ip = self.ip, sp = self.sp, max_steps, "run started");

        let mut steps = 0u64;
        while steps < max_steps && self.running {
            if let Err(e) = self.step(console) {
                debug!(ip = self.ip, steps, error = %e, "run aborted");
                return Err(e);
            }
            steps += 1;
        }

        if self.running {
            warn!(ip = self.ip, steps, "step budget exhausted");
            return Err(VmError::StepBudgetExceeded { steps: max_steps });
        }

        debug!(ip = self.ip, steps, "run halted");
        Ok(())
    }

    /// Fetches, decodes, and executes a single instruction.
    ///
    /// # Errors
    ///
    /// Any fetch, decode, or execution fault. A fetch fault leaves `ip` unchanged;
    /// later faults happen after `ip` has moved past the instruction.
    pub fn step<C: Console + ?Sized>(&mut self, console: &mut C) -> VmResult<()> {
        let ip = self.ip;
        let raw = self.fetch()?;
        let inst = decode(raw, ip)?;

        if self.trace {
            trace!(ip, "{inst}");
        }

        self.execute(inst, console)?;
        self.stats.retire(&inst);
        Ok(())
    }

    /// Reads the instruction triple at `ip` and advances `ip` by one instruction.
    ///
    /// # Errors
    ///
    /// [`VmError::AddressOutOfRange`] if any byte of the triple lies outside memory;
    /// `ip` is not advanced in that case.
    pub fn fetch(&mut self) -> VmResult<RawInstruction> {
        let opcode = self.mem.read_u32(self.ip)?;
        let a = self.mem.read_u32(self.ip.wrapping_add(OPERAND_A_OFFSET))?;
        let b = self.mem.read_u32(self.ip.wrapping_add(OPERAND_B_OFFSET))?;

        self.ip = self.ip.wrapping_add(INSTRUCTION_SIZE);
        Ok(RawInstruction::new(opcode, a, b))
    }
}
