//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the container for the entire
//! machine state. It coordinates the following:
//! 1. **State Management:** Register bank, instruction pointer, stack pointer, comparison flags.
//! 2. **Memory Ownership:** The memory unit every fetch, load, store, and stack access goes to.
//! 3. **Execution:** The bounded run loop and single-step entry point (`execution`).
//! 4. **Semantics:** Per-instruction behavior (`execute`) and stack discipline (`stack`).

/// Per-instruction semantics.
pub mod execute;

/// Run loop, single step, and instruction fetch.
pub mod execution;

/// Push and pop on the downward-growing stack.
pub mod stack;

use crate::common::{RegisterFile, VmResult};
use crate::config::Config;
use crate::soc::Memory;
use crate::stats::RunStats;

/// Main CPU structure containing all machine state.
///
/// Created once with its memory, pointed at a program by the loader, then
/// driven through [`Cpu::run`] or [`Cpu::step`]. State is only ever changed by
/// executing instructions; nothing is rolled back when an instruction faults.
#[derive(Debug)]
pub struct Cpu {
    /// General purpose registers `r1`..`r10`.
    pub regs: RegisterFile,
    /// Instruction pointer: address of the next instruction to fetch.
    pub ip: u32,
    /// Stack pointer: address of the current top-of-stack word.
    pub sp: u32,
    /// Set by a comparison when the operands were equal.
    pub zero_flag: bool,
    /// Set by a comparison when the left operand was less than the right.
    pub sign_flag: bool,
    /// True while a run is in progress; cleared by `exit`.
    pub running: bool,

    /// Memory unit.
    pub mem: Memory,

    /// Log every executed instruction at `trace` level.
    pub trace: bool,
    /// Retired instruction statistics.
    pub stats: RunStats,
}

impl Cpu {
    /// Creates a CPU over `mem` with zeroed registers, cleared flags, and both
    /// pointers at address zero.
    pub fn new(mem: Memory) -> Self {
        Self {
            regs: RegisterFile::new(),
            ip: 0,
            sp: 0,
            zero_flag: false,
            sign_flag: false,
            running: false,
            mem,
            trace: false,
            stats: RunStats::default(),
        }
    }

    /// Creates a CPU with memory sized, pointers placed, and tracing set from `config`.
    pub fn from_config(config: &Config) -> Self {
        let mut cpu = Self::new(Memory::new(config.memory.size));
        cpu.ip = config.system.load_base;
        cpu.sp = config.system.stack_top;
        cpu.trace = config.general.trace_instructions;
        cpu
    }

    /// Sets the instruction pointer.
    pub const fn set_ip(&mut self, ip: u32) {
        self.ip = ip;
    }

    /// Sets the stack pointer.
    pub const fn set_sp(&mut self, sp: u32) {
        self.sp = sp;
    }

    /// Reads a register by raw index.
    ///
    /// # Errors
    ///
    /// [`VmError::RegisterOutOfRange`](crate::common::VmError::RegisterOutOfRange)
    /// for any index outside `1..=10`.
    pub fn get_reg(&self, index: u32) -> VmResult<i64> {
        self.regs.get(index)
    }

    /// Dumps the instruction pointer, stack pointer, flags, and registers to stderr.
    pub fn dump_state(&self) {
        eprintln!(
            "IP = {:#010x}  SP = {:#010x}  ZF = {}  SF = {}",
            self.ip, self.sp, self.zero_flag as u8, self.sign_flag as u8
        );
        self.regs.dump();
    }
}
