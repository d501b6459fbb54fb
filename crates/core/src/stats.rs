//! Run statistics collection and reporting.
//!
//! This module tracks what a run actually executed. It provides:
//! 1. **Throughput:** Retired instructions, host time, and derived MIPS.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, control, stack, I/O, system).
//! 3. **Control flow:** Jumps taken versus jump instructions retired, calls and returns.

use std::time::Instant;

use crate::isa::instruction::Instruction;

/// Run statistics tracking the retired instruction stream.
#[derive(Clone, Debug)]
pub struct RunStats {
    start_time: Instant,
    /// Number of instructions that completed without a fault.
    pub instructions_retired: u64,

    /// Register arithmetic, moves, and comparisons.
    pub inst_alu: u64,
    /// Instructions that read a data word from memory (`movmr`, `movmm`).
    pub inst_load: u64,
    /// Instructions that write a data word to memory (`movrm`, `movmm`).
    pub inst_store: u64,
    /// Jumps of every form, calls, and returns.
    pub inst_control: u64,
    /// Pushes and pops.
    pub inst_stack: u64,
    /// Print and input instructions.
    pub inst_io: u64,
    /// `exit` and the reserved no-ops.
    pub inst_system: u64,

    /// Conditional and unconditional jumps whose target was taken.
    pub jumps_taken: u64,
    /// Calls executed (`call`, `callm`).
    pub calls: u64,
    /// Returns executed.
    pub returns: u64,
}

impl Default for RunStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_control: 0,
            inst_stack: 0,
            inst_io: 0,
            inst_system: 0,
            jumps_taken: 0,
            calls: 0,
            returns: 0,
        }
    }
}

impl RunStats {
    /// Restarts the host clock; throughput is measured from here.
    pub fn start_timer(&mut self) {
        self.start_time = Instant::now();
    }

    /// When the host clock was last started.
    pub const fn start_time(&self) -> Instant {
        self.start_time
    }

    /// Counts one retired instruction in its category.
    pub const fn retire(&mut self, inst: &Instruction) {
        self.instructions_retired += 1;
        match inst {
            Instruction::Movi { .. }
            | Instruction::Movr { .. }
            | Instruction::Incr { .. }
            | Instruction::Addi { .. }
            | Instruction::Addr { .. }
            | Instruction::Cmpi { .. }
            | Instruction::Cmpr { .. } => self.inst_alu += 1,
            Instruction::Movmr { .. } => self.inst_load += 1,
            Instruction::Movrm { .. } => self.inst_store += 1,
            Instruction::Movmm { .. } => {
                self.inst_load += 1;
                self.inst_store += 1;
            }
            Instruction::Jump { .. } => self.inst_control += 1,
            Instruction::Call { .. } | Instruction::Callm { .. } => {
                self.inst_control += 1;
                self.calls += 1;
            }
            Instruction::Ret => {
                self.inst_control += 1;
                self.returns += 1;
            }
            Instruction::Pushi { .. }
            | Instruction::Pushr { .. }
            | Instruction::Popr { .. }
            | Instruction::Popm { .. } => self.inst_stack += 1,
            Instruction::Printr { .. }
            | Instruction::Printm { .. }
            | Instruction::Printcr { .. }
            | Instruction::Printcm { .. }
            | Instruction::Input { .. }
            | Instruction::Inputc { .. } => self.inst_io += 1,
            Instruction::Exit
            | Instruction::Sleep
            | Instruction::Setpriority
            | Instruction::Setpriorityi => self.inst_system += 1,
        }
    }

    /// Prints the statistics report to stderr.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.instructions_retired.max(1) as f64;
        let mips = if seconds > 0.0 {
            (self.instructions_retired as f64 / seconds) / 1_000_000.0
        } else {
            0.0
        };
        let pct = |n: u64| (n as f64 / instr) * 100.0;

        eprintln!("\n==========================================================");
        eprintln!("RUN STATISTICS");
        eprintln!("==========================================================");
        eprintln!("host_seconds             {seconds:.4} s");
        eprintln!("insts_retired            {}", self.instructions_retired);
        eprintln!("mips                     {mips:.2}");
        eprintln!("----------------------------------------------------------");
        eprintln!("INSTRUCTION MIX");
        eprintln!("  op.alu                 {} ({:.2}%)", self.inst_alu, pct(self.inst_alu));
        eprintln!("  op.load                {} ({:.2}%)", self.inst_load, pct(self.inst_load));
        eprintln!("  op.store               {} ({:.2}%)", self.inst_store, pct(self.inst_store));
        eprintln!("  op.control             {} ({:.2}%)", self.inst_control, pct(self.inst_control));
        eprintln!("  op.stack               {} ({:.2}%)", self.inst_stack, pct(self.inst_stack));
        eprintln!("  op.io                  {} ({:.2}%)", self.inst_io, pct(self.inst_io));
        eprintln!("  op.system              {} ({:.2}%)", self.inst_system, pct(self.inst_system));
        eprintln!("----------------------------------------------------------");
        eprintln!("CONTROL FLOW");
        eprintln!("  jumps.taken            {}", self.jumps_taken);
        eprintln!("  calls                  {}", self.calls);
        eprintln!("  returns                {}", self.returns);
        eprintln!("==========================================================");
    }
}
