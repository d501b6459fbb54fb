//! Processor core.
//!
//! The processor owns its register bank, pointers, flags, and the memory unit,
//! and drives the fetch, decode, execute loop over them.

/// CPU state, run loop, and instruction semantics.
pub mod cpu;

pub use cpu::Cpu;
