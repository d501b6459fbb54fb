//! Fixed-width instruction virtual machine.
//!
//! This crate implements a small sandboxed machine with the following:
//! 1. **Memory:** A flat, bounds-checked, byte-addressable store with little-endian word access.
//! 2. **Core:** Ten signed 64-bit registers, instruction and stack pointers, comparison flags,
//!    and a bounded fetch, decode, execute loop.
//! 3. **ISA:** Fixed 12-byte instructions (opcode, operand A, operand B) covering arithmetic,
//!    loads and stores, jumps, calls, a downward-growing stack, and console I/O.
//! 4. **Console:** Print and input instructions routed through an injected `Console`.
//! 5. **Simulation:** Image loading, configuration, and run statistics.
//!
//! # Example
//!
//! ```
//! use tinyvm_core::isa::instruction::RawInstruction;
//! use tinyvm_core::isa::opcodes as op;
//! use tinyvm_core::sim::loader;
//! use tinyvm_core::soc::StreamConsole;
//! use tinyvm_core::Config;
//!
//! let image = loader::encode_program(&[
//!     RawInstruction::new(op::MOVI, 1, 1),
//!     RawInstruction::new(op::INCR, 1, 0),
//!     RawInstruction::new(op::PRINTR, 1, 0),
//!     RawInstruction::new(op::EXIT, 0, 0),
//! ]);
//!
//! let config = Config::default();
//! let mut cpu = loader::setup(&config, &image).unwrap();
//! let mut console = StreamConsole::new(std::io::empty(), Vec::new());
//! cpu.run(config.general.max_steps, &mut console).unwrap();
//!
//! assert_eq!(cpu.get_reg(1).unwrap(), 2);
//! assert_eq!(console.output(), b"2\n");
//! ```

/// Common types and constants (errors, registers, address conversions).
pub mod common;
/// Machine configuration (defaults and JSON loading).
pub mod config;
/// Processor core (state, run loop, instruction semantics).
pub mod core;
/// Instruction set (opcodes, decode, disassembly).
pub mod isa;
/// Image loading and machine setup.
pub mod sim;
/// Memory unit and console.
pub mod soc;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, pointers, flags, and memory.
pub use crate::core::Cpu;
/// Error type shared by every fallible operation.
pub use crate::common::VmError;
