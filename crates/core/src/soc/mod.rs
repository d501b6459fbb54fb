//! Machine peripherals.
//!
//! The two collaborators the processor is wired to: the flat memory unit and
//! the console used by the print and input instructions.

/// Console trait and the stream-backed implementation.
pub mod console;

/// Flat byte-addressable memory.
pub mod memory;

pub use console::{Console, StreamConsole};
pub use memory::Memory;
