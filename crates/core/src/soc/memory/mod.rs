//! Memory subsystem.
//!
//! A single flat region addressed from zero; there is no translation, paging, or
//! protection beyond the bounds check on every byte.

/// Bounds-checked byte buffer with little-endian word access.
pub mod buffer;

pub use buffer::Memory;
