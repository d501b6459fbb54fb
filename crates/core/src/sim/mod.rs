//! Simulation utilities and program loading.
//!
//! Provides utilities for loading program images into memory and setting up
//! the initial machine state for a run.

pub mod loader;
