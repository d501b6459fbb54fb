/// Console instructions.
pub mod io;
/// Push, pop, call, and return.
pub mod stack;
