//! Common utilities and types used throughout the machine.
//!
//! This module provides the building blocks shared by the memory unit, the
//! processor, and the loader. It includes:
//! 1. **Address Conversions:** The named register-to-address and displacement rules.
//! 2. **Constants:** Instruction width, register range, and the default step budget.
//! 3. **Error Handling:** The fatal `VmError` taxonomy.
//! 4. **Register Management:** Validated register operands and the register bank.

/// Register-value to address conversions.
pub mod addr;

/// Common constants used throughout the machine.
pub mod constants;

/// Error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use addr::{as_address, relative_target, sign_extend, zero_extend};
pub use constants::{DEFAULT_MAX_STEPS, INSTRUCTION_SIZE, WORD_SIZE};
pub use error::{VmError, VmResult};
pub use reg::{Reg, RegisterFile};
