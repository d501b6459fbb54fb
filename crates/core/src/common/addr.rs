//! Register-to-address conversions.
//!
//! Registers hold signed 64-bit values while memory and the instruction pointer
//! are addressed by unsigned 32-bit offsets. Every place where one becomes the
//! other goes through this module, so the truncation rules are one contract:
//! 1. **Addresses:** A register value is truncated to its low 32 bits and read as unsigned.
//! 2. **Relative targets:** A signed displacement is added to the 32-bit pointer in 64-bit
//!    arithmetic and the sum is truncated back to 32 bits.

/// Interprets a register value as an unsigned 32-bit memory address.
///
/// Only the low 32 bits survive, so `-1` maps to `0xFFFF_FFFF` and
/// `0x1_0000_0010` maps to `0x10`.
#[inline(always)]
pub const fn as_address(value: i64) -> u32 {
    value as u32
}

/// Sign-extends a raw 32-bit operand to a 64-bit value.
#[inline(always)]
pub const fn sign_extend(raw: u32) -> i64 {
    raw as i32 as i64
}

/// Zero-extends a raw 32-bit operand to a 64-bit value.
#[inline(always)]
pub const fn zero_extend(raw: u32) -> i64 {
    raw as i64
}

/// Applies a signed displacement to a 32-bit pointer.
///
/// The addition is performed on the widened pointer and wraps, then the result is
/// truncated to 32 bits. Used for every relative jump and call.
#[inline(always)]
pub const fn relative_target(ptr: u32, displacement: i64) -> u32 {
    (ptr as i64).wrapping_add(displacement) as u32
}
