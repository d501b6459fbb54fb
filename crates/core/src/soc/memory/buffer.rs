//! Flat Memory Unit.
//!
//! This module provides the byte-addressable store the processor runs against.
//! It is a single owned buffer with no structure beyond bytes; word width,
//! signedness, and byte order belong to the access method, not the storage.
//! It provides:
//! 1. **Byte access:** `read_u8` / `write_u8`, bounds-checked against the buffer size.
//! 2. **Word access:** `read_u32` / `write_u32`, little-endian, built from four independently
//!    checked byte accesses. No alignment requirement and no atomicity across the four bytes.
//! 3. **Image loading:** Byte-wise placement of a program image at a base address.

use crate::common::constants::WORD_SIZE;
use crate::common::{VmError, VmResult};

/// A fixed-size byte-addressable memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    bytes: Box<[u8]>,
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory").field("size", &self.bytes.len()).finish()
    }
}

impl Memory {
    /// Creates a zero-filled memory of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0u8; size].into_boxed_slice(),
        }
    }

    /// Returns the size of the memory in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` for a zero-sized memory (every access faults).
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the whole buffer.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    #[inline(always)]
    fn check(&self, addr: u64) -> VmResult<usize> {
        usize::try_from(addr)
            .ok()
            .filter(|&idx| idx < self.bytes.len())
            .ok_or(VmError::AddressOutOfRange {
                addr,
                size: self.bytes.len(),
            })
    }

    /// Reads one byte.
    ///
    /// # Errors
    ///
    /// [`VmError::AddressOutOfRange`] if `addr >= len()`.
    #[inline]
    pub fn read_u8(&self, addr: u32) -> VmResult<u8> {
        self.read_byte_at(u64::from(addr))
    }

    /// Writes one byte.
    ///
    /// # Errors
    ///
    /// [`VmError::AddressOutOfRange`] if `addr >= len()`.
    #[inline]
    pub fn write_u8(&mut self, addr: u32, val: u8) -> VmResult<()> {
        self.write_byte_at(u64::from(addr), val)
    }

    /// Reads a little-endian 32-bit word starting at `addr`.
    ///
    /// # Errors
    ///
    /// [`VmError::AddressOutOfRange`] naming the first byte of the word that lies
    /// outside the buffer.
    pub fn read_u32(&self, addr: u32) -> VmResult<u32> {
        let mut val = 0u32;
        for i in 0..WORD_SIZE {
            let byte = self.read_byte_at(u64::from(addr) + u64::from(i))?;
            val |= u32::from(byte) << (8 * i);
        }
        Ok(val)
    }

    /// Writes a little-endian 32-bit word starting at `addr`.
    ///
    /// Bytes are written lowest address first. A word that straddles the end of
    /// memory writes its in-range bytes and then fails.
    ///
    /// # Errors
    ///
    /// [`VmError::AddressOutOfRange`] naming the first byte of the word that lies
    /// outside the buffer.
    pub fn write_u32(&mut self, addr: u32, val: u32) -> VmResult<()> {
        for (i, byte) in val.to_le_bytes().into_iter().enumerate() {
            self.write_byte_at(u64::from(addr) + i as u64, byte)?;
        }
        Ok(())
    }

    /// Copies a program image into memory starting at `base`.
    ///
    /// # Errors
    ///
    /// [`VmError::ImageTooLarge`] if any byte of the image would land outside
    /// memory. Nothing is written in that case.
    pub fn load_image(&mut self, base: u32, image: &[u8]) -> VmResult<()> {
        let start = base as usize;
        let fits = start
            .checked_add(image.len())
            .is_some_and(|end| end <= self.bytes.len());
        if !fits {
            return Err(VmError::ImageTooLarge {
                base,
                len: image.len(),
                size: self.bytes.len(),
            });
        }
        self.bytes[start..start + image.len()].copy_from_slice(image);
        Ok(())
    }

    #[inline(always)]
    fn read_byte_at(&self, addr: u64) -> VmResult<u8> {
        let idx = self.check(addr)?;
        Ok(self.bytes[idx])
    }

    #[inline(always)]
    fn write_byte_at(&mut self, addr: u64, val: u8) -> VmResult<()> {
        let idx = self.check(addr)?;
        self.bytes[idx] = val;
        Ok(())
    }
}
