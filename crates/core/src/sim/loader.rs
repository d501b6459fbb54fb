//! Program Loader and Machine Initialization.
//!
//! This module provides the glue between a program image and the processor. It performs:
//! 1. **Image loading:** Reads a raw image (consecutive 12-byte instruction triples) from disk.
//! 2. **Placement:** Copies the image into memory at a base address.
//! 3. **Setup:** Points the instruction pointer at the image and the stack pointer at the stack top.
//! 4. **Encoding:** Builds an image from instruction triples, for tooling and tests.
//!
//! There is no textual format: an image is exactly the bytes that land in memory.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::VmResult;
use crate::config::Config;
use crate::core::Cpu;
use crate::isa::instruction::RawInstruction;

/// Reads a program image from disk.
///
/// # Errors
///
/// [`VmError::Io`](crate::common::VmError::Io) if the file cannot be read.
pub fn load_binary(path: impl AsRef<Path>) -> VmResult<Vec<u8>> {
    let path = path.as_ref();
    let image = fs::read(path)?;
    debug!(path = %path.display(), len = image.len(), "image read");
    Ok(image)
}

/// Places `image` in memory at `base` and points the instruction pointer at it.
///
/// # Errors
///
/// [`VmError::ImageTooLarge`](crate::common::VmError::ImageTooLarge) if the image
/// does not fit; memory and `ip` are untouched in that case.
pub fn load_program(cpu: &mut Cpu, image: &[u8], base: u32) -> VmResult<()> {
    cpu.mem.load_image(base, image)?;
    cpu.set_ip(base);
    debug!(base, len = image.len(), "image loaded");
    Ok(())
}

/// Builds a CPU from `config` and loads `image` at the configured base with the
/// stack pointer at the configured stack top.
///
/// # Errors
///
/// [`VmError::ImageTooLarge`](crate::common::VmError::ImageTooLarge) if the image
/// does not fit in the configured memory.
pub fn setup(config: &Config, image: &[u8]) -> VmResult<Cpu> {
    let mut cpu = Cpu::from_config(config);
    load_program(&mut cpu, image, config.system.load_base)?;
    cpu.set_sp(config.system.stack_top);
    Ok(cpu)
}

/// Encodes a sequence of instruction triples as a program image.
pub fn encode_program(program: &[RawInstruction]) -> Vec<u8> {
    program.iter().flat_map(|raw| raw.to_le_bytes()).collect()
}
