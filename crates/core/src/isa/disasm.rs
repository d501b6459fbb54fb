//! Instruction Disassembler.
//!
//! Converts raw opcode/operand triples into human-readable text for instruction
//! tracing, the CLI `disasm` command, and test diagnostics. Never fails: bad
//! register operands and unknown opcodes render as annotated text.
//!
//! # Usage
//!
//! ```
//! use tinyvm_core::isa::disasm::disassemble;
//! use tinyvm_core::isa::instruction::RawInstruction;
//! use tinyvm_core::isa::opcodes;
//!
//! let text = disassemble(RawInstruction::new(opcodes::MOVI, 1, 5));
//! assert_eq!(text, "movi r1, 5");
//! ```

use crate::common::constants::INSTRUCTION_SIZE;
use crate::isa::decode::decode;
use crate::isa::instruction::RawInstruction;
use crate::isa::opcodes as op;

/// Returns the mnemonic for an opcode value, if it is defined.
pub const fn mnemonic(opcode: u32) -> Option<&'static str> {
    let name = match opcode {
        op::INCR => "incr",
        op::ADDI => "addi",
        op::ADDR => "addr",
        op::PUSHR => "pushr",
        op::PUSHI => "pushi",
        op::MOVI => "movi",
        op::MOVR => "movr",
        op::MOVMR => "movmr",
        op::MOVRM => "movrm",
        op::MOVMM => "movmm",
        op::PRINTR => "printr",
        op::PRINTM => "printm",
        op::JMP => "jmp",
        op::CMPI => "cmpi",
        op::CMPR => "cmpr",
        op::JLT => "jlt",
        op::JGT => "jgt",
        op::JE => "je",
        op::CALL => "call",
        op::CALLM => "callm",
        op::RET => "ret",
        op::EXIT => "exit",
        op::POPR => "popr",
        op::POPM => "popm",
        op::SLEEP => "sleep",
        op::INPUT => "input",
        op::INPUTC => "inputc",
        op::SETPRIORITY => "setpriority",
        op::SETPRIORITYI => "setpriorityi",
        op::PRINTCR => "printcr",
        op::PRINTCM => "printcm",
        op::JMPI => "jmpi",
        op::JMPA => "jmpa",
        op::JLTI => "jlti",
        op::JLTA => "jlta",
        op::JGTI => "jgti",
        op::JGTA => "jgta",
        op::JEI => "jei",
        op::JEA => "jea",
        _ => return None,
    };
    Some(name)
}

/// Disassembles one raw triple.
///
/// Returns `"unknown 0x.."` for undefined opcodes, and the mnemonic followed by
/// the raw operands and a `; bad register` note when an operand fails validation.
pub fn disassemble(raw: RawInstruction) -> String {
    match (mnemonic(raw.opcode), decode(raw, 0)) {
        (_, Ok(inst)) => inst.to_string(),
        (Some(name), Err(e)) => format!("{name} {:#x}, {:#x} ; {e}", raw.a, raw.b),
        (None, Err(_)) => format!("unknown {:#x}", raw.opcode),
    }
}

/// Disassembles a program image laid out from `base`.
///
/// Returns one `(address, raw, text)` row per complete 12-byte instruction.
/// Trailing bytes that do not form a whole instruction are ignored.
pub fn disassemble_image(image: &[u8], base: u32) -> Vec<(u32, RawInstruction, String)> {
    image
        .chunks_exact(INSTRUCTION_SIZE as usize)
        .enumerate()
        .filter_map(|(i, chunk)| {
            let bytes: [u8; INSTRUCTION_SIZE as usize] = chunk.try_into().ok()?;
            let raw = RawInstruction::from_le_bytes(bytes);
            let addr = base.wrapping_add(i as u32 * INSTRUCTION_SIZE);
            Some((addr, raw, disassemble(raw)))
        })
        .collect()
}
