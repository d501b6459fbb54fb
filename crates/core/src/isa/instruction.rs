//! Instruction encoding and the decoded instruction set.
//!
//! Provides the raw 12-byte triple as it sits in memory and the closed
//! `Instruction` enum the processor dispatches on. Operand roles are resolved
//! once, at decode time: register operands become validated [`Reg`] values,
//! immediates stay raw 32-bit words, and jump targets carry their addressing mode.

use std::fmt;

use crate::common::constants::{INSTRUCTION_SIZE, OPERAND_A_OFFSET, OPERAND_B_OFFSET, WORD_SIZE};
use crate::common::Reg;
use crate::isa::opcodes as op;

/// An undecoded instruction: three little-endian 32-bit words.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RawInstruction {
    /// Opcode word.
    pub opcode: u32,
    /// Operand A (register index, immediate, or displacement).
    pub a: u32,
    /// Operand B (register index or immediate).
    pub b: u32,
}

impl RawInstruction {
    /// Builds a raw triple.
    pub const fn new(opcode: u32, a: u32, b: u32) -> Self {
        Self { opcode, a, b }
    }

    /// Encodes the triple as the 12 bytes stored in memory.
    pub fn to_le_bytes(self) -> [u8; INSTRUCTION_SIZE as usize] {
        let mut out = [0u8; INSTRUCTION_SIZE as usize];
        let words = [
            (0, self.opcode),
            (OPERAND_A_OFFSET, self.a),
            (OPERAND_B_OFFSET, self.b),
        ];
        for (offset, word) in words {
            let start = offset as usize;
            out[start..start + WORD_SIZE as usize].copy_from_slice(&word.to_le_bytes());
        }
        out
    }

    /// Decodes a triple from its 12-byte memory form.
    pub fn from_le_bytes(bytes: [u8; INSTRUCTION_SIZE as usize]) -> Self {
        let word = |offset: u32| {
            let start = offset as usize;
            u32::from_le_bytes([
                bytes[start],
                bytes[start + 1],
                bytes[start + 2],
                bytes[start + 3],
            ])
        };
        Self {
            opcode: word(0),
            a: word(OPERAND_A_OFFSET),
            b: word(OPERAND_B_OFFSET),
        }
    }
}

/// Flag condition guarding a jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Unconditional.
    Always,
    /// Taken when the sign flag is set.
    Less,
    /// Taken when neither the sign flag nor the zero flag is set.
    Greater,
    /// Taken when the zero flag is set.
    Equal,
}

impl Condition {
    /// Evaluates the condition against the comparison flags.
    #[inline(always)]
    pub const fn holds(self, zero: bool, sign: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Less => sign,
            Self::Greater => !sign && !zero,
            Self::Equal => zero,
        }
    }

    const fn stem(self) -> &'static str {
        match self {
            Self::Always => "jmp",
            Self::Less => "jlt",
            Self::Greater => "jgt",
            Self::Equal => "je",
        }
    }
}

/// Where a jump lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// Post-fetch ip plus the full 64-bit value of a register.
    Register(Reg),
    /// Post-fetch ip plus a sign-extended 32-bit displacement.
    Relative(i32),
    /// A fixed address.
    Absolute(u32),
}

/// A decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Stop the run loop.
    Exit,
    /// Reserved; does nothing.
    Sleep,
    /// `rx = imm` (zero-extended).
    Movi {
        /// Destination.
        rx: Reg,
        /// Raw immediate.
        imm: u32,
    },
    /// `rx = ry`.
    Movr {
        /// Destination.
        rx: Reg,
        /// Source.
        ry: Reg,
    },
    /// `rx = sext(mem32[ry])`.
    Movmr {
        /// Destination.
        rx: Reg,
        /// Holds the source address.
        ry: Reg,
    },
    /// `mem32[rx] = low32(ry)`.
    Movrm {
        /// Holds the destination address.
        rx: Reg,
        /// Source.
        ry: Reg,
    },
    /// `mem32[rx] = mem32[ry]`.
    Movmm {
        /// Holds the destination address.
        rx: Reg,
        /// Holds the source address.
        ry: Reg,
    },
    /// `rx += 1`.
    Incr {
        /// Register to increment.
        rx: Reg,
    },
    /// `rx += imm` (zero-extended).
    Addi {
        /// Destination and left operand.
        rx: Reg,
        /// Raw immediate.
        imm: u32,
    },
    /// `rx += ry`.
    Addr {
        /// Destination and left operand.
        rx: Reg,
        /// Right operand.
        ry: Reg,
    },
    /// Print `rx` as a signed decimal.
    Printr {
        /// Register to print.
        rx: Reg,
    },
    /// Print `sext(mem32[rx])` as a signed decimal.
    Printm {
        /// Holds the address to print.
        rx: Reg,
    },
    /// Print the low byte of `rx` as a character.
    Printcr {
        /// Register to print.
        rx: Reg,
    },
    /// Print `mem8[rx]` as a character.
    Printcm {
        /// Holds the address to print.
        rx: Reg,
    },
    /// Any of the jump family, conditional or not.
    Jump {
        /// Flag condition.
        cond: Condition,
        /// Addressing mode and operand.
        target: Target,
    },
    /// Compare a register with a sign-extended immediate.
    Cmpi {
        /// Left operand.
        rx: Reg,
        /// Raw immediate.
        imm: u32,
    },
    /// Compare two registers.
    Cmpr {
        /// Left operand.
        rx: Reg,
        /// Right operand.
        ry: Reg,
    },
    /// Push ip, then `ip += rx`.
    Call {
        /// Holds the displacement.
        rx: Reg,
    },
    /// Push ip, then `ip += sext(mem32[rx])`.
    Callm {
        /// Holds the address of the displacement.
        rx: Reg,
    },
    /// Pop ip.
    Ret,
    /// Push an immediate word.
    Pushi {
        /// Raw immediate.
        imm: u32,
    },
    /// Push the low word of a register.
    Pushr {
        /// Source.
        rx: Reg,
    },
    /// Pop a sign-extended word into a register.
    Popr {
        /// Destination.
        rx: Reg,
    },
    /// Pop a word to the address held in a register.
    Popm {
        /// Holds the destination address.
        rx: Reg,
    },
    /// Read a decimal integer into a register.
    Input {
        /// Destination.
        rx: Reg,
    },
    /// Read one character into a register.
    Inputc {
        /// Destination.
        rx: Reg,
    },
    /// Reserved; does nothing.
    Setpriority,
    /// Reserved; does nothing.
    Setpriorityi,
}

impl Instruction {
    /// Re-encodes the instruction as a raw triple.
    ///
    /// Operands an instruction does not use are encoded as zero.
    pub const fn encode(self) -> RawInstruction {
        let (opcode, a, b) = match self {
            Self::Exit => (op::EXIT, 0, 0),
            Self::Sleep => (op::SLEEP, 0, 0),
            Self::Movi { rx, imm } => (op::MOVI, rx.number(), imm),
            Self::Movr { rx, ry } => (op::MOVR, rx.number(), ry.number()),
            Self::Movmr { rx, ry } => (op::MOVMR, rx.number(), ry.number()),
            Self::Movrm { rx, ry } => (op::MOVRM, rx.number(), ry.number()),
            Self::Movmm { rx, ry } => (op::MOVMM, rx.number(), ry.number()),
            Self::Incr { rx } => (op::INCR, rx.number(), 0),
            Self::Addi { rx, imm } => (op::ADDI, rx.number(), imm),
            Self::Addr { rx, ry } => (op::ADDR, rx.number(), ry.number()),
            Self::Printr { rx } => (op::PRINTR, rx.number(), 0),
            Self::Printm { rx } => (op::PRINTM, rx.number(), 0),
            Self::Printcr { rx } => (op::PRINTCR, rx.number(), 0),
            Self::Printcm { rx } => (op::PRINTCM, rx.number(), 0),
            Self::Jump { cond, target } => {
                let (reg_op, rel_op, abs_op) = match cond {
                    Condition::Always => (op::JMP, op::JMPI, op::JMPA),
                    Condition::Less => (op::JLT, op::JLTI, op::JLTA),
                    Condition::Greater => (op::JGT, op::JGTI, op::JGTA),
                    Condition::Equal => (op::JE, op::JEI, op::JEA),
                };
                match target {
                    Target::Register(rx) => (reg_op, rx.number(), 0),
                    Target::Relative(disp) => (rel_op, disp as u32, 0),
                    Target::Absolute(addr) => (abs_op, addr, 0),
                }
            }
            Self::Cmpi { rx, imm } => (op::CMPI, rx.number(), imm),
            Self::Cmpr { rx, ry } => (op::CMPR, rx.number(), ry.number()),
            Self::Call { rx } => (op::CALL, rx.number(), 0),
            Self::Callm { rx } => (op::CALLM, rx.number(), 0),
            Self::Ret => (op::RET, 0, 0),
            Self::Pushi { imm } => (op::PUSHI, imm, 0),
            Self::Pushr { rx } => (op::PUSHR, rx.number(), 0),
            Self::Popr { rx } => (op::POPR, rx.number(), 0),
            Self::Popm { rx } => (op::POPM, rx.number(), 0),
            Self::Input { rx } => (op::INPUT, rx.number(), 0),
            Self::Inputc { rx } => (op::INPUTC, rx.number(), 0),
            Self::Setpriority => (op::SETPRIORITY, 0, 0),
            Self::Setpriorityi => (op::SETPRIORITYI, 0, 0),
        };
        RawInstruction::new(opcode, a, b)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Exit => f.write_str("exit"),
            Self::Sleep => f.write_str("sleep"),
            Self::Ret => f.write_str("ret"),
            Self::Setpriority => f.write_str("setpriority"),
            Self::Setpriorityi => f.write_str("setpriorityi"),
            Self::Movi { rx, imm } => write!(f, "movi {rx}, {imm}"),
            Self::Addi { rx, imm } => write!(f, "addi {rx}, {imm}"),
            Self::Cmpi { rx, imm } => write!(f, "cmpi {rx}, {}", imm as i32),
            Self::Movr { rx, ry } => write!(f, "movr {rx}, {ry}"),
            Self::Movmr { rx, ry } => write!(f, "movmr {rx}, {ry}"),
            Self::Movrm { rx, ry } => write!(f, "movrm {rx}, {ry}"),
            Self::Movmm { rx, ry } => write!(f, "movmm {rx}, {ry}"),
            Self::Addr { rx, ry } => write!(f, "addr {rx}, {ry}"),
            Self::Cmpr { rx, ry } => write!(f, "cmpr {rx}, {ry}"),
            Self::Incr { rx } => write!(f, "incr {rx}"),
            Self::Printr { rx } => write!(f, "printr {rx}"),
            Self::Printm { rx } => write!(f, "printm {rx}"),
            Self::Printcr { rx } => write!(f, "printcr {rx}"),
            Self::Printcm { rx } => write!(f, "printcm {rx}"),
            Self::Call { rx } => write!(f, "call {rx}"),
            Self::Callm { rx } => write!(f, "callm {rx}"),
            Self::Pushr { rx } => write!(f, "pushr {rx}"),
            Self::Popr { rx } => write!(f, "popr {rx}"),
            Self::Popm { rx } => write!(f, "popm {rx}"),
            Self::Input { rx } => write!(f, "input {rx}"),
            Self::Inputc { rx } => write!(f, "inputc {rx}"),
            Self::Pushi { imm } => write!(f, "pushi {}", imm as i32),
            Self::Jump { cond, target } => match target {
                Target::Register(rx) => write!(f, "{} {rx}", cond.stem()),
                Target::Relative(disp) => write!(f, "{}i {disp}", cond.stem()),
                Target::Absolute(addr) => write!(f, "{}a {addr:#x}", cond.stem()),
            },
        }
    }
}
