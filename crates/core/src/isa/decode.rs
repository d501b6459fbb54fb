//! Instruction Decoder.
//!
//! Turns a raw opcode/operand triple into an [`Instruction`]. Decoding is where
//! operand roles are fixed: every operand the opcode uses as a register index is
//! validated here, before the processor touches any state, and immediates are
//! reinterpreted (sign or zero) according to the opcode.

use crate::common::{Reg, VmError, VmResult};
use crate::isa::instruction::{Condition, Instruction, RawInstruction, Target};
use crate::isa::opcodes as op;

/// Decodes a raw triple fetched from `ip`.
///
/// # Errors
///
/// * [`VmError::UnknownOpcode`] if the opcode word has no instruction.
/// * [`VmError::RegisterOutOfRange`] if a register operand is outside `1..=10`.
///   Operand A is checked before operand B.
pub fn decode(raw: RawInstruction, ip: u32) -> VmResult<Instruction> {
    let RawInstruction { opcode, a, b } = raw;
    let rx = || Reg::new(a);
    let ry = || Reg::new(b);
    let jump = |cond, target| Instruction::Jump { cond, target };

    let inst = match opcode {
        op::EXIT => Instruction::Exit,
        op::SLEEP => Instruction::Sleep,
        op::RET => Instruction::Ret,
        op::SETPRIORITY => Instruction::Setpriority,
        op::SETPRIORITYI => Instruction::Setpriorityi,

        op::MOVI => Instruction::Movi { rx: rx()?, imm: b },
        op::ADDI => Instruction::Addi { rx: rx()?, imm: b },
        op::CMPI => Instruction::Cmpi { rx: rx()?, imm: b },
        op::PUSHI => Instruction::Pushi { imm: a },

        op::MOVR => Instruction::Movr { rx: rx()?, ry: ry()? },
        op::MOVMR => Instruction::Movmr { rx: rx()?, ry: ry()? },
        op::MOVRM => Instruction::Movrm { rx: rx()?, ry: ry()? },
        op::MOVMM => Instruction::Movmm { rx: rx()?, ry: ry()? },
        op::ADDR => Instruction::Addr { rx: rx()?, ry: ry()? },
        op::CMPR => Instruction::Cmpr { rx: rx()?, ry: ry()? },

        op::INCR => Instruction::Incr { rx: rx()? },
        op::PRINTR => Instruction::Printr { rx: rx()? },
        op::PRINTM => Instruction::Printm { rx: rx()? },
        op::PRINTCR => Instruction::Printcr { rx: rx()? },
        op::PRINTCM => Instruction::Printcm { rx: rx()? },
        op::CALL => Instruction::Call { rx: rx()? },
        op::CALLM => Instruction::Callm { rx: rx()? },
        op::PUSHR => Instruction::Pushr { rx: rx()? },
        op::POPR => Instruction::Popr { rx: rx()? },
        op::POPM => Instruction::Popm { rx: rx()? },
        op::INPUT => Instruction::Input { rx: rx()? },
        op::INPUTC => Instruction::Inputc { rx: rx()? },

        op::JMP => jump(Condition::Always, Target::Register(rx()?)),
        op::JLT => jump(Condition::Less, Target::Register(rx()?)),
        op::JGT => jump(Condition::Greater, Target::Register(rx()?)),
        op::JE => jump(Condition::Equal, Target::Register(rx()?)),

        op::JMPI => jump(Condition::Always, Target::Relative(a as i32)),
        op::JLTI => jump(Condition::Less, Target::Relative(a as i32)),
        op::JGTI => jump(Condition::Greater, Target::Relative(a as i32)),
        op::JEI => jump(Condition::Equal, Target::Relative(a as i32)),

        op::JMPA => jump(Condition::Always, Target::Absolute(a)),
        op::JLTA => jump(Condition::Less, Target::Absolute(a)),
        op::JGTA => jump(Condition::Greater, Target::Absolute(a)),
        op::JEA => jump(Condition::Equal, Target::Absolute(a)),

        _ => return Err(VmError::UnknownOpcode { opcode, ip }),
    };
    Ok(inst)
}
