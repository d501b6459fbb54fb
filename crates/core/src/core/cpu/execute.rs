//! Instruction Semantics.
//!
//! One match over the decoded instruction set. Register operands arrive already
//! validated, so the only faults left here are memory accesses and console I/O.
//! Each arm reads and checks everything it needs before it writes a register,
//! `sp`, or `ip`. Memory is the exception: a word store that straddles the end
//! of memory writes its in-range bytes before failing, and `callm` writes its
//! return address before the displacement read that may fault.

use super::Cpu;
use crate::common::constants::WORD_SIZE;
use crate::common::{Reg, VmResult, as_address, relative_target, sign_extend, zero_extend};
use crate::isa::instruction::{Instruction, Target};
use crate::soc::Console;

impl Cpu {
    /// Executes one decoded instruction. `ip` already points past it.
    ///
    /// # Errors
    ///
    /// Memory faults from loads, stores, and stack operations, and console faults
    /// from the print and input instructions.
    pub fn execute<C: Console + ?Sized>(
        &mut self,
        inst: Instruction,
        console: &mut C,
    ) -> VmResult<()> {
        match inst {
            Instruction::Exit => self.running = false,
            Instruction::Sleep | Instruction::Setpriority | Instruction::Setpriorityi => {}

            Instruction::Movi { rx, imm } => self.regs.write(rx, zero_extend(imm)),
            Instruction::Movr { rx, ry } => self.regs.write(rx, self.regs.read(ry)),
            Instruction::Movmr { rx, ry } => {
                let val = self.mem.read_u32(self.address_in(ry))?;
                self.regs.write(rx, sign_extend(val));
            }
            Instruction::Movrm { rx, ry } => {
                let (addr, val) = (self.address_in(rx), self.regs.read(ry) as u32);
                self.mem.write_u32(addr, val)?;
            }
            Instruction::Movmm { rx, ry } => {
                let val = self.mem.read_u32(self.address_in(ry))?;
                let addr = self.address_in(rx);
                self.mem.write_u32(addr, val)?;
            }

            Instruction::Incr { rx } => self.add(rx, 1),
            Instruction::Addi { rx, imm } => self.add(rx, zero_extend(imm)),
            Instruction::Addr { rx, ry } => self.add(rx, self.regs.read(ry)),

            Instruction::Printr { rx } => console.print_int(self.regs.read(rx))?,
            Instruction::Printm { rx } => {
                let val = self.mem.read_u32(self.address_in(rx))?;
                console.print_int(sign_extend(val))?;
            }
            Instruction::Printcr { rx } => console.print_char(self.regs.read(rx) as u8)?,
            Instruction::Printcm { rx } => {
                let byte = self.mem.read_u8(self.address_in(rx))?;
                console.print_char(byte)?;
            }

            Instruction::Jump { cond, target } => {
                if cond.holds(self.zero_flag, self.sign_flag) {
                    self.ip = self.jump_target(target);
                    self.stats.jumps_taken += 1;
                }
            }
            Instruction::Cmpi { rx, imm } => self.compare(self.regs.read(rx), sign_extend(imm)),
            Instruction::Cmpr { rx, ry } => self.compare(self.regs.read(rx), self.regs.read(ry)),

            Instruction::Call { rx } => {
                let (ret, dest) = (self.ip, relative_target(self.ip, self.regs.read(rx)));
                self.push(ret)?;
                self.ip = dest;
            }
            Instruction::Callm { rx } => {
                // The displacement is read after the push, so it may be the return address.
                let (ret, slot) = (self.ip, self.sp.wrapping_sub(WORD_SIZE));
                self.mem.write_u32(slot, ret)?;
                let disp = sign_extend(self.mem.read_u32(self.address_in(rx))?);
                self.sp = slot;
                self.ip = relative_target(ret, disp);
            }
            Instruction::Ret => self.ip = self.pop()?,

            Instruction::Pushi { imm } => self.push(imm)?,
            Instruction::Pushr { rx } => {
                let val = self.regs.read(rx) as u32;
                self.push(val)?;
            }
            Instruction::Popr { rx } => {
                let val = self.pop()?;
                self.regs.write(rx, sign_extend(val));
            }
            Instruction::Popm { rx } => {
                let (addr, val) = (self.address_in(rx), self.peek()?);
                self.mem.write_u32(addr, val)?;
                self.discard();
            }

            Instruction::Input { rx } => {
                let val = console.read_int()?;
                self.regs.write(rx, val);
            }
            Instruction::Inputc { rx } => {
                let byte = console.read_char()?;
                self.regs.write(rx, i64::from(byte));
            }
        }
        Ok(())
    }

    /// The memory address held in a register.
    #[inline(always)]
    fn address_in(&self, reg: Reg) -> u32 {
        as_address(self.regs.read(reg))
    }

    /// Where a taken jump lands, measured from the already-advanced `ip`.
    #[inline(always)]
    const fn jump_target(&self, target: Target) -> u32 {
        match target {
            Target::Register(rx) => relative_target(self.ip, self.regs.read(rx)),
            Target::Relative(disp) => relative_target(self.ip, disp as i64),
            Target::Absolute(addr) => addr,
        }
    }

    #[inline(always)]
    const fn add(&mut self, rx: Reg, val: i64) {
        self.regs.write(rx, self.regs.read(rx).wrapping_add(val));
    }

    #[inline(always)]
    const fn compare(&mut self, lhs: i64, rhs: i64) {
        self.zero_flag = lhs == rhs;
        self.sign_flag = lhs < rhs;
    }
}
