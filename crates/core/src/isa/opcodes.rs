//! Opcode Values.
//!
//! Defines the numeric opcode carried in the first word of every instruction.
//! Values 1-29 are the base instruction set; 30-39 are the character printing
//! and immediate/absolute jump forms added later. Zero and every value above 39
//! are undefined.

/// Increment register (`incr rx`).
pub const INCR: u32 = 1;

/// Add zero-extended immediate (`addi rx, imm`).
pub const ADDI: u32 = 2;

/// Add register (`addr rx, ry`).
pub const ADDR: u32 = 3;

/// Push low word of register (`pushr rx`).
pub const PUSHR: u32 = 4;

/// Push immediate (`pushi imm`).
pub const PUSHI: u32 = 5;

/// Move immediate (`movi rx, imm`).
pub const MOVI: u32 = 6;

/// Move register (`movr rx, ry`).
pub const MOVR: u32 = 7;

/// Load word from address in ry (`movmr rx, ry`).
pub const MOVMR: u32 = 8;

/// Store low word of ry to address in rx (`movrm rx, ry`).
pub const MOVRM: u32 = 9;

/// Memory-to-memory word copy (`movmm rx, ry`).
pub const MOVMM: u32 = 10;

/// Print register as signed decimal (`printr rx`).
pub const PRINTR: u32 = 11;

/// Print word at address in rx (`printm rx`).
pub const PRINTM: u32 = 12;

/// Register-relative jump (`jmp rx`).
pub const JMP: u32 = 13;

/// Compare register with immediate (`cmpi rx, imm`).
pub const CMPI: u32 = 14;

/// Compare two registers (`cmpr rx, ry`).
pub const CMPR: u32 = 15;

/// Register-relative jump if less (`jlt rx`).
pub const JLT: u32 = 16;

/// Register-relative jump if greater (`jgt rx`).
pub const JGT: u32 = 17;

/// Register-relative jump if equal (`je rx`).
pub const JE: u32 = 18;

/// Register-relative call (`call rx`).
pub const CALL: u32 = 19;

/// Call with displacement loaded from address in rx (`callm rx`).
pub const CALLM: u32 = 20;

/// Return (`ret`).
pub const RET: u32 = 21;

/// Halt (`exit`).
pub const EXIT: u32 = 22;

/// Pop into register (`popr rx`).
pub const POPR: u32 = 23;

/// Pop to address in rx (`popm rx`).
pub const POPM: u32 = 24;

/// Reserved no-op (`sleep`).
pub const SLEEP: u32 = 25;

/// Read decimal integer (`input rx`).
pub const INPUT: u32 = 26;

/// Read one character (`inputc rx`).
pub const INPUTC: u32 = 27;

/// Reserved no-op (`setpriority rx`).
pub const SETPRIORITY: u32 = 28;

/// Reserved no-op (`setpriorityi imm`).
pub const SETPRIORITYI: u32 = 29;

/// Print low byte of register as a character (`printcr rx`).
pub const PRINTCR: u32 = 30;

/// Print byte at address in rx as a character (`printcm rx`).
pub const PRINTCM: u32 = 31;

/// Immediate-relative jump (`jmpi imm`).
pub const JMPI: u32 = 32;

/// Absolute jump (`jmpa addr`).
pub const JMPA: u32 = 33;

/// Immediate-relative jump if less (`jlti imm`).
pub const JLTI: u32 = 34;

/// Absolute jump if less (`jlta addr`).
pub const JLTA: u32 = 35;

/// Immediate-relative jump if greater (`jgti imm`).
pub const JGTI: u32 = 36;

/// Absolute jump if greater (`jgta addr`).
pub const JGTA: u32 = 37;

/// Immediate-relative jump if equal (`jei imm`).
pub const JEI: u32 = 38;

/// Absolute jump if equal (`jea addr`).
pub const JEA: u32 = 39;
