//! DLX Major Opcodes.
//!
//! Defines the six-bit major opcodes (bits 31-26).

#![allow(missing_docs)]

/// Integer register-register operations, selected by `funct`.
pub const OP_SPECIAL: u32 = 0x00;
/// Floating-point register operations, selected by `funct`.
pub const OP_FPARITH: u32 = 0x01;

/// Unconditional PC-relative jump.
pub const OP_J: u32 = 0x02;
/// PC-relative jump and link.
pub const OP_JAL: u32 = 0x03;
/// Branch if register equals zero.
pub const OP_BEQZ: u32 = 0x04;
/// Branch if register is not zero.
pub const OP_BNEZ: u32 = 0x05;
/// Branch if FP status is set.
pub const OP_BFPT: u32 = 0x06;
/// Branch if FP status is clear.
pub const OP_BFPF: u32 = 0x07;

pub const OP_ADDI: u32 = 0x08;
pub const OP_ADDUI: u32 = 0x09;
pub const OP_SUBI: u32 = 0x0A;
pub const OP_SUBUI: u32 = 0x0B;
pub const OP_ANDI: u32 = 0x0C;
pub const OP_ORI: u32 = 0x0D;
pub const OP_XORI: u32 = 0x0E;
/// Load high immediate (`rd = imm << 16`).
pub const OP_LHI: u32 = 0x0F;

/// Return from exception. Decoded, executed as a no-op.
pub const OP_RFE: u32 = 0x10;
/// Trap; halts the simulation when it reaches Writeback.
pub const OP_TRAP: u32 = 0x11;
/// Register-indirect jump. Decoded, executed as a no-op.
pub const OP_JR: u32 = 0x12;
/// Register-indirect jump and link.
pub const OP_JALR: u32 = 0x13;

pub const OP_SLLI: u32 = 0x14;
pub const OP_SRLI: u32 = 0x16;
pub const OP_SRAI: u32 = 0x17;
pub const OP_SEQI: u32 = 0x18;
pub const OP_SNEI: u32 = 0x19;
pub const OP_SLTI: u32 = 0x1A;
pub const OP_SGTI: u32 = 0x1B;
pub const OP_SLEI: u32 = 0x1C;
pub const OP_SGEI: u32 = 0x1D;

pub const OP_LB: u32 = 0x20;
pub const OP_LH: u32 = 0x21;
pub const OP_LW: u32 = 0x23;
pub const OP_LBU: u32 = 0x24;
pub const OP_LHU: u32 = 0x25;
/// Load single-precision float.
pub const OP_LF: u32 = 0x26;
/// Load double-precision float into a register pair.
pub const OP_LD: u32 = 0x27;

pub const OP_SB: u32 = 0x28;
pub const OP_SH: u32 = 0x29;
pub const OP_SW: u32 = 0x2B;
/// Store single-precision float.
pub const OP_SF: u32 = 0x2E;
/// Store double-precision float from a register pair.
pub const OP_SD: u32 = 0x2F;
