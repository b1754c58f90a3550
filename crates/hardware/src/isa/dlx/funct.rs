//! Function codes for `OP_SPECIAL` (bits 5-0).

#![allow(missing_docs)]

/// No operation. The all-zero word.
pub const NOP: u32 = 0x00;
pub const SLL: u32 = 0x04;
pub const SRL: u32 = 0x06;
pub const SRA: u32 = 0x07;

pub const ADD: u32 = 0x20;
pub const ADDU: u32 = 0x21;
pub const SUB: u32 = 0x22;
pub const SUBU: u32 = 0x23;
pub const AND: u32 = 0x24;
pub const OR: u32 = 0x25;
pub const XOR: u32 = 0x26;

pub const SEQ: u32 = 0x28;
pub const SNE: u32 = 0x29;
pub const SLT: u32 = 0x2A;
pub const SGT: u32 = 0x2B;
pub const SLE: u32 = 0x2C;
pub const SGE: u32 = 0x2D;

/// Move integer register to special register. Executed as a no-op.
pub const MOVI2S: u32 = 0x30;
/// Move special register to integer register. Executed as a no-op.
pub const MOVS2I: u32 = 0x31;
/// Copy a single-precision register.
pub const MOVF: u32 = 0x32;
/// Copy a double-precision register pair.
pub const MOVD: u32 = 0x33;
/// Copy FP register bits into an integer register.
pub const MOVFP2I: u32 = 0x34;
/// Copy integer register bits into an FP register.
pub const MOVI2FP: u32 = 0x35;
