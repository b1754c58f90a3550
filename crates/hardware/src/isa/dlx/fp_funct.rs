//! Function codes for `OP_FPARITH` (bits 5-0).

#![allow(missing_docs)]

pub const ADDF: u32 = 0x00;
pub const SUBF: u32 = 0x01;
pub const MULTF: u32 = 0x02;
pub const DIVF: u32 = 0x03;
pub const ADDD: u32 = 0x04;
pub const SUBD: u32 = 0x05;
pub const MULTD: u32 = 0x06;
pub const DIVD: u32 = 0x07;

pub const CVTF2D: u32 = 0x08;
pub const CVTF2I: u32 = 0x09;
pub const CVTD2F: u32 = 0x0A;
pub const CVTD2I: u32 = 0x0B;
pub const CVTI2F: u32 = 0x0C;
pub const CVTI2D: u32 = 0x0D;

/// Signed integer multiply of FP register contents.
pub const MULT: u32 = 0x0E;
/// Signed integer divide of FP register contents.
pub const DIV: u32 = 0x0F;

pub const EQF: u32 = 0x10;
pub const NEF: u32 = 0x11;
pub const LTF: u32 = 0x12;
pub const GTF: u32 = 0x13;
pub const LEF: u32 = 0x14;
pub const GEF: u32 = 0x15;

/// Unsigned integer multiply of FP register contents.
pub const MULTU: u32 = 0x16;
/// Unsigned integer divide of FP register contents.
pub const DIVU: u32 = 0x17;

pub const EQD: u32 = 0x18;
pub const NED: u32 = 0x19;
pub const LTD: u32 = 0x1A;
pub const GTD: u32 = 0x1B;
pub const LED: u32 = 0x1C;
pub const GED: u32 = 0x1D;
