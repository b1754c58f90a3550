//! DLX Instruction Encoder.
//!
//! The inverse of [`decode`](super::decode::decode), used by loaders and test
//! builders to turn a mnemonic and its operands into a word. Every operand is
//! truncated to its field width; out-of-range values wrap silently.

use super::instruction::{
    FUNCT_MASK, I_RD_SHIFT, IMM_MASK, JUMP_MASK, OPCODE_MASK, OPCODE_SHIFT, RD_SHIFT, REG_MASK,
    RS1_SHIFT, RS2_SHIFT, SHAMT_SHIFT,
};
use super::mnemonic::{Format, Mnemonic};

/// Operand values for [`encode`].
///
/// Fields not used by a mnemonic's format are ignored. Stores put the stored
/// register in `rd` and the base register in `rs1`; jumps, branches and
/// `TRAP` take their offset or code from `imm`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Operands {
    /// Destination (or stored) register.
    pub rd: u8,
    /// First source or base register.
    pub rs1: u8,
    /// Second source register.
    pub rs2: u8,
    /// Shift amount field of the register format.
    pub shamt: u8,
    /// Immediate, offset or trap code.
    pub imm: i32,
}

impl Operands {
    /// `rd, rs1, rs2`.
    pub const fn rrr(rd: u8, rs1: u8, rs2: u8) -> Self {
        Self {
            rd,
            rs1,
            rs2,
            shamt: 0,
            imm: 0,
        }
    }

    /// `rd, rs1` (moves and conversions).
    pub const fn rr(rd: u8, rs1: u8) -> Self {
        Self::rrr(rd, rs1, 0)
    }

    /// `rs1, rs2` (FP comparisons).
    pub const fn cmp(rs1: u8, rs2: u8) -> Self {
        Self::rrr(0, rs1, rs2)
    }

    /// `rd, rs1, #imm`.
    pub const fn rri(rd: u8, rs1: u8, imm: i32) -> Self {
        Self {
            rd,
            rs1,
            rs2: 0,
            shamt: 0,
            imm,
        }
    }

    /// `reg, imm(base)` for loads and stores.
    pub const fn mem(reg: u8, base: u8, offset: i32) -> Self {
        Self::rri(reg, base, offset)
    }

    /// `rs1, offset` for branches and register jumps.
    pub const fn branch(rs1: u8, offset: i32) -> Self {
        Self::rri(0, rs1, offset)
    }

    /// A bare immediate: jump offset or trap code.
    pub const fn imm(imm: i32) -> Self {
        Self::rri(0, 0, imm)
    }
}

/// Encodes a mnemonic and operands into an instruction word.
///
/// # Examples
///
/// ```
/// use dlxsim_core::isa::encode::{encode, Operands};
/// use dlxsim_core::isa::mnemonic::Mnemonic;
///
/// assert_eq!(encode(Mnemonic::Addi, &Operands::rri(1, 0, 5)), 0x2001_0005);
/// assert_eq!(encode(Mnemonic::Nop, &Operands::default()), 0);
/// ```
pub fn encode(mnemonic: Mnemonic, ops: &Operands) -> u32 {
    let enc = mnemonic.encoding();
    let opcode = (enc.opcode & OPCODE_MASK) << OPCODE_SHIFT;
    let reg = |r: u8, shift: u32| (u32::from(r) & REG_MASK) << shift;
    match enc.format {
        Format::Register | Format::FloatRegister => {
            opcode
                | reg(ops.rs1, RS1_SHIFT)
                | reg(ops.rs2, RS2_SHIFT)
                | reg(ops.rd, RD_SHIFT)
                | reg(ops.shamt, SHAMT_SHIFT)
                | (enc.funct & FUNCT_MASK)
        }
        Format::Immediate => {
            opcode | reg(ops.rs1, RS1_SHIFT) | reg(ops.rd, I_RD_SHIFT) | (ops.imm as u32 & IMM_MASK)
        }
        Format::Jump => opcode | (ops.imm as u32 & JUMP_MASK),
    }
}
