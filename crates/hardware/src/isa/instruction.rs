//! Instruction word field extraction.
//!
//! Every DLX instruction is one 32-bit word in one of three layouts:
//!
//! ```text
//! Register:  opcode(6) | rs1(5) | rs2(5) | rd(5) | shamt(5) | funct(6)
//! Immediate: opcode(6) | rs1(5) | rd(5)  | immediate(16)
//! Jump:      opcode(6) | offset(26)
//! ```
//!
//! The field accessors here are layout-agnostic: callers pick the accessors
//! that match the opcode's format.

/// Bit position of the opcode field.
pub const OPCODE_SHIFT: u32 = 26;
/// Mask of the opcode field after shifting.
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit position of the `rs1` field.
pub const RS1_SHIFT: u32 = 21;
/// Bit position of the `rs2` field (register format).
pub const RS2_SHIFT: u32 = 16;
/// Bit position of the `rd` field (register format).
pub const RD_SHIFT: u32 = 11;
/// Bit position of the `rd` field (immediate format).
pub const I_RD_SHIFT: u32 = 16;
/// Bit position of the shift-amount field.
pub const SHAMT_SHIFT: u32 = 6;
/// Mask of every 5-bit register field.
pub const REG_MASK: u32 = 0x1F;
/// Mask of the function code.
pub const FUNCT_MASK: u32 = 0x3F;
/// Mask of the 16-bit immediate.
pub const IMM_MASK: u32 = 0xFFFF;
/// Mask of the 26-bit jump offset.
pub const JUMP_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode (bits 31-26).
    fn opcode(&self) -> u32;

    /// Extracts the first source register (bits 25-21).
    fn rs1(&self) -> u8;

    /// Extracts the second source register of the register format (bits 20-16).
    fn rs2(&self) -> u8;

    /// Extracts the destination register of the register format (bits 15-11).
    fn rd(&self) -> u8;

    /// Extracts the destination register of the immediate format (bits 20-16).
    ///
    /// Stores use this field for the register being stored.
    fn i_rd(&self) -> u8;

    /// Extracts the shift amount (bits 10-6).
    fn shamt(&self) -> u8;

    /// Extracts the function code (bits 5-0).
    fn funct(&self) -> u32;

    /// Extracts the 16-bit immediate, sign-extended.
    fn imm(&self) -> i32;

    /// Extracts the 16-bit immediate, zero-extended.
    fn uimm(&self) -> i32;

    /// Extracts the 26-bit jump offset, sign-extended.
    fn jump_offset(&self) -> i32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs1(&self) -> u8 {
        ((self >> RS1_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn rs2(&self) -> u8 {
        ((self >> RS2_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn rd(&self) -> u8 {
        ((self >> RD_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn i_rd(&self) -> u8 {
        ((self >> I_RD_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn shamt(&self) -> u8 {
        ((self >> SHAMT_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn imm(&self) -> i32 {
        i32::from((self & IMM_MASK) as u16 as i16)
    }

    #[inline(always)]
    fn uimm(&self) -> i32 {
        (self & IMM_MASK) as i32
    }

    #[inline(always)]
    fn jump_offset(&self) -> i32 {
        ((self & JUMP_MASK) << 6) as i32 >> 6
    }
}
