//! DLX opcode and function-code tables.
//!
//! The top six bits of every word select the opcode. Two opcodes use the
//! register format and defer to a function code in the low six bits:
//! `OP_SPECIAL` for integer and move operations, `OP_FPARITH` for
//! floating-point and integer multiply/divide.

/// Function codes for the floating-point register format (`OP_FPARITH`).
pub mod fp_funct;

/// Function codes for the integer register format (`OP_SPECIAL`).
pub mod funct;

/// Major opcodes (bits 31-26).
pub mod opcodes;
