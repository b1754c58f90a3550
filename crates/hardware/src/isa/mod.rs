//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the DLX opcode tables and the instruction word codec.
//!
//! # Components
//!
//! * `dlx`: Major opcodes and function codes.
//! * `mnemonic`: The closed mnemonic set with its encodings.
//! * `instruction`: Field extraction from instruction words.
//! * `decode` / `encode`: The codec proper.
//! * `disasm`: Assembler-syntax rendering.

/// Instruction decoding into fields and instruction classes.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// DLX opcode and function-code tables.
pub mod dlx;

/// Instruction encoding from mnemonic and operands.
pub mod encode;

/// Instruction field extraction utilities.
pub mod instruction;

/// The mnemonic table.
pub mod mnemonic;

pub use decode::{Decoded, Fields, decode};
pub use disasm::disassemble;
pub use encode::{Operands, encode};
pub use mnemonic::Mnemonic;
