//! Instruction Disassembler for DLX.
//!
//! Converts a 32-bit instruction word into assembler syntax for trace logs,
//! debugger display and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use dlxsim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x2001_0005), "addi r1, r0, #5");
//! assert_eq!(disassemble(0), "nop");
//! ```

use super::decode::{Fields, decode};
use super::mnemonic::Shape;
use crate::core::pipeline::signals::InstClass;

/// Disassembles a 32-bit DLX instruction into a human-readable string.
///
/// Words with no mnemonic render as `.word 0x........`.
pub fn disassemble(word: u32) -> String {
    let d = decode(word);
    let Some(m) = d.mnemonic else {
        return format!(".word {word:#010x}");
    };
    let name = m.name();
    let operands = match (m.encoding().shape, d.fields) {
        (Shape::IntRrr, Fields::Register { rs1, rs2, rd, .. }) => {
            format!("r{rd}, r{rs1}, r{rs2}")
        }
        (Shape::FpRrr, Fields::Register { rs1, rs2, rd, .. }) => {
            format!("f{rd}, f{rs1}, f{rs2}")
        }
        (Shape::FpCompare, Fields::Register { rs1, rs2, .. }) => format!("f{rs1}, f{rs2}"),
        (Shape::FpUnary, Fields::Register { rs1, rd, .. }) => format!("f{rd}, f{rs1}"),
        (Shape::FpToInt, Fields::Register { rs1, rd, .. }) => format!("r{rd}, f{rs1}"),
        (Shape::IntToFp, Fields::Register { rs1, rd, .. }) => format!("f{rd}, r{rs1}"),
        (Shape::IntDest, Fields::Register { rd, .. }) => format!("r{rd}"),
        (Shape::IntSrc, Fields::Register { rs1, .. } | Fields::Immediate { rs1, .. }) => {
            format!("r{rs1}")
        }
        (Shape::IntRri, Fields::Immediate { rs1, rd, .. }) => {
            format!("r{rd}, r{rs1}, #{}", immediate(&d.class))
        }
        (Shape::IntRi, Fields::Immediate { rd, .. }) => {
            format!("r{rd}, #{:#x}", immediate(&d.class))
        }
        (Shape::Branch, Fields::Immediate { rs1, imm, .. }) => format!("r{rs1}, {imm}"),
        (Shape::FpBranch, Fields::Immediate { imm, .. }) => imm.to_string(),
        (Shape::Jump, Fields::Jump { offset }) => offset.to_string(),
        (Shape::IntLoad, Fields::Immediate { rs1, rd, imm }) => format!("r{rd}, {imm}(r{rs1})"),
        (Shape::FpLoad, Fields::Immediate { rs1, rd, imm }) => format!("f{rd}, {imm}(r{rs1})"),
        (Shape::IntStore, Fields::Immediate { rs1, rd, imm }) => format!("{imm}(r{rs1}), r{rd}"),
        (Shape::FpStore, Fields::Immediate { rs1, rd, imm }) => format!("{imm}(r{rs1}), f{rd}"),
        (Shape::Trap, _) => match d.class {
            InstClass::Trap { code } => format!("#{code}"),
            _ => String::new(),
        },
        _ => String::new(),
    };
    if operands.is_empty() {
        name.to_string()
    } else {
        format!("{name} {operands}")
    }
}

/// The immediate as Execute sees it, after sign or zero extension.
const fn immediate(class: &InstClass) -> i32 {
    match *class {
        InstClass::ImmediateAlu { imm, .. } => imm,
        _ => 0,
    }
}
