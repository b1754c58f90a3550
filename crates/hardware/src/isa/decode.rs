//! DLX Instruction Decoder.
//!
//! This module turns a 32-bit word into a [`Decoded`] instruction:
//! 1. **Mnemonic Lookup:** The opcode (and function code for the register
//!    formats) identifies the mnemonic.
//! 2. **Field Extraction:** The word is split per its format.
//! 3. **Classification:** The mnemonic and fields become an [`InstClass`] with
//!    operands and destination resolved, so later stages never look at the
//!    raw encoding again.
//!
//! Decoding never fails. Words with no mnemonic decode to
//! [`InstClass::Unimplemented`].

use super::instruction::{InstructionBits, JUMP_MASK};
use super::mnemonic::{Format, Mnemonic};
use crate::core::pipeline::signals::{
    AluOp, BranchCond, Dest, FpOp, FpuOp, InstClass, JumpTarget, LoadKind, Precision, Src,
    StoreKind,
};

/// Raw fields of an instruction word, per format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fields {
    /// Register format (opcodes `0x00` and `0x01`).
    Register {
        /// First source register.
        rs1: u8,
        /// Second source register.
        rs2: u8,
        /// Destination register.
        rd: u8,
        /// Shift amount.
        shamt: u8,
        /// Function code.
        funct: u32,
    },
    /// Immediate format.
    Immediate {
        /// Source or base register.
        rs1: u8,
        /// Destination register, or the register stored by a store.
        rd: u8,
        /// Sign-extended 16-bit immediate.
        imm: i32,
    },
    /// Jump format.
    Jump {
        /// Sign-extended 26-bit offset.
        offset: i32,
    },
}

/// A fully decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// The instruction word.
    pub raw: u32,
    /// Mnemonic, if the encoding is known.
    pub mnemonic: Option<Mnemonic>,
    /// Raw fields.
    pub fields: Fields,
    /// Instruction class driving Execute.
    pub class: InstClass,
}

/// Decodes a 32-bit instruction word.
///
/// # Examples
///
/// ```
/// use dlxsim_core::isa::decode::decode;
/// use dlxsim_core::isa::mnemonic::Mnemonic;
///
/// // addi r1, r0, #5
/// let d = decode(0x2001_0005);
/// assert_eq!(d.mnemonic, Some(Mnemonic::Addi));
/// ```
pub fn decode(word: u32) -> Decoded {
    let mnemonic = Mnemonic::from_fields(word.opcode(), word.funct());
    let format = mnemonic.map_or_else(|| format_of_opcode(word.opcode()), Mnemonic::format);
    let fields = match format {
        Format::Register | Format::FloatRegister => Fields::Register {
            rs1: word.rs1(),
            rs2: word.rs2(),
            rd: word.rd(),
            shamt: word.shamt(),
            funct: word.funct(),
        },
        Format::Immediate => Fields::Immediate {
            rs1: word.rs1(),
            rd: word.i_rd(),
            imm: word.imm(),
        },
        Format::Jump => Fields::Jump {
            offset: word.jump_offset(),
        },
    };
    let class = mnemonic.map_or(InstClass::Unimplemented { raw: word }, |m| classify(m, word));
    Decoded {
        raw: word,
        mnemonic,
        fields,
        class,
    }
}

/// Format of an unknown word, judged by its opcode alone.
const fn format_of_opcode(opcode: u32) -> Format {
    match opcode {
        0x00 => Format::Register,
        0x01 => Format::FloatRegister,
        _ => Format::Immediate,
    }
}

const fn ralu(op: AluOp, dest: Dest, src1: Src, src2: Src) -> InstClass {
    InstClass::RegisterAlu {
        op,
        dest,
        src1,
        src2,
    }
}

const fn ialu(op: AluOp, rd: u8, rs1: u8, imm: i32) -> InstClass {
    InstClass::ImmediateAlu {
        op,
        dest: Dest::Int(rd),
        src1: Src::Int(rs1),
        imm,
    }
}

const fn fpu(kind: FpuOp, precision: Precision, dest: Dest, src1: Src, src2: Src) -> InstClass {
    InstClass::RegisterFpu {
        op: FpOp { kind, precision },
        dest,
        src1,
        src2,
    }
}

/// Builds the instruction class of a known mnemonic.
fn classify(m: Mnemonic, w: u32) -> InstClass {
    use Mnemonic as M;

    let (rs1, rs2, rd, ird) = (w.rs1(), w.rs2(), w.rd(), w.i_rd());
    let (imm, uimm) = (w.imm(), w.uimm());
    let int3 = |op| ralu(op, Dest::Int(rd), Src::Int(rs1), Src::Int(rs2));
    let single3 = |kind, p| fpu(kind, p, Dest::Float(rd), Src::Float(rs1), Src::Float(rs2));
    let double3 = |kind| {
        fpu(
            kind,
            Precision::Double,
            Dest::FloatPair(rd),
            Src::FloatPair(rs1),
            Src::FloatPair(rs2),
        )
    };
    let cmpf = |kind| {
        fpu(
            kind,
            Precision::Single,
            Dest::FpStatus,
            Src::Float(rs1),
            Src::Float(rs2),
        )
    };
    let cmpd = |kind| {
        fpu(
            kind,
            Precision::Double,
            Dest::FpStatus,
            Src::FloatPair(rs1),
            Src::FloatPair(rs2),
        )
    };
    let cvt = |from, to, dest, src| fpu(FpuOp::Convert(to), from, dest, src, Src::None);
    let load = |kind, dest| InstClass::Load {
        kind,
        dest,
        base: rs1,
        offset: imm,
    };
    let store = |kind, src| InstClass::Store {
        kind,
        src,
        base: rs1,
        offset: imm,
    };
    let branch = |cond, src| InstClass::Branch {
        cond,
        src,
        offset: imm,
    };

    match m {
        M::Nop => InstClass::Nop,
        M::Sll => int3(AluOp::Sll),
        M::Srl => int3(AluOp::Srl),
        M::Sra => int3(AluOp::Sra),
        M::Add | M::Addu => int3(AluOp::Add),
        M::Sub | M::Subu => int3(AluOp::Sub),
        M::And => int3(AluOp::And),
        M::Or => int3(AluOp::Or),
        M::Xor => int3(AluOp::Xor),
        M::Seq => int3(AluOp::Seq),
        M::Sne => int3(AluOp::Sne),
        M::Slt => int3(AluOp::Slt),
        M::Sgt => int3(AluOp::Sgt),
        M::Sle => int3(AluOp::Sle),
        M::Sge => int3(AluOp::Sge),
        M::Movf => ralu(AluOp::Move, Dest::Float(rd), Src::Float(rs1), Src::None),
        M::Movd => ralu(AluOp::Move, Dest::FloatPair(rd), Src::FloatPair(rs1), Src::None),
        M::Movfp2i => ralu(AluOp::Move, Dest::Int(rd), Src::Float(rs1), Src::None),
        M::Movi2fp => ralu(AluOp::Move, Dest::Float(rd), Src::Int(rs1), Src::None),
        M::Movi2s | M::Movs2i | M::Rfe | M::Jr => InstClass::Unimplemented { raw: w },

        M::Addf => single3(FpuOp::Add, Precision::Single),
        M::Subf => single3(FpuOp::Sub, Precision::Single),
        M::Multf => single3(FpuOp::Mul, Precision::Single),
        M::Divf => single3(FpuOp::Div, Precision::Single),
        M::Addd => double3(FpuOp::Add),
        M::Subd => double3(FpuOp::Sub),
        M::Multd => double3(FpuOp::Mul),
        M::Divd => double3(FpuOp::Div),
        M::Mult => single3(FpuOp::Mul, Precision::Int),
        M::Div => single3(FpuOp::Div, Precision::Int),
        M::Multu => single3(FpuOp::Mul, Precision::UInt),
        M::Divu => single3(FpuOp::Div, Precision::UInt),
        M::Cvtf2d => cvt(
            Precision::Single,
            Precision::Double,
            Dest::FloatPair(rd),
            Src::Float(rs1),
        ),
        M::Cvtf2i => cvt(
            Precision::Single,
            Precision::Int,
            Dest::Float(rd),
            Src::Float(rs1),
        ),
        M::Cvtd2f => cvt(
            Precision::Double,
            Precision::Single,
            Dest::Float(rd),
            Src::FloatPair(rs1),
        ),
        M::Cvtd2i => cvt(
            Precision::Double,
            Precision::Int,
            Dest::Float(rd),
            Src::FloatPair(rs1),
        ),
        M::Cvti2f => cvt(
            Precision::Int,
            Precision::Single,
            Dest::Float(rd),
            Src::Float(rs1),
        ),
        M::Cvti2d => cvt(
            Precision::Int,
            Precision::Double,
            Dest::FloatPair(rd),
            Src::Float(rs1),
        ),
        M::Eqf => cmpf(FpuOp::Eq),
        M::Nef => cmpf(FpuOp::Ne),
        M::Ltf => cmpf(FpuOp::Lt),
        M::Gtf => cmpf(FpuOp::Gt),
        M::Lef => cmpf(FpuOp::Le),
        M::Gef => cmpf(FpuOp::Ge),
        M::Eqd => cmpd(FpuOp::Eq),
        M::Ned => cmpd(FpuOp::Ne),
        M::Ltd => cmpd(FpuOp::Lt),
        M::Gtd => cmpd(FpuOp::Gt),
        M::Led => cmpd(FpuOp::Le),
        M::Ged => cmpd(FpuOp::Ge),

        M::J => InstClass::Jump {
            link: false,
            target: JumpTarget::Relative(w.jump_offset()),
        },
        M::Jal => InstClass::Jump {
            link: true,
            target: JumpTarget::Relative(w.jump_offset()),
        },
        M::Jalr => InstClass::Jump {
            link: true,
            target: JumpTarget::Register(rs1),
        },
        M::Beqz => branch(BranchCond::Eqz, Src::Int(rs1)),
        M::Bnez => branch(BranchCond::Nez, Src::Int(rs1)),
        M::Bfpt => branch(BranchCond::FpTrue, Src::FpStatus),
        M::Bfpf => branch(BranchCond::FpFalse, Src::FpStatus),
        M::Trap => InstClass::Trap {
            code: w & JUMP_MASK,
        },

        M::Addi => ialu(AluOp::Add, ird, rs1, imm),
        M::Addui => ialu(AluOp::Add, ird, rs1, uimm),
        M::Subi => ialu(AluOp::Sub, ird, rs1, imm),
        M::Subui => ialu(AluOp::Sub, ird, rs1, uimm),
        M::Andi => ialu(AluOp::And, ird, rs1, uimm),
        M::Ori => ialu(AluOp::Or, ird, rs1, uimm),
        M::Xori => ialu(AluOp::Xor, ird, rs1, uimm),
        M::Lhi => InstClass::ImmediateAlu {
            op: AluOp::LoadHigh,
            dest: Dest::Int(ird),
            src1: Src::None,
            imm: uimm,
        },
        M::Slli => ialu(AluOp::Sll, ird, rs1, imm),
        M::Srli => ialu(AluOp::Srl, ird, rs1, imm),
        M::Srai => ialu(AluOp::Sra, ird, rs1, imm),
        M::Seqi => ialu(AluOp::Seq, ird, rs1, imm),
        M::Snei => ialu(AluOp::Sne, ird, rs1, imm),
        M::Slti => ialu(AluOp::Slt, ird, rs1, imm),
        M::Sgti => ialu(AluOp::Sgt, ird, rs1, imm),
        M::Slei => ialu(AluOp::Sle, ird, rs1, imm),
        M::Sgei => ialu(AluOp::Sge, ird, rs1, imm),

        M::Lb => load(LoadKind::Byte, Dest::Int(ird)),
        M::Lbu => load(LoadKind::ByteUnsigned, Dest::Int(ird)),
        M::Lh => load(LoadKind::Half, Dest::Int(ird)),
        M::Lhu => load(LoadKind::HalfUnsigned, Dest::Int(ird)),
        M::Lw => load(LoadKind::Word, Dest::Int(ird)),
        M::Lf => load(LoadKind::Single, Dest::Float(ird)),
        M::Ld => load(LoadKind::Double, Dest::FloatPair(ird)),
        M::Sb => store(StoreKind::Byte, Src::Int(ird)),
        M::Sh => store(StoreKind::Half, Src::Int(ird)),
        M::Sw => store(StoreKind::Word, Src::Int(ird)),
        M::Sf => store(StoreKind::Single, Src::Float(ird)),
        M::Sd => store(StoreKind::Double, Src::FloatPair(ird)),
    }
}
