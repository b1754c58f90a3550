//! The closed set of DLX mnemonics.
//!
//! One table row per instruction ties together its assembler name, encoding
//! format, opcode, function code and operand shape. The decoder, encoder and
//! disassembler all read this table, so a mnemonic cannot be encoded one way
//! and decoded another.

use std::fmt;

use super::dlx::{fp_funct, funct, opcodes as op};

/// Encoding layout of an instruction word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Integer register format under `OP_SPECIAL`.
    Register,
    /// Floating-point register format under `OP_FPARITH`.
    FloatRegister,
    /// `opcode | rs1 | rd | imm16`.
    Immediate,
    /// `opcode | offset26`.
    Jump,
}

/// Operand shape, used to render and parse assembler syntax.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// No operands (`nop`, `rfe`).
    Empty,
    /// `rd, rs1, rs2` over integer registers.
    IntRrr,
    /// `fd, fs1, fs2` over FP registers.
    FpRrr,
    /// `fs1, fs2`, result goes to the FP status flag.
    FpCompare,
    /// `fd, fs1`.
    FpUnary,
    /// `rd, fs1`.
    FpToInt,
    /// `fd, rs1`.
    IntToFp,
    /// `rd` only.
    IntDest,
    /// `rs1` only.
    IntSrc,
    /// `rd, rs1, #imm`.
    IntRri,
    /// `rd, #imm`.
    IntRi,
    /// `rs1, offset`.
    Branch,
    /// `offset`, tests the FP status flag.
    FpBranch,
    /// `offset`.
    Jump,
    /// `rd, imm(rs1)`.
    IntLoad,
    /// `fd, imm(rs1)`.
    FpLoad,
    /// `imm(rs1), rd`.
    IntStore,
    /// `imm(rs1), fd`.
    FpStore,
    /// `#code`.
    Trap,
}

/// Opcode, function code and layout of one mnemonic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Encoding {
    /// Word layout.
    pub format: Format,
    /// Major opcode (bits 31-26).
    pub opcode: u32,
    /// Function code; zero for immediate and jump formats.
    pub funct: u32,
    /// Operand shape.
    pub shape: Shape,
}

macro_rules! mnemonics {
    ($($variant:ident => $name:literal, $format:ident, $opcode:expr, $funct:expr, $shape:ident;)*) => {
        /// A DLX instruction mnemonic.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Mnemonic {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )*
        }

        impl Mnemonic {
            /// Every mnemonic, in table order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Returns the lower-case assembler name.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// Returns the encoding of this mnemonic.
            pub const fn encoding(self) -> Encoding {
                match self {
                    $(Self::$variant => Encoding {
                        format: Format::$format,
                        opcode: $opcode,
                        funct: $funct,
                        shape: Shape::$shape,
                    },)*
                }
            }
        }
    };
}

mnemonics! {
    Nop     => "nop",     Register, op::OP_SPECIAL, funct::NOP,     Empty;
    Sll     => "sll",     Register, op::OP_SPECIAL, funct::SLL,     IntRrr;
    Srl     => "srl",     Register, op::OP_SPECIAL, funct::SRL,     IntRrr;
    Sra     => "sra",     Register, op::OP_SPECIAL, funct::SRA,     IntRrr;
    Add     => "add",     Register, op::OP_SPECIAL, funct::ADD,     IntRrr;
    Addu    => "addu",    Register, op::OP_SPECIAL, funct::ADDU,    IntRrr;
    Sub     => "sub",     Register, op::OP_SPECIAL, funct::SUB,     IntRrr;
    Subu    => "subu",    Register, op::OP_SPECIAL, funct::SUBU,    IntRrr;
    And     => "and",     Register, op::OP_SPECIAL, funct::AND,     IntRrr;
    Or      => "or",      Register, op::OP_SPECIAL, funct::OR,      IntRrr;
    Xor     => "xor",     Register, op::OP_SPECIAL, funct::XOR,     IntRrr;
    Seq     => "seq",     Register, op::OP_SPECIAL, funct::SEQ,     IntRrr;
    Sne     => "sne",     Register, op::OP_SPECIAL, funct::SNE,     IntRrr;
    Slt     => "slt",     Register, op::OP_SPECIAL, funct::SLT,     IntRrr;
    Sgt     => "sgt",     Register, op::OP_SPECIAL, funct::SGT,     IntRrr;
    Sle     => "sle",     Register, op::OP_SPECIAL, funct::SLE,     IntRrr;
    Sge     => "sge",     Register, op::OP_SPECIAL, funct::SGE,     IntRrr;
    Movi2s  => "movi2s",  Register, op::OP_SPECIAL, funct::MOVI2S,  IntSrc;
    Movs2i  => "movs2i",  Register, op::OP_SPECIAL, funct::MOVS2I,  IntDest;
    Movf    => "movf",    Register, op::OP_SPECIAL, funct::MOVF,    FpUnary;
    Movd    => "movd",    Register, op::OP_SPECIAL, funct::MOVD,    FpUnary;
    Movfp2i => "movfp2i", Register, op::OP_SPECIAL, funct::MOVFP2I, FpToInt;
    Movi2fp => "movi2fp", Register, op::OP_SPECIAL, funct::MOVI2FP, IntToFp;

    Addf    => "addf",    FloatRegister, op::OP_FPARITH, fp_funct::ADDF,   FpRrr;
    Subf    => "subf",    FloatRegister, op::OP_FPARITH, fp_funct::SUBF,   FpRrr;
    Multf   => "multf",   FloatRegister, op::OP_FPARITH, fp_funct::MULTF,  FpRrr;
    Divf    => "divf",    FloatRegister, op::OP_FPARITH, fp_funct::DIVF,   FpRrr;
    Addd    => "addd",    FloatRegister, op::OP_FPARITH, fp_funct::ADDD,   FpRrr;
    Subd    => "subd",    FloatRegister, op::OP_FPARITH, fp_funct::SUBD,   FpRrr;
    Multd   => "multd",   FloatRegister, op::OP_FPARITH, fp_funct::MULTD,  FpRrr;
    Divd    => "divd",    FloatRegister, op::OP_FPARITH, fp_funct::DIVD,   FpRrr;
    Cvtf2d  => "cvtf2d",  FloatRegister, op::OP_FPARITH, fp_funct::CVTF2D, FpUnary;
    Cvtf2i  => "cvtf2i",  FloatRegister, op::OP_FPARITH, fp_funct::CVTF2I, FpUnary;
    Cvtd2f  => "cvtd2f",  FloatRegister, op::OP_FPARITH, fp_funct::CVTD2F, FpUnary;
    Cvtd2i  => "cvtd2i",  FloatRegister, op::OP_FPARITH, fp_funct::CVTD2I, FpUnary;
    Cvti2f  => "cvti2f",  FloatRegister, op::OP_FPARITH, fp_funct::CVTI2F, FpUnary;
    Cvti2d  => "cvti2d",  FloatRegister, op::OP_FPARITH, fp_funct::CVTI2D, FpUnary;
    Mult    => "mult",    FloatRegister, op::OP_FPARITH, fp_funct::MULT,   FpRrr;
    Div     => "div",     FloatRegister, op::OP_FPARITH, fp_funct::DIV,    FpRrr;
    Eqf     => "eqf",     FloatRegister, op::OP_FPARITH, fp_funct::EQF,    FpCompare;
    Nef     => "nef",     FloatRegister, op::OP_FPARITH, fp_funct::NEF,    FpCompare;
    Ltf     => "ltf",     FloatRegister, op::OP_FPARITH, fp_funct::LTF,    FpCompare;
    Gtf     => "gtf",     FloatRegister, op::OP_FPARITH, fp_funct::GTF,    FpCompare;
    Lef     => "lef",     FloatRegister, op::OP_FPARITH, fp_funct::LEF,    FpCompare;
    Gef     => "gef",     FloatRegister, op::OP_FPARITH, fp_funct::GEF,    FpCompare;
    Multu   => "multu",   FloatRegister, op::OP_FPARITH, fp_funct::MULTU,  FpRrr;
    Divu    => "divu",    FloatRegister, op::OP_FPARITH, fp_funct::DIVU,   FpRrr;
    Eqd     => "eqd",     FloatRegister, op::OP_FPARITH, fp_funct::EQD,    FpCompare;
    Ned     => "ned",     FloatRegister, op::OP_FPARITH, fp_funct::NED,    FpCompare;
    Ltd     => "ltd",     FloatRegister, op::OP_FPARITH, fp_funct::LTD,    FpCompare;
    Gtd     => "gtd",     FloatRegister, op::OP_FPARITH, fp_funct::GTD,    FpCompare;
    Led     => "led",     FloatRegister, op::OP_FPARITH, fp_funct::LED,    FpCompare;
    Ged     => "ged",     FloatRegister, op::OP_FPARITH, fp_funct::GED,    FpCompare;

    J       => "j",       Jump,      op::OP_J,     0, Jump;
    Jal     => "jal",     Jump,      op::OP_JAL,   0, Jump;
    Beqz    => "beqz",    Immediate, op::OP_BEQZ,  0, Branch;
    Bnez    => "bnez",    Immediate, op::OP_BNEZ,  0, Branch;
    Bfpt    => "bfpt",    Immediate, op::OP_BFPT,  0, FpBranch;
    Bfpf    => "bfpf",    Immediate, op::OP_BFPF,  0, FpBranch;
    Addi    => "addi",    Immediate, op::OP_ADDI,  0, IntRri;
    Addui   => "addui",   Immediate, op::OP_ADDUI, 0, IntRri;
    Subi    => "subi",    Immediate, op::OP_SUBI,  0, IntRri;
    Subui   => "subui",   Immediate, op::OP_SUBUI, 0, IntRri;
    Andi    => "andi",    Immediate, op::OP_ANDI,  0, IntRri;
    Ori     => "ori",     Immediate, op::OP_ORI,   0, IntRri;
    Xori    => "xori",    Immediate, op::OP_XORI,  0, IntRri;
    Lhi     => "lhi",     Immediate, op::OP_LHI,   0, IntRi;
    Rfe     => "rfe",     Jump,      op::OP_RFE,   0, Empty;
    Trap    => "trap",    Jump,      op::OP_TRAP,  0, Trap;
    Jr      => "jr",      Immediate, op::OP_JR,    0, IntSrc;
    Jalr    => "jalr",    Immediate, op::OP_JALR,  0, IntSrc;
    Slli    => "slli",    Immediate, op::OP_SLLI,  0, IntRri;
    Srli    => "srli",    Immediate, op::OP_SRLI,  0, IntRri;
    Srai    => "srai",    Immediate, op::OP_SRAI,  0, IntRri;
    Seqi    => "seqi",    Immediate, op::OP_SEQI,  0, IntRri;
    Snei    => "snei",    Immediate, op::OP_SNEI,  0, IntRri;
    Slti    => "slti",    Immediate, op::OP_SLTI,  0, IntRri;
    Sgti    => "sgti",    Immediate, op::OP_SGTI,  0, IntRri;
    Slei    => "slei",    Immediate, op::OP_SLEI,  0, IntRri;
    Sgei    => "sgei",    Immediate, op::OP_SGEI,  0, IntRri;
    Lb      => "lb",      Immediate, op::OP_LB,    0, IntLoad;
    Lh      => "lh",      Immediate, op::OP_LH,    0, IntLoad;
    Lw      => "lw",      Immediate, op::OP_LW,    0, IntLoad;
    Lbu     => "lbu",     Immediate, op::OP_LBU,   0, IntLoad;
    Lhu     => "lhu",     Immediate, op::OP_LHU,   0, IntLoad;
    Lf      => "lf",      Immediate, op::OP_LF,    0, FpLoad;
    Ld      => "ld",      Immediate, op::OP_LD,    0, FpLoad;
    Sb      => "sb",      Immediate, op::OP_SB,    0, IntStore;
    Sh      => "sh",      Immediate, op::OP_SH,    0, IntStore;
    Sw      => "sw",      Immediate, op::OP_SW,    0, IntStore;
    Sf      => "sf",      Immediate, op::OP_SF,    0, FpStore;
    Sd      => "sd",      Immediate, op::OP_SD,    0, FpStore;
}

impl Mnemonic {
    /// Looks up a mnemonic by assembler name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }

    /// Identifies the mnemonic of an opcode/function-code pair.
    ///
    /// The function code only participates for the two register-format
    /// opcodes.
    pub fn from_fields(opcode: u32, funct: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| {
            let enc = m.encoding();
            match enc.format {
                Format::Register | Format::FloatRegister => {
                    enc.opcode == opcode && enc.funct == funct
                }
                Format::Immediate | Format::Jump => enc.opcode == opcode,
            }
        })
    }

    /// Returns the encoding layout.
    pub const fn format(self) -> Format {
        self.encoding().format
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
