//! Pipeline control signals and operation types.
//!
//! This module defines the signals decode produces and the later stages consume:
//! 1. **Instruction Class:** The closed [`InstClass`] variant that drives Execute.
//! 2. **Operation Selection:** Integer ALU and FPU operation codes.
//! 3. **Operand Routing:** Register sources ([`Src`]) and destinations ([`Dest`]).
//! 4. **Memory Control:** Load and store widths with sign-extension rules.

use crate::common::AccessWidth;
use crate::core::units::UnitClass;

/// Integer ALU operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AluOp {
    /// Wrapping addition.
    #[default]
    Add,

    /// Wrapping subtraction.
    Sub,

    /// Bitwise AND.
    And,

    /// Bitwise OR.
    Or,

    /// Bitwise XOR.
    Xor,

    /// Shift left logical by the low five bits of operand B.
    Sll,

    /// Shift right logical.
    Srl,

    /// Shift right arithmetic (sign-preserving).
    Sra,

    /// Set to 1 if equal.
    Seq,

    /// Set to 1 if not equal.
    Sne,

    /// Set to 1 if less than (signed).
    Slt,

    /// Set to 1 if greater than (signed).
    Sgt,

    /// Set to 1 if less than or equal (signed).
    Sle,

    /// Set to 1 if greater than or equal (signed).
    Sge,

    /// Operand B shifted into the upper half-word (`LHI`).
    LoadHigh,

    /// Operand A passed through unchanged (register moves).
    Move,
}

/// Number format of FPU operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Precision {
    /// IEEE single precision, one register slot.
    Single,

    /// IEEE double precision, a register pair.
    Double,

    /// Signed 32-bit integer held in an FP register.
    Int,

    /// Unsigned 32-bit integer held in an FP register.
    UInt,
}

/// Floating-point unit operation kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FpuOp {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division.
    Div,
    /// Equal.
    Eq,
    /// Not equal.
    Ne,
    /// Less than.
    Lt,
    /// Greater than.
    Gt,
    /// Less than or equal.
    Le,
    /// Greater than or equal.
    Ge,
    /// Conversion into the given format.
    Convert(Precision),
}

/// A complete FPU operation: what to do and how to read the operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FpOp {
    /// The operation.
    pub kind: FpuOp,
    /// Format of the source operands.
    pub precision: Precision,
}

impl FpOp {
    /// Returns the functional-unit class that executes this operation.
    ///
    /// Multiplies go to the multiplier and divides to the divider, integer
    /// ones included. Everything else runs on the adder.
    pub const fn unit_class(self) -> UnitClass {
        match self.kind {
            FpuOp::Mul => UnitClass::FpMul,
            FpuOp::Div => UnitClass::FpDiv,
            _ => UnitClass::FpAdd,
        }
    }
}

/// Condition tested by a conditional branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchCond {
    /// Taken if the register is zero (`BEQZ`).
    Eqz,
    /// Taken if the register is non-zero (`BNEZ`).
    Nez,
    /// Taken if the FP status flag is set (`BFPT`).
    FpTrue,
    /// Taken if the FP status flag is clear (`BFPF`).
    FpFalse,
}

impl BranchCond {
    /// Evaluates the condition against the tested operand value.
    pub const fn holds(self, val: u64) -> bool {
        match self {
            Self::Eqz | Self::FpFalse => val as u32 == 0,
            Self::Nez | Self::FpTrue => val as u32 != 0,
        }
    }
}

/// Target of an unconditional jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JumpTarget {
    /// Offset from PC + 4.
    Relative(i32),
    /// Absolute address held in an integer register.
    Register(u8),
}

/// Load width and extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadKind {
    /// Sign-extended byte.
    Byte,
    /// Zero-extended byte.
    ByteUnsigned,
    /// Sign-extended half-word.
    Half,
    /// Zero-extended half-word.
    HalfUnsigned,
    /// Word.
    Word,
    /// Single-precision bits.
    Single,
    /// Double-precision bits into a register pair.
    Double,
}

impl LoadKind {
    /// Returns the access width.
    pub const fn width(self) -> AccessWidth {
        match self {
            Self::Byte | Self::ByteUnsigned => AccessWidth::Byte,
            Self::Half | Self::HalfUnsigned => AccessWidth::Half,
            Self::Word => AccessWidth::Word,
            Self::Single => AccessWidth::Single,
            Self::Double => AccessWidth::Double,
        }
    }

    /// Extends raw loaded bits to the value written back.
    pub const fn extend(self, raw: u64) -> u64 {
        match self {
            Self::Byte => raw as u8 as i8 as i32 as u32 as u64,
            Self::Half => raw as u16 as i16 as i32 as u32 as u64,
            Self::ByteUnsigned => raw & 0xFF,
            Self::HalfUnsigned => raw & 0xFFFF,
            Self::Word | Self::Single => raw & 0xFFFF_FFFF,
            Self::Double => raw,
        }
    }
}

/// Store width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    /// Low byte of an integer register.
    Byte,
    /// Low half-word of an integer register.
    Half,
    /// Integer register.
    Word,
    /// Single-precision register.
    Single,
    /// Double-precision register pair.
    Double,
}

impl StoreKind {
    /// Returns the access width.
    pub const fn width(self) -> AccessWidth {
        match self {
            Self::Byte => AccessWidth::Byte,
            Self::Half => AccessWidth::Half,
            Self::Word => AccessWidth::Word,
            Self::Single => AccessWidth::Single,
            Self::Double => AccessWidth::Double,
        }
    }
}

/// One architectural storage location tracked by the scoreboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegSlot {
    /// Integer register.
    Int(u8),
    /// Single FP register slot.
    Float(u8),
    /// The FP status flag.
    FpStatus,
}

/// Where an operand comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Src {
    /// Unused operand; reads as zero.
    #[default]
    None,
    /// Integer register.
    Int(u8),
    /// Single FP register slot.
    Float(u8),
    /// FP register pair holding a double.
    FloatPair(u8),
    /// The FP status flag, read as 0 or 1.
    FpStatus,
    /// Immediate already extended by decode.
    Imm(i32),
}

/// Where a result goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Dest {
    /// No architectural result.
    #[default]
    None,
    /// Integer register.
    Int(u8),
    /// Single FP register slot.
    Float(u8),
    /// FP register pair receiving a double.
    FloatPair(u8),
    /// The FP status flag (comparisons).
    FpStatus,
}

/// Returns the register slots covered by an operand or destination.
///
/// `r0` covers nothing: it is never written and never waited on.
fn slots_of(int: Option<u8>, float: Option<u8>, pair: Option<u8>, status: bool) -> Slots {
    let mut out = Slots::default();
    if let Some(r) = int.filter(|&r| r != 0) {
        out.push(RegSlot::Int(r & 31));
    }
    if let Some(f) = float {
        out.push(RegSlot::Float(f & 31));
    }
    if let Some(f) = pair {
        out.push(RegSlot::Float(f & 31));
        out.push(RegSlot::Float(f.wrapping_add(1) & 31));
    }
    if status {
        out.push(RegSlot::FpStatus);
    }
    out
}

/// Up to two register slots, without allocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Slots {
    items: [Option<RegSlot>; 2],
}

impl Slots {
    fn push(&mut self, slot: RegSlot) {
        if let Some(free) = self.items.iter_mut().find(|s| s.is_none()) {
            *free = Some(slot);
        }
    }

    /// Iterates over the covered slots.
    pub fn iter(&self) -> impl Iterator<Item = RegSlot> + '_ {
        self.items.iter().flatten().copied()
    }

    /// Returns `true` if no slot is covered.
    pub const fn is_empty(&self) -> bool {
        self.items[0].is_none()
    }
}

impl Src {
    /// Returns the register slots this operand reads.
    pub fn slots(self) -> Slots {
        match self {
            Self::None | Self::Imm(_) => Slots::default(),
            Self::Int(r) => slots_of(Some(r), None, None, false),
            Self::Float(f) => slots_of(None, Some(f), None, false),
            Self::FloatPair(f) => slots_of(None, None, Some(f), false),
            Self::FpStatus => slots_of(None, None, None, true),
        }
    }
}

impl Dest {
    /// Returns the register slots this destination writes.
    pub fn slots(self) -> Slots {
        match self {
            Self::None => Slots::default(),
            Self::Int(r) => slots_of(Some(r), None, None, false),
            Self::Float(f) => slots_of(None, Some(f), None, false),
            Self::FloatPair(f) => slots_of(None, None, Some(f), false),
            Self::FpStatus => slots_of(None, None, None, true),
        }
    }

    /// Extracts the bits of `slot` from a full result value.
    ///
    /// A double destination supplies its low word to the first slot of the
    /// pair and its high word to the second.
    pub const fn slot_bits(self, slot: RegSlot, value: u64) -> u64 {
        match (self, slot) {
            (Self::FloatPair(f), RegSlot::Float(s)) if s != f & 31 => value >> 32,
            (Self::FloatPair(_), _) => value & 0xFFFF_FFFF,
            (Self::FpStatus, _) => (value != 0) as u64,
            _ => value & 0xFFFF_FFFF,
        }
    }
}

/// Instruction class produced once by decode and matched once by Execute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InstClass {
    /// No operation (including the all-zero word).
    #[default]
    Nop,

    /// Integer register-register operation, including register moves.
    RegisterAlu {
        /// ALU operation.
        op: AluOp,
        /// Result destination.
        dest: Dest,
        /// First operand.
        src1: Src,
        /// Second operand.
        src2: Src,
    },

    /// Integer register-immediate operation.
    ImmediateAlu {
        /// ALU operation.
        op: AluOp,
        /// Result destination.
        dest: Dest,
        /// Register operand.
        src1: Src,
        /// Extended immediate.
        imm: i32,
    },

    /// Floating-point (or FP-register integer multiply/divide) operation.
    RegisterFpu {
        /// FPU operation.
        op: FpOp,
        /// Result destination.
        dest: Dest,
        /// First operand.
        src1: Src,
        /// Second operand.
        src2: Src,
    },

    /// Conditional PC-relative branch.
    Branch {
        /// Tested condition.
        cond: BranchCond,
        /// Tested operand.
        src: Src,
        /// Offset from PC + 4.
        offset: i32,
    },

    /// Unconditional jump, optionally linking PC + 4 into `r31`.
    Jump {
        /// Writes the return address when set.
        link: bool,
        /// Where to go.
        target: JumpTarget,
    },

    /// Memory load.
    Load {
        /// Width and extension.
        kind: LoadKind,
        /// Destination register.
        dest: Dest,
        /// Base address register.
        base: u8,
        /// Signed displacement.
        offset: i32,
    },

    /// Memory store.
    Store {
        /// Width.
        kind: StoreKind,
        /// Register being stored.
        src: Src,
        /// Base address register.
        base: u8,
        /// Signed displacement.
        offset: i32,
    },

    /// Halts the simulation when it reaches Writeback.
    Trap {
        /// Trap code.
        code: u32,
    },

    /// Decoded but not modeled (`JR`, `RFE`, `MOVI2S`, `MOVS2I`, unknown
    /// encodings). Flows through the pipeline without effect.
    Unimplemented {
        /// The instruction word.
        raw: u32,
    },
}

impl InstClass {
    /// Returns the architectural destination.
    pub const fn dest(&self) -> Dest {
        match *self {
            Self::RegisterAlu { dest, .. }
            | Self::ImmediateAlu { dest, .. }
            | Self::RegisterFpu { dest, .. }
            | Self::Load { dest, .. } => dest,
            Self::Jump { link: true, .. } => Dest::Int(crate::common::constants::LINK_REG),
            _ => Dest::None,
        }
    }

    /// Returns the two operand sources in Execute order.
    ///
    /// Loads and stores read their base register as the first operand;
    /// stores read the stored register as the second.
    pub const fn sources(&self) -> [Src; 2] {
        match *self {
            Self::RegisterAlu { src1, src2, .. } | Self::RegisterFpu { src1, src2, .. } => {
                [src1, src2]
            }
            Self::ImmediateAlu { src1, imm, .. } => [src1, Src::Imm(imm)],
            Self::Branch { src, .. } => [src, Src::None],
            Self::Jump {
                target: JumpTarget::Register(r),
                ..
            } => [Src::Int(r), Src::None],
            Self::Load { base, .. } => [Src::Int(base), Src::None],
            Self::Store { src, base, .. } => [Src::Int(base), src],
            _ => [Src::None, Src::None],
        }
    }

    /// Returns the functional unit class Execute sends this instruction to,
    /// or `None` if it goes through the address/branch register.
    pub const fn unit_class(&self) -> Option<UnitClass> {
        match self {
            Self::RegisterAlu { .. } | Self::ImmediateAlu { .. } => Some(UnitClass::IntAlu),
            Self::RegisterFpu { op, .. } => Some(op.unit_class()),
            _ => None,
        }
    }
}
