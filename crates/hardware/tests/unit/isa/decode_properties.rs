//! Decode Tests.
//!
//! Checks that each word decodes into the instruction class Execute consumes:
//! operand sources, destination, and extended immediate.

use dlxsim_core::core::pipeline::signals::{
    AluOp, BranchCond, Dest, FpOp, FpuOp, InstClass, JumpTarget, LoadKind, Precision, Src,
    StoreKind,
};
use dlxsim_core::core::units::UnitClass;
use dlxsim_core::isa::{Fields, Mnemonic, Operands, decode, encode};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn class_of(m: Mnemonic, ops: Operands) -> InstClass {
    decode(encode(m, &ops)).class
}

#[test]
fn zero_word_is_nop() {
    let d = decode(0);
    assert_eq!(d.mnemonic, Some(Mnemonic::Nop));
    assert_eq!(d.class, InstClass::Nop);
}

#[test]
fn register_alu() {
    assert_eq!(
        class_of(Mnemonic::Sub, Operands::rrr(3, 1, 2)),
        InstClass::RegisterAlu {
            op: AluOp::Sub,
            dest: Dest::Int(3),
            src1: Src::Int(1),
            src2: Src::Int(2),
        }
    );
}

#[test]
fn addi_sign_extends() {
    assert_eq!(
        class_of(Mnemonic::Addi, Operands::rri(4, 5, -2)),
        InstClass::ImmediateAlu {
            op: AluOp::Add,
            dest: Dest::Int(4),
            src1: Src::Int(5),
            imm: -2,
        }
    );
}

#[test]
fn logical_immediates_zero_extend() {
    for m in [Mnemonic::Andi, Mnemonic::Ori, Mnemonic::Xori, Mnemonic::Addui, Mnemonic::Subui] {
        match class_of(m, Operands::rri(1, 2, -1)) {
            InstClass::ImmediateAlu { imm, .. } => assert_eq!(imm, 0xFFFF, "{m}"),
            other => panic!("{m} decoded as {other:?}"),
        }
    }
}

#[test]
fn lhi_has_no_register_source() {
    assert_eq!(
        class_of(Mnemonic::Lhi, Operands::rri(1, 0, 0x8000)),
        InstClass::ImmediateAlu {
            op: AluOp::LoadHigh,
            dest: Dest::Int(1),
            src1: Src::None,
            imm: 0x8000,
        }
    );
}

#[test]
fn double_arithmetic_reads_register_pairs() {
    assert_eq!(
        class_of(Mnemonic::Addd, Operands::rrr(0, 2, 4)),
        InstClass::RegisterFpu {
            op: FpOp {
                kind: FpuOp::Add,
                precision: Precision::Double,
            },
            dest: Dest::FloatPair(0),
            src1: Src::FloatPair(2),
            src2: Src::FloatPair(4),
        }
    );
}

#[test]
fn fp_compare_writes_status() {
    let class = class_of(Mnemonic::Ltf, Operands::cmp(1, 2));
    assert_eq!(class.dest(), Dest::FpStatus);
    assert_eq!(class.sources(), [Src::Float(1), Src::Float(2)]);
}

#[test]
fn integer_multiply_runs_on_fp_registers() {
    match class_of(Mnemonic::Mult, Operands::rrr(3, 1, 2)) {
        InstClass::RegisterFpu { op, dest, .. } => {
            assert_eq!(op.precision, Precision::Int);
            assert_eq!(dest, Dest::Float(3));
        }
        other => panic!("mult decoded as {other:?}"),
    }
}

#[test]
fn branches_test_register_or_status() {
    assert_eq!(
        class_of(Mnemonic::Bnez, Operands::branch(3, -8)),
        InstClass::Branch {
            cond: BranchCond::Nez,
            src: Src::Int(3),
            offset: -8,
        }
    );
    assert_eq!(
        class_of(Mnemonic::Bfpf, Operands::branch(0, 12)),
        InstClass::Branch {
            cond: BranchCond::FpFalse,
            src: Src::FpStatus,
            offset: 12,
        }
    );
}

#[test]
fn jal_links_r31() {
    let class = class_of(Mnemonic::Jal, Operands::imm(16));
    assert_eq!(
        class,
        InstClass::Jump {
            link: true,
            target: JumpTarget::Relative(16),
        }
    );
    assert_eq!(class.dest(), Dest::Int(31));
}

#[test]
fn jalr_jumps_through_register() {
    let class = class_of(Mnemonic::Jalr, Operands::branch(7, 0));
    assert_eq!(class.sources()[0], Src::Int(7));
    assert_eq!(class.dest(), Dest::Int(31));
}

#[test]
fn loads_and_stores() {
    assert_eq!(
        class_of(Mnemonic::Ld, Operands::mem(2, 1, 8)),
        InstClass::Load {
            kind: LoadKind::Double,
            dest: Dest::FloatPair(2),
            base: 1,
            offset: 8,
        }
    );
    assert_eq!(
        class_of(Mnemonic::Sb, Operands::mem(5, 6, -1)),
        InstClass::Store {
            kind: StoreKind::Byte,
            src: Src::Int(5),
            base: 6,
            offset: -1,
        }
    );
}

#[test]
fn trap_carries_code() {
    assert_eq!(
        class_of(Mnemonic::Trap, Operands::imm(0x1234)),
        InstClass::Trap { code: 0x1234 }
    );
}

#[test]
fn special_register_moves_and_rfe_are_unimplemented() {
    for m in [Mnemonic::Movi2s, Mnemonic::Movs2i, Mnemonic::Rfe, Mnemonic::Jr] {
        let w = encode(m, &Operands::rr(1, 2));
        assert_eq!(decode(w).class, InstClass::Unimplemented { raw: w }, "{m}");
    }
}

#[test]
fn unknown_opcode_is_unimplemented() {
    let w = 0x3F << 26;
    let d = decode(w);
    assert_eq!(d.mnemonic, None);
    assert_eq!(d.class, InstClass::Unimplemented { raw: w });
    assert!(matches!(d.fields, Fields::Immediate { .. }));
}

#[test]
fn classes_route_to_their_execution_resource() {
    let unit = |m, ops| class_of(m, ops).unit_class();
    assert_eq!(unit(Mnemonic::Add, Operands::rrr(3, 1, 2)), Some(UnitClass::IntAlu));
    assert_eq!(unit(Mnemonic::Addi, Operands::rri(1, 2, 3)), Some(UnitClass::IntAlu));
    assert_eq!(unit(Mnemonic::Addd, Operands::rrr(0, 2, 4)), Some(UnitClass::FpAdd));
    assert_eq!(unit(Mnemonic::Multf, Operands::rrr(3, 1, 2)), Some(UnitClass::FpMul));
    assert_eq!(unit(Mnemonic::Div, Operands::rrr(3, 1, 2)), Some(UnitClass::FpDiv));
    assert_eq!(unit(Mnemonic::Lw, Operands::mem(2, 1, 8)), None);
    assert_eq!(unit(Mnemonic::Beqz, Operands::branch(3, -8)), None);
    assert_eq!(unit(Mnemonic::Trap, Operands::imm(0)), None);
    assert_eq!(InstClass::Nop.unit_class(), None);
}

#[test]
fn r0_destination_is_not_a_tracked_slot() {
    let class = class_of(Mnemonic::Addi, Operands::rri(0, 1, 1));
    assert!(class.dest().slots().is_empty());
}

proptest! {
    #[test]
    fn decode_never_panics(word in any::<u32>()) {
        let d = decode(word);
        prop_assert_eq!(d.raw, word);
    }

    #[test]
    fn immediate_alu_roundtrips_signed_immediate(rd in 1u8..32, rs1 in 0u8..32, imm in -0x8000i32..0x8000) {
        match class_of(Mnemonic::Addi, Operands::rri(rd, rs1, imm)) {
            InstClass::ImmediateAlu { imm: got, dest, .. } => {
                prop_assert_eq!(got, imm);
                prop_assert_eq!(dest, Dest::Int(rd));
            }
            other => prop_assert!(false, "unexpected class {:?}", other),
        }
    }
}
