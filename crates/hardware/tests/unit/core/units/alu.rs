//! ALU Operation Tests.
//!
//! Verifies 32-bit wrapping arithmetic, signed comparisons, shift masking
//! and the pass-through move.

use dlxsim_core::core::pipeline::signals::AluOp;
use dlxsim_core::core::units::alu::Alu;
use proptest::prelude::*;
use rstest::rstest;

fn w(v: i32) -> u64 {
    u64::from(v as u32)
}

// ══════════════════════════════════════════════════════════
// 1. Arithmetic
// ══════════════════════════════════════════════════════════

#[test]
fn add_wraps_at_32_bits() {
    assert_eq!(Alu::execute(AluOp::Add, w(i32::MAX), 1), w(i32::MIN));
}

#[test]
fn sub_goes_negative() {
    assert_eq!(Alu::execute(AluOp::Sub, 3, 5), w(-2));
}

#[test]
fn load_high_shifts_immediate() {
    assert_eq!(Alu::execute(AluOp::LoadHigh, 0, 0xABCD), 0xABCD_0000);
}

#[test]
fn move_passes_full_pair() {
    let bits = 2.5f64.to_bits();
    assert_eq!(Alu::execute(AluOp::Move, bits, 0), bits);
}

// ══════════════════════════════════════════════════════════
// 2. Logic and comparison
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(AluOp::And, 0b1100, 0b1010, 0b1000)]
#[case(AluOp::Or, 0b1100, 0b1010, 0b1110)]
#[case(AluOp::Xor, 0b1100, 0b1010, 0b0110)]
#[case(AluOp::Seq, 4, 4, 1)]
#[case(AluOp::Sne, 4, 4, 0)]
#[case(AluOp::Slt, w(-1), 0, 1)]
#[case(AluOp::Sgt, w(-1), 0, 0)]
#[case(AluOp::Sle, 7, 7, 1)]
#[case(AluOp::Sge, 6, 7, 0)]
fn logic_ops(#[case] op: AluOp, #[case] a: u64, #[case] b: u64, #[case] expected: u64) {
    assert_eq!(Alu::execute(op, a, b), expected);
}

// ══════════════════════════════════════════════════════════
// 3. Shifts
// ══════════════════════════════════════════════════════════

#[test]
fn shift_amount_is_masked() {
    assert_eq!(Alu::execute(AluOp::Sll, 1, 33), 2);
}

#[test]
fn sra_preserves_sign_srl_does_not() {
    assert_eq!(Alu::execute(AluOp::Sra, w(-8), 1), w(-4));
    assert_eq!(Alu::execute(AluOp::Srl, w(-8), 1), 0x7FFF_FFFC);
}

proptest! {
    #[test]
    fn add_matches_wrapping_add(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(Alu::execute(AluOp::Add, w(a), w(b)), w(a.wrapping_add(b)));
    }

    #[test]
    fn slt_matches_signed_compare(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(Alu::execute(AluOp::Slt, w(a), w(b)), u64::from(a < b));
    }

    #[test]
    fn results_fit_in_32_bits(a in any::<u64>(), b in any::<u64>()) {
        prop_assert!(Alu::execute(AluOp::Sub, a, b) <= u64::from(u32::MAX));
    }
}
