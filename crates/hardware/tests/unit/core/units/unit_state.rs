//! Functional Unit State Machine Tests.
//!
//! Verifies the Idle → Busy → Done progression, latency counting and
//! the busy-load error.

use dlxsim_core::common::SimError;
use dlxsim_core::core::pipeline::signals::AluOp;
use dlxsim_core::core::units::{FunctionalUnit, Unit, UnitClass, UnitState};

fn unit() -> Unit<AluOp, u64> {
    Unit::new(UnitClass::FpMul)
}

#[test]
fn new_unit_is_idle() {
    let u = unit();
    assert!(u.is_idle());
    assert_eq!(u.state(), &UnitState::Idle);
    assert_eq!(u.class(), UnitClass::FpMul);
}

#[test]
fn result_appears_after_latency_ticks() {
    let mut u = unit();
    u.load(9, 2, 3, AluOp::Add, 3).unwrap();
    assert!(!u.is_idle());

    u.tick();
    u.tick();
    assert!(!u.is_done());
    assert!(u.take_result().is_none());

    u.tick();
    assert!(u.is_done());
    assert_eq!(u.done_tag(), Some(&9));
    assert_eq!(u.take_result(), Some((5, 9)));
    assert!(u.is_idle());
}

#[test]
fn done_is_held_until_taken() {
    let mut u = unit();
    u.load(1, 1, 1, AluOp::Add, 1).unwrap();
    for _ in 0..5 {
        u.tick();
    }
    assert_eq!(u.state(), &UnitState::Done { result: 2, tag: 1 });
}

#[test]
fn zero_latency_behaves_as_one() {
    let mut u = unit();
    u.load(1, 4, 4, AluOp::Sub, 0).unwrap();
    u.tick();
    assert_eq!(u.take_result(), Some((0, 1)));
}

#[test]
fn loading_busy_unit_fails() {
    let mut u = unit();
    u.load(1, 0, 0, AluOp::Add, 5).unwrap();
    assert_eq!(
        u.load(2, 0, 0, AluOp::Add, 5),
        Err(SimError::UnitBusy {
            class: UnitClass::FpMul
        })
    );
    assert_eq!(u.tag(), Some(&1));
}

#[test]
fn reset_discards_work() {
    let mut u = unit();
    u.load(1, 0, 0, AluOp::Add, 5).unwrap();
    u.reset();
    assert!(u.is_idle());
    assert_eq!(u.tag(), None);
}
