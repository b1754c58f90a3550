//! Simulator Façade Tests.
//!
//! Covers run outcomes, the halted state, reconfiguration before and after
//! execution begins, and the inspection interface.

use crate::common::builder::program::ProgramBuilder;
use crate::common::harness::{DATA_BASE, TestContext};
use dlxsim_core::common::{AccessWidth, SimError};
use dlxsim_core::config::{Config, FpUnitConfig, UnitsConfig};
use dlxsim_core::sim::{ProgramImage, RunOutcome, Simulator};
use pretty_assertions::assert_eq;

// ══════════════════════════════════════════════════════════
// 1. Run outcomes
// ══════════════════════════════════════════════════════════

#[test]
fn trap_code_is_reported() {
    let words = ProgramBuilder::new().addi(1, 0, 1).trap(7).build();
    let mut sim = Simulator::new(Config::default()).unwrap();
    sim.load_image(&ProgramImage::from_words(0, &words)).unwrap();

    match sim.run().unwrap() {
        RunOutcome::Halted { code, cycles } => {
            assert_eq!(code, 7);
            assert_eq!(cycles, sim.cycles());
        }
        other => panic!("expected halt, got {other:?}"),
    }
    assert!(sim.is_halted());
    assert_eq!(sim.read_register(1), 1);
}

#[test]
fn step_after_halt_changes_nothing() {
    let words = ProgramBuilder::new().trap(0).build();
    let mut ctx = TestContext::new().load_program(0, &words);
    let cycles = ctx.run_to_halt();

    assert!(ctx.sim.step().unwrap());
    assert!(ctx.sim.step().unwrap());
    assert_eq!(ctx.sim.cycles(), cycles);
    assert_eq!(ctx.stats().instructions_retired, 1);
}

#[test]
fn infinite_loop_hits_cycle_limit() {
    let mut config = Config::default();
    config.general.max_cycles = 100;
    let words = ProgramBuilder::new().j(-4).build();
    let mut sim = Simulator::new(config).unwrap();
    sim.load_image(&ProgramImage::from_words(0, &words)).unwrap();

    assert_eq!(sim.run().unwrap(), RunOutcome::CycleLimit { cycles: 100 });
    assert!(!sim.is_halted());
}

// ══════════════════════════════════════════════════════════
// 2. Configuration
// ══════════════════════════════════════════════════════════

#[test]
fn invalid_config_is_rejected() {
    let mut config = Config::default();
    config.units.fp_mul.count = 0;
    assert!(matches!(
        Simulator::new(config),
        Err(SimError::InvalidConfig(_))
    ));
}

#[test]
fn configure_before_run_rebuilds_engine() {
    let mut sim = Simulator::new(Config::default()).unwrap();
    let units = UnitsConfig {
        fp_mul: FpUnitConfig::new(2, 3),
        ..UnitsConfig::default()
    };
    sim.configure(false, units, 0x4000).unwrap();

    assert!(!sim.config().pipeline.forwarding);
    assert_eq!(sim.config().units.fp_mul, FpUnitConfig::new(2, 3));
    assert_eq!(sim.cpu().memory.size(), 0x4000);
}

#[test]
fn configure_rejects_bad_values() {
    let mut sim = Simulator::new(Config::default()).unwrap();
    let units = UnitsConfig {
        fp_div: FpUnitConfig::new(1, 0),
        ..UnitsConfig::default()
    };
    assert!(matches!(
        sim.configure(true, units, 0x8000),
        Err(SimError::InvalidConfig(_))
    ));
}

#[test]
fn configure_after_start_is_rejected() {
    let words = ProgramBuilder::new().nop().nop().trap(0).build();
    let mut ctx = TestContext::new().load_program(0, &words);
    assert!(!ctx.sim.step().unwrap());

    let err = ctx
        .sim
        .configure(false, UnitsConfig::default(), 0x8000)
        .unwrap_err();
    assert!(matches!(err, SimError::InvalidConfig(_)));
    assert!(ctx.sim.config().pipeline.forwarding);
}

// ══════════════════════════════════════════════════════════
// 3. Loading and inspection
// ══════════════════════════════════════════════════════════

#[test]
fn load_image_sets_pc_and_clears_registers() {
    let mut sim = Simulator::new(Config::default()).unwrap();
    sim.write_register(3, 42);
    sim.load_image(&ProgramImage::from_words(0x20, &[0])).unwrap();
    assert_eq!(sim.pc(), 0x20);
    assert_eq!(sim.read_register(3), 0);
    assert_eq!(sim.cycles(), 0);
}

#[test]
fn load_program_uses_configured_bases() {
    let mut config = Config::default();
    config.memory.code_base = 0x200;
    config.memory.data_base = 0x3000;
    let words = ProgramBuilder::new().lw(1, 0x3004, 0).trap(0).build();
    let mut sim = Simulator::new(config).unwrap();
    sim.load_program(&words, &[1, 0, 0, 0, 0x2A, 0, 0, 0]).unwrap();

    assert_eq!(sim.pc(), 0x200);
    assert_eq!(sim.read_memory(0x3000, AccessWidth::Word).unwrap(), 1);
    assert!(matches!(sim.run().unwrap(), RunOutcome::Halted { .. }));
    assert_eq!(sim.read_register(1), 0x2A);
}

#[test]
fn load_program_rejects_data_past_memory() {
    let mut config = Config::default();
    config.memory.data_base = 0x7FFC;
    let mut sim = Simulator::new(config).unwrap();
    let err = sim.load_program(&[0], &[0; 8]).unwrap_err();
    assert!(matches!(err, SimError::ImageOutOfRange { base: 0x7FFC, .. }));
}

#[test]
fn oversized_image_is_rejected() {
    let mut sim = Simulator::new(Config::default()).unwrap();
    let size = sim.config().memory.size as u32;
    let err = sim
        .load_image(&ProgramImage::from_words(size - 2, &[0]))
        .unwrap_err();
    assert!(matches!(err, SimError::ImageOutOfRange { .. }));
}

#[test]
fn register_and_memory_inspection() {
    let words = ProgramBuilder::new().trap(0).build();
    let mut ctx = TestContext::new()
        .load_program(0, &words)
        .with_doubles(DATA_BASE, &[3.5]);
    ctx.set_reg(0, 99);
    ctx.set_reg(4, -6);
    ctx.set_freg(2, 1.25);

    assert_eq!(ctx.get_reg(0), 0);
    assert_eq!(ctx.get_reg(4), -6);
    assert_eq!(ctx.get_freg(2), 1.25);
    assert!(!ctx.sim.read_fp_status());
    assert_eq!(
        ctx.sim.read_memory(DATA_BASE, AccessWidth::Double).unwrap(),
        3.5f64.to_bits()
    );
    assert!(ctx.sim.read_memory(u32::MAX, AccessWidth::Byte).is_err());
}
