//! CPU Clocking Tests.

use crate::common::builder::program::ProgramBuilder;
use crate::common::harness::TestContext;
use dlxsim_core::config::Config;
use dlxsim_core::core::Cpu;
use dlxsim_core::core::pipeline::traits::PipelineLatch;

#[test]
fn new_cpu_starts_at_code_base() {
    let mut config = Config::default();
    config.memory.code_base = 0x100;
    let cpu = Cpu::new(&config);
    assert_eq!(cpu.pc, 0x100);
    assert!(!cpu.is_halted());
    assert!(cpu.scoreboard.is_clear());
    assert!(cpu.pending.is_empty());
    assert!(cpu.units.all_idle());
}

#[test]
fn tags_increase() {
    let mut cpu = Cpu::new(&Config::default());
    let a = cpu.next_tag();
    let b = cpu.next_tag();
    assert!(b > a);
}

#[test]
fn each_step_is_one_cycle() {
    let words = ProgramBuilder::new().nop().nop().nop().trap(0).build();
    let mut ctx = TestContext::new().load_program(0, &words);
    assert!(!ctx.run(3).unwrap());
    assert_eq!(ctx.sim.cycles(), 3);
    assert!(!ctx.cpu().if_id.is_empty());
    assert!(!ctx.cpu().id_ex.is_empty());
}

#[test]
fn halted_cpu_ignores_clocks() {
    let words = ProgramBuilder::new().trap(0).build();
    let mut ctx = TestContext::new().load_program(0, &words);
    let cycles = ctx.run_to_halt();
    assert_eq!(cycles, 6);

    let mut cpu = ctx.cpu().clone();
    assert!(cpu.step().unwrap());
    assert_eq!(cpu.stats.cycles, cycles);
    cpu.dump_state();
}

#[test]
fn jr_is_a_no_op() {
    let words = ProgramBuilder::new()
        .addi(31, 0, 12)
        .jr(31)
        .addi(5, 0, 1)
        .trap(0)
        .build();
    let mut ctx = TestContext::new().load_program(0, &words);
    let _ = ctx.run_to_halt();
    assert_eq!(ctx.get_reg(5), 1);
    assert_eq!(ctx.stats().flushes, 0);
}

#[test]
fn unknown_word_flows_through() {
    let words = ProgramBuilder::new()
        .word(0xFC00_0000)
        .addi(1, 0, 2)
        .trap(0)
        .build();
    let mut ctx = TestContext::new().load_program(0, &words);
    let _ = ctx.run_to_halt();
    assert_eq!(ctx.get_reg(1), 2);
}
