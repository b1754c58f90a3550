use super::builder::program::ProgramBuilder;
use super::harness::{DATA_BASE, TestContext};
use dlxsim_core::common::AccessWidth;
use dlxsim_core::isa::decode;
use dlxsim_core::isa::Mnemonic;

// ─── ProgramBuilder ────────────────────────────────────────────────────────

#[test]
fn builder_emits_in_order() {
    let words = ProgramBuilder::new().addi(1, 0, 5).add(2, 1, 1).trap(0).build();
    assert_eq!(words.len(), 3);
    assert_eq!(decode(words[0]).mnemonic, Some(Mnemonic::Addi));
    assert_eq!(decode(words[1]).mnemonic, Some(Mnemonic::Add));
    assert_eq!(decode(words[2]).mnemonic, Some(Mnemonic::Trap));
}

#[test]
fn builder_nop_is_zero() {
    assert_eq!(ProgramBuilder::new().nop().build(), vec![0]);
}

// ─── TestContext ───────────────────────────────────────────────────────────

#[test]
fn context_loads_program_at_entry() {
    let words = ProgramBuilder::new().trap(0).build();
    let ctx = TestContext::new().load_program(0x40, &words);
    assert_eq!(ctx.sim.pc(), 0x40);
    assert_eq!(ctx.read_mem(0x40, AccessWidth::Word), u64::from(words[0]));
}

#[test]
fn context_keeps_data_across_program_load() {
    let words = ProgramBuilder::new().trap(0).build();
    let ctx = TestContext::new()
        .with_words(DATA_BASE, &[0xCAFE_F00D])
        .load_program(0, &words);
    assert_eq!(ctx.read_mem(DATA_BASE, AccessWidth::Word), 0xCAFE_F00D);
}

#[test]
fn context_runs_to_halt() {
    let words = ProgramBuilder::new().trap(0).build();
    let mut ctx = TestContext::new().load_program(0, &words);
    let cycles = ctx.run_to_halt();
    assert!(cycles > 0);
    assert!(ctx.sim.is_halted());
}
