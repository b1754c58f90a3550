use dlxsim_core::common::RegisterFile;

#[test]
fn r0_reads_zero_and_ignores_writes() {
    let mut regs = RegisterFile::new();
    regs.write(0, 42);
    assert_eq!(regs.read(0), 0);
}

#[test]
fn integer_registers_hold_signed_values() {
    let mut regs = RegisterFile::new();
    regs.write(7, -3);
    regs.write(31, i32::MAX);
    assert_eq!(regs.read(7), -3);
    assert_eq!(regs.read(31), i32::MAX);
}

#[test]
fn double_occupies_even_odd_pair() {
    let mut regs = RegisterFile::new();
    let bits = 1.5f64.to_bits();
    regs.write_d(2, bits);
    assert_eq!(regs.read_f(2), bits as u32);
    assert_eq!(regs.read_f(3), (bits >> 32) as u32);
    assert_eq!(regs.read_d(2), bits);
}

#[test]
fn double_pair_wraps_at_f31() {
    let mut regs = RegisterFile::new();
    regs.write_d(31, 0x1122_3344_5566_7788);
    assert_eq!(regs.read_f(31), 0x5566_7788);
    assert_eq!(regs.read_f(0), 0x1122_3344);
}

#[test]
fn fp_status_defaults_clear() {
    let mut regs = RegisterFile::new();
    assert!(!regs.fp_status());
    regs.set_fp_status(true);
    assert!(regs.fp_status());
}
