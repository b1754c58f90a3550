use dlxsim_core::isa::{Mnemonic, Operands, encode};

/// Assembles a program one instruction at a time.
///
/// Branch and jump offsets are byte offsets relative to the address of the
/// following instruction, as the hardware computes them.
#[derive(Default)]
pub struct ProgramBuilder {
    words: Vec<u32>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends any instruction.
    pub fn push(mut self, mnemonic: Mnemonic, ops: Operands) -> Self {
        self.words.push(encode(mnemonic, &ops));
        self
    }

    /// Appends a raw word.
    pub fn word(mut self, word: u32) -> Self {
        self.words.push(word);
        self
    }

    /// Number of instructions so far.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn build(self) -> Vec<u32> {
        self.words
    }

    // --- Integer ---

    pub fn nop(self) -> Self {
        self.push(Mnemonic::Nop, Operands::default())
    }

    pub fn add(self, rd: u8, rs1: u8, rs2: u8) -> Self {
        self.push(Mnemonic::Add, Operands::rrr(rd, rs1, rs2))
    }

    pub fn sub(self, rd: u8, rs1: u8, rs2: u8) -> Self {
        self.push(Mnemonic::Sub, Operands::rrr(rd, rs1, rs2))
    }

    pub fn slt(self, rd: u8, rs1: u8, rs2: u8) -> Self {
        self.push(Mnemonic::Slt, Operands::rrr(rd, rs1, rs2))
    }

    pub fn addi(self, rd: u8, rs1: u8, imm: i32) -> Self {
        self.push(Mnemonic::Addi, Operands::rri(rd, rs1, imm))
    }

    pub fn subi(self, rd: u8, rs1: u8, imm: i32) -> Self {
        self.push(Mnemonic::Subi, Operands::rri(rd, rs1, imm))
    }

    pub fn andi(self, rd: u8, rs1: u8, imm: i32) -> Self {
        self.push(Mnemonic::Andi, Operands::rri(rd, rs1, imm))
    }

    pub fn slli(self, rd: u8, rs1: u8, imm: i32) -> Self {
        self.push(Mnemonic::Slli, Operands::rri(rd, rs1, imm))
    }

    pub fn lhi(self, rd: u8, imm: i32) -> Self {
        self.push(Mnemonic::Lhi, Operands::rri(rd, 0, imm))
    }

    // --- Memory ---

    pub fn lw(self, rd: u8, offset: i32, base: u8) -> Self {
        self.push(Mnemonic::Lw, Operands::mem(rd, base, offset))
    }

    pub fn lb(self, rd: u8, offset: i32, base: u8) -> Self {
        self.push(Mnemonic::Lb, Operands::mem(rd, base, offset))
    }

    pub fn lbu(self, rd: u8, offset: i32, base: u8) -> Self {
        self.push(Mnemonic::Lbu, Operands::mem(rd, base, offset))
    }

    pub fn sw(self, offset: i32, base: u8, rs: u8) -> Self {
        self.push(Mnemonic::Sw, Operands::mem(rs, base, offset))
    }

    pub fn sb(self, offset: i32, base: u8, rs: u8) -> Self {
        self.push(Mnemonic::Sb, Operands::mem(rs, base, offset))
    }

    pub fn lf(self, fd: u8, offset: i32, base: u8) -> Self {
        self.push(Mnemonic::Lf, Operands::mem(fd, base, offset))
    }

    pub fn ld(self, fd: u8, offset: i32, base: u8) -> Self {
        self.push(Mnemonic::Ld, Operands::mem(fd, base, offset))
    }

    pub fn sf(self, offset: i32, base: u8, fs: u8) -> Self {
        self.push(Mnemonic::Sf, Operands::mem(fs, base, offset))
    }

    pub fn sd(self, offset: i32, base: u8, fs: u8) -> Self {
        self.push(Mnemonic::Sd, Operands::mem(fs, base, offset))
    }

    // --- Floating point ---

    pub fn addf(self, fd: u8, fs1: u8, fs2: u8) -> Self {
        self.push(Mnemonic::Addf, Operands::rrr(fd, fs1, fs2))
    }

    pub fn multf(self, fd: u8, fs1: u8, fs2: u8) -> Self {
        self.push(Mnemonic::Multf, Operands::rrr(fd, fs1, fs2))
    }

    pub fn divf(self, fd: u8, fs1: u8, fs2: u8) -> Self {
        self.push(Mnemonic::Divf, Operands::rrr(fd, fs1, fs2))
    }

    pub fn addd(self, fd: u8, fs1: u8, fs2: u8) -> Self {
        self.push(Mnemonic::Addd, Operands::rrr(fd, fs1, fs2))
    }

    pub fn multd(self, fd: u8, fs1: u8, fs2: u8) -> Self {
        self.push(Mnemonic::Multd, Operands::rrr(fd, fs1, fs2))
    }

    pub fn mult(self, fd: u8, fs1: u8, fs2: u8) -> Self {
        self.push(Mnemonic::Mult, Operands::rrr(fd, fs1, fs2))
    }

    pub fn div(self, fd: u8, fs1: u8, fs2: u8) -> Self {
        self.push(Mnemonic::Div, Operands::rrr(fd, fs1, fs2))
    }

    pub fn cvti2f(self, fd: u8, fs: u8) -> Self {
        self.push(Mnemonic::Cvti2f, Operands::rr(fd, fs))
    }

    pub fn cvtf2d(self, fd: u8, fs: u8) -> Self {
        self.push(Mnemonic::Cvtf2d, Operands::rr(fd, fs))
    }

    pub fn ltf(self, fs1: u8, fs2: u8) -> Self {
        self.push(Mnemonic::Ltf, Operands::cmp(fs1, fs2))
    }

    pub fn movi2fp(self, fd: u8, rs: u8) -> Self {
        self.push(Mnemonic::Movi2fp, Operands::rr(fd, rs))
    }

    pub fn movfp2i(self, rd: u8, fs: u8) -> Self {
        self.push(Mnemonic::Movfp2i, Operands::rr(rd, fs))
    }

    // --- Control ---

    pub fn beqz(self, rs: u8, offset: i32) -> Self {
        self.push(Mnemonic::Beqz, Operands::branch(rs, offset))
    }

    pub fn bnez(self, rs: u8, offset: i32) -> Self {
        self.push(Mnemonic::Bnez, Operands::branch(rs, offset))
    }

    pub fn bfpt(self, offset: i32) -> Self {
        self.push(Mnemonic::Bfpt, Operands::branch(0, offset))
    }

    pub fn bfpf(self, offset: i32) -> Self {
        self.push(Mnemonic::Bfpf, Operands::branch(0, offset))
    }

    pub fn j(self, offset: i32) -> Self {
        self.push(Mnemonic::J, Operands::imm(offset))
    }

    pub fn jal(self, offset: i32) -> Self {
        self.push(Mnemonic::Jal, Operands::imm(offset))
    }

    pub fn jalr(self, rs: u8) -> Self {
        self.push(Mnemonic::Jalr, Operands::branch(rs, 0))
    }

    pub fn jr(self, rs: u8) -> Self {
        self.push(Mnemonic::Jr, Operands::branch(rs, 0))
    }

    pub fn trap(self, code: i32) -> Self {
        self.push(Mnemonic::Trap, Operands::imm(code))
    }
}
