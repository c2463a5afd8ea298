use std::fmt;

/// A fully decoded RV32I (+ Zicsr) instruction
///
/// One variant per instruction, carrying only the fields that shape of
/// instruction actually has. Immediates are stored sign-extended; shift
/// amounts are the low five bits of the raw immediate; the CSR immediate
/// forms carry the 5-bit zero-extended `uimm` taken from the rs1 field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum Instruction {
    // U-type
    LUI { rd: u8, imm: i32 },
    AUIPC { rd: u8, imm: i32 },

    // J-type
    JAL { rd: u8, offset: i32 },

    // I-type jump register
    JALR { rd: u8, rs1: u8, offset: i32 },

    // B-type
    BEQ { rs1: u8, rs2: u8, offset: i32 },
    BNE { rs1: u8, rs2: u8, offset: i32 },
    BLT { rs1: u8, rs2: u8, offset: i32 },
    BGE { rs1: u8, rs2: u8, offset: i32 },
    BLTU { rs1: u8, rs2: u8, offset: i32 },
    BGEU { rs1: u8, rs2: u8, offset: i32 },

    // I-type loads
    LB { rd: u8, rs1: u8, offset: i32 },
    LH { rd: u8, rs1: u8, offset: i32 },
    LW { rd: u8, rs1: u8, offset: i32 },
    LBU { rd: u8, rs1: u8, offset: i32 },
    LHU { rd: u8, rs1: u8, offset: i32 },

    // S-type
    SB { rs1: u8, rs2: u8, offset: i32 },
    SH { rs1: u8, rs2: u8, offset: i32 },
    SW { rs1: u8, rs2: u8, offset: i32 },

    // I-type ALU
    ADDI { rd: u8, rs1: u8, imm: i32 },
    SLTI { rd: u8, rs1: u8, imm: i32 },
    SLTIU { rd: u8, rs1: u8, imm: i32 },
    XORI { rd: u8, rs1: u8, imm: i32 },
    ORI { rd: u8, rs1: u8, imm: i32 },
    ANDI { rd: u8, rs1: u8, imm: i32 },
    SLLI { rd: u8, rs1: u8, shamt: u8 },
    SRLI { rd: u8, rs1: u8, shamt: u8 },
    SRAI { rd: u8, rs1: u8, shamt: u8 },

    // R-type
    ADD { rd: u8, rs1: u8, rs2: u8 },
    SUB { rd: u8, rs1: u8, rs2: u8 },
    SLL { rd: u8, rs1: u8, rs2: u8 },
    SLT { rd: u8, rs1: u8, rs2: u8 },
    SLTU { rd: u8, rs1: u8, rs2: u8 },
    XOR { rd: u8, rs1: u8, rs2: u8 },
    SRL { rd: u8, rs1: u8, rs2: u8 },
    SRA { rd: u8, rs1: u8, rs2: u8 },
    OR { rd: u8, rs1: u8, rs2: u8 },
    AND { rd: u8, rs1: u8, rs2: u8 },

    // SYSTEM / Zicsr
    ECALL,
    EBREAK,
    CSRRW { rd: u8, rs1: u8, csr: u16 },
    CSRRS { rd: u8, rs1: u8, csr: u16 },
    CSRRC { rd: u8, rs1: u8, csr: u16 },
    CSRRWI { rd: u8, uimm: u8, csr: u16 },
    CSRRSI { rd: u8, uimm: u8, csr: u16 },
    CSRRCI { rd: u8, uimm: u8, csr: u16 },
}

impl Instruction {
    /// The assembly mnemonic, e.g. "add", "lw", "beq"
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Instruction::LUI { .. } => "lui",
            Instruction::AUIPC { .. } => "auipc",
            Instruction::JAL { .. } => "jal",
            Instruction::JALR { .. } => "jalr",
            Instruction::BEQ { .. } => "beq",
            Instruction::BNE { .. } => "bne",
            Instruction::BLT { .. } => "blt",
            Instruction::BGE { .. } => "bge",
            Instruction::BLTU { .. } => "bltu",
            Instruction::BGEU { .. } => "bgeu",
            Instruction::LB { .. } => "lb",
            Instruction::LH { .. } => "lh",
            Instruction::LW { .. } => "lw",
            Instruction::LBU { .. } => "lbu",
            Instruction::LHU { .. } => "lhu",
            Instruction::SB { .. } => "sb",
            Instruction::SH { .. } => "sh",
            Instruction::SW { .. } => "sw",
            Instruction::ADDI { .. } => "addi",
            Instruction::SLTI { .. } => "slti",
            Instruction::SLTIU { .. } => "sltiu",
            Instruction::XORI { .. } => "xori",
            Instruction::ORI { .. } => "ori",
            Instruction::ANDI { .. } => "andi",
            Instruction::SLLI { .. } => "slli",
            Instruction::SRLI { .. } => "srli",
            Instruction::SRAI { .. } => "srai",
            Instruction::ADD { .. } => "add",
            Instruction::SUB { .. } => "sub",
            Instruction::SLL { .. } => "sll",
            Instruction::SLT { .. } => "slt",
            Instruction::SLTU { .. } => "sltu",
            Instruction::XOR { .. } => "xor",
            Instruction::SRL { .. } => "srl",
            Instruction::SRA { .. } => "sra",
            Instruction::OR { .. } => "or",
            Instruction::AND { .. } => "and",
            Instruction::ECALL => "ecall",
            Instruction::EBREAK => "ebreak",
            Instruction::CSRRW { .. } => "csrrw",
            Instruction::CSRRS { .. } => "csrrs",
            Instruction::CSRRC { .. } => "csrrc",
            Instruction::CSRRWI { .. } => "csrrwi",
            Instruction::CSRRSI { .. } => "csrrsi",
            Instruction::CSRRCI { .. } => "csrrci",
        }
    }

    /// Get the destination register (rd) if the instruction has one
    pub fn rd(&self) -> Option<u8> {
        match self {
            Instruction::LUI { rd, .. }
            | Instruction::AUIPC { rd, .. }
            | Instruction::JAL { rd, .. }
            | Instruction::JALR { rd, .. }
            | Instruction::LB { rd, .. }
            | Instruction::LH { rd, .. }
            | Instruction::LW { rd, .. }
            | Instruction::LBU { rd, .. }
            | Instruction::LHU { rd, .. }
            | Instruction::ADDI { rd, .. }
            | Instruction::SLTI { rd, .. }
            | Instruction::SLTIU { rd, .. }
            | Instruction::XORI { rd, .. }
            | Instruction::ORI { rd, .. }
            | Instruction::ANDI { rd, .. }
            | Instruction::SLLI { rd, .. }
            | Instruction::SRLI { rd, .. }
            | Instruction::SRAI { rd, .. }
            | Instruction::ADD { rd, .. }
            | Instruction::SUB { rd, .. }
            | Instruction::SLL { rd, .. }
            | Instruction::SLT { rd, .. }
            | Instruction::SLTU { rd, .. }
            | Instruction::XOR { rd, .. }
            | Instruction::SRL { rd, .. }
            | Instruction::SRA { rd, .. }
            | Instruction::OR { rd, .. }
            | Instruction::AND { rd, .. }
            | Instruction::CSRRW { rd, .. }
            | Instruction::CSRRS { rd, .. }
            | Instruction::CSRRC { rd, .. }
            | Instruction::CSRRWI { rd, .. }
            | Instruction::CSRRSI { rd, .. }
            | Instruction::CSRRCI { rd, .. } => Some(*rd),
            _ => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mnemonic() {
        let add = Instruction::ADD { rd: 1, rs1: 2, rs2: 3 };
        assert_eq!(add.mnemonic(), "add");
        assert_eq!(add.to_string(), "add");
        assert_eq!(Instruction::EBREAK.mnemonic(), "ebreak");
    }

    #[test]
    fn test_rd_accessor() {
        assert_eq!(Instruction::LUI { rd: 10, imm: 0 }.rd(), Some(10));
        assert_eq!(Instruction::SW { rs1: 1, rs2: 2, offset: 0 }.rd(), None);
        assert_eq!(Instruction::BEQ { rs1: 1, rs2: 2, offset: 0 }.rd(), None);
        assert_eq!(Instruction::ECALL.rd(), None);
    }
}
