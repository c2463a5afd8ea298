//! Rendering of decoded instructions into canonical assembly text
//!
//! One routine per instruction shape. The formatting conventions are fixed:
//!
//! - the mnemonic is left-justified in an 8-character column so operands
//!   line up across a listing; `ecall`/`ebreak` are emitted bare
//! - registers render as `x0`..`x31`
//! - loads, stores and `jalr` use base-plus-displacement form `imm(xN)`
//! - `lui`/`auipc` render the 20-bit upper immediate as `0x` + 5 hex digits
//! - `jal` and branches render the absolute target address (instruction
//!   address plus offset, wrapping) as `0x` + 8 hex digits
//! - CSR addresses render as `0x` + 3 hex digits

use crate::decoder::Instruction;
use crate::hex;

/// Sentinel line returned for any word outside the supported encoding set
pub const ILLEGAL_INSN: &str = "ERROR: UNIMPLEMENTED INSTRUCTION";

/// Mnemonic column width
const MNEMONIC_WIDTH: usize = 8;

/// Render a decoded instruction fetched from `addr` as one line of text.
///
/// `addr` only matters for `jal` and the branches, whose PC-relative
/// offsets are rendered as absolute targets.
pub fn render(addr: u32, inst: &Instruction) -> String {
    use Instruction::*;

    let m = inst.mnemonic();
    match *inst {
        LUI { rd, imm } | AUIPC { rd, imm } => render_utype(m, rd, imm),
        JAL { rd, offset } => render_jal(addr, rd, offset),
        JALR { rd, rs1, offset } => render_jalr(rd, rs1, offset),

        BEQ { rs1, rs2, offset }
        | BNE { rs1, rs2, offset }
        | BLT { rs1, rs2, offset }
        | BGE { rs1, rs2, offset }
        | BLTU { rs1, rs2, offset }
        | BGEU { rs1, rs2, offset } => render_btype(addr, m, rs1, rs2, offset),

        LB { rd, rs1, offset }
        | LH { rd, rs1, offset }
        | LW { rd, rs1, offset }
        | LBU { rd, rs1, offset }
        | LHU { rd, rs1, offset } => render_itype_load(m, rd, rs1, offset),

        SB { rs1, rs2, offset } | SH { rs1, rs2, offset } | SW { rs1, rs2, offset } => {
            render_stype(m, rs1, rs2, offset)
        }

        ADDI { rd, rs1, imm }
        | SLTI { rd, rs1, imm }
        | SLTIU { rd, rs1, imm }
        | XORI { rd, rs1, imm }
        | ORI { rd, rs1, imm }
        | ANDI { rd, rs1, imm } => render_itype_alu(m, rd, rs1, imm),

        SLLI { rd, rs1, shamt } | SRLI { rd, rs1, shamt } | SRAI { rd, rs1, shamt } => {
            render_itype_shift(m, rd, rs1, shamt)
        }

        ADD { rd, rs1, rs2 }
        | SUB { rd, rs1, rs2 }
        | SLL { rd, rs1, rs2 }
        | SLT { rd, rs1, rs2 }
        | SLTU { rd, rs1, rs2 }
        | XOR { rd, rs1, rs2 }
        | SRL { rd, rs1, rs2 }
        | SRA { rd, rs1, rs2 }
        | OR { rd, rs1, rs2 }
        | AND { rd, rs1, rs2 } => render_rtype(m, rd, rs1, rs2),

        ECALL | EBREAK => m.to_string(),

        CSRRW { rd, rs1, csr } | CSRRS { rd, rs1, csr } | CSRRC { rd, rs1, csr } => {
            render_csr(m, rd, rs1, csr)
        }
        CSRRWI { rd, uimm, csr } | CSRRSI { rd, uimm, csr } | CSRRCI { rd, uimm, csr } => {
            render_csr_imm(m, rd, uimm, csr)
        }
    }
}

/// Left-justify a mnemonic into its fixed column
fn render_mnemonic(m: &str) -> String {
    format!("{m:<MNEMONIC_WIDTH$}")
}

/// Register operand, e.g. `x10`
fn render_reg(r: u8) -> String {
    format!("x{r}")
}

/// Base-plus-displacement operand, e.g. `-12(x2)`
fn render_base_disp(base: u8, disp: i32) -> String {
    format!("{disp}({})", render_reg(base))
}

fn render_utype(m: &str, rd: u8, imm: i32) -> String {
    // print only the 20-bit field, not the shifted value
    format!("{}{},{}", render_mnemonic(m), render_reg(rd), hex::to_hex0x20((imm as u32) >> 12))
}

fn render_jal(addr: u32, rd: u8, offset: i32) -> String {
    let target = addr.wrapping_add(offset as u32);
    format!("{}{},{}", render_mnemonic("jal"), render_reg(rd), hex::to_hex0x32(target))
}

fn render_jalr(rd: u8, rs1: u8, offset: i32) -> String {
    // the target depends on a register value, so the raw offset is shown
    format!("{}{},{}", render_mnemonic("jalr"), render_reg(rd), render_base_disp(rs1, offset))
}

fn render_btype(addr: u32, m: &str, rs1: u8, rs2: u8, offset: i32) -> String {
    let target = addr.wrapping_add(offset as u32);
    format!(
        "{}{},{},{}",
        render_mnemonic(m),
        render_reg(rs1),
        render_reg(rs2),
        hex::to_hex0x32(target)
    )
}

fn render_itype_load(m: &str, rd: u8, rs1: u8, offset: i32) -> String {
    format!("{}{},{}", render_mnemonic(m), render_reg(rd), render_base_disp(rs1, offset))
}

fn render_stype(m: &str, rs1: u8, rs2: u8, offset: i32) -> String {
    // the stored register comes first, then the address operand
    format!("{}{},{}", render_mnemonic(m), render_reg(rs2), render_base_disp(rs1, offset))
}

fn render_itype_alu(m: &str, rd: u8, rs1: u8, imm: i32) -> String {
    format!("{}{},{},{}", render_mnemonic(m), render_reg(rd), render_reg(rs1), imm)
}

fn render_itype_shift(m: &str, rd: u8, rs1: u8, shamt: u8) -> String {
    format!("{}{},{},{}", render_mnemonic(m), render_reg(rd), render_reg(rs1), shamt)
}

fn render_rtype(m: &str, rd: u8, rs1: u8, rs2: u8) -> String {
    format!(
        "{}{},{},{}",
        render_mnemonic(m),
        render_reg(rd),
        render_reg(rs1),
        render_reg(rs2)
    )
}

fn render_csr(m: &str, rd: u8, rs1: u8, csr: u16) -> String {
    format!(
        "{}{},{},{}",
        render_mnemonic(m),
        render_reg(rd),
        hex::to_hex0x12(csr),
        render_reg(rs1)
    )
}

fn render_csr_imm(m: &str, rd: u8, uimm: u8, csr: u16) -> String {
    format!("{}{},{},{}", render_mnemonic(m), render_reg(rd), hex::to_hex0x12(csr), uimm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mnemonic_column_width() {
        assert_eq!(render_mnemonic("lui"), "lui     ");
        assert_eq!(render_mnemonic("csrrwi"), "csrrwi  ");
        // already at the column width: no extra padding
        assert_eq!(render_mnemonic("abcdefgh"), "abcdefgh");
    }

    #[test]
    fn test_base_disp() {
        assert_eq!(render_base_disp(2, 4), "4(x2)");
        assert_eq!(render_base_disp(31, -12), "-12(x31)");
        assert_eq!(render_base_disp(0, 0), "0(x0)");
    }

    #[test]
    fn test_render_zero_operand_instructions_unpadded() {
        assert_eq!(render(0, &Instruction::ECALL), "ecall");
        assert_eq!(render(0, &Instruction::EBREAK), "ebreak");
    }

    #[test]
    fn test_render_rtype_line() {
        let inst = Instruction::ADD { rd: 1, rs1: 2, rs2: 3 };
        assert_eq!(render(0, &inst), "add     x1,x2,x3");
    }

    #[test]
    fn test_render_utype_prints_20_bit_field() {
        let inst = Instruction::LUI { rd: 10, imm: 0x12345000u32 as i32 };
        assert_eq!(render(0, &inst), "lui     x10,0x12345");

        let inst = Instruction::AUIPC { rd: 5, imm: 0 };
        assert_eq!(render(0x100, &inst), "auipc   x5,0x00000");
    }

    #[test]
    fn test_render_branch_target_is_absolute() {
        let inst = Instruction::BEQ { rs1: 1, rs2: 2, offset: -8 };
        assert_eq!(render(0x10, &inst), "beq     x1,x2,0x00000008");
    }

    #[test]
    fn test_render_jal_wraps() {
        let inst = Instruction::JAL { rd: 0, offset: -16 };
        assert_eq!(render(0x4, &inst), "jal     x0,0xfffffff4");
    }

    #[test]
    fn test_render_csr_forms() {
        let inst = Instruction::CSRRW { rd: 5, rs1: 10, csr: 0xF11 };
        assert_eq!(render(0, &inst), "csrrw   x5,0xf11,x10");

        let inst = Instruction::CSRRSI { rd: 5, uimm: 21, csr: 0x340 };
        assert_eq!(render(0, &inst), "csrrsi  x5,0x340,21");
    }
}
