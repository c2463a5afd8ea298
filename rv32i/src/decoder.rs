//! 32-bit RV32I instruction decoder
//!
//! The public API of this module is [`decode_instruction`], the
//! [`Instruction`] enum it produces and the immediate extraction helpers.
//!
//! Decoding walks a three-level decision tree: the opcode picks the
//! instruction family, `funct3` picks the operation within the family, and
//! for the families that overload `funct3` (add/sub, srl/sra, srli/srai)
//! `funct7` disambiguates. Anything that falls off the tree is a
//! [`DecodeError`]; the disassembly layer turns that into the illegal
//! instruction sentinel.

mod error;
mod instruction;
mod opcode;

pub use error::DecodeError;
pub use instruction::Instruction;
pub use opcode::Opcode;

/// Bit masks for field extraction
const MASK1: u32 = 0b1; // 1-bit mask
const MASK3: u32 = 0b111; // 3-bit mask
const MASK4: u32 = 0b1111; // 4-bit mask
const MASK5: u32 = 0b1_1111; // 5-bit mask
const MASK6: u32 = 0b11_1111; // 6-bit mask
const MASK7: u32 = 0b111_1111; // 7-bit mask
const MASK8: u32 = 0b1111_1111; // 8-bit mask
const MASK10: u32 = 0b11_1111_1111; // 10-bit mask
const MASK12: u32 = 0b1111_1111_1111; // 12-bit mask

/// Decode a 32-bit RV32I instruction word
pub fn decode_instruction(word: u32) -> Result<Instruction, DecodeError> {
    // Parse all instruction fields up front
    let encoded = EncodedInstruction::new(word);

    // Decode based on opcode enum
    match encoded.opcode {
        Some(Opcode::Lui) => decode_lui_instruction(&encoded),
        Some(Opcode::Auipc) => decode_auipc_instruction(&encoded),
        Some(Opcode::Jal) => decode_jal_instruction(&encoded),
        Some(Opcode::Jalr) => decode_jalr_instruction(&encoded),
        Some(Opcode::Branch) => decode_branch_instruction(&encoded),
        Some(Opcode::Load) => decode_load_instruction(&encoded),
        Some(Opcode::Store) => decode_store_instruction(&encoded),
        Some(Opcode::OpImm) => decode_op_imm_instruction(&encoded),
        Some(Opcode::Op) => decode_op_instruction(&encoded),
        Some(Opcode::System) => decode_system_instruction(&encoded),

        None => Err(DecodeError::UnknownOpcode(encoded.opcode_raw)),
    }
}

/// Extract the I-type immediate: bits [31:20], sign-extended from bit 11
pub fn extract_i_immediate(word: u32) -> i32 {
    let imm = (word >> 20) & MASK12;

    // sign-extend from 12 bits
    ((imm as i32) << 20) >> 20
}

/// Extract the S-type immediate: bits [31:25] and [11:7], sign-extended from bit 11
pub fn extract_s_immediate(word: u32) -> i32 {
    let imm11_5 = ((word >> 25) & MASK7) << 5;
    let imm4_0 = (word >> 7) & MASK5;

    let imm = imm11_5 | imm4_0;

    // sign-extend from 12 bits
    ((imm as i32) << 20) >> 20
}

/// Extract the B-type immediate: 13-bit even branch offset, sign-extended from bit 12
pub fn extract_b_immediate(word: u32) -> i32 {
    let imm12 = ((word >> 31) & MASK1) << 12;
    let imm11 = ((word >> 7) & MASK1) << 11;
    let imm10_5 = ((word >> 25) & MASK6) << 5;
    let imm4_1 = ((word >> 8) & MASK4) << 1;

    let imm = imm12 | imm11 | imm10_5 | imm4_1;

    // sign-extend from 13 bits
    ((imm as i32) << 19) >> 19
}

/// Extract the U-type immediate: bits [31:12] in place, low 12 bits zero
pub fn extract_u_immediate(word: u32) -> i32 {
    (word & 0xFFFF_F000) as i32
}

/// Extract the J-type immediate: 21-bit even jump offset, sign-extended from bit 20
pub fn extract_j_immediate(word: u32) -> i32 {
    let imm20 = ((word >> 31) & MASK1) << 20;
    let imm19_12 = ((word >> 12) & MASK8) << 12;
    let imm11 = ((word >> 20) & MASK1) << 11;
    let imm10_1 = ((word >> 21) & MASK10) << 1;

    let imm = imm20 | imm19_12 | imm11 | imm10_1;

    // sign-extend from 21 bits
    ((imm as i32) << 11) >> 11
}

/// Parsed fields from a 32-bit RV32I instruction
///
/// This can be seen as a union of all of the formats; the decoder then picks
/// the relevant fields based on the opcode.
///
/// This greatly simplifies the decoding methods.
///
/// Note: This does mean that redundant work is being done, for example the
/// S-type immediate is extracted for every word even though only stores use
/// it. This redundant work is acceptable because bitwise operations are fast.
#[derive(Debug, Clone, PartialEq)]
struct EncodedInstruction {
    /// Original 32-bit instruction word
    raw: u32,

    /// Opcode field (bits [6:0]) as raw value
    opcode_raw: u8,

    /// Opcode as enum (if recognized)
    opcode: Option<Opcode>,

    /// Destination register (bits [11:7])
    rd: u8,

    /// Function code 3 (bits [14:12])
    funct3: u8,

    /// Source register 1 (bits [19:15])
    rs1: u8,

    /// Source register 2 (bits [24:20])
    rs2: u8,

    /// Function code 7 (bits [31:25])
    funct7: u8,

    /// I-type immediate (bits [31:20], sign-extended)
    i_immediate: i32,

    /// S-type immediate (split across bits [31:25] and [11:7], sign-extended)
    s_immediate: i32,

    /// B-type immediate (branch offset, sign-extended)
    b_immediate: i32,

    /// U-type immediate (bits [31:12] in place, low 12 bits zero)
    u_immediate: i32,

    /// J-type immediate (jump offset, sign-extended)
    j_immediate: i32,

    /// CSR address (bits [31:20]) for system instructions
    csr: u16,

    /// Shift amount (5-bit, bits [24:20]); the low five bits of the I-type
    /// immediate, so it equals the raw immediate reduced mod 32
    shamt: u8,
}

impl EncodedInstruction {
    /*
    Below are the five instruction formats that all supported 32-bit
    instructions fit into.

    Note: The same field is always in the same bit position,
    i.e. rd is always bits 7 to 11 if it is present.

    R-type | funct7 |  rs2 |  rs1 | funct3 |   rd  | opcode |
           | 31-25  |24-20 |19-15 | 14-12  | 11-7  | 6-0    |
    --------------------------------------------------------

    I-type |   imm[11:0]    |  rs1 | funct3 |   rd  | opcode |
           |   31-20        |19-15 | 14-12  | 11-7  | 6-0    |
    --------------------------------------------------------

    S-type | imm[11:5] |  rs2 |  rs1 | funct3 | imm[4:0] | opcode |
           | 31-25     |24-20 |19-15 | 14-12  | 11-7     | 6-0    |
    --------------------------------------------------------------

    B-type | imm[12] | imm[10:5] |  rs2 |  rs1 | funct3 | imm[4:1|11] | opcode |
           |   31    | 30-25     |24-20 |19-15 | 14-12  | 11-7        | 6-0    |
    ---------------------------------------------------------------------------

    U-type |                imm[31:12]                 |   rd  | opcode |
           |                31-12                      | 11-7  | 6-0    |
    --------------------------------------------------------------------

    J-type | imm[20] | imm[10:1] | imm[11] | imm[19:12] |   rd  | opcode |
           |   31    | 30-21     |   20    | 19-12      | 11-7  | 6-0    |
    --------------------------------------------------------------------
    */
    fn new(raw: u32) -> Self {
        // Opcode is always the first 7 bits
        let opcode_raw = (raw & MASK7) as u8;
        // rd is always the next 5 bits
        let rd = ((raw >> 7) & MASK5) as u8;
        // funct3 is always the next 3 bits
        let funct3 = ((raw >> 12) & MASK3) as u8;
        // rs1 is always the next 5 bits
        let rs1 = ((raw >> 15) & MASK5) as u8;
        // rs2 is always the next 5 bits
        let rs2 = ((raw >> 20) & MASK5) as u8;
        // funct7 is always the next 7 bits
        let funct7 = ((raw >> 25) & MASK7) as u8;

        let opcode = Opcode::from_bits(opcode_raw);

        // Extract all possible immediate formats
        let i_immediate = extract_i_immediate(raw);
        let s_immediate = extract_s_immediate(raw);
        let b_immediate = extract_b_immediate(raw);
        let u_immediate = extract_u_immediate(raw);
        let j_immediate = extract_j_immediate(raw);

        // Extract other specialized fields
        let csr = ((raw >> 20) & MASK12) as u16; // 12-bit CSR address, no sign extension
        let shamt = ((raw >> 20) & MASK5) as u8;

        Self {
            raw,
            opcode_raw,
            opcode,
            rd,
            funct3,
            rs1,
            rs2,
            funct7,
            i_immediate,
            s_immediate,
            b_immediate,
            u_immediate,
            j_immediate,
            csr,
            shamt,
        }
    }
}

/// Decode the LUI instruction
///
/// Uses the U-type format.
fn decode_lui_instruction(encoded: &EncodedInstruction) -> Result<Instruction, DecodeError> {
    Ok(Instruction::LUI { rd: encoded.rd, imm: encoded.u_immediate })
}

/// Decode the AUIPC instruction
///
/// Uses the U-type format.
fn decode_auipc_instruction(encoded: &EncodedInstruction) -> Result<Instruction, DecodeError> {
    Ok(Instruction::AUIPC { rd: encoded.rd, imm: encoded.u_immediate })
}

/// Decode the JAL instruction
///
/// Uses the J-type format.
fn decode_jal_instruction(encoded: &EncodedInstruction) -> Result<Instruction, DecodeError> {
    Ok(Instruction::JAL { rd: encoded.rd, offset: encoded.j_immediate })
}

/// Decode the JALR instruction
///
/// Uses the I-type format; `funct3` must be zero.
fn decode_jalr_instruction(encoded: &EncodedInstruction) -> Result<Instruction, DecodeError> {
    if encoded.funct3 != 0b000 {
        return Err(DecodeError::InvalidFunct {
            funct3: encoded.funct3,
            funct7: encoded.funct7,
        });
    }
    Ok(Instruction::JALR { rd: encoded.rd, rs1: encoded.rs1, offset: encoded.i_immediate })
}

/// Decode BRANCH instructions
///
/// Uses the B-type format.
fn decode_branch_instruction(encoded: &EncodedInstruction) -> Result<Instruction, DecodeError> {
    let rs1 = encoded.rs1;
    let rs2 = encoded.rs2;
    let offset = encoded.b_immediate;

    match encoded.funct3 {
        0b000 => Ok(Instruction::BEQ { rs1, rs2, offset }),
        0b001 => Ok(Instruction::BNE { rs1, rs2, offset }),
        0b100 => Ok(Instruction::BLT { rs1, rs2, offset }),
        0b101 => Ok(Instruction::BGE { rs1, rs2, offset }),
        0b110 => Ok(Instruction::BLTU { rs1, rs2, offset }),
        0b111 => Ok(Instruction::BGEU { rs1, rs2, offset }),
        funct3 => Err(DecodeError::InvalidFunct { funct3, funct7: encoded.funct7 }),
    }
}

/// Decode LOAD instructions
///
/// Uses the I-type format.
fn decode_load_instruction(encoded: &EncodedInstruction) -> Result<Instruction, DecodeError> {
    let rd = encoded.rd;
    let rs1 = encoded.rs1;
    let offset = encoded.i_immediate;

    match encoded.funct3 {
        0b000 => Ok(Instruction::LB { rd, rs1, offset }),
        0b001 => Ok(Instruction::LH { rd, rs1, offset }),
        0b010 => Ok(Instruction::LW { rd, rs1, offset }),
        0b100 => Ok(Instruction::LBU { rd, rs1, offset }),
        0b101 => Ok(Instruction::LHU { rd, rs1, offset }),
        funct3 => Err(DecodeError::InvalidFunct { funct3, funct7: encoded.funct7 }),
    }
}

/// Decode STORE instructions
///
/// Uses the S-type format.
fn decode_store_instruction(encoded: &EncodedInstruction) -> Result<Instruction, DecodeError> {
    let rs1 = encoded.rs1;
    let rs2 = encoded.rs2;
    let offset = encoded.s_immediate;

    match encoded.funct3 {
        0b000 => Ok(Instruction::SB { rs1, rs2, offset }),
        0b001 => Ok(Instruction::SH { rs1, rs2, offset }),
        0b010 => Ok(Instruction::SW { rs1, rs2, offset }),
        funct3 => Err(DecodeError::InvalidFunct { funct3, funct7: encoded.funct7 }),
    }
}

/// Decode OP-IMM instructions (addi, slti, sltiu, xori, ori, andi, slli, srli, srai)
///
/// Uses the I-type format.
///
/// **Special handling for shift instructions (SLLI, SRLI, SRAI):**
/// - the shift amount is the low five bits of the immediate field
/// - `funct7` (bits [31:25]) distinguishes SRLI (0000000) from SRAI (0100000)
fn decode_op_imm_instruction(encoded: &EncodedInstruction) -> Result<Instruction, DecodeError> {
    let rd = encoded.rd;
    let rs1 = encoded.rs1;
    let imm = encoded.i_immediate;
    let shamt = encoded.shamt;

    match encoded.funct3 {
        0b000 => Ok(Instruction::ADDI { rd, rs1, imm }),
        0b001 => Ok(Instruction::SLLI { rd, rs1, shamt }),
        0b010 => Ok(Instruction::SLTI { rd, rs1, imm }),
        0b011 => Ok(Instruction::SLTIU { rd, rs1, imm }),
        0b100 => Ok(Instruction::XORI { rd, rs1, imm }),
        0b101 => match encoded.funct7 {
            0b000_0000 => Ok(Instruction::SRLI { rd, rs1, shamt }),
            0b010_0000 => Ok(Instruction::SRAI { rd, rs1, shamt }),
            funct7 => Err(DecodeError::InvalidFunct { funct3: 0b101, funct7 }),
        },
        0b110 => Ok(Instruction::ORI { rd, rs1, imm }),
        0b111 => Ok(Instruction::ANDI { rd, rs1, imm }),
        funct3 => Err(DecodeError::InvalidFunct { funct3, funct7: encoded.funct7 }),
    }
}

/// Decode OP instructions (register-register operations)
///
/// Uses the R-type format.
fn decode_op_instruction(encoded: &EncodedInstruction) -> Result<Instruction, DecodeError> {
    let rd = encoded.rd;
    let rs1 = encoded.rs1;
    let rs2 = encoded.rs2;

    match (encoded.funct3, encoded.funct7) {
        (0b000, 0b000_0000) => Ok(Instruction::ADD { rd, rs1, rs2 }),
        (0b000, 0b010_0000) => Ok(Instruction::SUB { rd, rs1, rs2 }),
        (0b001, 0b000_0000) => Ok(Instruction::SLL { rd, rs1, rs2 }),
        (0b010, 0b000_0000) => Ok(Instruction::SLT { rd, rs1, rs2 }),
        (0b011, 0b000_0000) => Ok(Instruction::SLTU { rd, rs1, rs2 }),
        (0b100, 0b000_0000) => Ok(Instruction::XOR { rd, rs1, rs2 }),
        (0b101, 0b000_0000) => Ok(Instruction::SRL { rd, rs1, rs2 }),
        (0b101, 0b010_0000) => Ok(Instruction::SRA { rd, rs1, rs2 }),
        (0b110, 0b000_0000) => Ok(Instruction::OR { rd, rs1, rs2 }),
        (0b111, 0b000_0000) => Ok(Instruction::AND { rd, rs1, rs2 }),

        (funct3, funct7) => Err(DecodeError::InvalidFunct { funct3, funct7 }),
    }
}

/// Decode SYSTEM instructions
///
/// Uses the I-type format layout. `ecall` and `ebreak` are matched against
/// their exact full-word encodings; everything else dispatches on `funct3`
/// to one of the Zicsr instructions. The CSR immediate forms carry a 5-bit
/// zero-extended immediate in the rs1 field rather than a register.
fn decode_system_instruction(encoded: &EncodedInstruction) -> Result<Instruction, DecodeError> {
    const ECALL_WORD: u32 = 0x0000_0073;
    const EBREAK_WORD: u32 = 0x0010_0073;

    match encoded.raw {
        ECALL_WORD => return Ok(Instruction::ECALL),
        EBREAK_WORD => return Ok(Instruction::EBREAK),
        _ => {}
    }

    let rd = encoded.rd;
    let rs1 = encoded.rs1;
    let csr = encoded.csr;
    let uimm = encoded.rs1; // immediate forms reuse the rs1 field

    match encoded.funct3 {
        0b001 => Ok(Instruction::CSRRW { rd, rs1, csr }),
        0b010 => Ok(Instruction::CSRRS { rd, rs1, csr }),
        0b011 => Ok(Instruction::CSRRC { rd, rs1, csr }),
        0b101 => Ok(Instruction::CSRRWI { rd, uimm, csr }),
        0b110 => Ok(Instruction::CSRRSI { rd, uimm, csr }),
        0b111 => Ok(Instruction::CSRRCI { rd, uimm, csr }),
        // funct3 0 here is a non-canonical ecall/ebreak word; funct3 4 is unassigned
        _ => Err(DecodeError::InvalidSystem(encoded.raw)),
    }
}
