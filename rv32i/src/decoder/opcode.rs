//! RV32I opcode definitions
//!
//! Opcodes are the lower 7 bits of a 32-bit instruction and determine the
//! instruction's format and major category. The supported subset is RV32I
//! plus the SYSTEM opcode carrying the Zicsr instructions.
//!
//! Looking at bits [6:2] (every 32-bit opcode ends in `11`):
//!
//! - `00000` (0x03) → LOAD   - load from memory
//! - `00100` (0x13) → OP-IMM - arithmetic with immediate
//! - `00101` (0x17) → AUIPC  - add upper immediate to PC
//! - `01000` (0x23) → STORE  - store to memory
//! - `01100` (0x33) → OP     - register-register ops
//! - `01101` (0x37) → LUI    - load upper immediate
//! - `11000` (0x63) → BRANCH - conditional branches
//! - `11001` (0x67) → JALR   - jump and link register
//! - `11011` (0x6F) → JAL    - jump and link
//! - `11100` (0x73) → SYSTEM - ecall, ebreak, csr ops

use std::fmt;

/// RV32I opcodes (bits [6:0] of a 32-bit instruction)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// Load instructions (lb, lh, lw, lbu, lhu)
    Load = 0b0000011,

    /// Immediate arithmetic/logic operations (addi, slti, xori, etc.)
    OpImm = 0b0010011,

    /// Add upper immediate to PC (auipc)
    Auipc = 0b0010111,

    /// Store instructions (sb, sh, sw)
    Store = 0b0100011,

    /// Register-register operations (add, sub, sll, etc.)
    Op = 0b0110011,

    /// Load upper immediate (lui)
    Lui = 0b0110111,

    /// Branch instructions (beq, bne, blt, etc.)
    Branch = 0b1100011,

    /// Jump and link register (jalr)
    Jalr = 0b1100111,

    /// Jump and link (jal)
    Jal = 0b1101111,

    /// System instructions (ecall, ebreak, csr ops)
    System = 0b1110011,
}

impl Opcode {
    /// Classify a raw 7-bit opcode field, `None` for anything outside the
    /// supported subset
    pub fn from_bits(value: u8) -> Option<Self> {
        match value {
            0b0000011 => Some(Opcode::Load),
            0b0010011 => Some(Opcode::OpImm),
            0b0010111 => Some(Opcode::Auipc),
            0b0100011 => Some(Opcode::Store),
            0b0110011 => Some(Opcode::Op),
            0b0110111 => Some(Opcode::Lui),
            0b1100011 => Some(Opcode::Branch),
            0b1100111 => Some(Opcode::Jalr),
            0b1101111 => Some(Opcode::Jal),
            0b1110011 => Some(Opcode::System),
            _ => None,
        }
    }

    /// Get the numeric value of the opcode
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} (0x{:02x})", self, self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bits_roundtrip() {
        let all = [
            Opcode::Load,
            Opcode::OpImm,
            Opcode::Auipc,
            Opcode::Store,
            Opcode::Op,
            Opcode::Lui,
            Opcode::Branch,
            Opcode::Jalr,
            Opcode::Jal,
            Opcode::System,
        ];
        for opcode in all {
            assert_eq!(Opcode::from_bits(opcode.value()), Some(opcode));
        }
    }

    #[test]
    fn test_from_bits_rejects_unsupported() {
        // fence, AMO and the RV64-only opcodes are outside the subset
        for raw in [0b0001111u8, 0b0101111, 0b0011011, 0b0111011, 0, 0x7F] {
            assert_eq!(Opcode::from_bits(raw), None, "opcode 0x{raw:02x}");
        }
    }
}
