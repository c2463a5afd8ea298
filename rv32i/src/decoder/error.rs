/// Decoder errors
///
/// These never escape the crate's public `decode` entry point; the
/// disassembler maps every error to the illegal-instruction sentinel line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("unknown opcode 0x{0:02x}")]
    UnknownOpcode(u8),

    #[error("unassigned funct3/funct7 combination: funct3={funct3}, funct7=0x{funct7:02x}")]
    InvalidFunct { funct3: u8, funct7: u8 },

    #[error("unassigned SYSTEM encoding 0x{0:08x}")]
    InvalidSystem(u32),
}
