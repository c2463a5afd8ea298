//! RV32I instruction decoder and disassembler
//!
//! We first go over some terminology to make it easier to parse this crate.
//!
//! An instruction is a single command that tells the CPU what to do.
//! RV32I instructions can be grouped in two different ways:
//!     - Extension: By functionality. This crate covers the RV32I base set plus the Zicsr CSR instructions.
//!     - Instruction formats: By how they are encoded. Example of formats are I-type (immediate operations and loads), R-type (register-to-register operations), S-type (store operations).
//! This crate groups instructions by instruction format because we are implementing a decoder.
//!
//! **Example**
//!
//! [0000000 | 00011 | 00010 | 000 | 00001 | 0110011]
//! [funct7  | rs2   | rs1   |funct3| rd   | opcode ]
//!
//! - The base opcode is `0110011` which tells us that it is an R-type instruction, ie it works with 2 source registers and a destination register.
//! - This by itself does not tell us whether it is an ADD, SUB, AND, OR, XOR.
//! - To know the exact operation, we need to look at `funct3` and `funct7`.
//! - `funct3` is `000` and that lets us know that it is either ADD or SUB.
//! - `funct7` is `0000000` and that lets us know that it is `ADD`. If `funct7` was `0100000` then we would know it is a SUB.
//!
//! Disassembly also needs the address the word was fetched from, because branch
//! and jump targets are printed as absolute addresses rather than raw
//! PC-relative offsets.

pub mod decoder;
pub mod disasm;
pub mod hex;
pub mod memory;

pub use decoder::{decode_instruction, DecodeError, Instruction};
pub use disasm::ILLEGAL_INSN;
pub use memory::{Memory, MemoryError};

/// Disassemble one 32-bit instruction word fetched from `addr`.
///
/// This is total: every possible word yields a line of text. Encodings
/// outside the supported subset render as [`ILLEGAL_INSN`] rather than an
/// error.
pub fn decode(addr: u32, word: u32) -> String {
    match decoder::decode_instruction(word) {
        Ok(inst) => disasm::render(addr, &inst),
        Err(_) => ILLEGAL_INSN.to_string(),
    }
}
