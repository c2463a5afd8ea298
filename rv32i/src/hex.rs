//! Fixed-width lowercase hexadecimal formatting
//!
//! Shared by the disassembly renderer (CSR addresses, upper immediates,
//! branch targets) and the memory dump. Widths follow the field sizes they
//! render: 2 digits for bytes, 3 for 12-bit CSR addresses, 5 for 20-bit
//! upper immediates, 8 for 32-bit words and addresses.

/// Format an 8-bit value as 2 lowercase hex digits
pub fn to_hex8(i: u8) -> String {
    format!("{i:02x}")
}

/// Format a 12-bit value as 3 lowercase hex digits
pub fn to_hex12(i: u16) -> String {
    format!("{:03x}", i & 0xFFF)
}

/// Format a 20-bit value as 5 lowercase hex digits
pub fn to_hex20(i: u32) -> String {
    format!("{:05x}", i & 0xF_FFFF)
}

/// Format a 32-bit value as 8 lowercase hex digits
pub fn to_hex32(i: u32) -> String {
    format!("{i:08x}")
}

/// [`to_hex8`] with a `0x` prefix
pub fn to_hex0x8(i: u8) -> String {
    format!("0x{}", to_hex8(i))
}

/// [`to_hex12`] with a `0x` prefix
pub fn to_hex0x12(i: u16) -> String {
    format!("0x{}", to_hex12(i))
}

/// [`to_hex20`] with a `0x` prefix
pub fn to_hex0x20(i: u32) -> String {
    format!("0x{}", to_hex20(i))
}

/// [`to_hex32`] with a `0x` prefix
pub fn to_hex0x32(i: u32) -> String {
    format!("0x{}", to_hex32(i))
}
