//! Byte-addressable little-endian memory store
//!
//! This is the fetch collaborator for the disassembler: it supplies 32-bit
//! instruction words via [`Memory::get32`] and never reports a failure to
//! the decoder. Out-of-range accesses are logged and read back as zero.
//!
//! Valid addresses are `[0, size)`; `size` is rounded up to the next
//! multiple of 16 so the dump always prints whole lines.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::warn;

use crate::hex;

/// Fill byte for freshly allocated memory, chosen to be easy to spot in dumps
const FILL_BYTE: u8 = 0xA5;

/// Errors from loading a program image
#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    #[error("can't open file '{path}' for reading")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("program image of {image} bytes does not fit in {size} bytes of memory")]
    ImageTooLarge { image: usize, size: u32 },
}

/// A byte-addressable memory image
#[derive(Debug, Clone)]
pub struct Memory {
    bytes: Vec<u8>,
}

impl Memory {
    /// Allocate `size` bytes (rounded up to a multiple of 16) filled with 0xa5
    pub fn new(size: u32) -> Self {
        let size = size.checked_add(15).map_or(u32::MAX & !15, |s| s & !15);
        Self { bytes: vec![FILL_BYTE; size as usize] }
    }

    /// Total memory size in bytes
    pub fn size(&self) -> u32 {
        self.bytes.len() as u32
    }

    /// True (with a logged warning) when `addr` falls outside `[0, size)`
    fn check_illegal(&self, addr: u32) -> bool {
        if addr as usize >= self.bytes.len() {
            warn!(addr = %hex::to_hex0x32(addr), "address out of range");
            return true;
        }
        false
    }

    /// Read one byte; out-of-range reads yield 0
    pub fn get8(&self, addr: u32) -> u8 {
        if self.check_illegal(addr) {
            return 0;
        }
        self.bytes[addr as usize]
    }

    /// Read a little-endian halfword
    pub fn get16(&self, addr: u32) -> u16 {
        let low = self.get8(addr) as u16;
        let high = self.get8(addr.wrapping_add(1)) as u16;
        (high << 8) | low
    }

    /// Read a little-endian word
    pub fn get32(&self, addr: u32) -> u32 {
        let low = self.get16(addr) as u32;
        let high = self.get16(addr.wrapping_add(2)) as u32;
        (high << 16) | low
    }

    /// Read one byte, sign-extended to 32 bits
    pub fn get8_sx(&self, addr: u32) -> i32 {
        self.get8(addr) as i8 as i32
    }

    /// Read a halfword, sign-extended to 32 bits
    pub fn get16_sx(&self, addr: u32) -> i32 {
        self.get16(addr) as i16 as i32
    }

    /// Read a word as a signed value
    pub fn get32_sx(&self, addr: u32) -> i32 {
        self.get32(addr) as i32
    }

    /// Write one byte; out-of-range writes are dropped
    pub fn set8(&mut self, addr: u32, val: u8) {
        if self.check_illegal(addr) {
            return;
        }
        self.bytes[addr as usize] = val;
    }

    /// Write a little-endian halfword
    pub fn set16(&mut self, addr: u32, val: u16) {
        self.set8(addr, val as u8);
        self.set8(addr.wrapping_add(1), (val >> 8) as u8);
    }

    /// Write a little-endian word
    pub fn set32(&mut self, addr: u32, val: u32) {
        self.set16(addr, val as u16);
        self.set16(addr.wrapping_add(2), (val >> 16) as u16);
    }

    /// Load a raw binary image from `path` into memory starting at address 0
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), MemoryError> {
        let path = path.as_ref();
        let open_err = |source| MemoryError::Open {
            path: path.display().to_string(),
            source,
        };

        let mut file = File::open(path).map_err(open_err)?;
        let mut image = Vec::new();
        file.read_to_end(&mut image).map_err(open_err)?;

        if image.len() > self.bytes.len() {
            return Err(MemoryError::ImageTooLarge { image: image.len(), size: self.size() });
        }

        self.bytes[..image.len()].copy_from_slice(&image);
        Ok(())
    }

    /// Format the whole memory as a hex + ASCII dump, 16 bytes per line:
    ///
    /// ```text
    /// 00000000: a5 a5 a5 a5 a5 a5 a5 a5  a5 a5 a5 a5 a5 a5 a5 a5 *................*
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (line, chunk) in self.bytes.chunks(16).enumerate() {
            let addr = (line * 16) as u32;
            out.push_str(&hex::to_hex32(addr));
            out.push(':');

            let mut ascii = String::with_capacity(16);
            for (i, &byte) in chunk.iter().enumerate() {
                if i == 8 {
                    out.push(' ');
                }
                out.push(' ');
                out.push_str(&hex::to_hex8(byte));

                ascii.push(if byte.is_ascii_graphic() || byte == b' ' {
                    byte as char
                } else {
                    '.'
                });
            }
            out.push_str(&format!(" *{ascii}*\n"));
        }
        out
    }
}
