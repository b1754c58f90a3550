//! Flat System Memory.
//!
//! This module implements the memory subsystem. It provides:
//! 1. **Buffer:** Bounds-checked backing storage (`ByteBuffer`).
//! 2. **Typed Access:** Byte, half-word, word, single and double accessors,
//!    all little-endian.
//! 3. **Width Dispatch:** `read`/`write` taking an [`AccessWidth`], used by the
//!    Memory stage to service pending accesses.
//!
//! Addresses are plain byte offsets starting at zero. Alignment is not
//! enforced. Any access whose last byte lies beyond the configured size fails
//! with [`SimError::MemoryOutOfRange`].

/// Bounds-checked byte storage.
pub mod buffer;

use self::buffer::ByteBuffer;
use crate::common::{AccessWidth, SimError};

/// Byte-addressable memory of a fixed size.
#[derive(Clone, Debug)]
pub struct Memory {
    buffer: ByteBuffer,
}

impl Memory {
    /// Creates a zero-filled memory of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            buffer: ByteBuffer::new(size),
        }
    }

    /// Returns the configured size in bytes.
    pub fn size(&self) -> usize {
        self.buffer.len()
    }

    /// Clears the whole memory to zero.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Reads `N` bytes starting at `addr`.
    fn read_array<const N: usize>(&self, addr: u32, width: AccessWidth) -> Result<[u8; N], SimError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.buffer.slice(addr, N, width)?);
        Ok(out)
    }

    /// Reads one byte.
    pub fn read_byte(&self, addr: u32) -> Result<u8, SimError> {
        Ok(self.read_array::<1>(addr, AccessWidth::Byte)?[0])
    }

    /// Reads a little-endian half-word.
    pub fn read_half(&self, addr: u32) -> Result<u16, SimError> {
        self.read_array(addr, AccessWidth::Half).map(u16::from_le_bytes)
    }

    /// Reads a little-endian word.
    pub fn read_word(&self, addr: u32) -> Result<u32, SimError> {
        self.read_array(addr, AccessWidth::Word).map(u32::from_le_bytes)
    }

    /// Reads a single-precision float.
    pub fn read_single(&self, addr: u32) -> Result<f32, SimError> {
        self.read_array(addr, AccessWidth::Single)
            .map(|b| f32::from_bits(u32::from_le_bytes(b)))
    }

    /// Reads a double-precision float: low word at `addr`, high word at `addr + 4`.
    pub fn read_double(&self, addr: u32) -> Result<f64, SimError> {
        self.read_array(addr, AccessWidth::Double)
            .map(|b| f64::from_bits(u64::from_le_bytes(b)))
    }

    /// Writes one byte.
    pub fn write_byte(&mut self, addr: u32, val: u8) -> Result<(), SimError> {
        self.write(addr, AccessWidth::Byte, u64::from(val))
    }

    /// Writes a little-endian half-word.
    pub fn write_half(&mut self, addr: u32, val: u16) -> Result<(), SimError> {
        self.write(addr, AccessWidth::Half, u64::from(val))
    }

    /// Writes a little-endian word.
    pub fn write_word(&mut self, addr: u32, val: u32) -> Result<(), SimError> {
        self.write(addr, AccessWidth::Word, u64::from(val))
    }

    /// Writes a single-precision float.
    pub fn write_single(&mut self, addr: u32, val: f32) -> Result<(), SimError> {
        self.write(addr, AccessWidth::Single, u64::from(val.to_bits()))
    }

    /// Writes a double-precision float.
    pub fn write_double(&mut self, addr: u32, val: f64) -> Result<(), SimError> {
        self.write(addr, AccessWidth::Double, val.to_bits())
    }

    /// Reads `width` bytes at `addr` as a zero-extended little-endian value.
    ///
    /// # Returns
    ///
    /// The raw bits of the access; sign extension is left to the caller.
    pub fn read(&self, addr: u32, width: AccessWidth) -> Result<u64, SimError> {
        let bytes = self.buffer.slice(addr, width.bytes(), width)?;
        let mut raw = [0u8; 8];
        raw[..bytes.len()].copy_from_slice(bytes);
        Ok(u64::from_le_bytes(raw))
    }

    /// Writes the low `width` bytes of `val` at `addr`, little-endian.
    pub fn write(&mut self, addr: u32, width: AccessWidth, val: u64) -> Result<(), SimError> {
        let n = width.bytes();
        self.buffer
            .slice_mut(addr, n, width)?
            .copy_from_slice(&val.to_le_bytes()[..n]);
        Ok(())
    }

    /// Returns `len` bytes starting at `addr`.
    pub fn read_bytes(&self, addr: u32, len: usize) -> Result<&[u8], SimError> {
        self.buffer.slice(addr, len, AccessWidth::Byte)
    }

    /// Copies `data` into memory starting at `addr`.
    ///
    /// Nothing is written if any byte would fall outside memory.
    pub fn write_bytes(&mut self, addr: u32, data: &[u8]) -> Result<(), SimError> {
        self.buffer
            .slice_mut(addr, data.len(), AccessWidth::Byte)?
            .copy_from_slice(data);
        Ok(())
    }
}
