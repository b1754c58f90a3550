//! Byte Buffer Implementation.
//!
//! This module provides the bounds-checked backing store of the memory
//! subsystem. Every access is validated against the buffer length before any
//! byte is touched, so a failing access never partially writes.

use crate::common::{AccessWidth, SimError};

/// A zero-initialized, fixed-size byte buffer.
#[derive(Clone, Debug)]
pub struct ByteBuffer {
    bytes: Vec<u8>,
}

impl ByteBuffer {
    /// Creates a new zero-filled buffer of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    /// Returns the size of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the buffer has zero length.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the byte range `[addr, addr + len)` or an out-of-range error.
    ///
    /// # Arguments
    ///
    /// * `addr` - First byte of the access.
    /// * `len` - Number of bytes.
    /// * `width` - Width reported in the error.
    pub fn slice(&self, addr: u32, len: usize, width: AccessWidth) -> Result<&[u8], SimError> {
        let range = self.range(addr, len, width)?;
        Ok(&self.bytes[range])
    }

    /// Mutable counterpart of [`ByteBuffer::slice`].
    pub fn slice_mut(
        &mut self,
        addr: u32,
        len: usize,
        width: AccessWidth,
    ) -> Result<&mut [u8], SimError> {
        let range = self.range(addr, len, width)?;
        Ok(&mut self.bytes[range])
    }

    /// Clears every byte to zero.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    fn range(
        &self,
        addr: u32,
        len: usize,
        width: AccessWidth,
    ) -> Result<std::ops::Range<usize>, SimError> {
        let start = addr as usize;
        match start.checked_add(len) {
            Some(end) if end <= self.bytes.len() => Ok(start..end),
            _ => Err(SimError::MemoryOutOfRange {
                addr,
                width,
                size: self.bytes.len(),
            }),
        }
    }
}
