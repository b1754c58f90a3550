//! Program Image Loading.
//!
//! This module assembles the memory image the engine runs. It provides:
//! 1. **Segments:** Code and data placed at explicit base addresses.
//! 2. **Typed Data:** Words, singles and doubles serialized little-endian.
//! 3. **Binary Files:** A raw little-endian image read from disk.
//!
//! Labels and assembler directives are resolved before an image is built;
//! every address here is final.

use std::fs;
use std::path::Path;

use crate::common::SimError;
use crate::soc::Memory;

/// Bytes placed at a fixed address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    /// Address of the first byte.
    pub base: u32,
    /// Contents.
    pub bytes: Vec<u8>,
}

/// A complete memory image and its entry point.
///
/// # Examples
///
/// ```
/// use dlxsim_core::sim::loader::ProgramImage;
///
/// let image = ProgramImage::from_words(0x0, &[0x2001_0005, 0x4400_0000])
///     .with_words(0x1000, &[7, 9]);
/// assert_eq!(image.entry(), 0x0);
/// assert_eq!(image.segments().len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgramImage {
    entry: u32,
    segments: Vec<Segment>,
}

impl ProgramImage {
    /// Creates an empty image starting execution at `entry`.
    pub fn new(entry: u32) -> Self {
        Self {
            entry,
            segments: Vec::new(),
        }
    }

    /// Creates an image whose code is `words`, placed at and entered at `base`.
    pub fn from_words(base: u32, words: &[u32]) -> Self {
        Self::new(base).with_words(base, words)
    }

    /// Reads a raw little-endian image from disk, placed at and entered at `base`.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the binary file.
    /// * `base` - Load and entry address.
    ///
    /// # Returns
    ///
    /// [`SimError::ImageIo`] if the file cannot be read.
    pub fn from_binary_file(path: impl AsRef<Path>, base: u32) -> Result<Self, SimError> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .map_err(|e| SimError::ImageIo(format!("{}: {e}", path.display())))?;
        Ok(Self::new(base).with_data(base, bytes))
    }

    /// Adds raw bytes at `base`.
    #[must_use]
    pub fn with_data(mut self, base: u32, bytes: impl Into<Vec<u8>>) -> Self {
        self.segments.push(Segment {
            base,
            bytes: bytes.into(),
        });
        self
    }

    /// Adds 32-bit words at `base`.
    #[must_use]
    pub fn with_words(self, base: u32, words: &[u32]) -> Self {
        let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
        self.with_data(base, bytes)
    }

    /// Adds single-precision values at `base`.
    #[must_use]
    pub fn with_singles(self, base: u32, values: &[f32]) -> Self {
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        self.with_data(base, bytes)
    }

    /// Adds double-precision values at `base`.
    #[must_use]
    pub fn with_doubles(self, base: u32, values: &[f64]) -> Self {
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        self.with_data(base, bytes)
    }

    /// Returns the entry point.
    pub const fn entry(&self) -> u32 {
        self.entry
    }

    /// Returns the segments in the order they are written.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Copies every segment into `memory`. Later segments overwrite earlier
    /// ones where they overlap.
    ///
    /// # Returns
    ///
    /// [`SimError::ImageOutOfRange`] before anything is written if a segment
    /// does not fit.
    pub fn load_into(&self, memory: &mut Memory) -> Result<(), SimError> {
        let size = memory.size();
        if let Some(seg) = self
            .segments
            .iter()
            .find(|seg| seg.base as usize + seg.bytes.len() > size)
        {
            return Err(SimError::ImageOutOfRange {
                base: seg.base,
                len: seg.bytes.len(),
                size,
            });
        }
        for seg in &self.segments {
            memory.write_bytes(seg.base, &seg.bytes)?;
            tracing::debug!(
                "[Loader] {} bytes at {:#010x}",
                seg.bytes.len(),
                seg.base
            );
        }
        Ok(())
    }
}
