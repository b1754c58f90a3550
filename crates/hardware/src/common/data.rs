//! Memory Access Widths.
//!
//! This module classifies the typed accesses the memory subsystem supports.
//! They are used for the following:
//! 1. **Bounds Checking:** Every access is checked as `addr + width.bytes()`.
//! 2. **Load Extension:** Byte and half-word loads are sign- or zero-extended.
//! 3. **Error Reporting:** Out-of-range errors name the width that failed.

use std::fmt;

/// Width of a single memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessWidth {
    /// 8-bit access (`LB`, `LBU`, `SB`).
    Byte,

    /// 16-bit access (`LH`, `LHU`, `SH`).
    Half,

    /// 32-bit integer access (`LW`, `SW`, instruction fetch).
    Word,

    /// 32-bit single-precision bit pattern (`LF`, `SF`).
    Single,

    /// 64-bit double-precision bit pattern (`LD`, `SD`).
    ///
    /// Stored little-endian as two consecutive words: the low word at the
    /// addressed location and the high word four bytes above it.
    Double,
}

impl AccessWidth {
    /// Returns the number of bytes moved by an access of this width.
    pub const fn bytes(self) -> usize {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word | Self::Single => 4,
            Self::Double => 8,
        }
    }
}

impl fmt::Display for AccessWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Byte => "byte",
            Self::Half => "half",
            Self::Word => "word",
            Self::Single => "single",
            Self::Double => "double",
        };
        f.write_str(name)
    }
}
