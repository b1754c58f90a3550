//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entries carried between the five stages:
//! Fetch → Decode → Execute → Memory → Writeback.
//!
//! 1. **Instruction Flow:** One optional entry per latch; an empty latch is a
//!    bubble and reads as the NOP word.
//! 2. **Ordering:** Every fetched instruction carries an [`InstTag`], a
//!    monotonically increasing sequence number used as its destination tag,
//!    to pick the oldest finished result and to squash younger work.
//! 3. **Fault Propagation:** A fetch fault rides along with its entry and is
//!    raised only if that entry reaches Writeback.

use crate::common::SimError;
use crate::common::constants::NOP_WORD;
use crate::core::pipeline::pending::MemAccess;
use crate::core::pipeline::signals::{Dest, Src};
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::decode::Decoded;

/// Program-order sequence number of an in-flight instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct InstTag(pub u64);

/// An operand as staged by Decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    /// Value read or forwarded.
    Ready(u64),
    /// Producer still in flight; Execute retries the read.
    Pending(Src),
}

impl Operand {
    /// Returns the value if ready.
    pub const fn value(self) -> Option<u64> {
        match self {
            Self::Ready(v) => Some(v),
            Self::Pending(_) => None,
        }
    }
}

/// Entry in the IF/ID latch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Sequence number.
    pub tag: InstTag,
    /// Program counter of the instruction.
    pub pc: u32,
    /// Instruction word.
    pub inst: u32,
    /// Fetch fault, raised at Writeback.
    pub fault: Option<SimError>,
}

/// Entry in the ID/EX latch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdExEntry {
    /// Sequence number.
    pub tag: InstTag,
    /// Program counter of the instruction.
    pub pc: u32,
    /// Decoded instruction.
    pub decoded: Decoded,
    /// Staged operands in Execute order.
    pub operands: [Operand; 2],
    /// Branch condition, once its operand was available.
    pub taken: Option<bool>,
    /// Fetch fault, raised at Writeback.
    pub fault: Option<SimError>,
}

/// An instruction after dispatch, owned by a functional unit or the
/// address/branch register until it enters EX/MEM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InFlight {
    /// Sequence number.
    pub tag: InstTag,
    /// Program counter of the instruction.
    pub pc: u32,
    /// Decoded instruction.
    pub decoded: Decoded,
    /// Redirects the PC when it reaches Memory.
    pub taken: bool,
    /// Branch or jump target.
    pub target: u32,
    /// Memory access enqueued when the instruction enters EX/MEM.
    pub access: MemAccess,
    /// Fetch fault, raised at Writeback.
    pub fault: Option<SimError>,
}

impl InFlight {
    /// Returns the architectural destination.
    pub const fn dest(&self) -> Dest {
        self.decoded.class.dest()
    }

    /// Returns `true` for loads, whose value appears only after Memory.
    pub const fn is_load(&self) -> bool {
        matches!(self.access, MemAccess::Read { .. })
    }
}

/// Entry in the EX/MEM latch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExMemEntry {
    /// The instruction.
    pub op: InFlight,
    /// ALU/FPU output, link address or effective address.
    pub result: u64,
}

/// Entry in the MEM/WB latch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemWbEntry {
    /// The instruction.
    pub op: InFlight,
    /// ALU/FPU output carried from EX/MEM.
    pub result: u64,
    /// Load-memory-data latches: one word, or two for a double.
    pub lmd: [u32; 2],
}

impl MemWbEntry {
    /// Returns the value Writeback commits: load data for loads, the
    /// execution result otherwise.
    pub fn value(&self) -> u64 {
        if self.op.is_load() {
            u64::from(self.lmd[0]) | (u64::from(self.lmd[1]) << 32)
        } else {
            self.result
        }
    }
}

macro_rules! latch {
    ($(#[$meta:meta])* $name:ident, $entry:ty, |$e:ident| $word:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default)]
        pub struct $name {
            /// The entry, or `None` for a bubble.
            pub entry: Option<$entry>,
        }

        impl PipelineLatch for $name {
            fn flush(&mut self) {
                self.entry = None;
            }

            fn is_empty(&self) -> bool {
                self.entry.is_none()
            }

            fn word(&self) -> u32 {
                self.entry.as_ref().map_or(NOP_WORD, |$e| $word)
            }
        }
    };
}

latch!(
    /// IF/ID latch (Fetch to Decode).
    IfId, IfIdEntry, |e| e.inst
);
latch!(
    /// ID/EX latch (Decode to Execute).
    IdEx, IdExEntry, |e| e.decoded.raw
);
latch!(
    /// EX/MEM latch (Execute to Memory).
    ExMem, ExMemEntry, |e| e.op.decoded.raw
);
latch!(
    /// MEM/WB latch (Memory to Writeback).
    MemWb, MemWbEntry, |e| e.op.decoded.raw
);
