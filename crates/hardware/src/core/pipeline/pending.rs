//! Pending memory accesses.
//!
//! Execute builds one [`MemAccess`] descriptor per instruction and the
//! descriptor is enqueued when the instruction enters EX/MEM. The Memory
//! stage pops exactly one descriptor per instruction it services, so the
//! queue holds at most one live entry and its head always belongs to the
//! instruction in EX/MEM.

use std::collections::VecDeque;

use crate::common::AccessWidth;
use crate::core::pipeline::signals::{Dest, LoadKind};

/// One memory access descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MemAccess {
    /// The instruction does not touch memory.
    #[default]
    None,

    /// Typed read into a register.
    Read {
        /// Register receiving the loaded value.
        dest: Dest,
        /// Effective address.
        addr: u32,
        /// Width and extension.
        kind: LoadKind,
    },

    /// Write of the low `width` bytes of `payload`.
    Write {
        /// Effective address.
        addr: u32,
        /// Access width.
        width: AccessWidth,
        /// Little-endian payload.
        payload: [u8; 8],
    },
}

impl MemAccess {
    /// Builds a write of the low `width` bytes of `value`.
    pub const fn write(addr: u32, width: AccessWidth, value: u64) -> Self {
        Self::Write {
            addr,
            width,
            payload: value.to_le_bytes(),
        }
    }

    /// Returns the bytes a write copies to memory.
    pub fn bytes(&self) -> &[u8] {
        match self {
            Self::Write { width, payload, .. } => &payload[..width.bytes()],
            _ => &[],
        }
    }
}

/// FIFO of pending accesses between Execute and Memory.
#[derive(Clone, Debug, Default)]
pub struct PendingQueue {
    queue: VecDeque<MemAccess>,
}

impl PendingQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues the descriptor of the instruction entering EX/MEM.
    pub fn push(&mut self, access: MemAccess) {
        self.queue.push_back(access);
        debug_assert!(self.queue.len() <= 1, "more than one pending access");
    }

    /// Dequeues the descriptor of the instruction in Memory.
    pub fn pop(&mut self) -> Option<MemAccess> {
        self.queue.pop_front()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
