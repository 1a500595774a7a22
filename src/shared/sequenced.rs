//! Sequence-guarded snapshot slot.
//!
//! Refresh responses can arrive out of order. A slot only accepts a snapshot
//! whose sequence number is strictly greater than the one it holds, so a
//! delayed response never overwrites a fresher one.

/// Result of offering a snapshot to a [`SnapshotSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// The snapshot replaced the previous one.
    Applied,
    /// The snapshot was older than (or as old as) the held one and was dropped.
    Stale { held_seq: u64 },
}

impl IngestOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, IngestOutcome::Applied)
    }
}

/// Holds the latest snapshot of one feed.
///
/// Replacement is a whole-value move, so readers only ever see a complete
/// snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotSlot<T> {
    seq: Option<u64>,
    value: Option<T>,
}

impl<T> Default for SnapshotSlot<T> {
    fn default() -> Self {
        Self {
            seq: None,
            value: None,
        }
    }
}

impl<T> SnapshotSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held snapshot if `seq` is newer.
    pub fn offer(&mut self, seq: u64, value: T) -> IngestOutcome {
        match self.seq {
            Some(held_seq) if seq <= held_seq => IngestOutcome::Stale { held_seq },
            _ => {
                self.seq = Some(seq);
                self.value = Some(value);
                IngestOutcome::Applied
            }
        }
    }

    pub fn current(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn seq(&self) -> Option<u64> {
        self.seq
    }

    pub fn clear(&mut self) {
        self.seq = None;
        self.value = None;
    }
}
