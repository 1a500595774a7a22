//! Base fee state container. App-owned, crate-provided update logic.

use super::MultiResolutionSeries;
use crate::shared::{IngestOutcome, SnapshotSlot};

/// Latest base fee snapshot across all resolutions.
///
/// Each refresh replaces the whole snapshot. Responses carry a sequence number
/// assigned by the caller when the request was issued; an older response
/// arriving late is dropped.
#[derive(Debug, Clone, Default)]
pub struct SeriesStore {
    slot: SnapshotSlot<MultiResolutionSeries>,
}

impl SeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingest(&mut self, seq: u64, snapshot: MultiResolutionSeries) -> IngestOutcome {
        let block_number = snapshot.block_number;
        let outcome = self.slot.offer(seq, snapshot);
        match outcome {
            IngestOutcome::Applied => {
                tracing::debug!(seq, block_number, "Applied base fee snapshot");
            }
            IngestOutcome::Stale { held_seq } => {
                tracing::debug!(seq, held_seq, block_number, "Dropped stale base fee snapshot");
            }
        }
        outcome
    }

    pub fn current(&self) -> Option<&MultiResolutionSeries> {
        self.slot.current()
    }

    pub fn seq(&self) -> Option<u64> {
        self.slot.seq()
    }

    pub fn clear(&mut self) {
        self.slot.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn snapshot(block_number: u64) -> MultiResolutionSeries {
        MultiResolutionSeries {
            barrier: Decimal::from(30),
            block_number,
            m5: vec![],
            h1: vec![],
            d1: vec![],
            d7: vec![],
            d30: vec![],
            all: None,
        }
    }

    #[test]
    fn test_empty_store_has_no_snapshot() {
        let store = SeriesStore::new();
        assert!(store.current().is_none());
        assert_eq!(store.seq(), None);
    }

    #[test]
    fn test_ingest_replaces_snapshot() {
        let mut store = SeriesStore::new();
        store.ingest(1, snapshot(100));
        store.ingest(2, snapshot(200));
        assert_eq!(store.current().unwrap().block_number, 200);
    }

    #[test]
    fn test_late_older_snapshot_is_dropped() {
        let mut store = SeriesStore::new();
        assert!(store.ingest(6, snapshot(600)).is_applied());
        assert_eq!(store.ingest(5, snapshot(500)), IngestOutcome::Stale { held_seq: 6 });
        assert_eq!(store.current().unwrap().block_number, 600);
        assert_eq!(store.seq(), Some(6));
    }

    #[test]
    fn test_clear() {
        let mut store = SeriesStore::new();
        store.ingest(1, snapshot(100));
        store.clear();
        assert!(store.current().is_none());
    }
}
