// history.rs - Cycle detection over recent generations

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::Snapshot;

pub const HISTORY_LEN: usize = 10;

/// Fingerprints of the last few generations. A repeat means the board has
/// settled into a still life or an oscillator of period <= `HISTORY_LEN`.
#[derive(Debug, Default)]
pub struct CycleHistory {
    fingerprints: [Option<u64>; HISTORY_LEN],
    count: usize,
}

impl CycleHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History that already holds the starting board.
    pub fn starting_at(snapshot: &Snapshot) -> Self {
        let mut history = Self::new();
        history.record(snapshot);
        history
    }

    /// Returns true if `snapshot` was already seen, otherwise remembers it.
    pub fn record(&mut self, snapshot: &Snapshot) -> bool {
        let fingerprint = fingerprint(snapshot);
        if self.fingerprints.contains(&Some(fingerprint)) {
            return true;
        }
        self.fingerprints[self.count % HISTORY_LEN] = Some(fingerprint);
        self.count += 1;
        false
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Forget everything and treat `snapshot` as the new starting board.
    pub fn restart(&mut self, snapshot: &Snapshot) {
        self.reset();
        self.record(snapshot);
    }
}

fn fingerprint(snapshot: &Snapshot) -> u64 {
    let mut hasher = DefaultHasher::new();
    snapshot.hash(&mut hasher);
    hasher.finish()
}
