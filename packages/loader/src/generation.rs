//! Request generations for discarding superseded responses.

use std::sync::atomic::{AtomicU64, Ordering};

/// A monotonically increasing counter, one per fetch cycle kind.
///
/// A cycle captures the value returned by [`Self::begin`] and may only
/// render while [`Self::is_current`] still holds for it.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    latest: AtomicU64,
}

impl RequestGeneration {
    /// Starts a new generation, superseding every earlier one.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::AcqRel) + 1
    }

    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.latest.load(Ordering::Acquire) == generation
    }
}
