//! Hard-coded checkpoints.

use std::collections::BTreeMap;

use scholar_primitives::Hash256;
use serde::Serialize;

/// Known-good block hashes by height, plus the transaction statistics used to
/// estimate verification progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckpointData {
    checkpoints: BTreeMap<u32, Hash256>,
    /// Unix time of the last checkpointed block.
    pub last_checkpoint_time: i64,
    /// Transactions between genesis and the last checkpoint.
    pub transactions_at_last_checkpoint: u64,
    /// Estimated transactions per day after the last checkpoint.
    pub transactions_per_day: f64,
}

impl CheckpointData {
    pub fn new<I>(
        checkpoints: I,
        last_checkpoint_time: i64,
        transactions_at_last_checkpoint: u64,
        transactions_per_day: f64,
    ) -> Self
    where
        I: IntoIterator<Item = (u32, Hash256)>,
    {
        CheckpointData {
            checkpoints: checkpoints.into_iter().collect(),
            last_checkpoint_time,
            transactions_at_last_checkpoint,
            transactions_per_day,
        }
    }

    pub fn get(&self, height: u32) -> Option<&Hash256> {
        self.checkpoints.get(&height)
    }

    /// Height of the highest checkpoint.
    pub fn last_height(&self) -> Option<u32> {
        self.checkpoints.keys().next_back().copied()
    }

    /// Checkpoints in ascending height order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Hash256)> {
        self.checkpoints.iter().map(|(height, hash)| (*height, hash))
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    /// False only when a checkpoint exists at `height` and names another block.
    pub fn matches(&self, height: u32, hash: &Hash256) -> bool {
        self.get(height).map_or(true, |expected| expected == hash)
    }
}
