//! Consensus parameters and version-bits deployments.

use std::ops::Index;

use primitive_types::U256;
use scholar_primitives::Hash256;
use serde::{Serialize, Serializer};

/// Number of version bits available for signalling.
pub const VERSION_BITS_NUM_BITS: u8 = 29;

/// Number of known deployments, one per [`DeploymentPos`] member.
pub const MAX_VERSION_BITS_DEPLOYMENTS: usize = 1;

/// Identifies a soft-fork deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DeploymentPos {
    /// Placeholder deployment kept for exercising the activation machinery.
    TestDummy,
}

impl DeploymentPos {
    pub const ALL: [DeploymentPos; MAX_VERSION_BITS_DEPLOYMENTS] = [DeploymentPos::TestDummy];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            DeploymentPos::TestDummy => "testdummy",
        }
    }
}

/// Activation window of one deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bip9Deployment {
    /// Bit position in the block version used for signalling.
    pub bit: u8,
    /// Median time past after which signalling starts.
    pub start_time: i64,
    /// Median time past after which the deployment fails if not locked in.
    pub timeout: i64,
}

impl Bip9Deployment {
    /// Start time marking a deployment as active from genesis.
    pub const ALWAYS_ACTIVE: i64 = -1;
    /// Timeout of a deployment that never expires.
    pub const NO_TIMEOUT: i64 = i64::MAX;

    pub const fn new(bit: u8, start_time: i64, timeout: i64) -> Self {
        Bip9Deployment { bit, start_time, timeout }
    }

    /// The bit is signallable and the window is not inverted. Sentinel start
    /// times and timeouts are always accepted.
    pub fn is_well_formed(&self) -> bool {
        self.bit < VERSION_BITS_NUM_BITS
            && (self.start_time == Self::ALWAYS_ACTIVE
                || self.timeout == Self::NO_TIMEOUT
                || self.start_time <= self.timeout)
    }
}

/// The deployment table: exactly one entry per [`DeploymentPos`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployments([Bip9Deployment; MAX_VERSION_BITS_DEPLOYMENTS]);

impl Deployments {
    pub const fn new(entries: [Bip9Deployment; MAX_VERSION_BITS_DEPLOYMENTS]) -> Self {
        Deployments(entries)
    }

    pub fn get(&self, pos: DeploymentPos) -> &Bip9Deployment {
        &self.0[pos.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (DeploymentPos, &Bip9Deployment)> {
        DeploymentPos::ALL.into_iter().zip(self.0.iter())
    }

    pub(crate) fn set_window(&mut self, pos: DeploymentPos, start_time: i64, timeout: i64) {
        let entry = &mut self.0[pos.index()];
        entry.start_time = start_time;
        entry.timeout = timeout;
    }
}

impl Index<DeploymentPos> for Deployments {
    type Output = Bip9Deployment;

    fn index(&self, pos: DeploymentPos) -> &Bip9Deployment {
        self.get(pos)
    }
}

impl Serialize for Deployments {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(pos, deployment)| (pos.name(), deployment)))
    }
}

/// Parameters that influence chain consensus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsensusParams {
    pub hash_genesis_block: Hash256,
    /// Deepest reorganization a node accepts.
    pub max_reorganization_depth: u32,
    /// Blocks of `majority_window` that must signal before new-version rules apply.
    pub majority_enforce_block_upgrade: u32,
    /// Blocks of `majority_window` after which old-version blocks are rejected.
    pub majority_reject_block_outdated: u32,
    pub majority_window: u32,
    /// Height at which BIP34 activates, `None` while it is not scheduled.
    pub bip34_height: Option<u32>,
    pub bip34_hash: Hash256,
    /// Easiest proof-of-work target.
    pub pow_limit: U256,
    /// Easiest proof-of-stake target before protocol v2.
    pub pos_limit: U256,
    /// Easiest proof-of-stake target from protocol v2 on.
    pub pos_limit_v2: U256,
    /// Retargeting timespan in seconds.
    pub target_timespan: i64,
    /// Block spacing in seconds before protocol v2.
    pub target_spacing_v1: i64,
    /// Block spacing in seconds.
    pub target_spacing: i64,
    pub pow_allow_min_difficulty_blocks: bool,
    pub pow_no_retargeting: bool,
    pub pos_no_retargeting: bool,
    /// Signalling blocks per window needed to lock in a deployment.
    pub rule_change_activation_threshold: u32,
    pub miner_confirmation_window: u32,
    pub deployments: Deployments,
    pub protocol_v1_retargeting_fixed_time: i64,
    pub protocol_v2_time: i64,
    pub protocol_v3_time: i64,
    /// Last height at which proof-of-work blocks are accepted.
    pub last_pow_block: u32,
    /// Mask applied to coinstake timestamps.
    pub stake_timestamp_mask: u32,
    /// Confirmations before a coinbase output may be spent.
    pub coinbase_maturity: u32,
    /// Minimum age in seconds of an output before it can stake.
    pub stake_min_age: i64,
    /// Chain work below which the node stays in initial block download.
    pub minimum_chain_work: U256,
}

impl ConsensusParams {
    /// Number of blocks between difficulty adjustments.
    pub fn difficulty_adjustment_interval(&self) -> i64 {
        self.target_timespan / self.target_spacing
    }

    pub fn is_protocol_v1_retargeting_fixed(&self, time: i64) -> bool {
        time > self.protocol_v1_retargeting_fixed_time
    }

    pub fn is_protocol_v2(&self, time: i64) -> bool {
        time > self.protocol_v2_time
    }

    pub fn is_protocol_v3(&self, time: i64) -> bool {
        time > self.protocol_v3_time
    }

    pub fn deployment(&self, pos: DeploymentPos) -> &Bip9Deployment {
        self.deployments.get(pos)
    }
}
