//! The regression test profile and its deployment override.

use std::ops::Deref;

use crate::consensus::DeploymentPos;
use crate::error::GenesisIntegrityError;
use crate::profile::{integrity_panic, NetworkProfile};

/// The regtest [`NetworkProfile`] with one extra capability: deployment
/// windows can be rewritten after construction for test orchestration.
///
/// Main and test profiles are plain `NetworkProfile`s and have no such method.
/// Updates take `&mut self`, so they cannot overlap with readers.
#[derive(Debug, Clone, PartialEq)]
pub struct RegtestProfile {
    profile: NetworkProfile,
}

impl RegtestProfile {
    /// # Panics
    ///
    /// Panics when the hard-coded genesis constants are inconsistent.
    pub fn new() -> Self {
        Self::try_new().unwrap_or_else(|err| integrity_panic(err))
    }

    pub fn try_new() -> Result<Self, GenesisIntegrityError> {
        Ok(RegtestProfile {
            profile: NetworkProfile::try_regtest()?,
        })
    }

    pub fn profile(&self) -> &NetworkProfile {
        &self.profile
    }

    /// Overwrites the activation window of one deployment. The signalling bit
    /// and every other deployment are left as they are.
    pub fn update_deployment(&mut self, pos: DeploymentPos, start_time: i64, timeout: i64) {
        log::warn!(
            "Overriding regtest deployment {}: start_time={} timeout={}",
            pos.name(),
            start_time,
            timeout
        );
        self.profile
            .deployments_mut()
            .set_window(pos, start_time, timeout);
    }
}

impl Default for RegtestProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for RegtestProfile {
    type Target = NetworkProfile;

    fn deref(&self) -> &NetworkProfile {
        &self.profile
    }
}
