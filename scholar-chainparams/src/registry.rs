//! Network selection.

use std::sync::OnceLock;

use crate::consensus::DeploymentPos;
use crate::error::{ChainParamsError, GenesisIntegrityError, Result};
use crate::network::Network;
use crate::profile::{integrity_panic, NetworkProfile};
use crate::regtest::RegtestProfile;

/// Holds one profile per network and remembers which one the process runs on.
///
/// All profiles are built and verified up front. The active network moves
/// from unselected to selected once and never changes afterwards; the
/// registry is `Sync`, so a shared reference can be handed to every consumer.
#[derive(Debug)]
pub struct ParameterRegistry {
    main: NetworkProfile,
    test: NetworkProfile,
    regtest: RegtestProfile,
    active: OnceLock<Network>,
}

impl ParameterRegistry {
    /// # Panics
    ///
    /// Panics when any network's hard-coded genesis constants are inconsistent.
    pub fn new() -> Self {
        Self::try_new().unwrap_or_else(|err| integrity_panic(err))
    }

    /// Builds every profile, returning the first integrity failure.
    pub fn try_new() -> std::result::Result<Self, GenesisIntegrityError> {
        Ok(ParameterRegistry {
            main: NetworkProfile::try_main()?,
            test: NetworkProfile::try_test()?,
            regtest: RegtestProfile::try_new()?,
            active: OnceLock::new(),
        })
    }

    /// Selects the network named `name` as active.
    ///
    /// Unknown names leave the registry untouched. Selecting the active
    /// network again succeeds; selecting a different one fails with
    /// [`ChainParamsError::AlreadySelected`].
    pub fn select_network(&self, name: &str) -> Result<&NetworkProfile> {
        self.select(name.parse()?)
    }

    /// Selects `network` as active.
    ///
    /// Selection happens once per registry. A later request for a different
    /// network is refused with [`ChainParamsError::AlreadySelected`] instead
    /// of replacing the active profile, so every reader keeps seeing the
    /// network it started with.
    pub fn select(&self, network: Network) -> Result<&NetworkProfile> {
        let active = *self.active.get_or_init(|| {
            log::info!("Selected {} network", network);
            network
        });
        if active != network {
            return Err(ChainParamsError::AlreadySelected {
                active,
                requested: network,
            });
        }
        Ok(self.profile(network))
    }

    /// The active profile.
    ///
    /// # Panics
    ///
    /// Panics if no network has been selected yet.
    pub fn active_profile(&self) -> &NetworkProfile {
        match self.try_active_profile() {
            Some(profile) => profile,
            None => panic!("active_profile called before a network was selected"),
        }
    }

    pub fn try_active_profile(&self) -> Option<&NetworkProfile> {
        self.active_network().map(|network| self.profile(network))
    }

    pub fn active_network(&self) -> Option<Network> {
        self.active.get().copied()
    }

    /// Looks up a profile by name without touching the selection.
    pub fn profile_for(&self, name: &str) -> Result<&NetworkProfile> {
        Ok(self.profile(name.parse()?))
    }

    pub fn profile(&self, network: Network) -> &NetworkProfile {
        match network {
            Network::Main => &self.main,
            Network::Test => &self.test,
            Network::Regtest => self.regtest.profile(),
        }
    }

    /// Every profile, in [`Network::ALL`] order.
    pub fn profiles(&self) -> impl Iterator<Item = &NetworkProfile> {
        Network::ALL.into_iter().map(move |network| self.profile(network))
    }

    pub fn regtest(&self) -> &RegtestProfile {
        &self.regtest
    }

    pub fn regtest_mut(&mut self) -> &mut RegtestProfile {
        &mut self.regtest
    }

    /// Shorthand for [`RegtestProfile::update_deployment`].
    pub fn update_regtest_deployment(&mut self, pos: DeploymentPos, start_time: i64, timeout: i64) {
        self.regtest.update_deployment(pos, start_time, timeout);
    }

    /// The network whose P2P messages start with `magic`.
    pub fn network_for_magic(&self, magic: [u8; 4]) -> Option<Network> {
        self.profiles()
            .find(|profile| profile.message_start() == magic)
            .map(NetworkProfile::network)
    }
}

impl Default for ParameterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unselected() {
        let registry = ParameterRegistry::new();
        assert_eq!(registry.active_network(), None);
        assert!(registry.try_active_profile().is_none());
    }

    #[test]
    #[should_panic(expected = "before a network was selected")]
    fn test_active_profile_requires_selection() {
        ParameterRegistry::new().active_profile();
    }

    #[test]
    fn test_registry_is_shareable() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<ParameterRegistry>();
    }
}
