//! Integration tests for the regtest deployment override
//!
//! These tests verify that rewriting a regtest activation window touches
//! nothing except that window.

use proptest::prelude::*;
use scholar_chainparams::{Bip9Deployment, DeploymentPos, Network, ParameterRegistry};

#[test]
fn test_override_leaves_other_profiles_untouched() {
    let mut registry = ParameterRegistry::new();
    let main_before = registry.profile(Network::Main).clone();
    let test_before = registry.profile(Network::Test).clone();

    registry.update_regtest_deployment(DeploymentPos::TestDummy, 0, Bip9Deployment::NO_TIMEOUT);

    assert_eq!(registry.profile(Network::Main), &main_before);
    assert_eq!(registry.profile(Network::Test), &test_before);

    let regtest = registry.regtest().consensus().deployment(DeploymentPos::TestDummy);
    assert_eq!(regtest.start_time, 0);
    assert_eq!(regtest.timeout, Bip9Deployment::NO_TIMEOUT);

    println!("✅ Regtest override isolated");
    println!("   testdummy bit {} window {}..{}", regtest.bit, regtest.start_time, regtest.timeout);
}

#[test]
fn test_override_is_visible_through_active_profile() {
    let mut registry = ParameterRegistry::new();
    registry
        .regtest_mut()
        .update_deployment(DeploymentPos::TestDummy, Bip9Deployment::ALWAYS_ACTIVE, 0);

    let active = registry.select_network("regtest").unwrap();
    let deployment = active.consensus().deployment(DeploymentPos::TestDummy);
    assert_eq!(deployment.start_time, Bip9Deployment::ALWAYS_ACTIVE);
    assert_eq!(deployment.timeout, 0);
}

#[test]
fn test_override_keeps_genesis() {
    let mut registry = ParameterRegistry::new();
    let genesis = registry.regtest().genesis().hash();

    registry.update_regtest_deployment(DeploymentPos::TestDummy, 1, 2);

    assert_eq!(registry.regtest().genesis().hash(), genesis);
    assert_eq!(registry.regtest().checkpoints().get(0), Some(&genesis));
}

proptest! {
    #[test]
    fn prop_override_changes_only_the_window(start in any::<i64>(), timeout in any::<i64>()) {
        let mut registry = ParameterRegistry::new();
        let before = registry.regtest().consensus().clone();

        registry.update_regtest_deployment(DeploymentPos::TestDummy, start, timeout);

        let after = registry.regtest().consensus();
        let entry = after.deployment(DeploymentPos::TestDummy);
        prop_assert_eq!(entry.start_time, start);
        prop_assert_eq!(entry.timeout, timeout);
        prop_assert_eq!(entry.bit, before.deployment(DeploymentPos::TestDummy).bit);

        let mut unchanged = after.clone();
        unchanged.deployments = before.deployments.clone();
        prop_assert_eq!(unchanged, before);
    }
}
