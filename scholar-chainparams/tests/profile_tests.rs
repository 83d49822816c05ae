//! Cross-network properties of the hard-coded profiles.

use std::collections::HashSet;

use scholar_chainparams::{Base58Type, DeploymentPos, Network, ParameterRegistry};

#[test]
fn test_message_starts_are_distinct() {
    let registry = ParameterRegistry::new();
    let magics: HashSet<[u8; 4]> = registry.profiles().map(|p| p.message_start()).collect();
    assert_eq!(magics.len(), Network::ALL.len());
}

#[test]
fn test_ports_are_distinct() {
    let registry = ParameterRegistry::new();
    let ports: HashSet<u16> = registry.profiles().map(|p| p.default_port()).collect();
    assert_eq!(ports.len(), Network::ALL.len());
}

#[test]
fn test_pubkey_address_prefixes_are_distinct() {
    let registry = ParameterRegistry::new();
    let prefixes: HashSet<Vec<u8>> = registry
        .profiles()
        .map(|p| p.base58_prefixes().get(Base58Type::PubkeyAddress).to_vec())
        .collect();
    assert_eq!(prefixes.len(), Network::ALL.len());
}

#[test]
fn test_checkpoints_start_at_genesis() {
    let registry = ParameterRegistry::new();

    for profile in registry.profiles() {
        let checkpoints = profile.checkpoints();
        assert_eq!(checkpoints.get(0), Some(&profile.genesis().hash()));

        let heights: Vec<u32> = checkpoints.iter().map(|(height, _)| height).collect();
        assert!(heights.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(checkpoints.last_height(), heights.last().copied());
    }
}

#[test]
fn test_consensus_records_genesis_hash() {
    let registry = ParameterRegistry::new();
    for profile in registry.profiles() {
        assert_eq!(profile.consensus().hash_genesis_block, profile.genesis().hash());
    }
}

#[test]
fn test_deployments_are_well_formed() {
    let registry = ParameterRegistry::new();
    for profile in registry.profiles() {
        let deployments = &profile.consensus().deployments;
        assert_eq!(deployments.iter().count(), DeploymentPos::ALL.len());
        assert!(deployments.iter().all(|(_, d)| d.is_well_formed()));
    }
}

#[test]
fn test_test_networks_are_looser() {
    let registry = ParameterRegistry::new();
    let main = registry.profile(Network::Main).consensus();

    for network in [Network::Test, Network::Regtest] {
        let consensus = registry.profile(network).consensus();
        assert!(consensus.pow_allow_min_difficulty_blocks);
        assert!(consensus.pow_limit > main.pow_limit);
        assert!(consensus.coinbase_maturity < main.coinbase_maturity);
    }
    assert!(!main.pow_allow_min_difficulty_blocks);
}

#[test]
fn test_behaviour_flags() {
    let registry = ParameterRegistry::new();
    let main = registry.profile(Network::Main).flags();
    let test = registry.profile(Network::Test).flags();
    let regtest = registry.profile(Network::Regtest).flags();

    assert!(main.requires_peers_for_mining && main.requires_standard_transactions);
    assert!(test.marks_testnet_in_rpc && !test.requires_standard_transactions);
    assert!(regtest.allows_on_demand_mining && regtest.runs_consistency_checks);
    assert!(!regtest.requires_peers_for_mining);
}

#[test]
fn test_only_main_publishes_dns_seeds() {
    let registry = ParameterRegistry::new();
    assert!(!registry.profile(Network::Main).dns_seeds().is_empty());
    assert!(registry.profile(Network::Test).dns_seeds().is_empty());
    assert!(registry.profile(Network::Regtest).dns_seeds().is_empty());
    assert!(registry.profile(Network::Regtest).fixed_seeds().is_empty());
}
