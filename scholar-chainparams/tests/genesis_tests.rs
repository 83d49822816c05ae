//! End-to-end genesis construction for every network.

use scholar_chainparams::genesis::{genesis_output_script, GENESIS_TIMESTAMP};
use scholar_chainparams::{create_genesis_block, GenesisParams, Network, NetworkProfile};
use scholar_primitives::Hash256;

fn hash(s: &str) -> Hash256 {
    s.parse().unwrap()
}

fn params(time: u32, nonce: u32) -> GenesisParams {
    GenesisParams {
        time,
        nonce,
        bits: 0x1e0ffff0,
        version: 1,
        reward: 0,
    }
}

#[test]
fn test_main_genesis_from_fixed_inputs() {
    let genesis = create_genesis_block(&params(1_655_995_846, 222_052));

    assert_eq!(
        genesis.hash(),
        hash("00000740c3ab3ef407b5667e039e3bb4d0f733a306e7b09b0bd28dd23948a5e3")
    );
    assert_eq!(
        genesis.merkle_root(),
        hash("b93661ffa5d22907d8f59ebe3400498e35f0461c6dc6ab97d21e5a2492000cea")
    );
    println!("✅ Main genesis {}", genesis.hash());
}

#[test]
fn test_test_genesis_from_fixed_inputs() {
    let genesis = create_genesis_block(&params(1_655_996_103, 1_322_056));

    assert_eq!(
        genesis.hash(),
        hash("000006917e0cfbe8f8639b5b81040872c1f38670a52928b749b105793688456e")
    );
    assert_eq!(
        genesis.merkle_root(),
        hash("25d800a99a2d7374395f4175775276cdb4dc8b94d68c68297f050813fc1e73e1")
    );
}

#[test]
fn test_regtest_genesis_from_fixed_inputs() {
    let genesis = create_genesis_block(&params(1_655_996_180, 2_963_963));

    assert_eq!(
        genesis.hash(),
        hash("000000a5335ccb6d52d8ae350a006844c2a2f9377e63811a7c44484205c1c2c1")
    );
    assert_eq!(
        genesis.merkle_root(),
        hash("00ffc8b1cc829ada59b3dbde99248d87feb0cc0eb2516ae7c9bc0c33ce74e3b8")
    );
}

#[test]
fn test_construction_is_deterministic() {
    for network in Network::ALL {
        let first = NetworkProfile::for_network(network);
        let second = NetworkProfile::for_network(network);
        assert_eq!(first.genesis(), second.genesis());
        assert_eq!(first.genesis().to_bytes(), second.genesis().to_bytes());
    }
}

#[test]
fn test_genesis_shares_coinbase_phrase() {
    for network in Network::ALL {
        let profile = NetworkProfile::for_network(network);
        let genesis = profile.genesis();
        let coinbase = genesis.coinbase();

        assert_eq!(genesis.block().transactions.len(), 1);
        assert!(coinbase.is_coinbase());
        assert!(coinbase
            .inputs[0]
            .script_sig
            .as_bytes()
            .ends_with(GENESIS_TIMESTAMP.as_bytes()));
        assert!(coinbase.outputs[0].is_empty());
        assert_eq!(coinbase.time, genesis.header().time);
        assert!(genesis.header().prev_block_hash.is_zero());
        assert_eq!(genesis.header().bits, 0x1e0ffff0);
    }
}

#[test]
fn test_genesis_header_meets_its_target() {
    for network in Network::ALL {
        let profile = NetworkProfile::for_network(network);
        let header = profile.genesis().header();
        let target = header.target().unwrap();

        assert!(header.pow_hash().to_u256() <= target);
        assert!(target <= profile.consensus().pow_limit);
    }
}

#[test]
fn test_paid_output_changes_identity() {
    let unpaid = create_genesis_block(&params(1_655_995_846, 222_052));
    let paid = scholar_chainparams::create_genesis_block_with(
        GENESIS_TIMESTAMP,
        &genesis_output_script(),
        &GenesisParams {
            reward: 10_000,
            ..params(1_655_995_846, 222_052)
        },
    );

    assert_eq!(paid.coinbase().outputs[0].script_pubkey, genesis_output_script());
    assert_ne!(paid.merkle_root(), unpaid.merkle_root());
    assert_ne!(paid.hash(), unpaid.hash());
}
