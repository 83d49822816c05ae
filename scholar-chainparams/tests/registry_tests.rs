//! Network selection through the parameter registry.

use scholar_chainparams::{ChainParamsError, Network, ParameterRegistry};

#[test]
fn test_each_network_selects_once() {
    for network in Network::ALL {
        let registry = ParameterRegistry::new();
        let selected = registry.select_network(network.as_str()).unwrap();

        assert_eq!(selected.network(), network);
        assert_eq!(registry.active_profile().network(), network);
        assert_eq!(registry.active_network(), Some(network));
    }
}

#[test]
fn test_unknown_name_is_rejected_without_selecting() {
    let registry = ParameterRegistry::new();

    let err = registry.select_network("mainnet").unwrap_err();
    assert_eq!(err, ChainParamsError::UnknownNetwork("mainnet".to_string()));
    assert_eq!(err.to_string(), "Unknown chain mainnet");
    assert_eq!(registry.active_network(), None);
}

#[test]
fn test_unknown_name_keeps_previous_selection() {
    let registry = ParameterRegistry::new();
    registry.select_network("test").unwrap();

    assert!(matches!(
        registry.select_network("testnet"),
        Err(ChainParamsError::UnknownNetwork(_))
    ));
    assert_eq!(registry.active_profile().network(), Network::Test);
}

#[test]
fn test_reselecting_same_network_is_idempotent() {
    let registry = ParameterRegistry::new();
    let first = registry.select_network("regtest").unwrap();
    let second = registry.select_network("regtest").unwrap();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_switching_networks_is_refused() {
    let registry = ParameterRegistry::new();
    registry.select(Network::Main).unwrap();

    assert_eq!(
        registry.select(Network::Regtest).unwrap_err(),
        ChainParamsError::AlreadySelected {
            active: Network::Main,
            requested: Network::Regtest,
        }
    );
    assert_eq!(registry.active_profile().network(), Network::Main);
}

#[test]
fn test_profile_for_does_not_select() {
    let registry = ParameterRegistry::new();

    let test = registry.profile_for("test").unwrap();
    assert_eq!(test.network(), Network::Test);
    assert_eq!(registry.active_network(), None);

    assert!(registry.profile_for("").is_err());
}

#[test]
fn test_network_for_magic() {
    let registry = ParameterRegistry::new();

    for profile in registry.profiles() {
        assert_eq!(
            registry.network_for_magic(profile.message_start()),
            Some(profile.network())
        );
    }
    assert_eq!(registry.network_for_magic([0xf9, 0xbe, 0xb4, 0xd9]), None);
}

#[test]
fn test_concurrent_readers_see_one_selection() {
    let registry = ParameterRegistry::new();
    let shared = &registry;

    std::thread::scope(|scope| {
        let handles: Vec<_> = Network::ALL
            .into_iter()
            .map(|network| scope.spawn(move || shared.select(network).map(|p| p.network())))
            .collect();
        let winners: Vec<Network> = handles
            .into_iter()
            .filter_map(|handle| handle.join().unwrap().ok())
            .collect();
        assert_eq!(winners.len(), 1);
        assert_eq!(Some(winners[0]), registry.active_network());
    });
}
