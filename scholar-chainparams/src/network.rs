//! The closed set of supported networks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChainParamsError;

/// Represents the different networks the node can connect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// The production network
    Main,
    /// The public test network
    Test,
    /// Local regression testing, blocks are mined on demand
    Regtest,
}

impl Network {
    /// Every network, in declaration order.
    pub const ALL: [Network; 3] = [Network::Main, Network::Test, Network::Regtest];

    /// The name used on the command line and in configuration files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Test => "test",
            Network::Regtest => "regtest",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names are matched exactly; `Main`, `mainnet` and `testnet` are rejected.
impl FromStr for Network {
    type Err = ChainParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .into_iter()
            .find(|network| network.as_str() == s)
            .ok_or_else(|| ChainParamsError::UnknownNetwork(s.to_string()))
    }
}
