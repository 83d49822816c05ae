//! Base58 version prefixes.

use serde::Serialize;

/// Payload kinds that carry a network-specific Base58 prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
}

impl Base58Type {
    pub const ALL: [Base58Type; 5] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
    ];
}

/// Version bytes prepended before Base58Check encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Base58Prefixes {
    #[serde(serialize_with = "hex::serde::serialize")]
    pub pubkey_address: [u8; 1],
    #[serde(serialize_with = "hex::serde::serialize")]
    pub script_address: [u8; 1],
    #[serde(serialize_with = "hex::serde::serialize")]
    pub secret_key: [u8; 1],
    #[serde(serialize_with = "hex::serde::serialize")]
    pub ext_public_key: [u8; 4],
    #[serde(serialize_with = "hex::serde::serialize")]
    pub ext_secret_key: [u8; 4],
}

impl Base58Prefixes {
    pub fn get(&self, kind: Base58Type) -> &[u8] {
        match kind {
            Base58Type::PubkeyAddress => &self.pubkey_address,
            Base58Type::ScriptAddress => &self.script_address,
            Base58Type::SecretKey => &self.secret_key,
            Base58Type::ExtPublicKey => &self.ext_public_key,
            Base58Type::ExtSecretKey => &self.ext_secret_key,
        }
    }
}
