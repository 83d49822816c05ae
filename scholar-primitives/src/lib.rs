//! Scholarship chain primitives
//!
//! Hashes, scripts, transactions and blocks together with their consensus
//! serialization.

#![forbid(unsafe_code)]

pub mod block;
pub mod encode;
pub mod error;
pub mod hash;
pub mod script;
pub mod transaction;

pub use block::{Block, BlockHeader, CompactTarget};
pub use encode::{serialize, Encodable};
pub use error::PrimitiveError;
pub use hash::Hash256;
pub use script::{Builder as ScriptBuilder, Script};
pub use transaction::{OutPoint, Transaction, TxInput, TxOutput};

/// Monetary amount in base units.
pub type Amount = i64;
