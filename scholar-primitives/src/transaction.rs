//! Transactions.
//!
//! Transactions carry their own timestamp after the version field, as in the
//! proof-of-stake chains this network descends from.

use serde::{Deserialize, Serialize};

use crate::encode::{serialize, Encodable};
use crate::hash::Hash256;
use crate::script::Script;

/// Represents a reference to a specific transaction output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    /// The transaction ID (hash) of the transaction containing the output.
    pub txid: Hash256,
    /// The index of the output within that transaction.
    pub vout: u32,
}

impl OutPoint {
    /// The outpoint of a coinbase input: it refers to nothing.
    pub const fn null() -> Self {
        OutPoint { txid: Hash256::ZERO, vout: u32::MAX }
    }

    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.vout == u32::MAX
    }
}

impl Encodable for OutPoint {
    fn consensus_encode(&self, buf: &mut Vec<u8>) {
        self.txid.consensus_encode(buf);
        self.vout.consensus_encode(buf);
    }
}

/// Represents a transaction input, referencing a previous transaction's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    /// The `OutPoint` referencing the output being spent.
    pub previous_output: OutPoint,
    /// The script signature, providing proof of ownership.
    pub script_sig: Script,
    pub sequence: u32,
}

impl TxInput {
    /// Final sequence number, disables lock-time checks for this input.
    pub const SEQUENCE_FINAL: u32 = u32::MAX;

    /// Creates an input with no real previous output, carrying `script_sig`.
    pub fn coinbase(script_sig: Script) -> Self {
        TxInput {
            previous_output: OutPoint::null(),
            script_sig,
            sequence: Self::SEQUENCE_FINAL,
        }
    }

    /// Returns true if this is a coinbase input.
    pub fn is_coinbase(&self) -> bool {
        self.previous_output.is_null()
    }
}

impl Encodable for TxInput {
    fn consensus_encode(&self, buf: &mut Vec<u8>) {
        self.previous_output.consensus_encode(buf);
        self.script_sig.consensus_encode(buf);
        self.sequence.consensus_encode(buf);
    }
}

/// Represents a transaction output, specifying a value and a locking script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    /// The value of the output in base units.
    pub value: i64,
    /// The locking script (scriptPubKey) that defines the conditions for spending this output.
    pub script_pubkey: Script,
}

impl TxOutput {
    /// Creates a new `TxOutput`.
    pub fn new(value: i64, script_pubkey: Script) -> Self {
        TxOutput { value, script_pubkey }
    }

    /// The empty output: no value and no script. It is unspendable and marks
    /// outputs that exist only as placeholders (genesis and coinstake markers).
    pub fn empty() -> Self {
        TxOutput { value: 0, script_pubkey: Script::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0 && self.script_pubkey.is_empty()
    }
}

impl Encodable for TxOutput {
    fn consensus_encode(&self, buf: &mut Vec<u8>) {
        self.value.consensus_encode(buf);
        self.script_pubkey.consensus_encode(buf);
    }
}

/// A transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: i32,
    /// Transaction timestamp (seconds since the Unix epoch).
    pub time: u32,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    /// The lock time of the transaction, specifying the earliest time or block height it can be included in a block.
    pub lock_time: u32,
}

impl Transaction {
    /// Returns the canonical byte representation of the transaction.
    pub fn to_bytes(&self) -> Vec<u8> {
        serialize(self)
    }

    /// Calculates and returns the transaction ID (double SHA-256 of the serialization).
    pub fn txid(&self) -> Hash256 {
        Hash256::sha256d(&self.to_bytes())
    }

    /// Checks if the transaction is a coinbase transaction.
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].is_coinbase()
    }

    /// Sum of all output values.
    pub fn value_out(&self) -> i64 {
        self.outputs.iter().map(|output| output.value).sum()
    }
}

impl Encodable for Transaction {
    fn consensus_encode(&self, buf: &mut Vec<u8>) {
        self.version.consensus_encode(buf);
        self.time.consensus_encode(buf);
        self.inputs.consensus_encode(buf);
        self.outputs.consensus_encode(buf);
        self.lock_time.consensus_encode(buf);
    }
}
