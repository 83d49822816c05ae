//! Genesis transaction and block construction.
//!
//! The genesis coinbase carries the chain's timestamp phrase in its signature
//! script. Every network builds its genesis from the same phrase and output
//! script, varying only the header fields.

use hex_literal::hex;
use primitive_types::U256;
use serde::Serialize;

use scholar_primitives::script::opcode::Opcode;
use scholar_primitives::{
    Amount, Block, BlockHeader, Hash256, Script, ScriptBuilder, Transaction, TxInput, TxOutput,
};

use crate::error::GenesisIntegrityError;
use crate::network::Network;

/// Phrase committed to by every genesis coinbase.
pub const GENESIS_TIMESTAMP: &str = "23/06/2022 - This is Scholarship Coin";

/// Uncompressed public key of the genesis output script.
pub const GENESIS_OUTPUT_PUBKEY: [u8; 65] = hex!(
    "04b638831e30c9ad9c7df462f7677ca8740d7cac3723f692932bed42c7070f1756"
    "e42743b000c6150d3a54b320d36af56d93f00ef5897c41c62028bbeb82011a53"
);

/// Height-like marker pushed ahead of the timestamp in the coinbase script.
pub const COINBASE_MARKER: i64 = 42;

/// `<pubkey> OP_CHECKSIG` paying to [`GENESIS_OUTPUT_PUBKEY`].
pub fn genesis_output_script() -> Script {
    ScriptBuilder::new()
        .push_slice(&GENESIS_OUTPUT_PUBKEY)
        .push_opcode(Opcode::OpChecksig)
        .into_script()
}

/// Builds the coinbase transaction of a genesis block.
///
/// The signature script is `OP_0 <42> <timestamp>`. The single output pays
/// `reward` to `output_script`; a zero reward yields the empty output, which
/// is what every committed genesis uses. `output_script` is ignored in that
/// case.
pub fn create_coinbase_transaction(
    timestamp: &str,
    output_script: &Script,
    reward: Amount,
    time: u32,
) -> Transaction {
    let script_sig = ScriptBuilder::new()
        .push_int(0)
        .push_script_num(COINBASE_MARKER)
        .push_slice(timestamp.as_bytes())
        .into_script();

    let output = if reward == 0 {
        TxOutput::empty()
    } else {
        TxOutput::new(reward, output_script.clone())
    };

    Transaction {
        version: 1,
        time,
        inputs: vec![TxInput::coinbase(script_sig)],
        outputs: vec![output],
        lock_time: 0,
    }
}

/// Header fields a network fixes for its genesis block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenesisParams {
    pub time: u32,
    pub nonce: u32,
    pub bits: u32,
    pub version: i32,
    pub reward: Amount,
}

/// Hashes a genesis block is expected to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExpectedGenesis {
    pub hash: Hash256,
    pub merkle_root: Hash256,
}

/// The first block of a chain. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenesisBlock {
    hash: Hash256,
    block: Block,
}

impl GenesisBlock {
    pub fn hash(&self) -> Hash256 {
        self.hash
    }

    pub fn merkle_root(&self) -> Hash256 {
        self.block.header.merkle_root
    }

    pub fn header(&self) -> &BlockHeader {
        &self.block.header
    }

    pub fn block(&self) -> &Block {
        &self.block
    }

    /// The coinbase, the block's only transaction.
    pub fn coinbase(&self) -> &Transaction {
        &self.block.transactions[0]
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.block.to_bytes()
    }

    /// Checks the block against the committed hashes, its own `bits` and the
    /// network's proof-of-work limit.
    pub fn verify(
        &self,
        network: Network,
        expected: &ExpectedGenesis,
        pow_limit: U256,
    ) -> Result<(), GenesisIntegrityError> {
        if self.merkle_root() != expected.merkle_root {
            return Err(GenesisIntegrityError::MerkleRootMismatch {
                network,
                expected: expected.merkle_root,
                computed: self.merkle_root(),
            });
        }
        if self.hash != expected.hash {
            return Err(GenesisIntegrityError::HashMismatch {
                network,
                expected: expected.hash,
                computed: self.hash,
            });
        }

        let bits = self.block.header.bits;
        let target = self
            .block
            .header
            .target()
            .filter(|target| !target.is_zero())
            .ok_or(GenesisIntegrityError::InvalidBits { network, bits })?;
        if target > pow_limit {
            return Err(GenesisIntegrityError::TargetAboveLimit {
                network,
                target,
                limit: pow_limit,
            });
        }
        if self.block.header.pow_hash().to_u256() > target {
            return Err(GenesisIntegrityError::InsufficientWork {
                network,
                hash: self.hash,
            });
        }

        log::debug!("Verified {} genesis block {}", network, self.hash);
        Ok(())
    }
}

/// Builds a genesis block around the chain's timestamp phrase and output script.
pub fn create_genesis_block(params: &GenesisParams) -> GenesisBlock {
    create_genesis_block_with(GENESIS_TIMESTAMP, &genesis_output_script(), params)
}

/// Builds a genesis block with a caller-chosen phrase and output script.
pub fn create_genesis_block_with(
    timestamp: &str,
    output_script: &Script,
    params: &GenesisParams,
) -> GenesisBlock {
    let coinbase = create_coinbase_transaction(timestamp, output_script, params.reward, params.time);
    let mut block = Block {
        header: BlockHeader {
            version: params.version,
            prev_block_hash: Hash256::ZERO,
            merkle_root: Hash256::ZERO,
            time: params.time,
            bits: params.bits,
            nonce: params.nonce,
        },
        transactions: vec![coinbase],
        signature: Vec::new(),
    };
    block.header.merkle_root = block.compute_merkle_root();

    GenesisBlock {
        hash: block.hash(),
        block,
    }
}
