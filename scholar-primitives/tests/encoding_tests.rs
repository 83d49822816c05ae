//! Byte-exact serialization checks against the committed main network
//! genesis coinbase and header.

use hex_literal::hex;
use scholar_primitives::script::opcode::Opcode;
use scholar_primitives::*;

const TIMESTAMP: &[u8] = b"23/06/2022 - This is Scholarship Coin";

fn genesis_coinbase() -> Transaction {
    let script_sig = ScriptBuilder::new()
        .push_int(0)
        .push_script_num(42)
        .push_slice(TIMESTAMP)
        .into_script();
    Transaction {
        version: 1,
        time: 1_655_995_846,
        inputs: vec![TxInput::coinbase(script_sig)],
        outputs: vec![TxOutput::empty()],
        lock_time: 0,
    }
}

#[test]
fn test_coinbase_bytes_match_reference() {
    let expected = hex!(
        "01000000c67db462010000000000000000000000000000000000000000000000000000000000000000ffffffff29"
        "00012a2532332f30362f32303232202d2054686973206973205363686f6c61727368697020436f696e"
        "ffffffff0100000000000000000000000000"
    );
    assert_eq!(genesis_coinbase().to_bytes(), expected.to_vec());
}

#[test]
fn test_coinbase_txid_is_committed_merkle_root() {
    let txid = genesis_coinbase().txid();
    assert_eq!(
        txid.to_string(),
        "b93661ffa5d22907d8f59ebe3400498e35f0461c6dc6ab97d21e5a2492000cea"
    );
}

#[test]
fn test_header_bytes_and_identity_hash() {
    let tx = genesis_coinbase();
    let block = Block {
        header: BlockHeader {
            version: 1,
            prev_block_hash: Hash256::ZERO,
            merkle_root: tx.txid(),
            time: 1_655_995_846,
            bits: 0x1e0ffff0,
            nonce: 222_052,
        },
        transactions: vec![tx],
        signature: Vec::new(),
    };

    assert_eq!(block.compute_merkle_root(), block.header.merkle_root);
    assert_eq!(
        block.header.to_bytes(),
        hex!(
            "0100000000000000000000000000000000000000000000000000000000000000"
            "00000000ea0c0092245a1ed297abc66d1c46f0358e490034be9ef5d80729d2a5"
            "ff6136b9c67db462f0ff0f1e64630300"
        )
        .to_vec()
    );
    assert_eq!(
        block.hash().to_string(),
        "00000740c3ab3ef407b5667e039e3bb4d0f733a306e7b09b0bd28dd23948a5e3"
    );
}

#[test]
fn test_pay_to_pubkey_output_changes_txid() {
    let mut tx = genesis_coinbase();
    let original = tx.txid();
    tx.outputs[0] = TxOutput::new(
        0,
        ScriptBuilder::new()
            .push_slice(&[0x04; 65])
            .push_opcode(Opcode::OpChecksig)
            .into_script(),
    );
    assert_ne!(tx.txid(), original);
}
