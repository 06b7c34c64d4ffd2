//! Tests for the utxo-transaction crate.
//!
//! Covers the two-phase flow end to end with literal hex vectors for
//! legacy, witness, mixed, and memo-carrying transactions, plus the
//! fail-fast validation paths.

use utxo_primitives::wire::WireReader;
use utxo_script::{LockingScript, Script, ScriptType};

use crate::compiler::TransactionCompiler;
use crate::input::TransactionInput;
use crate::output::TransactionOutput;
use crate::signature::SignatureRecord;
use crate::unsigned::{TransactionMetadata, UnsignedTransaction};
use crate::utxo::UnspentOutput;
use crate::TransactionError;

// -----------------------------------------------------------------------
// Fixtures
// -----------------------------------------------------------------------

/// Display-order txid of the legacy (p2pkh) source output.
const LEGACY_TXID: &str = "b9e2a4ccb6b205977a29d6566c0df6ab81a07f41d0a34cc66a7c5de358412a59";

/// Display-order txid of the witness (p2wpkh) source output.
const WITNESS_TXID: &str = "42df5cd687701a6fd5d9b5288dc3a40249338ef27f284f72cc8d153b4c2aeed3";

const P2PKH_SOURCE: &str = "76a914aab0fd6c706fa7c873eba255058b03879e038c8888ac";
const P2PKH_DEST: &str = "76a9140406b1ed1e51f82530bbb59e27b1d1d8f9bbbf5e88ac";
const P2WPKH_SOURCE: &str = "00142b01c9166ed6f4ed43c8de6ebedcafd3b5b1bf5b";
const P2WPKH_DEST: &str = "001494b3fd4bbbca418dd527de6ec2b2a2c0e39ef1ea";

/// A fixed 70-byte DER signature used across the vectors.
const DER_SIG: &str = "304402201f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f02202e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e";

/// A fixed 33-byte compressed public key used across the vectors.
const PUBKEY: &str = "02c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4";

fn spendable(script_hex: &str, kind: ScriptType) -> LockingScript {
    LockingScript::spendable(
        Script::from_hex(script_hex).unwrap(),
        kind,
        hex::decode(PUBKEY).unwrap(),
    )
}

fn destination(script_hex: &str, kind: ScriptType) -> LockingScript {
    LockingScript::destination(Script::from_hex(script_hex).unwrap(), kind)
}

fn legacy_input() -> TransactionInput {
    let utxo = UnspentOutput::from_display_txid(840_000, LEGACY_TXID, 1, 186_367_788).unwrap();
    TransactionInput::new(utxo, spendable(P2PKH_SOURCE, ScriptType::P2pkh))
}

fn witness_input() -> TransactionInput {
    let utxo = UnspentOutput::from_display_txid(840_100, WITNESS_TXID, 0, 895_441).unwrap();
    TransactionInput::new(utxo, spendable(P2WPKH_SOURCE, ScriptType::P2wpkh))
}

fn legacy_tx() -> UnsignedTransaction {
    UnsignedTransaction::new(
        vec![legacy_input()],
        vec![
            TransactionOutput::Destination {
                script: destination(P2PKH_DEST, ScriptType::P2pkh),
                amount: 5_000_000,
            },
            TransactionOutput::Change {
                script: spendable(P2PKH_SOURCE, ScriptType::P2pkh),
                amount: 181_092_520,
            },
        ],
        275_268,
    )
}

fn witness_tx() -> UnsignedTransaction {
    UnsignedTransaction::new(
        vec![witness_input()],
        vec![
            TransactionOutput::Destination {
                script: destination(P2WPKH_DEST, ScriptType::P2wpkh),
                amount: 10_000,
            },
            TransactionOutput::Change {
                script: spendable(P2WPKH_SOURCE, ScriptType::P2wpkh),
                amount: 885_300,
            },
        ],
        141,
    )
}

fn metadata() -> TransactionMetadata {
    TransactionMetadata::new("source-address", "destination-address")
}

/// Sign every preimage hash with the fixed fixture signature.
fn sign_all(hashes: &[[u8; 32]]) -> Vec<SignatureRecord> {
    hashes
        .iter()
        .map(|hash| {
            SignatureRecord::new(hex::decode(DER_SIG).unwrap(), hex::decode(PUBKEY).unwrap(), *hash)
        })
        .collect()
}

// -----------------------------------------------------------------------
// Legacy end-to-end vector
// -----------------------------------------------------------------------

/// Expected preimage hash for the single legacy input.
const LEGACY_PREIMAGE_HASH: &str =
    "3978496b779b33f676614dd63916abe69dc29bbef362bcd8aad567f0df958608";

/// Expected compiled bytes for the legacy spend-with-change transaction.
const LEGACY_COMPILED: &str = "0100000001592a4158e35d7c6ac64ca3d0417fa081abf60d6c56d6297a9705b2b6cca4e2b9010000006a47304402201f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f02202e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e012102c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4ffffffff02404b4c00000000001976a9140406b1ed1e51f82530bbb59e27b1d1d8f9bbbf5e88aca840cb0a000000001976a914aab0fd6c706fa7c873eba255058b03879e038c8888ac00000000";

#[test]
fn test_legacy_preimage_hash() {
    let compiler = TransactionCompiler::new();
    let hashes = compiler.preimage_hashes(&legacy_tx(), &metadata()).unwrap();
    assert_eq!(hashes.len(), 1);
    assert_eq!(hex::encode(hashes[0]), LEGACY_PREIMAGE_HASH);
}

#[test]
fn test_legacy_compile() {
    let compiler = TransactionCompiler::new();
    let tx = legacy_tx();
    let hashes = compiler.preimage_hashes(&tx, &metadata()).unwrap();
    let bytes = compiler.compile(&tx, &sign_all(&hashes), &metadata()).unwrap();
    assert_eq!(hex::encode(&bytes), LEGACY_COMPILED);
    // No witness marker in a pure legacy transaction.
    assert_ne!(&bytes[4..6], &[0x00, 0x01]);
}

#[test]
fn test_legacy_compiled_structure() {
    let compiler = TransactionCompiler::new();
    let tx = legacy_tx();
    let hashes = compiler.preimage_hashes(&tx, &metadata()).unwrap();
    let bytes = compiler.compile(&tx, &sign_all(&hashes), &metadata()).unwrap();

    // Walk the compiled bytes and verify the field layout.
    let mut reader = WireReader::new(&bytes);
    assert_eq!(reader.read_u32_le().unwrap(), 1, "version");
    assert_eq!(reader.read_varint().unwrap().value(), 1, "input count");

    let txid = reader.read_bytes(32).unwrap();
    assert_eq!(txid, tx.inputs[0].previous_output.tx_id.as_bytes());
    assert_eq!(reader.read_u32_le().unwrap(), 1, "output index");

    let script_sig_len = reader.read_varint().unwrap().value() as usize;
    // push(71-byte sig+type) + push(33-byte pubkey) = 1 + 71 + 1 + 33.
    assert_eq!(script_sig_len, 106);
    reader.read_bytes(script_sig_len).unwrap();
    assert_eq!(reader.read_u32_le().unwrap(), 0xFFFF_FFFF, "sequence");

    assert_eq!(reader.read_varint().unwrap().value(), 2, "output count");
    assert_eq!(reader.read_u64_le().unwrap(), 5_000_000, "dest amount");
    let dest_len = reader.read_varint().unwrap().value() as usize;
    assert_eq!(hex::encode(reader.read_bytes(dest_len).unwrap()), P2PKH_DEST);
    assert_eq!(reader.read_u64_le().unwrap(), 181_092_520, "change amount");
    let change_len = reader.read_varint().unwrap().value() as usize;
    assert_eq!(
        hex::encode(reader.read_bytes(change_len).unwrap()),
        P2PKH_SOURCE
    );

    assert_eq!(reader.read_u32_le().unwrap(), 0, "lock time");
    assert_eq!(reader.remaining(), 0);
}

// -----------------------------------------------------------------------
// Memo (OP_RETURN) vector
// -----------------------------------------------------------------------

/// Expected preimage hash for the legacy input once a "hi" memo is attached.
const MEMO_PREIMAGE_HASH: &str =
    "8823deb061fa14983787e1cfeadf5d977b2c6eeb3fab5e1ee80b0712db25367c";

#[test]
fn test_memo_changes_preimage() {
    let compiler = TransactionCompiler::new();
    let tx = legacy_tx();
    let plain = compiler.preimage_hashes(&tx, &metadata()).unwrap();
    let with_memo = compiler
        .preimage_hashes(&tx, &metadata().with_memo(b"hi".to_vec()))
        .unwrap();

    assert_eq!(hex::encode(with_memo[0]), MEMO_PREIMAGE_HASH);
    assert_ne!(plain[0], with_memo[0]);
}

#[test]
fn test_memo_output_bytes() {
    let compiler = TransactionCompiler::new();
    let tx = legacy_tx();
    let meta = metadata().with_memo(b"hi".to_vec());
    let hashes = compiler.preimage_hashes(&tx, &meta).unwrap();
    let bytes = compiler.compile(&tx, &sign_all(&hashes), &meta).unwrap();
    let compiled_hex = hex::encode(&bytes);

    // Zero-value output carrying `OP_RETURN 0x02 "hi"`.
    assert!(compiled_hex.contains("0000000000000000046a026869"));

    // Output count goes from 2 to 3; everything before it is unchanged.
    let plain_hashes = compiler.preimage_hashes(&tx, &metadata()).unwrap();
    let plain = compiler
        .compile(&tx, &sign_all(&plain_hashes), &metadata())
        .unwrap();
    assert_eq!(bytes.len(), plain.len() + 13);
}

// -----------------------------------------------------------------------
// Witness end-to-end vector
// -----------------------------------------------------------------------

/// Expected BIP-143 preimage hash for the single p2wpkh input.
const WITNESS_PREIMAGE_HASH: &str =
    "018670ec8b83a08c9f9e8f23cb85ad400b90b20ae1e7f7968d5e37d046d3d3fb";

/// Expected compiled bytes for the witness spend-with-change transaction.
const WITNESS_COMPILED: &str = "01000000000101d3ee2a4c3b158dcc724f287ff28e334902a4c38d28b5d9d56f1a7087d65cdf420000000000ffffffff02102700000000000016001494b3fd4bbbca418dd527de6ec2b2a2c0e39ef1ea34820d00000000001600142b01c9166ed6f4ed43c8de6ebedcafd3b5b1bf5b0247304402201f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f02202e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e012102c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c4c400000000";

#[test]
fn test_witness_preimage_hash() {
    let compiler = TransactionCompiler::new();
    let hashes = compiler.preimage_hashes(&witness_tx(), &metadata()).unwrap();
    assert_eq!(hashes.len(), 1);
    assert_eq!(hex::encode(hashes[0]), WITNESS_PREIMAGE_HASH);
}

#[test]
fn test_witness_compile() {
    let compiler = TransactionCompiler::new();
    let tx = witness_tx();
    let hashes = compiler.preimage_hashes(&tx, &metadata()).unwrap();
    let bytes = compiler.compile(&tx, &sign_all(&hashes), &metadata()).unwrap();
    let compiled_hex = hex::encode(&bytes);

    assert_eq!(compiled_hex, WITNESS_COMPILED);
    // Marker and flag sit right after the 4-byte version.
    assert!(compiled_hex.starts_with("010000000001"));
    // scriptSig of the witness input is empty.
    assert_eq!(bytes[4 + 2 + 1 + 36], 0x00);
    // Lock time closes the transaction.
    assert!(compiled_hex.ends_with("00000000"));
}

// -----------------------------------------------------------------------
// Mixed legacy + witness inputs
// -----------------------------------------------------------------------

const MIXED_LEGACY_HASH: &str =
    "ed885897ebfe4c4b00620cef8a38fa387b0f1029e15cdb210bad97aa4d452338";
const MIXED_WITNESS_HASH: &str =
    "ae545268f3f9763221fdf6217aabe34caeb0459047b0b6911de61b635ee21e32";

fn mixed_tx() -> UnsignedTransaction {
    UnsignedTransaction::new(
        vec![legacy_input(), witness_input()],
        vec![TransactionOutput::Destination {
            script: destination(P2PKH_DEST, ScriptType::P2pkh),
            amount: 5_000_000,
        }],
        182_263_229,
    )
}

#[test]
fn test_mixed_preimages_branch_per_input() {
    let compiler = TransactionCompiler::new();
    let hashes = compiler.preimage_hashes(&mixed_tx(), &metadata()).unwrap();
    assert_eq!(hashes.len(), 2);
    assert_eq!(hex::encode(hashes[0]), MIXED_LEGACY_HASH);
    assert_eq!(hex::encode(hashes[1]), MIXED_WITNESS_HASH);
}

#[test]
fn test_mixed_compile_witness_placement() {
    let compiler = TransactionCompiler::new();
    let tx = mixed_tx();
    let hashes = compiler.preimage_hashes(&tx, &metadata()).unwrap();
    let bytes = compiler.compile(&tx, &sign_all(&hashes), &metadata()).unwrap();
    let compiled_hex = hex::encode(&bytes);

    // Marker+flag present because one input is witness.
    assert!(compiled_hex.starts_with("01000000000102"));
    // The legacy input's witness stack is an explicit empty stack (0x00)
    // right before the witness input's two-item stack.
    assert!(compiled_hex.contains("88ac000247304402"));
}

// -----------------------------------------------------------------------
// Determinism and fail-fast validation
// -----------------------------------------------------------------------

#[test]
fn test_compile_is_deterministic() {
    let compiler = TransactionCompiler::new();
    let tx = legacy_tx();
    let hashes = compiler.preimage_hashes(&tx, &metadata()).unwrap();
    let signatures = sign_all(&hashes);
    let first = compiler.compile(&tx, &signatures, &metadata()).unwrap();
    let second = compiler.compile(&tx, &signatures, &metadata()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_signature_count_mismatch() {
    let compiler = TransactionCompiler::new();
    let tx = legacy_tx();
    let result = compiler.compile(&tx, &[], &metadata());
    match result {
        Err(TransactionError::SignatureCountMismatch { expected, got }) => {
            assert_eq!(expected, 1);
            assert_eq!(got, 0);
        }
        other => panic!("expected SignatureCountMismatch, got {:?}", other),
    }
}

#[test]
fn test_zero_inputs_rejected() {
    let compiler = TransactionCompiler::new();
    let tx = UnsignedTransaction::new(
        vec![],
        vec![TransactionOutput::Destination {
            script: destination(P2PKH_DEST, ScriptType::P2pkh),
            amount: 1,
        }],
        0,
    );
    assert!(matches!(
        compiler.preimage_hashes(&tx, &metadata()),
        Err(TransactionError::MalformedTransaction(_))
    ));
}

#[test]
fn test_empty_output_script_rejected() {
    let compiler = TransactionCompiler::new();
    let tx = UnsignedTransaction::new(
        vec![legacy_input()],
        vec![TransactionOutput::Destination {
            script: LockingScript::destination(Script::new(), ScriptType::P2pkh),
            amount: 1,
        }],
        0,
    );
    assert!(matches!(
        compiler.preimage_hashes(&tx, &metadata()),
        Err(TransactionError::MalformedTransaction(_))
    ));
}

#[test]
fn test_amount_accessors() {
    let tx = legacy_tx();
    assert_eq!(tx.input_count(), 1);
    assert_eq!(tx.output_count(), 2);
    assert_eq!(tx.total_input_amount(), 186_367_788);
    assert_eq!(tx.total_output_amount(), 5_000_000 + 181_092_520);
    // The carried fee matches what the sums imply.
    assert_eq!(
        tx.total_input_amount() - tx.total_output_amount(),
        tx.fee
    );
}
