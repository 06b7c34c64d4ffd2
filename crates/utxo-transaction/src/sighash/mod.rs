//! Signature hash computation for transaction signing.
//!
//! Computes the hash that is signed to authorize spending an input.
//! Legacy (non-witness) inputs hash a modified serialization of the whole
//! transaction; witness inputs use the BIP-143 digest algorithm, which
//! commits to the value being spent and uses a different serialization
//! order.

use utxo_primitives::hash::sha256d;
use utxo_primitives::wire::{VarInt, WireWriter};

use crate::input::TransactionInput;
use crate::output::WireOutput;

/// Sign all inputs and all outputs (the only mode this engine emits).
pub const SIGHASH_ALL: u32 = 0x01;

// -----------------------------------------------------------------------
// Legacy signature hash
// -----------------------------------------------------------------------

/// Compute the legacy signature hash for a given input.
///
/// The whole transaction is serialized with the signed input's scriptSig
/// replaced by its previous locking script and every other input's
/// scriptSig emptied, the 4-byte sighash type is appended, and the
/// result is double-SHA256 hashed.
///
/// # Arguments
/// * `inputs`       - All transaction inputs, in description order.
/// * `outputs`      - All outputs in final wire form (memo included).
/// * `input_index`  - Index of the input being signed (caller-validated).
/// * `version`      - Transaction version.
/// * `lock_time`    - Transaction lock time.
/// * `sighash_type` - The sighash flags (e.g. `SIGHASH_ALL`).
///
/// # Returns
/// A 32-byte double-SHA256 hash to be signed.
pub(crate) fn legacy_signature_hash(
    inputs: &[TransactionInput],
    outputs: &[WireOutput],
    input_index: usize,
    version: u32,
    lock_time: u32,
    sighash_type: u32,
) -> [u8; 32] {
    let mut writer = WireWriter::with_capacity(256);

    writer.write_u32_le(version);

    writer.write_varint(VarInt::from(inputs.len()));
    for (i, input) in inputs.iter().enumerate() {
        if i == input_index {
            input.write_to(&mut writer, input.script.script.to_bytes());
        } else {
            input.write_to(&mut writer, &[]);
        }
    }

    writer.write_varint(VarInt::from(outputs.len()));
    for output in outputs {
        output.write_to(&mut writer);
    }

    writer.write_u32_le(lock_time);
    writer.write_u32_le(sighash_type);

    sha256d(writer.as_bytes())
}

// -----------------------------------------------------------------------
// BIP-143 (witness) signature hash
// -----------------------------------------------------------------------

/// Compute the BIP-143 witness signature hash for a given input.
///
/// The preimage consists of:
/// 1. nVersion (4 bytes LE)
/// 2. hashPrevouts (32 bytes) - sha256d of all outpoints
/// 3. hashSequence (32 bytes) - sha256d of all sequences
/// 4. outpoint (32+4 bytes) - txid + index of the input being signed
/// 5. scriptCode (varint + script) - the input's locking script
/// 6. value (8 bytes LE) - amount of the output being spent
/// 7. nSequence (4 bytes LE) - sequence of the input being signed
/// 8. hashOutputs (32 bytes) - sha256d of all serialized outputs
/// 9. nLocktime (4 bytes LE)
/// 10. sighashType (4 bytes LE)
///
/// # Arguments
/// * `inputs`       - All transaction inputs, in description order.
/// * `outputs`      - All outputs in final wire form (memo included).
/// * `input_index`  - Index of the input being signed (caller-validated).
/// * `version`      - Transaction version.
/// * `lock_time`    - Transaction lock time.
/// * `sighash_type` - The sighash flags (e.g. `SIGHASH_ALL`).
///
/// # Returns
/// A 32-byte double-SHA256 hash to be signed.
pub(crate) fn witness_signature_hash(
    inputs: &[TransactionInput],
    outputs: &[WireOutput],
    input_index: usize,
    version: u32,
    lock_time: u32,
    sighash_type: u32,
) -> [u8; 32] {
    let input = &inputs[input_index];
    let script_code = input.script.script.to_bytes();

    let mut writer = WireWriter::with_capacity(256);

    writer.write_u32_le(version);
    writer.write_bytes(&prevouts_hash(inputs));
    writer.write_bytes(&sequences_hash(inputs));

    input.write_outpoint(&mut writer);

    writer.write_varint(VarInt::from(script_code.len()));
    writer.write_bytes(script_code);

    writer.write_u64_le(input.previous_output.amount);
    writer.write_u32_le(input.sequence_number);

    writer.write_bytes(&outputs_hash(outputs));
    writer.write_u32_le(lock_time);
    writer.write_u32_le(sighash_type);

    sha256d(writer.as_bytes())
}

// -----------------------------------------------------------------------
// Internal helper functions
// -----------------------------------------------------------------------

/// Compute the double-SHA256 of all input outpoints concatenated.
fn prevouts_hash(inputs: &[TransactionInput]) -> [u8; 32] {
    let mut writer = WireWriter::with_capacity(inputs.len() * 36);
    for input in inputs {
        input.write_outpoint(&mut writer);
    }
    sha256d(writer.as_bytes())
}

/// Compute the double-SHA256 of all input sequence numbers concatenated.
fn sequences_hash(inputs: &[TransactionInput]) -> [u8; 32] {
    let mut writer = WireWriter::with_capacity(inputs.len() * 4);
    for input in inputs {
        writer.write_u32_le(input.sequence_number);
    }
    sha256d(writer.as_bytes())
}

/// Compute the double-SHA256 of all serialized outputs concatenated.
fn outputs_hash(outputs: &[WireOutput]) -> [u8; 32] {
    let mut writer = WireWriter::new();
    for output in outputs {
        output.write_to(&mut writer);
    }
    sha256d(writer.as_bytes())
}
