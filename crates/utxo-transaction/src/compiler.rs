//! Two-phase transaction compiler.
//!
//! Phase one hands out the per-input preimage hashes an external signer
//! must sign; phase two assembles the broadcast-ready bytes from the
//! description and the returned signatures. Both phases are pure
//! functions of their arguments; the compiler holds only the version
//! and lock time.
//!
//! # Wire format (signed transaction)
//!
//! | Field            | Size                       |
//! |------------------|----------------------------|
//! | version          | 4 bytes (LE)               |
//! | marker + flag    | 0x00 0x01 (witness only)   |
//! | input count      | VarInt                     |
//! | inputs           | variable (per input)       |
//! | output count     | VarInt                     |
//! | outputs          | variable (per output)      |
//! | witness stacks   | one per input (witness only)|
//! | lock_time        | 4 bytes (LE)               |

use utxo_primitives::wire::{VarInt, WireWriter};
use utxo_script::Script;

use crate::output::WireOutput;
use crate::sighash;
use crate::signature::SignatureRecord;
use crate::unsigned::{TransactionMetadata, UnsignedTransaction};
use crate::TransactionError;

/// Witness serialization marker byte, placed right after the version.
const WITNESS_MARKER: u8 = 0x00;

/// Witness serialization flag byte, following the marker.
const WITNESS_FLAG: u8 = 0x01;

/// Compiles an unsigned transaction description into preimage hashes
/// and, given signatures, into final signed bytes.
#[derive(Clone, Copy, Debug)]
pub struct TransactionCompiler {
    /// Transaction format version written to the wire.
    pub version: u32,

    /// Lock time written to the wire.
    pub lock_time: u32,
}

impl TransactionCompiler {
    /// Create a compiler with version 1 and lock time 0.
    ///
    /// # Returns
    /// A `TransactionCompiler` with the standard defaults.
    pub fn new() -> Self {
        TransactionCompiler {
            version: 1,
            lock_time: 0,
        }
    }

    // -----------------------------------------------------------------
    // Phase one: preimages
    // -----------------------------------------------------------------

    /// Compute the hash each input's signer must sign.
    ///
    /// Inputs with a witness locking script use the BIP-143 digest;
    /// all others use the legacy whole-transaction digest. When the
    /// metadata carries a memo, the synthesized OP_RETURN output is
    /// included in the hashed outputs, so a memo changes every
    /// input's preimage relative to the no-memo case.
    ///
    /// # Arguments
    /// * `tx` - The unsigned transaction description.
    /// * `metadata` - Caller context; only the memo is consulted.
    ///
    /// # Returns
    /// One 32-byte hash per input, in input order, or an error if the
    /// description is malformed.
    pub fn preimage_hashes(
        &self,
        tx: &UnsignedTransaction,
        metadata: &TransactionMetadata,
    ) -> Result<Vec<[u8; 32]>, TransactionError> {
        self.validate(tx)?;
        let outputs = self.wire_outputs(tx, metadata)?;

        let hashes = tx
            .inputs
            .iter()
            .enumerate()
            .map(|(index, input)| {
                if input.is_witness() {
                    sighash::witness_signature_hash(
                        &tx.inputs,
                        &outputs,
                        index,
                        self.version,
                        self.lock_time,
                        sighash::SIGHASH_ALL,
                    )
                } else {
                    sighash::legacy_signature_hash(
                        &tx.inputs,
                        &outputs,
                        index,
                        self.version,
                        self.lock_time,
                        sighash::SIGHASH_ALL,
                    )
                }
            })
            .collect();

        Ok(hashes)
    }

    // -----------------------------------------------------------------
    // Phase two: compilation
    // -----------------------------------------------------------------

    /// Assemble the final signed transaction bytes.
    ///
    /// Legacy inputs receive a scriptSig of
    /// `push(signature || sighash-byte) push(public key)`; witness
    /// inputs receive the same two items as a witness stack and an empty
    /// scriptSig. The global marker and flag bytes are emitted right
    /// after the version iff at least one input is a witness input, and
    /// the witness section (one stack per input) precedes the lock time.
    ///
    /// # Arguments
    /// * `tx` - The unsigned transaction description.
    /// * `signatures` - One record per input, in input order.
    /// * `metadata` - Caller context; only the memo is consulted.
    ///
    /// # Returns
    /// The broadcast-ready byte sequence, or an error if the description
    /// is malformed or the signature count does not match the input count.
    pub fn compile(
        &self,
        tx: &UnsignedTransaction,
        signatures: &[SignatureRecord],
        metadata: &TransactionMetadata,
    ) -> Result<Vec<u8>, TransactionError> {
        self.validate(tx)?;
        if signatures.len() != tx.inputs.len() {
            return Err(TransactionError::SignatureCountMismatch {
                expected: tx.inputs.len(),
                got: signatures.len(),
            });
        }

        let outputs = self.wire_outputs(tx, metadata)?;
        let any_witness = tx.inputs.iter().any(|input| input.is_witness());

        let mut writer = WireWriter::with_capacity(256);
        writer.write_u32_le(self.version);

        if any_witness {
            writer.write_u8(WITNESS_MARKER);
            writer.write_u8(WITNESS_FLAG);
        }

        writer.write_varint(VarInt::from(tx.inputs.len()));
        for (input, record) in tx.inputs.iter().zip(signatures) {
            if input.is_witness() {
                input.write_to(&mut writer, &[]);
            } else {
                let script_sig = Self::unlocking_script(record)?;
                input.write_to(&mut writer, script_sig.to_bytes());
            }
        }

        writer.write_varint(VarInt::from(outputs.len()));
        for output in &outputs {
            output.write_to(&mut writer);
        }

        if any_witness {
            for (input, record) in tx.inputs.iter().zip(signatures) {
                if input.is_witness() {
                    Self::write_witness_stack(&mut writer, record);
                } else {
                    writer.write_varint(VarInt::from(0u64));
                }
            }
        }

        writer.write_u32_le(self.lock_time);
        Ok(writer.into_bytes())
    }

    // -----------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------

    /// Reject structurally invalid descriptions.
    fn validate(&self, tx: &UnsignedTransaction) -> Result<(), TransactionError> {
        if tx.inputs.is_empty() {
            return Err(TransactionError::MalformedTransaction(
                "transaction has no inputs".to_string(),
            ));
        }
        if tx.outputs.is_empty() {
            return Err(TransactionError::MalformedTransaction(
                "transaction has no outputs".to_string(),
            ));
        }
        for (index, output) in tx.outputs.iter().enumerate() {
            if output.script().script.is_empty() {
                return Err(TransactionError::MalformedTransaction(format!(
                    "output {} has an empty locking script",
                    index
                )));
            }
        }
        Ok(())
    }

    /// Flatten the planned outputs to wire form, appending the memo
    /// output when the metadata carries one.
    fn wire_outputs(
        &self,
        tx: &UnsignedTransaction,
        metadata: &TransactionMetadata,
    ) -> Result<Vec<WireOutput>, TransactionError> {
        let mut outputs: Vec<WireOutput> = tx
            .outputs
            .iter()
            .map(|output| WireOutput {
                amount: output.amount(),
                script: output.script().script.to_bytes().to_vec(),
            })
            .collect();

        if let Some(memo) = &metadata.memo {
            let script = Script::op_return(memo)?;
            outputs.push(WireOutput {
                amount: 0,
                script: script.to_bytes().to_vec(),
            });
        }

        Ok(outputs)
    }

    /// Build a legacy scriptSig from a signature record.
    fn unlocking_script(record: &SignatureRecord) -> Result<Script, TransactionError> {
        let mut script = Script::new();
        script.append_push_data(&record.signature_with_hash_type(sighash::SIGHASH_ALL as u8))?;
        script.append_push_data(&record.public_key)?;
        Ok(script)
    }

    /// Write a two-item witness stack for a signed witness input.
    fn write_witness_stack(writer: &mut WireWriter, record: &SignatureRecord) {
        let signature = record.signature_with_hash_type(sighash::SIGHASH_ALL as u8);
        writer.write_varint(VarInt::from(2u64));
        writer.write_varint(VarInt::from(signature.len()));
        writer.write_bytes(&signature);
        writer.write_varint(VarInt::from(record.public_key.len()));
        writer.write_bytes(&record.public_key);
    }
}

impl Default for TransactionCompiler {
    fn default() -> Self {
        Self::new()
    }
}
