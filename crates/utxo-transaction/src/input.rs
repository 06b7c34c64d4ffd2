//! Transaction input pairing an unspent output with its locking script.
//!
//! The locking script is needed to know the spend path (legacy vs.
//! witness) and, for witness inputs, the amount being spent during
//! preimage computation.
//!
//! # Wire format (base transaction body)
//!
//! | Field              | Size             |
//! |--------------------|------------------|
//! | source txid        | 32 bytes (LE)    |
//! | source output index| 4 bytes (LE)     |
//! | scriptSig length   | VarInt           |
//! | scriptSig          | variable         |
//! | sequence           | 4 bytes (LE)     |

use utxo_primitives::wire::{VarInt, WireWriter};
use utxo_script::LockingScript;

use crate::utxo::UnspentOutput;

/// Default sequence number indicating a finalized input (no relative
/// lock-time).
pub const DEFAULT_SEQUENCE_NUMBER: u32 = 0xFFFF_FFFF;

/// A single input of an unsigned transaction.
#[derive(Clone, Debug)]
pub struct TransactionInput {
    /// The previously confirmed output being spent.
    pub previous_output: UnspentOutput,

    /// The locking script that secured the previous output.
    pub script: LockingScript,

    /// Sequence number. Defaults to `0xFFFFFFFF` (finalized).
    pub sequence_number: u32,
}

impl TransactionInput {
    /// Create an input spending the given output.
    ///
    /// # Arguments
    /// * `previous_output` - The output being spent.
    /// * `script` - The locking script that secured it.
    ///
    /// # Returns
    /// A `TransactionInput` with the default sequence number.
    pub fn new(previous_output: UnspentOutput, script: LockingScript) -> Self {
        TransactionInput {
            previous_output,
            script,
            sequence_number: DEFAULT_SEQUENCE_NUMBER,
        }
    }

    /// Whether this input spends via the witness path.
    ///
    /// # Returns
    /// `true` if the locking script's kind is a witness kind.
    pub fn is_witness(&self) -> bool {
        self.script.kind.is_witness()
    }

    /// Write this input's outpoint (txid + output index) to a writer.
    ///
    /// # Arguments
    /// * `writer` - The writer to append to.
    pub(crate) fn write_outpoint(&self, writer: &mut WireWriter) {
        writer.write_bytes(self.previous_output.tx_id.as_bytes());
        writer.write_u32_le(self.previous_output.output_index);
    }

    /// Write this input in base-body wire form with the given scriptSig.
    ///
    /// The scriptSig is length-prefixed; an empty slice writes a
    /// zero-length field (used for witness inputs and for the emptied
    /// inputs of a legacy preimage).
    ///
    /// # Arguments
    /// * `writer` - The writer to append to.
    /// * `script_sig` - The scriptSig bytes, possibly empty.
    pub(crate) fn write_to(&self, writer: &mut WireWriter, script_sig: &[u8]) {
        self.write_outpoint(writer);
        writer.write_varint(VarInt::from(script_sig.len()));
        writer.write_bytes(script_sig);
        writer.write_u32_le(self.sequence_number);
    }
}
