//! Unsigned transaction outputs.
//!
//! An output either pays a destination script or returns change to a
//! source script. A third, implicit kind, the zero-value memo output,
//! exists only inside the compiler, which synthesizes it on demand.
//!
//! # Wire format
//!
//! | Field            | Size           |
//! |------------------|----------------|
//! | amount           | 8 bytes (LE)   |
//! | script length    | VarInt         |
//! | locking script   | variable       |

use utxo_primitives::wire::{VarInt, WireWriter};
use utxo_script::LockingScript;

/// A planned output of an unsigned transaction.
#[derive(Clone, Debug)]
pub enum TransactionOutput {
    /// Pay the given amount to a destination locking script.
    Destination {
        /// The destination's locking script.
        script: LockingScript,
        /// The amount in smallest units.
        amount: u64,
    },
    /// Return the given amount as change to a source locking script.
    Change {
        /// The change (source) locking script.
        script: LockingScript,
        /// The amount in smallest units.
        amount: u64,
    },
}

impl TransactionOutput {
    /// Return the output amount in smallest units.
    ///
    /// # Returns
    /// The amount.
    pub fn amount(&self) -> u64 {
        match self {
            TransactionOutput::Destination { amount, .. } => *amount,
            TransactionOutput::Change { amount, .. } => *amount,
        }
    }

    /// Return the output's locking script.
    ///
    /// # Returns
    /// A reference to the `LockingScript`.
    pub fn script(&self) -> &LockingScript {
        match self {
            TransactionOutput::Destination { script, .. } => script,
            TransactionOutput::Change { script, .. } => script,
        }
    }
}

/// An output flattened to its final wire form.
///
/// Once serialization begins, the destination/change distinction no
/// longer matters and the synthesized memo output joins the list; both
/// sighash computation and compilation walk this form.
#[derive(Clone, Debug)]
pub(crate) struct WireOutput {
    /// The amount in smallest units.
    pub amount: u64,

    /// The raw locking-script bytes.
    pub script: Vec<u8>,
}

impl WireOutput {
    /// Serialize this output into a writer.
    ///
    /// # Arguments
    /// * `writer` - The writer to append serialized bytes to.
    pub fn write_to(&self, writer: &mut WireWriter) {
        writer.write_u64_le(self.amount);
        writer.write_varint(VarInt::from(self.script.len()));
        writer.write_bytes(&self.script);
    }
}
