//! Reference to a previously confirmed unspent output.
//!
//! Supplied by an external UTXO-index collaborator; never mutated.

use serde::{Deserialize, Serialize};

use utxo_primitives::chainhash::Hash;

use crate::TransactionError;

/// A confirmed output available for spending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnspentOutput {
    /// Height of the block (or ledger round) the output was confirmed in.
    pub block_height: u64,

    /// Transaction ID of the source transaction, internal byte order.
    pub tx_id: Hash,

    /// Index of the output within the source transaction.
    pub output_index: u32,

    /// Value of the output in the smallest unit.
    pub amount: u64,
}

impl UnspentOutput {
    /// Create an unspent-output reference.
    ///
    /// # Arguments
    /// * `block_height` - Confirmation height.
    /// * `tx_id` - Source transaction ID.
    /// * `output_index` - Output index within the source transaction.
    /// * `amount` - Value in smallest units.
    ///
    /// # Returns
    /// A new `UnspentOutput`.
    pub fn new(block_height: u64, tx_id: Hash, output_index: u32, amount: u64) -> Self {
        UnspentOutput {
            block_height,
            tx_id,
            output_index,
            amount,
        }
    }

    /// Create an unspent-output reference from a display-order txid string.
    ///
    /// UTXO indexes report transaction IDs as byte-reversed hex; this
    /// parses that form directly.
    ///
    /// # Arguments
    /// * `block_height` - Confirmation height.
    /// * `tx_id_hex` - Source txid as a 64-character display-order hex string.
    /// * `output_index` - Output index within the source transaction.
    /// * `amount` - Value in smallest units.
    ///
    /// # Returns
    /// `Ok(UnspentOutput)`, or an error if the txid hex is invalid.
    pub fn from_display_txid(
        block_height: u64,
        tx_id_hex: &str,
        output_index: u32,
        amount: u64,
    ) -> Result<Self, TransactionError> {
        let tx_id = Hash::from_hex(tx_id_hex)?;
        Ok(Self::new(block_height, tx_id, output_index, amount))
    }
}
