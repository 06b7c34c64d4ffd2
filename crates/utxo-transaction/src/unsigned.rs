//! Unsigned transaction description and caller-supplied metadata.

use crate::input::TransactionInput;
use crate::output::TransactionOutput;

/// An unsigned transaction: ordered inputs, ordered outputs, and the fee
/// the caller has budgeted.
///
/// Input order is significant: it fixes previous-output ordering in the
/// serialized form and the positional alignment of preimage hashes and
/// signatures. The fee is carried for the caller's bookkeeping; the
/// engine does not consume it (the effective fee is input-sum minus
/// output-sum, which the caller is responsible for balancing).
#[derive(Clone, Debug)]
pub struct UnsignedTransaction {
    /// Ordered inputs being spent.
    pub inputs: Vec<TransactionInput>,

    /// Ordered planned outputs.
    pub outputs: Vec<TransactionOutput>,

    /// The fee budgeted by the caller, in smallest units.
    pub fee: u64,
}

impl UnsignedTransaction {
    /// Create an unsigned transaction description.
    ///
    /// # Arguments
    /// * `inputs` - Ordered inputs.
    /// * `outputs` - Ordered outputs.
    /// * `fee` - The budgeted fee.
    ///
    /// # Returns
    /// A new `UnsignedTransaction`.
    pub fn new(inputs: Vec<TransactionInput>, outputs: Vec<TransactionOutput>, fee: u64) -> Self {
        UnsignedTransaction {
            inputs,
            outputs,
            fee,
        }
    }

    /// Return the number of inputs.
    ///
    /// # Returns
    /// The input count.
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    /// Return the number of outputs.
    ///
    /// # Returns
    /// The output count.
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    /// Compute the sum of all input amounts.
    ///
    /// # Returns
    /// The total smallest units entering the transaction.
    pub fn total_input_amount(&self) -> u64 {
        self.inputs.iter().map(|i| i.previous_output.amount).sum()
    }

    /// Compute the sum of all output amounts.
    ///
    /// # Returns
    /// The total smallest units leaving the transaction (memo outputs
    /// are zero-value and do not contribute).
    pub fn total_output_amount(&self) -> u64 {
        self.outputs.iter().map(|o| o.amount()).sum()
    }
}

/// Caller-supplied context for a transaction build attempt.
///
/// Only the memo participates in serialization; when present, the
/// compiler appends a zero-value OP_RETURN output carrying it. The
/// address strings are carried for the caller's records and do not
/// influence script selection.
#[derive(Clone, Debug, Default)]
pub struct TransactionMetadata {
    /// The source address the inputs belong to.
    pub source_address: String,

    /// The destination address being paid.
    pub destination_address: String,

    /// Optional memo payload to embed in an OP_RETURN output.
    pub memo: Option<Vec<u8>>,
}

impl TransactionMetadata {
    /// Create metadata for a transfer between two addresses.
    ///
    /// # Arguments
    /// * `source_address` - The spending address.
    /// * `destination_address` - The receiving address.
    ///
    /// # Returns
    /// Metadata with no memo.
    pub fn new(source_address: impl Into<String>, destination_address: impl Into<String>) -> Self {
        TransactionMetadata {
            source_address: source_address.into(),
            destination_address: destination_address.into(),
            memo: None,
        }
    }

    /// Attach a memo payload.
    ///
    /// # Arguments
    /// * `memo` - The memo bytes to embed.
    ///
    /// # Returns
    /// The metadata with the memo set.
    pub fn with_memo(mut self, memo: Vec<u8>) -> Self {
        self.memo = Some(memo);
        self
    }
}
