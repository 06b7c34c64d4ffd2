//! Mass-based size model for the DAG-style chain.
//!
//! The chain prices transactions by "mass": a composite of serialized
//! size, script-public-key bytes, and signature-operation count. There
//! is no witness concept; the only spendable input kind is `P2pk`.

use utxo_script::ScriptType;
use utxo_transaction::{TransactionInput, TransactionOutput};

use crate::estimator::FeeEstimator;
use crate::FeeError;

/// Mass charged per serialized transaction byte.
pub const MASS_PER_TX_BYTE: u64 = 1;

/// Mass charged per script-public-key byte (including its 2-byte version).
pub const MASS_PER_SCRIPT_PUB_KEY_BYTE: u64 = 10;

/// Mass charged per signature operation; one is assumed per input.
pub const MASS_PER_SIG_OP: u64 = 1000;

/// Serialized size of the fixed transaction header.
pub const TRANSACTION_HEADER_SIZE: u64 = {
    2    // transaction version
    + 8  // number of inputs
    + 8  // number of outputs
    + 8  // lock time
    + 20 // subnetwork id
    + 8  // gas
    + 32 // payload hash
    + 8  // payload length (the payload itself is empty)
};

/// Serialized size of one input with its assumed signature script.
pub const TRANSACTION_INPUT_SIZE: u64 = {
    32   // previous transaction id
    + 4  // previous output index
    + 8  // signature script length
    + 66 // signature script: 1 push byte + 64-byte signature + 1 hash type
    + 8  // sequence
};

/// Serialized size of one output, excluding its script bytes.
pub const TRANSACTION_OUTPUT_BASE_SIZE: u64 = {
    8    // value
    + 2  // script version
    + 8  // script length
};

/// Dust floor applied to every output kind.
pub const DUST_FLOOR: u64 = 546;

/// Mass-based estimator for the DAG-style chain.
#[derive(Clone, Copy, Debug)]
pub struct MassEstimator {
    /// Fee rate applied to output sizes for dust computation, in
    /// smallest units per kilobyte.
    mass_rate: u64,
}

impl MassEstimator {
    /// Create an estimator with the given dust mass rate.
    ///
    /// # Arguments
    /// * `mass_rate` - Rate in smallest units per kilobyte.
    ///
    /// # Returns
    /// A new `MassEstimator`.
    pub fn new(mass_rate: u64) -> Self {
        MassEstimator { mass_rate }
    }
}

impl FeeEstimator for MassEstimator {
    /// Compute the dust threshold from the mass rate.
    ///
    /// `output_size(kind) * mass_rate / 1000`, with the division
    /// truncating, floored at 546 for every kind; the chain has no
    /// witness discount.
    fn dust_threshold(&self, script_type: ScriptType) -> u64 {
        let computed = script_type.output_size() * self.mass_rate / 1000;
        computed.max(DUST_FLOOR)
    }

    /// Estimate the transaction mass.
    ///
    /// Any input kind other than `P2pk` is unspendable on this chain and
    /// is rejected. The mass is the sum of the byte-size term, the
    /// script-public-key term, and the signature-operation term.
    fn transaction_size(
        &self,
        inputs: &[TransactionInput],
        outputs: &[TransactionOutput],
    ) -> Result<u64, FeeError> {
        for input in inputs {
            if input.script.kind != ScriptType::P2pk {
                return Err(FeeError::UnspendableScript(input.script.kind));
            }
        }

        let outputs_size: u64 = outputs
            .iter()
            .map(|o| TRANSACTION_OUTPUT_BASE_SIZE + o.script().kind.locking_script_size())
            .sum();
        let size = TRANSACTION_HEADER_SIZE
            + TRANSACTION_INPUT_SIZE * inputs.len() as u64
            + outputs_size;

        let script_pub_key_mass: u64 = outputs
            .iter()
            .map(|o| (2 + o.script().kind.locking_script_size()) * MASS_PER_SCRIPT_PUB_KEY_BYTE)
            .sum();

        let sig_op_mass = inputs.len() as u64 * MASS_PER_SIG_OP;

        Ok(size * MASS_PER_TX_BYTE + script_pub_key_mass + sig_op_mass)
    }
}
