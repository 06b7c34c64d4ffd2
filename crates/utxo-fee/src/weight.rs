//! BIP-141 weight/vbyte size model for Bitcoin-family chains.
//!
//! Base (non-witness) bytes count four weight units each; witness bytes
//! count one. The estimated size is the weight converted to virtual
//! bytes, rounding up.

use utxo_script::ScriptType;
use utxo_transaction::{TransactionInput, TransactionOutput};

use crate::estimator::FeeEstimator;
use crate::params::NetworkParams;
use crate::FeeError;

/// Fixed transaction overhead: version (4), input count (1), output
/// count (1), lock time (4).
pub const TX_HEADER_SIZE: u64 = 10;

/// Witness marker and flag bytes, present once when any input is witness.
pub const WITNESS_OVERHEAD_SIZE: u64 = 2;

/// Assumed witness bytes per input: a two-item stack with a signature
/// and a compressed public key.
pub const WITNESS_INPUT_SIZE: u64 = 108;

/// Dust floor for witness outputs.
pub const DUST_FLOOR_WITNESS: u64 = 294;

/// Dust floor for non-witness outputs.
pub const DUST_FLOOR_BASE: u64 = 546;

/// Weight-based estimator for Bitcoin-family chains.
#[derive(Clone, Copy, Debug)]
pub struct WeightEstimator {
    params: NetworkParams,
}

impl WeightEstimator {
    /// Create an estimator for a network.
    ///
    /// # Arguments
    /// * `params` - The network's relay parameters.
    ///
    /// # Returns
    /// A new `WeightEstimator`.
    pub fn new(params: NetworkParams) -> Self {
        WeightEstimator { params }
    }
}

impl FeeEstimator for WeightEstimator {
    /// Compute the dust threshold from the relay fee rate.
    ///
    /// `output_size(kind) * dust_relay_fee_rate / 1000`, with the
    /// division truncating, floored at 294 for witness kinds and 546
    /// otherwise.
    fn dust_threshold(&self, script_type: ScriptType) -> u64 {
        let computed = script_type.output_size() * self.params.dust_relay_fee_rate / 1000;
        let floor = if script_type.is_witness() {
            DUST_FLOOR_WITNESS
        } else {
            DUST_FLOOR_BASE
        };
        computed.max(floor)
    }

    /// Estimate the transaction size in virtual bytes.
    ///
    /// Sums the header, per-input, and per-output base sizes; if any
    /// input or output is a witness kind, adds the marker/flag overhead
    /// and the per-input witness cost as witness bytes. The weight is
    /// `base * 4 + witness`, and the result is `ceil(weight / 4)`.
    fn transaction_size(
        &self,
        inputs: &[TransactionInput],
        outputs: &[TransactionOutput],
    ) -> Result<u64, FeeError> {
        let base_size = TX_HEADER_SIZE
            + inputs
                .iter()
                .map(|i| i.script.kind.spend_input_size())
                .sum::<u64>()
            + outputs
                .iter()
                .map(|o| o.script().kind.output_size())
                .sum::<u64>();

        let any_witness = inputs.iter().any(|i| i.script.kind.is_witness())
            || outputs.iter().any(|o| o.script().kind.is_witness());

        let witness_size = if any_witness {
            WITNESS_OVERHEAD_SIZE + WITNESS_INPUT_SIZE * inputs.len() as u64
        } else {
            0
        };

        let weight = base_size * 4 + witness_size;
        Ok(weight / 4 + u64::from(weight % 4 != 0))
    }
}
