//! The estimation seam shared by all chain families.

use utxo_script::ScriptType;
use utxo_transaction::{TransactionInput, TransactionOutput};

use crate::FeeError;

/// Dust-threshold and transaction-size estimation for one chain family.
///
/// Implementations are selected by chain configuration at construction
/// time; callers hold a concrete estimator (or a trait object) and never
/// inspect the chain at runtime. All methods are pure functions of their
/// arguments.
pub trait FeeEstimator {
    /// Compute the dust threshold for outputs of the given kind.
    ///
    /// Outputs below this value cost more to spend than they are worth
    /// and are rejected by relay policy.
    ///
    /// # Arguments
    /// * `script_type` - The output's locking-script kind.
    ///
    /// # Returns
    /// The minimum economic output value in smallest units.
    fn dust_threshold(&self, script_type: ScriptType) -> u64;

    /// Estimate the fee-relevant size of a transaction.
    ///
    /// The unit depends on the chain family: virtual bytes for the
    /// weight model, mass for the mass model.
    ///
    /// # Arguments
    /// * `inputs` - The inputs that would be spent.
    /// * `outputs` - The planned outputs.
    ///
    /// # Returns
    /// The estimated size, or an error if an input's script type cannot
    /// be spent on this chain.
    fn transaction_size(
        &self,
        inputs: &[TransactionInput],
        outputs: &[TransactionOutput],
    ) -> Result<u64, FeeError>;
}
