//! Network-level parameters consumed by the estimators.

/// Default dust relay fee rate in smallest units per kilobyte.
pub const DEFAULT_DUST_RELAY_FEE_RATE: u64 = 3000;

/// Relay parameters of the target network.
///
/// Supplied by an external network-configuration collaborator; the only
/// value this engine consumes is the dust relay fee rate.
#[derive(Clone, Copy, Debug)]
pub struct NetworkParams {
    /// Dust relay fee rate in smallest units per kilobyte.
    pub dust_relay_fee_rate: u64,
}

impl NetworkParams {
    /// Create parameters with the given dust relay fee rate.
    ///
    /// # Arguments
    /// * `dust_relay_fee_rate` - Fee rate in smallest units per kilobyte.
    ///
    /// # Returns
    /// A new `NetworkParams`.
    pub fn new(dust_relay_fee_rate: u64) -> Self {
        NetworkParams {
            dust_relay_fee_rate,
        }
    }
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self::new(DEFAULT_DUST_RELAY_FEE_RATE)
    }
}
