/// UTXO SDK - Dust-threshold and transaction-size estimation.
///
/// Provides the `FeeEstimator` trait and its two chain-family
/// implementations: the BIP-141 weight/vbyte model (`WeightEstimator`)
/// and the DAG-chain mass model (`MassEstimator`), together with the
/// network parameters that feed them.

pub mod estimator;
pub mod params;
pub mod weight;
pub mod mass;

mod error;
pub use error::FeeError;
pub use estimator::FeeEstimator;
pub use mass::MassEstimator;
pub use params::NetworkParams;
pub use weight::WeightEstimator;
