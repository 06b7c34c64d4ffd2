/// UTXO SDK - Hashing, chain-hash, and wire-format primitives.
///
/// This crate provides the foundational building blocks for the UTXO SDK:
/// - Hash functions (SHA-256, double SHA-256)
/// - Chain hash type for transaction identification
/// - Variable-length integer encoding and wire reader/writer

pub mod hash;
pub mod chainhash;
pub mod wire;

mod error;
pub use error::PrimitivesError;
