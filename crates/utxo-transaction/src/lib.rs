/// UTXO SDK - Transaction construction, preimage hashing, and compilation.
///
/// Provides the unsigned-transaction description (inputs, outputs, fee),
/// signature-record type, sighash computation for legacy and witness
/// inputs, and the two-phase compiler producing broadcast-ready bytes.

pub mod utxo;
pub mod input;
pub mod output;
pub mod signature;
pub mod unsigned;
pub mod sighash;
pub mod compiler;

mod error;
pub use compiler::TransactionCompiler;
pub use error::TransactionError;
pub use input::TransactionInput;
pub use output::TransactionOutput;
pub use signature::SignatureRecord;
pub use unsigned::{TransactionMetadata, UnsignedTransaction};
pub use utxo::UnspentOutput;

#[cfg(test)]
mod tests;
