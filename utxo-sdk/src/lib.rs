#![deny(missing_docs)]

//! UTXO SDK - Complete SDK.
//!
//! Re-exports all UTXO SDK components for convenient single-crate usage.

pub use utxo_fee as fee;
pub use utxo_primitives as primitives;
pub use utxo_script as script;
pub use utxo_transaction as transaction;
