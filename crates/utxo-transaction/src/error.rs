/// Error types for transaction construction operations.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// The transaction description is structurally invalid (e.g. no inputs
    /// or an output with an empty locking script).
    #[error("malformed transaction: {0}")]
    MalformedTransaction(String),

    /// Compile was called with a signature count different from the
    /// input count.
    #[error("signature count mismatch: {expected} inputs, {got} signatures")]
    SignatureCountMismatch {
        /// The number of inputs in the description.
        expected: usize,
        /// The number of signatures supplied.
        got: usize,
    },

    /// An underlying script error (forwarded from `utxo-script`).
    #[error("script error: {0}")]
    Script(#[from] utxo_script::ScriptError),

    /// An underlying primitives error (forwarded from `utxo-primitives`).
    #[error("primitives error: {0}")]
    Primitives(#[from] utxo_primitives::PrimitivesError),
}
