use utxo_script::ScriptType;

/// Error types for fee and size estimation.
#[derive(Debug, thiserror::Error)]
pub enum FeeError {
    /// An input uses a script type the active chain cannot spend.
    #[error("unspendable script type {0} for this chain")]
    UnspendableScript(ScriptType),
}
