/// Error types for script operations.
///
/// Covers hex decoding, push-data encoding, and script classification
/// problems.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// Hex decoding error.
    #[error("hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),

    /// Script is empty when a non-empty script was expected.
    #[error("script is empty")]
    EmptyScript,

    /// Push data exceeds maximum encodable size.
    #[error("push data too big: {0} bytes")]
    PushDataTooBig(usize),

    /// The script bytes match none of the supported locking patterns.
    #[error("unrecognized script pattern: {0}")]
    UnknownPattern(String),
}
