//! Closed taxonomy of supported locking-script kinds.
//!
//! Each kind carries static byte-size figures used by the fee estimators:
//! the typical size of an input spending that kind and the size of the
//! locking script itself. Every new kind must be handled exhaustively
//! here and in the serializer's legacy/witness branch.

use std::fmt;

use crate::{Script, ScriptError};

/// The kind of a locking script.
///
/// Exactly one tag applies per script. Witness kinds place their
/// signature data in the transaction's witness section instead of the
/// scriptSig field and use the BIP-143 preimage algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScriptType {
    /// Pay to public key: `<pubkey> OP_CHECKSIG`.
    P2pk,
    /// Pay to public key hash.
    P2pkh,
    /// Pay to script hash.
    P2sh,
    /// Version-0 witness, 20-byte key-hash program.
    P2wpkh,
    /// Version-0 witness, 32-byte script-hash program.
    P2wsh,
    /// Version-1 witness (taproot), 32-byte program.
    P2tr,
}

impl ScriptType {
    /// Whether this kind places signature data in the witness section.
    ///
    /// # Returns
    /// `true` for `P2wpkh`, `P2wsh`, and `P2tr`.
    pub fn is_witness(&self) -> bool {
        matches!(self, ScriptType::P2wpkh | ScriptType::P2wsh | ScriptType::P2tr)
    }

    /// Typical serialized size in bytes of an input spending this kind.
    ///
    /// Non-witness figures assume worst-case signature encodings; the
    /// P2pkh figure includes an uncompressed public key. Witness inputs
    /// contribute only the fixed outpoint/sequence skeleton here; their
    /// signature data is accounted separately as witness bytes.
    ///
    /// # Returns
    /// The spend-input byte count.
    pub fn spend_input_size(&self) -> u64 {
        match self {
            ScriptType::P2pk => 114,
            ScriptType::P2pkh => 180,
            ScriptType::P2sh => 297,
            ScriptType::P2wpkh => 41,
            ScriptType::P2wsh => 41,
            ScriptType::P2tr => 41,
        }
    }

    /// Size in bytes of the locking script for this kind.
    ///
    /// # Returns
    /// The locking-script byte count.
    pub fn locking_script_size(&self) -> u64 {
        match self {
            ScriptType::P2pk => 35,
            ScriptType::P2pkh => 25,
            ScriptType::P2sh => 23,
            ScriptType::P2wpkh => 22,
            ScriptType::P2wsh => 34,
            ScriptType::P2tr => 34,
        }
    }

    /// Serialized size in bytes of an output locking to this kind.
    ///
    /// 8 bytes of amount, a single-byte script-length varint, and the
    /// locking script itself.
    ///
    /// # Returns
    /// The output byte count.
    pub fn output_size(&self) -> u64 {
        8 + 1 + self.locking_script_size()
    }

    /// Classify a raw script into its kind.
    ///
    /// # Arguments
    /// * `script` - The locking script bytes to classify.
    ///
    /// # Returns
    /// The matching `ScriptType`, or `UnknownPattern` if the bytes match
    /// none of the supported kinds.
    pub fn classify(script: &Script) -> Result<Self, ScriptError> {
        if script.is_empty() {
            return Err(ScriptError::EmptyScript);
        }
        if script.is_p2pkh() {
            Ok(ScriptType::P2pkh)
        } else if script.is_p2pk() {
            Ok(ScriptType::P2pk)
        } else if script.is_p2sh() {
            Ok(ScriptType::P2sh)
        } else if script.is_p2wpkh() {
            Ok(ScriptType::P2wpkh)
        } else if script.is_p2wsh() {
            Ok(ScriptType::P2wsh)
        } else if script.is_p2tr() {
            Ok(ScriptType::P2tr)
        } else {
            Err(ScriptError::UnknownPattern(script.to_hex()))
        }
    }
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScriptType::P2pk => "p2pk",
            ScriptType::P2pkh => "p2pkh",
            ScriptType::P2sh => "p2sh",
            ScriptType::P2wpkh => "p2wpkh",
            ScriptType::P2wsh => "p2wsh",
            ScriptType::P2tr => "p2tr",
        };
        write!(f, "{}", name)
    }
}
