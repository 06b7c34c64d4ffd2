/// Script type - a sequence of opcodes and data pushes.
///
/// Scripts appear in transaction outputs (locking) and inputs (unlocking)
/// to define and satisfy spending conditions. The Script wraps a `Vec<u8>`
/// and provides methods for construction, classification, and hex
/// serialization.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::opcodes::*;
use crate::ScriptError;

/// A locking or unlocking script, represented as a byte vector newtype.
#[derive(Clone, PartialEq, Eq)]
pub struct Script(Vec<u8>);

impl Script {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Create a new empty script.
    ///
    /// # Returns
    /// An empty `Script` instance.
    pub fn new() -> Self {
        Script(Vec::new())
    }

    /// Create a script from a hex-encoded string.
    ///
    /// # Arguments
    /// * `hex_str` - A hex string (e.g. "76a914...88ac").
    ///
    /// # Returns
    /// A `Script` wrapping the decoded bytes, or an error if the hex is invalid.
    pub fn from_hex(hex_str: &str) -> Result<Self, ScriptError> {
        Ok(Script(hex::decode(hex_str)?))
    }

    /// Create a script from raw bytes.
    ///
    /// # Arguments
    /// * `bytes` - Raw script bytes.
    ///
    /// # Returns
    /// A `Script` wrapping a copy of the given bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Script(bytes.to_vec())
    }

    /// Create an OP_RETURN data-carrier script.
    ///
    /// Produces `OP_RETURN <push-prefix> <data>`, the script used for
    /// zero-value memo outputs.
    ///
    /// # Arguments
    /// * `data` - The payload to embed.
    ///
    /// # Returns
    /// The data-carrier `Script`, or an error if the payload cannot be
    /// encoded as a single push.
    pub fn op_return(data: &[u8]) -> Result<Self, ScriptError> {
        let mut script = Script(vec![OP_RETURN]);
        script.append_push_data(data)?;
        Ok(script)
    }

    // -----------------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------------

    /// Encode the script as a hex string.
    ///
    /// # Returns
    /// A lowercase hex representation of the script bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Return a reference to the underlying bytes.
    ///
    /// # Returns
    /// A byte slice of the script contents.
    pub fn to_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Return the length of the script in bytes.
    ///
    /// # Returns
    /// The number of bytes in the script.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the script is empty (zero bytes).
    ///
    /// # Returns
    /// `true` if the script has no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Append a data push with the correct push prefix.
    ///
    /// Data of 1-75 bytes uses a direct length opcode; longer payloads
    /// use OP_PUSHDATA1/2/4 as required.
    ///
    /// # Arguments
    /// * `data` - The bytes to push.
    ///
    /// # Returns
    /// `Ok(())` on success, or `PushDataTooBig` if the payload exceeds
    /// the 4-byte length prefix range.
    pub fn append_push_data(&mut self, data: &[u8]) -> Result<(), ScriptError> {
        let len = data.len();
        if len <= OP_DATA_75 as usize {
            self.0.push(len as u8);
        } else if len <= 0xff {
            self.0.push(OP_PUSHDATA1);
            self.0.push(len as u8);
        } else if len <= 0xffff {
            self.0.push(OP_PUSHDATA2);
            self.0.extend_from_slice(&(len as u16).to_le_bytes());
        } else if len <= 0xffffffff {
            self.0.push(OP_PUSHDATA4);
            self.0.extend_from_slice(&(len as u32).to_le_bytes());
        } else {
            return Err(ScriptError::PushDataTooBig(len));
        }
        self.0.extend_from_slice(data);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Script classification
    // -----------------------------------------------------------------------

    /// Check if this is a Pay-to-Public-Key (P2PK) output script.
    ///
    /// Pattern: `<pubkey> OP_CHECKSIG` (33-byte compressed or 65-byte
    /// uncompressed public key with a valid prefix byte).
    ///
    /// # Returns
    /// `true` if the script matches the P2PK pattern.
    pub fn is_p2pk(&self) -> bool {
        let b = &self.0;
        match b.len() {
            35 => {
                b[0] == OP_DATA_33
                    && (b[1] == 0x02 || b[1] == 0x03)
                    && b[34] == OP_CHECKSIG
            }
            67 => {
                b[0] == OP_DATA_65
                    && (b[1] == 0x04 || b[1] == 0x06 || b[1] == 0x07)
                    && b[66] == OP_CHECKSIG
            }
            _ => false,
        }
    }

    /// Check if this is a Pay-to-Public-Key-Hash (P2PKH) output script.
    ///
    /// Pattern: `OP_DUP OP_HASH160 <20 bytes> OP_EQUALVERIFY OP_CHECKSIG`
    ///
    /// # Returns
    /// `true` if the script matches the P2PKH pattern.
    pub fn is_p2pkh(&self) -> bool {
        let b = &self.0;
        b.len() == 25
            && b[0] == OP_DUP
            && b[1] == OP_HASH160
            && b[2] == OP_DATA_20
            && b[23] == OP_EQUALVERIFY
            && b[24] == OP_CHECKSIG
    }

    /// Check if this is a Pay-to-Script-Hash (P2SH) output script.
    ///
    /// Pattern: `OP_HASH160 <20 bytes> OP_EQUAL`
    ///
    /// # Returns
    /// `true` if the script matches the P2SH pattern.
    pub fn is_p2sh(&self) -> bool {
        let b = &self.0;
        b.len() == 23 && b[0] == OP_HASH160 && b[1] == OP_DATA_20 && b[22] == OP_EQUAL
    }

    /// Check if this is a version-0 witness key-hash (P2WPKH) output script.
    ///
    /// Pattern: `OP_0 <20-byte witness program>`
    ///
    /// # Returns
    /// `true` if the script matches the P2WPKH pattern.
    pub fn is_p2wpkh(&self) -> bool {
        let b = &self.0;
        b.len() == 22 && b[0] == OP_0 && b[1] == OP_DATA_20
    }

    /// Check if this is a version-0 witness script-hash (P2WSH) output script.
    ///
    /// Pattern: `OP_0 <32-byte witness program>`
    ///
    /// # Returns
    /// `true` if the script matches the P2WSH pattern.
    pub fn is_p2wsh(&self) -> bool {
        let b = &self.0;
        b.len() == 34 && b[0] == OP_0 && b[1] == OP_DATA_32
    }

    /// Check if this is a version-1 taproot (P2TR) output script.
    ///
    /// Pattern: `OP_1 <32-byte witness program>`
    ///
    /// # Returns
    /// `true` if the script matches the P2TR pattern.
    pub fn is_p2tr(&self) -> bool {
        let b = &self.0;
        b.len() == 34 && b[0] == OP_1 && b[1] == OP_DATA_32
    }

    /// Check if this is a data-carrier (OP_RETURN) output script.
    ///
    /// # Returns
    /// `true` if the script begins with OP_RETURN.
    pub fn is_data(&self) -> bool {
        !self.0.is_empty() && self.0[0] == OP_RETURN
    }
}

impl Default for Script {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Script {
    /// Debug-print the script as its hex encoding.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", self.to_hex())
    }
}

impl fmt::Display for Script {
    /// Display the script as its hex encoding.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Script {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Script {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Script::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
