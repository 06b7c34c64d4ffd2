//! Locking script with its kind tag and spend authorization.
//!
//! A `LockingScript` is created when an input or output is constructed
//! from chain data or from an address, and is never mutated afterwards.

use crate::{Script, ScriptError, ScriptType};

/// Whether a locking script can be spent by the wallet holding it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpendAuthorization {
    /// The script is spendable by the holder of this public key.
    Spendable {
        /// The serialized public key authorized to spend.
        public_key: Vec<u8>,
    },
    /// The script is not spendable by us (e.g. a destination we pay to).
    NotSpendable,
}

/// An on-chain locking script together with its classification and
/// spend authorization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LockingScript {
    /// The raw script bytes.
    pub script: Script,

    /// The classified kind of the script.
    pub kind: ScriptType,

    /// Whether and how the script can be spent by us.
    pub authorization: SpendAuthorization,
}

impl LockingScript {
    /// Create a locking script spendable by the given public key.
    ///
    /// # Arguments
    /// * `script` - The raw locking script.
    /// * `kind` - Its classified kind.
    /// * `public_key` - The public key authorized to spend it.
    ///
    /// # Returns
    /// A spendable `LockingScript`.
    pub fn spendable(script: Script, kind: ScriptType, public_key: Vec<u8>) -> Self {
        LockingScript {
            script,
            kind,
            authorization: SpendAuthorization::Spendable { public_key },
        }
    }

    /// Create a locking script we are paying to but cannot spend.
    ///
    /// # Arguments
    /// * `script` - The raw locking script.
    /// * `kind` - Its classified kind.
    ///
    /// # Returns
    /// A non-spendable `LockingScript`.
    pub fn destination(script: Script, kind: ScriptType) -> Self {
        LockingScript {
            script,
            kind,
            authorization: SpendAuthorization::NotSpendable,
        }
    }

    /// Create a spendable locking script, classifying the kind from the
    /// script bytes.
    ///
    /// # Arguments
    /// * `script` - The raw locking script.
    /// * `public_key` - The public key authorized to spend it.
    ///
    /// # Returns
    /// A spendable `LockingScript`, or an error if the script matches no
    /// supported pattern.
    pub fn classify_spendable(script: Script, public_key: Vec<u8>) -> Result<Self, ScriptError> {
        let kind = ScriptType::classify(&script)?;
        Ok(Self::spendable(script, kind, public_key))
    }

    /// Create a destination locking script, classifying the kind from the
    /// script bytes.
    ///
    /// # Arguments
    /// * `script` - The raw locking script.
    ///
    /// # Returns
    /// A non-spendable `LockingScript`, or an error if the script matches
    /// no supported pattern.
    pub fn classify_destination(script: Script) -> Result<Self, ScriptError> {
        let kind = ScriptType::classify(&script)?;
        Ok(Self::destination(script, kind))
    }

    /// Whether this script is spendable by us.
    ///
    /// # Returns
    /// `true` if a spending public key is attached.
    pub fn is_spendable(&self) -> bool {
        matches!(self.authorization, SpendAuthorization::Spendable { .. })
    }
}
