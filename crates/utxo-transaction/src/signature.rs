//! Signature record supplied by an external signing collaborator.
//!
//! The engine never signs; it hands out preimage hashes and receives one
//! `SignatureRecord` per spendable input, in input order.

/// A signature over one input's preimage hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureRecord {
    /// The raw signature bytes (DER-encoded for ECDSA chains).
    pub signature: Vec<u8>,

    /// The serialized public key the signature verifies against.
    pub public_key: Vec<u8>,

    /// The exact 32-byte hash that was signed.
    pub hash: [u8; 32],
}

impl SignatureRecord {
    /// Create a signature record.
    ///
    /// # Arguments
    /// * `signature` - Raw signature bytes.
    /// * `public_key` - The signer's public key bytes.
    /// * `hash` - The hash that was signed.
    ///
    /// # Returns
    /// A new `SignatureRecord`.
    pub fn new(signature: Vec<u8>, public_key: Vec<u8>, hash: [u8; 32]) -> Self {
        SignatureRecord {
            signature,
            public_key,
            hash,
        }
    }

    /// Return the signature with the sighash-type byte appended.
    ///
    /// This is the first element of both a legacy scriptSig and a
    /// witness stack.
    ///
    /// # Arguments
    /// * `sighash_type` - The sighash-type byte to append.
    ///
    /// # Returns
    /// `signature || sighash_type`.
    pub fn signature_with_hash_type(&self, sighash_type: u8) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.signature.len() + 1);
        bytes.extend_from_slice(&self.signature);
        bytes.push(sighash_type);
        bytes
    }
}
