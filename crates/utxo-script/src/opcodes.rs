//! Opcode byte constants used in locking scripts.
//!
//! Only the opcodes that appear in the supported locking-script patterns
//! and in data-carrier outputs are defined here.

/// Push an empty array onto the stack. Also the witness version-0 marker.
pub const OP_0: u8 = 0x00;

/// Direct push of 20 bytes (witness program / public key hash).
pub const OP_DATA_20: u8 = 0x14;

/// Direct push of 32 bytes (witness program / script hash).
pub const OP_DATA_32: u8 = 0x20;

/// Direct push of 33 bytes (compressed public key).
pub const OP_DATA_33: u8 = 0x21;

/// Direct push of 65 bytes (uncompressed public key).
pub const OP_DATA_65: u8 = 0x41;

/// Highest opcode that is a direct data push (1-75 bytes).
pub const OP_DATA_75: u8 = 0x4b;

/// Push data with a 1-byte length prefix.
pub const OP_PUSHDATA1: u8 = 0x4c;

/// Push data with a 2-byte little-endian length prefix.
pub const OP_PUSHDATA2: u8 = 0x4d;

/// Push data with a 4-byte little-endian length prefix.
pub const OP_PUSHDATA4: u8 = 0x4e;

/// Push the number 1. Also the witness version-1 (taproot) marker.
pub const OP_1: u8 = 0x51;

/// Mark an output as a data carrier; the output is provably unspendable.
pub const OP_RETURN: u8 = 0x6a;

/// Duplicate the top stack item.
pub const OP_DUP: u8 = 0x76;

/// Pop two items and push whether they are equal.
pub const OP_EQUAL: u8 = 0x87;

/// OP_EQUAL followed by OP_VERIFY.
pub const OP_EQUALVERIFY: u8 = 0x88;

/// Hash the top stack item with SHA-256 then RIPEMD-160.
pub const OP_HASH160: u8 = 0xa9;

/// Verify an ECDSA signature against a public key.
pub const OP_CHECKSIG: u8 = 0xac;
