/// UTXO SDK - Script types, opcodes, and the script-type taxonomy.
///
/// Provides the `Script` byte-vector type, opcode constants, pattern
/// classification for the supported locking-script kinds, the static
/// per-kind size tables, and the `LockingScript` value type carrying
/// spend authorization.

pub mod script;
pub mod script_type;
pub mod opcodes;
pub mod locking_script;

mod error;
pub use error::ScriptError;
pub use locking_script::{LockingScript, SpendAuthorization};
pub use script::Script;
pub use script_type::ScriptType;
