//! Error types for pgpseal core operations.
//!
//! Each variant names the stage that failed. Errors are descriptive at the
//! core level; the CLI layer maps them to exit codes.

use thiserror::Error;

/// Result type alias for pgpseal operations.
pub type Result<T> = std::result::Result<T, SealError>;

/// Core error type for pgpseal operations.
#[derive(Debug, Error)]
pub enum SealError {
    /// Neither a password nor a key was supplied
    #[error("a password or a key is required")]
    MissingCredential,

    /// Key bytes are neither a binary nor an armored OpenPGP key
    #[error("cannot read key: {0}")]
    KeyParse(String),

    /// The passphrase did not unlock the key
    #[error("cannot unlock key: {0}")]
    KeyUnlock(String),

    /// The key cannot be used as an encryption keyring
    #[error("cannot create keyring: {0}")]
    KeyringConstruction(String),

    /// The OpenPGP library failed while encrypting
    #[error("cannot encrypt the message: {0}")]
    Encryption(String),

    /// The message could not be decrypted
    #[error("cannot decrypt the message: {0}")]
    Decryption(String),
}

impl SealError {
    /// Short name of the stage that produced this error.
    pub fn stage(&self) -> &'static str {
        match self {
            SealError::MissingCredential => "credential resolution",
            SealError::KeyParse(_) => "credential resolution",
            SealError::KeyUnlock(_) => "key unlock",
            SealError::KeyringConstruction(_) => "keyring construction",
            SealError::Encryption(_) => "encryption",
            SealError::Decryption(_) => "decryption",
        }
    }
}
