//! # pgpseal Core
//!
//! Core library for pgpseal - single-shot OpenPGP message encryption with a
//! password or a key.
//!
//! This crate holds the credential and encryption logic independent of the
//! CLI: no I/O happens here, every call owns its inputs, and nothing is kept
//! between calls.
//!
//! ## Architecture
//!
//! - **credential**: folds raw inputs into a `Credential` sum type
//! - **key**: key parsing, passphrase unlocking, keyring construction
//! - **resolver**: picks the `EncryptionContext` for a call
//! - **engine**: runs the OpenPGP writer stack
//! - **decrypt**: opens messages produced by the engine
//!
//! ## Example
//!
//! ```
//! use pgpseal_core::{decrypt_message, encrypt_message};
//! use secrecy::SecretString;
//!
//! let password = || Some(SecretString::from("correct horse".to_string()));
//! let ciphertext = encrypt_message(b"hello", password(), None).unwrap();
//! let plaintext = decrypt_message(ciphertext.as_bytes(), password(), None).unwrap();
//! assert_eq!(plaintext.as_slice(), b"hello");
//! ```

pub mod credential;
pub mod decrypt;
pub mod engine;
pub mod error;
pub mod key;
pub mod resolver;

#[cfg(test)]
mod test_support;

use secrecy::SecretString;
use zeroize::Zeroizing;

pub use credential::Credential;
pub use decrypt::DecryptionKey;
pub use engine::{Ciphertext, OutputFormat};
pub use error::{Result, SealError};
pub use key::{Keyring, ResolvedKey};
pub use resolver::EncryptionContext;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Encrypt `plaintext` with a password or a key, as a binary OpenPGP message.
///
/// When `key_material` is given it always wins, and `password` becomes its
/// unlock passphrase.
pub fn encrypt_message(
    plaintext: &[u8],
    password: Option<SecretString>,
    key_material: Option<Zeroizing<Vec<u8>>>,
) -> Result<Ciphertext> {
    encrypt_message_with_format(plaintext, password, key_material, OutputFormat::Binary)
}

/// Like [`encrypt_message`], in the requested [`OutputFormat`].
pub fn encrypt_message_with_format(
    plaintext: &[u8],
    password: Option<SecretString>,
    key_material: Option<Zeroizing<Vec<u8>>>,
    format: OutputFormat,
) -> Result<Ciphertext> {
    let context = resolver::resolve(password, key_material)?;
    tracing::debug!(mode = context.mode(), "credential resolved");
    engine::encrypt_with_format(plaintext, &context, format)
}

/// Decrypt a message with a password or a key (plus optional passphrase).
pub fn decrypt_message(
    ciphertext: &[u8],
    password: Option<SecretString>,
    key_material: Option<Zeroizing<Vec<u8>>>,
) -> Result<Zeroizing<Vec<u8>>> {
    let key = decrypt::resolve_decryption(password, key_material)?;
    decrypt::decrypt(ciphertext, &key)
}
