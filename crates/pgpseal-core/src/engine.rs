//! OpenPGP message encryption.
//!
//! The writer stack is `Message -> [Armorer] -> Encryptor2 -> LiteralWriter`.
//! Everything is written to an in-memory buffer that only leaves this module
//! once the stack finalizes cleanly, so a failed call never yields partial
//! ciphertext.

use std::io::Write;

use secrecy::ExposeSecret;
use sequoia_openpgp as openpgp;

use openpgp::crypto::Password;
use openpgp::serialize::stream::{Armorer, Encryptor2, LiteralWriter, Message};

use crate::error::{Result, SealError};
use crate::resolver::EncryptionContext;

/// Serialization of the produced message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Raw OpenPGP packets
    #[default]
    Binary,
    /// ASCII armor (`-----BEGIN PGP MESSAGE-----`)
    Armored,
}

/// An encrypted OpenPGP message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    bytes: Vec<u8>,
    format: OutputFormat,
}

impl Ciphertext {
    /// The encoded message.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take ownership of the encoded message.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// How the message is encoded.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for Ciphertext {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Encrypt `plaintext` as a binary OpenPGP message.
///
/// # Errors
///
/// Returns [`SealError::Encryption`] if the OpenPGP library fails.
pub fn encrypt(plaintext: &[u8], context: &EncryptionContext) -> Result<Ciphertext> {
    encrypt_with_format(plaintext, context, OutputFormat::Binary)
}

/// Encrypt `plaintext` in the requested [`OutputFormat`].
///
/// Password contexts produce a symmetrically encrypted message; keyring
/// contexts produce an unsigned message addressed to every encryption-capable
/// key of the certificate.
pub fn encrypt_with_format(
    plaintext: &[u8],
    context: &EncryptionContext,
    format: OutputFormat,
) -> Result<Ciphertext> {
    let mut sink = Vec::with_capacity(plaintext.len() + 512);
    write_message(&mut sink, plaintext, context, format)
        .map_err(|e| SealError::Encryption(format!("{:#}", e)))?;

    tracing::debug!(
        mode = context.mode(),
        ?format,
        plaintext_len = plaintext.len(),
        ciphertext_len = sink.len(),
        "encrypted message"
    );

    Ok(Ciphertext {
        bytes: sink,
        format,
    })
}

fn write_message(
    sink: &mut Vec<u8>,
    plaintext: &[u8],
    context: &EncryptionContext,
    format: OutputFormat,
) -> openpgp::Result<()> {
    let mut message = Message::new(sink);
    if format == OutputFormat::Armored {
        message = Armorer::new(message).build()?;
    }

    let message = match context {
        EncryptionContext::Password(password) => {
            let password = Password::from(password.expose_secret());
            Encryptor2::with_passwords(message, Some(password)).build()?
        }
        EncryptionContext::Keyring(keyring) => {
            Encryptor2::for_recipients(message, keyring.recipients()).build()?
        }
    };

    let mut message = LiteralWriter::new(message).build()?;
    message.write_all(plaintext)?;
    message.finalize()?;
    Ok(())
}
