//! Credential resolution: decides which encryption mode a call takes.

use secrecy::SecretString;
use zeroize::Zeroizing;

use crate::credential::Credential;
use crate::error::Result;
use crate::key::{resolve_key, Keyring};

/// The encryption mode chosen for one call. Exactly one variant is built.
#[derive(Debug)]
pub enum EncryptionContext {
    /// Public-key encryption to the resolved key.
    Keyring(Keyring),
    /// Symmetric encryption with a password.
    Password(SecretString),
}

impl EncryptionContext {
    /// Short human-readable mode name.
    pub fn mode(&self) -> &'static str {
        match self {
            EncryptionContext::Keyring(_) => "keyring",
            EncryptionContext::Password(_) => "password",
        }
    }
}

/// Resolve raw inputs into an [`EncryptionContext`].
///
/// Key material wins over a password; the password then unlocks the key.
///
/// # Errors
///
/// - [`SealError::MissingCredential`](crate::SealError::MissingCredential) with no usable input
/// - [`SealError::KeyParse`](crate::SealError::KeyParse) for unreadable key bytes
/// - [`SealError::KeyUnlock`](crate::SealError::KeyUnlock) when the passphrase is rejected
/// - [`SealError::KeyringConstruction`](crate::SealError::KeyringConstruction) when the key cannot encrypt
pub fn resolve(
    password: Option<SecretString>,
    key_material: Option<Zeroizing<Vec<u8>>>,
) -> Result<EncryptionContext> {
    resolve_credential(Credential::from_inputs(password, key_material)?)
}

/// Resolve an already-built [`Credential`].
pub fn resolve_credential(credential: Credential) -> Result<EncryptionContext> {
    match credential {
        Credential::KeyMaterial { bytes, passphrase } => {
            let key = resolve_key(&bytes, passphrase.as_ref())?;
            drop(bytes);
            drop(passphrase);
            let keyring = Keyring::new(key)?;
            tracing::debug!(
                fingerprint = %keyring.key().fingerprint().to_hex(),
                "resolved keyring context"
            );
            Ok(EncryptionContext::Keyring(keyring))
        }
        Credential::Password(password) => {
            tracing::debug!("resolved password context");
            Ok(EncryptionContext::Password(password))
        }
    }
}
