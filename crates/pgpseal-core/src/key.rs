//! OpenPGP key loading, unlocking and keyring construction.
//!
//! A key goes through three steps before it can seal a message:
//!
//! 1. [`parse_key`]: bytes to certificate. The parser detects binary and
//!    ASCII-armored encodings on its own.
//! 2. [`unlock_key`]: only when a passphrase was supplied. Every
//!    passphrase-protected secret key is decrypted with it.
//! 3. [`Keyring::new`]: checks the result is usable for public-key encryption.

use secrecy::{ExposeSecret, SecretString};
use sequoia_openpgp as openpgp;

use openpgp::cert::prelude::*;
use openpgp::crypto::Password;
use openpgp::packet::key::{SecretParts, UnspecifiedRole};
use openpgp::packet::Key;
use openpgp::parse::Parse;
use openpgp::policy::StandardPolicy;
use openpgp::serialize::stream::Recipient;
use openpgp::{Cert, Fingerprint};

use crate::error::{Result, SealError};

/// A parsed key, with any protected secret keys unlocked.
///
/// Lives for one seal or unseal call. Unlocked secret material stays in
/// sequoia's protected memory and is released on drop.
pub struct ResolvedKey {
    cert: Cert,
    unlocked: Vec<Key<SecretParts, UnspecifiedRole>>,
}

impl ResolvedKey {
    /// Use a parsed key as-is, without unlocking anything.
    pub fn from_cert(cert: Cert) -> Self {
        Self {
            cert,
            unlocked: Vec::new(),
        }
    }

    /// The underlying certificate.
    pub fn cert(&self) -> &Cert {
        &self.cert
    }

    /// Primary key fingerprint.
    pub fn fingerprint(&self) -> Fingerprint {
        self.cert.fingerprint()
    }

    /// Whether the key carries any secret key material.
    pub fn has_secret(&self) -> bool {
        self.cert.is_tsk()
    }

    /// Whether some secret key is still passphrase-protected.
    pub fn is_locked(&self) -> bool {
        self.cert.keys().secret().any(|ka| {
            let key = ka.key();
            key.secret().is_encrypted()
                && !self
                    .unlocked
                    .iter()
                    .any(|unlocked| unlocked.fingerprint() == key.fingerprint())
        })
    }

    /// Secret keys whose material is readable: unlocked ones first, then
    /// those that were never protected.
    pub(crate) fn usable_secret_keys(&self) -> Vec<Key<SecretParts, UnspecifiedRole>> {
        let mut keys = self.unlocked.clone();
        keys.extend(
            self.cert
                .keys()
                .secret()
                .filter(|ka| !ka.key().secret().is_encrypted())
                .map(|ka| ka.key().clone()),
        );
        keys
    }
}

impl std::fmt::Debug for ResolvedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedKey")
            .field("fingerprint", &self.cert.fingerprint().to_hex())
            .field("unlocked", &self.unlocked.len())
            .finish()
    }
}

/// Parse a binary or ASCII-armored OpenPGP key.
///
/// # Errors
///
/// Returns [`SealError::KeyParse`] when the bytes are neither encoding, or
/// hold something other than exactly one key.
pub fn parse_key(bytes: &[u8]) -> Result<Cert> {
    Cert::from_bytes(bytes).map_err(|e| SealError::KeyParse(format!("{:#}", e)))
}

/// Unlock every passphrase-protected secret key in `cert`.
///
/// # Errors
///
/// Returns [`SealError::KeyUnlock`] when:
/// - the key has no secret material at all
/// - none of its secret keys is protected
/// - the passphrase is wrong for any protected key
pub fn unlock_key(cert: Cert, passphrase: &SecretString) -> Result<ResolvedKey> {
    if !cert.is_tsk() {
        return Err(SealError::KeyUnlock("key is not private".to_string()));
    }

    let password = Password::from(passphrase.expose_secret());
    let mut unlocked = Vec::new();

    for ka in cert.keys().secret() {
        let key = ka.key();
        if !key.secret().is_encrypted() {
            continue;
        }
        let fingerprint = key.fingerprint();
        let key = key.clone().decrypt_secret(&password).map_err(|e| {
            SealError::KeyUnlock(format!("{} (key {})", e, fingerprint.to_hex()))
        })?;
        unlocked.push(key);
    }

    if unlocked.is_empty() {
        return Err(SealError::KeyUnlock("key is not locked".to_string()));
    }

    tracing::debug!(
        fingerprint = %cert.fingerprint().to_hex(),
        keys = unlocked.len(),
        "unlocked secret keys"
    );

    Ok(ResolvedKey { cert, unlocked })
}

/// Parse `bytes` and, when a passphrase is given, unlock the key with it.
pub fn resolve_key(bytes: &[u8], passphrase: Option<&SecretString>) -> Result<ResolvedKey> {
    let cert = parse_key(bytes)?;
    tracing::debug!(fingerprint = %cert.fingerprint().to_hex(), "parsed key");

    match passphrase {
        Some(passphrase) => unlock_key(cert, passphrase),
        None => Ok(ResolvedKey::from_cert(cert)),
    }
}

/// A key ready for public-key encryption.
pub struct Keyring {
    key: ResolvedKey,
    policy: StandardPolicy<'static>,
}

impl Keyring {
    /// Wrap a resolved key for encryption.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::KeyringConstruction`] when:
    /// - a secret key is still locked
    /// - the certificate is not valid under the standard policy
    /// - no alive, unrevoked key is flagged for encryption
    pub fn new(key: ResolvedKey) -> Result<Self> {
        if key.is_locked() {
            return Err(SealError::KeyringConstruction(
                "key is locked; supply its passphrase".to_string(),
            ));
        }

        let policy = StandardPolicy::new();
        key.cert()
            .with_policy(&policy, None)
            .map_err(|e| SealError::KeyringConstruction(format!("{:#}", e)))?;

        let keyring = Self { key, policy };
        if keyring.recipients().is_empty() {
            return Err(SealError::KeyringConstruction(
                "key has no valid encryption-capable subkey".to_string(),
            ));
        }

        Ok(keyring)
    }

    /// The key this keyring encrypts to.
    pub fn key(&self) -> &ResolvedKey {
        &self.key
    }

    /// Encryption-capable keys, for transport or storage.
    pub(crate) fn recipients(&self) -> Vec<Recipient<'_>> {
        self.key
            .cert()
            .keys()
            .with_policy(&self.policy, None)
            .supported()
            .alive()
            .revoked(false)
            .for_transport_encryption()
            .for_storage_encryption()
            .map(|ka| ka.into())
            .collect()
    }
}

impl std::fmt::Debug for Keyring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keyring").field("key", &self.key).finish()
    }
}
