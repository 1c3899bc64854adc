//! Decryption of messages produced by [`crate::engine`].
//!
//! Uses the same credential precedence as encryption. Signatures are never
//! checked; unsigned and signed messages are both accepted.

use std::io::Read;

use secrecy::{ExposeSecret, SecretString};
use sequoia_openpgp as openpgp;
use zeroize::Zeroizing;

use openpgp::crypto::{Password, SessionKey};
use openpgp::packet::{PKESK, SKESK};
use openpgp::parse::stream::{
    DecryptionHelper, DecryptorBuilder, MessageStructure, VerificationHelper,
};
use openpgp::parse::Parse;
use openpgp::policy::StandardPolicy;
use openpgp::types::SymmetricAlgorithm;
use openpgp::{Cert, Fingerprint, KeyHandle};

use crate::credential::Credential;
use crate::error::{Result, SealError};
use crate::key::{resolve_key, ResolvedKey};

/// What a message is opened with.
#[derive(Debug)]
pub enum DecryptionKey {
    /// Try the password against every password-encrypted session key.
    Password(SecretString),
    /// Try every readable secret key against every public-key session key.
    Key(ResolvedKey),
}

/// Resolve raw inputs into a [`DecryptionKey`].
///
/// # Errors
///
/// Same as [`crate::resolver::resolve`], except that a key without readable
/// secret material fails with [`SealError::KeyringConstruction`].
pub fn resolve_decryption(
    password: Option<SecretString>,
    key_material: Option<Zeroizing<Vec<u8>>>,
) -> Result<DecryptionKey> {
    match Credential::from_inputs(password, key_material)? {
        Credential::KeyMaterial { bytes, passphrase } => {
            let key = resolve_key(&bytes, passphrase.as_ref())?;
            if key.usable_secret_keys().is_empty() {
                let reason = if key.is_locked() {
                    "key is locked; supply its passphrase"
                } else {
                    "key has no secret key material"
                };
                return Err(SealError::KeyringConstruction(reason.to_string()));
            }
            Ok(DecryptionKey::Key(key))
        }
        Credential::Password(password) => Ok(DecryptionKey::Password(password)),
    }
}

/// Decrypt an OpenPGP message (binary or armored) and return its literal data.
///
/// # Errors
///
/// Returns [`SealError::Decryption`] when the message is malformed or no
/// session key can be recovered with `key`.
pub fn decrypt(ciphertext: &[u8], key: &DecryptionKey) -> Result<Zeroizing<Vec<u8>>> {
    let plaintext =
        read_message(ciphertext, key).map_err(|e| SealError::Decryption(format!("{:#}", e)))?;
    tracing::debug!(plaintext_len = plaintext.len(), "decrypted message");
    Ok(plaintext)
}

fn read_message(ciphertext: &[u8], key: &DecryptionKey) -> openpgp::Result<Zeroizing<Vec<u8>>> {
    let policy = StandardPolicy::new();
    let helper = Helper { key };
    let mut decryptor = DecryptorBuilder::from_bytes(ciphertext)?.with_policy(&policy, None, helper)?;

    let mut plaintext = Zeroizing::new(Vec::new());
    decryptor.read_to_end(&mut plaintext)?;
    Ok(plaintext)
}

struct Helper<'a> {
    key: &'a DecryptionKey,
}

impl VerificationHelper for Helper<'_> {
    fn get_certs(&mut self, _ids: &[KeyHandle]) -> openpgp::Result<Vec<Cert>> {
        Ok(Vec::new())
    }

    fn check(&mut self, _structure: MessageStructure) -> openpgp::Result<()> {
        Ok(())
    }
}

impl DecryptionHelper for Helper<'_> {
    fn decrypt<D>(
        &mut self,
        pkesks: &[PKESK],
        skesks: &[SKESK],
        sym_algo: Option<SymmetricAlgorithm>,
        mut decrypt: D,
    ) -> openpgp::Result<Option<Fingerprint>>
    where
        D: FnMut(SymmetricAlgorithm, &SessionKey) -> bool,
    {
        match self.key {
            DecryptionKey::Password(password) => {
                let password = Password::from(password.expose_secret());
                for skesk in skesks {
                    if let Ok((algo, session_key)) = skesk.decrypt(&password) {
                        if decrypt(algo, &session_key) {
                            return Ok(None);
                        }
                    }
                }
                Err(anyhow::anyhow!("wrong password or message is not password-encrypted"))
            }
            DecryptionKey::Key(key) => {
                for secret in key.usable_secret_keys() {
                    let mut keypair = secret.into_keypair()?;
                    for pkesk in pkesks {
                        if let Some((algo, session_key)) = pkesk.decrypt(&mut keypair, sym_algo) {
                            if decrypt(algo, &session_key) {
                                return Ok(Some(key.fingerprint()));
                            }
                        }
                    }
                }
                Err(anyhow::anyhow!("message is not addressed to this key"))
            }
        }
    }
}
