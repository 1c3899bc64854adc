//! Caller-supplied credentials.
//!
//! The raw inputs (an optional password and optional key bytes) are folded
//! into a single [`Credential`] once, at the entry point, so the rest of the
//! pipeline only ever matches on one sum type.

use secrecy::{ExposeSecret, SecretString};
use zeroize::Zeroizing;

use crate::error::{Result, SealError};

/// The credential a message is sealed with.
pub enum Credential {
    /// Symmetric encryption with a non-empty password.
    Password(SecretString),

    /// Public-key encryption with a serialized key (binary or armored).
    KeyMaterial {
        /// Raw key bytes, zeroized on drop
        bytes: Zeroizing<Vec<u8>>,
        /// Unlock passphrase for a protected secret key
        passphrase: Option<SecretString>,
    },
}

impl Credential {
    /// Build a credential from the raw inputs.
    ///
    /// Key material takes precedence: when both inputs are present the
    /// password becomes the key's unlock passphrase. An empty password counts
    /// as absent.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::MissingCredential`] when neither input is usable.
    ///
    /// # Examples
    ///
    /// ```
    /// use pgpseal_core::credential::Credential;
    /// use secrecy::SecretString;
    ///
    /// let credential =
    ///     Credential::from_inputs(Some(SecretString::from("hunter2".to_string())), None).unwrap();
    /// assert!(matches!(credential, Credential::Password(_)));
    ///
    /// assert!(Credential::from_inputs(None, None).is_err());
    /// ```
    pub fn from_inputs(
        password: Option<SecretString>,
        key_material: Option<Zeroizing<Vec<u8>>>,
    ) -> Result<Self> {
        let password = password.filter(|p| !p.expose_secret().is_empty());

        match (key_material, password) {
            (Some(bytes), passphrase) => Ok(Credential::KeyMaterial { bytes, passphrase }),
            (None, Some(password)) => Ok(Credential::Password(password)),
            (None, None) => Err(SealError::MissingCredential),
        }
    }

    /// Whether this credential selects public-key encryption.
    pub fn is_key(&self) -> bool {
        matches!(self, Credential::KeyMaterial { .. })
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credential::Password(_) => f
                .debug_tuple("Password")
                .field(&"[REDACTED]")
                .finish(),
            Credential::KeyMaterial { bytes, passphrase } => f
                .debug_struct("KeyMaterial")
                .field("bytes", &format_args!("[{} bytes REDACTED]", bytes.len()))
                .field("passphrase", &passphrase.as_ref().map(|_| "[REDACTED]"))
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(value: &str) -> Option<SecretString> {
        Some(SecretString::from(value.to_string()))
    }

    fn key_bytes(value: &[u8]) -> Option<Zeroizing<Vec<u8>>> {
        Some(Zeroizing::new(value.to_vec()))
    }

    #[test]
    fn test_password_only() {
        let credential = Credential::from_inputs(secret("pw"), None).unwrap();
        match credential {
            Credential::Password(pw) => assert_eq!(pw.expose_secret(), "pw"),
            other => panic!("expected password, got {:?}", other),
        }
    }

    #[test]
    fn test_key_only() {
        let credential = Credential::from_inputs(None, key_bytes(b"key")).unwrap();
        match credential {
            Credential::KeyMaterial { bytes, passphrase } => {
                assert_eq!(bytes.as_slice(), b"key");
                assert!(passphrase.is_none());
            }
            other => panic!("expected key material, got {:?}", other),
        }
    }

    #[test]
    fn test_key_takes_precedence_over_password() {
        let credential = Credential::from_inputs(secret("pw"), key_bytes(b"key")).unwrap();
        assert!(credential.is_key());
        match credential {
            Credential::KeyMaterial { passphrase, .. } => {
                assert_eq!(passphrase.unwrap().expose_secret(), "pw");
            }
            other => panic!("expected key material, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_credential() {
        let result = Credential::from_inputs(None, None);
        assert!(matches!(result, Err(SealError::MissingCredential)));
    }

    #[test]
    fn test_empty_password_is_absent() {
        let result = Credential::from_inputs(secret(""), None);
        assert!(matches!(result, Err(SealError::MissingCredential)));

        let credential = Credential::from_inputs(secret(""), key_bytes(b"key")).unwrap();
        match credential {
            Credential::KeyMaterial { passphrase, .. } => assert!(passphrase.is_none()),
            other => panic!("expected key material, got {:?}", other),
        }
    }

    #[test]
    fn test_debug_redacts() {
        let credential =
            Credential::from_inputs(secret("super-secret-pw"), key_bytes(&[0xde, 0xad, 0xbe, 0xef]))
                .unwrap();
        let debug_output = format!("{:?}", credential);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("super-secret-pw"));
        assert!(!debug_output.contains(&hex::encode([0xde, 0xad, 0xbe, 0xef])));
    }
}
