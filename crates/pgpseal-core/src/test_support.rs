//! Key fixtures for unit tests.

use sequoia_openpgp as openpgp;

use openpgp::cert::prelude::*;
use openpgp::serialize::SerializeInto;
use openpgp::Cert;

/// Generate a Cv25519 key with signing and encryption subkeys, optionally
/// protected by `passphrase`.
pub fn generate_key(passphrase: Option<&str>) -> Cert {
    let mut builder = CertBuilder::general_purpose(None, Some("alice@example.org"));
    if let Some(passphrase) = passphrase {
        builder = builder.set_password(Some(passphrase.into()));
    }
    let (cert, _revocation) = builder.generate().expect("key generation should succeed");
    cert
}

/// Binary transferable secret key.
pub fn tsk_bytes(cert: &Cert) -> Vec<u8> {
    cert.as_tsk().to_vec().expect("serialize tsk")
}

/// ASCII-armored transferable secret key.
pub fn armored_tsk(cert: &Cert) -> Vec<u8> {
    cert.as_tsk().armored().to_vec().expect("serialize armored tsk")
}

/// Binary public certificate (secret material stripped).
pub fn public_bytes(cert: &Cert) -> Vec<u8> {
    cert.to_vec().expect("serialize cert")
}
