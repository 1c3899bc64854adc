pub mod decrypt;
pub mod encrypt;
pub mod misc;

use secrecy::SecretString;
use zeroize::Zeroizing;

use crate::cli::CredentialArgs;
use crate::errors::CliError;
use crate::helpers::read_key_file;

/// Turn the credential flags into core inputs, reading the key file if one
/// was named.
pub(crate) fn credential_inputs(
    args: CredentialArgs,
) -> Result<(Option<SecretString>, Option<Zeroizing<Vec<u8>>>), CliError> {
    let key_material = match args.key.as_deref() {
        Some(path) => Some(read_key_file(path)?),
        None => None,
    };
    let password = args.password.map(SecretString::from);
    Ok((password, key_material))
}
