use pgpseal_core::decrypt_message;

use crate::cli::DecryptArgs;
use crate::errors::CliError;
use crate::helpers::{read_input, write_output};

use super::credential_inputs;

/// Read an OpenPGP message from stdin and write its plaintext to stdout.
pub fn handle_decrypt(args: DecryptArgs) -> anyhow::Result<()> {
    let ciphertext = read_input()?;
    tracing::debug!(bytes = ciphertext.len(), "read ciphertext");

    let (password, key_material) = credential_inputs(args.credential)?;
    let plaintext =
        decrypt_message(&ciphertext, password, key_material).map_err(CliError::from)?;

    write_output(&plaintext)?;
    Ok(())
}
