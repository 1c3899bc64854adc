use pgpseal_core::encrypt_message_with_format;

use crate::app::AppContext;
use crate::cli::EncryptArgs;
use crate::errors::CliError;
use crate::helpers::{read_input, write_output};

use super::credential_inputs;

/// Read plaintext from stdin, seal it, write the ciphertext to stdout.
pub fn handle_encrypt(ctx: &AppContext, args: EncryptArgs) -> anyhow::Result<()> {
    let plaintext = read_input()?;
    tracing::debug!(bytes = plaintext.len(), "read plaintext");

    let (password, key_material) = credential_inputs(args.credential)?;
    let format = ctx.output_format(args.armor);

    let ciphertext = encrypt_message_with_format(&plaintext, password, key_material, format)
        .map_err(CliError::from)?;
    drop(plaintext);

    write_output(ciphertext.as_bytes())?;
    Ok(())
}
