use std::io::{self, Write};

use crate::errors::CliError;

/// Write `bytes` to stdout in a single write.
pub fn write_output(bytes: &[u8]) -> Result<(), CliError> {
    write_all_to(io::stdout().lock(), bytes)
}

fn write_all_to<W: Write>(mut writer: W, bytes: &[u8]) -> Result<(), CliError> {
    writer
        .write_all(bytes)
        .and_then(|_| writer.flush())
        .map_err(|e| CliError::output_write(e.to_string()))
}
