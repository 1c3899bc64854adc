//! Input handling helpers for message and key reading.

use std::io::{self, IsTerminal, Read};
use std::path::Path;

use zeroize::Zeroizing;

use crate::errors::CliError;

/// Read the whole message from stdin.
///
/// Refuses to wait on an interactive terminal.
pub fn read_input() -> Result<Zeroizing<Vec<u8>>, CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(CliError::input_read("no input passed on stdin"));
    }
    read_all(stdin.lock())
}

fn read_all<R: Read>(mut reader: R) -> Result<Zeroizing<Vec<u8>>, CliError> {
    let mut buffer = Zeroizing::new(Vec::new());
    reader
        .read_to_end(&mut buffer)
        .map_err(|e| CliError::input_read(e.to_string()))?;
    Ok(buffer)
}

/// Read raw key bytes (binary or armored) from `path`.
pub fn read_key_file(path: &Path) -> Result<Zeroizing<Vec<u8>>, CliError> {
    let bytes = std::fs::read(path)
        .map_err(|e| CliError::key_read(path.display().to_string(), e.to_string()))?;
    Ok(Zeroizing::new(bytes))
}
