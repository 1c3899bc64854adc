//! CLI error types for structured error handling.
//!
//! Every failure is tagged with the stage that produced it and maps to a
//! specific exit code.

use std::fmt;

use pgpseal_core::SealError;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Reading the input from stdin failed
    InputRead(String),

    /// Reading the key file failed
    KeyRead { path: String, message: String },

    /// Writing the output to stdout failed
    OutputWrite(String),

    /// Credential resolution, key unlock, keyring construction or the
    /// cryptographic operation itself failed
    Seal(SealError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InputRead(message) => write!(f, "cannot read from stdin: {}", message),
            CliError::KeyRead { path, message } => {
                write!(f, "cannot read key {}: {}", path, message)
            }
            CliError::OutputWrite(message) => write!(f, "cannot write output: {}", message),
            CliError::Seal(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CliError {}

impl From<SealError> for CliError {
    fn from(err: SealError) -> Self {
        CliError::Seal(err)
    }
}

impl CliError {
    /// Create an InputRead error.
    pub fn input_read(message: impl Into<String>) -> Self {
        CliError::InputRead(message.into())
    }

    /// Create a KeyRead error for `path`.
    pub fn key_read(path: impl Into<String>, message: impl Into<String>) -> Self {
        CliError::KeyRead {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an OutputWrite error.
    pub fn output_write(message: impl Into<String>) -> Self {
        CliError::OutputWrite(message.into())
    }

    /// Name of the failing stage.
    pub fn stage(&self) -> &'static str {
        match self {
            CliError::InputRead(_) => "read",
            CliError::KeyRead { .. } => "read",
            CliError::OutputWrite(_) => "write",
            CliError::Seal(err) => err.stage(),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::InputRead(_) => exit_codes::INPUT_READ,
            CliError::KeyRead { .. } => exit_codes::INVALID_INPUT,
            CliError::OutputWrite(_) => exit_codes::OUTPUT_WRITE,
            CliError::Seal(err) => match err {
                SealError::MissingCredential | SealError::KeyParse(_) => {
                    exit_codes::INVALID_INPUT
                }
                SealError::KeyUnlock(_) | SealError::Decryption(_) => exit_codes::AUTH_FAILED,
                SealError::KeyringConstruction(_) => exit_codes::KEYRING_FAILED,
                SealError::Encryption(_) => exit_codes::CRYPTO_FAILED,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::exit_codes;

    #[test]
    fn test_exit_codes_per_stage() {
        assert_eq!(
            CliError::input_read("closed").exit_code(),
            exit_codes::INPUT_READ
        );
        assert_eq!(
            CliError::from(SealError::MissingCredential).exit_code(),
            exit_codes::INVALID_INPUT
        );
        assert_eq!(
            CliError::from(SealError::KeyUnlock("bad".into())).exit_code(),
            exit_codes::AUTH_FAILED
        );
        assert_eq!(
            CliError::from(SealError::KeyringConstruction("locked".into())).exit_code(),
            exit_codes::KEYRING_FAILED
        );
        assert_eq!(
            CliError::from(SealError::Encryption("boom".into())).exit_code(),
            exit_codes::CRYPTO_FAILED
        );
        assert_eq!(
            CliError::output_write("broken pipe").exit_code(),
            exit_codes::OUTPUT_WRITE
        );
    }

    #[test]
    fn test_display_names_the_stage() {
        let err = CliError::key_read("/tmp/missing.asc", "No such file or directory");
        assert_eq!(
            err.to_string(),
            "cannot read key /tmp/missing.asc: No such file or directory"
        );
        assert_eq!(err.stage(), "read");

        let err = CliError::from(SealError::KeyUnlock("wrong passphrase".into()));
        assert_eq!(err.to_string(), "cannot unlock key: wrong passphrase");
        assert_eq!(err.stage(), "key unlock");
    }
}
