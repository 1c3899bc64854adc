//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, used by clap)
/// - 3+: Application-specific errors, one per failing stage
pub mod exit_codes {
    /// Plaintext or ciphertext could not be read from stdin.
    pub const INPUT_READ: i32 = 3;

    /// Invalid credential input (missing, unreadable or unparsable key).
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (key unlock, message decryption).
    pub const AUTH_FAILED: i32 = 5;

    /// The key cannot be turned into a usable keyring.
    pub const KEYRING_FAILED: i32 = 6;

    /// The OpenPGP library failed to encrypt.
    pub const CRYPTO_FAILED: i32 = 7;

    /// Output could not be written to stdout.
    pub const OUTPUT_WRITE: i32 = 8;
}

