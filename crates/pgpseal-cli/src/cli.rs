use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use pgpseal_core::VERSION;

/// pgpseal - Encrypt and decrypt OpenPGP messages with a password or a key
#[derive(Parser)]
#[command(name = "pgpseal")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, value_name = "PATH", env = "PGPSEAL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt the message read from stdin
    #[command(visible_aliases = ["encode", "e"])]
    Encrypt(EncryptArgs),

    /// Decrypt the message read from stdin
    #[command(visible_aliases = ["decode", "d"])]
    Decrypt(DecryptArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Password and key selection, shared by `encrypt` and `decrypt`.
///
/// With `--key`, the password is the key's passphrase.
#[derive(Args)]
pub struct CredentialArgs {
    /// Password to use (the key's passphrase when --key is given)
    #[arg(short, long, env = "PGPSEAL_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Path to the key to use (binary or armored)
    #[arg(short, long, value_name = "PATH")]
    pub key: Option<PathBuf>,
}

/// Arguments for the `encrypt` command
#[derive(Args)]
pub struct EncryptArgs {
    #[command(flatten)]
    pub credential: CredentialArgs,

    /// Write ASCII-armored output
    #[arg(short, long)]
    pub armor: bool,
}

/// Arguments for the `decrypt` command
#[derive(Args)]
pub struct DecryptArgs {
    #[command(flatten)]
    pub credential: CredentialArgs,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_encrypt_flags() {
        let cli = Cli::try_parse_from(["pgpseal", "encrypt", "-p", "pw", "-k", "key.asc", "-a"])
            .unwrap();
        match cli.command {
            Some(Commands::Encrypt(args)) => {
                assert_eq!(args.credential.password.as_deref(), Some("pw"));
                assert_eq!(args.credential.key, Some(PathBuf::from("key.asc")));
                assert!(args.armor);
            }
            _ => panic!("expected encrypt"),
        }
    }

    #[test]
    fn test_aliases() {
        for alias in ["encode", "e"] {
            let cli = Cli::try_parse_from(["pgpseal", alias, "--password", "pw"]).unwrap();
            assert!(matches!(cli.command, Some(Commands::Encrypt(_))));
        }
        for alias in ["decode", "d"] {
            let cli = Cli::try_parse_from(["pgpseal", alias, "--password", "pw"]).unwrap();
            assert!(matches!(cli.command, Some(Commands::Decrypt(_))));
        }
    }

    #[test]
    fn test_encrypt_takes_no_positional_args() {
        assert!(Cli::try_parse_from(["pgpseal", "encrypt", "message.txt"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["pgpseal", "-q", "-v", "encrypt"]).is_err());
    }
}
