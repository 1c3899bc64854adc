//! pgpseal CLI - Encrypt and decrypt OpenPGP messages
//!
//! This is the command-line interface for pgpseal. Messages are read from
//! stdin and written to stdout; diagnostics go to stderr.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;

use clap::Parser;
use pgpseal_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{decrypt, encrypt, misc};
use crate::errors::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        let code = match e.downcast_ref::<CliError>() {
            Some(err) => {
                tracing::debug!(stage = err.stage(), "command failed");
                err.exit_code()
            }
            None => 1,
        };
        eprintln!("Error: {:#}", e);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = AppContext::load(&cli)?;
    logging::init(ctx.log_level())?;

    match cli.command {
        Some(Commands::Encrypt(args)) => {
            encrypt::handle_encrypt(&ctx, args)?;
        }
        Some(Commands::Decrypt(args)) => {
            decrypt::handle_decrypt(args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(&args)?;
        }
        None => {
            if !ctx.quiet() {
                println!("pgpseal v{}", VERSION);
                println!("\nQuickstart:");
                println!("  pgpseal encrypt --password <PASSWORD> < message.txt > message.pgp");
                println!("  pgpseal encrypt --key bob.asc < message.txt > message.pgp");
                println!("  pgpseal decrypt --password <PASSWORD> < message.pgp");
                println!("\nRun `pgpseal --help` for full usage.");
            }
        }
    }

    Ok(())
}
