//! Offline signer for legacy Ethereum transactions.
//!
//! # Usage
//!
//! ```bash
//! # Sign an ERC-20 approve on mainnet
//! ETHTX_PRIVATE_KEY=0x4c08... ethtx sign \
//!     --nonce 0x2e --gas-price 0x033428f000 --gas-limit 0x02350c \
//!     --to 0x744d70fdbe2ba4cf95131626614a1763df805b9e --value 0 \
//!     --data 0x095ea7b3...
//!
//! # Show the address of a key
//! ethtx address --private-key 0x4c08...
//!
//! # Inspect a raw transaction
//! ethtx decode 0xf86c09...
//! ```
//!
//! The result goes to stdout; logs go to stderr (`RUST_LOG` or `--verbose`).

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

mod commands;
mod error;

use commands::SignRequest;
use error::CliError;

#[derive(Parser, Debug)]
#[command(name = "ethtx", version, about = "Sign legacy Ethereum transactions offline")]
struct Cli {
    /// Log signing details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Args, Debug)]
struct KeyArg {
    /// Hex-encoded 32-byte private key
    #[arg(long, env = "ETHTX_PRIVATE_KEY", hide_env_values = true)]
    private_key: String,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Sign a transaction and print the raw bytes
    Sign {
        #[command(flatten)]
        key: KeyArg,
        /// Account nonce (hex or decimal)
        #[arg(long)]
        nonce: Option<String>,
        /// Gas price in wei (hex or decimal)
        #[arg(long)]
        gas_price: Option<String>,
        /// Gas limit (hex or decimal)
        #[arg(long)]
        gas_limit: Option<String>,
        /// Recipient address (omit for contract creation)
        #[arg(long)]
        to: Option<String>,
        /// Value in wei (hex or decimal)
        #[arg(long)]
        value: Option<String>,
        /// Call data as hex
        #[arg(long)]
        data: Option<String>,
        /// Chain id (0 for pre-EIP-155 signatures)
        #[arg(long, default_value = "1")]
        chain_id: String,
        /// Fail unless the key signs as this address
        #[arg(long)]
        from: Option<String>,
        /// Print a JSON object instead of the raw hex
        #[arg(long)]
        json: bool,
    },
    /// Print the checksummed address of a private key
    Address {
        #[command(flatten)]
        key: KeyArg,
    },
    /// Decode a raw legacy transaction as JSON
    Decode {
        /// Raw transaction as hex
        raw: String,
    },
}

fn run(command: CliCommand) -> Result<(), CliError> {
    match command {
        CliCommand::Sign {
            key,
            nonce,
            gas_price,
            gas_limit,
            to,
            value,
            data,
            chain_id,
            from,
            json,
        } => {
            let request = SignRequest {
                nonce,
                gas_price,
                gas_limit,
                to,
                value,
                data,
                chain_id,
                from,
            };
            let out = commands::sign(&key.private_key, &request)?;
            log::info!("signed by {}", out.from);
            if json {
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", out.raw);
            }
        }
        CliCommand::Address { key } => {
            println!("{}", commands::address(&key.private_key)?);
        }
        CliCommand::Decode { raw } => {
            let out = commands::decode(&raw)?;
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
