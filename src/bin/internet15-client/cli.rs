//! CLI definition for internet15-client.

use clap::{Parser, Subcommand};
use internet15_sdk::config::{SdkConfig, BLOCKCHAIN_RPC_ENV, STORAGE_NODE_URL_ENV};
use std::path::PathBuf;

/// Client CLI for wallet, storage and payment operations.
#[derive(Parser, Debug)]
#[command(name = "internet15-client")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file.
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Base URL of the storage node.
    #[arg(long, env = STORAGE_NODE_URL_ENV)]
    pub storage_node_url: Option<String>,

    /// Ledger JSON-RPC endpoint address.
    #[arg(long, env = BLOCKCHAIN_RPC_ENV)]
    pub blockchain_rpc: Option<String>,

    /// Timeout for storage network operations (seconds, 0 for none).
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Log level for client process.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Command to run.
    #[command(subcommand)]
    pub command: ClientCommand,
}

/// Client commands.
#[derive(Subcommand, Debug)]
pub enum ClientCommand {
    /// Connect a wallet and print its account identifier.
    Connect {
        /// Base58 public key of a fixed wallet. Without it no wallet is present.
        #[arg(long, env = "WALLET_PUBLIC_KEY")]
        public_key: Option<String>,
    },
    /// Upload a file. Reads from --file or stdin.
    Upload {
        /// Input file (defaults to stdin if omitted).
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Print the retrieval URL for a content hash.
    Resolve {
        /// Content hash returned by upload.
        hash: String,
    },
    /// Fetch content. Writes to --out or stdout.
    Fetch {
        /// Content hash returned by upload.
        hash: String,
        /// Output file (defaults to stdout if omitted).
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Draft a storage payment (never signed or sent).
    Pay {
        /// Paying account identifier.
        #[arg(long)]
        wallet: String,
        /// Amount in SOL.
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
    },
}

impl Cli {
    /// Build the effective configuration.
    ///
    /// Defaults, then the config file (explicit or at the default path if it
    /// exists), then flags and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file is specified but cannot be loaded.
    pub fn to_config(&self) -> color_eyre::Result<SdkConfig> {
        let file = self
            .config
            .clone()
            .or_else(|| SdkConfig::default_path().filter(|p| p.exists()));

        let mut config = match file {
            Some(path) => SdkConfig::from_file(&path)?,
            None => SdkConfig::default(),
        };

        if let Some(ref url) = self.storage_node_url {
            config.storage_node_url.clone_from(url);
        }
        if let Some(ref rpc) = self.blockchain_rpc {
            config.blockchain_rpc.clone_from(rpc);
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = timeout_secs;
        }
        if let Some(ref level) = self.log_level {
            config.log_level.clone_from(level);
        }

        Ok(config)
    }
}
