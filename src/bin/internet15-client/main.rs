//! internet15-client CLI entry point.

mod cli;

use clap::Parser;
use cli::{Cli, ClientCommand};
use internet15_sdk::storage::FileBlob;
use internet15_sdk::wallet::{Environment, StaticWallet, WalletConnector, WalletPublicKey};
use internet15_sdk::{PaymentStub, StorageClient};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Name given to uploads read from stdin.
const STDIN_FILE_NAME: &str = "stdin";

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = cli.to_config()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    info!("internet15-client v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        ClientCommand::Connect { public_key } => {
            let env = environment_for(public_key.as_deref())?;
            let identifier = WalletConnector::new(env).connect().await?;
            println!("{identifier}");
        }
        ClientCommand::Upload { file } => {
            let blob = read_input(file).await?;
            let client = StorageClient::new(&config);
            let hash = client.upload(&blob).await?;
            println!("{hash}");
        }
        ClientCommand::Resolve { hash } => {
            let client = StorageClient::new(&config);
            println!("{}", client.resolve(&hash));
        }
        ClientCommand::Fetch { hash, out } => {
            let client = StorageClient::new(&config);
            let content = client.fetch(&hash).await?;
            write_output(&content, out)?;
        }
        ClientCommand::Pay { wallet, amount } => {
            let intent = PaymentStub::new(&config).build_payment(&wallet, amount)?;
            println!("{intent}");
        }
    }

    Ok(())
}

fn environment_for(public_key: Option<&str>) -> color_eyre::Result<Environment> {
    let Some(key) = public_key else {
        return Ok(Environment::empty());
    };
    let key: WalletPublicKey = key.parse()?;
    Ok(Environment::with_wallet(Arc::new(StaticWallet::new(key))))
}

async fn read_input(file: Option<PathBuf>) -> color_eyre::Result<FileBlob> {
    if let Some(path) = file {
        return Ok(FileBlob::from_path(&path).await?);
    }

    let mut buf = Vec::new();
    std::io::stdin().read_to_end(&mut buf)?;
    Ok(FileBlob::new(STDIN_FILE_NAME, buf))
}

fn write_output(content: &[u8], out: Option<PathBuf>) -> color_eyre::Result<()> {
    if let Some(path) = out {
        std::fs::write(path, content)?;
        return Ok(());
    }

    let mut stdout = std::io::stdout();
    stdout.write_all(content)?;
    Ok(())
}
