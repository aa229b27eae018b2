//! Paygate Node - HTTP backend for signup/login and payments.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use paygate_auth::{AccountService, CredentialStore, MemoryCredentialStore, TokenCodec};
use paygate_payments::{
    LocalGateway, MemoryPaymentStore, PaymentGateway, PaymentService, PaymentStore,
};

use paygate_node::api::{create_router, AppState};
use paygate_node::config::Config;
use paygate_node::observability::{init_logging, LogFormat};

/// Paygate Node - signup/login and payment operations over HTTP
#[derive(Parser, Debug)]
#[command(name = "paygate-node")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// HTTP listen address (overrides the config file)
    #[arg(long)]
    listen_addr: Option<SocketAddr>,

    /// Log level (overrides the config file)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load(&args.config)?;
    if let Some(addr) = args.listen_addr {
        config.listen_addr = addr;
    }
    if let Some(level) = args.log_level {
        config.log_level = level;
    }
    config.validate()?;

    init_logging(&config.log_level, LogFormat::parse(&config.log_format));
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting paygate node");

    let codec = TokenCodec::new(&config.secret_key, config.token_expiry());

    // Stores are injected collaborators; deployments swap these for
    // document-database-backed implementations with a unique email index.
    let credentials: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());
    let payment_store: Arc<dyn PaymentStore> = Arc::new(MemoryPaymentStore::new());
    let gateway: Arc<dyn PaymentGateway> = Arc::new(LocalGateway);

    let state = AppState {
        accounts: AccountService::new(credentials.clone(), codec.clone()),
        payments: PaymentService::new(gateway, payment_store, config.gateway_secret.clone()),
        codec,
        credentials,
    };

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
