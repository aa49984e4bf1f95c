//! Storefront cart binary.
//!
//! # Usage
//!
//! ```bash
//! # Run the in-memory development backend
//! storefront_cart serve-backend --addr 127.0.0.1:8000
//!
//! # Shop against it from the terminal
//! STOREFRONT_API_BASE_URL=http://127.0.0.1:8000 storefront_cart shop
//! ```

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront_cart::config::{
    BackendConfig, ClientConfig, API_BASE_URL_VAR, BACKEND_ADDR_VAR, USER_ID_VAR,
};
use storefront_cart::error::AppError;
use storefront_cart::{backend, shell, Catalog, HttpCommerceClient, Storefront};

#[derive(Parser)]
#[command(name = "storefront_cart")]
#[command(author, version, about = "Storefront cart client and development commerce backend")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shop from the terminal against a commerce backend
    Shop {
        /// Backend base URL (overrides STOREFRONT_API_BASE_URL)
        #[arg(long)]
        base_url: Option<String>,

        /// Cart owner id (overrides STOREFRONT_USER_ID)
        #[arg(long)]
        user_id: Option<String>,
    },
    /// Serve the in-memory development commerce backend
    ServeBackend {
        /// Bind address (overrides STOREFRONT_BACKEND_ADDR)
        #[arg(long)]
        addr: Option<SocketAddr>,
    },
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "storefront_cart=info,tower_http=info".into());

    // Logs go to stderr so they never interleave with the shell's screen.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::Shop { base_url, user_id } => {
            let config = ClientConfig::from_env(|key| match key {
                API_BASE_URL_VAR => base_url.clone(),
                USER_ID_VAR => user_id.clone(),
                _ => None,
            })?;
            tracing::info!(
                base_url = %config.api_base_url,
                user_id = %config.user_id,
                "Starting storefront"
            );

            let client = HttpCommerceClient::new(&config.api_base_url, &config.user_id);
            let storefront = Storefront::new(client, Catalog::demo())
                .with_notification_ttl(config.notification_ttl);

            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = tokio::io::stdout();
            shell::run(&storefront, stdin, &mut stdout).await?;
        }
        Commands::ServeBackend { addr } => {
            let config = BackendConfig::from_env(|key| match key {
                BACKEND_ADDR_VAR => addr.map(|a| a.to_string()),
                _ => None,
            })?;
            backend::serve(config.addr).await?;
        }
    }

    Ok(())
}
