use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use cart_store::catalog::CatalogClient;
use cart_store::config::Config;
use cart_store::logging::init_tracing;
use cart_store::store::Store;
use cart_store::ui::app::App;
use cart_store::ui::cart::{CartReducer, CartState};
use cart_store::ui::runtime;

/// Shopping cart backed by a remote product catalog.
#[derive(Debug, Parser)]
#[command(name = "cart-store", version)]
struct Cli {
    /// Config file (defaults to the platform config dir).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Catalog endpoint; overrides the config file.
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = load_config(&cli)?;
    tracing::info!(endpoint = %config.catalog.endpoint, "Configuration loaded");

    let catalog = CatalogClient::new(&config.catalog).context("Failed to create catalog client")?;
    let store = Store::new(
        CartReducer,
        CartState::default(),
        tokio::runtime::Handle::current(),
    );

    runtime::run(App::new(store, catalog))
        .await
        .context("Command loop failed")
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

    match &cli.endpoint {
        Some(endpoint) => config
            .with_endpoint(endpoint.clone())
            .context("Invalid --endpoint"),
        None => Ok(config),
    }
}
