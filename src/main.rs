//! Tic-tac-toe game server binary.

use anyhow::Result;
use clap::Parser;
use tictactoe_server::{GameStore, router};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let store = GameStore::new();
    let app = router(store);

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    info!(host = %cli.host, port = cli.port, "Server ready");

    axum::serve(listener, app).await?;

    Ok(())
}
