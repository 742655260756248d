use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use weekly_payroll::api::{AppState, create_router};
use weekly_payroll::cli::{ServerCli, init_tracing};
use weekly_payroll::config::ConfigLoader;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = ServerCli::parse();
    init_tracing(cli.verbose);

    let loader = ConfigLoader::load_or_default(cli.rates.as_ref())
        .context("could not load wage table")?;
    let router = create_router(AppState::new(loader));

    let listener = TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("could not bind {}", cli.bind))?;
    info!(address = %cli.bind, "Payroll server listening");

    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
