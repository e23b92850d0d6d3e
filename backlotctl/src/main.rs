use anyhow::{Context, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use backlot_client::{AccessToken, ApiClient};
use backlotctl::{cli::Cli, shell};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Local .env files are optional; missing ones are not an error.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("backlotctl=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(token) = cli.token else {
        bail!(
            "not authenticated: set BACKLOT_TOKEN (or pass --token) with an \
             operator access token"
        );
    };

    let client = ApiClient::new(&cli.api_url, AccessToken::new(token))
        .context("failed to construct the admin API client")?;

    shell::run(client, cli.page_size).await
}
