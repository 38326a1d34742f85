mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use lab_config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        cli::Commands::Query(args) => commands::query::handle(args, &config).await,
        cli::Commands::Show { id, format } => commands::show::handle(&id, format, &config).await,
        cli::Commands::Labels { format } => commands::labels::handle(format),
        cli::Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            commands::serve::handle(&host, port, &config).await
        }
    }
}
