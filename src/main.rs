use crate::cli::{Cli, Command, HistoryCommand};
use clap::Parser;
use roadtrip::app_config::AppConfig;
use roadtrip::server;
use tracing::info;

mod cli;
mod commands;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let mut config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    match cli.command {
        Command::Serve { host, port } => {
            config.override_server(host, port);
            server::serve(&config).await?;
        }
        Command::Plan {
            prompt,
            server,
            geojson,
            narration,
        } => {
            config.override_server_url(server);
            commands::plan(&config, &prompt, geojson.as_deref(), narration.as_deref()).await?;
        }
        Command::History { command: HistoryCommand::List } => commands::list_history(&config).await?,
        Command::History {
            command: HistoryCommand::Delete { id },
        } => commands::delete_history(&config, &id).await?,
    }

    Ok(())
}
