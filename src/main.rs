//! Entry point: parse CLI and dispatch to command handlers.

use bbstats::{
    api::HttpRecordSource,
    cli::{Bbstats, Commands},
    commands::{handle_franchises, handle_lookup, handle_player, handle_team},
    Result,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = Bbstats::parse();

    match app.command {
        Commands::Franchises { source } => {
            handle_franchises(&HttpRecordSource::from_args(&source)?).await?
        }

        Commands::Team {
            team,
            year,
            end_year,
            view,
            source,
        } => {
            let source = HttpRecordSource::from_args(&source)?;
            handle_team(&source, team, year, end_year, &view).await?
        }

        Commands::Player {
            player,
            view,
            source,
        } => {
            let source = HttpRecordSource::from_args(&source)?;
            handle_player(&source, player, &view).await?
        }

        Commands::Lookup { name, source } => {
            handle_lookup(&HttpRecordSource::from_args(&source)?, &name).await?
        }
    }

    Ok(())
}
