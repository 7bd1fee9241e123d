//! Entry point: parse CLI, load configuration and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use draft_sport::{
    api::ApiClient,
    cli::{Commands, DraftSport, SessionCmd, TeamCmd},
    commands::{
        session::handle_create_session,
        team::{handle_delete_team, handle_list_teams, handle_show_team},
    },
    config::{default_config_path, Config},
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = DraftSport::parse();

    let config_path = app.config.clone().unwrap_or_else(default_config_path);
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("failed to load configuration ({})", config_path.display()))?;
    if let Some(endpoint) = app.endpoint {
        config.api_endpoint = Some(endpoint);
    }

    let default_level = if config.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = ApiClient::new(Arc::new(config)).context("failed to build HTTP client")?;

    match app.command {
        Commands::Session { cmd } => match cmd {
            SessionCmd::Create {
                email,
                secret,
                json,
            } => handle_create_session(&client, &email, &secret, json).await?,
        },

        Commands::Team { cmd } => match cmd {
            TeamCmd::Show { team, round, json } => {
                handle_show_team(&client, team.league_id, team.manager_id, round, json).await?
            }

            TeamCmd::List { league_id, json } => handle_list_teams(&client, league_id, json).await?,

            TeamCmd::Delete { team } => {
                handle_delete_team(&client, team.league_id, team.manager_id).await?
            }
        },
    }

    Ok(())
}
