//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{LeagueId, ManagerId};

/// Arguments identifying one manager's team.
#[derive(Debug, Args)]
pub struct TeamSelector {
    /// League ID (or set `DRAFT_SPORT_LEAGUE_ID` env var).
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// Manager (agent) ID owning the team.
    #[clap(long, short)]
    pub manager_id: ManagerId,
}

#[derive(Debug, Subcommand)]
pub enum SessionCmd {
    /// Sign in and print the new session's credentials.
    Create {
        /// Account email address.
        #[clap(long)]
        email: String,

        /// Account secret.
        #[clap(long)]
        secret: String,

        /// Output the session as JSON.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum TeamCmd {
    /// Show a manager's team and how its picks fill the roster composition.
    Show {
        #[clap(flatten)]
        team: TeamSelector,

        /// Show the team as at an earlier round.
        #[clap(long, short)]
        round: Option<u32>,

        /// Output the filled composition as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List every team in a league with its open roster slots.
    List {
        /// League ID (or set `DRAFT_SPORT_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Remove a manager's team from a league.
    Delete {
        #[clap(flatten)]
        team: TeamSelector,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "draft-sport", about = "Draft Sport API client")]
pub struct DraftSport {
    /// Config file (defaults to the platform config dir).
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// API endpoint, overriding configuration.
    #[clap(long, global = true)]
    pub endpoint: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage sessions
    Session {
        #[clap(subcommand)]
        cmd: SessionCmd,
    },

    /// Inspect and manage league teams
    Team {
        #[clap(subcommand)]
        cmd: TeamCmd,
    },
}
