//! Draft Sport API Client Library
//!
//! A Rust client for the Draft Sport fantasy-sports backend: authenticated
//! requests, typed decoding of JSON payloads, and roster composition for
//! league teams.
//!
//! ## Features
//!
//! - **Request Dispatch**: API-key and session headers resolved from a
//!   per-request [`Session`] or the process [`Config`]
//! - **Lossless Identifiers**: 64-bit ids in response bodies are quoted
//!   before parsing so they never pass through a float
//! - **Typed Decoding**: generic helpers over any `serde` type
//! - **Roster Composition**: assign a team's picks to position and bench
//!   category slots
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use draft_sport::{api::ApiClient, Config, LeagueId, LeagueTeam, ManagerId};
//!
//! # async fn example() -> draft_sport::Result<()> {
//! let client = ApiClient::new(Arc::new(Config::load()?))?;
//!
//! let team = LeagueTeam::retrieve(
//!     &client,
//!     &LeagueId::new("123"),
//!     &ManagerId::new("456"),
//!     None,
//!     None,
//! )
//! .await?;
//!
//! if let Some(team) = team {
//!     for slot in &team.filled_composition()? {
//!         println!("{}: {}/{}", slot.requirement.label(), slot.picks.len(), slot.requirement.count());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export DRAFT_SPORT_API_ENDPOINT=https://api.draftsport.com
//! export DRAFT_SPORT_DEBUG=false
//! export DRAFT_SPORT_API_KEY=...
//! export DRAFT_SPORT_SESSION_ID=...
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod league;
pub mod security;

// Re-export commonly used types
pub use cli::types::{LeagueId, ManagerId, PlayerId};
pub use config::Config;
pub use error::{DraftSportError, Result};
pub use league::{Composition, FilledComposition, LeagueTeam, Pick};
pub use security::Session;

pub const LEAGUE_ID_ENV_VAR: &str = "DRAFT_SPORT_LEAGUE_ID";
