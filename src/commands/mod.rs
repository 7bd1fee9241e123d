//! Command implementations for the Draft Sport CLI

pub mod session;
pub mod team;

use crate::{error::DraftSportError, LeagueId, Result, LEAGUE_ID_ENV_VAR};

/// Resolve league ID from option or environment variable
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    league_id
        .or_else(|| {
            std::env::var(LEAGUE_ID_ENV_VAR)
                .ok()
                .and_then(|s| s.parse::<LeagueId>().ok())
        })
        .ok_or_else(|| {
            DraftSportError::configuration(
                "league ID",
                format!("Pass --league-id or set {LEAGUE_ID_ENV_VAR}"),
            )
        })
}
