//! A manager's team in a league, as of a given round.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    api::{
        decode::{decode_many, decode_one},
        ApiClient, ApiRequest, Method,
    },
    core::params::UrlParameters,
    error::Result,
    league::{
        compose::compose,
        types::{Composition, FilledComposition, Pick},
    },
    security::Session,
    LeagueId, ManagerId,
};


const PATH: &str = "/league/team";
const LIST_PATH: &str = "/league/teams";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LeagueTeam {
    pub league_id: LeagueId,
    pub picks: Vec<Pick>,
    pub manager_id: ManagerId,
    pub manager_display_name: String,
    #[serde(default)]
    pub name: Option<String>,
    pub as_at: String,
    #[serde(rename = "as_at_round_sequence")]
    pub as_at_round: u32,
    pub composition: Composition,
}

impl LeagueTeam {
    /// Assign this team's picks to its composition's slots.
    pub fn filled_composition(&self) -> Result<FilledComposition> {
        compose(&self.picks, &self.composition)
    }

    /// Fill compositions for many teams in parallel, preserving input order.
    pub fn filled_compositions(teams: &[LeagueTeam]) -> Result<Vec<FilledComposition>> {
        teams.par_iter().map(LeagueTeam::filled_composition).collect()
    }

    /// Fetch a manager's team, optionally as at an earlier round.
    ///
    /// Returns `Ok(None)` when the league has no such team.
    pub async fn retrieve(
        client: &ApiClient,
        league_id: &LeagueId,
        manager_id: &ManagerId,
        as_at_round: Option<u32>,
        session: Option<&Session>,
    ) -> Result<Option<LeagueTeam>> {
        let mut params = UrlParameters::new()
            .with("league", league_id)
            .with("manager", manager_id);
        if let Some(round) = as_at_round {
            params.push("as_at_round", round);
        }

        let request = ApiRequest::new(PATH, Method::Get)
            .parameters(params)
            .session(session);

        let pending = client.dispatch(request)?;
        decode_one(pending.await)
    }

    /// Every team in a league. A league unknown to the backend yields an
    /// empty list.
    pub async fn list(
        client: &ApiClient,
        league_id: &LeagueId,
        session: Option<&Session>,
    ) -> Result<Vec<LeagueTeam>> {
        let request = ApiRequest::new(LIST_PATH, Method::Get)
            .parameters(UrlParameters::new().with("league", league_id))
            .session(session);

        let pending = client.dispatch(request)?;
        Ok(decode_many(pending.await)?.unwrap_or_default())
    }

    /// Remove this manager's team from the league.
    pub async fn delete(&self, client: &ApiClient, session: Option<&Session>) -> Result<()> {
        Self::delete_by_id(client, &self.league_id, &self.manager_id, session).await
    }

    /// Remove a manager's team without fetching it first.
    pub async fn delete_by_id(
        client: &ApiClient,
        league_id: &LeagueId,
        manager_id: &ManagerId,
        session: Option<&Session>,
    ) -> Result<()> {
        let params = UrlParameters::new()
            .with("league", league_id)
            .with("manager", manager_id);

        let request = ApiRequest::new(PATH, Method::Delete)
            .parameters(params)
            .session(session);

        client.dispatch(request)?.await?;
        info!(league = %league_id, manager = %manager_id, "team deleted");
        Ok(())
    }
}
