//! Credential and endpoint resolution.
//!
//! Each value comes from the per-request override when one is given,
//! otherwise from the [`Config`] defaults, otherwise resolution fails with a
//! [`DraftSportError::Configuration`] naming the missing value.

use crate::{
    config::{Config, API_KEY_ENV_VAR, ENDPOINT_ENV_VAR, SESSION_ID_ENV_VAR},
    error::{DraftSportError, Result},
    security::Session,
};

pub fn choose_api_key<'a>(session: Option<&'a Session>, config: &'a Config) -> Result<&'a str> {
    if let Some(session) = session {
        return Ok(session.api_key());
    }
    config.api_key.as_deref().ok_or_else(|| {
        DraftSportError::configuration(
            "API key",
            format!("Set {API_KEY_ENV_VAR} (or `api_key` in the config file) or supply a Session to the request"),
        )
    })
}

/// The value sent in the session-id header.
///
/// A supplied [`Session`] contributes its session key, which is what the
/// backend authenticates against.
pub fn choose_session_id<'a>(session: Option<&'a Session>, config: &'a Config) -> Result<&'a str> {
    if let Some(session) = session {
        return Ok(session.session_key());
    }
    config.session_id.as_deref().ok_or_else(|| {
        DraftSportError::configuration(
            "session ID",
            format!("Set {SESSION_ID_ENV_VAR} (or `session_id` in the config file) or supply a Session to the request"),
        )
    })
}

pub fn choose_api_endpoint<'a>(endpoint: Option<&'a str>, config: &'a Config) -> Result<&'a str> {
    if let Some(endpoint) = endpoint.filter(|e| !e.is_empty()) {
        return Ok(endpoint);
    }
    config
        .api_endpoint
        .as_deref()
        .filter(|e| !e.is_empty())
        .ok_or_else(|| {
            DraftSportError::configuration(
                "API endpoint",
                format!("Set {ENDPOINT_ENV_VAR} (or `api_endpoint` in the config file) or supply an endpoint override to the request"),
            )
        })
}
