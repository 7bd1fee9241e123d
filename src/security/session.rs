//! Authenticated sessions.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::{
    api::{decode::decode_one, ApiClient, ApiRequest, Method},
    cli::types::ids::de_string_or_integer,
    error::{DraftSportError, Result},
};

const PATH: &str = "/session";

/// Credentials returned by the backend after a successful sign-in.
///
/// A `Session` passed to a request overrides the configured API key and
/// session id for that request.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(deserialize_with = "de_string_or_integer")]
    session_id: String,
    session_key: String,
    api_key: String,
    #[serde(deserialize_with = "de_string_or_integer")]
    agent_id: String,
    created: String,
}

impl Session {
    pub fn new(
        session_id: impl Into<String>,
        session_key: impl Into<String>,
        api_key: impl Into<String>,
        agent_id: impl Into<String>,
        created: impl Into<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            session_key: session_key.into(),
            api_key: api_key.into(),
            agent_id: agent_id.into(),
            created: created.into(),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn session_key(&self) -> &str {
        &self.session_key
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    pub fn created(&self) -> &str {
        &self.created
    }

    /// Sign in with an email address and secret.
    pub async fn create(client: &ApiClient, email: &str, secret: &str) -> Result<Session> {
        let request = ApiRequest::new(PATH, Method::Post)
            .body(json!({ "email": email, "secret": secret }))
            .without_auth();

        let pending = client.dispatch(request)?;
        let session = decode_one::<Session>(pending.await)?
            .ok_or_else(|| DraftSportError::decode("Session: response had no payload"))?;

        info!(agent_id = %session.agent_id, "session created");
        Ok(session)
    }
}

// Keep secrets out of logs.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("session_id", &self.session_id)
            .field("agent_id", &self.agent_id)
            .field("created", &self.created)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{api::decode::Decode, config::Config};
    use std::sync::Arc;
    use wiremock::{
        matchers::{body_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn session_json() -> serde_json::Value {
        json!({
            "session_id": 4611686018427387904u64,
            "session_key": "sk-abc",
            "api_key": "ak-def",
            "agent_id": "12345678901234567890",
            "created": "2024-03-01_10:00:00.000000"
        })
    }

    #[test]
    fn test_session_decode() {
        let session = Session::decode(session_json()).unwrap();
        assert_eq!(session.session_id(), "4611686018427387904");
        assert_eq!(session.session_key(), "sk-abc");
        assert_eq!(session.api_key(), "ak-def");
        assert_eq!(session.agent_id(), "12345678901234567890");
        assert_eq!(session.created(), "2024-03-01_10:00:00.000000");
    }

    #[test]
    fn test_session_decode_missing_field() {
        let result = Session::decode(json!({"session_id": "1"}));
        assert!(matches!(result, Err(DraftSportError::Decode { .. })));
    }

    #[test]
    fn test_debug_hides_secrets() {
        let session = Session::new("1", "secret-key", "secret-api", "2", "now");
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("secret-key"));
        assert!(!rendered.contains("secret-api"));
    }

    #[tokio::test]
    async fn test_create_posts_credentials_without_auth() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/session"))
            .and(header("content-type", "application/json;charset=UTF-8"))
            .and(body_json(json!({"email": "a@b.c", "secret": "pw"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(session_json()))
            .expect(1)
            .mount(&server)
            .await;

        let config = Arc::new(Config::new(false).with_api_endpoint(server.uri()));
        let client = ApiClient::new(config).unwrap();

        let session = Session::create(&client, "a@b.c", "pw").await.unwrap();
        assert_eq!(session.api_key(), "ak-def");

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("x-draft-sport-api-key").is_none());
        assert!(requests[0].headers.get("x-draft-sport-session-id").is_none());
    }

    #[tokio::test]
    async fn test_create_rejected_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/session"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "bad secret"})))
            .mount(&server)
            .await;

        let config = Arc::new(Config::new(false).with_api_endpoint(server.uri()));
        let client = ApiClient::new(config).unwrap();

        match Session::create(&client, "a@b.c", "wrong").await.unwrap_err() {
            DraftSportError::Api { status, content } => {
                assert_eq!(status, 401);
                assert_eq!(content, Some(json!({"error": "bad secret"})));
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }
}
