//! Session command implementation

use crate::{api::ApiClient, security::Session, Result};

/// Handle `session create`
pub async fn handle_create_session(
    client: &ApiClient,
    email: &str,
    secret: &str,
    as_json: bool,
) -> Result<()> {
    let session = Session::create(client, email, secret).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&session)?); // tarpaulin::skip
    } else {
        // tarpaulin::skip - console output
        println!("✓ Session created for agent {}", session.agent_id());
        println!("export DRAFT_SPORT_API_KEY={}", session.api_key());
        println!("export DRAFT_SPORT_SESSION_ID={}", session.session_key());
    }

    Ok(())
}
