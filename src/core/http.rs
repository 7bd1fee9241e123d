//! HTTP header utilities for Draft Sport API communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};

pub const API_KEY_HEADER: &str = "x-draft-sport-api-key";
pub const SESSION_ID_HEADER: &str = "x-draft-sport-session-id";
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Build the two authentication headers.
pub fn auth_header_map(api_key: &str, session_id: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(
        HeaderName::from_static(SESSION_ID_HEADER),
        HeaderValue::from_str(session_id)?,
    );
    h.insert(
        HeaderName::from_static(API_KEY_HEADER),
        HeaderValue::from_str(api_key)?,
    );
    Ok(h)
}

/// Content-type header for a JSON request body.
pub fn json_content_type() -> (HeaderName, HeaderValue) {
    (CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
}
