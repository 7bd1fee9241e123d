//! Map an HTTP status and body onto a request outcome.

use serde_json::Value;

use crate::{
    api::guard::quote_large_integers,
    error::{DraftSportError, Result},
};

/// Interpret a completed response.
///
/// | status | outcome |
/// |---|---|
/// | 200 | `Ok(Some(payload))`, or `Decoding` when the guarded body is not JSON |
/// | 404 | `Ok(None)` |
/// | other | `Api { status, content }`, `content` present when the body is JSON |
pub fn decode_response(status: u16, body: &str) -> Result<Option<Value>> {
    match status {
        200 => {
            let guarded = quote_large_integers(body);
            serde_json::from_str(&guarded)
                .map(Some)
                .map_err(|source| DraftSportError::Decoding {
                    body: body.to_string(),
                    source,
                })
        }
        404 => Ok(None),
        _ => {
            let content = serde_json::from_str::<Value>(body).ok();
            Err(DraftSportError::Api { status, content })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_with_json_body() {
        let payload = decode_response(200, r#"{"name": "Team A"}"#).unwrap();
        assert_eq!(payload, Some(json!({"name": "Team A"})));
    }

    #[test]
    fn test_ok_applies_large_integer_guard() {
        let payload = decode_response(200, r#"{"league_id": 12345678901234567890}"#)
            .unwrap()
            .unwrap();
        assert_eq!(payload["league_id"], json!("12345678901234567890"));
    }

    #[test]
    fn test_ok_with_unparseable_body() {
        match decode_response(200, "<html>oops</html>").unwrap_err() {
            DraftSportError::Decoding { body, .. } => assert_eq!(body, "<html>oops</html>"),
            other => panic!("Expected Decoding error, got {other:?}"),
        }
    }

    #[test]
    fn test_ok_with_empty_body_is_decoding_error() {
        assert!(matches!(
            decode_response(200, ""),
            Err(DraftSportError::Decoding { .. })
        ));
    }

    #[test]
    fn test_not_found_is_absence() {
        assert!(decode_response(404, "").unwrap().is_none());
        assert!(decode_response(404, r#"{"error": "gone"}"#).unwrap().is_none());
    }

    #[test]
    fn test_error_status_with_json_content() {
        match decode_response(400, r#"{"error": "invalid manager"}"#).unwrap_err() {
            DraftSportError::Api { status, content } => {
                assert_eq!(status, 400);
                assert_eq!(content, Some(json!({"error": "invalid manager"})));
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_status_without_json_content() {
        match decode_response(502, "Bad Gateway").unwrap_err() {
            DraftSportError::Api { status, content } => {
                assert_eq!(status, 502);
                assert!(content.is_none());
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_other_success_codes_are_errors() {
        assert!(matches!(
            decode_response(201, "{}"),
            Err(DraftSportError::Api { status: 201, .. })
        ));
        assert!(matches!(
            decode_response(204, ""),
            Err(DraftSportError::Api {
                status: 204,
                content: None
            })
        ));
    }
}
