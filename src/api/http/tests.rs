//! Unit tests for request dispatch

use super::*;
use crate::core::http::{API_KEY_HEADER, JSON_CONTENT_TYPE, SESSION_ID_HEADER};
use reqwest::header::CONTENT_TYPE;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const ALL_METHODS: [Method; 5] = [
    Method::Get,
    Method::Post,
    Method::Put,
    Method::Update,
    Method::Delete,
];

fn configured_client(endpoint: &str) -> ApiClient {
    let config = Config::new(false)
        .with_api_endpoint(endpoint)
        .with_api_key("config-key")
        .with_session_id("config-session");
    ApiClient::new(Arc::new(config)).unwrap()
}

#[cfg(test)]
mod prepare_tests {
    use super::*;

    #[test]
    fn test_method_parsing() {
        for m in ALL_METHODS {
            assert_eq!(m.as_str().parse::<Method>().unwrap(), m);
        }
        match "PATCH".parse::<Method>().unwrap_err() {
            DraftSportError::InvalidArgument { message } => assert!(message.contains("PATCH")),
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
        assert!("get".parse::<Method>().is_err());
    }

    #[test]
    fn test_empty_path_is_invalid_argument() {
        let client = configured_client("https://api.example.com");
        let result = client.prepare(ApiRequest::new("", Method::Get));
        assert!(matches!(result, Err(DraftSportError::InvalidArgument { .. })));
    }

    #[test]
    fn test_auth_headers_attached_by_default() {
        let client = configured_client("https://api.example.com");
        for m in ALL_METHODS {
            let prepared = client.prepare(ApiRequest::new("/league/team", m)).unwrap();
            assert_eq!(prepared.headers().get(API_KEY_HEADER).unwrap(), "config-key");
            assert_eq!(
                prepared.headers().get(SESSION_ID_HEADER).unwrap(),
                "config-session"
            );
        }
    }

    #[test]
    fn test_skip_auth_never_attaches_headers() {
        let client = configured_client("https://api.example.com");
        for m in ALL_METHODS {
            let prepared = client
                .prepare(ApiRequest::new("/session", m).without_auth())
                .unwrap();
            assert!(prepared.headers().get(API_KEY_HEADER).is_none());
            assert!(prepared.headers().get(SESSION_ID_HEADER).is_none());
        }
    }

    #[test]
    fn test_skip_auth_does_not_need_credentials() {
        let config = Config::new(false).with_api_endpoint("https://api.example.com");
        let client = ApiClient::new(Arc::new(config)).unwrap();

        assert!(client
            .prepare(ApiRequest::new("/session", Method::Post).without_auth())
            .is_ok());
        assert!(matches!(
            client.prepare(ApiRequest::new("/league/team", Method::Get)),
            Err(DraftSportError::Configuration { .. })
        ));
    }

    #[test]
    fn test_session_overrides_configured_credentials() {
        let client = configured_client("https://api.example.com");
        let session = Session::new("sid", "skey", "session-key", "agent", "now");

        let prepared = client
            .prepare(ApiRequest::new("/league/team", Method::Get).session(Some(&session)))
            .unwrap();
        assert_eq!(prepared.headers().get(API_KEY_HEADER).unwrap(), "session-key");
        assert_eq!(prepared.headers().get(SESSION_ID_HEADER).unwrap(), "skey");
    }

    #[test]
    fn test_body_sets_json_content_type() {
        let client = configured_client("https://api.example.com");
        for m in [Method::Post, Method::Put] {
            let prepared = client
                .prepare(ApiRequest::new("/session", m).body(json!({"email": "a@b.c"})))
                .unwrap();
            assert_eq!(
                prepared.headers().get(CONTENT_TYPE).unwrap(),
                JSON_CONTENT_TYPE
            );
            let sent: serde_json::Value =
                serde_json::from_slice(prepared.body_bytes().unwrap()).unwrap();
            assert_eq!(sent, json!({"email": "a@b.c"}));
        }
    }

    #[test]
    fn test_no_body_means_no_content_type() {
        let client = configured_client("https://api.example.com");
        for m in [Method::Post, Method::Put] {
            let prepared = client.prepare(ApiRequest::new("/session", m)).unwrap();
            assert!(prepared.headers().get(CONTENT_TYPE).is_none());
            assert!(prepared.body_bytes().is_none());
        }
    }

    #[test]
    fn test_url_joins_endpoint_path_and_query() {
        let client = configured_client("https://api.example.com");
        let params = UrlParameters::new().with("league", "1").with("manager", "2");

        let prepared = client
            .prepare(ApiRequest::new("/league/team", Method::Get).parameters(params))
            .unwrap();
        assert_eq!(
            prepared.url().as_str(),
            "https://api.example.com/league/team?league=1&manager=2"
        );
        assert_eq!(prepared.method(), reqwest::Method::GET);
    }

    #[test]
    fn test_endpoint_override_wins() {
        let client = configured_client("https://api.example.com");
        let prepared = client
            .prepare(
                ApiRequest::new("/league/team", Method::Get)
                    .endpoint(Some("https://staging.example.com")),
            )
            .unwrap();
        assert_eq!(prepared.url().host_str(), Some("staging.example.com"));
    }

    #[test]
    fn test_update_method_is_sent_verbatim() {
        let client = configured_client("https://api.example.com");
        let prepared = client
            .prepare(ApiRequest::new("/league/team", Method::Update))
            .unwrap();
        assert_eq!(prepared.method().as_str(), "UPDATE");
    }

    #[test]
    fn test_missing_endpoint_is_configuration_error() {
        let config = Config::new(false).with_api_key("k").with_session_id("s");
        let client = ApiClient::new(Arc::new(config)).unwrap();
        match client.prepare(ApiRequest::new("/league/team", Method::Get)) {
            Err(DraftSportError::Configuration { value, .. }) => assert_eq!(value, "API endpoint"),
            other => panic!("Expected Configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_endpoint_is_invalid_argument() {
        let client = configured_client("not a url");
        assert!(matches!(
            client.prepare(ApiRequest::new("/league/team", Method::Get)),
            Err(DraftSportError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_build_url() {
        assert_eq!(build_url("https://x", "/a", None), "https://x/a");
        let params = UrlParameters::new();
        assert_eq!(build_url("https://x", "/a", Some(&params)), "https://x/a");
    }
}

#[cfg(test)]
mod send_tests {
    use super::*;

    #[tokio::test]
    async fn test_nothing_is_sent_until_awaited() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/league/team"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = configured_client(&server.uri());
        let pending = client
            .dispatch(ApiRequest::new("/league/team", Method::Get))
            .unwrap();

        assert!(server.received_requests().await.unwrap().is_empty());

        let payload = pending.await.unwrap();
        assert_eq!(payload, Some(json!({"ok": true})));
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_headers_and_query_reach_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/league/team"))
            .and(query_param("league", "10"))
            .and(query_param("manager", "20"))
            .and(header("x-draft-sport-api-key", "config-key"))
            .and(header("x-draft-sport-session-id", "config-session"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&server)
            .await;

        let client = configured_client(&server.uri());
        let params = UrlParameters::new().with("league", 10).with("manager", 20);
        let payload = client
            .dispatch(ApiRequest::new("/league/team", Method::Get).parameters(params))
            .unwrap()
            .await
            .unwrap();
        assert_eq!(payload, Some(json!([])));
    }

    #[tokio::test]
    async fn test_large_integers_survive_transport() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"id": 18446744073709551615, "n": 7}"#),
            )
            .mount(&server)
            .await;

        let client = configured_client(&server.uri());
        let payload = client
            .dispatch(ApiRequest::new("/thing", Method::Get))
            .unwrap()
            .await
            .unwrap()
            .unwrap();
        assert_eq!(payload["id"], json!("18446744073709551615"));
        assert_eq!(payload["n"], json!(7));
    }

    #[tokio::test]
    async fn test_not_found_is_absence() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = configured_client(&server.uri());
        let payload = client
            .dispatch(ApiRequest::new("/league/team", Method::Delete))
            .unwrap()
            .await
            .unwrap();
        assert!(payload.is_none());
    }

    #[tokio::test]
    async fn test_unparseable_success_is_decoding_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = configured_client(&server.uri());
        let result = client
            .dispatch(ApiRequest::new("/league/team", Method::Get))
            .unwrap()
            .await;
        assert!(matches!(result, Err(DraftSportError::Decoding { .. })));
    }

    #[tokio::test]
    async fn test_error_status_carries_content() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({"error": "conflict"})))
            .mount(&server)
            .await;

        let client = configured_client(&server.uri());
        let result = client
            .dispatch(ApiRequest::new("/league/team", Method::Put).body(json!({})))
            .unwrap()
            .await;
        match result.unwrap_err() {
            DraftSportError::Api { status, content } => {
                assert_eq!(status, 409);
                assert_eq!(content, Some(json!({"error": "conflict"})));
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_status_without_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = configured_client(&server.uri());
        let result = client
            .dispatch(ApiRequest::new("/league/team", Method::Get))
            .unwrap()
            .await;
        assert!(matches!(
            result,
            Err(DraftSportError::Api {
                status: 500,
                content: None
            })
        ));
    }

    #[tokio::test]
    async fn test_request_timeout_surfaces_as_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("{}")
                    .set_delay(std::time::Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let config = Config::new(false)
            .with_api_endpoint(server.uri())
            .with_request_timeout(Some(std::time::Duration::from_millis(100)));
        let client = ApiClient::new(Arc::new(config)).unwrap();

        let result = client
            .dispatch(ApiRequest::new("/slow", Method::Get).without_auth())
            .unwrap()
            .await;
        match result.unwrap_err() {
            DraftSportError::Http(e) => assert!(e.is_timeout()),
            other => panic!("Expected Http timeout, got {other:?}"),
        }
    }
}
