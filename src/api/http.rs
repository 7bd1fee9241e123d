//! Request dispatch for the Draft Sport API.
//!
//! A request is handled in two steps. [`ApiClient::prepare`] does everything
//! that can fail because of caller misuse or missing configuration (empty
//! path, unresolved endpoint or credentials, unserializable body) and returns
//! a [`PreparedRequest`] without touching the network. [`PreparedRequest::send`]
//! performs the round trip and maps the response through
//! [`decode_response`]. [`ApiClient::dispatch`] chains the two so misuse is
//! reported before there is anything to await:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use draft_sport::{api::{ApiClient, ApiRequest, Method}, Config};
//!
//! # async fn example() -> draft_sport::Result<()> {
//! let config = Arc::new(Config::new(false).with_api_endpoint("https://api.example.com"));
//! let client = ApiClient::new(config)?;
//! let payload = client
//!     .dispatch(ApiRequest::new("/league/team", Method::Get).without_auth())?
//!     .await?;
//! # Ok(())
//! # }
//! ```

use reqwest::Client;
use serde_json::Value;
use std::{fmt, future::Future, str::FromStr, sync::Arc};
use tracing::{debug, info, warn};

use crate::{
    api::{
        resolve::{choose_api_endpoint, choose_api_key, choose_session_id},
        response::decode_response,
    },
    config::Config,
    core::{
        http::{auth_header_map, json_content_type},
        params::UrlParameters,
    },
    error::{DraftSportError, Result},
    security::Session,
};

#[cfg(test)]
mod tests;

const USER_AGENT: &str = concat!("draft-sport/", env!("CARGO_PKG_VERSION"));

/// HTTP verbs the backend accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Update,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Update => "UPDATE",
            Method::Delete => "DELETE",
        }
    }

    fn to_reqwest(self) -> Result<reqwest::Method> {
        Ok(match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
            Method::Update => reqwest::Method::from_bytes(b"UPDATE")
                .map_err(|e| DraftSportError::invalid_argument(e.to_string()))?,
        })
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Method {
    type Err = DraftSportError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "UPDATE" => Ok(Method::Update),
            "DELETE" => Ok(Method::Delete),
            other => Err(DraftSportError::invalid_argument(format!(
                "Method appears invalid: {other}"
            ))),
        }
    }
}

/// Everything needed to describe one API call.
#[derive(Debug, Clone)]
pub struct ApiRequest<'a> {
    path: String,
    method: Method,
    parameters: Option<UrlParameters>,
    body: Option<Value>,
    session: Option<&'a Session>,
    endpoint: Option<&'a str>,
    skip_auth: bool,
}

impl<'a> ApiRequest<'a> {
    pub fn new(path: impl Into<String>, method: Method) -> Self {
        Self {
            path: path.into(),
            method,
            parameters: None,
            body: None,
            session: None,
            endpoint: None,
            skip_auth: false,
        }
    }

    pub fn parameters(mut self, parameters: UrlParameters) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// JSON body; attaching one also sets the JSON content-type.
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Credentials overriding the configured defaults.
    pub fn session(mut self, session: Option<&'a Session>) -> Self {
        self.session = session;
        self
    }

    /// Base URL overriding the configured default.
    pub fn endpoint(mut self, endpoint: Option<&'a str>) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Send the request without authentication headers.
    pub fn without_auth(mut self) -> Self {
        self.skip_auth = true;
        self
    }
}

/// Shared HTTP client bound to one [`Config`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: Arc<Config>,
}

impl ApiClient {
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate and build `request` without sending it.
    pub fn prepare(&self, request: ApiRequest<'_>) -> Result<PreparedRequest> {
        if request.path.is_empty() {
            return Err(DraftSportError::invalid_argument(
                "Cannot make request to empty path",
            ));
        }

        let endpoint = choose_api_endpoint(request.endpoint, &self.config)?;
        let url = build_url(endpoint, &request.path, request.parameters.as_ref());

        let mut builder = self.http.request(request.method.to_reqwest()?, &url);

        if !request.skip_auth {
            let api_key = choose_api_key(request.session, &self.config)?;
            let session_id = choose_session_id(request.session, &self.config)?;
            builder = builder.headers(auth_header_map(api_key, session_id)?);
        }

        if let Some(body) = &request.body {
            let (name, value) = json_content_type();
            builder = builder.header(name, value).body(serde_json::to_string(body)?);
        }

        let inner = builder.build().map_err(|e| {
            DraftSportError::invalid_argument(format!("Cannot build request for {url}: {e}"))
        })?;

        if self.config.debug {
            let header_names: Vec<&str> = inner.headers().keys().map(|k| k.as_str()).collect();
            info!(
                method = %inner.method(),
                url = %inner.url(),
                headers = ?header_names,
                has_body = request.body.is_some(),
                "prepared request"
            );
        }

        Ok(PreparedRequest {
            http: self.http.clone(),
            inner,
        })
    }

    /// Prepare `request` and return the pending round trip.
    ///
    /// Misuse and configuration errors are returned immediately; transport,
    /// status and decoding outcomes arrive through the returned future, which
    /// sends nothing until it is first polled.
    pub fn dispatch(
        &self,
        request: ApiRequest<'_>,
    ) -> Result<impl Future<Output = Result<Option<Value>>> + Send + 'static> {
        let prepared = self.prepare(request)?;
        Ok(prepared.send())
    }
}

/// A fully built request, ready to send exactly once.
#[derive(Debug)]
pub struct PreparedRequest {
    http: Client,
    inner: reqwest::Request,
}

impl PreparedRequest {
    pub fn method(&self) -> &reqwest::Method {
        self.inner.method()
    }

    pub fn url(&self) -> &reqwest::Url {
        self.inner.url()
    }

    pub fn headers(&self) -> &reqwest::header::HeaderMap {
        self.inner.headers()
    }

    pub fn body_bytes(&self) -> Option<&[u8]> {
        self.inner.body().and_then(|b| b.as_bytes())
    }

    /// Send the request and interpret the response.
    ///
    /// `Ok(None)` means the resource does not exist (404).
    pub async fn send(self) -> Result<Option<Value>> {
        let method = self.inner.method().clone();
        let url = self.inner.url().clone();
        debug!(%method, %url, "sending request");

        let response = self.http.execute(self.inner).await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        match status {
            200 => debug!(%method, %url, status, "request succeeded"),
            404 => debug!(%method, %url, "resource not found"),
            _ => warn!(%method, %url, status, "request failed"),
        }

        decode_response(status, &body)
    }
}

fn build_url(endpoint: &str, path: &str, parameters: Option<&UrlParameters>) -> String {
    match parameters {
        Some(params) => format!("{endpoint}{path}{}", params.query()),
        None => format!("{endpoint}{path}"),
    }
}
