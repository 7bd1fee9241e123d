//! Process-wide defaults for the API client.
//!
//! A [`Config`] is built once at start-up from an optional JSON file and the
//! `DRAFT_SPORT_*` environment variables (environment wins), then handed by
//! reference to [`crate::api::ApiClient`]. Every value except the debug flag
//! may also be overridden per request.
//!
//! ```bash
//! export DRAFT_SPORT_API_ENDPOINT=https://api.draftsport.com
//! export DRAFT_SPORT_DEBUG=false
//! ```

use serde::Deserialize;
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::error::{DraftSportError, Result};


pub const ENDPOINT_ENV_VAR: &str = "DRAFT_SPORT_API_ENDPOINT";
pub const API_KEY_ENV_VAR: &str = "DRAFT_SPORT_API_KEY";
pub const SESSION_ID_ENV_VAR: &str = "DRAFT_SPORT_SESSION_ID";
pub const DEBUG_ENV_VAR: &str = "DRAFT_SPORT_DEBUG";
pub const TIMEOUT_ENV_VAR: &str = "DRAFT_SPORT_TIMEOUT_SECS";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Path: ~/.config/draft-sport/config.json
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("draft-sport").join("config.json")
}

/// On-disk shape of the config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    api_endpoint: Option<String>,
    api_key: Option<String>,
    session_id: Option<String>,
    // Kept untyped so a non-boolean value is reported as a configuration error.
    debug: Option<Value>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_endpoint: Option<String>,
    pub api_key: Option<String>,
    pub session_id: Option<String>,
    pub debug: bool,
    /// `None` disables the per-request timeout.
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// A configuration with no defaults besides the debug flag.
    pub fn new(debug: bool) -> Self {
        Self {
            api_endpoint: None,
            api_key: None,
            session_id: None,
            debug,
            request_timeout: Some(DEFAULT_REQUEST_TIMEOUT),
        }
    }

    pub fn with_api_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Load from the default config file (if present) and the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(&default_config_path())
    }

    /// Load from `path` (if it exists) layered under the process environment.
    pub fn load_from(path: &Path) -> Result<Self> {
        let file = read_file_config(path)?;
        Self::from_sources(file, |key| std::env::var(key).ok())
    }

    fn from_sources<F>(file: FileConfig, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let debug = match env(DEBUG_ENV_VAR) {
            Some(raw) => parse_debug_flag(&raw)?,
            None => match file.debug {
                Some(Value::Bool(flag)) => flag,
                Some(other) => {
                    return Err(DraftSportError::configuration(
                        "valid debug flag",
                        format!("`debug` must be exactly true or false, found {other}"),
                    ))
                }
                None => {
                    return Err(DraftSportError::configuration(
                        "debug flag",
                        format!("Set {DEBUG_ENV_VAR} to true or false, or define `debug` in the config file"),
                    ))
                }
            },
        };

        let timeout_secs = match env(TIMEOUT_ENV_VAR) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                DraftSportError::configuration(
                    "valid request timeout",
                    format!("{TIMEOUT_ENV_VAR} must be a whole number of seconds, found {raw:?}"),
                )
            })?),
            None => file.timeout_secs,
        };
        let request_timeout = match timeout_secs {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => Some(DEFAULT_REQUEST_TIMEOUT),
        };

        Ok(Self {
            api_endpoint: env(ENDPOINT_ENV_VAR).or(file.api_endpoint),
            api_key: env(API_KEY_ENV_VAR).or(file.api_key),
            session_id: env(SESSION_ID_ENV_VAR).or(file.session_id),
            debug,
            request_timeout,
        })
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn parse_debug_flag(raw: &str) -> Result<bool> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(DraftSportError::configuration(
            "valid debug flag",
            format!("{DEBUG_ENV_VAR} must be exactly true or false, found {other:?}"),
        )),
    }
}
