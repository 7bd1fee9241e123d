//! Ordered URL query parameters.
//!
//! The backend reads query parameters positionally in a few places, so
//! parameters keep insertion order and are rendered exactly as added.
//!
//! # Examples
//!
//! ```rust
//! use draft_sport::core::params::UrlParameters;
//!
//! let params = UrlParameters::new()
//!     .with("league", "123")
//!     .with("manager", "a b");
//! assert_eq!(params.query(), "?league=123&manager=a%20b");
//! ```

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParameters {
    pairs: Vec<(String, String)>,
}

impl UrlParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter, consuming and returning `self`.
    pub fn with(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl fmt::Display) {
        self.pairs.push((key.into(), value.to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Serialized query string including the leading `?`; empty when there
    /// are no parameters.
    pub fn query(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let joined = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{joined}")
    }
}

impl<K, V> FromIterator<(K, V)> for UrlParameters
where
    K: Into<String>,
    V: fmt::Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.push(k, v);
        }
        params
    }
}
