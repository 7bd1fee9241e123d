//! Core utilities for the Draft Sport API client
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `http`: authentication and content-type headers
//! - `params`: ordered URL query parameters

pub mod http;
pub mod params;

// Re-export commonly used items for convenience
pub use http::{auth_header_map, API_KEY_HEADER, JSON_CONTENT_TYPE, SESSION_ID_HEADER};
pub use params::UrlParameters;
