//! Request/response pipeline for the Draft Sport API
//!
//! - `http`: request dispatch ([`ApiClient`], [`ApiRequest`])
//! - `response`: status/body to outcome mapping
//! - `guard`: large-integer quoting applied before JSON parsing
//! - `decode`: typed adapters over request outcomes
//! - `resolve`: endpoint and credential resolution

pub mod decode;
pub mod guard;
pub mod http;
pub mod resolve;
pub mod response;

pub use decode::{decode_many, decode_one, decode_single, Decode};
pub use http::{ApiClient, ApiRequest, Method, PreparedRequest};
