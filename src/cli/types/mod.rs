//! Type-safe wrappers for Draft Sport identifiers.

pub mod ids;

pub use ids::{LeagueId, ManagerId, PlayerId};
