//! League domain: teams, picks, and roster composition

pub mod compose;
pub mod team;
pub mod types;

pub use compose::compose;
pub use team::LeagueTeam;
pub use types::{
    Category, CategoryMembership, CategoryRequirement, Composition, FilledComposition,
    FilledRequirement, Pick, Player, Position, PositionRequirement, Requirement,
};
