use crate::cli::types::ids::{de_string_or_integer, PlayerId};
use serde::{Deserialize, Serialize};
use std::fmt;


/// A classification grouping several positions, used for bench slots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Category {
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Positions that can report whether they belong to a [`Category`].
pub trait CategoryMembership {
    /// `None` when the position carries no category information.
    fn is_in_category(&self, category: &Category) -> Option<bool>;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Position {
    pub name: String,
    /// Categories this position belongs to; absent on payloads that omit
    /// category membership.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
}

impl Position {
    pub fn new(name: impl Into<String>, categories: Option<Vec<Category>>) -> Self {
        Self {
            name: name.into(),
            categories,
        }
    }
}

impl CategoryMembership for Position {
    fn is_in_category(&self, category: &Category) -> Option<bool> {
        self.categories
            .as_ref()
            .map(|categories| categories.iter().any(|c| c.name == category.name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Player {
    #[serde(rename = "player_id")]
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
}

impl Player {
    pub fn position_name(&self) -> &str {
        &self.position.name
    }
}

/// One player's assignment to a manager's roster.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Pick {
    #[serde(rename = "pick_id", deserialize_with = "de_string_or_integer")]
    pub id: String,
    pub player: Player,
    #[serde(default)]
    pub benched: bool,
    /// Creation timestamp; picks are ordered by it lexicographically.
    pub created: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PositionRequirement {
    pub position_name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CategoryRequirement {
    pub category: Category,
    pub count: usize,
}

/// The slot template a roster is evaluated against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Composition {
    #[serde(default)]
    pub position_requirements: Vec<PositionRequirement>,
    #[serde(default)]
    pub category_requirements: Vec<CategoryRequirement>,
}

impl Composition {
    /// Total number of slots across both requirement kinds.
    pub fn slot_count(&self) -> usize {
        self.position_requirements
            .iter()
            .map(|r| r.count)
            .chain(self.category_requirements.iter().map(|r| r.count))
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Requirement {
    Position(PositionRequirement),
    Category(CategoryRequirement),
}

impl Requirement {
    pub fn count(&self) -> usize {
        match self {
            Requirement::Position(r) => r.count,
            Requirement::Category(r) => r.count,
        }
    }

    /// Position or category name.
    pub fn label(&self) -> &str {
        match self {
            Requirement::Position(r) => &r.position_name,
            Requirement::Category(r) => &r.category.name,
        }
    }
}

/// A requirement paired with the picks assigned to it.
///
/// May hold fewer picks than the requirement asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilledRequirement {
    pub requirement: Requirement,
    pub picks: Vec<Pick>,
}

impl FilledRequirement {
    pub fn is_filled(&self) -> bool {
        self.picks.len() >= self.requirement.count()
    }

    /// Slots still open.
    pub fn vacancies(&self) -> usize {
        self.requirement.count().saturating_sub(self.picks.len())
    }
}

/// Every requirement of a [`Composition`], in order, with its picks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilledComposition {
    pub requirements: Vec<FilledRequirement>,
}

impl FilledComposition {
    pub fn iter(&self) -> std::slice::Iter<'_, FilledRequirement> {
        self.requirements.iter()
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    pub fn vacancies(&self) -> usize {
        self.requirements.iter().map(FilledRequirement::vacancies).sum()
    }

    /// Number of picks placed into any slot.
    pub fn placed_picks(&self) -> usize {
        self.requirements.iter().map(|r| r.picks.len()).sum()
    }
}

impl<'a> IntoIterator for &'a FilledComposition {
    type Item = &'a FilledRequirement;
    type IntoIter = std::slice::Iter<'a, FilledRequirement>;

    fn into_iter(self) -> Self::IntoIter {
        self.requirements.iter()
    }
}
