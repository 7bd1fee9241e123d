//! Roster composition: assign a team's picks to the slots of its
//! [`Composition`].
//!
//! Picks are taken in ascending `created` order. Position requirements are
//! filled first, in composition order, from picks that are *not* benched and
//! whose position name matches. Category requirements are filled next, in
//! composition order, from benched picks whose position belongs to the
//! category. A pick lands in at most one slot; picks that qualify for no open
//! slot are left out of the result.

use tracing::debug;

use crate::{
    error::{DraftSportError, Result},
    league::types::{
        CategoryMembership, Composition, FilledComposition, FilledRequirement, Pick, Requirement,
    },
};


/// Partition `picks` into the requirements of `composition`.
///
/// Fails only when a benched pick considered for a category slot has a
/// position without category membership information.
pub fn compose(picks: &[Pick], composition: &Composition) -> Result<FilledComposition> {
    let mut remaining: Vec<&Pick> = picks.iter().collect();
    remaining.sort_by(|a, b| a.created.cmp(&b.created));

    let mut requirements = Vec::with_capacity(
        composition.position_requirements.len() + composition.category_requirements.len(),
    );

    for requirement in &composition.position_requirements {
        let (matched, rest) = claim(remaining, requirement.count, |pick| {
            Ok(!pick.benched && pick.player.position_name() == requirement.position_name)
        })?;
        remaining = rest;
        requirements.push(FilledRequirement {
            requirement: Requirement::Position(requirement.clone()),
            picks: matched,
        });
    }

    for requirement in &composition.category_requirements {
        let (matched, rest) = claim(remaining, requirement.count, |pick| {
            if !pick.benched {
                return Ok(false);
            }
            pick.player
                .position
                .is_in_category(&requirement.category)
                .ok_or_else(|| DraftSportError::MissingCategoryMembership {
                    pick: pick.id.clone(),
                    position: pick.player.position_name().to_string(),
                })
        })?;
        remaining = rest;
        requirements.push(FilledRequirement {
            requirement: Requirement::Category(requirement.clone()),
            picks: matched,
        });
    }

    if !remaining.is_empty() {
        debug!(unplaced = remaining.len(), "picks left outside the composition");
    }

    Ok(FilledComposition { requirements })
}

/// Accept qualifying picks in order until `count` are taken; every other
/// pick is returned, order preserved, for the next requirement.
fn claim<'a, F>(candidates: Vec<&'a Pick>, count: usize, mut qualifies: F) -> Result<(Vec<Pick>, Vec<&'a Pick>)>
where
    F: FnMut(&Pick) -> Result<bool>,
{
    let mut matched = Vec::new();
    let mut rest = Vec::with_capacity(candidates.len());

    for pick in candidates {
        if matched.len() < count && qualifies(pick)? {
            matched.push(pick.clone());
        } else {
            rest.push(pick);
        }
    }

    Ok((matched, rest))
}
