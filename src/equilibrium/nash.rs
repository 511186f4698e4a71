//! Pure Nash equilibria of posetal games.
//!
//! A profile is an equilibrium when every player's action is a best
//! response to the others: no unilateral deviation is strictly preferred
//! under the player's lifted preorder.

use std::collections::BTreeSet;

use log::{debug, trace};
use rayon::prelude::*;

use crate::game::error::Result;
use crate::game::{ActionProfile, PosetalGame};

/// Actions of `player` that are maximal against the fixed actions of the
/// other players in `others`.
///
/// Several actions may be returned when they tie or are incomparable.
pub fn best_response(game: &PosetalGame, player: &str, others: &ActionProfile) -> Result<BTreeSet<String>> {
    let restricted = game.induced_preorder_for_actions(player, others)?;
    Ok(restricted
        .maximal_elements()
        .iter()
        .filter_map(|profile| profile.get(player).map(str::to_string))
        .collect())
}

/// True if every player's action in `profile` is a best response.
///
/// Profiles that are not action profiles of `game` are never equilibria.
pub fn is_pure_nash_equilibrium(game: &PosetalGame, profile: &ActionProfile) -> bool {
    if !game.contains_profile(profile) {
        return false;
    }
    for id in game.player_ids() {
        let own = match profile.get(id) {
            Some(a) => a,
            None => return false,
        };
        match best_response(game, id, profile) {
            Ok(actions) if actions.contains(own) => {}
            _ => {
                trace!("{} is not an equilibrium: {} can deviate from {}", profile, id, own);
                return false;
            }
        }
    }
    true
}

/// Every pure Nash equilibrium of `game`, by exhaustive search.
pub fn find_pure_nash_equilibria(game: &PosetalGame) -> BTreeSet<ActionProfile> {
    let profiles = game.action_profiles();
    let found: BTreeSet<ActionProfile> = if game.config().parallel {
        profiles
            .par_iter()
            .filter(|p| is_pure_nash_equilibrium(game, p))
            .cloned()
            .collect()
    } else {
        profiles
            .iter()
            .filter(|p| is_pure_nash_equilibrium(game, p))
            .cloned()
            .collect()
    };
    debug!("{} of {} profiles are pure Nash equilibria", found.len(), profiles.len());
    found
}
