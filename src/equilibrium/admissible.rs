//! Admissible equilibria: pure Nash equilibria that no other equilibrium
//! Pareto-dominates under the players' lifted preorders.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use super::nash::find_pure_nash_equilibria;
use crate::game::error::{GameError, Result};
use crate::game::{ActionProfile, PosetalGame, PreferenceProfile};
use crate::order::PartialOrder;

/// True if `y` is at least as good as `x` for every player and strictly
/// better for at least one.
pub fn is_dominated(game: &PosetalGame, x: &ActionProfile, y: &ActionProfile) -> bool {
    let mut strict = false;
    for id in game.player_ids() {
        let pre = match game.induced_preorder(id) {
            Ok(pre) => pre,
            Err(_) => return false,
        };
        if !pre.leq(x, y) {
            return false;
        }
        strict |= pre.less(x, y);
    }
    strict
}

/// The pure Nash equilibria of `game` not dominated by another one.
pub fn find_admissible_nash_equilibria(game: &PosetalGame) -> BTreeSet<ActionProfile> {
    let equilibria = find_pure_nash_equilibria(game);
    let admissible: BTreeSet<ActionProfile> = equilibria
        .iter()
        .filter(|x| !equilibria.iter().any(|y| y != *x && is_dominated(game, x, y)))
        .cloned()
        .collect();
    debug!(
        "{} admissible of {} pure Nash equilibria",
        admissible.len(),
        equilibria.len()
    );
    admissible
}

/// Admissible equilibria of `base` once every player's metric priority is
/// replaced by the order in `preferences`.
///
/// `base` is left untouched. The result depends only on the content of
/// `preferences`, never on its iteration order.
pub fn find_admissible_nash_equilibria_with_preferences(
    base: &PosetalGame,
    preferences: &PreferenceProfile,
) -> Result<BTreeSet<ActionProfile>> {
    let game = base.with_preferences(preferences)?;
    Ok(find_admissible_nash_equilibria(&game))
}

/// A canonical string for `preferences`, equal for equal content.
///
/// Entries are keyed by player id in sorted order and each order is written
/// as its elements and cover pairs, so callers can use the key to memoize
/// equilibrium queries.
pub fn preference_profile_key(preferences: &PreferenceProfile) -> Result<String> {
    let sorted: BTreeMap<&str, &PartialOrder<String>> =
        preferences.iter().map(|(id, order)| (id.as_str(), order)).collect();
    serde_json::to_string(&sorted).map_err(|e| GameError::Encoding(e.to_string()))
}
