//! Posetal games: players, their action profiles, and lifted preferences.

use std::collections::{BTreeMap, HashMap};

use log::debug;
use rayon::prelude::*;

use super::error::{GameError, Result};
use super::lifting::induced_preorder;
use super::player::Player;
use super::profile::ActionProfile;
use crate::config::GameConfig;
use crate::order::{PartialOrder, Preorder};

/// Metric-priority orders keyed by player id.
pub type PreferenceProfile = HashMap<String, PartialOrder<String>>;

/// An immutable game snapshot.
///
/// Construction enumerates every action profile and lifts each player's
/// preference into a preorder over them. Queries only read these.
#[derive(Debug, Clone)]
pub struct PosetalGame {
    players: Vec<Player>,
    index: HashMap<String, usize>,
    /// Cartesian product; the first player's action varies slowest.
    profiles: Vec<ActionProfile>,
    /// Lifted preorder per player, parallel to `players`.
    induced: Vec<Preorder<ActionProfile>>,
    config: GameConfig,
}

impl PosetalGame {
    pub fn new(players: Vec<Player>) -> Result<Self> {
        Self::with_config(players, GameConfig::default())
    }

    pub fn with_config(players: Vec<Player>, config: GameConfig) -> Result<Self> {
        if players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        let mut index = HashMap::with_capacity(players.len());
        for (i, p) in players.iter().enumerate() {
            if index.insert(p.id().to_string(), i).is_some() {
                return Err(GameError::DuplicatePlayer(p.id().to_string()));
            }
        }

        let count = players
            .iter()
            .fold(1u128, |acc, p| acc.saturating_mul(p.actions().len() as u128));
        if count > config.max_action_profiles as u128 {
            return Err(GameError::TooManyProfiles {
                count,
                limit: config.max_action_profiles,
            });
        }

        let profiles = cartesian_profiles(&players);
        let induced: Vec<Preorder<ActionProfile>> = if config.parallel {
            players
                .par_iter()
                .map(|p| induced_preorder(p, &profiles))
                .collect()
        } else {
            players
                .iter()
                .map(|p| induced_preorder(p, &profiles))
                .collect()
        };
        debug!(
            "built posetal game: {} players, {} action profiles",
            players.len(),
            profiles.len()
        );

        Ok(PosetalGame {
            players,
            index,
            profiles,
            induced,
            config,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player_ids(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(Player::id)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| GameError::UnknownPlayer(id.to_string()))
    }

    pub fn player(&self, id: &str) -> Result<&Player> {
        Ok(&self.players[self.position(id)?])
    }

    /// Every action profile, in Cartesian order.
    pub fn action_profiles(&self) -> &[ActionProfile] {
        &self.profiles
    }

    /// True if `profile` assigns a legal action to exactly this game's players.
    pub fn contains_profile(&self, profile: &ActionProfile) -> bool {
        self.induced[0].contains(profile)
    }

    /// The lifted preorder of `id` over all action profiles.
    pub fn induced_preorder(&self, id: &str) -> Result<&Preorder<ActionProfile>> {
        Ok(&self.induced[self.position(id)?])
    }

    /// The lifted preorder of `id` restricted to the profiles in which only
    /// `id`'s action varies. `others` must name an action for every other
    /// player; its entry for `id`, and entries for non-players, are ignored.
    pub fn induced_preorder_for_actions(&self, id: &str, others: &ActionProfile) -> Result<Preorder<ActionProfile>> {
        let at = self.position(id)?;
        let mut fixed: BTreeMap<&str, &str> = BTreeMap::new();
        for other in self.players.iter().filter(|p| p.id() != id) {
            let action = others.get(other.id()).ok_or_else(|| GameError::IncompleteProfile {
                player: other.id().to_string(),
                profile: others.to_string(),
            })?;
            if !other.actions().contains(action) {
                return Err(GameError::UnknownAction {
                    player: other.id().to_string(),
                    action: action.to_string(),
                });
            }
            fixed.insert(other.id(), action);
        }

        let base: ActionProfile = fixed.into_iter().collect();
        let deviations: Vec<ActionProfile> = self.players[at]
            .actions()
            .iter()
            .map(|a| base.with_action(id, a))
            .collect();
        Ok(self.induced[at].restrict(&deviations)?)
    }

    /// Metric values of `id` at `profile`, keyed by metric name.
    pub fn evaluate_metrics(&self, id: &str, profile: &ActionProfile) -> Result<BTreeMap<String, f64>> {
        let player = self.player(id)?;
        Ok(player
            .metrics()
            .iter()
            .map(|m| (m.name().to_string(), m.evaluate(profile)))
            .collect())
    }

    /// A new game with the same players, actions and metrics, but with each
    /// player's priority order taken from `preferences`.
    ///
    /// Every player must be covered: a missing id is reported as
    /// [`GameError::MissingPreferenceOverride`] rather than silently keeping
    /// the old preference, and ids outside the game are rejected.
    pub fn with_preferences(&self, preferences: &PreferenceProfile) -> Result<PosetalGame> {
        if let Some(unknown) = preferences.keys().filter(|id| !self.index.contains_key(*id)).min() {
            return Err(GameError::UnknownPlayer(unknown.clone()));
        }
        let players = self
            .players
            .iter()
            .map(|p| {
                let pref = preferences
                    .get(p.id())
                    .ok_or_else(|| GameError::MissingPreferenceOverride(p.id().to_string()))?;
                p.with_preference(pref.clone())
            })
            .collect::<Result<Vec<_>>>()?;
        Self::with_config(players, self.config.clone())
    }
}

/// Every combination of one action per player.
fn cartesian_profiles(players: &[Player]) -> Vec<ActionProfile> {
    let mut partial: Vec<Vec<(&str, &str)>> = vec![Vec::new()];
    for player in players {
        partial = partial
            .into_iter()
            .flat_map(|prefix| {
                player.actions().iter().map(move |a| {
                    let mut next = prefix.clone();
                    next.push((player.id(), a.as_str()));
                    next
                })
            })
            .collect();
    }
    partial.into_iter().map(ActionProfile::new).collect()
}
