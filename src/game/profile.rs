//! Action profiles: one chosen action per player.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

/// An immutable assignment of actions to player ids.
///
/// Backed by an ordered map, so equality, hashing and ordering depend only
/// on content and never on the order entries were supplied in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionProfile {
    actions: BTreeMap<String, String>,
}

impl ActionProfile {
    pub fn new<P, A>(entries: impl IntoIterator<Item = (P, A)>) -> Self
    where
        P: Into<String>,
        A: Into<String>,
    {
        entries.into_iter().collect()
    }

    /// The action played by `player`, if the profile assigns one.
    pub fn get(&self, player: &str) -> Option<&str> {
        self.actions.get(player).map(String::as_str)
    }

    /// Number of participants.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// `(player, action)` pairs ordered by player id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.actions.iter().map(|(p, a)| (p.as_str(), a.as_str()))
    }

    /// A copy of this profile with `player` switched to `action`.
    pub fn with_action(&self, player: &str, action: &str) -> ActionProfile {
        let mut actions = self.actions.clone();
        actions.insert(player.to_string(), action.to_string());
        ActionProfile { actions }
    }
}

impl<P: Into<String>, A: Into<String>> FromIterator<(P, A)> for ActionProfile {
    fn from_iter<I: IntoIterator<Item = (P, A)>>(iter: I) -> Self {
        ActionProfile {
            actions: iter.into_iter().map(|(p, a)| (p.into(), a.into())).collect(),
        }
    }
}

impl<'a> Index<&'a str> for ActionProfile {
    type Output = str;

    /// Panics if `player` has no action, like map indexing.
    fn index(&self, player: &'a str) -> &str {
        match self.get(player) {
            Some(action) => action,
            None => panic!("no action for player '{}'", player),
        }
    }
}

impl fmt::Display for ActionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (player, action)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", player, action)?;
        }
        write!(f, "}}")
    }
}
