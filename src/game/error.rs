//! Errors raised while building games or querying them.

use thiserror::Error;

use crate::order::OrderError;

/// Errors that can occur when constructing players and games, or when a
/// query names something the game does not contain.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("player '{player}': preference is over {preference:?} but metrics are {metrics:?}")]
    DomainMismatch {
        player: String,
        metrics: Vec<String>,
        preference: Vec<String>,
    },

    #[error("player '{player}': duplicate metric '{metric}'")]
    DuplicateMetric { player: String, metric: String },

    #[error("player '{0}' has no actions")]
    NoActions(String),

    #[error("a game needs at least one player")]
    NoPlayers,

    #[error("duplicate player id '{0}'")]
    DuplicatePlayer(String),

    #[error("unknown player '{0}'")]
    UnknownPlayer(String),

    #[error("player '{player}' has no action '{action}'")]
    UnknownAction { player: String, action: String },

    #[error("action profile {profile} has no action for player '{player}'")]
    IncompleteProfile { player: String, profile: String },

    #[error("no preference supplied for player '{0}'")]
    MissingPreferenceOverride(String),

    #[error("game would have {count} action profiles, limit is {limit}")]
    TooManyProfiles { count: u128, limit: usize },

    #[error("could not encode preference profile: {0}")]
    Encoding(String),

    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Result alias for game construction and queries.
pub type Result<T> = std::result::Result<T, GameError>;
