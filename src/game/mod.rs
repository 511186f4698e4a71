//! Posetal games.
//!
//! Players carry several named metrics and a partial order over them; the
//! order is lifted to a preorder over action profiles when the game is built.

pub mod error;
pub mod lifting;
pub mod metric;
pub mod player;
pub mod posetal;
pub mod profile;

pub use error::GameError;
pub use lifting::{induced_leq, induced_preorder, Comparison, PriorityGraph};
pub use metric::{Metric, MetricFn};
pub use player::Player;
pub use posetal::{PosetalGame, PreferenceProfile};
pub use profile::ActionProfile;
