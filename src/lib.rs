//! Posetal games library.
//!
//! Games whose players rank outcomes by a partial order over several named
//! metrics instead of a single payoff. Exposes the order algebra, the
//! lifting of metric priorities to preorders over action profiles, and the
//! pure and admissible Nash equilibrium queries built on them.

pub mod config;
pub mod equilibrium;
pub mod game;
pub mod order;

pub use config::GameConfig;
pub use equilibrium::{
    best_response, find_admissible_nash_equilibria, find_admissible_nash_equilibria_with_preferences,
    find_pure_nash_equilibria, is_pure_nash_equilibrium,
};
pub use game::{ActionProfile, GameError, Metric, Player, PosetalGame, PreferenceProfile};
pub use order::{all_partial_orders, OrderError, PartialOrder, Preorder};
