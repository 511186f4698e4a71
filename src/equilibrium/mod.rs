//! Equilibrium queries over immutable game snapshots.

pub mod admissible;
pub mod nash;

pub use admissible::{
    find_admissible_nash_equilibria, find_admissible_nash_equilibria_with_preferences, is_dominated,
    preference_profile_key,
};
pub use nash::{best_response, find_pure_nash_equilibria, is_pure_nash_equilibrium};
