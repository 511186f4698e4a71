//! Game construction settings.

/// Configuration for building and querying a [`PosetalGame`](crate::game::PosetalGame).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Largest Cartesian action-profile count a game may have. Lifting is
    /// quadratic in this number, so larger games are rejected up front.
    pub max_action_profiles: usize,
    /// Spread per-player lifting and per-profile equilibrium checks over
    /// the rayon thread pool.
    pub parallel: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            max_action_profiles: 4096,
            parallel: true,
        }
    }
}
