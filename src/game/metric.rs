//! Metrics: named outcome functions over action profiles.

use std::fmt;
use std::sync::Arc;

use super::profile::ActionProfile;

/// Signature of a metric's outcome function.
pub type MetricFn = dyn Fn(&ActionProfile) -> f64 + Send + Sync;

/// A named, deterministic outcome function.
///
/// The function must be pure and total over the profiles it is evaluated
/// on, and must never return NaN. Cloning shares the function.
#[derive(Clone)]
pub struct Metric {
    name: String,
    outcome: Arc<MetricFn>,
}

impl Metric {
    pub fn new<F>(name: impl Into<String>, outcome: F) -> Self
    where
        F: Fn(&ActionProfile) -> f64 + Send + Sync + 'static,
    {
        Metric {
            name: name.into(),
            outcome: Arc::new(outcome),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn evaluate(&self, profile: &ActionProfile) -> f64 {
        (self.outcome)(profile)
    }
}

impl fmt::Debug for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Metric").field("name", &self.name).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_outcome_function() {
        let m = Metric::new("payoff", |ap: &ActionProfile| if ap.get("P1") == Some("A") { 1.0 } else { 0.0 });
        assert_eq!(m.name(), "payoff");
        assert_eq!(m.evaluate(&ActionProfile::new([("P1", "A")])), 1.0);
        assert_eq!(m.evaluate(&ActionProfile::new([("P1", "B")])), 0.0);
    }

    #[test]
    fn clones_share_the_function() {
        let m = Metric::new("const", |_: &ActionProfile| 2.5);
        let c = m.clone();
        assert_eq!(c.evaluate(&ActionProfile::default()), 2.5);
        assert_eq!(format!("{:?}", c), "Metric { name: \"const\", .. }");
    }
}
