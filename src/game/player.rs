//! Players of a posetal game.

use std::collections::BTreeSet;

use super::error::{GameError, Result};
use super::metric::Metric;
use crate::order::PartialOrder;

/// A player: available actions, the metrics it cares about, and a priority
/// order over those metrics' names.
#[derive(Debug, Clone)]
pub struct Player {
    id: String,
    actions: BTreeSet<String>,
    /// Sorted by name, so position `k` matches `preference.elements()[k]`.
    metrics: Vec<Metric>,
    preference: PartialOrder<String>,
}

impl Player {
    /// Validates that the player has actions, that metric names are
    /// unique, and that `preference` ranges over exactly those names.
    pub fn new<A: Into<String>>(
        id: impl Into<String>,
        actions: impl IntoIterator<Item = A>,
        metrics: impl IntoIterator<Item = Metric>,
        preference: PartialOrder<String>,
    ) -> Result<Self> {
        let id = id.into();
        let actions: BTreeSet<String> = actions.into_iter().map(Into::into).collect();
        if actions.is_empty() {
            return Err(GameError::NoActions(id));
        }

        let mut metrics: Vec<Metric> = metrics.into_iter().collect();
        metrics.sort_by(|a, b| a.name().cmp(b.name()));
        if let Some(w) = metrics.windows(2).find(|w| w[0].name() == w[1].name()) {
            return Err(GameError::DuplicateMetric {
                player: id,
                metric: w[0].name().to_string(),
            });
        }

        check_domain(&id, &metrics, &preference)?;
        Ok(Player {
            id,
            actions,
            metrics,
            preference,
        })
    }

    /// The same player with another metric-priority order.
    pub fn with_preference(&self, preference: PartialOrder<String>) -> Result<Player> {
        check_domain(&self.id, &self.metrics, &preference)?;
        Ok(Player {
            preference,
            ..self.clone()
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn actions(&self) -> &BTreeSet<String> {
        &self.actions
    }

    /// Metrics ordered by name.
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn preference(&self) -> &PartialOrder<String> {
        &self.preference
    }
}

fn check_domain(id: &str, metrics: &[Metric], preference: &PartialOrder<String>) -> Result<()> {
    let names: Vec<&str> = metrics.iter().map(Metric::name).collect();
    let domain: Vec<&str> = preference.elements().iter().map(String::as_str).collect();
    if names != domain {
        return Err(GameError::DomainMismatch {
            player: id.to_string(),
            metrics: names.iter().map(|s| s.to_string()).collect(),
            preference: domain.iter().map(|s| s.to_string()).collect(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::profile::ActionProfile;

    fn constant(name: &str, v: f64) -> Metric {
        Metric::new(name, move |_: &ActionProfile| v)
    }

    fn names(elements: &[&str], relations: &[(&str, &str)]) -> PartialOrder<String> {
        PartialOrder::new(
            elements.iter().map(|s| s.to_string()),
            relations.iter().map(|(a, b)| (a.to_string(), b.to_string())),
        )
        .unwrap()
    }

    #[test]
    fn builds_player_over_metric_names() {
        let pref = names(&["M1", "M2"], &[("M1", "M2")]);
        let p = Player::new("P1", ["A", "B"], [constant("M2", 0.5), constant("M1", 1.0)], pref).unwrap();
        assert_eq!(p.id(), "P1");
        assert_eq!(p.actions().len(), 2);
        assert_eq!(p.metrics()[0].name(), "M1");
    }

    #[test]
    fn preference_over_other_names_is_rejected() {
        let pref = names(&["X", "Y"], &[]);
        let err = Player::new("P2", ["A"], [constant("M1", 1.0), constant("M2", 0.5)], pref).unwrap_err();
        assert!(matches!(err, GameError::DomainMismatch { .. }));
    }

    #[test]
    fn preference_over_subset_is_rejected() {
        let pref = names(&["M1"], &[]);
        let err = Player::new("P", ["A"], [constant("M1", 1.0), constant("M2", 0.5)], pref).unwrap_err();
        assert!(matches!(err, GameError::DomainMismatch { .. }));
    }

    #[test]
    fn duplicate_metric_names_are_rejected() {
        let pref = names(&["M"], &[]);
        let err = Player::new("P", ["A"], [constant("M", 1.0), constant("M", 2.0)], pref).unwrap_err();
        assert_eq!(
            err,
            GameError::DuplicateMetric {
                player: "P".into(),
                metric: "M".into()
            }
        );
    }

    #[test]
    fn empty_action_set_is_rejected() {
        let pref = names(&["M"], &[]);
        let err = Player::new("P", Vec::<String>::new(), [constant("M", 1.0)], pref).unwrap_err();
        assert_eq!(err, GameError::NoActions("P".into()));
    }

    #[test]
    fn with_preference_revalidates_domain() {
        let p = Player::new("P", ["A"], [constant("M1", 1.0), constant("M2", 0.0)], names(&["M1", "M2"], &[])).unwrap();
        let swapped = p.with_preference(names(&["M1", "M2"], &[("M2", "M1")])).unwrap();
        assert!(swapped.preference().less(&"M2".to_string(), &"M1".to_string()));
        assert!(p.preference().cover_pairs().is_empty());
        assert!(p.with_preference(names(&["M1"], &[])).is_err());
    }
}
