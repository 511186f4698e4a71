//! Equilibrium queries on small posetal games.

use std::collections::{BTreeSet, HashMap};

use posetal::equilibrium::{
    best_response, find_admissible_nash_equilibria, find_admissible_nash_equilibria_with_preferences,
    find_pure_nash_equilibria, is_pure_nash_equilibrium, preference_profile_key,
};
use posetal::{ActionProfile, GameConfig, GameError, Metric, PartialOrder, Player, PosetalGame, PreferenceProfile};

fn ap(p1: &str, p2: &str) -> ActionProfile {
    ActionProfile::new([("P1", p1), ("P2", p2)])
}

fn set(profiles: &[ActionProfile]) -> BTreeSet<ActionProfile> {
    profiles.iter().cloned().collect()
}

fn single(name: &str) -> PartialOrder<String> {
    PartialOrder::new([name.to_string()], []).unwrap()
}

/// Builds a two-player game where every player has one metric.
fn two_player_game<F1, F2>(actions: [&str; 2], p1: F1, p2: F2) -> PosetalGame
where
    F1: Fn(&ActionProfile) -> f64 + Send + Sync + 'static,
    F2: Fn(&ActionProfile) -> f64 + Send + Sync + 'static,
{
    let p1 = Player::new("P1", actions, [Metric::new("M1", p1)], single("M1")).unwrap();
    let p2 = Player::new("P2", actions, [Metric::new("M2", p2)], single("M2")).unwrap();
    PosetalGame::new(vec![p1, p2]).unwrap()
}

fn coordination() -> PosetalGame {
    let matching = |ap: &ActionProfile| if ap["P1"] == ap["P2"] { 1.0 } else { 0.0 };
    two_player_game(["A", "B"], matching, matching)
}

#[test]
fn coordination_equilibria() {
    let game = coordination();
    assert!(is_pure_nash_equilibrium(&game, &ap("A", "A")));
    assert!(is_pure_nash_equilibrium(&game, &ap("B", "B")));
    assert!(!is_pure_nash_equilibrium(&game, &ap("A", "B")));
    assert!(!is_pure_nash_equilibrium(&game, &ap("B", "A")));

    let expected = set(&[ap("A", "A"), ap("B", "B")]);
    assert_eq!(find_pure_nash_equilibria(&game), expected);
    assert_eq!(find_admissible_nash_equilibria(&game), expected);
}

#[test]
fn dominated_equilibrium_is_not_admissible() {
    let payoff = |ap: &ActionProfile| match (&ap["P1"], &ap["P2"]) {
        ("A", "A") => 2.0,
        ("B", "B") => 1.0,
        _ => 0.0,
    };
    let game = two_player_game(["A", "B"], payoff, payoff);
    assert_eq!(find_pure_nash_equilibria(&game), set(&[ap("A", "A"), ap("B", "B")]));
    assert_eq!(find_admissible_nash_equilibria(&game), set(&[ap("A", "A")]));
}

#[test]
fn asymmetric_game_has_single_equilibrium() {
    let p1 = |ap: &ActionProfile| if &ap["P1"] == "A" { 1.0 } else { 0.0 };
    let p2 = |ap: &ActionProfile| match (&ap["P1"], &ap["P2"]) {
        ("A", "A") => 1.0,
        ("A", _) => 0.5,
        (_, "B") => 1.0,
        _ => 0.2,
    };
    let game = two_player_game(["A", "B"], p1, p2);
    let ne = find_pure_nash_equilibria(&game);
    let admissible = find_admissible_nash_equilibria(&game);
    assert_eq!(ne, set(&[ap("A", "A")]));
    assert!(admissible.is_subset(&ne));
    assert_eq!(admissible, ne);

    let br = best_response(&game, "P2", &ActionProfile::new([("P1", "B")])).unwrap();
    assert_eq!(br, BTreeSet::from(["B".to_string()]));
}

#[test]
fn indifference_yields_several_best_responses() {
    let flat = |_: &ActionProfile| 0.0;
    let game = two_player_game(["A", "B"], flat, flat);
    let br = best_response(&game, "P1", &ActionProfile::new([("P2", "A")])).unwrap();
    assert_eq!(br.len(), 2);
    assert_eq!(find_pure_nash_equilibria(&game).len(), 4);
    assert_eq!(find_admissible_nash_equilibria(&game).len(), 4);
}

/// Prisoner's dilemma where each player weighs payoff, cooperation and
/// fairness. Player `me` faces `other`.
fn dilemma_metrics(me: &'static str, other: &'static str) -> [Metric; 3] {
    let payoff = Metric::new("payoff", move |ap: &ActionProfile| match (&ap[me], &ap[other]) {
        ("C", "C") => 3.0,
        ("C", "D") => 0.0,
        ("D", "C") => 5.0,
        _ => 1.0,
    });
    let cooperation = Metric::new("cooperation", move |ap: &ActionProfile| match (&ap[me], &ap[other]) {
        ("C", "C") => 10.0,
        ("C", _) => 5.0,
        _ => 0.0,
    });
    let fairness = Metric::new("fairness", move |ap: &ActionProfile| match (&ap[me], &ap[other]) {
        ("D", "C") => 0.0,
        _ => 5.0,
    });
    [payoff, cooperation, fairness]
}

/// Chain in which later names outrank earlier ones.
fn priority(lowest_first: [&str; 3]) -> PartialOrder<String> {
    PartialOrder::total_order(lowest_first.iter().map(|s| s.to_string())).unwrap()
}

fn dilemma() -> PosetalGame {
    let unordered = || PartialOrder::new(["payoff", "cooperation", "fairness"].map(String::from), []).unwrap();
    let p1 = Player::new("P1", ["C", "D"], dilemma_metrics("P1", "P2"), unordered()).unwrap();
    let p2 = Player::new("P2", ["C", "D"], dilemma_metrics("P2", "P1"), unordered()).unwrap();
    PosetalGame::new(vec![p1, p2]).unwrap()
}

fn both(order: PartialOrder<String>) -> PreferenceProfile {
    let mut prefs = PreferenceProfile::new();
    prefs.insert("P1".into(), order.clone());
    prefs.insert("P2".into(), order);
    prefs
}

#[test]
fn selfish_priorities_lead_to_mutual_defection() {
    let selfish = both(priority(["cooperation", "fairness", "payoff"]));
    let found = find_admissible_nash_equilibria_with_preferences(&dilemma(), &selfish).unwrap();
    assert_eq!(found, set(&[ap("D", "D")]));
}

#[test]
fn cooperative_priorities_lead_to_mutual_cooperation() {
    let cooperative = both(priority(["payoff", "fairness", "cooperation"]));
    let found = find_admissible_nash_equilibria_with_preferences(&dilemma(), &cooperative).unwrap();
    assert_eq!(found, set(&[ap("C", "C")]));
}

#[test]
fn base_game_is_not_mutated() {
    let base = dilemma();
    let before = base.player("P1").unwrap().preference().clone();
    let selfish = both(priority(["cooperation", "fairness", "payoff"]));
    find_admissible_nash_equilibria_with_preferences(&base, &selfish).unwrap();
    assert_eq!(base.player("P1").unwrap().preference(), &before);
}

#[test]
fn results_ignore_preference_insertion_order() {
    let base = dilemma();
    let selfish = priority(["cooperation", "fairness", "payoff"]);
    let cooperative = priority(["payoff", "fairness", "cooperation"]);

    let mut forward: PreferenceProfile = HashMap::new();
    forward.insert("P1".into(), selfish.clone());
    forward.insert("P2".into(), cooperative.clone());
    let mut backward: PreferenceProfile = HashMap::new();
    backward.insert("P2".into(), cooperative);
    backward.insert("P1".into(), selfish);

    assert_eq!(
        find_admissible_nash_equilibria_with_preferences(&base, &forward).unwrap(),
        find_admissible_nash_equilibria_with_preferences(&base, &backward).unwrap()
    );
    assert_eq!(
        preference_profile_key(&forward).unwrap(),
        preference_profile_key(&backward).unwrap()
    );
}

#[test]
fn missing_override_is_an_error() {
    let base = dilemma();
    let mut prefs = PreferenceProfile::new();
    prefs.insert("P2".into(), priority(["payoff", "fairness", "cooperation"]));
    let err = find_admissible_nash_equilibria_with_preferences(&base, &prefs).unwrap_err();
    assert_eq!(err, GameError::MissingPreferenceOverride("P1".into()));
}

#[test]
fn induced_preorders_are_reflexive() {
    let base = dilemma();
    for game in [
        base.clone(),
        base.with_preferences(&both(priority(["payoff", "fairness", "cooperation"]))).unwrap(),
    ] {
        for id in ["P1", "P2"] {
            let pre = game.induced_preorder(id).unwrap();
            assert_eq!(pre.len(), 4);
            for x in game.action_profiles() {
                assert!(pre.leq(x, x));
            }
        }
    }
}

#[test]
fn sequential_search_matches_parallel() {
    let players = dilemma().players().to_vec();
    let sequential = PosetalGame::with_config(
        players,
        GameConfig {
            parallel: false,
            ..GameConfig::default()
        },
    )
    .unwrap();
    let prefs = both(priority(["cooperation", "fairness", "payoff"]));
    assert_eq!(
        find_admissible_nash_equilibria_with_preferences(&sequential, &prefs).unwrap(),
        find_admissible_nash_equilibria_with_preferences(&dilemma(), &prefs).unwrap()
    );
}
