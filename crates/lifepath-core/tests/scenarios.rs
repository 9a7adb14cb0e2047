//! End-to-end scenarios for the `lifepath-core` simulation loop.
//!
//! Each test runs complete lives through [`simulate`] and checks properties
//! of the outcome rather than exact trajectories.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use lifepath_core::{EndReason, SimulationConfig, simulate};
use lifepath_types::{BirthProfile, EventCategory, Personality, Region, StateField};

fn scenario(seed: u64) -> SimulationConfig {
    let mut config = SimulationConfig::default();
    config.birth = BirthProfile {
        birth_year: 1980,
        region: Region::Urban,
        family_class: 0.6,
        parents_education: 0.7,
        family_stability: 0.8,
        genetic_health: 0.75,
        cognitive_potential: 0.65,
    };
    config.personality = Personality {
        openness: 0.7,
        conscientiousness: 0.8,
        risk_preference: 0.5,
        social_drive: 0.6,
        resilience: 0.7,
    };
    config.run.max_age = 80;
    config.run.seed = Some(seed);
    config
}

#[test]
fn reference_life_reaches_max_age() {
    let outcome = simulate(&scenario(42)).unwrap();
    let last = &outcome.final_state;

    assert_eq!(outcome.end_reason, EndReason::MaxAge);
    assert_eq!(last.age, 80);
    assert!(last.health > 0.0);
    assert!(outcome.trajectory.iter().all(|r| r.state.health > 0.0));
    assert_eq!(outcome.trajectory.len(), usize::try_from(last.age).unwrap());
    assert_eq!(outcome.seed, 42);

    assert!(!outcome.events.is_empty());
    assert!(!outcome.summary.narrative.is_empty());
    assert!(!outcome.summary.highlights.is_empty());
    assert!(last.is_within_bounds());
    for field in StateField::BOUNDED {
        assert!((0.0..=1.0).contains(&outcome.summary.final_state.get(field)));
    }

    let stats = &outcome.summary.statistics;
    assert_eq!(stats.total_events, outcome.events.len());
    assert_eq!(stats.events_by_category.len(), EventCategory::ALL.len());
    assert_eq!(
        stats.events_by_category.values().sum::<usize>(),
        outcome.events.len()
    );
    assert!(stats.peak_wealth >= stats.final_wealth);
    assert_eq!(
        outcome.trajectory.iter().map(|r| r.events_fired).sum::<usize>(),
        outcome.events.len()
    );
}

#[test]
fn trajectory_is_contiguous_and_bounded() {
    let outcome = simulate(&scenario(7)).unwrap();
    for (index, record) in outcome.trajectory.iter().enumerate() {
        let age = u32::try_from(index).unwrap();
        assert_eq!(record.age, age);
        assert_eq!(record.year, 1980 + i32::try_from(index).unwrap());
        assert_eq!(record.state.age, age + 1);
        assert!(record.actions.len() <= 2);
        assert_eq!(record.actions.len(), record.outcomes.len());
        assert!(record.state.is_within_bounds(), "year {}: {:?}", record.year, record.state);
    }
}

#[test]
fn identical_seeds_give_identical_outcomes() {
    let first = serde_json::to_string(&simulate(&scenario(1234)).unwrap()).unwrap();
    let second = serde_json::to_string(&simulate(&scenario(1234)).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn different_seeds_give_different_lives() {
    let a = simulate(&scenario(1)).unwrap();
    let b = simulate(&scenario(2)).unwrap();
    assert_ne!(
        serde_json::to_string(&a.trajectory).unwrap(),
        serde_json::to_string(&b.trajectory).unwrap()
    );
}

#[test]
fn lives_before_the_windows_never_miss_them() {
    let mut config = scenario(5);
    config.birth.birth_year = 1950;
    config.run.max_age = 20;
    let outcome = simulate(&config).unwrap();
    assert!(!outcome.world.country.window_missed);
    assert!((outcome.world.country.mobility_multiplier - 1.0).abs() < f64::EPSILON);
}

#[test]
fn lives_spanning_the_windows_miss_them_once() {
    let mut config = scenario(6);
    config.birth.birth_year = 1970;
    config.run.max_age = 60;
    let outcome = simulate(&config).unwrap();

    let reached_solidify = outcome.trajectory.last().is_some_and(|r| r.year >= 2008);
    assert_eq!(outcome.world.country.window_missed, reached_solidify);
    if reached_solidify {
        assert!((outcome.world.country.mobility_multiplier - 0.3).abs() < 1e-12);
        assert!(
            outcome
                .trajectory
                .iter()
                .any(|r| r.era == "REFORM_EARLY" || r.era == "URBAN_BOOM")
        );
    }
}

#[test]
fn cities_diverge_under_the_same_seed() {
    let mut shenzhen = scenario(99);
    shenzhen.world.city = "shenzhen".to_owned();
    shenzhen.run.max_age = 40;
    let mut guangzhou = shenzhen.clone();
    guangzhou.world.city = "guangzhou".to_owned();

    let a = simulate(&shenzhen).unwrap();
    let b = simulate(&guangzhou).unwrap();
    assert!((a.final_state.wealth - b.final_state.wealth).abs() > 1e-6);
    assert_eq!(a.world.city.name, "shenzhen");
    assert_eq!(b.world.city.name, "guangzhou");
}

#[test]
fn wealthy_births_end_wealthier_on_average() {
    let mean_wealth = |family_class: f64| {
        let total: f64 = (0..20_u64)
            .map(|seed| {
                let mut config = scenario(seed);
                config.world.city = "guangzhou".to_owned();
                config.birth.family_class = family_class;
                config.personality.risk_preference = 0.1;
                config.run.max_age = 30;
                simulate(&config).unwrap().final_state.wealth
            })
            .sum();
        total / 20.0
    };
    assert!(mean_wealth(0.95) > mean_wealth(0.05));
}

#[test]
fn family_report_is_populated() {
    let outcome = simulate(&scenario(21)).unwrap();
    let family = &outcome.family;
    assert_eq!(family.state.is_only_child, family.state.siblings == 0);
    assert!((0.5..=1.0).contains(&family.competition_intensity));
    assert!((0.0..=1.0).contains(&family.state.caregiver_burden));
}

#[test]
fn scripted_years_follow_the_script() {
    let mut config = scenario(31);
    config.run.max_age = 30;
    config.personality.social_drive = 0.9;
    config.overrides.insert(25, vec![lifepath_types::Action::Relation]);
    let outcome = simulate(&config).unwrap();
    if let Some(record) = outcome.trajectory.iter().find(|r| r.age == 25) {
        assert_eq!(record.actions, vec![lifepath_types::Action::Relation]);
    }
}
