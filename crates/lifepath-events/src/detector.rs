//! Threshold-based life event detection.
//!
//! Each year the detector compares the state before the year's actions with
//! the state after them. A rule fires on a rising edge: its predicate holds
//! now and its guard shows the threshold was not crossed the year before.
//! Economic Hardship has no guard and fires every year its conditions hold.
//!
//! All predicates are evaluated before any impact is applied, so one event's
//! impact cannot trigger another in the same year. Impacts are then applied
//! in rule order.

use lifepath_types::{AttributeDelta, EventKind, IndividualState, LifeEvent, StateField};
use tracing::debug;

/// Whether the rule for `kind` fires for this pair of states.
pub fn is_triggered(
    kind: EventKind,
    previous: &IndividualState,
    current: &IndividualState,
    economic_cycle: f64,
) -> bool {
    match kind {
        EventKind::Burnout => current.stress > 0.8 && previous.stress <= 0.8,
        EventKind::CareerBreakthrough => {
            current.skill_depth > 0.7
                && current.employment_stability > 0.6
                && economic_cycle > 0.0
                && previous.skill_depth <= 0.7
        }
        EventKind::SocialIsolation => current.loneliness > 0.9 && previous.loneliness <= 0.9,
        EventKind::EconomicHardship => {
            current.wealth < 0.0 && current.income < 500.0 && economic_cycle < -0.5
        }
        EventKind::EducationalAchievement => {
            current.education_level >= 0.8 && previous.education_level < 0.8
        }
        EventKind::HealthCrisis => current.health < 0.3 && previous.health >= 0.3,
    }
}

/// The attribute changes an event of `kind` carries, given the current state.
pub fn impact(kind: EventKind, current: &IndividualState) -> Vec<AttributeDelta> {
    let delta = |field, delta| AttributeDelta { field, delta };
    match kind {
        EventKind::Burnout => vec![
            delta(StateField::Health, -0.1),
            delta(StateField::MentalHealth, -0.15),
            delta(StateField::Energy, -0.2),
        ],
        EventKind::CareerBreakthrough => vec![
            delta(StateField::Income, current.income * 0.3),
            delta(StateField::Wealth, 2000.0),
            delta(StateField::SocialCapital, 0.1),
        ],
        EventKind::SocialIsolation => vec![
            delta(StateField::MentalHealth, -0.2),
            delta(StateField::Health, -0.05),
        ],
        EventKind::EconomicHardship => vec![
            delta(StateField::Stress, 0.15),
            delta(StateField::MentalHealth, -0.1),
        ],
        EventKind::EducationalAchievement => vec![
            delta(StateField::SkillDepth, 0.1),
            delta(StateField::Income, current.income * 0.2),
        ],
        EventKind::HealthCrisis => vec![
            delta(StateField::Wealth, -2000.0),
            delta(StateField::Energy, -0.3),
        ],
    }
}

/// Detector owning the append-only event log of one life.
#[derive(Debug, Clone, Default)]
pub struct EventDetector {
    log: Vec<LifeEvent>,
}

impl EventDetector {
    /// Create a detector with an empty log.
    pub const fn new() -> Self {
        Self { log: Vec::new() }
    }

    /// Detect this year's events, apply their impacts, and log them.
    ///
    /// `previous` is the state before the year's transition, `current` the
    /// state after it. Returns the number of events that fired.
    pub fn detect(
        &mut self,
        previous: &IndividualState,
        current: &mut IndividualState,
        economic_cycle: f64,
        year: i32,
    ) -> usize {
        let fired: Vec<LifeEvent> = EventKind::ALL
            .into_iter()
            .filter(|kind| is_triggered(*kind, previous, current, economic_cycle))
            .map(|kind| LifeEvent {
                year,
                age: current.age,
                kind,
                title: kind.title().to_owned(),
                description: kind.description().to_owned(),
                impact: impact(kind, current),
                category: kind.category(),
            })
            .collect();

        for event in &fired {
            for change in &event.impact {
                current.apply_delta(change.field, change.delta);
            }
            debug!(year, age = event.age, kind = ?event.kind, "Life event");
        }

        let count = fired.len();
        self.log.extend(fired);
        count
    }

    /// Events detected so far, in order.
    pub fn events(&self) -> &[LifeEvent] {
        &self.log
    }

    /// Consume the detector, returning the log.
    pub fn into_events(self) -> Vec<LifeEvent> {
        self.log
    }
}
