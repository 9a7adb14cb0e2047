//! Nominal costs and rates of each action.
//!
//! Every value here is a nominal amount; handlers pass it through the noise
//! function before applying it.

use lifepath_types::Action;

/// Age from which study interrupts earnings.
pub const ADULT_AGE: u32 = 18;

/// Fraction of income kept in a year spent studying as an adult.
pub const STUDY_INCOME_RETENTION: f64 = 0.9;

/// Base learning gain per year of study, before modifiers.
pub const STUDY_BASE_GAIN: f64 = 0.05;

/// Income scale of one year of work, before modifiers.
pub const WORK_BASE_INCOME: f64 = 1000.0;

/// Fraction of last year's income that work always preserves.
pub const WORK_INCOME_FLOOR: f64 = 0.95;

/// Fraction of income saved into wealth.
pub const SAVINGS_RATE: f64 = 0.3;

/// Stress above which work erodes health and mental health.
pub const OVERWORK_STRESS: f64 = 0.7;

/// Fraction of income kept in a year with rest and no work.
pub const REST_INCOME_RETENTION: f64 = 0.95;

/// Base relocation success chance, before modifiers.
pub const MOVE_BASE_CHANCE: f64 = 0.6;

/// Ceiling on relocation success chance.
pub const MOVE_CHANCE_CAP: f64 = 0.95;

/// Nominal cost of relocating, scaled by living costs.
pub const MOVE_COST: f64 = 500.0;

/// A venture succeeds when its chance exceeds this value.
pub const RISK_THRESHOLD: f64 = 0.5;

/// Factor applied to venture chance past the city's age penalty.
pub const RISK_AGE_PENALTY: f64 = 0.7;

/// Fixed stake of a successful venture.
pub const RISK_STAKE: f64 = 5000.0;

/// Yearly spending on relationships.
pub const RELATION_SPENDING: f64 = 100.0;

/// Nominal energy spent on an action.
#[allow(clippy::match_same_arms)] // Move and Risk happen to cost the same.
pub const fn energy_cost(action: Action) -> f64 {
    match action {
        Action::Study => 0.1,
        Action::Work => 0.15,
        Action::Rest => 0.0,
        Action::Move => 0.2,
        Action::Risk => 0.2,
        Action::Relation => 0.05,
    }
}

/// Nominal stress added by an action, regardless of its outcome.
#[allow(clippy::match_same_arms)]
pub const fn stress_cost(action: Action) -> f64 {
    match action {
        Action::Study => 0.02,
        Action::Work => 0.05,
        Action::Rest => 0.0,
        Action::Move => 0.05,
        Action::Risk => 0.1,
        Action::Relation => 0.0,
    }
}
