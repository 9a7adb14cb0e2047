//! Yearly aging applied after all actions.
//!
//! - Past 40, health declines with every further year
//! - Past 60, health and energy take an extra fixed toll
//! - Past 30, learning slows by 0.5% a year
//! - Low stress drifts upward

use lifepath_types::IndividualState;
use lifepath_world::SimRng;

use crate::config::TransitionConfig;

/// Age after which health starts to decline.
pub const HEALTH_DECLINE_AGE: u32 = 40;

/// Age after which the fixed late-life toll applies.
pub const LATE_LIFE_AGE: u32 = 60;

/// Age after which learning slows.
pub const LEARNING_DECLINE_AGE: u32 = 30;

/// Yearly learning-rate retention past [`LEARNING_DECLINE_AGE`].
pub const LEARNING_RETENTION: f64 = 0.995;

/// Apply one year of aging at the individual's current age.
pub fn apply_aging(state: &mut IndividualState, config: &TransitionConfig, rng: &mut SimRng) {
    let sigma = config.noise_std;

    if state.age > HEALTH_DECLINE_AGE {
        let years_over = f64::from(state.age - HEALTH_DECLINE_AGE);
        state.health -= rng.noise(years_over * 0.002, sigma);
    }

    if state.age > LATE_LIFE_AGE {
        state.health -= rng.noise(0.01, sigma);
        state.energy -= rng.noise(0.01, sigma);
    }

    if state.age > LEARNING_DECLINE_AGE {
        state.learning_rate *= LEARNING_RETENTION;
    }

    if state.stress < 0.5 {
        state.stress += rng.noise(0.01, sigma);
    }
}

#[cfg(test)]
mod tests {
    use lifepath_types::{BirthProfile, Region};

    use super::*;

    fn state_at(age: u32) -> IndividualState {
        let mut state = IndividualState::from_birth(&BirthProfile {
            birth_year: 1950,
            region: Region::Suburban,
            family_class: 0.5,
            parents_education: 0.5,
            family_stability: 0.5,
            genetic_health: 0.8,
            cognitive_potential: 0.6,
        });
        state.age = age;
        state
    }

    #[test]
    fn young_adults_only_drift_in_stress() {
        let mut state = state_at(25);
        let before = state.clone();
        let mut rng = SimRng::seeded(1);
        apply_aging(&mut state, &TransitionConfig::default(), &mut rng);
        assert!((state.health - before.health).abs() < f64::EPSILON);
        assert!((state.learning_rate - before.learning_rate).abs() < f64::EPSILON);
        assert!(state.stress > before.stress);
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn learning_slows_after_thirty() {
        let mut state = state_at(35);
        apply_aging(&mut state, &TransitionConfig::default(), &mut SimRng::seeded(2));
        assert!((state.learning_rate - 0.6 * LEARNING_RETENTION).abs() < 1e-12);
    }

    #[test]
    fn late_life_erodes_health_and_energy() {
        let mut state = state_at(70);
        let before = state.clone();
        apply_aging(&mut state, &TransitionConfig::default(), &mut SimRng::seeded(3));
        assert!(state.health < before.health - 0.04);
        assert!(state.energy < before.energy);
    }
}
