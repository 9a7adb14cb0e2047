//! Which actions an individual may take this year.
//!
//! Each rule is independent; an action is admissible when its own
//! condition holds.
//!
//! | Action   | Condition                                                        |
//! |----------|------------------------------------------------------------------|
//! | Study    | (age < 30 or education < 0.8) and energy > 0.3                   |
//! | Work     | age >= 18 and health > 0.2                                       |
//! | Rest     | stress > 0.5 or health < 0.5 or energy < 0.3                     |
//! | Move     | (stability < 0.5 or risk preference > 0.6) and age < 50          |
//! | Risk     | risk preference > 0.5 and (cycle > 0 or wealth > 0.3), age < 60 |
//! | Relation | loneliness > 0.4 or social drive > 0.5                           |

use lifepath_types::{Action, ActionSet, IndividualState, Personality};
use lifepath_world::BaseWorld;

/// Whether a single action is admissible.
pub fn is_available(
    action: Action,
    state: &IndividualState,
    world: &BaseWorld,
    personality: &Personality,
) -> bool {
    match action {
        Action::Study => (state.age < 30 || state.education_level < 0.8) && state.energy > 0.3,
        Action::Work => state.age >= 18 && state.health > 0.2,
        Action::Rest => state.stress > 0.5 || state.health < 0.5 || state.energy < 0.3,
        Action::Move => {
            (state.employment_stability < 0.5 || personality.risk_preference > 0.6)
                && state.age < 50
        }
        Action::Risk => {
            personality.risk_preference > 0.5
                && (world.economic_cycle() > 0.0 || state.wealth > 0.3)
                && state.age < 60
        }
        Action::Relation => state.loneliness > 0.4 || personality.social_drive > 0.5,
    }
}

/// The admissible action set for this year.
pub fn available_actions(
    state: &IndividualState,
    world: &BaseWorld,
    personality: &Personality,
) -> ActionSet {
    Action::ALL
        .into_iter()
        .filter(|action| is_available(*action, state, world, personality))
        .collect()
}

#[cfg(test)]
mod tests {
    use lifepath_types::{BirthProfile, Region};

    use super::*;

    fn child() -> IndividualState {
        IndividualState::from_birth(&BirthProfile {
            birth_year: 1980,
            region: Region::Rural,
            family_class: 0.3,
            parents_education: 0.4,
            family_stability: 0.9,
            genetic_health: 0.9,
            cognitive_potential: 0.5,
        })
    }

    fn calm() -> Personality {
        Personality {
            openness: 0.5,
            conscientiousness: 0.5,
            risk_preference: 0.2,
            social_drive: 0.2,
            resilience: 0.5,
        }
    }

    #[test]
    fn newborn_can_study_and_move() {
        let world = BaseWorld::new(1980, 1949);
        let set = available_actions(&child(), &world, &calm());
        let members: Vec<Action> = set.iter().collect();
        assert_eq!(members, vec![Action::Study, Action::Move]);
    }

    #[test]
    fn work_requires_adulthood_and_health() {
        let world = BaseWorld::new(1980, 1949);
        let mut state = child();
        state.age = 18;
        assert!(is_available(Action::Work, &state, &world, &calm()));
        state.health = 0.2;
        assert!(!is_available(Action::Work, &state, &world, &calm()));
    }

    #[test]
    fn rest_triggers_on_any_strain() {
        let world = BaseWorld::new(1980, 1949);
        let mut state = child();
        assert!(!is_available(Action::Rest, &state, &world, &calm()));
        state.energy = 0.2;
        assert!(is_available(Action::Rest, &state, &world, &calm()));
        state.energy = 0.8;
        state.stress = 0.6;
        assert!(is_available(Action::Rest, &state, &world, &calm()));
    }

    #[test]
    fn risk_needs_appetite_and_youth() {
        let world = BaseWorld::new(1980, 1949);
        let mut state = child();
        let mut bold = calm();
        assert!(!is_available(Action::Risk, &state, &world, &bold));
        bold.risk_preference = 0.8;
        assert!(is_available(Action::Risk, &state, &world, &bold));
        state.age = 60;
        assert!(!is_available(Action::Risk, &state, &world, &bold));
    }

    #[test]
    fn move_closes_at_fifty() {
        let world = BaseWorld::new(1980, 1949);
        let mut state = child();
        state.age = 49;
        assert!(is_available(Action::Move, &state, &world, &calm()));
        state.age = 50;
        assert!(!is_available(Action::Move, &state, &world, &calm()));
    }

    #[test]
    fn relation_follows_loneliness_or_drive() {
        let world = BaseWorld::new(1980, 1949);
        let mut state = child();
        assert!(!is_available(Action::Relation, &state, &world, &calm()));
        state.loneliness = 0.5;
        assert!(is_available(Action::Relation, &state, &world, &calm()));
    }
}
