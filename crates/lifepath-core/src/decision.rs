//! Yearly action selection.
//!
//! Each year the driver hands the [`DecisionEngine`] the admissible action
//! set and, when the scenario scripts that age, the requested actions.
//! Requested actions are filtered and truncated; otherwise an automatic
//! policy picks by need, then by personality, then in enumeration order.

use lifepath_types::{Action, ActionSet, IndividualState, Personality};

/// Picks the actions taken in a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionEngine {
    max_actions_per_year: usize,
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new(2)
    }
}

impl DecisionEngine {
    /// Create an engine allowing at most `max_actions_per_year` actions.
    pub const fn new(max_actions_per_year: usize) -> Self {
        Self {
            max_actions_per_year,
        }
    }

    /// The per-year cap.
    pub const fn max_actions_per_year(&self) -> usize {
        self.max_actions_per_year
    }

    /// Select this year's actions.
    ///
    /// With a non-empty `requested` list, the admissible entries are kept
    /// in the given order and truncated to the cap. Otherwise the
    /// automatic policy runs.
    pub fn select_actions(
        &self,
        available: ActionSet,
        state: &IndividualState,
        personality: &Personality,
        requested: Option<&[Action]>,
    ) -> Vec<Action> {
        match requested {
            Some(requested) if !requested.is_empty() => requested
                .iter()
                .copied()
                .filter(|action| available.contains(*action))
                .take(self.max_actions_per_year)
                .collect(),
            _ => self.auto_select(available, state, personality),
        }
    }

    fn auto_select(
        &self,
        available: ActionSet,
        state: &IndividualState,
        personality: &Personality,
    ) -> Vec<Action> {
        let mut selected = Vec::with_capacity(self.max_actions_per_year);

        if (state.stress > 0.7 || state.health < 0.3) && available.contains(Action::Rest) {
            selected.push(Action::Rest);
        }

        if let Some(action) = dominant_action(available, state, personality)
            .filter(|action| !selected.contains(action))
        {
            selected.push(action);
        }

        for action in available.iter() {
            if selected.len() >= self.max_actions_per_year {
                break;
            }
            if !selected.contains(&action) {
                selected.push(action);
            }
        }

        selected.truncate(self.max_actions_per_year);
        selected
    }
}

/// The action the strongest personality trait pulls toward, if admissible.
///
/// Only the first trait over its threshold is consulted, in the order
/// conscientiousness, social drive, risk preference.
fn dominant_action(
    available: ActionSet,
    state: &IndividualState,
    personality: &Personality,
) -> Option<Action> {
    if personality.conscientiousness > 0.7 {
        if available.contains(Action::Study) && state.education_level < 0.8 {
            Some(Action::Study)
        } else if available.contains(Action::Work) {
            Some(Action::Work)
        } else {
            None
        }
    } else if personality.social_drive > 0.7 {
        available
            .contains(Action::Relation)
            .then_some(Action::Relation)
    } else if personality.risk_preference > 0.7 {
        available.contains(Action::Risk).then_some(Action::Risk)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use lifepath_types::{BirthProfile, Region};

    use super::*;

    fn adult() -> IndividualState {
        let mut state = IndividualState::from_birth(&BirthProfile {
            birth_year: 1980,
            region: Region::Urban,
            family_class: 0.5,
            parents_education: 0.5,
            family_stability: 0.5,
            genetic_health: 0.8,
            cognitive_potential: 0.5,
        });
        state.age = 30;
        state
    }

    fn traits(conscientiousness: f64, social_drive: f64, risk_preference: f64) -> Personality {
        Personality {
            openness: 0.5,
            conscientiousness,
            risk_preference,
            social_drive,
            resilience: 0.5,
        }
    }

    fn set(actions: &[Action]) -> ActionSet {
        actions.iter().copied().collect()
    }

    #[test]
    fn requested_actions_are_filtered_and_truncated() {
        let engine = DecisionEngine::default();
        let available = set(&[Action::Study, Action::Work, Action::Relation]);
        let chosen = engine.select_actions(
            available,
            &adult(),
            &traits(0.5, 0.5, 0.5),
            Some(&[Action::Risk, Action::Relation, Action::Study, Action::Work]),
        );
        assert_eq!(chosen, vec![Action::Relation, Action::Study]);
    }

    #[test]
    fn empty_request_falls_back_to_policy() {
        let engine = DecisionEngine::default();
        let available = set(&[Action::Study, Action::Work]);
        let chosen =
            engine.select_actions(available, &adult(), &traits(0.5, 0.5, 0.5), Some(&[]));
        assert_eq!(chosen, vec![Action::Study, Action::Work]);
    }

    #[test]
    fn stressed_individuals_rest_first() {
        let engine = DecisionEngine::default();
        let mut state = adult();
        state.stress = 0.75;
        let available = set(&[Action::Study, Action::Work, Action::Rest]);
        let chosen = engine.select_actions(available, &state, &traits(0.8, 0.5, 0.5), None);
        assert_eq!(chosen, vec![Action::Rest, Action::Study]);
    }

    #[test]
    fn conscientious_fall_back_to_work_when_educated() {
        let engine = DecisionEngine::default();
        let mut state = adult();
        state.education_level = 0.85;
        let available = set(&[Action::Study, Action::Work, Action::Relation]);
        let chosen = engine.select_actions(available, &state, &traits(0.8, 0.9, 0.5), None);
        assert_eq!(chosen, vec![Action::Work, Action::Study]);
    }

    #[test]
    fn social_then_risk_preferences() {
        let engine = DecisionEngine::default();
        let available = set(&[Action::Work, Action::Risk, Action::Relation]);
        let social = engine.select_actions(available, &adult(), &traits(0.5, 0.9, 0.9), None);
        assert_eq!(social, vec![Action::Relation, Action::Work]);
        let risky = engine.select_actions(available, &adult(), &traits(0.5, 0.5, 0.9), None);
        assert_eq!(risky, vec![Action::Risk, Action::Work]);
    }

    #[test]
    fn small_sets_do_not_loop() {
        let engine = DecisionEngine::new(3);
        let mut state = adult();
        state.stress = 0.9;
        let chosen =
            engine.select_actions(set(&[Action::Rest]), &state, &traits(0.9, 0.5, 0.5), None);
        assert_eq!(chosen, vec![Action::Rest]);
        let none = engine.select_actions(ActionSet::empty(), &state, &traits(0.9, 0.5, 0.5), None);
        assert!(none.is_empty());
    }

    #[test]
    fn cap_of_one_keeps_the_priority_action() {
        let engine = DecisionEngine::new(1);
        let mut state = adult();
        state.health = 0.2;
        let available = set(&[Action::Study, Action::Rest, Action::Relation]);
        let chosen = engine.select_actions(available, &state, &traits(0.5, 0.9, 0.5), None);
        assert_eq!(chosen, vec![Action::Rest]);
    }
}
