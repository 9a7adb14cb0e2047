//! Core data records of the Lifepath simulation.
//!
//! - [`BirthProfile`] -- immutable endowment fixed at birth
//! - [`Personality`] -- slow-changing traits
//! - [`IndividualState`] -- the mutable per-year record
//! - [`LifeEvent`] -- an entry in the append-only event log
//! - [`FamilyState`] -- sibling structure and caregiving load
//! - [`ActionSet`] -- a set of actions iterated in enumeration order

use serde::{Deserialize, Serialize};

use crate::enums::{Action, EventCategory, EventKind, Region, StateField};
use crate::error::{ProfileError, check_unit};

// ---------------------------------------------------------------------------
// Birth profile
// ---------------------------------------------------------------------------

/// Endowment an individual is born with.
///
/// Created once and never mutated; the simulation only ever borrows it.
/// All endowment scalars lie in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthProfile {
    /// Calendar year of birth.
    pub birth_year: i32,
    /// Settlement type of the birthplace.
    pub region: Region,
    /// Socio-economic class of the family.
    pub family_class: f64,
    /// Education level of the parents.
    pub parents_education: f64,
    /// Stability of the household.
    pub family_stability: f64,
    /// Inherited baseline health.
    pub genetic_health: f64,
    /// Innate learning capacity.
    pub cognitive_potential: f64,
}

impl BirthProfile {
    /// Reject any endowment scalar outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), ProfileError> {
        check_unit("family_class", self.family_class)?;
        check_unit("parents_education", self.parents_education)?;
        check_unit("family_stability", self.family_stability)?;
        check_unit("genetic_health", self.genetic_health)?;
        check_unit("cognitive_potential", self.cognitive_potential)
    }
}

// ---------------------------------------------------------------------------
// Personality
// ---------------------------------------------------------------------------

/// Personality traits, all in `[0, 1]`.
///
/// Traits only change through family-structure effects applied at the
/// start of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personality {
    /// Curiosity and appetite for novelty.
    pub openness: f64,
    /// Diligence; drives the study/work preference.
    pub conscientiousness: f64,
    /// Appetite for gambles.
    pub risk_preference: f64,
    /// Need for social contact.
    pub social_drive: f64,
    /// Capacity to recover from strain.
    pub resilience: f64,
}

impl Personality {
    /// Reject any trait outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), ProfileError> {
        check_unit("openness", self.openness)?;
        check_unit("conscientiousness", self.conscientiousness)?;
        check_unit("risk_preference", self.risk_preference)?;
        check_unit("social_drive", self.social_drive)?;
        check_unit("resilience", self.resilience)
    }

    /// Clamp every trait back into `[0, 1]` after an adjustment.
    pub const fn clamp(&mut self) {
        self.openness = self.openness.clamp(0.0, 1.0);
        self.conscientiousness = self.conscientiousness.clamp(0.0, 1.0);
        self.risk_preference = self.risk_preference.clamp(0.0, 1.0);
        self.social_drive = self.social_drive.clamp(0.0, 1.0);
        self.resilience = self.resilience.clamp(0.0, 1.0);
    }
}

// ---------------------------------------------------------------------------
// Individual state
// ---------------------------------------------------------------------------

/// The mutable record of an individual, updated every simulated year.
///
/// All fields except `age`, `income`, and `wealth` are bounded to `[0, 1]`.
/// Handlers may push values out of range; [`IndividualState::clamp`] is the
/// single enforcement step and runs once at the end of every year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualState {
    /// Age in whole years.
    pub age: u32,
    /// Physical health.
    pub health: f64,
    /// Mental health.
    pub mental_health: f64,
    /// Available energy.
    pub energy: f64,
    /// Accumulated stress.
    pub stress: f64,
    /// Education level.
    pub education_level: f64,
    /// Depth of specialized skill.
    pub skill_depth: f64,
    /// Breadth of general skill.
    pub skill_width: f64,
    /// Speed of learning.
    pub learning_rate: f64,
    /// Job security.
    pub employment_stability: f64,
    /// Network and social standing.
    pub social_capital: f64,
    /// Subjective loneliness.
    pub loneliness: f64,
    /// Yearly income.
    pub income: f64,
    /// Net wealth; negative means debt.
    pub wealth: f64,
}

impl IndividualState {
    /// Derive the age-zero state from a birth profile.
    pub fn from_birth(birth: &BirthProfile) -> Self {
        Self {
            age: 0,
            health: birth.genetic_health,
            mental_health: 0.7 + birth.family_stability * 0.2,
            energy: 0.8,
            stress: 0.2 - birth.family_stability * 0.1,
            education_level: birth.parents_education * 0.3,
            skill_depth: 0.0,
            skill_width: 0.0,
            learning_rate: birth.cognitive_potential,
            employment_stability: 0.0,
            social_capital: birth.family_stability * 0.3,
            loneliness: 0.3 - birth.family_stability * 0.2,
            income: 0.0,
            wealth: birth.family_class * 10_000.0,
        }
    }

    /// Read a field by name.
    pub const fn get(&self, field: StateField) -> f64 {
        match field {
            StateField::Health => self.health,
            StateField::MentalHealth => self.mental_health,
            StateField::Energy => self.energy,
            StateField::Stress => self.stress,
            StateField::EducationLevel => self.education_level,
            StateField::SkillDepth => self.skill_depth,
            StateField::SkillWidth => self.skill_width,
            StateField::LearningRate => self.learning_rate,
            StateField::EmploymentStability => self.employment_stability,
            StateField::SocialCapital => self.social_capital,
            StateField::Loneliness => self.loneliness,
            StateField::Income => self.income,
            StateField::Wealth => self.wealth,
        }
    }

    /// Mutable access to a field by name.
    pub const fn field_mut(&mut self, field: StateField) -> &mut f64 {
        match field {
            StateField::Health => &mut self.health,
            StateField::MentalHealth => &mut self.mental_health,
            StateField::Energy => &mut self.energy,
            StateField::Stress => &mut self.stress,
            StateField::EducationLevel => &mut self.education_level,
            StateField::SkillDepth => &mut self.skill_depth,
            StateField::SkillWidth => &mut self.skill_width,
            StateField::LearningRate => &mut self.learning_rate,
            StateField::EmploymentStability => &mut self.employment_stability,
            StateField::SocialCapital => &mut self.social_capital,
            StateField::Loneliness => &mut self.loneliness,
            StateField::Income => &mut self.income,
            StateField::Wealth => &mut self.wealth,
        }
    }

    /// Add `delta` to a field with saturation.
    ///
    /// For bounded fields increases are capped at 1 and decreases floored
    /// at 0. Income and wealth take the delta unclamped.
    pub const fn apply_delta(&mut self, field: StateField, delta: f64) {
        let slot = self.field_mut(field);
        let next = *slot + delta;
        *slot = if !field.is_bounded() {
            next
        } else if delta >= 0.0 {
            next.min(1.0)
        } else {
            next.max(0.0)
        };
    }

    /// Force every bounded field into `[0, 1]`.
    pub fn clamp(&mut self) {
        for field in StateField::BOUNDED {
            let slot = self.field_mut(field);
            *slot = slot.clamp(0.0, 1.0);
        }
    }

    /// Whether every bounded field lies in `[0, 1]`.
    pub fn is_within_bounds(&self) -> bool {
        StateField::BOUNDED
            .iter()
            .all(|field| (0.0..=1.0).contains(&self.get(*field)))
    }
}

// ---------------------------------------------------------------------------
// Life events
// ---------------------------------------------------------------------------

/// One attribute change carried by a life event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttributeDelta {
    /// The affected field.
    pub field: StateField,
    /// Signed amount added to the field.
    pub delta: f64,
}

/// A detected life event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeEvent {
    /// Calendar year the event fired in.
    pub year: i32,
    /// Age at which the event fired.
    pub age: u32,
    /// Which rule fired.
    pub kind: EventKind,
    /// Human-readable title.
    pub title: String,
    /// Fixed description text.
    pub description: String,
    /// Attribute changes applied when the event fired, in order.
    pub impact: Vec<AttributeDelta>,
    /// Reporting category.
    pub category: EventCategory,
}

// ---------------------------------------------------------------------------
// Family
// ---------------------------------------------------------------------------

/// Family structure drawn once at birth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyState {
    /// Number of siblings.
    pub siblings: u32,
    /// Whether the individual has no siblings.
    pub is_only_child: bool,
    /// Pressure exerted by the parents, `[0, 1]`.
    pub parental_pressure: f64,
    /// Support flowing between generations, `[0, 1]`.
    pub intergenerational_support: f64,
    /// Load of caring for ageing parents; never decreases.
    pub caregiver_burden: f64,
    /// Family wealth divided among the children.
    pub wealth_per_child: f64,
}

// ---------------------------------------------------------------------------
// Action sets
// ---------------------------------------------------------------------------

/// A set of [`Action`]s, iterated in enumeration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "Vec<Action>")]
pub struct ActionSet {
    bits: u8,
}

impl ActionSet {
    /// The empty set.
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    const fn bit(action: Action) -> u8 {
        1 << (action as u8)
    }

    /// Add an action.
    pub const fn insert(&mut self, action: Action) {
        self.bits |= Self::bit(action);
    }

    /// Whether the action is in the set.
    pub const fn contains(self, action: Action) -> bool {
        self.bits & Self::bit(action) != 0
    }

    /// Whether the set has no members.
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Members in enumeration order.
    pub fn iter(self) -> impl Iterator<Item = Action> {
        Action::ALL
            .into_iter()
            .filter(move |action| self.contains(*action))
    }
}

impl FromIterator<Action> for ActionSet {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        let mut set = Self::empty();
        for action in iter {
            set.insert(action);
        }
        set
    }
}

impl From<ActionSet> for Vec<Action> {
    fn from(set: ActionSet) -> Self {
        set.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> BirthProfile {
        BirthProfile {
            birth_year: 1980,
            region: Region::Urban,
            family_class: 0.6,
            parents_education: 0.7,
            family_stability: 0.8,
            genetic_health: 0.75,
            cognitive_potential: 0.65,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn initial_state_follows_birth_formula() {
        let state = IndividualState::from_birth(&profile());
        assert_eq!(state.age, 0);
        assert_close(state.health, 0.75);
        assert_close(state.mental_health, 0.86);
        assert_close(state.energy, 0.8);
        assert_close(state.stress, 0.12);
        assert_close(state.education_level, 0.21);
        assert_close(state.learning_rate, 0.65);
        assert_close(state.social_capital, 0.24);
        assert_close(state.loneliness, 0.14);
        assert_close(state.wealth, 6000.0);
        assert_close(state.income, 0.0);
        assert!(state.is_within_bounds());
    }

    #[test]
    fn out_of_range_profile_is_rejected() {
        let mut birth = profile();
        birth.genetic_health = 1.2;
        let err = birth.validate();
        assert_eq!(
            err,
            Err(ProfileError::OutOfRange {
                field: "genetic_health",
                value: 1.2
            })
        );
    }

    #[test]
    fn nan_personality_is_rejected() {
        let personality = Personality {
            openness: 0.5,
            conscientiousness: f64::NAN,
            risk_preference: 0.5,
            social_drive: 0.5,
            resilience: 0.5,
        };
        assert!(personality.validate().is_err());
    }

    #[test]
    fn apply_delta_saturates_bounded_fields_only() {
        let mut state = IndividualState::from_birth(&profile());
        state.apply_delta(StateField::Stress, 5.0);
        assert_close(state.stress, 1.0);
        state.apply_delta(StateField::Health, -5.0);
        assert_close(state.health, 0.0);
        state.apply_delta(StateField::Wealth, -50_000.0);
        assert_close(state.wealth, -44_000.0);
    }

    #[test]
    fn clamp_restores_bounds() {
        let mut state = IndividualState::from_birth(&profile());
        state.energy = -0.4;
        state.loneliness = 1.7;
        state.wealth = -1.0e6;
        assert!(!state.is_within_bounds());
        state.clamp();
        assert!(state.is_within_bounds());
        assert_close(state.wealth, -1.0e6);
    }

    #[test]
    fn action_set_iterates_in_enumeration_order() {
        let set: ActionSet = [Action::Relation, Action::Study, Action::Move]
            .into_iter()
            .collect();
        let members: Vec<Action> = set.iter().collect();
        assert_eq!(members, vec![Action::Study, Action::Move, Action::Relation]);
        assert!(set.contains(Action::Move));
        assert!(!set.contains(Action::Work));
    }

    #[test]
    fn action_set_serializes_as_list() {
        let set: ActionSet = [Action::Work, Action::Rest].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap_or_default();
        assert_eq!(json, r#"["work","rest"]"#);
    }
}
