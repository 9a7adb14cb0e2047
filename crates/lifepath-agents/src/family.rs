//! Effects of family structure on the individual.
//!
//! Only children get a one-time adjustment at birth (more learning and
//! diligence, more loneliness, less resilience) and a one-time mid-life
//! penalty once they pass 45. Every year after aging, caregiving for the
//! parents accrues and feeds into stress.

use lifepath_types::{FamilyState, IndividualState, Personality};
use lifepath_world::family_policy::accrue_caregiver_burden;
use tracing::debug;

/// Age past which only children carry the mid-life penalty.
pub const MIDLIFE_AGE: u32 = 45;

/// Family state plus the bookkeeping for one-time effects.
#[derive(Debug, Clone)]
pub struct FamilyDynamics {
    family: FamilyState,
    midlife_applied: bool,
}

impl FamilyDynamics {
    /// Track a freshly drawn family.
    pub const fn new(family: FamilyState) -> Self {
        Self {
            family,
            midlife_applied: false,
        }
    }

    /// The current family state.
    pub const fn state(&self) -> &FamilyState {
        &self.family
    }

    /// Consume the tracker, returning the family state.
    pub fn into_state(self) -> FamilyState {
        self.family
    }

    /// Apply the one-time only-child adjustment at the start of a life.
    ///
    /// Does nothing for individuals with siblings. Leaves state and
    /// personality clamped.
    pub fn apply_birth_effects(
        &self,
        state: &mut IndividualState,
        personality: &mut Personality,
        tier_one_city: bool,
    ) {
        if !self.family.is_only_child {
            return;
        }
        state.learning_rate *= 1.2;
        state.loneliness += 0.15;
        if tier_one_city {
            state.stress += 0.1;
        }
        personality.conscientiousness += 0.1;
        personality.social_drive -= 0.1;
        personality.resilience -= 0.1;

        state.clamp();
        personality.clamp();
    }

    /// End-of-year family update, run after the age increment.
    ///
    /// Applies the mid-life penalty the first time an only child is older
    /// than 45, then accrues caregiver burden and adds its stress.
    pub fn end_of_year(&mut self, state: &mut IndividualState) {
        if self.family.is_only_child && !self.midlife_applied && state.age > MIDLIFE_AGE {
            self.midlife_applied = true;
            state.stress = (state.stress + 0.2).min(1.0);
            self.family.caregiver_burden = (self.family.caregiver_burden + 0.3).min(1.0);
            debug!(age = state.age, "Only-child mid-life pressure applied");
        }

        accrue_caregiver_burden(&mut self.family, state.age);
        state.stress = (state.stress + self.family.caregiver_burden * 0.1).min(1.0);
    }
}
