//! National fertility policy and the family structure it produces.
//!
//! Policy periods run independently of economic eras:
//!
//! | Period         | Years      | Cap | Enforcement | Penalty | Only-child p | Urban x |
//! |----------------|------------|-----|-------------|---------|--------------|---------|
//! | PreControl     | ..=1970    | 4.5 | 0.0         | 0.0     | 0.05         | 1.0     |
//! | SoftControl    | 1971-1978  | 2.8 | 0.4         | 0.3     | 0.25         | 0.9     |
//! | OneChild       | 1979-2015  | 1.1 | 0.9         | 0.8     | 0.75         | 0.8     |
//! | TwoChild       | 2016-2020  | 1.6 | 0.3         | 0.2     | 0.45         | 0.85    |
//! | ThreeChildPlus | 2021..     | 1.3 | 0.1         | 0.0     | 0.55         | 0.7     |
//!
//! The family is drawn once at birth from the birth-year policy. Afterwards
//! only the caregiver burden evolves, as the parents age.

use lifepath_types::FamilyState;
use serde::{Deserialize, Serialize};

use crate::random::SimRng;

/// Age gap between the individual and the parents.
pub const PARENT_AGE_GAP: u32 = 28;

/// Parent age at which caregiving starts to accumulate.
pub const CAREGIVING_START_AGE: u32 = 60;

/// Fertility policy period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FertilityPolicy {
    /// No birth control.
    PreControl,
    /// "Later, longer, fewer" campaign.
    SoftControl,
    /// Strict one-child policy.
    OneChild,
    /// Universal two-child policy.
    TwoChild,
    /// Three-child policy and pro-natal incentives.
    ThreeChildPlus,
}

impl FertilityPolicy {
    /// The policy in force in `year`.
    pub const fn for_year(year: i32) -> Self {
        if year < 1971 {
            Self::PreControl
        } else if year < 1979 {
            Self::SoftControl
        } else if year < 2016 {
            Self::OneChild
        } else if year < 2021 {
            Self::TwoChild
        } else {
            Self::ThreeChildPlus
        }
    }

    /// Static parameters of the period.
    pub const fn parameters(self) -> PolicyParameters {
        match self {
            Self::PreControl => PolicyParameters {
                fertility_cap: 4.5,
                enforcement_strength: 0.0,
                penalty_cost: 0.0,
                only_child_probability: 0.05,
                urban_fertility_multiplier: 1.0,
            },
            Self::SoftControl => PolicyParameters {
                fertility_cap: 2.8,
                enforcement_strength: 0.4,
                penalty_cost: 0.3,
                only_child_probability: 0.25,
                urban_fertility_multiplier: 0.9,
            },
            Self::OneChild => PolicyParameters {
                fertility_cap: 1.1,
                enforcement_strength: 0.9,
                penalty_cost: 0.8,
                only_child_probability: 0.75,
                urban_fertility_multiplier: 0.8,
            },
            Self::TwoChild => PolicyParameters {
                fertility_cap: 1.6,
                enforcement_strength: 0.3,
                penalty_cost: 0.2,
                only_child_probability: 0.45,
                urban_fertility_multiplier: 0.85,
            },
            Self::ThreeChildPlus => PolicyParameters {
                fertility_cap: 1.3,
                enforcement_strength: 0.1,
                penalty_cost: 0.0,
                only_child_probability: 0.55,
                urban_fertility_multiplier: 0.7,
            },
        }
    }
}

/// Static parameters of a policy period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolicyParameters {
    /// Expected children per family.
    pub fertility_cap: f64,
    /// How strictly the cap is enforced, `[0, 1]`.
    pub enforcement_strength: f64,
    /// Cost of exceeding the cap, `[0, 1]`.
    pub penalty_cost: f64,
    /// Chance of being an only child where enforcement is strict.
    pub only_child_probability: f64,
    /// Scale applied to the only-child chance in urban regions.
    pub urban_fertility_multiplier: f64,
}

/// Policy state as seen from a particular region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyPolicyState {
    /// The period in force.
    pub policy: FertilityPolicy,
    /// Expected children per family.
    pub fertility_cap: f64,
    /// How strictly the cap is enforced.
    pub enforcement_strength: f64,
    /// Cost of exceeding the cap.
    pub penalty_cost: f64,
    /// Region-adjusted chance of being an only child.
    pub only_child_probability: f64,
}

impl FamilyPolicyState {
    /// Derive the state for `policy`, adjusting for urban regions.
    pub fn new(policy: FertilityPolicy, is_urban: bool) -> Self {
        let params = policy.parameters();
        let only_child_probability = if is_urban {
            (params.only_child_probability * params.urban_fertility_multiplier).min(1.0)
        } else {
            params.only_child_probability
        };
        Self {
            policy,
            fertility_cap: params.fertility_cap,
            enforcement_strength: params.enforcement_strength,
            penalty_cost: params.penalty_cost,
            only_child_probability,
        }
    }

    /// Draw the family an individual is born into.
    ///
    /// Under strict enforcement the only-child chance decides first and a
    /// small family is picked otherwise. Without it the sibling count is a
    /// Gaussian around the fertility cap, truncated to `0..=5`.
    pub fn generate_family(&self, family_class: f64, rng: &mut SimRng) -> FamilyState {
        let siblings = if self.enforcement_strength > 0.5 {
            if rng.uniform() < self.only_child_probability {
                0
            } else {
                let options: &[u32] = if self.fertility_cap < 1.5 {
                    &[0, 1]
                } else {
                    &[0, 1, 2]
                };
                options.get(rng.index(options.len())).copied().unwrap_or(0)
            }
        } else {
            truncate_siblings(rng.gauss(self.fertility_cap, 0.8))
        };

        let is_only_child = siblings == 0;
        let family_wealth = family_class * 100_000.0;
        let wealth_per_child = family_wealth / f64::from(siblings + 1);

        let (parental_pressure, intergenerational_support) = if is_only_child {
            (0.6 + rng.uniform() * 0.3, 0.2 + rng.uniform() * 0.2)
        } else {
            (0.3 + rng.uniform() * 0.3, 0.5 + rng.uniform() * 0.3)
        };

        FamilyState {
            siblings,
            is_only_child,
            parental_pressure,
            intergenerational_support,
            caregiver_burden: 0.0,
            wealth_per_child,
        }
    }
}

/// Truncate a Gaussian sibling draw into `0..=5`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate_siblings(draw: f64) -> u32 {
    // Truncation toward zero is the intended rounding; the clamp keeps the
    // cast in range.
    draw.trunc().clamp(0.0, 5.0) as u32
}

/// Add this year's caregiving load for ageing parents.
///
/// Load starts when the parents reach 60 and grows with their age. Siblings
/// share it; an only child carries it alone. The burden never decreases
/// and is capped at 1.
pub fn accrue_caregiver_burden(family: &mut FamilyState, age: u32) {
    let parent_age = age + PARENT_AGE_GAP;
    if parent_age < CAREGIVING_START_AGE {
        return;
    }
    let years_over = f64::from(parent_age - CAREGIVING_START_AGE) / 20.0;
    let increase = if family.is_only_child {
        0.05 * years_over
    } else {
        0.02 * years_over / f64::from(family.siblings + 1)
    };
    family.caregiver_burden = (family.caregiver_burden + increase).min(1.0);
}

/// How intense educational and career competition is for this family.
pub fn competition_intensity(
    family: &FamilyState,
    tier_one_city: bool,
    policy: FertilityPolicy,
) -> f64 {
    let mut intensity = 0.5;
    if family.is_only_child {
        intensity += 0.2;
    }
    if tier_one_city {
        intensity += 0.3;
    }
    if policy == FertilityPolicy::OneChild {
        intensity += 0.2;
    }
    f64::min(intensity, 1.0)
}
