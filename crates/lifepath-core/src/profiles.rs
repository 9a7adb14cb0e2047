//! Random birth profiles and personalities.
//!
//! Used by the command line to sample a life instead of reading one from
//! the scenario file. Draws come from a caller-supplied [`SimRng`], so a
//! seed reproduces the same individual.

use lifepath_types::{BirthProfile, Personality, Region};
use lifepath_world::SimRng;

/// Earliest sampled birth year.
pub const EARLIEST_BIRTH_YEAR: i32 = 1950;

/// Latest sampled birth year.
pub const LATEST_BIRTH_YEAR: i32 = 2000;

/// Sample a birth profile.
///
/// Birth year is uniform over 1950..=2000 and region uniform over the four
/// regions. Genetic health lies in `[0.5, 0.9)`, cognitive potential in
/// `[0.3, 0.8)`, and the other endowments in `[0, 1)`.
pub fn random_birth(rng: &mut SimRng) -> BirthProfile {
    let span = usize::try_from(LATEST_BIRTH_YEAR - EARLIEST_BIRTH_YEAR + 1).unwrap_or(1);
    let offset = i32::try_from(rng.index(span)).unwrap_or(0);
    let region = Region::ALL
        .get(rng.index(Region::ALL.len()))
        .copied()
        .unwrap_or(Region::Urban);

    BirthProfile {
        birth_year: EARLIEST_BIRTH_YEAR + offset,
        region,
        family_class: rng.uniform(),
        parents_education: rng.uniform(),
        family_stability: rng.uniform(),
        genetic_health: 0.5 + rng.uniform() * 0.4,
        cognitive_potential: 0.3 + rng.uniform() * 0.5,
    }
}

/// Sample a personality with every trait uniform in `[0, 1)`.
pub fn random_personality(rng: &mut SimRng) -> Personality {
    Personality {
        openness: rng.uniform(),
        conscientiousness: rng.uniform(),
        risk_preference: rng.uniform(),
        social_drive: rng.uniform(),
        resilience: rng.uniform(),
    }
}
