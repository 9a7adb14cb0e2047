//! Universal economic laws shared by every country.
//!
//! The base layer models four forces that apply regardless of place:
//!
//! - a 60-year long cycle whose phase scales work income,
//! - a 10-year business cycle with Gaussian noise,
//! - steadily rising technology,
//! - inequality that feeds on technology and erodes social mobility.
//!
//! It also turns an individual's position into a person score and the
//! elite/non-elite multipliers that make outcomes heavy-tailed.
//!
//! | Multiplier   | Elite (score >= 0.8)      | Non-elite                   |
//! |--------------|---------------------------|-----------------------------|
//! | Wealth       | 4.0 x (1 + 0.5 x ineq.)   | 0.25 x (1 - 0.3 x ineq.)    |
//! | Opportunity  | 4.0                       | 0.25                        |
//! | Tech benefit | 1 + 0.5 x tech            | 0.3 + 0.2 x tech            |

use lifepath_types::{BirthProfile, IndividualState};
use serde::{Deserialize, Serialize};

use crate::random::SimRng;

/// Length of the long (Kondratiev) cycle in years.
pub const LONG_CYCLE_YEARS: i32 = 60;

/// Period of the short economic cycle in years.
pub const BUSINESS_CYCLE_YEARS: f64 = 10.0;

/// Person score at or above which an individual counts as elite.
pub const ELITE_THRESHOLD: f64 = 0.8;

/// Opportunity multiplier for elites.
pub const ELITE_OPPORTUNITY: f64 = 4.0;

/// Opportunity multiplier for everyone else.
pub const NON_ELITE_OPPORTUNITY: f64 = 0.25;

/// Multipliers derived from a person score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParetoMultipliers {
    /// The score the multipliers were derived from.
    pub score: f64,
    /// Whether the score reached the elite threshold.
    pub elite: bool,
    /// Scales wealth accumulation.
    pub wealth: f64,
    /// Scales success chances.
    pub opportunity: f64,
    /// Scales learning gains.
    pub tech_benefit: f64,
}

/// Serializable view of the base layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseWorldSnapshot {
    /// Current calendar year.
    pub year: i32,
    /// Anchor year of both cycles.
    pub base_year: i32,
    /// Position in the long cycle, `[0, 1)`.
    pub long_cycle_phase: f64,
    /// Business cycle, `[-1, 1]`.
    pub economic_cycle: f64,
    /// Technology level, `[0, 1]`.
    pub tech_level: f64,
    /// Inequality, `[0, 1]`.
    pub inequality: f64,
    /// Social mobility, `[0, 1]`.
    pub social_mobility: f64,
}

/// The universal economic layer.
#[derive(Debug, Clone)]
pub struct BaseWorld {
    year: i32,
    base_year: i32,
    long_cycle_phase: f64,
    economic_cycle: f64,
    tech_level: f64,
    inequality: f64,
    social_mobility: f64,
}

impl BaseWorld {
    /// Create the layer at `year`, with cycles anchored on `base_year`.
    pub fn new(year: i32, base_year: i32) -> Self {
        Self {
            year,
            base_year,
            long_cycle_phase: long_cycle_phase(year, base_year),
            economic_cycle: 0.0,
            tech_level: 0.5,
            inequality: 0.5,
            social_mobility: 0.5,
        }
    }

    /// Move the layer to `year` and evolve its forces by one step.
    ///
    /// Draw order: business-cycle noise, technology, inequality, mobility.
    pub fn advance(&mut self, year: i32, rng: &mut SimRng) {
        self.year = year;
        let elapsed = f64::from(year - self.base_year);
        self.long_cycle_phase = long_cycle_phase(year, self.base_year);

        let wave = (elapsed / BUSINESS_CYCLE_YEARS * std::f64::consts::TAU).sin() * 0.8;
        self.economic_cycle = (wave + rng.gauss(0.0, 0.1)).clamp(-1.0, 1.0);

        self.tech_level = (self.tech_level + rng.gauss(0.01, 0.005)).clamp(0.0, 1.0);
        self.inequality =
            (self.inequality + rng.gauss(self.tech_level * 0.001, 0.01)).clamp(0.0, 1.0);
        self.social_mobility = (self.social_mobility + rng.gauss(0.0, 0.02)
            - self.inequality * 0.3)
            .clamp(0.0, 1.0);
    }

    /// Current calendar year.
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Anchor year of both cycles.
    pub const fn base_year(&self) -> i32 {
        self.base_year
    }

    /// Position in the long cycle, `[0, 1)`.
    pub const fn long_cycle_phase(&self) -> f64 {
        self.long_cycle_phase
    }

    /// Business cycle, `[-1, 1]`.
    pub const fn economic_cycle(&self) -> f64 {
        self.economic_cycle
    }

    /// Technology level, `[0, 1]`.
    pub const fn tech_level(&self) -> f64 {
        self.tech_level
    }

    /// Inequality, `[0, 1]`.
    pub const fn inequality(&self) -> f64 {
        self.inequality
    }

    /// Social mobility, `[0, 1]`.
    pub const fn social_mobility(&self) -> f64 {
        self.social_mobility
    }

    /// Income multiplier for the current long-cycle phase.
    ///
    /// Climbs from 1.0 towards 1.5 over the first half of the cycle, then
    /// restarts at 1.0 and declines towards 0.5 over the second half.
    pub const fn long_cycle_effect(&self) -> f64 {
        let p = self.long_cycle_phase;
        if p < 0.25 {
            1.0 + p / 0.25 * 0.2
        } else if p < 0.5 {
            1.2 + (p - 0.25) / 0.25 * 0.3
        } else if p < 0.75 {
            1.0 - (p - 0.5) / 0.25 * 0.2
        } else {
            0.8 - (p - 0.75) / 0.25 * 0.3
        }
    }

    /// Composite of birth class and merit, in `[0, 1]`.
    ///
    /// The weight of birth grows with inequality. When mobility is high,
    /// merit alone can lift the score.
    pub fn person_score(&self, state: &IndividualState, birth: &BirthProfile) -> f64 {
        let normalized_wealth = (((state.wealth / 1000.0).max(1.0) + 1.0).log10() / 3.0).min(1.0);
        let birth_weight = 0.2 + self.inequality * 0.3;
        let merit_core = state.education_level * 0.3
            + state.skill_depth * 0.4
            + state.social_capital * 0.2;
        let merit = merit_core + normalized_wealth * 0.1;

        let mut score = birth.family_class * birth_weight + merit * (1.0 - birth_weight);
        if self.social_mobility > 0.5 {
            score = score.max(merit_core * self.social_mobility);
        }
        score.clamp(0.0, 1.0)
    }

    /// Multipliers for a given person score.
    pub const fn pareto(&self, score: f64) -> ParetoMultipliers {
        let elite = score >= ELITE_THRESHOLD;
        if elite {
            ParetoMultipliers {
                score,
                elite,
                wealth: 4.0 * (1.0 + self.inequality * 0.5),
                opportunity: ELITE_OPPORTUNITY,
                tech_benefit: 1.0 + 0.5 * self.tech_level,
            }
        } else {
            ParetoMultipliers {
                score,
                elite,
                wealth: 0.25 * (1.0 - self.inequality * 0.3),
                opportunity: NON_ELITE_OPPORTUNITY,
                tech_benefit: 0.3 + 0.2 * self.tech_level,
            }
        }
    }

    /// Serializable view of the layer.
    pub const fn snapshot(&self) -> BaseWorldSnapshot {
        BaseWorldSnapshot {
            year: self.year,
            base_year: self.base_year,
            long_cycle_phase: self.long_cycle_phase,
            economic_cycle: self.economic_cycle,
            tech_level: self.tech_level,
            inequality: self.inequality,
            social_mobility: self.social_mobility,
        }
    }
}

fn long_cycle_phase(year: i32, base_year: i32) -> f64 {
    f64::from((year - base_year).rem_euclid(LONG_CYCLE_YEARS)) / f64::from(LONG_CYCLE_YEARS)
}
