//! China country model, 1949 onward.
//!
//! | Era               | Years      | Mobility | Inequality | Risk/reward | Edu return |
//! |-------------------|------------|----------|------------|-------------|------------|
//! | Establishment     | ..=1957    | 0.15     | 0.10       | 0.2         | 0.3        |
//! | Turbulence        | 1958-1977  | 0.05     | 0.15       | 0.1         | 0.1        |
//! | ReformEarly       | 1978-1991  | 0.45     | 0.40       | 1.5         | 0.8        |
//! | UrbanBoom         | 1992-2007  | 0.70     | 0.60       | 1.2         | 1.2        |
//! | StructureSolidify | 2008-2019  | 0.35     | 0.70       | 0.8         | 0.9        |
//! | NewUncertainty    | 2020..     | 0.25     | 0.75       | 0.6         | 0.8        |
//!
//! `ReformEarly` and `UrbanBoom` are the opportunity windows. A life that
//! has seen a window and then enters `StructureSolidify` or
//! `NewUncertainty` is marked as having missed the window: the mobility
//! multiplier drops to 0.3 once and never recovers.

use lifepath_types::Action;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::base::BaseWorld;
use crate::country::{CountryModel, CountrySnapshot};
use crate::family_policy::{FamilyPolicyState, FertilityPolicy};
use crate::random::SimRng;

/// Anchor year of the base-layer cycles.
pub const BASE_YEAR: i32 = 1949;

/// Weight of base-layer mobility in effective mobility.
const MOBILITY_BASE: f64 = 0.6;

/// Long-run inequality trend added to base inequality.
const INEQUALITY_TREND: f64 = 0.3;

/// Factor applied to the mobility multiplier when the window is missed.
pub const MISSED_WINDOW_PENALTY: f64 = 0.3;

/// Historical era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChinaEra {
    /// Founding years.
    Establishment,
    /// Political campaigns and upheaval.
    Turbulence,
    /// Early reform and opening.
    ReformEarly,
    /// Urbanization and property boom.
    UrbanBoom,
    /// Hardening of class structure.
    StructureSolidify,
    /// Post-2020 volatility.
    NewUncertainty,
}

impl ChinaEra {
    /// The era containing `year`. Years before 1949 map to `Establishment`.
    pub const fn for_year(year: i32) -> Self {
        if year < 1958 {
            Self::Establishment
        } else if year < 1978 {
            Self::Turbulence
        } else if year < 1992 {
            Self::ReformEarly
        } else if year < 2008 {
            Self::UrbanBoom
        } else if year < 2020 {
            Self::StructureSolidify
        } else {
            Self::NewUncertainty
        }
    }

    /// Uppercase era name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Establishment => "ESTABLISHMENT",
            Self::Turbulence => "TURBULENCE",
            Self::ReformEarly => "REFORM_EARLY",
            Self::UrbanBoom => "URBAN_BOOM",
            Self::StructureSolidify => "STRUCTURE_SOLIDIFY",
            Self::NewUncertainty => "NEW_UNCERTAINTY",
        }
    }

    /// Whether the era is an opportunity window.
    pub const fn is_window(self) -> bool {
        matches!(self, Self::ReformEarly | Self::UrbanBoom)
    }

    /// Whether the era follows both windows.
    pub const fn is_post_window(self) -> bool {
        matches!(self, Self::StructureSolidify | Self::NewUncertainty)
    }

    /// Static policy parameters of the era.
    pub const fn config(self) -> EraConfig {
        let base = EraConfig {
            social_mobility: 0.0,
            inequality: 0.0,
            risk_reward: 1.0,
            education_return: 1.0,
            market_freedom: 0.0,
            elite_competition: 0.0,
            stress_factor: 0.0,
            risk_penalty: 0.0,
            mental_health_weight: None,
        };
        match self {
            Self::Establishment => EraConfig {
                social_mobility: 0.15,
                inequality: 0.10,
                risk_reward: 0.2,
                education_return: 0.3,
                market_freedom: 0.2,
                elite_competition: 0.3,
                ..base
            },
            Self::Turbulence => EraConfig {
                social_mobility: 0.05,
                inequality: 0.15,
                risk_reward: 0.1,
                education_return: 0.1,
                market_freedom: 0.1,
                elite_competition: 0.2,
                ..base
            },
            Self::ReformEarly => EraConfig {
                social_mobility: 0.45,
                inequality: 0.4,
                risk_reward: 1.5,
                education_return: 0.8,
                market_freedom: 0.6,
                elite_competition: 0.4,
                ..base
            },
            Self::UrbanBoom => EraConfig {
                social_mobility: 0.7,
                inequality: 0.6,
                risk_reward: 1.2,
                education_return: 1.2,
                market_freedom: 0.8,
                elite_competition: 0.6,
                ..base
            },
            Self::StructureSolidify => EraConfig {
                social_mobility: 0.35,
                inequality: 0.7,
                risk_reward: 0.8,
                education_return: 0.9,
                market_freedom: 0.7,
                elite_competition: 0.8,
                stress_factor: 0.7,
                ..base
            },
            Self::NewUncertainty => EraConfig {
                social_mobility: 0.25,
                inequality: 0.75,
                risk_reward: 0.6,
                education_return: 0.8,
                market_freedom: 0.6,
                elite_competition: 0.9,
                risk_penalty: 0.6,
                mental_health_weight: Some(1.2),
                ..base
            },
        }
    }
}

/// Policy parameters of one era.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EraConfig {
    /// Era mobility, blended with base mobility.
    pub social_mobility: f64,
    /// Era inequality level.
    pub inequality: f64,
    /// Payoff scale of risky ventures.
    pub risk_reward: f64,
    /// Payoff scale of study.
    pub education_return: f64,
    /// Degree of market liberalization.
    pub market_freedom: f64,
    /// Competition for elite positions.
    pub elite_competition: f64,
    /// Extra work stress.
    pub stress_factor: f64,
    /// Fraction of risk payoff lost to volatility.
    pub risk_penalty: f64,
    /// Weight of mental strain under heavy stress.
    pub mental_health_weight: Option<f64>,
}

/// The China country layer.
#[derive(Debug, Clone)]
pub struct China {
    base: BaseWorld,
    era: ChinaEra,
    window_open: bool,
    window_era: Option<ChinaEra>,
    window_missed: bool,
    mobility_multiplier: f64,
    is_urban: bool,
    family_policy: FamilyPolicyState,
}

impl China {
    /// Create the layer for a life starting in `start_year`.
    pub fn new(start_year: i32, is_urban: bool) -> Self {
        let mut china = Self {
            base: BaseWorld::new(start_year, BASE_YEAR),
            era: ChinaEra::for_year(start_year),
            window_open: false,
            window_era: None,
            window_missed: false,
            mobility_multiplier: 1.0,
            is_urban,
            family_policy: FamilyPolicyState::new(FertilityPolicy::for_year(start_year), is_urban),
        };
        china.update_window();
        china
    }

    /// The current era.
    pub const fn era(&self) -> ChinaEra {
        self.era
    }

    /// Parameters of the current era.
    pub const fn era_config(&self) -> EraConfig {
        self.era.config()
    }

    /// Whether the current era is an opportunity window.
    pub const fn window_open(&self) -> bool {
        self.window_open
    }

    fn update_window(&mut self) {
        if self.era.is_window() {
            self.window_open = true;
            self.window_era = Some(self.era);
            return;
        }
        self.window_open = false;
        if self.era.is_post_window() && !self.window_missed && self.window_era.is_some() {
            self.window_missed = true;
            self.mobility_multiplier *= MISSED_WINDOW_PENALTY;
            info!(
                era = self.era.name(),
                mobility_multiplier = self.mobility_multiplier,
                "Opportunity window missed"
            );
        }
    }
}

impl CountryModel for China {
    fn key(&self) -> &'static str {
        "china"
    }

    fn base(&self) -> &BaseWorld {
        &self.base
    }

    fn advance(&mut self, year: i32, rng: &mut SimRng) {
        self.base.advance(year, rng);

        let era = ChinaEra::for_year(year);
        if era != self.era {
            info!(year, from = self.era.name(), to = era.name(), "Era transition");
            self.era = era;
            self.update_window();
        }

        let policy = FertilityPolicy::for_year(year);
        if policy != self.family_policy.policy {
            debug!(year, ?policy, "Fertility policy changed");
            self.family_policy = FamilyPolicyState::new(policy, self.is_urban);
        }
    }

    fn era_name(&self) -> &'static str {
        self.era.name()
    }

    fn action_modifier(&self, action: Action) -> f64 {
        let config = self.era.config();
        let modifier = match action {
            Action::Study => config.education_return,
            Action::Risk => config.risk_reward * (1.0 - config.risk_penalty),
            Action::Work | Action::Rest | Action::Move | Action::Relation => 1.0,
        };
        if self.window_missed && matches!(action, Action::Risk | Action::Move) {
            modifier * self.mobility_multiplier
        } else {
            modifier
        }
    }

    fn effective_social_mobility(&self) -> f64 {
        let base = (self.base.social_mobility() * MOBILITY_BASE).clamp(0.0, 1.0);
        let blended = (base + self.era.config().social_mobility) / 2.0;
        let mobility = if self.window_missed {
            blended * self.mobility_multiplier
        } else {
            blended
        };
        mobility.clamp(0.0, 1.0)
    }

    fn effective_inequality(&self) -> f64 {
        (self.base.inequality() + INEQUALITY_TREND * 0.1).clamp(0.0, 1.0)
    }

    fn window_missed(&self) -> bool {
        self.window_missed
    }

    fn mobility_multiplier(&self) -> f64 {
        self.mobility_multiplier
    }

    fn work_stress_factor(&self) -> f64 {
        self.era.config().stress_factor
    }

    fn mental_strain_weight(&self) -> Option<f64> {
        self.era.config().mental_health_weight
    }

    fn family_policy(&self) -> &FamilyPolicyState {
        &self.family_policy
    }

    fn snapshot(&self) -> CountrySnapshot {
        CountrySnapshot {
            country: self.key().to_owned(),
            era: self.era.name().to_owned(),
            window_open: self.window_open,
            window_missed: self.window_missed,
            mobility_multiplier: self.mobility_multiplier,
            social_mobility: self.effective_social_mobility(),
            inequality: self.effective_inequality(),
            family_policy: self.family_policy.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn run(china: &mut China, years: std::ops::Range<i32>, seed: u64) -> u32 {
        let mut rng = SimRng::seeded(seed);
        let mut transitions = 0;
        let mut was_missed = china.window_missed();
        for year in years {
            china.advance(year, &mut rng);
            if china.window_missed() != was_missed {
                transitions += 1;
                was_missed = china.window_missed();
            }
        }
        transitions
    }

    #[test]
    fn era_boundaries() {
        assert_eq!(ChinaEra::for_year(1930), ChinaEra::Establishment);
        assert_eq!(ChinaEra::for_year(1957), ChinaEra::Establishment);
        assert_eq!(ChinaEra::for_year(1958), ChinaEra::Turbulence);
        assert_eq!(ChinaEra::for_year(1978), ChinaEra::ReformEarly);
        assert_eq!(ChinaEra::for_year(1992), ChinaEra::UrbanBoom);
        assert_eq!(ChinaEra::for_year(2008), ChinaEra::StructureSolidify);
        assert_eq!(ChinaEra::for_year(2020), ChinaEra::NewUncertainty);
    }

    #[test]
    fn life_before_the_windows_never_misses() {
        let mut china = China::new(1940, false);
        assert_eq!(run(&mut china, 1941..1960, 1), 0);
        assert!(!china.window_missed());
        assert_close(china.mobility_multiplier(), 1.0);
    }

    #[test]
    fn spanning_both_windows_misses_exactly_once() {
        let mut china = China::new(1970, true);
        assert_eq!(run(&mut china, 1971..2060, 2), 1);
        assert!(china.window_missed());
        assert_close(china.mobility_multiplier(), MISSED_WINDOW_PENALTY);
    }

    #[test]
    fn born_after_the_windows_has_nothing_to_miss() {
        let mut china = China::new(2010, true);
        assert_eq!(run(&mut china, 2011..2040, 3), 0);
        assert!(!china.window_missed());
    }

    #[test]
    fn window_opens_during_window_eras() {
        let mut china = China::new(1975, false);
        let mut rng = SimRng::seeded(4);
        china.advance(1980, &mut rng);
        assert!(china.window_open());
        china.advance(2000, &mut rng);
        assert!(china.window_open());
        china.advance(2010, &mut rng);
        assert!(!china.window_open());
        assert!(china.window_missed());
    }

    #[test]
    fn action_modifiers_follow_era_and_window() {
        let mut china = China::new(1960, false);
        assert_close(china.action_modifier(Action::Study), 0.1);
        assert_close(china.action_modifier(Action::Work), 1.0);

        let mut rng = SimRng::seeded(5);
        for year in 1961..=2025 {
            china.advance(year, &mut rng);
        }
        assert_eq!(china.era(), ChinaEra::NewUncertainty);
        assert_close(china.action_modifier(Action::Risk), 0.6 * 0.4 * 0.3);
        assert_close(china.action_modifier(Action::Move), 0.3);
        assert_close(china.action_modifier(Action::Study), 0.8);
        assert_close(china.action_modifier(Action::Relation), 1.0);
        assert_eq!(china.mental_strain_weight(), Some(1.2));
    }

    #[test]
    fn family_policy_tracks_the_calendar() {
        let mut china = China::new(1975, true);
        assert_eq!(china.family_policy().policy, FertilityPolicy::SoftControl);
        let mut rng = SimRng::seeded(6);
        china.advance(1985, &mut rng);
        assert_eq!(china.family_policy().policy, FertilityPolicy::OneChild);
        assert_close(china.family_policy().only_child_probability, 0.6);
    }

    #[test]
    fn effective_values_stay_in_range() {
        let mut china = China::new(1950, false);
        let mut rng = SimRng::seeded(8);
        for year in 1951..2050 {
            china.advance(year, &mut rng);
            assert!((0.0..=1.0).contains(&china.effective_social_mobility()));
            assert!((0.0..=1.0).contains(&china.effective_inequality()));
        }
    }
}
