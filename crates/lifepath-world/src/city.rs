//! City layer: local conditions on top of a country.
//!
//! A [`City`] wraps a boxed [`CountryModel`] and scales action effects by
//! its static [`CityConfig`]. Advancing a city advances the country, which
//! advances the base layer, so one call per year moves the whole stack.
//!
//! | City      | Income ceiling | Living cost | Policy | Mobility | Risk/reward | Age penalty |
//! |-----------|----------------|-------------|--------|----------|-------------|-------------|
//! | beijing   | high           | very high   | 0.4    | high     | 0.6         | none        |
//! | shanghai  | high           | very high   | 0.2    | high     | 0.8         | none        |
//! | shenzhen  | high           | high        | 0.1    | low      | 1.8         | 35          |
//! | guangzhou | medium         | medium      | 0.1    | medium   | 1.0         | none        |

use lifepath_types::Action;
use serde::{Deserialize, Serialize};

use crate::base::{BaseWorld, BaseWorldSnapshot};
use crate::country::{CountryKind, CountryModel, CountrySnapshot};
use crate::error::WorldError;
use crate::random::SimRng;

/// Age penalty threshold meaning "no penalty".
pub const NO_AGE_PENALTY: u32 = 999;

/// Administrative tier of a city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CityTier {
    /// First-tier metropolis.
    Tier1,
    /// Second-tier city.
    Tier2,
    /// Third-tier city.
    Tier3,
}

/// Ceiling on attainable income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeCeiling {
    /// Low ceiling.
    Low,
    /// Medium ceiling.
    Medium,
    /// High ceiling.
    High,
}

impl IncomeCeiling {
    /// Multiplier on work income.
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Low => 0.7,
            Self::Medium => 1.0,
            Self::High => 1.5,
        }
    }
}

/// Cost of living.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LivingCost {
    /// Cheap.
    Low,
    /// Average.
    Medium,
    /// Expensive.
    High,
    /// Very expensive.
    VeryHigh,
}

impl LivingCost {
    /// Multiplier on relocation costs.
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Low => 0.5,
            Self::Medium => 1.0,
            Self::High => 2.0,
            Self::VeryHigh => 3.0,
        }
    }

    /// Extra work stress from living costs.
    pub const fn stress(self) -> f64 {
        match self {
            Self::Low => 0.0,
            Self::Medium => 0.1,
            Self::High => 0.2,
            Self::VeryHigh => 0.3,
        }
    }
}

/// How hard it is to move up locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MobilityThreshold {
    /// Easy to move up.
    Low,
    /// Average.
    Medium,
    /// Hard to move up.
    High,
}

impl MobilityThreshold {
    /// Multiplier on relocation success.
    pub const fn modifier(self) -> f64 {
        match self {
            Self::Low => 1.2,
            Self::Medium => 1.0,
            Self::High => 0.8,
        }
    }
}

/// Local climate for new ventures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartupOutlook {
    /// Few ventures succeed.
    Low,
    /// Average.
    Medium,
    /// Ventures often succeed.
    High,
    /// Outcomes spread widely.
    HighVariance,
}

/// Static description of a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityConfig {
    /// Lowercase key.
    pub name: String,
    /// Administrative tier.
    pub tier: CityTier,
    /// Ceiling on attainable income.
    pub income_ceiling: IncomeCeiling,
    /// Cost of living.
    pub living_cost: LivingCost,
    /// Strength of local policy support, `[0, 1]`.
    pub policy_bonus: f64,
    /// Local market freedom adjustment.
    pub market_freedom: f64,
    /// Competition for elite positions, `[0, 1]`.
    pub elite_competition: f64,
    /// How hard it is to move up locally.
    pub mobility_threshold: MobilityThreshold,
    /// Payoff scale of risky ventures.
    pub risk_reward_ratio: f64,
    /// Local climate for new ventures.
    pub startup_success_rate: StartupOutlook,
    /// Age beyond which ventures are penalized.
    pub age_penalty_age: u32,
    /// Relationship stability bonus.
    pub stability_bonus: f64,
    /// Chance of an elite career track.
    pub elite_path_probability: f64,
}

impl CityConfig {
    /// Preset for a city key within a country.
    pub fn preset(country: CountryKind, key: &str) -> Result<Self, WorldError> {
        let config = match (country, key) {
            (CountryKind::China, "beijing") => Self {
                name: key.to_owned(),
                tier: CityTier::Tier1,
                income_ceiling: IncomeCeiling::High,
                living_cost: LivingCost::VeryHigh,
                policy_bonus: 0.4,
                market_freedom: -0.2,
                elite_competition: 0.6,
                mobility_threshold: MobilityThreshold::High,
                risk_reward_ratio: 0.6,
                startup_success_rate: StartupOutlook::Low,
                age_penalty_age: NO_AGE_PENALTY,
                stability_bonus: 0.0,
                elite_path_probability: 0.5,
            },
            (CountryKind::China, "shanghai") => Self {
                name: key.to_owned(),
                tier: CityTier::Tier1,
                income_ceiling: IncomeCeiling::High,
                living_cost: LivingCost::VeryHigh,
                policy_bonus: 0.2,
                market_freedom: 0.1,
                elite_competition: 0.7,
                mobility_threshold: MobilityThreshold::High,
                risk_reward_ratio: 0.8,
                startup_success_rate: StartupOutlook::Medium,
                age_penalty_age: NO_AGE_PENALTY,
                stability_bonus: 0.0,
                elite_path_probability: 0.6,
            },
            (CountryKind::China, "shenzhen") => Self {
                name: key.to_owned(),
                tier: CityTier::Tier1,
                income_ceiling: IncomeCeiling::High,
                living_cost: LivingCost::High,
                policy_bonus: 0.1,
                market_freedom: 0.3,
                elite_competition: 0.4,
                mobility_threshold: MobilityThreshold::Low,
                risk_reward_ratio: 1.8,
                startup_success_rate: StartupOutlook::HighVariance,
                age_penalty_age: 35,
                stability_bonus: 0.0,
                elite_path_probability: 0.4,
            },
            (CountryKind::China, "guangzhou") => Self {
                name: key.to_owned(),
                tier: CityTier::Tier1,
                income_ceiling: IncomeCeiling::Medium,
                living_cost: LivingCost::Medium,
                policy_bonus: 0.1,
                market_freedom: 0.2,
                elite_competition: 0.5,
                mobility_threshold: MobilityThreshold::Medium,
                risk_reward_ratio: 1.0,
                startup_success_rate: StartupOutlook::Medium,
                age_penalty_age: NO_AGE_PENALTY,
                stability_bonus: 0.3,
                elite_path_probability: 0.3,
            },
            _ => {
                return Err(WorldError::UnknownCity {
                    key: key.to_owned(),
                    country: country.key().to_owned(),
                });
            }
        };
        Ok(config)
    }

    /// Keys of all presets for a country.
    pub const fn preset_keys(country: CountryKind) -> &'static [&'static str] {
        match country {
            CountryKind::China => &["beijing", "shanghai", "shenzhen", "guangzhou"],
        }
    }
}

/// Snapshot of all three layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// Universal layer.
    pub base: BaseWorldSnapshot,
    /// Country layer.
    pub country: CountrySnapshot,
    /// City configuration.
    pub city: CityConfig,
}

/// The city layer, owning the country and base layers beneath it.
#[derive(Debug)]
pub struct City {
    config: CityConfig,
    country: Box<dyn CountryModel>,
}

impl City {
    /// Wrap a country model with a city configuration.
    pub fn new(config: CityConfig, country: Box<dyn CountryModel>) -> Self {
        Self { config, country }
    }

    /// Resolve country and city keys into a full world stack.
    pub fn from_keys(
        country_key: &str,
        city_key: &str,
        start_year: i32,
        is_urban: bool,
    ) -> Result<Self, WorldError> {
        let kind = CountryKind::from_key(country_key)?;
        let config = CityConfig::preset(kind, city_key)?;
        Ok(Self::new(config, kind.build(start_year, is_urban)))
    }

    /// Advance every layer to `year`.
    pub fn advance(&mut self, year: i32, rng: &mut SimRng) {
        self.country.advance(year, rng);
    }

    /// Static configuration.
    pub const fn config(&self) -> &CityConfig {
        &self.config
    }

    /// The country layer.
    pub fn country(&self) -> &dyn CountryModel {
        self.country.as_ref()
    }

    /// The universal layer.
    pub fn base(&self) -> &BaseWorld {
        self.country.base()
    }

    /// Whether the city is first-tier.
    pub fn is_tier_one(&self) -> bool {
        self.config.tier == CityTier::Tier1
    }

    /// Multiplier this city applies to the effect of `action`.
    pub fn action_modifier(&self, action: Action) -> f64 {
        match action {
            Action::Study if self.config.policy_bonus > 0.3 => {
                1.0 + self.config.policy_bonus * 0.5
            }
            Action::Study | Action::Rest => 1.0,
            Action::Work => 1.0 + self.config.policy_bonus * 0.3,
            Action::Risk => self.config.risk_reward_ratio,
            Action::Relation => 1.0 + self.config.stability_bonus,
            Action::Move => self.mobility_modifier(),
        }
    }

    /// Multiplier on work income.
    pub const fn income_multiplier(&self) -> f64 {
        self.config.income_ceiling.multiplier()
    }

    /// Multiplier on relocation costs.
    pub const fn living_cost_multiplier(&self) -> f64 {
        self.config.living_cost.multiplier()
    }

    /// Multiplier on relocation success.
    pub const fn mobility_modifier(&self) -> f64 {
        self.config.mobility_threshold.modifier()
    }

    /// Extra work stress from living costs.
    pub const fn stress_modifier(&self) -> f64 {
        self.config.living_cost.stress()
    }

    /// Whether ventures at `age` are penalized.
    pub const fn age_penalized(&self, age: u32) -> bool {
        age > self.config.age_penalty_age
    }

    /// Snapshot of all three layers.
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            base: self.base().snapshot(),
            country: self.country.snapshot(),
            city: self.config.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn city(key: &str) -> City {
        City::from_keys("china", key, 1980, true).unwrap()
    }

    #[test]
    fn all_presets_resolve() {
        for key in CityConfig::preset_keys(CountryKind::China) {
            let resolved = city(key);
            assert_eq!(resolved.config().name, *key);
            assert!(resolved.is_tier_one());
        }
    }

    #[test]
    fn unknown_keys_fail_fast() {
        let err = City::from_keys("china", "atlantis", 1980, true);
        assert!(matches!(err, Err(WorldError::UnknownCity { .. })));
        let err = City::from_keys("freedonia", "beijing", 1980, true);
        assert!(matches!(err, Err(WorldError::UnknownCountry { .. })));
    }

    #[test]
    fn beijing_modifiers() {
        let beijing = city("beijing");
        assert_close(beijing.action_modifier(Action::Study), 1.2);
        assert_close(beijing.action_modifier(Action::Work), 1.12);
        assert_close(beijing.action_modifier(Action::Risk), 0.6);
        assert_close(beijing.action_modifier(Action::Move), 0.8);
        assert_close(beijing.income_multiplier(), 1.5);
        assert_close(beijing.living_cost_multiplier(), 3.0);
        assert_close(beijing.stress_modifier(), 0.3);
        assert!(!beijing.age_penalized(60));
    }

    #[test]
    fn shenzhen_and_guangzhou_modifiers() {
        let shenzhen = city("shenzhen");
        assert_close(shenzhen.action_modifier(Action::Study), 1.0);
        assert_close(shenzhen.action_modifier(Action::Move), 1.2);
        assert!(shenzhen.age_penalized(36));
        assert!(!shenzhen.age_penalized(35));

        let guangzhou = city("guangzhou");
        assert_close(guangzhou.action_modifier(Action::Relation), 1.3);
        assert_close(guangzhou.income_multiplier(), 1.0);
        assert_close(guangzhou.living_cost_multiplier(), 1.0);
    }

    #[test]
    fn lower_tier_configs_are_not_tier_one() {
        for tier in [CityTier::Tier2, CityTier::Tier3] {
            let mut config = CityConfig::preset(CountryKind::China, "guangzhou").unwrap();
            config.name = "hefei".to_owned();
            config.tier = tier;
            let custom = City::new(config, CountryKind::China.build(1980, false));
            assert!(!custom.is_tier_one());
            assert_eq!(custom.snapshot().city.name, "hefei");
            assert_close(custom.action_modifier(Action::Relation), 1.3);
        }
    }

    #[test]
    fn advancing_the_city_moves_every_layer() {
        let mut shanghai = city("shanghai");
        let mut rng = SimRng::seeded(12);
        shanghai.advance(2010, &mut rng);
        let snapshot = shanghai.snapshot();
        assert_eq!(snapshot.base.year, 2010);
        assert_eq!(snapshot.country.era, "STRUCTURE_SOLIDIFY");
        assert_eq!(snapshot.city.name, "shanghai");
    }
}
