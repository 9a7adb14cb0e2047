//! Configuration loading and typed config structures for a Lifepath run.
//!
//! A scenario lives in `lifepath-config.yaml` at the project root. This
//! module defines strongly-typed structs that mirror the YAML structure and
//! a loader that reads the file. Every section has defaults, so an empty
//! document describes a complete run.

use std::collections::BTreeMap;
use std::path::Path;

use lifepath_agents::TransitionConfig;
use lifepath_types::{Action, BirthProfile, Personality, Region};
use serde::{Deserialize, Serialize};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level scenario configuration.
///
/// Mirrors the structure of `lifepath-config.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Birth endowment of the individual.
    #[serde(default = "default_birth")]
    pub birth: BirthProfile,

    /// Personality traits of the individual.
    #[serde(default = "default_personality")]
    pub personality: Personality,

    /// Country and city selection.
    #[serde(default)]
    pub world: WorldSelection,

    /// Run parameters.
    #[serde(default)]
    pub run: RunConfig,

    /// Scripted action choices keyed by age.
    ///
    /// Choices are filtered by admissibility and truncated to
    /// `run.max_actions_per_year`. An empty list leaves the year to the
    /// automatic policy.
    #[serde(default)]
    pub overrides: BTreeMap<u32, Vec<Action>>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            birth: default_birth(),
            personality: default_personality(),
            world: WorldSelection::default(),
            run: RunConfig::default(),
            overrides: BTreeMap::new(),
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Transition parameters derived from the run section.
    pub const fn transition(&self) -> TransitionConfig {
        TransitionConfig {
            noise_std: self.run.noise_std,
        }
    }
}

/// Which world stack to build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSelection {
    /// Country key.
    #[serde(default = "default_country")]
    pub country: String,

    /// City key within the country.
    #[serde(default = "default_city")]
    pub city: String,
}

impl Default for WorldSelection {
    fn default() -> Self {
        Self {
            country: default_country(),
            city: default_city(),
        }
    }
}

/// Parameters of the yearly loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Age at which the run stops.
    #[serde(default = "default_max_age")]
    pub max_age: u32,

    /// Seed for the generator; drawn from entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Upper bound on actions taken per year.
    #[serde(default = "default_max_actions_per_year")]
    pub max_actions_per_year: usize,

    /// Standard deviation of the multiplicative noise.
    #[serde(default = "default_noise_std")]
    pub noise_std: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_age: default_max_age(),
            seed: None,
            max_actions_per_year: default_max_actions_per_year(),
            noise_std: default_noise_std(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (used by serde)
// ---------------------------------------------------------------------------

const fn default_birth() -> BirthProfile {
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

const fn default_personality() -> Personality {
    Personality {
        openness: 0.7,
        conscientiousness: 0.8,
        risk_preference: 0.5,
        social_drive: 0.6,
        resilience: 0.7,
    }
}

fn default_country() -> String {
    "china".to_owned()
}

fn default_city() -> String {
    "beijing".to_owned()
}

const fn default_max_age() -> u32 {
    80
}

const fn default_max_actions_per_year() -> usize {
    2
}

const fn default_noise_std() -> f64 {
    0.15
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = SimulationConfig::parse("{}").unwrap();
        assert_eq!(config, SimulationConfig::default());
        assert_eq!(config.run.max_age, 80);
        assert_eq!(config.run.max_actions_per_year, 2);
        assert_eq!(config.run.seed, None);
        assert_eq!(config.world.country, "china");
        assert_eq!(config.world.city, "beijing");
        assert!(config.overrides.is_empty());
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r"
birth:
  birth_year: 1975
  region: Rural
  family_class: 0.2
  parents_education: 0.3
  family_stability: 0.4
  genetic_health: 0.9
  cognitive_potential: 0.7
personality:
  openness: 0.1
  conscientiousness: 0.2
  risk_preference: 0.9
  social_drive: 0.4
  resilience: 0.5
world:
  country: china
  city: shenzhen
run:
  max_age: 60
  seed: 7
  max_actions_per_year: 3
  noise_std: 0.1
overrides:
  25: [study, work]
  30: [risk]
";
        let config = SimulationConfig::parse(yaml).unwrap();
        assert_eq!(config.birth.birth_year, 1975);
        assert_eq!(config.birth.region, Region::Rural);
        assert!((config.personality.risk_preference - 0.9).abs() < f64::EPSILON);
        assert_eq!(config.world.city, "shenzhen");
        assert_eq!(config.run.max_age, 60);
        assert_eq!(config.run.seed, Some(7));
        assert_eq!(config.run.max_actions_per_year, 3);
        assert!((config.transition().noise_std - 0.1).abs() < f64::EPSILON);
        assert_eq!(
            config.overrides.get(&25),
            Some(&vec![Action::Study, Action::Work])
        );
        assert_eq!(config.overrides.get(&30), Some(&vec![Action::Risk]));
    }

    #[test]
    fn shipped_scenario_parses() {
        let yaml = include_str!("../../../lifepath-config.yaml");
        let config = SimulationConfig::parse(yaml).unwrap();
        assert_eq!(config.birth, default_birth());
        assert_eq!(config.personality, default_personality());
        assert_eq!(config.run.seed, Some(42));
        assert_eq!(config.overrides.get(&30), Some(&vec![Action::Move]));
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let yaml = "run:\n  seed: 99\nworld:\n  city: guangzhou\n";
        let config = SimulationConfig::parse(yaml).unwrap();
        assert_eq!(config.run.seed, Some(99));
        assert_eq!(config.run.max_age, 80);
        assert_eq!(config.world.country, "china");
        assert_eq!(config.world.city, "guangzhou");
    }

    #[test]
    fn invalid_yaml_is_rejected() {
        let err = SimulationConfig::parse("run: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
    }

    #[test]
    fn unknown_action_is_rejected() {
        let err = SimulationConfig::parse("overrides:\n  20: [sleep]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = SimulationConfig::from_file(Path::new("/nonexistent/lifepath.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
