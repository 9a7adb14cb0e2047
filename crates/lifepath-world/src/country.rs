//! The country layer interface.
//!
//! A country owns a [`BaseWorld`] and adds historical structure on top:
//! named eras with their own policy parameters, the opportunity-window
//! mechanism, and a family-policy sub-model. Action effects are scaled by
//! [`CountryModel::action_modifier`] before the city layer applies its own.

use std::fmt;

use lifepath_types::Action;
use serde::{Deserialize, Serialize};

use crate::base::BaseWorld;
use crate::error::WorldError;
use crate::family_policy::FamilyPolicyState;
use crate::random::SimRng;

/// A country-level world model.
pub trait CountryModel: fmt::Debug {
    /// Stable lowercase key, e.g. `"china"`.
    fn key(&self) -> &'static str;

    /// The wrapped universal layer.
    fn base(&self) -> &BaseWorld;

    /// Advance the base layer, then re-derive era and policy state.
    fn advance(&mut self, year: i32, rng: &mut SimRng);

    /// Name of the current era.
    fn era_name(&self) -> &'static str;

    /// Multiplier this country applies to the effect of `action`.
    fn action_modifier(&self, action: Action) -> f64;

    /// Social mobility after era and window adjustments.
    fn effective_social_mobility(&self) -> f64;

    /// Inequality after the country trend is applied.
    fn effective_inequality(&self) -> f64;

    /// Whether both opportunity windows have passed by.
    fn window_missed(&self) -> bool;

    /// Permanent multiplier on mobility-sensitive outcomes.
    fn mobility_multiplier(&self) -> f64;

    /// Extra work stress imposed by the current era.
    fn work_stress_factor(&self) -> f64;

    /// Weight of mental strain under heavy stress, if the era carries one.
    fn mental_strain_weight(&self) -> Option<f64>;

    /// Family policy currently in force for the individual's region.
    fn family_policy(&self) -> &FamilyPolicyState;

    /// Serializable view of the layer.
    fn snapshot(&self) -> CountrySnapshot;
}

/// Serializable view of a country layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountrySnapshot {
    /// Country key.
    pub country: String,
    /// Current era name.
    pub era: String,
    /// Whether the current era is an opportunity window.
    pub window_open: bool,
    /// Whether both windows have passed by.
    pub window_missed: bool,
    /// Permanent mobility multiplier.
    pub mobility_multiplier: f64,
    /// Effective social mobility.
    pub social_mobility: f64,
    /// Effective inequality.
    pub inequality: f64,
    /// Family policy in force.
    pub family_policy: FamilyPolicyState,
}

/// Countries that can be selected by key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountryKind {
    /// People's Republic of China, from 1949.
    China,
}

impl CountryKind {
    /// Every selectable country.
    pub const ALL: [Self; 1] = [Self::China];

    /// Look a country up by its lowercase key.
    pub fn from_key(key: &str) -> Result<Self, WorldError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| WorldError::UnknownCountry {
                key: key.to_owned(),
            })
    }

    /// Lowercase key.
    pub const fn key(self) -> &'static str {
        match self {
            Self::China => "china",
        }
    }

    /// Build the country model for an individual born in `start_year`.
    pub fn build(self, start_year: i32, is_urban: bool) -> Box<dyn CountryModel> {
        match self {
            Self::China => Box::new(crate::china::China::new(start_year, is_urban)),
        }
    }
}
