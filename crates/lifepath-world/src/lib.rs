//! Layered world model for the Lifepath simulation.
//!
//! The world is a stack of three layers, each wrapping the one below:
//!
//! ```text
//! City  ->  Country (eras, windows, family policy)  ->  BaseWorld (universal laws)
//! ```
//!
//! One [`City::advance`] per simulated year moves the whole stack. All
//! randomness is drawn from a caller-supplied [`SimRng`].
//!
//! # Modules
//!
//! - [`random`] -- Seedable generator with Gaussian sampling and a draw counter.
//! - [`base`] -- Long and short cycles, technology, inequality, Pareto multipliers.
//! - [`country`] -- The [`CountryModel`] trait and country selection.
//! - [`china`] -- China's eras and the opportunity-window mechanism.
//! - [`family_policy`] -- Fertility policy periods and family generation.
//! - [`city`] -- City presets and per-action local multipliers.
//! - [`error`] -- Error types for world configuration.

pub mod base;
pub mod china;
pub mod city;
pub mod country;
pub mod error;
pub mod family_policy;
pub mod random;

pub use base::{BaseWorld, BaseWorldSnapshot, ParetoMultipliers};
pub use china::{China, ChinaEra};
pub use city::{City, CityConfig, CityTier, WorldSnapshot};
pub use country::{CountryKind, CountryModel, CountrySnapshot};
pub use error::WorldError;
pub use family_policy::{FamilyPolicyState, FertilityPolicy};
pub use random::SimRng;
