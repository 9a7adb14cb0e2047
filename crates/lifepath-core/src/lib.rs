//! Scenario configuration and the yearly simulation loop for Lifepath.
//!
//! This crate wires the world stack, the transition rules, and the event
//! detector into one run: [`simulate`] takes a [`SimulationConfig`] and
//! returns a [`SimulationOutcome`].
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `lifepath-config.yaml` into
//!   strongly-typed structs.
//! - [`decision`] -- [`DecisionEngine`], the yearly action selection.
//! - [`profiles`] -- Random birth profiles and personalities.
//! - [`simulation`] -- [`LifeSimulation`] and the six-step yearly loop.
//!
//! [`simulate`]: simulation::simulate
//! [`SimulationConfig`]: config::SimulationConfig
//! [`SimulationOutcome`]: simulation::SimulationOutcome
//! [`DecisionEngine`]: decision::DecisionEngine
//! [`LifeSimulation`]: simulation::LifeSimulation

pub mod config;
pub mod decision;
pub mod profiles;
pub mod simulation;

pub use config::{ConfigError, RunConfig, SimulationConfig, WorldSelection};
pub use decision::DecisionEngine;
pub use simulation::{
    EndReason, FamilyReport, LifeSimulation, SimulationError, SimulationOutcome, YearRecord,
    simulate,
};
