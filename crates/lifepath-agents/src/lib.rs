//! Individual actions, aging, and family effects for the Lifepath simulation.
//!
//! This crate holds the logic that mutates an [`IndividualState`] during a
//! year, without owning the yearly loop. It sits between `lifepath-world`
//! (which supplies the modifiers) and `lifepath-core` (which decides what
//! happens when).
//!
//! # Modules
//!
//! - [`actions`] -- Admissibility, nominal costs, and handlers for each action.
//! - [`config`] -- Transition parameters ([`TransitionConfig`]).
//! - [`family`] -- Only-child effects and caregiving ([`FamilyDynamics`]).
//! - [`transition`] -- One year of actions, aging, and clamping.
//! - [`vitals`] -- Yearly aging.
//!
//! [`IndividualState`]: lifepath_types::IndividualState
//! [`TransitionConfig`]: config::TransitionConfig
//! [`FamilyDynamics`]: family::FamilyDynamics

pub mod actions;
pub mod config;
pub mod family;
pub mod transition;
pub mod vitals;

pub use actions::eligibility::available_actions;
pub use actions::handlers::{ActionContext, ActionOutcome, Outcome};
pub use config::TransitionConfig;
pub use family::FamilyDynamics;
pub use transition::apply_year;
