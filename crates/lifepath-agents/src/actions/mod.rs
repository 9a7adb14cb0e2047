//! Yearly actions: admissibility, nominal costs, and execution.
//!
//! # Submodules
//!
//! - [`eligibility`] -- Which actions are admissible this year.
//! - [`costs`] -- Nominal energy, stress, and money amounts per action.
//! - [`handlers`] -- Execution logic for each action.

pub mod costs;
pub mod eligibility;
pub mod handlers;
