//! Shared type definitions for the Lifepath simulation.
//!
//! This crate is the single source of truth for the data that flows
//! between the world model, the transition rules, the event detector,
//! and the simulation driver.
//!
//! # Modules
//!
//! - [`enums`] -- Actions, event kinds and categories, regions, state fields
//! - [`structs`] -- Birth profile, personality, individual state, events, family
//! - [`error`] -- Validation errors for profile data

pub mod enums;
pub mod error;
pub mod structs;

pub use enums::{Action, EventCategory, EventKind, Region, StateField};
pub use error::ProfileError;
pub use structs::{
    ActionSet, AttributeDelta, BirthProfile, FamilyState, IndividualState, LifeEvent, Personality,
};
