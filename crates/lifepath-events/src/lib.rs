//! Life event detection and narrative summaries for the Lifepath simulation.
//!
//! # Modules
//!
//! - [`detector`] -- Rising-edge threshold rules and the append-only event log.
//! - [`summary`] -- Narrative, highlights, and statistics of a finished life.

pub mod detector;
pub mod summary;

pub use detector::EventDetector;
pub use summary::{LifeStatistics, LifeSummary, SummaryInput, generate_summary};
