//! HackMatch - compatibility and recommendation engine for hackathon participants
//!
//! Scores profiles against each other and against catalog items (events,
//! project ideas), ranks candidate pools, and explains every match with a
//! deterministic sentence. Everything in [`core`] is pure and synchronous;
//! [`routes`] exposes it over HTTP.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{CandidateFilter, CompatibilityEngine, EngineConfig, RankOptions, RankedResults};
pub use error::{MatchError, Result};
pub use models::{CandidateItem, CatalogEntry, Profile, PsychographicTrait, RankedResult, ScoreBreakdown, ScoringWeights, TagSet};
