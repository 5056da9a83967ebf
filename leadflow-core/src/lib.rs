//! Core types for the Leadflow matching pipeline
//!
//! This crate defines the shared data structures used across the pipeline:
//! lead and team-member records, match results, and the pipeline-wide
//! error type.

pub mod error;
pub mod types;

pub use error::{LeadflowError, LeadflowResult};
pub use types::{
    AnalysisContext, Lead, MatchCandidate, MatchRequest, MatchResult, TeamMember,
};
