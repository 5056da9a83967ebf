//! Lead store access for the Leadflow pipeline
//!
//! Wraps the database service's REST API behind the [`LeadStore`] trait so
//! the matching engine can be driven against scripted records in tests.

pub mod client;

pub use client::{LeadStore, LeadStoreClient};
