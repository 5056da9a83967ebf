//! Embedding-based matching of sales leads to team members
//!
//! This crate is the algorithmic core of the leadflow pipeline:
//! - Generate embeddings for lead and team-member text blocks via the
//!   text-completion oracle
//! - Rank team members by cosine similarity against the lead
//! - Synthesize per-match justification strings, degrading to a fixed
//!   fallback when the model misbehaves
//! - Orchestrate the above into a ranked, truncated match result

pub mod embedding;
pub mod extract;
pub mod matcher;
pub mod oracle;
pub mod reasons;
pub mod similarity;

pub use embedding::{EmbeddingGenerator, EmbeddingVector, EMBEDDING_DIM};
pub use extract::extract_json;
pub use matcher::{MatcherService, TOP_MATCHES};
pub use oracle::{OracleClient, TextOracle};
pub use reasons::{fallback_reasons, synthesize_reasons, REASON_COUNT};
pub use similarity::{cosine_similarity, rank_candidates, ScoredCandidate};
