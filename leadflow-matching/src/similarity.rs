//! Cosine similarity and candidate ranking

use leadflow_core::{LeadflowError, LeadflowResult};
use ndarray::ArrayView1;
use tracing::debug;

use crate::embedding::EmbeddingVector;

/// A candidate scored against the reference vector
///
/// `index` refers back into the caller's candidate slice.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub index: usize,
    pub score: f64,
}

/// Calculate cosine similarity between two embeddings
///
/// Formula: cos(θ) = (A · B) / (||A|| ||B||)
///
/// Inputs are usually pre-normalized to unit length, but the full cosine is
/// computed anyway: zero-norm inputs slip past normalization, so either norm
/// being zero yields 0.0 instead of dividing by it.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> LeadflowResult<f64> {
    if a.len() != b.len() {
        return Err(LeadflowError::dimension_mismatch(a.len(), b.len()));
    }

    let a_view = ArrayView1::from(a);
    let b_view = ArrayView1::from(b);

    let dot_product = a_view.dot(&b_view);
    let norm_a = a_view.dot(&a_view).sqrt();
    let norm_b = b_view.dot(&b_view).sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok((dot_product / (norm_a * norm_b)) as f64)
}

/// Score every candidate against the reference and keep the best `top_k`
///
/// Each candidate is scored independently, then the set is stable-sorted by
/// descending score, so equal scores keep their input order. Fewer than
/// `top_k` candidates means all of them come back.
pub fn rank_candidates(
    reference: &[f32],
    candidates: &[EmbeddingVector],
    top_k: usize,
) -> LeadflowResult<Vec<ScoredCandidate>> {
    debug!("Ranking {} candidate(s), top_k={}", candidates.len(), top_k);

    let mut scored = Vec::with_capacity(candidates.len());
    for (index, candidate) in candidates.iter().enumerate() {
        let score = cosine_similarity(reference, candidate)?;
        scored.push(ScoredCandidate { index, score });
    }

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(top_k);

    Ok(scored)
}
