//! Embedding generation via the text oracle
//!
//! The oracle is asked to emit a fixed-dimension numeric vector for a text
//! block, which is then parsed and normalized to unit length. Vectors are
//! ephemeral: generated per matching call, never persisted.

use std::sync::Arc;

use leadflow_core::{LeadflowError, LeadflowResult};
use tracing::debug;

use crate::oracle::TextOracle;

/// Embedding vector (768 dimensions by default)
pub type EmbeddingVector = Vec<f32>;

/// Default embedding dimensionality
pub const EMBEDDING_DIM: usize = 768;

/// Generates embeddings for free-text descriptions
pub struct EmbeddingGenerator {
    oracle: Arc<dyn TextOracle>,
    dimension: usize,
}

impl EmbeddingGenerator {
    /// Create a new embedding generator with the default dimensionality
    pub fn new(oracle: Arc<dyn TextOracle>) -> Self {
        Self {
            oracle,
            dimension: EMBEDDING_DIM,
        }
    }

    /// Override the expected vector dimensionality
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Get the expected embedding dimension
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Generate a unit-length embedding for arbitrary text
    ///
    /// One oracle round trip per call; malformed output surfaces as a hard
    /// failure, the caller decides whether to abort or exclude.
    pub async fn embed(&self, text: &str) -> LeadflowResult<EmbeddingVector> {
        let prompt = format!(
            "Create a numerical embedding vector representation of the following text.\n\
             The embedding should capture the semantic meaning of the text.\n\
             Return ONLY the vector as a comma-separated list of {} float values, with no prose.\n\
             \n\
             Text: {}",
            self.dimension, text
        );

        debug!("Embedding text block of {} chars", text.len());
        let raw = self.oracle.complete(&prompt).await?;

        let vector = parse_embedding(&raw, self.dimension)?;
        Ok(normalize(vector))
    }
}

/// Parse the oracle's response into a numeric vector
///
/// Strips bracket and newline decoration, splits on commas, and requires
/// every token to parse as a float and the result to have the expected
/// length.
fn parse_embedding(raw: &str, expected: usize) -> LeadflowResult<EmbeddingVector> {
    let cleaned = raw.replace(['[', ']', '\n'], "");

    let mut values = Vec::with_capacity(expected);
    for token in cleaned.split(',') {
        let token = token.trim();
        let value: f32 = token
            .parse()
            .map_err(|_| LeadflowError::parse(format!("Invalid embedding component: {:?}", token)))?;
        values.push(value);
    }

    if values.len() != expected {
        return Err(LeadflowError::dimension_mismatch(expected, values.len()));
    }

    Ok(values)
}

/// Scale a vector to unit Euclidean norm
///
/// An all-zero vector is returned unchanged rather than divided by zero.
fn normalize(mut vector: EmbeddingVector) -> EmbeddingVector {
    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for value in &mut vector {
            *value /= norm;
        }
    }
    vector
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedOracle(String);

    #[async_trait]
    impl TextOracle for FixedOracle {
        async fn complete(&self, _prompt: &str) -> LeadflowResult<String> {
            Ok(self.0.clone())
        }
    }

    fn norm(vector: &[f32]) -> f32 {
        vector.iter().map(|v| v * v).sum::<f32>().sqrt()
    }

    #[test]
    fn parses_decorated_vector() {
        let vector = parse_embedding("[1.0, 2.0,\n 3.0]", 3).unwrap();
        assert_eq!(vector, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn rejects_non_numeric_token() {
        let err = parse_embedding("1.0, two, 3.0", 3).unwrap_err();
        assert!(matches!(err, LeadflowError::Parse(_)));
    }

    #[test]
    fn rejects_wrong_length() {
        let err = parse_embedding("1.0, 2.0", 3).unwrap_err();
        assert!(matches!(
            err,
            LeadflowError::DimensionMismatch { expected: 3, actual: 2 }
        ));
    }

    #[test]
    fn rejects_empty_response() {
        let err = parse_embedding("", 3).unwrap_err();
        assert!(matches!(err, LeadflowError::Parse(_)));
    }

    #[test]
    fn normalize_produces_unit_norm() {
        let vector = normalize(vec![3.0, 4.0]);
        assert!((norm(&vector) - 1.0).abs() < 1e-6);
        assert!((vector[0] - 0.6).abs() < 1e-6);
    }

    #[test]
    fn normalize_leaves_zero_vector_unchanged() {
        let vector = normalize(vec![0.0, 0.0, 0.0]);
        assert_eq!(vector, vec![0.0, 0.0, 0.0]);
    }

    #[tokio::test]
    async fn embed_returns_unit_vector() {
        let oracle = Arc::new(FixedOracle("[1.0, 2.0, 2.0]".to_string()));
        let generator = EmbeddingGenerator::new(oracle).with_dimension(3);

        let vector = generator.embed("some lead description").await.unwrap();
        assert_eq!(vector.len(), 3);
        assert!((norm(&vector) - 1.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn embed_surfaces_parse_failure() {
        let oracle = Arc::new(FixedOracle("I'd rather not.".to_string()));
        let generator = EmbeddingGenerator::new(oracle).with_dimension(3);

        let err = generator.embed("some lead description").await.unwrap_err();
        assert!(matches!(err, LeadflowError::Parse(_)));
    }
}
