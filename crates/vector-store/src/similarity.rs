use crate::error::{Result, VectorStoreError};

/// Cosine similarity between two vectors: `dot(a, b) / (‖a‖ · ‖b‖)`.
///
/// Differing dimensionalities are an input error, never scored. A
/// zero-magnitude input has no defined angle; it scores as
/// `f32::NEG_INFINITY` so degenerate vectors sort deterministically last
/// instead of propagating NaN into the ordering.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(VectorStoreError::InvalidDimension {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(f32::NEG_INFINITY);
    }

    Ok(dot / (norm_a.sqrt() * norm_b.sqrt()))
}
