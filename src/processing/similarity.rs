//! Cosine similarity between TF-IDF vectors

/// Cosine similarity clamped into `[0, 1]`.
///
/// Mismatched lengths and zero-norm vectors score 0 instead of failing.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    // Vectors from one space share each idf, so the dot product is never
    // negative; the clamp catches overshoot past 1.0 and foreign vectors
    (dot_product / (norm_a * norm_b)).clamp(0.0, 1.0)
}
