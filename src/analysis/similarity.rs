// Cosine similarity between two sparse TF-IDF vectors.
//
//   cos(a, b) = sum(a[t] * b[t] for t in a ∩ b) / (|a| * |b|)
//
// Terms on only one side contribute nothing to the dot product, same as
// treating the missing entry as 0. Each magnitude is taken over that
// vector's own full term set.

use super::TermWeights;

/// Cosine similarity of two term-weight vectors.
///
/// Returns exactly 0.0 when either vector is empty or has zero magnitude.
/// For non-negative weights the result lies in [0, 1].
pub fn cosine_similarity(v1: &TermWeights, v2: &TermWeights) -> f64 {
    if v1.is_empty() || v2.is_empty() {
        return 0.0;
    }

    // Iterate the smaller map, probe the larger one.
    let (small, large) = if v1.len() <= v2.len() { (v1, v2) } else { (v2, v1) };
    let dot: f64 = small
        .iter()
        .filter_map(|(term, a)| large.get(term).map(|b| a * b))
        .sum();

    let mag1 = magnitude(v1);
    let mag2 = magnitude(v2);
    if mag1 == 0.0 || mag2 == 0.0 {
        return 0.0;
    }

    // Rounding can push identical vectors a hair past 1.0.
    (dot / (mag1 * mag2)).min(1.0)
}

/// Euclidean norm over every term of the vector.
pub fn magnitude(v: &TermWeights) -> f64 {
    v.values().map(|w| w * w).sum::<f64>().sqrt()
}
