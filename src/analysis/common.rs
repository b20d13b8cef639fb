// Ranking helpers — shared vocabulary and top-K views of weight maps.
//
// Every ranking here is descending by weight with ties broken by term,
// lexicographically ascending, so output order is reproducible regardless
// of hash map iteration order.

use std::cmp::Ordering;

use super::TermWeights;

/// Terms present in both vectors, descending by `v1[t] + v2[t]`.
pub fn common_terms(v1: &TermWeights, v2: &TermWeights) -> Vec<String> {
    let mut shared: Vec<(&String, f64)> = v1
        .iter()
        .filter_map(|(term, a)| v2.get(term).map(|b| (term, a + b)))
        .collect();

    shared.sort_by(|x, y| by_weight_desc(x.0, x.1, y.0, y.1));
    shared.into_iter().map(|(term, _)| term.clone()).collect()
}

/// The `k` highest-weighted (term, weight) pairs of `weights`.
pub fn top_terms(weights: &TermWeights, k: usize) -> Vec<(String, f64)> {
    let mut ranked: Vec<(&String, f64)> = weights.iter().map(|(t, w)| (t, *w)).collect();
    ranked.sort_by(|x, y| by_weight_desc(x.0, x.1, y.0, y.1));
    ranked
        .into_iter()
        .take(k)
        .map(|(term, weight)| (term.clone(), weight))
        .collect()
}

fn by_weight_desc(term_a: &str, weight_a: f64, term_b: &str, weight_b: f64) -> Ordering {
    weight_b
        .partial_cmp(&weight_a)
        .unwrap_or(Ordering::Equal)
        .then_with(|| term_a.cmp(term_b))
}
