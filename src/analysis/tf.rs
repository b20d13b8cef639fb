// Term frequency — per-document normalized counts.

use std::collections::HashMap;

use super::TermWeights;

/// Fraction of the document's tokens equal to each distinct term.
///
/// An empty document yields an empty map rather than dividing by zero.
pub fn term_frequency(doc: &[String]) -> TermWeights {
    if doc.is_empty() {
        return TermWeights::new();
    }

    let total = doc.len() as f64;
    word_frequencies(doc)
        .into_iter()
        .map(|(term, count)| (term, count as f64 / total))
        .collect()
}

/// Raw occurrence count of each distinct term.
pub fn word_frequencies(doc: &[String]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for term in doc {
        *counts.entry(term.clone()).or_insert(0) += 1;
    }
    counts
}
