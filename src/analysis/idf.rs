// Inverse document frequency with smoothing.
//
//   idf(t) = ln((N + 1) / (df(t) + 1)) + 1
//
// The +1 terms keep the weight finite and strictly positive, even for a term
// that appears in every document.

use std::collections::{HashMap, HashSet};

use super::TermWeights;

/// IDF for every term appearing in any of `docs`.
///
/// Works for any number of documents; the pipeline only ever passes a pair.
pub fn inverse_document_frequency<D: AsRef<[String]>>(docs: &[D]) -> TermWeights {
    let n = docs.len() as f64;

    let mut document_frequency: HashMap<&str, usize> = HashMap::new();
    for doc in docs {
        let distinct: HashSet<&str> = doc.as_ref().iter().map(String::as_str).collect();
        for term in distinct {
            *document_frequency.entry(term).or_insert(0) += 1;
        }
    }

    document_frequency
        .into_iter()
        .map(|(term, df)| (term.to_string(), smoothed_idf(n, df as f64)))
        .collect()
}

fn smoothed_idf(n: f64, df: f64) -> f64 {
    ((n + 1.0) / (df + 1.0)).ln() + 1.0
}
