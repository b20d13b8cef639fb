// TF-IDF weighting — elementwise product of a document's TF and the shared IDF.

use super::TermWeights;

/// Weight each term of `tf` by its IDF.
///
/// The result has exactly the keys of `tf`. A term missing from `idf` gets
/// weight 0 instead of failing.
pub fn tfidf(tf: &TermWeights, idf: &TermWeights) -> TermWeights {
    tf.iter()
        .map(|(term, freq)| {
            let weight = idf.get(term).copied().unwrap_or(0.0);
            (term.clone(), freq * weight)
        })
        .collect()
}
