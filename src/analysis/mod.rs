// Document similarity analysis — the TF-IDF / cosine pipeline.
//
// raw text -> preprocess -> term_frequency (per doc)
//                        -> inverse_document_frequency (across both docs)
//          -> tfidf (per doc) -> cosine_similarity / common_terms
//
// Everything here is pure and synchronous: each call builds fresh maps and
// nothing is shared between invocations.

use std::collections::HashMap;

pub mod common;
pub mod idf;
pub mod preprocess;
pub mod report;
pub mod similarity;
pub mod tf;
pub mod tfidf;

/// Sparse term -> weight map, used for TF, IDF, and TF-IDF vectors alike.
pub type TermWeights = HashMap<String, f64>;

pub use common::{common_terms, top_terms};
pub use idf::inverse_document_frequency;
pub use preprocess::{count_words, preprocess, Preprocessor};
pub use report::{analyze, ScoreBand, SimilarityReport};
pub use similarity::cosine_similarity;
pub use tf::{term_frequency, word_frequencies};
pub use tfidf::tfidf;
