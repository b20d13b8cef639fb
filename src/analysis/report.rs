// Similarity report — runs the full pipeline over two raw texts and collects
// everything a caller needs to display: word counts, the score, and the
// top-K TF, IDF, and shared-term views.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::common::{common_terms, top_terms};
use super::idf::inverse_document_frequency;
use super::preprocess::{count_words, Preprocessor};
use super::similarity::cosine_similarity;
use super::tf::{term_frequency, word_frequencies};
use super::tfidf::tfidf;
use super::TermWeights;
use crate::output::truncate_chars;

/// Characters of raw text kept in each document preview.
pub const PREVIEW_CHARS: usize = 300;

/// Default size of every top-K view in the report.
pub const DEFAULT_TOP_K: usize = 5;

/// Coarse similarity level, used to color the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Low,
    Moderate,
    High,
}

impl ScoreBand {
    /// Band for a cosine score in [0, 1].
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s < 0.3 => ScoreBand::Low,
            s if s < 0.7 => ScoreBand::Moderate,
            _ => ScoreBand::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::Low => "Low",
            ScoreBand::Moderate => "Moderate",
            ScoreBand::High => "High",
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A term with its weight in some map (TF or IDF).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedTerm {
    pub term: String,
    pub weight: f64,
}

/// A term present in both documents, with its raw count in each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedTerm {
    pub term: String,
    pub count_doc1: usize,
    pub count_doc2: usize,
}

/// Per-document section of the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Whitespace-separated words in the raw text.
    pub word_count: usize,
    /// Tokens surviving preprocessing.
    pub token_count: usize,
    pub preview: String,
    /// Highest term frequencies, descending.
    pub top_tf: Vec<WeightedTerm>,
    /// Highest IDF weights among this document's own terms, descending.
    pub top_idf: Vec<WeightedTerm>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityReport {
    /// Cosine similarity of the two TF-IDF vectors, in [0, 1].
    pub similarity: f64,
    pub similarity_percent: f64,
    pub band: ScoreBand,
    pub documents: [DocumentSummary; 2],
    pub common_terms: Vec<SharedTerm>,
}

/// Score two raw texts against each other with the English stopword list.
pub fn analyze(text1: &str, text2: &str, top_k: usize) -> SimilarityReport {
    analyze_with(&Preprocessor::english(), text1, text2, top_k)
}

/// Score two raw texts against each other with a specific preprocessor.
pub fn analyze_with(
    preprocessor: &Preprocessor,
    text1: &str,
    text2: &str,
    top_k: usize,
) -> SimilarityReport {
    let doc1 = preprocessor.preprocess(text1);
    let doc2 = preprocessor.preprocess(text2);

    let tf1 = term_frequency(&doc1);
    let tf2 = term_frequency(&doc2);
    let idf = inverse_document_frequency(&[doc1.as_slice(), doc2.as_slice()]);
    let tfidf1 = tfidf(&tf1, &idf);
    let tfidf2 = tfidf(&tf2, &idf);

    let similarity = cosine_similarity(&tfidf1, &tfidf2);

    let counts1 = word_frequencies(&doc1);
    let counts2 = word_frequencies(&doc2);
    let common: Vec<SharedTerm> = common_terms(&tfidf1, &tfidf2)
        .into_iter()
        .take(top_k)
        .map(|term| SharedTerm {
            count_doc1: counts1.get(&term).copied().unwrap_or(0),
            count_doc2: counts2.get(&term).copied().unwrap_or(0),
            term,
        })
        .collect();

    debug!(
        tokens_doc1 = doc1.len(),
        tokens_doc2 = doc2.len(),
        vocabulary = idf.len(),
        shared = common.len(),
        similarity,
        "Computed document similarity"
    );

    SimilarityReport {
        similarity,
        similarity_percent: similarity * 100.0,
        band: ScoreBand::from_score(similarity),
        documents: [
            summarize(text1, doc1.len(), &tf1, &idf, top_k),
            summarize(text2, doc2.len(), &tf2, &idf, top_k),
        ],
        common_terms: common,
    }
}

fn summarize(
    text: &str,
    token_count: usize,
    tf: &TermWeights,
    idf: &TermWeights,
    top_k: usize,
) -> DocumentSummary {
    // IDF ranking is limited to the terms this document actually contains.
    let own_idf: TermWeights = tf
        .keys()
        .map(|term| (term.clone(), idf.get(term).copied().unwrap_or(0.0)))
        .collect();

    DocumentSummary {
        word_count: count_words(text),
        token_count,
        preview: truncate_chars(text, PREVIEW_CHARS),
        top_tf: weighted(top_terms(tf, top_k)),
        top_idf: weighted(top_terms(&own_idf, top_k)),
    }
}

fn weighted(ranked: Vec<(String, f64)>) -> Vec<WeightedTerm> {
    ranked
        .into_iter()
        .map(|(term, weight)| WeightedTerm { term, weight })
        .collect()
}
