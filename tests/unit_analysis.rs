// Unit tests for the TF-IDF pipeline functions.
//
// Tests the documented properties of each stage through the public API:
// TF normalization, IDF smoothing, TF-IDF key restriction, cosine bounds
// and symmetry, and common-term ordering.

use std::collections::HashMap;

use docsim::analysis::{
    common_terms, cosine_similarity, inverse_document_frequency, preprocess, term_frequency,
    tfidf, Preprocessor, TermWeights,
};

fn doc(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

fn weights(pairs: &[(&str, f64)]) -> TermWeights {
    pairs.iter().map(|(t, w)| (t.to_string(), *w)).collect()
}

/// TF-IDF vectors for a pair of documents, as the pipeline builds them.
fn vectors(a: &[String], b: &[String]) -> (TermWeights, TermWeights) {
    let idf = inverse_document_frequency(&[a, b]);
    (
        tfidf(&term_frequency(a), &idf),
        tfidf(&term_frequency(b), &idf),
    )
}

// ============================================================
// preprocess
// ============================================================

#[test]
fn preprocess_removes_stop_words_and_punctuation() {
    let pre = Preprocessor::with_stop_words(["the", "on"]);
    assert_eq!(
        pre.preprocess("The cat sat on the MAT."),
        vec!["cat", "sat", "mat"]
    );
}

#[test]
fn preprocess_default_list_keeps_content_words() {
    assert_eq!(preprocess("The cat sat on the MAT."), vec!["cat", "sat", "mat"]);
    assert_eq!(
        preprocess("Isn't this the new system? It works, and it gives great information!"),
        vec!["new", "system", "works", "gives", "great", "information"]
    );
}

#[test]
fn preprocess_drops_hyphenated_compounds_and_clitics() {
    assert_eq!(
        preprocess("A state-of-the-art e-mail arrived at nine o'clock, the cat's toy too."),
        vec!["arrived", "nine", "cat", "toy"]
    );
}

#[test]
fn preprocess_all_stop_words_yields_empty_document() {
    let tokens = preprocess("the and the of the");
    assert!(tokens.is_empty(), "got {tokens:?}");
}

// ============================================================
// term_frequency
// ============================================================

#[test]
fn tf_sums_to_one_for_nonempty_documents() {
    for d in [
        doc(&["x"]),
        doc(&["x", "y"]),
        doc(&["a", "b", "c", "a", "b", "a", "z", "q", "q"]),
    ] {
        let sum: f64 = term_frequency(&d).values().sum();
        assert!((sum - 1.0).abs() < 1e-9, "TF of {d:?} sums to {sum}");
    }
}

#[test]
fn tf_empty_document_is_empty_map() {
    assert!(term_frequency(&[]).is_empty());
}

#[test]
fn tf_values_within_unit_interval() {
    let tf = term_frequency(&doc(&["a", "a", "b"]));
    assert!(tf.values().all(|v| (0.0..=1.0).contains(v)));
}

// ============================================================
// inverse_document_frequency
// ============================================================

#[test]
fn idf_term_in_all_documents_is_positive() {
    for n in 1..=5 {
        let docs: Vec<Vec<String>> = (0..n).map(|_| doc(&["shared"])).collect();
        let idf = inverse_document_frequency(&docs);
        assert!(idf["shared"] > 0.0, "n={n}: idf={}", idf["shared"]);
        assert!(idf["shared"].is_finite());
    }
}

#[test]
fn idf_matches_smoothed_formula_for_pair() {
    let idf = inverse_document_frequency(&[doc(&["cat", "sat"]), doc(&["cat"])]);
    assert!((idf["cat"] - 1.0).abs() < 1e-12);
    assert!((idf["sat"] - ((3.0f64 / 2.0).ln() + 1.0)).abs() < 1e-12);
}

#[test]
fn idf_generalizes_to_n_documents() {
    let idf = inverse_document_frequency(&[
        doc(&["a", "b"]),
        doc(&["a"]),
        doc(&["c"]),
        doc(&["a", "c"]),
    ]);
    // N = 4: df(a) = 3, df(b) = 1, df(c) = 2
    assert!((idf["a"] - ((5.0f64 / 4.0).ln() + 1.0)).abs() < 1e-12);
    assert!((idf["b"] - ((5.0f64 / 2.0).ln() + 1.0)).abs() < 1e-12);
    assert!((idf["c"] - ((5.0f64 / 3.0).ln() + 1.0)).abs() < 1e-12);
}

// ============================================================
// tfidf
// ============================================================

#[test]
fn tfidf_vocabulary_subset_of_tf_and_idf() {
    let a = doc(&["cat", "sat", "mat"]);
    let b = doc(&["dog", "sat"]);
    let idf = inverse_document_frequency(&[&a, &b]);
    let tf = term_frequency(&a);
    let v = tfidf(&tf, &idf);
    assert!(v.keys().all(|k| tf.contains_key(k)));
    assert!(tf.keys().all(|k| idf.contains_key(k)));
    assert_eq!(v.len(), tf.len());
}

// ============================================================
// cosine_similarity
// ============================================================

#[test]
fn cosine_identical_documents_is_one() {
    let d = doc(&["cat", "sat", "mat"]);
    let (a, b) = vectors(&d, &d);
    assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-9);
}

#[test]
fn cosine_disjoint_documents_is_zero() {
    let (a, b) = vectors(&doc(&["apple"]), &doc(&["orange"]));
    assert_eq!(cosine_similarity(&a, &b), 0.0);
}

#[test]
fn cosine_empty_document_is_zero() {
    let (a, b) = vectors(&[], &doc(&["cat"]));
    assert!(a.is_empty());
    assert_eq!(cosine_similarity(&a, &b), 0.0);
    assert_eq!(cosine_similarity(&b, &a), 0.0);
}

#[test]
fn cosine_is_symmetric() {
    let (a, b) = vectors(
        &doc(&["cat", "sat", "mat", "cat"]),
        &doc(&["cat", "dog", "log", "sat"]),
    );
    let ab = cosine_similarity(&a, &b);
    let ba = cosine_similarity(&b, &a);
    assert!((ab - ba).abs() < 1e-12, "{ab} vs {ba}");
}

#[test]
fn cosine_within_unit_interval() {
    let samples = [
        (doc(&["a", "b", "c"]), doc(&["a"])),
        (doc(&["a", "a", "a", "b"]), doc(&["b", "b", "c"])),
        (doc(&["x"]), doc(&["x", "x", "x", "x"])),
        (doc(&["p", "q", "r", "s"]), doc(&["s", "r", "q", "p"])),
    ];
    for (d1, d2) in &samples {
        let (a, b) = vectors(d1, d2);
        let score = cosine_similarity(&a, &b);
        assert!((0.0..=1.0).contains(&score), "{d1:?} vs {d2:?}: {score}");
    }
}

#[test]
fn cosine_zero_magnitude_is_zero() {
    let zero: HashMap<String, f64> = weights(&[("cat", 0.0)]);
    let other = weights(&[("cat", 1.0)]);
    assert_eq!(cosine_similarity(&zero, &other), 0.0);
}

// ============================================================
// common_terms
// ============================================================

#[test]
fn common_terms_only_shared_vocabulary() {
    let a = weights(&[("cat", 0.5), ("sat", 0.3), ("dog", 0.9)]);
    let b = weights(&[("cat", 0.4), ("sat", 0.6), ("bird", 0.9)]);
    let mut common = common_terms(&a, &b);
    common.sort();
    assert_eq!(common, vec!["cat", "sat"]);
}

#[test]
fn common_terms_descending_by_combined_weight() {
    let a = weights(&[("low", 0.1), ("mid", 0.3), ("high", 0.6)]);
    let b = weights(&[("low", 0.1), ("mid", 0.3), ("high", 0.6)]);
    assert_eq!(common_terms(&a, &b), vec!["high", "mid", "low"]);
}

#[test]
fn common_terms_equal_sums_fall_back_to_term_order() {
    let a = weights(&[("sat", 0.5), ("cat", 0.5)]);
    let b = weights(&[("sat", 0.25), ("cat", 0.25)]);
    assert_eq!(common_terms(&a, &b), vec!["cat", "sat"]);
}
