// Colored terminal output for similarity reports.
//
// Mirrors the sections of the web form: previews, word counts, the score,
// then the top TF, IDF, and shared-term tables side by side.

use colored::Colorize;

use crate::analysis::report::{DocumentSummary, ScoreBand, SimilarityReport, WeightedTerm};

const COLUMN_WIDTH: usize = 36;

/// Display a full similarity report in the terminal.
pub fn display_report(report: &SimilarityReport) {
    let [doc1, doc2] = &report.documents;

    println!("\n{}", "=== Document Similarity Analysis ===".bold());
    println!();

    display_preview("Document 1", doc1);
    display_preview("Document 2", doc2);

    println!(
        "  {:<24} {:>8}    {:<24} {:>8}",
        "Words in Document 1".dimmed(),
        doc1.word_count,
        "Words in Document 2".dimmed(),
        doc2.word_count,
    );
    println!();

    let score = format!("Similarity Score: {:.2}%", report.similarity_percent);
    println!("  {}  ({})", colorize_band(report.band, &score), report.band);
    println!();

    display_weight_columns(
        "Top Keywords by Term Frequency (TF)",
        &doc1.top_tf,
        &doc2.top_tf,
    );
    display_weight_columns(
        "Top Keywords by Inverse Document Frequency (IDF)",
        &doc1.top_idf,
        &doc2.top_idf,
    );

    println!("{}", "Top Common Words".bold());
    if report.common_terms.is_empty() {
        println!("  {}", "No words in common.".dimmed());
    }
    for shared in &report.common_terms {
        println!(
            "  {} (Doc1: {}, Doc2: {})",
            shared.term, shared.count_doc1, shared.count_doc2
        );
    }
    println!();
}

fn display_preview(label: &str, doc: &DocumentSummary) {
    println!("{}", format!("{label} Preview").bold());
    for line in doc.preview.lines() {
        println!("  {}", line.dimmed());
    }
    println!();
}

fn display_weight_columns(title: &str, left: &[WeightedTerm], right: &[WeightedTerm]) {
    println!("{}", title.bold());
    println!(
        "  {:<width$}{}",
        "Document 1:".dimmed(),
        "Document 2:".dimmed(),
        width = COLUMN_WIDTH
    );

    let rows = left.len().max(right.len());
    for i in 0..rows {
        let l = left.get(i).map(format_weight).unwrap_or_default();
        let r = right.get(i).map(format_weight).unwrap_or_default();
        println!("  {l:<width$}{r}", width = COLUMN_WIDTH);
    }
    println!();
}

fn format_weight(w: &WeightedTerm) -> String {
    format!("{} ({:.4})", w.term, w.weight)
}

fn colorize_band(band: ScoreBand, text: &str) -> colored::ColoredString {
    match band {
        ScoreBand::Low => text.green().bold(),
        ScoreBand::Moderate => text.truecolor(255, 165, 0).bold(),
        ScoreBand::High => text.red().bold(),
    }
}
