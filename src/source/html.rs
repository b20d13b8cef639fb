// Paragraph text extraction from fetched HTML.

use scraper::{Html, Selector};

/// Text of every `<p>` element in document order, joined by single spaces.
///
/// Navigation, scripts, headings, and other non-paragraph content are
/// ignored. A page with no paragraphs yields an empty string.
pub fn extract_paragraph_text(html: &str) -> String {
    let Ok(paragraph) = Selector::parse("p") else {
        return String::new();
    };

    let document = Html::parse_document(html);
    document
        .select(&paragraph)
        .map(|p| p.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
