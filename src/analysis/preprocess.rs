// Tokenization and normalization — raw text to a document's term list.
//
// The text is lowercased and segmented on Unicode word boundaries. Segments
// joined by a single hyphen are rejoined into one compound token, and
// clitics ('s, 'm, 'd, 'll, 're, 've, n't) are split off the way a
// Treebank-style word tokenizer does. Anything that is not purely
// alphanumeric (punctuation, decimals, compounds, clitics) is dropped, and so
// is anything in the English stopword set.

use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::LazyLock;

use stop_words::{get, LANGUAGE};
use unicode_segmentation::UnicodeSegmentation;

/// NLTK English stopwords, loaded once on first use and never mutated afterward.
static ENGLISH_STOP_WORDS: LazyLock<HashSet<String>> =
    LazyLock::new(|| get(LANGUAGE::English).into_iter().collect());

/// Clitic suffixes split off the end of a word. `’` variants cover typographic
/// apostrophes.
const CLITICS: [&str; 14] = [
    "n't", "'s", "'m", "'d", "'ll", "'re", "'ve", "n\u{2019}t", "\u{2019}s", "\u{2019}m",
    "\u{2019}d", "\u{2019}ll", "\u{2019}re", "\u{2019}ve",
];

const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// Turns raw text into a document: an ordered sequence of normalized terms.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    stop_words: Cow<'static, HashSet<String>>,
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::english()
    }
}

impl Preprocessor {
    /// Preprocessor backed by the process-wide English stopword list.
    pub fn english() -> Self {
        Self {
            stop_words: Cow::Borrowed(&*ENGLISH_STOP_WORDS),
        }
    }

    /// Preprocessor with a caller-supplied stopword set.
    ///
    /// Stopwords are compared against already-lowercased tokens, so they are
    /// lowercased here as well.
    pub fn with_stop_words<I, S>(stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stop_words: Cow::Owned(
                stop_words
                    .into_iter()
                    .map(|w| w.as_ref().to_lowercase())
                    .collect(),
            ),
        }
    }

    pub fn is_stop_word(&self, term: &str) -> bool {
        self.stop_words.contains(term)
    }

    /// Lowercase, tokenize, and drop non-alphanumeric tokens and stopwords.
    ///
    /// Empty input yields an empty document.
    pub fn preprocess(&self, text: &str) -> Vec<String> {
        normalize(text, &self.stop_words)
    }
}

/// Preprocess `text` with the English stopword list.
pub fn preprocess(text: &str) -> Vec<String> {
    normalize(text, &ENGLISH_STOP_WORDS)
}

fn normalize(text: &str, stop_words: &HashSet<String>) -> Vec<String> {
    word_tokenize(&text.to_lowercase())
        .into_iter()
        .filter(|token| is_alphanumeric(token) && !stop_words.contains(token))
        .collect()
}

/// Split text into word-like tokens, separating clitics.
///
/// Punctuation never forms a token of its own here since Unicode word
/// segmentation already discards it. Numbers such as `3.14` and hyphenated
/// compounds such as `e-mail` stay whole.
pub fn word_tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut pending_hyphen = false;

    for segment in text.split_word_bounds() {
        if is_word_segment(segment) {
            if pending_hyphen {
                current.push('-');
            } else {
                flush_word(&mut current, &mut tokens);
            }
            current.push_str(segment);
            pending_hyphen = false;
        } else if segment == "-" && !current.is_empty() && !pending_hyphen {
            pending_hyphen = true;
        } else {
            flush_word(&mut current, &mut tokens);
            pending_hyphen = false;
        }
    }
    flush_word(&mut current, &mut tokens);

    tokens
}

fn is_word_segment(segment: &str) -> bool {
    segment.chars().any(char::is_alphanumeric)
}

fn flush_word(current: &mut String, out: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    let word = std::mem::take(current);
    split_clitic(&word, out);
}

fn split_clitic(word: &str, out: &mut Vec<String>) {
    // "don't" -> "do" + "n't", "cat's" -> "cat" + "'s", "o'clock" stays whole
    for clitic in CLITICS {
        let Some(cut) = word.len().checked_sub(clitic.len()) else {
            continue;
        };
        if !word.is_char_boundary(cut) || !word[cut..].eq_ignore_ascii_case(clitic) {
            continue;
        }
        let head = &word[..cut];
        if !head.is_empty() && !head.ends_with(APOSTROPHES) {
            out.push(head.to_string());
            out.push(word[cut..].to_string());
            return;
        }
    }
    out.push(word.to_string());
}

fn is_alphanumeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}

/// Whitespace-separated word count of the raw, unprocessed text.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
