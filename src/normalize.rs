//! Text extraction and normalization from talk records

use std::sync::OnceLock;

use regex::Regex;

use crate::corpus::TalkRecord;
use crate::error::WordCloudError;

fn monte_carlo_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)monte\s+carlo").expect("valid regex"))
}

/// Normalize a fragment of text
///
/// Joins the "monte carlo" bigram into a single `monte_carlo` token and
/// spells out ampersands.
pub fn normalize_text(text: &str) -> String {
    monte_carlo_pattern()
        .replace_all(text, "monte_carlo")
        .replace('&', "and")
}

/// Normalize one record: `"{title} {abstract}"`, then token fixes
pub fn normalize_record(record: &TalkRecord) -> String {
    normalize_text(&format!("{} {}", record.title(), record.abstract_text()))
}

/// Normalize every record and join them with a single space
///
/// Fails with [`WordCloudError::EmptyCorpus`] when nothing but whitespace
/// remains.
pub fn normalize_corpus(records: &[TalkRecord]) -> Result<String, WordCloudError> {
    let text = records
        .iter()
        .map(normalize_record)
        .collect::<Vec<_>>()
        .join(" ");

    if text.trim().is_empty() {
        return Err(WordCloudError::EmptyCorpus);
    }
    Ok(text)
}
