//! Tokenisation and word frequency counting

use std::collections::HashMap;

use regex::Regex;

use crate::corpus::StopwordSet;

/// Count word frequencies in `text`, most frequent first
///
/// Tokens that are stopwords or purely numeric are dropped, a trailing
/// possessive `'s` is removed, and case variants are folded onto their most
/// common surface form. Ties are ordered alphabetically.
pub fn word_frequencies(text: &str, stopwords: &StopwordSet, pattern: &Regex) -> Vec<(String, usize)> {
    // lowercase key -> (total count, surface form counts in first-seen order)
    let mut groups: HashMap<String, (usize, Vec<(String, usize)>)> = HashMap::new();

    for m in pattern.find_iter(text) {
        let mut token = m.as_str();
        if token.ends_with("'s") || token.ends_with("'S") {
            token = &token[..token.len() - 2];
        }
        if token.is_empty() || token.chars().all(char::is_numeric) {
            continue;
        }
        if stopwords.contains(token) {
            continue;
        }

        let entry = groups.entry(token.to_lowercase()).or_default();
        entry.0 += 1;
        match entry.1.iter_mut().find(|(form, _)| form == token) {
            Some((_, n)) => *n += 1,
            None => entry.1.push((token.to_string(), 1)),
        }
    }

    let mut counts: Vec<(String, usize)> = groups
        .into_values()
        .map(|(total, forms)| (most_common_form(forms), total))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

fn most_common_form(forms: Vec<(String, usize)>) -> String {
    let mut best: Option<(String, usize)> = None;
    for (form, n) in forms {
        if best.as_ref().map_or(true, |(_, b)| n > *b) {
            best = Some((form, n));
        }
    }
    best.map(|(form, _)| form).unwrap_or_default()
}
