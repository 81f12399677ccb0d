//! Loading of talk records and stopword lists from YAML sources

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::WordCloudError;

/// A single talk entry; fields other than title and abstract are ignored
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TalkRecord {
    #[serde(default)]
    title: Option<String>,
    #[serde(default, rename = "abstract")]
    abstract_text: Option<String>,
}

impl TalkRecord {
    pub fn new(title: impl Into<String>, abstract_text: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            abstract_text: Some(abstract_text.into()),
        }
    }

    /// Title, or empty if absent
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Abstract, or empty if absent
    pub fn abstract_text(&self) -> &str {
        self.abstract_text.as_deref().unwrap_or("")
    }
}

/// Lowercase tokens excluded from the cloud
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Membership test; case-insensitive
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }
}

/// YAML structure for stopword files: named categories of words
#[derive(Deserialize)]
struct YamlStopwords {
    #[serde(default)]
    english: Vec<String>,
    #[serde(default)]
    academic: Vec<String>,
}

/// Load the stopword set from a YAML mapping of categories to word lists
pub fn load_stopwords(path: &Path) -> Result<StopwordSet, WordCloudError> {
    let content = read_source(path)?;
    let stopwords = parse_stopwords(&content).map_err(|e| WordCloudError::format(path, e))?;
    debug!(count = stopwords.len(), path = %path.display(), "loaded stopwords");
    Ok(stopwords)
}

/// Parse stopwords from YAML text
pub fn parse_stopwords(content: &str) -> Result<StopwordSet, String> {
    let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
    if value.is_null() {
        return Ok(StopwordSet::new());
    }
    if !value.is_mapping() {
        return Err("expected a mapping of stopword categories".to_string());
    }
    let parsed: YamlStopwords = serde_yaml::from_value(value).map_err(|e| e.to_string())?;
    Ok(parsed.english.iter().chain(parsed.academic.iter()).collect())
}

/// Load talk records from a YAML sequence of mappings
pub fn load_talks(path: &Path) -> Result<Vec<TalkRecord>, WordCloudError> {
    let content = read_source(path)?;
    let talks = parse_talks(&content).map_err(|e| WordCloudError::format(path, e))?;
    debug!(count = talks.len(), path = %path.display(), "loaded talks");
    Ok(talks)
}

/// Parse talk records from YAML text
pub fn parse_talks(content: &str) -> Result<Vec<TalkRecord>, String> {
    let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
    let Some(items) = value.as_sequence() else {
        return Err(format!("expected a list of talks, got {}", yaml_kind(&value)));
    };
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if !item.is_mapping() {
                return Err(format!("talk #{} is {}, expected a mapping", i, yaml_kind(item)));
            }
            serde_yaml::from_value(item.clone()).map_err(|e| format!("talk #{}: {}", i, e))
        })
        .collect()
}

/// Load both sources: `(stopwords, talks)`
pub fn load(
    corpus_path: &Path,
    stopwords_path: &Path,
) -> Result<(StopwordSet, Vec<TalkRecord>), WordCloudError> {
    let stopwords = load_stopwords(stopwords_path)?;
    let talks = load_talks(corpus_path)?;
    Ok((stopwords, talks))
}

fn read_source(path: &Path) -> Result<String, WordCloudError> {
    if !path.exists() {
        return Err(WordCloudError::not_found(path));
    }
    std::fs::read_to_string(path).map_err(|e| WordCloudError::format(path, e))
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_talks_basic() {
        let yaml = r#"
- title: Monte Carlo methods
  abstract: Sampling & estimation
  speaker: Someone
- title: Only a title
"#;
        let talks = parse_talks(yaml).unwrap();
        assert_eq!(talks.len(), 2);
        assert_eq!(talks[0].title(), "Monte Carlo methods");
        assert_eq!(talks[0].abstract_text(), "Sampling & estimation");
        assert_eq!(talks[1].abstract_text(), "");
    }

    #[test]
    fn test_parse_talks_null_fields_default_to_empty() {
        let talks = parse_talks("- title:\n  abstract:\n").unwrap();
        assert_eq!(talks[0].title(), "");
        assert_eq!(talks[0].abstract_text(), "");
    }

    #[test]
    fn test_parse_talks_rejects_mapping_root() {
        let err = parse_talks("title: not a list\n").unwrap_err();
        assert!(err.contains("expected a list"));
    }

    #[test]
    fn test_parse_talks_rejects_scalar_items() {
        let err = parse_talks("- just a string\n").unwrap_err();
        assert!(err.contains("talk #0"));
    }

    #[test]
    fn test_parse_talks_rejects_empty_document() {
        assert!(parse_talks("").is_err());
    }

    #[test]
    fn test_parse_stopwords_union_of_categories() {
        let yaml = r#"
english: [the, And]
academic: [paper]
other: [ignored]
"#;
        let stopwords = parse_stopwords(yaml).unwrap();
        assert_eq!(stopwords.len(), 3);
        assert!(stopwords.contains("the"));
        assert!(stopwords.contains("and"));
        assert!(stopwords.contains("Paper"));
        assert!(!stopwords.contains("ignored"));
    }

    #[test]
    fn test_parse_stopwords_missing_category_defaults_empty() {
        let stopwords = parse_stopwords("english: [a]\n").unwrap();
        assert_eq!(stopwords.len(), 1);
    }

    #[test]
    fn test_parse_stopwords_rejects_sequence_root() {
        assert!(parse_stopwords("- the\n- a\n").is_err());
    }

    #[test]
    fn test_parse_stopwords_rejects_non_sequence_category() {
        assert!(parse_stopwords("english: 3\n").is_err());
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let err = load_talks(Path::new("/definitely/not/here.yml")).unwrap_err();
        assert!(matches!(err, WordCloudError::NotFound { .. }));
    }
}
