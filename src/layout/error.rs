//! Error types for the layout engine

use thiserror::Error;

/// Errors that can occur during word layout
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The token pattern is not a valid regex
    #[error("invalid token pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Canvas or font size settings that cannot produce a layout
    #[error("invalid layout settings: {reason}")]
    InvalidSettings { reason: String },
}

impl LayoutError {
    /// Create an invalid pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason
                .to_string()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Create an invalid settings error
    pub fn invalid_settings(reason: impl Into<String>) -> Self {
        Self::InvalidSettings {
            reason: reason.into(),
        }
    }
}
