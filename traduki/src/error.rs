//! Error types for translation operations.
//!
//! Errors surface only at the file-loading and validation boundary.
//! Lookup failures (missing key, missing locale, missing plural form)
//! are never errors; they resolve through the fallback chain instead.

use thiserror::Error;

/// Errors that can occur while loading or validating dictionaries.
#[derive(Debug, Error)]
pub enum I18nError {
    /// A required metadata field is missing or empty.
    #[error("missing required '{0}' field")]
    MissingMeta(&'static str),

    /// Language code fails the charset/length rule.
    #[error("invalid language code '{0}': must be 2-5 letters, digits, or hyphens")]
    InvalidLanguageCode(String),

    /// A translation entry has an empty key.
    #[error("translation has empty key")]
    EmptyKey,

    /// A translation entry has an empty value.
    #[error("translation key '{0}' has empty value")]
    EmptyValue(String),

    /// An ICU-style plural template is malformed.
    #[error("invalid plural template for key '{key}': {reason}")]
    MalformedPlural {
        /// Key of the offending entry.
        key: String,
        /// What is wrong with the template.
        reason: String,
    },

    /// Not a recognized plural category name.
    #[error("invalid plural category: {0}")]
    InvalidPluralCategory(String),

    /// IO error reading a dictionary file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error in a dictionary file.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
