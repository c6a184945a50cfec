//! Dictionary model, JSON file format, and validation.
//!
//! A dictionary file is a JSON object:
//!
//! ```json
//! {
//!   "meta": { "lang": "en", "name": "default" },
//!   "translations": { "hello-0": "Hello {0}" }
//! }
//! ```
//!
//! Validation rejects missing metadata, bad language codes, empty
//! keys/values, and malformed plural templates before a dictionary is
//! ever registered. Lookups against a built dictionary never fail.

use crate::template::validate_plural_template;
use crate::{I18nError, Result};
use log::debug;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// Default language code.
pub const DEFAULT_LANG: &str = "en";
/// Default dictionary name used in file names.
pub const DEFAULT_DICTIONARY: &str = "default";
/// Default folder for dictionary files.
pub const DEFAULT_FOLDER: &str = "locales";
/// Default dictionary file path.
pub const DEFAULT_FILE_PATH: &str = "locales/default.en.json";

/// Dictionary file metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    /// Language code (2-5 chars, letters/digits/hyphens). Required.
    pub lang: String,
    /// Dictionary name. Required.
    pub name: String,
    /// Optional schema or content version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Optional author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Optional last-updated date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    /// Optional text direction hint ("ltr"/"rtl"); informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
}

/// On-disk representation of a single dictionary file.
///
/// `translations` is a `BTreeMap` so serialized files have stable,
/// sorted key order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationFile {
    /// File metadata.
    pub meta: Meta,
    /// Key to template mapping.
    pub translations: BTreeMap<String, String>,
}

impl TranslationFile {
    /// Validate structure and content.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: missing `meta.lang` or
    /// `meta.name`, invalid language code, empty key or value, or a
    /// malformed plural template.
    pub fn validate(&self) -> Result<()> {
        if self.meta.lang.is_empty() {
            return Err(I18nError::MissingMeta("meta.lang"));
        }
        if self.meta.name.is_empty() {
            return Err(I18nError::MissingMeta("meta.name"));
        }

        let lang = &self.meta.lang;
        let valid_code = (2..=5).contains(&lang.len())
            && lang
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-');
        if !valid_code {
            return Err(I18nError::InvalidLanguageCode(lang.clone()));
        }

        for (key, value) in &self.translations {
            if key.is_empty() {
                return Err(I18nError::EmptyKey);
            }
            if value.is_empty() {
                return Err(I18nError::EmptyValue(key.clone()));
            }
            if let Err(reason) = validate_plural_template(value) {
                return Err(I18nError::MalformedPlural {
                    key: key.clone(),
                    reason,
                });
            }
        }

        Ok(())
    }
}

/// One language's translations.
///
/// The table sits behind a read-write lock: lookups take shared read
/// access, registration and bulk loads take exclusive write access, so
/// loading never races steady-state lookups.
#[derive(Debug, Default)]
pub struct Dictionary {
    lang: String,
    translations: RwLock<HashMap<String, String>>,
}

impl Dictionary {
    /// Create an empty dictionary for a language.
    #[must_use]
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            translations: RwLock::new(HashMap::new()),
        }
    }

    /// Build a dictionary from a parsed, validated file.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure; see [`TranslationFile::validate`].
    pub fn from_file(file: TranslationFile) -> Result<Self> {
        file.validate()?;
        let dict = Self::new(file.meta.lang);
        dict.add_all(file.translations);
        Ok(dict)
    }

    /// Parse and validate a dictionary from JSON text.
    ///
    /// # Errors
    ///
    /// Returns a JSON error for malformed input, or a validation error.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: TranslationFile = serde_json::from_str(json)?;
        Self::from_file(file)
    }

    /// Load, parse, and validate a dictionary file from disk.
    ///
    /// # Errors
    ///
    /// Returns an IO error, a JSON error, or a validation error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let dict = Self::from_json(&content)?;
        debug!(
            "loaded dictionary '{}' ({} entries) from {}",
            dict.lang,
            dict.len(),
            path.display()
        );
        Ok(dict)
    }

    /// Language code this dictionary serves.
    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Insert or update a translation.
    pub fn add(&self, key: impl Into<String>, value: impl Into<String>) {
        self.translations.write().insert(key.into(), value.into());
    }

    /// Merge translations from an iterator of pairs.
    pub fn add_all<I, K, V>(&self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = self.translations.write();
        for (key, value) in entries {
            table.insert(key.into(), value.into());
        }
    }

    /// Look up a translation. No fallback at this level; fallback policy
    /// lives in the registry.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.translations.read().get(key).cloned()
    }

    /// Whether a key exists in this dictionary.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.translations.read().contains_key(key)
    }

    /// All translation keys, unordered.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.translations.read().keys().cloned().collect()
    }

    /// Number of translations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.translations.read().len()
    }

    /// Whether the dictionary has no translations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.translations.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn valid_file() -> TranslationFile {
        TranslationFile {
            meta: Meta {
                lang: "en".to_string(),
                name: "default".to_string(),
                ..Meta::default()
            },
            translations: BTreeMap::from([
                ("hello-0".to_string(), "Hello {0}".to_string()),
                (
                    "item-count".to_string(),
                    "{count, plural, one {# item} other {# items}}".to_string(),
                ),
            ]),
        }
    }

    #[test]
    fn new_dictionary_is_empty() {
        let dict = Dictionary::new("en");
        assert_eq!(dict.lang(), "en");
        assert!(dict.is_empty());
        assert_eq!(dict.len(), 0);
    }

    #[test]
    fn add_and_get() {
        let dict = Dictionary::new("en");
        dict.add("test_key", "test_value");
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("test_key").as_deref(), Some("test_value"));
        assert_eq!(dict.get("nonexistent"), None);
    }

    #[test]
    fn add_all_merges() {
        let dict = Dictionary::new("en");
        dict.add_all([("key1", "value1"), ("key2", "value2"), ("key3", "value3")]);
        assert_eq!(dict.len(), 3);
        assert!(dict.has("key2"));
        assert!(!dict.has("key4"));

        let mut keys = dict.keys();
        keys.sort_unstable();
        assert_eq!(keys, vec!["key1", "key2", "key3"]);
    }

    #[test]
    fn from_file_validates_and_builds() {
        let dict = Dictionary::from_file(valid_file()).unwrap();
        assert_eq!(dict.lang(), "en");
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("hello-0").as_deref(), Some("Hello {0}"));
    }

    #[test]
    fn validate_missing_lang() {
        let mut file = valid_file();
        file.meta.lang.clear();
        assert!(matches!(
            file.validate(),
            Err(I18nError::MissingMeta("meta.lang"))
        ));
    }

    #[test]
    fn validate_missing_name() {
        let mut file = valid_file();
        file.meta.name.clear();
        assert!(matches!(
            file.validate(),
            Err(I18nError::MissingMeta("meta.name"))
        ));
    }

    #[test]
    fn validate_bad_language_codes() {
        for code in ["e", "toolong", "en_US", "fr!"] {
            let mut file = valid_file();
            file.meta.lang = code.to_string();
            assert!(
                matches!(file.validate(), Err(I18nError::InvalidLanguageCode(_))),
                "code {code:?} should be rejected"
            );
        }
        // Hyphenated codes within the length limit are fine.
        let mut file = valid_file();
        file.meta.lang = "en-US".to_string();
        assert!(file.validate().is_ok());
    }

    #[test]
    fn validate_empty_entries() {
        let mut file = valid_file();
        file.translations.insert(String::new(), "x".to_string());
        assert!(matches!(file.validate(), Err(I18nError::EmptyKey)));

        let mut file = valid_file();
        file.translations.insert("empty".to_string(), String::new());
        assert!(matches!(file.validate(), Err(I18nError::EmptyValue(k)) if k == "empty"));
    }

    #[test]
    fn validate_malformed_plural() {
        let mut file = valid_file();
        file.translations.insert(
            "broken".to_string(),
            "{count, plural, one {# item}".to_string(),
        );
        let err = file.validate().unwrap_err();
        assert!(matches!(err, I18nError::MalformedPlural { ref key, .. } if key == "broken"));
    }

    #[test]
    fn from_json_rejects_missing_translations_field() {
        let err =
            Dictionary::from_json(r#"{"meta": {"lang": "en", "name": "default"}}"#).unwrap_err();
        assert!(err.to_string().contains("translations"));
    }

    #[test]
    fn load_from_disk() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string_pretty(&valid_file()).unwrap();
        tmp.write_all(json.as_bytes()).unwrap();

        let dict = Dictionary::load(tmp.path()).unwrap();
        assert_eq!(dict.lang(), "en");
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Dictionary::load("no/such/file.json").unwrap_err();
        assert!(matches!(err, I18nError::Io(_)));
    }

    #[test]
    fn meta_optional_fields_roundtrip() {
        let json = r#"{
            "meta": {"lang": "fr", "name": "default", "author": "someone", "direction": "ltr"},
            "translations": {"bonjour": "Bonjour"}
        }"#;
        let file: TranslationFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.meta.author.as_deref(), Some("someone"));
        assert!(file.meta.version.is_none());

        // Absent optional fields stay absent on re-serialization.
        let out = serde_json::to_string(&file).unwrap();
        assert!(!out.contains("version"));
    }
}
