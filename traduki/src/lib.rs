//! Traduki - lightweight string translation for Rust.
//!
//! Provides key-based and text-based translation with:
//!
//! - **Derived keys**: lookup keys generated from source text (`"Hello %s"`
//!   becomes `"hello-0"`), so the source language doubles as the key space
//! - **Numbered placeholders**: templates use `{0}`, `{1}`, ... substituted
//!   in order from the caller's arguments
//! - **Pluralization**: simplified ICU-style plural templates
//!   (`{count, plural, one {# item} other {# items}}`)
//! - **File-based dictionaries**: JSON files with metadata and validation
//! - **Thread-safe registry**: many concurrent readers, exclusive writers
//! - **Fallback chain**: requested locale, then default language, then the
//!   literal key or text
//!
//! # Quick start
//!
//! ```
//! use traduki::{Dictionary, I18n};
//!
//! let i18n = I18n::new();
//!
//! let en = Dictionary::new("en");
//! en.add("hello-0", "Hello {0}");
//! i18n.register(en);
//!
//! let fr = Dictionary::new("fr");
//! fr.add("hello-0", "Bonjour {0}");
//! i18n.register(fr);
//!
//! // By explicit key
//! let greeting = i18n.t("hello-0", &[&"John"]);
//! assert_eq!(greeting.resolve("en"), "Hello John");
//! assert_eq!(greeting.resolve("fr"), "Bonjour John");
//!
//! // By format string: key "hello-0" is derived automatically
//! let greeting = i18n.f("Hello %s", &[&"John"]);
//! assert_eq!(greeting.resolve("fr"), "Bonjour John");
//! ```
//!
//! Dictionaries normally come from `locales/*.json` files; see
//! [`I18n::load_dir`] and the `traduki` CLI for extracting keys from
//! source code.

mod dictionary;
mod error;
mod key;
mod plural;
mod template;
mod translate;

pub use dictionary::{
    DEFAULT_DICTIONARY, DEFAULT_FILE_PATH, DEFAULT_FOLDER, DEFAULT_LANG, Dictionary, Meta,
    TranslationFile,
};
pub use error::I18nError;
pub use key::{normalize, slugify};
pub use plural::{PluralCategory, PluralRules, plural_category};
pub use template::{PLURAL_MARKER, extract_plural_form, is_plural_template};
pub use translate::{I18n, Translation};

/// Result type for traduki operations.
pub type Result<T> = std::result::Result<T, I18nError>;

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        Dictionary, I18n, I18nError, PluralCategory, Result, Translation, normalize,
        plural_category, slugify,
    };
}
