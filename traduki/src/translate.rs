//! Translation registry and the T/F/S/P/R operations.
//!
//! [`I18n`] owns the per-language dictionaries and the default-language
//! setting; clones share the same state, so one configured instance can
//! be handed around freely. The translation methods return a
//! [`Translation`] value that captures everything derivable up front
//! (key, canonical template, stringified arguments) and resolves to a
//! string for any locale on demand.
//!
//! Lookup failures are never errors: a missing key falls back from the
//! requested locale to the default language, and finally to the literal
//! key or original text.

use crate::dictionary::{DEFAULT_DICTIONARY, DEFAULT_FILE_PATH, DEFAULT_FOLDER, DEFAULT_LANG, Dictionary};
use crate::key::{normalize, slugify};
use crate::plural::{PluralCategory, plural_category};
use crate::template::{
    extract_plural_form, is_plural_template, substitute_args, substitute_count,
};
use crate::Result;
use log::{debug, info};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Shared registry state.
///
/// The dictionary map and the default-language string each have their
/// own lock: swapping a dictionary in is a short exclusive section, and
/// the default language is read on nearly every lookup but written
/// rarely.
#[derive(Debug)]
struct Registry {
    dictionaries: RwLock<HashMap<String, Arc<Dictionary>>>,
    default_lang: RwLock<String>,
}

/// Thread-safe translation service.
///
/// Cloning is cheap and clones share dictionaries and settings.
///
/// # Example
///
/// ```
/// use traduki::{Dictionary, I18n};
///
/// let i18n = I18n::new();
/// let en = Dictionary::new("en");
/// en.add("dashboard", "Dashboard");
/// i18n.register(en);
///
/// assert_eq!(i18n.s("Dashboard").resolve("en"), "Dashboard");
/// ```
#[derive(Debug, Clone)]
pub struct I18n {
    registry: Arc<Registry>,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new()
    }
}

impl I18n {
    /// Create an empty service with `"en"` as the default language.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Registry {
                dictionaries: RwLock::new(HashMap::new()),
                default_lang: RwLock::new(DEFAULT_LANG.to_string()),
            }),
        }
    }

    /// Builder-style default language override.
    #[must_use]
    pub fn with_default_language(self, lang: impl Into<String>) -> Self {
        self.set_default_language(lang);
        self
    }

    /// Set the fallback language code.
    pub fn set_default_language(&self, lang: impl Into<String>) {
        *self.registry.default_lang.write() = lang.into();
    }

    /// Current fallback language code.
    #[must_use]
    pub fn default_language(&self) -> String {
        self.registry.default_lang.read().clone()
    }

    /// Add a dictionary to the registry, replacing any existing
    /// dictionary for the same language.
    pub fn register(&self, dict: Dictionary) {
        let lang = dict.lang().to_string();
        self.registry
            .dictionaries
            .write()
            .insert(lang, Arc::new(dict));
    }

    /// Get a registered dictionary by language code.
    #[must_use]
    pub fn dictionary(&self, lang: &str) -> Option<Arc<Dictionary>> {
        self.registry.dictionaries.read().get(lang).cloned()
    }

    /// Load and register the default dictionary from
    /// `locales/default.en.json`.
    ///
    /// # Errors
    ///
    /// Returns IO, JSON, or validation errors from the loader.
    pub fn load(&self) -> Result<()> {
        self.load_file(DEFAULT_FILE_PATH)
    }

    /// Load and register a dictionary from a specific path.
    ///
    /// # Errors
    ///
    /// Returns IO, JSON, or validation errors from the loader.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let dict = Dictionary::load(path)?;
        info!("registered dictionary '{}' ({} entries)", dict.lang(), dict.len());
        self.register(dict);
        Ok(())
    }

    /// Load a dictionary for a language from
    /// `locales/default.{lang}.json`.
    ///
    /// # Errors
    ///
    /// Returns IO, JSON, or validation errors from the loader.
    pub fn load_language(&self, lang: &str) -> Result<()> {
        let path = Path::new(DEFAULT_FOLDER).join(format!("{DEFAULT_DICTIONARY}.{lang}.json"));
        self.load_file(path)
    }

    /// Load every `*.json` dictionary file in a directory.
    ///
    /// # Errors
    ///
    /// Returns the first IO, JSON, or validation error encountered.
    pub fn load_dir(&self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();
        let mut loaded = 0usize;
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                self.load_file(&path)?;
                loaded += 1;
            }
        }
        debug!("loaded {loaded} dictionaries from {}", dir.display());
        Ok(())
    }

    /// Two-level lookup: requested locale, then the default language.
    ///
    /// A stored value equal to its own key counts as a miss (the
    /// "not found" sentinel convention from generated dictionaries).
    fn lookup(&self, locale: &str, key: &str) -> Option<String> {
        if let Some(dict) = self.dictionary(locale)
            && let Some(value) = dict.get(key)
            && value != key
        {
            return Some(value);
        }

        let default = self.default_language();
        if default != locale
            && let Some(dict) = self.dictionary(&default)
            && let Some(value) = dict.get(key)
            && value != key
        {
            return Some(value);
        }

        None
    }

    /// Translate by exact key with positional placeholder substitution.
    ///
    /// The key itself becomes the template when no dictionary provides
    /// it. Placeholders are numbered `{0}`, `{1}`, ...
    ///
    /// # Example
    ///
    /// ```
    /// use traduki::{Dictionary, I18n};
    ///
    /// let i18n = I18n::new();
    /// let en = Dictionary::new("en");
    /// en.add("welcome-user", "Welcome {0}!");
    /// i18n.register(en);
    ///
    /// assert_eq!(i18n.t("welcome-user", &[&"John"]).resolve("en"), "Welcome John!");
    /// ```
    #[must_use]
    pub fn t(&self, key: &str, args: &[&dyn Display]) -> Translation {
        Translation {
            i18n: self.clone(),
            request: Request::Key {
                key: key.to_string(),
                args: render_args(args),
            },
        }
    }

    /// Translate by format string with an auto-derived key.
    ///
    /// The key and the canonical `{0}`-style template are derived once,
    /// up front. When no dictionary entry exists, the canonical template
    /// is used, so the result matches plain formatting of the input.
    ///
    /// # Example
    ///
    /// ```
    /// use traduki::I18n;
    ///
    /// let i18n = I18n::new();
    /// // Derived key: "hello-0-you-have-1-messages"
    /// let msg = i18n.f("Hello %s, you have %d messages", &[&"John", &5]);
    /// assert_eq!(msg.resolve("en"), "Hello John, you have 5 messages");
    /// ```
    #[must_use]
    pub fn f(&self, format: &str, args: &[&dyn Display]) -> Translation {
        let key = slugify(format);
        let (template, _) = normalize(format);
        Translation {
            i18n: self.clone(),
            request: Request::Format {
                key,
                template,
                args: render_args(args),
            },
        }
    }

    /// Translate static text with an auto-derived key.
    ///
    /// Unlike [`t`](Self::t) and [`f`](Self::f), a miss returns the
    /// original text untouched, not the derived key.
    #[must_use]
    pub fn s(&self, text: &str) -> Translation {
        Translation {
            i18n: self.clone(),
            request: Request::Text {
                key: slugify(text),
                original: text.to_string(),
            },
        }
    }

    /// Pluralized translation for a key and count.
    ///
    /// ICU-style templates select a category-specific form; plain
    /// templates fall back to literal `{count}` substitution.
    ///
    /// # Example
    ///
    /// ```
    /// use traduki::{Dictionary, I18n};
    ///
    /// let i18n = I18n::new();
    /// let en = Dictionary::new("en");
    /// en.add("item-count", "{count, plural, zero {no items} one {# item} other {# items}}");
    /// i18n.register(en);
    ///
    /// assert_eq!(i18n.p("item-count", 0).resolve("en"), "no items");
    /// assert_eq!(i18n.p("item-count", 5).resolve("en"), "5 items");
    /// ```
    #[must_use]
    pub fn p(&self, key: &str, count: u64) -> Translation {
        Translation {
            i18n: self.clone(),
            request: Request::Plural {
                key: key.to_string(),
                count,
            },
        }
    }

    /// Immediate translation of static text for a locale; the direct
    /// equivalent of `s(text).resolve(locale)`.
    #[must_use]
    pub fn r(&self, locale: &str, text: &str) -> String {
        self.s(text).resolve(locale)
    }
}

/// Stringify arguments once, at construction time.
fn render_args(args: &[&dyn Display]) -> Vec<String> {
    args.iter().map(ToString::to_string).collect()
}

/// What a [`Translation`] resolves, captured at construction.
#[derive(Debug, Clone)]
enum Request {
    /// Explicit key; the key is the last-resort template.
    Key { key: String, args: Vec<String> },
    /// Derived key plus canonical normalized template.
    Format {
        key: String,
        template: String,
        args: Vec<String>,
    },
    /// Derived key; the original text is the last resort.
    Text { key: String, original: String },
    /// Plural resolution for a count.
    Plural { key: String, count: u64 },
}

/// A prepared translation that resolves against any locale.
///
/// Immutable value object: the key, canonical template, and stringified
/// arguments are fixed at construction; only the locale varies per
/// [`resolve`](Self::resolve) call.
#[derive(Debug, Clone)]
pub struct Translation {
    i18n: I18n,
    request: Request,
}

impl Translation {
    /// Resolve to a localized string.
    #[must_use]
    pub fn resolve(&self, locale: &str) -> String {
        match &self.request {
            Request::Key { key, args } => {
                let template = self
                    .i18n
                    .lookup(locale, key)
                    .unwrap_or_else(|| key.clone());
                substitute_args(&template, args)
            }
            Request::Format { key, template, args } => {
                let template = self
                    .i18n
                    .lookup(locale, key)
                    .unwrap_or_else(|| template.clone());
                substitute_args(&template, args)
            }
            Request::Text { key, original } => self
                .i18n
                .lookup(locale, key)
                .unwrap_or_else(|| original.clone()),
            Request::Plural { key, count } => {
                let template = self
                    .i18n
                    .lookup(locale, key)
                    .unwrap_or_else(|| key.clone());
                resolve_plural(&template, locale, *count)
            }
        }
    }
}

/// Plural fallback chain: locale-selected category, then `other`, then
/// literal `{count}` substitution on the raw template.
fn resolve_plural(template: &str, locale: &str, count: u64) -> String {
    if is_plural_template(template) {
        let category = plural_category(locale, count);
        if let Some(resolved) = extract_plural_form(template, category, count) {
            return resolved;
        }
        if category != PluralCategory::Other
            && let Some(resolved) = extract_plural_form(template, PluralCategory::Other, count)
        {
            return resolved;
        }
    }
    substitute_count(template, count)
}
