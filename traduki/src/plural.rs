//! Plural category selection.
//!
//! Implements simplified plural rules per locale family. English has
//! three effective forms here (zero, one, other), Slavic languages four,
//! Arabic six. This table is a deliberate simplification, not full CLDR;
//! dictionary templates are written against these exact rules.

use crate::{I18nError, Result};
use std::str::FromStr;

/// ICU-style plural categories.
///
/// Not all locales use all categories; `Other` is the required fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    /// Zero items.
    Zero,
    /// One item.
    One,
    /// Two items (Arabic).
    Two,
    /// Few items (Slavic languages, Arabic).
    Few,
    /// Many items (Slavic languages, Arabic).
    Many,
    /// All other cases.
    Other,
}

impl PluralCategory {
    /// All categories, in conventional order.
    pub const ALL: [Self; 6] = [
        Self::Zero,
        Self::One,
        Self::Two,
        Self::Few,
        Self::Many,
        Self::Other,
    ];

    /// Category name as it appears in templates.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl FromStr for PluralCategory {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "zero" => Ok(Self::Zero),
            "one" => Ok(Self::One),
            "two" => Ok(Self::Two),
            "few" => Ok(Self::Few),
            "many" => Ok(Self::Many),
            "other" => Ok(Self::Other),
            _ => Err(I18nError::InvalidPluralCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Plural rules for a locale family.
pub trait PluralRules {
    /// Get the plural category for a count.
    fn category(&self, count: u64) -> PluralCategory;

    /// Categories this family can produce.
    fn categories(&self) -> &[PluralCategory];
}

/// Get the plural category for a count in a locale.
///
/// Unknown locales use the default (English-like) rule.
///
/// # Example
///
/// ```
/// use traduki::{PluralCategory, plural_category};
///
/// assert_eq!(plural_category("ru", 2), PluralCategory::Few);
/// assert_eq!(plural_category("ar", 2), PluralCategory::Two);
/// assert_eq!(plural_category("unknown", 1), PluralCategory::One);
/// ```
#[must_use]
pub fn plural_category(locale: &str, count: u64) -> PluralCategory {
    rules_for(locale).category(count)
}

/// Select the rule family for a locale code.
fn rules_for(locale: &str) -> &'static dyn PluralRules {
    match locale {
        "ru" | "uk" | "be" | "pl" => &SlavicPlurals,
        "ar" => &ArabicPlurals,
        // en, de, it, es, pt, fr, and anything unrecognized share the
        // default rule.
        _ => &DefaultPlurals,
    }
}

// ============================================================================
// Rule families
// ============================================================================

/// Germanic/Romance and fallback rule: 0 = zero, 1 = one, else other.
struct DefaultPlurals;

impl PluralRules for DefaultPlurals {
    fn category(&self, count: u64) -> PluralCategory {
        match count {
            0 => PluralCategory::Zero,
            1 => PluralCategory::One,
            _ => PluralCategory::Other,
        }
    }

    fn categories(&self) -> &[PluralCategory] {
        &[PluralCategory::Zero, PluralCategory::One, PluralCategory::Other]
    }
}

/// Slavic rule (ru, uk, be, pl): 0 = zero, 1 = one, 2-4 = few, else many.
struct SlavicPlurals;

impl PluralRules for SlavicPlurals {
    fn category(&self, count: u64) -> PluralCategory {
        match count {
            0 => PluralCategory::Zero,
            1 => PluralCategory::One,
            2..=4 => PluralCategory::Few,
            _ => PluralCategory::Many,
        }
    }

    fn categories(&self) -> &[PluralCategory] {
        &[
            PluralCategory::Zero,
            PluralCategory::One,
            PluralCategory::Few,
            PluralCategory::Many,
        ]
    }
}

/// Arabic rule: 0 = zero, 1 = one, 2 = two, 3-10 = few, 11-99 = many,
/// else other.
struct ArabicPlurals;

impl PluralRules for ArabicPlurals {
    fn category(&self, count: u64) -> PluralCategory {
        match count {
            0 => PluralCategory::Zero,
            1 => PluralCategory::One,
            2 => PluralCategory::Two,
            3..=10 => PluralCategory::Few,
            11..=99 => PluralCategory::Many,
            _ => PluralCategory::Other,
        }
    }

    fn categories(&self) -> &[PluralCategory] {
        &PluralCategory::ALL
    }
}
