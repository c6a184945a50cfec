//! Template parsing and substitution.
//!
//! Two placeholder conventions coexist in dictionary templates and are
//! deliberately not unified:
//!
//! - positional `{0}`, `{1}`, ... filled from caller arguments
//! - `{count}` (and `#` inside plural forms) filled from a plural count
//!
//! An ICU-style plural template looks like
//! `{count, plural, zero {no items} one {# item} other {# items}}`.

use crate::plural::PluralCategory;

/// Marker substring identifying an ICU-style plural template.
pub const PLURAL_MARKER: &str = "{count, plural";

/// Whether a template uses ICU-style plural syntax.
#[must_use]
pub fn is_plural_template(template: &str) -> bool {
    template.contains(PLURAL_MARKER)
}

/// Extract the sub-template for a plural category and substitute the count.
///
/// Locates the first `"<category> {"`, scans to the matching close brace
/// (tracking nested braces), replaces every literal `#` with the decimal
/// count, and trims surrounding whitespace.
///
/// Returns `None` when the category is absent, the template is malformed
/// (no matching close brace), or the sub-template is empty after
/// trimming; callers treat all three as "try the next fallback".
///
/// # Example
///
/// ```
/// use traduki::{PluralCategory, extract_plural_form};
///
/// let template = "{count, plural, one {# item} other {# items}}";
/// assert_eq!(
///     extract_plural_form(template, PluralCategory::One, 1),
///     Some("1 item".to_string())
/// );
/// assert_eq!(extract_plural_form(template, PluralCategory::Few, 3), None);
/// ```
#[must_use]
pub fn extract_plural_form(
    template: &str,
    category: PluralCategory,
    count: u64,
) -> Option<String> {
    let needle = format!("{} {{", category.as_str());
    let body_start = template.find(&needle)? + needle.len();
    let body = &template[body_start..];

    let mut depth = 1usize;
    let mut end = None;
    for (i, ch) in body.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    end = Some(i);
                    break;
                }
            }
            _ => {}
        }
    }

    let result = body[..end?].replace('#', &count.to_string());
    let result = result.trim();
    if result.is_empty() {
        None
    } else {
        Some(result.to_string())
    }
}

/// Substitute positional placeholders `{0}`, `{1}`, ... with stringified
/// arguments, one single-pass literal replacement per index.
#[must_use]
pub fn substitute_args(template: &str, args: &[String]) -> String {
    let mut out = template.to_string();
    for (index, arg) in args.iter().enumerate() {
        out = out.replace(&format!("{{{index}}}"), arg);
    }
    out
}

/// Substitute the literal `{count}` placeholder with the decimal count.
/// Last-resort path for templates without ICU plural syntax.
#[must_use]
pub fn substitute_count(template: &str, count: u64) -> String {
    template.replace("{count}", &count.to_string())
}

/// Check an entry value for plural-template well-formedness.
///
/// Non-plural templates always pass. Plural-marked templates must have
/// balanced braces and at least one recognized `"<category> {"` form.
pub(crate) fn validate_plural_template(template: &str) -> Result<(), String> {
    if !is_plural_template(template) {
        return Ok(());
    }

    let mut depth = 0i32;
    for ch in template.chars() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth < 0 {
                    return Err("unbalanced braces: too many closing braces".to_string());
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(format!("unbalanced braces: missing {depth} closing brace(s)"));
    }

    let has_form = PluralCategory::ALL
        .iter()
        .any(|category| template.contains(&format!("{} {{", category.as_str())));
    if !has_form {
        let valid: Vec<&str> = PluralCategory::ALL.iter().map(|c| c.as_str()).collect();
        return Err(format!(
            "no valid plural forms found (valid forms: {})",
            valid.join(", ")
        ));
    }

    Ok(())
}
