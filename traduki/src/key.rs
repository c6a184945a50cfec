//! Key derivation and placeholder normalization.
//!
//! Source text can carry printf-style format verbs (`%s`, `%d`, ...).
//! [`slugify`] turns the text into a stable dash-separated lookup key
//! with verb positions embedded as bare digits, and [`normalize`]
//! rewrites the verbs into numbered `{0}`, `{1}`, ... placeholders.
//!
//! Both functions share one left-to-right token scan, so for any input
//! the digit indicators in the key and the placeholders in the
//! normalized template always agree in count and order.

/// Format verbs recognized in source text. `%` followed by one of these.
const FORMAT_VERBS: &[u8] = b"sdvqxXo";

/// Scan for format-verb tokens, left to right, non-overlapping.
/// Returns `(byte_offset, verb)` pairs in occurrence order.
fn scan_verbs(text: &str) -> Vec<(usize, &str)> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i + 1 < bytes.len() {
        if bytes[i] == b'%' && FORMAT_VERBS.contains(&bytes[i + 1]) {
            tokens.push((i, &text[i..i + 2]));
            i += 2;
        } else {
            i += 1;
        }
    }
    tokens
}

/// Lowercase a literal segment, map everything outside `[a-z0-9]` to a
/// space, then collapse runs and dash-join the surviving words.
fn clean_segment(segment: &str) -> String {
    let spaced: String = segment
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                ' '
            }
        })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Derive a dash-separated lookup key, e.g. `"Hello %s World"` → `"hello-0-world"`.
///
/// Format verbs become their 0-based occurrence index; literal segments
/// are lowercased and reduced to `[a-z0-9]` words joined by dashes.
/// Deterministic and idempotent; empty input yields an empty key and a
/// verbs-only input like `"%s%d"` yields `"0-1"`.
///
/// # Example
///
/// ```
/// use traduki::slugify;
///
/// assert_eq!(slugify("Welcome %s, you have %d messages"),
///            "welcome-0-you-have-1-messages");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let verbs = scan_verbs(text);
    let mut pieces: Vec<String> = Vec::with_capacity(verbs.len() * 2 + 1);
    let mut pos = 0;

    for (index, (start, verb)) in verbs.iter().enumerate() {
        let cleaned = clean_segment(&text[pos..*start]);
        if !cleaned.is_empty() {
            pieces.push(cleaned);
        }
        pieces.push(index.to_string());
        pos = start + verb.len();
    }

    let cleaned = clean_segment(&text[pos..]);
    if !cleaned.is_empty() {
        pieces.push(cleaned);
    }

    pieces.join("-")
}

/// Rewrite format verbs into numbered placeholders, e.g.
/// `"Hello %s"` → `("Hello {0}", vec!["%s"])`.
///
/// Returns the rewritten text and the ordered list of verbs matched.
/// Placeholder indices are contiguous from 0 in left-to-right order,
/// matching the digit indicators [`slugify`] embeds for the same input.
#[must_use]
pub fn normalize(text: &str) -> (String, Vec<String>) {
    let verbs = scan_verbs(text);
    let mut out = String::with_capacity(text.len());
    let mut matches = Vec::with_capacity(verbs.len());
    let mut pos = 0;

    for (index, (start, verb)) in verbs.iter().enumerate() {
        out.push_str(&text[pos..*start]);
        out.push_str(&format!("{{{index}}}"));
        matches.push((*verb).to_string());
        pos = start + verb.len();
    }

    out.push_str(&text[pos..]);
    (out, matches)
}
