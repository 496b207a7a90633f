//! Small utility helpers for URL encoding, HTML escaping, and defensive JSON extraction.
//!
//! The functions in this module are intentionally lightweight and dependency-free.
//! Every JSON accessor here is total: a missing key or a value of the wrong type
//! yields `None` or an empty collection, never an error.

use serde_json::Value;
use std::fmt::Write;

/// What: Percent-encode a string for use in URLs according to RFC 3986.
///
/// Inputs:
/// - `input`: String to encode.
///
/// Output:
/// - Returns a percent-encoded string where reserved characters are escaped.
///
/// Details:
/// - Unreserved characters as per RFC 3986 (`A-Z`, `a-z`, `0-9`, `-`, `.`, `_`, `~`) are left as-is.
/// - Space is encoded as `%20` (not `+`), which mail clients decode reliably.
/// - All other bytes are encoded as two uppercase hexadecimal digits prefixed by `%`.
/// - Operates on raw bytes from the input string; Hebrew text becomes UTF-8 escapes.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push_str("%20"),
            _ => {
                out.push('%');
                let _ = write!(out, "{b:02X}");
            }
        }
    }
    out
}

/// What: Escape text for placement between HTML tags.
///
/// Inputs:
/// - `input`: Raw text content.
///
/// Output:
/// - Text with `&`, `<` and `>` replaced by entities.
#[must_use]
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 8);
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// What: Escape text for placement inside a double-quoted HTML attribute.
///
/// Inputs:
/// - `input`: Raw attribute value.
///
/// Output:
/// - Value with `&`, `<`, `>`, `"` and `'` replaced by entities.
#[must_use]
pub fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 8);
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// What: Extract a string value from a JSON object by key.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `key`: Key to look up in the JSON object.
///
/// Output:
/// - `Some(String)` when the key maps to a JSON string, `None` otherwise.
#[must_use]
pub fn str_of(v: &Value, key: &str) -> Option<String> {
    v.get(key).and_then(Value::as_str).map(ToOwned::to_owned)
}

/// What: Extract the first available string from a list of candidate keys.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `keys`: Candidate keys to try in order.
///
/// Output:
/// - `Some(String)` for the first key that maps to a non-blank JSON string, or `None`
///   if none match.
///
/// Details:
/// - Precedence is the order of `keys`; used for record fields with legacy aliases
///   (e.g. `title` before `label`). Blank strings fall through to the next key.
#[must_use]
pub fn ss(v: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| v.get(*k).and_then(Value::as_str))
        .find(|s| !s.trim().is_empty())
        .map(ToOwned::to_owned)
}

/// What: Extract a scalar (string, number or boolean) as display text.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `key`: Key to look up.
///
/// Output:
/// - `Some(text)` for strings, numbers (including `0`) and booleans; `None` for
///   missing keys, `null`, arrays and objects.
#[must_use]
pub fn scalar_of(v: &Value, key: &str) -> Option<String> {
    v.get(key).and_then(scalar_text)
}

/// What: Render a scalar JSON value as display text.
///
/// Inputs:
/// - `v`: Any JSON value.
///
/// Output:
/// - Text for strings, numbers and booleans; `None` otherwise.
#[must_use]
pub fn scalar_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// What: Extract an array of strings from a JSON object by key.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `key`: Key naming the array.
///
/// Output:
/// - The array's string elements in order, skipping non-strings.
/// - An empty vector when the key is missing or not an array.
#[must_use]
pub fn arrs(v: &Value, key: &str) -> Vec<String> {
    v.get(key)
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(|e| e.as_str().map(ToOwned::to_owned))
                .collect()
        })
        .unwrap_or_default()
}

/// What: Extract an array of records from a JSON object, converting each with `f`.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `key`: Key naming the array.
/// - `f`: Conversion from one element to a record; `None` drops the element.
///
/// Output:
/// - Converted records in the array's original order.
pub fn records<T>(v: &Value, key: &str, f: impl Fn(&Value) -> Option<T>) -> Vec<T> {
    v.get(key)
        .and_then(Value::as_array)
        .map(|arr| arr.iter().filter_map(f).collect())
        .unwrap_or_default()
}
