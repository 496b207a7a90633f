//! Icon key resolution for section cards and contact rows.
//!
//! Content refers to icons by semantic keys. A key is looked up first in the
//! alias table (context names such as `email`, content ids such as
//! `orphanWeek`), then in the canonical table of Lucide-style outline
//! definitions, and finally falls back to the generic `link` icon.
//!
//! Whatever path resolves a key, the definition is wrapped by [`to_svg`], which
//! strips paint attributes from the inner markup and applies one stroke-only
//! convention (24x24 viewBox, `fill="none"`, `stroke="currentColor"`, width 2,
//! round caps and joins).

pub mod social;

use std::collections::HashMap;
use std::sync::LazyLock;

pub use social::{SocialKey, normalize_social_key};

/// Default stroke width for all icons.
pub const STROKE_WIDTH: f32 = 2.0;

/// Rendered width and height in pixels.
pub const ICON_SIZE: u32 = 24;

/// Key used when nothing else resolves.
pub const FALLBACK_ICON: &str = "link";

/// Canonical icon key -> inner SVG markup.
const CANONICAL: &[(&str, &str)] = &[
    (
        "link",
        r#"<path d="M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71"/><path d="M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71"/>"#,
    ),
    (
        "mail",
        r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
    ),
    (
        "phone",
        r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>"#,
    ),
    ("message", r#"<path d="M7.9 20A9 9 0 1 0 4 16.1L2 22Z"/>"#),
    (
        "facebook",
        r#"<path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"/>"#,
    ),
    (
        "instagram",
        r#"<rect width="20" height="20" x="2" y="2" rx="5" ry="5"/><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/><line x1="17.5" x2="17.51" y1="6.5" y2="6.5"/>"#,
    ),
    (
        "linkedin",
        r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#,
    ),
    (
        "youtube",
        r#"<path d="M2.5 17a24.12 24.12 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.56 49.56 0 0 1 16.2 0A2 2 0 0 1 21.5 7a24.12 24.12 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.55 49.55 0 0 1-16.2 0A2 2 0 0 1 2.5 17"/><path d="m10 15 5-3-5-3z"/>"#,
    ),
    (
        "twitter",
        r#"<path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"/>"#,
    ),
    (
        "send",
        r#"<path d="m22 2-7 20-4-9-9-4Z"/><path d="M22 2 11 13"/>"#,
    ),
    (
        "music",
        r#"<path d="M9 18V5l12-2v13"/><circle cx="6" cy="18" r="3"/><circle cx="18" cy="16" r="3"/>"#,
    ),
    (
        "heart",
        r#"<path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/>"#,
    ),
    (
        "users",
        r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#,
    ),
    (
        "home",
        r#"<path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/><polyline points="9 22 9 12 15 12 15 22"/>"#,
    ),
    (
        "book",
        r#"<path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"/><path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"/>"#,
    ),
    (
        "file",
        r#"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/><path d="M14 2v4a2 2 0 0 0 2 2h4"/><path d="M10 9H8"/><path d="M16 13H8"/><path d="M16 17H8"/>"#,
    ),
    (
        "shield",
        r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/>"#,
    ),
    (
        "scale",
        r#"<path d="m16 16 3-8 3 8c-.87.65-1.92 1-3 1s-2.13-.35-3-1Z"/><path d="m2 16 3-8 3 8c-.87.65-1.92 1-3 1s-2.13-.35-3-1Z"/><path d="M7 21h10"/><path d="M12 3v18"/><path d="M3 7h2c2 0 5-1 7-2 2 1 5 2 7 2h2"/>"#,
    ),
    (
        "chart",
        r#"<path d="M3 3v18h18"/><path d="M18 17V9"/><path d="M13 17V5"/><path d="M8 17v-3"/>"#,
    ),
    (
        "calendar",
        r#"<rect width="18" height="18" x="3" y="4" rx="2" ry="2"/><line x1="16" x2="16" y1="2" y2="6"/><line x1="8" x2="8" y1="2" y2="6"/><line x1="3" x2="21" y1="10" y2="10"/>"#,
    ),
    (
        "hand",
        r#"<path d="M11 12h2a2 2 0 1 0 0-4h-3c-.6 0-1.1.2-1.4.6L3 14"/><path d="m7 18 1.6-1.4c.3-.4.8-.6 1.4-.6h4c1.1 0 2.1-.4 2.8-1.2l4.6-4.4a2 2 0 0 0-2.75-2.91l-4.2 3.9"/><path d="m2 13 6 6"/>"#,
    ),
    (
        "gift",
        r#"<rect x="3" y="8" width="18" height="4" rx="1"/><path d="M12 8v13"/><path d="M19 12v7a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2v-7"/><path d="M7.5 8a2.5 2.5 0 0 1 0-5A4.8 8 0 0 1 12 8a4.8 8 0 0 1 4.5-5 2.5 2.5 0 0 1 0 5"/>"#,
    ),
    (
        "info",
        r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#,
    ),
    ("check", r#"<path d="M20 6 9 17l-5-5"/>"#),
    (
        "map",
        r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#,
    ),
    (
        "star",
        r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#,
    ),
    (
        "lightbulb",
        r#"<path d="M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5"/><path d="M9 18h6"/><path d="M10 22h4"/>"#,
    ),
    (
        "graduation",
        r#"<path d="M22 10v6M2 10l10-5 10 5-10 5z"/><path d="M6 12v5c3 3 9 3 12 0v-5"/>"#,
    ),
];

/// Convenience or content key -> canonical key. Keys are lowercase.
const ALIASES: &[(&str, &str)] = &[
    // contact and social context
    ("email", "mail"),
    ("e-mail", "mail"),
    ("envelope", "mail"),
    ("tel", "phone"),
    ("telephone", "phone"),
    ("whatsapp", "message"),
    ("chat", "message"),
    ("x", "twitter"),
    ("telegram", "send"),
    ("tiktok", "music"),
    ("website", "link"),
    ("web", "link"),
    ("address", "map"),
    ("location", "map"),
    // content ids
    ("community", "users"),
    ("family", "home"),
    ("families", "home"),
    ("mentoring", "users"),
    ("volunteer", "hand"),
    ("support", "hand"),
    ("help", "hand"),
    ("emotional", "heart"),
    ("values", "heart"),
    ("donate", "gift"),
    ("financial", "gift"),
    ("education", "graduation"),
    ("knowledge", "book"),
    ("story", "book"),
    ("rights", "scale"),
    ("legal", "scale"),
    ("protection", "shield"),
    ("statistics", "chart"),
    ("transparency", "chart"),
    ("orphanweek", "calendar"),
    ("events", "calendar"),
    ("documents", "file"),
    ("document", "file"),
    ("mission", "star"),
    ("vision", "lightbulb"),
    ("about", "info"),
];

/// Canonical lookup table.
static CANONICAL_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| CANONICAL.iter().copied().collect());

/// Alias lookup table.
static ALIAS_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ALIASES.iter().copied().collect());

/// What: Resolve an icon key to its canonical key.
///
/// Inputs:
/// - `key`: Any key; matching ignores case and surrounding whitespace.
///
/// Output:
/// - The canonical key. Precedence: alias table, canonical table, [`FALLBACK_ICON`].
#[must_use]
pub fn canonical_key(key: &str) -> &'static str {
    let key = key.trim().to_lowercase();
    if let Some(target) = ALIAS_TABLE.get(key.as_str()).copied() {
        return target;
    }
    if let Some((canonical, _)) = CANONICAL_TABLE.get_key_value(key.as_str()) {
        return *canonical;
    }
    FALLBACK_ICON
}

/// What: Resolve an icon key to complete SVG markup.
///
/// Output:
/// - Non-empty outline SVG; unknown keys render the generic link icon.
#[must_use]
pub fn resolve_icon(key: &str) -> String {
    let canonical = canonical_key(key);
    let inner = CANONICAL_TABLE
        .get(canonical)
        .copied()
        .unwrap_or_default();
    to_svg(inner)
}

/// What: Wrap inner icon markup in the shared outline convention.
///
/// Inputs:
/// - `inner`: Path data and shapes; any paint attributes are removed.
///
/// Output:
/// - Complete `<svg>` element string.
#[must_use]
pub fn to_svg(inner: &str) -> String {
    let inner = strip_paint_attrs(inner);
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="icon" width="{ICON_SIZE}" height="{ICON_SIZE}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="{STROKE_WIDTH}" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" focusable="false">{inner}</svg>"#
    )
}

/// Paint attributes that would override the outline convention.
const PAINT_ATTRS: &[&str] = &[
    "fill",
    "stroke",
    "stroke-width",
    "stroke-linecap",
    "stroke-linejoin",
];

/// What: Remove paint attributes from inner markup.
fn strip_paint_attrs(inner: &str) -> String {
    let mut out = inner.to_owned();
    for attr in PAINT_ATTRS {
        let needle = format!(" {attr}=\"");
        while let Some(start) = out.find(&needle) {
            let value_start = start + needle.len();
            let Some(len) = out[value_start..].find('"') else {
                break;
            };
            out.replace_range(start..value_start + len + 1, "");
        }
    }
    out
}

/// Every canonical icon key.
pub fn canonical_keys() -> impl Iterator<Item = &'static str> {
    CANONICAL.iter().map(|(k, _)| *k)
}
