//! Text binding: scalar lookups for static placeholders and document metadata.

use crate::chrome::LANG_TOGGLE_ID;
use crate::content::Dictionary;
use crate::dom::Dom;
use crate::language::Language;

/// Attribute holding a placeholder's dotted dictionary key.
pub const I18N_ATTR: &str = "data-i18n";

/// Key of the language toggle's label.
pub const LANG_TOGGLE_KEY: &str = "top.langToggle";

/// What: Apply a dictionary to every placeholder and to document metadata.
///
/// Inputs:
/// - `dom`: Page document
/// - `dictionary`: Dictionary of the language being shown
/// - `language`: That language, used when the dictionary has no `meta` block
/// - `fallback_title`: Title used when `meta.title` is absent
///
/// Output:
/// - Number of placeholders whose text was replaced.
///
/// Details:
/// - A key that does not resolve leaves the element's previous text untouched.
/// - With a `meta` block, `lang`/`dir` come from it (each falling back to the
///   language); without one they come from the language alone.
pub fn apply(dom: &mut Dom, dictionary: &Dictionary, language: Language, fallback_title: &str) -> usize {
    let mut bound = 0;
    for node in dom.select_attr(I18N_ATTR) {
        let Some(key) = dom.attr(node, I18N_ATTR).map(str::trim).map(ToOwned::to_owned) else {
            continue;
        };
        if let Some(text) = dictionary.lookup_text(&key) {
            dom.set_text(node, &text);
            bound += 1;
        } else {
            tracing::trace!(key = %key, "[Binder] Key missing, text kept");
        }
    }
    if let (Some(toggle), Some(label)) = (
        dom.by_id(LANG_TOGGLE_ID),
        dictionary.lookup_text(LANG_TOGGLE_KEY),
    ) {
        dom.set_text(toggle, &label);
    }

    let meta = dictionary.meta();
    let title = meta
        .as_ref()
        .and_then(|m| m.title.as_deref())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(fallback_title);
    dom.set_title(title);

    let (lang, dir) = meta.map_or_else(
        || (language.code().to_owned(), language.dir().to_owned()),
        |m| {
            (
                m.lang.unwrap_or_else(|| language.code().to_owned()),
                m.dir.unwrap_or_else(|| language.dir().to_owned()),
            )
        },
    );
    if let Some(html) = dom.html_element() {
        dom.set_attr(html, "lang", &lang);
        dom.set_attr(html, "dir", &dir);
    }
    tracing::debug!(bound, lang = %lang, "[Binder] Applied text bindings");
    bound
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PAGE: &str = r#"<html lang="he" dir="rtl"><head><title>old</title></head><body>
        <h1 id="h" data-i18n="hero.title">כותרת</h1>
        <p id="p" data-i18n="hero.missing">kept</p>
        <span id="n" data-i18n="stats.0">x</span>
        <button id="langToggle">EN</button></body></html>"#;

    #[test]
    /// What: Resolved keys replace text; unresolved keys keep the prior text.
    fn binds_and_keeps() {
        let mut dom = Dom::parse(PAGE);
        let dictionary = Dictionary::from_value(json!({
            "meta": {"title": "Mishpacha", "lang": "en", "dir": "ltr"},
            "hero": {"title": "Family"},
            "stats": [42],
            "top": {"langToggle": "עב"}
        }));
        assert_eq!(apply(&mut dom, &dictionary, Language::English, "fallback"), 2);
        assert_eq!(dom.text(dom.by_id("h").expect("h")), "Family");
        assert_eq!(dom.text(dom.by_id("p").expect("p")), "kept");
        assert_eq!(dom.text(dom.by_id("n").expect("n")), "42");
        assert_eq!(dom.text(dom.by_id("langToggle").expect("toggle")), "עב");
        assert_eq!(dom.title().as_deref(), Some("Mishpacha"));
        let html = dom.html_element().expect("html");
        assert_eq!(dom.attr(html, "lang"), Some("en"));
        assert_eq!(dom.attr(html, "dir"), Some("ltr"));
    }

    #[test]
    /// What: Without `meta` the language decides attributes and the title falls back.
    fn without_meta() {
        let mut dom = Dom::parse(PAGE);
        apply(&mut dom, &Dictionary::default(), Language::English, "Mishpacha");
        assert_eq!(dom.title().as_deref(), Some("Mishpacha"));
        let html = dom.html_element().expect("html");
        assert_eq!(dom.attr(html, "lang"), Some("en"));
        assert_eq!(dom.attr(html, "dir"), Some("ltr"));
        assert_eq!(dom.text(dom.by_id("h").expect("h")), "כותרת");
    }
}
