//! Supported site languages and their document attributes.

use std::fmt;

/// One of the fixed set of languages the site ships dictionaries for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Hebrew, right-to-left. Hard-coded fallback language.
    #[default]
    Hebrew,
    /// English, left-to-right.
    English,
}

impl Language {
    /// Every supported language, in toggle order.
    pub const ALL: [Self; 2] = [Self::Hebrew, Self::English];

    /// Language used when nothing else resolves.
    pub const FALLBACK: Self = Self::Hebrew;

    /// Two-letter code used in resource paths and the `lang` attribute.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Hebrew => "he",
            Self::English => "en",
        }
    }

    /// Text direction for the `dir` attribute.
    #[must_use]
    pub const fn dir(self) -> &'static str {
        match self {
            Self::Hebrew => "rtl",
            Self::English => "ltr",
        }
    }

    /// The language the toggle button switches to.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Hebrew => Self::English,
            Self::English => Self::Hebrew,
        }
    }

    /// What: Parse a language code.
    ///
    /// Inputs:
    /// - `code`: Code such as `he`, `EN`, `en-US` or `he_IL`
    ///
    /// Output:
    /// - `Some(Language)` for supported codes, `None` otherwise.
    ///
    /// Details:
    /// - Case-insensitive; surrounding whitespace and region subtags are ignored.
    /// - The legacy Hebrew code `iw` is accepted.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "he" | "iw" => Some(Self::Hebrew),
            "en" => Some(Self::English),
            _ => None,
        }
    }

    /// What: Map a document `lang` attribute to a language.
    ///
    /// Details:
    /// - `en` maps to English; anything else (including empty) maps to Hebrew.
    #[must_use]
    pub fn from_document_lang(lang: &str) -> Self {
        if Self::from_code(lang) == Some(Self::English) {
            Self::English
        } else {
            Self::Hebrew
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
