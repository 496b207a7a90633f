//! Dictionary loading from HTTP, disk, or memory.
//!
//! Every call fetches afresh; no source caches documents between calls.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use serde_json::Value;

use crate::content::Dictionary;
use crate::language::Language;

/// Placeholder replaced by the language code in resource templates.
pub const LANG_PLACEHOLDER: &str = "{lang}";

/// Failure to obtain a dictionary. Fatal for the switch that requested it.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The resource could not be reached or read.
    #[error("failed loading {location}: {reason}")]
    Unreachable {
        /// URL or path that was requested.
        location: String,
        /// Transport or I/O failure description.
        reason: String,
    },
    /// The resource answered with a non-success status.
    #[error("failed loading {location} ({status})")]
    Status {
        /// URL or path that was requested.
        location: String,
        /// HTTP-style status code.
        status: u16,
    },
    /// The resource body was not JSON.
    #[error("failed parsing {location}: {source}")]
    Parse {
        /// URL or path that was requested.
        location: String,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

/// Provider of per-language dictionaries.
pub trait DictionarySource {
    /// What: Fetch and parse the dictionary for `language`.
    ///
    /// # Errors
    /// - Returns [`LoadError`] when the resource is unreachable, answers with a
    ///   non-success status, or is not valid JSON.
    fn load(&self, language: Language) -> impl Future<Output = Result<Dictionary, LoadError>> + Send;
}

/// What: Expand a resource template for a language.
///
/// Inputs:
/// - `template`: Path or URL containing `{lang}`
/// - `language`: Language whose code is substituted
///
/// Output:
/// - Concrete location. Templates without the placeholder get `<code>.json` appended
///   as a path segment.
#[must_use]
pub fn resolve_location(template: &str, language: Language) -> String {
    if template.contains(LANG_PLACEHOLDER) {
        template.replace(LANG_PLACEHOLDER, language.code())
    } else {
        format!(
            "{}/{}.json",
            template.trim_end_matches('/'),
            language.code()
        )
    }
}

/// Parse a fetched body, tagging errors with the location.
fn parse_body(location: &str, body: &str) -> Result<Dictionary, LoadError> {
    Dictionary::from_json(body).map_err(|source| LoadError::Parse {
        location: location.to_owned(),
        source,
    })
}

/// Dictionary source backed by HTTP(S) GET requests.
#[derive(Debug, Clone)]
pub struct HttpDictionarySource {
    client: reqwest::Client,
    template: String,
}

impl HttpDictionarySource {
    /// What: Create a source for a URL template such as `https://site/local/{lang}.json`.
    ///
    /// Details:
    /// - Uses a 15s request timeout; falls back to a default client if the builder fails.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .user_agent(concat!("mishpacha/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            template: template.into(),
        }
    }
}

impl DictionarySource for HttpDictionarySource {
    async fn load(&self, language: Language) -> Result<Dictionary, LoadError> {
        let url = resolve_location(&self.template, language);
        tracing::debug!(url = %url, lang = %language, "[Loader] Fetching dictionary");
        let resp = self
            .client
            .get(&url)
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| LoadError::Unreachable {
                location: url.clone(),
                reason: e.to_string(),
            })?;
        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "[Loader] Non-success status");
            return Err(LoadError::Status {
                location: url,
                status: status.as_u16(),
            });
        }
        let body = resp.text().await.map_err(|e| LoadError::Unreachable {
            location: url.clone(),
            reason: e.to_string(),
        })?;
        tracing::debug!(url = %url, bytes = body.len(), "[Loader] Dictionary fetched");
        parse_body(&url, &body)
    }
}

/// Dictionary source reading JSON files from disk.
#[derive(Debug, Clone)]
pub struct FileDictionarySource {
    template: String,
}

impl FileDictionarySource {
    /// What: Create a source for a path template such as `local/{lang}.json`.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl DictionarySource for FileDictionarySource {
    async fn load(&self, language: Language) -> Result<Dictionary, LoadError> {
        let path = resolve_location(&self.template, language);
        tracing::debug!(path = %path, lang = %language, "[Loader] Reading dictionary");
        let body = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| LoadError::Unreachable {
                location: path.clone(),
                reason: e.to_string(),
            })?;
        parse_body(&path, &body)
    }
}

/// Source chosen from a template's scheme.
#[derive(Debug, Clone)]
pub enum TemplateDictionarySource {
    /// `http://` or `https://` templates.
    Http(HttpDictionarySource),
    /// Everything else, read from disk.
    File(FileDictionarySource),
}

impl TemplateDictionarySource {
    /// What: Pick HTTP for `http(s)://` templates and the file system otherwise.
    #[must_use]
    pub fn from_template(template: &str) -> Self {
        let lowered = template.trim_start().to_ascii_lowercase();
        if lowered.starts_with("http://") || lowered.starts_with("https://") {
            Self::Http(HttpDictionarySource::new(template.trim()))
        } else {
            Self::File(FileDictionarySource::new(template.trim()))
        }
    }
}

impl DictionarySource for TemplateDictionarySource {
    async fn load(&self, language: Language) -> Result<Dictionary, LoadError> {
        match self {
            Self::Http(source) => source.load(language).await,
            Self::File(source) => source.load(language).await,
        }
    }
}

/// Dictionary source holding documents in memory.
///
/// Languages without a document fail with status 404, like a missing resource.
#[derive(Debug, Clone, Default)]
pub struct MemoryDictionarySource {
    documents: HashMap<Language, Value>,
}

impl MemoryDictionarySource {
    /// Empty source; every load fails.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, language: Language, document: Value) -> Self {
        self.insert(language, document);
        self
    }

    /// What: Add or replace the document for `language`.
    pub fn insert(&mut self, language: Language, document: Value) {
        self.documents.insert(language, document);
    }

    /// What: Remove the document for `language`, making later loads fail.
    pub fn remove(&mut self, language: Language) {
        self.documents.remove(&language);
    }
}

impl DictionarySource for MemoryDictionarySource {
    async fn load(&self, language: Language) -> Result<Dictionary, LoadError> {
        self.documents
            .get(&language)
            .cloned()
            .map(Dictionary::from_value)
            .ok_or_else(|| LoadError::Status {
                location: format!("memory:{language}"),
                status: 404,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    /// What: Templates substitute the code or append `<code>.json`.
    fn resolve_location_templates() {
        assert_eq!(
            resolve_location("local/{lang}.json", Language::English),
            "local/en.json"
        );
        assert_eq!(
            resolve_location("https://x.org/i18n/", Language::Hebrew),
            "https://x.org/i18n/he.json"
        );
    }

    #[tokio::test]
    /// What: File source reads, fails on missing files, and reports bad JSON.
    ///
    /// Inputs:
    /// - Temp dir with a valid `he.json` and an invalid `en.json`.
    ///
    /// Output:
    /// - Hebrew loads; English fails with `Parse`; a missing dir fails with `Unreachable`.
    async fn file_source_loads_and_errors() {
        let dir = TempDir::new().expect("temp dir");
        fs::write(dir.path().join("he.json"), r#"{"hero":{"title":"שלום"}}"#).expect("write he");
        fs::write(dir.path().join("en.json"), "{not json").expect("write en");
        let template = format!("{}/{{lang}}.json", dir.path().display());
        let source = FileDictionarySource::new(template);

        let he = source.load(Language::Hebrew).await.expect("hebrew loads");
        assert_eq!(he.lookup_text("hero.title").as_deref(), Some("שלום"));

        let err = source.load(Language::English).await.expect_err("bad json");
        assert!(matches!(err, LoadError::Parse { .. }));

        let missing = FileDictionarySource::new(format!("{}/nope/{{lang}}.json", dir.path().display()));
        let err = missing.load(Language::Hebrew).await.expect_err("missing file");
        assert!(matches!(err, LoadError::Unreachable { .. }));
        assert!(err.to_string().contains("failed loading"));
    }

    #[tokio::test]
    /// What: Every file load re-reads the file (no caching across calls).
    async fn file_source_does_not_cache() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("en.json");
        fs::write(&path, r#"{"hero":{"title":"One"}}"#).expect("write first");
        let source = FileDictionarySource::new(format!("{}/{{lang}}.json", dir.path().display()));
        let first = source.load(Language::English).await.expect("first load");
        fs::write(&path, r#"{"hero":{"title":"Two"}}"#).expect("write second");
        let second = source.load(Language::English).await.expect("second load");
        assert_eq!(first.lookup_text("hero.title").as_deref(), Some("One"));
        assert_eq!(second.lookup_text("hero.title").as_deref(), Some("Two"));
    }

    #[tokio::test]
    /// What: Memory source returns 404 for absent languages.
    async fn memory_source_missing_language() {
        let source = MemoryDictionarySource::new().with(Language::Hebrew, serde_json::json!({}));
        assert!(source.load(Language::Hebrew).await.is_ok());
        let err = source.load(Language::English).await.expect_err("absent");
        assert!(matches!(err, LoadError::Status { status: 404, .. }));
    }

    #[test]
    /// What: Template scheme selects the source kind.
    fn template_source_by_scheme() {
        assert!(matches!(
            TemplateDictionarySource::from_template("https://x.org/{lang}.json"),
            TemplateDictionarySource::Http(_)
        ));
        assert!(matches!(
            TemplateDictionarySource::from_template(" HTTP://x.org/{lang}.json"),
            TemplateDictionarySource::Http(_)
        ));
        assert!(matches!(
            TemplateDictionarySource::from_template("local/{lang}.json"),
            TemplateDictionarySource::File(_)
        ));
    }
}
