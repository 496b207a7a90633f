//! Site configuration: external links, assets, defaults.
//!
//! Loaded once at startup from `config.json` (or a `.toml` equivalent). Every
//! field is optional; a missing file section leaves the matching page element
//! untouched.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Default resource template for dictionaries.
pub const DEFAULT_CONTENT_TEMPLATE: &str = "local/{lang}.json";

/// Default persisted-language key.
pub const DEFAULT_STORAGE_KEY: &str = "mishpacha_lang";

/// Title used when the dictionary has no `meta.title`.
pub const DEFAULT_SITE_TITLE: &str = "Mishpacha";

/// Failure to read or parse the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Config path.
        path: String,
        /// I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The JSON was invalid.
    #[error("failed to parse config {path}: {source}")]
    Json {
        /// Config path.
        path: String,
        /// Parse error.
        #[source]
        source: serde_json::Error,
    },
    /// The TOML was invalid.
    #[error("failed to parse config {path}: {source}")]
    Toml {
        /// Config path.
        path: String,
        /// Parse error.
        #[source]
        source: toml::de::Error,
    },
}

/// External form URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Forms {
    /// Volunteer sign-up form.
    pub volunteer: Option<String>,
    /// Donation platform.
    pub donate: Option<String>,
    /// Request-help form.
    pub help: Option<String>,
    /// General contact form.
    pub contact: Option<String>,
}

/// Media assets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Assets {
    /// Embed URL for the explainer video.
    pub ai_video_youtube_embed: Option<String>,
    /// Image slot key -> image URL.
    pub images: HashMap<String, String>,
}

/// Donation legal-gate switch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonationDisclaimer {
    /// Show the multi-checkbox gate in front of the proceed button.
    pub enabled: bool,
}

/// Dictionary resource settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentConfig {
    /// Path or URL template containing `{lang}`.
    pub path_template: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path_template: DEFAULT_CONTENT_TEMPLATE.to_owned(),
        }
    }
}

/// Whole-site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Configured default language code.
    pub default_lang: Option<String>,
    /// Dictionary resource settings.
    pub content: ContentConfig,
    /// Persisted-language key.
    pub storage_key: String,
    /// Preload all dictionaries at startup to validate the initial language.
    pub preload_languages: bool,
    /// Title used when the dictionary has none.
    pub site_title: String,
    /// External forms.
    pub forms: Forms,
    /// Canonical social key -> profile URL.
    pub social: HashMap<String, String>,
    /// Media assets.
    pub assets: Assets,
    /// Donation legal gate.
    pub donation_disclaimer: DonationDisclaimer,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_lang: None,
            content: ContentConfig::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            preload_languages: false,
            site_title: DEFAULT_SITE_TITLE.to_owned(),
            forms: Forms::default(),
            social: HashMap::new(),
            assets: Assets::default(),
            donation_disclaimer: DonationDisclaimer::default(),
        }
    }
}

impl SiteConfig {
    /// What: Load configuration from a JSON or TOML file.
    ///
    /// Inputs:
    /// - `path`: File path; a `.toml` extension selects TOML, anything else JSON.
    ///
    /// Output:
    /// - Parsed configuration with defaults for absent fields.
    ///
    /// # Errors
    /// - Returns [`ConfigError::Read`] when the file cannot be read.
    /// - Returns [`ConfigError::Json`] / [`ConfigError::Toml`] when parsing fails.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let shown = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: shown.clone(),
            source,
        })?;
        let is_toml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("toml"));
        let config = if is_toml {
            Self::from_toml_str(&contents).map_err(|source| ConfigError::Toml {
                path: shown.clone(),
                source,
            })?
        } else {
            Self::from_json_str(&contents).map_err(|source| ConfigError::Json {
                path: shown.clone(),
                source,
            })?
        };
        tracing::debug!(
            path = %shown,
            social = config.social.len(),
            images = config.assets.images.len(),
            "[Config] Loaded site config"
        );
        Ok(config)
    }

    /// What: Parse configuration from JSON text.
    ///
    /// # Errors
    /// - Returns the `serde_json` error for malformed input.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// What: Parse configuration from TOML text.
    ///
    /// # Errors
    /// - Returns the `toml` error for malformed input.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// What: The configured default language, if it names a supported one.
    #[must_use]
    pub fn default_language(&self) -> Option<Language> {
        self.default_lang.as_deref().and_then(Language::from_code)
    }

    /// What: Profile URL for a canonical social key, ignoring blank entries.
    #[must_use]
    pub fn social_url(&self, key: &str) -> Option<&str> {
        self.social
            .get(key)
            .map(String::as_str)
            .map(str::trim)
            .filter(|u| !u.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    /// What: The original `config.json` shape parses with camelCase keys.
    fn parses_site_config_json() {
        let config = SiteConfig::from_json_str(
            r#"{
                "defaultLang": "en",
                "forms": {"volunteer": "https://forms/v", "donate": "https://pay/d"},
                "social": {"facebook": "https://fb/x", "youtube": "  "},
                "assets": {"aiVideoYoutubeEmbed": "https://yt/embed/1", "images": {"hero": "img/hero.jpg"}},
                "donationDisclaimer": {"enabled": true}
            }"#,
        )
        .expect("valid config");
        assert_eq!(config.default_language(), Some(Language::English));
        assert_eq!(config.forms.donate.as_deref(), Some("https://pay/d"));
        assert_eq!(config.forms.help, None);
        assert_eq!(config.social_url("facebook"), Some("https://fb/x"));
        assert_eq!(config.social_url("youtube"), None);
        assert!(config.donation_disclaimer.enabled);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.content.path_template, DEFAULT_CONTENT_TEMPLATE);
        assert_eq!(config.assets.images.get("hero").map(String::as_str), Some("img/hero.jpg"));
    }

    #[test]
    /// What: TOML files are selected by extension; JSON errors are typed.
    fn load_by_extension() {
        let dir = TempDir::new().expect("temp dir");
        let toml_path = dir.path().join("site.toml");
        std::fs::write(
            &toml_path,
            "defaultLang = \"he\"\npreloadLanguages = true\n[forms]\nhelp = \"https://forms/h\"\n",
        )
        .expect("write toml");
        let config = SiteConfig::load(&toml_path).expect("toml loads");
        assert_eq!(config.default_language(), Some(Language::Hebrew));
        assert!(config.preload_languages);
        assert_eq!(config.forms.help.as_deref(), Some("https://forms/h"));

        let json_path = dir.path().join("config.json");
        std::fs::write(&json_path, "{oops").expect("write json");
        assert!(matches!(
            SiteConfig::load(&json_path),
            Err(ConfigError::Json { .. })
        ));
        assert!(matches!(
            SiteConfig::load(&dir.path().join("missing.json")),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    /// What: Unsupported default languages are ignored.
    fn unsupported_default_language() {
        let config = SiteConfig {
            default_lang: Some("fr".into()),
            ..SiteConfig::default()
        };
        assert_eq!(config.default_language(), None);
    }
}
