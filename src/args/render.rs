//! Render command: build a session from the arguments and write the page.

use std::path::{Path, PathBuf};

use crate::args::Args;
use crate::config::{ConfigError, SiteConfig};
use crate::content::loader::{LoadError, TemplateDictionarySource};
use crate::language::Language;
use crate::page::{Page, PageError};
use crate::paths;
use crate::session::{FileLanguageStore, LanguageSession};

/// Failure of a render run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Page skeleton could not be read.
    #[error(transparent)]
    Page(#[from] PageError),
    /// A dictionary could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// `--lang` named an unsupported language.
    #[error("unsupported language: {0}")]
    UnknownLanguage(String),
    /// `--all` was given without `--out`.
    #[error("--all requires --out <dir>")]
    MissingOutDir,
    /// Output could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Output path.
        path: String,
        /// I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// What: Load the site configuration named by the arguments.
///
/// Output:
/// - `--config` if given, else a `config.json`/`config.toml` in the user config
///   dir, else defaults.
///
/// # Errors
/// - Returns [`ConfigError`] when a config file exists but cannot be read or parsed.
pub fn load_config(args: &Args) -> Result<SiteConfig, ConfigError> {
    match args.config.clone().or_else(paths::resolve_site_config_path) {
        Some(path) => SiteConfig::load(&path),
        None => {
            tracing::info!("[Config] No site config found, using defaults");
            Ok(SiteConfig::default())
        }
    }
}

fn write_output(path: &Path, html: &str) -> Result<(), RunError> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir).map_err(|source| RunError::Write {
            path: dir.display().to_string(),
            source,
        })?;
    }
    std::fs::write(path, html).map_err(|source| RunError::Write {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = html.len(), "[Render] Wrote page");
    Ok(())
}

/// What: Run the render command.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
///
/// Output:
/// - The serialized page when no output path was given, `None` otherwise.
///
/// # Errors
/// - Returns [`RunError`] for config, skeleton, dictionary or write failures.
///
/// Details:
/// - Startup renders the initial language (persisted, configured, fallback).
/// - `--lang` then switches, which also persists the choice.
/// - `--all` renders each language in turn into `<out>/index.<code>.html`
///   without changing the persisted language.
pub async fn run(args: &Args) -> Result<Option<String>, RunError> {
    let config = load_config(args)?;
    let template = args
        .content
        .clone()
        .unwrap_or_else(|| config.content.path_template.clone());
    let source = TemplateDictionarySource::from_template(&template);
    let state_path = args.state_file.clone().unwrap_or_else(paths::state_file);
    let store = FileLanguageStore::new(state_path, config.storage_key.clone());
    let page = Page::load(&args.page)?;

    let mut session = LanguageSession::new(page, config, source, store);
    session.start().await?;

    if let Some(code) = args.lang.as_deref() {
        let language = Language::from_code(code).ok_or_else(|| RunError::UnknownLanguage(code.to_owned()))?;
        session.switch_to(language).await?;
    }

    if args.all {
        let out_dir = args.out.clone().ok_or(RunError::MissingOutDir)?;
        for language in Language::ALL {
            session.render_unpersisted(language).await?;
            let path: PathBuf = out_dir.join(format!("index.{}.html", language.code()));
            write_output(&path, &session.to_html())?;
        }
        return Ok(None);
    }

    match &args.out {
        Some(path) => {
            write_output(path, &session.to_html())?;
            Ok(None)
        }
        None => Ok(Some(session.to_html())),
    }
}
