//! Library entry for Mishpacha: the dictionary-driven renderer of the bilingual
//! site, exposed for the binary and integration tests.

pub mod accordion;
pub mod args;
pub mod binder;
pub mod chrome;
pub mod config;
pub mod content;
pub mod dom;
pub mod icons;
pub mod language;
pub mod page;
pub mod paths;
pub mod render;
pub mod session;
pub mod util;

pub use config::SiteConfig;
pub use content::Dictionary;
pub use language::Language;
pub use page::{Effect, Page};
pub use session::LanguageSession;

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize tests that mutate environment variables.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
