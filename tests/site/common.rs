//! Shared fixtures for site tests.

use mishpacha::config::Forms;
use mishpacha::content::loader::MemoryDictionarySource;
use mishpacha::session::MemoryLanguageStore;
use mishpacha::{Language, LanguageSession, Page, SiteConfig};

pub type TestSession = LanguageSession<MemoryDictionarySource, MemoryLanguageStore>;

pub const DONATE_URL: &str = "https://pay.example.org/mishpacha";
pub const FACEBOOK_URL: &str = "https://facebook.com/mishpacha";

/// What: Read a file from `tests/fixtures`.
pub fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("fixture {path}: {e}"))
}

/// What: Parse a fixture as JSON.
pub fn fixture_json(name: &str) -> serde_json::Value {
    serde_json::from_str(&fixture(name)).expect("fixture is valid JSON")
}

/// Memory source holding both fixture dictionaries.
pub fn source() -> MemoryDictionarySource {
    MemoryDictionarySource::new()
        .with(Language::Hebrew, fixture_json("he.json"))
        .with(Language::English, fixture_json("en.json"))
}

/// Site config with forms and one social profile.
pub fn config() -> SiteConfig {
    let mut config = SiteConfig {
        forms: Forms {
            volunteer: Some("https://forms.example.org/volunteer".into()),
            donate: Some(DONATE_URL.into()),
            help: Some("https://forms.example.org/help".into()),
            contact: None,
        },
        ..SiteConfig::default()
    };
    config.social.insert("facebook".into(), FACEBOOK_URL.into());
    config
        .assets
        .images
        .insert("hero".into(), "img/hero.jpg".into());
    config
}

/// What: Session over the fixture page, not yet started.
pub fn session_with(config: SiteConfig, store: MemoryLanguageStore) -> TestSession {
    LanguageSession::new(Page::parse(&fixture("index.html")), config, source(), store)
}

/// What: Started session with default fixtures.
pub async fn started() -> TestSession {
    let mut session = session_with(config(), MemoryLanguageStore::new());
    session.start().await.expect("startup renders");
    session
}

/// Text content of the element with `id`.
pub fn text_of(session: &TestSession, id: &str) -> String {
    let dom = session.page().dom();
    dom.by_id(id).map(|n| dom.text(n)).unwrap_or_default()
}

/// Number of element children of the element with `id`.
pub fn child_count(session: &TestSession, id: &str) -> usize {
    let dom = session.page().dom();
    dom.by_id(id).map_or(0, |n| dom.children(n).len())
}
