//! Language switching: round trips, persistence, sequencing and failures.

use mishpacha::page::Effect;
use mishpacha::session::{FATAL_ALERT, LanguageStore, MemoryLanguageStore, SwitchOutcome};
use mishpacha::Language;

use super::common::{config, session_with, started, text_of};

#[tokio::test]
/// What: Switching away and back restores the exact original rendering.
async fn round_trip_restores_rendering() {
    let mut session = started().await;
    let original = session.to_html();
    assert!(!text_of(&session, "navLinks").is_empty());

    session.switch_to(Language::English).await.expect("to en");
    let english = session.to_html();
    assert_ne!(english, original);
    assert!(english.contains("No child alone"));
    let dom = session.page().dom();
    let html = dom.html_element().expect("html element");
    assert_eq!(dom.attr(html, "lang"), Some("en"));
    assert_eq!(dom.attr(html, "dir"), Some("ltr"));

    session.switch_to(Language::Hebrew).await.expect("back to he");
    assert_eq!(session.to_html(), original);
}

#[tokio::test]
/// What: The toggle switches to the other language and persists it.
async fn toggle_switches_and_persists() {
    let mut session = started().await;
    assert_eq!(session.current(), Language::Hebrew);
    assert_eq!(text_of(&session, "langToggle"), "EN");

    let effects = session.click_id("langToggle").await;
    assert_eq!(effects, vec![Effect::SwitchLanguage(Language::English)]);
    assert_eq!(session.current(), Language::English);
    assert_eq!(session.store().load().as_deref(), Some("en"));
    assert_eq!(text_of(&session, "langToggle"), "עב");
    assert_eq!(session.page().dom().title().as_deref(), Some("Mishpacha | Orphan support"));

    session.click_id("langToggle").await;
    assert_eq!(session.current(), Language::Hebrew);
}

#[tokio::test]
/// What: Startup honors the persisted language over the configured default.
async fn startup_uses_persisted_language() {
    let mut cfg = config();
    cfg.default_lang = Some("he".into());
    let mut session = session_with(cfg, MemoryLanguageStore::with("en"));
    assert_eq!(session.start().await.expect("start"), Language::English);
    assert_eq!(text_of(&session, "heroCtas"), "I need helpI want to volunteerDonate");
}

#[tokio::test]
/// What: A slow result from a superseded switch never overwrites the newer one.
async fn overlapping_switches_last_started_wins() {
    let mut session = started().await;
    let english = session.begin_switch(Language::English);
    let hebrew = session.begin_switch(Language::Hebrew);

    let he = mishpacha::content::Dictionary::from_value(super::common::fixture_json("he.json"));
    let en = mishpacha::content::Dictionary::from_value(super::common::fixture_json("en.json"));
    assert_eq!(session.commit(hebrew, Ok(he)).expect("apply"), SwitchOutcome::Applied);
    assert_eq!(session.commit(english, Ok(en)).expect("stale"), SwitchOutcome::Stale);

    assert_eq!(session.current(), Language::Hebrew);
    assert!(!session.to_html().contains("No child alone"));
}

#[tokio::test]
/// What: A failed load keeps the page intact and raises the fatal alert.
async fn failed_load_keeps_previous_page() {
    let mut session = started().await;
    session.source_mut().remove(Language::English);
    let before = session.to_html();

    let effects = session.click_id("langToggle").await;
    assert_eq!(effects.last(), Some(&Effect::Alert(FATAL_ALERT.into())));
    assert_eq!(session.to_html(), before);
    assert_eq!(session.current(), Language::Hebrew);
}

#[tokio::test]
/// What: Startup without any dictionary is a load error and renders nothing.
async fn startup_failure_is_reported() {
    let mut session = session_with(config(), MemoryLanguageStore::new());
    session.source_mut().remove(Language::Hebrew);
    let before = session.to_html();
    assert!(session.start().await.is_err());
    assert_eq!(session.to_html(), before);
}
