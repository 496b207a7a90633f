//! Section rendering through full render passes.

use mishpacha::accordion::{AccordionState, state};
use mishpacha::chrome::menu;
use mishpacha::content::loader::MemoryDictionarySource;
use mishpacha::session::MemoryLanguageStore;
use mishpacha::{Language, LanguageSession, Page};
use serde_json::json;

use super::common::{child_count, config, fixture, started, text_of};

#[tokio::test]
/// What: Re-rendering replaces children; nothing from the previous language remains.
async fn rerender_leaves_no_stale_nodes() {
    let mut session = started().await;
    assert_eq!(child_count(&session, "contactMethods"), 3);
    assert_eq!(child_count(&session, "orphanWeekDays"), 2);
    assert_eq!(child_count(&session, "donateAllocation"), 3);

    session.switch_to(Language::English).await.expect("to en");
    assert_eq!(child_count(&session, "contactMethods"), 2);
    assert_eq!(child_count(&session, "orphanWeekDays"), 1);
    assert_eq!(child_count(&session, "donateAllocation"), 1);
    assert_eq!(child_count(&session, "storyContent"), 2);
    assert!(!session.to_html().contains("אף ילד לא לבד"));
}

#[tokio::test]
/// What: A sparse dictionary renders without failing and leaves placeholders alone.
async fn sparse_dictionary_degrades_gracefully() {
    let source = MemoryDictionarySource::new().with(
        Language::Hebrew,
        json!({
            "hero": {"title": "רק כותרת", "primaryCtas": [{"label": "למעלה"}]},
            "rights": {"items": [{"label": "זכות"}]},
            "orphanWeek": {"days": [{"title": "יום"}]},
            "contact": {"methods": [{"type": "email"}], "social": ["טיקטוק"]}
        }),
    );
    let mut session = LanguageSession::new(
        Page::parse(&fixture("index.html")),
        config(),
        source,
        MemoryLanguageStore::new(),
    );
    session.start().await.expect("start");

    assert!(text_of(&session, "hero").contains("רק כותרת"));
    assert!(text_of(&session, "hero").contains("תת כותרת"));
    assert_eq!(child_count(&session, "aboutPillars"), 0);
    assert_eq!(child_count(&session, "contactMethods"), 0);
    assert_eq!(child_count(&session, "contactSocial"), 1);
    assert_eq!(text_of(&session, "rightsList"), "זכות");
    let dom = session.page().dom();
    let cta = dom.children(dom.by_id("heroCtas").expect("ctas"))[0];
    assert_eq!(dom.attr(cta, "href"), Some("#top"));
    assert_eq!(dom.title().as_deref(), Some("Mishpacha"));
}

#[tokio::test]
/// What: Orphan-week widgets toggle, stay single-bound, and reset on switch.
async fn orphan_week_accordion() {
    let mut session = started().await;
    let trigger = session
        .page()
        .dom()
        .by_id("orphan-day-0-trigger")
        .expect("trigger");
    assert_eq!(session.page().handler_count(trigger), 1);

    session.click(trigger).await;
    assert_eq!(state(session.page().dom(), trigger), AccordionState::Open);
    let panel = session.page().dom().by_id("orphan-day-0").expect("panel");
    assert!(!session.page().dom().has_attr(panel, "hidden"));
    session.click(trigger).await;
    assert_eq!(state(session.page().dom(), trigger), AccordionState::Closed);
    session.click(trigger).await;

    session.switch_to(Language::English).await.expect("to en");
    session.switch_to(Language::Hebrew).await.expect("to he");
    let trigger = session
        .page()
        .dom()
        .by_id("orphan-day-0-trigger")
        .expect("new trigger");
    assert_eq!(state(session.page().dom(), trigger), AccordionState::Closed);
    assert_eq!(session.page().handler_count(trigger), 1);
    assert_eq!(text_of(&session, "orphan-day-0"), "יום פתיחהמה עושיםמדליקים נרמתקשרים");
}

#[tokio::test]
/// What: Chrome runs alongside rendering: images, video note, menu, back-to-top.
async fn chrome_after_render() {
    let mut session = started().await;
    let dom = session.page().dom();
    let img = dom.select_attr("data-img")[0];
    assert_eq!(dom.attr(img, "src"), Some("img/hero.jpg"));
    assert!(dom.has_attr(dom.by_id("aiVideoBox").expect("box"), "hidden"));
    assert!(!dom.has_attr(dom.by_id("aiVideoNote").expect("note"), "hidden"));

    session.click_id("menuToggle").await;
    assert!(menu::is_open(session.page().dom()));
    session.switch_to(Language::English).await.expect("to en");
    assert!(!menu::is_open(session.page().dom()));

    session.click_id("menuToggle").await;
    let link = session.page().dom().select_class("nav-link")[0];
    let effects = session.click(link).await;
    assert!(!menu::is_open(session.page().dom()));
    assert_eq!(effects, vec![mishpacha::Effect::Navigate("#about".into())]);

    session.page_mut().scroll(800);
    let back = session.page().dom().by_id("backToTop").expect("back");
    assert!(session.page().dom().has_class(back, "visible"));
    assert_eq!(
        session.click(back).await,
        vec![mishpacha::Effect::ScrollTo("top".into())]
    );
}

#[tokio::test]
/// What: Hero CTAs lead to forms or in-page sections by id.
async fn hero_cta_destinations() {
    let session = started().await;
    let dom = session.page().dom();
    let ctas = dom.children(dom.by_id("heroCtas").expect("ctas"));
    assert_eq!(dom.attr(ctas[0], "href"), Some("https://forms.example.org/help"));
    assert_eq!(dom.attr(ctas[0], "rel"), Some("noopener noreferrer"));
    assert_eq!(dom.attr(ctas[1], "href"), Some("https://forms.example.org/volunteer"));
    assert_eq!(dom.attr(ctas[2], "href"), Some("#donate"));
}
