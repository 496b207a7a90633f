//! Donation consent gate and legal gate.

use mishpacha::page::Effect;
use mishpacha::session::MemoryLanguageStore;
use mishpacha::Language;

use super::common::{DONATE_URL, config, session_with, started};

#[tokio::test]
/// What: Unchecked consent shows the dictionary alert and opens nothing.
async fn unchecked_consent_alerts_with_dictionary_text() {
    let mut session = started().await;
    session.switch_to(Language::English).await.expect("to en");

    let effects = session.click_id("donateNow").await;
    assert_eq!(effects, vec![Effect::Alert("Please accept".into())]);
    assert!(!effects.iter().any(|e| matches!(e, Effect::OpenWindow { .. })));

    session.switch_to(Language::Hebrew).await.expect("to he");
    assert_eq!(
        session.click_id("donateNow").await,
        vec![Effect::Alert("יש לאשר את התנאים לפני התרומה".into())]
    );
}

#[tokio::test]
/// What: Checked consent opens the donation platform without opener.
async fn checked_consent_opens_donation() {
    let mut session = started().await;
    let consent = session.page().dom().by_id("donateConsent").expect("consent");
    session.page_mut().set_checked(consent, true);
    assert_eq!(
        session.click_id("donateNow").await,
        vec![Effect::OpenWindow {
            url: DONATE_URL.into(),
            no_opener: true
        }]
    );
}

#[tokio::test]
/// What: With the disclaimer enabled, proceeding requires every legal box.
async fn legal_gate_enabled() {
    let mut cfg = config();
    cfg.donation_disclaimer.enabled = true;
    let mut session = session_with(cfg, MemoryLanguageStore::new());
    session.start().await.expect("start");

    assert!(session.click_id("donateProceed").await.is_empty());
    for id in ["donateChk1", "donateChk2", "donateChk3"] {
        let check = session.page().dom().by_id(id).expect("check");
        session.page_mut().set_checked(check, true);
    }
    assert_eq!(
        session.click_id("donateProceed").await,
        vec![Effect::OpenWindow {
            url: DONATE_URL.into(),
            no_opener: true
        }]
    );
}

#[tokio::test]
/// What: With the disclaimer disabled, the legal box is hidden.
async fn legal_gate_disabled() {
    let session = started().await;
    let dom = session.page().dom();
    assert!(dom.has_attr(dom.by_id("donationLegalBox").expect("box"), "hidden"));
}
