//! Contact rows and social links.

use mishpacha::Language;
use mishpacha::icons::{SocialKey, normalize_social_key};

use super::common::{FACEBOOK_URL, TestSession, started};

fn social_links(session: &TestSession) -> Vec<(Option<String>, Option<String>)> {
    let dom = session.page().dom();
    dom.select_class("social-link")
        .into_iter()
        .map(|n| {
            (
                dom.attr(n, "data-social").map(ToOwned::to_owned),
                dom.attr(n, "href").map(ToOwned::to_owned),
            )
        })
        .collect()
}

#[tokio::test]
/// What: The mail link carries the subject and body of the rendered language.
async fn mailto_carries_subject_and_body() {
    let mut session = started().await;
    session.switch_to(Language::English).await.expect("to en");
    let dom = session.page().dom();
    let mail = dom.select(|el| el.attr("href").is_some_and(|h| h.starts_with("mailto:")));
    assert_eq!(mail.len(), 1);
    assert_eq!(
        dom.attr(mail[0], "href"),
        Some("mailto:info@mishpacha.org?subject=Hi&body=Body")
    );
}

#[tokio::test]
/// What: Hebrew and English Facebook labels resolve to the same profile.
async fn hebrew_facebook_label_matches_english() {
    assert_eq!(normalize_social_key("פייסבוק"), normalize_social_key("Facebook"));
    assert_eq!(normalize_social_key("פייסבוק"), SocialKey::Facebook);

    let mut session = started().await;
    let hebrew = social_links(&session);
    session.switch_to(Language::English).await.expect("to en");
    let english = social_links(&session);

    assert_eq!(hebrew[0], english[0]);
    assert_eq!(hebrew[0].0.as_deref(), Some("facebook"));
    assert_eq!(hebrew[0].1.as_deref(), Some(FACEBOOK_URL));
    assert_eq!(english[2].0.as_deref(), Some("linkedin"));
    assert_eq!(english[2].1, None);
}

#[tokio::test]
/// What: Phone numbers are cleaned and `WhatsApp` opens externally.
async fn phone_and_whatsapp_rows() {
    let session = started().await;
    let dom = session.page().dom();
    let tel = dom.select(|el| el.attr("href") == Some("tel:035551234"));
    assert_eq!(tel.len(), 1);
    let wa = dom.select(|el| el.attr("href").is_some_and(|h| h.starts_with("https://wa.me/972501234567?text=")));
    assert_eq!(wa.len(), 1);
    assert_eq!(dom.attr(wa[0], "target"), Some("_blank"));
}
