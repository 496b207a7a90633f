//! Contact section: structured methods and the social icon row.

use crate::chrome::links::external;
use crate::content::Dictionary;
use crate::content::sections::{Contact, ContactKind, ContactMethod};
use crate::dom::{Dom, El};
use crate::icons::normalize_social_key;
use crate::util::percent_encode;

use super::{RenderContext, fill, icon, text_el};

/// What: Build a `mailto:` URI.
///
/// Inputs:
/// - `address`: Recipient
/// - `subject`, `body`: Optional prefilled fields
///
/// Output:
/// - `mailto:address` followed by `?subject=..&body=..` for the present fields,
///   each value percent-encoded.
#[must_use]
pub fn email_uri(address: &str, subject: Option<&str>, body: Option<&str>) -> String {
    let params: Vec<String> = [("subject", subject), ("body", body)]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| format!("{key}={}", percent_encode(v))))
        .collect();
    let mut uri = format!("mailto:{}", address.trim());
    if !params.is_empty() {
        uri.push('?');
        uri.push_str(&params.join("&"));
    }
    uri
}

/// What: Build a `tel:` URI with spaces and dashes removed.
#[must_use]
pub fn phone_uri(number: &str) -> String {
    let digits: String = number
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    format!("tel:{digits}")
}

/// What: Build a `wa.me` chat link.
///
/// Details:
/// - Only digits of the number are kept; a prefilled text adds `?text=`.
#[must_use]
pub fn whatsapp_uri(number: &str, text: Option<&str>) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    text.map_or_else(
        || format!("https://wa.me/{digits}"),
        |t| format!("https://wa.me/{digits}?text={}", percent_encode(t)),
    )
}

/// What: One structured contact row.
fn method_row(method: &ContactMethod, contact: &Contact) -> El {
    let value = method.value.trim();
    let (icon_key, body) = match &method.kind {
        ContactKind::Email => (
            "email",
            El::new("a").attr(
                "href",
                email_uri(
                    value,
                    contact.email_subject.as_deref(),
                    contact.email_body.as_deref(),
                ),
            ),
        ),
        ContactKind::Phone => ("phone", El::new("a").attr("href", phone_uri(value))),
        ContactKind::WhatsApp => (
            "whatsapp",
            external(
                El::new("a"),
                &whatsapp_uri(value, contact.whatsapp_text.as_deref()),
            ),
        ),
        ContactKind::Other(kind) => (kind.as_str(), El::new("span")),
    };
    El::new("div")
        .class("contact-method")
        .child(icon(icon_key))
        .child_opt(text_el("span", method.label.as_deref()).map(|l| l.class("contact-label")))
        .child(body.class("contact-value").text(value))
}

/// What: Rebuild `#contactMethods` and `#contactSocial`.
///
/// Details:
/// - Social labels are free text in either language; each is normalized to a
///   canonical key that selects both the icon and the configured profile URL.
///   Labels without a configured URL render an icon without `href`.
pub fn render_contact(dom: &mut Dom, dictionary: &Dictionary, ctx: &RenderContext<'_>) {
    let contact = dictionary.contact();
    let rows = contact.methods.iter().map(|m| method_row(m, &contact));
    fill(dom, "contactMethods", rows);

    let social = contact.social.iter().map(|label| {
        let key = normalize_social_key(label);
        let anchor = El::new("a")
            .class("social-link")
            .attr("data-social", key.as_str())
            .attr("aria-label", label.as_str())
            .attr("title", label.as_str())
            .child(icon(key.as_str()));
        match ctx.config.social_url(key.as_str()) {
            Some(url) => external(anchor, url),
            None => anchor,
        }
    });
    fill(dom, "contactSocial", social);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::language::Language;
    use serde_json::json;

    #[test]
    /// What: Mail URIs carry encoded subject and body as `key=value` pairs.
    fn mailto_with_subject_and_body() {
        assert_eq!(
            email_uri("a@b.com", Some("Hi"), Some("Body")),
            "mailto:a@b.com?subject=Hi&body=Body"
        );
        assert_eq!(
            email_uri("a@b.com", Some("Hi there"), None),
            "mailto:a@b.com?subject=Hi%20there"
        );
        assert_eq!(email_uri(" a@b.com ", None, None), "mailto:a@b.com");
    }

    #[test]
    /// What: Phone and `WhatsApp` numbers are cleaned.
    fn phone_and_whatsapp() {
        assert_eq!(phone_uri("050 123-4567"), "tel:0501234567");
        assert_eq!(phone_uri("+972 50-1234567"), "tel:+972501234567");
        assert_eq!(
            whatsapp_uri("+972-50-1234567", Some("שלום")),
            format!("https://wa.me/972501234567?text={}", percent_encode("שלום"))
        );
        assert_eq!(whatsapp_uri("050", None), "https://wa.me/050");
    }

    #[test]
    /// What: Methods render by type; Hebrew social labels reach the same profile.
    fn contact_section() {
        let mut config = SiteConfig::default();
        config.social.insert("facebook".into(), "https://fb/page".into());
        let ctx = RenderContext {
            config: &config,
            language: Language::Hebrew,
        };
        let mut dom = Dom::parse(crate::render::tests::SKELETON);
        let dictionary = Dictionary::from_value(json!({"contact": {
            "methods": [
                {"type": "email", "value": "a@b.com"},
                {"type": "phone", "value": "03-555 1234", "label": "Office"},
                {"type": "address", "value": "Tel Aviv"},
                {"type": "email"}
            ],
            "social": ["פייסבוק", "Facebook", "Mastodon"],
            "emailSubject": "Hi",
            "emailBody": "Body"
        }}));
        render_contact(&mut dom, &dictionary, &ctx);

        let values = dom.select_class("contact-value");
        assert_eq!(values.len(), 3);
        assert_eq!(dom.attr(values[0], "href"), Some("mailto:a@b.com?subject=Hi&body=Body"));
        assert_eq!(dom.attr(values[1], "href"), Some("tel:035551234"));
        assert_eq!(dom.element(values[2]).map(crate::dom::Element::tag), Some("span"));

        let social = dom.select_class("social-link");
        assert_eq!(social.len(), 3);
        assert_eq!(dom.attr(social[0], "data-social"), Some("facebook"));
        assert_eq!(dom.attr(social[0], "href"), dom.attr(social[1], "href"));
        assert_eq!(dom.attr(social[0], "href"), Some("https://fb/page"));
        assert_eq!(dom.attr(social[2], "data-social"), Some("link"));
        assert_eq!(dom.attr(social[2], "href"), None);
    }
}
