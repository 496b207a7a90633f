//! Static links to external forms and social profiles.

use crate::config::SiteConfig;
use crate::dom::{Dom, El};
use crate::icons::SocialKey;

/// `rel` for links leaving the site.
pub const EXTERNAL_REL: &str = "noopener noreferrer";

/// Header social anchors and the config key each one takes its URL from.
const SOCIAL_ANCHORS: &[(&str, SocialKey)] = &[
    ("socialFacebook", SocialKey::Facebook),
    ("socialInstagram", SocialKey::Instagram),
    ("socialLinkedin", SocialKey::LinkedIn),
    ("socialYoutube", SocialKey::YouTube),
];

/// What: Turn a built anchor into an external link.
#[must_use]
pub fn external(anchor: El, url: &str) -> El {
    anchor
        .attr("href", url)
        .attr("target", "_blank")
        .attr("rel", EXTERNAL_REL)
}

/// What: Point an existing anchor at an external URL.
///
/// Output:
/// - `true` when the element exists and the URL is non-blank.
pub fn set_external(dom: &mut Dom, id: &str, url: Option<&str>) -> bool {
    let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) else {
        return false;
    };
    let Some(node) = dom.by_id(id) else {
        return false;
    };
    dom.set_attr(node, "href", url);
    dom.set_attr(node, "target", "_blank");
    dom.set_attr(node, "rel", EXTERNAL_REL);
    true
}

/// What: Wire form buttons and header social anchors.
///
/// Inputs:
/// - `dom`: Page document
/// - `config`: Site configuration
///
/// Output:
/// - Number of anchors that received a URL.
///
/// Details:
/// - Primary buttons, secondary buttons and the contact button are all looked up;
///   absent elements and absent URLs leave the page untouched.
pub fn set_links(dom: &mut Dom, config: &SiteConfig) -> usize {
    let forms = &config.forms;
    let buttons = [
        ("btnVolunteer", forms.volunteer.as_deref()),
        ("btnDonate", forms.donate.as_deref()),
        ("btnHelp", forms.help.as_deref()),
        ("btnVolunteerSecondary", forms.volunteer.as_deref()),
        ("btnDonateSecondary", forms.donate.as_deref()),
        ("btnHelpSecondary", forms.help.as_deref()),
        ("btnContact", forms.contact.as_deref()),
    ];
    let mut linked = 0;
    for (id, url) in buttons {
        linked += usize::from(set_external(dom, id, url));
    }
    for (id, key) in SOCIAL_ANCHORS {
        linked += usize::from(set_external(dom, id, config.social_url(key.as_str())));
    }
    linked
}
