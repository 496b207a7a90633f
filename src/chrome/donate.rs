//! Donation gates.
//!
//! Two independent gates guard the external donation platform:
//! - the consent gate on `#donateNow`, backed by the single `#donateConsent`
//!   checkbox and a dictionary-supplied alert text;
//! - the optional legal gate in `#donationLegalBox`, where `#donateProceed`
//!   stays disabled until every legal checkbox is checked. The boxes are the
//!   `.legal-check` inputs, or `#donateChk1..3` on pages without the class.
//!   A gate without any checkbox never unlocks.

use ego_tree::NodeId;

use crate::config::SiteConfig;
use crate::dom::Dom;
use crate::page::{Action, ChangeAction, Effect, Page};

/// "Donate now" button id.
pub const DONATE_BUTTON_ID: &str = "donateNow";
/// Consent checkbox id.
pub const CONSENT_ID: &str = "donateConsent";
/// Attribute on the donate button carrying the current language's alert text.
pub const CONSENT_ALERT_ATTR: &str = "data-consent-alert";
/// Attribute carrying the donation destination on gated buttons.
pub const HREF_ATTR: &str = "data-href";
/// Alert shown when the dictionary supplies none.
pub const DEFAULT_CONSENT_ALERT: &str = "יש לאשר את תנאי התרומה לפני המעבר לתשלום.";

/// Legal gate container id.
pub const LEGAL_BOX_ID: &str = "donationLegalBox";
/// Legal gate proceed button id.
pub const PROCEED_ID: &str = "donateProceed";
/// Class of the legal gate checkboxes.
pub const LEGAL_CHECK_CLASS: &str = "legal-check";
/// Legal checkbox ids used by pages whose boxes carry no class.
pub const LEGAL_CHECK_IDS: [&str; 3] = ["donateChk1", "donateChk2", "donateChk3"];

/// What: Wire both gates.
///
/// Inputs:
/// - `page`: Page to wire
/// - `config`: Supplies `forms.donate` and `donationDisclaimer.enabled`
pub fn wire(page: &mut Page, config: &SiteConfig) {
    let url = config
        .forms
        .donate
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(ToOwned::to_owned);

    if let Some(button) = page.dom().by_id(DONATE_BUTTON_ID) {
        if let Some(url) = &url {
            page.dom_mut().set_attr(button, HREF_ATTR, url);
        }
        page.bind(button, Action::DonateGate);
    }
    wire_legal_gate(page, config.donation_disclaimer.enabled, url.as_deref());
}

fn wire_legal_gate(page: &mut Page, enabled: bool, url: Option<&str>) {
    let (Some(legal_box), Some(proceed)) = (page.dom().by_id(LEGAL_BOX_ID), page.dom().by_id(PROCEED_ID))
    else {
        return;
    };
    if !enabled {
        page.dom_mut().set_flag(legal_box, "hidden", true);
        return;
    }
    page.dom_mut().set_flag(legal_box, "hidden", false);
    let checks = legal_checks(page.dom(), legal_box);
    if checks.is_empty() {
        tracing::warn!("[Donate] Legal gate has no checkboxes, proceed stays disabled");
        page.dom_mut().set_flag(proceed, "disabled", true);
        return;
    }
    for check in checks {
        page.bind_change(check, ChangeAction::LegalGateUpdate);
    }
    if let Some(url) = url {
        page.dom_mut().set_attr(proceed, HREF_ATTR, url);
    }
    page.bind(proceed, Action::LegalProceed);
    update_legal_gate(page.dom_mut());
}

/// What: Store the alert text for the consent gate.
///
/// Details:
/// - Called on every render so the text follows the current language; `None`
///   removes stale text from a previous language.
pub fn set_consent_alert(dom: &mut Dom, text: Option<&str>) {
    let Some(button) = dom.by_id(DONATE_BUTTON_ID) else {
        return;
    };
    match text.map(str::trim).filter(|t| !t.is_empty()) {
        Some(text) => dom.set_attr(button, CONSENT_ALERT_ATTR, text),
        None => dom.remove_attr(button, CONSENT_ALERT_ATTR),
    }
}

/// What: Handle a click on the consent-gated donate button.
///
/// Output:
/// - An alert when consent is missing (a missing checkbox counts as unchecked);
///   otherwise a new window on the donation URL without opener.
#[must_use]
pub fn on_donate_click(dom: &Dom, button: NodeId) -> Vec<Effect> {
    let consented = dom
        .by_id(CONSENT_ID)
        .is_some_and(|check| dom.has_attr(check, "checked"));
    if !consented {
        let text = dom
            .attr(button, CONSENT_ALERT_ATTR)
            .unwrap_or(DEFAULT_CONSENT_ALERT);
        return vec![Effect::Alert(text.to_owned())];
    }
    open_donation(dom, button)
}

/// What: Handle a click on the legal gate's proceed button.
#[must_use]
pub fn on_proceed_click(dom: &Dom, button: NodeId) -> Vec<Effect> {
    open_donation(dom, button)
}

fn open_donation(dom: &Dom, button: NodeId) -> Vec<Effect> {
    let Some(url) = dom.attr(button, HREF_ATTR) else {
        tracing::warn!("[Donate] No donation URL configured");
        return Vec::new();
    };
    vec![Effect::OpenWindow {
        url: url.to_owned(),
        no_opener: true,
    }]
}

/// What: Checkboxes guarding the proceed button.
///
/// Output:
/// - The `.legal-check` inputs inside the box; failing that, `#donateChk1..3`
///   when all three exist; otherwise nothing.
fn legal_checks(dom: &Dom, legal_box: NodeId) -> Vec<NodeId> {
    let classed = dom.select_within(legal_box, |el| el.has_class(LEGAL_CHECK_CLASS));
    if !classed.is_empty() {
        return classed;
    }
    LEGAL_CHECK_IDS
        .iter()
        .map(|id| dom.by_id(id))
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default()
}

/// What: Enable the proceed button only when every legal checkbox is checked.
///
/// Details:
/// - With no checkboxes the button stays disabled.
pub fn update_legal_gate(dom: &mut Dom) {
    let (Some(legal_box), Some(proceed)) = (dom.by_id(LEGAL_BOX_ID), dom.by_id(PROCEED_ID)) else {
        return;
    };
    let checks = legal_checks(dom, legal_box);
    let all_checked = !checks.is_empty() && checks.iter().all(|check| dom.has_attr(*check, "checked"));
    dom.set_flag(proceed, "disabled", !all_checked);
}
