//! Help, volunteer and donate sections.

use crate::chrome::donate::set_consent_alert;
use crate::content::Dictionary;
use crate::dom::Dom;

use super::{RenderContext, allocation, card, fill, step};

/// Rebuild `#helpSteps`.
pub fn render_help(dom: &mut Dom, dictionary: &Dictionary, _ctx: &RenderContext<'_>) {
    let steps = dictionary.help().steps;
    fill(dom, "helpSteps", steps.iter().enumerate().map(|(i, s)| step(i, s)));
}

/// Rebuild `#volunteerRoles` and `#volunteerSteps`.
pub fn render_volunteer(dom: &mut Dom, dictionary: &Dictionary, _ctx: &RenderContext<'_>) {
    let volunteer = dictionary.volunteer();
    fill(dom, "volunteerRoles", volunteer.roles.iter().map(card));
    fill(
        dom,
        "volunteerSteps",
        volunteer.process_steps.iter().enumerate().map(|(i, s)| step(i, s)),
    );
}

/// What: Rebuild the donate section.
///
/// Details:
/// - `#donateAllocation` gets one row per allocation line, `#donateWays` one
///   card per way to give.
/// - The consent gate's alert text is refreshed for the rendered language.
pub fn render_donate(dom: &mut Dom, dictionary: &Dictionary, _ctx: &RenderContext<'_>) {
    let donate = dictionary.donate();
    fill(dom, "donateAllocation", donate.allocation.iter().map(allocation));
    fill(dom, "donateWays", donate.ways_to_give.iter().map(card));
    set_consent_alert(dom, donate.legal_alert.as_deref());
}
