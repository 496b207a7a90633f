//! Page chrome: widgets wired once at startup that do not depend on the
//! dictionary.
//!
//! Every controller looks up its elements and silently skips when a page
//! variant omits them.

use crate::config::SiteConfig;
use crate::page::{Action, Page};

pub mod back_to_top;
pub mod donate;
pub mod links;
pub mod media;
pub mod menu;

/// Anchor targeted by the back-to-top button.
pub const TOP_ANCHOR: &str = "top";

/// Language toggle button id.
pub const LANG_TOGGLE_ID: &str = "langToggle";

/// What: Wire every chrome controller.
///
/// Inputs:
/// - `page`: Freshly parsed page
/// - `config`: Site configuration
///
/// Details:
/// - Must run once per page; handlers registered here are never re-bound.
pub fn wire(page: &mut Page, config: &SiteConfig) {
    let linked = links::set_links(page.dom_mut(), config);
    media::setup_video(page.dom_mut(), config);
    donate::wire(page, config);
    menu::wire(page);
    back_to_top::wire(page);
    if let Some(toggle) = page.dom().by_id(LANG_TOGGLE_ID) {
        page.bind(toggle, Action::SwitchLanguage);
    }
    tracing::debug!(links = linked, "[Chrome] Wired page chrome");
}
