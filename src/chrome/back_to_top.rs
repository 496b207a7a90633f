//! Back-to-top button.

use crate::dom::Dom;
use crate::page::{Action, Page};

/// Button id.
pub const BUTTON_ID: &str = "backToTop";
/// Class that reveals the button.
pub const VISIBLE_CLASS: &str = "visible";
/// Scroll offset past which the button shows.
pub const SHOW_AFTER: u32 = 400;

/// What: Bind the button's click.
pub fn wire(page: &mut Page) {
    if let Some(button) = page.dom().by_id(BUTTON_ID) {
        page.bind(button, Action::BackToTop);
    }
}

/// What: Show the button once the page is scrolled past [`SHOW_AFTER`].
pub fn on_scroll(dom: &mut Dom, offset: u32) {
    let Some(button) = dom.by_id(BUTTON_ID) else {
        return;
    };
    if offset > SHOW_AFTER {
        dom.add_class(button, VISIBLE_CLASS);
    } else {
        dom.remove_class(button, VISIBLE_CLASS);
    }
}
