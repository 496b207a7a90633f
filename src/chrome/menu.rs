//! Hamburger menu for narrow layouts.

use crate::dom::Dom;
use crate::page::{Action, Page};

/// Hamburger button id.
pub const TOGGLE_ID: &str = "menuToggle";
/// Collapsible navigation id.
pub const MENU_ID: &str = "navMenu";
/// Class marking the menu as expanded.
pub const OPEN_CLASS: &str = "open";

/// What: Bind the hamburger button and the links inside the menu.
///
/// Details:
/// - Links are those present at wiring time; rendered nav links are handled by
///   [`bind_links`] after each render.
pub fn wire(page: &mut Page) {
    if let Some(toggle) = page.dom().by_id(TOGGLE_ID) {
        page.dom_mut().set_attr(toggle, "aria-expanded", "false");
        page.bind(toggle, Action::ToggleMenu);
    }
    bind_links(page);
}

/// What: Bind `CloseMenu` on every unbound link inside the menu.
pub fn bind_links(page: &mut Page) {
    let Some(menu) = page.dom().by_id(MENU_ID) else {
        return;
    };
    let links = page
        .dom()
        .select_within(menu, |el| el.tag() == "a" && el.attr("data-menu-bound").is_none());
    for link in links {
        page.dom_mut().set_attr(link, "data-menu-bound", "true");
        page.bind(link, Action::CloseMenu);
    }
}

/// What: Whether the menu is expanded.
#[must_use]
pub fn is_open(dom: &Dom) -> bool {
    dom.by_id(MENU_ID).is_some_and(|m| dom.has_class(m, OPEN_CLASS))
}

/// What: Flip the menu and mirror the state on the toggle's `aria-expanded`.
pub fn toggle(dom: &mut Dom) {
    let Some(menu) = dom.by_id(MENU_ID) else {
        return;
    };
    let open = dom.toggle_class(menu, OPEN_CLASS);
    sync_toggle(dom, open);
}

/// What: Collapse the menu; no-op when already closed or absent.
pub fn close(dom: &mut Dom) {
    let Some(menu) = dom.by_id(MENU_ID) else {
        return;
    };
    dom.remove_class(menu, OPEN_CLASS);
    sync_toggle(dom, false);
}

fn sync_toggle(dom: &mut Dom, open: bool) {
    if let Some(toggle) = dom.by_id(TOGGLE_ID) {
        dom.set_attr(toggle, "aria-expanded", if open { "true" } else { "false" });
    }
}
