//! Disclosure widgets (accordion items) generated by section renderers.
//!
//! A widget is a trigger button and a content panel:
//!
//! ```html
//! <div class="accordion-item">
//!   <button class="accordion-trigger" id="orphan-day-0-trigger"
//!           aria-expanded="false" aria-controls="orphan-day-0">…</button>
//!   <div class="accordion-panel" id="orphan-day-0" hidden>…</div>
//! </div>
//! ```
//!
//! State lives only in the DOM: `aria-expanded` on the trigger and `hidden` on
//! the panel. Widgets are recreated on every render, so every widget starts
//! closed after a language switch.

use ego_tree::NodeId;

use crate::dom::{Dom, El};
use crate::page::{Action, Page};

/// Class of generated trigger buttons.
pub const TRIGGER_CLASS: &str = "accordion-trigger";

/// Marker attribute set once a trigger has its toggle handler.
pub const BOUND_MARKER: &str = "data-accordion-bound";

/// Open/closed state of one widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccordionState {
    /// Panel hidden.
    Closed,
    /// Panel visible.
    Open,
}

/// What: Stable widget id for the `index`-th item of a list.
#[must_use]
pub fn widget_id(prefix: &str, index: usize) -> String {
    format!("{prefix}-{index}")
}

/// What: Build a closed disclosure widget.
///
/// Inputs:
/// - `prefix`, `index`: Form the panel id `prefix-index`; the trigger gets `-trigger`
/// - `trigger`: Content of the trigger button
/// - `panel`: Content of the panel
#[must_use]
pub fn item(prefix: &str, index: usize, trigger: El, panel: El) -> El {
    let panel_id = widget_id(prefix, index);
    El::new("div").class("accordion-item").child(
        trigger
            .class(TRIGGER_CLASS)
            .attr("type", "button")
            .attr("id", format!("{panel_id}-trigger"))
            .attr("aria-expanded", "false")
            .attr("aria-controls", panel_id.clone()),
    )
    .child(
        panel
            .class("accordion-panel")
            .attr("id", panel_id)
            .attr("hidden", ""),
    )
}

/// What: Read a trigger's state.
#[must_use]
pub fn state(dom: &Dom, trigger: NodeId) -> AccordionState {
    if dom.attr(trigger, "aria-expanded") == Some("true") {
        AccordionState::Open
    } else {
        AccordionState::Closed
    }
}

/// What: Flip a widget between closed and open.
///
/// Inputs:
/// - `dom`: Document
/// - `trigger`: Trigger button; its `aria-controls` names the panel
///
/// Output:
/// - The new state.
pub fn toggle(dom: &mut Dom, trigger: NodeId) -> AccordionState {
    let next = match state(dom, trigger) {
        AccordionState::Closed => AccordionState::Open,
        AccordionState::Open => AccordionState::Closed,
    };
    let open = next == AccordionState::Open;
    dom.set_attr(trigger, "aria-expanded", if open { "true" } else { "false" });
    if let Some(panel) = dom
        .attr(trigger, "aria-controls")
        .map(ToOwned::to_owned)
        .and_then(|id| dom.by_id(&id))
    {
        dom.set_flag(panel, "hidden", !open);
    }
    next
}

/// What: Attach toggle handlers to every unbound trigger.
///
/// Output:
/// - Number of triggers newly bound.
///
/// Details:
/// - Triggers carrying [`BOUND_MARKER`] are skipped, so running this after every
///   section render never stacks handlers on surviving widgets.
pub fn bind(page: &mut Page) -> usize {
    let triggers = page
        .dom()
        .select(|el| el.has_class(TRIGGER_CLASS) && el.attr(BOUND_MARKER).is_none());
    for trigger in &triggers {
        page.dom_mut().set_attr(*trigger, BOUND_MARKER, "true");
        page.bind(*trigger, Action::ToggleAccordion);
    }
    if !triggers.is_empty() {
        tracing::debug!(count = triggers.len(), "[Accordion] Bound triggers");
    }
    triggers.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: Page with one generated widget inside a container.
    fn page_with_widget() -> (Page, NodeId) {
        let mut page = Page::parse(r#"<body><div id="days"></div></body>"#);
        let days = page.dom().by_id("days").expect("container");
        page.dom_mut().append(
            days,
            item("day", 0, El::new("button").text("Sunday"), El::new("div").text("Body")),
        );
        let trigger = page.dom().by_id("day-0-trigger").expect("trigger");
        (page, trigger)
    }

    #[test]
    /// What: Widgets start closed with a hidden panel.
    fn starts_closed() {
        let (page, trigger) = page_with_widget();
        assert_eq!(state(page.dom(), trigger), AccordionState::Closed);
        let panel = page.dom().by_id("day-0").expect("panel");
        assert!(page.dom().has_attr(panel, "hidden"));
    }

    #[test]
    /// What: Clicking flips state; two clicks restore it.
    fn click_twice_round_trips() {
        let (mut page, trigger) = page_with_widget();
        assert_eq!(bind(&mut page), 1);
        let panel = page.dom().by_id("day-0").expect("panel");

        assert!(page.click(trigger).is_empty());
        assert_eq!(state(page.dom(), trigger), AccordionState::Open);
        assert!(!page.dom().has_attr(panel, "hidden"));
        assert_eq!(page.dom().attr(trigger, "aria-expanded"), Some("true"));

        page.click(trigger);
        assert_eq!(state(page.dom(), trigger), AccordionState::Closed);
        assert!(page.dom().has_attr(panel, "hidden"));
    }

    #[test]
    /// What: Rebinding never stacks handlers.
    fn binding_is_idempotent() {
        let (mut page, trigger) = page_with_widget();
        assert_eq!(bind(&mut page), 1);
        assert_eq!(bind(&mut page), 0);
        assert_eq!(page.handler_count(trigger), 1);
        page.click(trigger);
        assert_eq!(state(page.dom(), trigger), AccordionState::Open);
    }
}
