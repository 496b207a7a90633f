//! Orphan week: one disclosure widget per day.

use crate::accordion;
use crate::content::Dictionary;
use crate::content::sections::{Day, Practical};
use crate::dom::{Dom, El};

use super::{RenderContext, fill, list_items, text_el};

/// Widget id prefix for orphan-week days.
pub const ORPHAN_DAY_PREFIX: &str = "orphan-day";

/// What: Practical block of a day, only when the day has one.
fn practical(day: &Day) -> Option<El> {
    let body = match day.practical.as_ref()? {
        Practical::Text(text) => El::new("p").text(text.as_str()),
        Practical::Items(items) => El::new("ul").children(list_items(items)),
    };
    Some(
        El::new("div")
            .class("practical")
            .child_opt(text_el("h4", day.practical_title.as_deref()))
            .child(body),
    )
}

/// What: Rebuild `#orphanWeekDays`.
///
/// Details:
/// - Every day becomes a closed widget `orphan-day-<index>`; handlers are
///   attached afterwards by [`accordion::bind`].
pub fn render_orphan_week(dom: &mut Dom, dictionary: &Dictionary, _ctx: &RenderContext<'_>) {
    let days = dictionary.orphan_week().days;
    let widgets = days.iter().enumerate().map(|(index, day)| {
        let trigger = El::new("button")
            .child_opt(text_el("span", day.label.as_deref()).map(|l| l.class("day-label")))
            .child_opt(text_el("span", day.title.as_deref()).map(|t| t.class("day-title")));
        let panel = El::new("div")
            .child_opt(text_el("p", day.text.as_deref()))
            .child_opt(practical(day));
        accordion::item(ORPHAN_DAY_PREFIX, index, trigger, panel)
    });
    fill(dom, "orphanWeekDays", widgets);
}
