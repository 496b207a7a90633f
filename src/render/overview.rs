//! About, services and story sections.

use crate::content::Dictionary;
use crate::dom::{Dom, El};

use super::{RenderContext, fill, icon, paragraphs, text_el};

/// What: Rebuild `#aboutIntro` paragraphs and `#aboutPillars` cards.
///
/// Details:
/// - Pillar icons are resolved from the pillar id.
pub fn render_about(dom: &mut Dom, dictionary: &Dictionary, _ctx: &RenderContext<'_>) {
    let about = dictionary.about();
    fill(dom, "aboutIntro", paragraphs(&about.intro));
    let pillars = about.pillars.iter().map(|pillar| {
        El::new("div")
            .class("pillar")
            .attr_opt("data-pillar", pillar.id.clone())
            .child(icon(pillar.id.as_deref().unwrap_or_default()))
            .child_opt(text_el("h3", pillar.title.as_deref()))
            .child_opt(text_el("p", pillar.text.as_deref()))
    });
    fill(dom, "aboutPillars", pillars);
}

/// What: Rebuild `#servicesGrid` with one icon card per service.
pub fn render_services(dom: &mut Dom, dictionary: &Dictionary, _ctx: &RenderContext<'_>) {
    let items = dictionary.services().items.into_iter().map(|item| {
        El::new("div")
            .class("card")
            .class("service")
            .child(icon(item.icon.as_deref().unwrap_or_default()))
            .child_opt(text_el("h3", item.title.as_deref()))
            .child_opt(text_el("p", item.text.as_deref()))
    });
    fill(dom, "servicesGrid", items);
}

/// Rebuild `#storyContent`.
pub fn render_story(dom: &mut Dom, dictionary: &Dictionary, _ctx: &RenderContext<'_>) {
    fill(dom, "storyContent", paragraphs(&dictionary.story().content));
}
