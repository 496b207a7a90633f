//! Section renderers.
//!
//! Each renderer reads one typed section from the dictionary and rebuilds the
//! children of fixed containers. Rendering is destroy-and-recreate: the
//! container is cleared first, so running a renderer again with other data
//! leaves nothing from the previous run behind. A missing container is a
//! silent no-op, since page variants may omit sections.

use ego_tree::NodeId;

use crate::config::SiteConfig;
use crate::content::Dictionary;
use crate::content::sections::{Allocation, Card, Step};
use crate::dom::{Dom, El};
use crate::icons::resolve_icon;
use crate::language::Language;

mod contact;
mod info;
mod nav;
mod orphan_week;
mod overview;
mod programs;

pub use contact::{email_uri, phone_uri, render_contact, whatsapp_uri};
pub use info::{
    render_documents, render_knowledge, render_rights, render_statistics, render_transparency,
};
pub use nav::{CtaTarget, cta_target, render_hero, render_nav};
pub use orphan_week::{ORPHAN_DAY_PREFIX, render_orphan_week};
pub use overview::{render_about, render_services, render_story};
pub use programs::{render_donate, render_help, render_volunteer};

/// Inputs shared by every renderer besides the dictionary.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Site configuration (form URLs, social URLs).
    pub config: &'a SiteConfig,
    /// Language being rendered.
    pub language: Language,
}

/// Signature shared by all section renderers.
pub type RenderFn = fn(&mut Dom, &Dictionary, &RenderContext<'_>);

/// Renderers in the order they run on every pass.
pub const RENDERERS: &[(&str, RenderFn)] = &[
    ("nav", render_nav),
    ("hero", render_hero),
    ("about", render_about),
    ("services", render_services),
    ("story", render_story),
    ("help", render_help),
    ("volunteer", render_volunteer),
    ("donate", render_donate),
    ("knowledge", render_knowledge),
    ("statistics", render_statistics),
    ("rights", render_rights),
    ("transparency", render_transparency),
    ("orphanWeek", render_orphan_week),
    ("documents", render_documents),
    ("contact", render_contact),
];

/// What: Run every section renderer in order.
pub fn render_all(dom: &mut Dom, dictionary: &Dictionary, ctx: &RenderContext<'_>) {
    for (name, render) in RENDERERS {
        tracing::trace!(section = name, "[Render] Rendering section");
        render(dom, dictionary, ctx);
    }
    tracing::debug!(
        lang = ctx.language.code(),
        sections = RENDERERS.len(),
        "[Render] Rendered all sections"
    );
}

/// What: Replace the children of container `id` with `children`.
///
/// Output:
/// - The container, or `None` when the page has no such element.
pub(crate) fn fill(dom: &mut Dom, id: &str, children: impl IntoIterator<Item = El>) -> Option<NodeId> {
    let Some(container) = dom.by_id(id) else {
        tracing::debug!(container = id, "[Render] Container missing, skipped");
        return None;
    };
    dom.clear_children(container);
    for child in children {
        dom.append(container, child);
    }
    Some(container)
}

/// What: Element with text, or nothing when the text is absent.
pub(crate) fn text_el(tag: &str, text: Option<&str>) -> Option<El> {
    text.map(|t| El::new(tag).text(t))
}

/// Icon wrapper for an icon key.
pub(crate) fn icon(key: &str) -> El {
    El::new("span").class("icon-wrap").raw(resolve_icon(key))
}

/// What: Card with optional heading and body.
pub(crate) fn card(card: &Card) -> El {
    El::new("div")
        .class("card")
        .child_opt(text_el("h3", card.title.as_deref()))
        .child_opt(text_el("p", card.text.as_deref()))
}

/// Paragraphs in order.
pub(crate) fn paragraphs(texts: &[String]) -> Vec<El> {
    texts.iter().map(|t| El::new("p").text(t.as_str())).collect()
}

/// List items in order.
pub(crate) fn list_items(texts: &[String]) -> Vec<El> {
    texts.iter().map(|t| El::new("li").text(t.as_str())).collect()
}

/// What: Numbered process step.
///
/// Details:
/// - The badge shows `order`, or the 1-based position when the record has none.
pub(crate) fn step(index: usize, step: &Step) -> El {
    let order = step
        .order
        .clone()
        .unwrap_or_else(|| (index + 1).to_string());
    El::new("div")
        .class("step")
        .child(El::new("span").class("step-order").text(order))
        .child(
            El::new("div")
                .class("step-body")
                .child_opt(text_el("h4", step.title.as_deref()))
                .child_opt(text_el("p", step.text.as_deref())),
        )
}

/// What: Percent segment of an allocation row.
///
/// Output:
/// - `"N%"` for any present value including zero, `""` when absent.
#[must_use]
pub fn percent_label(percent: Option<&str>) -> String {
    percent.map(|p| format!("{p}%")).unwrap_or_default()
}

/// What: Allocation row with label, percent segment and optional description.
pub(crate) fn allocation(item: &Allocation) -> El {
    El::new("div")
        .class("allocation-item")
        .child(
            El::new("div")
                .class("allocation-head")
                .child(
                    El::new("span")
                        .class("allocation-label")
                        .text(item.label.clone().unwrap_or_default()),
                )
                .child(
                    El::new("span")
                        .class("allocation-percent")
                        .text(percent_label(item.percent.as_deref())),
                ),
        )
        .child_opt(text_el("p", item.description.as_deref()))
}
