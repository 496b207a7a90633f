//! Knowledge, statistics, rights, transparency and documents sections.

use crate::content::Dictionary;
use crate::dom::{Dom, El};

use super::{RenderContext, allocation, card, fill, icon, list_items, paragraphs, text_el};

/// Rebuild `#knowledgeSections`.
pub fn render_knowledge(dom: &mut Dom, dictionary: &Dictionary, _ctx: &RenderContext<'_>) {
    fill(dom, "knowledgeSections", dictionary.knowledge().sections.iter().map(card));
}

/// What: Rebuild `#statsMetrics`, `#statsMeaning` and `#statsAgeGroups`.
pub fn render_statistics(dom: &mut Dom, dictionary: &Dictionary, _ctx: &RenderContext<'_>) {
    let stats = dictionary.statistics();
    let metrics = stats.metrics.iter().map(|metric| {
        El::new("div")
            .class("metric")
            .child_opt(text_el("strong", metric.value.as_deref()).map(|v| v.class("metric-value")))
            .child_opt(text_el("span", metric.label.as_deref()).map(|l| l.class("metric-label")))
    });
    fill(dom, "statsMetrics", metrics);
    fill(dom, "statsMeaning", paragraphs(&stats.meaning));
    fill(dom, "statsAgeGroups", list_items(&stats.age_groups));
}

/// What: Rebuild `#rightsList`.
///
/// Details:
/// - Items accept `label` for `title` and `description` for `text`.
pub fn render_rights(dom: &mut Dom, dictionary: &Dictionary, _ctx: &RenderContext<'_>) {
    let items = dictionary.rights().items;
    let cards = items
        .iter()
        .map(|item| card(item).class("right").child(icon("rights")));
    fill(dom, "rightsList", cards);
}

/// Rebuild `#transparencyAllocation`.
pub fn render_transparency(dom: &mut Dom, dictionary: &Dictionary, _ctx: &RenderContext<'_>) {
    let lines = dictionary.transparency().allocation;
    fill(dom, "transparencyAllocation", lines.iter().map(allocation));
}

/// Rebuild `#documentsList`.
pub fn render_documents(dom: &mut Dom, dictionary: &Dictionary, _ctx: &RenderContext<'_>) {
    let items = dictionary.documents().items;
    let cards = items
        .iter()
        .map(|item| card(item).class("document").child(icon("documents")));
    fill(dom, "documentsList", cards);
}
