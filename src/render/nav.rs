//! Navigation links and hero call-to-action buttons.

use crate::chrome::TOP_ANCHOR;
use crate::chrome::links::external;
use crate::config::SiteConfig;
use crate::content::Dictionary;
use crate::dom::{Dom, El};

use super::{RenderContext, fill};

/// Where a hero button leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CtaTarget {
    /// External form, opened in a new context.
    External(String),
    /// In-page anchor.
    Anchor(String),
}

/// What: Select a hero button's destination from its id.
///
/// Inputs:
/// - `id`: Record id, if any
/// - `config`: Supplies the external form URLs
///
/// Output:
/// - `volunteer`/`help`: the configured form, or their in-page section when no
///   form is configured.
/// - `donate`: the in-page donate section, where the consent gate lives.
/// - Any other id: an anchor equal to the id; no id: the top anchor.
#[must_use]
pub fn cta_target(id: Option<&str>, config: &SiteConfig) -> CtaTarget {
    let id = id.map(str::trim).filter(|i| !i.is_empty());
    let form = match id {
        Some("volunteer") => config.forms.volunteer.as_deref(),
        Some("help") => config.forms.help.as_deref(),
        _ => None,
    };
    if let Some(url) = form.map(str::trim).filter(|u| !u.is_empty()) {
        return CtaTarget::External(url.to_owned());
    }
    CtaTarget::Anchor(format!("#{}", id.unwrap_or(TOP_ANCHOR)))
}

/// What: Rebuild `#navLinks` from the fixed navigation ids.
pub fn render_nav(dom: &mut Dom, dictionary: &Dictionary, _ctx: &RenderContext<'_>) {
    let links = dictionary.nav().links.into_iter().map(|(id, label)| {
        El::new("a")
            .class("nav-link")
            .attr("href", format!("#{id}"))
            .text(label)
    });
    fill(dom, "navLinks", links);
}

/// What: Rebuild `#heroCtas` with one button per primary CTA.
pub fn render_hero(dom: &mut Dom, dictionary: &Dictionary, ctx: &RenderContext<'_>) {
    let buttons = dictionary.hero().primary_ctas.into_iter().map(|cta| {
        let button = El::new("a")
            .class("btn")
            .class(if cta.id.as_deref() == Some("donate") {
                "btn-primary"
            } else {
                "btn-secondary"
            })
            .text(cta.label.unwrap_or_default());
        match cta_target(cta.id.as_deref(), ctx.config) {
            CtaTarget::External(url) => external(button, &url),
            CtaTarget::Anchor(href) => button.attr("href", href),
        }
    });
    fill(dom, "heroCtas", buttons);
}
