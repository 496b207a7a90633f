//! Page: the document plus its event wiring.
//!
//! Handlers are registered per node as [`Action`]s. Clicking returns the
//! [`Effect`]s a browser host would perform (alerts, opened windows, scrolling,
//! language switches) instead of performing them, so every interaction can be
//! asserted on directly.

use std::collections::HashMap;
use std::path::Path;

use ego_tree::NodeId;

use crate::accordion;
use crate::chrome;
use crate::dom::Dom;
use crate::language::Language;

/// Observable outcome of a user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Blocking alert with this text.
    Alert(String),
    /// Open a new browsing context.
    OpenWindow {
        /// Destination URL.
        url: String,
        /// Opened without opener or referrer.
        no_opener: bool,
    },
    /// Same-context navigation (in-page anchors included).
    Navigate(String),
    /// Smooth scroll to an anchor.
    ScrollTo(String),
    /// Request a full re-render in another language.
    SwitchLanguage(Language),
}

/// Click behavior bound to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Flip a disclosure widget.
    ToggleAccordion,
    /// Consent-gated donation button.
    DonateGate,
    /// Proceed button of the legal gate.
    LegalProceed,
    /// Hamburger button.
    ToggleMenu,
    /// Link inside the mobile menu.
    CloseMenu,
    /// Back-to-top button.
    BackToTop,
    /// Language toggle.
    SwitchLanguage,
}

impl Action {
    /// Whether the action replaces an anchor's default navigation.
    const fn prevents_default(self) -> bool {
        !matches!(self, Self::CloseMenu)
    }
}

/// Change behavior bound to a form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeAction {
    /// Re-evaluate the legal gate's proceed button.
    LegalGateUpdate,
}

/// Failure to obtain the page skeleton.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The skeleton file could not be read.
    #[error("failed to read page {path}: {source}")]
    Read {
        /// Skeleton path.
        path: String,
        /// I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Document plus registered handlers.
#[derive(Debug, Clone, Default)]
pub struct Page {
    dom: Dom,
    clicks: HashMap<NodeId, Vec<Action>>,
    changes: HashMap<NodeId, Vec<ChangeAction>>,
}

impl Page {
    /// What: Wrap a document with no handlers.
    #[must_use]
    pub fn new(dom: Dom) -> Self {
        Self {
            dom,
            clicks: HashMap::new(),
            changes: HashMap::new(),
        }
    }

    /// What: Parse an HTML skeleton into a page.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self::new(Dom::parse(html))
    }

    /// What: Read and parse an HTML skeleton file.
    ///
    /// # Errors
    /// - Returns [`PageError::Read`] when the file cannot be read.
    pub fn load(path: &Path) -> Result<Self, PageError> {
        let html = std::fs::read_to_string(path).map_err(|source| PageError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::parse(&html))
    }

    /// The document.
    #[must_use]
    pub const fn dom(&self) -> &Dom {
        &self.dom
    }

    /// The document, mutably.
    pub const fn dom_mut(&mut self) -> &mut Dom {
        &mut self.dom
    }

    /// What: Language currently shown, read from `<html lang>`.
    #[must_use]
    pub fn current_language(&self) -> Language {
        let lang = self
            .dom
            .html_element()
            .and_then(|html| self.dom.attr(html, "lang"))
            .unwrap_or_default();
        Language::from_document_lang(lang)
    }

    /// What: Register a click action on `node`.
    ///
    /// Details:
    /// - No deduplication happens here; callers that may run repeatedly guard
    ///   with a marker attribute (see [`crate::accordion::bind`]).
    pub fn bind(&mut self, node: NodeId, action: Action) {
        self.clicks.entry(node).or_default().push(action);
    }

    /// What: Register a change action on a form control.
    pub fn bind_change(&mut self, node: NodeId, action: ChangeAction) {
        self.changes.entry(node).or_default().push(action);
    }

    /// Number of click actions registered on `node`.
    #[must_use]
    pub fn handler_count(&self, node: NodeId) -> usize {
        self.clicks.get(&node).map_or(0, Vec::len)
    }

    /// What: Drop handlers whose nodes were detached by a re-render.
    pub fn prune_detached(&mut self) {
        let dom = &self.dom;
        let before = self.clicks.len();
        self.clicks.retain(|id, _| dom.is_attached(*id));
        self.changes.retain(|id, _| dom.is_attached(*id));
        let pruned = before - self.clicks.len();
        if pruned > 0 {
            tracing::trace!(pruned, "[Page] Dropped handlers of detached nodes");
        }
    }

    /// What: Simulate a click on `node`.
    ///
    /// Inputs:
    /// - `node`: Clicked element
    ///
    /// Output:
    /// - Effects in the order they would happen.
    ///
    /// Details:
    /// - Disabled elements produce nothing.
    /// - Registered actions run in registration order.
    /// - Anchors fall through to default navigation unless an action replaces it;
    ///   `target="_blank"` opens a new context, without opener when `rel` says so.
    pub fn click(&mut self, node: NodeId) -> Vec<Effect> {
        if self.dom.has_attr(node, "disabled") {
            tracing::debug!("[Page] Click on disabled element ignored");
            return Vec::new();
        }
        let actions = self.clicks.get(&node).cloned().unwrap_or_default();
        let mut effects = Vec::new();
        let mut default_prevented = false;
        for action in actions {
            default_prevented |= action.prevents_default();
            match action {
                Action::ToggleAccordion => {
                    accordion::toggle(&mut self.dom, node);
                }
                Action::DonateGate => {
                    effects.extend(chrome::donate::on_donate_click(&self.dom, node));
                }
                Action::LegalProceed => {
                    effects.extend(chrome::donate::on_proceed_click(&self.dom, node));
                }
                Action::ToggleMenu => {
                    chrome::menu::toggle(&mut self.dom);
                }
                Action::CloseMenu => {
                    chrome::menu::close(&mut self.dom);
                }
                Action::BackToTop => effects.push(Effect::ScrollTo(chrome::TOP_ANCHOR.to_owned())),
                Action::SwitchLanguage => {
                    effects.push(Effect::SwitchLanguage(self.current_language().other()));
                }
            }
        }
        if !default_prevented && let Some(effect) = self.default_navigation(node) {
            effects.push(effect);
        }
        effects
    }

    /// What: Simulate a click on the element with `id`.
    ///
    /// Output:
    /// - Effects, or nothing when no such element exists.
    pub fn click_id(&mut self, id: &str) -> Vec<Effect> {
        self.dom.by_id(id).map(|n| self.click(n)).unwrap_or_default()
    }

    /// What: Set a checkbox's checked state and fire its change actions.
    pub fn set_checked(&mut self, node: NodeId, checked: bool) {
        self.dom.set_flag(node, "checked", checked);
        let actions = self.changes.get(&node).cloned().unwrap_or_default();
        for action in actions {
            match action {
                ChangeAction::LegalGateUpdate => chrome::donate::update_legal_gate(&mut self.dom),
            }
        }
    }

    /// What: Whether a checkbox is checked.
    #[must_use]
    pub fn is_checked(&self, node: NodeId) -> bool {
        self.dom.has_attr(node, "checked")
    }

    /// What: Feed a scroll offset to scroll-driven widgets.
    pub fn scroll(&mut self, offset: u32) {
        chrome::back_to_top::on_scroll(&mut self.dom, offset);
    }

    /// Default navigation for anchors.
    fn default_navigation(&self, node: NodeId) -> Option<Effect> {
        let el = self.dom.element(node)?;
        if el.tag() != "a" {
            return None;
        }
        let href = el.attr("href")?.trim();
        if href.is_empty() {
            return None;
        }
        if el.attr("target") == Some("_blank") {
            let no_opener = el
                .attr("rel")
                .is_some_and(|rel| rel.split_whitespace().any(|r| r == "noopener"));
            Some(Effect::OpenWindow {
                url: href.to_owned(),
                no_opener,
            })
        } else {
            Some(Effect::Navigate(href.to_owned()))
        }
    }

    /// Serialize the page.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.dom.to_html()
    }
}
