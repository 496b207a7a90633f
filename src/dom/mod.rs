//! Owned, mutable document tree that section renderers populate.
//!
//! The tree is an `ego_tree::Tree` of [`Node`]s. A page skeleton is parsed with
//! `scraper` (see [`parse`]) and copied into this mutable form; renderers then
//! clear and repopulate fixed containers addressed by `id`, and the result is
//! serialized back to HTML (see [`serialize`]).
//!
//! Detaching a subtree makes it unreachable from the document root. All queries
//! walk from the root, so detached nodes never show up in lookups or output.

mod parse;
mod serialize;

use ego_tree::{NodeId, Tree};

/// A single node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// The document root.
    Document,
    /// An element with a tag name and ordered attributes.
    Element(Element),
    /// Plain text, escaped on output.
    Text(String),
    /// Trusted markup (inline SVG icons), written verbatim on output.
    Raw(String),
}

/// An element's tag name and attributes in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
}

impl Element {
    /// What: Create an element without attributes.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
        }
    }

    /// What: Create an element from a tag and an attribute list.
    #[must_use]
    pub fn with_attrs(tag: &str, attrs: Vec<(String, String)>) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs,
        }
    }

    /// Lowercase tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// What: Look up an attribute value by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate attributes in insertion order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// What: Set an attribute, replacing an existing value in place.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Some(slot) = self.attrs.iter_mut().find(|(k, _)| k == name) {
            value.clone_into(&mut slot.1);
        } else {
            self.attrs.push((name.to_owned(), value.to_owned()));
        }
    }

    /// What: Remove an attribute.
    ///
    /// Output:
    /// - `true` when the attribute was present.
    pub fn remove_attr(&mut self, name: &str) -> bool {
        let before = self.attrs.len();
        self.attrs.retain(|(k, _)| k != name);
        before != self.attrs.len()
    }

    /// What: Check whether the `class` attribute contains `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|c| c.split_whitespace().any(|x| x == class))
    }

    /// What: Add a class token if it is not already present.
    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let next = match self.attr("class") {
            Some(existing) if !existing.trim().is_empty() => format!("{} {class}", existing.trim()),
            _ => class.to_owned(),
        };
        self.set_attr("class", &next);
    }

    /// What: Remove a class token, keeping the others in order.
    pub fn remove_class(&mut self, class: &str) {
        let Some(existing) = self.attr("class") else {
            return;
        };
        let next = existing
            .split_whitespace()
            .filter(|x| *x != class)
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attr("class", &next);
    }
}

/// Child of an [`El`] builder.
#[derive(Debug, Clone)]
pub enum Child {
    /// Nested element.
    El(El),
    /// Escaped text.
    Text(String),
    /// Verbatim markup.
    Raw(String),
}

/// Builder for a detached element subtree, appended with [`Dom::append`].
#[derive(Debug, Clone)]
pub struct El {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Child>,
}

impl El {
    /// Start an element with the given tag.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_owned(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute.
    #[must_use]
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        if let Some(slot) = self.attrs.iter_mut().find(|(k, _)| k == name) {
            slot.1 = value;
        } else {
            self.attrs.push((name.to_owned(), value));
        }
        self
    }

    /// Set an attribute only when `value` is present.
    #[must_use]
    pub fn attr_opt(self, name: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.attr(name, v),
            None => self,
        }
    }

    /// Append a class token.
    #[must_use]
    pub fn class(self, class: &str) -> Self {
        let next = match self.attrs.iter().find(|(k, _)| k == "class") {
            Some((_, existing)) => format!("{existing} {class}"),
            None => class.to_owned(),
        };
        self.attr("class", next)
    }

    /// Append a text child.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Child::Text(text.into()));
        self
    }

    /// Append verbatim markup.
    #[must_use]
    pub fn raw(mut self, markup: impl Into<String>) -> Self {
        self.children.push(Child::Raw(markup.into()));
        self
    }

    /// Append a child element.
    #[must_use]
    pub fn child(mut self, el: Self) -> Self {
        self.children.push(Child::El(el));
        self
    }

    /// Append a child element only when present.
    #[must_use]
    pub fn child_opt(self, el: Option<Self>) -> Self {
        match el {
            Some(el) => self.child(el),
            None => self,
        }
    }

    /// Append every element of `els` in order.
    #[must_use]
    pub fn children(mut self, els: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(els.into_iter().map(Child::El));
        self
    }
}

/// Mutable document tree.
#[derive(Debug, Clone)]
pub struct Dom {
    tree: Tree<Node>,
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom {
    /// What: Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tree: Tree::new(Node::Document),
        }
    }

    /// Id of the document root.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.tree.root().id()
    }

    /// What: Borrow the node stored at `id`.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.tree.get(id).map(|n| n.value())
    }

    /// What: Borrow the element stored at `id`.
    ///
    /// Output:
    /// - `None` when `id` is unknown or names a non-element node.
    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match self.node(id)? {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// What: Run `f` against the element at `id`.
    ///
    /// Output:
    /// - `Some(result)` when `id` names an element, `None` otherwise.
    pub fn with_element_mut<R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut Element) -> R,
    ) -> Option<R> {
        let mut node = self.tree.get_mut(id)?;
        match node.value() {
            Node::Element(el) => Some(f(el)),
            _ => None,
        }
    }

    /// What: Check whether `id` is still reachable from the document root.
    #[must_use]
    pub fn is_attached(&self, id: NodeId) -> bool {
        let root = self.root();
        let Some(node) = self.tree.get(id) else {
            return false;
        };
        node.id() == root || node.ancestors().any(|a| a.id() == root)
    }

    /// What: Find the first attached element whose `id` attribute equals `id`.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .root()
            .descendants()
            .find(|n| matches!(n.value(), Node::Element(el) if el.attr("id") == Some(id)))
            .map(|n| n.id())
    }

    /// What: Collect every attached element matching `pred`, in document order.
    pub fn select(&self, pred: impl Fn(&Element) -> bool) -> Vec<NodeId> {
        self.select_within(self.root(), pred)
    }

    /// What: Collect every element under `scope` (inclusive) matching `pred`.
    pub fn select_within(&self, scope: NodeId, pred: impl Fn(&Element) -> bool) -> Vec<NodeId> {
        let Some(scope) = self.tree.get(scope) else {
            return Vec::new();
        };
        scope
            .descendants()
            .filter(|n| matches!(n.value(), Node::Element(el) if pred(el)))
            .map(|n| n.id())
            .collect()
    }

    /// What: Collect every attached element carrying attribute `name`.
    #[must_use]
    pub fn select_attr(&self, name: &str) -> Vec<NodeId> {
        self.select(|el| el.attr(name).is_some())
    }

    /// What: Collect every attached element carrying class `class`.
    #[must_use]
    pub fn select_class(&self, class: &str) -> Vec<NodeId> {
        self.select(|el| el.has_class(class))
    }

    /// What: Collect every attached element with tag `tag`.
    #[must_use]
    pub fn select_tag(&self, tag: &str) -> Vec<NodeId> {
        self.select(|el| el.tag() == tag)
    }

    /// What: Read an attribute of the element at `id`.
    #[must_use]
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.attr(name)
    }

    /// What: Check for the presence of an attribute (boolean attributes such as `hidden`).
    #[must_use]
    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.attr(id, name).is_some()
    }

    /// What: Set an attribute on the element at `id`; no-op for unknown ids.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        self.with_element_mut(id, |el| el.set_attr(name, value));
    }

    /// What: Remove an attribute from the element at `id`; no-op for unknown ids.
    pub fn remove_attr(&mut self, id: NodeId, name: &str) {
        self.with_element_mut(id, |el| el.remove_attr(name));
    }

    /// What: Set or clear a boolean attribute.
    pub fn set_flag(&mut self, id: NodeId, name: &str, on: bool) {
        if on {
            self.set_attr(id, name, "");
        } else {
            self.remove_attr(id, name);
        }
    }

    /// What: Check the class list of the element at `id`.
    #[must_use]
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_some_and(|el| el.has_class(class))
    }

    /// What: Add a class to the element at `id`.
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        self.with_element_mut(id, |el| el.add_class(class));
    }

    /// What: Remove a class from the element at `id`.
    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        self.with_element_mut(id, |el| el.remove_class(class));
    }

    /// What: Flip a class on the element at `id`.
    ///
    /// Output:
    /// - `true` when the class is present after the call.
    pub fn toggle_class(&mut self, id: NodeId, class: &str) -> bool {
        self.with_element_mut(id, |el| {
            if el.has_class(class) {
                el.remove_class(class);
                false
            } else {
                el.add_class(class);
                true
            }
        })
        .unwrap_or(false)
    }

    /// What: Concatenate all text beneath `id`.
    #[must_use]
    pub fn text(&self, id: NodeId) -> String {
        let Some(node) = self.tree.get(id) else {
            return String::new();
        };
        node.descendants()
            .filter_map(|d| match d.value() {
                Node::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// What: Replace all children of `id` with a single text node.
    pub fn set_text(&mut self, id: NodeId, text: &str) {
        self.clear_children(id);
        self.append_node(id, Node::Text(text.to_owned()));
    }

    /// What: Detach every child of `id`.
    ///
    /// Details:
    /// - Detached subtrees are unreachable afterwards, so repeated renders never
    ///   accumulate stale nodes under the container.
    /// - `ego_tree` never frees detached nodes: the backing arena grows by one
    ///   render's worth of nodes per pass. Fine for a one-shot render run; a
    ///   long-lived session that switches often should re-parse the skeleton.
    pub fn clear_children(&mut self, id: NodeId) {
        let ids: Vec<NodeId> = match self.tree.get(id) {
            Some(n) => n.children().map(|c| c.id()).collect(),
            None => return,
        };
        for cid in ids {
            if let Some(mut child) = self.tree.get_mut(cid) {
                child.detach();
            }
        }
    }

    /// What: Ids of all direct children of `id` (elements and text).
    #[must_use]
    pub fn child_nodes(&self, id: NodeId) -> Vec<NodeId> {
        self.tree
            .get(id)
            .map(|n| n.children().map(|c| c.id()).collect())
            .unwrap_or_default()
    }

    /// What: Ids of the direct element children of `id`.
    #[must_use]
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.tree
            .get(id)
            .map(|n| {
                n.children()
                    .filter(|c| matches!(c.value(), Node::Element(_)))
                    .map(|c| c.id())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// What: Parent of `id`, if any.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.tree.get(id)?.parent().map(|p| p.id())
    }

    /// What: Append a built element subtree under `parent`.
    ///
    /// Output:
    /// - Id of the new element, or `None` when `parent` is unknown.
    pub fn append(&mut self, parent: NodeId, el: El) -> Option<NodeId> {
        self.append_child(parent, Child::El(el))
    }

    /// What: Append a text node under `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> Option<NodeId> {
        self.append_node(parent, Node::Text(text.to_owned()))
    }

    /// What: Append a raw node value under `parent`.
    pub(crate) fn append_node(&mut self, parent: NodeId, node: Node) -> Option<NodeId> {
        let mut parent = self.tree.get_mut(parent)?;
        Some(parent.append(node).id())
    }

    /// Recursive worker behind [`Dom::append`].
    fn append_child(&mut self, parent: NodeId, child: Child) -> Option<NodeId> {
        match child {
            Child::Text(t) => self.append_node(parent, Node::Text(t)),
            Child::Raw(r) => self.append_node(parent, Node::Raw(r)),
            Child::El(El {
                tag,
                attrs,
                children,
            }) => {
                let id = self.append_node(parent, Node::Element(Element::with_attrs(&tag, attrs)))?;
                for c in children {
                    self.append_child(id, c);
                }
                Some(id)
            }
        }
    }

    /// What: The `<html>` element, if the document has one.
    #[must_use]
    pub fn html_element(&self) -> Option<NodeId> {
        self.select_tag("html").into_iter().next()
    }

    /// What: Set the document title, creating `<title>` inside `<head>` when missing.
    pub fn set_title(&mut self, title: &str) {
        if let Some(existing) = self.select_tag("title").into_iter().next() {
            self.set_text(existing, title);
        } else if let Some(head) = self.select_tag("head").into_iter().next() {
            self.append(head, El::new("title").text(title));
        }
    }

    /// What: Current document title text, if a `<title>` exists.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        self.select_tag("title")
            .into_iter()
            .next()
            .map(|id| self.text(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: Build a small document with one container for tests.
    fn sample() -> (Dom, NodeId) {
        let mut dom = Dom::new();
        let root = dom.root();
        let body = dom
            .append(root, El::new("body").child(El::new("ul").attr("id", "list")))
            .expect("append body");
        let list = dom.by_id("list").expect("list exists");
        assert_eq!(dom.parent(list), Some(body));
        (dom, list)
    }

    #[test]
    /// What: Clearing and re-appending leaves only the new children reachable.
    ///
    /// Output:
    /// - Old items are neither children nor findable by id after clearing.
    fn dom_clear_children_detaches_subtrees() {
        let (mut dom, list) = sample();
        let old = dom
            .append(list, El::new("li").attr("id", "old").text("a"))
            .expect("append");
        dom.clear_children(list);
        dom.append(list, El::new("li").attr("id", "new").text("b"));
        assert_eq!(dom.children(list).len(), 1);
        assert!(dom.by_id("old").is_none());
        assert!(!dom.is_attached(old));
        assert_eq!(dom.text(list), "b");
    }

    #[test]
    /// What: Cleared nodes stay in the arena but are invisible to the document.
    fn dom_cleared_nodes_stay_in_arena() {
        let (mut dom, list) = sample();
        let old = dom
            .append(list, El::new("li").attr("id", "kept").text("a"))
            .expect("append");
        dom.clear_children(list);
        assert!(dom.node(old).is_some());
        assert!(!dom.is_attached(old));
        assert!(dom.select_tag("li").is_empty());
        assert!(!dom.to_html().contains("kept"));
    }

    #[test]
    /// What: Attribute and class helpers keep order and avoid duplicates.
    fn dom_attrs_and_classes() {
        let (mut dom, list) = sample();
        dom.set_attr(list, "data-x", "1");
        dom.set_attr(list, "data-x", "2");
        assert_eq!(dom.attr(list, "data-x"), Some("2"));
        dom.add_class(list, "a");
        dom.add_class(list, "b");
        dom.add_class(list, "a");
        assert_eq!(dom.attr(list, "class"), Some("a b"));
        assert!(!dom.toggle_class(list, "a"));
        assert_eq!(dom.attr(list, "class"), Some("b"));
        assert!(dom.toggle_class(list, "open"));
        assert!(dom.has_class(list, "open"));
        dom.set_flag(list, "hidden", true);
        assert!(dom.has_attr(list, "hidden"));
        dom.set_flag(list, "hidden", false);
        assert!(!dom.has_attr(list, "hidden"));
    }

    #[test]
    /// What: `set_text` replaces prior children rather than appending.
    fn dom_set_text_replaces() {
        let (mut dom, list) = sample();
        dom.append(list, El::new("li").text("x"));
        dom.set_text(list, "plain");
        assert_eq!(dom.text(list), "plain");
        assert!(dom.children(list).is_empty());
    }

    #[test]
    /// What: Builder class chaining merges tokens into one attribute.
    fn el_builder_merges_classes() {
        let mut dom = Dom::new();
        let root = dom.root();
        let id = dom
            .append(root, El::new("div").class("card").class("pillar"))
            .expect("append");
        assert_eq!(dom.attr(id, "class"), Some("card pillar"));
    }

    #[test]
    /// What: Unknown ids are ignored by mutators.
    fn dom_unknown_ids_are_noops() {
        let (mut dom, list) = sample();
        dom.clear_children(list);
        let detached = dom
            .append(list, El::new("span"))
            .expect("append");
        dom.clear_children(list);
        dom.set_attr(detached, "a", "b");
        assert!(dom.select_attr("a").is_empty());
    }
}
