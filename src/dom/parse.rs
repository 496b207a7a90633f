//! HTML skeleton parsing using `scraper`.

use ego_tree::{NodeId, NodeRef};
use scraper::{Html, Node as HtmlNode};

use super::{Dom, Element, Node};

impl Dom {
    /// What: Parse an HTML page skeleton into a mutable [`Dom`].
    ///
    /// Inputs:
    /// - `html`: Full HTML document text.
    ///
    /// Output:
    /// - Document containing the skeleton's elements and text.
    ///
    /// Details:
    /// - Parsing is lenient (html5ever): malformed markup never fails.
    /// - Comments, doctypes and processing instructions are dropped; the
    ///   serializer re-emits a doctype for documents with an `<html>` root.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);
        let mut dom = Self::new();
        let root = dom.root();
        for child in document.tree.root().children() {
            copy_node(&mut dom, root, child);
        }
        tracing::trace!(
            elements = dom.select(|_| true).len(),
            "[Dom] Parsed page skeleton"
        );
        dom
    }
}

/// What: Copy a parsed node (and its children) under `parent`.
///
/// Inputs:
/// - `dom`: Destination tree
/// - `parent`: Destination parent id
/// - `node`: Source node from the parsed document
fn copy_node(dom: &mut Dom, parent: NodeId, node: NodeRef<'_, HtmlNode>) {
    match node.value() {
        HtmlNode::Element(el) => {
            let attrs = el
                .attrs()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect();
            let Some(id) = dom.append_node(parent, Node::Element(Element::with_attrs(el.name(), attrs)))
            else {
                return;
            };
            for child in node.children() {
                copy_node(dom, id, child);
            }
        }
        HtmlNode::Text(t) => {
            dom.append_node(parent, Node::Text(owned_text(t)));
        }
        HtmlNode::Document | HtmlNode::Fragment => {
            for child in node.children() {
                copy_node(dom, parent, child);
            }
        }
        _ => {}
    }
}

/// Copy text content out of the parser's tendril.
fn owned_text(t: &str) -> String {
    t.to_owned()
}
