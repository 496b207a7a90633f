//! HTML serialization of a [`Dom`].

use ego_tree::NodeRef;

use super::{Dom, Node};
use crate::util::{escape_attr, escape_text};

/// Elements written without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose text children are written unescaped.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

impl Dom {
    /// What: Serialize the whole document to HTML.
    ///
    /// Output:
    /// - HTML text, prefixed with `<!DOCTYPE html>` when the document has an `<html>` root.
    ///
    /// Details:
    /// - Text is escaped; [`Node::Raw`] markup is written verbatim.
    /// - Attributes with empty values are written in boolean form (`hidden`).
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        if self.html_element().is_some() {
            out.push_str("<!DOCTYPE html>\n");
        }
        for child in self.tree.root().children() {
            write_node(&mut out, child, false);
        }
        out
    }

    /// What: Serialize only the children of `id`.
    #[must_use]
    pub fn inner_html(&self, id: ego_tree::NodeId) -> String {
        let mut out = String::new();
        if let Some(node) = self.tree.get(id) {
            let raw_text = matches!(node.value(), Node::Element(el) if RAW_TEXT_ELEMENTS.contains(&el.tag()));
            for child in node.children() {
                write_node(&mut out, child, raw_text);
            }
        }
        out
    }
}

/// What: Append the HTML for `node` to `out`.
///
/// Inputs:
/// - `out`: Output buffer
/// - `node`: Node to write
/// - `raw_text`: Whether text children belong to a `<script>`/`<style>` element
fn write_node(out: &mut String, node: NodeRef<'_, Node>, raw_text: bool) {
    match node.value() {
        Node::Document => {
            for child in node.children() {
                write_node(out, child, false);
            }
        }
        Node::Text(t) => {
            if raw_text {
                out.push_str(t);
            } else {
                out.push_str(&escape_text(t));
            }
        }
        Node::Raw(markup) => out.push_str(markup),
        Node::Element(el) => {
            out.push('<');
            out.push_str(el.tag());
            for (k, v) in el.attrs() {
                out.push(' ');
                out.push_str(k);
                if !v.is_empty() {
                    out.push_str("=\"");
                    out.push_str(&escape_attr(v));
                    out.push('"');
                }
            }
            out.push('>');
            if VOID_ELEMENTS.contains(&el.tag()) {
                return;
            }
            let child_raw = RAW_TEXT_ELEMENTS.contains(&el.tag());
            for child in node.children() {
                write_node(out, child, child_raw);
            }
            out.push_str("</");
            out.push_str(el.tag());
            out.push('>');
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dom::{Dom, El};

    #[test]
    /// What: Serialization escapes text and attributes but keeps raw markup.
    fn serialize_escapes_and_keeps_raw() {
        let mut dom = Dom::new();
        let root = dom.root();
        dom.append(
            root,
            El::new("a")
                .attr("href", "mailto:a@b.com?subject=Hi&body=Yo")
                .attr("hidden", "")
                .raw("<svg></svg>")
                .text("<Tom & Jerry>"),
        );
        assert_eq!(
            dom.to_html(),
            "<a href=\"mailto:a@b.com?subject=Hi&amp;body=Yo\" hidden><svg></svg>&lt;Tom &amp; Jerry&gt;</a>"
        );
    }

    #[test]
    /// What: Void elements have no closing tag and documents get a doctype.
    fn serialize_void_elements_and_doctype() {
        let dom = Dom::parse("<html><head></head><body><img src=x.png><br></body></html>");
        let html = dom.to_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<img src=\"x.png\">"));
        assert!(!html.contains("</img>"));
        assert!(!html.contains("</br>"));
    }
}
