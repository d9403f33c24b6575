//! Flatten a document subtree into the text lines a terminal shows.

use crate::document::Document;
use crate::element::NodeId;
use crate::text::fit_to_width;

/// One rendered line: the text of a single displayed node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub node: NodeId,
    /// Nesting depth below the render root.
    pub depth: usize,
    pub text: String,
    /// The node carries the highlight class passed to [`render_lines`].
    pub highlighted: bool,
}

impl Line {
    /// Indented text fitted to exactly `width` columns.
    pub fn to_width(&self, width: usize) -> String {
        let indented = format!("{}{}", "  ".repeat(self.depth), self.text);
        fit_to_width(&indented, width)
    }
}

/// Render every displayed node under `root` (inclusive) that has text.
///
/// Hidden nodes are skipped along with their subtree. Nodes with a viewport
/// only render the children inside their scroll window.
pub fn render_lines(doc: &Document, root: NodeId, highlight_class: &str) -> Vec<Line> {
    let mut lines = Vec::new();
    render_node(doc, root, 0, highlight_class, &mut lines);
    lines
}

fn render_node(
    doc: &Document,
    id: NodeId,
    depth: usize,
    highlight_class: &str,
    lines: &mut Vec<Line>,
) {
    let Some(node) = doc.get(id) else {
        return;
    };
    if node.hidden {
        return;
    }

    if !node.text.is_empty() {
        lines.push(Line {
            node: id,
            depth,
            text: node.text.clone(),
            highlighted: node.has_class(highlight_class),
        });
    }

    let children = node.children();
    let visible = match node.viewport {
        Some(rows) => {
            let start = node.scroll_top.min(children.len());
            let end = (start + rows as usize).min(children.len());
            &children[start..end]
        }
        None => children,
    };

    for &child in visible {
        render_node(doc, child, depth + 1, highlight_class, lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NativeOption, Node};

    #[test]
    fn test_hidden_subtree_skipped() {
        let mut doc = Document::new();
        let root = doc.root();
        let shown = doc.create(Node::div().text("shown"));
        let hidden = doc.create(Node::div().text("hidden").hidden(true));
        let child = doc.create(Node::span().text("child of hidden"));
        doc.append_child(root, shown).unwrap();
        doc.append_child(root, hidden).unwrap();
        doc.append_child(hidden, child).unwrap();

        let lines = render_lines(&doc, root, "selected");
        let texts: Vec<_> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["shown"]);
        assert_eq!(lines[0].depth, 1);
    }

    #[test]
    fn test_viewport_window_and_highlight() {
        let mut doc = Document::new();
        let ul = doc.create(Node::ul().viewport(2));
        for (i, label) in ["a", "b", "c", "d"].iter().enumerate() {
            let mut li = Node::li().text(*label);
            if i == 2 {
                li = li.class("selected");
            }
            let li = doc.create(li);
            doc.append_child(ul, li).unwrap();
        }
        doc.node_mut(ul).unwrap().scroll_top = 1;

        let lines = render_lines(&doc, ul, "selected");
        let texts: Vec<_> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "c"]);
        assert!(!lines[0].highlighted);
        assert!(lines[1].highlighted);
    }

    #[test]
    fn test_native_select_renders_options() {
        let mut doc = Document::new();
        let select = doc.create_select("s", [NativeOption::new("1", "One")]);
        let lines = render_lines(&doc, select, "selected");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].to_width(6), "  One ");
    }
}
