//! Row-based scrolling for nodes with a bounded viewport.

use crate::document::Document;
use crate::element::NodeId;
use crate::error::DomError;

impl Document {
    /// Nearest ancestor with a viewport, paired with the row index of the
    /// child that contains `id`.
    pub fn scroll_container_of(&self, id: NodeId) -> Option<(NodeId, usize)> {
        let mut child = id;
        for ancestor in self.ancestors(id) {
            let node = self.get(ancestor)?;
            if node.viewport.is_some() {
                let row = node.children.iter().position(|&c| c == child)?;
                return Some((ancestor, row));
            }
            child = ancestor;
        }
        None
    }

    /// Whether `id` lies within its scroll container's visible window.
    /// Nodes outside any scroll container are always in view.
    pub fn is_in_view(&self, id: NodeId) -> bool {
        let Some((container, row)) = self.scroll_container_of(id) else {
            return true;
        };
        let Some(node) = self.get(container) else {
            return false;
        };
        let rows = node.viewport.unwrap_or(u16::MAX) as usize;
        row >= node.scroll_top && row < node.scroll_top + rows
    }

    /// Scroll the nearest container the minimal distance needed to show `id`.
    /// Returns true if the scroll offset changed.
    pub fn scroll_into_view(&mut self, id: NodeId) -> Result<bool, DomError> {
        self.node(id)?;
        let Some((container, row)) = self.scroll_container_of(id) else {
            return Ok(false);
        };
        let node = self.node_mut(container)?;
        let rows = node.viewport.unwrap_or(u16::MAX).max(1) as usize;

        let new_top = if row < node.scroll_top {
            row
        } else if row >= node.scroll_top + rows {
            row + 1 - rows
        } else {
            return Ok(false);
        };

        log::debug!(
            "[scroll] {} scroll_top {} -> {} to reveal row {}",
            container,
            node.scroll_top,
            new_top,
            row
        );
        node.scroll_top = new_top;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Document, Node, NodeId};

    fn list(doc: &mut Document, rows: usize, viewport: u16) -> (NodeId, Vec<NodeId>) {
        let ul = doc.create(Node::ul().viewport(viewport));
        let items = (0..rows)
            .map(|i| {
                let li = doc.create(Node::li().text(format!("row {i}")));
                doc.append_child(ul, li).unwrap();
                li
            })
            .collect();
        (ul, items)
    }

    #[test]
    fn test_scroll_down_reveals_row_at_bottom() {
        let mut doc = Document::new();
        let (ul, items) = list(&mut doc, 10, 3);

        assert!(doc.is_in_view(items[2]));
        assert!(!doc.is_in_view(items[5]));

        assert!(doc.scroll_into_view(items[5]).unwrap());
        assert_eq!(doc.get(ul).unwrap().scroll_top, 3);
        assert!(doc.is_in_view(items[5]));
        assert!(!doc.is_in_view(items[2]));
    }

    #[test]
    fn test_scroll_up_reveals_row_at_top() {
        let mut doc = Document::new();
        let (ul, items) = list(&mut doc, 10, 3);
        doc.node_mut(ul).unwrap().scroll_top = 6;

        assert!(doc.scroll_into_view(items[1]).unwrap());
        assert_eq!(doc.get(ul).unwrap().scroll_top, 1);
    }

    #[test]
    fn test_visible_row_does_not_scroll() {
        let mut doc = Document::new();
        let (ul, items) = list(&mut doc, 10, 3);
        doc.node_mut(ul).unwrap().scroll_top = 2;

        assert!(!doc.scroll_into_view(items[4]).unwrap());
        assert_eq!(doc.get(ul).unwrap().scroll_top, 2);
    }

    #[test]
    fn test_nested_target_uses_row_of_ancestor() {
        let mut doc = Document::new();
        let (ul, items) = list(&mut doc, 6, 2);
        let inner = doc.create(Node::span().text("inner"));
        doc.append_child(items[4], inner).unwrap();

        assert_eq!(doc.scroll_container_of(inner), Some((ul, 4)));
        assert!(doc.scroll_into_view(inner).unwrap());
        assert_eq!(doc.get(ul).unwrap().scroll_top, 3);
    }

    #[test]
    fn test_unbounded_node_is_in_view() {
        let mut doc = Document::new();
        let div = doc.create(Node::div());
        assert!(doc.is_in_view(div));
        assert!(!doc.scroll_into_view(div).unwrap());
    }
}
