use crate::element::NodeId;

/// Tracks which node is currently focused.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<NodeId>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused node.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Focus a node. Returns the previously focused node if focus moved.
    pub fn focus(&mut self, id: NodeId) -> Option<NodeId> {
        if self.focused == Some(id) {
            return None;
        }
        self.focused.replace(id)
    }

    /// Clear focus.
    /// Returns the node that was focused, if any.
    pub fn blur(&mut self) -> Option<NodeId> {
        self.focused.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_reports_previous() {
        let mut focus = FocusState::new();
        assert_eq!(focus.focus(NodeId(1)), None);
        assert_eq!(focus.focused(), Some(NodeId(1)));

        // Refocusing the same node is not a change
        assert_eq!(focus.focus(NodeId(1)), None);

        assert_eq!(focus.focus(NodeId(2)), Some(NodeId(1)));
        assert_eq!(focus.blur(), Some(NodeId(2)));
        assert_eq!(focus.blur(), None);
    }
}
