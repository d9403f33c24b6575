//! Native single-selection control: a `select` node with `option` children.

use crate::document::Document;
use crate::element::{Node, NodeId};
use crate::error::DomError;

/// Payload of a native `option` node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NativeOption {
    pub value: String,
    pub label: String,
    /// Explicit selected flag. See [`Document::is_option_selected`] for the
    /// effective value.
    pub selected: bool,
}

impl NativeOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected: false,
        }
    }

    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }
}

impl Document {
    /// Create a detached `select` node with one `option` child per entry.
    pub fn create_select(
        &mut self,
        name: impl Into<String>,
        options: impl IntoIterator<Item = NativeOption>,
    ) -> NodeId {
        let children = options
            .into_iter()
            .map(|option| {
                let mut node = Node::new("option").text(option.label.clone());
                node.native = Some(option);
                self.create(node)
            })
            .collect();
        self.create_parent(Node::new("select").id(name), children)
    }

    fn get_native_mut(&mut self, id: NodeId) -> Option<&mut Option<NativeOption>> {
        self.node_mut(id).ok().map(|n| &mut n.native)
    }

    fn expect_select(&self, select: NodeId) -> Result<&Node, DomError> {
        let node = self.node(select)?;
        if node.tag != "select" {
            return Err(DomError::NotASelect(select));
        }
        Ok(node)
    }

    fn expect_option(&self, option: NodeId) -> Result<&NativeOption, DomError> {
        self.node(option)?
            .native
            .as_ref()
            .ok_or(DomError::NotAnOption(option))
    }

    /// Option nodes of a select control in document order.
    pub fn native_options(&self, select: NodeId) -> Result<Vec<NodeId>, DomError> {
        let node = self.expect_select(select)?;
        Ok(node
            .children
            .iter()
            .copied()
            .filter(|&c| self.get(c).is_some_and(|n| n.native.is_some()))
            .collect())
    }

    pub fn native_option(&self, option: NodeId) -> Result<&NativeOption, DomError> {
        self.expect_option(option)
    }

    /// Effective selectedness of an option.
    ///
    /// A single-select control with no explicitly selected option reports its
    /// first option as selected. When several are flagged, the first wins.
    pub fn is_option_selected(&self, option: NodeId) -> Result<bool, DomError> {
        self.expect_option(option)?;
        let Some(select) = self.parent(option) else {
            return Ok(self.expect_option(option)?.selected);
        };
        Ok(self.selected_native_option(select)? == Some(option))
    }

    /// Set an option's selected flag. Selecting clears every sibling, as a
    /// single-select control does.
    pub fn set_option_selected(&mut self, option: NodeId, selected: bool) -> Result<(), DomError> {
        self.expect_option(option)?;
        if selected {
            if let Some(select) = self.parent(option) {
                for sibling in self.native_options(select)? {
                    if let Some(Some(n)) = self.get_native_mut(sibling) {
                        n.selected = false;
                    }
                }
            }
        }
        if let Some(Some(n)) = self.get_native_mut(option) {
            n.selected = selected;
        }
        Ok(())
    }

    /// The option a form submission would read. `None` only for an empty control.
    pub fn selected_native_option(&self, select: NodeId) -> Result<Option<NodeId>, DomError> {
        let options = self.native_options(select)?;
        let flagged = options.iter().copied().find(|&o| {
            self.get(o)
                .and_then(|n| n.native.as_ref())
                .is_some_and(|n| n.selected)
        });
        Ok(flagged.or_else(|| options.first().copied()))
    }

    /// Value of the selected option, as a form would submit it.
    pub fn native_value(&self, select: NodeId) -> Result<Option<String>, DomError> {
        Ok(self
            .selected_native_option(select)?
            .and_then(|o| self.get(o))
            .and_then(|n| n.native.as_ref())
            .map(|n| n.value.clone()))
    }
}
