use formdom::{Document, NodeId};

use crate::error::SelectError;

/// One selectable entry, linked to the native option it mirrors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    value: String,
    label: String,
    selected: bool,
    element: NodeId,
}

impl SelectOption {
    /// Read a native option node. `selected` is the option's effective state,
    /// so a control with nothing flagged reports its first option.
    pub(crate) fn from_native(doc: &Document, element: NodeId) -> Result<Self, SelectError> {
        let native = doc.native_option(element)?;
        Ok(Self {
            value: native.value.clone(),
            label: native.label.clone(),
            selected: doc.is_option_selected(element)?,
            element,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// The native option node backing this entry.
    pub fn element(&self) -> NodeId {
        self.element
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}
