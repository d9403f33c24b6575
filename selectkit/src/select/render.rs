//! Builds the visual surfaces that stand in for the native control.

use formdom::{Document, Node, NodeId};

use super::SelectOption;
use crate::config::SelectConfig;
use crate::error::SelectError;

/// Nodes owned by one widget.
#[derive(Debug, Clone)]
pub(crate) struct Surfaces {
    pub container: NodeId,
    pub label: NodeId,
    pub list: NodeId,
    /// One row per option, same order as the option sequence.
    pub rows: Vec<NodeId>,
}

/// Create the container, label, list and rows, hide the native control and
/// insert the container right after it.
///
/// The list starts closed.
pub(crate) fn build(
    doc: &mut Document,
    native: NodeId,
    config: &SelectConfig,
    options: &[SelectOption],
    selected: usize,
) -> Result<Surfaces, SelectError> {
    let container = doc.create(Node::div().class(&config.container_class).tab_index(0));

    let label_text = options
        .get(selected)
        .map(|o| o.label().to_string())
        .unwrap_or_default();
    let label = doc.create(Node::span().class(&config.label_class).text(label_text));
    doc.append_child(container, label)?;

    let mut list_node = Node::ul().class(&config.options_class).hidden(true);
    if let Some(rows) = config.visible_rows {
        list_node = list_node.viewport(rows);
    }
    let list = doc.create(list_node);

    let mut rows = Vec::with_capacity(options.len());
    for (i, option) in options.iter().enumerate() {
        let mut row = Node::li()
            .class(&config.option_class)
            .text(option.label())
            .data(&config.value_attribute, option.value());
        if i == selected {
            row = row.class(&config.selected_class);
        }
        let row = doc.create(row);
        doc.append_child(list, row)?;
        rows.push(row);
    }
    doc.append_child(container, list)?;

    doc.insert_after(native, container)?;
    doc.set_hidden(native, true)?;

    if let Some(&row) = rows.get(selected) {
        doc.scroll_into_view(row)?;
    }

    Ok(Surfaces {
        container,
        label,
        list,
        rows,
    })
}
