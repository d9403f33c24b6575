//! Select widget state.

use std::cell::RefCell;
use std::rc::Rc;

use formdom::{Document, DomError, NodeId};

use super::events;
use super::render::{self, Surfaces};
use super::search::TypeAhead;
use super::SelectOption;
use crate::config::SelectConfig;
use crate::error::SelectError;

/// Internal state for a select widget, shared with its event handlers.
#[derive(Debug)]
pub(crate) struct SelectInner {
    pub config: SelectConfig,
    pub native: NodeId,
    pub surfaces: Surfaces,
    /// Options in source order. Exactly one has `selected` set.
    pub options: Vec<SelectOption>,
    /// Index of the selected option.
    pub selected: usize,
    /// Whether the option list is shown.
    pub open: bool,
    pub search: TypeAhead,
}

impl SelectInner {
    /// Move the selection to `index`, mirroring it onto the native control,
    /// the label, the row markers and the list scroll position.
    pub fn select_index(&mut self, doc: &mut Document, index: usize) -> Result<(), SelectError> {
        let len = self.options.len();
        if index >= len {
            return Err(SelectError::IndexOutOfRange { index, len });
        }

        let prev = self.selected;
        let prev_element = self.options[prev].element();
        self.options[prev].set_selected(false);
        doc.set_option_selected(prev_element, false)?;

        let next = &mut self.options[index];
        next.set_selected(true);
        doc.set_option_selected(next.element(), true)?;
        doc.set_text(self.surfaces.label, next.label())?;
        self.selected = index;

        let selected_class = &self.config.selected_class;
        doc.remove_class(self.surfaces.rows[prev], selected_class)?;
        let row = self.surfaces.rows[index];
        doc.add_class(row, selected_class)?;
        doc.scroll_into_view(row)?;

        log::debug!(
            "[select] {} selected {} -> {} ({:?})",
            self.native,
            prev,
            index,
            self.options[index].value()
        );
        Ok(())
    }

    pub fn set_open(&mut self, doc: &mut Document, open: bool) -> Result<(), SelectError> {
        let list = self.surfaces.list;
        doc.toggle_class(list, &self.config.open_class, Some(open))?;
        doc.set_hidden(list, !open)?;
        if self.open != open {
            log::debug!("[select] {} open={}", self.native, open);
        }
        self.open = open;
        Ok(())
    }

    pub fn toggle(&mut self, doc: &mut Document) -> Result<(), SelectError> {
        self.set_open(doc, !self.open)
    }

    pub fn position_of(&self, option: &SelectOption) -> Option<usize> {
        self.options
            .iter()
            .position(|o| o.element() == option.element())
    }
}

/// A custom dropdown mirroring one native select control.
///
/// Construction hides the native control and inserts the widget's surfaces
/// right after it. The native control stays the source of truth for form
/// submission: every selection change is written back to it.
///
/// The widget registers listeners on its own nodes, so it keeps working for
/// the document's lifetime even if this handle is dropped. Clones share state.
///
/// # Example
///
/// ```
/// use formdom::{Document, NativeOption};
/// use selectkit::SelectWidget;
///
/// let mut doc = Document::new();
/// let native = doc.create_select("fruit", [
///     NativeOption::new("a", "Apple"),
///     NativeOption::new("b", "Banana").selected(),
/// ]);
/// let root = doc.root();
/// doc.append_child(root, native).unwrap();
///
/// let select = SelectWidget::new(&mut doc, native).unwrap();
/// assert_eq!(select.value(), "b");
///
/// select.select_index(&mut doc, 0).unwrap();
/// assert_eq!(doc.native_value(native).unwrap().as_deref(), Some("a"));
/// ```
#[derive(Debug, Clone)]
pub struct SelectWidget {
    inner: Rc<RefCell<SelectInner>>,
}

impl SelectWidget {
    /// Build a widget over `native` with the default configuration.
    pub fn new(doc: &mut Document, native: NodeId) -> Result<Self, SelectError> {
        Self::with_config(doc, native, SelectConfig::default())
    }

    /// Build a widget over `native`.
    ///
    /// The native control must be attached to the tree and hold at least one
    /// option. If several options are flagged selected the first one wins and
    /// the others are cleared on the native control too.
    pub fn with_config(
        doc: &mut Document,
        native: NodeId,
        config: SelectConfig,
    ) -> Result<Self, SelectError> {
        let elements = doc.native_options(native)?;
        if elements.is_empty() {
            return Err(SelectError::NoOptions(native));
        }
        if doc.parent(native).is_none() {
            return Err(DomError::Detached(native).into());
        }

        let mut options = elements
            .into_iter()
            .map(|e| SelectOption::from_native(doc, e))
            .collect::<Result<Vec<_>, _>>()?;

        let selected = options.iter().position(|o| o.is_selected()).unwrap_or(0);
        for (i, option) in options.iter_mut().enumerate() {
            option.set_selected(i == selected);
        }

        // The native control is only touched once the surfaces exist.
        let surfaces = render::build(doc, native, &config, &options, selected)?;
        doc.set_option_selected(options[selected].element(), true)?;

        log::debug!(
            "[select] {} built with {} options, selected={}",
            native,
            options.len(),
            selected
        );

        let inner = Rc::new(RefCell::new(SelectInner {
            config,
            native,
            surfaces,
            options,
            selected,
            open: false,
            search: TypeAhead::default(),
        }));
        events::attach(doc, &inner)?;

        Ok(Self { inner })
    }

    // -------------------------------------------------------------------------
    // Selection state
    // -------------------------------------------------------------------------

    /// The option currently selected.
    pub fn selected_option(&self) -> SelectOption {
        let inner = self.inner.borrow();
        inner.options[inner.selected].clone()
    }

    /// Position of the selected option in source order.
    pub fn selected_index(&self) -> usize {
        self.inner.borrow().selected
    }

    /// Value of the selected option.
    pub fn value(&self) -> String {
        self.selected_option().value().to_string()
    }

    /// Label of the selected option.
    pub fn label(&self) -> String {
        self.selected_option().label().to_string()
    }

    /// Snapshot of all options in source order.
    pub fn options(&self) -> Vec<SelectOption> {
        self.inner.borrow().options.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().options.len()
    }

    /// Always false: construction rejects empty controls.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().options.is_empty()
    }

    /// Select `option`, which must be one of this widget's options.
    pub fn select_option(
        &self,
        doc: &mut Document,
        option: &SelectOption,
    ) -> Result<(), SelectError> {
        let mut inner = self.inner.borrow_mut();
        let index = inner
            .position_of(option)
            .ok_or(SelectError::UnknownOption(option.element()))?;
        inner.select_index(doc, index)
    }

    /// Select the option at `index`.
    pub fn select_index(&self, doc: &mut Document, index: usize) -> Result<(), SelectError> {
        self.inner.borrow_mut().select_index(doc, index)
    }

    /// Select the first option whose value is `value`.
    pub fn select_value(&self, doc: &mut Document, value: &str) -> Result<(), SelectError> {
        let mut inner = self.inner.borrow_mut();
        let index = inner
            .options
            .iter()
            .position(|o| o.value() == value)
            .ok_or_else(|| SelectError::UnknownValue(value.to_string()))?;
        inner.select_index(doc, index)
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    /// Check if the option list is shown.
    pub fn is_open(&self) -> bool {
        self.inner.borrow().open
    }

    pub fn open(&self, doc: &mut Document) -> Result<(), SelectError> {
        self.inner.borrow_mut().set_open(doc, true)
    }

    pub fn close(&self, doc: &mut Document) -> Result<(), SelectError> {
        self.inner.borrow_mut().set_open(doc, false)
    }

    pub fn toggle(&self, doc: &mut Document) -> Result<(), SelectError> {
        self.inner.borrow_mut().toggle(doc)
    }

    /// Keystrokes accumulated by type-ahead search since the last reset.
    pub fn search_term(&self) -> String {
        self.inner.borrow().search.term().to_string()
    }

    // -------------------------------------------------------------------------
    // Nodes
    // -------------------------------------------------------------------------

    /// The native select control this widget mirrors.
    pub fn native(&self) -> NodeId {
        self.inner.borrow().native
    }

    /// Focusable wrapper holding the label and the option list.
    pub fn container(&self) -> NodeId {
        self.inner.borrow().surfaces.container
    }

    /// Node showing the selected option's label; clicking it toggles the list.
    pub fn label_node(&self) -> NodeId {
        self.inner.borrow().surfaces.label
    }

    pub fn list_node(&self) -> NodeId {
        self.inner.borrow().surfaces.list
    }

    /// Row for the option at `index`.
    pub fn row(&self, index: usize) -> Option<NodeId> {
        self.inner.borrow().surfaces.rows.get(index).copied()
    }
}
