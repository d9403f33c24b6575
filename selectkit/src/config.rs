//! Widget configuration.

use std::time::Duration;

/// Configuration for a [`SelectWidget`](crate::SelectWidget).
///
/// Class names are what the widget writes onto its surfaces; a stylesheet or
/// renderer keys off them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectConfig {
    /// Idle time after which the type-ahead search buffer resets.
    pub search_timeout: Duration,

    /// Rows the option list shows at once. `None` shows every option.
    pub visible_rows: Option<u16>,

    pub container_class: String,
    pub label_class: String,
    pub options_class: String,
    pub option_class: String,
    /// Marks the row of the selected option.
    pub selected_class: String,
    /// Present on the option list while it is open.
    pub open_class: String,

    /// Data attribute on each row carrying the option's value.
    pub value_attribute: String,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            search_timeout: Duration::from_millis(500),
            visible_rows: None,
            container_class: "custom-select-container".into(),
            label_class: "custom-select-value".into(),
            options_class: "custom-select-options".into(),
            option_class: "custom-select-option".into(),
            selected_class: "selected".into(),
            open_class: "show".into(),
            value_attribute: "value".into(),
        }
    }
}

impl SelectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the type-ahead reset delay.
    pub fn search_timeout(mut self, timeout: Duration) -> Self {
        self.search_timeout = timeout;
        self
    }

    /// Bound the option list to `rows` visible rows; the selected row is
    /// scrolled into view on every selection change.
    pub fn visible_rows(mut self, rows: u16) -> Self {
        self.visible_rows = Some(rows);
        self
    }

    pub fn selected_class(mut self, class: impl Into<String>) -> Self {
        self.selected_class = class.into();
        self
    }

    pub fn open_class(mut self, class: impl Into<String>) -> Self {
        self.open_class = class.into();
        self
    }
}
