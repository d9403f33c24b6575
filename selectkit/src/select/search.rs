//! Type-ahead search over option labels.

use formdom::TimerId;

use super::SelectOption;

/// Accumulated keystrokes plus the pending timer that will reset them.
#[derive(Debug, Default)]
pub(crate) struct TypeAhead {
    term: String,
    reset: Option<TimerId>,
}

impl TypeAhead {
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn push(&mut self, c: char) {
        self.term.push(c);
    }

    pub fn clear(&mut self) {
        self.term.clear();
        self.reset = None;
    }

    pub fn take_timer(&mut self) -> Option<TimerId> {
        self.reset.take()
    }

    pub fn set_timer(&mut self, id: TimerId) {
        self.reset = Some(id);
    }
}

/// Index of the first option whose label starts with `term`, ignoring case.
pub(crate) fn find_prefix(options: &[SelectOption], term: &str) -> Option<usize> {
    if term.is_empty() {
        return None;
    }
    let term = term.to_lowercase();
    options
        .iter()
        .position(|o| o.label().to_lowercase().starts_with(&term))
}
