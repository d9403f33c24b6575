//! Event handling for the select widget.

use std::cell::RefCell;
use std::rc::Rc;

use formdom::{Document, Event, EventKind, Key, Modifiers};

use super::search::find_prefix;
use super::state::SelectInner;
use crate::error::SelectError;

type Shared = Rc<RefCell<SelectInner>>;

/// Register the widget's listeners on its surfaces.
///
/// - label: pointer-activate toggles the list
/// - each row: pointer-activate selects that option and closes the list
/// - container: focus-lost closes the list, key-press drives keyboard control
pub(crate) fn attach(doc: &mut Document, inner: &Shared) -> Result<(), SelectError> {
    let (container, label, rows) = {
        let state = inner.borrow();
        (
            state.surfaces.container,
            state.surfaces.label,
            state.surfaces.rows.clone(),
        )
    };

    doc.listen(
        label,
        EventKind::PointerActivate,
        handler(inner.clone(), |state, doc, _| state.toggle(doc)),
    )?;

    for (index, row) in rows.into_iter().enumerate() {
        doc.listen(
            row,
            EventKind::PointerActivate,
            handler(inner.clone(), move |state, doc, _| {
                state.select_index(doc, index)?;
                state.set_open(doc, false)
            }),
        )?;
    }

    doc.listen(
        container,
        EventKind::FocusLost,
        handler(inner.clone(), |state, doc, _| state.set_open(doc, false)),
    )?;

    let keys = inner.clone();
    doc.listen(container, EventKind::KeyPress, move |doc: &mut Document, event: &Event| {
        if let Event::Key { key, modifiers, .. } = event
            && let Err(err) = on_key(&keys, doc, *key, *modifiers)
        {
            log::error!("[select] key handler failed: {err}");
        }
    })?;

    Ok(())
}

/// Adapt a fallible state handler into a document listener. Failures are
/// logged and leave the widget as it was at the point of failure.
fn handler(
    inner: Shared,
    f: impl Fn(&mut SelectInner, &mut Document, &Event) -> Result<(), SelectError> + 'static,
) -> impl Fn(&mut Document, &Event) + 'static {
    move |doc: &mut Document, event: &Event| {
        let Ok(mut state) = inner.try_borrow_mut() else {
            log::error!("[select] re-entrant {:?} ignored", event.kind());
            return;
        };
        if let Err(err) = f(&mut state, doc, event) {
            log::error!("[select] {:?} handler failed: {err}", event.kind());
        }
    }
}

fn on_key(
    inner: &Shared,
    doc: &mut Document,
    key: Key,
    modifiers: Modifiers,
) -> Result<(), SelectError> {
    // Leave shortcuts to whoever else is listening
    if modifiers.ctrl || modifiers.alt {
        return Ok(());
    }

    let Ok(mut state) = inner.try_borrow_mut() else {
        log::error!("[select] re-entrant {:?} ignored", key);
        return Ok(());
    };
    log::trace!("[select] {} key {:?}", state.native, key);

    match key {
        Key::Char(' ') => state.toggle(doc),
        Key::Up => match state.selected.checked_sub(1) {
            Some(prev) => state.select_index(doc, prev),
            None => Ok(()),
        },
        Key::Down => {
            let next = state.selected + 1;
            if next < state.options.len() {
                state.select_index(doc, next)
            } else {
                Ok(())
            }
        }
        Key::Enter | Key::Escape => state.set_open(doc, false),
        Key::Char(c) => {
            if let Some(pending) = state.search.take_timer() {
                doc.clear_timeout(pending);
            }
            state.search.push(c);

            let timer_state = inner.clone();
            let id = doc.set_timeout(state.config.search_timeout, move |_| {
                match timer_state.try_borrow_mut() {
                    Ok(mut state) => state.search.clear(),
                    Err(_) => log::error!("[select] search reset skipped, state busy"),
                }
            });
            state.search.set_timer(id);

            let found = find_prefix(&state.options, state.search.term());
            match found {
                Some(index) => state.select_index(doc, index),
                None => Ok(()),
            }
        }
        _ => Ok(()),
    }
}
