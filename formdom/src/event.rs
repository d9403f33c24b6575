use std::rc::Rc;

use crate::document::Document;
use crate::element::NodeId;

/// Events delivered to listeners, always targeted at a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Pointer activation (click or tap) on a node. Bubbles.
    Click { target: NodeId },
    /// Key press, targeted at the focused node. Bubbles.
    Key {
        target: NodeId,
        key: Key,
        modifiers: Modifiers,
    },
    /// Node lost focus. Does not bubble.
    Blur { target: NodeId },
}

impl Event {
    pub fn target(&self) -> NodeId {
        match self {
            Self::Click { target } | Self::Key { target, .. } | Self::Blur { target } => *target,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::Click { .. } => EventKind::PointerActivate,
            Self::Key { .. } => EventKind::KeyPress,
            Self::Blur { .. } => EventKind::FocusLost,
        }
    }
}

/// The fixed set of event kinds a listener can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerActivate,
    FocusLost,
    KeyPress,
}

impl EventKind {
    pub fn bubbles(self) -> bool {
        !matches!(self, Self::FocusLost)
    }
}

/// Listener callback. Receives the document so it can mutate the tree and
/// schedule timers, and the event with its original target.
pub type Handler = Rc<dyn Fn(&mut Document, &Event)>;

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
    /// Any key without a dedicated variant.
    Other,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_key_from_crossterm() {
        assert_eq!(Key::from(KeyCode::Char(' ')), Key::Char(' '));
        assert_eq!(Key::from(KeyCode::Esc), Key::Escape);
        assert_eq!(Key::from(KeyCode::CapsLock), Key::Other);
    }

    #[test]
    fn test_modifiers_from_crossterm() {
        let mods: Modifiers = (KeyModifiers::CONTROL | KeyModifiers::SHIFT).into();
        assert!(mods.ctrl);
        assert!(mods.shift);
        assert!(!mods.alt);
        assert!(!mods.none());
    }

    #[test]
    fn test_blur_does_not_bubble() {
        assert!(EventKind::PointerActivate.bubbles());
        assert!(EventKind::KeyPress.bubbles());
        assert!(!EventKind::FocusLost.bubbles());
    }
}
