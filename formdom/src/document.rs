use std::collections::HashMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::element::{Node, NodeId};
use crate::error::DomError;
use crate::event::{Event, EventKind, Handler, Key, Modifiers};
use crate::focus::FocusState;
use crate::timer::{TimerId, Timers};

/// Arena-backed node tree with listeners, focus and a clock.
///
/// The document owns every node it creates; nodes are never freed and
/// `NodeId`s stay valid for the document's lifetime. Time only moves when
/// [`advance_to`](Self::advance_to) is called, which is also when timers fire.
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    listeners: HashMap<(NodeId, EventKind), Vec<Handler>>,
    focus: FocusState,
    timers: Timers,
    now: Instant,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.nodes.len())
            .field("listeners", &self.listeners.len())
            .field("focus", &self.focus)
            .field("timers", &self.timers)
            .finish()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new("body")],
            root: NodeId(0),
            listeners: HashMap::new(),
            focus: FocusState::new(),
            timers: Timers::new(),
            now: Instant::now(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    // -------------------------------------------------------------------------
    // Tree
    // -------------------------------------------------------------------------

    /// Add a detached node to the document.
    pub fn create(&mut self, mut node: Node) -> NodeId {
        node.parent = None;
        node.children.clear();
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Add a detached node that adopts `children`, which must be detached
    /// nodes of this document.
    pub(crate) fn create_parent(&mut self, mut node: Node, children: Vec<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        for &child in &children {
            if let Some(c) = self.nodes.get_mut(child.0) {
                c.parent = Some(id);
            }
        }
        node.parent = None;
        node.children = children;
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, DomError> {
        self.nodes.get(id.0).ok_or(DomError::UnknownNode(id))
    }

    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, DomError> {
        self.nodes.get_mut(id.0).ok_or(DomError::UnknownNode(id))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId], DomError> {
        Ok(&self.node(id)?.children)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.node(parent)?;
        self.detach(child)?;
        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Insert `node` as the next sibling of `reference`.
    pub fn insert_after(&mut self, reference: NodeId, node: NodeId) -> Result<(), DomError> {
        self.node(node)?;
        let parent = self.node(reference)?.parent.ok_or(DomError::Detached(reference))?;
        self.detach(node)?;
        let siblings = &mut self.node_mut(parent)?.children;
        let pos = siblings
            .iter()
            .position(|&c| c == reference)
            .map(|p| p + 1)
            .unwrap_or(siblings.len());
        siblings.insert(pos, node);
        self.node_mut(node)?.parent = Some(parent);
        Ok(())
    }

    fn detach(&mut self, id: NodeId) -> Result<(), DomError> {
        if let Some(parent) = self.node_mut(id)?.parent.take() {
            self.node_mut(parent)?.children.retain(|&c| c != id);
        }
        Ok(())
    }

    /// All descendants of `root` in tree order, excluding `root` itself.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        self.collect_descendants(root, &mut result);
        result
    }

    fn collect_descendants(&self, id: NodeId, result: &mut Vec<NodeId>) {
        if let Some(node) = self.get(id) {
            for &child in &node.children {
                result.push(child);
                self.collect_descendants(child, result);
            }
        }
    }

    /// Ancestors of `id` from its parent up to the root.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = self.parent(id);
        while let Some(p) = current {
            result.push(p);
            current = self.parent(p);
        }
        result
    }

    // -------------------------------------------------------------------------
    // Attributes
    // -------------------------------------------------------------------------

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.get(id).is_some_and(|n| n.has_class(class))
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) -> Result<(), DomError> {
        let node = self.node_mut(id)?;
        if !node.has_class(class) {
            node.classes.push(class.to_string());
        }
        Ok(())
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) -> Result<(), DomError> {
        self.node_mut(id)?.classes.retain(|c| c != class);
        Ok(())
    }

    /// Toggle a class, or force it on/off. Returns whether the class is present
    /// afterwards.
    pub fn toggle_class(
        &mut self,
        id: NodeId,
        class: &str,
        force: Option<bool>,
    ) -> Result<bool, DomError> {
        let present = force.unwrap_or_else(|| !self.has_class(id, class));
        if present {
            self.add_class(id, class)?;
        } else {
            self.remove_class(id, class)?;
        }
        Ok(present)
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|n| n.text.as_str())
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> Result<(), DomError> {
        self.node_mut(id)?.text = text.into();
        Ok(())
    }

    pub fn set_hidden(&mut self, id: NodeId, hidden: bool) -> Result<(), DomError> {
        self.node_mut(id)?.hidden = hidden;
        Ok(())
    }

    /// Whether the node and all of its ancestors are shown.
    pub fn is_displayed(&self, id: NodeId) -> bool {
        let Some(node) = self.get(id) else {
            return false;
        };
        !node.hidden && self.ancestors(id).iter().all(|&a| self.get(a).is_some_and(|n| !n.hidden))
    }

    pub fn set_data(
        &mut self,
        id: NodeId,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), DomError> {
        self.node_mut(id)?.data.insert(key.into(), value.into());
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// First descendant of `root` carrying `class`.
    pub fn query_class(&self, root: NodeId, class: &str) -> Option<NodeId> {
        self.descendants(root)
            .into_iter()
            .find(|&id| self.has_class(id, class))
    }

    /// Every descendant of `root` carrying `class`, in tree order.
    pub fn query_all_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&id| self.has_class(id, class))
            .collect()
    }

    /// First descendant of `root` whose data attribute `key` equals `value`.
    pub fn find_by_data(&self, root: NodeId, key: &str, value: &str) -> Option<NodeId> {
        self.descendants(root).into_iter().find(|&id| {
            self.get(id)
                .and_then(|n| n.get_data(key))
                .is_some_and(|v| v == value)
        })
    }

    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        (0..self.nodes.len())
            .map(NodeId)
            .find(|&n| self.get(n).and_then(|node| node.id.as_deref()) == Some(id))
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Subscribe `handler` to events of `kind` reaching `node`.
    pub fn listen(
        &mut self,
        node: NodeId,
        kind: EventKind,
        handler: impl Fn(&mut Document, &Event) + 'static,
    ) -> Result<(), DomError> {
        self.node(node)?;
        self.listeners
            .entry((node, kind))
            .or_default()
            .push(Rc::new(handler));
        Ok(())
    }

    pub fn listener_count(&self, node: NodeId, kind: EventKind) -> usize {
        self.listeners.get(&(node, kind)).map_or(0, Vec::len)
    }

    /// Deliver an event to its target, then to each ancestor if it bubbles.
    pub fn dispatch(&mut self, event: Event) {
        let kind = event.kind();
        let target = event.target();
        let mut path = vec![target];
        if kind.bubbles() {
            path.extend(self.ancestors(target));
        }

        log::trace!("[dispatch] {:?} path={:?}", event, path);

        for node in path {
            let handlers: Vec<Handler> = self
                .listeners
                .get(&(node, kind))
                .cloned()
                .unwrap_or_default();
            for handler in handlers {
                handler(self, &event);
            }
        }
    }

    /// Simulate a pointer activation on `target`.
    ///
    /// Focus moves to the nearest focusable ancestor (or the target itself);
    /// activating outside any focusable node blurs the current focus.
    pub fn click(&mut self, target: NodeId) -> Result<(), DomError> {
        self.node(target)?;
        let focus_target = std::iter::once(target)
            .chain(self.ancestors(target))
            .find(|&id| self.get(id).is_some_and(Node::is_focusable));

        match focus_target {
            Some(id) => self.focus(id)?,
            None => self.blur(),
        }

        self.dispatch(Event::Click { target });
        Ok(())
    }

    /// Deliver a key press to the focused node. Ignored when nothing has focus.
    pub fn key_press(&mut self, key: Key, modifiers: Modifiers) {
        match self.focus.focused() {
            Some(target) => self.dispatch(Event::Key {
                target,
                key,
                modifiers,
            }),
            None => log::trace!("[dispatch] key {:?} dropped, nothing focused", key),
        }
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    pub fn focused(&self) -> Option<NodeId> {
        self.focus.focused()
    }

    /// Focus `id`, emitting a blur on the previously focused node.
    pub fn focus(&mut self, id: NodeId) -> Result<(), DomError> {
        self.node(id)?;
        if let Some(old) = self.focus.focus(id) {
            log::debug!("[focus] {} -> {}", old, id);
            self.dispatch(Event::Blur { target: old });
        }
        Ok(())
    }

    /// Clear focus, emitting a blur on the node that had it.
    pub fn blur(&mut self) {
        if let Some(old) = self.focus.blur() {
            log::debug!("[focus] {} blurred", old);
            self.dispatch(Event::Blur { target: old });
        }
    }

    // -------------------------------------------------------------------------
    // Clock & timers
    // -------------------------------------------------------------------------

    pub fn now(&self) -> Instant {
        self.now
    }

    /// Run `callback` once `delay` has elapsed on the document clock.
    pub fn set_timeout(
        &mut self,
        delay: Duration,
        callback: impl FnOnce(&mut Document) + 'static,
    ) -> TimerId {
        self.timers.schedule(self.now + delay, Box::new(callback))
    }

    /// Cancel a pending timeout. Returns false if it is no longer pending.
    pub fn clear_timeout(&mut self, id: TimerId) -> bool {
        self.timers.cancel(id)
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    pub fn advance(&mut self, by: Duration) {
        self.advance_to(self.now + by);
    }

    /// Move the clock forward to `to`, firing due timers in deadline order.
    /// The clock never runs backwards.
    pub fn advance_to(&mut self, to: Instant) {
        while let Some((deadline, callback)) = self.timers.pop_due(to) {
            self.now = self.now.max(deadline);
            callback(self);
        }
        self.now = self.now.max(to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_insert_after_places_next_sibling() {
        let mut doc = Document::new();
        let root = doc.root();
        let a = doc.create(Node::div().id("a"));
        let b = doc.create(Node::div().id("b"));
        let c = doc.create(Node::div().id("c"));
        doc.append_child(root, a).unwrap();
        doc.append_child(root, b).unwrap();
        doc.insert_after(a, c).unwrap();

        assert_eq!(doc.children(root).unwrap(), &[a, c, b]);
        assert_eq!(doc.parent(c), Some(root));
    }

    #[test]
    fn test_insert_after_detached_reference() {
        let mut doc = Document::new();
        let a = doc.create(Node::div());
        let b = doc.create(Node::div());
        assert_eq!(doc.insert_after(a, b), Err(DomError::Detached(a)));
    }

    #[test]
    fn test_append_moves_node() {
        let mut doc = Document::new();
        let root = doc.root();
        let a = doc.create(Node::div());
        let b = doc.create(Node::div());
        let child = doc.create(Node::span());
        doc.append_child(root, a).unwrap();
        doc.append_child(root, b).unwrap();
        doc.append_child(a, child).unwrap();
        doc.append_child(b, child).unwrap();

        assert!(doc.children(a).unwrap().is_empty());
        assert_eq!(doc.children(b).unwrap(), &[child]);
    }

    #[test]
    fn test_toggle_class() {
        let mut doc = Document::new();
        let n = doc.create(Node::ul());
        assert!(doc.toggle_class(n, "show", None).unwrap());
        assert!(doc.has_class(n, "show"));
        assert!(!doc.toggle_class(n, "show", None).unwrap());
        assert!(!doc.toggle_class(n, "show", Some(false)).unwrap());
        assert!(doc.toggle_class(n, "show", Some(true)).unwrap());
        assert!(doc.toggle_class(n, "show", Some(true)).unwrap());
        assert_eq!(doc.get(n).unwrap().classes, vec!["show".to_string()]);
    }

    #[test]
    fn test_unknown_node() {
        let mut doc = Document::new();
        let bogus = NodeId(99);
        assert_eq!(doc.add_class(bogus, "x"), Err(DomError::UnknownNode(bogus)));
        assert!(!doc.has_class(bogus, "x"));
    }

    #[test]
    fn test_timers_fire_when_clock_advances() {
        let mut doc = Document::new();
        let fired = Rc::new(RefCell::new(Vec::new()));

        let log = fired.clone();
        doc.set_timeout(Duration::from_millis(500), move |_| log.borrow_mut().push("late"));
        let log = fired.clone();
        doc.set_timeout(Duration::from_millis(100), move |_| log.borrow_mut().push("early"));

        doc.advance(Duration::from_millis(99));
        assert!(fired.borrow().is_empty());

        doc.advance(Duration::from_millis(1));
        assert_eq!(*fired.borrow(), vec!["early"]);

        doc.advance(Duration::from_millis(400));
        assert_eq!(*fired.borrow(), vec!["early", "late"]);
    }

    #[test]
    fn test_cleared_timeout_never_fires() {
        let mut doc = Document::new();
        let fired = Rc::new(RefCell::new(false));
        let flag = fired.clone();
        let id = doc.set_timeout(Duration::from_millis(10), move |_| *flag.borrow_mut() = true);
        assert!(doc.clear_timeout(id));
        doc.advance(Duration::from_secs(1));
        assert!(!*fired.borrow());
    }

    #[test]
    fn test_timer_sees_its_own_deadline() {
        let mut doc = Document::new();
        let start = doc.now();
        let seen = Rc::new(RefCell::new(None));
        let slot = seen.clone();
        doc.set_timeout(Duration::from_millis(50), move |doc| {
            *slot.borrow_mut() = Some(doc.now());
        });
        doc.advance(Duration::from_secs(1));
        assert_eq!(*seen.borrow(), Some(start + Duration::from_millis(50)));
        assert_eq!(doc.now(), start + Duration::from_secs(1));
    }
}
