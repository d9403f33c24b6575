use std::collections::HashMap;

use crate::native::NativeOption;

/// Handle to a node owned by a [`Document`](crate::Document).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Node {
    // Identity
    pub tag: String,
    pub id: Option<String>,

    // Attributes
    pub classes: Vec<String>,
    pub data: HashMap<String, String>,
    pub text: String,

    // Visual
    /// Hidden nodes and their subtrees are skipped by the renderer.
    pub hidden: bool,
    /// Number of child rows visible at once. `None` means unbounded.
    pub viewport: Option<u16>,
    /// Index of the first visible child row when `viewport` is set.
    pub scroll_top: usize,

    // Interaction
    /// Focusable when set, like a `tabindex` attribute.
    pub tab_index: Option<i32>,

    // Native option payload, present only on `option` nodes.
    pub native: Option<NativeOption>,

    // Tree links, maintained by the document
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn ul() -> Self {
        Self::new("ul")
    }

    pub fn li() -> Self {
        Self::new("li")
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    // Attributes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    // Visual
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn viewport(mut self, rows: u16) -> Self {
        self.viewport = Some(rows);
        self
    }

    // Interaction
    pub fn tab_index(mut self, index: i32) -> Self {
        self.tab_index = Some(index);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    pub fn is_focusable(&self) -> bool {
        self.tab_index.is_some()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}
