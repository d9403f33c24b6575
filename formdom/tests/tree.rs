use formdom::{Document, Node};

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_query_class_in_tree_order() {
    let mut doc = Document::new();
    let root = doc.root();
    let a = doc.create(Node::div().class("item"));
    let b = doc.create(Node::div());
    let c = doc.create(Node::span().class("item"));
    doc.append_child(root, a).unwrap();
    doc.append_child(root, b).unwrap();
    doc.append_child(b, c).unwrap();

    assert_eq!(doc.query_class(root, "item"), Some(a));
    assert_eq!(doc.query_all_class(root, "item"), vec![a, c]);
    assert_eq!(doc.query_all_class(b, "item"), vec![c]);
    assert_eq!(doc.query_class(root, "missing"), None);
}

#[test]
fn test_query_excludes_root() {
    let mut doc = Document::new();
    let root = doc.root();
    let a = doc.create(Node::div().class("item"));
    doc.append_child(root, a).unwrap();
    assert_eq!(doc.query_class(a, "item"), None);
}

#[test]
fn test_find_by_data() {
    let mut doc = Document::new();
    let root = doc.root();
    let a = doc.create(Node::li().data("value", "a"));
    let b = doc.create(Node::li().data("value", "b"));
    doc.append_child(root, a).unwrap();
    doc.append_child(root, b).unwrap();

    assert_eq!(doc.find_by_data(root, "value", "b"), Some(b));
    assert_eq!(doc.find_by_data(root, "value", "z"), None);

    doc.set_data(a, "value", "z").unwrap();
    assert_eq!(doc.find_by_data(root, "value", "z"), Some(a));
}

#[test]
fn test_find_by_id() {
    let mut doc = Document::new();
    let a = doc.create(Node::div().id("main"));
    assert_eq!(doc.find_by_id("main"), Some(a));
    assert_eq!(doc.find_by_id("other"), None);
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_is_displayed_follows_ancestors() {
    let mut doc = Document::new();
    let root = doc.root();
    let outer = doc.create(Node::div());
    let inner = doc.create(Node::span().text("x"));
    doc.append_child(root, outer).unwrap();
    doc.append_child(outer, inner).unwrap();

    assert!(doc.is_displayed(inner));
    doc.set_hidden(outer, true).unwrap();
    assert!(!doc.is_displayed(inner));
    doc.set_hidden(outer, false).unwrap();
    assert!(doc.is_displayed(inner));
}

#[test]
fn test_set_text() {
    let mut doc = Document::new();
    let span = doc.create(Node::span().text("old"));
    doc.set_text(span, "new").unwrap();
    assert_eq!(doc.text(span), Some("new"));
}
