// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! DOM Node types

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::navigate::{DomNode, FromNode};

/// Shared node storage of one document
pub(crate) type NodeStore = Arc<RwLock<HashMap<NodeId, NodeData>>>;

/// Unique node identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// Create a new unique node ID
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Node type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// Document node
    Document,
    /// Element node (like <div>, <p>, etc.)
    Element,
    /// Text node
    Text,
    /// Comment node
    Comment,
    /// Document type node (<!DOCTYPE>)
    DocumentType,
    /// Processing instruction
    ProcessingInstruction,
    /// Document fragment
    DocumentFragment,
}

impl NodeType {
    /// Get the numeric value (matches DOM spec)
    pub fn as_u8(&self) -> u8 {
        match self {
            NodeType::Element => 1,
            NodeType::Text => 3,
            NodeType::ProcessingInstruction => 7,
            NodeType::Comment => 8,
            NodeType::Document => 9,
            NodeType::DocumentType => 10,
            NodeType::DocumentFragment => 11,
        }
    }

    /// Lowercase name used in listings
    pub fn name(&self) -> &'static str {
        match self {
            NodeType::Document => "document",
            NodeType::Element => "element",
            NodeType::Text => "text",
            NodeType::Comment => "comment",
            NodeType::DocumentType => "doctype",
            NodeType::ProcessingInstruction => "processing-instruction",
            NodeType::DocumentFragment => "fragment",
        }
    }
}

/// Internal node data
#[derive(Debug)]
pub struct NodeData {
    /// Node type
    pub node_type: NodeType,
    /// Tag name (for elements), stored lowercase
    pub tag_name: Option<String>,
    /// Character data (for text, comment and processing instruction nodes)
    pub text_content: Option<String>,
    /// Attributes (for elements), names stored lowercase
    pub attributes: HashMap<String, String>,
    /// Parent node ID
    pub parent: Option<NodeId>,
    /// Child node IDs in document order
    pub children: Vec<NodeId>,
}

impl NodeData {
    fn blank(node_type: NodeType) -> Self {
        Self {
            node_type,
            tag_name: None,
            text_content: None,
            attributes: HashMap::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Create a new element node data
    pub fn element(tag_name: impl Into<String>) -> Self {
        let mut data = Self::blank(NodeType::Element);
        data.tag_name = Some(tag_name.into().to_lowercase());
        data
    }

    /// Create a new text node data
    pub fn text(content: impl Into<String>) -> Self {
        let mut data = Self::blank(NodeType::Text);
        data.text_content = Some(content.into());
        data
    }

    /// Create a new comment node data
    pub fn comment(content: impl Into<String>) -> Self {
        let mut data = Self::blank(NodeType::Comment);
        data.text_content = Some(content.into());
        data
    }

    /// Create a new processing instruction node data
    pub fn processing_instruction(target: impl Into<String>, content: impl Into<String>) -> Self {
        let mut data = Self::blank(NodeType::ProcessingInstruction);
        data.tag_name = Some(target.into());
        data.text_content = Some(content.into());
        data
    }

    /// Create a new doctype node data
    pub fn doctype(name: impl Into<String>) -> Self {
        let mut data = Self::blank(NodeType::DocumentType);
        data.tag_name = Some(name.into());
        data
    }

    /// Create a new document node data
    pub fn document() -> Self {
        Self::blank(NodeType::Document)
    }
}

/// A reference to a node in the DOM tree
#[derive(Debug, Clone)]
pub struct Node {
    /// Node ID
    pub id: NodeId,
    /// Reference to document's node storage
    nodes: NodeStore,
}

impl Node {
    /// Create a new node reference
    pub(crate) fn new(id: NodeId, nodes: NodeStore) -> Self {
        Self { id, nodes }
    }

    /// Get the node type
    pub fn node_type(&self) -> NodeType {
        self.nodes
            .read()
            .get(&self.id)
            .map(|n| n.node_type)
            .unwrap_or(NodeType::Element)
    }

    /// Get the tag name (elements only, lowercase)
    pub fn tag_name(&self) -> Option<String> {
        self.nodes.read().get(&self.id).and_then(|n| {
            if n.node_type == NodeType::Element {
                n.tag_name.clone()
            } else {
                None
            }
        })
    }

    /// Get text content
    ///
    /// Text, comment and processing instruction nodes return their own
    /// data; elements and documents concatenate their descendant text.
    pub fn text_content(&self) -> String {
        let nodes = self.nodes.read();
        match nodes.get(&self.id) {
            Some(node)
                if matches!(
                    node.node_type,
                    NodeType::Comment | NodeType::ProcessingInstruction
                ) =>
            {
                node.text_content.clone().unwrap_or_default()
            }
            _ => Self::collect_text_content(&nodes, self.id),
        }
    }

    /// Concatenate descendant text in document order
    fn collect_text_content(nodes: &HashMap<NodeId, NodeData>, node_id: NodeId) -> String {
        let mut text = String::new();
        let mut stack = vec![node_id];

        while let Some(id) = stack.pop() {
            let Some(node) = nodes.get(&id) else {
                continue;
            };
            match node.node_type {
                NodeType::Text => {
                    if let Some(content) = &node.text_content {
                        text.push_str(content);
                    }
                }
                NodeType::Element | NodeType::Document | NodeType::DocumentFragment => {
                    stack.extend(node.children.iter().rev().copied());
                }
                _ => {}
            }
        }

        text
    }

    /// Get an attribute value
    pub fn get_attribute(&self, name: &str) -> Option<String> {
        self.nodes
            .read()
            .get(&self.id)
            .and_then(|n| n.attributes.get(&name.to_lowercase()).cloned())
    }

    /// Set an attribute value
    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        if let Some(node) = self.nodes.write().get_mut(&self.id) {
            node.attributes.insert(name.into().to_lowercase(), value.into());
        }
    }

    /// Remove an attribute
    pub fn remove_attribute(&self, name: &str) {
        if let Some(node) = self.nodes.write().get_mut(&self.id) {
            node.attributes.remove(&name.to_lowercase());
        }
    }

    /// Check if has an attribute
    pub fn has_attribute(&self, name: &str) -> bool {
        self.nodes
            .read()
            .get(&self.id)
            .map(|n| n.attributes.contains_key(&name.to_lowercase()))
            .unwrap_or(false)
    }

    /// Get all attributes
    pub fn attributes(&self) -> HashMap<String, String> {
        self.nodes
            .read()
            .get(&self.id)
            .map(|n| n.attributes.clone())
            .unwrap_or_default()
    }

    /// Get parent node
    pub fn parent(&self) -> Option<Node> {
        self.nodes
            .read()
            .get(&self.id)
            .and_then(|n| n.parent)
            .map(|id| Node::new(id, self.nodes.clone()))
    }

    /// Number of child nodes
    pub fn child_count(&self) -> usize {
        self.nodes
            .read()
            .get(&self.id)
            .map(|n| n.children.len())
            .unwrap_or(0)
    }

    /// Child node at `index`
    pub fn child_at(&self, index: usize) -> Option<Node> {
        self.nodes
            .read()
            .get(&self.id)
            .and_then(|n| n.children.get(index).copied())
            .map(|id| Node::new(id, self.nodes.clone()))
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.node_type() == NodeType::Element
    }

    /// Append a child node, detaching it from its previous parent
    ///
    /// Fails with [`Error::Dom`] and leaves the tree untouched if:
    /// - `child` belongs to another document
    /// - this node is not a document, element or fragment
    /// - `child` is a document node
    /// - `child` is this node or one of its ancestors
    pub fn append_child(&self, child: &Node) -> Result<()> {
        if !Arc::ptr_eq(&self.nodes, &child.nodes) {
            return Err(Error::dom("cannot append a node from another document"));
        }

        let mut nodes = self.nodes.write();

        let parent_type = nodes
            .get(&self.id)
            .map(|d| d.node_type)
            .ok_or_else(|| Error::dom("parent node is no longer in the document"))?;
        if !matches!(
            parent_type,
            NodeType::Document | NodeType::Element | NodeType::DocumentFragment
        ) {
            return Err(Error::dom(format!(
                "{} nodes cannot have children",
                parent_type.name()
            )));
        }

        match nodes.get(&child.id).map(|d| d.node_type) {
            None => return Err(Error::dom("child node is no longer in the document")),
            Some(NodeType::Document) => {
                return Err(Error::dom("a document node cannot be appended"))
            }
            Some(_) => {}
        }

        let mut ancestor = Some(self.id);
        while let Some(id) = ancestor {
            if id == child.id {
                return Err(Error::dom(
                    "cannot append a node to itself or to one of its descendants",
                ));
            }
            ancestor = nodes.get(&id).and_then(|d| d.parent);
        }

        let old_parent_id = nodes.get(&child.id).and_then(|d| d.parent);
        if let Some(old_pid) = old_parent_id {
            if let Some(old_parent) = nodes.get_mut(&old_pid) {
                old_parent.children.retain(|&id| id != child.id);
            }
        }

        if let Some(child_data) = nodes.get_mut(&child.id) {
            child_data.parent = Some(self.id);
        }

        if let Some(parent_data) = nodes.get_mut(&self.id) {
            parent_data.children.push(child.id);
        }

        Ok(())
    }

    /// Remove a child node
    pub fn remove_child(&self, child: &Node) {
        let mut nodes = self.nodes.write();

        if let Some(parent_data) = nodes.get_mut(&self.id) {
            parent_data.children.retain(|&id| id != child.id);
        }

        if let Some(child_data) = nodes.get_mut(&child.id) {
            if child_data.parent == Some(self.id) {
                child_data.parent = None;
            }
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl DomNode for Node {
    fn node_type(&self) -> NodeType {
        Node::node_type(self)
    }

    fn child_count(&self) -> usize {
        Node::child_count(self)
    }

    fn child_at(&self, index: usize) -> Option<Self> {
        Node::child_at(self, index)
    }
}

impl FromNode<Node> for Node {
    fn from_node(node: Node) -> Option<Self> {
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    #[test]
    fn test_node_id() {
        let id1 = NodeId::new();
        let id2 = NodeId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_node_data() {
        let element = NodeData::element("DIV");
        assert_eq!(element.tag_name, Some("div".to_string()));
        assert_eq!(element.node_type, NodeType::Element);

        let text = NodeData::text("Hello");
        assert_eq!(text.text_content, Some("Hello".to_string()));
        assert_eq!(text.node_type, NodeType::Text);
    }

    #[test]
    fn test_node_type_codes() {
        assert_eq!(NodeType::Element.as_u8(), 1);
        assert_eq!(NodeType::Comment.as_u8(), 8);
        assert_eq!(NodeType::Comment.name(), "comment");
    }

    #[test]
    fn test_append_moves_between_parents() {
        let doc = Document::new();
        let a = doc.create_element("a");
        let b = doc.create_element("b");
        let leaf = doc.create_text_node("x");

        a.append_child(&leaf).unwrap();
        b.append_child(&leaf).unwrap();

        assert_eq!(a.child_count(), 0);
        assert_eq!(b.child_count(), 1);
        assert_eq!(leaf.parent(), Some(b.node.clone()));
    }

    #[test]
    fn test_text_content() {
        let doc = Document::new();
        let p = doc.create_element("p");
        p.append_child(&doc.create_text_node("Hello ")).unwrap();
        p.append_child(&doc.create_comment("hidden")).unwrap();
        p.append_child(&doc.create_text_node("World")).unwrap();

        assert_eq!(p.text_content(), "Hello World");
        assert_eq!(doc.create_comment("note").text_content(), "note");
    }

    #[test]
    fn test_attributes_are_case_insensitive() {
        let doc = Document::new();
        let div = doc.create_element("div");
        div.set_attribute("ID", "main");

        assert_eq!(div.get_attribute("id"), Some("main".to_string()));
        assert!(div.has_attribute("Id"));
        div.remove_attribute("id");
        assert_eq!(div.get_attribute("id"), None);
    }

    #[test]
    fn test_append_rejects_self_and_ancestors() {
        let doc = Document::new();
        let div = doc.create_element("div");
        let section = doc.create_element("section");
        let span = doc.create_element("span");
        div.append_child(&section).unwrap();
        section.append_child(&span).unwrap();

        let err = div.append_child(&div).unwrap_err();
        assert!(matches!(err, Error::Dom(_)));
        assert!(span.append_child(&div).is_err());
        assert!(section.append_child(&div).is_err());

        // The failed appends changed nothing
        assert_eq!(div.child_count(), 1);
        assert_eq!(span.child_count(), 0);
        assert_eq!(div.parent(), None);
        assert_eq!(span.parent(), Some(section.node.clone()));
    }

    #[test]
    fn test_append_rejects_character_data_parents() {
        let doc = Document::new();
        let comment = doc.create_comment("note");
        let text = doc.create_text_node("body");
        let span = doc.create_element("span");

        assert!(matches!(comment.append_child(&span), Err(Error::Dom(_))));
        assert!(matches!(text.append_child(&span), Err(Error::Dom(_))));
        assert_eq!(comment.child_count(), 0);
        assert_eq!(span.parent(), None);
    }

    #[test]
    fn test_append_rejects_foreign_and_document_nodes() {
        let doc = Document::new();
        let other = Document::new();
        let div = doc.create_element("div");
        let stranger = other.create_element("p");

        assert!(matches!(div.append_child(&stranger), Err(Error::Dom(_))));
        assert_eq!(div.child_count(), 0);
        assert!(matches!(div.append_child(&doc.root()), Err(Error::Dom(_))));
    }

    #[test]
    fn test_text_content_of_deep_tree() {
        let doc = Document::new();
        let top = doc.create_element("div");
        let mut current = top.clone();
        for _ in 0..20_000 {
            let next = doc.create_element("div");
            current.append_child(&next).unwrap();
            current = next;
        }
        current.append_child(&doc.create_text_node("leaf")).unwrap();

        assert_eq!(top.text_content(), "leaf");
    }
}
