// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Document representation

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::character::Comment;
use super::element::Element;
use super::node::{Node, NodeData, NodeId, NodeStore};
use crate::navigate::{ElementExt, NodeExt};

/// Document: owner of a node tree
///
/// Dereferences to its root node, so the navigation traits apply to the
/// document directly.
#[derive(Debug, Clone)]
pub struct Document {
    /// Root (document) node
    root: Node,
    /// Node storage
    nodes: NodeStore,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        let root_id = NodeId::new();
        let mut nodes = HashMap::new();
        nodes.insert(root_id, NodeData::document());
        let nodes = Arc::new(RwLock::new(nodes));

        Self {
            root: Node::new(root_id, nodes.clone()),
            nodes,
        }
    }

    /// Get the root node
    pub fn root(&self) -> Node {
        self.root.clone()
    }

    /// Get the document element (first element child of the root)
    pub fn document_element(&self) -> Option<Element> {
        self.root.children_by_type::<Element>().into_iter().next()
    }

    /// Get the <head> element
    pub fn head(&self) -> Option<Element> {
        self.document_element()?
            .find_elements(|e| e.tag_name() == "head")
            .into_iter()
            .next()
    }

    /// Get the <body> element
    pub fn body(&self) -> Option<Element> {
        self.document_element()?
            .find_elements(|e| e.tag_name() == "body")
            .into_iter()
            .next()
    }

    /// Comments directly under the document node
    pub fn comments(&self) -> Vec<Comment> {
        self.root.children_by_type::<Comment>()
    }

    /// Find an element by its `id` attribute anywhere in the document
    pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
        self.document_element()?.find_element_by_id(id)
    }

    /// Create a new detached element
    pub fn create_element(&self, tag: &str) -> Element {
        Element {
            node: self.insert(NodeData::element(tag)),
        }
    }

    /// Create a detached text node
    pub fn create_text_node(&self, content: &str) -> Node {
        self.insert(NodeData::text(content))
    }

    /// Create a detached comment node
    pub fn create_comment(&self, content: &str) -> Node {
        self.insert(NodeData::comment(content))
    }

    /// Store `data` and return a handle to it
    pub(crate) fn insert(&self, data: NodeData) -> Node {
        let id = NodeId::new();
        self.nodes.write().insert(id, data);
        Node::new(id, self.nodes.clone())
    }

    /// Total number of nodes owned by the document, attached or not
    pub fn node_count(&self) -> usize {
        self.nodes.read().len()
    }
}

impl std::ops::Deref for Document {
    type Target = Node;

    fn deref(&self) -> &Self::Target {
        &self.root
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
