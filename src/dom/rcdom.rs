// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Navigation over html5ever's reference DOM
//!
//! `markup5ever_rcdom` keeps children in a `RefCell<Vec<Handle>>`, so a
//! [`NodeList`](crate::navigate::NodeList) over a `Handle` is live in the same
//! way as one over [`Node`](super::Node). Handles are `Rc`-based and stay on
//! one thread.

use markup5ever_rcdom::{Handle, NodeData as RcNodeData};

use super::node::NodeType;
use crate::navigate::{DomElement, DomNode, FromNode};

impl DomNode for Handle {
    fn node_type(&self) -> NodeType {
        match self.data {
            RcNodeData::Document => NodeType::Document,
            RcNodeData::Doctype { .. } => NodeType::DocumentType,
            RcNodeData::Text { .. } => NodeType::Text,
            RcNodeData::Comment { .. } => NodeType::Comment,
            RcNodeData::Element { .. } => NodeType::Element,
            RcNodeData::ProcessingInstruction { .. } => NodeType::ProcessingInstruction,
        }
    }

    fn child_count(&self) -> usize {
        self.children.borrow().len()
    }

    fn child_at(&self, index: usize) -> Option<Self> {
        self.children.borrow().get(index).cloned()
    }
}

/// Element view of an rcdom [`Handle`]
#[derive(Clone)]
pub struct RcElement {
    handle: Handle,
}

impl RcElement {
    /// Wrap `handle` if it is an element
    pub fn new(handle: Handle) -> Option<Self> {
        matches!(handle.data, RcNodeData::Element { .. }).then_some(Self { handle })
    }

    /// Underlying rcdom handle
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    /// Local tag name
    pub fn tag_name(&self) -> String {
        match self.handle.data {
            RcNodeData::Element { ref name, .. } => name.local.to_string(),
            _ => String::new(),
        }
    }

    /// Attribute value by local name
    pub fn get_attribute(&self, name: &str) -> Option<String> {
        match self.handle.data {
            RcNodeData::Element { ref attrs, .. } => attrs
                .borrow()
                .iter()
                .find(|attr| &*attr.name.local == name)
                .map(|attr| attr.value.to_string()),
            _ => None,
        }
    }
}

impl std::fmt::Debug for RcElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RcElement")
            .field("tag_name", &self.tag_name())
            .field("id", &self.get_attribute("id"))
            .finish()
    }
}

impl PartialEq for RcElement {
    fn eq(&self, other: &Self) -> bool {
        std::rc::Rc::ptr_eq(&self.handle, &other.handle)
    }
}

impl Eq for RcElement {}

impl DomElement for RcElement {
    type Node = Handle;

    fn as_node(&self) -> &Handle {
        &self.handle
    }

    fn tag_name(&self) -> String {
        RcElement::tag_name(self)
    }

    fn get_attribute(&self, name: &str) -> Option<String> {
        RcElement::get_attribute(self, name)
    }
}

impl FromNode<Handle> for RcElement {
    fn from_node(node: Handle) -> Option<Self> {
        RcElement::new(node)
    }
}
