// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Tree navigation over any DOM host
//!
//! The host side is described by three small traits:
//!
//! - [`DomNode`]: child count, indexed child access and the node kind
//! - [`DomElement`]: tag name and attribute lookup on element nodes
//! - [`FromNode`]: runtime subtype test used by typed child views
//!
//! Everything a caller uses comes from the extension traits [`NodeExt`] and
//! [`ElementExt`], which are implemented for every conforming host type.
//! Both the crate's own [`Node`](crate::dom::Node) tree and html5ever's
//! `markup5ever_rcdom::Handle` conform.

mod children;
mod list;
mod search;

pub use children::NodeExt;
pub use list::{NodeList, NodeListIter};
pub use search::ElementExt;

use crate::dom::NodeType;

/// Read access a host DOM must provide for navigation
pub trait DomNode: Clone {
    /// Kind of this node
    fn node_type(&self) -> NodeType;

    /// Number of children at the time of the call
    fn child_count(&self) -> usize;

    /// Child at `index` in document order, `None` when out of range
    fn child_at(&self, index: usize) -> Option<Self>;
}

/// Element-specific host access
pub trait DomElement: Clone {
    /// Node type this element wraps
    type Node: DomNode;

    /// Underlying node
    fn as_node(&self) -> &Self::Node;

    /// Tag name as stored by the host
    fn tag_name(&self) -> String;

    /// Whether this element's tag is `name`
    ///
    /// Exact comparison unless the host normalizes tag names.
    fn has_tag_name(&self, name: &str) -> bool {
        self.tag_name() == name
    }

    /// Attribute value, `None` when the attribute is not set
    fn get_attribute(&self, name: &str) -> Option<String>;
}

/// Runtime subtype test: narrow a host node to `Self`
pub trait FromNode<N>: Sized {
    /// `Some` when `node` is an instance of `Self`
    fn from_node(node: N) -> Option<Self>;
}
