// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Child list and typed child views

use crate::dom::NodeType;

use super::{DomNode, FromNode, NodeList};

/// Child navigation available on every [`DomNode`]
pub trait NodeExt: DomNode {
    /// Children as a live [`NodeList`]
    fn child_nodes(&self) -> NodeList<Self> {
        NodeList::new(self.clone())
    }

    /// Children that are instances of `T`, in document order
    ///
    /// ```rust
    /// use domwalk::{Comment, Document, Element, NodeExt};
    ///
    /// let doc = Document::new();
    /// doc.root().append_child(&doc.create_comment("Comment1"))?;
    /// doc.root().append_child(&doc.create_element("html"))?;
    ///
    /// let elements = doc.root().children_by_type::<Element>();
    /// assert_eq!(elements[0].tag_name(), "html");
    /// let comments = doc.root().children_by_type::<Comment>();
    /// assert_eq!(comments[0].data(), "Comment1");
    /// # Ok::<(), domwalk::Error>(())
    /// ```
    fn children_by_type<T: FromNode<Self>>(&self) -> Vec<T> {
        self.child_nodes().iter().filter_map(T::from_node).collect()
    }

    /// Children whose kind is `node_type`, in document order
    fn children_of_type(&self, node_type: NodeType) -> Vec<Self> {
        self.child_nodes()
            .iter()
            .filter(|child| child.node_type() == node_type)
            .collect()
    }
}

impl<N: DomNode> NodeExt for N {}
