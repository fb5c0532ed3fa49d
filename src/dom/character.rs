// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Character data nodes: comments and text

use super::node::{Node, NodeType};
use crate::navigate::FromNode;

/// Comment node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Comment {
    /// Inner node reference
    pub node: Node,
}

impl Comment {
    /// Wrap `node` if it is a comment
    pub fn new(node: Node) -> Option<Self> {
        (node.node_type() == NodeType::Comment).then_some(Self { node })
    }

    /// Comment text
    pub fn data(&self) -> String {
        self.node.text_content()
    }
}

/// Text node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Text {
    /// Inner node reference
    pub node: Node,
}

impl Text {
    /// Wrap `node` if it is a text node
    pub fn new(node: Node) -> Option<Self> {
        (node.node_type() == NodeType::Text).then_some(Self { node })
    }

    /// Text data
    pub fn data(&self) -> String {
        self.node.text_content()
    }

    /// Check if the text is only whitespace
    pub fn is_whitespace(&self) -> bool {
        self.data().trim().is_empty()
    }
}

impl std::ops::Deref for Comment {
    type Target = Node;

    fn deref(&self) -> &Self::Target {
        &self.node
    }
}

impl std::ops::Deref for Text {
    type Target = Node;

    fn deref(&self) -> &Self::Target {
        &self.node
    }
}

impl FromNode<Node> for Comment {
    fn from_node(node: Node) -> Option<Self> {
        Comment::new(node)
    }
}

impl FromNode<Node> for Text {
    fn from_node(node: Node) -> Option<Self> {
        Text::new(node)
    }
}
