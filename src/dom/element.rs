// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Element-specific DOM operations

use std::collections::BTreeMap;

use serde::Serialize;

use super::node::{Node, NodeType};
use crate::navigate::{DomElement, FromNode};

/// Element node with extended operations
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Element {
    /// Inner node reference
    pub node: Node,
}

impl Element {
    /// Create a new element from a node
    pub fn new(node: Node) -> Option<Self> {
        if node.node_type() == NodeType::Element {
            Some(Self { node })
        } else {
            None
        }
    }

    /// Get the tag name (lowercase)
    pub fn tag_name(&self) -> String {
        self.node.tag_name().unwrap_or_default()
    }

    /// Get element ID
    pub fn id(&self) -> Option<String> {
        self.node.get_attribute("id")
    }

    /// Get class list as vector
    pub fn class_list(&self) -> Vec<String> {
        self.node
            .get_attribute("class")
            .map(|c| c.split_whitespace().map(String::from).collect())
            .unwrap_or_default()
    }

    /// Check if element has a class
    pub fn has_class(&self, class: &str) -> bool {
        self.class_list().iter().any(|c| c == class)
    }

    /// Get an attribute
    pub fn get_attribute(&self, name: &str) -> Option<String> {
        self.node.get_attribute(name)
    }

    /// Set an attribute
    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        self.node.set_attribute(name, value);
    }

    /// Get text content
    pub fn text_content(&self) -> String {
        self.node.text_content()
    }

    /// Get parent element
    pub fn parent_element(&self) -> Option<Element> {
        self.node.parent().and_then(Element::new)
    }

    /// Serializable description of this element
    pub fn summary(&self) -> ElementSummary {
        ElementSummary {
            tag_name: self.tag_name(),
            id: self.id(),
            attributes: self.node.attributes().into_iter().collect(),
            child_count: self.node.child_count(),
        }
    }
}

impl std::ops::Deref for Element {
    type Target = Node;

    fn deref(&self) -> &Self::Target {
        &self.node
    }
}

impl DomElement for Element {
    type Node = Node;

    fn as_node(&self) -> &Node {
        &self.node
    }

    fn tag_name(&self) -> String {
        Element::tag_name(self)
    }

    // Tag names are stored lowercase, so the query is lowered the same way
    // attribute names are
    fn has_tag_name(&self, name: &str) -> bool {
        Element::tag_name(self) == name.to_lowercase()
    }

    fn get_attribute(&self, name: &str) -> Option<String> {
        Element::get_attribute(self, name)
    }
}

impl FromNode<Node> for Element {
    fn from_node(node: Node) -> Option<Self> {
        Element::new(node)
    }
}

/// Element description for reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementSummary {
    /// Tag name
    pub tag_name: String,
    /// Value of the `id` attribute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Attributes, sorted by name
    pub attributes: BTreeMap<String, String>,
    /// Number of child nodes of any kind
    pub child_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{parse_html, Document};
    use crate::navigate::NodeExt;

    #[test]
    fn test_element_class_list() {
        let doc = parse_html("<div class=\"foo bar baz\">test</div>").unwrap();
        let div = doc.body().unwrap().children_by_type::<Element>()[0].clone();
        let classes = div.class_list();
        assert!(classes.contains(&"foo".to_string()));
        assert!(classes.contains(&"bar".to_string()));
        assert!(div.has_class("baz"));
        assert!(!div.has_class("qux"));
    }

    #[test]
    fn test_new_rejects_non_elements() {
        let doc = Document::new();
        assert!(Element::new(doc.create_comment("x")).is_none());
        assert!(Element::new(doc.create_text_node("x")).is_none());
        assert!(Element::new(doc.root()).is_none());
        assert!(Element::new(doc.create_element("x").node).is_some());
    }

    #[test]
    fn test_parent_element() {
        let doc = Document::new();
        let ul = doc.create_element("ul");
        let li = doc.create_element("li");
        ul.append_child(&li).unwrap();

        assert_eq!(li.parent_element(), Some(ul.clone()));
        assert_eq!(ul.parent_element(), None);
    }

    #[test]
    fn test_summary_serializes() {
        let doc = Document::new();
        let a = doc.create_element("a");
        a.set_attribute("href", "/next");
        a.set_attribute("id", "next");
        a.append_child(&doc.create_text_node("Next")).unwrap();

        let summary = a.summary();
        assert_eq!(summary.tag_name, "a");
        assert_eq!(summary.id.as_deref(), Some("next"));
        assert_eq!(summary.child_count, 1);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["tag_name"], "a");
        assert_eq!(json["attributes"]["href"], "/next");
    }
}
