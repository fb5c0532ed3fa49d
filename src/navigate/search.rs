// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Depth-first element search

use tracing::trace;

use super::{DomElement, FromNode, NodeExt, NodeListIter};

/// Element lookups available on every [`DomElement`]
///
/// `find_element*` searches the receiver and all of its descendants in
/// pre-order. `find_elements` and `find_all_elements_by_tag_name` only look at
/// the receiver's direct element children.
pub trait ElementExt: DomElement {
    /// First element of `self` or its descendants, in pre-order, satisfying
    /// `predicate`
    fn find_element<P>(&self, mut predicate: P) -> Option<Self>
    where
        Self: FromNode<Self::Node>,
        P: FnMut(&Self) -> bool,
    {
        find_first(self, &mut predicate)
    }

    /// Direct element children of `self` satisfying `predicate`
    fn find_elements<P>(&self, mut predicate: P) -> Vec<Self>
    where
        Self: FromNode<Self::Node>,
        P: FnMut(&Self) -> bool,
    {
        self.as_node()
            .child_nodes()
            .iter()
            .filter_map(Self::from_node)
            .filter(|element| predicate(element))
            .collect()
    }

    /// First element of `self` or its descendants with the given tag name
    fn find_element_by_tag_name(&self, tag_name: &str) -> Option<Self>
    where
        Self: FromNode<Self::Node>,
    {
        let found = self.find_element(|e| e.has_tag_name(tag_name));
        trace!(tag_name, found = found.is_some(), "find_element_by_tag_name");
        found
    }

    /// Direct element children of `self` with the given tag name
    fn find_all_elements_by_tag_name(&self, tag_name: &str) -> Vec<Self>
    where
        Self: FromNode<Self::Node>,
    {
        let found = self.find_elements(|e| e.has_tag_name(tag_name));
        trace!(tag_name, count = found.len(), "find_all_elements_by_tag_name");
        found
    }

    /// Element of `self` or its descendants whose `id` attribute equals `id`
    ///
    /// Ids are expected to be unique; if they are not, the first in pre-order
    /// wins.
    fn find_element_by_id(&self, id: &str) -> Option<Self>
    where
        Self: FromNode<Self::Node>,
    {
        let found = self.find_element(|e| e.get_attribute("id").as_deref() == Some(id));
        trace!(id, found = found.is_some(), "find_element_by_id");
        found
    }
}

impl<E: DomElement> ElementExt for E {}

/// Pre-order search with one child iterator per open level
fn find_first<E, P>(element: &E, predicate: &mut P) -> Option<E>
where
    E: DomElement + FromNode<<E as DomElement>::Node>,
    P: FnMut(&E) -> bool,
{
    if predicate(element) {
        return Some(element.clone());
    }

    let mut levels: Vec<NodeListIter<E::Node>> =
        vec![element.as_node().child_nodes().into_iter()];
    while let Some(level) = levels.last_mut() {
        let Some(node) = level.next() else {
            levels.pop();
            continue;
        };
        let Some(child) = E::from_node(node) else {
            continue;
        };
        if predicate(&child) {
            return Some(child);
        }
        levels.push(child.as_node().child_nodes().into_iter());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Document, Element};

    /// html > (head, body > (p#12345, p#67890))
    fn two_paragraphs() -> (Document, Element) {
        let doc = Document::new();
        let html = doc.create_element("html");
        let head = doc.create_element("head");
        let body = doc.create_element("body");
        for id in ["12345", "67890"] {
            let p = doc.create_element("p");
            p.set_attribute("id", id);
            body.append_child(&p).unwrap();
        }
        html.append_child(&head).unwrap();
        html.append_child(&body).unwrap();
        doc.root().append_child(&html).unwrap();
        (doc, html)
    }

    #[test]
    fn test_find_first_child_element_by_tag_name() {
        let (_doc, html) = two_paragraphs();

        let p = html
            .find_element_by_tag_name("body")
            .and_then(|body| body.find_element_by_tag_name("p"))
            .unwrap();
        assert_eq!(p.get_attribute("id"), Some("12345".to_string()));
    }

    #[test]
    fn test_find_all_child_elements_by_tag_name() {
        let (_doc, html) = two_paragraphs();
        let body = html.find_element_by_tag_name("body").unwrap();

        let elements = body.find_all_elements_by_tag_name("p");
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].id(), Some("12345".to_string()));
        assert_eq!(elements[1].id(), Some("67890".to_string()));
    }

    #[test]
    fn test_find_element_by_id() {
        let (_doc, html) = two_paragraphs();

        let found = html.find_element_by_id("12345").unwrap();
        assert_eq!(found.tag_name(), "p");
        assert!(html.find_element_by_id("00000").is_none());
    }

    #[test]
    fn test_find_element_includes_self() {
        let (_doc, html) = two_paragraphs();

        assert_eq!(html.find_element_by_tag_name("html"), Some(html.clone()));
    }

    #[test]
    fn test_find_all_is_direct_children_only() {
        let (_doc, html) = two_paragraphs();

        // The paragraphs are grandchildren of <html>
        assert!(html.find_all_elements_by_tag_name("p").is_empty());
        assert_eq!(html.find_elements(|_| true).len(), 2);
    }

    #[test]
    fn test_pre_order_visit_and_short_circuit() {
        let (_doc, html) = two_paragraphs();

        let mut visited = Vec::new();
        let found = html.find_element(|e| {
            visited.push(e.tag_name());
            e.id().as_deref() == Some("12345")
        });

        assert!(found.is_some());
        // The second paragraph is never tested
        assert_eq!(visited, vec!["html", "head", "body", "p"]);
    }

    #[test]
    fn test_find_elements_calls_predicate_once_per_child() {
        let (doc, html) = two_paragraphs();
        let body = html.find_element_by_tag_name("body").unwrap();
        body.append_child(&doc.create_text_node("ignored")).unwrap();

        let mut calls = 0;
        let all = body.find_elements(|_| {
            calls += 1;
            true
        });

        assert_eq!(all.len(), 2);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_non_element_children_are_not_tested() {
        let doc = Document::new();
        let div = doc.create_element("div");
        div.append_child(&doc.create_comment("p")).unwrap();
        div.append_child(&doc.create_text_node("p")).unwrap();
        let span = doc.create_element("span");
        div.append_child(&span).unwrap();

        let mut visited = 0;
        let found = div.find_element(|e| {
            visited += 1;
            e.tag_name() == "span"
        });
        assert_eq!(found, Some(span));
        assert_eq!(visited, 2);
    }

    #[test]
    fn test_duplicate_ids_return_first_in_pre_order() {
        let doc = Document::new();
        let root = doc.create_element("div");
        let outer = doc.create_element("section");
        let nested = doc.create_element("em");
        nested.set_attribute("id", "dup");
        outer.append_child(&nested).unwrap();
        let later = doc.create_element("span");
        later.set_attribute("id", "dup");
        root.append_child(&outer).unwrap();
        root.append_child(&later).unwrap();

        assert_eq!(root.find_element_by_id("dup"), Some(nested));
    }

    #[test]
    fn test_missing_id_never_matches_empty_string() {
        let (_doc, html) = two_paragraphs();

        assert!(html.find_element_by_id("").is_none());
    }

    #[test]
    fn test_repeated_searches_are_idempotent() {
        let (_doc, html) = two_paragraphs();

        let first = html.find_element_by_id("67890");
        let second = html.find_element_by_id("67890");
        assert_eq!(first, second);
        assert_eq!(
            html.find_elements(|e| e.tag_name() == "body"),
            html.find_elements(|e| e.tag_name() == "body")
        );
    }

    #[test]
    fn test_find_element_in_deep_tree() {
        let doc = Document::new();
        let top = doc.create_element("div");
        let mut current = top.clone();
        for _ in 0..20_000 {
            let next = doc.create_element("div");
            current.append_child(&next).unwrap();
            current = next;
        }
        let leaf = doc.create_element("span");
        leaf.set_attribute("id", "leaf");
        current.append_child(&leaf).unwrap();

        assert_eq!(top.find_element_by_id("leaf"), Some(leaf));
        assert!(top.find_element_by_id("missing").is_none());
    }

    #[test]
    fn test_pre_order_across_sibling_subtrees() {
        // div > (a > (b, c > d), e)
        let doc = Document::new();
        let [div, a, b, c, d, e] =
            ["div", "a", "b", "c", "d", "e"].map(|tag| doc.create_element(tag));
        a.append_child(&b).unwrap();
        c.append_child(&d).unwrap();
        a.append_child(&c).unwrap();
        div.append_child(&a).unwrap();
        div.append_child(&e).unwrap();

        let mut visited = Vec::new();
        let found = div.find_element(|el| {
            visited.push(el.tag_name());
            false
        });

        assert!(found.is_none());
        assert_eq!(visited, vec!["div", "a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_tag_name_lookup_ignores_query_case() {
        let (_doc, html) = two_paragraphs();

        let body = html.find_element_by_tag_name("BODY").unwrap();
        assert_eq!(body.tag_name(), "body");
        assert_eq!(body.find_all_elements_by_tag_name("P").len(), 2);

        let doc = Document::new();
        let div = doc.create_element("div");
        let p = doc.create_element("P");
        div.append_child(&p).unwrap();
        assert_eq!(div.find_element_by_tag_name("P"), Some(p.clone()));
        assert_eq!(div.find_element_by_tag_name("p"), Some(p));
    }
}
