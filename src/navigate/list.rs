// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Child sequence view

use crate::error::{Error, Result};

use super::DomNode;

/// Live, index-addressable view of a node's children
///
/// The view keeps a handle to the parent and reads the host's child
/// collection on every call, so mutations made after the view was created
/// are visible. Use [`NodeList::to_vec`] for a snapshot.
#[derive(Debug, Clone)]
pub struct NodeList<N> {
    parent: N,
}

impl<N: DomNode> NodeList<N> {
    /// Create a view over the children of `parent`
    pub fn new(parent: N) -> Self {
        Self { parent }
    }

    /// Node whose children this list exposes
    pub fn parent(&self) -> &N {
        &self.parent
    }

    /// Current number of children
    pub fn len(&self) -> usize {
        self.parent.child_count()
    }

    /// Check if the parent has no children
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Child at `index` in document order
    pub fn get(&self, index: usize) -> Result<N> {
        self.parent
            .child_at(index)
            .ok_or_else(|| Error::index_out_of_bounds(index, self.len()))
    }

    /// Iterate children in document order
    pub fn iter(&self) -> NodeListIter<N> {
        NodeListIter::new(self.parent.clone())
    }

    /// Copy the current children out of the host
    pub fn to_vec(&self) -> Vec<N> {
        self.iter().collect()
    }
}

impl<N: DomNode> IntoIterator for NodeList<N> {
    type Item = N;
    type IntoIter = NodeListIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        NodeListIter::new(self.parent)
    }
}

impl<'a, N: DomNode> IntoIterator for &'a NodeList<N> {
    type Item = N;
    type IntoIter = NodeListIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward-only iterator over a [`NodeList`]
#[derive(Debug, Clone)]
pub struct NodeListIter<N> {
    parent: N,
    index: usize,
}

impl<N: DomNode> NodeListIter<N> {
    fn new(parent: N) -> Self {
        Self { parent, index: 0 }
    }
}

impl<N: DomNode> Iterator for NodeListIter<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let node = self.parent.child_at(self.index)?;
        self.index += 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Only exact while the host is not mutated
        let remaining = self.parent.child_count().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}
