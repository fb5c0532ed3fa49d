// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # domwalk - DOM navigation helpers
//!
//! Small extension traits over a DOM tree:
//!
//! - `child_nodes()`: a node's children as a live, indexable list
//! - `children_by_type::<T>()` / `children_of_type(..)`: typed child views
//! - `find_element(..)`: depth-first, pre-order search from an element
//! - `find_elements(..)`: filter the direct element children
//! - `find_element_by_tag_name`, `find_all_elements_by_tag_name`,
//!   `find_element_by_id`
//!
//! The traits work on the crate's own [`Document`] tree and directly on
//! html5ever's `markup5ever_rcdom::Handle`.
//!
//! ## Example
//!
//! ```rust
//! use domwalk::{parse_html, ElementExt};
//!
//! let doc = parse_html(
//!     "<html><body><p id='12345'>a</p><p id='67890'>b</p></body></html>",
//! )?;
//! let html = doc.document_element().unwrap();
//!
//! let body = html.find_element_by_tag_name("body").unwrap();
//! assert_eq!(body.find_all_elements_by_tag_name("p").len(), 2);
//! assert_eq!(html.find_element_by_id("67890").unwrap().text_content(), "b");
//! # Ok::<(), domwalk::Error>(())
//! ```

pub mod dom;
pub mod error;
pub mod navigate;

// Re-exports for convenience

// DOM
pub use dom::{Comment, Document, Element, ElementSummary, Node, NodeId, NodeType, Text};
pub use dom::{parse_html, parse_html_file, parse_html_with_config, parse_rcdom, ParserConfig};
pub use dom::RcElement;

// Navigation
pub use navigate::{DomElement, DomNode, ElementExt, FromNode, NodeExt, NodeList, NodeListIter};

// Errors
pub use error::{Error, ErrorContext, Result};

/// domwalk version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
