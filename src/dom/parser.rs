// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTML parser using html5ever

use std::path::Path;

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use tracing::debug;

use super::config::ParserConfig;
use super::document::Document;
use super::node::{Node, NodeData};
use crate::error::{ErrorContext, Result};

/// Parse HTML string into a Document
pub fn parse_html(html: &str) -> Result<Document> {
    parse_html_with_config(html, &ParserConfig::default())
}

/// Parse HTML string with explicit parser options
pub fn parse_html_with_config(html: &str, config: &ParserConfig) -> Result<Document> {
    let dom = parse_rcdom(html, config)?;

    let doc = Document::new();
    DomConverter::new(&doc, config).convert(&dom.document)?;

    debug!(
        bytes = html.len(),
        nodes = doc.node_count(),
        "parsed HTML document"
    );
    Ok(doc)
}

/// Read and parse an HTML file
pub fn parse_html_file(path: impl AsRef<Path>, config: &ParserConfig) -> Result<Document> {
    let path = path.as_ref();
    let html = std::fs::read_to_string(path).context(&format!("reading {}", path.display()))?;
    debug!(path = %path.display(), "read HTML file");
    parse_html_with_config(&html, config)
}

/// Parse HTML into html5ever's reference DOM
pub fn parse_rcdom(html: &str, config: &ParserConfig) -> Result<RcDom> {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: config.drop_doctype,
            scripting_enabled: config.scripting_enabled,
            ..Default::default()
        },
        ..Default::default()
    };

    let dom = parse_document(RcDom::default(), opts)
        .from_utf8()
        .read_from(&mut html.as_bytes())?;

    Ok(dom)
}

/// Copies an rcdom tree into a [`Document`]
struct DomConverter<'a> {
    doc: &'a Document,
    config: &'a ParserConfig,
}

impl<'a> DomConverter<'a> {
    fn new(doc: &'a Document, config: &'a ParserConfig) -> Self {
        Self { doc, config }
    }

    /// Copy the children of `document` under the root, in document order
    ///
    /// Uses an explicit work stack, so nesting depth is bounded by memory
    /// rather than by the thread's stack.
    fn convert(&self, document: &Handle) -> Result<()> {
        let mut pending: Vec<(Handle, Node)> = Vec::new();
        push_children(&mut pending, document, &self.doc.root());

        while let Some((handle, parent)) = pending.pop() {
            if let Some(node) = self.convert_node(&handle, &parent)? {
                push_children(&mut pending, &handle, &node);
            }
        }

        Ok(())
    }

    /// Insert one rcdom node under `parent`; `None` when it is skipped
    fn convert_node(&self, handle: &Handle, parent: &Node) -> Result<Option<Node>> {
        let data = match handle.data {
            // Nested documents do not occur; the root is already in place
            RcNodeData::Document => return Ok(None),
            RcNodeData::Doctype { ref name, .. } => NodeData::doctype(name.to_string()),
            RcNodeData::Text { ref contents } => {
                let text = contents.borrow().to_string();
                if !self.config.keep_whitespace_text && text.trim().is_empty() && text.len() > 1 {
                    // Skip whitespace-only runs (but keep single spaces)
                    return Ok(None);
                }
                NodeData::text(text)
            }
            RcNodeData::Comment { ref contents } => {
                if !self.config.keep_comments {
                    return Ok(None);
                }
                NodeData::comment(contents.to_string())
            }
            RcNodeData::Element {
                ref name,
                ref attrs,
                ..
            } => {
                let mut data = NodeData::element(name.local.to_string());
                for attr in attrs.borrow().iter() {
                    data.attributes
                        .insert(attr.name.local.to_string(), attr.value.to_string());
                }
                data
            }
            RcNodeData::ProcessingInstruction {
                ref target,
                ref contents,
            } => NodeData::processing_instruction(target.to_string(), contents.to_string()),
        };

        let node = self.doc.insert(data);
        parent.append_child(&node)?;
        Ok(Some(node))
    }
}

/// Queue the children of `handle` so they pop in document order
fn push_children(pending: &mut Vec<(Handle, Node)>, handle: &Handle, parent: &Node) {
    for child in handle.children.borrow().iter().rev() {
        pending.push((child.clone(), parent.clone()));
    }
}
