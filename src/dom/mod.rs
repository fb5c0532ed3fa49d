// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Host DOM
//!
//! A shared-storage node tree built from html5ever output, plus the adapter
//! that lets the navigation traits run on html5ever's own `RcDom`.

mod character;
mod config;
mod document;
mod element;
mod node;
mod parser;
mod rcdom;

pub use character::{Comment, Text};
pub use config::ParserConfig;
pub use document::Document;
pub use element::{Element, ElementSummary};
pub use node::{Node, NodeId, NodeType};
pub use parser::{parse_html, parse_html_file, parse_html_with_config, parse_rcdom};
pub use rcdom::RcElement;
