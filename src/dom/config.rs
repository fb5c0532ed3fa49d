// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Parser configuration

/// Options for turning HTML text into a [`Document`](super::Document)
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Drop the `<!DOCTYPE>` node
    pub drop_doctype: bool,
    /// Keep whitespace-only text runs longer than one character
    pub keep_whitespace_text: bool,
    /// Keep comment nodes
    pub keep_comments: bool,
    /// Parse `<noscript>` as if scripting were enabled
    pub scripting_enabled: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            drop_doctype: false,
            keep_whitespace_text: false,
            keep_comments: true,
            scripting_enabled: true,
        }
    }
}

impl ParserConfig {
    /// Create a new parser config
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop or keep the doctype node
    pub fn drop_doctype(mut self, drop: bool) -> Self {
        self.drop_doctype = drop;
        self
    }

    /// Keep or skip whitespace-only text
    pub fn keep_whitespace_text(mut self, keep: bool) -> Self {
        self.keep_whitespace_text = keep;
        self
    }

    /// Keep or skip comments
    pub fn keep_comments(mut self, keep: bool) -> Self {
        self.keep_comments = keep;
        self
    }

    /// Enable/disable scripting for `<noscript>` handling
    pub fn scripting_enabled(mut self, enabled: bool) -> Self {
        self.scripting_enabled = enabled;
        self
    }
}
