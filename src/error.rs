// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for domwalk
//!
//! Searches never fail: a missing match is `None` or an empty list.
//! Errors are reserved for out-of-range child access, rejected tree
//! mutations and I/O.

use thiserror::Error;

/// Result type alias for domwalk operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for domwalk
#[derive(Error, Debug)]
pub enum Error {
    /// Child index outside `0..len`
    #[error("Index {index} out of bounds for child list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// DOM mutation rejected
    #[error("DOM error: {0}")]
    Dom(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an out-of-bounds error
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Error::IndexOutOfBounds { index, len }
    }

    /// Create a new DOM error
    pub fn dom<S: Into<String>>(msg: S) -> Self {
        Error::Dom(msg.into())
    }

    /// Check if this is an out-of-bounds access
    pub fn is_index_out_of_bounds(&self) -> bool {
        matches!(self, Error::IndexOutOfBounds { .. })
    }

    /// Check if this came from reading input
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

/// Helper trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add operation context to error
    fn context(self, msg: &str) -> Result<T>;
}

impl<T, E: Into<Error>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, msg: &str) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            match err {
                // Keep the structured variants inspectable
                Error::Io(io) => Error::Io(std::io::Error::new(
                    io.kind(),
                    format!("{}: {}", msg, io),
                )),
                Error::Dom(inner) => Error::Dom(format!("{}: {}", msg, inner)),
                other => other,
            }
        })
    }
}
