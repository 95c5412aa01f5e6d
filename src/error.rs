use std::fmt;

use thiserror::Error;

use crate::{Dialect, Span};

/// Error type returned by a [`SubFormatter`](crate::SubFormatter).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that abort formatting of a whole unit. No partial output is produced.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The formatter for an embedded heredoc rejected its body.
    #[error("failed to format embedded {dialect} in heredoc `{tag}`: {source}")]
    Embed {
        dialect: Dialect,
        tag: String,
        #[source]
        source: BoxError,
    },

    /// A node does not have the shape its kind requires.
    #[error("malformed {kind} node at {span}: expected {expected}")]
    Structure {
        kind: &'static str,
        expected: &'static str,
        span: Span,
    },

    #[error("failed to render document")]
    Render(#[from] fmt::Error),
}
