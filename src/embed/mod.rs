//! Formatting of heredocs whose body is written in another language.

mod newlines;

use std::fmt;

use tracing::debug;

use crate::{
    strip_trailing_hardline, Arena, BoxError, DedentMode, DocAllocator, FormatError,
    HeredocDescriptor, RefDoc,
};

pub use self::newlines::normalize_newlines;

/// The languages a heredoc body can be handed off to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dialect {
    Css,
    /// JavaScript
    Script,
    Less,
    Markdown,
    Ruby,
    Scss,
}

/// Heredoc tags, lowercased, and the dialect their body is formatted as.
pub static PARSERS: &[(&str, Dialect)] = &[
    ("css", Dialect::Css),
    ("javascript", Dialect::Script),
    ("js", Dialect::Script),
    ("less", Dialect::Less),
    ("markdown", Dialect::Markdown),
    ("ruby", Dialect::Ruby),
    ("scss", Dialect::Scss),
];

impl Dialect {
    pub fn from_tag(tag: &str) -> Option<Dialect> {
        PARSERS
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|&(_, dialect)| dialect)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dialect::Css => "css",
            Dialect::Script => "javascript",
            Dialect::Less => "less",
            Dialect::Markdown => "markdown",
            Dialect::Ruby => "ruby",
            Dialect::Scss => "scss",
        })
    }
}

/// Formats source written in a [`Dialect`] into a document allocated in `arena`.
///
/// Text leaves of the returned document may contain newlines; they are normalized before the
/// document is spliced into a heredoc.
pub trait SubFormatter {
    fn format<'a>(
        &self,
        arena: &'a Arena<'a>,
        source: &str,
        dialect: Dialect,
    ) -> Result<RefDoc<'a>, BoxError>;
}

/// Hands heredoc bodies to a [`SubFormatter`] and places the result under the opening token.
pub struct EmbedDispatcher<'s> {
    formatter: &'s dyn SubFormatter,
    indent: isize,
}

impl<'s> EmbedDispatcher<'s> {
    /// `indent` is how far the body of a `<<~` heredoc is indented past the current line.
    pub fn new(formatter: &'s dyn SubFormatter, indent: isize) -> Self {
        Self { formatter, indent }
    }

    /// Formats `heredoc` through the sub-formatter registered for its tag.
    ///
    /// Returns `Ok(None)` when the heredoc cannot be handed off: its body is interpolated or its
    /// tag names no known dialect. The caller then prints it as written.
    pub fn embed<'a>(
        &self,
        arena: &'a Arena<'a>,
        heredoc: &HeredocDescriptor,
    ) -> Result<Option<RefDoc<'a>>, FormatError> {
        if !heredoc.is_plain_text() {
            debug!(opening = %heredoc.opening, "heredoc is interpolated, printing as written");
            return Ok(None);
        }

        let tag = heredoc.tag();
        let Some(dialect) = Dialect::from_tag(&tag) else {
            debug!(%tag, "no formatter for heredoc tag");
            return Ok(None);
        };

        let content = heredoc.raw_body();
        debug!(%tag, %dialect, bytes = content.len(), "formatting embedded heredoc");
        let doc = self
            .formatter
            .format(arena, &content, dialect)
            .map_err(|source| FormatError::Embed {
                dialect,
                tag,
                source,
            })?;

        // The closing tag below supplies the final line break
        let doc = strip_trailing_hardline(arena, &doc);
        let formatted = arena
            .literal_line()
            .append(normalize_newlines(arena, &doc));

        let opening = arena.text(heredoc.opening.clone());
        let closing = arena.text(heredoc.closing.trim().to_owned());

        let doc = match heredoc.dedent_mode {
            DedentMode::Squiggly => opening.append(
                formatted
                    .mark_as_root()
                    .nest(self.indent)
                    .append(arena.literal_line())
                    .append(closing)
                    .group()
                    .line_suffix(),
            ),
            DedentMode::Plain => opening
                .append(
                    formatted
                        .append(arena.literal_line())
                        .append(closing)
                        .group()
                        .line_suffix(),
                )
                .mark_as_root(),
        };

        Ok(Some(doc.into_doc()))
    }
}
