//! # prettyrb
//!
//! Layout decisions for a Ruby pretty-printer, built on
//! [Wadler-style](http://homepages.inf.ed.ac.uk/wadler/papers/prettier/prettier.pdf)
//! pretty-printing combinators.
//!
//! The crate has two halves:
//!
//! - a document algebra ([`Doc`], [`DocAllocator`], [`DocBuilder`]) with groups, nesting,
//!   break-dependent alternatives, deferred line suffixes and indentation roots, rendered to a
//!   target width;
//! - a [`Printer`] that turns a parsed [`SyntaxNode`] tree into such a document. It lays out
//!   method-call chains (one line, or one call per line once a chain is long enough) and hands
//!   heredocs written in another language to a [`SubFormatter`], splicing the result back in.
//!
//! ## Quick start
//!
//! ```rust
//! use prettyrb::{format, CallOperator, FormatOptions, SyntaxNode};
//!
//! let chain = ["map", "select", "first", "to_s"]
//!     .iter()
//!     .fold(SyntaxNode::var_call("items"), |receiver, name| {
//!         SyntaxNode::call(receiver, CallOperator::Dot, name)
//!     });
//!
//! let wide = FormatOptions::default();
//! assert_eq!(format("", &chain, &wide, None).unwrap(), "items.map.select.first.to_s\n");
//!
//! let narrow = FormatOptions { print_width: 12, ..FormatOptions::default() };
//! assert_eq!(
//!     format("", &chain, &narrow, None).unwrap(),
//!     "items\n  .map\n  .select\n  .first\n  .to_s\n",
//! );
//! ```
//!
//! ## Building documents
//!
//! ```rust
//! use prettyrb::{docs, Arena, DocAllocator};
//!
//! let arena = &Arena::new();
//! let doc = docs![
//!     arena,
//!     "let",
//!     arena.softline(),
//!     "x",
//!     arena.softline(),
//!     "=",
//!     arena.softline(),
//!     Some("123"),
//! ];
//! assert_eq!(doc.print(80).to_string(), "let x = 123");
//! ```

mod alloc;
mod builder;
mod config;
mod doc;
mod embed;
mod error;
mod print;
mod render;
mod syntax;
mod to_proc;
mod visitor;

pub use alloc::{Arena, DocAllocator};
pub use builder::DocBuilder;
pub use config::FormatOptions;
pub use doc::{BuildDoc, Doc, DocPtr, RefDoc};
pub use embed::{normalize_newlines, Dialect, EmbedDispatcher, SubFormatter, PARSERS};
pub use error::{BoxError, FormatError};
pub use print::{format, ChainState, Printed, Printer, CHAIN_BREAK_DEPTH};
pub use syntax::{
    ArgList, BlockBody, BlockDelimiter, CallOperator, Comment, DedentMode, HeredocDescriptor,
    HeredocPart, Message, NodeKind, Span, SyntaxNode,
};
pub use to_proc::{ProcRewriter, SymbolProc};
pub use visitor::{map_doc, strip_trailing_hardline};

/// Trait for types which can be converted to a `Document`
pub trait Pretty<'a, D>
where
    D: ?Sized + DocAllocator<'a>,
{
    /// Converts `self` into a document
    fn pretty(self, allocator: &'a D) -> DocBuilder<'a, D>;
}

impl<'a> Pretty<'a, Arena<'a>> for RefDoc<'a> {
    fn pretty(self, allocator: &'a Arena<'a>) -> DocBuilder<'a, Arena<'a>> {
        DocBuilder(allocator, self.into())
    }
}

impl<'a, D> Pretty<'a, D> for BuildDoc<'a, D::Doc>
where
    D: ?Sized + DocAllocator<'a>,
{
    fn pretty(self, allocator: &'a D) -> DocBuilder<'a, D> {
        DocBuilder(allocator, self)
    }
}

impl<'a, D> Pretty<'a, D> for Doc<'a, D::Doc>
where
    D: ?Sized + DocAllocator<'a>,
{
    fn pretty(self, allocator: &'a D) -> DocBuilder<'a, D> {
        DocBuilder(allocator, self.into())
    }
}

impl<'a, D> Pretty<'a, D> for DocBuilder<'a, D>
where
    D: ?Sized + DocAllocator<'a>,
{
    fn pretty(self, _: &'a D) -> DocBuilder<'a, D> {
        self
    }
}

impl<'a, D, T> Pretty<'a, D> for Option<T>
where
    D: ?Sized + DocAllocator<'a>,
    T: Pretty<'a, D>,
{
    fn pretty(self, allocator: &'a D) -> DocBuilder<'a, D> {
        match self {
            Some(x) => x.pretty(allocator),
            None => allocator.nil(),
        }
    }
}

impl<'a, D> Pretty<'a, D> for &'a str
where
    D: ?Sized + DocAllocator<'a>,
{
    fn pretty(self, allocator: &'a D) -> DocBuilder<'a, D> {
        allocator.text(self)
    }
}

impl<'a, D> Pretty<'a, D> for String
where
    D: ?Sized + DocAllocator<'a>,
{
    fn pretty(self, allocator: &'a D) -> DocBuilder<'a, D> {
        allocator.text(self)
    }
}

/// Concatenates a number of documents (or values that can be converted into a document via the
/// `Pretty` trait, like `&str`)
#[macro_export]
macro_rules! docs {
    ($alloc: expr, $first: expr $(,)?) => {
        $crate::Pretty::pretty($first, $alloc)
    };
    ($alloc: expr, $first: expr $(, $rest: expr)+ $(,)?) => {{
        let mut doc = $crate::Pretty::pretty($first, $alloc);
        $(
            doc = doc.append($rest);
        )*
        doc
    }}
}
