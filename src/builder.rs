use std::{
    fmt,
    ops::{Add, AddAssign, Deref},
};

use crate::{BuildDoc, Doc, DocAllocator, Pretty};

/// The `DocBuilder` type allows for convenient appending of documents even for arena allocated
/// documents by storing the arena inline.
pub struct DocBuilder<'a, D>(pub &'a D, pub BuildDoc<'a, D::Doc>)
where
    D: ?Sized + DocAllocator<'a>;

impl<'a, D> DocBuilder<'a, D>
where
    D: ?Sized + DocAllocator<'a>,
{
    pub(crate) fn with_utf8_len(self) -> Self {
        let s = match &*self {
            Doc::OwnedText(s) => &s[..],
            Doc::BorrowedText(s) => s,
            _ => return self,
        };

        if s.is_ascii() {
            self
        } else {
            let display_width = unicode_width::UnicodeWidthStr::width(s);

            let DocBuilder(allocator, _) = self;
            DocBuilder(
                allocator,
                Doc::RenderLen(display_width, self.into_doc()).into(),
            )
        }
    }

    /// Append the given document after this document.
    #[inline]
    pub fn append<E>(self, that: E) -> DocBuilder<'a, D>
    where
        E: Pretty<'a, D>,
    {
        let DocBuilder(allocator, _) = self;
        let that = that.pretty(allocator);
        match (&*self, &*that) {
            (Doc::Nil, _) => that,
            (_, Doc::Nil) => self,
            _ => DocBuilder(
                allocator,
                Doc::Append(
                    allocator.alloc_cow(self.into()),
                    allocator.alloc_cow(that.into()),
                )
                .into(),
            ),
        }
    }

    /// Acts as `self` when laid out on multiple lines and acts as `that` when laid out on a single
    /// line. The choice follows the enclosing group.
    ///
    /// ```
    /// use prettyrb::{Arena, DocAllocator};
    ///
    /// let arena = Arena::new();
    /// let doc = arena
    ///     .text("[")
    ///     .append(arena.line_().append("1,").append(arena.line()).append("2"))
    ///     .append(arena.text(",").flat_alt(arena.nil()))
    ///     .append(arena.line_())
    ///     .append("]")
    ///     .group();
    ///
    /// assert_eq!(doc.print(80).to_string(), "[1, 2]");
    /// assert_eq!(doc.print(4).to_string(), "[\n1,\n2,\n]");
    /// ```
    #[inline]
    pub fn flat_alt<E>(self, that: E) -> DocBuilder<'a, D>
    where
        E: Pretty<'a, D>,
    {
        let DocBuilder(allocator, this) = self;
        let that = that.pretty(allocator);
        DocBuilder(
            allocator,
            Doc::FlatAlt(allocator.alloc_cow(this), allocator.alloc_cow(that.into())).into(),
        )
    }

    /// Mark this document as a group.
    ///
    /// Groups are layed out on a single line if possible.  Within a group, all basic documents with
    /// several possible layouts are assigned the same layout, that is, they are all layed out
    /// horizontally and combined into a one single line, or they are each layed out on their own
    /// line.
    #[inline]
    pub fn group(self) -> DocBuilder<'a, D> {
        match *self.1 {
            Doc::Group(_) | Doc::OwnedText(_) | Doc::BorrowedText(_) | Doc::Nil => self,
            _ => {
                let DocBuilder(allocator, this) = self;
                DocBuilder(allocator, Doc::Group(allocator.alloc_cow(this)).into())
            }
        }
    }

    /// Increase the indentation level of this document.
    #[inline]
    pub fn nest(self, offset: isize) -> DocBuilder<'a, D> {
        if let Doc::Nil = &*self.1 {
            return self;
        }
        if offset == 0 {
            return self;
        }
        let DocBuilder(allocator, this) = self;
        DocBuilder(allocator, Doc::Nest(offset, allocator.alloc_cow(this)).into())
    }

    /// Makes the indentation at this point the root that literal lines inside `self` return to.
    ///
    /// ```
    /// use prettyrb::{Arena, DocAllocator};
    ///
    /// let arena = Arena::new();
    /// let body = arena.text("a").append(arena.literal_line()).append("b");
    /// let doc = arena
    ///     .text("x")
    ///     .append(arena.hardline().append(body.mark_as_root()).nest(2));
    /// assert_eq!(doc.print(80).to_string(), "x\n  a\n  b");
    /// ```
    #[inline]
    pub fn mark_as_root(self) -> DocBuilder<'a, D> {
        if let Doc::Nil = &*self.1 {
            return self;
        }
        let DocBuilder(allocator, this) = self;
        DocBuilder(allocator, Doc::Root(allocator.alloc_cow(this)).into())
    }

    /// Defers `self` until right before the next newline (or the end of the document).
    ///
    /// ```
    /// use prettyrb::{Arena, DocAllocator};
    ///
    /// let arena = Arena::new();
    /// let doc = arena
    ///     .text("call(")
    ///     .append(arena.text(" # note").line_suffix())
    ///     .append(")")
    ///     .append(arena.hardline())
    ///     .append("next");
    /// assert_eq!(doc.print(80).to_string(), "call() # note\nnext");
    /// ```
    #[inline]
    pub fn line_suffix(self) -> DocBuilder<'a, D> {
        if let Doc::Nil = &*self.1 {
            return self;
        }
        let DocBuilder(allocator, this) = self;
        DocBuilder(allocator, Doc::LineSuffix(allocator.alloc_cow(this)).into())
    }

    /// Puts `self` between `before` and `after`
    #[inline]
    pub fn enclose<E, F>(self, before: E, after: F) -> DocBuilder<'a, D>
    where
        E: Pretty<'a, D>,
        F: Pretty<'a, D>,
    {
        let DocBuilder(allocator, _) = self;
        DocBuilder(allocator, before.pretty(allocator).1)
            .append(self)
            .append(after)
    }

    pub fn into_doc(self) -> D::Doc {
        match self.1 {
            BuildDoc::DocPtr(d) => d,
            BuildDoc::Doc(d) => self.0.alloc(d),
        }
    }
}

impl<'a, D, P> Add<P> for DocBuilder<'a, D>
where
    D: ?Sized + DocAllocator<'a>,
    P: Pretty<'a, D>,
{
    type Output = DocBuilder<'a, D>;
    fn add(self, other: P) -> Self::Output {
        self.append(other)
    }
}

impl<'a, D, P> AddAssign<P> for DocBuilder<'a, D>
where
    D: ?Sized + DocAllocator<'a>,
    P: Pretty<'a, D>,
{
    fn add_assign(&mut self, other: P) {
        *self = DocBuilder(self.0, std::mem::take(&mut self.1)).append(other)
    }
}

impl<'a, D> Deref for DocBuilder<'a, D>
where
    D: ?Sized + DocAllocator<'a>,
{
    type Target = Doc<'a, D::Doc>;
    fn deref(&self) -> &Self::Target {
        match &self.1 {
            BuildDoc::DocPtr(d) => d,
            BuildDoc::Doc(d) => d,
        }
    }
}

impl<'a, D> fmt::Debug for DocBuilder<'a, D>
where
    D: ?Sized + DocAllocator<'a>,
    D::Doc: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.1.fmt(f)
    }
}

impl<'a, D> Clone for DocBuilder<'a, D>
where
    D: DocAllocator<'a> + 'a,
    D::Doc: Clone,
{
    fn clone(&self) -> Self {
        DocBuilder(self.0, self.1.clone())
    }
}

impl<'a, D> From<DocBuilder<'a, D>> for BuildDoc<'a, D::Doc>
where
    D: ?Sized + DocAllocator<'a>,
{
    fn from(val: DocBuilder<'a, D>) -> Self {
        val.1
    }
}
