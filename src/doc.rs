use std::{fmt, ops::Deref};

pub trait DocPtr<'a>: Deref<Target = Doc<'a, Self>> + Sized {}

/// The concrete document type. This type is not meant to be built directly. Instead use the
/// methods on a `DocAllocator`.
///
/// The `T` parameter is used to abstract over pointers to `Doc`. See `RefDoc` for how it is used.
#[derive(Clone)]
pub enum Doc<'a, T>
where
    T: DocPtr<'a>,
{
    Nil,
    Append(T, T),
    Group(T),
    /// Acts as the first document when the enclosing group breaks, as the second when it is flat.
    FlatAlt(T, T),
    Nest(isize, T),
    Hardline,
    /// A newline that never breaks enclosing groups and is indented to the current root only.
    LiteralLine,
    /// Resets the indentation root to the indentation current at this point.
    Root(T),
    /// Deferred until right before the next newline.
    LineSuffix(T),
    // Stores the length of a string document that is not just ascii
    RenderLen(usize, T),
    OwnedText(Box<str>),
    BorrowedText(&'a str),
}

impl<'a, T> Doc<'a, T>
where
    T: DocPtr<'a>,
{
    /// The text of a text leaf, looking through any stored render length.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Doc::OwnedText(s) => Some(s),
            Doc::BorrowedText(s) => Some(s),
            Doc::RenderLen(_, doc) => doc.as_text(),
            _ => None,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Doc::Nil)
    }
}

impl<'a, T> Default for Doc<'a, T>
where
    T: DocPtr<'a>,
{
    fn default() -> Self {
        Self::Nil
    }
}

impl<'a, T> fmt::Debug for Doc<'a, T>
where
    T: DocPtr<'a> + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let is_line = |doc: &Doc<'a, T>| match doc {
            Doc::FlatAlt(x, y) => {
                matches!((&**x, &**y), (Doc::Hardline, Doc::BorrowedText(" ")))
            }
            _ => false,
        };
        let is_line_ = |doc: &Doc<'a, T>| match doc {
            Doc::FlatAlt(x, y) => {
                matches!((&**x, &**y), (Doc::Hardline, Doc::Nil))
            }
            _ => false,
        };
        match self {
            Doc::Nil => f.debug_tuple("Nil").finish(),
            Doc::Append(..) => {
                let mut f = f.debug_list();
                append_docs(self, &mut |doc| {
                    f.entry(doc);
                });
                f.finish()
            }
            _ if is_line(self) => f.debug_tuple("Line").finish(),
            _ if is_line_(self) => f.debug_tuple("Line_").finish(),
            Doc::FlatAlt(ref x, ref y) => f.debug_tuple("FlatAlt").field(x).field(y).finish(),
            Doc::Group(ref doc) => {
                if is_line(&**doc) {
                    return f.debug_tuple("SoftLine").finish();
                }
                if is_line_(&**doc) {
                    return f.debug_tuple("SoftLine_").finish();
                }
                f.debug_tuple("Group").field(doc).finish()
            }
            Doc::Nest(off, ref doc) => f.debug_tuple("Nest").field(&off).field(doc).finish(),
            Doc::Hardline => f.debug_tuple("Hardline").finish(),
            Doc::LiteralLine => f.debug_tuple("LiteralLine").finish(),
            Doc::Root(ref doc) => f.debug_tuple("Root").field(doc).finish(),
            Doc::LineSuffix(ref doc) => f.debug_tuple("LineSuffix").field(doc).finish(),
            Doc::RenderLen(_, d) => d.fmt(f),
            Doc::OwnedText(ref s) => s.fmt(f),
            Doc::BorrowedText(ref s) => s.fmt(f),
        }
    }
}

fn append_docs<'a, 'd, T>(mut doc: &'d Doc<'a, T>, consumer: &mut impl FnMut(&'d Doc<'a, T>))
where
    T: DocPtr<'a>,
{
    loop {
        match doc {
            Doc::Append(l, r) => {
                append_docs(l, consumer);
                doc = r;
            }
            _ => break consumer(doc),
        }
    }
}

/// Newtype wrapper for `&Doc`
pub struct RefDoc<'a>(pub &'a Doc<'a, RefDoc<'a>>);

impl<'a> DocPtr<'a> for RefDoc<'a> {}

impl Copy for RefDoc<'_> {}
impl Clone for RefDoc<'_> {
    fn clone(&self) -> Self {
        *self
    }
}

impl fmt::Debug for RefDoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'a> Deref for RefDoc<'a> {
    type Target = Doc<'a, RefDoc<'a>>;

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

/// Either a `Doc` or a pointer to a `Doc` (`D`)
#[derive(Clone)]
pub enum BuildDoc<'a, D>
where
    D: DocPtr<'a>,
{
    DocPtr(D),
    Doc(Doc<'a, D>),
}

impl<'a, D> Default for BuildDoc<'a, D>
where
    D: DocPtr<'a>,
{
    fn default() -> Self {
        Self::Doc(Doc::default())
    }
}

impl<'a, D> fmt::Debug for BuildDoc<'a, D>
where
    D: DocPtr<'a> + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt(f)
    }
}

impl<'a, D> Deref for BuildDoc<'a, D>
where
    D: DocPtr<'a>,
{
    type Target = Doc<'a, D>;
    fn deref(&self) -> &Self::Target {
        match self {
            BuildDoc::DocPtr(d) => d,
            BuildDoc::Doc(d) => d,
        }
    }
}

impl<'a> From<RefDoc<'a>> for BuildDoc<'a, RefDoc<'a>> {
    fn from(s: RefDoc<'a>) -> Self {
        BuildDoc::DocPtr(s)
    }
}

impl<'a, T> From<Doc<'a, T>> for BuildDoc<'a, T>
where
    T: DocPtr<'a>,
{
    fn from(s: Doc<'a, T>) -> Self {
        BuildDoc::Doc(s)
    }
}
