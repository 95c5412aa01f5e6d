use crate::{Doc, DocAllocator};

/// Rebuilds `doc` bottom-up, handing every rebuilt node to `f`.
///
/// Text leaves (including their render length) are passed to `f` as a whole.
pub fn map_doc<'a, D, F>(allocator: &'a D, doc: &D::Doc, f: &mut F) -> D::Doc
where
    D: ?Sized + DocAllocator<'a>,
    D::Doc: Clone,
    F: FnMut(D::Doc) -> D::Doc,
{
    let rebuilt = match &**doc {
        Doc::Append(l, r) => {
            let l = map_doc(allocator, l, f);
            let r = map_doc(allocator, r, f);
            allocator.alloc(Doc::Append(l, r))
        }
        Doc::Group(inner) => {
            let inner = map_doc(allocator, inner, f);
            allocator.alloc(Doc::Group(inner))
        }
        Doc::FlatAlt(b, fl) => {
            let b = map_doc(allocator, b, f);
            let fl = map_doc(allocator, fl, f);
            allocator.alloc(Doc::FlatAlt(b, fl))
        }
        Doc::Nest(off, inner) => {
            let inner = map_doc(allocator, inner, f);
            allocator.alloc(Doc::Nest(*off, inner))
        }
        Doc::Root(inner) => {
            let inner = map_doc(allocator, inner, f);
            allocator.alloc(Doc::Root(inner))
        }
        Doc::LineSuffix(inner) => {
            let inner = map_doc(allocator, inner, f);
            allocator.alloc(Doc::LineSuffix(inner))
        }
        Doc::Nil
        | Doc::Hardline
        | Doc::LiteralLine
        | Doc::RenderLen(..)
        | Doc::OwnedText(_)
        | Doc::BorrowedText(_) => doc.clone(),
    };
    f(rebuilt)
}

/// Removes the line breaks a document ends with: trailing hard or literal lines, and newline
/// characters at the end of its last text.
pub fn strip_trailing_hardline<'a, D>(allocator: &'a D, doc: &D::Doc) -> D::Doc
where
    D: ?Sized + DocAllocator<'a>,
    D::Doc: Clone,
{
    match &**doc {
        Doc::Hardline | Doc::LiteralLine => allocator.alloc(Doc::Nil),
        Doc::Append(l, r) => {
            let r = strip_trailing_hardline(allocator, r);
            if r.is_nil() {
                strip_trailing_hardline(allocator, l)
            } else {
                allocator.alloc(Doc::Append(l.clone(), r))
            }
        }
        Doc::Group(inner) => {
            let inner = strip_trailing_hardline(allocator, inner);
            allocator.alloc(Doc::Group(inner))
        }
        Doc::Nest(off, inner) => {
            let inner = strip_trailing_hardline(allocator, inner);
            allocator.alloc(Doc::Nest(*off, inner))
        }
        Doc::Root(inner) => {
            let inner = strip_trailing_hardline(allocator, inner);
            allocator.alloc(Doc::Root(inner))
        }
        Doc::RenderLen(..) | Doc::OwnedText(_) | Doc::BorrowedText(_) => match doc.as_text() {
            Some(text) if text.ends_with(['\n', '\r']) => {
                let trimmed = text.trim_end_matches(['\n', '\r']).to_owned();
                allocator.text(trimmed).into_doc()
            }
            _ => doc.clone(),
        },
        Doc::Nil | Doc::FlatAlt(..) | Doc::LineSuffix(_) => doc.clone(),
    }
}
