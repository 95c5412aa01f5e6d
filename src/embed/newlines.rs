use crate::{map_doc, Doc, DocAllocator};

/// Replaces the newline characters inside text leaves with literal lines, so that text produced
/// elsewhere stays byte-identical but follows the indentation root it is placed under.
///
/// ```
/// use prettyrb::{normalize_newlines, Arena, DocAllocator};
///
/// let arena = Arena::new();
/// let text = arena.text("a {\n  b;\n}").into_doc();
/// let doc = normalize_newlines(&arena, &text);
/// assert_eq!(format!("{:?}", doc), r#"["a {", LiteralLine, "  b;", LiteralLine, "}"]"#);
/// ```
pub fn normalize_newlines<'a, D>(allocator: &'a D, doc: &D::Doc) -> D::Doc
where
    D: ?Sized + DocAllocator<'a>,
    D::Doc: Clone,
{
    map_doc(allocator, doc, &mut |doc: D::Doc| {
        let lines = doc
            .as_text()
            .filter(|text| text.contains('\n'))
            .map(|text| text.split('\n').map(str::to_owned).collect::<Vec<_>>());
        match lines {
            Some(lines) => allocator
                .intersperse(lines, Doc::<'a, D::Doc>::LiteralLine)
                .into_doc(),
            None => doc,
        }
    })
}
