mod macros;

use prettyrb::*;

#[test]
fn group_fits() {
    let arena = Arena::new();
    let doc = arena
        .text("test")
        .append(arena.line())
        .append("test")
        .group();

    test!(doc, "test test");
}

#[test]
fn forced_newline() {
    let arena = Arena::new();
    let doc = arena
        .text("test")
        .append(arena.hardline())
        .append("test")
        .group();

    test!(doc, "test\ntest");
}

#[test]
fn space_do_not_reset_pos() {
    let arena = Arena::new();
    let doc = arena
        .text("test")
        .append(arena.line())
        .group()
        .append("test")
        .append(arena.line().group())
        .append("test");

    test!(9, doc, "test test\ntest");
}

// A hardline inside the group must not make the text after it look like it fits
#[test]
fn newline_does_not_cause_next_line_to_be_to_long() {
    let arena = Arena::new();
    let doc = arena
        .text("test")
        .append(arena.hardline())
        .append(arena.text("test").append(arena.line()).append("test"))
        .group();

    test!(6, doc, "test\ntest\ntest");
}

#[test]
fn newline_after_group_does_not_affect_it() {
    let arena = Arena::new();
    let doc = arena.text("x").append(arena.line()).append("y").group();

    test!(100, doc.append(arena.hardline()), "x y\n");
}

#[test]
fn block() {
    let arena = Arena::new();
    let doc = arena
        .text("{")
        .append(
            arena
                .line()
                .append("test")
                .append(arena.line())
                .append("test")
                .nest(2),
        )
        .append(arena.line())
        .append("}")
        .group();

    test!(5, doc, "{\n  test\n  test\n}");
}

#[test]
fn block_with_hardline_negative_nest() {
    let arena = Arena::new();
    let doc = arena
        .text("{")
        .append(
            arena
                .line()
                .append("test")
                .append(arena.hardline())
                .append("test")
                .nest(-2),
        )
        .append(arena.line())
        .append("}")
        .group();

    test!(10, doc, "{\ntest\ntest\n}");
}

#[test]
fn blank_lines_have_no_indentation() {
    let arena = Arena::new();
    let doc = arena.text("a").append(
        arena
            .hardline()
            .append(arena.hardline())
            .append("b")
            .nest(2),
    );

    test!(doc, "a\n\n  b");
}

#[test]
fn line_suffix_waits_for_newline() {
    let arena = Arena::new();
    let doc = arena
        .text("foo(")
        .append(arena.text(" # trailing").line_suffix())
        .append("bar)")
        .append(arena.hardline())
        .append("baz");

    test!(doc, "foo(bar) # trailing\nbaz");
}

#[test]
fn line_suffix_flushed_at_end() {
    let arena = Arena::new();
    let doc = arena
        .text("a")
        .append(arena.text(" # one").line_suffix())
        .append(arena.text(" # two").line_suffix())
        .append("b");

    test!(doc, "ab # one # two");
}

#[test]
fn line_suffix_does_not_count_towards_width() {
    let arena = Arena::new();
    let doc = arena
        .text("a")
        .append(arena.text(" # a very long trailing comment").line_suffix())
        .append(arena.line())
        .append("b")
        .group();

    test!(5, doc, "a b # a very long trailing comment");
}

#[test]
fn literal_line_keeps_group_flat() {
    let arena = Arena::new();
    let doc = arena
        .text("a")
        .append(arena.line())
        .append("b")
        .append(arena.literal_line())
        .append("c")
        .group();

    test!(doc, "a b\nc");
}

#[test]
fn literal_line_ignores_nest() {
    let arena = Arena::new();
    let doc = arena.text("x").append(
        arena
            .hardline()
            .append("y")
            .append(arena.literal_line())
            .append("z")
            .nest(4),
    );

    test!(doc, "x\n    y\nz");
}

#[test]
fn root_follows_enclosing_nest() {
    let arena = Arena::new();
    let body = arena
        .text("a")
        .append(arena.literal_line())
        .append("b")
        .mark_as_root()
        .nest(2);
    let doc = arena
        .text("{")
        .append(arena.hardline().append(body).nest(2))
        .append(arena.literal_line())
        .append("}");

    test!(doc, "{\n  a\n    b\n}");
}

#[test]
fn flat_alt_follows_group() {
    let arena = Arena::new();
    let doc = arena
        .text("call(")
        .append(
            arena
                .line_()
                .append("argument")
                .append(arena.text(",").flat_alt(arena.nil()))
                .nest(2),
        )
        .append(arena.line_())
        .append(")")
        .group();

    test!(80, doc, "call(argument)");
    test!(10, doc, "call(\n  argument,\n)");
}

#[test]
fn unicode_width() {
    let arena = Arena::new();
    let doc = arena.text("äää").append(arena.line()).append("b").group();

    test!(5, doc, "äää b");
    test!(4, doc, "äää\nb");
}

#[test]
fn docs_macro() {
    let arena = &Arena::new();
    let doc = docs![arena, "a", arena.space(), "b", None::<&str>, String::from("c")];

    test!(doc, "a bc");
}

#[test]
fn render_to_io() {
    let arena = Arena::new();
    let doc = arena.text("a").append(arena.hardline()).append("b");

    let mut out = Vec::new();
    doc.render(80, &mut out).unwrap();
    assert_eq!(out, b"a\nb");
}

#[test]
fn deep_indentation() {
    let arena = Arena::new();
    let doc = arena
        .text("a")
        .append(arena.hardline().append("b").nest(130));

    test!(doc, &format!("a\n{}b", " ".repeat(130)));
}
