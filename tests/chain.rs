mod macros;

use prettyrb::*;

fn chain(head: &str, calls: &[&str]) -> SyntaxNode {
    calls.iter().fold(SyntaxNode::var_call(head), |receiver, name| {
        SyntaxNode::call(receiver, CallOperator::Dot, name)
    })
}

fn debug_layout(node: &SyntaxNode) -> String {
    let arena = Arena::new();
    let printer = Printer::new(&arena, "", FormatOptions::default());
    format!("{:?}", printer.print(node).unwrap())
}

// Depth counts the links below the outermost call, so `a.b.c.d` is only two deep
#[test]
fn chains_below_break_depth_offer_no_broken_layout() {
    for calls in [&["b"][..], &["b", "c"], &["b", "c", "d"]] {
        let layout = debug_layout(&chain("a", calls));
        assert!(!layout.contains("FlatAlt"), "{calls:?}: {layout}");
    }
}

#[test]
fn long_chains_offer_both_layouts() {
    for calls in [&["b", "c", "d", "e"][..], &["b", "c", "d", "e", "f", "g"]] {
        let layout = debug_layout(&chain("a", calls));
        assert!(layout.starts_with("FlatAlt("), "{calls:?}: {layout}");
    }
}

#[test]
fn long_chain_stays_flat_when_it_fits() {
    format_test!(chain("a", &["b", "c", "d", "e"]), "a.b.c.d.e\n");
}

#[test]
fn long_chain_breaks_one_call_per_line() {
    format_test!(
        20,
        chain("records", &["where", "order", "limit", "to_a"]),
        "records\n  .where\n  .order\n  .limit\n  .to_a\n"
    );
}

#[test]
fn short_chain_keeps_its_head() {
    format_test!(4, chain("a", &["b", "c", "d"]), "a.b\n  .c\n  .d\n");
}

#[test]
fn operators() {
    let node = SyntaxNode::call(
        SyntaxNode::call(SyntaxNode::constant("Foo"), CallOperator::Colon2, "bar"),
        CallOperator::SafeNav,
        "baz",
    );
    format_test!(node, "Foo::bar&.baz\n");
}

#[test]
fn arguments_are_links() {
    let link = |receiver: SyntaxNode, name: &str, arg: &str| {
        SyntaxNode::arg_call(
            SyntaxNode::call(receiver, CallOperator::Dot, name),
            SyntaxNode::arg_list(vec![SyntaxNode::literal(arg)]),
        )
    };
    let node = link(link(link(SyntaxNode::var_call("a"), "b", "1"), "c", "2"), "d", "3");

    format_test!(node, "a.b(1).c(2).d(3)\n");
    format_test!(10, node, "a\n  .b(1)\n  .c(2)\n  .d(3)\n");
}

#[test]
fn blocks_are_links() {
    let node = SyntaxNode::block_call(
        chain("users", &["active", "recent", "each"]),
        SyntaxNode::brace_block(
            &["user"],
            vec![SyntaxNode::arg_call(
                SyntaxNode::plain_call("notify"),
                SyntaxNode::arg_list(vec![SyntaxNode::var_call("user")]),
            )],
        ),
    );

    format_test!(node, "users.active.recent.each { |user| notify(user) }\n");
    format_test!(
        32,
        node,
        "users\n  .active\n  .recent\n  .each { |user| notify(user) }\n"
    );
}

#[test]
fn receiver_comment_forces_break() {
    let node = SyntaxNode::call(
        SyntaxNode::var_call("foo").with_comment("# the receiver"),
        CallOperator::Dot,
        "bar",
    );
    format_test!(node, "foo # the receiver\n  .bar\n");
}

#[test]
fn comment_inside_long_chain_breaks_it() {
    let commented = SyntaxNode::call(SyntaxNode::var_call("a"), CallOperator::Dot, "b")
        .with_comment("# first");
    let node = ["c", "d", "e"].iter().fold(commented, |receiver, name| {
        SyntaxNode::call(receiver, CallOperator::Dot, name)
    });

    format_test!(node, "a\n  .b # first\n  .c\n  .d\n  .e\n");
}

#[test]
fn call_on_block_attaches_flush() {
    let block_call = SyntaxNode::block_call(
        chain("items", &["map"]),
        SyntaxNode::brace_block(&["item"], vec![SyntaxNode::var_call("item")]),
    );
    let node = SyntaxNode::call(block_call, CallOperator::Dot, "first");

    format_test!(node, "items.map { |item| item }.first\n");
}

#[test]
fn call_on_array_attaches_flush() {
    let array = SyntaxNode::array(vec![SyntaxNode::literal("1"), SyntaxNode::literal("2")]);
    let node = SyntaxNode::call(array, CallOperator::Dot, "sum");

    format_test!(node, "[1, 2].sum\n");
    format_test!(4, node, "[\n  1,\n  2\n].sum\n");
}

#[test]
fn chain_break_depth() {
    assert_eq!(CHAIN_BREAK_DEPTH, 3);

    let arena = Arena::new();
    let printer = Printer::new(&arena, "", FormatOptions::default());
    let doc = printer.print(&chain("a", &["b", "c"])).unwrap();
    assert_eq!(doc.print(80).to_string(), "a.b.c");
}
