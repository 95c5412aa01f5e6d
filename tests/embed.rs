mod macros;

use indoc::indoc;
use prettyrb::*;

/// Formats single-rule stylesheets such as `.a{color:red}`, one declaration per line, followed by
/// a hard line the way whole-file formatters end their output.
struct RuleFormatter;

impl SubFormatter for RuleFormatter {
    fn format<'a>(
        &self,
        arena: &'a Arena<'a>,
        source: &str,
        dialect: Dialect,
    ) -> Result<RefDoc<'a>, BoxError> {
        assert_eq!(dialect, Dialect::Css);
        let (selector, body) = source
            .trim()
            .strip_suffix('}')
            .and_then(|rule| rule.split_once('{'))
            .ok_or("unbalanced braces")?;
        let declarations = body
            .split(';')
            .filter(|declaration| !declaration.trim().is_empty())
            .map(|declaration| -> Result<String, BoxError> {
                let (property, value) = declaration.split_once(':').ok_or("missing colon")?;
                Ok(format!("  {}: {};", property.trim(), value.trim()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let text = format!("{} {{\n{}\n}}", selector.trim(), declarations.join("\n"));
        Ok(arena.text(text).append(arena.hardline()).into_doc())
    }
}

/// Fails every test that reaches it.
struct Unreachable;

impl SubFormatter for Unreachable {
    fn format<'a>(
        &self,
        _: &'a Arena<'a>,
        source: &str,
        _: Dialect,
    ) -> Result<RefDoc<'a>, BoxError> {
        panic!("heredoc should not be delegated: {source:?}")
    }
}

fn heredoc(opening: &str, body: &str, closing: &str) -> SyntaxNode {
    SyntaxNode::heredoc(HeredocDescriptor::new(
        opening,
        vec![HeredocPart::Text(body.to_owned())],
        closing,
    ))
}

fn format_with(node: &SyntaxNode, formatter: &dyn SubFormatter) -> Result<String, FormatError> {
    format("", node, &FormatOptions::default(), Some(formatter))
}

#[test]
fn squiggly_heredoc_is_reindented() {
    let node = heredoc("<<~CSS", "  .a{color:red}\n", "CSS\n");

    let output = format_with(&node, &RuleFormatter).unwrap();
    assert_eq!(
        output,
        indoc! {"
            <<~CSS
              .a {
                color: red;
              }
            CSS
        "}
    );
}

#[test]
fn plain_heredoc_keeps_formatter_indentation() {
    let node = heredoc("<<-CSS", ".a{color:red}\n", "  CSS\n");

    let output = format_with(&node, &RuleFormatter).unwrap();
    assert_eq!(
        output,
        indoc! {"
            <<-CSS
            .a {
              color: red;
            }
            CSS
        "}
    );
}

#[test]
fn body_starts_after_the_opening_line() {
    let node = SyntaxNode::call(
        heredoc("<<~CSS", "  .a{color:red}\n", "CSS\n"),
        CallOperator::Dot,
        "freeze",
    );

    let output = format_with(&node, &RuleFormatter).unwrap();
    assert_eq!(
        output,
        indoc! {"
            <<~CSS.freeze
              .a {
                color: red;
              }
            CSS
        "}
    );
}

#[test]
fn heredoc_argument_body_follows_the_call() {
    let node = SyntaxNode::arg_call(
        SyntaxNode::plain_call("style"),
        SyntaxNode::arg_list(vec![
            heredoc("<<~CSS", "  .a{color:red}\n", "CSS\n"),
            SyntaxNode::symbol("inline"),
        ]),
    );

    let output = format_with(&node, &RuleFormatter).unwrap();
    assert_eq!(
        output,
        indoc! {"
            style(<<~CSS, :inline)
                .a {
                  color: red;
                }
            CSS
        "}
    );
}

#[test]
fn formatted_output_is_stable() {
    let first = format_with(&heredoc("<<~CSS", "  .a{color:red}\n", "CSS\n"), &RuleFormatter)
        .unwrap();

    let body = first
        .strip_prefix("<<~CSS\n")
        .and_then(|rest| rest.strip_suffix("CSS\n"))
        .unwrap();
    let second = format_with(&heredoc("<<~CSS", body, "CSS\n"), &RuleFormatter).unwrap();
    assert_eq!(first, second);
}

#[test]
fn interpolated_heredoc_is_printed_as_written() {
    let node = SyntaxNode::heredoc(HeredocDescriptor::new(
        "<<~CSS",
        vec![
            HeredocPart::Text("  .a { color: ".into()),
            HeredocPart::Interpolation("#{color}".into()),
            HeredocPart::Text("; }\n".into()),
        ],
        "CSS\n",
    ));

    let output = format_with(&node, &Unreachable).unwrap();
    assert_eq!(output, "<<~CSS\n  .a { color: #{color}; }\nCSS\n");
}

#[test]
fn unknown_tag_is_printed_as_written() {
    let node = heredoc("<<~SQL", "  SELECT *\n    FROM users\n", "  SQL\n");

    let output = format_with(&node, &Unreachable).unwrap();
    assert_eq!(output, "<<~SQL\n  SELECT *\n    FROM users\n  SQL\n");
}

#[test]
fn without_sub_formatter_heredocs_are_printed_as_written() {
    let node = heredoc("<<~CSS", "  .a{color:red}\n\n  .b{}\n", "CSS\n");

    format_test!(node, "<<~CSS\n  .a{color:red}\n\n  .b{}\nCSS\n");
}

#[test]
fn empty_heredoc() {
    let node = SyntaxNode::heredoc(HeredocDescriptor::new("<<~TEXT", vec![], "TEXT\n"));

    format_test!(node, "<<~TEXT\nTEXT\n");
}

#[test]
fn sub_formatter_error_aborts_formatting() {
    let node = SyntaxNode::statements(vec![
        SyntaxNode::plain_call("before"),
        heredoc("<<~CSS", "  .a{color red}\n", "CSS\n"),
    ]);

    let err = format_with(&node, &RuleFormatter).unwrap_err();
    assert!(matches!(
        &err,
        FormatError::Embed { dialect: Dialect::Css, tag, .. } if tag == "css"
    ));
    assert_eq!(
        err.to_string(),
        "failed to format embedded css in heredoc `css`: missing colon"
    );
}

#[test]
fn dispatcher_declines_without_calling_formatter() {
    let arena = Arena::new();
    let dispatcher = EmbedDispatcher::new(&Unreachable, 2);

    let interpolated = HeredocDescriptor::new(
        "<<~JS",
        vec![HeredocPart::Interpolation("#{script}".into())],
        "JS\n",
    );
    assert!(dispatcher.embed(&arena, &interpolated).unwrap().is_none());

    let unknown = HeredocDescriptor::new(
        "<<~HTML",
        vec![HeredocPart::Text("<p>\n".into())],
        "HTML\n",
    );
    assert!(dispatcher.embed(&arena, &unknown).unwrap().is_none());
}

#[test]
fn parser_table() {
    assert_eq!(Dialect::from_tag("css"), Some(Dialect::Css));
    assert_eq!(Dialect::from_tag("javascript"), Some(Dialect::Script));
    assert_eq!(Dialect::from_tag("js"), Some(Dialect::Script));
    assert_eq!(Dialect::from_tag("markdown"), Some(Dialect::Markdown));
    assert_eq!(Dialect::from_tag("CSS"), None);
    assert_eq!(Dialect::from_tag("sql"), None);
    assert_eq!(PARSERS.len(), 7);
}

#[test]
fn heredoc_tags() {
    let tag = |opening: &str| HeredocDescriptor::new(opening, vec![], "X\n").tag();
    assert_eq!(tag("<<~CSS"), "css");
    assert_eq!(tag("<<-CSS"), "css");
    assert_eq!(tag("<<-JavaScript"), "javascript");
    assert_eq!(tag("<<SCSS"), "css");
    assert_eq!(tag("<<CSS"), "ss");
    assert_eq!(tag("<<"), "");

    let mode = |opening: &str| HeredocDescriptor::new(opening, vec![], "X\n").dedent_mode;
    assert_eq!(mode("<<~X"), DedentMode::Squiggly);
    assert_eq!(mode("<<-X"), DedentMode::Plain);
    assert_eq!(mode("<<X"), DedentMode::Plain);
}

#[test]
fn bare_heredoc_tag_loses_its_first_letter() {
    let arena = Arena::new();
    let dispatcher = EmbedDispatcher::new(&Unreachable, 2);
    let bare = HeredocDescriptor::new(
        "<<CSS",
        vec![HeredocPart::Text(".a{}\n".into())],
        "CSS\n",
    );
    assert!(dispatcher.embed(&arena, &bare).unwrap().is_none());

    let node = heredoc("<<JS", "run()\n", "JS\n");
    let output = format_with(&node, &Unreachable).unwrap();
    assert_eq!(output, "<<JS\nrun()\nJS\n");
}

#[test]
fn bare_scss_heredoc_is_formatted_as_css() {
    let node = heredoc("<<SCSS", ".a{color:red}\n", "SCSS\n");

    let output = format_with(&node, &RuleFormatter).unwrap();
    assert_eq!(
        output,
        indoc! {"
            <<SCSS
            .a {
              color: red;
            }
            SCSS
        "}
    );
}
