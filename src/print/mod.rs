//! Turns a [`SyntaxNode`] tree into a document.

mod calls;
mod chain;

use crate::{
    normalize_newlines, Arena, ArgList, BlockBody, BlockDelimiter, DocAllocator, DocBuilder,
    EmbedDispatcher, FormatError, FormatOptions, HeredocDescriptor, NodeKind, ProcRewriter,
    RefDoc, SubFormatter, SymbolProc, SyntaxNode,
};

pub use self::chain::{ChainState, Printed, CHAIN_BREAK_DEPTH};
use self::chain::Parent;

type Builder<'a> = DocBuilder<'a, Arena<'a>>;

/// Prints syntax trees into documents allocated in one arena.
///
/// Every node is printed once, children before parents. A call chain passes its state upwards
/// through the return values until the first node outside the chain decides its layout.
pub struct Printer<'a> {
    arena: &'a Arena<'a>,
    source: &'a str,
    options: FormatOptions,
    sub_formatter: Option<&'a dyn SubFormatter>,
    rewriter: &'a dyn ProcRewriter,
}

impl<'a> Printer<'a> {
    /// `source` is the text the tree was parsed from. Spans index into it.
    pub fn new(arena: &'a Arena<'a>, source: &'a str, options: FormatOptions) -> Self {
        Printer {
            arena,
            source,
            options,
            sub_formatter: None,
            rewriter: &SymbolProc,
        }
    }

    /// Formats heredoc bodies written in another language through `formatter`.
    pub fn with_sub_formatter(mut self, formatter: &'a dyn SubFormatter) -> Self {
        self.sub_formatter = Some(formatter);
        self
    }

    /// Replaces the [`SymbolProc`] rewriter used when `to_proc` is enabled.
    pub fn with_proc_rewriter(mut self, rewriter: &'a dyn ProcRewriter) -> Self {
        self.rewriter = rewriter;
        self
    }

    pub fn print(&self, node: &SyntaxNode) -> Result<Builder<'a>, FormatError> {
        self.doc(node)
    }

    fn doc(&self, node: &SyntaxNode) -> Result<Builder<'a>, FormatError> {
        let printed = self.print_node(node, Parent::Other)?;
        Ok(self.build(printed.doc))
    }

    fn build(&self, doc: RefDoc<'a>) -> Builder<'a> {
        DocBuilder(self.arena, doc.into())
    }

    fn print_node(&self, node: &SyntaxNode, parent: Parent) -> Result<Printed<'a>, FormatError> {
        let arena = self.arena;
        let printed = match &node.kind {
            NodeKind::Call {
                receiver,
                operator,
                message,
            } => self.print_call(receiver, *operator, message, parent)?,
            NodeKind::ArgCall { method, args } => self.print_arg_call(method, args, parent)?,
            NodeKind::BlockCall { call, block } => {
                self.print_block_call(node, call, block, parent)?
            }
            NodeKind::Ident(text) | NodeKind::Const(text) | NodeKind::Literal(text) => {
                Printed::standalone(arena.text(text.clone()).into_doc())
            }
            NodeKind::Symbol(name) => {
                Printed::standalone(arena.text(format!(":{name}")).into_doc())
            }
            NodeKind::PlainCall(target) | NodeKind::VariableCall(target) => {
                Printed::standalone(self.doc(target)?.into_doc())
            }
            NodeKind::BlockArg(value) => {
                Printed::standalone(arena.text("&").append(self.doc(value)?).into_doc())
            }
            NodeKind::ArgList(list) => Printed::standalone(self.print_args(list)?.into_doc()),
            NodeKind::BlockBody(block) => Printed::standalone(self.print_block(block)?.into_doc()),
            NodeKind::Array(items) => Printed::standalone(self.print_array(items)?.into_doc()),
            NodeKind::Heredoc(heredoc) => Printed::standalone(self.print_heredoc(heredoc)?),
            NodeKind::Statements(items) => {
                Printed::standalone(self.print_statements(items)?.into_doc())
            }
        };
        Ok(self.attach_comments(node, printed))
    }

    /// Comments trail the line their node ends on. A link also carries them on its last chain
    /// candidate so the one-call-per-line layout keeps them.
    fn attach_comments(&self, node: &SyntaxNode, mut printed: Printed<'a>) -> Printed<'a> {
        if !node.has_comments() {
            return printed;
        }
        let arena = self.arena;
        let comments = arena
            .concat(
                node.comments
                    .iter()
                    .map(|comment| arena.text(format!(" {}", comment.text)).line_suffix()),
            )
            .into_doc();

        printed.doc = self.build(printed.doc).append(comments).into_doc();
        if let Some(last) = printed
            .chain
            .as_mut()
            .and_then(|chain| chain.candidates.last_mut())
        {
            *last = self.build(*last).append(comments).into_doc();
        }
        printed
    }

    fn print_all(&self, nodes: &[SyntaxNode]) -> Result<Vec<Builder<'a>>, FormatError> {
        nodes.iter().map(|node| self.doc(node)).collect()
    }

    /// A comma separated list between `open` and `close`, one item per line if it does not fit.
    fn print_delimited(
        &self,
        open: &'static str,
        items: &[SyntaxNode],
        close: &'static str,
    ) -> Result<Builder<'a>, FormatError> {
        let arena = self.arena;
        let items = self.print_all(items)?;
        Ok(arena
            .line_()
            .append(arena.intersperse(items, arena.text(",").append(arena.line())))
            .nest(self.options.indent())
            .append(arena.line_())
            .enclose(open, close)
            .group())
    }

    fn print_args(&self, list: &ArgList) -> Result<Builder<'a>, FormatError> {
        let arena = self.arena;
        match (list.parens, list.args.is_empty()) {
            (true, true) => Ok(arena.text("()")),
            (true, false) => self.print_delimited("(", &list.args, ")"),
            (false, _) => Ok(arena.intersperse(self.print_all(&list.args)?, ", ")),
        }
    }

    fn print_array(&self, items: &[SyntaxNode]) -> Result<Builder<'a>, FormatError> {
        if items.is_empty() {
            return Ok(self.arena.text("[]"));
        }
        self.print_delimited("[", items, "]")
    }

    fn print_statements(&self, items: &[SyntaxNode]) -> Result<Builder<'a>, FormatError> {
        Ok(self
            .arena
            .intersperse(self.print_all(items)?, self.arena.hardline()))
    }

    /// A block including the space separating it from its call.
    fn print_block(&self, block: &BlockBody) -> Result<Builder<'a>, FormatError> {
        let arena = self.arena;
        let params = if block.params.is_empty() {
            arena.nil()
        } else {
            arena.text(format!(" |{}|", block.params.join(", ")))
        };
        let has_body = !block.body.is_empty();
        let body = self.print_statements(&block.body)?;

        Ok(match block.delimiter {
            BlockDelimiter::Braces if has_body => arena
                .text(" {")
                .append(params)
                .append(arena.line().append(body).nest(self.options.indent()))
                .append(arena.line())
                .append("}")
                .group(),
            BlockDelimiter::Braces if block.params.is_empty() => arena.text(" {}"),
            BlockDelimiter::Braces => arena.text(" {").append(params).append(" }"),
            BlockDelimiter::DoEnd if has_body => arena
                .text(" do")
                .append(params)
                .append(arena.hardline().append(body).nest(self.options.indent()))
                .append(arena.hardline())
                .append("end"),
            BlockDelimiter::DoEnd => arena
                .text(" do")
                .append(params)
                .append(arena.hardline())
                .append("end"),
        })
    }

    fn print_heredoc(&self, heredoc: &HeredocDescriptor) -> Result<RefDoc<'a>, FormatError> {
        if let Some(formatter) = self.sub_formatter {
            let dispatcher = EmbedDispatcher::new(formatter, self.options.indent());
            if let Some(doc) = dispatcher.embed(self.arena, heredoc)? {
                return Ok(doc);
            }
        }
        Ok(self.print_heredoc_verbatim(heredoc))
    }

    /// The body and closing tag exactly as written, starting on the line after the opening tag.
    fn print_heredoc_verbatim(&self, heredoc: &HeredocDescriptor) -> RefDoc<'a> {
        let arena = self.arena;
        let raw = heredoc.raw_body();
        let body = if raw.is_empty() {
            arena.nil()
        } else {
            let text = raw.strip_suffix('\n').unwrap_or(&raw).to_owned();
            let text = arena.text(text).into_doc();
            arena
                .literal_line()
                .append(normalize_newlines(arena, &text))
        };

        arena
            .text(heredoc.opening.clone())
            .append(
                body.append(arena.literal_line())
                    .append(arena.text(heredoc.closing.trim_end().to_owned()))
                    .line_suffix(),
            )
            .into_doc()
    }
}

/// Prints `node` and renders it at `options.print_width`, followed by a final newline.
///
/// ```
/// use prettyrb::{format, FormatOptions, SyntaxNode};
///
/// let call = SyntaxNode::arg_call(SyntaxNode::plain_call("Foo"), SyntaxNode::arg_list(vec![]));
/// assert_eq!(format("Foo()", &call, &FormatOptions::default(), None).unwrap(), "Foo()\n");
/// ```
pub fn format(
    source: &str,
    node: &SyntaxNode,
    options: &FormatOptions,
    sub_formatter: Option<&dyn SubFormatter>,
) -> Result<String, FormatError> {
    let arena = Arena::new();
    let mut printer = Printer::new(&arena, source, *options);
    if let Some(formatter) = sub_formatter {
        printer = printer.with_sub_formatter(formatter);
    }
    let doc = printer.print(node)?.append(arena.hardline());

    let mut out = String::new();
    doc.render_fmt(options.print_width, &mut out)?;
    Ok(out)
}
