//! The syntax tree consumed by the [`Printer`](crate::Printer).
//!
//! Trees are produced by an external parser. The constructors on [`SyntaxNode`] exist so that
//! adapters and tests can build them without one.

use std::fmt;

/// A byte range into the formatted source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A comment attached to a node. `text` includes the leading `#`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub span: Span,
    pub comments: Vec<Comment>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Ident(String),
    Const(String),
    /// A symbol literal, stored without its leading `:`.
    Symbol(String),
    /// Any literal printed as written (numbers, strings, `nil`, ...).
    Literal(String),
    /// A function-style call without a receiver, such as `foo` in `foo(1)` or `Foo` in `Foo()`.
    PlainCall(Box<SyntaxNode>),
    /// A bare identifier the parser could not tell apart from a local variable.
    VariableCall(Box<SyntaxNode>),
    /// `receiver.message`
    Call {
        receiver: Box<SyntaxNode>,
        operator: CallOperator,
        message: Message,
    },
    /// A method followed by its argument list. `args` is always an `ArgList`.
    ArgCall {
        method: Box<SyntaxNode>,
        args: Box<SyntaxNode>,
    },
    /// A call with an attached block. `block` is always a `BlockBody`.
    BlockCall {
        call: Box<SyntaxNode>,
        block: Box<SyntaxNode>,
    },
    /// `&value` in argument position.
    BlockArg(Box<SyntaxNode>),
    ArgList(ArgList),
    BlockBody(BlockBody),
    Array(Vec<SyntaxNode>),
    Heredoc(HeredocDescriptor),
    Statements(Vec<SyntaxNode>),
}

impl NodeKind {
    /// Kinds that form the links of a call chain.
    pub fn is_chainable(&self) -> bool {
        matches!(
            self,
            NodeKind::Call { .. } | NodeKind::ArgCall { .. } | NodeKind::BlockCall { .. }
        )
    }

    /// Kinds that end in a closing brace or keyword. Calls on them attach flush.
    pub fn is_no_indent(&self) -> bool {
        matches!(
            self,
            NodeKind::BlockCall { .. } | NodeKind::Heredoc(_) | NodeKind::Array(_)
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Ident(_) => "identifier",
            NodeKind::Const(_) => "constant",
            NodeKind::Symbol(_) => "symbol",
            NodeKind::Literal(_) => "literal",
            NodeKind::PlainCall(_) => "plain call",
            NodeKind::VariableCall(_) => "variable call",
            NodeKind::Call { .. } => "call",
            NodeKind::ArgCall { .. } => "argument call",
            NodeKind::BlockCall { .. } => "block call",
            NodeKind::BlockArg(_) => "block argument",
            NodeKind::ArgList(_) => "argument list",
            NodeKind::BlockBody(_) => "block",
            NodeKind::Array(_) => "array",
            NodeKind::Heredoc(_) => "heredoc",
            NodeKind::Statements(_) => "statements",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallOperator {
    /// `.`
    Dot,
    /// `&.`
    SafeNav,
    /// `::`
    Colon2,
}

impl CallOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            CallOperator::Dot => ".",
            CallOperator::SafeNav => "&.",
            CallOperator::Colon2 => "::",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    Name(Box<SyntaxNode>),
    /// The method name left out by `callable.()`.
    Implicit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgList {
    /// Whether the arguments were written inside parentheses.
    pub parens: bool,
    pub args: Vec<SyntaxNode>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockDelimiter {
    Braces,
    DoEnd,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockBody {
    pub delimiter: BlockDelimiter,
    pub params: Vec<String>,
    pub body: Vec<SyntaxNode>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DedentMode {
    /// `<<TAG` and `<<-TAG`: the body is taken as written.
    Plain,
    /// `<<~TAG`: the body is re-indented by the printer.
    Squiggly,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeredocPart {
    Text(String),
    /// Raw source of an `#{...}` segment.
    Interpolation(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeredocDescriptor {
    /// The opening token, e.g. `<<~CSS`.
    pub opening: String,
    pub dedent_mode: DedentMode,
    pub body: Vec<HeredocPart>,
    /// The closing line as written, including its indentation and newline.
    pub closing: String,
}

impl HeredocDescriptor {
    pub fn new(
        opening: impl Into<String>,
        body: Vec<HeredocPart>,
        closing: impl Into<String>,
    ) -> Self {
        let opening = opening.into();
        let dedent_mode = if opening.starts_with("<<~") {
            DedentMode::Squiggly
        } else {
            DedentMode::Plain
        };
        Self {
            opening,
            dedent_mode,
            body,
            closing: closing.into(),
        }
    }

    /// The lowercased tag naming the heredoc's language: `<<~CSS` gives `css`.
    ///
    /// The first three characters are always dropped, so a bare `<<CSS` gives `ss`.
    pub fn tag(&self) -> String {
        self.opening.get(3..).unwrap_or_default().to_lowercase()
    }

    pub fn is_plain_text(&self) -> bool {
        self.body
            .iter()
            .all(|part| matches!(part, HeredocPart::Text(_)))
    }

    /// The body exactly as written, interpolation included.
    pub fn raw_body(&self) -> String {
        self.body
            .iter()
            .map(|part| match part {
                HeredocPart::Text(text) | HeredocPart::Interpolation(text) => text.as_str(),
            })
            .collect()
    }
}

impl SyntaxNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            span: Span::default(),
            comments: Vec::new(),
        }
    }

    pub fn with_span(mut self, start: usize, end: usize) -> Self {
        self.span = Span::new(start, end);
        self
    }

    pub fn with_comment(mut self, text: impl Into<String>) -> Self {
        self.comments.push(Comment {
            text: text.into(),
            span: self.span,
        });
        self
    }

    pub fn has_comments(&self) -> bool {
        !self.comments.is_empty()
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Ident(name.into()))
    }

    pub fn constant(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Const(name.into()))
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Symbol(name.into()))
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Literal(text.into()))
    }

    /// `name` as a receiverless call; capitalized names target a constant.
    pub fn plain_call(name: &str) -> Self {
        let target = if name.starts_with(|c: char| c.is_ascii_uppercase()) {
            Self::constant(name)
        } else {
            Self::ident(name)
        };
        Self::new(NodeKind::PlainCall(Box::new(target)))
    }

    pub fn var_call(name: &str) -> Self {
        Self::new(NodeKind::VariableCall(Box::new(Self::ident(name))))
    }

    pub fn call(receiver: SyntaxNode, operator: CallOperator, name: &str) -> Self {
        Self::new(NodeKind::Call {
            receiver: Box::new(receiver),
            operator,
            message: Message::Name(Box::new(Self::ident(name))),
        })
    }

    /// `receiver.()`, before its argument list is attached.
    pub fn implicit_call(receiver: SyntaxNode, operator: CallOperator) -> Self {
        Self::new(NodeKind::Call {
            receiver: Box::new(receiver),
            operator,
            message: Message::Implicit,
        })
    }

    pub fn arg_call(method: SyntaxNode, args: SyntaxNode) -> Self {
        Self::new(NodeKind::ArgCall {
            method: Box::new(method),
            args: Box::new(args),
        })
    }

    /// A parenthesised argument list.
    pub fn arg_list(args: Vec<SyntaxNode>) -> Self {
        Self::new(NodeKind::ArgList(ArgList { parens: true, args }))
    }

    /// An argument list written without parentheses.
    pub fn bare_args(args: Vec<SyntaxNode>) -> Self {
        Self::new(NodeKind::ArgList(ArgList {
            parens: false,
            args,
        }))
    }

    pub fn block_call(call: SyntaxNode, block: SyntaxNode) -> Self {
        Self::new(NodeKind::BlockCall {
            call: Box::new(call),
            block: Box::new(block),
        })
    }

    pub fn brace_block(params: &[&str], body: Vec<SyntaxNode>) -> Self {
        Self::block(BlockDelimiter::Braces, params, body)
    }

    pub fn do_block(params: &[&str], body: Vec<SyntaxNode>) -> Self {
        Self::block(BlockDelimiter::DoEnd, params, body)
    }

    fn block(delimiter: BlockDelimiter, params: &[&str], body: Vec<SyntaxNode>) -> Self {
        Self::new(NodeKind::BlockBody(BlockBody {
            delimiter,
            params: params.iter().map(|&param| param.to_owned()).collect(),
            body,
        }))
    }

    pub fn block_arg(value: SyntaxNode) -> Self {
        Self::new(NodeKind::BlockArg(Box::new(value)))
    }

    pub fn array(items: Vec<SyntaxNode>) -> Self {
        Self::new(NodeKind::Array(items))
    }

    pub fn heredoc(descriptor: HeredocDescriptor) -> Self {
        Self::new(NodeKind::Heredoc(descriptor))
    }

    pub fn statements(items: Vec<SyntaxNode>) -> Self {
        Self::new(NodeKind::Statements(items))
    }
}

