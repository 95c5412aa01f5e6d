use tracing::trace;

use super::{
    chain::{Link, Parent},
    Printed, Printer,
};
use crate::{
    normalize_newlines, BlockDelimiter, CallOperator, DocAllocator, FormatError, Message,
    NodeKind, RefDoc, SyntaxNode,
};

impl<'a> Printer<'a> {
    /// `receiver.message`
    pub(super) fn print_call(
        &self,
        receiver: &SyntaxNode,
        operator: CallOperator,
        message: &Message,
        parent: Parent,
    ) -> Result<Printed<'a>, FormatError> {
        let arena = self.arena;
        let indent = self.options.indent();
        let operator = arena.text(operator.as_str());
        let message = match message {
            Message::Name(name) => self.doc(name)?,
            Message::Implicit => arena.nil(),
        };

        // `}.call` and `end.call` stay flush with the closing token
        if receiver.kind.is_no_indent() {
            let doc = self.doc(receiver)?.append(operator).append(message);
            return Ok(Printed::standalone(doc.into_doc()));
        }

        let receiver_printed = self.print_node(receiver, Parent::Chain)?;
        let line = if receiver.has_comments() {
            arena.hardline()
        } else {
            arena.line_()
        };
        let right = line.append(operator).append(message).into_doc();

        let flat = self
            .build(receiver_printed.doc)
            .append(self.build(right).group())
            .into_doc();
        let standalone = self
            .build(receiver_printed.doc)
            .append(self.build(right).nest(indent).group())
            .group()
            .into_doc();

        let link = Link {
            receiver: receiver_printed.doc,
            right,
            inherited: receiver_printed.chain,
        };
        Ok(link.fold(arena, parent, flat, standalone, indent))
    }

    /// A method and its argument list.
    pub(super) fn print_arg_call(
        &self,
        method: &SyntaxNode,
        args: &SyntaxNode,
        parent: Parent,
    ) -> Result<Printed<'a>, FormatError> {
        let NodeKind::ArgList(list) = &args.kind else {
            return Err(FormatError::Structure {
                kind: "argument call",
                expected: "an argument list",
                span: args.span,
            });
        };
        let arena = self.arena;
        let method_printed = self.print_node(method, Parent::Chain)?;
        let method_doc = self.build(method_printed.doc);

        if list.args.is_empty() {
            let doc = if needs_empty_parens(method) {
                method_doc.append("()")
            } else {
                method_doc
            };
            return Ok(Printed::standalone(doc.into_doc()));
        }

        // Only a folded block argument produces a bare list with arguments
        if !list.parens {
            let args = self.print_all(&list.args)?;
            let doc = method_doc
                .append("(")
                .append(arena.intersperse(args, ", "))
                .append(")");
            return Ok(Printed::standalone(doc.into_doc()));
        }

        let args_doc = self.print_node(args, Parent::Other)?.doc;
        let doc = method_doc.append(args_doc).into_doc();
        let link = Link {
            receiver: method_printed.doc,
            right: args_doc,
            inherited: method_printed.chain,
        };
        Ok(link.fold(arena, parent, doc, doc, self.options.indent()))
    }

    /// A call and the block attached to it.
    pub(super) fn print_block_call(
        &self,
        node: &SyntaxNode,
        call: &SyntaxNode,
        block: &SyntaxNode,
        parent: Parent,
    ) -> Result<Printed<'a>, FormatError> {
        if !matches!(block.kind, NodeKind::BlockBody(_)) {
            return Err(FormatError::Structure {
                kind: "block call",
                expected: "a block",
                span: block.span,
            });
        }

        if is_signature_annotation(call, block) {
            return self.print_as_written(node).map(Printed::standalone);
        }

        if self.options.to_proc {
            if let Some(proc) = self.rewriter.try_rewrite(block) {
                return self.print_with_block_arg(call, proc, parent);
            }
        }

        let call_printed = self.print_node(call, Parent::Chain)?;
        let block_doc = self.print_node(block, Parent::Other)?.doc;
        let doc = self.build(call_printed.doc).append(block_doc).into_doc();
        let link = Link {
            receiver: call_printed.doc,
            right: block_doc,
            inherited: call_printed.chain,
        };
        Ok(link.fold(self.arena, parent, doc, doc, self.options.indent()))
    }

    /// Prints `call` with the argument its block was rewritten into.
    fn print_with_block_arg(
        &self,
        call: &SyntaxNode,
        proc: SyntaxNode,
        parent: Parent,
    ) -> Result<Printed<'a>, FormatError> {
        if matches!(call.kind, NodeKind::Call { .. }) {
            let arena = self.arena;
            let call_doc = self.print_node(call, Parent::Chain)?.doc;
            let doc = self
                .build(call_doc)
                .append("(")
                .append(
                    arena
                        .line_()
                        .append(self.doc(&proc)?)
                        .nest(self.options.indent()),
                )
                .append(arena.line_())
                .append(")")
                .group();
            return Ok(Printed::standalone(doc.into_doc()));
        }

        let folded = fold_block_arg(call, proc)?;
        self.print_node(&folded, parent)
    }

    fn print_as_written(&self, node: &SyntaxNode) -> Result<RefDoc<'a>, FormatError> {
        let text = self
            .source
            .get(node.span.start..node.span.end)
            .ok_or(FormatError::Structure {
                kind: node.kind.name(),
                expected: "a span inside the source",
                span: node.span,
            })?;
        trace!(span = %node.span, "printing signature annotation as written");
        let doc = self.arena.text(text).into_doc();
        Ok(normalize_newlines(self.arena, &doc))
    }
}

/// `Foo()` and `callable.()` need their parentheses to stay calls.
fn needs_empty_parens(method: &SyntaxNode) -> bool {
    match &method.kind {
        NodeKind::PlainCall(target) => matches!(target.kind, NodeKind::Const(_)),
        NodeKind::Call { message, .. } => matches!(message, Message::Implicit),
        _ => false,
    }
}

/// `sig { ... }`, whose block is a type signature rather than code.
fn is_signature_annotation(call: &SyntaxNode, block: &SyntaxNode) -> bool {
    let NodeKind::ArgCall { method, args } = &call.kind else {
        return false;
    };
    let NodeKind::PlainCall(target) = &method.kind else {
        return false;
    };
    matches!(&target.kind, NodeKind::Ident(name) if name == "sig")
        && matches!(&args.kind, NodeKind::ArgList(list) if !list.parens && list.args.is_empty())
        && matches!(
            &block.kind,
            NodeKind::BlockBody(body) if body.delimiter == BlockDelimiter::Braces
        )
}

/// Moves `proc` into the argument list of `call`, creating a bare list if it has none.
fn fold_block_arg(call: &SyntaxNode, proc: SyntaxNode) -> Result<SyntaxNode, FormatError> {
    let kind = match &call.kind {
        NodeKind::ArgCall { method, args } => {
            let NodeKind::ArgList(list) = &args.kind else {
                return Err(FormatError::Structure {
                    kind: "argument call",
                    expected: "an argument list",
                    span: args.span,
                });
            };
            let mut list = list.clone();
            list.args.push(proc);
            NodeKind::ArgCall {
                method: method.clone(),
                args: Box::new(SyntaxNode {
                    kind: NodeKind::ArgList(list),
                    span: args.span,
                    comments: args.comments.clone(),
                }),
            }
        }
        _ => {
            return Ok(SyntaxNode::arg_call(call.clone(), SyntaxNode::bare_args(vec![proc]))
                .with_span(call.span.start, call.span.end))
        }
    };
    Ok(SyntaxNode {
        kind,
        span: call.span,
        comments: call.comments.clone(),
    })
}
