use crate::{BlockBody, CallOperator, Message, NodeKind, SyntaxNode};

/// Rewrites a block into an equivalent argument, such as `{ |user| user.name }` into `&:name`.
pub trait ProcRewriter {
    /// Returns the argument replacing `block`, or `None` when the block must stay as written.
    fn try_rewrite(&self, block: &SyntaxNode) -> Option<SyntaxNode>;
}

/// Turns a block that calls one method on its only parameter into a symbol proc.
///
/// ```
/// use prettyrb::{CallOperator, ProcRewriter, SymbolProc, SyntaxNode};
///
/// let block = SyntaxNode::brace_block(
///     &["user"],
///     vec![SyntaxNode::call(SyntaxNode::var_call("user"), CallOperator::Dot, "name")],
/// );
/// let proc = SymbolProc.try_rewrite(&block);
/// assert_eq!(proc, Some(SyntaxNode::block_arg(SyntaxNode::symbol("name"))));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SymbolProc;

impl ProcRewriter for SymbolProc {
    fn try_rewrite(&self, block: &SyntaxNode) -> Option<SyntaxNode> {
        let NodeKind::BlockBody(BlockBody { params, body, .. }) = &block.kind else {
            return None;
        };
        let ([param], [statement]) = (params.as_slice(), body.as_slice()) else {
            return None;
        };
        if block.has_comments() || statement.has_comments() {
            return None;
        }

        let NodeKind::Call {
            receiver,
            operator: CallOperator::Dot,
            message: Message::Name(message),
        } = &statement.kind
        else {
            return None;
        };
        if receiver.has_comments() || local_name(receiver) != Some(param.as_str()) {
            return None;
        }

        match &message.kind {
            NodeKind::Ident(name) if !message.has_comments() => Some(SyntaxNode::block_arg(
                SyntaxNode::symbol(name.as_str()).with_span(block.span.start, block.span.end),
            )),
            _ => None,
        }
    }
}

fn local_name(node: &SyntaxNode) -> Option<&str> {
    match &node.kind {
        NodeKind::Ident(name) => Some(name),
        NodeKind::VariableCall(inner) => local_name(inner),
        _ => None,
    }
}
