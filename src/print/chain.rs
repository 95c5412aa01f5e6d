use tracing::trace;

use crate::{Arena, DocAllocator, RefDoc};

/// Chains at least this deep get a one-call-per-line alternative.
pub const CHAIN_BREAK_DEPTH: usize = 3;

/// What a link of a call chain hands to the link above it.
#[derive(Clone, Debug)]
pub struct ChainState<'a> {
    /// Number of links below the node receiving this state.
    pub depth: usize,
    /// The head of the chain followed by the right-hand side of every link, in source order.
    pub candidates: Vec<RefDoc<'a>>,
}

/// The result of printing one node.
#[derive(Clone, Debug)]
pub struct Printed<'a> {
    pub doc: RefDoc<'a>,
    /// Set when the node is a link whose parent continues the chain.
    pub chain: Option<ChainState<'a>>,
}

impl<'a> Printed<'a> {
    pub(crate) fn standalone(doc: RefDoc<'a>) -> Self {
        Printed { doc, chain: None }
    }
}

/// Whether the node being printed is the first child of a chainable node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Parent {
    Chain,
    Other,
}

/// One link of a call chain: the receiver side, the right-hand side contributed by this node,
/// and the state passed up by the receiver if it is itself a link.
pub(crate) struct Link<'a> {
    pub receiver: RefDoc<'a>,
    pub right: RefDoc<'a>,
    pub inherited: Option<ChainState<'a>>,
}

impl<'a> Link<'a> {
    fn depth(&self) -> usize {
        self.inherited.as_ref().map_or(0, |chain| chain.depth)
    }

    fn extend(self) -> ChainState<'a> {
        let depth = self.depth() + 1;
        let mut candidates = match self.inherited {
            Some(chain) => chain.candidates,
            None => vec![self.receiver],
        };
        candidates.push(self.right);
        ChainState { depth, candidates }
    }

    /// Finishes the link. Inside a chain the state moves up to the parent and `standalone` is
    /// used as the parent's receiver. At the top of a deep enough chain the result picks between
    /// the one-call-per-line layout and `flat`.
    pub fn fold(
        self,
        arena: &'a Arena<'a>,
        parent: Parent,
        flat: RefDoc<'a>,
        standalone: RefDoc<'a>,
        indent: isize,
    ) -> Printed<'a> {
        match parent {
            Parent::Chain => Printed {
                doc: standalone,
                chain: Some(self.extend()),
            },
            Parent::Other if self.depth() >= CHAIN_BREAK_DEPTH => {
                let chain = self.extend();
                trace!(links = chain.candidates.len(), "offering broken call chain");
                let broken = arena.concat(chain.candidates).nest(indent).group();
                Printed::standalone(broken.flat_alt(flat).into_doc())
            }
            Parent::Other => Printed::standalone(standalone),
        }
    }
}
