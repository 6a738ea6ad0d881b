mod conjunction;
mod disjoint_set;
mod enumerate;
mod graph;
mod karaka;
mod nominal;
mod node;
mod parse;
mod validate;

pub use disjoint_set::DisjointSet;
pub use graph::{NodeId, VakyaGraph};
pub use node::{
    VakyaNode, check_sambodhya, match_linga_vacana, match_linga_vacana_vibhakti,
    match_purusha_vacana,
};
pub use parse::PartialParse;
pub use validate::{Parse, ParseEdge, check_parse, non_projective, parse_cost};

/// Knobs for the divide-and-conquer parse enumerator.
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Chunk threshold below which the enumerator sweeps left to right.
    pub max_parse_dc: usize,
    /// Merge halves with the unchecked fast path instead of edge-by-edge
    /// safe extension.
    pub fast_merge: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_parse_dc: 4,
            fast_merge: true,
        }
    }
}
