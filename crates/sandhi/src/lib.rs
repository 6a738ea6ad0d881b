mod graph;
mod join;
mod paths;

pub use graph::{NodeId, NodeRef, SandhiGraph};
pub use join::join;

use anvaya_types::SurfaceForm;

/// Error type for sandhi operations.
#[derive(Debug, thiserror::Error)]
pub enum SandhiError {
    #[error("empty input")]
    EmptyInput,

    #[error("scorer returned {got} scores for {expected} splits")]
    ScoreLengthMismatch { expected: usize, got: usize },

    #[error("lexical scorer failed: {0}")]
    Scorer(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A lexical model scoring candidate word sequences.
///
/// Scores are additive log-likelihoods, higher is better, comparable
/// across splits of the same sentence. The lattice negates them so that
/// shortest-path search finds the best split.
pub trait Scorer {
    fn score_splits(&self, batch: &[Vec<SurfaceForm>]) -> Result<Vec<f64>, SandhiError>;
}
