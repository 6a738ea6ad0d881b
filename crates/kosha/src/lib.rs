mod builder;
mod scorer;
mod static_kosha;

pub use scorer::UnigramScorer;
pub use static_kosha::{StaticKosha, kosha};

use anvaya_sandhi::{SandhiError, SandhiGraph};
use anvaya_types::Morph;
pub use anvaya_types::DhatuKosha;

/// Error type for kosha operations.
#[derive(Debug, thiserror::Error)]
pub enum KoshaError {
    #[error("sandhi combination failed: {0}")]
    Sandhi(#[from] SandhiError),
}

/// The morphological oracle consumed by the analysis pipeline.
///
/// Both operations may legitimately come up empty: `candidate_splits`
/// returns `None` when the sentence has no analysis at all, and
/// `candidate_tags` may return an empty set for an unknown form. The core
/// treats both as data conditions, not errors.
pub trait Kosha {
    /// Build the split lattice for a sentence, or `None` if no chunk has
    /// any analysis.
    fn candidate_splits(&self, sentence: &str) -> Result<Option<SandhiGraph>, KoshaError>;

    /// All candidate readings of a surface form.
    fn candidate_tags(&self, surface: &str) -> Result<Vec<Morph>, KoshaError>;
}
