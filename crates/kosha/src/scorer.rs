use anvaya_sandhi::{SandhiError, Scorer};
use anvaya_types::SurfaceForm;

use crate::static_kosha::{StaticKosha, kosha};

/// Log-likelihood floor for forms absent from the lexicon.
const OOV_FLOOR: f64 = -10.0;

/// Additive unigram log-likelihood over lexicon attestation counts.
pub struct UnigramScorer {
    kosha: &'static StaticKosha,
    total: f64,
}

impl UnigramScorer {
    pub fn new() -> UnigramScorer {
        Self::from_kosha(kosha())
    }

    pub fn from_kosha(kosha: &'static StaticKosha) -> UnigramScorer {
        UnigramScorer {
            kosha,
            total: kosha.total_count() as f64,
        }
    }

    fn score_form(&self, form: &SurfaceForm) -> f64 {
        match self.kosha.frequency(form.text()) {
            Some(count) => (count as f64 / self.total).log10(),
            None => OOV_FLOOR,
        }
    }
}

impl Default for UnigramScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for UnigramScorer {
    fn score_splits(&self, batch: &[Vec<SurfaceForm>]) -> Result<Vec<f64>, SandhiError> {
        Ok(batch
            .iter()
            .map(|seq| seq.iter().map(|f| self.score_form(f)).sum())
            .collect())
    }
}
