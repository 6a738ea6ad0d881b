mod serialize;

pub use serialize::ParseRow;

use log::warn;

use anvaya_kosha::{Kosha, KoshaError};
use anvaya_sandhi::{SandhiError, Scorer};
use anvaya_types::{DhatuKosha, Morph, SurfaceForm};
use anvaya_vakya::{ParseOptions, VakyaGraph};

/// Error type for sentence analysis.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    /// The lexical oracle found no splitting of the sentence at all.
    #[error("no split analysis for the sentence")]
    NoSplitAnalysis,

    #[error("lexical oracle failed: {0}")]
    Kosha(#[from] KoshaError),

    #[error("split lattice failed: {0}")]
    Sandhi(#[from] SandhiError),
}

/// Runtime options for `analyze`.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzeOptions {
    /// Best split paths to take from the lattice.
    pub max_paths: usize,
    /// Parses to keep per split path.
    pub max_parses: usize,
    /// Enumerator knobs.
    pub parse: ParseOptions,
    /// Render output strings in Devanagari instead of SLP1.
    pub devanagari: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        AnalyzeOptions {
            max_paths: 10,
            max_parses: 10,
            parse: ParseOptions::default(),
            devanagari: false,
        }
    }
}

/// One ranked dependency parse of one split path.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceParse {
    /// The split path this parse belongs to.
    pub split: Vec<String>,
    /// One row per sentence position; roots carry empty label/governor.
    pub rows: Vec<ParseRow>,
    pub cost: f64,
    pub rank: usize,
}

/// The full result of analyzing one sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub sentence: String,
    /// Every split path taken from the lattice, best first.
    pub splits: Vec<Vec<String>>,
    pub parses: Vec<SentenceParse>,
}

/// The sentence analyzer: split lattice via the kosha, ranked split
/// paths via the scorer, then a readings graph and ranked dependency
/// parses per path. Split paths are isolated from each other: one path
/// without taggings does not poison the rest.
pub struct Vishleshak<'a> {
    kosha: &'a dyn Kosha,
    dhatus: &'a dyn DhatuKosha,
    scorer: &'a dyn Scorer,
}

impl<'a> Vishleshak<'a> {
    pub fn new(
        kosha: &'a dyn Kosha,
        dhatus: &'a dyn DhatuKosha,
        scorer: &'a dyn Scorer,
    ) -> Vishleshak<'a> {
        Vishleshak {
            kosha,
            dhatus,
            scorer,
        }
    }

    pub fn analyze(
        &self,
        sentence: &str,
        options: &AnalyzeOptions,
    ) -> Result<Analysis, AnalyzeError> {
        let Some(mut lattice) = self.kosha.candidate_splits(sentence)? else {
            return Err(AnalyzeError::NoSplitAnalysis);
        };
        let paths = lattice.find_all_paths(options.max_paths, true, Some(self.scorer))?;
        if paths.is_empty() {
            warn!("split lattice has no start-to-end path");
        }

        let splits: Vec<Vec<String>> = paths
            .iter()
            .map(|path| {
                path.iter()
                    .map(|&id| lattice.form(id).text().to_string())
                    .collect()
            })
            .collect();

        let mut parses = Vec::new();
        let mut rank = 0;
        for (path, split) in paths.iter().zip(&splits) {
            let mut words: Vec<(SurfaceForm, Vec<Morph>)> = Vec::with_capacity(path.len());
            let mut untagged = None;
            for &id in path {
                let form = lattice.form(id).clone();
                let tags = self.kosha.candidate_tags(form.text())?;
                if tags.is_empty() {
                    untagged = Some(form);
                    break;
                }
                words.push((form, tags));
            }
            if let Some(form) = untagged {
                warn!("no tag analysis for '{form}', skipping split {split:?}");
                continue;
            }

            let graph = VakyaGraph::build(&words, self.dhatus);
            let ranked = graph.parses(&options.parse);
            if ranked.is_empty() {
                warn!("split {split:?} produced no valid parse");
            }
            for (parse, cost) in ranked.into_iter().take(options.max_parses) {
                let rows = serialize::parse_rows(&graph, &parse, options.devanagari);
                parses.push(SentenceParse {
                    split: split.clone(),
                    rows,
                    cost,
                    rank,
                });
                rank += 1;
            }
        }

        if parses.is_empty() {
            warn!("every candidate parse was rejected; returning an empty set");
        }
        Ok(Analysis {
            sentence: sentence.to_string(),
            splits,
            parses,
        })
    }
}
