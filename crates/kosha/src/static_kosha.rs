use std::sync::LazyLock;

use fst::Set;
use log::debug;
use rustc_hash::FxHashMap;

use anvaya_sandhi::{NodeId, SandhiGraph, join};
use anvaya_types::{DhatuKosha, Morph, SurfaceForm, TagBits};

use crate::builder::build_fst_set;
use crate::{Kosha, KoshaError};

/// Static word-form table (surface \t base \t tags \t count).
static PADA_DATA: &str = include_str!("../../../data/padakosha.tsv");

/// Static dhātu transitivity table (dhatu \t sakarmaka).
static DHATU_DATA: &str = include_str!("../../../data/dhatukosha.tsv");

/// Global singleton lexicon, built once on first access.
static KOSHA: LazyLock<StaticKosha> =
    LazyLock::new(|| StaticKosha::from_static_data(PADA_DATA, DHATU_DATA));

pub fn kosha() -> &'static StaticKosha {
    &KOSHA
}

/// One reading of one surface form.
#[derive(Debug, Clone)]
struct PadaEntry {
    surface: &'static str,
    base: &'static str,
    tags: TagBits,
    count: u64,
}

/// FST-backed lexicon over the embedded word-form data.
///
/// An `fst::Set` answers containment during split-candidate search; a
/// surface-sorted `Vec` answers reading lookups by binary search. Like any
/// morphological oracle in this tradition the table overgenerates
/// readings; the pipeline ranks through the ambiguity.
pub struct StaticKosha {
    fst: Set<Vec<u8>>,
    entries: Vec<PadaEntry>,
    dhatus: FxHashMap<&'static str, bool>,
}

impl StaticKosha {
    fn from_static_data(pada_data: &'static str, dhatu_data: &'static str) -> StaticKosha {
        let mut entries: Vec<PadaEntry> = pada_data
            .lines()
            .filter(|l| !l.is_empty())
            .map(|line| {
                let mut parts = line.split('\t');
                let surface = parts.next().expect("padakosha.tsv: missing surface");
                let base = parts.next().expect("padakosha.tsv: missing base");
                let tags = parts
                    .next()
                    .expect("padakosha.tsv: missing tags")
                    .split(',')
                    .map(|t| {
                        t.parse()
                            .unwrap_or_else(|_| panic!("padakosha.tsv: unknown tag '{t}'"))
                    })
                    .collect();
                let count = parts
                    .next()
                    .and_then(|c| c.parse().ok())
                    .expect("padakosha.tsv: missing count");
                PadaEntry {
                    surface,
                    base,
                    tags,
                    count,
                }
            })
            .collect();
        entries.sort_by(|a, b| a.surface.cmp(b.surface));

        let surfaces: Vec<&str> = entries.iter().map(|e| e.surface).collect();
        let fst = Set::new(build_fst_set(&surfaces)).expect("embedded fst data is valid");

        let dhatus = dhatu_data
            .lines()
            .filter(|l| !l.is_empty())
            .map(|line| {
                let mut parts = line.split('\t');
                let dhatu = parts.next().expect("dhatukosha.tsv: missing dhatu");
                let sakarmaka = parts.next() == Some("1");
                (dhatu, sakarmaka)
            })
            .collect();

        StaticKosha {
            fst,
            entries,
            dhatus,
        }
    }

    /// Does the lexicon attest this exact surface form?
    pub fn contains(&self, surface: &str) -> bool {
        self.fst.contains(surface)
    }

    fn entries_for(&self, surface: &str) -> &[PadaEntry] {
        let lo = self.entries.partition_point(|e| e.surface < surface);
        let hi = self.entries.partition_point(|e| e.surface <= surface);
        &self.entries[lo..hi]
    }

    /// Total attestation count of a surface form, for the unigram model.
    pub fn frequency(&self, surface: &str) -> Option<u64> {
        let entries = self.entries_for(surface);
        if entries.is_empty() {
            None
        } else {
            Some(entries.iter().map(|e| e.count).sum())
        }
    }

    /// Sum of all counts in the table.
    pub fn total_count(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Candidate word sequences for one whitespace-delimited chunk: the
    /// chunk itself (modulo terminal-sound normalization) and every
    /// two-way split whose parts are attested and whose recombination
    /// regenerates the chunk.
    fn chunk_alternatives(&self, chunk: &str) -> Result<Vec<Vec<String>>, KoshaError> {
        let mut alts = Vec::new();

        for v in surface_variants(chunk) {
            if self.contains(&v) {
                alts.push(vec![v]);
            }
        }

        for (i, _) in chunk.char_indices().skip(1) {
            let (raw_l, raw_r) = chunk.split_at(i);
            for (lc, rc) in reconstructions(raw_l, raw_r) {
                if self.contains(&lc)
                    && self.contains(&rc)
                    && join(&lc, &rc)?.iter().any(|j| j == chunk)
                {
                    alts.push(vec![lc, rc]);
                }
            }
        }

        alts.sort();
        alts.dedup();
        debug!("chunk '{chunk}': {} alternatives", alts.len());
        Ok(alts)
    }
}

impl Kosha for StaticKosha {
    fn candidate_splits(&self, sentence: &str) -> Result<Option<SandhiGraph>, KoshaError> {
        let chunks: Vec<&str> = sentence.split_whitespace().collect();
        if chunks.is_empty() {
            return Ok(None);
        }

        let mut graph = SandhiGraph::new();
        let mut prev_tails: Vec<NodeId> = Vec::new();
        for (ci, chunk) in chunks.iter().enumerate() {
            let alts = self.chunk_alternatives(chunk)?;
            if alts.is_empty() {
                debug!("chunk '{chunk}' has no analysis, sentence rejected");
                return Ok(None);
            }
            let mut tails = Vec::new();
            for alt in &alts {
                let ids: Vec<NodeId> = alt
                    .iter()
                    .map(|w| graph.add_node(SurfaceForm::new(w.as_str())))
                    .collect();
                for pair in ids.windows(2) {
                    graph.append_to_node(pair[0], &[pair[1]]);
                }
                if ci == 0 {
                    graph.add_roots(&[ids[0]]);
                } else {
                    for &t in &prev_tails {
                        graph.append_to_node(t, &[ids[0]]);
                    }
                }
                tails.push(*ids.last().expect("alternatives are non-empty"));
            }
            prev_tails = tails;
        }
        for &t in &prev_tails {
            graph.add_end_edge(t);
        }
        graph.lock_start();
        Ok(Some(graph))
    }

    fn candidate_tags(&self, surface: &str) -> Result<Vec<Morph>, KoshaError> {
        Ok(self
            .entries_for(surface)
            .iter()
            .map(|e| Morph::new(e.base, e.tags))
            .collect())
    }
}

impl DhatuKosha for StaticKosha {
    fn is_sakarmaka(&self, dhatu: &str) -> bool {
        self.dhatus.get(dhatu).copied().unwrap_or(false)
    }
}

/// Normalized spellings of a chunk as it might appear pre-sandhi: the
/// chunk itself, terminal s/r restored to visarga, terminal o restored to
/// aH, terminal anusvāra restored to m.
fn surface_variants(chunk: &str) -> Vec<String> {
    let mut variants = vec![chunk.to_string()];
    if let Some(stem) = chunk.strip_suffix('s').or_else(|| chunk.strip_suffix('r')) {
        variants.push(format!("{stem}H"));
    }
    if let Some(stem) = chunk.strip_suffix('o') {
        variants.push(format!("{stem}aH"));
    }
    if let Some(stem) = chunk.strip_suffix('M') {
        variants.push(format!("{stem}m"));
    }
    variants
}

/// Pre-sandhi reconstructions of a raw split point: the parts as written,
/// the left part with visarga restored, and the boundary vowel un-merged
/// into its possible sources.
fn reconstructions(raw_l: &str, raw_r: &str) -> Vec<(String, String)> {
    let mut out = vec![(raw_l.to_string(), raw_r.to_string())];
    out.push((format!("{raw_l}H"), raw_r.to_string()));

    if let Some(v1) = raw_l.chars().last() {
        let stem = &raw_l[..raw_l.len() - v1.len_utf8()];
        let unmerged: &[(&str, &str)] = match v1 {
            'A' => &[("a", "a"), ("a", "A"), ("A", "a"), ("A", "A")],
            'e' => &[("a", "i"), ("a", "I"), ("A", "i"), ("A", "I")],
            'o' => &[("a", "u"), ("a", "U"), ("A", "u"), ("A", "U")],
            'E' => &[("a", "e"), ("a", "E"), ("A", "e"), ("A", "E")],
            'O' => &[("a", "o"), ("a", "O"), ("A", "o"), ("A", "O")],
            _ => &[],
        };
        for &(a, b) in unmerged {
            out.push((format!("{stem}{a}"), format!("{b}{raw_r}")));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_and_frequency() {
        let k = kosha();
        assert!(k.contains("rAmaH"));
        assert!(!k.contains("rAmo"));
        assert_eq!(k.frequency("kim"), Some(180));
        assert_eq!(k.frequency("xyz"), None);
    }

    #[test]
    fn readings_are_grouped_by_surface() {
        let k = kosha();
        let tags = k.candidate_tags("akurvata").unwrap();
        assert_eq!(tags.len(), 2);
        assert!(tags.iter().all(|m| m.base == "kf"));
    }

    #[test]
    fn unknown_surface_has_no_readings() {
        let k = kosha();
        assert!(k.candidate_tags("Biima").unwrap().is_empty());
    }

    #[test]
    fn terminal_sound_normalization() {
        assert!(surface_variants("rAmas").contains(&"rAmaH".to_string()));
        assert!(surface_variants("rAmo").contains(&"rAmaH".to_string()));
        assert!(surface_variants("ahaM").contains(&"aham".to_string()));
    }

    #[test]
    fn sakarmaka_lookup() {
        let k = kosha();
        assert!(k.is_sakarmaka("tf"));
        assert!(!k.is_sakarmaka("as"));
        // Unknown dhātus are conservatively intransitive.
        assert!(!k.is_sakarmaka("cur"));
    }
}
