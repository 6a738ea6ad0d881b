use log::debug;
use rustc_hash::FxHashMap;

use anvaya_types::SurfaceForm;

use crate::paths;
use crate::{SandhiError, Scorer};

pub type NodeId = u32;

/// A vertex of the split lattice: one of the two sentinels, or an interior
/// word-form node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeRef {
    Start,
    Form(NodeId),
    End,
}

/// A DAG of candidate word splits of one sentence.
///
/// Interior nodes are surface forms; every lexically plausible splitting
/// is a `Start → … → End` path. The graph is built by an oracle, locked,
/// scored against a lexical model (edge weight = −log-likelihood), and
/// then queried for its best paths.
pub struct SandhiGraph {
    forms: Vec<SurfaceForm>,
    succ: FxHashMap<NodeRef, Vec<NodeRef>>,
    weights: FxHashMap<(NodeRef, NodeRef), f64>,
    roots: Vec<NodeId>,
    locked: bool,
}

impl Default for SandhiGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SandhiGraph {
    pub fn new() -> SandhiGraph {
        SandhiGraph {
            forms: Vec::new(),
            succ: FxHashMap::default(),
            weights: FxHashMap::default(),
            roots: Vec::new(),
            locked: false,
        }
    }

    /// Add an interior node, returning its id.
    ///
    /// Panics if the graph is already locked: structural mutation after
    /// `lock_start` is a programming error.
    pub fn add_node(&mut self, form: SurfaceForm) -> NodeId {
        assert!(!self.locked, "add_node on a locked graph");
        let id = self.forms.len() as NodeId;
        self.forms.push(form);
        id
    }

    /// The surface form of an interior node.
    pub fn form(&self, id: NodeId) -> &SurfaceForm {
        &self.forms[id as usize]
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        (id as usize) < self.forms.len()
    }

    pub fn node_count(&self) -> usize {
        self.forms.len()
    }

    pub fn edge_count(&self) -> usize {
        self.succ.values().map(Vec::len).sum()
    }

    /// Iterate over all interior nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SurfaceForm)> {
        self.forms
            .iter()
            .enumerate()
            .map(|(i, f)| (i as NodeId, f))
    }

    /// Create edges from `t` to each of `targets`.
    pub fn append_to_node(&mut self, t: NodeId, targets: &[NodeId]) {
        assert!(!self.locked, "append_to_node on a locked graph");
        assert!(self.has_node(t), "append_to_node: unknown source node");
        let out = self.succ.entry(NodeRef::Form(t)).or_default();
        for &n in targets {
            out.push(NodeRef::Form(n));
        }
    }

    /// Mark nodes as reachable from the sentence start.
    pub fn add_roots(&mut self, roots: &[NodeId]) {
        assert!(!self.locked, "add_roots on a locked graph");
        self.roots.extend_from_slice(roots);
    }

    /// Mark `n` as a terminal form.
    pub fn add_end_edge(&mut self, n: NodeId) {
        assert!(self.has_node(n), "add_end_edge: unknown node");
        self.succ.entry(NodeRef::Form(n)).or_default().push(NodeRef::End);
    }

    /// Make the graph ready for search: create the start sentinel, connect
    /// it to all current roots, and clear the root list.
    pub fn lock_start(&mut self) {
        let entry = self.succ.entry(NodeRef::Start).or_default();
        entry.extend(self.roots.drain(..).map(NodeRef::Form));
        self.locked = true;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub(crate) fn successors(&self, n: NodeRef) -> &[NodeRef] {
        self.succ.get(&n).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Edge weight; unscored edges count as unit hops.
    pub(crate) fn weight(&self, u: NodeRef, v: NodeRef) -> f64 {
        self.weights.get(&(u, v)).copied().unwrap_or(1.0)
    }

    /// Assign each edge a weight from the lexical model.
    ///
    /// An edge out of Start is scored as `[target]`, into End as
    /// `[source]`, and an interior edge as `[source, target]`. The weight
    /// is the negated log-likelihood, so smaller is better.
    pub fn score_graph(&mut self, scorer: &dyn Scorer) -> Result<(), SandhiError> {
        let mut edge_list = Vec::new();
        let mut batch = Vec::new();
        for (&u, outs) in &self.succ {
            for &v in outs {
                edge_list.push((u, v));
                batch.push(match (u, v) {
                    (NodeRef::Start, NodeRef::Form(t)) => vec![self.form(t).clone()],
                    (NodeRef::Form(s), NodeRef::End) => vec![self.form(s).clone()],
                    (NodeRef::Form(s), NodeRef::Form(t)) => {
                        vec![self.form(s).clone(), self.form(t).clone()]
                    }
                    _ => vec![],
                });
            }
        }
        let scores = scorer.score_splits(&batch)?;
        if scores.len() != batch.len() {
            return Err(SandhiError::ScoreLengthMismatch {
                expected: batch.len(),
                got: scores.len(),
            });
        }
        for ((u, v), score) in edge_list.into_iter().zip(scores) {
            // Score is log-likelihood, higher is better; path search wants
            // smaller weights, so negate.
            self.weights.insert((u, v), -score);
            debug!("edge {u:?} -> {v:?} weight {:.4}", -score);
        }
        Ok(())
    }

    /// Find up to `max_paths` interior-node paths from Start to End.
    ///
    /// With a scorer and `max_paths ≤ 1000`, paths come from K-shortest
    /// search on edge weights and are then re-scored as full sequences
    /// (the full-sequence model sees more context than per-edge scores)
    /// and returned best first. Above 1000, all simple paths are
    /// enumerated without scoring, sorted by length when `sort` is set.
    /// Returns the empty list when no path exists.
    pub fn find_all_paths(
        &mut self,
        max_paths: usize,
        sort: bool,
        scorer: Option<&dyn Scorer>,
    ) -> Result<Vec<Vec<NodeId>>, SandhiError> {
        if !self.locked {
            self.lock_start();
        }
        if max_paths == 0 {
            return Ok(Vec::new());
        }
        if let Some(scorer) = scorer {
            self.score_graph(scorer)?;
        }
        if max_paths <= 1000 {
            let mut found = paths::k_shortest_paths(self, max_paths);
            if let Some(scorer) = scorer {
                let batch: Vec<Vec<SurfaceForm>> = found
                    .iter()
                    .map(|p| p.iter().map(|&id| self.form(id).clone()).collect())
                    .collect();
                let scores = scorer.score_splits(&batch)?;
                if scores.len() != found.len() {
                    return Err(SandhiError::ScoreLengthMismatch {
                        expected: found.len(),
                        got: scores.len(),
                    });
                }
                let mut scored: Vec<(Vec<NodeId>, f64)> = found.into_iter().zip(scores).collect();
                scored.sort_by(|a, b| b.1.total_cmp(&a.1));
                found = scored.into_iter().map(|(p, _)| p).collect();
            }
            Ok(found)
        } else {
            let mut found = paths::all_simple_paths(self);
            if sort {
                found.sort_by_key(Vec::len);
            }
            Ok(found)
        }
    }
}

impl std::fmt::Display for SandhiGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SandhiGraph with {} nodes and {} edges",
            self.node_count(),
            self.edge_count()
        )
    }
}
