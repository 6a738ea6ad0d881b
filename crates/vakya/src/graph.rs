use std::time::Instant;

use log::{debug, info, warn};
use rustc_hash::{FxHashMap, FxHashSet};

use anvaya_types::{DhatuKosha, EdgeLabel, Morph, SurfaceForm};

use crate::ParseOptions;
use crate::enumerate::enumerate_parses;
use crate::node::VakyaNode;
use crate::validate::{Parse, ParseEdge, check_parse, parse_cost};

pub type NodeId = u32;

/// The k-partite readings graph for one split path.
///
/// Each sentence position expands into one node per candidate reading;
/// labeled edges encode permissible grammatical relations between
/// readings at different positions. Built once, then queried for parses.
pub struct VakyaGraph {
    nodes: Vec<VakyaNode>,
    partitions: Vec<Vec<NodeId>>,
    edges: FxHashMap<(NodeId, NodeId), EdgeLabel>,
    preds: Vec<Vec<NodeId>>,
    empty_partitions: Vec<usize>,
}

impl VakyaGraph {
    /// Build the graph for a split path: expand readings per position,
    /// add the full edge catalogue, rewrite conjunctions, and drop
    /// isolated readings.
    pub fn build(words: &[(SurfaceForm, Vec<Morph>)], dhatus: &dyn DhatuKosha) -> VakyaGraph {
        let mut graph = VakyaGraph {
            nodes: Vec::new(),
            partitions: Vec::new(),
            edges: FxHashMap::default(),
            preds: Vec::new(),
            empty_partitions: Vec::new(),
        };
        for (index, (surface, morphs)) in words.iter().enumerate() {
            let mut partition = Vec::new();
            for morph in morphs {
                let id = graph.nodes.len() as NodeId;
                graph
                    .nodes
                    .push(VakyaNode::new(surface.clone(), morph.clone(), index));
                partition.push(id);
            }
            graph.partitions.push(partition);
        }
        debug!(
            "{} positions, {} reading nodes",
            graph.partitions.len(),
            graph.nodes.len()
        );

        graph.add_edges(dhatus);
        graph.remove_isolates();
        graph.rebuild_preds();
        graph
    }

    fn add_edges(&mut self, dhatus: &dyn DhatuKosha) {
        let laks = self.find_lakaras();
        let krts = self.find_krtverbs();
        let mut bases = laks.clone();
        bases.extend(&krts);
        debug!(
            "adding edges: {} lakāra readings, {} kṛt readings",
            laks.len(),
            krts.len()
        );
        self.add_karakas(&bases, dhatus);
        self.add_samastas();
        self.add_shashthi();
        self.add_kriyavisheshana(&bases);
        self.add_visheshana();
        self.add_kriya_kriya(&laks, &krts);
        self.add_avyayas(&bases);
        self.add_bhavalakshana(&krts, &laks);
        self.add_vipsa();
        self.add_sentence_conjunctions(&laks, &krts);
    }

    /// Readings with a finite-verb paradigm tag.
    pub(crate) fn find_lakaras(&self) -> Vec<NodeId> {
        self.node_ids()
            .filter(|&id| self.node(id).is_lakara())
            .collect()
    }

    /// Readings with a participial (non-tiṅanta) verb tag.
    pub(crate) fn find_krtverbs(&self) -> Vec<NodeId> {
        self.node_ids()
            .filter(|&id| self.node(id).is_krt())
            .collect()
    }

    /// Drop readings no edge touches. A partition that empties is
    /// recorded; the parse set for this path will be empty.
    fn remove_isolates(&mut self) {
        let mut touched: FxHashSet<NodeId> = FxHashSet::default();
        for &(u, v) in self.edges.keys() {
            touched.insert(u);
            touched.insert(v);
        }
        let single_position = self.partitions.len() == 1;
        for (ix, partition) in self.partitions.iter_mut().enumerate() {
            // A one-word sentence legitimately has no edges; its readings
            // stand as isolated-node parses.
            if single_position {
                continue;
            }
            partition.retain(|id| touched.contains(id));
            if partition.is_empty() {
                warn!("partition {ix} went to zero readings");
                self.empty_partitions.push(ix);
            }
        }
    }

    fn rebuild_preds(&mut self) {
        self.preds = vec![Vec::new(); self.nodes.len()];
        let mut keys: Vec<(NodeId, NodeId)> = self.edges.keys().copied().collect();
        keys.sort_unstable();
        for (u, v) in keys {
            self.preds[v as usize].push(u);
        }
    }

    pub fn node(&self, id: NodeId) -> &VakyaNode {
        &self.nodes[id as usize]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node_ids(&self) -> std::ops::Range<NodeId> {
        0..self.nodes.len() as NodeId
    }

    /// Number of sentence positions in the underlying split path.
    pub fn position_count(&self) -> usize {
        self.partitions.len()
    }

    /// Surviving readings at a position.
    pub fn partition(&self, index: usize) -> &[NodeId] {
        &self.partitions[index]
    }

    /// Positions whose readings were all isolated.
    pub fn empty_partitions(&self) -> &[usize] {
        &self.empty_partitions
    }

    /// Predecessors of a node, in ascending id order.
    pub fn preds(&self, id: NodeId) -> &[NodeId] {
        &self.preds[id as usize]
    }

    pub fn label(&self, u: NodeId, v: NodeId) -> Option<EdgeLabel> {
        self.edges.get(&(u, v)).copied()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, EdgeLabel)> + '_ {
        self.edges.iter().map(|(&(u, v), &l)| (u, v, l))
    }

    /// One edge per ordered pair: a later pass overwrites the label.
    pub(crate) fn add_edge(&mut self, from: NodeId, to: NodeId, label: EdgeLabel) {
        debug_assert_ne!(
            self.node(from).index,
            self.node(to).index,
            "edge within a partition"
        );
        debug!(
            "edge {} -> {} [{}]",
            self.node(from).pada,
            self.node(to).pada,
            label
        );
        self.edges.insert((from, to), label);
    }

    pub(crate) fn remove_edge(&mut self, from: NodeId, to: NodeId) -> Option<EdgeLabel> {
        self.edges.remove(&(from, to))
    }

    pub(crate) fn inbound(&self, to: NodeId) -> Vec<(NodeId, EdgeLabel)> {
        let mut inbound: Vec<(NodeId, EdgeLabel)> = self
            .edges
            .iter()
            .filter(|&(&(_, v), _)| v == to)
            .map(|(&(u, _), &l)| (u, l))
            .collect();
        inbound.sort_unstable_by_key(|&(u, _)| u);
        inbound
    }

    pub(crate) fn same_partition(&self, a: NodeId, b: NodeId) -> bool {
        self.node(a).index == self.node(b).index
    }

    /// Extract, validate, and rank all parses of this graph.
    ///
    /// Returns `(parse, cost)` pairs sorted by ascending cost, ties broken
    /// by the serialized edge list.
    pub fn parses(&self, options: &ParseOptions) -> Vec<(Parse, f64)> {
        // A one-position sentence parses to single isolated nodes.
        if self.position_count() == 1 {
            return self
                .partition(0)
                .iter()
                .map(|&id| {
                    (
                        Parse {
                            nodes: vec![id],
                            edges: Vec::new(),
                        },
                        0.0,
                    )
                })
                .collect();
        }

        let start = Instant::now();
        let partials = enumerate_parses(self, options);
        let enumerated = Instant::now();

        let mut parses: Vec<Parse> = partials
            .into_iter()
            .map(|pp| {
                let mut edges: Vec<ParseEdge> = pp
                    .edges()
                    .iter()
                    .map(|&(u, v)| ParseEdge {
                        from: u,
                        to: v,
                        label: self.label(u, v).expect("parse edge exists in graph"),
                    })
                    .collect();
                edges.sort_unstable();
                let mut nodes: Vec<NodeId> = pp.active_nodes().iter().copied().collect();
                nodes.sort_unstable();
                Parse { nodes, edges }
            })
            .collect();
        parses.sort();
        parses.dedup();
        parses.retain(|p| check_parse(self, p));
        let checked = Instant::now();

        let mut ranked: Vec<(Parse, f64)> = parses
            .into_iter()
            .map(|p| {
                let cost = parse_cost(self, &p);
                (p, cost)
            })
            .collect();
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

        info!(
            "parse enumeration {:.6}s, validity {:.6}s, {} parses",
            enumerated.duration_since(start).as_secs_f64(),
            checked.duration_since(enumerated).as_secs_f64(),
            ranked.len()
        );
        ranked
    }
}
