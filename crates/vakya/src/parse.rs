use rustc_hash::FxHashSet;

use crate::disjoint_set::DisjointSet;
use crate::graph::{NodeId, VakyaGraph};

/// An incremental spanning forest over a prefix of sentence positions.
///
/// Invariants: every edge's endpoints are active; activating a node
/// extinguishes its position for all alternative readings; the disjoint
/// set mirrors the undirected connectivity of the edge set, which is
/// always a forest.
#[derive(Debug, Clone)]
pub struct PartialParse {
    edges: Vec<(NodeId, NodeId)>,
    active: FxHashSet<NodeId>,
    extinguished: FxHashSet<usize>,
    connections: DisjointSet,
}

impl PartialParse {
    /// The empty parse over a graph with `node_count` readings.
    pub fn new(node_count: usize) -> PartialParse {
        PartialParse {
            edges: Vec::new(),
            active: FxHashSet::default(),
            extinguished: FxHashSet::default(),
            connections: DisjointSet::new(node_count),
        }
    }

    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    pub fn active_nodes(&self) -> &FxHashSet<NodeId> {
        &self.active
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    fn activate_and_extinguish(&mut self, graph: &VakyaGraph, id: NodeId) {
        self.active.insert(id);
        self.extinguished.insert(graph.node(id).index);
    }

    /// A node is dead for this parse when its position was claimed by a
    /// different alternative.
    fn is_extinguished(&self, graph: &VakyaGraph, id: NodeId) -> bool {
        self.extinguished.contains(&graph.node(id).index) && !self.active.contains(&id)
    }

    /// Can the edge `pred → node` extend this parse? Both endpoints must
    /// be live, and joining two already-active nodes must not close a
    /// cycle.
    pub fn is_safe(&mut self, graph: &VakyaGraph, pred: NodeId, node: NodeId) -> bool {
        if self.is_extinguished(graph, pred) || self.is_extinguished(graph, node) {
            return false;
        }
        if self.active.contains(&pred) && self.active.contains(&node) {
            return !self.connections.connected(pred, node);
        }
        true
    }

    /// Add the edge, activating any inactive endpoint. Callers check
    /// `is_safe` first.
    pub fn extend(&mut self, graph: &VakyaGraph, pred: NodeId, node: NodeId) {
        if !self.active.contains(&pred) {
            self.activate_and_extinguish(graph, pred);
        }
        if !self.active.contains(&node) {
            self.activate_and_extinguish(graph, node);
        }
        self.edges.push((pred, node));
        self.connections.union(pred, node);
    }

    /// Pre-merge feasibility: combined length, no extinguished-position
    /// conflicts, and no cycle introduced by the other parse's edges.
    pub fn can_merge(&self, graph: &VakyaGraph, other: &PartialParse, min_len: usize) -> bool {
        if self.edges.len() + other.edges.len() < min_len {
            return false;
        }
        for &x in &other.active {
            if self.is_extinguished(graph, x) {
                return false;
            }
        }
        let mut connections = self.connections.copy();
        for &(u, v) in &other.edges {
            if connections.connected(u, v) {
                return false;
            }
            connections.union(u, v);
        }
        true
    }

    /// Unconditional merge; assumes `can_merge` held.
    pub fn merge_f(&self, other: &PartialParse) -> PartialParse {
        let mut merged = self.clone();
        merged.extinguished.extend(&other.extinguished);
        merged.active.extend(&other.active);
        merged.edges.extend_from_slice(&other.edges);
        for &(u, v) in &other.edges {
            merged.connections.union(u, v);
        }
        merged
    }

    /// Defensive merge by repeated safe extension; `None` on any
    /// conflicting edge.
    pub fn merge_s(
        &self,
        graph: &VakyaGraph,
        other: &PartialParse,
        min_len: usize,
    ) -> Option<PartialParse> {
        if self.edges.len() + other.edges.len() < min_len {
            return None;
        }
        let mut merged = self.clone();
        for &(u, v) in &other.edges {
            if !merged.is_safe(graph, u, v) {
                return None;
            }
            merged.extend(graph, u, v);
        }
        Some(merged)
    }
}
