//! Path enumeration over the split lattice: Dijkstra, Yen's K-shortest
//! simple paths, and exhaustive simple-path listing for the unbounded mode.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::graph::{NodeId, NodeRef, SandhiGraph};

#[derive(Debug)]
struct HeapEntry {
    dist: f64,
    node: NodeRef,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    // Reversed so that BinaryHeap pops the smallest distance first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Dijkstra from `source` to End, honoring banned nodes and edges.
fn shortest_path(
    graph: &SandhiGraph,
    source: NodeRef,
    banned_nodes: &FxHashSet<NodeRef>,
    banned_edges: &FxHashSet<(NodeRef, NodeRef)>,
) -> Option<(Vec<NodeRef>, f64)> {
    let mut dist: FxHashMap<NodeRef, f64> = FxHashMap::default();
    let mut prev: FxHashMap<NodeRef, NodeRef> = FxHashMap::default();
    let mut heap = BinaryHeap::new();
    dist.insert(source, 0.0);
    heap.push(HeapEntry {
        dist: 0.0,
        node: source,
    });

    while let Some(HeapEntry { dist: d, node: u }) = heap.pop() {
        if u == NodeRef::End {
            let mut path = vec![u];
            let mut cur = u;
            while let Some(&p) = prev.get(&cur) {
                path.push(p);
                cur = p;
            }
            path.reverse();
            return Some((path, d));
        }
        if d > dist.get(&u).copied().unwrap_or(f64::INFINITY) {
            continue;
        }
        for &v in graph.successors(u) {
            if banned_nodes.contains(&v) || banned_edges.contains(&(u, v)) {
                continue;
            }
            let nd = d + graph.weight(u, v);
            if nd < dist.get(&v).copied().unwrap_or(f64::INFINITY) {
                dist.insert(v, nd);
                prev.insert(v, u);
                heap.push(HeapEntry { dist: nd, node: v });
            }
        }
    }
    None
}

fn path_weight(graph: &SandhiGraph, path: &[NodeRef]) -> f64 {
    path.windows(2).map(|w| graph.weight(w[0], w[1])).sum()
}

fn interior(path: &[NodeRef]) -> Vec<NodeId> {
    path.iter()
        .filter_map(|n| match n {
            NodeRef::Form(id) => Some(*id),
            _ => None,
        })
        .collect()
}

/// Yen's algorithm: up to `k` loopless Start→End paths in order of
/// ascending total weight. Ties resolve lexicographically on the node
/// sequence, which keeps the order stable within a run.
pub(crate) fn k_shortest_paths(graph: &SandhiGraph, k: usize) -> Vec<Vec<NodeId>> {
    let Some((first, _)) = shortest_path(
        graph,
        NodeRef::Start,
        &FxHashSet::default(),
        &FxHashSet::default(),
    ) else {
        return Vec::new();
    };

    let mut shortest: Vec<Vec<NodeRef>> = vec![first];
    let mut candidates: Vec<(f64, Vec<NodeRef>)> = Vec::new();

    while shortest.len() < k {
        let prev_path = shortest.last().expect("at least one path").clone();
        for i in 0..prev_path.len() - 1 {
            let spur_node = prev_path[i];
            let root_path = &prev_path[..=i];

            let mut banned_edges = FxHashSet::default();
            for p in &shortest {
                if p.len() > i + 1 && p[..=i] == *root_path {
                    banned_edges.insert((p[i], p[i + 1]));
                }
            }
            let banned_nodes: FxHashSet<NodeRef> = root_path[..i].iter().copied().collect();

            if let Some((spur_path, _)) = shortest_path(graph, spur_node, &banned_nodes, &banned_edges)
            {
                let mut total = root_path[..i].to_vec();
                total.extend(spur_path);
                if !shortest.contains(&total) && !candidates.iter().any(|(_, p)| *p == total) {
                    let w = path_weight(graph, &total);
                    candidates.push((w, total));
                }
            }
        }
        if candidates.is_empty() {
            break;
        }
        let best = candidates
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)))
            .map(|(i, _)| i)
            .expect("non-empty candidates");
        shortest.push(candidates.swap_remove(best).1);
    }

    shortest.iter().map(|p| interior(p)).collect()
}

/// Every simple Start→End path, in DFS order. The lattice is acyclic, so
/// the walk needs no visited bookkeeping beyond the current path.
pub(crate) fn all_simple_paths(graph: &SandhiGraph) -> Vec<Vec<NodeId>> {
    let mut results = Vec::new();
    // (node, index of the next successor to try)
    let mut stack: Vec<(NodeRef, usize)> = vec![(NodeRef::Start, 0)];

    while !stack.is_empty() {
        let top = stack.len() - 1;
        let (node, idx) = stack[top];
        let succ = graph.successors(node);
        if idx >= succ.len() {
            stack.pop();
            continue;
        }
        stack[top].1 += 1;
        let next = succ[idx];
        if next == NodeRef::End {
            let path: Vec<NodeRef> = stack.iter().map(|&(n, _)| n).collect();
            results.push(interior(&path));
        } else {
            stack.push((next, 0));
        }
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use anvaya_types::SurfaceForm;

    /// A diamond lattice: Start → {a, b} → c → End, with a cheaper than b.
    fn diamond() -> (SandhiGraph, NodeId, NodeId, NodeId) {
        let mut g = SandhiGraph::new();
        let a = g.add_node(SurfaceForm::new("a"));
        let b = g.add_node(SurfaceForm::new("b"));
        let c = g.add_node(SurfaceForm::new("c"));
        g.append_to_node(a, &[c]);
        g.append_to_node(b, &[c]);
        g.add_roots(&[a, b]);
        g.add_end_edge(c);
        g.lock_start();
        (g, a, b, c)
    }

    #[test]
    fn k_shortest_enumerates_both_branches() {
        let (g, a, b, c) = diamond();
        let paths = k_shortest_paths(&g, 5);
        assert_eq!(paths.len(), 2);
        assert!(paths.contains(&vec![a, c]));
        assert!(paths.contains(&vec![b, c]));
    }

    #[test]
    fn k_limits_result_count() {
        let (g, _, _, _) = diamond();
        assert_eq!(k_shortest_paths(&g, 1).len(), 1);
    }

    #[test]
    fn all_simple_paths_matches() {
        let (g, _, _, _) = diamond();
        assert_eq!(all_simple_paths(&g).len(), 2);
    }
}
