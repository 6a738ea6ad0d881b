//! Global validity checks and cost-based ordering of extracted parses.

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use anvaya_types::{EdgeLabel, Relation, is_conjunction_base};

use crate::graph::{NodeId, VakyaGraph};

/// One labeled edge of a finished parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ParseEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub label: EdgeLabel,
}

/// A candidate dependency parse: the chosen readings and the labeled
/// edges over them. Edge and node lists are kept sorted so parses have a
/// canonical form for deduplication and tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Parse {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<ParseEdge>,
}

/// Do two projective edges cross? Ranges are (min, max) position pairs;
/// crossing means interleaved without containment.
pub fn non_projective(a: (usize, usize), b: (usize, usize)) -> bool {
    let (mnu, mxu) = a;
    let (mnw, mxw) = b;
    if mnu < mnw {
        mxu < mxw && mxu > mnw
    } else if mxu > mxw {
        mnu > mnw && mnu < mxw
    } else {
        false
    }
}

/// Global validity of one parse. Rejections, in order of checking: a verb
/// governing the same kāraka twice, two inbound projective edges at one
/// node, crossing projective edges, two sambaddha-class edges out of one
/// node, a viśeṣaṇa target that itself modifies, an edge escaping a
/// vākyasambandha pair's window, and a conjunction node with more than
/// one inbound or outbound edge.
pub fn check_parse(graph: &VakyaGraph, parse: &Parse) -> bool {
    let mut karaka_count: FxHashMap<(NodeId, Relation), u32> = FxHashMap::default();
    let mut projective_in: FxHashMap<NodeId, u32> = FxHashMap::default();
    let mut projective_ranges: Vec<(usize, usize)> = Vec::new();
    let mut sambaddha_out: FxHashMap<NodeId, u32> = FxHashMap::default();
    let mut visheshana_src: FxHashSet<NodeId> = FxHashSet::default();
    let mut visheshana_dst: FxHashSet<NodeId> = FxHashSet::default();
    let mut vsmbd: FxHashMap<usize, usize> = FxHashMap::default();
    let mut conj_out: FxHashMap<NodeId, u32> = FxHashMap::default();
    let mut conj_in: FxHashMap<NodeId, u32> = FxHashMap::default();
    let mut conj_nodes: FxHashSet<NodeId> = FxHashSet::default();

    for e in &parse.edges {
        let ui = graph.node(e.from).index;
        let vi = graph.node(e.to).index;
        if e.label.relation.is_karaka() && !e.label.sambaddha {
            *karaka_count.entry((e.from, e.label.relation)).or_default() += 1;
        }
        if e.label.is_projective() {
            *projective_in.entry(e.to).or_default() += 1;
            projective_ranges.push((ui.min(vi), ui.max(vi)));
        }
        if e.label.is_sambaddha_class() {
            *sambaddha_out.entry(e.from).or_default() += 1;
        }
        if e.label.relation == Relation::Visheshana && !e.label.sambaddha {
            visheshana_src.insert(e.from);
            visheshana_dst.insert(e.to);
        }
        if e.label.relation == Relation::Vakyasambandha && !e.label.sambaddha {
            vsmbd.insert(ui, vi);
            vsmbd.insert(vi, ui);
        }
        if is_conjunction_base(graph.node(e.from).base()) {
            conj_nodes.insert(e.from);
            *conj_out.entry(e.from).or_default() += 1;
        }
        if is_conjunction_base(graph.node(e.to).base()) {
            conj_nodes.insert(e.to);
            *conj_in.entry(e.to).or_default() += 1;
        }
    }

    // Each kāraka label at most once per governor.
    for (&(u, rel), &count) in &karaka_count {
        if count > 1 {
            debug!("duplicate kāraka {rel} from node {u}");
            return false;
        }
    }
    // At most one inbound projective-label edge per node.
    for (&v, &count) in &projective_in {
        if count > 1 {
            debug!("{count} inbound projective edges at node {v}");
            return false;
        }
    }
    // No two projective edges may cross.
    for (i, &a) in projective_ranges.iter().enumerate() {
        for &b in &projective_ranges[i + 1..] {
            if non_projective(a, b) {
                debug!("sannidhi violation {a:?} x {b:?}");
                return false;
            }
        }
    }
    // At most one sambaddha-class edge out of a node.
    for (&u, &count) in &sambaddha_out {
        if count > 1 {
            debug!("{count} sambaddha edges from node {u}");
            return false;
        }
    }
    // An adjective's head is not itself an adjective by agreement alone.
    if visheshana_dst.iter().any(|v| visheshana_src.contains(v)) {
        debug!("viśeṣaṇa chain");
        return false;
    }
    // No edge from a vākyasambandha endpoint may cross beyond its partner.
    for e in &parse.edges {
        let ui = graph.node(e.from).index;
        let vi = graph.node(e.to).index;
        for (a, b) in [(ui, vi), (vi, ui)] {
            if let Some(&partner) = vsmbd.get(&a) {
                if (partner > a && b > partner) || (partner < a && b < partner) {
                    debug!("vākyasambandha window violation at position {a}");
                    return false;
                }
            }
        }
    }
    // Conjunction closure: a Y-pole node carries at most one inbound and
    // at most one outbound edge (spanning already guarantees incidence;
    // requiring exactly one of each would make single-verb coordinations
    // unparseable).
    for &u in &conj_nodes {
        if conj_out.get(&u).copied().unwrap_or(0) > 1 || conj_in.get(&u).copied().unwrap_or(0) > 1
        {
            debug!("conjunction closure violation at node {u}");
            return false;
        }
    }
    true
}

/// Parse ordering cost: Σ |i(u) − i(v)| · label-cost, with edges sourced
/// at a finite verb discounted (finite-verb-rooted parses are preferred).
pub fn parse_cost(graph: &VakyaGraph, parse: &Parse) -> f64 {
    parse
        .edges
        .iter()
        .map(|e| {
            let span = graph.node(e.from).index.abs_diff(graph.node(e.to).index) as f64;
            let mut w = span * e.label.cost();
            if graph.node(e.from).is_lakara() {
                w *= 0.9;
            }
            w
        })
        .sum()
}
