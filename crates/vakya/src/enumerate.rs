//! Divide-and-conquer enumeration of spanning forests.
//!
//! The base case sweeps a small position range left to right, growing a
//! population of partial parses edge by edge; the recursive case halves
//! the range and merges the two result sets, keeping only merges that
//! span the combined range.

use std::time::Instant;

use log::{debug, info};

use crate::ParseOptions;
use crate::graph::VakyaGraph;
use crate::parse::PartialParse;

pub(crate) fn enumerate_parses(graph: &VakyaGraph, options: &ParseOptions) -> Vec<PartialParse> {
    dc(graph, 0, graph.position_count(), options)
}

fn dc(graph: &VakyaGraph, mn: usize, mx: usize, options: &ParseOptions) -> Vec<PartialParse> {
    debug!("divide and conquer over positions {mn}..{mx}");
    if mx - mn > options.max_parse_dc {
        let md = (mn + mx) / 2;
        let left = dc(graph, mn, md, options);
        let right = dc(graph, md, mx, options);
        merge_partials(graph, left, right, mn, mx, options)
    } else {
        parse_sub(graph, mn, mx)
    }
}

/// Left-to-right sweep over positions `mn..mx`.
///
/// At each position, every partial parse is offered every inbound edge of
/// every reading there; safe extensions are kept as new parses. After
/// position `i` (relative), parses that failed to reach `i` edges are
/// dropped.
fn parse_sub(graph: &VakyaGraph, mn: usize, mx: usize) -> Vec<PartialParse> {
    let mut partials: Vec<PartialParse> = Vec::new();
    for (rel, pos) in (mn..mx).enumerate() {
        if rel == 0 {
            // Seed with the empty parse plus every single inbound edge.
            partials.push(PartialParse::new(graph.node_count()));
            for &n in graph.partition(pos) {
                for &pred in graph.preds(n) {
                    let mut seeded = PartialParse::new(graph.node_count());
                    seeded.extend(graph, pred, n);
                    partials.push(seeded);
                }
            }
        } else {
            let mut grown = Vec::new();
            for pp in &mut partials {
                for &n in graph.partition(pos) {
                    for &pred in graph.preds(n) {
                        if pp.is_safe(graph, pred, n) {
                            let mut extended = pp.clone();
                            extended.extend(graph, pred, n);
                            grown.push(extended);
                        }
                    }
                }
            }
            partials.retain(|pp| pp.len() >= rel);
            partials.append(&mut grown);
        }
        debug!("position {pos}: {} partial parses", partials.len());
    }
    partials
}

fn merge_partials(
    graph: &VakyaGraph,
    left: Vec<PartialParse>,
    right: Vec<PartialParse>,
    mn: usize,
    mx: usize,
    options: &ParseOptions,
) -> Vec<PartialParse> {
    info!(
        "merging {}..{}: {} x {} partial parses",
        mn,
        mx,
        left.len(),
        right.len()
    );
    let start = Instant::now();
    let min_len = mx - mn - 1;
    let mut merged = Vec::new();
    for ppa in &left {
        for ppb in &right {
            if options.fast_merge {
                if ppa.can_merge(graph, ppb, min_len) {
                    merged.push(ppa.merge_f(ppb));
                }
            } else if let Some(m) = ppa.merge_s(graph, ppb, min_len) {
                merged.push(m);
            }
        }
    }
    info!(
        "merge yielded {} parses in {:.6}s",
        merged.len(),
        start.elapsed().as_secs_f64()
    );
    merged
}
