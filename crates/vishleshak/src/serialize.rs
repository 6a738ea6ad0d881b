//! Serialization of a parse into per-position rows for downstream
//! consumers.

use anvaya_lipi::to_devanagari;
use anvaya_vakya::{Parse, VakyaGraph};

/// One serialized node: `(surface, (base, [tags]), label, governor)`.
/// Roots carry empty label and governor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRow {
    pub surface: String,
    pub base: String,
    pub tags: Vec<String>,
    pub label: String,
    pub governor: String,
}

impl ParseRow {
    /// The wire tuple form.
    pub fn to_tuple(&self) -> (String, (String, Vec<String>), String, String) {
        (
            self.surface.clone(),
            (self.base.clone(), self.tags.clone()),
            self.label.clone(),
            self.governor.clone(),
        )
    }
}

/// Rows for every node of the parse, in position order. A node's row
/// names its incoming edge; with more than one inbound non-projective
/// link, the lexicographically first is named.
pub(crate) fn parse_rows(graph: &VakyaGraph, parse: &Parse, devanagari: bool) -> Vec<ParseRow> {
    let render = |s: &str| {
        if devanagari {
            to_devanagari(s)
        } else {
            s.to_string()
        }
    };

    let mut nodes = parse.nodes.clone();
    nodes.sort_by_key(|&id| graph.node(id).index);

    nodes
        .iter()
        .map(|&id| {
            let node = graph.node(id);
            let inbound = parse.edges.iter().find(|e| e.to == id);
            let (label, governor) = match inbound {
                Some(e) => (
                    render(&e.label.to_string()),
                    render(graph.node(e.from).pada.text()),
                ),
                None => (String::new(), String::new()),
            };
            ParseRow {
                surface: render(node.pada.text()),
                base: render(node.base()),
                tags: node.morph.tags.iter().map(|t| render(t.as_str())).collect(),
                label,
                governor,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_form_round_trips_fields() {
        let row = ParseRow {
            surface: "rAmaH".into(),
            base: "rAma".into(),
            tags: vec!["praTamAviBaktiH".into()],
            label: "kartA".into(),
            governor: "tarati".into(),
        };
        let (surface, (base, tags), label, governor) = row.to_tuple();
        assert_eq!(surface, "rAmaH");
        assert_eq!(base, "rAma");
        assert_eq!(tags, vec!["praTamAviBaktiH".to_string()]);
        assert_eq!(label, "kartA");
        assert_eq!(governor, "tarati");
    }
}
