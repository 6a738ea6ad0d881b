use anvaya_types::{DhatuKosha, Morph, Relation, SurfaceForm, Tag};
use anvaya_vakya::{DisjointSet, Parse, ParseOptions, VakyaGraph};

struct Dhatus;

impl DhatuKosha for Dhatus {
    fn is_sakarmaka(&self, dhatu: &str) -> bool {
        matches!(dhatu, "tf" | "kf" | "gam" | "pA")
    }
}

fn word(surface: &str, readings: &[(&str, &[Tag])]) -> (SurfaceForm, Vec<Morph>) {
    (
        SurfaceForm::new(surface),
        readings
            .iter()
            .map(|(base, tags)| Morph::new(*base, tags.iter().copied().collect()))
            .collect(),
    )
}

fn rama_tarati() -> Vec<(SurfaceForm, Vec<Morph>)> {
    vec![
        word(
            "rAmaH",
            &[("rAma", &[Tag::Prathama, Tag::Ekavacana, Tag::Pumlinga])],
        ),
        word(
            "tarati",
            &[("tf", &[Tag::Lat, Tag::PrathamaPurusha, Tag::Ekavacana])],
        ),
    ]
}

/// Undirected acyclicity and the one-reading-per-position rule.
fn assert_forest(graph: &VakyaGraph, parse: &Parse) {
    let mut dsu = DisjointSet::new(graph.node_count());
    for e in &parse.edges {
        assert!(
            !dsu.connected(e.from, e.to),
            "cycle through {} -> {}",
            e.from,
            e.to
        );
        dsu.union(e.from, e.to);
    }
    let mut positions: Vec<usize> = parse.nodes.iter().map(|&n| graph.node(n).index).collect();
    positions.sort_unstable();
    positions.dedup();
    assert_eq!(positions.len(), parse.nodes.len(), "two readings of one position");
}

#[test]
fn rama_tarati_yields_single_karta_parse() {
    let graph = VakyaGraph::build(&rama_tarati(), &Dhatus);
    let parses = graph.parses(&ParseOptions::default());
    assert_eq!(parses.len(), 1);
    let (parse, cost) = &parses[0];
    assert_eq!(parse.edges.len(), 1);
    let e = &parse.edges[0];
    assert_eq!(e.label.relation, Relation::Karta);
    assert_eq!(graph.node(e.from).base(), "tf");
    assert_eq!(graph.node(e.to).base(), "rAma");
    assert!(graph.node(e.from).is_lakara());
    // One kartā edge of span 1: 1 · 0.8 · 0.9.
    assert!((cost - 0.72).abs() < 1e-9);
}

#[test]
fn single_word_parses_to_isolated_nodes() {
    let graph = VakyaGraph::build(&rama_tarati()[..1], &Dhatus);
    let parses = graph.parses(&ParseOptions::default());
    assert_eq!(parses.len(), 1);
    assert!(parses[0].0.edges.is_empty());
    assert_eq!(parses[0].0.nodes.len(), 1);
}

#[test]
fn empty_reading_partition_warns_and_yields_nothing() {
    let words = vec![
        word(
            "rAmaH",
            &[("rAma", &[Tag::Prathama, Tag::Ekavacana, Tag::Pumlinga])],
        ),
        word("Biima", &[]),
        word(
            "tarati",
            &[("tf", &[Tag::Lat, Tag::PrathamaPurusha, Tag::Ekavacana])],
        ),
    ];
    let graph = VakyaGraph::build(&words, &Dhatus);
    assert_eq!(graph.empty_partitions(), &[1]);
    assert!(graph.parses(&ParseOptions::default()).is_empty());
}

fn gita_words() -> Vec<(SurfaceForm, Vec<Morph>)> {
    vec![
        word(
            "mAmakAH",
            &[("mAmaka", &[Tag::Prathama, Tag::Bahuvacana, Tag::Pumlinga])],
        ),
        word(
            "pANDavAH",
            &[("pANDava", &[Tag::Prathama, Tag::Bahuvacana, Tag::Pumlinga])],
        ),
        word("ca", &[("ca", &[Tag::Avyaya, Tag::Samyojaka])]),
        word("eva", &[("eva", &[Tag::Avyaya])]),
        word(
            "kim",
            &[
                ("kim", &[Tag::Dvitiya, Tag::Ekavacana, Tag::Napumsakalinga]),
                ("kim", &[Tag::Prathama, Tag::Ekavacana, Tag::Napumsakalinga]),
            ],
        ),
        word(
            "akurvata",
            &[
                ("kf", &[Tag::Lan, Tag::PrathamaPurusha, Tag::Bahuvacana]),
                (
                    "kf",
                    &[Tag::Lan, Tag::MadhyamaPurusha, Tag::Ekavacana, Tag::Nijanta],
                ),
            ],
        ),
        word(
            "saMjaya",
            &[("saMjaya", &[Tag::Sambodhana, Tag::Ekavacana, Tag::Pumlinga])],
        ),
    ]
}

#[test]
fn gita_line_produces_the_expected_relations() {
    let graph = VakyaGraph::build(&gita_words(), &Dhatus);
    let parses = graph.parses(&ParseOptions::default());
    assert!(!parses.is_empty());

    for (parse, _) in &parses {
        assert_forest(&graph, parse);
    }
    // Costs are non-decreasing.
    for pair in parses.windows(2) {
        assert!(pair[0].1 <= pair[1].1);
    }

    // At least one parse has akurvata -> kim karma, a viśeṣaṇa between
    // mAmakAH and pANDavAH, and saMjaya attached as sambodhya.
    let found = parses.iter().any(|(parse, _)| {
        let has = |rel: Relation, from: &str, to: &str| {
            parse.edges.iter().any(|e| {
                e.label.relation == rel
                    && !e.label.sambaddha
                    && graph.node(e.from).pada.text() == from
                    && graph.node(e.to).pada.text() == to
            })
        };
        has(Relation::Karma, "akurvata", "kim")
            && (has(Relation::Visheshana, "mAmakAH", "pANDavAH")
                || has(Relation::Visheshana, "pANDavAH", "mAmakAH"))
            && has(Relation::Sambodhya, "akurvata", "saMjaya")
    });
    assert!(found, "expected karma/viśeṣaṇa/sambodhya parse");
}

#[test]
fn no_verb_governs_a_karaka_twice() {
    let graph = VakyaGraph::build(&gita_words(), &Dhatus);
    for (parse, _) in graph.parses(&ParseOptions::default()) {
        let mut seen = std::collections::HashSet::new();
        for e in &parse.edges {
            if e.label.relation.is_karaka() && !e.label.sambaddha {
                assert!(seen.insert((e.from, e.label.relation)));
            }
        }
    }
}

#[test]
fn fast_and_safe_merge_agree() {
    let graph = VakyaGraph::build(&gita_words(), &Dhatus);
    let fast = graph.parses(&ParseOptions {
        fast_merge: true,
        ..ParseOptions::default()
    });
    let safe = graph.parses(&ParseOptions {
        fast_merge: false,
        ..ParseOptions::default()
    });
    assert_eq!(fast, safe);
}

#[test]
fn rebuild_is_deterministic() {
    let a = VakyaGraph::build(&gita_words(), &Dhatus);
    let b = VakyaGraph::build(&gita_words(), &Dhatus);
    assert_eq!(a.edge_count(), b.edge_count());
    assert_eq!(
        a.parses(&ParseOptions::default()),
        b.parses(&ParseOptions::default())
    );
}

fn yadi_tarhi_words() -> Vec<(SurfaceForm, Vec<Morph>)> {
    vec![
        word("yadi", &[("yadi", &[Tag::Avyaya, Tag::Samyojaka])]),
        word(
            "gacCasi",
            &[("gam", &[Tag::Lat, Tag::MadhyamaPurusha, Tag::Ekavacana])],
        ),
        word("tarhi", &[("tarhi", &[Tag::Avyaya, Tag::Kriyavisheshana])]),
        word(
            "gacCAmi",
            &[("gam", &[Tag::Lat, Tag::UttamaPurusha, Tag::Ekavacana])],
        ),
    ]
}

#[test]
fn yadi_tarhi_pairs_exactly_once() {
    let graph = VakyaGraph::build(&yadi_tarhi_words(), &Dhatus);
    let parses = graph.parses(&ParseOptions::default());
    assert!(!parses.is_empty());
    for (parse, _) in &parses {
        let vakya: Vec<_> = parse
            .edges
            .iter()
            .filter(|e| e.label.relation == Relation::Vakyasambandha && !e.label.sambaddha)
            .collect();
        assert_eq!(vakya.len(), 1, "expected exactly one vākyasambandha");
        let e = vakya[0];
        assert_eq!(graph.node(e.from).base(), "tarhi");
        assert_eq!(graph.node(e.to).base(), "yadi");
        // All other yadi links point outward under a sambaddha-class label.
        for e in &parse.edges {
            if graph.node(e.to).base() == "yadi" {
                assert_eq!(e.label.relation, Relation::Vakyasambandha);
            }
        }
    }
}

fn non_projective_words() -> Vec<(SurfaceForm, Vec<Morph>)> {
    vec![
        word(
            "grAmam",
            &[("grAma", &[Tag::Dvitiya, Tag::Ekavacana, Tag::Pumlinga])],
        ),
        word(
            "jalam",
            &[("jala", &[Tag::Dvitiya, Tag::Ekavacana, Tag::Napumsakalinga])],
        ),
        word("gatvA", &[("gam", &[Tag::Ktva])]),
        word(
            "pibati",
            &[("pA", &[Tag::Lat, Tag::PrathamaPurusha, Tag::Ekavacana])],
        ),
    ]
}

#[test]
fn crossing_karaka_reading_is_rejected() {
    let graph = VakyaGraph::build(&non_projective_words(), &Dhatus);
    let parses = graph.parses(&ParseOptions::default());
    assert!(!parses.is_empty(), "a projective reading must survive");
    for (parse, _) in &parses {
        // The interleaved attachment (gatvA -> grAmam with pibati -> jalam)
        // must never appear.
        let gatva_gramam = parse.edges.iter().any(|e| {
            graph.node(e.from).pada.text() == "gatvA" && graph.node(e.to).pada.text() == "grAmam"
        });
        let pibati_jalam = parse.edges.iter().any(|e| {
            graph.node(e.from).pada.text() == "pibati" && graph.node(e.to).pada.text() == "jalam"
        });
        assert!(!(gatva_gramam && pibati_jalam), "non-projective parse leaked");
    }
}

fn samasa_words() -> Vec<(SurfaceForm, Vec<Morph>)> {
    vec![
        word("gaRa", &[("gaRa", &[Tag::SamasaPurvapada])]),
        word(
            "upadeSaH",
            &[("upadeSa", &[Tag::Prathama, Tag::Ekavacana, Tag::Pumlinga])],
        ),
    ]
}

#[test]
fn samasa_member_attaches_to_the_following_noun() {
    let graph = VakyaGraph::build(&samasa_words(), &Dhatus);
    let parses = graph.parses(&ParseOptions::default());
    assert_eq!(parses.len(), 1);
    let e = &parses[0].0.edges[0];
    assert_eq!(e.label.relation, Relation::Samasta);
    assert_eq!(graph.node(e.from).base(), "upadeSa");
    assert_eq!(graph.node(e.to).base(), "gaRa");
}

#[test]
fn vipsa_links_repeated_forms() {
    let words = vec![
        word(
            "punaH",
            &[("punar", &[Tag::Avyaya, Tag::Kriyavisheshana])],
        ),
        word(
            "punaH",
            &[("punar", &[Tag::Avyaya, Tag::Kriyavisheshana])],
        ),
        word(
            "pibati",
            &[("pA", &[Tag::Lat, Tag::PrathamaPurusha, Tag::Ekavacana])],
        ),
    ];
    let graph = VakyaGraph::build(&words, &Dhatus);
    let has_vipsa = graph
        .edges()
        .any(|(_, _, l)| l.relation == Relation::Vipsa);
    assert!(has_vipsa);
}
