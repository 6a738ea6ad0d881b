use criterion::{Criterion, black_box, criterion_group, criterion_main};

use anvaya_types::{DhatuKosha, Morph, SurfaceForm, Tag};
use anvaya_vakya::{ParseOptions, VakyaGraph};

struct Dhatus;

impl DhatuKosha for Dhatus {
    fn is_sakarmaka(&self, dhatu: &str) -> bool {
        matches!(dhatu, "kf" | "gam")
    }
}

fn gita_words() -> Vec<(SurfaceForm, Vec<Morph>)> {
    let word = |surface: &str, readings: &[(&str, &[Tag])]| {
        (
            SurfaceForm::new(surface),
            readings
                .iter()
                .map(|(base, tags)| Morph::new(*base, tags.iter().copied().collect()))
                .collect(),
        )
    };
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

fn bench_build(c: &mut Criterion) {
    let words = gita_words();
    c.bench_function("vakya_build", |b| {
        b.iter(|| VakyaGraph::build(black_box(&words), &Dhatus))
    });
}

fn bench_parses(c: &mut Criterion) {
    let graph = VakyaGraph::build(&gita_words(), &Dhatus);
    let options = ParseOptions::default();
    c.bench_function("vakya_parses", |b| b.iter(|| graph.parses(black_box(&options))));
}

fn bench_parses_safe_merge(c: &mut Criterion) {
    let graph = VakyaGraph::build(&gita_words(), &Dhatus);
    let options = ParseOptions {
        fast_merge: false,
        ..ParseOptions::default()
    };
    c.bench_function("vakya_parses_safe_merge", |b| {
        b.iter(|| graph.parses(black_box(&options)))
    });
}

criterion_group!(benches, bench_build, bench_parses, bench_parses_safe_merge,);
criterion_main!(benches);
