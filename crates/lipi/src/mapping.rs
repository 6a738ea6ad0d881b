// =============================================================================
// SLP1 → Devanagari mapping tables
// =============================================================================

/// Independent vowel forms, (SLP1, Devanagari).
const VOWELS: &[(char, &str)] = &[
    ('a', "अ"),
    ('A', "आ"),
    ('i', "इ"),
    ('I', "ई"),
    ('u', "उ"),
    ('U', "ऊ"),
    ('f', "ऋ"),
    ('F', "ॠ"),
    ('x', "ऌ"),
    ('X', "ॡ"),
    ('e', "ए"),
    ('E', "ऐ"),
    ('o', "ओ"),
    ('O', "औ"),
];

/// Dependent (matra) vowel signs. `a` is the inherent vowel and has no sign.
const MATRAS: &[(char, &str)] = &[
    ('a', ""),
    ('A', "ा"),
    ('i', "ि"),
    ('I', "ी"),
    ('u', "ु"),
    ('U', "ू"),
    ('f', "ृ"),
    ('F', "ॄ"),
    ('x', "ॢ"),
    ('X', "ॣ"),
    ('e', "े"),
    ('E', "ै"),
    ('o', "ो"),
    ('O', "ौ"),
];

const CONSONANTS: &[(char, &str)] = &[
    ('k', "क"),
    ('K', "ख"),
    ('g', "ग"),
    ('G', "घ"),
    ('N', "ङ"),
    ('c', "च"),
    ('C', "छ"),
    ('j', "ज"),
    ('J', "झ"),
    ('Y', "ञ"),
    ('w', "ट"),
    ('W', "ठ"),
    ('q', "ड"),
    ('Q', "ढ"),
    ('R', "ण"),
    ('t', "त"),
    ('T', "थ"),
    ('d', "द"),
    ('D', "ध"),
    ('n', "न"),
    ('p', "प"),
    ('P', "फ"),
    ('b', "ब"),
    ('B', "भ"),
    ('m', "म"),
    ('y', "य"),
    ('r', "र"),
    ('l', "ल"),
    ('v', "व"),
    ('S', "श"),
    ('z', "ष"),
    ('s', "स"),
    ('h', "ह"),
];

const SPECIALS: &[(char, &str)] = &[('M', "ं"), ('H', "ः"), ('~', "ँ"), ('\'', "ऽ")];

const VIRAMA: &str = "्";

fn lookup(table: &'static [(char, &'static str)], c: char) -> Option<&'static str> {
    table.iter().find(|&&(s, _)| s == c).map(move |&(_, d)| d)
}

/// Render an SLP1 string in Devanagari. Characters outside the SLP1
/// inventory are passed through unchanged.
pub fn to_devanagari(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 3);
    // A consonant awaiting its vowel (or virama).
    let mut pending: Option<&'static str> = None;

    for c in input.chars() {
        if let Some(dev) = lookup(CONSONANTS, c) {
            if let Some(prev) = pending.take() {
                out.push_str(prev);
                out.push_str(VIRAMA);
            }
            pending = Some(dev);
        } else if let Some(matra) = lookup(MATRAS, c) {
            match pending.take() {
                Some(prev) => {
                    out.push_str(prev);
                    out.push_str(matra);
                }
                None => out.push_str(lookup(VOWELS, c).unwrap_or("")),
            }
        } else {
            if let Some(prev) = pending.take() {
                out.push_str(prev);
                out.push_str(VIRAMA);
            }
            match lookup(SPECIALS, c) {
                Some(dev) => out.push_str(dev),
                None => out.push(c),
            }
        }
    }
    if let Some(prev) = pending {
        out.push_str(prev);
        out.push_str(VIRAMA);
    }
    out
}
