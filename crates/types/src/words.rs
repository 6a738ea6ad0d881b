//! Small closed word lists consulted by the edge builder. These are keyed
//! on base forms, not tags: a particle behaves as listed here whatever its
//! reading says.

/// Karmapravacanīyas governing an adjacent dvitīyā.
pub const KARMAPRAVACHANIYA_DVITIYA: &[&str] = &["anu", "upa", "prati", "aBi", "aDi", "ati"];

/// Karmapravacanīyas governing an adjacent pañcamī.
pub const KARMAPRAVACHANIYA_PANCHAMI: &[&str] = &["apa", "pari", "A", "prati"];

/// Karmapravacanīyas that govern nothing (pūjā readings of su/api).
/// Treated as non-governors; widen or narrow the set here.
pub const KARMAPRAVACHANIYA_NULL: &[&str] = &["su", "api"];

/// Avyayas that modify a verb even without a kriyāviśeṣaṇa tag.
pub const AVYAYA_KRIYAVISHESHANA: &[&str] = &["kila", "bata", "aho", "nanu", "hanta", "eva", "tu"];

/// Negation particles.
pub const NISHEDHA_BASES: &[&str] = &["na"];

/// Copular dhātus: a prathamā that fails agreement with these still
/// attaches as kartṛ-samānādhikaraṇa.
pub const COPULA_DHATUS: &[&str] = &["as", "BU", "vft"];

/// Y-pole → T-pole pairs for sentence conjunctions. A `None` T-pole means
/// the conjunction stands alone.
const SENTENCE_CONJUNCTIONS: &[(&str, Option<&str>)] = &[
    ("yad", Some("tad")),
    ("yadi", Some("tarhi")),
    ("yatra", Some("tatra")),
    ("yaTA", Some("taTA")),
    ("api", None),
    ("cet", None),
    ("yat", None),
    ("natu", None),
    ("ca", None),
];

/// Is this base a sentence-conjunction Y-pole?
pub fn is_conjunction_base(base: &str) -> bool {
    SENTENCE_CONJUNCTIONS.iter().any(|&(y, _)| y == base)
}

/// The T-pole expected by a Y-pole base, if the base is a conjunction.
/// `Some(None)` is a conjunction with no correlative partner.
pub fn conjunction_partner(base: &str) -> Option<Option<&'static str>> {
    SENTENCE_CONJUNCTIONS
        .iter()
        .find(|&&(y, _)| y == base)
        .map(|&(_, t)| t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conjunction_partners() {
        assert_eq!(conjunction_partner("yadi"), Some(Some("tarhi")));
        assert_eq!(conjunction_partner("ca"), Some(None));
        assert_eq!(conjunction_partner("tarhi"), None);
        assert!(is_conjunction_base("yatra"));
        assert!(!is_conjunction_base("eva"));
    }

    #[test]
    fn prati_governs_both_cases() {
        assert!(KARMAPRAVACHANIYA_DVITIYA.contains(&"prati"));
        assert!(KARMAPRAVACHANIYA_PANCHAMI.contains(&"prati"));
    }
}
