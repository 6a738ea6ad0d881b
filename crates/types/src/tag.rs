use std::fmt;
use std::str::FromStr;

/// A morphological feature token in its canonical SLP1 spelling.
///
/// The vocabulary is closed: eight vibhakti, three vacana, three puruṣa,
/// four liṅga, the finite-verb lakāra paradigms, seven kṛt categories, and
/// a handful of auxiliary flags. Every grammatical test in the analyzer is
/// a membership test over this vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Tag {
    // Vibhakti (nominal case)
    Prathama = 0,
    Dvitiya,
    Tritiya,
    Chaturthi,
    Panchami,
    Shashthi,
    Saptami,
    Sambodhana,
    // Vacana (number)
    Ekavacana,
    Dvivacana,
    Bahuvacana,
    // Puruṣa (person)
    PrathamaPurusha,
    MadhyamaPurusha,
    UttamaPurusha,
    // Liṅga (gender)
    Pumlinga,
    Napumsakalinga,
    Strilinga,
    Trilinga,
    // Lakāra (finite-verb paradigm)
    Lat,
    Lit,
    Lut,
    Lrt,
    Lot,
    Lan,
    Lin,
    Lun,
    Lrn,
    VidhiLin,
    AshirLin,
    // Kṛt (participial category)
    Ktva,
    Shatr,
    Shanac,
    Tumun,
    Kta,
    Ktavatu,
    Lyap,
    // Auxiliary flags
    Upasarga,
    Karmapravachaniya,
    Avyaya,
    Kriyavisheshana,
    Nijanta,
    Karmani,
    SamasaPurvapada,
    Samyojaka,
    AvyayaDhatuRupa,
}

/// Canonical (Tag, SLP1 spelling) pairs; the order matches the enum.
const TAG_STRINGS: &[(Tag, &str)] = &[
    (Tag::Prathama, "praTamAviBaktiH"),
    (Tag::Dvitiya, "dvitIyAviBaktiH"),
    (Tag::Tritiya, "tftIyAviBaktiH"),
    (Tag::Chaturthi, "caturTIviBaktiH"),
    (Tag::Panchami, "paYcamIviBaktiH"),
    (Tag::Shashthi, "zazWIviBaktiH"),
    (Tag::Saptami, "saptamIviBaktiH"),
    (Tag::Sambodhana, "saMboDanaviBaktiH"),
    (Tag::Ekavacana, "ekavacanam"),
    (Tag::Dvivacana, "dvivacanam"),
    (Tag::Bahuvacana, "bahuvacanam"),
    (Tag::PrathamaPurusha, "praTamapuruzaH"),
    (Tag::MadhyamaPurusha, "maDyamapuruzaH"),
    (Tag::UttamaPurusha, "uttamapuruzaH"),
    (Tag::Pumlinga, "puMlliNgam"),
    (Tag::Napumsakalinga, "napuMsakaliNgam"),
    (Tag::Strilinga, "strIliNgam"),
    (Tag::Trilinga, "triliNgam"),
    (Tag::Lat, "law"),
    (Tag::Lit, "liw"),
    (Tag::Lut, "luw"),
    (Tag::Lrt, "lrw"),
    (Tag::Lot, "low"),
    (Tag::Lan, "laN"),
    (Tag::Lin, "liN"),
    (Tag::Lun, "luN"),
    (Tag::Lrn, "lfN"),
    (Tag::VidhiLin, "viDiliN"),
    (Tag::AshirLin, "ASIrliN"),
    (Tag::Ktva, "ktvA"),
    (Tag::Shatr, "Satf"),
    (Tag::Shanac, "Sanac"),
    (Tag::Tumun, "tumun"),
    (Tag::Kta, "kta"),
    (Tag::Ktavatu, "ktavatu"),
    (Tag::Lyap, "lyap"),
    (Tag::Upasarga, "upasargaH"),
    (Tag::Karmapravachaniya, "karmapravacanIyaH"),
    (Tag::Avyaya, "avyayam"),
    (Tag::Kriyavisheshana, "kriyAviSezaRam"),
    (Tag::Nijanta, "RijantaH"),
    (Tag::Karmani, "karmaRi"),
    (Tag::SamasaPurvapada, "samAsapUrvapadanAmapadam"),
    (Tag::Samyojaka, "saMyojakaH"),
    (Tag::AvyayaDhatuRupa, "avyayaDAturUpa"),
];

impl Tag {
    /// The canonical SLP1 spelling of this tag.
    pub fn as_str(self) -> &'static str {
        TAG_STRINGS[self as usize].1
    }

    /// All tags, in declaration order.
    pub fn all() -> impl Iterator<Item = Tag> {
        TAG_STRINGS.iter().map(|&(t, _)| t)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognized tag spellings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag(pub String);

impl fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown morphological tag '{}'", self.0)
    }
}

impl std::error::Error for UnknownTag {}

impl FromStr for Tag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TAG_STRINGS
            .iter()
            .find(|&&(_, name)| name == s)
            .map(|&(t, _)| t)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

/// A set of [`Tag`]s as a 64-bit bitset.
///
/// Category checks are mask intersections; agreement checks compare masked
/// bits directly, so "no vacana present" on both sides compares equal —
/// the same semantics as comparing two empty intersection sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagBits(u64);

const fn mask(tags: &[Tag]) -> TagBits {
    let mut bits = 0u64;
    let mut i = 0;
    while i < tags.len() {
        bits |= 1u64 << (tags[i] as u8);
        i += 1;
    }
    TagBits(bits)
}

impl TagBits {
    pub const VIBHAKTI: TagBits = mask(&[
        Tag::Prathama,
        Tag::Dvitiya,
        Tag::Tritiya,
        Tag::Chaturthi,
        Tag::Panchami,
        Tag::Shashthi,
        Tag::Saptami,
        Tag::Sambodhana,
    ]);
    pub const VACANA: TagBits = mask(&[Tag::Ekavacana, Tag::Dvivacana, Tag::Bahuvacana]);
    pub const PURUSHA: TagBits = mask(&[
        Tag::PrathamaPurusha,
        Tag::MadhyamaPurusha,
        Tag::UttamaPurusha,
    ]);
    pub const LINGA: TagBits = mask(&[
        Tag::Pumlinga,
        Tag::Napumsakalinga,
        Tag::Strilinga,
        Tag::Trilinga,
    ]);
    pub const LAKARA: TagBits = mask(&[
        Tag::Lat,
        Tag::Lit,
        Tag::Lut,
        Tag::Lrt,
        Tag::Lot,
        Tag::Lan,
        Tag::Lin,
        Tag::Lun,
        Tag::Lrn,
        Tag::VidhiLin,
        Tag::AshirLin,
    ]);
    pub const KRT: TagBits = mask(&[
        Tag::Ktva,
        Tag::Shatr,
        Tag::Shanac,
        Tag::Tumun,
        Tag::Kta,
        Tag::Ktavatu,
        Tag::Lyap,
    ]);
    /// Participles denoting prior action.
    pub const PURVAKALA: TagBits = mask(&[Tag::Ktva, Tag::Lyap]);
    /// Participles denoting simultaneous action.
    pub const SAMANAKALA: TagBits = mask(&[Tag::Shatr, Tag::Shanac]);

    pub fn new() -> TagBits {
        TagBits(0)
    }

    pub fn single(tag: Tag) -> TagBits {
        TagBits(1u64 << (tag as u8))
    }

    pub fn insert(&mut self, tag: Tag) {
        self.0 |= 1u64 << (tag as u8);
    }

    pub fn contains(self, tag: Tag) -> bool {
        self.0 & (1u64 << (tag as u8)) != 0
    }

    pub fn intersects(self, other: TagBits) -> bool {
        self.0 & other.0 != 0
    }

    pub fn intersection(self, other: TagBits) -> TagBits {
        TagBits(self.0 & other.0)
    }

    pub fn union(self, other: TagBits) -> TagBits {
        TagBits(self.0 | other.0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// The vibhakti bits of this set.
    pub fn vibhakti(self) -> TagBits {
        self.intersection(Self::VIBHAKTI)
    }

    /// The vacana bits of this set.
    pub fn vacana(self) -> TagBits {
        self.intersection(Self::VACANA)
    }

    /// The liṅga bits of this set.
    pub fn linga(self) -> TagBits {
        self.intersection(Self::LINGA)
    }

    /// The puruṣa bits of this set.
    pub fn purusha(self) -> TagBits {
        self.intersection(Self::PURUSHA)
    }

    pub fn iter(self) -> impl Iterator<Item = Tag> {
        Tag::all().filter(move |&t| self.contains(t))
    }
}

impl FromIterator<Tag> for TagBits {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        let mut bits = TagBits::new();
        for t in iter {
            bits.insert(t);
        }
        bits
    }
}

impl fmt::Display for TagBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for t in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(t.as_str())?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spellings_round_trip() {
        for tag in Tag::all() {
            assert_eq!(tag.as_str().parse::<Tag>().unwrap(), tag);
        }
    }

    #[test]
    fn unknown_spelling_is_rejected() {
        assert!("saptamI".parse::<Tag>().is_err());
    }

    #[test]
    fn category_masks_are_disjoint() {
        let cats = [
            TagBits::VIBHAKTI,
            TagBits::VACANA,
            TagBits::PURUSHA,
            TagBits::LINGA,
            TagBits::LAKARA,
            TagBits::KRT,
        ];
        for (i, a) in cats.iter().enumerate() {
            for b in &cats[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn masked_accessors() {
        let bits: TagBits = [Tag::Prathama, Tag::Ekavacana, Tag::Pumlinga]
            .into_iter()
            .collect();
        assert_eq!(bits.vibhakti(), TagBits::single(Tag::Prathama));
        assert_eq!(bits.vacana(), TagBits::single(Tag::Ekavacana));
        assert_eq!(bits.linga(), TagBits::single(Tag::Pumlinga));
        assert!(bits.purusha().is_empty());
    }

    #[test]
    fn empty_category_bits_compare_equal() {
        // Two readings with no vacana at all agree in vacana.
        let a = TagBits::single(Tag::Avyaya);
        let b = TagBits::single(Tag::Upasarga);
        assert_eq!(a.vacana(), b.vacana());
    }
}
