use anvaya_types::{Morph, SurfaceForm, Tag, TagBits};

/// One tagged word occurrence at a sentence position.
///
/// Nodes sharing a position index are alternative readings of the same
/// surface token and can never appear together in one parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VakyaNode {
    pub pada: SurfaceForm,
    pub morph: Morph,
    pub index: usize,
}

impl VakyaNode {
    pub fn new(pada: SurfaceForm, morph: Morph, index: usize) -> VakyaNode {
        VakyaNode { pada, morph, index }
    }

    pub fn base(&self) -> &str {
        &self.morph.base
    }

    /// Does this node carry the given tag?
    pub fn is_a(&self, tag: Tag) -> bool {
        self.morph.tags.contains(tag)
    }

    /// Does this node carry any tag from the given set?
    pub fn is_any(&self, tags: TagBits) -> bool {
        self.morph.tags.intersects(tags)
    }

    pub fn is_lakara(&self) -> bool {
        self.is_any(TagBits::LAKARA)
    }

    pub fn is_krt(&self) -> bool {
        self.is_any(TagBits::KRT)
    }

    pub fn vibhakti(&self) -> TagBits {
        self.morph.tags.vibhakti()
    }

    pub fn vacana(&self) -> TagBits {
        self.morph.tags.vacana()
    }

    pub fn linga(&self) -> TagBits {
        self.morph.tags.linga()
    }

    pub fn purusha(&self) -> TagBits {
        self.morph.tags.purusha()
    }
}

/// Vacana/puruṣa agreement between a dhātu and a candidate kartā.
///
/// The noun's puruṣa comes from its base: asmad is uttama, yuṣmad is
/// madhyama, everything else is prathama.
pub fn match_purusha_vacana(d: &VakyaNode, n: &VakyaNode) -> bool {
    let n_purusha = match n.base() {
        "asmad" => Tag::UttamaPurusha,
        "yuzmad" => Tag::MadhyamaPurusha,
        _ => Tag::PrathamaPurusha,
    };
    d.vacana() == n.vacana() && d.purusha() == TagBits::single(n_purusha)
}

/// Liṅga/vacana agreement between two nodes.
pub fn match_linga_vacana(a: &VakyaNode, b: &VakyaNode) -> bool {
    a.vacana() == b.vacana() && a.linga() == b.linga()
}

/// Full viśeṣaṇa agreement: liṅga, vacana, and vibhakti.
pub fn match_linga_vacana_vibhakti(a: &VakyaNode, b: &VakyaNode) -> bool {
    a.vacana() == b.vacana() && a.linga() == b.linga() && a.vibhakti() == b.vibhakti()
}

/// A sambodhana noun is addressed by a madhyama verb of matching vacana.
pub fn check_sambodhya(d: &VakyaNode, n: &VakyaNode) -> bool {
    d.vacana() == n.vacana() && d.purusha() == TagBits::single(Tag::MadhyamaPurusha)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(base: &str, tags: &[Tag], index: usize) -> VakyaNode {
        VakyaNode::new(
            SurfaceForm::new(base),
            Morph::new(base, tags.iter().copied().collect()),
            index,
        )
    }

    #[test]
    fn third_person_agreement() {
        let verb = node(
            "tf",
            &[Tag::Lat, Tag::PrathamaPurusha, Tag::Ekavacana],
            1,
        );
        let noun = node("rAma", &[Tag::Prathama, Tag::Ekavacana, Tag::Pumlinga], 0);
        assert!(match_purusha_vacana(&verb, &noun));
    }

    #[test]
    fn asmad_needs_uttama() {
        let verb3 = node(
            "gam",
            &[Tag::Lat, Tag::PrathamaPurusha, Tag::Ekavacana],
            1,
        );
        let verb1 = node("gam", &[Tag::Lat, Tag::UttamaPurusha, Tag::Ekavacana], 1);
        let aham = node("asmad", &[Tag::Prathama, Tag::Ekavacana], 0);
        assert!(!match_purusha_vacana(&verb3, &aham));
        assert!(match_purusha_vacana(&verb1, &aham));
    }

    #[test]
    fn vacana_mismatch_fails() {
        let verb = node(
            "kf",
            &[Tag::Lan, Tag::PrathamaPurusha, Tag::Bahuvacana],
            1,
        );
        let noun = node("rAma", &[Tag::Prathama, Tag::Ekavacana, Tag::Pumlinga], 0);
        assert!(!match_purusha_vacana(&verb, &noun));
    }

    #[test]
    fn visheshana_agreement_needs_all_three() {
        let a = node("mAmaka", &[Tag::Prathama, Tag::Bahuvacana, Tag::Pumlinga], 0);
        let b = node(
            "pANDava",
            &[Tag::Prathama, Tag::Bahuvacana, Tag::Pumlinga],
            1,
        );
        let c = node("jala", &[Tag::Dvitiya, Tag::Bahuvacana, Tag::Pumlinga], 2);
        assert!(match_linga_vacana_vibhakti(&a, &b));
        assert!(!match_linga_vacana_vibhakti(&a, &c));
        assert!(match_linga_vacana(&a, &c));
    }

    #[test]
    fn sambodhya_needs_madhyama_verb() {
        let verb3 = node(
            "kf",
            &[Tag::Lan, Tag::PrathamaPurusha, Tag::Bahuvacana],
            1,
        );
        let verb2 = node("kf", &[Tag::Lan, Tag::MadhyamaPurusha, Tag::Ekavacana], 1);
        let voc = node("saMjaya", &[Tag::Sambodhana, Tag::Ekavacana], 0);
        assert!(!check_sambodhya(&verb3, &voc));
        assert!(check_sambodhya(&verb2, &voc));
    }
}
