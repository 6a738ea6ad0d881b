use std::fmt;

/// A grammatical relation between two sentence positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Relation {
    // Kāraka roles assigned by a verb
    Karta,
    Karma,
    Karana,
    Sampradana,
    Apadana,
    Adhikarana,
    HetuKarta,
    // Other verb-governed links
    Sambodhya,
    KartrSamanadhikarana,
    KriyaVisheshana,
    Purvakala,
    Prayojana,
    Samanakala,
    Nishedha,
    Bhavalakshana,
    // Nominal-nominal links
    Visheshana,
    Samasta,
    ShashthiSambandha,
    Vipsa,
    // Particle links
    Upasarga,
    UpapadaDvitiya,
    UpapadaPanchami,
    // Cross-clause links
    Vakyasambandha,
    Sambaddhakriya,
}

impl Relation {
    pub fn as_str(self) -> &'static str {
        match self {
            Relation::Karta => "kartA",
            Relation::Karma => "karma",
            Relation::Karana => "karaRam",
            Relation::Sampradana => "sampradAnam",
            Relation::Apadana => "apAdanam",
            Relation::Adhikarana => "aDikaraRam",
            Relation::HetuKarta => "hetu-kartA",
            Relation::Sambodhya => "samboDyam",
            Relation::KartrSamanadhikarana => "kartfsamAnADikaraRa",
            Relation::KriyaVisheshana => "kriyAviSezaRam",
            Relation::Purvakala => "pUrvakAlaH",
            Relation::Prayojana => "prayojanam",
            Relation::Samanakala => "samAnakAlaH",
            Relation::Nishedha => "nizeDa",
            Relation::Bhavalakshana => "BAvalakzaRam",
            Relation::Visheshana => "viSezaRam",
            Relation::Samasta => "samasta",
            Relation::ShashthiSambandha => "zazWI-sambanDa",
            Relation::Vipsa => "vIpsA",
            Relation::Upasarga => "upasargaH",
            Relation::UpapadaDvitiya => "upapadadvitIya",
            Relation::UpapadaPanchami => "upapadapancami",
            Relation::Vakyasambandha => "vAkyasambanDaH",
            Relation::Sambaddhakriya => "saMbadDakriyA",
        }
    }

    /// Is this one of the kāraka roles (kartā through adhikaraṇa, plus
    /// hetu-kartā)?
    pub fn is_karaka(self) -> bool {
        matches!(
            self,
            Relation::Karta
                | Relation::Karma
                | Relation::Karana
                | Relation::Sampradana
                | Relation::Apadana
                | Relation::Adhikarana
                | Relation::HetuKarta
        )
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An edge label: a relation, possibly carrying the `sambadDa-` prefix
/// produced when a conjunction node's inbound edges are reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeLabel {
    pub relation: Relation,
    pub sambaddha: bool,
}

impl EdgeLabel {
    pub fn plain(relation: Relation) -> EdgeLabel {
        EdgeLabel {
            relation,
            sambaddha: false,
        }
    }

    pub fn sambaddha(relation: Relation) -> EdgeLabel {
        EdgeLabel {
            relation,
            sambaddha: true,
        }
    }

    /// Labels with a sannidhi (adjacency) expectation: kārakas and
    /// kriyāviśeṣaṇa, plain or sambaddha, plus sambaddhakriyā. Crossing
    /// and single-governor checks apply to these.
    pub fn is_projective(self) -> bool {
        self.relation.is_karaka()
            || self.relation == Relation::KriyaVisheshana
            || self.relation == Relation::Sambaddhakriya
    }

    /// Labels of which a node may be the source at most once: the
    /// sambaddha variants of projective labels, plus sambaddhakriyā.
    pub fn is_sambaddha_class(self) -> bool {
        (self.sambaddha
            && (self.relation.is_karaka() || self.relation == Relation::KriyaVisheshana))
            || self.relation == Relation::Sambaddhakriya
    }

    /// Ordering cost multiplier. Kāraka links are preferred, kartā most
    /// of all; the sambaddha variants count as ordinary links.
    pub fn cost(self) -> f64 {
        if self.sambaddha {
            return 1.0;
        }
        match self.relation {
            Relation::Karta => 0.8,
            Relation::Karma => 0.85,
            r if r.is_karaka() => 0.9,
            _ => 1.0,
        }
    }
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sambaddha {
            write!(f, "sambadDa-{}", self.relation)
        } else {
            self.relation.fmt(f)
        }
    }
}
