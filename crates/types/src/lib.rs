mod morph;
mod relation;
mod tag;
mod words;

pub use morph::{Morph, SurfaceForm};

/// Transitivity oracle, consulted per verb when assigning karma.
pub trait DhatuKosha {
    fn is_sakarmaka(&self, dhatu: &str) -> bool;
}
pub use relation::{EdgeLabel, Relation};
pub use tag::{Tag, TagBits, UnknownTag};
pub use words::{
    AVYAYA_KRIYAVISHESHANA, COPULA_DHATUS, KARMAPRAVACHANIYA_DVITIYA, KARMAPRAVACHANIYA_NULL,
    KARMAPRAVACHANIYA_PANCHAMI, NISHEDHA_BASES, conjunction_partner, is_conjunction_base,
};
