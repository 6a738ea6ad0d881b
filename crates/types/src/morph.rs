use std::fmt;

use crate::tag::TagBits;

/// An immutable transliterated word form (SLP1).
///
/// Equality and hashing are by the canonical text, so the same surface at
/// two sentence positions compares equal; position identity lives in the
/// graphs, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceForm {
    text: String,
}

impl SurfaceForm {
    pub fn new(text: impl Into<String>) -> SurfaceForm {
        SurfaceForm { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for SurfaceForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for SurfaceForm {
    fn from(s: &str) -> SurfaceForm {
        SurfaceForm::new(s)
    }
}

/// One candidate morphological reading: a base form plus feature tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Morph {
    pub base: String,
    pub tags: TagBits,
}

impl Morph {
    pub fn new(base: impl Into<String>, tags: TagBits) -> Morph {
        Morph {
            base: base.into(),
            tags,
        }
    }

    /// The dhātu part of the base, with any homonym marker (`tF#1`)
    /// stripped.
    pub fn dhatu(&self) -> &str {
        match self.base.find('#') {
            Some(pos) => &self.base[..pos],
            None => &self.base,
        }
    }
}

impl fmt::Display for Morph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.base, self.tags)
    }
}
