use anvaya_types::{Tag, TagBits};

#[test]
fn vocabulary_is_complete() {
    assert_eq!(Tag::all().count(), 45);
    assert_eq!(TagBits::VIBHAKTI.len(), 8);
    assert_eq!(TagBits::VACANA.len(), 3);
    assert_eq!(TagBits::PURUSHA.len(), 3);
    assert_eq!(TagBits::LINGA.len(), 4);
    assert_eq!(TagBits::LAKARA.len(), 11);
    assert_eq!(TagBits::KRT.len(), 7);
}

#[test]
fn subcategory_masks_nest() {
    assert_eq!(
        TagBits::PURVAKALA.intersection(TagBits::KRT),
        TagBits::PURVAKALA
    );
    assert_eq!(
        TagBits::SAMANAKALA.intersection(TagBits::KRT),
        TagBits::SAMANAKALA
    );
}

#[test]
fn spellings_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for tag in Tag::all() {
        assert!(seen.insert(tag.as_str()), "duplicate spelling {tag}");
    }
}
