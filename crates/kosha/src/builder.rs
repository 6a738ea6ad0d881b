use fst::SetBuilder;

/// Build an fst set over the given words (sorted and deduplicated here).
pub(crate) fn build_fst_set(words: &[&str]) -> Vec<u8> {
    let mut sorted: Vec<&str> = words.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut builder = SetBuilder::memory();
    for word in sorted {
        builder.insert(word).expect("words are sorted and unique");
    }
    builder.into_inner().expect("in-memory fst build cannot fail")
}
