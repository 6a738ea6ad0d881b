use anvaya_vakya::DisjointSet;
use proptest::prelude::*;

const N: u32 = 16;

proptest! {
    /// A snapshot followed by identical operations answers `connected`
    /// identically to the original.
    #[test]
    fn copy_tracks_original(
        before in prop::collection::vec((0..N, 0..N), 0..24),
        after in prop::collection::vec((0..N, 0..N), 0..24),
        queries in prop::collection::vec((0..N, 0..N), 0..32),
    ) {
        let mut original = DisjointSet::new(N as usize);
        for &(a, b) in &before {
            original.union(a, b);
        }
        let mut snapshot = original.copy();
        for &(a, b) in &after {
            original.union(a, b);
            snapshot.union(a, b);
        }
        for &(a, b) in &queries {
            prop_assert_eq!(original.connected(a, b), snapshot.connected(a, b));
        }
    }

    /// Mutating a snapshot never disturbs the original.
    #[test]
    fn snapshot_is_isolated(
        before in prop::collection::vec((0..N, 0..N), 0..24),
        extra in prop::collection::vec((0..N, 0..N), 1..24),
    ) {
        let mut original = DisjointSet::new(N as usize);
        for &(a, b) in &before {
            original.union(a, b);
        }
        let mut reference = original.copy();
        let mut snapshot = original.copy();
        for &(a, b) in &extra {
            snapshot.union(a, b);
        }
        for a in 0..N {
            for b in 0..N {
                prop_assert_eq!(original.connected(a, b), reference.connected(a, b));
            }
        }
    }
}
