use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Maps the basename of a recording to its position in a caller-supplied list.
///
/// When the list contains the same basename more than once, the first position wins.
#[derive(Clone, Debug, Default)]
pub struct BasenameIndex {
    positions: HashMap<String, usize>,
}

impl BasenameIndex {
    pub fn new<S: AsRef<str>>(basenames: &[S]) -> Self {
        let mut positions = HashMap::with_capacity(basenames.len());
        for (position, basename) in basenames.iter().enumerate() {
            match positions.entry(basename.as_ref().to_owned()) {
                Entry::Vacant(entry) => {
                    entry.insert(position);
                }
                Entry::Occupied(entry) => {
                    warn!(
                        "Basename {:?} is listed at positions {} and {}, using {}.",
                        entry.key(),
                        entry.get(),
                        position,
                        entry.get()
                    );
                }
            }
        }
        Self { positions }
    }

    /// The position of `basename` in the list the index was built from, if present.
    pub fn index_of(&self, basename: &str) -> Option<usize> {
        self.positions.get(basename).copied()
    }

    /// The number of distinct basenames.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[test]
fn basename_index_maps_names_to_positions() {
    let index = BasenameIndex::new(&["A.h5", "B.h5"]);
    assert_eq!(index.index_of("A.h5"), Some(0));
    assert_eq!(index.index_of("B.h5"), Some(1));
    assert_eq!(index.index_of("C.h5"), None);
}

#[test]
fn basename_index_first_duplicate_wins() {
    let basenames = vec![
        String::from("A.h5"),
        String::from("B.h5"),
        String::from("A.h5"),
    ];
    let index = BasenameIndex::new(&basenames);
    assert_eq!(index.index_of("A.h5"), Some(0));
    assert_eq!(index.len(), 2);
}

#[test]
fn basename_index_matches_exactly() {
    let index = BasenameIndex::new(&["A.h5"]);
    assert_eq!(index.index_of("a.h5"), None);
    assert_eq!(index.index_of("A.h5 "), None);
}
