//! Per-term frequency lists: term -> {doc_id: tf}.
//!
//! The collection frequency is kept up to date on every change so corpus
//! lookups never walk the list.
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingList {
    freqs: BTreeMap<u64, u64>,
    cf: u64,
}

impl PostingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `tf` occurrences in `doc_id`, replacing any earlier count.
    pub fn set(&mut self, doc_id: u64, tf: u64) {
        if let Some(old) = self.freqs.insert(doc_id, tf) {
            self.cf -= old;
        }
        self.cf += tf;
    }

    pub fn remove(&mut self, doc_id: u64) {
        if let Some(old) = self.freqs.remove(&doc_id) {
            self.cf -= old;
        }
    }

    /// Collection frequency (occurrences of this term across all documents).
    pub fn cf(&self) -> u64 {
        self.cf
    }

    pub fn is_empty(&self) -> bool {
        self.freqs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cf_tracks_sets() {
        let mut pl = PostingList::new();
        pl.set(1, 3);
        pl.set(2, 2);
        assert_eq!(pl.cf(), 5);
    }

    #[test]
    fn test_set_replaces_previous_count() {
        let mut pl = PostingList::new();
        pl.set(1, 3);
        pl.set(1, 1);
        assert_eq!(pl.cf(), 1);
    }

    #[test]
    fn test_remove() {
        let mut pl = PostingList::new();
        pl.set(1, 4);
        pl.set(2, 1);
        pl.remove(1);
        pl.remove(42);
        assert_eq!(pl.cf(), 1);
        pl.remove(2);
        assert!(pl.is_empty());
        assert_eq!(pl.cf(), 0);
    }
}
