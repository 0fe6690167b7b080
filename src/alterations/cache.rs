//! Word frequency cache shared by every alteration call of a run

use parking_lot::{RwLock, RwLockWriteGuard};
use std::collections::HashMap;

/// Counts how often each word has been seen as a label prefix or suffix.
///
/// Counts never decrease and words are never removed. Writers take the
/// exclusive lock; every walk over the counters holds the shared lock until
/// it finishes.
#[derive(Debug, Default)]
pub struct FrequencyCache {
    counters: RwLock<HashMap<String, u64>>,
}

impl FrequencyCache {
    /// Create a cache holding every seed word at count 0
    pub fn new<I, S>(seed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let counters = seed.into_iter().map(|word| (word.into(), 0)).collect();
        Self {
            counters: RwLock::new(counters),
        }
    }

    /// Record one more sighting of `word` and return its new count
    pub fn update(&self, word: &str) -> u64 {
        let mut counters = self.counters.write();
        bump(&mut counters, word)
    }

    /// Record `word`, then visit every word whose count reaches `min_count`.
    ///
    /// The write lock is downgraded rather than released, so the walk always
    /// sees the update it follows.
    pub fn update_then_for_each<F>(&self, word: &str, min_count: u64, mut visit: F) -> u64
    where
        F: FnMut(&str),
    {
        let mut counters = self.counters.write();
        let count = bump(&mut counters, word);

        let counters = RwLockWriteGuard::downgrade(counters);
        for (word, _) in counters.iter().filter(|(_, &c)| c >= min_count) {
            visit(word);
        }

        count
    }

    /// Visit every word whose count reaches `min_count` under the shared lock
    pub fn for_each_qualifying<F>(&self, min_count: u64, mut visit: F)
    where
        F: FnMut(&str),
    {
        let counters = self.counters.read();
        for (word, _) in counters.iter().filter(|(_, &c)| c >= min_count) {
            visit(word);
        }
    }

    /// Owned list of the words whose count reaches `min_count`
    pub fn qualifying(&self, min_count: u64) -> Vec<String> {
        let mut words = Vec::new();
        self.for_each_qualifying(min_count, |word| words.push(word.to_string()));
        words
    }

    /// Current count for `word`, `None` if it was never seeded or seen
    pub fn count(&self, word: &str) -> Option<u64> {
        self.counters.read().get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counters.read().contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.counters.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.read().is_empty()
    }

    /// Copy of the counters, for reporting
    pub fn snapshot(&self) -> HashMap<String, u64> {
        self.counters.read().clone()
    }
}

fn bump(counters: &mut HashMap<String, u64>, word: &str) -> u64 {
    match counters.get_mut(word) {
        Some(count) => {
            *count += 1;
            *count
        }
        None => {
            counters.insert(word.to_string(), 1);
            1
        }
    }
}
