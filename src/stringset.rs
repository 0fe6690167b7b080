//! Deduplicating set of generated names

use std::collections::hash_set;
use std::collections::HashSet;

/// Unordered set of unique names produced by the alteration techniques
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringSet {
    inner: HashSet<String>,
}

impl StringSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashSet::with_capacity(capacity),
        }
    }

    /// Insert one name, returning false if it was already present
    pub fn insert(&mut self, item: impl Into<String>) -> bool {
        self.inner.insert(item.into())
    }

    pub fn insert_many<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.extend(items.into_iter().map(Into::into));
    }

    pub fn contains(&self, item: &str) -> bool {
        self.inner.contains(item)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.inner.iter()
    }

    /// Export the names in arbitrary order
    pub fn export(self) -> Vec<String> {
        self.inner.into_iter().collect()
    }

    /// Export the names sorted, for stable output
    pub fn export_sorted(self) -> Vec<String> {
        let mut names = self.export();
        names.sort_unstable();
        names
    }
}

impl Extend<String> for StringSet {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        self.inner.extend(iter);
    }
}

impl FromIterator<String> for StringSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for StringSet {
    type Item = String;
    type IntoIter = hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a StringSet {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_dedups() {
        let mut set = StringSet::new();
        assert!(set.insert("a.example.com"));
        assert!(!set.insert("a.example.com".to_string()));
        set.insert_many(["b.example.com", "a.example.com"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("b.example.com"));
    }

    #[test]
    fn test_export_sorted() {
        let set: StringSet = ["c", "a", "b"].iter().map(|s| s.to_string()).collect();
        assert_eq!(set.export_sorted(), vec!["a", "b", "c"]);
    }
}
