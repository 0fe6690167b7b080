//! Word flips and word appends driven by the frequency caches

use super::split_name;
use super::state::MutationState;
use crate::error::Result;
use crate::stringset::StringSet;

impl MutationState {
    /// Swap the first and the last hyphen-separated words of the label for
    /// every cached word seen often enough.
    ///
    /// Both words are counted before the caches are read, so with a threshold
    /// of 1 or less the input name is part of the output.
    pub fn flip_words(&self, name: &str) -> Result<StringSet> {
        let (label, tail) = split_name(name)?;

        let parts: Vec<&str> = label.split('-').collect();
        if parts.len() < 2 {
            return Ok(StringSet::new());
        }

        let mut names = StringSet::new();

        let after_first = parts[1..].join("-");
        self.prefixes
            .update_then_for_each(parts[0], self.min_for_word_flip(), |word| {
                names.insert(format!("{}-{}.{}", word, after_first, tail));
            });

        let last = parts.len() - 1;
        let before_last = parts[..last].join("-");
        self.suffixes
            .update_then_for_each(parts[last], self.min_for_word_flip(), |word| {
                names.insert(format!("{}-{}.{}", before_last, word, tail));
            });

        Ok(names)
    }

    /// Append each qualifying suffix word to the label, directly and with a hyphen
    pub fn add_suffix_word(&self, name: &str) -> Result<StringSet> {
        let (label, tail) = split_name(name)?;

        let label = label.trim_end_matches('-');
        if label.is_empty() {
            return Ok(StringSet::new());
        }

        let mut names = StringSet::new();
        self.suffixes
            .for_each_qualifying(self.min_for_word_flip(), |word| {
                names.insert(format!("{}{}.{}", label, word, tail));
                names.insert(format!("{}-{}.{}", label, word, tail));
            });

        Ok(names)
    }

    /// Prepend each qualifying prefix word to the label, directly and with a hyphen
    pub fn add_prefix_word(&self, name: &str) -> Result<StringSet> {
        let (label, tail) = split_name(name)?;

        let label = label.trim_start_matches('-');
        if label.is_empty() {
            return Ok(StringSet::new());
        }

        let mut names = StringSet::new();
        self.prefixes
            .for_each_qualifying(self.min_for_word_flip(), |word| {
                names.insert(format!("{}{}.{}", word, label, tail));
                names.insert(format!("{}-{}.{}", word, label, tail));
            });

        Ok(names)
    }
}
