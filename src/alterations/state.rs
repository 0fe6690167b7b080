//! Shared alteration state

use super::cache::FrequencyCache;
use crate::error::Result;
use crate::stringset::StringSet;
use crate::types::{Alteration, AlterationConfig};

/// Word caches plus the knobs every alteration technique reads.
///
/// One instance is meant to be shared (usually behind an `Arc`) by all the
/// workers of a run so the caches learn from every processed name. Separate
/// runs build separate states.
#[derive(Debug)]
pub struct MutationState {
    min_for_word_flip: u64,
    edit_distance: usize,
    pub(super) prefixes: FrequencyCache,
    pub(super) suffixes: FrequencyCache,
}

impl MutationState {
    /// Create a state seeded with `wordlist` and default settings
    pub fn new<S: AsRef<str>>(wordlist: &[S]) -> Self {
        let defaults = AlterationConfig::default();
        Self {
            min_for_word_flip: defaults.min_for_word_flip,
            edit_distance: defaults.edit_distance,
            prefixes: FrequencyCache::new(wordlist.iter().map(|w| w.as_ref().to_string())),
            suffixes: FrequencyCache::new(wordlist.iter().map(|w| w.as_ref().to_string())),
        }
    }

    /// Create a state using the thresholds from `config`
    pub fn from_config<S: AsRef<str>>(config: &AlterationConfig, wordlist: &[S]) -> Self {
        Self::new(wordlist)
            .with_min_for_word_flip(config.min_for_word_flip)
            .with_edit_distance(config.edit_distance)
    }

    pub fn with_min_for_word_flip(mut self, min: u64) -> Self {
        self.min_for_word_flip = min;
        self
    }

    pub fn with_edit_distance(mut self, rounds: usize) -> Self {
        self.edit_distance = rounds;
        self
    }

    pub fn min_for_word_flip(&self) -> u64 {
        self.min_for_word_flip
    }

    pub fn edit_distance(&self) -> usize {
        self.edit_distance
    }

    /// Cache of words seen at the start of labels
    pub fn prefixes(&self) -> &FrequencyCache {
        &self.prefixes
    }

    /// Cache of words seen at the end of labels
    pub fn suffixes(&self) -> &FrequencyCache {
        &self.suffixes
    }

    /// Run a single alteration technique against `name`
    pub fn apply(&self, alteration: Alteration, name: &str) -> Result<StringSet> {
        let result = match alteration {
            Alteration::FlipWords => self.flip_words(name),
            Alteration::FlipNumbers => self.flip_numbers(name),
            Alteration::AppendNumbers => self.append_numbers(name),
            Alteration::AddSuffixWord => self.add_suffix_word(name),
            Alteration::AddPrefixWord => self.add_prefix_word(name),
            Alteration::FuzzyLabelSearch => self.fuzzy_label_searches(name),
        };

        match &result {
            Ok(names) => tracing::debug!(
                alteration = %alteration,
                name = %name,
                generated = %names.len(),
                "Alteration completed"
            ),
            Err(e) => tracing::warn!(alteration = %alteration, name = %name, error = %e, "Alteration rejected name"),
        }

        result
    }

    /// Run several techniques against `name` and merge their output.
    ///
    /// A malformed name fails the first technique, so nothing is generated
    /// and no cache is touched.
    pub fn generate(&self, name: &str, alterations: &[Alteration]) -> Result<StringSet> {
        let mut names = StringSet::new();
        for &alteration in alterations {
            names.extend(self.apply(alteration, name)?);
        }
        Ok(names)
    }
}
