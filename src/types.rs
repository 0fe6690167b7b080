//! Core types and configuration for domain-alterations

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{AlterationError, Result};

/// Alteration technique
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alteration {
    /// Swap the first and last hyphen-separated words for cached ones
    FlipWords,
    /// Flip and drop digits in the label
    FlipNumbers,
    /// Append a single digit to the label
    AppendNumbers,
    /// Append a cached suffix word to the label
    AddSuffixWord,
    /// Prepend a cached prefix word to the label
    AddPrefixWord,
    /// Edit-distance fuzzing over the LDH alphabet
    FuzzyLabelSearch,
}

impl Alteration {
    pub const ALL: [Alteration; 6] = [
        Alteration::FlipWords,
        Alteration::FlipNumbers,
        Alteration::AppendNumbers,
        Alteration::AddSuffixWord,
        Alteration::AddPrefixWord,
        Alteration::FuzzyLabelSearch,
    ];

    /// Whether this technique writes to the frequency caches
    pub fn updates_cache(&self) -> bool {
        matches!(self, Alteration::FlipWords)
    }
}

impl std::fmt::Display for Alteration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Alteration::FlipWords => write!(f, "flip_words"),
            Alteration::FlipNumbers => write!(f, "flip_numbers"),
            Alteration::AppendNumbers => write!(f, "append_numbers"),
            Alteration::AddSuffixWord => write!(f, "add_suffix_word"),
            Alteration::AddPrefixWord => write!(f, "add_prefix_word"),
            Alteration::FuzzyLabelSearch => write!(f, "fuzzy_label_search"),
        }
    }
}

impl FromStr for Alteration {
    type Err = AlterationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "flip_words" => Ok(Alteration::FlipWords),
            "flip_numbers" => Ok(Alteration::FlipNumbers),
            "append_numbers" | "add_numbers" => Ok(Alteration::AppendNumbers),
            "add_suffix_word" => Ok(Alteration::AddSuffixWord),
            "add_prefix_word" => Ok(Alteration::AddPrefixWord),
            "fuzzy_label_search" | "fuzzy" => Ok(Alteration::FuzzyLabelSearch),
            other => Err(crate::config_error!("Unknown alteration: {}", other)),
        }
    }
}

/// Configuration for the alteration engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlterationConfig {
    /// Minimum count a cached word needs before it is used for flips/appends
    pub min_for_word_flip: u64,
    /// Number of edit rounds for fuzzy label searches (0 disables fuzzing)
    pub edit_distance: usize,
    pub flip_words: bool,
    pub flip_numbers: bool,
    /// Enables both the suffix and prefix word appends
    pub add_words: bool,
    pub add_numbers: bool,
    /// Seed vocabulary file; the built-in list is used when absent
    pub wordlist: Option<PathBuf>,
    /// Concurrent generator calls in the pipeline
    pub concurrency: usize,
}

impl Default for AlterationConfig {
    fn default() -> Self {
        Self {
            min_for_word_flip: 3,
            edit_distance: 1,
            flip_words: true,
            flip_numbers: true,
            add_words: true,
            add_numbers: true,
            wordlist: None,
            concurrency: 20,
        }
    }
}

impl AlterationConfig {
    /// Load configuration from a JSON file. Missing fields take defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AlterationError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;

        let config: Self = serde_json::from_str(&content)
            .map_err(|e| AlterationError::parse(e.to_string(), Some(content)))?;
        config.validate()?;
        Ok(config)
    }

    /// Build configuration from defaults overridden by `ALTERATIONS_*` variables
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a variable lookup (the environment in production)
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("ALTERATIONS_MIN_FOR_WORD_FLIP") {
            self.min_for_word_flip = parse_var("ALTERATIONS_MIN_FOR_WORD_FLIP", &v)?;
        }
        if let Some(v) = lookup("ALTERATIONS_EDIT_DISTANCE") {
            self.edit_distance = parse_var("ALTERATIONS_EDIT_DISTANCE", &v)?;
        }
        if let Some(v) = lookup("ALTERATIONS_FLIP_WORDS") {
            self.flip_words = parse_var("ALTERATIONS_FLIP_WORDS", &v)?;
        }
        if let Some(v) = lookup("ALTERATIONS_FLIP_NUMBERS") {
            self.flip_numbers = parse_var("ALTERATIONS_FLIP_NUMBERS", &v)?;
        }
        if let Some(v) = lookup("ALTERATIONS_ADD_WORDS") {
            self.add_words = parse_var("ALTERATIONS_ADD_WORDS", &v)?;
        }
        if let Some(v) = lookup("ALTERATIONS_ADD_NUMBERS") {
            self.add_numbers = parse_var("ALTERATIONS_ADD_NUMBERS", &v)?;
        }
        if let Some(v) = lookup("ALTERATIONS_WORDLIST") {
            self.wordlist = Some(PathBuf::from(v));
        }
        if let Some(v) = lookup("ALTERATIONS_CONCURRENCY") {
            self.concurrency = parse_var("ALTERATIONS_CONCURRENCY", &v)?;
        }

        self.validate()?;
        Ok(self)
    }

    /// Check values that would stall or break the pipeline
    pub fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            return Err(crate::config_error!("concurrency must be at least 1"));
        }
        if self.concurrency > tokio::sync::Semaphore::MAX_PERMITS {
            return Err(crate::config_error!(
                "concurrency must not exceed {}",
                tokio::sync::Semaphore::MAX_PERMITS
            ));
        }
        if self.edit_distance > 2 {
            tracing::warn!(
                edit_distance = %self.edit_distance,
                "Large edit distance, fuzzy label searches grow combinatorially"
            );
        }
        Ok(())
    }

    /// Alterations switched on by this configuration
    pub fn enabled(&self) -> Vec<Alteration> {
        let mut enabled = Vec::new();
        if self.flip_words {
            enabled.push(Alteration::FlipWords);
        }
        if self.flip_numbers {
            enabled.push(Alteration::FlipNumbers);
        }
        if self.add_numbers {
            enabled.push(Alteration::AppendNumbers);
        }
        if self.add_words {
            enabled.push(Alteration::AddSuffixWord);
            enabled.push(Alteration::AddPrefixWord);
        }
        if self.edit_distance > 0 {
            enabled.push(Alteration::FuzzyLabelSearch);
        }
        enabled
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| crate::config_error!("Invalid value for {}: '{}'", key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_alteration_round_trip_names() {
        for alteration in Alteration::ALL {
            let parsed: Alteration = alteration.to_string().parse().unwrap();
            assert_eq!(parsed, alteration);
        }
        assert_eq!("fuzzy".parse::<Alteration>().unwrap(), Alteration::FuzzyLabelSearch);
        assert!("teleport".parse::<Alteration>().is_err());
    }

    #[test]
    fn test_only_flip_words_updates_cache() {
        let learning: Vec<_> = Alteration::ALL.into_iter().filter(Alteration::updates_cache).collect();
        assert_eq!(learning, vec![Alteration::FlipWords]);
    }

    #[test]
    fn test_default_config() {
        let config = AlterationConfig::default();
        assert_eq!(config.min_for_word_flip, 3);
        assert_eq!(config.edit_distance, 1);
        assert_eq!(config.enabled(), Alteration::ALL.to_vec());
    }

    #[test]
    fn test_enabled_respects_toggles() {
        let config = AlterationConfig {
            flip_words: false,
            add_words: false,
            edit_distance: 0,
            ..Default::default()
        };
        assert_eq!(
            config.enabled(),
            vec![Alteration::FlipNumbers, Alteration::AppendNumbers]
        );
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("ALTERATIONS_MIN_FOR_WORD_FLIP", "1"),
            ("ALTERATIONS_EDIT_DISTANCE", "0"),
            ("ALTERATIONS_ADD_NUMBERS", "false"),
        ]
        .into_iter()
        .collect();

        let config = AlterationConfig::default()
            .with_env_overrides(|k| vars.get(k).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.min_for_word_flip, 1);
        assert_eq!(config.edit_distance, 0);
        assert!(!config.add_numbers);
        assert!(config.flip_words);
    }

    #[test]
    fn test_env_override_rejects_garbage() {
        let result = AlterationConfig::default().with_env_overrides(|k| {
            (k == "ALTERATIONS_EDIT_DISTANCE").then(|| "-1".to_string())
        });
        assert!(matches!(result, Err(AlterationError::Config { .. })));
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let config = AlterationConfig {
            concurrency: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_concurrency_rejected() {
        let result = AlterationConfig::default().with_env_overrides(|k| {
            (k == "ALTERATIONS_CONCURRENCY").then(|| usize::MAX.to_string())
        });
        assert!(matches!(result, Err(AlterationError::Config { .. })));
    }

    #[test]
    fn test_load_partial_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alterations.json");
        std::fs::write(&path, r#"{"min_for_word_flip": 2, "flip_numbers": false}"#).unwrap();

        let config = AlterationConfig::load(&path).unwrap();
        assert_eq!(config.min_for_word_flip, 2);
        assert!(!config.flip_numbers);
        assert_eq!(config.edit_distance, 1);
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            AlterationConfig::load(&path),
            Err(AlterationError::Parse { .. })
        ));
    }
}
