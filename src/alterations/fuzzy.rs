//! Edit-distance fuzzing of labels

use std::collections::HashSet;

use super::state::MutationState;
use super::{split_name, LDH_CHARS};
use crate::error::Result;
use crate::stringset::StringSet;

impl MutationState {
    /// Names whose label is within `edit_distance` insertions, deletions or
    /// substitutions of the input label, using the LDH alphabet.
    pub fn fuzzy_label_searches(&self, name: &str) -> Result<StringSet> {
        let (label, tail) = split_name(name)?;

        let candidates = fuzz_label(label, self.edit_distance());

        let mut names = StringSet::with_capacity(candidates.len());
        for candidate in &candidates {
            let label = candidate.trim_matches('-');
            if label.is_empty() {
                continue;
            }
            names.insert(format!("{}.{}", label, tail));
        }

        Ok(names)
    }
}

/// Every string reachable from `label` in at most `rounds` edit rounds,
/// `label` itself included.
///
/// Each round only expands the strings first reached in the round before:
/// re-expanding older strings yields nothing new.
pub fn fuzz_label(label: &str, rounds: usize) -> HashSet<String> {
    let mut seen = HashSet::new();
    seen.insert(label.to_string());

    let mut frontier = vec![label.to_string()];
    for _ in 0..rounds {
        if frontier.is_empty() {
            break;
        }

        let mut produced = additions(&frontier);
        produced.extend(deletions(&frontier));
        produced.extend(substitutions(&frontier));

        frontier = produced
            .into_iter()
            .filter(|candidate| seen.insert(candidate.clone()))
            .collect();
    }

    seen
}

/// Insert each LDH symbol at each position, both ends included
fn additions(set: &[String]) -> Vec<String> {
    let mut results = Vec::new();

    for s in set {
        let chars: Vec<char> = s.chars().collect();
        for i in 0..=chars.len() {
            for &symbol in LDH_CHARS {
                let mut candidate = String::with_capacity(s.len() + 1);
                candidate.extend(&chars[..i]);
                candidate.push(symbol);
                candidate.extend(&chars[i..]);
                results.push(candidate);
            }
        }
    }

    results
}

/// Remove each character in turn, skipping results that would be empty
fn deletions(set: &[String]) -> Vec<String> {
    let mut results = Vec::new();

    for s in set {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() < 2 {
            continue;
        }
        for i in 0..chars.len() {
            let candidate: String = chars[..i].iter().chain(&chars[i + 1..]).collect();
            results.push(candidate);
        }
    }

    results
}

/// Replace each character with each LDH symbol, itself included
fn substitutions(set: &[String]) -> Vec<String> {
    let mut results = Vec::new();

    for s in set {
        let chars: Vec<char> = s.chars().collect();
        for i in 0..chars.len() {
            for &symbol in LDH_CHARS {
                let candidate: String = chars[..i]
                    .iter()
                    .copied()
                    .chain(std::iter::once(symbol))
                    .chain(chars[i + 1..].iter().copied())
                    .collect();
                results.push(candidate);
            }
        }
    }

    results
}
