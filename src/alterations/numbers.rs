//! Digit flips and digit appends

use super::split_name;
use super::state::MutationState;
use crate::error::Result;
use crate::stringset::StringSet;

const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

impl MutationState {
    /// Flip the first digit of the label to every other digit, or drop it,
    /// and flip or drop a later digit in each of those variants.
    ///
    /// Labels are not checked for legality: a single-digit label such as
    /// `1.example.com` also yields the empty-label name `.example.com`.
    pub fn flip_numbers(&self, name: &str) -> Result<StringSet> {
        let (label, tail) = split_name(name)?;

        let chars: Vec<char> = label.chars().collect();
        let Some(first) = chars.iter().position(char::is_ascii_digit) else {
            return Ok(StringSet::new());
        };

        let mut names = StringSet::new();

        for digit in DIGITS {
            let mut flipped = chars.clone();
            flipped[first] = digit;
            for variant in second_number_flip(&flipped, Some(first + 1)) {
                names.insert(format!("{}.{}", variant, tail));
            }
        }

        // With the first digit gone any remaining digit may be flipped
        let mut removed = chars;
        removed.remove(first);
        for variant in second_number_flip(&removed, None) {
            names.insert(format!("{}.{}", variant, tail));
        }

        Ok(names)
    }

    /// Append every digit to the label, directly and after a hyphen
    pub fn append_numbers(&self, name: &str) -> Result<StringSet> {
        let (label, tail) = split_name(name)?;

        let label = label.trim_matches('-');
        if label.is_empty() {
            return Ok(StringSet::new());
        }

        let mut names = StringSet::with_capacity(DIGITS.len() * 2);
        for digit in DIGITS {
            names.insert(format!("{}{}.{}", label, digit, tail));
            names.insert(format!("{}-{}.{}", label, digit, tail));
        }

        Ok(names)
    }
}

/// Flip or drop the last digit of `label`.
///
/// `min_index` restricts the search to digits at or after that position;
/// `None` searches the whole label. Without such a digit the label is
/// returned unchanged.
fn second_number_flip(label: &[char], min_index: Option<usize>) -> Vec<String> {
    let last = label
        .iter()
        .rposition(char::is_ascii_digit)
        .filter(|&last| min_index.map_or(true, |min| last >= min));

    let Some(last) = last else {
        return vec![label.iter().collect()];
    };

    let mut variants = Vec::with_capacity(DIGITS.len() + 1);
    for digit in DIGITS {
        let mut flipped = label.to_vec();
        flipped[last] = digit;
        variants.push(flipped.into_iter().collect());
    }

    let mut removed = label.to_vec();
    removed.remove(last);
    variants.push(removed.into_iter().collect());

    variants
}
