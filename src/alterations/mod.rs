//! Name alteration engine
//!
//! Expands one discovered name into plausible neighbours using word flips,
//! number flips/appends and edit-distance fuzzing. Word techniques rank their
//! vocabulary with frequency caches shared across every name of a run.

mod cache;
mod fuzzy;
mod numbers;
mod state;
mod wordlist;
mod words;

pub use cache::FrequencyCache;
pub use fuzzy::fuzz_label;
pub use state::MutationState;
pub use wordlist::{default_wordlist, load_wordlist, DEFAULT_WORDS};

use crate::error::Result;

/// Letters, digits and hyphen: the symbols legal inside a DNS label
pub const LDH_CHARS: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '-',
];

/// Split `label.tail` at the first dot.
///
/// The tail is carried verbatim into every generated name, so a name without
/// one cannot be altered.
pub(crate) fn split_name(name: &str) -> Result<(&str, &str)> {
    match name.split_once('.') {
        Some((_, "")) => Err(crate::invalid_input!(name, "empty domain after the first label")),
        Some((label, tail)) => Ok((label, tail)),
        None => Err(crate::invalid_input!(name, "missing '.' separator")),
    }
}
