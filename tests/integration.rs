//! Integration tests for domain-alterations

use domain_alterations::{
    alterations::{default_wordlist, FrequencyCache, MutationState},
    error::AlterationError,
    types::{Alteration, AlterationConfig},
    AlterationPipeline,
};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

fn state() -> MutationState {
    MutationState::new(&default_wordlist())
        .with_min_for_word_flip(1)
        .with_edit_distance(1)
}

#[test]
fn test_repeated_updates_strictly_increase() {
    let cache = FrequencyCache::new(["www"]);
    let counts: Vec<u64> = (0..5).map(|_| cache.update("www")).collect();
    assert_eq!(counts, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_concurrent_flip_words_lose_no_updates() {
    let state = Arc::new(state());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let state = Arc::clone(&state);
            thread::spawn(move || {
                for j in 0..25 {
                    let name = format!("edge-{}x{}.example.com", i, j);
                    state.flip_words(&name).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(state.prefixes().count("edge"), Some(200));
}

#[test]
fn test_self_inclusion() {
    let names = state().flip_words("abc-def.example.com").unwrap();
    assert!(names.contains("abc-def.example.com"));
}

#[test]
fn test_hyphen_precondition() {
    assert!(state().flip_words("host.example.com").unwrap().is_empty());
}

#[test]
fn test_digit_flip_cardinality() {
    let names = state().flip_numbers("host1.example.com").unwrap();
    let expected: HashSet<String> = (0..10)
        .map(|d| format!("host{}.example.com", d))
        .chain(std::iter::once("host.example.com".to_string()))
        .collect();

    assert_eq!(names.export().into_iter().collect::<HashSet<_>>(), expected);
}

#[test]
fn test_append_cardinality() {
    assert_eq!(state().append_numbers("host.example.com").unwrap().len(), 20);
}

#[test]
fn test_trim_to_empty_yields_empty_set() {
    let state = state();
    assert!(state.add_suffix_word("--.example.com").unwrap().is_empty());
    assert!(state.add_prefix_word("--.example.com").unwrap().is_empty());
    assert!(state.append_numbers("--.example.com").unwrap().is_empty());
}

#[test]
fn test_fuzz_round_bound() {
    let names = state().fuzzy_label_searches("ab.example.com").unwrap();
    let len = 2;
    assert!(names.len() <= (len + 1) * 38 + len + len * 38);
    assert!(names.contains("a.example.com"));
    assert!(names.contains("b.example.com"));
}

#[test]
fn test_every_alteration_rejects_missing_separator() {
    let state = state();
    for alteration in Alteration::ALL {
        let err = state.apply(alteration, "nodots").unwrap_err();
        assert!(
            matches!(err, AlterationError::InvalidInput { ref name, .. } if name == "nodots"),
            "{} accepted a name without a dot",
            alteration
        );
    }
}

#[test]
fn test_tail_is_preserved() {
    let state = state();
    for alteration in Alteration::ALL {
        let names = state.apply(alteration, "api-2.dev.example.co.uk").unwrap();
        assert!(
            names.iter().all(|n| n.ends_with(".dev.example.co.uk")),
            "{} changed the tail",
            alteration
        );
    }
}

#[test]
fn test_identical_state_gives_identical_output() {
    for alteration in Alteration::ALL {
        if alteration.updates_cache() {
            continue;
        }
        let state = state();
        let first = state.apply(alteration, "mail-1.example.com").unwrap();
        let second = state.apply(alteration, "mail-1.example.com").unwrap();
        assert_eq!(first, second, "{} is not deterministic", alteration);
    }

    let first = state().flip_words("mail-1.example.com").unwrap();
    let second = state().flip_words("mail-1.example.com").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_independent_states_do_not_share_counts() {
    let a = state();
    let b = state();
    a.flip_words("zeta-beta.example.com").unwrap();
    assert_eq!(a.prefixes().count("zeta"), Some(1));
    assert_eq!(b.prefixes().count("zeta"), None);
}

#[tokio::test]
async fn test_pipeline_end_to_end() {
    let config = AlterationConfig {
        min_for_word_flip: 1,
        edit_distance: 0,
        concurrency: 4,
        ..Default::default()
    };
    let pipeline = AlterationPipeline::from_config(&config).unwrap();
    let names = vec![
        "web-1.example.com".to_string(),
        "broken".to_string(),
        "mail.example.org".to_string(),
    ];

    let report = pipeline.run(&names, 2, |_, _| {}).await;

    assert_eq!(report.processed, 3);
    assert_eq!(report.failed.len(), 1);
    assert!(report.names.contains("web-7.example.com"));
    assert!(report.names.contains("mail-3.example.org"));
    // "web" was learned from the first batch
    assert!(report.names.contains("web-mail.example.org"));
    assert!(!report.names.contains("broken"));
}
