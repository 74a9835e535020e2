//! Property-based tests for octoscope.
//!
//! These tests check formatting and listing invariants across generated inputs.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use octoscope::format::{format_number, truncate_text};
use octoscope::listing::{arrange_repositories, distinct_languages, language_breakdown};
use octoscope::testing::fixtures;
use octoscope::{Languages, RepoSort, Repository};

/// Strategy for a repository with random name, language, counts and update time.
fn repository() -> impl Strategy<Value = Repository> {
    (
        "[a-zA-Z][a-zA-Z0-9_-]{0,15}",
        prop::option::of(prop_oneof![
            Just("Rust".to_string()),
            Just("Go".to_string()),
            Just("TypeScript".to_string()),
        ]),
        0_u32..5000,
        0_u32..500,
        0_i64..2_000_000_000,
    )
        .prop_map(|(name, language, stars, forks, updated)| {
            let mut repo = fixtures::repository("someone", &name);
            repo.language = language;
            repo.stargazers_count = stars;
            repo.forks_count = forks;
            repo.updated_at = Utc.timestamp_opt(updated, 0).single().unwrap();
            repo
        })
}

fn sort_order() -> impl Strategy<Value = RepoSort> {
    prop_oneof![
        Just(RepoSort::Updated),
        Just(RepoSort::Name),
        Just(RepoSort::Stars),
        Just(RepoSort::Forks),
    ]
}

fn languages() -> impl Strategy<Value = Languages> {
    prop::collection::btree_map("[A-Z][a-z]{1,8}", 0_u64..10_000_000, 0..8)
}

proptest! {
    /// Small numbers print as plain digits; larger ones get a k or M suffix.
    #[test]
    fn test_format_number_suffix(n in 0_u64..10_000_000_000) {
        let formatted = format_number(n);
        if n < 1_000 {
            prop_assert_eq!(formatted, n.to_string());
        } else if n < 1_000_000 {
            prop_assert!(formatted.ends_with('k'), "{} -> {}", n, formatted);
        } else {
            prop_assert!(formatted.ends_with('M'), "{} -> {}", n, formatted);
        }
    }

    /// Truncation never exceeds the limit plus the ellipsis and keeps a prefix.
    #[test]
    fn test_truncate_text_bounds(text in "\\PC{0,200}", max in 1_usize..120) {
        let truncated = truncate_text(&text, max);
        let chars = text.chars().count();

        if chars <= max {
            prop_assert_eq!(&truncated, &text);
        } else {
            prop_assert!(truncated.ends_with("..."));
            prop_assert_eq!(truncated.chars().count(), max + 3);
            let prefix: String = text.chars().take(max).collect();
            prop_assert!(truncated.starts_with(&prefix));
        }
    }

    /// Percentages add up to 100 and entries are ordered by bytes.
    #[test]
    fn test_language_breakdown_sums_to_hundred(langs in languages()) {
        let shares = language_breakdown(&langs);
        let total: u64 = langs.values().sum();

        if total == 0 {
            prop_assert!(shares.is_empty());
        } else {
            let sum: f64 = shares.iter().map(|s| s.percentage).sum();
            prop_assert!((sum - 100.0).abs() < 1e-6, "sum was {}", sum);
            prop_assert!(shares.windows(2).all(|w| w[0].bytes >= w[1].bytes));
        }
    }

    /// Arranging keeps exactly the repositories matching the filter, in sort order.
    #[test]
    fn test_arrange_filters_and_sorts(
        repos in prop::collection::vec(repository(), 0..20),
        sort in sort_order(),
        filter in prop::option::of(prop_oneof![Just("Rust"), Just("Go"), Just("Haskell")]),
    ) {
        let arranged = arrange_repositories(&repos, sort, filter);

        let expected = repos
            .iter()
            .filter(|r| filter.map_or(true, |f| r.language.as_deref() == Some(f)))
            .count();
        prop_assert_eq!(arranged.len(), expected);

        for pair in arranged.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            match sort {
                RepoSort::Updated => prop_assert!(a.updated_at >= b.updated_at),
                RepoSort::Name => prop_assert!(a.name.to_lowercase() <= b.name.to_lowercase()),
                RepoSort::Stars => prop_assert!(a.stargazers_count >= b.stargazers_count),
                RepoSort::Forks => prop_assert!(a.forks_count >= b.forks_count),
            }
        }
    }

    /// Distinct languages are unique and all come from the input.
    #[test]
    fn test_distinct_languages_unique(repos in prop::collection::vec(repository(), 0..20)) {
        let langs = distinct_languages(&repos);

        let mut deduped = langs.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), langs.len());
        for lang in &langs {
            prop_assert!(repos.iter().any(|r| r.language.as_ref() == Some(lang)));
        }
    }
}
