//! Dual-path equivalence for the view engine.
//!
//! The primary (batch) and fallback (local) paths must produce identical
//! results for all inputs: same elements, same order.

use chrono::NaiveDate;
use proptest::prelude::*;

use rewind_core::{BatchViews, Level, LocalViews, Problem, ResilientViews, SortKey, ViewProvider};

fn level_strategy() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::Again),
        Just(Level::Hard),
        Just(Level::Good),
        Just(Level::Easy),
    ]
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2023i32..2027, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn problem_strategy() -> impl Strategy<Value = Problem> {
    (
        any::<i64>(),
        "[A-Za-z ]{1,16}",
        proptest::option::of("[a-z:/.]{1,12}"),
        proptest::collection::vec("[A-Za-z]{1,8}", 0..4),
        "[A-Za-z0-9 ]{0,20}",
        level_strategy(),
        date_strategy(),
        date_strategy(),
    )
        .prop_map(
            |(id, name, url, tags, memo, level, created_at, next_review_at)| Problem {
                id,
                name,
                url,
                tags,
                memo,
                level,
                created_at,
                next_review_at,
            },
        )
}

fn sort_key_strategy() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::NextReview),
        Just(SortKey::CreatedAt),
        Just(SortKey::Name),
    ]
}

proptest! {
    #[test]
    fn due_views_agree(
        problems in proptest::collection::vec(problem_strategy(), 0..24),
        today in date_strategy(),
    ) {
        let primary = BatchViews.due_today(&problems, today).unwrap();
        let fallback = LocalViews.due(&problems, today);
        prop_assert_eq!(primary, fallback);
    }

    #[test]
    fn filter_views_agree(
        problems in proptest::collection::vec(problem_strategy(), 0..24),
        term in "[A-Za-z]{1,6}",
    ) {
        let primary = BatchViews.filter(&problems, &term).unwrap();
        let fallback = LocalViews.filtered(&problems, &term);
        prop_assert_eq!(primary, fallback);
    }

    #[test]
    fn sort_views_agree(
        problems in proptest::collection::vec(problem_strategy(), 0..24),
        key in sort_key_strategy(),
    ) {
        let primary = BatchViews.sorted(&problems, key).unwrap();
        let fallback = LocalViews.sorted_by(&problems, key);
        prop_assert_eq!(primary, fallback);
    }

    #[test]
    fn resilient_wrapper_matches_local_when_primary_fails(
        problems in proptest::collection::vec(problem_strategy(), 0..16),
        today in date_strategy(),
        key in sort_key_strategy(),
    ) {
        struct BrokenViews;
        impl ViewProvider for BrokenViews {
            fn due_today(
                &self,
                _: &[Problem],
                _: NaiveDate,
            ) -> Result<Vec<Problem>, rewind_core::views::ViewError> {
                Err(codec_error())
            }
            fn filter(
                &self,
                _: &[Problem],
                _: &str,
            ) -> Result<Vec<Problem>, rewind_core::views::ViewError> {
                Err(codec_error())
            }
            fn sorted(
                &self,
                _: &[Problem],
                _: SortKey,
            ) -> Result<Vec<Problem>, rewind_core::views::ViewError> {
                Err(codec_error())
            }
        }
        fn codec_error() -> rewind_core::views::ViewError {
            serde_json::from_str::<serde_json::Value>("{")
                .expect_err("payload is malformed")
                .into()
        }

        let resilient = ResilientViews::with_primary(Box::new(BrokenViews));
        prop_assert_eq!(resilient.due_today(&problems, today), LocalViews.due(&problems, today));
        prop_assert_eq!(resilient.filter(&problems, "a"), LocalViews.filtered(&problems, "a"));
        prop_assert_eq!(resilient.sorted(&problems, key), LocalViews.sorted_by(&problems, key));
    }
}
