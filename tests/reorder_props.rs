//! Property tests for the reorder reconciler and the view projection

use proptest::prelude::*;
use proptest::sample::Index;
use proptest::test_runner::Config;

use tick_cli::domain::{project, reconcile, summarize, StatusFilter, TodoList};

/// Builds a list of `flags.len()` items; `flags[i]` sets item i's completion.
/// Collection order is item 0, item 1, ...
fn make_list(flags: &[bool]) -> TodoList {
    let mut list = TodoList::new();
    for index in (0..flags.len()).rev() {
        list.add(&format!("item {}", index)).unwrap();
    }

    let ids: Vec<_> = list.items().iter().map(|item| item.id.clone()).collect();
    for (id, &done) in ids.iter().zip(flags) {
        if done {
            list.toggle(id).unwrap();
        }
    }
    list
}

/// Permutes a vector using proptest-provided swap indices
fn permute<T>(mut values: Vec<T>, swaps: &[Index]) -> Vec<T> {
    if values.is_empty() {
        return values;
    }
    for (position, swap) in swaps.iter().enumerate() {
        let i = position % values.len();
        let j = swap.index(values.len());
        values.swap(i, j);
    }
    values
}

fn filter_strategy() -> impl Strategy<Value = StatusFilter> {
    prop_oneof![
        Just(StatusFilter::All),
        Just(StatusFilter::Active),
        Just(StatusFilter::Done),
    ]
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn reconcile_conserves_the_id_set(
        flags in proptest::collection::vec(any::<bool>(), 0..12),
        filter in filter_strategy(),
        swaps in proptest::collection::vec(any::<Index>(), 0..12),
    ) {
        let mut list = make_list(&flags);

        let mut before: Vec<String> =
            list.items().iter().map(|item| item.id.to_string()).collect();
        before.sort();

        let visible: Vec<_> = project(list.items(), filter, "")
            .iter()
            .map(|item| item.id.clone())
            .collect();
        let order = permute(visible, &swaps);

        list.reorder(&order);

        let mut after: Vec<String> =
            list.items().iter().map(|item| item.id.to_string()).collect();
        after.sort();

        prop_assert_eq!(before, after);
    }

    #[test]
    fn reconcile_puts_visible_order_first_and_preserves_hidden_order(
        flags in proptest::collection::vec(any::<bool>(), 0..12),
        filter in filter_strategy(),
        swaps in proptest::collection::vec(any::<Index>(), 0..12),
    ) {
        let mut list = make_list(&flags);

        let visible: Vec<_> = project(list.items(), filter, "")
            .iter()
            .map(|item| item.id.clone())
            .collect();
        let order = permute(visible, &swaps);

        let hidden_before: Vec<_> = list
            .items()
            .iter()
            .filter(|item| !order.contains(&item.id))
            .map(|item| item.id.clone())
            .collect();

        list.reorder(&order);

        // The result is exactly: the new visible order, then the hidden
        // items in their original relative order
        let result: Vec<_> = list.items().iter().map(|item| item.id.clone()).collect();
        prop_assert_eq!(&result[..order.len()], &order[..]);
        prop_assert_eq!(&result[order.len()..], &hidden_before[..]);
    }

    #[test]
    fn projection_is_an_order_preserving_subsequence(
        flags in proptest::collection::vec(any::<bool>(), 0..12),
        filter in filter_strategy(),
        query in "[a-z0-9 ]{0,3}",
    ) {
        let list = make_list(&flags);
        let before = list.clone();

        let first: Vec<String> = project(list.items(), filter, &query)
            .iter()
            .map(|item| item.id.to_string())
            .collect();
        let second: Vec<String> = project(list.items(), filter, &query)
            .iter()
            .map(|item| item.id.to_string())
            .collect();

        // Pure: same inputs, same output, collection untouched
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&list, &before);

        // Subsequence: every projected id appears in the collection in the
        // same relative order
        let all: Vec<String> = list.items().iter().map(|item| item.id.to_string()).collect();
        let mut cursor = 0;
        for id in &first {
            let found = all[cursor..].iter().position(|candidate| candidate == id);
            prop_assert!(found.is_some());
            cursor += found.unwrap_or(0) + 1;
        }
    }

    #[test]
    fn summary_counts_are_independent_of_view(
        flags in proptest::collection::vec(any::<bool>(), 0..12),
        filter in filter_strategy(),
        query in "[a-z0-9 ]{0,3}",
    ) {
        let list = make_list(&flags);

        let _ = project(list.items(), filter, &query);
        let summary = summarize(list.items());

        prop_assert_eq!(summary.total, flags.len());
        prop_assert_eq!(summary.completed, flags.iter().filter(|&&f| f).count());
        prop_assert_eq!(summary.active(), summary.total - summary.completed);
    }

    #[test]
    fn uniqueness_holds_under_arbitrary_adds(
        titles in proptest::collection::vec("[ a-cA-C]{0,6}", 0..20),
    ) {
        let mut list = TodoList::new();
        for title in &titles {
            // Either the add succeeds or it is rejected; the invariant must
            // hold either way
            let _ = list.add(title);
        }

        let mut normalized: Vec<String> = list
            .items()
            .iter()
            .map(|item| item.normalized_title())
            .collect();
        prop_assert!(normalized.iter().all(|title| !title.is_empty()));

        let before_dedup = normalized.len();
        normalized.sort();
        normalized.dedup();
        prop_assert_eq!(normalized.len(), before_dedup);
    }
}
