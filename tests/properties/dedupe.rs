//! Property tests for order-preserving deduplication.

use std::collections::HashSet;

use proptest::prelude::*;

use dockerimages::dedupe;

fn image_like() -> impl Strategy<Value = String> {
    // Small alphabet so duplicates are common
    proptest::string::string_regex("[ab][ab:/1]{0,3}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Output has no duplicates and keeps first-seen order.
    #[test]
    fn property_dedupe_keeps_first_occurrences(
        items in proptest::collection::vec(image_like(), 0..32)
    ) {
        let out = dedupe(items.clone());

        let unique: HashSet<&String> = out.iter().collect();
        prop_assert_eq!(unique.len(), out.len());

        let mut seen = HashSet::new();
        let expected: Vec<String> = items
            .iter()
            .filter(|i| seen.insert(i.as_str()))
            .cloned()
            .collect();
        prop_assert_eq!(out, expected);
    }

    /// PROPERTY: Deduplicating twice changes nothing.
    #[test]
    fn property_dedupe_is_idempotent(
        items in proptest::collection::vec(image_like(), 0..32)
    ) {
        let once = dedupe(items);
        let twice = dedupe(once.clone());
        prop_assert_eq!(once, twice);
    }
}
