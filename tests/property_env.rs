// tests/property_env.rs

use std::collections::BTreeSet;

use proptest::collection::btree_map;
use proptest::prelude::*;
use scriptrun::exec::env::effective_environment;

proptest! {
    /// Context variables always win on collision, and nothing else is lost.
    #[test]
    fn context_vars_take_precedence(
        explicit in btree_map("[A-Z][A-Z0-9_]{0,7}", "[a-z]{0,8}", 0..8),
        context in btree_map("[A-Z][A-Z0-9_]{0,7}", "[0-9]{0,8}", 0..8),
    ) {
        let merged = effective_environment(Some(&explicit), &context);

        for (key, value) in &context {
            prop_assert_eq!(merged.get(key), Some(value));
        }
        for (key, value) in &explicit {
            if !context.contains_key(key) {
                prop_assert_eq!(merged.get(key), Some(value));
            }
        }

        let expected_keys: BTreeSet<_> = explicit.keys().chain(context.keys()).collect();
        prop_assert_eq!(merged.len(), expected_keys.len());
    }

    /// An empty context leaves an explicit mapping untouched.
    #[test]
    fn empty_context_is_identity(
        explicit in btree_map("[A-Z][A-Z0-9_]{0,7}", "[a-z]{0,8}", 0..8),
    ) {
        let merged = effective_environment(Some(&explicit), &Default::default());
        prop_assert_eq!(merged, explicit);
    }
}
