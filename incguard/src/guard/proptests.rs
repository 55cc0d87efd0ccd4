//! Property-based tests for guard naming and rewriting.

use super::name::{derive_guard, GuardNamer};
use super::rewrite::{canonical_header, classify, find_guard, rewrite_guard, GuardStatus};
use proptest::prelude::*;

fn component_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_. +-]{0,12}"
}

fn header_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(component_strategy(), 1..6)
        .prop_map(|parts| format!("/proj/src/{}.hpp", parts.join("/")))
}

fn identifier_strategy() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9_]{0,30}"
}

fn inner_guard_strategy() -> impl Strategy<Value = String> {
    identifier_strategy().prop_map(|name| format!("#ifndef {name}\n#define {name}\n"))
}

fn body_strategy() -> impl Strategy<Value = String> {
    "[a-z ;{}()\n]{0,80}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Same inputs always produce the same identifier.
    #[test]
    fn derivation_is_deterministic(path in header_path_strategy()) {
        prop_assert_eq!(derive_guard("/proj/src", &path), derive_guard("/proj/src", &path));
    }

    // Empty tokens collapse, so no doubled or dangling separators.
    #[test]
    fn derivation_never_has_empty_tokens(path in header_path_strategy()) {
        let guard = derive_guard("/proj/src", &path);
        prop_assert!(!guard.contains("__"));
        prop_assert!(!guard.ends_with('_'));
        prop_assert!(guard.starts_with("FRAMEWORK_"));
    }

    // Separators never survive and letters are uppercased; other
    // characters such as `-` or spaces pass through.
    #[test]
    fn derivation_drops_separators(path in header_path_strategy()) {
        let guard = GuardNamer::new("/proj/src").derive(&path);
        prop_assert!(!guard.contains(['.', '/', '\\']));
        prop_assert_eq!(guard.to_uppercase(), guard.clone());
    }

    // Rewriting with a derived identifier twice changes nothing the second
    // time, and a nested guard pair after the first one survives.
    #[test]
    fn rewrite_is_idempotent(
        path in header_path_strategy(),
        old in identifier_strategy(),
        inner in inner_guard_strategy(),
        body in body_strategy(),
    ) {
        let new = derive_guard("/proj/src", &path);
        let content = format!("#ifndef {old}\n#define {old}\n{inner}{body}#endif\n#endif\n");
        let once = rewrite_guard(&content, &new);
        prop_assert!(once.contains(&inner));
        let twice = rewrite_guard(&once, &new);
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(classify(&once, &new), GuardStatus::Canonical);
    }

    // The rewritten text starts with the canonical header and keeps the body.
    #[test]
    fn rewrite_preserves_body(
        old in identifier_strategy(),
        new in identifier_strategy(),
        body in body_strategy(),
    ) {
        let content = format!("#ifndef {old}\n#define {old}\n{body}");
        let out = rewrite_guard(&content, &new);
        prop_assert!(out.starts_with(&canonical_header(&new)));
        prop_assert!(out.ends_with(&body));
    }

    // Text without any `#ifndef` is never touched.
    #[test]
    fn rewrite_without_guard_is_noop(body in body_strategy(), new in identifier_strategy()) {
        prop_assert!(find_guard(&body).is_none());
        prop_assert_eq!(rewrite_guard(&body, &new), body);
    }

    // Differing names never form a guard pair.
    #[test]
    fn mismatched_names_never_match(a in identifier_strategy(), b in identifier_strategy()) {
        prop_assume!(a != b);
        let content = format!("#ifndef {a}\n#define {b}\n");
        prop_assert!(find_guard(&content).is_none());
    }
}
