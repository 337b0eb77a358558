//! Property-based invariant tests for translation resolution.
//!
//! These verify the resolution contract for **any** table, default
//! locale, and sequence of locale switches:
//!
//! 1. Resolution yields the current locale's entry when present, else
//!    the default locale's entry.
//! 2. A table that misses the default locale always fails derivation,
//!    whatever the current locale.
//! 3. Snapshot resolution agrees with an already-derived reactive
//!    message at every point of a switch sequence.
//! 4. Distinct instances never influence each other.

use glossia::{I18n, Translations};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn tag_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,3}"
}

fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,12}"
}

fn table_strategy() -> impl Strategy<Value = Translations> {
    proptest::collection::hash_map(tag_strategy(), text_strategy(), 0..6)
        .prop_map(Translations::from)
}

/// The resolution rule, stated directly.
fn expected(table: &Translations, current: &str, default: &str) -> Option<String> {
    table
        .get(current)
        .or_else(|| table.get(default))
        .map(str::to_string)
}

proptest! {
    // 1. Resolution follows the fallback rule.
    #[test]
    fn resolution_follows_fallback_rule(
        mut table in table_strategy(),
        default in tag_strategy(),
        default_text in text_strategy(),
        current in tag_strategy(),
    ) {
        table.insert(default.clone(), default_text);

        let i18n = I18n::new(default.clone());
        i18n.set_locale(current.clone());

        let want = expected(&table, &current, &default);
        prop_assert_eq!(i18n.translate(&table).ok(), want.clone());

        let msg = i18n.message(table).unwrap();
        prop_assert_eq!(Some(msg.get()), want);
    }

    // 2. Missing default locale always fails derivation.
    #[test]
    fn missing_default_always_errors(
        table in table_strategy(),
        default in "[A-Z]{1,3}", // disjoint from table tags by construction
        current in tag_strategy(),
    ) {
        let i18n = I18n::new(default);
        i18n.set_locale(current);

        prop_assert!(i18n.translate(&table).is_err());
        prop_assert!(i18n.message(table).is_err());
    }

    // 3. Snapshot and reactive resolution agree across switch sequences.
    #[test]
    fn snapshot_agrees_with_reactive(
        mut table in table_strategy(),
        default in tag_strategy(),
        default_text in text_strategy(),
        switches in proptest::collection::vec(tag_strategy(), 0..8),
    ) {
        table.insert(default.clone(), default_text);

        let i18n = I18n::new(default.clone());
        let msg = i18n.message(table.clone()).unwrap();

        for tag in switches {
            i18n.set_locale(tag.clone());
            let snapshot = i18n.translate(&table).unwrap();
            prop_assert_eq!(snapshot.clone(), msg.get());
            prop_assert_eq!(Some(snapshot), expected(&table, &tag, &default));
        }
    }

    // 4. Instances are independent.
    #[test]
    fn instances_are_independent(
        mut table in table_strategy(),
        default_a in tag_strategy(),
        default_b in tag_strategy(),
        text in text_strategy(),
        switches in proptest::collection::vec(tag_strategy(), 1..6),
    ) {
        table.insert(default_a.clone(), text.clone());
        table.insert(default_b.clone(), text);

        let a = I18n::new(default_a.clone());
        let b = I18n::new(default_b.clone());
        let msg_b = b.message(table.clone()).unwrap();

        for tag in switches {
            a.set_locale(tag);
            // b never moved: its message still resolves at b's default.
            prop_assert_eq!(
                Some(msg_b.get()),
                expected(&table, &default_b, &default_b)
            );
        }
    }
}
