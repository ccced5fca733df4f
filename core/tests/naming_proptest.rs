//! Property-based tests for name normalization.

use figma_design_tokens_core::naming::{to_lower_camel_case, to_snake_case};
use figma_design_tokens_core::{NameStyle, NamingRule};
use proptest::prelude::*;

/// Names the way designers write them: words, digits, and the usual
/// separators.
fn ascii_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 _/-]{0,24}",
        "[A-Z][a-z]{1,8}(/[A-Z][a-z]{1,8}){0,3}",
        "[a-z]{1,6}([A-Z][a-z]{0,6}){0,3}[0-9]{0,2}",
    ]
}

/// Designer names plus arbitrary printable Unicode, where case mappings
/// may change the length of a character or emit combining marks.
fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        ascii_name_strategy(),
        "\\PC{0,16}",
        "[İIıißẞŉΐǅǄǆΣσς\u{307}\u{301}ⅫⅻⒶⓐ0-9 _/-]{0,12}",
        any::<String>(),
    ]
}

proptest! {
    #[test]
    fn camel_case_is_idempotent(name in name_strategy()) {
        let once = to_lower_camel_case(&name);
        prop_assert_eq!(to_lower_camel_case(&once), once);
    }

    #[test]
    fn snake_case_is_idempotent(name in name_strategy()) {
        let once = to_snake_case(&name);
        prop_assert_eq!(to_snake_case(&once), once);
    }

    #[test]
    fn case_stage_is_idempotent(name in name_strategy()) {
        for style in [NameStyle::CamelCase, NameStyle::SnakeCase] {
            let rule = NamingRule::with_style(style);
            let once = rule.process(&name);
            prop_assert_eq!(style.apply(&once), once.clone());
        }
    }

    #[test]
    fn snake_case_output_has_no_uppercase(name in ascii_name_strategy()) {
        prop_assert!(!to_snake_case(&name).chars().any(|c| c.is_uppercase()));
    }

    #[test]
    fn turkish_dotted_capital_is_stable(word in "[a-z]{0,6}", rest in "[A-Z][a-z]{0,6}") {
        let name = format!("İ{word} {rest}");
        for style in [NameStyle::CamelCase, NameStyle::SnakeCase] {
            let once = style.apply(&name);
            prop_assert_eq!(style.apply(&once), once.clone());
        }
    }

    #[test]
    fn default_rewrite_removes_slashes(name in "[a-z]{1,5}(/[a-z]{1,5}){0,3}") {
        let processed = NamingRule::default().process(&name);
        prop_assert!(!processed.contains('/'));
    }
}
