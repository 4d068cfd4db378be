//! Property-based tests for rust_dev_logger using proptest

use proptest::prelude::*;
use rust_dev_logger::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Strings are too short to spell `undefined`, so every bare token in the
/// output comes from an undefined leaf.
fn arb_dev_value() -> impl Strategy<Value = DevValue> {
    let leaf = prop_oneof![
        Just(DevValue::Undefined),
        Just(DevValue::Null),
        any::<bool>().prop_map(DevValue::Bool),
        any::<i64>().prop_map(|i| DevValue::from(i)),
        "[a-z ]{0,6}".prop_map(|s| DevValue::from(s)),
    ];

    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(DevValue::Array),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..4)
                .prop_map(|entries| DevValue::object(entries)),
        ]
    })
}

fn arb_json_value() -> impl Strategy<Value = serde_json::Value> {
    let leaf = prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(serde_json::Value::Bool),
        any::<i64>().prop_map(|i| serde_json::Value::from(i)),
        ".{0,8}".prop_map(serde_json::Value::String),
    ];

    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(serde_json::Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|map| serde_json::Value::Object(map.into_iter().collect())),
        ]
    })
}

fn count_undefined(value: &DevValue) -> usize {
    match value {
        DevValue::Undefined => 1,
        DevValue::Array(items) => items.iter().map(count_undefined).sum(),
        DevValue::Object(map) => map.values().map(count_undefined).sum(),
        _ => 0,
    }
}

// ============================================================================
// Stringify Tests
// ============================================================================

proptest! {
    /// Without undefined values the output is plain pretty JSON
    #[test]
    fn test_plain_values_match_pretty_json(value in arb_json_value()) {
        let text = stringify(&value).unwrap();
        prop_assert_eq!(text, serde_json::to_string_pretty(&value).unwrap());
    }

    /// Every undefined leaf shows up as exactly one bare token
    #[test]
    fn test_every_undefined_is_rendered(value in arb_dev_value()) {
        let text = stringify(&value).unwrap();
        prop_assert_eq!(text.matches(UNDEFINED_TOKEN).count(), count_undefined(&value));
        prop_assert!(!text.contains(UNDEFINED_SENTINEL));
        prop_assert!(!text.contains("\"undefined\""));
    }

    /// Repeated calls give identical text
    #[test]
    fn test_stringify_is_deterministic(value in arb_dev_value()) {
        prop_assert_eq!(stringify(&value).unwrap(), stringify(&value).unwrap());
    }

    /// Converting from serde_json keeps the rendering unchanged
    #[test]
    fn test_json_conversion_renders_identically(value in arb_json_value()) {
        let dev_value = DevValue::from(value.clone());
        prop_assert_eq!(stringify(&dev_value).unwrap(), stringify(&value).unwrap());
    }
}

// ============================================================================
// Forwarding Tests
// ============================================================================

proptest! {
    /// Forwarded arguments arrive in order and unchanged
    #[test]
    fn test_forwarding_keeps_arguments(args in prop::collection::vec(".{0,12}", 0..6)) {
        let sink = std::sync::Arc::new(MemorySink::new());
        let dev = Dev::with_logger(sink.clone());

        let display_args: Vec<&dyn std::fmt::Display> =
            args.iter().map(|a| a as &dyn std::fmt::Display).collect();
        dev.log(&display_args).unwrap();

        if FORWARDING_ENABLED {
            prop_assert_eq!(sink.calls(LogLevel::Log), vec![args.clone()]);
        } else {
            prop_assert!(sink.is_empty());
        }
    }

    /// LogLevel string conversions roundtrip
    #[test]
    fn test_log_level_str_roundtrip(level in prop_oneof![
        Just(LogLevel::Log),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
    ]) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }
}
