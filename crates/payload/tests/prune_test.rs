use batchform_payload::{FormValue, prune_empty, prune_json};
use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(FormValue::Null)]
#[case(FormValue::text(""))]
#[case(FormValue::text("  \t\n"))]
#[case(FormValue::Number(f64::NAN))]
#[case(FormValue::list([]))]
#[case(FormValue::map::<&str>([]))]
fn test_empty_leaves_and_collections_vanish(#[case] value: FormValue) {
    assert_eq!(prune_empty(value), None);
}

#[rstest]
#[case(FormValue::Bool(false))]
#[case(FormValue::Number(0.0))]
#[case(FormValue::Number(-1.5))]
#[case(FormValue::text(" x "))]
fn test_meaningful_atoms_are_kept(#[case] value: FormValue) {
    assert_eq!(prune_empty(value.clone()), Some(value));
}

#[test]
fn test_nested_empties_collapse_to_nothing() {
    let value = FormValue::map([
        ("a", FormValue::text("")),
        ("b", FormValue::list([])),
        ("c", FormValue::map([("d", FormValue::Null)])),
    ]);

    assert_eq!(prune_empty(value), None);
}

#[test]
fn test_nan_is_dropped_from_lists_without_gaps() {
    let value = FormValue::map([
        ("a", FormValue::text("x")),
        ("b", FormValue::list([FormValue::Number(1.0), FormValue::Number(f64::NAN), FormValue::Number(2.0)])),
    ]);

    assert_eq!(
        prune_empty(value),
        Some(FormValue::map([
            ("a", FormValue::text("x")),
            ("b", FormValue::list([FormValue::Number(1.0), FormValue::Number(2.0)])),
        ]))
    );
}

#[test]
fn test_opaque_leaves_are_not_descended() {
    let ts: DateTime<Utc> = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").unwrap().with_timezone(&Utc);
    let value = FormValue::map([
        ("file", FormValue::Bytes(Vec::new())),
        ("when", FormValue::Timestamp(ts)),
    ]);

    assert_eq!(prune_empty(value.clone()), Some(value));
}

#[test]
fn test_surviving_keys_keep_insertion_order() {
    let value = FormValue::map([
        ("zeta", FormValue::Number(1.0)),
        ("empty", FormValue::text("")),
        ("alpha", FormValue::Number(2.0)),
    ]);

    let Some(FormValue::Map(pruned)) = prune_empty(value) else {
        panic!("expected a map");
    };

    assert_eq!(pruned.keys().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
}

#[test]
fn test_prune_json_form_payload() {
    let raw = json!({
        "branch_id": 2,
        "batch_description": "",
        "batch_start_date": "2024-01-01",
        "address": { "line1": "", "tags": [] },
        "schedules": [
            { "date": "2024-01-01", "start_time": "09:00", "end_time": "17:00" },
            { "date": "", "start_time": "", "end_time": "" }
        ],
        "captchaToken": null
    });

    assert_eq!(
        prune_json(raw),
        Some(json!({
            "branch_id": 2,
            "batch_start_date": "2024-01-01",
            "schedules": [
                { "date": "2024-01-01", "start_time": "09:00", "end_time": "17:00" }
            ]
        }))
    );
}

#[test]
fn test_prune_json_everything_empty() {
    assert_eq!(prune_json(json!({ "a": "", "b": [], "c": { "d": null } })), None);
    assert_eq!(prune_json(json!(null)), None);
}

fn arb_form_value() -> impl Strategy<Value = FormValue> {
    let leaf = prop_oneof![
        Just(FormValue::Null),
        any::<bool>().prop_map(FormValue::Bool),
        prop_oneof![Just(f64::NAN), -1000.0f64..1000.0].prop_map(FormValue::Number),
        "[ a-c]{0,3}".prop_map(FormValue::Text),
        prop::collection::vec(any::<u8>(), 0..3).prop_map(FormValue::Bytes),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(FormValue::List),
            prop::collection::vec(("[a-d]", inner), 0..4).prop_map(|entries| FormValue::map(entries)),
        ]
    })
}

fn has_empty_collection(value: &FormValue) -> bool {
    match value {
        FormValue::List(items) => items.is_empty() || items.iter().any(has_empty_collection),
        FormValue::Map(entries) => entries.is_empty() || entries.values().any(has_empty_collection),
        _ => false,
    }
}

proptest! {
    #[test]
    fn prop_prune_is_idempotent(value in arb_form_value()) {
        let once = prune_empty(value);
        let twice = once.clone().and_then(prune_empty);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_prune_never_leaves_empty_collections(value in arb_form_value()) {
        if let Some(pruned) = prune_empty(value) {
            prop_assert!(!has_empty_collection(&pruned));
        }
    }
}
