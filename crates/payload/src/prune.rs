use serde_json::Value;
use tracing::debug;

use crate::value::FormValue;

/// Removes empty values from a form value tree, bottom-up.
///
/// Forms register every field whether or not the user touched it, so a raw
/// payload is full of `""`, `NaN`, `{}` and `[]`. Optional-field rules only
/// skip a field when it is truly absent, so the payload is pruned first.
///
/// - `Null`, whitespace-only text and `NaN` are dropped.
/// - Lists and maps are pruned element-wise; one left empty is dropped too.
/// - `Bytes` and `Timestamp` leaves are returned as they are.
/// - Anything else is kept.
///
/// `None` means the whole value was empty. The result never contains an empty
/// list or map, so pruning twice gives the same tree as pruning once.
pub fn prune_empty(value: FormValue) -> Option<FormValue> {
    match value {
        FormValue::Null => None,
        FormValue::Text(text) if text.trim().is_empty() => None,
        FormValue::Number(n) if n.is_nan() => None,
        FormValue::List(items) => {
            let pruned: Vec<FormValue> = items.into_iter().filter_map(prune_empty).collect();
            (!pruned.is_empty()).then_some(FormValue::List(pruned))
        }
        FormValue::Map(entries) => {
            let pruned: indexmap::IndexMap<String, FormValue> = entries
                .into_iter()
                .filter_map(|(key, value)| prune_empty(value).map(|value| (key, value)))
                .collect();
            (!pruned.is_empty()).then_some(FormValue::Map(pruned))
        }
        other => Some(other),
    }
}

/// [`prune_empty`] over a JSON document.
pub fn prune_json(value: Value) -> Option<Value> {
    let pruned = prune_empty(FormValue::from(value)).map(Value::from);
    if pruned.is_none() {
        debug!("payload pruned to nothing");
    }
    pruned
}
