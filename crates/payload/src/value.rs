use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde_json::{Map, Number, Value};

// Largest magnitude at which every integer is exactly representable in an f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A node of the value tree a form hands over on submit.
///
/// `Bytes` and `Timestamp` are opaque leaves: they are never inspected or
/// pruned. Map keys keep their insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Bytes(Vec<u8>),
    Timestamp(DateTime<Utc>),
    List(Vec<FormValue>),
    Map(IndexMap<String, FormValue>),
}

impl FormValue {
    pub fn text(value: impl Into<String>) -> Self {
        FormValue::Text(value.into())
    }

    /// Builds a map from `(key, value)` pairs, keeping their order.
    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, FormValue)>) -> Self {
        FormValue::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn list(items: impl IntoIterator<Item = FormValue>) -> Self {
        FormValue::List(items.into_iter().collect())
    }
}

impl From<Value> for FormValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FormValue::Null,
            Value::Bool(b) => FormValue::Bool(b),
            Value::Number(n) => FormValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => FormValue::Text(s),
            Value::Array(items) => FormValue::List(items.into_iter().map(FormValue::from).collect()),
            Value::Object(entries) => {
                FormValue::Map(entries.into_iter().map(|(k, v)| (k, FormValue::from(v))).collect())
            }
        }
    }
}

impl From<FormValue> for Value {
    fn from(value: FormValue) -> Self {
        match value {
            FormValue::Null => Value::Null,
            FormValue::Bool(b) => Value::Bool(b),
            FormValue::Number(n) => number_to_json(n),
            FormValue::Text(s) => Value::String(s),
            FormValue::Bytes(bytes) => Value::String(STANDARD.encode(bytes)),
            FormValue::Timestamp(ts) => Value::String(ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
            FormValue::List(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            FormValue::Map(entries) => {
                Value::Object(entries.into_iter().map(|(k, v)| (k, Value::from(v))).collect::<Map<_, _>>())
            }
        }
    }
}

/// Integral values go back out as JSON integers so typed fields (`i64` ids)
/// deserialize; non-finite values have no JSON form and become `null`.
fn number_to_json(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        Value::Number(Number::from(n as i64))
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}
