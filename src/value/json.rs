//! JSON conversion (feature-gated)
//!
//! Maps `serde_json::Value` into [`Value`]: JSON objects become plain objects
//! whose members are enumerable own properties.

use super::{Object, Value};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(members) => Value::Object(
                members
                    .into_iter()
                    .fold(Object::builder(), |builder, (key, member)| {
                        builder.property(key, Value::from(member))
                    })
                    .build(),
            ),
        }
    }
}
