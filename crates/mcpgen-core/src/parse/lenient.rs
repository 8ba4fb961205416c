//! Deserializers that swallow shape mismatches.
//!
//! OpenAPI documents seen in the wild are frequently hand-edited. A field with
//! the wrong type is logged and replaced by its default so one bad entry never
//! fails a whole generation run.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize `T`, falling back to `T::default()` when the value has the wrong shape.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(from_value_or_default(value))
}

/// Deserialize a list, dropping the elements that have the wrong shape.
pub fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        if !value.is_null() {
            log::warn!("expected a list, ignoring {value}");
        }
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item.clone()) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                log::warn!("skipping malformed entry {item}: {e}");
                None
            }
        })
        .collect())
}

pub(crate) fn from_value_or_default<T>(value: Value) -> T
where
    T: DeserializeOwned + Default,
{
    if value.is_null() {
        return T::default();
    }
    match serde_json::from_value(value) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::warn!("ignoring malformed field: {e}");
            T::default()
        }
    }
}
