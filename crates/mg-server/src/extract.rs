//! Permissive decoding of request bodies and query strings.
//!
//! The POST handlers accept a JSON object whose string fields are bound
//! loosely: keys match case-insensitively (an exact match wins), `null` and
//! absent fields leave the empty string, unknown keys are ignored, and a
//! top-level `null` binds every field to the empty string. A body that is not
//! JSON, is not an object, or carries a non-string value for a bound field is
//! a [`Error::Parse`].

use mg_core::{Error, Result};
use serde_json::{Map, Value};

/// Bind `fields` of the JSON object in `body`, in the order given.
pub fn string_fields<const N: usize>(body: &[u8], fields: [&str; N]) -> Result<[String; N]> {
    let object: Option<Map<String, Value>> =
        serde_json::from_slice(body).map_err(|e| Error::Parse(e.to_string()))?;

    let mut values = fields.map(|_| String::new());
    let Some(object) = object else {
        return Ok(values);
    };

    for (slot, field) in values.iter_mut().zip(fields) {
        let value = object.get(field).or_else(|| {
            object
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(field))
                .map(|(_, value)| value)
        });
        match value {
            None | Some(Value::Null) => {}
            Some(Value::String(s)) => slot.clone_from(s),
            Some(other) => {
                return Err(Error::Parse(format!(
                    "field `{field}` must be a string, got {other}"
                )))
            }
        }
    }
    Ok(values)
}

/// First value of `key` among decoded query pairs. Keys match exactly.
pub fn first_param(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, value)| value.clone())
}
