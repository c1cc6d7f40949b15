//! Shared helpers for loosely-typed store fields.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Normalizes the store's boolean-or-string flag encoding.
///
/// Older records hold the strings `"true"` / `"false"` where newer ones
/// hold real booleans. Both spellings of truth are accepted; everything
/// else, including null, numbers, and absent values, reads as `false`.
pub fn as_flag(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::String(text) => text == "true",
        _ => false,
    }
}

/// `deserialize_with` adapter applying [`as_flag`] to a record field.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(as_flag(&value))
}

/// First non-empty value among a field's historical spellings.
///
/// The store writes empty strings for cleared relation fields, so an empty
/// value counts as absent here.
pub(crate) fn first_present<'a>(
    primary: &'a Option<String>,
    legacy: &'a Option<String>,
) -> Option<&'a str> {
    primary
        .as_deref()
        .filter(|value| !value.is_empty())
        .or_else(|| legacy.as_deref().filter(|value| !value.is_empty()))
}
