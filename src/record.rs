//! Record model — a JSON object identified by its `id` field.

use serde_json::Value;
use uuid::Uuid;

use crate::error::{Result, StoreError};

/// A stored record. Always a JSON object once it passes validation.
pub type Record = Value;

/// Name of the field used as the filename stem.
pub const ID_FIELD: &str = "id";

/// Extract the record id as a string.
///
/// String ids are used as-is; numeric ids are rendered in decimal.
/// Anything else (missing, null, bool, nested) yields `None`.
pub fn record_id(item: &Record) -> Option<String> {
    match item.get(ID_FIELD)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Give the item a fresh UUID v4 `id` if it does not carry a usable one.
///
/// Returns the id the item ends up with. Fails if `item` is not an object.
pub fn assign_id(item: &mut Record) -> Result<String> {
    if let Some(id) = record_id(item).filter(|id| !id.trim().is_empty()) {
        return Ok(id);
    }
    let obj = item
        .as_object_mut()
        .ok_or_else(|| StoreError::invalid("expected an item object"))?;
    let id = Uuid::new_v4().to_string();
    obj.insert(ID_FIELD.to_string(), Value::String(id.clone()));
    Ok(id)
}

/// Check that `name` can be used as a single path segment.
///
/// `what` names the argument in the error message ("schemaName", "id").
pub(crate) fn check_segment(name: &str, what: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(StoreError::invalid(format!("expected {}", what)));
    }
    if name == "." || name == ".." || name.contains(['/', '\\', '\0']) {
        return Err(StoreError::invalid(format!("{} is not a valid path segment: {:?}", what, name)));
    }
    Ok(())
}
