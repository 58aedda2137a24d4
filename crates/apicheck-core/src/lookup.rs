//! Structural lookup over lists of JSON records

use serde_json::Value;

use crate::coerce::loosely_equal;
use crate::error::UsageError;

/// Position of the first record whose `field` loosely equals `value`.
///
/// Returns `Ok(None)` when nothing matches (including an empty list). A
/// `null` probe also matches records that lack the field entirely.
///
/// # Errors
///
/// Returns [`UsageError::InvalidArgument`] if any element is not a JSON object.
pub fn find_index_by_field(
    list: &[Value],
    field: &str,
    value: &Value,
) -> Result<Option<usize>, UsageError> {
    if !list.iter().all(Value::is_object) {
        return Err(UsageError::invalid_argument(
            "findIndexByField(list, field, value)",
            "Array.<Object>, string, any",
        ));
    }

    Ok(list
        .iter()
        .position(|record| loosely_equal(record.get(field), value)))
}
