//! HAL envelope schema and the ISO-8601 datetime pattern
//!
//! The schema only pins down the hypermedia/pagination wrapper (`_links`,
//! `_embedded.resourceList`, `_page`), not the resources inside it. It is handed
//! to the schema validator as-is.

use serde_json::{Value, json};

/// ISO-8601 UTC datetime with optional fractional seconds, e.g. `2024-01-15T12:00:00.123Z`.
pub const ISO_DATETIME_PATTERN: &str =
    "^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}.?[0-9]*Z$";

/// Pattern for timestamp fields, for use as a `"pattern"` keyword in schemas.
#[must_use]
pub const fn regex_iso_datetime() -> &'static str {
    ISO_DATETIME_PATTERN
}

fn link(nullable: bool) -> Value {
    let ty = if nullable {
        json!(["object", "null"])
    } else {
        json!("object")
    };
    json!({
        "type": ty,
        "required": ["href"],
        "properties": {
            "href": { "type": "string", "minLength": 1 }
        }
    })
}

/// JSON Schema for the HAL envelope.
///
/// `next` and `previous` may be `null` on the last/first page; every other
/// link must carry a non-empty `href`.
#[must_use]
pub fn schema_hal() -> Value {
    json!({
        "type": "object",
        "required": ["_links", "_embedded", "_page"],
        "properties": {
            "_links": {
                "type": "object",
                "required": ["self", "next", "previous", "first", "last"],
                "properties": {
                    "self": link(false),
                    "next": link(true),
                    "previous": link(true),
                    "first": link(false),
                    "last": link(false)
                }
            },
            "_embedded": {
                "type": "object",
                "required": ["resourceList"],
                "properties": {
                    "resourceList": { "type": "array" }
                }
            },
            "_page": {
                "type": "object",
                "required": ["size", "totalElements", "totalPages", "number"],
                "properties": {
                    "size": { "type": "number" },
                    "totalElements": { "type": "number" },
                    "totalPages": { "type": "number" },
                    "number": { "type": "number" }
                }
            }
        }
    })
}
