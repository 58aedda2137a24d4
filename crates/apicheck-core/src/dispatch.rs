//! Composite dispatch: run the predicates for whichever expectations were supplied
//!
//! Each expectation is gated on its own. Asserting only status and schema
//! yields exactly two domain checks (plus the body log), never a bundle of
//! vacuous ones.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coerce::is_truthy;
use crate::predicates::ResponseChecks;

/// Optional expectations for one response.
///
/// An absent or falsy field means "do not assert this property": status `0`,
/// time `0`, empty strings, and a `null`/`false`/`0`/`""` schema are skipped.
/// Anything else truthy is asserted, even when unusable, in which case the
/// predicate registers an always-failing check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Expectations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i64>,
    /// Upper bound (exclusive) for the elapsed time, in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_schema: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Expectations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(mut self, status_code: i64) -> Self {
        self.status_code = Some(status_code);
        self
    }

    #[must_use]
    pub fn within_ms(mut self, time_ms: f64) -> Self {
        self.time_ms = Some(time_ms);
        self
    }

    #[must_use]
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    #[must_use]
    pub fn json_schema(mut self, schema: Value) -> Self {
        self.json_schema = Some(schema);
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl ResponseChecks<'_, '_> {
    /// Body log, then status, content type, schema and location for each supplied expectation.
    ///
    /// `time_ms` is ignored here; see [`Self::test_common_and_time`].
    pub fn test_common(&mut self, expect: &Expectations) {
        self.log_response_body();
        if let Some(code) = expect.status_code.filter(|c| *c != 0) {
            self.check_status(code);
        }
        if let Some(ct) = expect.content_type.as_deref().filter(|s| !s.is_empty()) {
            self.check_content_type(ct);
        }
        if let Some(schema) = expect.json_schema.as_ref().filter(|s| is_truthy(s)) {
            self.check_json_schema(schema);
        }
        if let Some(location) = expect.location.as_deref().filter(|s| !s.is_empty()) {
            self.check_location(location);
        }
    }

    /// [`Self::test_common`] followed by the elapsed-time check when `time_ms` is supplied.
    pub fn test_common_and_time(&mut self, expect: &Expectations) {
        self.test_common(expect);
        // NaN is falsy, negative limits are not
        if let Some(limit) = expect.time_ms.filter(|t| *t != 0.0 && !t.is_nan()) {
            self.check_time(limit);
        }
    }
}
