//! Response predicate library
//!
//! Every predicate registers exactly one check and never short-circuits
//! another. Assertion failures surface only when the registrar evaluates the
//! check. An unusable expectation (status outside 100–599, non-positive time
//! limit, non-object schema) registers a check that always fails, so the
//! misconfiguration shows up in the report instead of being skipped.

use serde_json::Value;
use tracing::{debug, warn};

use crate::check::{Assertion, AssertionError, CheckRegistrar, ResponseClass, SchemaValidator};
use crate::coerce::{format_number, is_truthy};
use crate::response::ResponseSnapshot;

/// Binds one response to the validator and registrar its checks report through.
pub struct ResponseChecks<'a, 'r> {
    response: &'a ResponseSnapshot,
    validator: &'a dyn SchemaValidator,
    registrar: &'r mut dyn CheckRegistrar<'a>,
}

impl<'a, 'r> ResponseChecks<'a, 'r> {
    pub fn new(
        response: &'a ResponseSnapshot,
        validator: &'a dyn SchemaValidator,
        registrar: &'r mut dyn CheckRegistrar<'a>,
    ) -> Self {
        Self {
            response,
            validator,
            registrar,
        }
    }

    fn register(&mut self, description: String, assertion: Assertion<'a>) {
        debug!(check = description.as_str(), "registering check");
        self.registrar.register(description, assertion);
    }

    fn register_misconfigured(&mut self, description: &str, reason: String) {
        warn!(
            check = description,
            reason = reason.as_str(),
            "registering always-failing check"
        );
        self.register(
            description.to_string(),
            Box::new(move || Err(AssertionError::Misconfigured { reason })),
        );
    }

    /// Assert the response status equals `expected`, described by its response class.
    pub fn check_status(&mut self, expected: i64) {
        let Some(class) = ResponseClass::from_status(expected) else {
            self.register_misconfigured(
                "should be tested against an existing status code",
                format!("status code {expected} is outside 100-599"),
            );
            return;
        };

        let response = self.response;
        self.register(
            class.description().to_string(),
            Box::new(move || {
                if i64::from(response.status_code) == expected {
                    Ok(())
                } else {
                    Err(AssertionError::StatusMismatch {
                        expected,
                        actual: response.status_code,
                    })
                }
            }),
        );
    }

    /// Assert the declared content type equals `expected` exactly (case-sensitive).
    pub fn check_content_type(&mut self, expected: &str) {
        let response = self.response;
        let expected = expected.to_string();
        self.register(
            format!("should be of type '{expected}'"),
            Box::new(move || match response.declared_content_type() {
                Some(actual) if actual == expected => Ok(()),
                actual => Err(AssertionError::ContentTypeMismatch {
                    expected,
                    actual: actual.map(str::to_string),
                }),
            }),
        );
    }

    /// Assert the response arrived strictly within `limit_ms` milliseconds.
    pub fn check_time(&mut self, limit_ms: f64) {
        // NaN also fails this comparison
        if !(limit_ms > 0.0) {
            self.register_misconfigured(
                "should be tested against a strictly positive time interval",
                format!("time limit {limit_ms}ms is not strictly positive"),
            );
            return;
        }

        let response = self.response;
        self.register(
            format!("should respond within {}", describe_duration(limit_ms)),
            Box::new(move || {
                if response.elapsed_ms < limit_ms {
                    Ok(())
                } else {
                    Err(AssertionError::TooSlow {
                        elapsed_ms: response.elapsed_ms,
                        limit_ms,
                    })
                }
            }),
        );
    }

    /// Assert the body conforms to `schema` via the schema validator.
    ///
    /// The schema is forwarded to the validator unchanged. A schema that is not
    /// a JSON object registers an always-failing check.
    pub fn check_json_schema(&mut self, schema: &Value) {
        if !schema.is_object() {
            self.register_misconfigured(
                "should be tested against a JSON schema object",
                format!("expected a schema object, got {schema}"),
            );
            return;
        }

        let response = self.response;
        let validator = self.validator;
        let schema = schema.clone();
        self.register(
            "should match against the JSON schema".to_string(),
            Box::new(move || {
                let body = response.body.as_ref().unwrap_or(&Value::Null);
                validator
                    .validate(body, &schema)
                    .map_err(|errors| AssertionError::SchemaViolation { errors })
            }),
        );
    }

    /// Assert the `Location` header equals `expected` exactly.
    pub fn check_location(&mut self, expected: &str) {
        let response = self.response;
        let expected = expected.to_string();
        self.register(
            format!("should return the location '{expected}'"),
            Box::new(move || match response.location() {
                Some(actual) if actual == expected => Ok(()),
                actual => Err(AssertionError::LocationMismatch {
                    expected,
                    actual: actual.map(str::to_string),
                }),
            }),
        );
    }

    /// Register a non-asserting check whose description carries the body.
    ///
    /// Nothing is registered when the body is absent or falsy.
    pub fn log_response_body(&mut self) {
        let Some(body) = self.response.body.as_ref().filter(|b| is_truthy(b)) else {
            return;
        };
        let rendered = match body {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        self.register(format!("response body: {rendered}"), Box::new(|| Ok(())));
    }
}

/// "500 millisecond(s)" below one second, "1.5 second(s)" from there on.
fn describe_duration(ms: f64) -> String {
    if ms >= 1000.0 {
        format!("{} second(s)", format_number(ms / 1000.0))
    } else {
        format!("{} millisecond(s)", format_number(ms))
    }
}
