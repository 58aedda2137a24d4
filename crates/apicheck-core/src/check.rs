//! Check registration and the collaborator capabilities the predicates call into
//!
//! A check is a description plus a zero-argument assertion. Predicates build
//! both synchronously and hand them to a [`CheckRegistrar`]; when (and whether
//! eagerly) the assertion runs is the registrar's business.

use std::fmt;

use serde_json::Value;

/// Deferred assertion body. Evaluated at most once.
pub type Assertion<'a> = Box<dyn FnOnce() -> Result<(), AssertionError> + 'a>;

/// Sink for named, independently reported checks.
pub trait CheckRegistrar<'a> {
    fn register(&mut self, description: String, assertion: Assertion<'a>);
}

/// A check that has been registered but not yet evaluated.
pub struct Registration<'a> {
    pub description: String,
    pub assertion: Assertion<'a>,
}

impl Registration<'_> {
    /// Run the assertion, consuming the registration.
    pub fn evaluate(self) -> Result<(), AssertionError> {
        (self.assertion)()
    }
}

impl fmt::Debug for Registration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Collect registrations for later, batch evaluation.
impl<'a> CheckRegistrar<'a> for Vec<Registration<'a>> {
    fn register(&mut self, description: String, assertion: Assertion<'a>) {
        self.push(Registration {
            description,
            assertion,
        });
    }
}

/// Structural validation of a body against a JSON Schema.
///
/// `Err` carries one human-readable message per violation.
pub trait SchemaValidator {
    fn validate(&self, instance: &Value, schema: &Value) -> Result<(), Vec<String>>;
}

impl<F> SchemaValidator for F
where
    F: Fn(&Value, &Value) -> Result<(), Vec<String>>,
{
    fn validate(&self, instance: &Value, schema: &Value) -> Result<(), Vec<String>> {
        self(instance, schema)
    }
}

/// Why a registered check failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssertionError {
    #[error("expected status {expected}, got {actual}")]
    StatusMismatch { expected: i64, actual: u16 },

    #[error("expected content type '{expected}', got {}", quoted(.actual.as_deref()))]
    ContentTypeMismatch {
        expected: String,
        actual: Option<String>,
    },

    #[error("expected a response below {limit_ms}ms, took {elapsed_ms}ms")]
    TooSlow { elapsed_ms: f64, limit_ms: f64 },

    #[error("body does not match schema: {}", .errors.join("; "))]
    SchemaViolation { errors: Vec<String> },

    #[error("expected location '{expected}', got {}", quoted(.actual.as_deref()))]
    LocationMismatch {
        expected: String,
        actual: Option<String>,
    },

    /// The check itself was configured with an unusable expectation.
    #[error("misconfigured check: {reason}")]
    Misconfigured { reason: String },
}

fn quoted(value: Option<&str>) -> String {
    value.map_or_else(|| "no value".to_string(), |v| format!("'{v}'"))
}

/// HTTP response class, keyed by status code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseClass {
    /// 100–199
    Informational,
    /// 200–299
    Success,
    /// 300–399
    Redirection,
    /// 400–499
    ClientError,
    /// 500–599
    ServerError,
}

impl ResponseClass {
    /// Classify a status code; `None` outside 100–599.
    #[must_use]
    pub const fn from_status(status: i64) -> Option<Self> {
        match status {
            100..=199 => Some(Self::Informational),
            200..=299 => Some(Self::Success),
            300..=399 => Some(Self::Redirection),
            400..=499 => Some(Self::ClientError),
            500..=599 => Some(Self::ServerError),
            _ => None,
        }
    }

    /// Check description used when asserting a status of this class.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Informational => "should be an information response",
            Self::Success => "should be a successful response",
            Self::Redirection => "should be a redirection response",
            Self::ClientError => "should be a client error response",
            Self::ServerError => "should be a server error response",
        }
    }
}
