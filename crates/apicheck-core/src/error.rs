//! Usage errors raised at the call site
//!
//! These indicate the test author misused a utility. They are returned before
//! any check is registered and never travel through a check's assertion.

/// Misuse of a fixture or lookup utility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UsageError {
    #[error("Parameter values must be of type '{expected}' for function '{function}'")]
    InvalidArgument {
        /// Signature of the function that rejected its input, e.g. `generateNumber(min, max)`
        function: &'static str,
        /// Expected parameter types
        expected: &'static str,
    },
    #[error("Parameter value {value} exceeds the limit of {limit} for function '{function}'")]
    OutOfRange {
        function: &'static str,
        value: f64,
        limit: usize,
    },
}

impl UsageError {
    #[must_use]
    pub const fn invalid_argument(function: &'static str, expected: &'static str) -> Self {
        Self::InvalidArgument { function, expected }
    }
}
