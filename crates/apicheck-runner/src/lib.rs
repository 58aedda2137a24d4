//! apicheck-runner: collaborators that make apicheck checks executable
//!
//! Schema validation via `jsonschema`, registrars that evaluate checks,
//! snapshot loading, and random fixture generation.

pub mod fixtures;
pub mod registrar;
pub mod snapshot;
pub mod validator;

use apicheck_core::{CheckReport, Expectations, Registration, ResponseChecks, ResponseSnapshot};

pub use fixtures::{generate_number, generate_string};
pub use registrar::{ImmediateRegistrar, evaluate};
pub use snapshot::{SnapshotError, load_response};
pub use validator::JsonSchemaValidator;

/// Which composite dispatcher to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dispatch {
    /// Status, content type, schema, location
    Common,
    /// [`Dispatch::Common`] plus the elapsed-time check
    #[default]
    CommonAndTime,
}

/// Register the checks for `expect` against `response`, then evaluate them.
#[must_use]
pub fn check_response(
    response: &ResponseSnapshot,
    expect: &Expectations,
    dispatch: Dispatch,
) -> CheckReport {
    let validator = JsonSchemaValidator::new();
    let mut registrations: Vec<Registration> = Vec::new();
    let mut checks = ResponseChecks::new(response, &validator, &mut registrations);
    match dispatch {
        Dispatch::Common => checks.test_common(expect),
        Dispatch::CommonAndTime => checks.test_common_and_time(expect),
    }
    evaluate(registrations)
}
