//! apicheck-core: Declarative HTTP response checks
//!
//! Given a captured response and a set of expected properties, registers one
//! independently reported check per property. This crate decides *which*
//! checks to register and *what* each asserts; evaluating them, validating
//! schemas, and reporting are left to the collaborators behind
//! [`CheckRegistrar`] and [`SchemaValidator`].

pub mod check;
pub mod coerce;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod hal;
pub mod lookup;
pub mod predicates;
pub mod report;
pub mod response;

pub use check::{
    Assertion, AssertionError, CheckRegistrar, Registration, ResponseClass, SchemaValidator,
};
pub use config::{ConfigError, ExpectationConfig, SchemaPreset, SuiteConfig};
pub use dispatch::Expectations;
pub use error::UsageError;
pub use hal::{ISO_DATETIME_PATTERN, regex_iso_datetime, schema_hal};
pub use lookup::find_index_by_field;
pub use predicates::ResponseChecks;
pub use report::{CheckOutcome, CheckReport, CheckStatus};
pub use response::ResponseSnapshot;
