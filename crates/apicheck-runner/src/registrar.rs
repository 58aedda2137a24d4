//! Registrars: where registered checks get evaluated
//!
//! Two execution models:
//! - deferred: collect into a `Vec<Registration>` and [`evaluate`] later
//! - immediate: [`ImmediateRegistrar`] runs each assertion as it is registered
//!
//! Either way each assertion runs exactly once, independently of the others.

use apicheck_core::{Assertion, CheckOutcome, CheckRegistrar, CheckReport, Registration};
use tracing::{debug, warn};

/// Evaluate deferred registrations in registration order.
#[must_use]
pub fn evaluate(registrations: Vec<Registration<'_>>) -> CheckReport {
    CheckReport {
        outcomes: registrations
            .into_iter()
            .map(|r| run_one(r.description, r.assertion))
            .collect(),
    }
}

fn run_one(description: String, assertion: Assertion<'_>) -> CheckOutcome {
    let outcome = CheckOutcome::from_result(description, assertion());
    match &outcome.message {
        None => debug!(check = outcome.description.as_str(), "check passed"),
        Some(msg) => warn!(
            check = outcome.description.as_str(),
            reason = msg.as_str(),
            "check failed"
        ),
    }
    outcome
}

/// Evaluates every assertion at registration time.
#[derive(Debug, Default)]
pub struct ImmediateRegistrar {
    outcomes: Vec<CheckOutcome>,
}

impl ImmediateRegistrar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Outcomes so far, in registration order.
    #[must_use]
    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn into_report(self) -> CheckReport {
        CheckReport {
            outcomes: self.outcomes,
        }
    }
}

impl<'a> CheckRegistrar<'a> for ImmediateRegistrar {
    fn register(&mut self, description: String, assertion: Assertion<'a>) {
        self.outcomes.push(run_one(description, assertion));
    }
}
