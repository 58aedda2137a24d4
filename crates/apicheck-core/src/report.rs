//! Per-check outcomes as produced by a registrar
//!
//! The predicates never look at outcomes; this is the shape a registrar
//! reports them in, and the interchange format `apicheck --output json` emits.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::check::AssertionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Passed,
    Failed,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Passed => "PASS",
            Self::Failed => "FAIL",
        })
    }
}

/// Result of evaluating one registered check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheckOutcome {
    /// Check description, e.g. "should be a successful response"
    pub description: String,
    pub status: CheckStatus,
    /// Failure detail (failed checks only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckOutcome {
    #[must_use]
    pub fn from_result(description: String, result: Result<(), AssertionError>) -> Self {
        match result {
            Ok(()) => Self {
                description,
                status: CheckStatus::Passed,
                message: None,
            },
            Err(e) => Self {
                description,
                status: CheckStatus::Failed,
                message: Some(e.to_string()),
            },
        }
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Passed
    }
}

/// All outcomes for one response, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheckReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl CheckReport {
    #[must_use]
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// 0 when every check passed, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.all_passed())
    }

    /// One line per check, failures followed by their detail, then a summary.
    #[must_use]
    pub fn to_terminal(&self) -> String {
        let mut out = String::new();
        for o in &self.outcomes {
            out.push_str(&format!("[{}] {}\n", o.status, o.description));
            if let Some(msg) = &o.message {
                out.push_str(&format!("       {msg}\n"));
            }
        }
        out.push_str(&format!(
            "\n{} checks: {} passed, {} failed",
            self.outcomes.len(),
            self.passed(),
            self.failed()
        ));
        out
    }
}

/// Generate JSON Schema for the report format.
#[must_use]
pub fn generate_schema() -> String {
    let schema = schemars::schema_for!(CheckReport);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
