//! `jsonschema`-backed schema validator

use apicheck_core::SchemaValidator;
use serde_json::Value;

/// Default cap on reported violations per check.
const MAX_ERRORS: usize = 5;

/// Validates bodies with the `jsonschema` crate.
///
/// The schema is compiled per call; a schema that fails to compile is reported
/// as a violation of the check rather than a panic.
#[derive(Debug, Clone, Copy)]
pub struct JsonSchemaValidator {
    max_errors: usize,
}

impl Default for JsonSchemaValidator {
    fn default() -> Self {
        Self {
            max_errors: MAX_ERRORS,
        }
    }
}

impl JsonSchemaValidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors.max(1);
        self
    }
}

impl SchemaValidator for JsonSchemaValidator {
    fn validate(&self, instance: &Value, schema: &Value) -> Result<(), Vec<String>> {
        let validator =
            jsonschema::validator_for(schema).map_err(|e| vec![format!("invalid schema: {e}")])?;
        let errors: Vec<String> = validator
            .iter_errors(instance)
            .take(self.max_errors)
            .map(|e| e.to_string())
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
