//! Captured HTTP response, as handed over by whatever client performed the request

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Read-only view of one response. Checks never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ResponseSnapshot {
    pub status_code: u16,
    /// Declared media type. Falls back to the `Content-Type` header when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    /// Decoded body; plain-text bodies are carried as a JSON string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
    /// Elapsed time of the exchange in milliseconds
    #[serde(default)]
    pub elapsed_ms: f64,
}

impl ResponseSnapshot {
    #[must_use]
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            content_type: None,
            headers: BTreeMap::new(),
            body: None,
            elapsed_ms: 0.0,
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn with_elapsed_ms(mut self, elapsed_ms: f64) -> Self {
        self.elapsed_ms = elapsed_ms;
        self
    }

    /// Header value by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The content type the server declared, compared verbatim by the checks.
    #[must_use]
    pub fn declared_content_type(&self) -> Option<&str> {
        self.content_type
            .as_deref()
            .or_else(|| self.header("Content-Type"))
    }

    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.header("Location")
    }
}
