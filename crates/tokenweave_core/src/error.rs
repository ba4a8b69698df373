use std::fmt;

use thiserror::Error;

/// A single structural problem found during schema validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaIssue {
    /// Dotted path to the offending field, e.g. `tokens.components.button.base`.
    pub path: String,
    pub message: String,
}

impl SchemaIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Structural validation failure carrying every offending field path.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid design system config: {}", summarize(.issues))]
pub struct SchemaError {
    pub issues: Vec<SchemaIssue>,
}

impl SchemaError {
    pub fn new(issues: Vec<SchemaIssue>) -> Self {
        Self { issues }
    }

    /// Paths of all offending fields, in discovery order.
    pub fn paths(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.path.as_str()).collect()
    }
}

fn summarize(issues: &[SchemaIssue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Error)]
pub enum TokenweaveError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Raw text was not well-formed JSON. Distinct from [`SchemaError`] so
    /// callers can tell garbled text from well-formed-but-wrong-shape input.
    #[error("failed to parse design system JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown custom design system id: {0}")]
    NotFound(String),
}
