//! Standardized error response types.
//!
//! Every failure is reported as `{"errors": [{"msg": ..., "param": ...}]}`,
//! whether it is a single condition or an itemized validation result.

use serde::{Deserialize, Serialize};

/// A single error item. `param` names the offending request field when the
/// error is tied to one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

impl FieldError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: None,
        }
    }

    pub fn for_field(param: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: Some(param.into()),
        }
    }
}

/// Error body carried by every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub errors: Vec<FieldError>,
}

impl ErrorResponse {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// Single-item body for errors that are not tied to a field.
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError::new(msg)],
        }
    }
}
