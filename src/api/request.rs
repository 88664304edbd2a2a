//! JSON request and error payloads for an HTTP front end.
//!
//! The transport itself lives outside this crate; these types fix the wire
//! shape: requests carry `{"markdown": "..."}` and failures are reported as
//! `{"error": "...", "details": "..."}`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Render request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderRequest {
    /// Plan text
    #[serde(default)]
    pub markdown: Option<String>,
}

impl RenderRequest {
    /// Create a request for the given text.
    pub fn new(markdown: impl Into<String>) -> Self {
        Self {
            markdown: Some(markdown.into()),
        }
    }

    /// Parse a request body.
    ///
    /// ```
    /// use planpdf::api::RenderRequest;
    ///
    /// let request = RenderRequest::from_json(r##"{"markdown": "# Plan"}"##)?;
    /// assert_eq!(request.markdown()?, "# Plan");
    /// # Ok::<(), planpdf::Error>(())
    /// ```
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// The text to render. Missing or empty text is [`Error::EmptyInput`].
    pub fn markdown(&self) -> Result<&str> {
        match self.markdown.as_deref() {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(Error::EmptyInput),
        }
    }
}

/// Error body returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short error kind
    pub error: String,
    /// Underlying error message, omitted for missing input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Build the response body for an error.
    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::EmptyInput => Self {
                error: "markdown missing".to_string(),
                details: None,
            },
            Error::InvalidRequest(_) | Error::Json(_) => Self {
                error: "invalid request".to_string(),
                details: Some(err.to_string()),
            },
            _ => Self {
                error: "failed to build pdf".to_string(),
                details: Some(err.to_string()),
            },
        }
    }

    /// HTTP status code matching the error class.
    pub fn status_for(err: &Error) -> u16 {
        if err.is_client_error() {
            400
        } else {
            500
        }
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<&Error> for ErrorResponse {
    fn from(err: &Error) -> Self {
        Self::from_error(err)
    }
}
