//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses or any other protocol-specific envelope. Every canvas failure
//! kind has a stable code and a short, non-sensitive message; adapter error
//! detail is logged where it occurs and never copied into the payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The caller has no resolved soul.
    Unauthenticated,
    /// The request body cannot be decoded into the expected shape.
    MalformedRequest,
    /// The requested color is not part of the palette.
    InvalidColor,
    /// A coordinate is outside the canvas.
    InvalidCoordinate,
    /// Reading the canvas from the pixel store failed.
    StoreUnavailable,
    /// Writing a pixel to the pixel store failed.
    StoreWriteFailed,
    /// An unexpected error occurred outside the canvas rules.
    InternalError,
}

impl ErrorCode {
    /// Whether the caller can fix the failure by changing the request.
    pub fn is_client_error(self) -> bool {
        matches!(
            self,
            Self::Unauthenticated
                | Self::MalformedRequest
                | Self::InvalidColor
                | Self::InvalidCoordinate
        )
    }
}

/// Domain error payload.
///
/// ## Invariants
/// - `message` must be non-empty once trimmed of whitespace.
/// - `trace_id`, when present, must be non-empty.
///
/// # Examples
/// ```
/// use canvas::domain::{Error, ErrorCode};
///
/// let err = Error::invalid_color();
/// assert_eq!(err.code(), ErrorCode::InvalidColor);
/// assert_eq!(err.message(), "invalid color");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "ErrorDto", into = "ErrorDto")]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
    details: Option<Value>,
}

/// Validation errors emitted by the fallible constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    /// The message is blank.
    #[error("error message must not be empty")]
    EmptyMessage,
    /// The trace identifier is blank.
    #[error("trace identifier must not be empty")]
    EmptyTraceId,
}

impl Error {
    /// Create a new error, capturing the trace identifier in scope.
    ///
    /// A blank `message` is replaced by a generic one so the non-empty
    /// invariant always holds.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.trim().is_empty() {
            message = "Internal server error".to_owned();
        }
        Self {
            code,
            message,
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Fallible constructor that validates the message content.
    pub fn try_new(
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self::new(code, message))
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier captured when the error was raised.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Supplementary error details for adapters.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach a trace identifier to the error.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attach a trace identifier, rejecting blank values.
    pub fn try_with_trace_id(self, id: impl Into<String>) -> Result<Self, ErrorValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ErrorValidationError::EmptyTraceId);
        }
        Ok(self.with_trace_id(id))
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use canvas::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::malformed_request().with_details(json!({ "line": 1 }));
    /// assert!(err.details().is_some());
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// The caller has no resolved soul.
    pub fn unauthenticated() -> Self {
        Self::new(ErrorCode::Unauthenticated, "can't get your soul")
    }

    /// The paint payload could not be decoded.
    pub fn malformed_request() -> Self {
        Self::new(ErrorCode::MalformedRequest, "invalid form")
    }

    /// The paint color is outside the palette.
    pub fn invalid_color() -> Self {
        Self::new(ErrorCode::InvalidColor, "invalid color")
    }

    /// A paint coordinate is outside the canvas.
    pub fn invalid_coordinate() -> Self {
        Self::new(ErrorCode::InvalidCoordinate, "invalid x/y")
    }

    /// The canvas could not be read from the store.
    pub fn store_unavailable() -> Self {
        Self::new(ErrorCode::StoreUnavailable, "can't get pixels")
    }

    /// The pixel could not be written to the store.
    pub fn store_write_failed() -> Self {
        Self::new(ErrorCode::StoreWriteFailed, "can't paint this pixel")
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorDto {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(alias = "trace_id")]
    trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl From<Error> for ErrorDto {
    fn from(value: Error) -> Self {
        Self {
            code: value.code,
            message: value.message,
            trace_id: value.trace_id,
            details: value.details,
        }
    }
}

impl TryFrom<ErrorDto> for Error {
    type Error = ErrorValidationError;

    fn try_from(value: ErrorDto) -> Result<Self, Self::Error> {
        let ErrorDto {
            code,
            message,
            trace_id,
            details,
        } = value;

        let mut error = Error::try_new(code, message)?;
        error.trace_id = None;
        if let Some(trace_id) = trace_id {
            error = error.try_with_trace_id(trace_id)?;
        }
        error.details = details;
        Ok(error)
    }
}

#[cfg(test)]
mod tests;
