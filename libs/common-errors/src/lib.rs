use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// HTTP error surface. Renders as a bare status code with an empty
/// body; code, message, and details go to the tracing pipeline.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    code: String,
    message: String,
    details: Option<String>,
}

impl AppError {
    pub fn not_found(code: &str, message: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            code: code.to_string(),
            message: message.to_string(),
            details: None,
        }
    }

    pub fn not_found_with_details(
        code: &str, message: &str, details: &str,
    ) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            code: code.to_string(),
            message: message.to_string(),
            details: Some(details.to_string()),
        }
    }

    pub fn status(&self) -> StatusCode { self.status }

    pub fn code(&self) -> &str { &self.code }

    pub fn message(&self) -> &str { &self.message }

    pub fn details(&self) -> Option<&str> { self.details.as_deref() }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Diagnostic detail goes to the error pipeline, never the body.
        tracing::error!(
            code = %self.code,
            details = self.details.as_deref().unwrap_or(""),
            "{}",
            self.message
        );
        self.status.into_response()
    }
}
