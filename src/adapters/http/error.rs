//! Error responses shared by every HTTP handler.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::HashMap;

use crate::application::TriageError;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::solution::{SolutionNotFound, WizardError};
use crate::domain::worry::WorryError;

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, String>>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        Self {
            code: err.code.to_string(),
            message: err.message.clone(),
            details: (!err.details.is_empty()).then(|| err.details.clone()),
        }
    }
}

/// A handler failure, rendered as status plus [`ErrorResponse`].
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    BadRequest(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Domain(err) => status_for(err.code),
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        c if c.is_not_found() => StatusCode::NOT_FOUND,
        ErrorCode::StorageError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::BadRequest(message) => ErrorResponse::bad_request(message.clone()),
            ApiError::Domain(err) => ErrorResponse::from(err),
        };
        if status.is_server_error() {
            tracing::error!(code = %body.code, message = %body.message, "request failed");
        } else {
            tracing::debug!(code = %body.code, message = %body.message, "request rejected");
        }
        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}

impl From<WorryError> for ApiError {
    fn from(err: WorryError) -> Self {
        ApiError::Domain(err.into())
    }
}

impl From<TriageError> for ApiError {
    fn from(err: TriageError) -> Self {
        ApiError::Domain(err.into())
    }
}

impl From<WizardError> for ApiError {
    fn from(err: WizardError) -> Self {
        ApiError::Domain(err.into())
    }
}

impl From<SolutionNotFound> for ApiError {
    fn from(err: SolutionNotFound) -> Self {
        ApiError::Domain(err.into())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Domain(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::WorryId;
    use crate::domain::solution::WizardStep;

    #[test]
    fn not_found_maps_to_404() {
        let err: ApiError = WorryError::not_found(WorryId::new()).into();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn gated_input_maps_to_422() {
        let err: ApiError = WizardError::StepIncomplete(WizardStep::Analysis).into();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let err: ApiError = TriageError::InsightsRequired.into();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let err = ApiError::bad_request("Invalid worry ID");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn error_body_carries_code_and_details() {
        let domain: DomainError = WizardError::StepIncomplete(WizardStep::Analysis).into();
        let body = ErrorResponse::from(&domain);
        assert_eq!(body.code, "STEP_INCOMPLETE");
        assert_eq!(
            body.details.unwrap().get("step").map(String::as_str),
            Some("Analyze Solutions")
        );
    }
}
