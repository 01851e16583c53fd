use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use domain::DomainError;
use thiserror::Error;
use tracing::{error, warn};
use user_feature::UserFeatureError;

use crate::dto::ErrorBody;

const INTERNAL_DETAIL: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be decoded into the expected shape
    #[error("{0}")]
    Unprocessable(String),

    #[error(transparent)]
    Feature(#[from] UserFeatureError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Feature(UserFeatureError::Domain(err))
    }
}

impl ApiError {
    fn status_and_detail(&self) -> (StatusCode, String) {
        match self {
            ApiError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            ApiError::Feature(err) => match err {
                UserFeatureError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
                UserFeatureError::InvalidInput(msg)
                | UserFeatureError::Domain(DomainError::Validation(msg)) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, msg.clone())
                }
                UserFeatureError::CreateFailed(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
                }
                UserFeatureError::Domain(DomainError::Database(_)) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_DETAIL.to_string())
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();

        if status.is_server_error() {
            error!(error = %self, status = status.as_u16(), "request failed");
        } else {
            warn!(error = %self, status = status.as_u16(), "request rejected");
        }

        (status, Json(ErrorBody { detail })).into_response()
    }
}
