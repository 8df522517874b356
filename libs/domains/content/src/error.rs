use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use validator::ValidationErrors;

use crate::models::CollectionKind;

#[derive(Debug, Error)]
pub enum ContentError {
    /// No connection was established at startup
    #[error("Document store is not available")]
    StoreUnavailable,

    #[error("Database error: {0}")]
    Database(String),

    /// A stored document does not fit the output shape of its collection
    #[error("Invalid {collection} record: {reason}")]
    InvalidRecord {
        collection: CollectionKind,
        reason: String,
    },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ContentResult<T> = Result<T, ContentError>;

impl From<ContentError> for AppError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::StoreUnavailable => {
                AppError::ServiceUnavailable("Document store is not available".to_string())
            }
            ContentError::Database(msg) => AppError::Database(msg),
            err @ ContentError::InvalidRecord { .. } => AppError::DatabaseDecode(err.to_string()),
            ContentError::Validation(msg) => AppError::BadRequest(msg),
            ContentError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ContentError {
    fn from(err: mongodb::error::Error) -> Self {
        ContentError::Database(err.to_string())
    }
}

impl From<ValidationErrors> for ContentError {
    fn from(err: ValidationErrors) -> Self {
        ContentError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ContentError::StoreUnavailable, StatusCode::SERVICE_UNAVAILABLE),
            (
                ContentError::Database("timeout".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ContentError::InvalidRecord {
                    collection: CollectionKind::Event,
                    reason: "missing field `title`".into(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ContentError::Validation("limit must be non-negative".into()),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_invalid_record_names_collection() {
        let err = ContentError::InvalidRecord {
            collection: CollectionKind::GalleryImage,
            reason: "missing field `url`".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid galleryimage record: missing field `url`"
        );
    }
}
