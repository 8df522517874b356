//! Query-string extractor with validation via the `validator` crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Deserializes the query string into `T` and runs `T::validate`.
///
/// Both a malformed query string and a rule violation are rejected with
/// `400 VALIDATION_ERROR`; only the latter carries per-field `details`.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct Page {
///     #[validate(range(min = 0))]
///     limit: i64,
/// }
///
/// async fn list(ValidatedQuery(page): ValidatedQuery<Page>) -> String {
///     format!("limit={}", page.limit)
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        value.validate()?;
        Ok(ValidatedQuery(value))
    }
}
