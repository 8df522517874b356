//! Reusable OpenAPI response types for handler annotations.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 2010,
        "error": "DATABASE_DECODE",
        "message": "Failed to decode database response"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "error": "VALIDATION_ERROR",
        "message": "Request validation failed",
        "details": {
            "limit": [{
                "code": "range",
                "message": null,
                "params": {"min": 0.0, "value": -1}
            }]
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);
