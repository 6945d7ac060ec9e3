pub mod blocks;
pub mod health;
pub mod plans;
pub mod ranges;
pub mod subnets;

use crate::models::ErrorResponse;
use axum::{http::StatusCode, Json};

/// All core errors are caller mistakes and map to 400 with the error text
pub(crate) fn bad_request(message: impl ToString) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}
