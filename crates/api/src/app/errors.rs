use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use storefront_catalog::RepositoryError;
use storefront_core::DomainError;
use storefront_listing::ListingError;

pub fn validation_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
    }
}

pub fn listing_error_to_response(err: ListingError) -> axum::response::Response {
    tracing::error!(error = %err, "product listing failed");
    match &err {
        ListingError::Repository(RepositoryError::Timeout(_)) => json_error(
            StatusCode::GATEWAY_TIMEOUT,
            "repository_timeout",
            err.to_string(),
        ),
        ListingError::Repository(_) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "repository_error",
            err.to_string(),
        ),
        ListingError::Pricing(_) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "pricing_error",
            err.to_string(),
        ),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
