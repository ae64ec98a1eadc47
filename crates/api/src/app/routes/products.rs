use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Query, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::app::dto::ListProductsQuery;
use crate::app::errors;
use crate::app::services::AppServices;

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<ListProductsQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rej) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "validation_error",
                rej.body_text(),
            );
        }
    };

    let criteria = match query.to_criteria(services.default_window) {
        Ok(c) => c,
        Err(e) => return errors::validation_error_to_response(e),
    };

    match services.lister.list(&criteria) {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => errors::listing_error_to_response(e),
    }
}
