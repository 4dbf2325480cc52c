//! The fallback page for routes that do not exist.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// The handler registered as the router fallback.
pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

/// Render the 404 page as a response.
pub fn get_404_not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        error_view(
            "Page Not Found",
            "404",
            "Whoops! That page does not exist.",
            "Check the URL or head back to the homepage.",
        ),
    )
        .into_response()
}
