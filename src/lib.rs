//! Homebook is a small self-hosted web app for keeping track of personal
//! expenses, an eBook library, and a recipe box.
//!
//! This library provides an HTTP server that directly serves HTML pages.
//! All data lives in a single JSON document on disk, rewritten in full after
//! every change.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod about;
mod alert;
mod app_state;
mod book;
mod contact;
mod dates;
mod endpoints;
mod expense;
mod html;
mod logging;
mod navigation;
mod not_found;
mod pagination;
mod recipe;
mod routing;
mod store;
#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use logging::logging_middleware;
pub use pagination::PaginationConfig;
pub use routing::build_router;
pub use store::JsonStore;

use crate::{
    alert::{Alert, render_alert},
    html::render_internal_server_error,
    not_found::get_404_not_found_response,
};

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down
/// gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested record was not found.
    ///
    /// For HTTP request handlers, the client should check that the id in the
    /// URL refers to a record that still exists.
    #[error("the requested record could not be found")]
    NotFound,

    /// The amount field of an expense form did not parse as a number.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// A date field did not parse as a calendar date.
    #[error("\"{0}\" is not a valid date")]
    InvalidDate(String),

    /// A required form field was left empty.
    #[error("the {0} field must not be empty")]
    MissingField(&'static str),

    /// A title was shorter than the three character minimum.
    #[error("the title must be at least 3 characters long")]
    TitleTooShort,

    /// A recipe's cooking time was zero or negative.
    #[error("the cooking time must be a positive number of minutes")]
    NonPositiveTime,

    /// Tried to update an expense that is no longer in the store.
    #[error("tried to update an expense that is not in the store")]
    UpdateMissingExpense,

    /// Tried to update a book that is no longer in the store.
    #[error("tried to update a book that is not in the store")]
    UpdateMissingBook,

    /// Tried to update a recipe that is no longer in the store.
    #[error("tried to update a recipe that is not in the store")]
    UpdateMissingRecipe,

    /// The store file could not be read or contained invalid JSON.
    #[error("could not read the data file: {0}")]
    StoreRead(String),

    /// The store file could not be written.
    #[error("could not write the data file: {0}")]
    StoreWrite(String),

    /// Could not acquire the lock on the store.
    #[error("could not acquire the store lock")]
    StoreLock,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::StoreWrite(reason) => {
                tracing::error!("failed to persist the store: {reason}");
                render_internal_server_error(
                    "Save Failed",
                    "Your change could not be written to disk. Please try again.",
                )
            }
            // Any errors that are not handled above are not intended to be
            // shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                render_internal_server_error(
                    "Sorry, something went wrong.",
                    "Try again later or check the server logs.",
                )
            }
        }
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        match self {
            Error::InvalidAmount(amount) => render_alert(
                StatusCode::BAD_REQUEST,
                Alert::error(
                    "Invalid amount",
                    &format!("\"{amount}\" is not a valid number."),
                ),
            ),
            Error::InvalidDate(date) => render_alert(
                StatusCode::BAD_REQUEST,
                Alert::error("Invalid date", &format!("\"{date}\" is not a valid date.")),
            ),
            Error::MissingField(field) => render_alert(
                StatusCode::BAD_REQUEST,
                Alert::error(
                    "Please fill all fields",
                    &format!("The {field} field must not be empty."),
                ),
            ),
            Error::TitleTooShort => render_alert(
                StatusCode::BAD_REQUEST,
                Alert::error(
                    "Title too short",
                    "The title must be at least 3 characters long.",
                ),
            ),
            Error::NonPositiveTime => render_alert(
                StatusCode::BAD_REQUEST,
                Alert::error(
                    "Invalid cooking time",
                    "The cooking time must be a positive number of minutes.",
                ),
            ),
            Error::UpdateMissingExpense => render_alert(
                StatusCode::NOT_FOUND,
                Alert::error(
                    "Could not update expense",
                    "The expense could not be found. \
                    Try refreshing the page to see if it has already been deleted.",
                ),
            ),
            Error::UpdateMissingBook => render_alert(
                StatusCode::NOT_FOUND,
                Alert::error("Could not update book", "The book could not be found."),
            ),
            Error::UpdateMissingRecipe => render_alert(
                StatusCode::NOT_FOUND,
                Alert::error("Could not update recipe", "The recipe could not be found."),
            ),
            Error::StoreWrite(reason) => {
                tracing::error!("failed to persist the store: {reason}");
                render_alert(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::error(
                        "Save failed",
                        "Your change could not be written to disk. Please try again.",
                    ),
                )
            }
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                render_alert(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::error(
                        "Something went wrong",
                        "An unexpected error occurred, check the server logs for more details.",
                    ),
                )
            }
        }
    }
}
