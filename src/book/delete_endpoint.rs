//! Defines the endpoint for deleting a book.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{AppState, Error, endpoints, store::JsonStore};

use super::{BookId, core::remove_book};

/// The state needed to delete a book.
#[derive(Debug, Clone)]
pub struct DeleteBookState {
    /// The JSON document that holds all application data.
    pub store: Arc<Mutex<JsonStore>>,
}

impl FromRef<AppState> for DeleteBookState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for deleting the book with the ID given in the URL.
///
/// Deleting a book that does not exist is treated as a no-op. Redirects to
/// the library since the delete button lives on the detail page.
pub async fn delete_book_endpoint(
    State(state): State<DeleteBookState>,
    Path(book_id): Path<BookId>,
) -> Response {
    let mut store = match state.store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire store lock: {error}");
            return Error::StoreLock.into_alert_response();
        }
    };

    let mut books = store.books();
    remove_book(&mut books, book_id);

    if let Err(error) = store.set_books(books) {
        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::BOOKS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
