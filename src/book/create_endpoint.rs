//! Defines the endpoint for adding a book.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{AppState, Error, endpoints, store::JsonStore};

use super::{
    core::next_book_id,
    form::{BookForm, parse_book_form},
};

/// The state needed to add a book.
#[derive(Debug, Clone)]
pub struct CreateBookState {
    /// The JSON document that holds all application data.
    pub store: Arc<Mutex<JsonStore>>,
}

impl FromRef<AppState> for CreateBookState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for adding a book, redirects to the library on success.
///
/// New books are never borrowed.
pub async fn create_book_endpoint(
    State(state): State<CreateBookState>,
    Form(form): Form<BookForm>,
) -> Response {
    let mut store = match state.store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire store lock: {error}");
            return Error::StoreLock.into_alert_response();
        }
    };

    let mut books = store.books();

    let book = match parse_book_form(form, next_book_id(&books), false) {
        Ok(book) => book,
        Err(error) => return error.into_alert_response(),
    };

    books.push(book);

    if let Err(error) = store.set_books(books) {
        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::BOOKS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
