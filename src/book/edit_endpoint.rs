//! Defines the endpoint for updating a book.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    AppState, Error,
    endpoints::{self, format_endpoint},
    store::JsonStore,
};

use super::{
    BookId,
    core::{find_book, replace_book},
    form::{BookForm, parse_book_form},
};

/// The state needed to update a book.
#[derive(Debug, Clone)]
pub struct EditBookState {
    /// The JSON document that holds all application data.
    pub store: Arc<Mutex<JsonStore>>,
}

impl FromRef<AppState> for EditBookState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for updating the book with the ID given in the URL.
///
/// The borrowed state is not part of the edit form and is carried over from
/// the stored book. Redirects to the detail page on success.
pub async fn edit_book_endpoint(
    State(state): State<EditBookState>,
    Path(book_id): Path<BookId>,
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

    let borrowed = match find_book(&books, book_id) {
        Some(book) => book.borrowed,
        None => return Error::UpdateMissingBook.into_alert_response(),
    };

    let book = match parse_book_form(form, book_id, borrowed) {
        Ok(book) => book,
        Err(error) => return error.into_alert_response(),
    };

    replace_book(&mut books, book);

    if let Err(error) = store.set_books(books) {
        return error.into_alert_response();
    }

    (
        HxRedirect(format_endpoint(endpoints::BOOK_DETAIL_VIEW, book_id)),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
