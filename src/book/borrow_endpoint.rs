//! Defines the endpoint for toggling a book's borrowed state.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};

use crate::{AppState, Error, store::JsonStore};

use super::{BookId, books_page::book_card, core::replace_book};

/// The state needed to borrow or return a book.
#[derive(Debug, Clone)]
pub struct BorrowBookState {
    /// The JSON document that holds all application data.
    pub store: Arc<Mutex<JsonStore>>,
}

impl FromRef<AppState> for BorrowBookState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler that flips the borrowed state of a book.
///
/// Returns the updated card markup so htmx can swap it in place.
pub async fn borrow_book_endpoint(
    State(state): State<BorrowBookState>,
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

    let mut book = match books.iter().find(|book| book.id == book_id) {
        Some(book) => book.clone(),
        None => return Error::UpdateMissingBook.into_alert_response(),
    };

    book.borrowed = !book.borrowed;
    replace_book(&mut books, book.clone());

    if let Err(error) = store.set_books(books) {
        return error.into_alert_response();
    }

    book_card(&book).into_response()
}
