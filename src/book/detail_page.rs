//! Defines the route handlers for the book detail and edit pages.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    dates::date_input_value,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, base, link,
    },
    navigation::NavBar,
    store::JsonStore,
};

use super::{Book, BookId, core::find_book, form::book_form_fields};

/// The state needed for the book detail and edit pages.
#[derive(Debug, Clone)]
pub struct BookDetailState {
    /// The JSON document that holds all application data.
    pub store: Arc<Mutex<JsonStore>>,
}

impl FromRef<AppState> for BookDetailState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// Render the detail page for a single book.
///
/// A missing ID renders an explicit not-found state rather than the generic
/// 404 page, the book may simply have been deleted in another tab.
pub async fn get_book_detail_page(
    State(state): State<BookDetailState>,
    Path(book_id): Path<BookId>,
) -> Result<Response, Error> {
    let books = {
        let store = state.store.lock().map_err(|_| Error::StoreLock)?;
        store.books()
    };

    let response = match find_book(&books, book_id) {
        Some(book) => book_detail_view(book).into_response(),
        None => (StatusCode::NOT_FOUND, book_missing_view()).into_response(),
    };

    Ok(response)
}

/// Render the edit page for a single book.
pub async fn get_edit_book_page(
    State(state): State<BookDetailState>,
    Path(book_id): Path<BookId>,
) -> Result<Response, Error> {
    let books = {
        let store = state.store.lock().map_err(|_| Error::StoreLock)?;
        store.books()
    };

    let response = match find_book(&books, book_id) {
        Some(book) => edit_book_view(book).into_response(),
        None => (StatusCode::NOT_FOUND, book_missing_view()).into_response(),
    };

    Ok(response)
}

fn book_detail_view(book: &Book) -> Markup {
    let nav_bar = NavBar::new(endpoints::BOOKS_VIEW).into_html();
    let edit_url = format_endpoint(endpoints::EDIT_BOOK_VIEW, book.id);
    let delete_url = format_endpoint(endpoints::DELETE_BOOK, book.id);

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            article class="w-full max-w-screen-md" data-book-detail="true" data-book-id=(book.id)
            {
                @if !book.image.is_empty() {
                    img
                        src=(book.image)
                        alt=(format!("Cover of {}", book.title))
                        class="h-64 w-full object-cover rounded mb-4";
                }

                h1 class="text-2xl font-bold mb-2" { (book.title) }

                p class="text-gray-500 dark:text-gray-400 mb-4"
                {
                    (book.author) " · " (book.genre) " · published " (date_input_value(book.publication_date))

                    @if book.borrowed {
                        " · currently borrowed"
                    }
                }

                p class="mb-6" { (book.detail) }

                div class="flex gap-4 items-center"
                {
                    a href=(edit_url) class=(LINK_STYLE) { "Edit" }

                    button
                        class=(BUTTON_DELETE_STYLE)
                        hx-delete=(delete_url)
                        hx-confirm=(format!(
                            "Are you sure you want to delete '{}'? This cannot be undone.",
                            book.title
                        ))
                    {
                        "Delete"
                    }

                    (link(endpoints::BOOKS_VIEW, "Back to the library"))
                }
            }
        }
    );

    base(&book.title, &[], &content)
}

fn edit_book_view(book: &Book) -> Markup {
    let nav_bar = NavBar::new(endpoints::BOOKS_VIEW).into_html();
    let save_url = format_endpoint(endpoints::PUT_BOOK, book.id);
    let detail_url = format_endpoint(endpoints::BOOK_DETAIL_VIEW, book.id);

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-md"
            {
                h1 class="text-2xl font-bold mb-4" { "Edit Book" }

                form
                    hx-put=(save_url)
                    hx-target-error="#alert-container"
                    class="grid grid-cols-1 gap-4 md:grid-cols-2 w-full p-4 bg-white \
                        rounded shadow dark:bg-gray-800 text-gray-900 dark:text-white"
                {
                    (book_form_fields(Some(book)))

                    div class="md:col-span-2"
                    {
                        button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save" }
                    }
                }

                p class="mt-4" { (link(&detail_url, "Cancel")) }
            }
        }
    );

    base("Edit Book", &[], &content)
}

fn book_missing_view() -> Markup {
    let nav_bar = NavBar::new(endpoints::BOOKS_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-md text-center py-16" data-book-missing="true"
            {
                h1 class="text-2xl font-bold mb-4" { "Book not found." }

                p { (link(endpoints::BOOKS_VIEW, "Back to the library")) }
            }
        }
    );

    base("Book not found", &[], &content)
}

#[cfg(test)]
mod book_detail_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use scraper::Selector;
    use time::macros::date;

    use crate::{
        book::Book,
        store::JsonStore,
        test_utils::{assert_valid_html, parse_html},
    };

    use super::{BookDetailState, get_book_detail_page, get_edit_book_page};

    fn seeded_state() -> BookDetailState {
        let mut store = JsonStore::open_in_memory();
        store
            .set_books(vec![Book {
                id: 1,
                title: "A Wizard of Earthsea".to_owned(),
                author: "Ursula K. Le Guin".to_owned(),
                genre: "Fantasy".to_owned(),
                detail: "A classic.".to_owned(),
                publication_date: date!(1968 - 01 - 01),
                image: String::new(),
                borrowed: false,
            }])
            .expect("could not seed books");

        BookDetailState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    #[tokio::test]
    async fn detail_page_shows_the_full_record() {
        let state = seeded_state();

        let response = get_book_detail_page(State(state), Path(1))
            .await
            .expect("handler should succeed");

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html(response).await;
        assert_valid_html(&html);
        let text = html.root_element().text().collect::<String>();

        assert!(text.contains("A Wizard of Earthsea"));
        assert!(text.contains("Ursula K. Le Guin"));
        assert!(text.contains("1968-01-01"));
        assert!(text.contains("A classic."));
    }

    #[tokio::test]
    async fn missing_book_renders_a_not_found_state() {
        let state = seeded_state();

        let response = get_book_detail_page(State(state), Path(42))
            .await
            .expect("handler should succeed");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let html = parse_html(response).await;
        html.select(&Selector::parse("[data-book-missing='true']").unwrap())
            .next()
            .expect("No not-found state rendered");
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Book not found."));
    }

    #[tokio::test]
    async fn edit_page_prefills_the_form() {
        let state = seeded_state();

        let response = get_edit_book_page(State(state), Path(1))
            .await
            .expect("handler should succeed");

        let html = parse_html(response).await;
        assert_valid_html(&html);

        let title = html
            .select(&Selector::parse("input[name='title']").unwrap())
            .next()
            .expect("No title input found");
        assert_eq!(title.value().attr("value"), Some("A Wizard of Earthsea"));
    }
}
