//! Defines the route handler for the page that displays the book library as
//! a filterable card grid.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error,
    dates::{DATE_INPUT_FORMAT, date_input_value, empty_date_as_none},
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, base, link,
    },
    navigation::NavBar,
    store::JsonStore,
};

use super::Book;

/// The criteria the book grid can be narrowed by.
///
/// All criteria are combined with AND, an unset criterion matches everything.
/// Genre and author match as case-insensitive substrings, the publication
/// date matches exactly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookFilter {
    /// Match against the genre, ignoring case.
    pub genre: String,
    /// Match against the author, ignoring case.
    pub author: String,
    /// Keep books published exactly on this date.
    pub publication_date: Option<Date>,
}

impl BookFilter {
    /// Whether `book` satisfies every set criterion.
    pub fn matches(&self, book: &Book) -> bool {
        if !self.genre.is_empty()
            && !book.genre.to_lowercase().contains(&self.genre.to_lowercase())
        {
            return false;
        }

        if !self.author.is_empty()
            && !book
                .author
                .to_lowercase()
                .contains(&self.author.to_lowercase())
        {
            return false;
        }

        if let Some(publication_date) = self.publication_date
            && book.publication_date != publication_date
        {
            return false;
        }

        true
    }

    /// The books satisfying the filter, in their input order.
    pub fn apply(&self, books: &[Book]) -> Vec<Book> {
        books
            .iter()
            .filter(|book| self.matches(book))
            .cloned()
            .collect()
    }
}

/// The raw query parameters of the books page.
#[derive(Debug, Default, Deserialize)]
pub struct BooksQuery {
    /// Keep books whose genre contains this text.
    pub genre: Option<String>,
    /// Keep books whose author contains this text.
    pub author: Option<String>,
    /// Keep books published exactly on this date.
    #[serde(default, deserialize_with = "empty_date_as_none")]
    pub publication_date: Option<Date>,
}

/// The state needed for the books page.
#[derive(Debug, Clone)]
pub struct BooksViewState {
    /// The JSON document that holds all application data.
    pub store: Arc<Mutex<JsonStore>>,
}

impl FromRef<AppState> for BooksViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// Render the book library.
pub async fn get_books_page(
    State(state): State<BooksViewState>,
    Query(query): Query<BooksQuery>,
) -> Result<Response, Error> {
    let books = {
        let store = state.store.lock().map_err(|_| Error::StoreLock)?;
        store.books()
    };

    let filter = BookFilter {
        genre: query.genre.unwrap_or_default(),
        author: query.author.unwrap_or_default(),
        publication_date: query.publication_date,
    };
    let visible = filter.apply(&books);

    Ok(books_view(&filter, &visible).into_response())
}

fn books_view(filter: &BookFilter, books: &[Book]) -> Markup {
    let nav_bar = NavBar::new(endpoints::BOOKS_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-xl"
            {
                div class="flex items-center justify-between mb-4"
                {
                    h1 class="text-2xl font-bold" { "Books" }
                    (link(endpoints::NEW_BOOK_VIEW, "Add a book"))
                }

                (book_filter_form(filter))

                @if books.is_empty() {
                    p class="mt-8" data-empty-state="true"
                    {
                        "No books match the current filters."
                    }
                } @else {
                    div class="grid grid-cols-1 gap-4 mt-4 md:grid-cols-2 xl:grid-cols-3"
                    {
                        @for book in books {
                            (book_card(book))
                        }
                    }
                }
            }
        }
    );

    base("Books", &[], &content)
}

fn book_filter_form(filter: &BookFilter) -> Markup {
    html!(
        form
            method="get"
            action=(endpoints::BOOKS_VIEW)
            class="grid grid-cols-1 gap-4 md:grid-cols-4 items-end w-full p-4 \
                bg-white rounded shadow dark:bg-gray-800 text-gray-900 dark:text-white"
        {
            div
            {
                label for="genre" class=(FORM_LABEL_STYLE) { "Genre" }
                input
                    type="text"
                    name="genre"
                    id="genre"
                    value=(filter.genre)
                    placeholder="Any"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="author" class=(FORM_LABEL_STYLE) { "Author" }
                input
                    type="text"
                    name="author"
                    id="author"
                    value=(filter.author)
                    placeholder="Any"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="publication_date" class=(FORM_LABEL_STYLE) { "Published on" }
                input
                    type="date"
                    name="publication_date"
                    id="publication_date"
                    value=[filter
                        .publication_date
                        .map(|date| date.format(DATE_INPUT_FORMAT).unwrap_or_default())]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div class="flex gap-2"
            {
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Apply" }
                a href=(endpoints::BOOKS_VIEW) class=(LINK_STYLE) { "Clear" }
            }
        }
    )
}

/// A book rendered as a card in the grid.
///
/// The borrow toggle swaps the whole card so the badge and button label stay
/// in sync.
pub(super) fn book_card(book: &Book) -> Markup {
    let detail_url = format_endpoint(endpoints::BOOK_DETAIL_VIEW, book.id);
    let borrow_url = format_endpoint(endpoints::BORROW_BOOK, book.id);

    html!(
        div class=(CARD_STYLE) data-book-card="true" data-book-id=(book.id)
        {
            @if !book.image.is_empty() {
                img
                    src=(book.image)
                    alt=(format!("Cover of {}", book.title))
                    class="h-48 w-full object-cover rounded";
            }

            div class="flex items-center justify-between"
            {
                h2 class="text-lg font-semibold"
                {
                    a href=(detail_url) class="hover:underline" { (book.title) }
                }

                @if book.borrowed {
                    span
                        class="px-2.5 py-0.5 text-xs font-semibold text-yellow-800 \
                            bg-yellow-100 rounded-full dark:bg-yellow-900 dark:text-yellow-300"
                        data-borrowed-badge="true"
                    {
                        "Borrowed"
                    }
                }
            }

            p class="text-sm text-gray-500 dark:text-gray-400"
            {
                (book.author) " · " (book.genre) " · " (date_input_value(book.publication_date))
            }

            div class="mt-auto flex gap-4 items-center"
            {
                button
                    class=(BUTTON_SECONDARY_STYLE)
                    hx-post=(borrow_url)
                    hx-target="closest div[data-book-card]"
                    hx-swap="outerHTML"
                {
                    @if book.borrowed { "Return" } @else { "Borrow" }
                }

                a href=(detail_url) class=(LINK_STYLE) { "Details" }
            }
        }
    )
}
