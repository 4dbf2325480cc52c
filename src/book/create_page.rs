//! Defines the route handler for the page for adding a book.

use axum::response::{IntoResponse, Response};
use maud::html;

use crate::{
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, PAGE_CONTAINER_STYLE, base, link},
    navigation::NavBar,
};

use super::form::book_form_fields;

/// Render the page for adding a book.
pub async fn get_new_book_page() -> Response {
    let nav_bar = NavBar::new(endpoints::BOOKS_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-md"
            {
                h1 class="text-2xl font-bold mb-4" { "Add Book" }

                form
                    hx-post=(endpoints::POST_BOOK)
                    hx-target-error="#alert-container"
                    class="grid grid-cols-1 gap-4 md:grid-cols-2 w-full p-4 bg-white \
                        rounded shadow dark:bg-gray-800 text-gray-900 dark:text-white"
                {
                    (book_form_fields(None))

                    div class="md:col-span-2"
                    {
                        button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Book" }
                    }
                }

                p class="mt-4"
                {
                    (link(endpoints::BOOKS_VIEW, "Back to the library"))
                }
            }
        }
    );

    base("Add Book", &[], &content).into_response()
}
