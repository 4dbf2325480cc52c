//! Defines the route handler for the about page.

use axum::response::{IntoResponse, Response};
use maud::html;

use crate::{
    endpoints,
    html::{PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
};

/// Render the about page.
pub async fn get_about_page() -> Response {
    let nav_bar = NavBar::new(endpoints::ABOUT_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            article class="w-full max-w-screen-md"
            {
                h1 class="text-2xl font-bold mb-4" { "About" }

                p class="mb-4"
                {
                    "Homebook keeps your expenses, your book library and your \
                    recipes in one place, stored in a single file you own."
                }

                p
                {
                    "Everything runs on your machine. There are no accounts, \
                    no sync and no tracking."
                }
            }
        }
    );

    base("About", &[], &content).into_response()
}

#[cfg(test)]
mod about_page_tests {
    use crate::test_utils::{assert_valid_html, parse_html};

    use super::get_about_page;

    #[tokio::test]
    async fn page_renders_with_a_heading() {
        let response = get_about_page().await;

        let html = parse_html(response).await;
        assert_valid_html(&html);

        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("About"));
    }
}
