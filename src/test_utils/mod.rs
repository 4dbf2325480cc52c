#![allow(missing_docs)]

use axum::{body::Body, response::Response};
use scraper::Html;

/// Read the response body and parse it as a full HTML document.
pub(crate) async fn parse_html(response: Response<Body>) -> Html {
    let body = response.into_body();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Could not get response body");
    let text = String::from_utf8_lossy(&body).to_string();

    Html::parse_document(&text)
}

/// Parse `text` as an HTML fragment, e.g. a table row partial.
pub(crate) fn parse_fragment(text: &str) -> Html {
    Html::parse_fragment(text)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

/// Fragments are parsed without their usual ancestors (a `tr` outside a
/// `table`, say), which trips the parser's nesting checks. Only assert that
/// something was actually parsed.
#[track_caller]
pub(crate) fn assert_valid_fragment(html: &Html) {
    assert!(
        html.root_element().children().next().is_some(),
        "Fragment parsed to nothing"
    );
}
