//! Defines the contact page and its placeholder submission endpoint.
//!
//! The form acknowledges submissions with an alert but does not deliver the
//! message anywhere.

use axum::{
    Form,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::html;
use serde::Deserialize;

use crate::{
    alert::{Alert, render_alert},
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
};

/// The raw form data of a contact submission.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    /// The sender's name.
    pub name: String,
    /// The sender's email address.
    pub email: String,
    /// The message body.
    pub message: String,
}

/// Render the contact page.
pub async fn get_contact_page() -> Response {
    let nav_bar = NavBar::new(endpoints::CONTACT_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-md"
            {
                h1 class="text-2xl font-bold mb-4" { "Contact" }

                form
                    hx-post=(endpoints::POST_CONTACT)
                    hx-target-error="#alert-container"
                    class="grid grid-cols-1 gap-4 w-full p-4 bg-white rounded shadow \
                        dark:bg-gray-800 text-gray-900 dark:text-white"
                {
                    div
                    {
                        label for="name" class=(FORM_LABEL_STYLE) { "Name" }
                        input
                            id="name"
                            type="text"
                            name="name"
                            required
                            autofocus
                            class=(FORM_TEXT_INPUT_STYLE);
                    }

                    div
                    {
                        label for="email" class=(FORM_LABEL_STYLE) { "Email" }
                        input
                            id="email"
                            type="email"
                            name="email"
                            required
                            class=(FORM_TEXT_INPUT_STYLE);
                    }

                    div
                    {
                        label for="message" class=(FORM_LABEL_STYLE) { "Message" }
                        textarea
                            id="message"
                            name="message"
                            rows="5"
                            required
                            class=(FORM_TEXT_INPUT_STYLE) {}
                    }

                    div
                    {
                        button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Send" }
                    }
                }
            }
        }
    );

    base("Contact", &[], &content).into_response()
}

/// A route handler that acknowledges a contact submission.
pub async fn post_contact_endpoint(Form(form): Form<ContactForm>) -> Response {
    tracing::info!("contact submission from {} <{}>", form.name, form.email);

    render_alert(
        StatusCode::OK,
        Alert::success("Message received", "Thanks for getting in touch."),
    )
}

#[cfg(test)]
mod contact_tests {
    use axum::{Form, http::StatusCode};
    use scraper::Selector;

    use crate::{
        endpoints,
        test_utils::{assert_valid_html, parse_html},
    };

    use super::{ContactForm, get_contact_page, post_contact_endpoint};

    #[tokio::test]
    async fn form_posts_to_the_contact_api() {
        let response = get_contact_page().await;

        let html = parse_html(response).await;
        assert_valid_html(&html);

        let form = html
            .select(&Selector::parse("form").unwrap())
            .next()
            .expect("No form found");
        assert_eq!(form.value().attr("hx-post"), Some(endpoints::POST_CONTACT));
    }

    #[tokio::test]
    async fn submission_is_acknowledged_with_a_success_alert() {
        let form = ContactForm {
            name: "Alex".to_owned(),
            email: "alex@example.com".to_owned(),
            message: "Hello!".to_owned(),
        };

        let response = post_contact_endpoint(Form(form)).await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("could not read response body");
        let text = String::from_utf8_lossy(&body);
        assert!(text.contains("Message received"));
    }
}
