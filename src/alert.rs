//! Alert messages for displaying success and error feedback to the user.
//!
//! Alerts are rendered as small htmx-swappable fragments targeted at the
//! `#alert-container` element in the base layout, standing in for the toast
//! notifications the UI relies on.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

/// Whether an alert reports a success or a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// The operation succeeded.
    Success,
    /// The operation failed.
    Error,
}

/// A transient, auto-dismissing notification.
#[derive(Debug, Clone)]
pub struct Alert<'a> {
    kind: AlertKind,
    message: &'a str,
    details: &'a str,
}

impl<'a> Alert<'a> {
    /// Create a success alert.
    pub fn success(message: &'a str, details: &'a str) -> Self {
        Self {
            kind: AlertKind::Success,
            message,
            details,
        }
    }

    /// Create an error alert.
    pub fn error(message: &'a str, details: &'a str) -> Self {
        Self {
            kind: AlertKind::Error,
            message,
            details,
        }
    }

    /// Create an error alert without details.
    pub fn error_simple(message: &'a str) -> Self {
        Self::error(message, "")
    }

    /// Render the alert as markup for an out-of-band swap into the alert
    /// container.
    pub fn into_markup(self) -> Markup {
        let (card_style, badge) = match self.kind {
            AlertKind::Success => (
                "rounded border border-green-300 bg-green-50 px-4 py-3 \
                text-green-800 shadow dark:border-green-700 \
                dark:bg-green-900/40 dark:text-green-200",
                "Success",
            ),
            AlertKind::Error => (
                "rounded border border-red-300 bg-red-50 px-4 py-3 \
                text-red-800 shadow dark:border-red-700 \
                dark:bg-red-900/40 dark:text-red-200",
                "Error",
            ),
        };

        html!(
            div
                id="alert-container"
                hx-swap-oob="true"
                class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                div class=(card_style) data-alert=(badge) {
                    p class="font-semibold" { (self.message) }

                    @if !self.details.is_empty() {
                        p class="text-sm" { (self.details) }
                    }
                }

                script {
                    "setTimeout(() => { const el = document.getElementById('alert-container'); \
                    if (el) { el.replaceChildren(); } }, 5000);"
                }
            }
        )
    }
}

/// Render `alert` as a response with the given status code.
pub fn render_alert(status_code: StatusCode, alert: Alert) -> Response {
    (status_code, alert.into_markup()).into_response()
}

#[cfg(test)]
mod alert_tests {
    use scraper::{Html, Selector};

    use super::Alert;

    #[test]
    fn success_alert_shows_message_and_details() {
        let markup = Alert::success("Expense added", "Saved to your records.").into_markup();

        let html = Html::parse_fragment(&markup.into_string());
        let card = html
            .select(&Selector::parse("[data-alert='Success']").unwrap())
            .next()
            .expect("No success alert card found");
        let text = card.text().collect::<String>();

        assert!(text.contains("Expense added"));
        assert!(text.contains("Saved to your records."));
    }

    #[test]
    fn error_alert_without_details_has_single_paragraph() {
        let markup = Alert::error_simple("Something went wrong").into_markup();

        let html = Html::parse_fragment(&markup.into_string());
        let paragraphs = html
            .select(&Selector::parse("p").unwrap())
            .collect::<Vec<_>>();

        assert_eq!(paragraphs.len(), 1, "want only the message paragraph");
    }
}
