//! Defines the route handler for the page for recording a new expense.
//!
//! This is the landing page. The form posts through htmx and a table of the
//! most recent entries sits below it.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_HEADER_STYLE, base, link,
    },
    navigation::NavBar,
    store::JsonStore,
};

use super::{Expense, row::expense_row};

/// How many recent entries to show below the form.
const RECENT_EXPENSE_COUNT: usize = 5;

/// The state needed for the new expense page.
#[derive(Debug, Clone)]
pub struct NewExpensePageState {
    /// The JSON document that holds all application data.
    pub store: Arc<Mutex<JsonStore>>,
}

impl FromRef<AppState> for NewExpensePageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// Render the page for recording a new expense.
pub async fn get_new_expense_page(
    State(state): State<NewExpensePageState>,
) -> Result<Response, Error> {
    let expenses = {
        let store = state.store.lock().map_err(|_| Error::StoreLock)?;
        store.expenses()
    };

    Ok(new_expense_view(&expenses).into_response())
}

fn new_expense_view(expenses: &[Expense]) -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_EXPENSE_VIEW).into_html();
    let recent: Vec<&Expense> = expenses.iter().rev().take(RECENT_EXPENSE_COUNT).collect();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-md"
            {
                h1 class="text-2xl font-bold mb-4" { "Add Expense" }

                (new_expense_form())

                h2 class="text-xl font-bold mt-8 mb-4" { "Recent expenses" }

                @if recent.is_empty() {
                    p data-empty-state="true" { "Nothing recorded yet. Your expenses will show up here." }
                } @else {
                    div class="relative overflow-x-auto shadow-md rounded w-full"
                    {
                        table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
                        {
                            thead class=(TABLE_HEADER_STYLE)
                            {
                                tr
                                {
                                    th scope="col" class="px-6 py-3" { "Amount" }
                                    th scope="col" class="px-6 py-3" { "Date" }
                                    th scope="col" class="px-6 py-3" { "Category" }
                                    th scope="col" class="px-6 py-3" { "Description" }
                                    th scope="col" class="px-6 py-3" { "Payment" }
                                    th scope="col" class="px-6 py-3" { "Actions" }
                                }
                            }

                            tbody
                            {
                                @for expense in recent {
                                    (expense_row(expense))
                                }
                            }
                        }
                    }
                }

                p class="mt-4"
                {
                    (link(endpoints::EXPENSES_VIEW, "Explore all expenses"))
                }
            }
        }
    );

    base("Add Expense", &[], &content)
}

fn new_expense_form() -> Markup {
    html!(
        form
            hx-post=(endpoints::POST_EXPENSE)
            hx-target-error="#alert-container"
            class="grid grid-cols-1 gap-4 md:grid-cols-2 w-full p-4 bg-white \
                rounded shadow dark:bg-gray-800 text-gray-900 dark:text-white"
        {
            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }
                input
                    id="amount"
                    type="number"
                    name="amount"
                    step="0.01"
                    placeholder="0.00"
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date" }
                input
                    id="date"
                    type="date"
                    name="date"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }
                input
                    id="category"
                    type="text"
                    name="category"
                    placeholder="Food, Transport, ..."
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="payment_method" class=(FORM_LABEL_STYLE) { "Payment method" }
                select id="payment_method" name="payment_method" class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="cash" { "Cash" }
                    option value="credit" { "Credit" }
                }
            }

            div class="md:col-span-2"
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }
                input
                    id="description"
                    type="text"
                    name="description"
                    placeholder="What was this for?"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div class="md:col-span-2"
            {
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Expense" }
            }
        }
    )
}
