//! The expense table row partials.
//!
//! A row is swapped between a display state and an editing state by htmx.
//! The editing state submits its inputs through `hx-include` since form tags
//! cannot wrap table rows.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    dates::date_input_value,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, FORM_TEXT_INPUT_STYLE, LINK_STYLE, TABLE_CELL_STYLE, TABLE_ROW_STYLE,
        format_currency,
    },
    store::JsonStore,
};

use super::{Expense, ExpenseId, find_expense};

/// The state needed for the expense row partial handlers.
#[derive(Debug, Clone)]
pub struct ExpenseRowState {
    /// The JSON document that holds all application data.
    pub store: Arc<Mutex<JsonStore>>,
}

impl FromRef<AppState> for ExpenseRowState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// An expense rendered as a display row.
pub(super) fn expense_row(expense: &Expense) -> Markup {
    let edit_url = format_endpoint(endpoints::EXPENSE_EDIT_ROW, expense.id);
    let delete_url = format_endpoint(endpoints::DELETE_EXPENSE, expense.id);

    html!(
        tr class=(TABLE_ROW_STYLE) data-expense-row="true" data-expense-id=(expense.id)
        {
            td class=(TABLE_CELL_STYLE) { (format_currency(expense.amount)) }
            td class=(TABLE_CELL_STYLE) { (date_input_value(expense.date)) }
            td class=(TABLE_CELL_STYLE) { (expense.category) }
            td class=(TABLE_CELL_STYLE) { (expense.description) }
            td class=(TABLE_CELL_STYLE) { (expense.payment_method) }
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4"
                {
                    button
                        class=(LINK_STYLE)
                        hx-get=(edit_url)
                        hx-target="closest tr"
                        hx-swap="outerHTML"
                    {
                        "Edit"
                    }

                    button
                        class=(BUTTON_DELETE_STYLE)
                        hx-delete=(delete_url)
                        hx-target="closest tr"
                        hx-swap="outerHTML"
                        hx-confirm="Are you sure you want to delete this expense? This cannot be undone."
                    {
                        "Delete"
                    }
                }
            }
        }
    )
}

/// An expense rendered as an editable row.
pub(super) fn expense_edit_row(expense: &Expense) -> Markup {
    let save_url = format_endpoint(endpoints::PUT_EXPENSE, expense.id);
    let cancel_url = format_endpoint(endpoints::EXPENSE_ROW, expense.id);

    html!(
        tr class=(TABLE_ROW_STYLE) data-expense-edit-row="true" data-expense-id=(expense.id)
        {
            td class=(TABLE_CELL_STYLE)
            {
                input
                    type="number"
                    name="amount"
                    step="0.01"
                    value=(expense.amount)
                    class=(FORM_TEXT_INPUT_STYLE)
                    required;
            }
            td class=(TABLE_CELL_STYLE)
            {
                input
                    type="date"
                    name="date"
                    value=(date_input_value(expense.date))
                    class=(FORM_TEXT_INPUT_STYLE)
                    required;
            }
            td class=(TABLE_CELL_STYLE)
            {
                input
                    type="text"
                    name="category"
                    value=(expense.category)
                    class=(FORM_TEXT_INPUT_STYLE)
                    required;
            }
            td class=(TABLE_CELL_STYLE)
            {
                input
                    type="text"
                    name="description"
                    value=(expense.description)
                    class=(FORM_TEXT_INPUT_STYLE)
                    required;
            }
            td class=(TABLE_CELL_STYLE)
            {
                select name="payment_method" class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="cash" selected[expense.payment_method == "cash"] { "Cash" }
                    option value="credit" selected[expense.payment_method == "credit"] { "Credit" }
                }
            }
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4"
                {
                    button
                        class=(LINK_STYLE)
                        hx-put=(save_url)
                        hx-include="closest tr"
                        hx-target="closest tr"
                        hx-swap="outerHTML"
                    {
                        "Save"
                    }

                    button
                        class=(LINK_STYLE)
                        hx-get=(cancel_url)
                        hx-target="closest tr"
                        hx-swap="outerHTML"
                    {
                        "Cancel"
                    }
                }
            }
        }
    )
}

/// Render the display row for a single expense. Used to cancel an edit.
pub async fn get_expense_row(
    State(state): State<ExpenseRowState>,
    Path(expense_id): Path<ExpenseId>,
) -> Result<Response, Error> {
    let store = state.store.lock().map_err(|_| Error::StoreLock)?;
    let expenses = store.expenses();

    let expense = find_expense(&expenses, expense_id).ok_or(Error::NotFound)?;

    Ok(expense_row(expense).into_response())
}

/// Render the editable row for a single expense.
pub async fn get_expense_edit_row(
    State(state): State<ExpenseRowState>,
    Path(expense_id): Path<ExpenseId>,
) -> Result<Response, Error> {
    let store = state.store.lock().map_err(|_| Error::StoreLock)?;
    let expenses = store.expenses();

    let expense = find_expense(&expenses, expense_id).ok_or(Error::NotFound)?;

    Ok(expense_edit_row(expense).into_response())
}
