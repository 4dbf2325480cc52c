//! Defines the endpoint for saving an in-place row edit.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{AppState, Error, alert::Alert, store::JsonStore};

use super::{
    ExpenseId,
    core::replace_expense,
    form::{ExpenseForm, parse_expense_form},
    row::expense_row,
};

/// The state needed to edit an expense.
#[derive(Debug, Clone)]
pub struct EditExpenseState {
    /// The JSON document that holds all application data.
    pub store: Arc<Mutex<JsonStore>>,
}

impl FromRef<AppState> for EditExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for saving an edited expense.
///
/// On success the response is the updated display row, which htmx swaps in
/// place of the edit row, plus an out-of-band success alert. Only the record
/// with `expense_id` is touched.
pub async fn edit_expense_endpoint(
    State(state): State<EditExpenseState>,
    Path(expense_id): Path<ExpenseId>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let expense = match parse_expense_form(form, expense_id) {
        Ok(expense) => expense,
        Err(error) => return error.into_alert_response(),
    };

    let mut store = match state.store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire store lock: {error}");
            return Error::StoreLock.into_alert_response();
        }
    };

    let mut expenses = store.expenses();

    if !replace_expense(&mut expenses, expense.clone()) {
        return Error::UpdateMissingExpense.into_alert_response();
    }

    if let Err(error) = store.set_expenses(expenses) {
        return error.into_alert_response();
    }

    html!(
        (expense_row(&expense))
        (Alert::success("Expense updated", "").into_markup())
    )
    .into_response()
}

#[cfg(test)]
mod edit_expense_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Form,
        extract::{Path, State},
        http::StatusCode,
    };
    use time::macros::date;

    use crate::{expense::Expense, expense::form::ExpenseForm, store::JsonStore};

    use super::{EditExpenseState, edit_expense_endpoint};

    fn seeded_state() -> EditExpenseState {
        let mut store = JsonStore::open_in_memory();
        store
            .set_expenses(vec![
                Expense {
                    id: 1,
                    amount: 10.0,
                    description: "Weekly groceries".to_owned(),
                    date: date!(2024 - 01 - 05),
                    category: "Food".to_owned(),
                    payment_method: "cash".to_owned(),
                },
                Expense {
                    id: 2,
                    amount: 20.0,
                    description: "Bus ticket".to_owned(),
                    date: date!(2024 - 02 - 10),
                    category: "Transport".to_owned(),
                    payment_method: "credit".to_owned(),
                },
            ])
            .expect("could not seed expenses");

        EditExpenseState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    fn edit_form() -> ExpenseForm {
        ExpenseForm {
            amount: "42.00".to_owned(),
            description: "Monthly groceries".to_owned(),
            date: "2024-01-06".to_owned(),
            category: "Food".to_owned(),
            payment_method: "credit".to_owned(),
        }
    }

    #[tokio::test]
    async fn replaces_only_the_targeted_record() {
        let state = seeded_state();
        let untouched = state.store.lock().unwrap().expenses()[1].clone();

        let response = edit_expense_endpoint(State(state.clone()), Path(1), Form(edit_form())).await;

        assert_eq!(response.status(), StatusCode::OK);

        let expenses = state.store.lock().unwrap().expenses();
        assert_eq!(expenses[0].amount, 42.0);
        assert_eq!(expenses[0].date, date!(2024 - 01 - 06));
        assert_eq!(expenses[1], untouched);
    }

    #[tokio::test]
    async fn editing_a_missing_id_is_reported() {
        let state = seeded_state();
        let before = state.store.lock().unwrap().expenses();

        let response = edit_expense_endpoint(State(state.clone()), Path(99), Form(edit_form())).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(state.store.lock().unwrap().expenses(), before);
    }

    #[tokio::test]
    async fn invalid_form_changes_nothing() {
        let state = seeded_state();
        let before = state.store.lock().unwrap().expenses();
        let form = ExpenseForm {
            date: "yesterday".to_owned(),
            ..edit_form()
        };

        let response = edit_expense_endpoint(State(state.clone()), Path(1), Form(form)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.store.lock().unwrap().expenses(), before);
    }
}
