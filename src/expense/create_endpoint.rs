//! Defines the endpoint for creating a new expense.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{AppState, Error, endpoints, store::JsonStore};

use super::{
    core::next_expense_id,
    form::{ExpenseForm, parse_expense_form},
};

/// The state needed to create an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    /// The JSON document that holds all application data.
    pub store: Arc<Mutex<JsonStore>>,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for creating a new expense, redirects back to the add
/// expense page on success.
///
/// Validation failures are reported as alerts and create nothing.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseState>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let mut store = match state.store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire store lock: {error}");
            return Error::StoreLock.into_alert_response();
        }
    };

    let mut expenses = store.expenses();

    let expense = match parse_expense_form(form, next_expense_id(&expenses)) {
        Ok(expense) => expense,
        Err(error) => return error.into_alert_response(),
    };

    expenses.push(expense);

    if let Err(error) = store.set_expenses(expenses) {
        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::NEW_EXPENSE_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
