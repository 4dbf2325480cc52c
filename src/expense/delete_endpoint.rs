//! Defines the endpoint for deleting an expense.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{AppState, Error, store::JsonStore};

use super::{ExpenseId, core::remove_expense};

/// The state needed to delete an expense.
#[derive(Debug, Clone)]
pub struct DeleteExpenseState {
    /// The JSON document that holds all application data.
    pub store: Arc<Mutex<JsonStore>>,
}

impl FromRef<AppState> for DeleteExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for deleting an expense.
///
/// Deleting an ID that does not exist is a no-op, the response is 200 either
/// way so the htmx row swap removes the stale row.
pub async fn delete_expense_endpoint(
    State(state): State<DeleteExpenseState>,
    Path(expense_id): Path<ExpenseId>,
) -> Response {
    let mut store = match state.store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire store lock: {error}");
            return Error::StoreLock.into_alert_response();
        }
    };

    let mut expenses = store.expenses();
    remove_expense(&mut expenses, expense_id);

    if let Err(error) = store.set_expenses(expenses) {
        return error.into_alert_response();
    }

    // The status code has to be 200 OK or htmx will not replace the table row.
    StatusCode::OK.into_response()
}
