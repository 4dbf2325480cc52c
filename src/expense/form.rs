//! Parsing and validation of the expense form.
//!
//! The same form backs creating an expense and saving an in-place row edit,
//! both submit the full set of fields.

use serde::Deserialize;
use time::Date;

use crate::{Error, dates::DATE_INPUT_FORMAT};

use super::{Expense, ExpenseId};

/// The raw form data for creating or editing an expense.
///
/// Amount and date arrive as text so that validation failures can be reported
/// as alerts instead of a generic form rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpenseForm {
    /// The amount spent, as entered.
    pub amount: String,
    /// What the money was spent on.
    pub description: String,
    /// The purchase date, as entered.
    pub date: String,
    /// The expense category.
    pub category: String,
    /// How the purchase was paid for.
    pub payment_method: String,
}

/// Validate `form` into an [Expense] with the given `id`.
///
/// Every field must be non-empty, the amount must parse as a number and the
/// date must be a valid calendar date.
pub fn parse_expense_form(form: ExpenseForm, id: ExpenseId) -> Result<Expense, Error> {
    if form.amount.trim().is_empty() {
        return Err(Error::MissingField("amount"));
    }
    if form.description.trim().is_empty() {
        return Err(Error::MissingField("description"));
    }
    if form.date.trim().is_empty() {
        return Err(Error::MissingField("date"));
    }
    if form.category.trim().is_empty() {
        return Err(Error::MissingField("category"));
    }
    if form.payment_method.trim().is_empty() {
        return Err(Error::MissingField("payment method"));
    }

    let amount: f64 = form
        .amount
        .trim()
        .parse()
        .map_err(|_| Error::InvalidAmount(form.amount.clone()))?;
    if !amount.is_finite() {
        return Err(Error::InvalidAmount(form.amount));
    }

    let date = Date::parse(form.date.trim(), DATE_INPUT_FORMAT)
        .map_err(|_| Error::InvalidDate(form.date.clone()))?;

    Ok(Expense {
        id,
        amount,
        description: form.description,
        date,
        category: form.category,
        payment_method: form.payment_method,
    })
}
