//! Aggregation of expenses for the charts.
//!
//! Groups appear in the order they are first seen in the collection. The
//! charts deliberately mirror the table's storage order instead of re-sorting
//! chronologically or alphabetically.

use time::{Date, Month};

use super::Expense;

/// The total spent in one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTotal {
    /// The display label for the month, e.g. "Jan 2024".
    pub month: String,
    /// The sum of amounts for the month.
    pub total: f64,
}

/// The total spent in one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// The category name.
    pub category: String,
    /// The sum of amounts for the category.
    pub total: f64,
}

/// The default month label: English short month name and 4-digit year.
///
/// The label is deterministic, it does not depend on the server's locale.
pub fn month_label(date: Date) -> String {
    let name = match date.month() {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    };

    format!("{name} {}", date.year())
}

/// Sum amounts per calendar month, labelling each group with `label`.
///
/// Records in the same month and year of different days fall into the same
/// group. Output order is the order in which months are first encountered.
pub fn monthly_totals(expenses: &[Expense], label: impl Fn(Date) -> String) -> Vec<MonthlyTotal> {
    let mut keys: Vec<(i32, Month)> = Vec::new();
    let mut totals: Vec<MonthlyTotal> = Vec::new();

    for expense in expenses {
        let key = (expense.date.year(), expense.date.month());

        match keys.iter().position(|&seen| seen == key) {
            Some(index) => totals[index].total += expense.amount,
            None => {
                keys.push(key);
                totals.push(MonthlyTotal {
                    month: label(expense.date),
                    total: expense.amount,
                });
            }
        }
    }

    totals
}

/// Sum amounts per category, in first-seen order.
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        match totals
            .iter_mut()
            .find(|total| total.category == expense.category)
        {
            Some(total) => total.total += expense.amount,
            None => totals.push(CategoryTotal {
                category: expense.category.clone(),
                total: expense.amount,
            }),
        }
    }

    totals
}
