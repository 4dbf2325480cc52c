//! The expense model and the collection-level operations on it.

use serde::{Deserialize, Serialize};
use time::Date;

/// Alias for expense record IDs.
pub type ExpenseId = i64;

/// A single spending record.
///
/// Field names are camelCased on disk, matching the document format the
/// store file uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// The record's unique ID within the expense collection.
    pub id: ExpenseId,
    /// The amount spent in dollars.
    pub amount: f64,
    /// What the money was spent on.
    pub description: String,
    /// The date of the purchase.
    pub date: Date,
    /// A free-text category such as "Food" or "Transport".
    pub category: String,
    /// How the purchase was paid for, "cash" or "credit" at entry.
    pub payment_method: String,
}

/// The ID to assign to the next expense added to `expenses`.
///
/// IDs are assigned monotonically, one more than the largest ID in the
/// collection, so deleting the newest record never recycles its ID into a
/// colliding lower one. An empty collection starts at 1.
pub fn next_expense_id(expenses: &[Expense]) -> ExpenseId {
    expenses.iter().map(|expense| expense.id).max().unwrap_or(0) + 1
}

/// Find the expense with `id`.
pub fn find_expense(expenses: &[Expense], id: ExpenseId) -> Option<&Expense> {
    expenses.iter().find(|expense| expense.id == id)
}

/// Replace the expense whose ID matches `replacement.id`, leaving every other
/// record untouched.
///
/// Returns false if no record has that ID, in which case the collection is
/// unchanged.
pub fn replace_expense(expenses: &mut [Expense], replacement: Expense) -> bool {
    match expenses
        .iter_mut()
        .find(|expense| expense.id == replacement.id)
    {
        Some(expense) => {
            *expense = replacement;
            true
        }
        None => false,
    }
}

/// Remove the expense with `id`, keeping the order of the remaining records.
///
/// Removing an ID that is not present is a no-op.
pub fn remove_expense(expenses: &mut Vec<Expense>, id: ExpenseId) {
    expenses.retain(|expense| expense.id != id);
}

#[cfg(test)]
mod expense_tests {
    use time::macros::date;

    use super::{Expense, find_expense, next_expense_id, remove_expense, replace_expense};

    fn expense(id: i64, amount: f64) -> Expense {
        Expense {
            id,
            amount,
            description: format!("expense {id}"),
            date: date!(2024 - 01 - 05),
            category: "Food".to_owned(),
            payment_method: "cash".to_owned(),
        }
    }

    #[test]
    fn first_id_is_one() {
        assert_eq!(next_expense_id(&[]), 1);
    }

    #[test]
    fn next_id_is_max_plus_one() {
        let expenses = [expense(3, 1.0), expense(7, 2.0), expense(2, 3.0)];

        assert_eq!(next_expense_id(&expenses), 8);
    }

    #[test]
    fn next_id_does_not_reuse_gaps() {
        // IDs 1 and 3 exist, 2 was deleted. The next ID must be 4, not 2.
        let expenses = [expense(1, 1.0), expense(3, 2.0)];

        assert_eq!(next_expense_id(&expenses), 4);
    }

    #[test]
    fn replace_targets_only_the_matching_id() {
        let mut expenses = vec![expense(1, 1.0), expense(2, 2.0), expense(3, 3.0)];
        let untouched_before = (expenses[0].clone(), expenses[2].clone());
        let replacement = Expense {
            amount: 99.0,
            ..expense(2, 2.0)
        };

        let replaced = replace_expense(&mut expenses, replacement.clone());

        assert!(replaced);
        assert_eq!(expenses[1], replacement);
        assert_eq!((expenses[0].clone(), expenses[2].clone()), untouched_before);
    }

    #[test]
    fn replace_missing_id_changes_nothing() {
        let mut expenses = vec![expense(1, 1.0)];
        let before = expenses.clone();

        let replaced = replace_expense(&mut expenses, expense(9, 5.0));

        assert!(!replaced);
        assert_eq!(expenses, before);
    }

    #[test]
    fn remove_deletes_exactly_one_record() {
        let mut expenses = vec![expense(1, 1.0), expense(2, 2.0), expense(3, 3.0)];

        remove_expense(&mut expenses, 2);

        assert_eq!(expenses, vec![expense(1, 1.0), expense(3, 3.0)]);
    }

    #[test]
    fn remove_missing_id_is_a_noop() {
        let mut expenses = vec![expense(1, 1.0), expense(2, 2.0)];
        let before = expenses.clone();

        remove_expense(&mut expenses, 42);

        assert_eq!(expenses, before);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&expense(1, 2.5)).expect("could not serialize expense");

        assert!(json.contains("\"paymentMethod\""), "got {json}");
        assert!(json.contains("\"date\":\"2024-01-05\""), "got {json}");
    }

    #[test]
    fn find_returns_matching_record() {
        let expenses = [expense(1, 1.0), expense(2, 2.0)];

        assert_eq!(find_expense(&expenses, 2), Some(&expenses[1]));
        assert_eq!(find_expense(&expenses, 3), None);
    }
}
