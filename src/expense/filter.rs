//! Filtering of the expense collection.

use time::Date;

use super::Expense;

/// The criteria the expense table can be narrowed by.
///
/// All criteria are combined with AND. An empty or unset criterion matches
/// everything, so the default filter is the identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseFilter {
    /// Keep expenses whose category matches exactly.
    pub category: String,
    /// Keep expenses whose payment method matches exactly.
    pub payment_method: String,
    /// The start of the date range (inclusive).
    pub start_date: Option<Date>,
    /// The end of the date range (inclusive).
    pub end_date: Option<Date>,
    /// Keep expenses whose description contains this text, ignoring case.
    pub search: String,
}

impl ExpenseFilter {
    /// Whether `expense` satisfies every set criterion.
    ///
    /// The date range only applies when both bounds are set. A range with
    /// `start > end` matches nothing.
    pub fn matches(&self, expense: &Expense) -> bool {
        if !self.category.is_empty() && expense.category != self.category {
            return false;
        }

        if !self.payment_method.is_empty() && expense.payment_method != self.payment_method {
            return false;
        }

        if let (Some(start), Some(end)) = (self.start_date, self.end_date)
            && !(start..=end).contains(&expense.date)
        {
            return false;
        }

        if !self.search.is_empty()
            && !expense
                .description
                .to_lowercase()
                .contains(&self.search.to_lowercase())
        {
            return false;
        }

        true
    }

    /// The expenses satisfying the filter, in their input order.
    pub fn apply(&self, expenses: &[Expense]) -> Vec<Expense> {
        expenses
            .iter()
            .filter(|expense| self.matches(expense))
            .cloned()
            .collect()
    }
}
