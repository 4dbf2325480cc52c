//! Sorting of the expense table.
//!
//! The sort spec travels in the query string, ordering is recomputed from the
//! collection and the spec on every request. The stored collection is never
//! reordered.

use serde::{Deserialize, Serialize};

use super::Expense;

/// The column the expense table is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Numeric order by amount.
    Amount,
    /// Chronological order.
    Date,
    /// Lexicographic order by category.
    Category,
}

impl SortField {
    /// The value used for this field in query strings.
    pub fn as_query_value(self) -> &'static str {
        match self {
            SortField::Amount => "amount",
            SortField::Date => "date",
            SortField::Category => "category",
        }
    }
}

/// The direction the expense table is ordered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    /// Largest first.
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// The value used for this direction in query strings.
    pub fn as_query_value(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// A complete ordering choice for the expense table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    /// The column to order by.
    pub field: SortField,
    /// The direction to order in.
    pub direction: SortDirection,
}

impl SortSpec {
    /// The spec produced by clicking the column header for `field`.
    ///
    /// Clicking the active column flips the direction. Clicking another
    /// column keeps the current direction, the direction is carried state
    /// and is never reset by changing fields.
    pub fn toggled(current: Option<SortSpec>, field: SortField) -> SortSpec {
        match current {
            Some(spec) if spec.field == field => SortSpec {
                field,
                direction: spec.direction.flipped(),
            },
            Some(spec) => SortSpec {
                field,
                direction: spec.direction,
            },
            None => SortSpec {
                field,
                direction: SortDirection::default(),
            },
        }
    }
}

/// Order `expenses` by `spec`.
///
/// The sort is stable, records that compare equal keep their input order.
pub fn sort_expenses(expenses: &mut [Expense], spec: SortSpec) {
    expenses.sort_by(|a, b| {
        let ordering = match spec.field {
            SortField::Amount => a
                .amount
                .partial_cmp(&b.amount)
                .unwrap_or(std::cmp::Ordering::Equal),
            SortField::Date => a.date.cmp(&b.date),
            SortField::Category => a.category.cmp(&b.category),
        };

        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod sort_tests {
    use time::macros::date;

    use crate::expense::Expense;

    use super::{SortDirection, SortField, SortSpec, sort_expenses};

    fn expense(id: i64, amount: f64, date: time::Date, category: &str) -> Expense {
        Expense {
            id,
            amount,
            description: String::new(),
            date,
            category: category.to_owned(),
            payment_method: "cash".to_owned(),
        }
    }

    fn sample_expenses() -> Vec<Expense> {
        vec![
            expense(1, 20.0, date!(2024 - 02 - 10), "Transport"),
            expense(2, 10.0, date!(2024 - 01 - 05), "Food"),
            expense(3, 10.0, date!(2024 - 03 - 01), "Food"),
        ]
    }

    #[test]
    fn sorts_by_amount_ascending() {
        let mut expenses = sample_expenses();

        sort_expenses(
            &mut expenses,
            SortSpec {
                field: SortField::Amount,
                direction: SortDirection::Ascending,
            },
        );

        assert_eq!(
            expenses.iter().map(|e| e.id).collect::<Vec<_>>(),
            [2, 3, 1]
        );
    }

    #[test]
    fn sorts_by_date_descending() {
        let mut expenses = sample_expenses();

        sort_expenses(
            &mut expenses,
            SortSpec {
                field: SortField::Date,
                direction: SortDirection::Descending,
            },
        );

        assert_eq!(
            expenses.iter().map(|e| e.id).collect::<Vec<_>>(),
            [3, 1, 2]
        );
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let mut expenses = sample_expenses();

        sort_expenses(
            &mut expenses,
            SortSpec {
                field: SortField::Category,
                direction: SortDirection::Ascending,
            },
        );

        // Both Food records tie, ID 2 came before ID 3 in the input.
        assert_eq!(
            expenses.iter().map(|e| e.id).collect::<Vec<_>>(),
            [2, 3, 1]
        );
    }

    #[test]
    fn sorting_twice_gives_the_same_order() {
        let spec = SortSpec {
            field: SortField::Amount,
            direction: SortDirection::Descending,
        };
        let mut expenses = sample_expenses();

        sort_expenses(&mut expenses, spec);
        let first_pass = expenses.clone();
        sort_expenses(&mut expenses, spec);

        assert_eq!(expenses, first_pass);
    }

    #[test]
    fn clicking_the_active_field_flips_direction() {
        let current = Some(SortSpec {
            field: SortField::Date,
            direction: SortDirection::Ascending,
        });

        let got = SortSpec::toggled(current, SortField::Date);

        assert_eq!(
            got,
            SortSpec {
                field: SortField::Date,
                direction: SortDirection::Descending,
            }
        );
    }

    #[test]
    fn clicking_another_field_keeps_direction() {
        let current = Some(SortSpec {
            field: SortField::Date,
            direction: SortDirection::Descending,
        });

        let got = SortSpec::toggled(current, SortField::Amount);

        assert_eq!(
            got,
            SortSpec {
                field: SortField::Amount,
                direction: SortDirection::Descending,
            }
        );
    }

    #[test]
    fn first_click_sorts_ascending() {
        let got = SortSpec::toggled(None, SortField::Category);

        assert_eq!(
            got,
            SortSpec {
                field: SortField::Category,
                direction: SortDirection::Ascending,
            }
        );
    }
}
