//! The expense tracker: the model, the filter/sort/paginate pipeline, the
//! charts and the pages and endpoints that serve them.

mod aggregate;
mod charts;
mod core;
mod create_endpoint;
mod create_page;
mod delete_endpoint;
mod edit_endpoint;
mod expenses_page;
mod filter;
mod form;
mod row;
mod sort;

pub use aggregate::{CategoryTotal, MonthlyTotal, category_totals, month_label, monthly_totals};
pub use self::core::{
    Expense, ExpenseId, find_expense, next_expense_id, remove_expense, replace_expense,
};
pub use create_endpoint::create_expense_endpoint;
pub use create_page::get_new_expense_page;
pub use delete_endpoint::delete_expense_endpoint;
pub use edit_endpoint::edit_expense_endpoint;
pub use expenses_page::get_expenses_page;
pub use filter::ExpenseFilter;
pub use row::{get_expense_edit_row, get_expense_row};
pub use sort::{SortDirection, SortField, SortSpec, sort_expenses};
