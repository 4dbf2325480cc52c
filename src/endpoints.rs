//! The application's route URIs.
//!
//! For routes that take a parameter, e.g., '/books/{book_id}', use [format_endpoint].

/// The root route which redirects to the expense tracker page.
pub const ROOT: &str = "/";
/// The page for recording a new expense and seeing recent entries.
pub const NEW_EXPENSE_VIEW: &str = "/expenses/new";
/// The page for exploring all expenses (filters, charts, table).
pub const EXPENSES_VIEW: &str = "/expenses";
/// The htmx partial that renders a single expense as a display row.
pub const EXPENSE_ROW: &str = "/expenses/{expense_id}/row";
/// The htmx partial that renders a single expense as an editable row.
pub const EXPENSE_EDIT_ROW: &str = "/expenses/{expense_id}/edit";
/// The page listing all books.
pub const BOOKS_VIEW: &str = "/books";
/// The page for adding a new book.
pub const NEW_BOOK_VIEW: &str = "/books/new";
/// The detail page for a single book.
pub const BOOK_DETAIL_VIEW: &str = "/books/{book_id}";
/// The page for editing a single book.
pub const EDIT_BOOK_VIEW: &str = "/books/{book_id}/edit";
/// The page listing all recipes with the add-recipe form.
pub const RECIPES_VIEW: &str = "/recipes";
/// The detail page for a single recipe.
pub const RECIPE_DETAIL_VIEW: &str = "/recipes/{recipe_id}";
/// The page for editing a single recipe.
pub const EDIT_RECIPE_VIEW: &str = "/recipes/{recipe_id}/edit";
/// The about page.
pub const ABOUT_VIEW: &str = "/about";
/// The contact page.
pub const CONTACT_VIEW: &str = "/contact";

/// The route to create an expense.
pub const POST_EXPENSE: &str = "/api/expenses";
/// The route to update an expense.
pub const PUT_EXPENSE: &str = "/api/expenses/{expense_id}";
/// The route to delete an expense.
pub const DELETE_EXPENSE: &str = "/api/expenses/{expense_id}";
/// The route to create a book.
pub const POST_BOOK: &str = "/api/books";
/// The route to update a book.
pub const PUT_BOOK: &str = "/api/books/{book_id}";
/// The route to delete a book.
pub const DELETE_BOOK: &str = "/api/books/{book_id}";
/// The route to toggle a book's borrowed status.
pub const BORROW_BOOK: &str = "/api/books/{book_id}/borrow";
/// The route to create a recipe.
pub const POST_RECIPE: &str = "/api/recipes";
/// The route to update a recipe.
pub const PUT_RECIPE: &str = "/api/recipes/{recipe_id}";
/// The route to delete a recipe.
pub const DELETE_RECIPE: &str = "/api/recipes/{recipe_id}";
/// The placeholder route the contact form posts to. Nothing is delivered.
pub const POST_CONTACT: &str = "/api/contact";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the path '/books/{book_id}', '{book_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter. If no parameter is found, the original path is
/// returned unchanged.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we hand a path to the router it
// will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok(), "invalid URI: {uri}");
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::NEW_EXPENSE_VIEW);
        assert_endpoint_is_valid_uri(endpoints::EXPENSES_VIEW);
        assert_endpoint_is_valid_uri(endpoints::EXPENSE_ROW);
        assert_endpoint_is_valid_uri(endpoints::EXPENSE_EDIT_ROW);
        assert_endpoint_is_valid_uri(endpoints::BOOKS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::NEW_BOOK_VIEW);
        assert_endpoint_is_valid_uri(endpoints::BOOK_DETAIL_VIEW);
        assert_endpoint_is_valid_uri(endpoints::EDIT_BOOK_VIEW);
        assert_endpoint_is_valid_uri(endpoints::RECIPES_VIEW);
        assert_endpoint_is_valid_uri(endpoints::RECIPE_DETAIL_VIEW);
        assert_endpoint_is_valid_uri(endpoints::EDIT_RECIPE_VIEW);
        assert_endpoint_is_valid_uri(endpoints::ABOUT_VIEW);
        assert_endpoint_is_valid_uri(endpoints::CONTACT_VIEW);

        assert_endpoint_is_valid_uri(endpoints::POST_EXPENSE);
        assert_endpoint_is_valid_uri(endpoints::PUT_EXPENSE);
        assert_endpoint_is_valid_uri(endpoints::DELETE_EXPENSE);
        assert_endpoint_is_valid_uri(endpoints::POST_BOOK);
        assert_endpoint_is_valid_uri(endpoints::PUT_BOOK);
        assert_endpoint_is_valid_uri(endpoints::DELETE_BOOK);
        assert_endpoint_is_valid_uri(endpoints::BORROW_BOOK);
        assert_endpoint_is_valid_uri(endpoints::POST_RECIPE);
        assert_endpoint_is_valid_uri(endpoints::PUT_RECIPE);
        assert_endpoint_is_valid_uri(endpoints::DELETE_RECIPE);
        assert_endpoint_is_valid_uri(endpoints::POST_CONTACT);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint("/books/{book_id}", 42);

        assert_eq!(formatted_path, "/books/42");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/books", 1);

        assert_eq!(formatted_path, "/books");
    }

    #[test]
    fn parameter_in_middle() {
        let formatted_path = format_endpoint("/api/books/{book_id}/borrow", 7);

        assert_eq!(formatted_path, "/api/books/7/borrow");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }
}
