//! Application router configuration.

use axum::{
    Router, middleware,
    response::Redirect,
    routing::{delete, get, post, put},
};

use crate::{
    AppState,
    about::get_about_page,
    book::{
        borrow_book_endpoint, create_book_endpoint, delete_book_endpoint, edit_book_endpoint,
        get_book_detail_page, get_books_page, get_edit_book_page, get_new_book_page,
    },
    contact::{get_contact_page, post_contact_endpoint},
    endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, edit_expense_endpoint,
        get_expense_edit_row, get_expense_row, get_expenses_page, get_new_expense_page,
    },
    logging::logging_middleware,
    not_found::get_404_not_found,
    recipe::{
        create_recipe_endpoint, delete_recipe_endpoint, edit_recipe_endpoint,
        get_edit_recipe_page, get_recipe_detail_page, get_recipes_page,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let pages = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::NEW_EXPENSE_VIEW, get(get_new_expense_page))
        .route(endpoints::EXPENSES_VIEW, get(get_expenses_page))
        .route(endpoints::EXPENSE_ROW, get(get_expense_row))
        .route(endpoints::EXPENSE_EDIT_ROW, get(get_expense_edit_row))
        .route(endpoints::BOOKS_VIEW, get(get_books_page))
        .route(endpoints::NEW_BOOK_VIEW, get(get_new_book_page))
        .route(endpoints::BOOK_DETAIL_VIEW, get(get_book_detail_page))
        .route(endpoints::EDIT_BOOK_VIEW, get(get_edit_book_page))
        .route(endpoints::RECIPES_VIEW, get(get_recipes_page))
        .route(endpoints::RECIPE_DETAIL_VIEW, get(get_recipe_detail_page))
        .route(endpoints::EDIT_RECIPE_VIEW, get(get_edit_recipe_page))
        .route(endpoints::ABOUT_VIEW, get(get_about_page))
        .route(endpoints::CONTACT_VIEW, get(get_contact_page));

    let api = Router::new()
        .route(endpoints::POST_EXPENSE, post(create_expense_endpoint))
        .route(endpoints::PUT_EXPENSE, put(edit_expense_endpoint))
        .route(endpoints::DELETE_EXPENSE, delete(delete_expense_endpoint))
        .route(endpoints::POST_BOOK, post(create_book_endpoint))
        .route(endpoints::PUT_BOOK, put(edit_book_endpoint))
        .route(endpoints::DELETE_BOOK, delete(delete_book_endpoint))
        .route(endpoints::BORROW_BOOK, post(borrow_book_endpoint))
        .route(endpoints::POST_RECIPE, post(create_recipe_endpoint))
        .route(endpoints::PUT_RECIPE, put(edit_recipe_endpoint))
        .route(endpoints::DELETE_RECIPE, delete(delete_recipe_endpoint))
        .route(endpoints::POST_CONTACT, post(post_contact_endpoint));

    pages
        .merge(api)
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

/// The root path '/' redirects to the add-expense page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::NEW_EXPENSE_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_the_new_expense_page() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::NEW_EXPENSE_VIEW);
    }
}
