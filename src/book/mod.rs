//! The library: book records, the filterable card view, detail and edit
//! pages, and the borrow toggle.

mod books_page;
mod borrow_endpoint;
mod core;
mod create_endpoint;
mod create_page;
mod delete_endpoint;
mod detail_page;
mod edit_endpoint;
mod form;

pub use books_page::{BookFilter, get_books_page};
pub use borrow_endpoint::borrow_book_endpoint;
pub use self::core::{Book, BookId, find_book, next_book_id, remove_book, replace_book};
pub use create_endpoint::create_book_endpoint;
pub use create_page::get_new_book_page;
pub use delete_endpoint::delete_book_endpoint;
pub use detail_page::{get_book_detail_page, get_edit_book_page};
pub use edit_endpoint::edit_book_endpoint;
