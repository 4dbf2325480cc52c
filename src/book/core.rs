//! The book model and the collection-level operations on it.

use serde::{Deserialize, Serialize};
use time::Date;

/// Alias for book record IDs.
pub type BookId = i64;

/// A book in the user's library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// The record's unique ID within the book collection.
    pub id: BookId,
    /// The book's title.
    pub title: String,
    /// The book's author.
    pub author: String,
    /// The genre, free text.
    pub genre: String,
    /// A longer description of the book.
    pub detail: String,
    /// The publication date.
    pub publication_date: Date,
    /// A URL for the cover image. May be empty.
    #[serde(default)]
    pub image: String,
    /// Whether the book is currently lent out.
    #[serde(default)]
    pub borrowed: bool,
}

/// The ID to assign to the next book, one more than the largest existing ID.
pub fn next_book_id(books: &[Book]) -> BookId {
    books.iter().map(|book| book.id).max().unwrap_or(0) + 1
}

/// Find the book with `id`.
pub fn find_book(books: &[Book], id: BookId) -> Option<&Book> {
    books.iter().find(|book| book.id == id)
}

/// Replace the book whose ID matches `replacement.id`.
///
/// Returns false if no record has that ID, in which case the collection is
/// unchanged.
pub fn replace_book(books: &mut [Book], replacement: Book) -> bool {
    match books.iter_mut().find(|book| book.id == replacement.id) {
        Some(book) => {
            *book = replacement;
            true
        }
        None => false,
    }
}

/// Remove the book with `id`. Removing a missing ID is a no-op.
pub fn remove_book(books: &mut Vec<Book>, id: BookId) {
    books.retain(|book| book.id != id);
}
