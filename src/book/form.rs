//! Parsing, validation and markup of the book form, shared by create and
//! edit.

use maud::{Markup, html};
use serde::Deserialize;
use time::Date;

use crate::{
    Error,
    dates::{DATE_INPUT_FORMAT, date_input_value},
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

use super::{Book, BookId};

/// The minimum title length, matching the creation form's validation hint.
const MIN_TITLE_LENGTH: usize = 3;

/// The raw form data for creating or editing a book.
#[derive(Debug, Clone, Deserialize)]
pub struct BookForm {
    /// The book's title.
    pub title: String,
    /// The book's author.
    pub author: String,
    /// The genre.
    pub genre: String,
    /// A longer description.
    pub detail: String,
    /// The publication date, as entered.
    pub publication_date: String,
    /// An optional cover image URL.
    #[serde(default)]
    pub image: String,
}

/// Validate `form` into a [Book] with the given `id` and `borrowed` state.
///
/// All fields except the image are required and the title must be at least
/// three characters long.
pub fn parse_book_form(form: BookForm, id: BookId, borrowed: bool) -> Result<Book, Error> {
    let title = form.title.trim();
    if title.is_empty() {
        return Err(Error::MissingField("title"));
    }
    if title.chars().count() < MIN_TITLE_LENGTH {
        return Err(Error::TitleTooShort);
    }
    if form.author.trim().is_empty() {
        return Err(Error::MissingField("author"));
    }
    if form.genre.trim().is_empty() {
        return Err(Error::MissingField("genre"));
    }
    if form.detail.trim().is_empty() {
        return Err(Error::MissingField("detail"));
    }
    if form.publication_date.trim().is_empty() {
        return Err(Error::MissingField("publication date"));
    }

    let publication_date = Date::parse(form.publication_date.trim(), DATE_INPUT_FORMAT)
        .map_err(|_| Error::InvalidDate(form.publication_date.clone()))?;

    Ok(Book {
        id,
        title: title.to_owned(),
        author: form.author,
        genre: form.genre,
        detail: form.detail,
        publication_date,
        image: form.image,
        borrowed,
    })
}

/// The input fields of the book form, prefilled from `book` when editing.
pub(super) fn book_form_fields(book: Option<&Book>) -> Markup {
    html!(
        div
        {
            label for="title" class=(FORM_LABEL_STYLE) { "Title" }
            input
                id="title"
                type="text"
                name="title"
                value=[book.map(|book| book.title.as_str())]
                minlength="3"
                required
                autofocus
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for="author" class=(FORM_LABEL_STYLE) { "Author" }
            input
                id="author"
                type="text"
                name="author"
                value=[book.map(|book| book.author.as_str())]
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for="genre" class=(FORM_LABEL_STYLE) { "Genre" }
            input
                id="genre"
                type="text"
                name="genre"
                value=[book.map(|book| book.genre.as_str())]
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for="publication_date" class=(FORM_LABEL_STYLE) { "Publication date" }
            input
                id="publication_date"
                type="date"
                name="publication_date"
                value=[book.map(|book| date_input_value(book.publication_date))]
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div class="md:col-span-2"
        {
            label for="image" class=(FORM_LABEL_STYLE) { "Cover image URL (optional)" }
            input
                id="image"
                type="url"
                name="image"
                value=[book.map(|book| book.image.as_str())]
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div class="md:col-span-2"
        {
            label for="detail" class=(FORM_LABEL_STYLE) { "Detail" }
            textarea
                id="detail"
                name="detail"
                rows="4"
                required
                class=(FORM_TEXT_INPUT_STYLE)
            {
                @if let Some(book) = book { (book.detail) }
            }
        }
    )
}
