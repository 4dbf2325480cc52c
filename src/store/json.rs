//! A file-backed JSON key-value store.
//!
//! The store holds three independent collections under the keys `expenses`,
//! `books` and `recipes`. Mutations replace a whole collection at a time and
//! rewrite the whole file, there is no partial update.

use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, book::Book, expense::Expense, recipe::Recipe};

/// The on-disk document. Missing keys deserialize as empty collections so a
/// hand-started file containing `{}` is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreData {
    #[serde(default)]
    expenses: Vec<Expense>,
    #[serde(default)]
    books: Vec<Book>,
    #[serde(default)]
    recipes: Vec<Recipe>,
}

/// Holds all application data in memory, optionally backed by a JSON file.
///
/// Accessors return a clone of the collection, mutators accept the full
/// replacement collection. A mutation is first written to disk and only
/// committed to memory once the write succeeds, so a failed write leaves the
/// in-memory state untouched.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: Option<PathBuf>,
    data: StoreData,
}

impl JsonStore {
    /// Open the store backed by the file at `path`.
    ///
    /// A missing file is treated as an empty store and will be created on the
    /// first write. A file that exists but cannot be read or parsed is an
    /// error, silently replacing a corrupt data file would lose the user's
    /// records.
    pub fn open(path: PathBuf) -> Result<Self, Error> {
        let data = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|error| Error::StoreRead(format!("{}: {error}", path.display())))?,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => StoreData::default(),
            Err(error) => {
                return Err(Error::StoreRead(format!("{}: {error}", path.display())));
            }
        };

        Ok(Self {
            path: Some(path),
            data,
        })
    }

    /// Open a store with no backing file. Used in tests and behaves the same
    /// as a file-backed store except nothing is persisted.
    pub fn open_in_memory() -> Self {
        Self {
            path: None,
            data: StoreData::default(),
        }
    }

    /// Get all expenses in storage order.
    pub fn expenses(&self) -> Vec<Expense> {
        self.data.expenses.clone()
    }

    /// Replace the expense collection and persist the store.
    pub fn set_expenses(&mut self, expenses: Vec<Expense>) -> Result<(), Error> {
        let mut candidate = self.data.clone();
        candidate.expenses = expenses;
        self.commit(candidate)
    }

    /// Get all books in storage order.
    pub fn books(&self) -> Vec<Book> {
        self.data.books.clone()
    }

    /// Replace the book collection and persist the store.
    pub fn set_books(&mut self, books: Vec<Book>) -> Result<(), Error> {
        let mut candidate = self.data.clone();
        candidate.books = books;
        self.commit(candidate)
    }

    /// Get all recipes in storage order.
    pub fn recipes(&self) -> Vec<Recipe> {
        self.data.recipes.clone()
    }

    /// Replace the recipe collection and persist the store.
    pub fn set_recipes(&mut self, recipes: Vec<Recipe>) -> Result<(), Error> {
        let mut candidate = self.data.clone();
        candidate.recipes = recipes;
        self.commit(candidate)
    }

    fn commit(&mut self, candidate: StoreData) -> Result<(), Error> {
        if let Some(path) = &self.path {
            let contents = serde_json::to_string_pretty(&candidate)
                .map_err(|error| Error::StoreWrite(error.to_string()))?;

            fs::write(path, contents)
                .map_err(|error| Error::StoreWrite(format!("{}: {error}", path.display())))?;
        }

        self.data = candidate;

        Ok(())
    }
}

#[cfg(test)]
mod json_store_tests {
    use time::macros::date;

    use crate::{Error, expense::Expense};

    use super::JsonStore;

    fn sample_expense(id: i64) -> Expense {
        Expense {
            id,
            amount: 9.99,
            description: "coffee beans".to_owned(),
            date: date!(2024 - 01 - 05),
            category: "Food".to_owned(),
            payment_method: "cash".to_owned(),
        }
    }

    #[test]
    fn missing_file_opens_empty() {
        let directory = tempfile::tempdir().expect("could not create temp dir");

        let store = JsonStore::open(directory.path().join("homebook.json"))
            .expect("opening a missing file should succeed");

        assert!(store.expenses().is_empty());
        assert!(store.books().is_empty());
        assert!(store.recipes().is_empty());
    }

    #[test]
    fn invalid_json_is_an_error() {
        let directory = tempfile::tempdir().expect("could not create temp dir");
        let path = directory.path().join("homebook.json");
        std::fs::write(&path, "{ not json").expect("could not write test file");

        let result = JsonStore::open(path);

        assert!(
            matches!(result, Err(Error::StoreRead(_))),
            "want StoreRead error, got {result:?}"
        );
    }

    #[test]
    fn reopened_store_reads_back_what_was_set() {
        let directory = tempfile::tempdir().expect("could not create temp dir");
        let path = directory.path().join("homebook.json");
        let want = vec![sample_expense(1), sample_expense(2)];

        let mut store = JsonStore::open(path.clone()).expect("could not open store");
        store
            .set_expenses(want.clone())
            .expect("could not set expenses");

        let reopened = JsonStore::open(path).expect("could not reopen store");

        assert_eq!(reopened.expenses(), want);
    }

    #[test]
    fn in_memory_store_round_trips() {
        let mut store = JsonStore::open_in_memory();
        let want = vec![sample_expense(1)];

        store
            .set_expenses(want.clone())
            .expect("could not set expenses");

        assert_eq!(store.expenses(), want);
    }

    #[test]
    fn failed_write_keeps_previous_state() {
        let directory = tempfile::tempdir().expect("could not create temp dir");
        // The backing path is a directory, so every write fails.
        let mut store = JsonStore::open_in_memory();
        store.path = Some(directory.path().to_path_buf());

        let result = store.set_expenses(vec![sample_expense(1)]);

        assert!(
            matches!(result, Err(Error::StoreWrite(_))),
            "want StoreWrite error, got {result:?}"
        );
        assert!(
            store.expenses().is_empty(),
            "a failed write must not change the in-memory state"
        );
    }

    #[test]
    fn collections_are_independent() {
        let mut store = JsonStore::open_in_memory();

        store
            .set_expenses(vec![sample_expense(1)])
            .expect("could not set expenses");

        assert!(store.books().is_empty());
        assert!(store.recipes().is_empty());
    }
}
