//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use crate::{pagination::PaginationConfig, store::JsonStore};

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The JSON document that holds all application data.
    pub store: Arc<Mutex<JsonStore>>,

    /// The config that controls how to display pages of data.
    pub pagination_config: PaginationConfig,
}

impl AppState {
    /// Create a new [AppState] wrapping `store`.
    pub fn new(store: JsonStore, pagination_config: PaginationConfig) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            pagination_config,
        }
    }
}
