//! Persistence for the application's collections.
//!
//! Everything lives in a single JSON document that is read once at startup
//! and rewritten in full after every mutation.

mod json;

pub use json::JsonStore;
