//! Markdown pages: built-in portfolio documents and user-created notes.

pub mod builtin;
pub mod error;
pub mod model;
pub mod store;

pub use error::PageError;
pub use model::{display_name, normalize_file_name, Page, PageIndex};
pub use store::{LocalPageStore, PageRef, PageStore};
