use thiserror::Error;

use super::model::PageIndex;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PageError {
    #[error("File name is empty after normalization")]
    EmptyName,

    #[error("Page {0} does not exist")]
    UnknownPage(PageIndex),

    #[error("Page {0} is built in and read-only")]
    BuiltinPage(PageIndex),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
