use crate::store::Error as StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("inconsistent manifest: expected exactly 2 coordinate file references, found {found}")]
    Manifest { found: usize },

    #[error("failed to fetch '{url}': {details}")]
    Fetch { url: String, details: String },

    #[error("failed to render collection '{name}': {details}")]
    Render { name: String, details: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl Error {
    pub fn fetch(url: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Fetch {
            url: url.into(),
            details: details.into(),
        }
    }

    pub fn render(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Render {
            name: name.into(),
            details: details.into(),
        }
    }
}
