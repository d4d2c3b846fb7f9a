// src/core/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Remote answered with anything other than 200.
    #[error("HTTP error: {status} {url}")]
    Http { status: u16, url: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    /// An integer field holds something that isn't an integer.
    #[error("field `{key}` is not an integer: {value:?}")]
    Field { key: String, value: String },

    /// The overwrite question could not be put to the user.
    #[error("cannot ask before overwriting {path}: {reason}")]
    Prompt { path: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
