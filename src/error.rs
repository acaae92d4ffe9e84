//! Error types for mdocx operations.

use thiserror::Error;

/// Errors that can occur while reading or writing documents.
///
/// The markdown classifier itself is total and never fails; every error in
/// this crate comes from the surrounding I/O and container handling.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Invalid DOCX: {0}")]
    InvalidDocx(String),

    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;
