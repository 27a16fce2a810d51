use super::Error;

/// Error when the schema document cannot be read or is malformed.
///
/// This occurs when:
/// - The input file cannot be read
/// - The document is not well-formed XML
/// - Tables, columns or relations miss required attributes
/// - A relation refers to a table that does not exist
#[derive(Debug)]
pub(super) struct ReaderError {
    message: Box<str>,
}

impl std::error::Error for ReaderError {}

impl core::fmt::Display for ReaderError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema document: {}", self.message)
    }
}

impl Error {
    /// Creates a reader error.
    pub fn reader(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Reader(ReaderError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a reader error.
    pub fn is_reader(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::Reader(_))
    }
}

impl From<roxmltree::Error> for Error {
    fn from(err: roxmltree::Error) -> Error {
        Error::reader(err.to_string())
    }
}
