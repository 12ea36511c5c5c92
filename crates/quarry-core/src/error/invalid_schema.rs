use super::{Error, ErrorKind};
use std::fmt;

/// The mapping is inconsistent.
///
/// Raised for mismatched or empty association keys, a relation to an
/// unmapped model, or a foreign key over a non-column field. These abort the
/// compile and are never retried.
#[derive(Debug)]
pub(super) struct InvalidSchema {
    message: Box<str>,
}

impl std::error::Error for InvalidSchema {}

impl fmt::Display for InvalidSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(ErrorKind::InvalidSchema(InvalidSchema {
            message: message.into().into(),
        }))
    }

    /// Checks this error and every error it was raised from.
    pub fn is_invalid_schema(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::InvalidSchema(_)))
    }
}
