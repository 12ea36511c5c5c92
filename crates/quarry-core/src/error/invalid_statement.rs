use super::{Error, ErrorKind};
use std::fmt;

/// The caller drove compilation with input the schema cannot satisfy, such
/// as an unreachable table or a missing argument.
#[derive(Debug)]
pub(super) struct InvalidStatement {
    message: Box<str>,
}

impl std::error::Error for InvalidStatement {}

impl fmt::Display for InvalidStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid statement: {}", self.message)
    }
}

impl Error {
    pub fn invalid_statement(message: impl Into<String>) -> Error {
        Error::from(ErrorKind::InvalidStatement(InvalidStatement {
            message: message.into().into(),
        }))
    }

    pub fn is_invalid_statement(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::InvalidStatement(_)))
    }
}
