use super::{Error, ErrorKind};
use std::fmt;

/// Raised for connection schemes without a schema loader.
#[derive(Debug)]
pub(super) struct UnsupportedFeature {
    message: Box<str>,
}

impl std::error::Error for UnsupportedFeature {}

impl fmt::Display for UnsupportedFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported feature: {}", self.message)
    }
}

impl Error {
    /// Creates an unsupported feature error. `feature` names what was asked
    /// for, e.g. the URL scheme.
    pub fn unsupported_feature(feature: impl Into<String>) -> Error {
        Error::from(ErrorKind::UnsupportedFeature(UnsupportedFeature {
            message: feature.into().into(),
        }))
    }

    pub fn is_unsupported_feature(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::UnsupportedFeature(_)))
    }
}
