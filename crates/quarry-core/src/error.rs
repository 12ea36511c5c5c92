mod adhoc;
mod invalid_schema;
mod invalid_statement;
mod unsupported_feature;

use adhoc::AdhocError;
use invalid_schema::InvalidSchema;
use invalid_statement::InvalidStatement;
use unsupported_feature::UnsupportedFeature;
use std::{fmt, sync::Arc};

/// Returns early with an ad-hoc error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Creates an ad-hoc error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised while building a schema, compiling a query or reading
/// catalog metadata.
///
/// The handle is a single pointer. Errors form a chain: each link is one
/// [`ErrorKind`] plus the error it was raised in response to.
#[derive(Clone)]
pub struct Error {
    link: Arc<Link>,
}

#[derive(Debug)]
struct Link {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Wraps this error in `consequent`.
    ///
    /// The chain displays outermost first, so
    /// `root.context("a").context("b")` reads `b: a: root`.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.wrap(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn wrap(self, mut outer: Error) -> Error {
        if let Some(link) = Arc::get_mut(&mut outer.link) {
            if link.cause.is_none() {
                link.cause = Some(self);
                return outer;
            }
        }

        // `outer` is shared or already has a cause. Keep its message and
        // start a fresh link so neither chain is disturbed.
        Error::link(ErrorKind::Adhoc(AdhocError::new(outer.to_string())), Some(self))
    }

    fn link(kind: ErrorKind, cause: Option<Error>) -> Error {
        Error {
            link: Arc::new(Link { kind, cause }),
        }
    }

    /// This error followed by its causes, outermost first.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        std::iter::successors(Some(self), |err| err.link.cause.as_ref())
    }

    fn kind(&self) -> &ErrorKind {
        &self.link.kind
    }

    /// Returns true if this error, or any error it was chained onto, matches
    /// `f`.
    fn any_kind(&self, f: impl Fn(&ErrorKind) -> bool) -> bool {
        self.chain().any(|err| f(err.kind()))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => self
                .link
                .cause
                .as_ref()
                .map(|cause| cause as &(dyn std::error::Error + 'static)),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, err) in self.chain().enumerate() {
            if i > 0 {
                f.write_str(": ")?;
            }
            fmt::Display::fmt(err.kind(), f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            f.debug_struct("Error")
                .field("kind", &self.link.kind)
                .field("cause", &self.link.cause)
                .finish()
        } else {
            fmt::Display::fmt(self, f)
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    InvalidSchema(InvalidSchema),
    InvalidStatement(InvalidStatement),
    UnsupportedFeature(UnsupportedFeature),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::Anyhow(err) => err.fmt(f),
            ErrorKind::Adhoc(err) => err.fmt(f),
            ErrorKind::InvalidSchema(err) => err.fmt(f),
            ErrorKind::InvalidStatement(err) => err.fmt(f),
            ErrorKind::UnsupportedFeature(err) => err.fmt(f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error::link(kind, None)
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<std::num::ParseIntError> for Error {
    fn from(err: std::num::ParseIntError) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for &str {
    fn into_error(self) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(self)))
    }
}

impl IntoError for String {
    fn into_error(self) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(self)))
    }
}
