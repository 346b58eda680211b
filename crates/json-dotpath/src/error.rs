//! Path scanning and resolution errors.

use thiserror::Error;

/// Failure raised while scanning a path expression or walking a document.
///
/// Every variant carries `position`, the number of path characters consumed
/// when the failure was detected, and the full `path` it was detected in.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("nested index group at {position} : {path}")]
    NestedIndexGroup { position: usize, path: String },
    #[error("end of index token not found at {position} : {path}")]
    UnterminatedToken { position: usize, path: String },
    #[error("index ({token}) should be a non-negative number at {position} : {path}")]
    InvalidIndex {
        token: String,
        position: usize,
        path: String,
    },
    #[error("index {index} out of bounds for array of length {len} at {position} : {path}")]
    IndexOutOfBounds {
        index: usize,
        len: usize,
        position: usize,
        path: String,
    },
    #[error("element '{key}' not found at {position} : {path}")]
    FieldNotFound {
        key: String,
        position: usize,
        path: String,
    },
    #[error("element is not an object at {position} : {path}")]
    NotAnObject { position: usize, path: String },
    #[error("array index on non-array element at {position} : {path}")]
    NotAnArray { position: usize, path: String },
}

/// Fieldless discriminant of [`PathError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathErrorKind {
    NestedIndexGroup,
    UnterminatedToken,
    InvalidIndex,
    IndexOutOfBounds,
    FieldNotFound,
    NotAnObject,
    NotAnArray,
}

impl PathError {
    pub fn kind(&self) -> PathErrorKind {
        match self {
            Self::NestedIndexGroup { .. } => PathErrorKind::NestedIndexGroup,
            Self::UnterminatedToken { .. } => PathErrorKind::UnterminatedToken,
            Self::InvalidIndex { .. } => PathErrorKind::InvalidIndex,
            Self::IndexOutOfBounds { .. } => PathErrorKind::IndexOutOfBounds,
            Self::FieldNotFound { .. } => PathErrorKind::FieldNotFound,
            Self::NotAnObject { .. } => PathErrorKind::NotAnObject,
            Self::NotAnArray { .. } => PathErrorKind::NotAnArray,
        }
    }

    /// Characters of the path consumed when the error was raised.
    pub fn position(&self) -> usize {
        match self {
            Self::NestedIndexGroup { position, .. }
            | Self::UnterminatedToken { position, .. }
            | Self::InvalidIndex { position, .. }
            | Self::IndexOutOfBounds { position, .. }
            | Self::FieldNotFound { position, .. }
            | Self::NotAnObject { position, .. }
            | Self::NotAnArray { position, .. } => *position,
        }
    }

    /// The full path expression the error was raised for.
    pub fn path(&self) -> &str {
        match self {
            Self::NestedIndexGroup { path, .. }
            | Self::UnterminatedToken { path, .. }
            | Self::InvalidIndex { path, .. }
            | Self::IndexOutOfBounds { path, .. }
            | Self::FieldNotFound { path, .. }
            | Self::NotAnObject { path, .. }
            | Self::NotAnArray { path, .. } => path,
        }
    }

    /// True for errors caused by a malformed path rather than by the document.
    pub fn is_syntax(&self) -> bool {
        matches!(
            self.kind(),
            PathErrorKind::NestedIndexGroup
                | PathErrorKind::UnterminatedToken
                | PathErrorKind::InvalidIndex
        )
    }
}

/// Returned when a string names no known [`Mode`](crate::Mode).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown resolution mode `{0}`, expected `strict` or `lenient`")]
pub struct ParseModeError(pub String);
