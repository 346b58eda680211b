//! Method-style lookups on `serde_json::Value`.

use serde_json::Value;

use crate::error::PathError;
use crate::types::Mode;
use crate::walker::{resolve, resolve_lenient, resolve_strict};

/// Path lookups as methods on a document node.
///
/// ```
/// use json_dotpath::PathExt;
/// use serde_json::json;
///
/// let doc = json!({"users": [{"name": "Ann"}]});
/// assert_eq!(doc.strict_path("users[0].name").unwrap(), "Ann");
/// assert_eq!(doc.path("users[0].age").unwrap(), None);
/// ```
pub trait PathExt {
    /// Lenient lookup: `None` when a key is missing or a node has the wrong kind.
    fn path(&self, path: &str) -> Result<Option<&Value>, PathError>;

    /// Strict lookup: every mismatch is an error.
    fn strict_path(&self, path: &str) -> Result<&Value, PathError>;

    fn path_with(&self, path: &str, mode: Mode) -> Result<Option<&Value>, PathError>;
}

impl PathExt for Value {
    fn path(&self, path: &str) -> Result<Option<&Value>, PathError> {
        resolve_lenient(self, path)
    }

    fn strict_path(&self, path: &str) -> Result<&Value, PathError> {
        resolve_strict(self, path)
    }

    fn path_with(&self, path: &str, mode: Mode) -> Result<Option<&Value>, PathError> {
        resolve(self, path, mode)
    }
}
