//! Dotted path lookup over `serde_json` documents.
//!
//! A path is a sequence of field names and bracketed index groups:
//!
//! - `a.b` looks up key `a`, then key `b`;
//! - `a[0]` takes element `0` of the array under `a`;
//! - `a[1,0]` takes element `1`, then element `0` of that element.
//!
//! Paths are scanned lazily while the document is walked. Two resolution
//! modes exist:
//!
//! - [`Mode::Strict`]: a missing key or a node of the wrong kind is an error;
//! - [`Mode::Lenient`]: the same conditions yield `None`.
//!
//! Malformed paths (nested `[`, unterminated groups, non-numeric indices)
//! and out-of-range indices are errors in both modes.
//!
//! ```
//! use json_dotpath::{resolve_lenient, resolve_strict};
//! use serde_json::json;
//!
//! let doc = json!({"arr": [[10, 20], [30, 40]]});
//! assert_eq!(resolve_strict(&doc, "arr[1,0]").unwrap(), 30);
//! assert_eq!(resolve_lenient(&doc, "arr.len").unwrap(), None);
//! ```

pub mod error;
pub mod ext;
pub mod parser;
pub mod scanner;
pub mod types;
pub mod util;
pub mod walker;

pub use error::{ParseModeError, PathError, PathErrorKind};
pub use ext::PathExt;
pub use parser::{parse_path, tokenize};
pub use scanner::{Cursor, ScanState, Scanner, Step};
pub use types::{Mode, PathStep, ScannedToken, Token};
pub use util::{format_path, to_json_pointer};
pub use walker::{resolve, resolve_lenient, resolve_strict};
