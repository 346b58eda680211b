//! Tree walker: applies scanned tokens to a `serde_json::Value`.

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::PathError;
use crate::scanner::{parse_index, Scanner};
use crate::types::{Mode, ScannedToken, Token};

/// Resolves `path` against `root` under `mode`.
///
/// Returns `Ok(None)` only in [`Mode::Lenient`], when a key is missing or a
/// node has the wrong kind; the rest of the path is then not scanned.
/// Syntax errors, malformed indices and out-of-range indices are errors in
/// both modes.
pub fn resolve<'a>(
    root: &'a Value,
    path: &str,
    mode: Mode,
) -> Result<Option<&'a Value>, PathError> {
    let mut current = root;
    for scanned in Scanner::new(path) {
        let ScannedToken { token, position } = scanned?;
        trace!(%token, position, "applying path token");
        let next = match token {
            Token::Field(key) => field(current, key, position, path, mode)?,
            Token::Index(raw) => index(current, raw, position, path, mode)?,
        };
        match next {
            Some(node) => current = node,
            None => {
                debug!(path, position, %token, "path not found");
                return Ok(None);
            }
        }
    }
    Ok(Some(current))
}

/// Resolves `path`, treating every mismatch as an error.
pub fn resolve_strict<'a>(root: &'a Value, path: &str) -> Result<&'a Value, PathError> {
    match resolve(root, path, Mode::Strict) {
        Ok(Some(node)) => Ok(node),
        Ok(None) => unreachable!("strict resolution never reports a miss"),
        Err(err) => {
            debug!(%err, "strict path resolution failed");
            Err(err)
        }
    }
}

/// Resolves `path`, returning `None` when a key is missing or a node has the
/// wrong kind.
pub fn resolve_lenient<'a>(
    root: &'a Value,
    path: &str,
) -> Result<Option<&'a Value>, PathError> {
    resolve(root, path, Mode::Lenient)
}

fn field<'a>(
    current: &'a Value,
    key: &str,
    position: usize,
    path: &str,
    mode: Mode,
) -> Result<Option<&'a Value>, PathError> {
    match current {
        Value::Object(map) => match map.get(key) {
            Some(child) => Ok(Some(child)),
            None => mode.miss(|| PathError::FieldNotFound {
                key: key.to_string(),
                position,
                path: path.to_string(),
            }),
        },
        _ => mode.miss(|| PathError::NotAnObject {
            position,
            path: path.to_string(),
        }),
    }
}

fn index<'a>(
    current: &'a Value,
    raw: &str,
    position: usize,
    path: &str,
    mode: Mode,
) -> Result<Option<&'a Value>, PathError> {
    let idx = parse_index(raw, position, path)?;
    match current {
        // Out-of-range indices stay fatal in lenient mode.
        Value::Array(items) => items
            .get(idx)
            .map(Some)
            .ok_or_else(|| PathError::IndexOutOfBounds {
                index: idx,
                len: items.len(),
                position,
                path: path.to_string(),
            }),
        _ => mode.miss(|| PathError::NotAnArray {
            position,
            path: path.to_string(),
        }),
    }
}
