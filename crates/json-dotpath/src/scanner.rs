//! Incremental path scanner.
//!
//! The scanner is a pure step function over `(path, Cursor)`; [`Scanner`]
//! drives it as an iterator. Nothing is scanned ahead of what the caller
//! consumes, so a walker that stops early never sees later syntax errors.

use std::iter::FusedIterator;

use crate::error::PathError;
use crate::types::{ScannedToken, Token};

/// Scanner state: outside or inside an `[...]` index group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Scanning,
    InIndexGroup,
}

/// Position of the scanner inside a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Byte offset of the unconsumed suffix.
    pub offset: usize,
    /// Characters consumed so far, reported as error and token positions.
    pub chars: usize,
    pub state: ScanState,
}

impl Cursor {
    fn at(offset: usize, chars: usize, state: ScanState) -> Self {
        Self {
            offset,
            chars,
            state,
        }
    }

    /// Moves past one ASCII delimiter.
    fn skip_delimiter(self, state: ScanState) -> Self {
        Self::at(self.offset + 1, self.chars + 1, state)
    }

    /// Moves past `text`, which starts at the cursor.
    fn skip_text(self, text: &str, state: ScanState) -> Self {
        Self::at(self.offset + text.len(), self.chars + text.chars().count(), state)
    }
}

/// Result of one scanner step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    /// A token was read; continue from the cursor.
    Token(Token<'a>, Cursor),
    /// A separator or a closing `]` was consumed without producing a token.
    Advance(Cursor),
    /// Nothing but whitespace remains.
    End,
}

/// Performs one scanner step from `cursor`.
pub fn step(path: &str, cursor: Cursor) -> Result<Step<'_>, PathError> {
    let rest = &path[cursor.offset..];
    if rest.trim().is_empty() {
        return Ok(Step::End);
    }
    match (rest.chars().next(), cursor.state) {
        (Some('['), ScanState::InIndexGroup) => Err(PathError::NestedIndexGroup {
            position: cursor.chars,
            path: path.to_string(),
        }),
        (Some('['), ScanState::Scanning) | (Some(','), ScanState::InIndexGroup) => {
            index_token(path, cursor.skip_delimiter(ScanState::InIndexGroup))
        }
        (Some(']'), ScanState::InIndexGroup) | (Some('.'), ScanState::Scanning) => {
            Ok(Step::Advance(cursor.skip_delimiter(ScanState::Scanning)))
        }
        _ => {
            let len = rest.find(['.', '[']).unwrap_or(rest.len());
            let key = &rest[..len];
            Ok(Step::Token(
                Token::Field(key),
                cursor.skip_text(key, cursor.state),
            ))
        }
    }
}

/// Reads one index token at `start`, just past `[` or `,`.
fn index_token(path: &str, start: Cursor) -> Result<Step<'_>, PathError> {
    let rest = &path[start.offset..];
    match rest.find([',', ']', '[']) {
        Some(len) if rest[len..].starts_with('[') => Err(PathError::NestedIndexGroup {
            position: start.chars + rest[..len].chars().count(),
            path: path.to_string(),
        }),
        Some(len) => {
            let raw = &rest[..len];
            Ok(Step::Token(
                Token::Index(raw),
                start.skip_text(raw, ScanState::InIndexGroup),
            ))
        }
        None => Err(PathError::UnterminatedToken {
            position: start.chars,
            path: path.to_string(),
        }),
    }
}

/// Validates a raw index token: ASCII digits only, fitting `usize`.
pub fn parse_index(raw: &str, position: usize, path: &str) -> Result<usize, PathError> {
    let invalid = || PathError::InvalidIndex {
        token: raw.to_string(),
        position,
        path: path.to_string(),
    };
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse::<usize>().map_err(|_| invalid())
}

/// Lazy token stream over a path expression.
///
/// Yields at most one error, after which it is exhausted.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    path: &'a str,
    cursor: Cursor,
    done: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(path: &'a str) -> Self {
        Self {
            path,
            cursor: Cursor::default(),
            done: false,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<ScannedToken<'a>, PathError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match step(self.path, self.cursor) {
                Ok(Step::Advance(cursor)) => self.cursor = cursor,
                Ok(Step::Token(token, cursor)) => {
                    self.cursor = cursor;
                    return Some(Ok(ScannedToken {
                        token,
                        position: cursor.chars,
                    }));
                }
                Ok(Step::End) => {
                    self.done = true;
                    return None;
                }
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

impl FusedIterator for Scanner<'_> {}
