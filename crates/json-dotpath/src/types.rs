//! Path tokens, owned path steps and the resolution mode.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseModeError, PathError};

/// How resolution reacts to a missing key or a node of the wrong kind.
///
/// Syntax errors and out-of-range indices are raised in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Every mismatch is an error.
    Strict,
    /// Kind and key mismatches end resolution with "not found".
    #[default]
    Lenient,
}

impl Mode {
    /// Outcome of a kind/key mismatch under this mode.
    pub(crate) fn miss<T>(self, err: impl FnOnce() -> PathError) -> Result<Option<T>, PathError> {
        match self {
            Self::Strict => Err(err()),
            Self::Lenient => Ok(None),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => f.write_str("strict"),
            Self::Lenient => f.write_str("lenient"),
        }
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// One token produced by the scanner, borrowed from the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token<'a> {
    /// Key looked up in an object.
    Field(&'a str),
    /// Raw text of one index inside `[...]`, not yet validated.
    Index(&'a str),
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(key) => write!(f, "field '{key}'"),
            Self::Index(raw) => write!(f, "index '{raw}'"),
        }
    }
}

/// A token together with the number of path characters consumed after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedToken<'a> {
    pub token: Token<'a>,
    pub position: usize,
}

/// Owned, validated path step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    Key(String),
    Index(usize),
}

impl From<&str> for PathStep {
    fn from(value: &str) -> Self {
        Self::Key(value.to_string())
    }
}

impl From<String> for PathStep {
    fn from(value: String) -> Self {
        Self::Key(value)
    }
}

impl From<usize> for PathStep {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(k) => f.write_str(k),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_defaults_to_lenient() {
        assert_eq!(Mode::default(), Mode::Lenient);
    }

    #[test]
    fn mode_from_str_and_display() {
        assert_eq!("strict".parse::<Mode>().unwrap(), Mode::Strict);
        assert_eq!(" Lenient ".parse::<Mode>().unwrap(), Mode::Lenient);
        assert_eq!(
            "loose".parse::<Mode>().unwrap_err(),
            ParseModeError("loose".to_string())
        );
        assert_eq!(Mode::Strict.to_string(), "strict");
        assert_eq!(Mode::Lenient.to_string(), "lenient");
    }

    #[test]
    fn mode_serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Mode::Strict).unwrap(), "\"strict\"");
        let mode: Mode = serde_json::from_str("\"lenient\"").unwrap();
        assert_eq!(mode, Mode::Lenient);
    }

    #[test]
    fn path_step_conversions() {
        assert_eq!(PathStep::from("a"), PathStep::Key("a".to_string()));
        assert_eq!(PathStep::from(3usize), PathStep::Index(3));
        assert_eq!(PathStep::Index(7).to_string(), "7");
        assert_eq!(Token::Field("a").to_string(), "field 'a'");
    }
}
