//! Whole-path scanning without a document.

use crate::error::PathError;
use crate::scanner::{parse_index, Scanner};
use crate::types::{PathStep, ScannedToken, Token};

/// Scans the whole path and returns its raw tokens.
///
/// Reports `NestedIndexGroup` and `UnterminatedToken`; index tokens are not
/// validated.
pub fn tokenize(path: &str) -> Result<Vec<Token<'_>>, PathError> {
    Scanner::new(path)
        .map(|scanned| scanned.map(|s| s.token))
        .collect()
}

/// Scans the whole path into owned steps, validating every index.
pub fn parse_path(path: &str) -> Result<Vec<PathStep>, PathError> {
    Scanner::new(path)
        .map(|scanned| {
            let ScannedToken { token, position } = scanned?;
            match token {
                Token::Field(key) => Ok(PathStep::Key(key.to_string())),
                Token::Index(raw) => parse_index(raw, position, path).map(PathStep::Index),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PathErrorKind;

    #[test]
    fn tokenize_keeps_raw_indices() {
        assert_eq!(
            tokenize("a[x]").unwrap(),
            vec![Token::Field("a"), Token::Index("x")]
        );
        assert_eq!(
            tokenize("a[0").unwrap_err().kind(),
            PathErrorKind::UnterminatedToken
        );
    }

    #[test]
    fn parse_path_builds_owned_steps() {
        assert_eq!(
            parse_path("store.books[1,0].title").unwrap(),
            vec![
                PathStep::from("store"),
                PathStep::from("books"),
                PathStep::Index(1),
                PathStep::Index(0),
                PathStep::from("title"),
            ]
        );
        assert!(parse_path("").unwrap().is_empty());
    }

    #[test]
    fn parse_path_rejects_bad_indices() {
        let err = parse_path("a[1,y]").unwrap_err();
        assert_eq!(
            err,
            PathError::InvalidIndex {
                token: "y".to_string(),
                position: 5,
                path: "a[1,y]".to_string(),
            }
        );
        assert_eq!(
            parse_path("a[[1]]").unwrap_err().kind(),
            PathErrorKind::NestedIndexGroup
        );
    }
}
