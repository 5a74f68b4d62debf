//! Literal key → value substitution applied at invocation time

use crate::config::consts::arguments::{FRAGMENT_SEPARATOR, KEY_VALUE_SEPARATOR};
use crate::error::ProtocolError;

/// One `key=value` fragment of an invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

impl<'a> Substitution<'a> {
    /// Parse a single trimmed fragment, splitting on the first `=`
    fn parse(fragment: &'a str) -> Result<Self, ProtocolError> {
        let (key, value) = fragment.split_once(KEY_VALUE_SEPARATOR).ok_or_else(|| {
            ProtocolError::MalformedArgument {
                fragment: fragment.to_string(),
                reason: format!("expected key{}value", KEY_VALUE_SEPARATOR),
            }
        })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(ProtocolError::MalformedArgument {
                fragment: fragment.to_string(),
                reason: "empty key".to_string(),
            });
        }

        Ok(Self {
            key,
            value: value.trim(),
        })
    }
}

/// Split an argument tail into substitutions, in the order given
///
/// A tail that is empty or only whitespace means no substitutions. Inside a
/// non-empty tail every fragment must carry an `=`, so a stray comma is an
/// error.
pub fn parse_arguments(tail: &str) -> Result<Vec<Substitution<'_>>, ProtocolError> {
    if tail.trim().is_empty() {
        return Ok(Vec::new());
    }

    tail.split(FRAGMENT_SEPARATOR)
        .map(|fragment| Substitution::parse(fragment.trim()))
        .collect()
}

/// Replace every occurrence of each key with its value, one substitution at
/// a time
///
/// Matching is plain substring matching with no delimiters, and each step
/// sees the output of the previous one.
pub fn apply(body: &str, substitutions: &[Substitution<'_>]) -> String {
    substitutions
        .iter()
        .fold(body.to_string(), |expanded, sub| {
            expanded.replace(sub.key, sub.value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub<'a>(key: &'a str, value: &'a str) -> Substitution<'a> {
        Substitution { key, value }
    }

    #[test]
    fn test_parse_empty_tail() {
        assert_eq!(parse_arguments(""), Ok(vec![]));
        assert_eq!(parse_arguments("  \n"), Ok(vec![]));
    }

    #[test]
    fn test_parse_trims_fragments_and_parts() {
        let subs = parse_arguments(" NAME = world ,  X=1\n").unwrap();
        assert_eq!(subs, vec![sub("NAME", "world"), sub("X", "1")]);
    }

    #[test]
    fn test_parse_splits_on_first_equals() {
        let subs = parse_arguments("EXPR=a==b\n").unwrap();
        assert_eq!(subs, vec![sub("EXPR", "a==b")]);
    }

    #[test]
    fn test_parse_empty_value_allowed() {
        let subs = parse_arguments("SUFFIX=").unwrap();
        assert_eq!(subs, vec![sub("SUFFIX", "")]);
    }

    #[test]
    fn test_parse_missing_equals() {
        match parse_arguments("NAME=world, oops") {
            Err(ProtocolError::MalformedArgument { fragment, .. }) => {
                assert_eq!(fragment, "oops");
            }
            other => panic!("Expected MalformedArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_trailing_comma_is_malformed() {
        assert!(matches!(
            parse_arguments("A=1,"),
            Err(ProtocolError::MalformedArgument { .. })
        ));
    }

    #[test]
    fn test_parse_empty_key_is_malformed() {
        match parse_arguments("=value") {
            Err(ProtocolError::MalformedArgument { reason, .. }) => {
                assert_eq!(reason, "empty key");
            }
            other => panic!("Expected MalformedArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_apply_no_substitutions_is_identity() {
        assert_eq!(apply("line one\nline two\n", &[]), "line one\nline two\n");
    }

    #[test]
    fn test_apply_replaces_every_occurrence() {
        let out = apply("NAME and NAME\nNAME\n", &[sub("NAME", "x")]);
        assert_eq!(out, "x and x\nx\n");
    }

    #[test]
    fn test_apply_is_unscoped() {
        // keys match inside unrelated words
        let out = apply("TYPE TYPEDEF\n", &[sub("TYPE", "int")]);
        assert_eq!(out, "int intDEF\n");
    }

    #[test]
    fn test_apply_chains_in_order() {
        let body = "hello NAME\n";
        let out = apply(body, &[sub("NAME", "world"), sub("world", "moon")]);
        assert_eq!(out, "hello moon\n");

        let reversed = apply(body, &[sub("world", "moon"), sub("NAME", "world")]);
        assert_eq!(reversed, "hello world\n");
    }
}
