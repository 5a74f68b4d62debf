//! Shared test helpers for expander tests

use crate::error::{ExpandError, ProtocolError};
use crate::expander::expand_str;

/// Expand `input`, panicking on any error
pub(super) fn expand_ok(input: &str) -> String {
    match expand_str(input) {
        Ok(output) => output,
        Err(err) => panic!("Expected successful expansion, got: {}", err),
    }
}

/// Expand `input` and return the (line, error) of the protocol failure
pub(super) fn expand_err(input: &str) -> (usize, ProtocolError) {
    match expand_str(input) {
        Err(ExpandError::Protocol { line, source }) => (line, source),
        Err(other) => panic!("Expected protocol error, got: {}", other),
        Ok(output) => panic!("Expected protocol error, got output: {:?}", output),
    }
}
