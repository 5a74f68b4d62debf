//! Tests for the expander
//!
//! Split by concern: capture and commit of definitions, invocation and
//! substitution, protocol errors, and the stream driver.

use super::*;

// Test helper functions
mod helpers;
