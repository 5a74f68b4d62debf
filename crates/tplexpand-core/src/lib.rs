//! Comment-directive template expansion
//!
//! Source files define templates between `//{{ <name>` and `//}}` lines and
//! expand them with `//== <name> KEY=value,...`. Expansion is literal
//! substring replacement; everything else passes through left-trimmed.

pub mod config;
pub mod directive;
pub mod error;
pub mod expander;
pub mod store;
pub mod substitute;

// Re-export commonly used types
pub use directive::Directive;
pub use error::{ExpandError, ProtocolError, Result};
pub use expander::{expand_str, Expander};
pub use store::TemplateStore;
