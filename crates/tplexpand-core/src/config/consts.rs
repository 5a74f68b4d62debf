//! Constants shared by the directive parser and the substitution engine

/// Directive prefixes, matched at the start of a left-trimmed line
pub mod directive {
    /// Opens a template definition: `//{{ <name>`
    pub const BEGIN: &str = "//{{ ";

    /// Closes the active template definition
    pub const END: &str = "//}}";

    /// Expands a stored template: `//== <name> <key=value,...>`
    pub const INVOKE: &str = "//== ";
}

/// Separators inside an invocation's argument tail
pub mod arguments {
    /// Splits the tail into substitution fragments
    pub const FRAGMENT_SEPARATOR: char = ',';

    /// Splits a fragment into key and value (first occurrence only)
    pub const KEY_VALUE_SEPARATOR: char = '=';
}
