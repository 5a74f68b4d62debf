use thiserror::Error;

/// Violations of the directive protocol
///
/// The `Display` form is the message printed after `#<line> ` in a diagnostic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("starting template {name} while {active} is active")]
    NestedDefinition { name: String, active: String },

    #[error("template end without begin")]
    UnmatchedEnd,

    #[error("template {0} not defined")]
    UndefinedTemplate(String),

    #[error("malformed argument '{fragment}': {reason}")]
    MalformedArgument { fragment: String, reason: String },

    #[error("template {0} is not terminated")]
    UnterminatedTemplate(String),
}

#[derive(Error, Debug)]
pub enum ExpandError {
    #[error("#{line} {source}")]
    Protocol {
        line: usize,
        #[source]
        source: ProtocolError,
    },

    #[error("IO_ERROR: {0}")]
    Io(#[from] std::io::Error),
}

impl ExpandError {
    /// Line number of a protocol error, `None` for I/O failures
    pub fn line(&self) -> Option<usize> {
        match self {
            ExpandError::Protocol { line, .. } => Some(*line),
            ExpandError::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExpandError>;
