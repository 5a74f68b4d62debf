//! Single-pass template expansion
//!
//! The [`Expander`] owns the template store and the capture state and is fed
//! one line at a time. [`Expander::run`] wraps that in the stream driver used
//! by the binary: read a line, classify it, then capture, expand or emit.

use crate::directive::Directive;
use crate::error::{ExpandError, ProtocolError};
use crate::store::TemplateStore;
use crate::substitute;
use log::{debug, trace};
use std::io::{BufRead, Write};

/// Whether a template definition is in progress
///
/// Single slot: a second begin while `Capturing` is an error, not a push.
#[derive(Debug, Clone, PartialEq, Eq)]
enum CaptureState {
    Idle,
    Capturing {
        name: String,
        body: String,
        /// Line of the begin directive, reported if the input ends early
        started_at: usize,
    },
}

/// Streaming template expander
#[derive(Debug)]
pub struct Expander {
    store: TemplateStore,
    state: CaptureState,
    line: usize,
}

impl Expander {
    pub fn new() -> Self {
        Self {
            store: TemplateStore::new(),
            state: CaptureState::Idle,
            line: 0,
        }
    }

    /// Templates committed so far
    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    pub fn is_capturing(&self) -> bool {
        matches!(self.state, CaptureState::Capturing { .. })
    }

    /// Number of lines processed so far (the current line once inside
    /// [`Expander::process_line`])
    pub fn line(&self) -> usize {
        self.line
    }

    /// Process one raw input line, newline included
    ///
    /// Returns the text to write to the output, or `None` when the line was
    /// a directive or was captured into the active template.
    pub fn process_line(&mut self, raw: &str) -> Result<Option<String>, ExpandError> {
        self.line += 1;
        let line = self.line;
        self.dispatch(Directive::parse(raw))
            .map_err(|source| ExpandError::Protocol { line, source })
    }

    /// Check the end-of-input state and hand back the store
    ///
    /// A definition still open at this point is reported at the line of its
    /// begin directive.
    pub fn finish(self) -> Result<TemplateStore, ExpandError> {
        match self.state {
            CaptureState::Idle => Ok(self.store),
            CaptureState::Capturing {
                name, started_at, ..
            } => Err(ExpandError::Protocol {
                line: started_at,
                source: ProtocolError::UnterminatedTemplate(name),
            }),
        }
    }

    /// Expand everything from `reader` into `writer`
    ///
    /// Output is flushed at end of input and before a protocol error is
    /// returned, so every line resolved before the failure reaches `writer`.
    pub fn run<R: BufRead, W: Write>(
        mut self,
        mut reader: R,
        mut writer: W,
    ) -> Result<TemplateStore, ExpandError> {
        let mut buf = String::new();
        loop {
            buf.clear();
            if reader.read_line(&mut buf)? == 0 {
                break;
            }
            match self.process_line(&buf) {
                Ok(Some(text)) => writer.write_all(text.as_bytes())?,
                Ok(None) => {}
                Err(err) => {
                    writer.flush()?;
                    return Err(err);
                }
            }
        }

        writer.flush()?;
        let line = self.line;
        let store = self.finish()?;
        debug!(
            "expanded {} lines with {} template(s) defined",
            line,
            store.len()
        );
        Ok(store)
    }

    fn dispatch(
        &mut self,
        directive: Directive<'_>,
    ) -> Result<Option<String>, ProtocolError> {
        match directive {
            Directive::Begin { name } => self.begin(name).map(|()| None),
            Directive::End => self.end().map(|()| None),
            Directive::Invoke { name, args } => {
                let expanded = self.invoke(name, args)?;
                Ok(self.emit_or_capture(expanded))
            }
            Directive::Text(text) => Ok(self.emit_or_capture(text.to_string())),
        }
    }

    fn begin(&mut self, name: &str) -> Result<(), ProtocolError> {
        if let CaptureState::Capturing { name: active, .. } = &self.state {
            return Err(ProtocolError::NestedDefinition {
                name: name.to_string(),
                active: active.clone(),
            });
        }

        trace!("line {}: begin template '{}'", self.line, name);
        self.state = CaptureState::Capturing {
            name: name.to_string(),
            body: String::new(),
            started_at: self.line,
        };
        Ok(())
    }

    fn end(&mut self) -> Result<(), ProtocolError> {
        match std::mem::replace(&mut self.state, CaptureState::Idle) {
            CaptureState::Idle => Err(ProtocolError::UnmatchedEnd),
            CaptureState::Capturing { name, body, .. } => {
                debug!(
                    "line {}: committed template '{}' ({} bytes)",
                    self.line,
                    name,
                    body.len()
                );
                if self.store.insert(name.clone(), body).is_some() {
                    debug!("line {}: template '{}' redefined", self.line, name);
                }
                Ok(())
            }
        }
    }

    fn invoke(&self, name: &str, args: &str) -> Result<String, ProtocolError> {
        let body = self
            .store
            .get(name)
            .ok_or_else(|| ProtocolError::UndefinedTemplate(name.to_string()))?;
        let substitutions = substitute::parse_arguments(args)?;

        trace!(
            "line {}: invoke '{}' with {} substitution(s)",
            self.line,
            name,
            substitutions.len()
        );
        Ok(substitute::apply(body, &substitutions))
    }

    /// Append to the active body, or hand the text back for output
    fn emit_or_capture(&mut self, text: String) -> Option<String> {
        match &mut self.state {
            CaptureState::Capturing { body, .. } => {
                body.push_str(&text);
                None
            }
            CaptureState::Idle => Some(text),
        }
    }
}

impl Default for Expander {
    fn default() -> Self {
        Self::new()
    }
}

/// Expand an in-memory source
pub fn expand_str(input: &str) -> Result<String, ExpandError> {
    let mut expander = Expander::new();
    let mut output = String::new();

    for raw in input.split_inclusive('\n') {
        if let Some(text) = expander.process_line(raw)? {
            output.push_str(&text);
        }
    }

    expander.finish()?;
    Ok(output)
}

#[cfg(test)]
mod tests;
