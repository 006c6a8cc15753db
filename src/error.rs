//! The error taxonomy surfaced by the lexer and parser (§6.2, §7).
//!
//! Grounded on `apollo-parser/src/error.rs` for the doc-comment register and
//! on `original_source/utils/reporter.go` (`ParseError.Error()`) for the
//! exact `"{message} (line {line})"` rendering and the reporter-returns-the-
//! error shape.

use std::fmt;

/// A lex or parse failure, carrying a source line and a human message.
///
/// Message text is not a stable API; line numbers are (§6.2). The lexer and
/// the parser raise the same `Error` shape — the grammar layer they came
/// from isn't part of the surface, only where in the source they happened.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} (line {line})")]
pub struct Error {
    pub line: u32,
    pub message: String,
}

impl Error {
    pub fn new(line: u32, message: impl Into<String>) -> Self {
        Error {
            line,
            message: message.into(),
        }
    }
}

/// The single callback the lexer and parser use to surface diagnostics.
///
/// A call to `error` both records the message (however the implementer
/// chooses) and returns the `Error` value that gets propagated up the
/// recursive-descent call stack, aborting the parse (§7).
pub trait Reporter {
    fn error(&mut self, line: u32, msg: String) -> Error;
}

/// Writes every diagnostic to stderr as it is reported, then hands back an
/// `Error` carrying the same line and message.
///
/// Grounded on `original_source/pkg/utils/std_reporter.go`'s `StdReporter`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdReporter;

impl Reporter for StdReporter {
    fn error(&mut self, line: u32, msg: String) -> Error {
        eprintln!("Error: {msg} (line {line})");
        Error::new(line, msg)
    }
}

/// Accumulates every reported diagnostic instead of only returning the one
/// that aborted the parse.
///
/// Useful for tests and for callers who want the full set of diagnostics a
/// reporter saw, not just the first. Generalized from the fact that the
/// spec scopes "first error aborts the parse" to the *parser* (§7); nothing
/// stops a `Reporter` implementation from remembering more than one.
#[derive(Debug, Default, Clone)]
pub struct CollectingReporter {
    pub errors: Vec<Error>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for CollectingReporter {
    fn error(&mut self, line: u32, msg: String) -> Error {
        let err = Error::new(line, msg);
        self.errors.push(err.clone());
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_reference_format() {
        let err = Error::new(3, "expecting RETURN following MATCH");
        assert_eq!(
            err.to_string(),
            "expecting RETURN following MATCH (line 3)"
        );
    }

    #[test]
    fn collecting_reporter_keeps_every_error() {
        let mut reporter = CollectingReporter::new();
        reporter.error(1, "first".into());
        reporter.error(2, "second".into());
        assert_eq!(reporter.errors.len(), 2);
        assert_eq!(reporter.errors[1].line, 2);
    }
}
