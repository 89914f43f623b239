//! Parse failures and their diagnostics.
//!
//! Every failure carries the byte offset it happened at and, when the
//! stream could be re-read, a window of the surrounding bytes with a caret
//! under the offending position. The diagnostic is advisory: rendering it
//! never changes control flow.

use std::io;

use thiserror::Error;

/// Process exit code for an unexpected end of input.
pub const EXIT_EARLY_EOF: i32 = 200;

/// Process exit code for an unexpected character.
pub const EXIT_UNEXPECTED_CHAR: i32 = 201;

fn printable(byte: &u8) -> char {
    char::from(*byte)
}

/// What went wrong, independent of where.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The stream ended where the grammar required more bytes.
    #[error("unexpected end of input")]
    EarlyEof,
    /// A byte inconsistent with the current grammar production.
    #[error("unexpected symbol '{}', expected {expected}", printable(.found))]
    UnexpectedChar {
        /// The offending byte.
        found: u8,
        /// What the grammar would have accepted here.
        expected: &'static str,
    },
    /// An object key that was already present.
    #[error("duplicate key \"{0}\"")]
    DuplicateKey(String),
    /// The underlying stream failed.
    #[error("read failure")]
    Io(#[source] io::Error),
}

/// A failed parse.
///
/// Terminal for the whole parse: there is no resynchronization, and the
/// caller is expected to discard the arena the parse allocated from.
#[derive(Debug)]
pub struct ParseError {
    /// The failure kind.
    pub kind: ErrorKind,
    /// Byte offset the failure occurred at.
    pub offset: u64,
    /// Surrounding bytes, when the stream could be re-read.
    pub context: Option<ErrorContext>,
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, offset: u64, context: Option<ErrorContext>) -> Self {
        Self {
            kind,
            offset,
            context,
        }
    }

    /// The exit code a fatal-error caller should terminate with: 200 for
    /// early end of input, 201 for an unexpected character, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self.kind {
            ErrorKind::EarlyEof => EXIT_EARLY_EOF,
            ErrorKind::UnexpectedChar { .. } => EXIT_UNEXPECTED_CHAR,
            ErrorKind::DuplicateKey(_) | ErrorKind::Io(_) => 1,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at index {}", self.kind, self.offset)?;
        if let Some(context) = &self.context {
            let (window, caret) = context.render();
            write!(f, "\ncontext:\n{window}\n{caret}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// The bytes surrounding a failure offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    window: Vec<u8>,
    caret: usize,
}

impl ErrorContext {
    pub(crate) fn new(window: Vec<u8>, caret: usize) -> Self {
        Self { window, caret }
    }

    /// The captured raw bytes.
    #[must_use]
    pub fn window(&self) -> &[u8] {
        &self.window
    }

    /// Index of the failing byte within the window.
    #[must_use]
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Renders the window and a caret line aligned under the failing byte.
    ///
    /// `\n`, `\r` and `\t` widen to two-character escape sequences and the
    /// caret column accounts for that; other non-printable bytes render as
    /// `.`.
    #[must_use]
    pub fn render(&self) -> (String, String) {
        let mut line = String::with_capacity(self.window.len() + 8);
        let mut column = 0;
        for (i, &byte) in self.window.iter().enumerate() {
            let width = match byte {
                b'\n' => {
                    line.push_str("\\n");
                    2
                }
                b'\r' => {
                    line.push_str("\\r");
                    2
                }
                b'\t' => {
                    line.push_str("\\t");
                    2
                }
                0x20..=0x7e => {
                    line.push(char::from(byte));
                    1
                }
                _ => {
                    line.push('.');
                    1
                }
            };
            if i < self.caret {
                column += width;
            }
        }
        let mut caret_line = " ".repeat(column);
        caret_line.push('^');
        (line, caret_line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_widens_escapes_before_the_caret() {
        let ctx = ErrorContext::new(b"a\n\tb".to_vec(), 3);
        let (window, caret) = ctx.render();
        assert_eq!(window, "a\\n\\tb");
        assert_eq!(caret, "     ^");
    }

    #[test]
    fn render_caret_at_window_end() {
        let ctx = ErrorContext::new(b"ab".to_vec(), 2);
        let (window, caret) = ctx.render();
        assert_eq!(window, "ab");
        assert_eq!(caret, "  ^");
    }

    #[test]
    fn unprintable_bytes_render_as_dots() {
        let ctx = ErrorContext::new(vec![0x00, 0xff, b'x'], 2);
        let (window, _) = ctx.render();
        assert_eq!(window, "..x");
    }

    #[test]
    fn display_includes_context_block() {
        let err = ParseError::new(
            ErrorKind::UnexpectedChar {
                found: b'x',
                expected: "':'",
            },
            4,
            Some(ErrorContext::new(b"key x".to_vec(), 4)),
        );
        assert_eq!(
            err.to_string(),
            "unexpected symbol 'x', expected ':' at index 4\ncontext:\nkey x\n    ^"
        );
    }

    #[test]
    fn exit_codes() {
        let eof = ParseError::new(ErrorKind::EarlyEof, 0, None);
        assert_eq!(eof.exit_code(), EXIT_EARLY_EOF);
        let bad = ParseError::new(
            ErrorKind::UnexpectedChar {
                found: b'!',
                expected: "a JSON value",
            },
            0,
            None,
        );
        assert_eq!(bad.exit_code(), EXIT_UNEXPECTED_CHAR);
        let dup = ParseError::new(ErrorKind::DuplicateKey("a".into()), 0, None);
        assert_eq!(dup.exit_code(), 1);
    }
}
