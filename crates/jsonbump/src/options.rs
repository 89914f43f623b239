//! Parser configuration.

/// Length of the surrounding context captured on parse errors.
///
/// Upon a syntax error the diagnostic includes this many bytes of the
/// input around the failure offset, e.g.:
///
/// ```text
/// unexpected symbol '"', expected ':' at index 123
/// context:
/// \n\t\t{ "foo" "bar" },\n\t
///              ^
/// ```
pub const ERROR_CONTEXT_LEN: usize = 60;

/// Configuration for a [`Parser`](crate::Parser).
///
/// # Default
///
/// `context_len` defaults to [`ERROR_CONTEXT_LEN`].
#[derive(Debug, Clone, Copy)]
pub struct ParserOptions {
    /// Width in bytes of the error-context window: half captured before
    /// the failure offset and half after, clamped at the stream
    /// boundaries. Zero disables context capture.
    pub context_len: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            context_len: ERROR_CONTEXT_LEN,
        }
    }
}
