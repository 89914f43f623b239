//! Recursive-descent JSON parser.
//!
//! Each grammar production is one method, dispatching on a single byte of
//! lookahead and building the value tree directly in the arena. Errors
//! propagate as [`ParseError`] through every recursive call; nothing here
//! terminates the process. There is no resynchronization: the first failure
//! aborts the whole parse, and the caller discards the arena.
//!
//! The accepted grammar is deliberately permissive, not strict RFC 8259:
//!
//! - String escapes are copied verbatim (a `\` marks the next byte escaped;
//!   neither is translated), so a `\n` in the input survives as the two
//!   literal bytes that were read.
//! - Numbers start with an ASCII digit (no leading sign) and are consumed
//!   by a permissive float scan: leading zeros are accepted.
//! - Commas in arrays are pure separators; they may repeat or be missing
//!   entirely. Objects accept a trailing comma before the closing brace.

use std::io::{self, Cursor, Read, Seek};

use bstr::BStr;

use crate::{
    arena::Arena,
    error::{ErrorContext, ErrorKind, ParseError},
    object::ObjectMap,
    options::ParserOptions,
    reader::ByteReader,
    value::Value,
};

/// Parses a single JSON value from an in-memory byte slice.
///
/// Bytes after the first complete value are ignored.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first grammar violation.
pub fn parse_slice<'a>(bytes: &[u8], arena: &'a Arena) -> Result<Value<'a>, ParseError> {
    parse_reader(Cursor::new(bytes), arena)
}

/// Parses a single JSON value from a seekable byte stream.
///
/// The stream is consumed up to the end of the first complete value and
/// left positioned there. Reads block; wrap files in
/// [`std::io::BufReader`].
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first grammar violation or
/// stream failure.
pub fn parse_reader<R: Read + Seek>(reader: R, arena: &Arena) -> Result<Value<'_>, ParseError> {
    Parser::new(reader, arena).parse_value()
}

/// A recursive-descent parser over a seekable byte stream.
///
/// All parser state is the stream cursor itself; the grammar is encoded in
/// the mutually recursive `parse_*` methods.
#[derive(Debug)]
pub struct Parser<'a, R> {
    reader: ByteReader<R>,
    arena: &'a Arena,
    options: ParserOptions,
}

impl<'a, R: Read + Seek> Parser<'a, R> {
    /// Creates a parser with default options.
    pub fn new(reader: R, arena: &'a Arena) -> Self {
        Self::with_options(reader, arena, ParserOptions::default())
    }

    /// Creates a parser with explicit options.
    pub fn with_options(reader: R, arena: &'a Arena, options: ParserOptions) -> Self {
        Self {
            reader: ByteReader::new(reader),
            arena,
            options,
        }
    }

    /// Consumes the reader back out, positioned after whatever was parsed.
    pub fn into_reader(self) -> ByteReader<R> {
        self.reader
    }

    /// Parses one JSON value: an object, array, string, number, boolean or
    /// null, after any leading whitespace.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::EarlyEof`] if the stream ends first,
    /// [`ErrorKind::UnexpectedChar`] if the next byte starts no value, or
    /// whatever a nested production reports.
    pub fn parse_value(&mut self) -> Result<Value<'a>, ParseError> {
        self.skip_whitespace()?;
        match self.read_byte()? {
            None => Err(self.err_eof()),
            Some(b'{') => Ok(Value::Object(self.parse_object()?)),
            Some(b'"') => Ok(Value::String(self.parse_string()?)),
            Some(b'[') => Ok(Value::Array(self.parse_array()?)),
            Some(c @ (b't' | b'f')) => {
                self.reader.push_back(c);
                Ok(Value::Boolean(self.parse_boolean()?))
            }
            Some(b'n') => {
                self.reader.push_back(b'n');
                self.parse_null()?;
                Ok(Value::Null)
            }
            Some(c) if c.is_ascii_digit() => {
                self.reader.push_back(c);
                Ok(Value::Number(self.parse_number()?))
            }
            Some(c) => Err(self.err_char(c, "a JSON value")),
        }
    }

    /// Parses an object body; the opening `{` is already consumed.
    ///
    /// Pairs are `"key": value` separated by `,`. A `}` in key position
    /// closes the object, which also admits `{}` and a trailing comma.
    fn parse_object(&mut self) -> Result<&'a ObjectMap<'a>, ParseError> {
        let mut map = ObjectMap::new();
        loop {
            self.skip_whitespace()?;
            let key = match self.read_byte()? {
                None => return Err(self.err_eof()),
                Some(b'}') => break,
                Some(b'"') => self.parse_string()?,
                Some(c) => return Err(self.err_char(c, "'\"' or '}'")),
            };

            self.skip_whitespace()?;
            match self.read_byte()? {
                None => return Err(self.err_eof()),
                Some(b':') => {}
                Some(c) => return Err(self.err_char(c, "':'")),
            }

            let value = self.parse_value()?;
            if !map.insert(self.arena, key, value) {
                let at = self.reader.offset();
                let kind = ErrorKind::DuplicateKey(key.to_string());
                return Err(self.err_at(kind, at));
            }

            self.skip_whitespace()?;
            match self.read_byte()? {
                None => return Err(self.err_eof()),
                Some(b',') => {}
                Some(b'}') => break,
                Some(c) => return Err(self.err_char(c, "',' or '}'")),
            }
        }
        Ok(self.arena.alloc(map))
    }

    /// Parses an array body; the opening `[` is already consumed.
    ///
    /// `]` ends the array (including the immediately-empty case), `,` is
    /// skipped as a separator, anything else is pushed back and parsed as
    /// an element.
    fn parse_array(&mut self) -> Result<&'a [Value<'a>], ParseError> {
        let mut items = self.arena.vec::<Value<'a>>();
        loop {
            self.skip_whitespace()?;
            match self.read_byte()? {
                None => return Err(self.err_eof()),
                Some(b']') => break,
                Some(b',') => {}
                Some(c) => {
                    self.reader.push_back(c);
                    let value = self.parse_value()?;
                    items.push(value);
                }
            }
        }
        Ok(items.into_bump_slice())
    }

    /// Parses a string body; the opening quote is already consumed.
    ///
    /// Bytes are copied into an arena scratch buffer until an unescaped
    /// closing quote. A backslash marks the next byte as escaped and both
    /// are copied verbatim; no escape sequence is translated.
    fn parse_string(&mut self) -> Result<&'a BStr, ParseError> {
        let mut buf = self.arena.vec::<u8>();
        let mut escaped = false;
        loop {
            let Some(c) = self.read_byte()? else {
                return Err(self.err_eof());
            };
            if escaped {
                escaped = false;
                buf.push(c);
                continue;
            }
            match c {
                b'\\' => {
                    escaped = true;
                    buf.push(c);
                }
                b'"' => break,
                _ => buf.push(c),
            }
        }
        Ok(BStr::new(buf.into_bump_slice()))
    }

    /// Parses the literal `true` or `false`, leaving the stream positioned
    /// immediately after it.
    fn parse_boolean(&mut self) -> Result<bool, ParseError> {
        match self.read_byte()? {
            None => Err(self.err_eof()),
            Some(b't') => {
                self.expect_literal(b"rue", "\"true\"")?;
                Ok(true)
            }
            Some(b'f') => {
                self.expect_literal(b"alse", "\"false\"")?;
                Ok(false)
            }
            Some(c) => Err(self.err_char(c, "\"true\" or \"false\"")),
        }
    }

    /// Parses the literal `null`.
    fn parse_null(&mut self) -> Result<(), ParseError> {
        self.expect_literal(b"null", "\"null\"")
    }

    /// Consumes `rest` byte by byte, failing on the first mismatch.
    fn expect_literal(&mut self, rest: &'static [u8], name: &'static str) -> Result<(), ParseError> {
        for &expected in rest {
            match self.read_byte()? {
                None => return Err(self.err_eof()),
                Some(c) if c == expected => {}
                Some(c) => return Err(self.err_char(c, name)),
            }
        }
        Ok(())
    }

    /// Parses a number starting with an ASCII digit.
    ///
    /// Scans a maximal `digits [ '.' digits ] [ e|E [sign] digits ]` run
    /// and converts it. The scan is deliberately permissive: leading zeros
    /// pass, and strict JSON number validation is out of scope.
    fn parse_number(&mut self) -> Result<f64, ParseError> {
        let mut buf = self.arena.vec::<u8>();
        self.digits_into(&mut buf)?;
        if self.eat(b'.')? {
            buf.push(b'.');
            self.digits_into(&mut buf)?;
        }
        if let Some(e) = self.eat_one_of(&[b'e', b'E'])? {
            buf.push(e);
            if let Some(sign) = self.eat_one_of(&[b'+', b'-'])? {
                buf.push(sign);
            }
            if self.digits_into(&mut buf)? == 0 {
                return match self.read_byte()? {
                    None => Err(self.err_eof()),
                    Some(c) => Err(self.err_char(c, "an exponent digit")),
                };
            }
        }
        let text = String::from_utf8_lossy(&buf);
        text.parse::<f64>().map_err(|_| {
            let at = self.reader.offset();
            self.err_at(
                ErrorKind::UnexpectedChar {
                    found: *buf.last().unwrap_or(&b'0'),
                    expected: "a number",
                },
                at,
            )
        })
    }

    /// Copies a run of ASCII digits into `buf`, returning how many.
    fn digits_into(&mut self, buf: &mut bumpalo::collections::Vec<'a, u8>) -> Result<usize, ParseError> {
        let mut count = 0;
        while let Some(c) = self.read_byte()? {
            if c.is_ascii_digit() {
                buf.push(c);
                count += 1;
            } else {
                self.reader.push_back(c);
                break;
            }
        }
        Ok(count)
    }

    /// Consumes the next byte if it equals `want`.
    fn eat(&mut self, want: u8) -> Result<bool, ParseError> {
        Ok(self.eat_one_of(&[want])?.is_some())
    }

    /// Consumes the next byte if it is one of `set`, returning it.
    fn eat_one_of(&mut self, set: &[u8]) -> Result<Option<u8>, ParseError> {
        match self.read_byte()? {
            None => Ok(None),
            Some(c) if set.contains(&c) => Ok(Some(c)),
            Some(c) => {
                self.reader.push_back(c);
                Ok(None)
            }
        }
    }

    /// Consumes whitespace. End of stream is not an error here; the
    /// production that needed the next byte reports it.
    fn skip_whitespace(&mut self) -> Result<(), ParseError> {
        while let Some(c) = self.read_byte()? {
            if !matches!(c, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c) {
                self.reader.push_back(c);
                break;
            }
        }
        Ok(())
    }

    /// Reads one byte, wrapping stream failures.
    fn read_byte(&mut self) -> Result<Option<u8>, ParseError> {
        let at = self.reader.offset();
        self.reader
            .next_byte()
            .map_err(|e| ParseError::new(ErrorKind::Io(e), at, None))
    }

    /// Fails at the current offset with `EarlyEof`.
    fn err_eof(&mut self) -> ParseError {
        let at = self.reader.offset();
        self.err_at(ErrorKind::EarlyEof, at)
    }

    /// Fails on the byte just consumed.
    fn err_char(&mut self, found: u8, expected: &'static str) -> ParseError {
        let at = self.reader.offset().saturating_sub(1);
        self.err_at(ErrorKind::UnexpectedChar { found, expected }, at)
    }

    /// Builds an error at `at`, capturing surrounding context if the
    /// stream cooperates.
    fn err_at(&mut self, kind: ErrorKind, at: u64) -> ParseError {
        let context = if self.options.context_len == 0 {
            None
        } else {
            self.capture_context(at).ok()
        };
        ParseError::new(kind, at, context)
    }

    fn capture_context(&mut self, at: u64) -> io::Result<ErrorContext> {
        self.reader.context(at, self.options.context_len)
    }
}
