//! Indented rendering of a value tree.
//!
//! A read-only consumer of [`Value`]: walks the tree and writes formatted
//! text, each nesting level indented a configurable number of spaces more
//! than its parent. String bytes are emitted verbatim between quotes, so
//! printed output reparses to a structurally equal tree.

use std::io::{self, Write};

use crate::value::Value;

/// Pretty printer with a configurable indent width.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    indent: usize,
}

impl Printer {
    /// Creates a printer indenting `indent` spaces per nesting level.
    #[must_use]
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }

    /// Writes `value` to `out` without a trailing newline.
    ///
    /// # Errors
    ///
    /// Propagates failures from `out`.
    pub fn print<W: Write>(&self, value: &Value<'_>, out: &mut W) -> io::Result<()> {
        self.print_value(value, 0, out)
    }

    /// Renders `value` to a byte buffer.
    #[must_use]
    pub fn to_vec(&self, value: &Value<'_>) -> Vec<u8> {
        let mut out = Vec::new();
        self.print(value, &mut out)
            .expect("writing to a Vec cannot fail");
        out
    }

    fn print_value<W: Write>(&self, value: &Value<'_>, depth: usize, out: &mut W) -> io::Result<()> {
        match value {
            Value::Null => out.write_all(b"null"),
            Value::Boolean(b) => out.write_all(if *b { b"true" } else { b"false" }),
            Value::Number(n) => write!(out, "{n}"),
            Value::String(s) => {
                out.write_all(b"\"")?;
                out.write_all(s)?;
                out.write_all(b"\"")
            }
            Value::Array(items) => self.print_array(items, depth, out),
            Value::Object(map) => self.print_object(map, depth, out),
        }
    }

    fn print_array<W: Write>(
        &self,
        items: &[Value<'_>],
        depth: usize,
        out: &mut W,
    ) -> io::Result<()> {
        if items.is_empty() {
            return out.write_all(b"[]");
        }
        out.write_all(b"[\n")?;
        for (i, item) in items.iter().enumerate() {
            self.write_indent(depth + 1, out)?;
            self.print_value(item, depth + 1, out)?;
            if i + 1 < items.len() {
                out.write_all(b",")?;
            }
            out.write_all(b"\n")?;
        }
        self.write_indent(depth, out)?;
        out.write_all(b"]")
    }

    fn print_object<W: Write>(
        &self,
        map: &crate::ObjectMap<'_>,
        depth: usize,
        out: &mut W,
    ) -> io::Result<()> {
        if map.is_empty() {
            return out.write_all(b"{}");
        }
        out.write_all(b"{\n")?;
        let last = map.len() - 1;
        for (i, (key, value)) in map.iter().enumerate() {
            self.write_indent(depth + 1, out)?;
            out.write_all(b"\"")?;
            out.write_all(key)?;
            out.write_all(b"\": ")?;
            self.print_value(value, depth + 1, out)?;
            if i < last {
                out.write_all(b",")?;
            }
            out.write_all(b"\n")?;
        }
        self.write_indent(depth, out)?;
        out.write_all(b"}")
    }

    fn write_indent<W: Write>(&self, depth: usize, out: &mut W) -> io::Result<()> {
        for _ in 0..depth * self.indent {
            out.write_all(b" ")?;
        }
        Ok(())
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(2)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Arena, parse_slice};

    use super::*;

    fn pretty(src: &[u8], indent: usize) -> String {
        let arena = Arena::new();
        let value = parse_slice(src, &arena).unwrap();
        String::from_utf8(Printer::new(indent).to_vec(&value)).unwrap()
    }

    #[test]
    fn scalars_print_bare() {
        assert_eq!(pretty(b"null", 2), "null");
        assert_eq!(pretty(b"true", 2), "true");
        assert_eq!(pretty(b"42", 2), "42");
        assert_eq!(pretty(b"\"hi\"", 2), "\"hi\"");
    }

    #[test]
    fn empty_containers_stay_on_one_line() {
        assert_eq!(pretty(b"[]", 2), "[]");
        assert_eq!(pretty(b"{}", 2), "{}");
    }

    #[test]
    fn array_indents_each_level() {
        assert_eq!(
            pretty(b"[1,[2,3]]", 2),
            "[\n  1,\n  [\n    2,\n    3\n  ]\n]"
        );
    }

    #[test]
    fn object_pairs_use_colon_space() {
        assert_eq!(pretty(b"{\"a\": 1}", 1), "{\n \"a\": 1\n}");
    }

    #[test]
    fn string_bytes_round_trip_verbatim() {
        // The stored escape pair is written back out untouched.
        assert_eq!(pretty(br#""a\"b""#, 2), r#""a\"b""#);
    }
}
