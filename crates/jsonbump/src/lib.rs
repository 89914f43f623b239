//! An arena-backed recursive-descent JSON parser.
//!
//! Parses a byte stream into a tree of typed [`Value`]s and serializes the
//! tree back to formatted text. Every allocation a parse makes — string
//! bytes, object-map entries, array storage, scratch buffers — comes from a
//! single [`Arena`], so a finished tree is released in one operation and a
//! failed parse is discarded by discarding the arena.
//!
//! The accepted dialect is deliberately permissive; see the
//! [`parser`](crate::Parser) documentation for the exact boundaries.
//!
//! ```
//! use jsonbump::{Arena, Printer, parse_slice};
//!
//! let arena = Arena::new();
//! let value = parse_slice(br#"{"port": 8080, "tls": false}"#, &arena)?;
//! let port = value.as_object().and_then(|m| m.get(b"port"));
//! assert_eq!(port.and_then(|v| v.as_f64()), Some(8080.0));
//!
//! let mut out = Vec::new();
//! Printer::new(2).print(&value, &mut out)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![allow(missing_docs)]

mod arena;
mod error;
mod object;
mod options;
mod parser;
mod printer;
mod reader;
mod value;

#[cfg(test)]
mod tests;

pub use arena::Arena;
pub use error::{ErrorContext, ErrorKind, ParseError, EXIT_EARLY_EOF, EXIT_UNEXPECTED_CHAR};
pub use object::{Iter, ObjectMap, OBJ_BUCKETS};
pub use options::{ParserOptions, ERROR_CONTEXT_LEN};
pub use parser::{parse_reader, parse_slice, Parser};
pub use printer::Printer;
pub use reader::ByteReader;
pub use value::Value;
