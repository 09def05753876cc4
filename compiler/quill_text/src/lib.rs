//! Quill text scanning primitives.
//!
//! Everything above this crate (the literal scanner, the clustering engine,
//! string library functions) reads text through one contract:
//! [`TextScanner`], a single-pass cursor with one item of lookahead.
//!
//! - [`StrScanner`] / [`SliceScanner`]: materialized sources, re-derivable
//! - [`IterScanner`]: any iterator, one-shot
//! - [`Utf8ReadScanner`] / [`Utf16Scanner`]: streaming decoders yielding
//!   unvalidated [`RawChar`] values
//! - [`SourceCursor`]: line/column tracking over any raw character scanner
//!
//! # Design Philosophy
//!
//! - **Scan, never index**: no scanner exposes random access.
//! - **Exhaustion is terminal**: once `advance()` returns `None`, every later
//!   `peek()` and `advance()` returns `None` too.
//! - **Validate late**: decoders pass malformed code units through as raw
//!   values; the symbol codec rejects them when a literal body is decoded.

mod raw_char;
mod scanner;
mod source_cursor;
mod stream;

pub use raw_char::RawChar;
pub use scanner::{
    raw_chars, IterScanner, Items, Mapped, RawStrScanner, SliceScanner, StrScanner, TextScanner,
};
pub use source_cursor::{SourceCursor, SourcePos, SourceSpan};
pub use stream::{Utf16Scanner, Utf8Decoder, Utf8ReadScanner};
