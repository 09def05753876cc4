//! Quill IR - character symbols and string values.
//!
//! This crate owns the nominal text model:
//! - [`CharSymbol`]: the interned, name-bearing representation of a code point
//! - [`SymbolTable`]: the append-only interning table (one per process via
//!   [`SymbolTable::global`])
//! - [`StringValue`]: an immutable sequence of character symbols, readable
//!   only through a [`CharacterScanner`]
//!
//! # Design Philosophy
//!
//! - **Intern every character**: a symbol is one pointer; equality, ordering
//!   and hashing go through the code point, never the name.
//! - **Names on demand**: interning never looks up a character name.
//!   [`name_of`] resolves it once per symbol and caches it in the table.
//! - **No indexing**: strings expose scanners only, so the storage layout
//!   stays private.

mod error;
mod names;
mod string_value;
mod symbol;
mod table;

pub use error::CodecError;
pub use string_value::{CharacterScanner, StringValue};
pub use symbol::CharSymbol;
pub use table::SymbolTable;

use quill_text::RawChar;

/// Namespace shared by every character symbol.
pub const CHAR_NAMESPACE: &str = "unicode";

/// Intern a code point in the process-wide table.
///
/// Fails for surrogates and values above `0x10FFFF`.
#[inline]
pub fn intern(code_point: u32) -> Result<CharSymbol, CodecError> {
    SymbolTable::global().try_intern(code_point)
}

/// Intern a `char` in the process-wide table.
#[inline]
pub fn intern_char(c: char) -> CharSymbol {
    SymbolTable::global().intern_char(c)
}

/// Unicode name of a character symbol (resolved lazily, then cached).
#[inline]
pub fn name_of(symbol: CharSymbol) -> &'static str {
    symbol.name()
}

/// Decode a normalized literal body into a string value.
///
/// Interns every character in order. The first invalid scalar rejects the
/// whole body.
#[inline]
pub fn decode_body(raw: &[RawChar]) -> Result<StringValue, CodecError> {
    SymbolTable::global().decode_body(raw)
}

/// Scanner over the characters of a string.
#[inline]
pub fn characters_of(string: &StringValue) -> CharacterScanner<'_> {
    string.characters()
}
