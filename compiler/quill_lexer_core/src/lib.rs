//! Quill Lexer Core - escape-free string literals.
//!
//! Literals are quoted with a run of `N` quote characters and closed by a run
//! of exactly `N`. There are no escape sequences: content that contains a
//! run of `N` quotes is written with a longer delimiter instead.
//!
//! ```text
//! "plain"             N = 1, single-line
//! ""say "hi" now""   N = 2, body `say "hi" now`
//!     """
//!     line one
//!       line two
//!     """             N = 3, multi-line, column 4
//! ```
//!
//! # Pipeline
//!
//! ```text
//! SourceCursor ──> LiteralScanner::scan ──> LiteralToken ──> normalize ──> Vec<RawChar>
//! ```
//!
//! Decoding the normalized body into a string is the job of `quill_ir`;
//! `quill_lexer` runs all three steps.
//!
//! [`encode_literal`] goes the other way: it spells a string as a literal
//! with the shortest delimiter that reads back unchanged.

mod encode;
mod lex_error;
mod literal_scanner;
mod normalize;
mod token;

pub use encode::{encode_literal, minimal_delimiter_len, EMPTY_STRING};
pub use lex_error::{LexError, LexErrorContext, LexErrorKind, LexReplacement, LexSuggestion};
pub use literal_scanner::{scan_all_literals, LiteralScanner};
pub use normalize::normalize;
pub use token::{LiteralForm, LiteralToken};
