//! Immutable strings of character symbols.

use std::fmt;
use std::sync::Arc;

use quill_text::{SliceScanner, TextScanner};

use crate::{CharSymbol, SymbolTable};

/// An immutable sequence of character symbols.
///
/// Cloning shares the underlying storage. Two strings are equal when they
/// hold the same characters in the same order, regardless of which table the
/// symbols came from.
///
/// There is no indexing; read the contents with [`characters`](Self::characters).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StringValue(Arc<[CharSymbol]>);

impl StringValue {
    pub(crate) fn from_symbols(symbols: Vec<CharSymbol>) -> Self {
        StringValue(Arc::from(symbols))
    }

    /// A fresh scanner over the characters, first to last.
    pub fn characters(&self) -> CharacterScanner<'_> {
        CharacterScanner(SliceScanner::new(&self.0))
    }

    /// Number of characters (code points, not clusters).
    #[inline]
    pub fn char_count(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for StringValue {
    fn default() -> Self {
        StringValue(Arc::from(Vec::new()))
    }
}

impl From<&str> for StringValue {
    /// Interns through the global table.
    fn from(text: &str) -> Self {
        let table = SymbolTable::global();
        StringValue::from_symbols(text.chars().map(|c| table.intern_char(c)).collect())
    }
}

impl fmt::Display for StringValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        self.0.iter().try_for_each(|s| f.write_char(s.code_point()))
    }
}

impl fmt::Debug for StringValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StringValue({:?})", self.to_string())
    }
}

/// Scanner over the characters of a [`StringValue`].
///
/// Every call to [`StringValue::characters`] starts a new, independent pass.
#[derive(Clone, Debug)]
pub struct CharacterScanner<'a>(SliceScanner<'a, CharSymbol>);

impl CharacterScanner<'_> {
    /// Characters not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.0.remaining()
    }
}

impl TextScanner for CharacterScanner<'_> {
    type Item = CharSymbol;

    #[inline]
    fn peek(&mut self) -> Option<&CharSymbol> {
        self.0.peek()
    }

    #[inline]
    fn advance(&mut self) -> Option<CharSymbol> {
        self.0.advance()
    }
}

#[cfg(feature = "cache")]
mod cache {
    use serde::de::{Deserialize, Deserializer};
    use serde::ser::{Serialize, Serializer};

    use super::StringValue;

    // Serialized as plain text. Deserializing re-interns every character in
    // the global table, so cached values compare `ptr_eq` with fresh ones.
    impl Serialize for StringValue {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for StringValue {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
            Ok(StringValue::from(&*text))
        }
    }
}
