//! Interned character symbols.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use crate::names;

/// One interned character: the code point plus its lazily resolved name.
///
/// Entries are allocated once per distinct code point, leaked, and never
/// mutated afterwards except for the one-time name initialization.
pub(crate) struct CharEntry {
    code_point: char,
    name: OnceLock<Box<str>>,
}

impl CharEntry {
    pub(crate) fn new(code_point: char) -> Self {
        Self {
            code_point,
            name: OnceLock::new(),
        }
    }
}

/// Nominal representation of a Unicode code point.
///
/// Layout: one pointer into the interning table. Copying a symbol never
/// copies its name; the name lives once in the table entry.
///
/// Equality, ordering and hashing use the code point, so symbols compare in
/// O(1). Two symbols from the same table are equal exactly when they are
/// the same entry; [`ptr_eq`](Self::ptr_eq) checks that identity directly.
#[derive(Copy, Clone)]
pub struct CharSymbol(&'static CharEntry);

// Size assertion: a symbol is a single pointer.
const _: () = assert!(std::mem::size_of::<CharSymbol>() == std::mem::size_of::<usize>());

impl CharSymbol {
    #[inline]
    pub(crate) fn from_entry(entry: &'static CharEntry) -> Self {
        CharSymbol(entry)
    }

    /// The code point this symbol stands for.
    #[inline]
    pub fn code_point(self) -> char {
        self.0.code_point
    }

    /// Namespace of every character symbol.
    #[inline]
    pub fn namespace(self) -> &'static str {
        crate::CHAR_NAMESPACE
    }

    /// Unicode name, computed on first request and cached in the table.
    pub fn name(self) -> &'static str {
        let entry: &'static CharEntry = self.0;
        entry
            .name
            .get_or_init(|| {
                tracing::trace!(
                    code_point = %format_args!("U+{:04X}", u32::from(entry.code_point)),
                    "resolving character name"
                );
                names::resolve(entry.code_point)
            })
    }

    /// Whether the name has been resolved yet.
    pub fn has_cached_name(self) -> bool {
        self.0.name.get().is_some()
    }

    /// `true` if both symbols are the same table entry.
    #[inline]
    pub fn ptr_eq(self, other: CharSymbol) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl PartialEq for CharSymbol {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.code_point == other.0.code_point
    }
}

impl Eq for CharSymbol {}

impl PartialOrd for CharSymbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CharSymbol {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.code_point.cmp(&other.0.code_point)
    }
}

impl Hash for CharSymbol {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.code_point.hash(state);
    }
}

impl fmt::Debug for CharSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CharSymbol({}:U+{:04X})",
            crate::CHAR_NAMESPACE,
            u32::from(self.code_point())
        )
    }
}

impl fmt::Display for CharSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code_point())
    }
}

impl From<CharSymbol> for char {
    #[inline]
    fn from(symbol: CharSymbol) -> char {
        symbol.code_point()
    }
}
