//! Sharded interning table for character symbols.
//!
//! Provides O(1) interning with thread-safe concurrent access via per-shard
//! locking. The table is append-only: entries are leaked and never removed,
//! so every symbol handed out stays valid for the rest of the process.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use parking_lot::RwLock;
use quill_text::RawChar;
use rustc_hash::FxHashMap;

use crate::symbol::{CharEntry, CharSymbol};
use crate::{CodecError, StringValue};

/// Number of independently locked shards.
const NUM_SHARDS: usize = 16;

type Shard = FxHashMap<u32, &'static CharEntry>;

/// Interning table mapping code points to their unique entries.
///
/// # Thread Safety
/// Uses one `RwLock` per shard. Lookups of already interned characters take
/// only a read lock; concurrent first insertions of the same code point
/// resolve to a single entry.
pub struct SymbolTable {
    shards: [RwLock<Shard>; NUM_SHARDS],
    /// Total count of interned characters across all shards (O(1) `len()`).
    total_count: AtomicUsize,
}

impl SymbolTable {
    /// Create an empty table.
    ///
    /// Most callers want [`SymbolTable::global`]. Separate tables hand out
    /// separate entries, so symbols from different tables are equal by code
    /// point but never [`ptr_eq`](CharSymbol::ptr_eq).
    pub fn new() -> Self {
        Self {
            shards: std::array::from_fn(|_| RwLock::new(FxHashMap::default())),
            total_count: AtomicUsize::new(0),
        }
    }

    /// The process-wide table.
    pub fn global() -> &'static SymbolTable {
        static GLOBAL: OnceLock<SymbolTable> = OnceLock::new();
        GLOBAL.get_or_init(SymbolTable::new)
    }

    #[inline]
    fn shard_for(code_point: u32) -> usize {
        code_point as usize % NUM_SHARDS
    }

    /// Intern a raw value, rejecting surrogates and values above `0x10FFFF`.
    #[inline]
    pub fn try_intern(&self, code_point: u32) -> Result<CharSymbol, CodecError> {
        let c = char::from_u32(code_point).ok_or_else(|| CodecError::invalid_scalar(code_point))?;
        Ok(self.intern_char(c))
    }

    /// Intern a `char`. Infallible: every `char` is a scalar value.
    pub fn intern_char(&self, c: char) -> CharSymbol {
        let code_point = u32::from(c);
        let shard = &self.shards[Self::shard_for(code_point)];

        // Fast path: already interned
        if let Some(&entry) = shard.read().get(&code_point) {
            return CharSymbol::from_entry(entry);
        }

        let mut guard = shard.write();

        // Double-check after acquiring write lock
        if let Some(&entry) = guard.get(&code_point) {
            return CharSymbol::from_entry(entry);
        }

        let entry: &'static CharEntry = Box::leak(Box::new(CharEntry::new(c)));
        guard.insert(code_point, entry);
        self.total_count.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(
            code_point = %format_args!("U+{code_point:04X}"),
            "interned new character"
        );

        CharSymbol::from_entry(entry)
    }

    /// Intern every character of a normalized literal body, in order.
    ///
    /// The first invalid value rejects the whole body; its position is
    /// recorded in the error.
    pub fn decode_body(&self, raw: &[RawChar]) -> Result<StringValue, CodecError> {
        let symbols = raw
            .iter()
            .enumerate()
            .map(|(index, raw)| self.try_intern(raw.value()).map_err(|e| e.at(index)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(StringValue::from_symbols(symbols))
    }

    /// Number of distinct characters interned so far (O(1)).
    pub fn len(&self) -> usize {
        self.total_count.load(Ordering::Relaxed)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolTable")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
