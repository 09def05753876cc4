//! Cluster values.

use std::fmt;

use quill_ir::CharSymbol;
use quill_text::{RawChar, SliceScanner};
use smallvec::SmallVec;

/// Items the engine can cluster: anything that stands for one code point.
pub trait ClusterItem: Clone {
    fn as_char(&self) -> char;
}

impl ClusterItem for char {
    #[inline]
    fn as_char(&self) -> char {
        *self
    }
}

impl ClusterItem for CharSymbol {
    #[inline]
    fn as_char(&self) -> char {
        self.code_point()
    }
}

/// Unvalidated values are shown to strategies as U+FFFD.
impl ClusterItem for RawChar {
    #[inline]
    fn as_char(&self) -> char {
        self.to_char().unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

/// A non-empty run of consecutive items forming one cluster.
///
/// Clusters are opaque: read them with [`characters`](Self::characters) or
/// print them.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Cluster<T> {
    items: SmallVec<[T; 4]>,
}

impl<T: ClusterItem> Cluster<T> {
    pub(crate) fn new(items: SmallVec<[T; 4]>) -> Self {
        debug_assert!(!items.is_empty(), "clusters are never empty");
        Self { items }
    }

    /// A fresh scanner over the items of this cluster.
    pub fn characters(&self) -> SliceScanner<'_, T> {
        SliceScanner::new(&self.items)
    }

    /// Number of items in the cluster.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false` for clusters produced by the engine.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: ClusterItem> fmt::Display for Cluster<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        self.items.iter().try_for_each(|item| f.write_char(item.as_char()))
    }
}

impl<T: ClusterItem> fmt::Debug for Cluster<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cluster({:?})", self.to_string())
    }
}
