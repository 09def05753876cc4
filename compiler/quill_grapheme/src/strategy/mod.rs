//! Clustering strategies.
//!
//! A strategy answers one question: given a window of upcoming characters,
//! how many of them form the first cluster? The engine handles buffering,
//! bounds and slicing.

use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

/// Decides where clusters end.
pub trait ClusterStrategy {
    /// Human-readable name, for diagnostics.
    fn name(&self) -> &str;

    /// Upper bound on cluster length, in characters. At least 1.
    ///
    /// The engine never buffers more than this many items; longer clusters
    /// are split at the bound.
    fn max_cluster_len(&self) -> usize;

    /// Length of the first cluster in `window`.
    ///
    /// `window` is non-empty. `at_end` is `true` when the window holds
    /// everything left in the source; otherwise the window is exactly
    /// [`max_cluster_len`](Self::max_cluster_len) long. Answers outside
    /// `1..=window.len()` are clamped.
    fn first_cluster_len(&self, window: &[char], at_end: bool) -> usize;
}

impl<G: ClusterStrategy + ?Sized> ClusterStrategy for &G {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn max_cluster_len(&self) -> usize {
        (**self).max_cluster_len()
    }

    fn first_cluster_len(&self, window: &[char], at_end: bool) -> usize {
        (**self).first_cluster_len(window, at_end)
    }
}

impl<G: ClusterStrategy + ?Sized> ClusterStrategy for Box<G> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn max_cluster_len(&self) -> usize {
        (**self).max_cluster_len()
    }

    fn first_cluster_len(&self, window: &[char], at_end: bool) -> usize {
        (**self).first_cluster_len(window, at_end)
    }
}

// ─── Built-in Strategies ───────────────────────────────────────

/// Every character is its own cluster.
#[derive(Copy, Clone, Debug, Default)]
pub struct CodePoints;

impl ClusterStrategy for CodePoints {
    fn name(&self) -> &str {
        "codepoint"
    }

    fn max_cluster_len(&self) -> usize {
        1
    }

    fn first_cluster_len(&self, _window: &[char], _at_end: bool) -> usize {
        1
    }
}

/// UAX #29 extended grapheme clusters.
#[derive(Copy, Clone, Debug)]
pub struct ExtendedGraphemes {
    max_len: usize,
}

impl ExtendedGraphemes {
    pub const DEFAULT_MAX_LEN: usize = 32;

    /// Use a different cluster bound. Zero is treated as 1.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len: max_len.max(1),
        }
    }
}

impl Default for ExtendedGraphemes {
    fn default() -> Self {
        Self::with_max_len(Self::DEFAULT_MAX_LEN)
    }
}

impl ClusterStrategy for ExtendedGraphemes {
    fn name(&self) -> &str {
        "extended"
    }

    fn max_cluster_len(&self) -> usize {
        self.max_len
    }

    fn first_cluster_len(&self, window: &[char], _at_end: bool) -> usize {
        first_grapheme_len(window, true)
    }
}

/// UAX #29 legacy grapheme clusters.
#[derive(Copy, Clone, Debug)]
pub struct LegacyGraphemes {
    max_len: usize,
}

impl LegacyGraphemes {
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len: max_len.max(1),
        }
    }
}

impl Default for LegacyGraphemes {
    fn default() -> Self {
        Self::with_max_len(ExtendedGraphemes::DEFAULT_MAX_LEN)
    }
}

impl ClusterStrategy for LegacyGraphemes {
    fn name(&self) -> &str {
        "legacy"
    }

    fn max_cluster_len(&self) -> usize {
        self.max_len
    }

    fn first_cluster_len(&self, window: &[char], _at_end: bool) -> usize {
        first_grapheme_len(window, false)
    }
}

/// Grapheme break decisions only look at the characters on either side of
/// a boundary, so a boundary found inside the window is final. A first
/// grapheme that fills the window is cut there by the engine.
fn first_grapheme_len(window: &[char], extended: bool) -> usize {
    let text: String = window.iter().collect();
    text.graphemes(extended)
        .next()
        .map_or(1, |g| g.chars().count())
}

// ─── Closure Strategy ──────────────────────────────────────────

/// A strategy built from a closure.
///
/// ```
/// use quill_grapheme::FnStrategy;
///
/// // Pairs of characters.
/// let pairs = FnStrategy::new("pairs", 2, |window: &[char], _| window.len().min(2));
/// ```
pub struct FnStrategy<F> {
    name: String,
    max_len: usize,
    f: F,
}

impl<F> FnStrategy<F>
where
    F: Fn(&[char], bool) -> usize,
{
    pub fn new(name: impl Into<String>, max_cluster_len: usize, f: F) -> Self {
        Self {
            name: name.into(),
            max_len: max_cluster_len.max(1),
            f,
        }
    }
}

impl<F> ClusterStrategy for FnStrategy<F>
where
    F: Fn(&[char], bool) -> usize,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn max_cluster_len(&self) -> usize {
        self.max_len
    }

    fn first_cluster_len(&self, window: &[char], at_end: bool) -> usize {
        (self.f)(window, at_end)
    }
}

impl<F> fmt::Debug for FnStrategy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStrategy")
            .field("name", &self.name)
            .field("max_len", &self.max_len)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
