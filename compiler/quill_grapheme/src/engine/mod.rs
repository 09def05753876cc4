//! The clustering engine.

use smallvec::SmallVec;

use quill_text::TextScanner;

use crate::{Cluster, ClusterItem, ClusterStrategy};

/// Window capacity kept inline before spilling to the heap.
const INLINE_WINDOW: usize = 32;

/// Scanner of clusters over an underlying item scanner.
///
/// Holds at most `max_cluster_len` buffered items plus one peeked cluster.
/// Exhaustion is terminal, like every other scanner.
pub struct ClusterScanner<S: TextScanner, G> {
    source: S,
    strategy: G,
    window: SmallVec<[S::Item; INLINE_WINDOW]>,
    /// Characters of `window`, handed to the strategy.
    chars: SmallVec<[char; INLINE_WINDOW]>,
    peeked: Option<Cluster<S::Item>>,
}

impl<S, G> ClusterScanner<S, G>
where
    S: TextScanner,
    S::Item: ClusterItem,
    G: ClusterStrategy,
{
    pub fn new(source: S, strategy: G) -> Self {
        tracing::trace!(strategy = strategy.name(), "starting cluster scan");
        Self {
            source,
            strategy,
            window: SmallVec::new(),
            chars: SmallVec::new(),
            peeked: None,
        }
    }

    /// The strategy in use.
    pub fn strategy(&self) -> &G {
        &self.strategy
    }

    fn next_cluster(&mut self) -> Option<Cluster<S::Item>> {
        let bound = self.strategy.max_cluster_len().max(1);
        while self.window.len() < bound {
            match self.source.advance() {
                Some(item) => {
                    self.chars.push(item.as_char());
                    self.window.push(item);
                }
                None => break,
            }
        }
        if self.window.is_empty() {
            return None;
        }

        let at_end = self.source.is_exhausted();
        let wanted = self.strategy.first_cluster_len(&self.chars, at_end);
        let len = wanted.clamp(1, self.window.len());
        if !at_end && len == bound && wanted >= bound {
            tracing::trace!(
                strategy = self.strategy.name(),
                bound,
                "cluster reaches bound, splitting"
            );
        }

        self.chars.drain(..len);
        Some(Cluster::new(self.window.drain(..len).collect()))
    }
}

impl<S, G> TextScanner for ClusterScanner<S, G>
where
    S: TextScanner,
    S::Item: ClusterItem,
    G: ClusterStrategy,
{
    type Item = Cluster<S::Item>;

    fn peek(&mut self) -> Option<&Cluster<S::Item>> {
        if self.peeked.is_none() {
            self.peeked = self.next_cluster();
        }
        self.peeked.as_ref()
    }

    fn advance(&mut self) -> Option<Cluster<S::Item>> {
        self.peeked.take().or_else(|| self.next_cluster())
    }
}

impl<S: TextScanner, G> std::fmt::Debug for ClusterScanner<S, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClusterScanner")
            .field("buffered", &self.window.len())
            .field("peeked", &self.peeked.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
