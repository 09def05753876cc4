//! Quill Grapheme - pluggable clustering of character scanners.
//!
//! A [`ClusterScanner`] groups the items of any character scanner into
//! clusters. What counts as one cluster is decided by a caller-supplied
//! [`ClusterStrategy`]; the engine only buffers and slices.
//!
//! ```text
//! CharacterScanner ──> ClusterScanner<_, ExtendedGraphemes> ──> Cluster, Cluster, ...
//! ```
//!
//! The engine never looks further ahead than the strategy's
//! [`max_cluster_len`](ClusterStrategy::max_cluster_len). Concatenating the
//! clusters in order always reproduces the input.

mod cluster;
mod engine;
mod strategy;

pub use cluster::{Cluster, ClusterItem};
pub use engine::ClusterScanner;
pub use strategy::{ClusterStrategy, CodePoints, ExtendedGraphemes, FnStrategy, LegacyGraphemes};

use quill_ir::{CharacterScanner, StringValue};
use quill_text::TextScanner;

/// Cluster the items of `scanner` with `strategy`.
pub fn cluster<S, G>(scanner: S, strategy: G) -> ClusterScanner<S, G>
where
    S: TextScanner,
    S::Item: ClusterItem,
    G: ClusterStrategy,
{
    ClusterScanner::new(scanner, strategy)
}

/// Cluster the characters of a string with `strategy`.
pub fn clusters_of<G: ClusterStrategy>(
    string: &StringValue,
    strategy: G,
) -> ClusterScanner<CharacterScanner<'_>, G> {
    ClusterScanner::new(string.characters(), strategy)
}
