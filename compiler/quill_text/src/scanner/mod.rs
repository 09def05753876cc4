//! The generic text scanner contract and its in-memory implementations.

use std::iter::{Fuse, FusedIterator};

use crate::RawChar;

/// Single-pass, pull-based cursor over a sequence of items.
///
/// # Contract
///
/// - `peek()` never advances. Calling it any number of times between two
///   `advance()` calls returns the same item.
/// - `advance()` returns the item `peek()` would have returned and moves
///   past it.
/// - Exhaustion is terminal: after the first `None`, every later call
///   returns `None`.
///
/// Rewinding is not part of the contract. Scanners over materialized text
/// can be re-derived from their source; streaming scanners cannot.
///
/// `peek` takes `&mut self` because streaming scanners may have to pull
/// from their source to fill the lookahead slot.
pub trait TextScanner {
    type Item;

    /// Returns the next item without consuming it.
    fn peek(&mut self) -> Option<&Self::Item>;

    /// Consumes and returns the next item.
    fn advance(&mut self) -> Option<Self::Item>;

    /// Returns `true` once the scanner has no more items.
    fn is_exhausted(&mut self) -> bool {
        self.peek().is_none()
    }

    /// Consume the next item only if `pred` accepts it.
    fn advance_if(&mut self, pred: impl FnOnce(&Self::Item) -> bool) -> Option<Self::Item>
    where
        Self: Sized,
    {
        if self.peek().is_some_and(pred) {
            self.advance()
        } else {
            None
        }
    }

    /// Consume items while `pred` accepts them. Returns the number consumed.
    fn eat_while(&mut self, mut pred: impl FnMut(&Self::Item) -> bool) -> usize
    where
        Self: Sized,
    {
        let mut count = 0;
        while self.advance_if(&mut pred).is_some() {
            count += 1;
        }
        count
    }

    /// Transform every item with `f`.
    fn map<U, F>(self, f: F) -> Mapped<Self, U, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        Mapped {
            inner: self,
            f,
            current: None,
        }
    }

    /// Adapt into a standard [`Iterator`] that drains the scanner.
    fn into_items(self) -> Items<Self>
    where
        Self: Sized,
    {
        Items(self)
    }
}

impl<S: TextScanner + ?Sized> TextScanner for &mut S {
    type Item = S::Item;

    #[inline]
    fn peek(&mut self) -> Option<&S::Item> {
        (**self).peek()
    }

    #[inline]
    fn advance(&mut self) -> Option<S::Item> {
        (**self).advance()
    }
}

impl<S: TextScanner + ?Sized> TextScanner for Box<S> {
    type Item = S::Item;

    #[inline]
    fn peek(&mut self) -> Option<&S::Item> {
        (**self).peek()
    }

    #[inline]
    fn advance(&mut self) -> Option<S::Item> {
        (**self).advance()
    }
}

/// Iterator adapter returned by [`TextScanner::into_items`].
#[derive(Debug)]
pub struct Items<S>(S);

impl<S: TextScanner> Iterator for Items<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<S::Item> {
        self.0.advance()
    }
}

impl<S: TextScanner> FusedIterator for Items<S> {}

// ─── Materialized Sources ──────────────────────────────────────

/// Scanner over the characters of a `&str`.
///
/// Holds only a byte position into the borrowed text, so any number of
/// independent scanners can be derived from the same string.
#[derive(Clone, Debug)]
pub struct StrScanner<'a> {
    source: &'a str,
    /// Byte offset of `current`.
    pos: usize,
    current: Option<char>,
}

impl<'a> StrScanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            current: source.chars().next(),
        }
    }

    /// Byte offset of the next character.
    #[inline]
    pub fn byte_pos(&self) -> usize {
        self.pos
    }

    /// The unconsumed tail of the source, starting at the next character.
    #[inline]
    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }
}

impl TextScanner for StrScanner<'_> {
    type Item = char;

    #[inline]
    fn peek(&mut self) -> Option<&char> {
        self.current.as_ref()
    }

    #[inline]
    fn advance(&mut self) -> Option<char> {
        let c = self.current?;
        self.pos += c.len_utf8();
        self.current = self.source[self.pos..].chars().next();
        Some(c)
    }
}

/// Scanner over a borrowed slice.
#[derive(Clone, Debug)]
pub struct SliceScanner<'a, T> {
    items: &'a [T],
    pos: usize,
}

impl<'a, T> SliceScanner<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self { items, pos: 0 }
    }

    /// Number of items not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.items.len() - self.pos
    }
}

impl<T: Clone> TextScanner for SliceScanner<'_, T> {
    type Item = T;

    #[inline]
    fn peek(&mut self) -> Option<&T> {
        self.items.get(self.pos)
    }

    #[inline]
    fn advance(&mut self) -> Option<T> {
        let item = self.items.get(self.pos)?.clone();
        self.pos += 1;
        Some(item)
    }
}

// ─── Adapters ──────────────────────────────────────────────────

/// Scanner over any iterator, with a one-item lookahead slot.
///
/// The iterator is fused, so exhaustion stays terminal even for iterators
/// that resume after returning `None`.
#[derive(Debug)]
pub struct IterScanner<I: Iterator> {
    iter: Fuse<I>,
    peeked: Option<I::Item>,
}

impl<I: Iterator> IterScanner<I> {
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            iter: iter.into_iter().fuse(),
            peeked: None,
        }
    }
}

impl<I: Iterator> TextScanner for IterScanner<I> {
    type Item = I::Item;

    #[inline]
    fn peek(&mut self) -> Option<&I::Item> {
        if self.peeked.is_none() {
            self.peeked = self.iter.next();
        }
        self.peeked.as_ref()
    }

    #[inline]
    fn advance(&mut self) -> Option<I::Item> {
        self.peeked.take().or_else(|| self.iter.next())
    }
}

/// Scanner returned by [`TextScanner::map`].
///
/// The mapped value of the lookahead item is cached, so `f` runs exactly
/// once per item no matter how often it is peeked.
#[derive(Debug)]
pub struct Mapped<S, U, F> {
    inner: S,
    f: F,
    current: Option<U>,
}

impl<S, U, F> TextScanner for Mapped<S, U, F>
where
    S: TextScanner,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn peek(&mut self) -> Option<&U> {
        if self.current.is_none() {
            self.current = self.inner.advance().map(&mut self.f);
        }
        self.current.as_ref()
    }

    fn advance(&mut self) -> Option<U> {
        match self.current.take() {
            Some(item) => Some(item),
            None => self.inner.advance().map(&mut self.f),
        }
    }
}

/// Raw character scanner over a `&str`. See [`raw_chars`].
pub type RawStrScanner<'a> = Mapped<StrScanner<'a>, RawChar, fn(char) -> RawChar>;

/// Scan the characters of `source` as [`RawChar`] values.
pub fn raw_chars(source: &str) -> RawStrScanner<'_> {
    StrScanner::new(source).map(RawChar::from_char as fn(char) -> RawChar)
}
