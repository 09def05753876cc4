//! Streaming decoders: scanners over one-shot byte and code unit sources.
//!
//! A streaming source may deliver a multi-byte sequence split across two
//! reads. The decoder keeps the incomplete prefix internally and only emits
//! a [`RawChar`] once the sequence is complete, so a scanner never observes
//! a partial code point no matter where the source splits its chunks.
//!
//! Decoding is lenient. Malformed bytes become U+FFFD, and surrogates
//! (encoded as `ED A0..BF xx`, or lone UTF-16 units) pass through as raw
//! values for the symbol codec to reject.

use std::char::DecodeUtf16;
use std::collections::VecDeque;
use std::io::{self, Read};
use std::iter::Fuse;

use crate::{RawChar, TextScanner};

/// Default read chunk for [`Utf8ReadScanner`].
const READ_CHUNK: usize = 8 * 1024;

// ─── UTF-8 ─────────────────────────────────────────────────────

/// Incremental, push-based UTF-8 decoder.
///
/// Feed bytes with [`push`](Self::push); completed characters are appended
/// to the output queue. Call [`finish`](Self::finish) at end of input to
/// flush a truncated sequence as U+FFFD.
#[derive(Clone, Debug, Default)]
pub struct Utf8Decoder {
    /// Lead byte of the pending sequence (0 when idle).
    lead: u8,
    /// Bits accumulated so far.
    value: u32,
    /// Continuation bytes still expected.
    needed: u8,
    /// Bytes consumed for the pending sequence, lead included.
    seen: u8,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a multi-byte sequence is incomplete.
    #[inline]
    pub fn has_pending(&self) -> bool {
        self.needed > 0
    }

    /// Feed one byte.
    ///
    /// Appends zero, one, or two characters to `out`. Two are produced when
    /// `byte` interrupts a pending sequence: U+FFFD for the truncated
    /// sequence, then whatever `byte` decodes to on its own.
    pub fn push(&mut self, byte: u8, out: &mut VecDeque<RawChar>) {
        if self.needed == 0 {
            self.start(byte, out);
            return;
        }
        if self.accepts(byte) {
            self.value = (self.value << 6) | u32::from(byte & 0x3F);
            self.needed -= 1;
            self.seen += 1;
            if self.needed == 0 {
                out.push_back(RawChar::new(self.value));
                self.reset();
            }
        } else {
            out.push_back(RawChar::REPLACEMENT);
            self.reset();
            self.start(byte, out);
        }
    }

    /// Signal end of input. Returns U+FFFD if a sequence was left incomplete.
    pub fn finish(&mut self) -> Option<RawChar> {
        if self.has_pending() {
            self.reset();
            Some(RawChar::REPLACEMENT)
        } else {
            None
        }
    }

    fn start(&mut self, byte: u8, out: &mut VecDeque<RawChar>) {
        let (value, needed) = match byte {
            0x00..=0x7F => {
                out.push_back(RawChar::new(u32::from(byte)));
                return;
            }
            0xC2..=0xDF => (byte & 0x1F, 1),
            0xE0..=0xEF => (byte & 0x0F, 2),
            0xF0..=0xF4 => (byte & 0x07, 3),
            // Stray continuation bytes, overlong leads (C0, C1), and
            // leads beyond U+10FFFF.
            _ => {
                out.push_back(RawChar::REPLACEMENT);
                return;
            }
        };
        self.lead = byte;
        self.value = u32::from(value);
        self.needed = needed;
        self.seen = 1;
    }

    /// Whether `byte` is a valid continuation for the pending sequence.
    ///
    /// The second byte is range-restricted to reject overlong encodings and
    /// values past U+10FFFF. `ED` takes the full continuation range, so
    /// encoded surrogates decode to their raw values.
    fn accepts(&self, byte: u8) -> bool {
        let (lo, hi) = if self.seen == 1 {
            match self.lead {
                0xE0 => (0xA0, 0xBF),
                0xF0 => (0x90, 0xBF),
                0xF4 => (0x80, 0x8F),
                _ => (0x80, 0xBF),
            }
        } else {
            (0x80, 0xBF)
        };
        (lo..=hi).contains(&byte)
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Scanner over a UTF-8 byte stream read from an [`io::Read`] source.
///
/// One-shot: the reader is consumed as the scanner advances. Short reads are
/// fine; the decoder holds incomplete sequences until the rest arrives.
///
/// An I/O error ends the scan. The error is kept and can be retrieved with
/// [`take_error`](Self::take_error).
pub struct Utf8ReadScanner<R> {
    reader: R,
    decoder: Utf8Decoder,
    ready: VecDeque<RawChar>,
    chunk: Vec<u8>,
    done: bool,
    error: Option<io::Error>,
}

impl<R: Read> Utf8ReadScanner<R> {
    pub fn new(reader: R) -> Self {
        Self::with_chunk_size(reader, READ_CHUNK)
    }

    /// Create a scanner that reads at most `chunk_size` bytes at a time.
    pub fn with_chunk_size(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            decoder: Utf8Decoder::new(),
            ready: VecDeque::new(),
            chunk: vec![0; chunk_size.max(1)],
            done: false,
            error: None,
        }
    }

    /// Take the I/O error that ended the scan, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Read until at least one character is ready or the source ends.
    fn fill(&mut self) {
        while self.ready.is_empty() && !self.done {
            match self.reader.read(&mut self.chunk) {
                Ok(0) => {
                    self.done = true;
                    if let Some(c) = self.decoder.finish() {
                        self.ready.push_back(c);
                    }
                }
                Ok(n) => {
                    for &byte in &self.chunk[..n] {
                        self.decoder.push(byte, &mut self.ready);
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    tracing::debug!(error = %e, "utf-8 source failed; ending scan");
                    self.done = true;
                    if let Some(c) = self.decoder.finish() {
                        self.ready.push_back(c);
                    }
                    self.error = Some(e);
                }
            }
        }
    }
}

impl<R: Read> TextScanner for Utf8ReadScanner<R> {
    type Item = RawChar;

    fn peek(&mut self) -> Option<&RawChar> {
        self.fill();
        self.ready.front()
    }

    fn advance(&mut self) -> Option<RawChar> {
        self.fill();
        self.ready.pop_front()
    }
}

impl<R> std::fmt::Debug for Utf8ReadScanner<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Utf8ReadScanner")
            .field("decoder", &self.decoder)
            .field("ready", &self.ready)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

// ─── UTF-16 ────────────────────────────────────────────────────

/// Scanner over UTF-16 code units. Unpaired surrogates pass through raw.
pub struct Utf16Scanner<I: Iterator<Item = u16>> {
    units: DecodeUtf16<Fuse<I>>,
    current: Option<RawChar>,
}

impl<I: Iterator<Item = u16>> Utf16Scanner<I> {
    pub fn new(units: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            units: char::decode_utf16(units.into_iter().fuse()),
            current: None,
        }
    }

    fn decode_next(&mut self) -> Option<RawChar> {
        self.units.next().map(|unit| match unit {
            Ok(c) => RawChar::from(c),
            Err(e) => RawChar::new(u32::from(e.unpaired_surrogate())),
        })
    }
}

impl<I: Iterator<Item = u16>> TextScanner for Utf16Scanner<I> {
    type Item = RawChar;

    fn peek(&mut self) -> Option<&RawChar> {
        if self.current.is_none() {
            self.current = self.decode_next();
        }
        self.current.as_ref()
    }

    fn advance(&mut self) -> Option<RawChar> {
        self.current.take().or_else(|| self.decode_next())
    }
}

#[cfg(test)]
mod tests;
