use super::*;
use pretty_assertions::assert_eq;

/// Reader that returns at most `step` bytes per call.
struct Trickle<'a> {
    bytes: &'a [u8],
    step: usize,
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.step.min(buf.len()).min(self.bytes.len());
        buf[..n].copy_from_slice(&self.bytes[..n]);
        self.bytes = &self.bytes[n..];
        Ok(n)
    }
}

/// Reader that yields some bytes, then fails.
struct Failing<'a> {
    bytes: &'a [u8],
}

impl Read for Failing<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.bytes.is_empty() {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        }
        let n = buf.len().min(self.bytes.len());
        buf[..n].copy_from_slice(&self.bytes[..n]);
        self.bytes = &self.bytes[n..];
        Ok(n)
    }
}

fn decode_all(bytes: &[u8]) -> Vec<RawChar> {
    let mut decoder = Utf8Decoder::new();
    let mut out = VecDeque::new();
    for &b in bytes {
        decoder.push(b, &mut out);
    }
    out.extend(decoder.finish());
    out.into_iter().collect()
}

fn raw(s: &str) -> Vec<RawChar> {
    s.chars().map(RawChar::from).collect()
}

// === Utf8Decoder ===

#[test]
fn decodes_all_widths() {
    let text = "a\u{e9}\u{20ac}\u{1F600}";
    assert_eq!(decode_all(text.as_bytes()), raw(text));
}

#[test]
fn holds_incomplete_sequence() {
    let mut decoder = Utf8Decoder::new();
    let mut out = VecDeque::new();
    // U+20AC is E2 82 AC.
    decoder.push(0xE2, &mut out);
    decoder.push(0x82, &mut out);
    assert!(out.is_empty());
    assert!(decoder.has_pending());
    decoder.push(0xAC, &mut out);
    assert_eq!(out.pop_front(), Some(RawChar::from('\u{20ac}')));
    assert!(!decoder.has_pending());
}

#[test]
fn truncated_sequence_at_end_is_replacement() {
    assert_eq!(decode_all(&[b'a', 0xE2, 0x82]), vec![RawChar::from('a'), RawChar::REPLACEMENT]);
}

#[test]
fn interrupted_sequence_reprocesses_byte() {
    assert_eq!(
        decode_all(&[0xE2, b'x']),
        vec![RawChar::REPLACEMENT, RawChar::from('x')]
    );
}

#[test]
fn stray_continuation_is_replacement() {
    assert_eq!(decode_all(&[0x80, b'y']), vec![RawChar::REPLACEMENT, RawChar::from('y')]);
}

#[test]
fn overlong_encodings_rejected() {
    // C0 80 is an overlong NUL; E0 80 80 an overlong NUL in three bytes.
    assert_eq!(decode_all(&[0xC0]), vec![RawChar::REPLACEMENT]);
    assert_eq!(
        decode_all(&[0xE0, 0x80, 0x80]),
        vec![RawChar::REPLACEMENT, RawChar::REPLACEMENT, RawChar::REPLACEMENT]
    );
}

#[test]
fn encoded_surrogate_passes_through_raw() {
    // ED A0 80 is U+D800 in generalized UTF-8.
    assert_eq!(decode_all(&[0xED, 0xA0, 0x80]), vec![RawChar::new(0xD800)]);
}

#[test]
fn beyond_max_scalar_rejected() {
    // F4 90 would start U+110000.
    let decoded = decode_all(&[0xF4, 0x90, 0x80, 0x80]);
    assert_eq!(decoded[0], RawChar::REPLACEMENT);
}

// === Utf8ReadScanner ===

#[test]
fn read_scanner_survives_byte_at_a_time_reads() {
    let text = "h\u{e9}\u{1F600}!";
    let reader = Trickle {
        bytes: text.as_bytes(),
        step: 1,
    };
    let chars: Vec<RawChar> = Utf8ReadScanner::new(reader).into_items().collect();
    assert_eq!(chars, raw(text));
}

#[test]
fn read_scanner_chunk_boundaries_inside_code_points() {
    let text = "\u{1F600}\u{1F600}\u{1F600}";
    for step in 1..=5 {
        let reader = Trickle {
            bytes: text.as_bytes(),
            step,
        };
        let chars: Vec<RawChar> = Utf8ReadScanner::with_chunk_size(reader, 3)
            .into_items()
            .collect();
        assert_eq!(chars, raw(text), "step {step}");
    }
}

#[test]
fn read_scanner_peek_is_stable() {
    let mut scanner = Utf8ReadScanner::new("ab".as_bytes());
    assert_eq!(scanner.peek(), Some(&RawChar::from('a')));
    assert_eq!(scanner.peek(), Some(&RawChar::from('a')));
    assert_eq!(scanner.advance(), Some(RawChar::from('a')));
    assert_eq!(scanner.advance(), Some(RawChar::from('b')));
    assert_eq!(scanner.advance(), None);
    assert_eq!(scanner.peek(), None);
}

#[test]
fn read_scanner_error_ends_scan() {
    let mut scanner = Utf8ReadScanner::new(Failing { bytes: b"ok\xE2" });
    assert_eq!(scanner.advance(), Some(RawChar::from('o')));
    assert_eq!(scanner.advance(), Some(RawChar::from('k')));
    // The dangling lead byte is flushed as U+FFFD when the error ends input.
    assert_eq!(scanner.advance(), Some(RawChar::REPLACEMENT));
    assert_eq!(scanner.advance(), None);
    let err = scanner.take_error();
    assert_eq!(err.map(|e| e.kind()), Some(io::ErrorKind::BrokenPipe));
    assert_eq!(scanner.advance(), None);
}

// === Utf16Scanner ===

#[test]
fn utf16_pairs_and_bmp() {
    let text = "x\u{1F600}y";
    let units: Vec<u16> = text.encode_utf16().collect();
    let chars: Vec<RawChar> = Utf16Scanner::new(units).into_items().collect();
    assert_eq!(chars, raw(text));
}

#[test]
fn utf16_lone_surrogates_pass_through() {
    let units: [u16; 4] = [0x0061, 0xD800, 0x0062, 0xDC01];
    let chars: Vec<RawChar> = Utf16Scanner::new(units).into_items().collect();
    assert_eq!(
        chars,
        vec![
            RawChar::from('a'),
            RawChar::new(0xD800),
            RawChar::from('b'),
            RawChar::new(0xDC01),
        ]
    );
}
