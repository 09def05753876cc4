//! Unvalidated source characters.

use std::fmt;

/// A source character as delivered by a decoder, before validation.
///
/// Usually a Unicode scalar value, but streaming decoders may also produce
/// lone surrogates (`0xD800..=0xDFFF`). Validation happens when a literal
/// body is decoded into a string, not while scanning.
///
/// Layout: 4 bytes, `#[repr(transparent)]` over `u32`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct RawChar(u32);

impl RawChar {
    /// The literal delimiter character `"`.
    pub const QUOTE: RawChar = RawChar('"' as u32);

    /// Line feed, the only line terminator recognized by the scanners.
    pub const NEWLINE: RawChar = RawChar('\n' as u32);

    /// U+FFFD, substituted for byte sequences that decode to nothing.
    pub const REPLACEMENT: RawChar = RawChar(0xFFFD);

    /// Wrap a raw code unit value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        RawChar(value)
    }

    /// Wrap a `char` (always a valid scalar value).
    #[inline]
    pub const fn from_char(c: char) -> Self {
        RawChar(c as u32)
    }

    /// The underlying integer value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Convert to `char`, or `None` for surrogates and out-of-range values.
    #[inline]
    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.0)
    }

    #[inline]
    pub const fn is_quote(self) -> bool {
        self.0 == Self::QUOTE.0
    }

    #[inline]
    pub const fn is_newline(self) -> bool {
        self.0 == Self::NEWLINE.0
    }

    /// Space or horizontal tab: the characters that count toward a line's
    /// indentation column.
    #[inline]
    pub const fn is_indent(self) -> bool {
        self.0 == b' ' as u32 || self.0 == b'\t' as u32
    }

    /// Indentation characters plus `\r`. A line made only of these is blank.
    #[inline]
    pub const fn is_blank(self) -> bool {
        self.is_indent() || self.0 == b'\r' as u32
    }
}

impl From<char> for RawChar {
    #[inline]
    fn from(c: char) -> Self {
        RawChar::from_char(c)
    }
}

impl fmt::Debug for RawChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_char() {
            Some(c) => write!(f, "{c:?}"),
            None => write!(f, "RawChar(0x{:04X})", self.0),
        }
    }
}

impl fmt::Display for RawChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_char() {
            Some(c) => write!(f, "{c}"),
            None => write!(f, "\\u{{{:04X}}}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surrogates_do_not_convert() {
        assert_eq!(RawChar::new(0xD800).to_char(), None);
        assert_eq!(RawChar::new(0xDFFF).to_char(), None);
        assert_eq!(RawChar::new(0x11_0000).to_char(), None);
        assert_eq!(RawChar::new(0x41).to_char(), Some('A'));
    }

    #[test]
    fn classification() {
        assert!(RawChar::from('"').is_quote());
        assert!(RawChar::from('\n').is_newline());
        assert!(RawChar::from(' ').is_indent());
        assert!(RawChar::from('\t').is_indent());
        assert!(!RawChar::from('\r').is_indent());
        assert!(RawChar::from('\r').is_blank());
        assert!(!RawChar::from('x').is_blank());
    }

    #[test]
    fn debug_shows_raw_value_for_surrogates() {
        assert_eq!(format!("{:?}", RawChar::new(0xDC00)), "RawChar(0xDC00)");
        assert_eq!(format!("{:?}", RawChar::from('a')), "'a'");
    }
}
