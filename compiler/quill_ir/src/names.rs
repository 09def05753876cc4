//! Unicode character names and code point labels.
//!
//! Characters with a `Name` property get that name. The rest get the code
//! point label defined in Unicode §4.8 (`<control-000A>`, ...), so every
//! symbol has a printable name.

/// Resolve the name of `c`. Called at most once per interned symbol.
pub(crate) fn resolve(c: char) -> Box<str> {
    // Cc characters have an empty Name property.
    if !c.is_control() {
        if let Some(name) = unicode_names2::name(c) {
            return name.to_string().into_boxed_str();
        }
    }
    label(c)
}

fn label(c: char) -> Box<str> {
    let kind = if c.is_control() {
        "control"
    } else if is_private_use(c) {
        "private-use"
    } else if is_noncharacter(c) {
        "noncharacter"
    } else {
        "reserved"
    };
    format!("<{kind}-{:04X}>", u32::from(c)).into_boxed_str()
}

fn is_private_use(c: char) -> bool {
    matches!(
        u32::from(c),
        0xE000..=0xF8FF | 0xF_0000..=0xF_FFFD | 0x10_0000..=0x10_FFFD
    )
}

fn is_noncharacter(c: char) -> bool {
    let cp = u32::from(c);
    (0xFDD0..=0xFDEF).contains(&cp) || cp & 0xFFFE == 0xFFFE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_characters() {
        assert_eq!(&*resolve('A'), "LATIN CAPITAL LETTER A");
        assert_eq!(&*resolve('"'), "QUOTATION MARK");
        assert_eq!(&*resolve('λ'), "GREEK SMALL LETTER LAMDA");
    }

    #[test]
    fn controls_get_labels() {
        assert_eq!(&*resolve('\n'), "<control-000A>");
        assert_eq!(&*resolve('\u{7F}'), "<control-007F>");
    }

    #[test]
    fn private_use_and_noncharacters_get_labels() {
        assert_eq!(&*resolve('\u{E000}'), "<private-use-E000>");
        assert_eq!(&*resolve('\u{10FFFD}'), "<private-use-10FFFD>");
        assert_eq!(&*resolve('\u{FDD0}'), "<noncharacter-FDD0>");
        assert_eq!(&*resolve('\u{FFFF}'), "<noncharacter-FFFF>");
        assert_eq!(&*resolve('\u{10FFFF}'), "<noncharacter-10FFFF>");
    }

    #[test]
    fn unassigned_is_reserved() {
        // U+0378 is unassigned in the Greek block.
        assert_eq!(&*resolve('\u{378}'), "<reserved-0378>");
    }
}
