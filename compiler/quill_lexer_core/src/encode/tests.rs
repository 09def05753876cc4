use super::*;
use crate::{normalize, LiteralScanner};
use pretty_assertions::assert_eq;
use quill_text::{SourceCursor, TextScanner};

/// Place `encoded` at `column` and read it back.
fn read_back(encoded: &str, column: u32) -> String {
    let source = format!("{}{encoded}", " ".repeat(column as usize));
    let mut cursor = SourceCursor::for_str(&source);
    cursor.eat_while(|c| !c.is_quote());
    match LiteralScanner::scan(&mut cursor) {
        Ok(token) => {
            assert!(cursor.is_exhausted(), "trailing input after {source:?}");
            normalize(&token).iter().map(ToString::to_string).collect()
        }
        Err(err) => panic!("re-scan of {source:?} failed: {err}"),
    }
}

#[test]
fn run_lengths() {
    assert_eq!(quote_run_lengths(b"a\"b\"\"\"c\"\""), vec![1, 3, 2]);
    assert_eq!(quote_run_lengths(b"none"), Vec::<usize>::new());
}

#[test]
fn minimal_delimiter_skips_present_runs() {
    assert_eq!(minimal_delimiter_len("plain"), 1);
    assert_eq!(minimal_delimiter_len("a\"b"), 2);
    assert_eq!(minimal_delimiter_len("a\"b\"\"c"), 3);
    // Runs of 2 alone leave 1 available.
    assert_eq!(minimal_delimiter_len("a\"\"b"), 1);
}

#[test]
fn single_line_spellings() {
    assert_eq!(encode_literal("hello", 0), "\"hello\"");
    assert_eq!(encode_literal("say \"hi\" now", 0), "\"\"say \"hi\" now\"\"");
    assert_eq!(encode_literal("a\nb", 4), "\"a\nb\"");
}

#[test]
fn empty_content() {
    assert_eq!(encode_literal("", 3), EMPTY_STRING);
}

#[test]
fn edge_quotes_force_multi_line() {
    let encoded = encode_literal("\"Hello,\" she said.", 0);
    assert_eq!(encoded, "\"\n\"Hello,\" she said.\n\"");
    assert_eq!(read_back(&encoded, 0), "\"Hello,\" she said.");
}

#[test]
fn multi_line_indents_to_column() {
    let encoded = encode_literal("\nfirst\n\n  second", 2);
    assert_eq!(encoded, "\"\n\n  first\n\n    second\n  \"");
    assert_eq!(read_back(&encoded, 2), "\nfirst\n\n  second");
}

#[test]
fn multi_line_avoids_quote_only_lines() {
    let content = "\"\n\"\" \nx";
    let encoded = encode_literal(content, 0);
    assert!(encoded.starts_with("\"\"\"\n"));
    assert_eq!(read_back(&encoded, 0), content);
}

#[test]
fn whitespace_lines_survive() {
    for content in ["\n", "\n\n", "\"\n  \n\r\n\t", " \"x\""] {
        for column in [0, 1, 4] {
            let encoded = encode_literal(content, column);
            assert_eq!(read_back(&encoded, column), content, "{encoded:?}");
        }
    }
}

mod proptest_encode {
    use super::read_back;
    use crate::encode_literal;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn encoded_content_reads_back(
            content in "[ab \"\t\r\n]{1,32}",
            column in 0u32..6,
        ) {
            let encoded = encode_literal(&content, column);
            prop_assert_eq!(read_back(&encoded, column), content);
        }

        #[test]
        fn re_encoding_is_stable(content in "[a\" \n]{1,24}", column in 0u32..4) {
            let once = read_back(&encode_literal(&content, column), column);
            let twice = read_back(&encode_literal(&once, column), column);
            prop_assert_eq!(once, twice);
        }
    }
}
