use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_intern_same_code_point_twice() {
    let table = SymbolTable::new();

    let a = table.intern_char('a');
    let a2 = table.intern_char('a');
    let b = table.intern_char('b');

    assert_eq!(a, a2);
    assert!(a.ptr_eq(a2));
    assert_ne!(a, b);
    assert_eq!(table.len(), 2);
}

#[test]
fn test_try_intern_rejects_non_scalars() {
    let table = SymbolTable::new();

    assert_eq!(
        table.try_intern(0xD800),
        Err(CodecError::invalid_scalar(0xD800))
    );
    assert_eq!(
        table.try_intern(0x11_0000),
        Err(CodecError::invalid_scalar(0x11_0000))
    );
    assert!(table.is_empty());

    let max = table.try_intern(0x10_FFFF).map(CharSymbol::code_point);
    assert_eq!(max, Ok('\u{10FFFF}'));
}

#[test]
fn test_interning_does_not_resolve_names() {
    let table = SymbolTable::new();
    let sym = table.intern_char('Q');
    assert!(!sym.has_cached_name());

    assert_eq!(sym.name(), "LATIN CAPITAL LETTER Q");
    assert!(sym.has_cached_name());
    // Cached on the entry, so every copy sees it.
    assert!(table.intern_char('Q').has_cached_name());
}

#[test]
fn test_separate_tables_are_equal_but_distinct() {
    let first = SymbolTable::new();
    let second = SymbolTable::new();

    let x = first.intern_char('x');
    let y = second.intern_char('x');
    assert_eq!(x, y);
    assert!(!x.ptr_eq(y));
}

#[test]
fn test_decode_body_in_order() {
    let table = SymbolTable::new();
    let raw: Vec<RawChar> = "aba".chars().map(RawChar::from).collect();

    let value = table.decode_body(&raw);
    assert_eq!(value.as_ref().map(ToString::to_string), Ok("aba".to_owned()));
    assert_eq!(table.len(), 2);
}

#[test]
fn test_decode_body_reports_first_bad_index() {
    let table = SymbolTable::new();
    let raw = [
        RawChar::from('o'),
        RawChar::from('k'),
        RawChar::new(0xDC00),
        RawChar::new(0x11_0000),
    ];

    assert_eq!(
        table.decode_body(&raw),
        Err(CodecError::invalid_scalar(0xDC00).at(2))
    );
}

#[test]
fn test_decode_empty_body() {
    let table = SymbolTable::new();
    let value = table.decode_body(&[]);
    assert_eq!(value, Ok(StringValue::default()));
}

#[test]
fn test_concurrent_interning_yields_one_entry() {
    let table = SymbolTable::new();

    // Every thread waits at the barrier so the first inserts actually race.
    let barrier = std::sync::Barrier::new(8);
    let symbols: Vec<CharSymbol> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    table.intern_char('λ')
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("interning thread panicked"))
            .collect()
    });

    let first = symbols[0];
    assert!(symbols.iter().all(|s| s.ptr_eq(first)));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_global_table_is_shared() {
    let a = SymbolTable::global().intern_char('\u{2603}');
    let b = crate::intern_char('\u{2603}');
    assert!(a.ptr_eq(b));
    assert_eq!(crate::name_of(a), "SNOWMAN");
}

mod proptest_codec {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn decode_accepts_exactly_the_scalars(
            values in prop::collection::vec(any::<u32>(), 0..16),
        ) {
            let table = SymbolTable::new();
            let raw: Vec<RawChar> = values.iter().copied().map(RawChar::new).collect();
            let first_bad = values.iter().position(|&v| char::from_u32(v).is_none());

            match (table.decode_body(&raw), first_bad) {
                (Ok(value), None) => {
                    let expected: String =
                        values.iter().filter_map(|&v| char::from_u32(v)).collect();
                    prop_assert_eq!(value.to_string(), expected);
                }
                (Err(err), Some(index)) => {
                    prop_assert_eq!(err, CodecError::invalid_scalar(values[index]).at(index));
                }
                (result, expected) => {
                    prop_assert!(false, "got {:?}, first bad index {:?}", result, expected);
                }
            }
        }

        #[test]
        fn scalars_round_trip(c in any::<char>()) {
            let table = SymbolTable::new();
            let symbol = table.try_intern(u32::from(c));
            prop_assert_eq!(symbol.map(CharSymbol::code_point), Ok(c));
        }

        #[test]
        fn surrogates_are_rejected(value in 0xD800u32..=0xDFFF) {
            let table = SymbolTable::new();
            prop_assert!(table.try_intern(value).is_err());
            prop_assert!(table.is_empty());
        }
    }
}
