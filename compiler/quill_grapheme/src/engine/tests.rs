use super::*;
use crate::{cluster, clusters_of, CodePoints, ExtendedGraphemes, FnStrategy, LegacyGraphemes};
use pretty_assertions::assert_eq;
use quill_ir::StringValue;
use quill_text::{IterScanner, StrScanner};

fn split<G: ClusterStrategy>(text: &str, strategy: G) -> Vec<String> {
    cluster(StrScanner::new(text), strategy)
        .into_items()
        .map(|c| c.to_string())
        .collect()
}

#[test]
fn extended_clusters() {
    assert_eq!(
        split("e\u{301}a\r\n\u{1F1EB}\u{1F1F7}", ExtendedGraphemes::default()),
        vec!["e\u{301}", "a", "\r\n", "\u{1F1EB}\u{1F1F7}"]
    );
}

#[test]
fn code_point_clusters() {
    assert_eq!(split("e\u{301}", CodePoints), vec!["e", "\u{301}"]);
}

#[test]
fn over_long_cluster_is_split_at_bound() {
    let text = format!("a{}", "\u{301}".repeat(5));
    let clusters = split(&text, ExtendedGraphemes::with_max_len(4));
    assert_eq!(
        clusters,
        vec![format!("a{}", "\u{301}".repeat(3)), "\u{301}".repeat(2)]
    );
}

#[test]
fn window_never_exceeds_bound() {
    let seen = std::cell::Cell::new(0usize);
    let strategy = FnStrategy::new("probe", 3, |window: &[char], _| {
        seen.set(seen.get().max(window.len()));
        window.len()
    });
    let clusters = split("abcdefgh", &strategy);
    assert_eq!(clusters, vec!["abc", "def", "gh"]);
    assert_eq!(seen.get(), 3);
}

#[test]
fn out_of_range_answers_are_clamped() {
    let zero = FnStrategy::new("zero", 4, |_: &[char], _| 0);
    assert_eq!(split("ab", &zero), vec!["a", "b"]);

    let greedy = FnStrategy::new("greedy", 4, |_: &[char], _| usize::MAX);
    assert_eq!(split("abcdef", &greedy), vec!["abcd", "ef"]);
}

#[test]
fn at_end_only_when_source_is_drained() {
    let ends = std::cell::RefCell::new(Vec::new());
    let strategy = FnStrategy::new("ends", 2, |_: &[char], at_end| {
        ends.borrow_mut().push(at_end);
        1
    });
    let _ = split("abc", &strategy);
    assert_eq!(*ends.borrow(), vec![false, true, true]);
}

#[test]
fn peek_is_stable() {
    let mut scanner = cluster(StrScanner::new("xy"), CodePoints);
    let first = scanner.peek().map(ToString::to_string);
    assert_eq!(scanner.peek().map(ToString::to_string), first);
    assert_eq!(scanner.advance().map(|c| c.to_string()), first);
    assert_eq!(scanner.advance().map(|c| c.to_string()), Some("y".to_owned()));
    assert!(scanner.is_exhausted());
    assert!(scanner.advance().is_none());
}

#[test]
fn empty_source_has_no_clusters() {
    let mut scanner = cluster(IterScanner::new(Vec::<char>::new()), ExtendedGraphemes::default());
    assert!(scanner.is_exhausted());
}

#[test]
fn clusters_of_string_value_scan_symbols() {
    let string = StringValue::from("n\u{303}o");
    let clusters: Vec<_> = clusters_of(&string, LegacyGraphemes::default())
        .into_items()
        .collect();
    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].len(), 2);

    let mut inner = clusters[0].characters();
    assert_eq!(inner.advance().map(|s| s.code_point()), Some('n'));
    assert_eq!(inner.advance().map(|s| s.code_point()), Some('\u{303}'));
    assert!(inner.is_exhausted());
}

#[test]
fn runtime_chosen_strategy() {
    let strategy: Box<dyn ClusterStrategy> = Box::new(CodePoints);
    assert_eq!(split("ab", strategy), vec!["a", "b"]);
}

mod proptest_concat {
    use super::split;
    use crate::{CodePoints, ExtendedGraphemes, LegacyGraphemes};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn clusters_concatenate_to_input(text in "\\PC{0,40}", bound in 1usize..8) {
            let extended = split(&text, ExtendedGraphemes::with_max_len(bound)).concat();
            prop_assert_eq!(&extended, &text);
            let legacy = split(&text, LegacyGraphemes::with_max_len(bound)).concat();
            prop_assert_eq!(&legacy, &text);
            let points = split(&text, CodePoints);
            prop_assert_eq!(points.len(), text.chars().count());
        }

        #[test]
        fn clusters_respect_bound(text in "[a\u{301}\u{200D}]{0,40}", bound in 1usize..6) {
            for cluster in split(&text, ExtendedGraphemes::with_max_len(bound)) {
                prop_assert!(cluster.chars().count() <= bound);
                prop_assert!(!cluster.is_empty());
            }
        }
    }
}
