use super::*;
use pretty_assertions::assert_eq;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn code_points_take_one() {
    assert_eq!(CodePoints.first_cluster_len(&chars("e\u{301}"), true), 1);
    assert_eq!(CodePoints.max_cluster_len(), 1);
}

#[test]
fn extended_keeps_combining_marks() {
    let strategy = ExtendedGraphemes::default();
    assert_eq!(strategy.first_cluster_len(&chars("e\u{301}x"), true), 2);
    assert_eq!(strategy.first_cluster_len(&chars("ab"), false), 1);
}

#[test]
fn extended_joins_crlf() {
    let strategy = ExtendedGraphemes::default();
    assert_eq!(strategy.first_cluster_len(&chars("\r\nx"), true), 2);
}

#[test]
fn extended_joins_emoji_zwj_sequences() {
    // WOMAN ZWJ LAPTOP
    let window = chars("\u{1F469}\u{200D}\u{1F4BB}!");
    assert_eq!(ExtendedGraphemes::default().first_cluster_len(&window, true), 3);
}

#[test]
fn legacy_differs_on_spacing_marks() {
    // DEVANAGARI LETTER KA + VOWEL SIGN AA (spacing mark)
    let window = chars("\u{915}\u{93E}");
    assert_eq!(ExtendedGraphemes::default().first_cluster_len(&window, true), 2);
    assert_eq!(LegacyGraphemes::default().first_cluster_len(&window, true), 1);
}

#[test]
fn zero_bound_is_raised_to_one() {
    assert_eq!(ExtendedGraphemes::with_max_len(0).max_cluster_len(), 1);
    assert_eq!(LegacyGraphemes::with_max_len(0).max_cluster_len(), 1);
}

#[test]
fn closure_strategy() {
    let pairs = FnStrategy::new("pairs", 2, |window: &[char], _| window.len().min(2));
    assert_eq!(pairs.name(), "pairs");
    assert_eq!(pairs.max_cluster_len(), 2);
    assert_eq!(pairs.first_cluster_len(&chars("abc"), false), 2);
}

#[test]
fn boxed_and_borrowed_strategies_delegate() {
    let boxed: Box<dyn ClusterStrategy> = Box::new(ExtendedGraphemes::with_max_len(5));
    assert_eq!(boxed.name(), "extended");
    assert_eq!(boxed.max_cluster_len(), 5);

    let borrowed = &CodePoints;
    assert_eq!(borrowed.name(), "codepoint");
}
