use super::*;

// Character-count measure: deterministic and monotone in string length.
fn char_measure(s: &str) -> f64 {
    s.chars().count() as f64
}

#[test]
fn empty_text_yields_no_lines() {
    let lines = wrap("", char_measure, 10.0);
    assert!(lines.is_empty());
}

#[test]
fn short_text_stays_on_one_line() {
    let lines = wrap("hello world", char_measure, 20.0);
    assert_eq!(lines, vec!["hello world"]);
}

#[test]
fn commit_happens_when_candidate_overflows() {
    // "aaa bbb" measures 7 > 6, so "aaa" commits and "bbb" starts fresh.
    let lines = wrap("aaa bbb ccc", char_measure, 6.0);
    assert_eq!(lines, vec!["aaa", "bbb", "ccc"]);
}

#[test]
fn pairs_fit_when_width_allows() {
    let lines = wrap("aa bb cc dd", char_measure, 5.0);
    assert_eq!(lines, vec!["aa bb", "cc dd"]);
}

#[test]
fn over_wide_token_is_never_split() {
    let lines = wrap("supercalifragilisticexpialidocious", char_measure, 50.0);
    assert_eq!(lines, vec!["supercalifragilisticexpialidocious"]);

    // Same when the measure makes it overflow massively.
    let lines = wrap("supercalifragilisticexpialidocious", |s| s.len() as f64 * 10.0, 50.0);
    assert_eq!(lines, vec!["supercalifragilisticexpialidocious"]);
}

#[test]
fn over_wide_token_between_words_gets_its_own_line() {
    let lines = wrap("a extraordinarily b", char_measure, 4.0);
    assert_eq!(lines, vec!["a", "extraordinarily", "b"]);
}

#[test]
fn wrapping_preserves_token_order_and_content() {
    let text = "the quick brown fox jumps over the lazy dog";
    let lines = wrap(text, char_measure, 11.0);
    let rejoined = lines.join(" ");
    assert_eq!(rejoined, text);
}

#[test]
fn wrap_is_idempotent_over_rejoined_lines() {
    let text = "pack my box with five dozen liquor jugs";
    for max in [5.0, 9.0, 14.0, 100.0] {
        let once = wrap(text, char_measure, max);
        let again = wrap(&once.join(" "), char_measure, max);
        assert_eq!(once, again, "max_width {max}");
    }
}

#[test]
fn measure_sees_exact_candidate_strings() {
    let mut seen = Vec::new();
    let _ = wrap(
        "ab cd",
        |s| {
            seen.push(s.to_string());
            char_measure(s)
        },
        10.0,
    );
    assert_eq!(seen, vec!["ab", "ab cd"]);
}
