use super::*;
use crate::test_support::MonoMeasure;
use crate::text::measure::TextMeasure;

// At size 10 every char is 5px wide.
const SIZE: u32 = 10;

#[test]
fn text_that_fits_is_one_unchanged_line() {
    let mut m = MonoMeasure::default();
    let text = "Why did the chicken cross the road?";
    let lines = wrap_text(&mut m, text, SIZE, 5.0 * text.len() as f32).unwrap();
    assert_eq!(lines, vec![text.to_string()]);
}

#[test]
fn wraps_greedily_on_spaces() {
    let mut m = MonoMeasure::default();
    // 12 chars max per line.
    let lines = wrap_text(&mut m, "aaa bbb ccc ddd eeeee", SIZE, 60.0).unwrap();
    assert_eq!(lines, vec!["aaa bbb ccc", "ddd eeeee"]);
}

#[test]
fn overlong_word_is_kept_whole_on_its_own_line() {
    let mut m = MonoMeasure::default();
    let lines = wrap_text(&mut m, "supercalifragilistic", SIZE, 30.0).unwrap();
    assert_eq!(lines, vec!["supercalifragilistic"]);

    let lines = wrap_text(&mut m, "a supercalifragilistic b", SIZE, 30.0).unwrap();
    assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
}

#[test]
fn empty_text_yields_no_lines() {
    let mut m = MonoMeasure::default();
    assert!(wrap_text(&mut m, "", SIZE, 100.0).unwrap().is_empty());
}

#[test]
fn consecutive_spaces_are_preserved_as_empty_tokens() {
    let mut m = MonoMeasure::default();
    let lines = wrap_text(&mut m, "ab  cd", SIZE, 100.0).unwrap();
    assert_eq!(lines, vec!["ab  cd"]);
}

#[test]
fn width_limit_is_inclusive() {
    let mut m = MonoMeasure::default();
    // "abc def" is exactly 35px.
    assert_eq!(wrap_text(&mut m, "abc def", SIZE, 35.0).unwrap().len(), 1);
    assert_eq!(wrap_text(&mut m, "abc def", SIZE, 34.9).unwrap().len(), 2);
}

#[test]
fn rewrapping_joined_lines_is_idempotent() {
    let mut m = MonoMeasure::default();
    let text = "How many programmers does it take to change a light bulb? None, that's a hardware problem.";
    for width in [40.0, 75.0, 120.0, 333.0, 1000.0] {
        let first = wrap_text(&mut m, text, SIZE, width).unwrap();
        let second = wrap_text(&mut m, &first.join(" "), SIZE, width).unwrap();
        assert_eq!(first, second, "width={width}");
    }
}

#[test]
fn every_multi_word_line_fits() {
    let mut m = MonoMeasure::default();
    let text = "the quick brown fox jumps over the lazy dog again and again";
    let lines = wrap_text(&mut m, text, 20, 150.0).unwrap();
    for line in &lines {
        assert!(m.text_width(line, 20).unwrap() <= 150.0, "{line}");
    }
    assert_eq!(lines.join(" "), text);
}
