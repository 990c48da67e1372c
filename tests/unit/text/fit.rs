use super::*;
use crate::test_support::MonoMeasure;

const QUESTION: &str = "Why did the chicken cross the road?";
const ANSWER: &str = "To get to the other side.";

fn production_constraints() -> FitConstraints {
    FitConstraints {
        question_size_start: 64,
        answer_size_start: 44,
        min_font_size: 20,
        size_step: 2,
        max_width: 1140.0,
        max_height: 440,
        line_spacing: 10,
        block_spacing: 24,
    }
}

#[test]
fn short_joke_fits_at_starting_sizes() {
    let mut m = MonoMeasure::default();
    let fit = fit(&mut m, QUESTION, ANSWER, &production_constraints()).unwrap();

    assert_eq!(fit.question_font_size(), 64);
    assert_eq!(fit.answer_font_size(), 44);
    assert_eq!(fit.question.lines, vec![QUESTION]);
    assert_eq!(fit.answer.lines, vec![ANSWER]);
    // (48 + 16 + 10) + 24 + (33 + 11 + 10)
    assert_eq!(fit.total_height, 152);
    assert_eq!(fit.iterations, 1);
    assert!(!fit.overflows(440));
}

#[test]
fn sizes_descend_together_until_the_blocks_fit() {
    let mut m = MonoMeasure::default();
    let constraints = FitConstraints {
        max_height: 100,
        ..production_constraints()
    };
    let fit = fit(&mut m, QUESTION, ANSWER, &constraints).unwrap();

    // q=40/a=20 gives (30 + 10 + 10) + 24 + (15 + 5 + 10) = 104.
    // q=38/a=18 gives (28 + 9 + 10) + 24 + (13 + 4 + 10) = 98.
    assert_eq!(fit.question_font_size(), 38);
    assert_eq!(fit.answer_font_size(), 18);
    assert_eq!(fit.total_height, 98);
    assert_eq!(fit.iterations, 14);
}

#[test]
fn answer_keeps_its_gap_below_the_floor_and_stays_positive() {
    let mut m = MonoMeasure::default();
    let constraints = FitConstraints {
        max_height: 10,
        ..production_constraints()
    };
    let fit = fit(&mut m, QUESTION, ANSWER, &constraints).unwrap();

    assert_eq!(fit.question_font_size(), 20);
    assert_eq!(fit.answer_font_size(), 1);
    assert_eq!(fit.iterations, (64 - 20) / 2 + 1);
    assert!(fit.overflows(10));

    // metrics() is called once for the question, then once for the answer.
    for pair in m.sizes_seen.chunks_exact(2) {
        let (q, a) = (pair[0], pair[1]);
        assert!(q >= 20);
        assert_eq!(a, q.saturating_sub(20).max(1), "q={q}");
    }
}

#[test]
fn uneven_step_is_clamped_at_the_floor() {
    let mut m = MonoMeasure::default();
    let constraints = FitConstraints {
        question_size_start: 25,
        answer_size_start: 21,
        size_step: 3,
        max_height: 0,
        ..production_constraints()
    };
    let fit = fit(&mut m, QUESTION, ANSWER, &constraints).unwrap();

    assert_eq!(fit.question_font_size(), 20);
    assert_eq!(fit.answer_font_size(), 15);
    assert_eq!(fit.iterations, 3);
}

#[test]
fn long_question_wraps_before_shrinking() {
    let mut m = MonoMeasure::default();
    let question = "How many programmers does it take to change a light bulb when the bulb is in the cloud?";
    let fit = fit(&mut m, question, "None.", &production_constraints()).unwrap();

    assert_eq!(fit.question_font_size(), 64);
    assert!(fit.question.lines.len() > 1);
    assert_eq!(fit.question.lines.join(" "), question);
    assert_eq!(
        fit.total_height,
        fit.question.height() + 24 + fit.answer.height()
    );
}

#[test]
fn empty_answer_contributes_only_block_spacing() {
    let mut m = MonoMeasure::default();
    let fit = fit(&mut m, QUESTION, "", &production_constraints()).unwrap();

    assert!(fit.answer.lines.is_empty());
    assert_eq!(fit.answer.height(), 0);
    assert_eq!(fit.total_height, fit.question.height() + 24);
}

#[test]
fn block_height_is_lines_times_line_height() {
    let block = TextBlock {
        size: 40,
        lines: vec!["a".into(), "b".into(), "c".into()],
        line_height: 50,
    };
    assert_eq!(block.height(), 150);
}
