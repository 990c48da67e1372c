use crate::{
    foundation::error::DailyJokeResult,
    text::{measure::TextMeasure, wrap::wrap_text},
};

/// Inputs of the font-size descent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitConstraints {
    pub question_size_start: u32,
    pub answer_size_start: u32,
    /// The descent stops once the question size reaches this value.
    pub min_font_size: u32,
    pub size_step: u32,
    /// Wrap width in pixels.
    pub max_width: f32,
    /// Target height for both blocks plus the gap between them.
    pub max_height: i32,
    pub line_spacing: i32,
    pub block_spacing: i32,
}

/// Wrapped lines of one string at one font size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextBlock {
    pub size: u32,
    pub lines: Vec<String>,
    /// `ascent + descent + line_spacing` at `size`.
    pub line_height: i32,
}

impl TextBlock {
    pub fn height(&self) -> i32 {
        i32::try_from(self.lines.len()).unwrap_or(i32::MAX) * self.line_height
    }
}

/// Sizes and wrapping chosen by [`fit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FitResult {
    pub question: TextBlock,
    pub answer: TextBlock,
    /// Question height + block spacing + answer height.
    pub total_height: i32,
    /// Number of size pairs tried, including the accepted one.
    pub iterations: u32,
}

impl FitResult {
    pub fn question_font_size(&self) -> u32 {
        self.question.size
    }

    pub fn answer_font_size(&self) -> u32 {
        self.answer.size
    }

    /// True when the floor was hit before the blocks fit the target height.
    pub fn overflows(&self, max_height: i32) -> bool {
        self.total_height > max_height
    }
}

/// Shrink both font sizes together until the wrapped blocks fit `max_height`.
///
/// Each round wraps both strings, and accepts when the total height fits or the
/// question size is at the floor; otherwise both sizes drop by `size_step`, so the
/// gap between them is kept. The question is clamped at `min_font_size`, the answer
/// only at 1px. At the floor the layout is accepted even if it still overflows.
#[tracing::instrument(skip(measure, question, answer))]
pub fn fit<M: TextMeasure + ?Sized>(
    measure: &mut M,
    question: &str,
    answer: &str,
    constraints: &FitConstraints,
) -> DailyJokeResult<FitResult> {
    let floor = constraints.min_font_size.max(1);
    let step = constraints.size_step.max(1);
    let mut q_size = constraints.question_size_start.max(floor);
    let mut a_size = constraints.answer_size_start.max(1);
    let mut iterations = 0u32;

    loop {
        iterations += 1;
        let q_block = layout_block(measure, question, q_size, constraints)?;
        let a_block = layout_block(measure, answer, a_size, constraints)?;
        let total_height = q_block.height() + constraints.block_spacing + a_block.height();

        tracing::debug!(q_size, a_size, total_height, "fit iteration");

        if total_height <= constraints.max_height || q_size <= floor {
            return Ok(FitResult {
                question: q_block,
                answer: a_block,
                total_height,
                iterations,
            });
        }

        q_size = q_size.saturating_sub(step).max(floor);
        a_size = a_size.saturating_sub(step).max(1);
    }
}

fn layout_block<M: TextMeasure + ?Sized>(
    measure: &mut M,
    text: &str,
    size: u32,
    constraints: &FitConstraints,
) -> DailyJokeResult<TextBlock> {
    let lines = wrap_text(measure, text, size, constraints.max_width)?;
    let line_height = measure.metrics(size)?.line_height(constraints.line_spacing);
    Ok(TextBlock {
        size,
        lines,
        line_height,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/text/fit.rs"]
mod tests;
