use crate::{foundation::error::DailyJokeResult, text::measure::TextMeasure};

/// Greedy word wrap on literal spaces.
///
/// Words are appended to the current line while the line still measures at most
/// `max_width`. A word wider than `max_width` is never split: it ends up alone on an
/// over-width line. Empty input yields no lines.
pub fn wrap_text<M: TextMeasure + ?Sized>(
    measure: &mut M,
    text: &str,
    size: u32,
    max_width: f32,
) -> DailyJokeResult<Vec<String>> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if measure.text_width(&candidate, size)? <= max_width {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    Ok(lines)
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
