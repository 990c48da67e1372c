use crate::text::fit::{FitResult, TextBlock};

/// Where the text box sits on the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextBoxLayout {
    /// Left edge of the box: image width minus box width.
    pub origin_x: i32,
    pub box_height: i32,
    pub block_spacing: i32,
}

/// One line of text and the top-left corner it is drawn at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedLine {
    pub text: String,
    pub size: u32,
    pub x: i32,
    pub y: i32,
}

/// Lay out the question block, a block gap, then the answer block.
///
/// The stack is centered in the box with floor division, so an overflowing fit
/// starts above the box top (negative `y`).
pub fn place_lines(fit: &FitResult, layout: &TextBoxLayout) -> Vec<PlacedLine> {
    let mut placed = Vec::with_capacity(fit.question.lines.len() + fit.answer.lines.len());
    let mut y = (layout.box_height - fit.total_height).div_euclid(2);

    y = push_block(&mut placed, &fit.question, layout.origin_x, y);
    y += layout.block_spacing;
    push_block(&mut placed, &fit.answer, layout.origin_x, y);

    placed
}

fn push_block(out: &mut Vec<PlacedLine>, block: &TextBlock, x: i32, mut y: i32) -> i32 {
    for line in &block.lines {
        out.push(PlacedLine {
            text: line.clone(),
            size: block.size,
            x,
            y,
        });
        y += block.line_height;
    }
    y
}

#[cfg(test)]
#[path = "../../tests/unit/render/place.rs"]
mod tests;
