use std::path::Path;

use crate::{
    foundation::error::{DailyJokeError, DailyJokeResult},
    render::{composite::unpremultiply_rgba8_in_place, cpu::FrameRGBA},
};

/// Write `frame` as PNG, replacing any existing file.
///
/// The parent directory is not created; a missing directory is a save error.
#[tracing::instrument(skip(frame), fields(width = frame.width, height = frame.height))]
pub fn write_png(frame: &FrameRGBA, path: &Path) -> DailyJokeResult<()> {
    let expected = (frame.width as usize) * (frame.height as usize) * 4;
    if frame.data.len() != expected {
        return Err(DailyJokeError::save(format!(
            "frame has {} bytes, expected {expected}",
            frame.data.len()
        )));
    }

    let mut straight = frame.data.clone();
    if frame.premultiplied {
        unpremultiply_rgba8_in_place(&mut straight);
    }

    image::save_buffer_with_format(
        path,
        &straight,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| DailyJokeError::save(format!("write png '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
