use std::path::Path;

use crate::foundation::error::{DailyJokeError, DailyJokeResult};

#[derive(Clone, Debug)]
/// Decoded raster image in premultiplied RGBA8 form.
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Vec<u8>,
}

pub fn decode_background(bytes: &[u8]) -> DailyJokeResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| DailyJokeError::asset(format!("decode background image: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul,
    })
}

#[tracing::instrument]
pub fn load_background(path: &Path) -> DailyJokeResult<PreparedImage> {
    let bytes = std::fs::read(path).map_err(|e| {
        DailyJokeError::asset(format!("read background '{}': {e}", path.display()))
    })?;
    decode_background(&bytes)
}

/// Read raw font bytes; parsing happens when the layout engine registers them.
#[tracing::instrument]
pub fn load_font(path: &Path) -> DailyJokeResult<Vec<u8>> {
    std::fs::read(path)
        .map_err(|e| DailyJokeError::asset(format!("read font '{}': {e}", path.display())))
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
