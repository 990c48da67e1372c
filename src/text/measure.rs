use std::sync::Arc;

use crate::foundation::error::{DailyJokeError, DailyJokeResult};

/// Vertical font metrics for one size, rounded to whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FontMetrics {
    /// Distance from the top of the line box to the baseline.
    pub ascent: i32,
    /// Distance from the baseline to the bottom of the line box.
    pub descent: i32,
}

impl FontMetrics {
    /// Height of one wrapped line including `line_spacing`.
    pub fn line_height(self, line_spacing: i32) -> i32 {
        self.ascent + self.descent + line_spacing
    }
}

/// Width and metric queries the wrapper and fit solver need from a font.
///
/// Sizes are font sizes in pixels.
pub trait TextMeasure {
    fn text_width(&mut self, text: &str, size: u32) -> DailyJokeResult<f32>;

    fn metrics(&mut self, size: u32) -> DailyJokeResult<FontMetrics>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl From<[u8; 4]> for TextBrushRgba8 {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

/// Parley-backed shaper bound to a single font.
///
/// The font is registered once; every layout is built with that family so
/// measuring and drawing agree on glyph advances.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: String,
    font_bytes: Arc<Vec<u8>>,
}

impl std::fmt::Debug for TextLayoutEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextLayoutEngine")
            .field("family_name", &self.family_name)
            .field("font_bytes_len", &self.font_bytes.len())
            .finish()
    }
}

impl TextLayoutEngine {
    /// Register `font_bytes` and resolve its family name.
    pub fn from_font_bytes(font_bytes: Vec<u8>) -> DailyJokeResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| DailyJokeError::asset("no font families registered from font bytes"))?;

        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| DailyJokeError::asset("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font_bytes: Arc::new(font_bytes),
        })
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub fn font_bytes(&self) -> Arc<Vec<u8>> {
        Arc::clone(&self.font_bytes)
    }

    /// Shape `text` as a single unbroken line.
    pub fn layout_line(
        &mut self,
        text: &str,
        size: u32,
        brush: TextBrushRgba8,
    ) -> DailyJokeResult<parley::Layout<TextBrushRgba8>> {
        if size == 0 {
            return Err(DailyJokeError::layout("font size must be > 0"));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size as f32));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

impl TextMeasure for TextLayoutEngine {
    fn text_width(&mut self, text: &str, size: u32) -> DailyJokeResult<f32> {
        if text.is_empty() {
            return Ok(0.0);
        }
        let layout = self.layout_line(text, size, TextBrushRgba8::default())?;
        Ok(layout
            .lines()
            .map(|line| line.metrics().advance)
            .fold(0.0f32, f32::max))
    }

    fn metrics(&mut self, size: u32) -> DailyJokeResult<FontMetrics> {
        let layout = self.layout_line("M", size, TextBrushRgba8::default())?;
        let line = layout
            .lines()
            .next()
            .ok_or_else(|| DailyJokeError::layout("probe layout produced no lines"))?;
        let m = line.metrics();
        Ok(FontMetrics {
            ascent: m.ascent.round() as i32,
            descent: m.descent.round() as i32,
        })
    }
}
